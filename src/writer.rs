use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use crate::parser::extract::fields::Field;
use crate::parser::Spell;
use crate::slug::slugify;

/// Folder name for a spell level under the output root.
pub fn level_folder(level: u8) -> String {
    if level == 0 {
        "nivel_0_trucos".to_string()
    } else {
        format!("nivel_{}", level)
    }
}

/// Write one spell under `root`, creating its level folder as needed.
/// A spell whose level could not be determined is filed with the cantrips,
/// with a warning. An existing file at the target path is overwritten.
pub fn write_spell(spell: &Spell, root: &Path) -> Result<PathBuf> {
    let level = match spell.level {
        Some(level) => level,
        None => {
            warn!(
                "could not determine level for '{}', defaulting to 0",
                spell.name
            );
            0
        }
    };

    let folder = root.join(level_folder(level));
    fs::create_dir_all(&folder).with_context(|| format!("creating {}", folder.display()))?;

    let path = folder.join(format!("{}.md", slugify(&spell.name)));
    fs::write(&path, render(spell, level)).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Render the fixed spell document: title, summary line, separator, one
/// bullet per present field, separator, body.
fn render(spell: &Spell, level: u8) -> String {
    let level_text = if level == 0 {
        "Truco (nivel 0)".to_string()
    } else {
        format!("Nivel {}", level)
    };
    let ritual_text = if spell.ritual { " (ritual)" } else { "" };
    let school_text = spell.school.as_deref().unwrap_or("Desconocida");

    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", spell.name));
    out.push_str(&format!("**{} — {}{}**\n\n", school_text, level_text, ritual_text));
    out.push_str("---\n\n");

    let values = [
        (Field::CastingTime, &spell.casting_time),
        (Field::Range, &spell.range),
        (Field::Components, &spell.components),
        (Field::Duration, &spell.duration),
    ];
    for (field, value) in values {
        if let Some(value) = value {
            out.push_str(&format!("- **{}:** {}\n", field.label(), value));
        }
    }

    out.push_str("\n---\n\n");
    out.push_str(&spell.body);
    out.push('\n');
    out
}
