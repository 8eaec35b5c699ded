pub mod fields;
pub mod school;

use fields::Field;

use super::split::{heading_name, RawEntry};

/// Lines dropped wholesale before parsing: print-edition boilerplate left
/// scattered through the section.
const NOISE_PHRASES: &[&str] = &["Prohibida la reventa", "Tienes permiso para imprimir"];

/// One parsed spell, ready to be written.
#[derive(Debug, Clone)]
pub struct Spell {
    pub name: String,
    pub level: Option<u8>,
    pub school: Option<String>,
    pub ritual: bool,
    pub casting_time: Option<String>,
    pub range: Option<String>,
    pub components: Option<String>,
    pub duration: Option<String>,
    pub body: String,
}

/// Parse one raw entry into a structured record. Never fails: each field
/// degrades to absent on its own, and without a duration line the body
/// falls back to the whole cleaned text.
pub fn parse_spell(entry: RawEntry<'_>) -> Spell {
    let lines = clean_lines(entry.lines);
    let head = school::find_school_line(&lines).unwrap_or_default();

    let body_lines = trim_blank_edges(&lines[fields::body_offset(&lines)..]);
    let body = body_lines.join("\n");

    Spell {
        name: entry.name,
        level: head.level,
        school: head.school,
        ritual: head.ritual,
        casting_time: fields::extract_field(&lines, Field::CastingTime),
        range: fields::extract_field(&lines, Field::Range),
        components: fields::extract_field(&lines, Field::Components),
        duration: fields::extract_field(&lines, Field::Duration),
        body,
    }
}

/// Drop boilerplate and pure code-fence lines, then the entry's own heading.
/// Only the first heading goes; excluded sub-headings stay in the body.
fn clean_lines(raw: &[String]) -> Vec<String> {
    let mut heading_dropped = false;
    raw.iter()
        .filter(|line| !is_noise(line))
        .filter(|line| {
            if !heading_dropped && heading_name(line).is_some() {
                heading_dropped = true;
                return false;
            }
            true
        })
        .cloned()
        .collect()
}

fn is_noise(line: &str) -> bool {
    line.trim() == "```" || NOISE_PHRASES.iter().any(|phrase| line.contains(phrase))
}

/// Slice with leading and trailing blank lines removed; interior blanks stay.
fn trim_blank_edges(lines: &[String]) -> &[String] {
    let start = lines
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(start, |i| i + 1);
    &lines[start..end]
}
