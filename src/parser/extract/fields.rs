use std::sync::LazyLock;

use regex::Regex;

/// The four labeled metadata fields a spell entry may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CastingTime,
    Range,
    Components,
    Duration,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::CastingTime,
        Field::Range,
        Field::Components,
        Field::Duration,
    ];

    /// Label as printed in the output template.
    pub fn label(self) -> &'static str {
        match self {
            Field::CastingTime => "Tiempo de lanzamiento",
            Field::Range => "Alcance",
            Field::Components => "Componentes",
            Field::Duration => "Duración",
        }
    }

    /// Label pattern as found in the manual; a few entries carry the
    /// component label in the singular.
    fn pattern(self) -> &'static str {
        match self {
            Field::Components => "Componentes?",
            other => other.label(),
        }
    }
}

/// One matcher per field: `**Label:** value` with every piece of emphasis
/// optional and the value running to the end of the line.
static MATCHERS: LazyLock<Vec<(Field, Regex)>> = LazyLock::new(|| {
    Field::ALL
        .into_iter()
        .map(|field| {
            let pattern = format!(r"\*?\*?{}:?\*?\*?\s*(.*)", field.pattern());
            (field, Regex::new(&pattern).unwrap())
        })
        .collect()
});

fn matcher(field: Field) -> &'static Regex {
    MATCHERS
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, re)| re)
        .unwrap()
}

/// Value of the first line carrying `field`'s label, trimmed and with any
/// trailing emphasis stripped. Absent labels and empty values are both
/// `None`; a first match with an empty value still shadows later lines.
pub fn extract_field(lines: &[String], field: Field) -> Option<String> {
    let re = matcher(field);
    lines
        .iter()
        .find_map(|line| {
            let caps = re.captures(line.trim())?;
            Some(caps[1].trim().trim_end_matches('*').to_string())
        })
        .filter(|value| !value.is_empty())
}

/// Offset of the first body line: just past the last line that mentions the
/// duration label, or 0 when no line does.
pub fn body_offset(lines: &[String]) -> usize {
    lines
        .iter()
        .rposition(|line| line.contains(Field::Duration.label()))
        .map(|i| i + 1)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(|l| l.to_string()).collect()
    }

    #[test]
    fn plain_label() {
        let entry = lines("Alcance: 18 metros");
        assert_eq!(extract_field(&entry, Field::Range).as_deref(), Some("18 metros"));
    }

    #[test]
    fn bold_label() {
        let entry = lines("**Tiempo de lanzamiento:** 1 acción");
        assert_eq!(
            extract_field(&entry, Field::CastingTime).as_deref(),
            Some("1 acción")
        );
    }

    #[test]
    fn bulleted_bold_label() {
        let entry = lines("- **Duración:** Concentración, hasta 1 minuto");
        assert_eq!(
            extract_field(&entry, Field::Duration).as_deref(),
            Some("Concentración, hasta 1 minuto")
        );
    }

    #[test]
    fn trailing_emphasis_is_stripped() {
        let entry = lines("**Alcance:** 9 metros**");
        assert_eq!(extract_field(&entry, Field::Range).as_deref(), Some("9 metros"));
    }

    #[test]
    fn singular_component_label_matches() {
        let entry = lines("**Componente:** V");
        assert_eq!(extract_field(&entry, Field::Components).as_deref(), Some("V"));
    }

    #[test]
    fn first_occurrence_wins() {
        let entry = lines("Alcance: 9 metros\nAlcance: 18 metros");
        assert_eq!(extract_field(&entry, Field::Range).as_deref(), Some("9 metros"));
    }

    #[test]
    fn absent_label_is_none() {
        let entry = lines("solo prosa");
        assert_eq!(extract_field(&entry, Field::Range), None);
        assert_eq!(extract_field(&entry, Field::Duration), None);
    }

    #[test]
    fn empty_value_counts_as_absent() {
        let entry = lines("**Duración:**");
        assert_eq!(extract_field(&entry, Field::Duration), None);
    }

    #[test]
    fn empty_first_match_shadows_later_lines() {
        let entry = lines("**Alcance:**\nAlcance: 9 metros");
        assert_eq!(extract_field(&entry, Field::Range), None);
    }

    #[test]
    fn body_starts_after_last_duration_line() {
        let entry = lines("**Duración:** 1 hora\nprimera\n**Duración:** repetida\ncuerpo");
        assert_eq!(body_offset(&entry), 3);
    }

    #[test]
    fn body_offset_without_duration_is_zero() {
        let entry = lines("sin etiqueta\nsolo prosa");
        assert_eq!(body_offset(&entry), 0);
    }
}
