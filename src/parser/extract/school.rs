use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// The eight schools of magic, spelled the way the manual prints them.
pub const SCHOOLS: &[&str] = &[
    "Abjuración",
    "Conjuración",
    "Adivinación",
    "Encantamiento",
    "Evocación",
    "Ilusión",
    "Nigromancia",
    "Transmutación",
];

static LEVEL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"nivel\s+(\d+)").unwrap());
static SHAPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]\w+\s+(nivel|\(truco)").unwrap());
static FIRST_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\w+)").unwrap());

/// What a category line says about its spell: `_Evocación nivel 2 (ritual)_`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchoolLine {
    pub school: Option<String>,
    pub level: Option<u8>,
    pub ritual: bool,
}

/// Classification rules, tried in order; the first match wins. Each rule
/// judges a single normalized line on its own.
const RULES: &[(&str, fn(&str) -> Option<SchoolLine>)] = &[
    ("known-school", match_known_school),
    ("capitalized-shape", match_capitalized_shape),
];

/// The line opens with one of the eight school names.
fn match_known_school(text: &str) -> Option<SchoolLine> {
    if !has_level_phrase(text) {
        return None;
    }
    let lower = text.to_lowercase();
    let school = SCHOOLS.iter().find(|s| lower.starts_with(&s.to_lowercase()))?;
    Some(parse_line(text, Some((*school).to_string())))
}

/// A capitalized word directly followed by a level phrase; catches school
/// names the manual spells differently than expected.
fn match_capitalized_shape(text: &str) -> Option<SchoolLine> {
    if !has_level_phrase(text) || !SHAPE_RE.is_match(text) {
        return None;
    }
    Some(parse_line(text, None))
}

fn has_level_phrase(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("truco") || LEVEL_RE.is_match(&lower)
}

/// Level, ritual flag and (when not already known) school name, read off a
/// line a rule has accepted. "truco" always means level 0, even when a
/// level number is also present.
fn parse_line(text: &str, school: Option<String>) -> SchoolLine {
    let lower = text.to_lowercase();
    let level = if lower.contains("truco") {
        Some(0)
    } else {
        LEVEL_RE.captures(&lower).and_then(|caps| caps[1].parse().ok())
    };
    SchoolLine {
        school: school.or_else(|| FIRST_WORD_RE.captures(text).map(|caps| caps[1].to_string())),
        level,
        ritual: lower.contains("ritual"),
    }
}

/// Run the rule chain over one normalized line.
pub fn classify_line(text: &str) -> Option<SchoolLine> {
    for (rule, matcher) in RULES {
        if let Some(found) = matcher(text) {
            debug!(rule, line = text, "category line matched");
            return Some(found);
        }
    }
    None
}

/// Scan an entry's lines in order and classify the first one any rule
/// accepts. Lines are trimmed and stripped of `_` emphasis first.
pub fn find_school_line(lines: &[String]) -> Option<SchoolLine> {
    lines
        .iter()
        .map(|line| line.trim().trim_matches('_'))
        .filter(|text| !text.is_empty())
        .find_map(classify_line)
}
