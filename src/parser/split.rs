use std::sync::LazyLock;

use regex::Regex;

/// `##### Nombre` opens a new spell entry.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{5}\s+(.+)$").unwrap());

/// Depth-five headings that are sub-sections of the spell above them,
/// not spells of their own.
const NOT_SPELLS: &[&str] = &[
    "Perfil de un objeto animado",
    "Precipitaciones",
    "Temperatura",
    "Viento",
];

/// One spell's heading name plus the raw lines of its chunk, heading
/// included, up to the next spell heading.
#[derive(Debug, Clone)]
pub struct RawEntry<'a> {
    pub name: String,
    pub lines: &'a [String],
}

/// Capture the heading name if `line` is a depth-five heading.
pub fn heading_name(line: &str) -> Option<&str> {
    let caps = HEADING_RE.captures(line.trim())?;
    Some(caps.get(1)?.as_str().trim())
}

fn starts_entry(line: &str) -> bool {
    match heading_name(line) {
        Some(name) => !NOT_SPELLS.contains(&name),
        None => false,
    }
}

/// Lazily split the bounded section into per-spell chunks. Single forward
/// pass; lines before the first heading are dropped, and excluded headings
/// stay inside the entry they interrupt.
pub fn entries(lines: &[String]) -> Entries<'_> {
    Entries { lines, pos: 0 }
}

pub struct Entries<'a> {
    lines: &'a [String],
    pos: usize,
}

impl<'a> Iterator for Entries<'a> {
    type Item = RawEntry<'a>;

    fn next(&mut self) -> Option<RawEntry<'a>> {
        let (start, name) = loop {
            let line = self.lines.get(self.pos)?;
            if let Some(name) = heading_name(line) {
                if !NOT_SPELLS.contains(&name) {
                    break (self.pos, name.to_string());
                }
            }
            self.pos += 1;
        };

        let mut end = start + 1;
        while end < self.lines.len() && !starts_entry(&self.lines[end]) {
            end += 1;
        }

        self.pos = end;
        Some(RawEntry {
            name,
            lines: &self.lines[start..end],
        })
    }
}
