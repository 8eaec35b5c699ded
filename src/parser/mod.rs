pub mod extract;
pub mod split;

pub use extract::Spell;

/// Two-pass pipeline over the bounded section: split the lines into
/// per-spell chunks, then parse each chunk into a record. Document order
/// is preserved.
pub fn parse_section(lines: &[String]) -> Vec<Spell> {
    split::entries(lines).map(extract::parse_spell).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manual;

    fn fixture_section() -> Vec<String> {
        let text = std::fs::read_to_string("tests/fixtures/manual.md").unwrap();
        let lines: Vec<String> = text.lines().map(|l| l.to_string()).collect();
        let range = manual::locate_section(&lines, manual::SECTION_START, manual::SECTION_END).unwrap();
        lines[range].to_vec()
    }

    #[test]
    fn fixture_yields_one_spell_per_non_excluded_heading() {
        let section = fixture_section();
        let headings = section
            .iter()
            .filter(|l| split::heading_name(l).is_some())
            .count();
        let spells = parse_section(&section);
        assert_eq!(headings, 7);
        assert_eq!(spells.len(), 5);
    }

    #[test]
    fn fixture_spells_come_out_in_document_order() {
        let spells = parse_section(&fixture_section());
        let names: Vec<&str> = spells.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            ["Alarma", "Bola de fuego", "Controlar el clima", "Luz", "Zancada prodigiosa"]
        );
    }

    #[test]
    fn fixture_levels_and_rituals() {
        let spells = parse_section(&fixture_section());
        let brief: Vec<(Option<u8>, bool)> = spells.iter().map(|s| (s.level, s.ritual)).collect();
        assert_eq!(
            brief,
            [
                (Some(1), true),
                (Some(3), false),
                (Some(8), false),
                (Some(0), false),
                (None, false),
            ]
        );
    }

    #[test]
    fn fixture_fenced_entry_parses_like_any_other() {
        let spells = parse_section(&fixture_section());
        let bola = &spells[1];
        assert_eq!(bola.school.as_deref(), Some("Evocación"));
        assert_eq!(bola.casting_time.as_deref(), Some("1 acción"));
        assert_eq!(bola.range.as_deref(), Some("45 metros"));
        assert!(!bola.body.contains("```"));
        assert!(!bola.body.contains("Tienes permiso para imprimir"));
        assert!(bola.body.contains("A niveles superiores."));
    }

    #[test]
    fn fixture_excluded_subheadings_land_in_previous_body() {
        let spells = parse_section(&fixture_section());
        let clima = &spells[2];
        assert_eq!(clima.name, "Controlar el clima");
        assert!(clima.body.contains("##### Temperatura"));
        assert!(clima.body.contains("##### Viento"));
    }

    #[test]
    fn fixture_spell_without_category_line_is_still_emitted() {
        let spells = parse_section(&fixture_section());
        let zancada = &spells[4];
        assert_eq!(zancada.level, None);
        assert_eq!(zancada.school, None);
        assert_eq!(zancada.body, "Tu velocidad aumenta en 3 metros hasta que el conjuro termine.");
    }

    #[test]
    fn empty_section_yields_no_spells() {
        assert!(parse_section(&[]).is_empty());
    }
}
