use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static NON_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());
static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s-]+").unwrap());

/// Turn a spell name into a filesystem-friendly file stem.
///
/// Lowercases, folds accented letters to their ASCII base, and joins the
/// remaining words with underscores: "Bola de Fuego/Ígnea" becomes
/// "bola_de_fuego_ignea". Applying it to its own output changes nothing.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase().trim().replace('/', "_");
    let ascii: String = lowered.nfd().filter(|c| c.is_ascii()).collect();
    let stripped = NON_WORD_RE.replace_all(&ascii, "");
    let joined = SEPARATOR_RE.replace_all(&stripped, "_");
    joined.trim_matches('_').to_string()
}
