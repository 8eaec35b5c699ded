use std::path::PathBuf;

pub const DEFAULT_MANUAL: &str = "docs/manual.md";
pub const DEFAULT_OUTPUT: &str = "docs/conjuros";

/// Input and output locations for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub manual_path: PathBuf,
    pub output_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            manual_path: PathBuf::from(DEFAULT_MANUAL),
            output_root: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}
