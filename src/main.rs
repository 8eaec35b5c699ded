mod config;
mod manual;
mod parser;
mod slug;
mod writer;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};

use config::Config;
use parser::Spell;

#[derive(Parser)]
#[command(name = "spell_extractor", about = "Split the manual's spell section into per-spell files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract spells and write one file per spell, grouped by level
    Extract {
        /// Path to the manual markdown
        #[arg(short, long, default_value = config::DEFAULT_MANUAL)]
        manual: PathBuf,
        /// Output root for the generated files
        #[arg(short, long, default_value = config::DEFAULT_OUTPUT)]
        output: PathBuf,
    },
    /// Parse the manual and show what would be written, without writing
    Scan {
        /// Path to the manual markdown
        #[arg(short, long, default_value = config::DEFAULT_MANUAL)]
        manual: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract { manual, output } => {
            let cfg = Config {
                manual_path: manual,
                output_root: output,
            };
            let spells = load_spells(&cfg)?;
            if spells.is_empty() {
                println!("No spells found between the section markers.");
                return Ok(());
            }
            LevelCounts::tally(&spells).print();

            println!("\nWriting files under {}...", cfg.output_root.display());
            let written = write_files(&spells, &cfg.output_root)?;
            println!("Created {} spell files.", written);
            Ok(())
        }
        Commands::Scan { manual } => {
            let cfg = Config {
                manual_path: manual,
                ..Config::default()
            };
            let spells = load_spells(&cfg)?;
            if spells.is_empty() {
                println!("No spells found between the section markers.");
                return Ok(());
            }

            println!(
                "{:>3} | {:<26} | {:<14} | {:>5} | {:<6} | {}",
                "#", "Spell", "School", "Level", "Ritual", "File"
            );
            println!("{}", "-".repeat(92));

            for (i, spell) in spells.iter().enumerate() {
                let school = spell.school.as_deref().unwrap_or("-");
                let level = match spell.level {
                    Some(0) => "truco".to_string(),
                    Some(n) => n.to_string(),
                    None => "?".to_string(),
                };
                let ritual = if spell.ritual { "yes" } else { "" };
                let file = format!(
                    "{}/{}.md",
                    writer::level_folder(spell.level.unwrap_or(0)),
                    slug::slugify(&spell.name)
                );

                println!(
                    "{:>3} | {:<26} | {:<14} | {:>5} | {:<6} | {}",
                    i + 1,
                    truncate(&spell.name, 26),
                    truncate(school, 14),
                    level,
                    ritual,
                    file
                );
            }

            LevelCounts::tally(&spells).print();
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn load_spells(cfg: &Config) -> anyhow::Result<Vec<Spell>> {
    println!("Reading {}...", cfg.manual_path.display());
    let lines = manual::load_lines(&cfg.manual_path)?;
    let range = manual::locate_section(&lines, manual::SECTION_START, manual::SECTION_END)?;
    let spells = parser::parse_section(&lines[range]);
    println!("Found {} spells.", spells.len());
    Ok(spells)
}

fn write_files(spells: &[Spell], root: &Path) -> anyhow::Result<usize> {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(spells.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap()
            .progress_chars("#>-"),
    );

    for spell in spells {
        let path = writer::write_spell(spell, root)?;
        pb.println(format!("  {}", path.display()));
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(spells.len())
}

struct LevelCounts {
    by_level: BTreeMap<u8, usize>,
    undetermined: usize,
}

impl LevelCounts {
    fn tally(spells: &[Spell]) -> Self {
        let mut by_level = BTreeMap::new();
        let mut undetermined = 0;
        for spell in spells {
            match spell.level {
                Some(level) => *by_level.entry(level).or_insert(0) += 1,
                None => undetermined += 1,
            }
        }
        LevelCounts { by_level, undetermined }
    }

    fn print(&self) {
        println!("\nSpells per level:");
        for (level, count) in &self.by_level {
            if *level == 0 {
                println!("  trucos (nivel 0): {}", count);
            } else {
                println!("  nivel {}: {}", level, count);
            }
        }
        if self.undetermined > 0 {
            println!("  undetermined: {}", self.undetermined);
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
