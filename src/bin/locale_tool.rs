//! Locale file maintenance tool
//!
//! Converts locale files between JSON and YAML, synchronises JSON/YAML pairs
//! and audits a locale tree for missing keys and untranslated text.

use std::path::PathBuf;
use anyhow::Context;
use clap::{Parser, Subcommand};
use polyglot::config::Settings;
use polyglot::tools::{self, SyncPreference};

#[derive(Parser)]
#[command(name = "locale-tool", version, about = "Locale file conversion and audits")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file providing audit defaults (extension optional).
    #[arg(short, long, default_value = "config")]
    config: String,

    /// Print audit reports as JSON.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a JSON locale file to YAML.
    JsonToYaml { src: PathBuf, dst: PathBuf },
    /// Convert a YAML locale file to pretty JSON.
    YamlToJson { src: PathBuf, dst: PathBuf },
    /// Merge a JSON/YAML pair and write the result to both files.
    Sync {
        json_file: PathBuf,
        yaml_file: PathBuf,
        /// Side that wins when both files define a key.
        #[arg(long, value_enum, default_value_t = SyncPreference::Yaml)]
        prefer: SyncPreference,
    },
    /// Report keys missing from or extra to each translation.
    CheckKeys {
        #[arg(long)]
        root: Option<PathBuf>,
        #[arg(long)]
        reference: Option<String>,
    },
    /// Report translations identical or suspiciously similar to the reference.
    CheckSimilar {
        #[arg(long)]
        root: Option<PathBuf>,
        #[arg(long)]
        reference: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::from_file(&cli.config)
        .with_context(|| format!("failed to load configuration '{}'", cli.config))?;
    polyglot::config::validation::validate_audit_config(&settings.audit)?;

    match cli.command {
        Commands::JsonToYaml { src, dst } => {
            tools::json_to_yaml(&src, &dst)?;
            println!("✅ {} → {}", src.display(), dst.display());
        }
        Commands::YamlToJson { src, dst } => {
            tools::yaml_to_json(&src, &dst)?;
            println!("✅ {} → {}", src.display(), dst.display());
        }
        Commands::Sync { json_file, yaml_file, prefer } => {
            let merged = tools::sync_pair(&json_file, &yaml_file, prefer)?;
            println!(
                "✅ Synchronised {} and {} ({} keys)",
                json_file.display(),
                yaml_file.display(),
                merged.len()
            );
        }
        Commands::CheckKeys { root, reference } => {
            let root = root.unwrap_or_else(|| PathBuf::from(&settings.i18n.locale_dir));
            let reference = reference.unwrap_or_else(|| settings.audit.reference_locale.clone());
            let reports = tools::audit_keys(&root, &reference)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                print!("{}", tools::render_key_report(&reports, &reference));
            }
        }
        Commands::CheckSimilar { root, reference } => {
            let root = root.unwrap_or_else(|| PathBuf::from(&settings.i18n.locale_dir));
            let mut audit = settings.audit.clone();
            if let Some(reference) = reference {
                audit.reference_locale = reference;
            }
            let reports = tools::audit_similarity(&root, &audit)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                print!("{}", tools::render_similarity_report(&reports, &audit.reference_locale));
            }
        }
    }

    Ok(())
}
