use bibdex_core::{AttributeKind, Config};
use bibdex_processor::{io::load_documents, Catalog, GeneratedIndex};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and print index pages
    Index {
        /// Path to the records file (YAML/JSON)
        records: PathBuf,

        /// Only print the index for this kind (e.g. tag, authors, pubindex)
        #[arg(short, long)]
        kind: Option<AttributeKind>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Plain)]
        format: Format,
    },
    /// List registered entries
    Entries {
        /// Path to the records file (YAML/JSON)
        records: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Plain)]
        format: Format,
    },
    /// Resolve a single reference
    Resolve {
        /// Path to the records file (YAML/JSON)
        records: PathBuf,

        /// Reference role: tag, author, publisher, journal, institution, series, ref or doi
        role: String,

        /// Reference target
        target: String,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Format {
    Plain,
    Json,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Plain => write!(f, "plain"),
            Format::Json => write!(f, "json"),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error reading config: {}", e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    match cli.command {
        Commands::Index {
            records,
            kind,
            format,
        } => {
            let catalog = build_catalog(config, &records);
            let indices: Vec<GeneratedIndex> = catalog
                .generate_indices()
                .into_iter()
                .filter(|g| kind.map_or(true, |k| g.page.kind == k))
                .collect();

            match format {
                Format::Json => print_json(&indices),
                Format::Plain => {
                    for generated in &indices {
                        print!("{}", render_index(generated));
                    }
                }
            }
        }
        Commands::Entries { records, format } => {
            let catalog = build_catalog(config, &records);
            let entries = catalog.get_entries();
            match format {
                Format::Json => print_json(&entries),
                Format::Plain => {
                    for entry in entries {
                        println!(
                            "{}\t{}#{}",
                            entry.signature, entry.source_document, entry.anchor
                        );
                    }
                }
            }
        }
        Commands::Resolve {
            records,
            role,
            target,
        } => {
            let catalog = build_catalog(config, &records);
            match catalog.resolver().resolve_role(&role, &target) {
                Ok(resolution) => print_json(&resolution),
                Err(e) => {
                    eprintln!("Unresolved reference: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

fn build_catalog(config: Config, records: &Path) -> Catalog {
    let documents = match load_documents(records) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let mut catalog = Catalog::new(config);
    catalog.begin_build();
    catalog.ingest_documents(&documents);
    let dangling = catalog.check_crossrefs();
    tracing::info!(
        documents = documents.len(),
        entries = catalog.registry().len(),
        dangling_crossrefs = dangling.len(),
        "catalog built"
    );
    catalog
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            std::process::exit(1);
        }
    }
}

/// Plain-text rendering of one index page.
fn render_index(generated: &GeneratedIndex) -> String {
    let mut out = format!("{} ({})\n", generated.page.title, generated.page_id);
    if generated.content.is_empty() {
        out.push_str("  (empty)\n");
    }
    for bucket in &generated.content.buckets {
        out.push_str(&format!("  [{}] #{}\n", bucket.letter, bucket.anchor()));
        for row in &bucket.rows {
            if row.is_heading() {
                out.push_str(&format!("    {}\n", row.label));
            } else {
                out.push_str(&format!(
                    "      {}  {}#{}\n",
                    row.label, row.source_document, row.anchor
                ));
            }
        }
    }
    out.push('\n');
    out
}
