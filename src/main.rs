use clap::{Parser, Subcommand};
use docsite::export::{self, ExportFormat};
use docsite::{config, lint, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docsite")]
#[command(about = "Site descriptor for a static documentation generator")]
#[command(long_about = "\
Site descriptor for a static documentation generator

The descriptor (title, description, base path, repository, top nav and
sidebar) is compiled into this binary. A config.toml in the source
directory overrides any part of it:

  docs/
  ├── config.toml        # Optional overrides (arrays replace wholesale)
  ├── index.md           # → /
  ├── initial/index.md   # → /initial/
  └── css/index.md       # → /css/

Every link resolves to the index document of a directory, and entries are
rendered in the order they are declared.

Run 'docsite gen-config' to print the embedded descriptor.")]
#[command(version)]
struct Cli {
    /// Directory holding an optional config.toml override
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved descriptor
    Show,
    /// Validate the descriptor and report navigation warnings
    Check {
        /// Docs root to check links against (missing pages, orphans)
        #[arg(long)]
        docs: Option<PathBuf>,
    },
    /// Write the descriptor in the generator's config format
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Output file (stdout if omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the embedded descriptor with comments
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Show => {
            let site = config::load_config(&cli.source)?;
            output::print_config(&site);
        }
        Command::Check { docs } => {
            println!("==> Checking descriptor (overrides from {})", cli.source.display());
            let site = config::load_config(&cli.source)?;
            let mut warnings = lint::lint(&site);
            if let Some(docs) = &docs {
                println!("==> Checking links against {}", docs.display());
                warnings.extend(lint::lint_docs(&site, docs)?);
            }
            output::print_warnings(&warnings);
            if warnings.is_empty() {
                println!("==> Configuration is valid");
            } else {
                println!(
                    "==> Configuration is valid ({} warning{})",
                    warnings.len(),
                    if warnings.len() == 1 { "" } else { "s" }
                );
            }
        }
        Command::Export { format, output: dest } => {
            let site = config::load_config(&cli.source)?;
            let rendered = export::render(&site, format)?;
            match dest {
                Some(path) => {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, rendered)?;
                    println!("==> Wrote {}", path.display());
                }
                None => print!("{}", rendered),
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
