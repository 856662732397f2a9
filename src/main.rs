mod commands;
mod logging;

use clap::{Parser, Subcommand};
use keytexts_core::config;
use keytexts_resolver::TextsSet;
use keytexts_tables::TextCatalog;

#[derive(Parser)]
#[command(
    name = "keytexts",
    version,
    about = "Keyboard label tables with !text/ reference resolution"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "keytexts.toml")]
    config: String,

    /// Locale to bind, e.g. `hi_IN`. Defaults to the config file's locale.
    #[arg(short, long)]
    locale: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand `!text/` references in one or more templates.
    Resolve {
        #[arg(required = true)]
        templates: Vec<String>,
    },
    /// Print the raw text for a name, before expansion.
    Get {
        /// Text name, e.g. `more_keys_for_a`.
        name: String,
    },
    /// List registered names with their ids.
    Names,
    /// List locales that have a table.
    Locales,
    /// Print every name with its expanded text for the bound locale.
    Dump {
        /// Emit a JSON object instead of lines.
        #[arg(long)]
        json: bool,
    },
    /// Expand every table slot and report cycles and dangling references.
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let logging = logging::Logging::init()?;
    let cfg = config::load(&cli.config)?;
    logging.apply_config(&cfg.keytexts.log_level)?;
    tracing::debug!("config: {}, locale: {}", cli.config, cfg.keytexts.locale);

    let catalog = TextCatalog::builtin();
    let bind = || -> anyhow::Result<TextsSet> {
        let provider = commands::build_provider(&cfg)?;
        let requested = cli.locale.as_deref().unwrap_or(&cfg.keytexts.locale);
        Ok(TextsSet::bind_negotiated(catalog.clone(), requested, &provider))
    };

    match &cli.command {
        Commands::Resolve { templates } => {
            print!("{}", commands::resolve_templates(&bind()?, templates)?);
        }
        Commands::Get { name } => {
            print!("{}", commands::raw_text(&bind()?, name)?);
        }
        Commands::Names => print!("{}", commands::list_names(&catalog)?),
        Commands::Locales => print!("{}", commands::list_locales(&catalog)?),
        Commands::Dump { json } => {
            print!("{}", commands::dump(&bind()?, *json)?);
        }
        Commands::Check => {
            let (output, clean) = commands::check(&catalog)?;
            print!("{output}");
            if !clean {
                anyhow::bail!("keyboard text tables have problems");
            }
        }
    }

    Ok(())
}
