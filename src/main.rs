use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wxdocset::config::{DEFAULT_DOC_BASE, DEFAULT_ICON, DEFAULT_NAME, DEFAULT_OUTPATH};
use wxdocset::{docset, DocsetConfig};

#[derive(Parser)]
#[command(name = "wxdocset")]
#[command(about = "Build a Dash/Zeal docset from the WeChat mini-program documentation")]
struct Cli {
    /// Root of the downloaded documentation site
    #[arg(short, long, env = "WXDOCSET_DOC_BASE", default_value = DEFAULT_DOC_BASE)]
    doc_base: PathBuf,

    /// Docset name, used as bundle identifier and output directory stem
    #[arg(short, long, env = "WXDOCSET_NAME", default_value = DEFAULT_NAME)]
    name: String,

    /// Icon copied into the docset
    #[arg(short, long, env = "WXDOCSET_ICON", default_value = DEFAULT_ICON)]
    icon: PathBuf,

    /// Directory in which <name>.docset is created
    #[arg(short, long, env = "WXDOCSET_OUTPATH", default_value = DEFAULT_OUTPATH)]
    outpath: PathBuf,
}

impl From<Cli> for DocsetConfig {
    fn from(cli: Cli) -> Self {
        Self {
            doc_base: cli.doc_base,
            name: cli.name,
            icon: cli.icon,
            outpath: cli.outpath,
        }
    }
}

/// Initialize tracing with output to stderr
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "wxdocset=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = DocsetConfig::from(cli);
    let report = docset::build(&config)
        .with_context(|| format!("Failed to build docset {}", config.name))?;

    tracing::info!(
        "Built {}: {} files, {} sections indexed, {} skipped",
        report.paths.root.display(),
        report.files_copied,
        report.index.inserted(),
        report.index.skipped()
    );

    Ok(())
}
