use anyhow::{Context, Result};
use clap::Parser;
use skipslicer::{run, write_outputs, RawTable, SlicerConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Split DirectSkip contacts joined to Land Portal parcels into RooR and RM dialer files"
)]
struct Args {
    /// DirectSkip contact export
    #[arg(long)]
    contacts: PathBuf,
    /// Land Portal property export
    #[arg(long)]
    properties: PathBuf,
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// YAML file overriding output names / empty-output policy
    #[arg(long)]
    config: Option<PathBuf>,
    /// Also write run statistics as JSON
    #[arg(long)]
    stats_json: Option<PathBuf>,
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,skipslicer=info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // ─── 2) config ───────────────────────────────────────────────────
    let config = match &args.config {
        Some(path) => SlicerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SlicerConfig::default(),
    };

    // ─── 3) load inputs ──────────────────────────────────────────────
    let contacts = RawTable::load(&args.contacts)
        .with_context(|| format!("reading DirectSkip file {}", args.contacts.display()))?;
    let properties = RawTable::load(&args.properties)
        .with_context(|| format!("reading Land Portal file {}", args.properties.display()))?;

    // ─── 4) join + classify + project ────────────────────────────────
    let output = run(&contacts, &properties).context("processing files")?;

    // ─── 5) write outputs ────────────────────────────────────────────
    let written = write_outputs(&output, &args.out_dir, &config).context("writing outputs")?;

    // ─── 6) stats ────────────────────────────────────────────────────
    output.stats.log();
    if let Some(path) = &args.stats_json {
        output
            .stats
            .write_json(path)
            .with_context(|| format!("writing stats {}", path.display()))?;
    }

    info!(files = written.len(), "all done");
    Ok(())
}
