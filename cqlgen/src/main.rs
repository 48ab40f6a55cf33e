//! cqlgen command-line entry point.

use anyhow::Context;
use clap::Parser;
use cqlgen::pipeline;
use cqlgen::sink::{DirectorySink, Sink};
use cqlgen_catalog::CatalogBuilder;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Generate serde-tagged Rust structs from a ScyllaDB keyspace schema.
#[derive(Debug, Parser)]
#[command(name = "cqlgen", version, about)]
struct Args {
    /// Catalog host address
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Catalog native protocol port
    #[arg(long, default_value_t = 9042)]
    port: u16,

    /// Keyspace to introspect
    #[arg(long)]
    keyspace: String,

    /// Directory generated modules are written to
    #[arg(long, default_value = "./outputs")]
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = try_main(args).await {
        tracing::error!("{:#}", e);
        process::exit(1);
    }
}

async fn try_main(args: Args) -> anyhow::Result<()> {
    let catalog = CatalogBuilder::new(args.host)
        .port(args.port)
        .connect()
        .await
        .context("could not connect to the schema catalog")?;

    let unit = pipeline::generate_keyspace(&catalog, &args.keyspace)
        .await
        .context("failed to read the keyspace schema")?;

    let sink = DirectorySink::new(&args.output_dir);
    sink.write(&unit.keyspace, &unit.content)
        .context("failed to write generated module")?;

    tracing::info!("Wrote {}", sink.unit_path(&unit.keyspace).display());
    print!("{}", unit.report);

    Ok(())
}
