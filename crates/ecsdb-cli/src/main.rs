use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ecsdb_core::{Error as CoreError, SchemaLoader};
use ecsdb_store::{SqliteStore, Store, StoreError};
use ecsdb_synth::{synthesize_document, SynthError};

#[derive(Debug, Error)]
enum CliError {
    #[error("schema error: {0}")]
    Core(#[from] CoreError),
    #[error("synthesis error: {0}")]
    Synth(#[from] SynthError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

#[derive(Parser, Debug)]
#[command(name = "ecsdb", version, about = "Entity-component schema compiler")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load, validate, and provision a schema into a store.
    Provision(ProvisionArgs),
    /// Load and validate a schema without touching any store.
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct ProvisionArgs {
    /// Path to the schema document.
    #[arg(long, value_name = "FILE")]
    schema: PathBuf,
    /// Base path of the target store; the schema version is appended.
    #[arg(long, value_name = "PATH", default_value = "ecs.db")]
    store: PathBuf,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Path to the schema document.
    #[arg(long, value_name = "FILE")]
    schema: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Provision(args) => run_provision(args).await,
        Command::Check(args) => run_check(args),
    }
}

async fn run_provision(args: ProvisionArgs) -> Result<(), CliError> {
    let loader = SchemaLoader::builtin();
    let document = ecsdb_core::init_document(&args.schema, &loader)?;
    info!(version = %document.version, components = document.schema.components.len(), "schema validated");

    let tables = synthesize_document(&document)?;
    info!(tables = tables.len(), "storage schema synthesized");

    let store = SqliteStore::connect(&args.store, &document.version).await?;
    store.apply(&tables).await?;
    store.register_schema(&document).await?;
    store.close().await;
    info!("store provisioned");

    Ok(())
}

fn run_check(args: CheckArgs) -> Result<(), CliError> {
    let loader = SchemaLoader::builtin();
    let document = ecsdb_core::init_document(&args.schema, &loader)?;
    info!(
        version = %document.version,
        components = document.schema.components.len(),
        entities = document.schema.entities.len(),
        "schema is valid"
    );
    Ok(())
}
