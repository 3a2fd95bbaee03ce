//! Command-line harness for the mock bridge adapter.
//!
//! # Usage Examples
//!
//! ```bash
//! # Count with an explicit result
//! mock-bridge count --structure People --param count=7
//!
//! # Retrieve one record built from the field list
//! mock-bridge retrieve --structure People --field name --field id
//!
//! # Second page of a 25-record result set, as MessagePack
//! mock-bridge --format msgpack search --structure People --field id \
//!   --meta count=25 --meta offset=10 --meta pageSize=10
//!
//! # Request loaded from a JSON file
//! mock-bridge search --request request.json
//! ```
//!
//! Set `RUST_LOG=trace` to see the adapter's trace output on stderr.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use bridgehub_core::{AdapterRegistry, BridgeRequest, Parameters};
use bridgehub_mock::MockBridgeAdapter;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "mock-bridge", version, about = "Run bridge operations against the mock adapter")]
struct Cli {
    /// Output encoding.
    #[arg(long, value_enum, default_value_t = Format::Json, env = "MOCK_BRIDGE_FORMAT")]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Count matching records.
    Count(RequestArgs),
    /// Retrieve a single record.
    Retrieve(RequestArgs),
    /// Retrieve a page of records.
    Search(RequestArgs),
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Msgpack,
}

#[derive(Args, Default)]
struct RequestArgs {
    /// JSON file holding a complete request. Flags below are merged on top.
    #[arg(long)]
    request: Option<PathBuf>,

    /// Structure (record type) to query.
    #[arg(long)]
    structure: Option<String>,

    /// Requested field; repeat for several.
    #[arg(long = "field")]
    fields: Vec<String>,

    /// Query template.
    #[arg(long)]
    query: Option<String>,

    /// Request parameter as KEY=VALUE; repeat for several.
    #[arg(long = "param", value_parser = parse_key_value)]
    params: Vec<(String, String)>,

    /// Request metadata as KEY=VALUE; repeat for several.
    #[arg(long = "meta", value_parser = parse_key_value)]
    meta: Vec<(String, String)>,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))
}

impl RequestArgs {
    fn into_request(self) -> anyhow::Result<BridgeRequest> {
        let mut request = match &self.request {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading request file {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("parsing request file {}", path.display()))?
            }
            None => BridgeRequest::default(),
        };

        if let Some(structure) = self.structure {
            request.structure = structure;
        }
        if !self.fields.is_empty() {
            request.fields = self.fields;
        }
        if let Some(query) = self.query {
            request.query = query;
        }
        request.parameters.extend(self.params);
        request.metadata.extend(self.meta);
        Ok(request)
    }
}

fn emit<T: Serialize>(value: &T, format: Format) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut stdout, value)?;
            writeln!(stdout)?;
        }
        Format::Msgpack => {
            let bytes = rmp_serde::to_vec_named(value)?;
            stdout.write_all(&bytes)?;
        }
    }
    stdout.flush()?;
    Ok(())
}

fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let registry = AdapterRegistry::new();
    bridgehub_mock::register(&registry);
    let adapter = registry
        .create(MockBridgeAdapter::NAME, &Parameters::new())
        .context("initializing mock adapter")?;

    match cli.command {
        Command::Count(args) => {
            let mut request = args.into_request()?;
            emit(&adapter.count(&mut request)?, cli.format)
        }
        Command::Retrieve(args) => {
            let mut request = args.into_request()?;
            emit(&adapter.retrieve(&mut request)?, cli.format)
        }
        Command::Search(args) => {
            let mut request = args.into_request()?;
            emit(&adapter.search(&mut request)?, cli.format)
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
