use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use stgty_core::StorageType;
use tracing_subscriber::EnvFilter;

mod decode;

use decode::{decode, Decoded};

#[derive(Parser)]
#[command(name = "stgty-inspect")]
#[command(about = "Decode STGTY values from STATSTG structures", long_about = None)]
struct Cli {
    /// Values to decode: decimal, 0x-prefixed hex, or a name (stream, STGTY_STREAM)
    #[arg(required_unless_present = "list")]
    values: Vec<String>,

    /// Print one JSON object per value
    #[arg(long)]
    json: bool,

    /// Print every known storage type and exit
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("failed to write output: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Decodes every requested value, writing resolved ones to `out` and
/// failures to `err` (or everything to `out` as JSON).
///
/// Returns `Ok(true)` if every value resolved.
fn run(cli: &Cli, out: &mut impl Write, err: &mut impl Write) -> io::Result<bool> {
    let decoded: Vec<Decoded> = if cli.list {
        StorageType::ALL
            .iter()
            .map(|ty| decode(&ty.as_raw().to_string()))
            .collect()
    } else {
        cli.values.iter().map(|v| decode(v)).collect()
    };

    let mut all_resolved = true;
    for d in &decoded {
        if d.is_resolved() {
            tracing::debug!(input = %d.input, raw = ?d.raw, "decoded storage type");
        } else {
            all_resolved = false;
            tracing::warn!(input = %d.input, raw = ?d.raw, "unrecognized storage type");
        }

        if cli.json {
            serde_json::to_writer(&mut *out, d)?;
            writeln!(out)?;
        } else if d.is_resolved() {
            writeln!(out, "{}", d.to_line())?;
        } else {
            writeln!(err, "{}", d.to_line())?;
        }
    }

    Ok(all_resolved)
}
