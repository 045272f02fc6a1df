use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use statline::{Config, Error, Overrides};
use statline_engine::{FieldSet, Layout};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Outputs statistical information about line delimited numbers from stdin",
    long_about = None
)]
struct Args {
    /// only output values, no header or field names
    #[clap(long)]
    values_only: bool,
    /// (repeated) statistic to output, valid items are [count, sum, p99, p97,
    /// p95, p90, p75, p50, p25, min, max, median, average, stddev]
    #[clap(long = "output")]
    output: Vec<String>,
    /// separator between columns, or between a field name and its value
    #[clap(long)]
    delimiter: Option<String>,
    /// arrangement of the output, row or column
    #[clap(long)]
    layout: Option<Layout>,
    /// fields to output when no --output is given, minimal or full
    #[clap(long)]
    field_set: Option<FieldSet>,
    /// path on disk to a YAML configuration file
    #[clap(long)]
    config_path: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            fields: self.output.clone(),
            values_only: self.values_only,
            delimiter: self.delimiter.clone(),
            layout: self.layout,
            field_set: self.field_set,
        }
    }
}

fn inner_main(args: &Args) -> Result<(), Error> {
    let config = Config::load(args.config_path.as_deref())?.apply(args.overrides())?;
    debug!("Resolved configuration: {config:?}");

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    statline::run(&config, stdin, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(false)
        .with_writer(io::stderr)
        .finish()
        .init();

    let version = env!("CARGO_PKG_VERSION");
    info!("Starting statline {version} run.");
    let args = Args::parse();

    match inner_main(&args) {
        Ok(()) => {
            info!("Bye. :)");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
