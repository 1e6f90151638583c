//! Trace-driven harness for the cachew simulator.
//!
//! Reads a YAML config (see `config.example.yaml`), runs every configured
//! algorithm × cache-size combination over every trace file, and writes one
//! CSV per combination into the output directory. Command-line flags
//! override the config file.

mod config;
mod error;
mod trace;

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::config::{Algorithm, Config};
use crate::error::HarnessError;

const USAGE: &str = "usage: cachew [--config FILE] [--algorithms NAME...] \
[--cache-sizes N...] [--traces FILE...]";

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
  config: Option<PathBuf>,
  algorithms: Vec<Algorithm>,
  cache_sizes: Vec<u64>,
  traces: Vec<PathBuf>,
  help: bool,
}

/// Parses command-line flags. Multi-value flags consume values until the
/// next `--` flag.
fn parse_args<I: Iterator<Item = String>>(args: I) -> Result<CliArgs, HarnessError> {
  let mut parsed = CliArgs::default();
  let mut args = args.peekable();
  while let Some(arg) = args.next() {
    match arg.as_str() {
      "--help" | "-h" => parsed.help = true,
      "--config" => {
        let value = args.next().ok_or(HarnessError::InvalidFlag {
          flag: "--config",
          value: String::new(),
        })?;
        parsed.config = Some(PathBuf::from(value));
      }
      "--algorithms" => {
        while let Some(value) = args.next_if(|v| !v.starts_with("--")) {
          parsed.algorithms.push(value.parse()?);
        }
      }
      "--cache-sizes" => {
        while let Some(value) = args.next_if(|v| !v.starts_with("--")) {
          let size = value.parse().map_err(|_| HarnessError::InvalidFlag {
            flag: "--cache-sizes",
            value: value.clone(),
          })?;
          parsed.cache_sizes.push(size);
        }
      }
      "--traces" => {
        while let Some(value) = args.next_if(|v| !v.starts_with("--")) {
          parsed.traces.push(PathBuf::from(value));
        }
      }
      other => return Err(HarnessError::UnknownArgument(other.to_string())),
    }
  }
  Ok(parsed)
}

fn run(args: CliArgs) -> Result<(), HarnessError> {
  let config = match &args.config {
    Some(path) => Config::load(path)?,
    None => Config::load(&PathBuf::from("./config/config.yaml"))?,
  };

  // Flags win over the config file, mirroring the config precedence of the
  // original harness.
  let algorithms = if args.algorithms.is_empty() {
    config.algorithms()
  } else {
    args.algorithms
  };
  let cache_sizes = if args.cache_sizes.is_empty() {
    config.cache_sizes()
  } else {
    args.cache_sizes
  };
  let trace_paths = if args.traces.is_empty() {
    config.traces.clone()
  } else {
    args.traces
  };

  if algorithms.is_empty() {
    return Err(HarnessError::NoAlgorithms);
  }
  if cache_sizes.is_empty() {
    return Err(HarnessError::NoCacheSizes);
  }
  if cache_sizes.iter().any(|&size| size == 0) {
    return Err(HarnessError::ZeroCacheSize);
  }
  if trace_paths.is_empty() {
    return Err(HarnessError::NoTraces);
  }

  // Traces are immutable input, so load each file once up front.
  let mut traces = Vec::with_capacity(trace_paths.len());
  for path in &trace_paths {
    let requests = trace::load_trace(path)?;
    debug!(trace = %path.display(), requests = requests.len(), "trace loaded");
    traces.push((path.clone(), requests));
  }

  fs::create_dir_all(&config.output_dir).map_err(|source| HarnessError::Io {
    path: config.output_dir.clone(),
    source,
  })?;

  for algorithm in &algorithms {
    for &cache_size in &cache_sizes {
      info!(%algorithm, cache_size, "running combination");
      let mut csv = String::from("trace_file,total_requests,unique_pages,cache_misses\n");
      let mut total_misses = 0u64;

      for (path, requests) in &traces {
        // A fresh scheduler per trace: runs must not share state.
        let mut scheduler = algorithm.build(cache_size as usize)?;
        let report = scheduler.run(requests);
        total_misses += report.cache_misses;

        let name = path
          .file_name()
          .map(|n| n.to_string_lossy().into_owned())
          .unwrap_or_else(|| path.display().to_string());
        csv.push_str(&format!(
          "{name},{},{},{}\n",
          report.total_requests, report.unique_pages, report.cache_misses
        ));
        debug!(
          trace = %name,
          misses = report.cache_misses,
          miss_ratio = report.miss_ratio(),
          "trace finished"
        );
      }

      let out_path = config.output_dir.join(format!("{algorithm}_{cache_size}.csv"));
      fs::write(&out_path, csv).map_err(|source| HarnessError::Io {
        path: out_path.clone(),
        source,
      })?;
      info!(output = %out_path.display(), total_misses, "combination finished");
    }
  }

  Ok(())
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let args = match parse_args(env::args().skip(1)) {
    Ok(args) => args,
    Err(err) => {
      error!("{err}");
      eprintln!("{USAGE}");
      process::exit(2);
    }
  };
  if args.help {
    println!("{USAGE}");
    return;
  }
  if let Err(err) = run(args) {
    error!("{err}");
    process::exit(1);
  }
}
