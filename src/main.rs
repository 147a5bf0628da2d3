use std::ffi::{OsStr, OsString};
use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use xilprims::{program_name, validate, EmitterConfig, OutputMode, TableEmitter, XILINX_PRIMITIVES};

fn init_logging() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

fn run(program: &str, selector: &OsStr) -> Result<()> {
  validate(XILINX_PRIMITIVES).context("built-in primitive table is inconsistent")?;

  let mode = OutputMode::from_os_selector(selector);
  info!(?mode, primitives = XILINX_PRIMITIVES.len(), "generating");

  let stdout = io::stdout();
  let emitter = TableEmitter::with_config(XILINX_PRIMITIVES, EmitterConfig::for_program(program));
  emitter
    .emit(mode, BufWriter::new(stdout.lock()))
    .context("failed to write generated text")?;
  Ok(())
}

fn main() -> ExitCode {
  init_logging();

  let args: Vec<OsString> = std::env::args_os().collect();
  let program = args
    .first()
    .map(|argv0| program_name(&argv0.to_string_lossy()))
    .unwrap_or_else(|| "mk_xilprims".to_string());

  // The selector is taken verbatim: `--` and `-h` are selectors, not options.
  let selector = match args.as_slice() {
    [_, selector] => selector,
    _ => {
      debug!(count = args.len().saturating_sub(1), "invalid invocation");
      println!("Usage: {} c|h", program);
      return ExitCode::from(1);
    }
  };

  match run(&program, selector) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("error: {:#}", err);
      ExitCode::from(1)
    }
  }
}
