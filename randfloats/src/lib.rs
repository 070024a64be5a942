mod cli;
mod count;
mod emitter;
mod error;
mod notation;
mod seed;

use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use gnurandom::GnuRandom;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

pub use cli::parse_args;
pub use count::{is_plain_count, parse_count, MAX_COUNT};
pub use emitter::Emitter;
pub use error::RandError;
pub use notation::{Notation, PRECISION};
pub use seed::{clock_seed, seed_from_time};

/// Parse `args`, seed a generator from the clock and write the values to `out`.
///
/// On a usage error nothing is written.
pub fn run<I, T, W>(args: I, notation: Notation, out: &mut W) -> Result<(), RandError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
{
    let count = parse_args(args)?;

    let seed = clock_seed();
    debug!(seed, "seeded generator from wall clock");

    Emitter::new(GnuRandom::with_seed(seed), notation).emit(count, out)?;
    Ok(())
}

/// Entry point shared by the binaries: runs against the process arguments and
/// stdout, and maps the outcome to an exit code.
pub fn main_with(notation: Notation) -> ExitCode {
    init_logging();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match run(std::env::args_os(), notation, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ RandError::InvalidArgumentCount { .. }) => {
            // The usage line goes to stdout, not stderr
            if let Err(io_err) = writeln!(out, "{err}").and_then(|()| out.flush()) {
                error!("failed to write usage: {io_err}");
            }
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Install a stderr `tracing` subscriber, filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
