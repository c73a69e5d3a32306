//! TRAC Risk Detector - console agent
//!
//! Reads one message per line from stdin, routes it through the intent
//! router and prints the JSON result. Logs go to stderr so stdout stays
//! machine-readable.
//!
//! Usage:
//!   echo "is this safe? claim now http://x.io" | cargo run --bin trac_risk_detector
//!   cargo run --bin trac_risk_detector -- --compact

use std::io::{self, BufRead, Write};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use trac_risk_detector::{route, AppResult, IntentResult};

fn main() -> eyre::Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    let compact = std::env::args().skip(1).any(|a| a == "--compact");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let handled = run_console(stdin.lock(), stdout.lock(), compact)?;

    info!("📊 Handled {} messages", handled);
    Ok(())
}

/// Route every non-blank line of `input`, writing one JSON document per line
fn run_console<R: BufRead, W: Write>(input: R, mut output: W, compact: bool) -> AppResult<usize> {
    let mut handled = 0;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let result = route(&line);
        debug!(intent = result.intent(), "routed console line");
        writeln!(output, "{}", render(&result, compact)?)?;
        output.flush()?;
        handled += 1;
    }

    Ok(handled)
}

fn render(result: &IntentResult, compact: bool) -> AppResult<String> {
    let json = if compact {
        serde_json::to_string(result)?
    } else {
        serde_json::to_string_pretty(result)?
    };
    Ok(json)
}
