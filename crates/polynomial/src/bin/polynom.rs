// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Polynomial CLI
//!
//! Evaluates and combines real-coefficient polynomials given as coefficient lists,
//! highest degree first (`--coeffs 1 3 2` is `x^2 + 3x + 2`).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polynom::Polynomial;
use std::io::Write;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Evaluate and combine polynomials with real coefficients")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a polynomial at a point
    Eval {
        /// Coefficients, highest degree first
        #[arg(long, num_args = 1.., required = true, allow_negative_numbers = true)]
        coeffs: Vec<f64>,

        /// Point to evaluate at
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
    },
    /// Add two polynomials
    Add(Operands),
    /// Subtract the right polynomial from the left one
    Sub(Operands),
    /// Multiply two polynomials
    Mul(Operands),
    /// Divide with remainder
    Div(Operands),
}

#[derive(clap::Args, Debug)]
struct Operands {
    /// Left operand coefficients, highest degree first
    #[arg(long, num_args = 1.., required = true, allow_negative_numbers = true)]
    lhs: Vec<f64>,

    /// Right operand coefficients, highest degree first
    #[arg(long, num_args = 1.., required = true, allow_negative_numbers = true)]
    rhs: Vec<f64>,
}

impl Operands {
    fn polynomials(&self) -> (Polynomial, Polynomial) {
        let lhs = Polynomial::new(&self.lhs);
        let rhs = Polynomial::new(&self.rhs);
        debug!(lhs = %lhs, rhs = %rhs, "parsed operands");
        (lhs, rhs)
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = std::io::stdout();
    if let Err(e) = run(cli, &mut stdout.lock()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Command::Eval { coeffs, x } => {
            let p = Polynomial::new(&coeffs);
            debug!(polynomial = %p, x, "evaluating");
            writeln!(out, "{}", p.evaluate(x))?;
        }
        Command::Add(operands) => {
            let (lhs, rhs) = operands.polynomials();
            writeln!(out, "{}", lhs + rhs)?;
        }
        Command::Sub(operands) => {
            let (lhs, rhs) = operands.polynomials();
            writeln!(out, "{}", lhs - rhs)?;
        }
        Command::Mul(operands) => {
            let (lhs, rhs) = operands.polynomials();
            writeln!(out, "{}", lhs * rhs)?;
        }
        Command::Div(operands) => {
            let (lhs, rhs) = operands.polynomials();
            let (quotient, remainder) = lhs
                .checked_div_rem(&rhs)
                .with_context(|| format!("cannot divide {lhs} by {rhs}"))?;
            writeln!(out, "quotient: {quotient}")?;
            writeln!(out, "remainder: {remainder}")?;
        }
    }

    Ok(())
}
