use anyhow::Result;
use clap::{Parser, Subcommand};
use frac_core::{DEFAULT_MAX_DENOMINATOR, DEFAULT_PRECISION};
use std::io::Write;

mod commands;

#[derive(Parser)]
#[command(name = "frac")]
#[command(about = "Exact fraction calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (json or debug)
    #[arg(long, global = true, default_value = "debug")]
    format: String,

    /// Decimal places for float output (negative rounds to tens, hundreds, ...)
    #[arg(short, long, global = true, allow_negative_numbers = true, default_value_t = DEFAULT_PRECISION)]
    precision: i32,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a fraction in canonical, mixed, float and integer form
    Show {
        /// Fraction such as "3/4" or "1 1/2", or an integer
        #[arg(allow_hyphen_values = true)]
        fraction: String,
    },
    /// Apply + - * / to two operands
    Calc {
        #[arg(allow_hyphen_values = true)]
        lhs: String,

        /// Operator (+, -, *, /)
        #[arg(allow_hyphen_values = true)]
        op: String,

        #[arg(allow_hyphen_values = true)]
        rhs: String,
    },
    /// Compare two fractions
    Compare {
        #[arg(allow_hyphen_values = true)]
        lhs: String,

        #[arg(allow_hyphen_values = true)]
        rhs: String,
    },
    /// Approximate a decimal number by a fraction
    Approx {
        #[arg(allow_hyphen_values = true)]
        value: f64,

        /// Largest denominator allowed in the result
        #[arg(short, long, default_value_t = DEFAULT_MAX_DENOMINATOR)]
        max_denominator: i64,
    },
}

fn init_logging(verbose: bool) {
    let log_env = env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "warn" });
    env_logger::Builder::from_env(log_env)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = match cli.command {
        Commands::Show { fraction } => commands::show(&fraction, cli.precision),
        Commands::Calc { lhs, op, rhs } => commands::calc(&lhs, &op, &rhs, cli.precision),
        Commands::Compare { lhs, rhs } => commands::compare(&lhs, &rhs),
        Commands::Approx { value, max_denominator } => {
            commands::approx(value, max_denominator, cli.precision)
        }
    };

    match outcome {
        Ok(outcome) => {
            println!("{}", outcome.render(&cli.format)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ {:#}", e);
            std::process::exit(1);
        }
    }
}
