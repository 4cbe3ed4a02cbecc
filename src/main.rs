
use dydx::{differentiate, max_profit};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dydx")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Symbolic first derivatives of space-separated arithmetic expressions")]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Enable debug logging (overridden by RUST_LOG)
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
  /// Print the first derivative of an expression, such as "X ^ 3 + X ^ 5"
  Derive {
    /// Tokens separated by spaces; operators are + - * / ^
    #[arg(allow_hyphen_values = true)]
    expression: String,

    /// Print as `der(<input>) = <result>` with all spaces removed
    #[arg(long, conflicts_with = "json")]
    compact: bool,

    /// Print the result record as JSON
    #[arg(long)]
    json: bool,
  },
  /// Print the best profit from buying once and then selling once
  Profit {
    /// Prices in chronological order
    #[arg(required = true, allow_negative_numbers = true)]
    prices: Vec<f64>,
  },
}

fn init_logging(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();
}

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  match cli.command {
    Commands::Derive { expression, compact, json } => {
      let result = differentiate(&expression)
        .with_context(|| format!("Could not differentiate '{expression}'"))?;
      if json {
        println!("{}", serde_json::to_string(&result)?);
      } else if compact {
        println!("der({}) = {}", expression.replace(' ', ""), result.compact());
      } else {
        println!("{result}");
      }
    }
    Commands::Profit { prices } => {
      let profit = max_profit(prices)?;
      println!("{profit}");
    }
  }
  Ok(())
}
