mod config;
mod demo;
mod error;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use unc_core::checked::{self, Operation};
use unc_core::{NumFormat, Quantity};
use unc_table::{parse_matrix, print_matrix};

use config::CliConfig;
use error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "unc")]
#[command(about = "Arithmetic on values with propagated uncertainty", long_about = None)]
struct Cli {
    /// YAML config with table style and scientific-notation digits
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the validation tables for every operation
    Demo,
    /// Evaluate one operation: A DA OP B DB
    #[command(allow_negative_numbers = true)]
    Calc {
        /// Value of the left operand
        a: f64,
        /// Uncertainty of the left operand
        da: f64,
        /// add, sub, mul, div, pow (or + - * / **), or exp (unary, ignores B/DB)
        op: String,
        /// Value of the right operand
        b: Option<f64>,
        /// Uncertainty of the right operand
        db: Option<f64>,
        /// Reject domain violations instead of returning inf/NaN
        #[arg(long)]
        checked: bool,
        /// Scientific notation; optional NV,NU decimal digits override the config
        #[arg(long, value_name = "NV,NU", value_delimiter = ',', num_args = 0..=2)]
        sci: Option<Vec<usize>>,
        /// Print the operands and result as JSON
        #[arg(long, conflicts_with = "sci")]
        json: bool,
    },
    /// Pretty-print a whitespace/comma separated matrix file ("-" for stdin)
    Matrix {
        path: PathBuf,
        /// Number format: g, e, E, f with optional precision (e.g. .3f)
        #[arg(long, default_value = "g")]
        fmt: String,
        /// Column width; defaults to the longest element
        #[arg(long)]
        width: Option<usize>,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Demo => cmd_demo(&config),
        Commands::Calc {
            a,
            da,
            op,
            b,
            db,
            checked,
            sci,
            json,
        } => {
            let request = build_request(a, da, op, b, db, checked)?;
            let output = match (json, sci) {
                (true, _) => Output::Json,
                (false, Some(digits)) => {
                    let (value_digits, uncertainty_digits) = sci_digits(&config, &digits);
                    Output::Sci {
                        value_digits,
                        uncertainty_digits,
                    }
                }
                (false, None) => Output::Plain,
            };
            cmd_calc(&request, output)
        }
        Commands::Matrix { path, fmt, width } => cmd_matrix(&path, &fmt, width),
    }
}

/// `exp` is unary: its right operand is dropped before validation.
fn build_request(
    a: f64,
    da: f64,
    op: String,
    b: Option<f64>,
    db: Option<f64>,
    checked: bool,
) -> CliResult<CalcRequest> {
    let b = if op.eq_ignore_ascii_case("exp") {
        None
    } else {
        b.map(|b| operand(b, db.unwrap_or(0.0), checked))
            .transpose()?
    };
    Ok(CalcRequest {
        a: operand(a, da, checked)?,
        op,
        b,
        checked,
    })
}

/// Digits from `--sci NV,NU`, falling back to the config per field.
fn sci_digits(config: &CliConfig, digits: &[usize]) -> (usize, usize) {
    (
        digits.first().copied().unwrap_or(config.value_digits),
        digits.get(1).copied().unwrap_or(config.uncertainty_digits),
    )
}

fn operand(value: f64, uncertainty: f64, checked: bool) -> CliResult<Quantity> {
    if checked {
        Ok(Quantity::validated(value, uncertainty)?)
    } else {
        Ok(Quantity::new(value, uncertainty))
    }
}

fn cmd_demo(config: &CliConfig) -> CliResult<()> {
    println!("Operations between two quantities:");
    demo::quantity_table(&config.table)?.print();
    println!("A quantity and a plain number, in both operand orders:");
    demo::scalar_table(&config.table)?.print();
    Ok(())
}

struct CalcRequest {
    a: Quantity,
    op: String,
    b: Option<Quantity>,
    checked: bool,
}

#[derive(Clone, Copy)]
enum Output {
    Plain,
    Sci {
        value_digits: usize,
        uncertainty_digits: usize,
    },
    Json,
}

#[derive(Serialize)]
struct CalcReport {
    op: String,
    a: Quantity,
    #[serde(skip_serializing_if = "Option::is_none")]
    b: Option<Quantity>,
    result: Quantity,
}

fn evaluate(request: &CalcRequest) -> CliResult<Quantity> {
    if request.op.eq_ignore_ascii_case("exp") {
        return if request.checked {
            Ok(checked::try_exp(request.a)?)
        } else {
            Ok(request.a.exp())
        };
    }

    let op: Operation = request.op.parse().map_err(CliError::InvalidInput)?;
    let b = request.b.ok_or_else(|| {
        CliError::InvalidInput(format!("operation '{}' needs a right operand", op))
    })?;

    let result = if request.checked {
        checked::apply(op, request.a, b)?
    } else {
        op.eval(request.a, b)
    };
    Ok(result)
}

fn cmd_calc(request: &CalcRequest, output: Output) -> CliResult<()> {
    let result = evaluate(request)?;
    if !result.value().is_finite() || !result.uncertainty().is_finite() {
        tracing::warn!(%result, "non-finite result; rerun with --checked for the cause");
    }

    match output {
        Output::Plain => println!("{}", result),
        Output::Sci {
            value_digits,
            uncertainty_digits,
        } => println!("{}", result.to_sci(value_digits, uncertainty_digits)),
        Output::Json => {
            let report = CalcReport {
                op: request.op.to_ascii_lowercase(),
                a: request.a,
                b: request.b,
                result,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn cmd_matrix(path: &Path, fmt: &str, width: Option<usize>) -> CliResult<()> {
    let fmt: NumFormat = fmt.parse()?;

    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?
    };

    let rows = parse_matrix(&text)?;
    print_matrix(&rows, &fmt, width);
    Ok(())
}
