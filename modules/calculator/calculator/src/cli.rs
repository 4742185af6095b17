//! Command-line surface of the calculator.
//!
//! Parsing is done with `clap`; dispatch and rendering are plain functions so
//! they can be tested without spawning the binary.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::{Serialize, Serializer};

use calculator_sdk::{CalculatorClientV1, CalculatorError, Operation};

use crate::config::{CliOverrides, OutputFormat};

/// Wrapping 32-bit integer calculator
#[derive(Parser, Debug)]
#[command(name = "calculator")]
#[command(about = "Wrapping 32-bit integer calculator")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    pub print_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    #[must_use]
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            json: self.json,
            verbose: self.verbose,
        }
    }
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq)]
pub enum Commands {
    /// Validate configuration and exit
    Check,
    #[command(flatten)]
    Calc(Calculation),
}

/// A single calculator call.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq)]
pub enum Calculation {
    /// Add two integers (wraps on overflow)
    #[command(allow_negative_numbers = true)]
    Sum { a: i32, b: i32 },
    /// Subtract B from A (wraps on overflow)
    #[command(allow_negative_numbers = true)]
    Subtract { a: i32, b: i32 },
    /// Multiply two integers (wraps on overflow)
    #[command(allow_negative_numbers = true)]
    Multiply { a: i32, b: i32 },
    /// Integer division truncated toward zero
    #[command(allow_negative_numbers = true)]
    Divide { a: i32, b: i32 },
    /// The larger of two integers
    #[command(allow_negative_numbers = true)]
    Max { a: i32, b: i32 },
    /// Square root of a non-negative number
    #[command(allow_negative_numbers = true)]
    SquareRoot { x: f64 },
    /// Whether an integer is strictly positive
    #[command(allow_negative_numbers = true)]
    IsPositive { x: i32 },
    /// BASE raised to a non-negative EXPONENT (wraps on overflow)
    #[command(allow_negative_numbers = true)]
    Power { base: i32, exponent: i32 },
}

impl Calculation {
    #[must_use]
    pub fn operation(&self) -> Operation {
        match self {
            Self::Sum { .. } => Operation::Sum,
            Self::Subtract { .. } => Operation::Subtract,
            Self::Multiply { .. } => Operation::Multiply,
            Self::Divide { .. } => Operation::Divide,
            Self::Max { .. } => Operation::Max,
            Self::SquareRoot { .. } => Operation::SquareRoot,
            Self::IsPositive { .. } => Operation::IsPositive,
            Self::Power { .. } => Operation::Power,
        }
    }
}

/// Value produced by a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Int(i32),
    #[serde(serialize_with = "serialize_float")]
    Float(f64),
    Bool(bool),
}

/// Non-finite values have no JSON number form; they are written as their
/// `Display` text (`inf`, `-inf`, `NaN`).
#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_float<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.collect_str(value)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
        }
    }
}

/// Run one calculation against any `CalculatorClientV1` implementation.
///
/// # Errors
/// Propagates `CalculatorError::InvalidArgument` from the client.
pub fn execute(
    calculation: &Calculation,
    client: &dyn CalculatorClientV1,
) -> Result<Outcome, CalculatorError> {
    let outcome = match *calculation {
        Calculation::Sum { a, b } => Outcome::Int(client.sum(a, b)),
        Calculation::Subtract { a, b } => Outcome::Int(client.subtract(a, b)),
        Calculation::Multiply { a, b } => Outcome::Int(client.multiply(a, b)),
        Calculation::Divide { a, b } => Outcome::Int(client.divide(a, b)?),
        Calculation::Max { a, b } => Outcome::Int(client.max(a, b)),
        Calculation::SquareRoot { x } => Outcome::Float(client.square_root(x)?),
        Calculation::IsPositive { x } => Outcome::Bool(client.is_positive(x)),
        Calculation::Power { base, exponent } => Outcome::Int(client.power(base, exponent)?),
    };
    Ok(outcome)
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    operation: Operation,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

/// Render a calculation result for stdout.
///
/// Plain output is the bare value or the error message; JSON output is an
/// object with `operation` and either `result` or `error`.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render(
    operation: Operation,
    result: &Result<Outcome, CalculatorError>,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Plain => Ok(match result {
            Ok(outcome) => outcome.to_string(),
            Err(e) => format!("error: {e}"),
        }),
        OutputFormat::Json => {
            let message = result.as_ref().err().map(ToString::to_string);
            let report = Report {
                operation,
                result: result.as_ref().ok().copied(),
                error: message.as_deref(),
            };
            serde_json::to_string(&report)
        }
    }
}
