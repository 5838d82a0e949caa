//! # Frac CLI
//!
//! Command-line front end for the fraction calculator engine. Each
//! subcommand becomes a `frac_core` JSON request, so the terminal and the
//! `eval` subcommand exercise exactly the same code path.
//!
//! ```text
//! $ frac add 1/2 1/3
//! 1/2 + 1/3 → 5/6 ≈ 0.8333
//!
//! $ frac --mixed div "1 1/2" 1/3
//! 3/2 ÷ 1/3 → 4 1/2 = 4.5000
//!
//! $ echo '{"operation":"simplify","numerator":12,"denominator":18}' | frac --json eval -
//! ```

mod logger;

use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use frac_core::{
    FracError, FracResult, Fraction, FractionRequest, Operand, Operation, Settings,
};

#[derive(Debug, Parser)]
#[command(name = "frac", version, about = "Fraction calculator: simplify, convert, and do arithmetic on fractions")]
struct Cli {
    /// Print the outcome as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML settings file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Digits after the decimal point in the rendered result
    #[arg(long, global = true, value_name = "N")]
    places: Option<usize>,

    /// Render improper fractions as mixed numbers
    #[arg(long, global = true)]
    mixed: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Reduce a fraction and make its denominator positive
    Simplify {
        #[arg(allow_hyphen_values = true)]
        numerator: i64,
        #[arg(allow_hyphen_values = true)]
        denominator: i64,
    },
    /// Divide numerator by denominator
    Decimal {
        #[arg(allow_hyphen_values = true)]
        numerator: i64,
        #[arg(allow_hyphen_values = true)]
        denominator: i64,
    },
    /// Convert a decimal such as 0.75 to a fraction
    FromDecimal {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// A + B
    Add {
        #[arg(allow_hyphen_values = true)]
        a: Fraction,
        #[arg(allow_hyphen_values = true)]
        b: Fraction,
    },
    /// A - B
    Sub {
        #[arg(allow_hyphen_values = true)]
        a: Fraction,
        #[arg(allow_hyphen_values = true)]
        b: Fraction,
    },
    /// A × B
    Mul {
        #[arg(allow_hyphen_values = true)]
        a: Fraction,
        #[arg(allow_hyphen_values = true)]
        b: Fraction,
    },
    /// A ÷ B
    Div {
        #[arg(allow_hyphen_values = true)]
        a: Fraction,
        #[arg(allow_hyphen_values = true)]
        b: Fraction,
    },
    /// Evaluate a JSON request ("-" reads it from stdin)
    Eval { input: String },
}

impl Command {
    fn into_request(self) -> FracResult<FractionRequest> {
        let request = match self {
            Command::Simplify { numerator, denominator } => FractionRequest::Simplify { numerator, denominator },
            Command::Decimal { numerator, denominator } => FractionRequest::ToDecimal { numerator, denominator },
            Command::FromDecimal { value } => FractionRequest::ParseDecimal { text: value },
            Command::Add { a, b } => FractionRequest::Add { a: a.into(), b: b.into() },
            Command::Sub { a, b } => FractionRequest::Subtract { a: a.into(), b: b.into() },
            Command::Mul { a, b } => FractionRequest::Multiply { a: a.into(), b: b.into() },
            Command::Div { a, b } => FractionRequest::Divide { a: a.into(), b: b.into() },
            Command::Eval { input } => serde_json::from_str(&read_input(&input)?)?,
        };
        Ok(request)
    }
}

fn read_input(input: &str) -> FracResult<String> {
    if input != "-" {
        return Ok(input.to_string());
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| FracError::file_error("read", "stdin", e.to_string()))?;
    Ok(buffer)
}

/// Echo of the input, shown before the result.
fn describe(request: &FractionRequest) -> String {
    match request {
        FractionRequest::Simplify { numerator, denominator }
        | FractionRequest::ToDecimal { numerator, denominator } => format!("{}/{}", numerator, denominator),
        FractionRequest::FromDecimal { value } => value.to_string(),
        FractionRequest::ParseDecimal { text } => text.trim().to_string(),
        FractionRequest::Add { a, b } => binary_label(a, Operation::Add, b),
        FractionRequest::Subtract { a, b } => binary_label(a, Operation::Subtract, b),
        FractionRequest::Multiply { a, b } => binary_label(a, Operation::Multiply, b),
        FractionRequest::Divide { a, b } => binary_label(a, Operation::Divide, b),
    }
}

fn binary_label(a: &Operand, operation: Operation, b: &Operand) -> String {
    format!(
        "{} {} {}",
        operand_label(a),
        operation.symbol(),
        operand_label(b)
    )
}

fn operand_label(operand: &Operand) -> String {
    if operand.denominator == 1 {
        operand.numerator.to_string()
    } else {
        format!("{}/{}", operand.numerator, operand.denominator)
    }
}

fn load_settings(cli: &Cli) -> FracResult<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(places) = cli.places {
        settings.display.decimal_places = places;
    }
    if cli.mixed {
        settings.display.mixed_numbers = true;
    }
    settings.validate()?;
    Ok(settings)
}

fn run(command: Command, settings: &Settings, json: bool) -> FracResult<()> {
    let request = command.into_request()?;
    tracing::debug!(?request, "parsed request");

    let outcome = request.evaluate(settings)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{} → {}", describe(&request), outcome.display());
    }
    Ok(())
}

fn report(err: &FracError) {
    tracing::debug!(code = err.error_code(), "request failed");
    eprintln!("Error: {}", err);
    if let Ok(json) = serde_json::to_string_pretty(err) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

/// 1 for a bad number or fraction, 2 for a malformed request, settings or
/// file problem.
fn exit_code(err: &FracError) -> i32 {
    if err.is_input_error() {
        1
    } else {
        2
    }
}

fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            report(&e);
            process::exit(2);
        }
    };

    if let Err(e) = run(cli.command, &settings, cli.json) {
        report(&e);
        process::exit(exit_code(&e));
    }
}
