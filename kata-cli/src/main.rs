//! Kata CLI
//!
//! Runs a single exercise and prints its result.

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use kata_common::warning::warn_once;
use kata_geometry::{Rectangle, is_triangle, to_json};
use kata_numeric::{
    digital_root, factorial, fizz_buzz_sequence, is_luhn_valid, reverse_integer, sum_between,
    to_radix_string,
};
use kata_selector::{PartKind, Selector, SelectorPart, combine};
use kata_text::{
    common_directory_path, evaluate_tic_tac_toe, is_brackets_balanced, matrix_product, parse_board,
    reverse_string,
};
use owo_colors::OwoColorize;

/// Kata: small algorithm exercises from the command line
#[derive(Parser, Debug)]
#[command(name = "kata")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Call out a game of FizzBuzz
    kata fizzbuzz 15

    # Write a number in base 3
    kata radix 365 3

    # Build a selector from KIND=VALUE parts
    kata selector element=a 'attr=href$=".png"' pseudo-class=focus

    # Join selectors with combinators
    kata selector element=ul '>' element=li class=active
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Call out FizzBuzz from 1 to N
    Fizzbuzz {
        /// Last number called
        n: u64,
    },

    /// N!
    Factorial {
        /// Input number
        n: u32,
    },

    /// Sum of every integer between A and B inclusive
    SumBetween {
        /// First bound
        #[arg(allow_hyphen_values = true)]
        a: i64,
        /// Second bound
        #[arg(allow_hyphen_values = true)]
        b: i64,
    },

    /// Repeated digit sum down to a single digit
    DigitalRoot {
        /// Input number
        n: u64,
    },

    /// Check a number with the Luhn algorithm
    Luhn {
        /// Card or account number
        number: u64,
    },

    /// Reverse the decimal digits of N
    Reverse {
        /// Input number
        n: u64,
    },

    /// Reverse a string
    ReverseText {
        /// Text to reverse
        text: String,
    },

    /// Write N in another base
    Radix {
        /// Input number
        n: u64,
        /// Target base, 2 to 36
        radix: u32,
    },

    /// Whether three side lengths form a triangle
    Triangle {
        /// First side
        a: u64,
        /// Second side
        b: u64,
        /// Third side
        c: u64,
    },

    /// Whether the brackets in TEXT are balanced
    Brackets {
        /// Text to check
        text: String,
    },

    /// Longest directory shared by every path
    CommonPath {
        /// Paths to compare
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Multiply two matrices written as rows separated by ';', e.g. "1,2;3,4"
    Matrix {
        /// Left operand
        left: String,
        /// Right operand
        right: String,
    },

    /// Winner of a tic-tac-toe position given as three rows, e.g. "X0 "
    TicTacToe {
        /// Top row
        top: String,
        /// Middle row
        middle: String,
        /// Bottom row
        bottom: String,
    },

    /// Serialize a rectangle to JSON
    Rectangle {
        /// Width
        width: u32,
        /// Height
        height: u32,
    },

    /// Build a CSS selector from KIND=VALUE parts and combinator tokens
    Selector {
        /// Parts such as element=div, id=main, class=x, attr=href,
        /// pseudo-class=hover, pseudo-element=before; a bare '+', '~', '>'
        /// or ' ' joins the selectors on either side
        #[arg(required = true, allow_hyphen_values = true)]
        parts: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Fizzbuzz { n } => {
            for call in fizz_buzz_sequence(1..=n) {
                println!("{call}");
            }
        }
        Command::Factorial { n } => {
            let value = factorial(n).ok_or_else(|| anyhow!("{n}! does not fit in 64 bits"))?;
            println!("{value}");
        }
        Command::SumBetween { a, b } => println!("{}", sum_between(a, b)),
        Command::DigitalRoot { n } => println!("{}", digital_root(n)),
        Command::Luhn { number } => print_verdict(is_luhn_valid(number)),
        Command::Reverse { n } => {
            let value =
                reverse_integer(n).ok_or_else(|| anyhow!("{n} reversed does not fit in 64 bits"))?;
            println!("{value}");
        }
        Command::ReverseText { text } => println!("{}", reverse_string(&text)),
        Command::Radix { n, radix } => println!("{}", to_radix_string(n, radix)?),
        Command::Triangle { a, b, c } => print_verdict(is_triangle(a, b, c)),
        Command::Brackets { text } => print_verdict(is_brackets_balanced(&text)),
        Command::CommonPath { paths } => {
            let refs: Vec<&str> = paths.iter().map(String::as_str).collect();
            let common = common_directory_path(&refs);
            if common.is_empty() {
                warn_once("CLI", "paths share no common directory");
            }
            println!("{common}");
        }
        Command::Matrix { left, right } => {
            let product = matrix_product(&parse_matrix(&left)?, &parse_matrix(&right)?)?;
            for row in product {
                let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
                println!("{}", cells.join(" "));
            }
        }
        Command::TicTacToe {
            top,
            middle,
            bottom,
        } => {
            let board = parse_board(&[top.as_str(), middle.as_str(), bottom.as_str()])?;
            match evaluate_tic_tac_toe(&board) {
                Some(mark) => println!("{}", mark.green()),
                None => println!("{}", "no winner".dimmed()),
            }
        }
        Command::Rectangle { width, height } => {
            let rect = Rectangle::new(width, height);
            println!("{}", to_json(&rect)?);
            println!("{} {}", "area".dimmed(), rect.area());
        }
        Command::Selector { parts } => {
            let selector = build_selector(&parts)?;
            println!("{selector}");
            println!("{} {}", "specificity".dimmed(), selector.specificity());
        }
    }

    Ok(())
}

fn print_verdict(verdict: bool) {
    if verdict {
        println!("{}", "true".green());
    } else {
        println!("{}", "false".red());
    }
}

/// Parse `"1,2;3,4"` into rows.
fn parse_matrix(text: &str) -> Result<Vec<Vec<i64>>> {
    text.split(';')
        .map(|row| {
            row.split(',')
                .map(|cell| {
                    cell.trim()
                        .parse::<i64>()
                        .with_context(|| format!("invalid matrix entry {cell:?}"))
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect()
}

/// Build one selector per run of `KIND=VALUE` parts and join the runs with
/// the combinator tokens between them, left to right.
fn build_selector(args: &[String]) -> Result<Selector> {
    let mut pending: Option<(Selector, &str)> = None;
    let mut current = Selector::new();

    for arg in args {
        if let Some((kind, value)) = arg.split_once('=') {
            let kind: PartKind = kind
                .parse()
                .with_context(|| format!("unknown selector part kind {kind:?}"))?;
            if value.is_empty() {
                warn_once("CLI", &format!("empty {kind} value in {arg:?}"));
            }
            current
                .push(SelectorPart::new(kind, value))
                .with_context(|| format!("cannot add {arg:?} to \"{current}\""))?;
        } else {
            if current.is_empty() {
                bail!("combinator {arg:?} has no selector on its left");
            }
            let run = std::mem::take(&mut current);
            let left = match pending.take() {
                Some((left, token)) => combine(&left, token, &run),
                None => run,
            };
            pending = Some((left, arg.as_str()));
        }
    }

    match pending {
        Some((_, token)) if current.is_empty() => {
            bail!("combinator {token:?} has no selector on its right")
        }
        Some((left, token)) => Ok(combine(&left, token, &current)),
        None => Ok(current),
    }
}
