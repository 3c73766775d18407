//! Deep recursion without stack growth.
//!
//! 실행 방법 (How to run): cargo run --bin tailrec_demo -- [depth]
//!
//! `depth` must be positive and defaults to 1,000,000. Log verbosity
//! follows `RUST_LOG` (default `info`); `RUST_LOG=trace` shows every trampoline run.

use std::process::ExitCode;

use fp_common::List;
use fp_tailrec::aggregate::{average, sum};
use fp_tailrec::{TailRecError, add, factorial, fib, range};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_DEPTH: u64 = 1_000_000;

#[derive(Error, Debug, PartialEq, Eq)]
enum DepthError {
    #[error("depth must be a positive integer, got {0:?}")]
    Invalid(String),
}

/// Reads the depth argument; absent means [`DEFAULT_DEPTH`].
fn parse_depth(arg: Option<&str>) -> Result<u64, DepthError> {
    let Some(text) = arg else {
        return Ok(DEFAULT_DEPTH);
    };
    match text.parse::<u64>() {
        Ok(0) | Err(_) => Err(DepthError::Invalid(text.to_string())),
        Ok(depth) => Ok(depth),
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let depth = match parse_depth(std::env::args().nth(1).as_deref()) {
        Ok(depth) => depth,
        Err(err) => {
            error!(%err, "invalid arguments");
            return ExitCode::FAILURE;
        }
    };
    info!(depth, "running trampolined procedures");

    match run(depth) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "demo failed");
            ExitCode::FAILURE
        }
    }
}

fn run(depth: u64) -> Result<(), TailRecError> {
    println!("=== Trampolined recursion (depth {depth}) ===\n");

    println!("add(3, {depth}) = {}", add(3, depth)?);
    println!("factorial(30) = {}", factorial(30)?);
    println!("fib(186) = {}", fib(186)?);

    let numbers = range(0, depth);
    println!("\n=== Persistent list of {} elements ===\n", numbers.len());
    println!("sum = {}", sum(&numbers)?);

    let evens = numbers.filter(|x| x % 2 == 0);
    let squares = evens.map(|x| x * x);
    println!("even count = {}", evens.len());
    println!("last squares = {}", squares.drop(squares.len().saturating_sub(3)));
    println!("all but the last = {} elements", numbers.init()?.len());
    println!("reversed head = {}", numbers.reverse().head()?);

    let nested: List<List<u64>> = range(0, 4).map(|n| range(0, *n));
    println!("flatten {nested:?} = {}", nested.flatten());

    match average(&List::empty()) {
        Ok(avg) => println!("average of nothing = {avg}"),
        Err(err) => println!("average of nothing fails: {err}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_depth() {
        assert_eq!(parse_depth(None), Ok(DEFAULT_DEPTH));
        assert_eq!(parse_depth(Some("25")), Ok(25));
        assert_eq!(
            parse_depth(Some("0")),
            Err(DepthError::Invalid("0".to_string()))
        );
        assert!(parse_depth(Some("-3")).is_err());
        assert!(parse_depth(Some("many")).is_err());
    }

    #[test]
    fn test_run_smallest_depth() {
        assert_eq!(run(1), Ok(()));
        assert_eq!(run(10), Ok(()));
    }
}
