//! Parsing for the fast path threshold syntax.
//!
//! This module turns user input like `lines=80,avg=200` into
//! [`FastPathThresholds`]. Keys that are not given keep their defaults.
//!
//! # Syntax
//!
//! A comma-separated list of `KEY=VALUE` settings, where:
//! - `lines` - line count above which the fast path is taken
//! - `chars` - combined char count of both texts above which it is taken
//! - `avg` - average line length above which it is taken
//!
//! Values are positive integers. Whitespace around keys and values is
//! ignored.
//!
//! # Examples
//!
//! ```
//! use smart_line_diff::parse::parse_thresholds;
//!
//! let thresholds = parse_thresholds("lines=80").unwrap();
//! assert_eq!(thresholds.max_lines, 80);
//! assert_eq!(thresholds.max_chars, 5000);
//!
//! let thresholds = parse_thresholds("chars=10000, avg=200").unwrap();
//! assert_eq!(thresholds.max_chars, 10000);
//! assert_eq!(thresholds.max_avg_line_length, 200);
//! ```

use crate::fast_path::FastPathThresholds;
use error_set::error_set;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, multispace0, u64 as number},
    combinator::{all_consuming, value},
    multi::separated_list1,
    sequence::{delimited, separated_pair},
};
use std::fmt;

error_set! {
    /// Errors from parsing threshold settings
    ParseError := {
        /// Input is empty or whitespace
        #[display("No thresholds provided")]
        EmptySpec,
        /// Input does not follow the `key=value,...` syntax
        #[display("Invalid threshold spec '{input}': {message}")]
        InvalidSpec { input: String, message: String },
        /// The same key appears more than once
        #[display("Threshold '{key}' given more than once")]
        DuplicateKey { key: String },
        /// A threshold was set to zero
        #[display("Threshold '{key}' must be greater than zero")]
        ZeroThreshold { key: String },
    }
}

/// A threshold that can be set by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    Lines,
    Chars,
    AvgLineLength,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Key::Lines => "lines",
            Key::Chars => "chars",
            Key::AvgLineLength => "avg",
        })
    }
}

fn key(input: &str) -> IResult<&str, Key> {
    alt((
        value(Key::Lines, tag("lines")),
        value(Key::Chars, tag("chars")),
        value(Key::AvgLineLength, tag("avg")),
    ))
    .parse(input)
}

fn setting(input: &str) -> IResult<&str, (Key, u64)> {
    separated_pair(
        delimited(multispace0, key, multispace0),
        char('='),
        delimited(multispace0, number, multispace0),
    )
    .parse(input)
}

/// Parse threshold settings, starting from the default thresholds.
///
/// # Errors
///
/// Returns [`ParseError`] if:
/// - Input is empty
/// - A setting is malformed or names an unknown key
/// - A key is repeated
/// - A value is zero
pub fn parse_thresholds(input: &str) -> Result<FastPathThresholds, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptySpec);
    }

    let (_, settings) = all_consuming(separated_list1(char(','), setting))
        .parse(input)
        .map_err(|e| ParseError::InvalidSpec {
            input: input.to_string(),
            message: e.to_string(),
        })?;

    let mut thresholds = FastPathThresholds::default();
    let mut seen = Vec::with_capacity(settings.len());

    for (key, raw) in settings {
        if seen.contains(&key) {
            return Err(ParseError::DuplicateKey {
                key: key.to_string(),
            });
        }
        seen.push(key);

        if raw == 0 {
            return Err(ParseError::ZeroThreshold {
                key: key.to_string(),
            });
        }
        let limit = usize::try_from(raw).unwrap_or(usize::MAX);

        match key {
            Key::Lines => thresholds.max_lines = limit,
            Key::Chars => thresholds.max_chars = limit,
            Key::AvgLineLength => thresholds.max_avg_line_length = limit,
        }
    }

    Ok(thresholds)
}
