//! Column size tokens.
//!
//! A column size is either a symbolic alias (`"half"`, `"one-third"`, ...)
//! or a number, optionally followed by `column`/`columns`
//! (`"4"`, `"5columns"`, `"5 column"`).

use crate::error::{ComponentError, Result};

/// Span reported for an absent size token.
pub const UNSPECIFIED: i32 = -1;

/// Number of columns in the grid.
pub const GRID_COLUMNS: i32 = 12;

/// Resolves a symbolic size alias. Matching is exact and case-sensitive.
fn alias_span(token: &str) -> Option<i32> {
	let span = match token {
		"full" | "full-size" | "fullSize" | "full-width" | "fullWidth" => GRID_COLUMNS,
		"half" => 6,
		"one-third" | "oneThird" => 4,
		"two-thirds" | "twoThirds" => 8,
		"one-fourth" | "oneFourth" => 3,
		"three-fourths" | "threeFourths" => 9,
		_ => return None,
	};
	Some(span)
}

/// Maps a size token to a column span.
///
/// Returns [`UNSPECIFIED`] when `token` is `None`. A value of `0` means the
/// column is hidden at that breakpoint, negative values mean "not
/// specified".
///
/// # Errors
///
/// Returns [`ComponentError::InvalidSize`] when the token is neither a known
/// alias nor a base-10 integer.
///
/// # Examples
///
/// ```
/// use bootsgrid_components::size::{parse_column_size, UNSPECIFIED};
///
/// assert_eq!(parse_column_size(Some("two-thirds")).unwrap(), 8);
/// assert_eq!(parse_column_size(Some("5 columns")).unwrap(), 5);
/// assert_eq!(parse_column_size(None).unwrap(), UNSPECIFIED);
/// assert!(parse_column_size(Some("banana")).is_err());
/// ```
pub fn parse_column_size(token: Option<&str>) -> Result<i32> {
	let Some(token) = token else {
		return Ok(UNSPECIFIED);
	};
	if let Some(span) = alias_span(token) {
		return Ok(span);
	}

	let trimmed = token.trim();
	let number = trimmed
		.strip_suffix("columns")
		.or_else(|| trimmed.strip_suffix("column"))
		.unwrap_or(trimmed)
		.trim();

	number
		.parse::<i32>()
		.map_err(|source| ComponentError::InvalidSize {
			value: token.to_string(),
			source,
		})
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("full", 12)]
	#[case("full-size", 12)]
	#[case("fullSize", 12)]
	#[case("full-width", 12)]
	#[case("fullWidth", 12)]
	#[case("half", 6)]
	#[case("one-third", 4)]
	#[case("oneThird", 4)]
	#[case("two-thirds", 8)]
	#[case("twoThirds", 8)]
	#[case("one-fourth", 3)]
	#[case("oneFourth", 3)]
	#[case("three-fourths", 9)]
	#[case("threeFourths", 9)]
	fn test_symbolic_aliases(#[case] token: &str, #[case] expected: i32) {
		// Act
		let span = parse_column_size(Some(token)).unwrap();

		// Assert
		assert_eq!(span, expected, "alias {token}");
	}

	#[rstest]
	fn test_absent_token_is_unspecified() {
		assert_eq!(parse_column_size(None).unwrap(), UNSPECIFIED);
	}

	#[rstest]
	#[case("5columns", 5)]
	#[case("5 column", 5)]
	#[case("5 columns", 5)]
	#[case(" 7 ", 7)]
	#[case("0", 0)]
	#[case("12", 12)]
	#[case("-1", -1)]
	fn test_numeric_tokens(#[case] token: &str, #[case] expected: i32) {
		assert_eq!(parse_column_size(Some(token)).unwrap(), expected);
	}

	#[rstest]
	#[case("banana")]
	#[case("")]
	#[case("columns")]
	#[case("Half")]
	#[case("one third")]
	fn test_unrecognized_tokens_fail(#[case] token: &str) {
		// Act
		let err = parse_column_size(Some(token)).unwrap_err();

		// Assert
		match err {
			ComponentError::InvalidSize { value, .. } => assert_eq!(value, token),
			other => panic!("expected InvalidSize, got {other:?}"),
		}
	}
}
