//! Error types for bootsgrid-components

use std::num::ParseIntError;

use thiserror::Error;

use crate::settings::SettingsError;

/// Error type for component rendering
#[derive(Debug, Error)]
pub enum ComponentError {
	/// `hidden` attribute holds a token other than `xs`, `sm` or `md`
	#[error(
		"Error rendering the \"hidden\" attribute of b:column: unexpected value found. Legal values are xs, sm, md."
	)]
	InvalidHidden(String),

	/// `visible` attribute holds a token other than `sm`, `md` or `lg`
	#[error(
		"Error rendering the \"visible\" attribute of b:column: unexpected value found. Legal values are sm, md and lg."
	)]
	InvalidVisible(String),

	/// Column size is neither a known alias nor a base-10 integer
	#[error("Invalid column size {value:?}: {source}")]
	InvalidSize {
		/// The token as supplied by the caller
		value: String,
		/// Underlying numeric parse failure
		#[source]
		source: ParseIntError,
	},

	/// Renderer settings are unusable
	#[error("Invalid renderer settings: {0}")]
	InvalidSettings(#[from] SettingsError),

	/// Invalid HTML attribute
	#[error("Invalid HTML attribute: {0}")]
	InvalidAttribute(String),

	/// Rendering error
	#[error("Rendering error: {0}")]
	RenderingError(String),
}

impl ComponentError {
	/// Returns `true` for failures caused by caller-supplied attribute values.
	pub fn is_validation(&self) -> bool {
		matches!(
			self,
			Self::InvalidHidden(_) | Self::InvalidVisible(_) | Self::InvalidSize { .. }
		)
	}
}

/// Result type for component operations
pub type Result<T> = std::result::Result<T, ComponentError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_hidden_message_names_legal_values() {
		// Arrange
		let err = ComponentError::InvalidHidden("banana".into());

		// Act
		let message = err.to_string();

		// Assert
		assert!(message.contains("\"hidden\""));
		assert!(message.ends_with("Legal values are xs, sm, md."));
	}

	#[rstest]
	fn test_visible_message_names_legal_values() {
		let err = ComponentError::InvalidVisible("xs".into());

		assert!(err.to_string().contains("\"visible\""));
		assert!(err.to_string().ends_with("Legal values are sm, md and lg."));
	}

	#[rstest]
	fn test_is_validation() {
		let parse = "x".parse::<i32>().unwrap_err();

		assert!(ComponentError::InvalidHidden("x".into()).is_validation());
		assert!(
			ComponentError::InvalidSize {
				value: "x".into(),
				source: parse,
			}
			.is_validation()
		);
		assert!(!ComponentError::RenderingError("x".into()).is_validation());
	}
}
