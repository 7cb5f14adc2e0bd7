//! Renderer settings
//!
//! Settings can be given as top-level keys or under a `[column]` table:
//!
//! ```toml
//! [column]
//! default_display = "inline-block"
//! render_client_id = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::column::DEFAULT_DISPLAY;

/// Errors raised while loading [`ColumnSettings`]
#[derive(Debug, Error)]
pub enum SettingsError {
	/// Settings file could not be read
	#[error("Failed to read settings file: {0}")]
	Io(#[from] std::io::Error),

	/// Settings are not valid TOML or have the wrong shape
	#[error("Failed to parse settings: {0}")]
	Parse(#[from] toml::de::Error),

	/// A setting has an unusable value
	#[error("Invalid setting {key}: {reason}")]
	InvalidValue {
		/// Setting name
		key: &'static str,
		/// Why it was rejected
		reason: String,
	},
}

/// Column renderer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSettings {
	/// Display mode for `visible-*` classes when a column sets none
	pub default_display: String,
	/// Whether the client id is written as the `id` attribute
	pub render_client_id: bool,
}

impl Default for ColumnSettings {
	fn default() -> Self {
		Self {
			default_display: DEFAULT_DISPLAY.to_string(),
			render_client_id: true,
		}
	}
}

impl ColumnSettings {
	/// Creates default settings
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder method for the default display mode.
	///
	/// The value is checked by [`validate`](Self::validate), which the column
	/// renderer runs before every render.
	pub fn default_display(mut self, display: impl Into<String>) -> Self {
		self.default_display = display.into();
		self
	}

	/// Builder method for client id rendering
	pub fn render_client_id(mut self, enabled: bool) -> Self {
		self.render_client_id = enabled;
		self
	}

	/// Parses settings from a TOML document.
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		let mut table: toml::Table = toml::from_str(source)?;
		let value = match table.remove("column") {
			Some(toml::Value::Table(column)) => toml::Value::Table(column),
			Some(other) => {
				return Err(SettingsError::InvalidValue {
					key: "column",
					reason: format!("expected a table, found {}", other.type_str()),
				});
			}
			None => toml::Value::Table(table),
		};
		let settings: Self = value.try_into()?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reads settings from a TOML file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let source = std::fs::read_to_string(path)?;
		Self::from_toml_str(&source)
	}

	/// Checks that the settings can be used to build class names.
	pub fn validate(&self) -> Result<(), SettingsError> {
		if self.default_display.is_empty() || self.default_display.contains(char::is_whitespace) {
			return Err(SettingsError::InvalidValue {
				key: "default_display",
				reason: format!("{:?} is not a single class token", self.default_display),
			});
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;

	#[rstest]
	fn test_default_settings() {
		let settings = ColumnSettings::default();

		assert_eq!(settings.default_display, "block");
		assert!(settings.render_client_id);
	}

	#[rstest]
	fn test_builder_methods() {
		let settings = ColumnSettings::new()
			.default_display("inline")
			.render_client_id(false);

		assert_eq!(settings.default_display, "inline");
		assert!(!settings.render_client_id);
	}

	#[rstest]
	fn test_from_toml_column_table() {
		// Arrange
		let source = r#"
[column]
default_display = "inline-block"
render_client_id = false
"#;

		// Act
		let settings = ColumnSettings::from_toml_str(source).unwrap();

		// Assert
		assert_eq!(settings.default_display, "inline-block");
		assert!(!settings.render_client_id);
	}

	#[rstest]
	fn test_from_toml_top_level_keys_with_defaults() {
		let settings = ColumnSettings::from_toml_str(r#"default_display = "inline""#).unwrap();

		assert_eq!(settings.default_display, "inline");
		assert!(settings.render_client_id);
	}

	#[rstest]
	fn test_from_empty_toml() {
		assert_eq!(
			ColumnSettings::from_toml_str("").unwrap(),
			ColumnSettings::default()
		);
	}

	#[rstest]
	#[case("render_client_id = \"yes\"")]
	#[case("column = 3")]
	#[case("default_display = \"inline block\"")]
	#[case("[column")]
	fn test_from_toml_rejects_bad_input(#[case] source: &str) {
		assert!(ColumnSettings::from_toml_str(source).is_err());
	}

	#[rstest]
	fn test_from_file() {
		// Arrange
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[column]\ndefault_display = \"inline\"").unwrap();

		// Act
		let settings = ColumnSettings::from_file(file.path()).unwrap();

		// Assert
		assert_eq!(settings.default_display, "inline");
	}

	#[rstest]
	fn test_from_missing_file() {
		let err = ColumnSettings::from_file("/nonexistent/bootsgrid.toml").unwrap_err();

		assert!(matches!(err, SettingsError::Io(_)));
	}
}
