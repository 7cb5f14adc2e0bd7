//! Responsive grid tiers

use crate::error::{ComponentError, Result};

static ORDERED: [Breakpoint; 4] = Breakpoint::ALL;

/// Responsive breakpoint of the 12-column grid
///
/// Variants are ordered from the narrowest to the widest tier, so
/// comparisons follow screen width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
	/// Extra small (< 768px)
	Xs,
	/// Small (≥ 768px)
	Sm,
	/// Medium (≥ 992px)
	Md,
	/// Large (≥ 1200px)
	Lg,
}

impl Breakpoint {
	/// All breakpoints, narrowest first
	pub const ALL: [Breakpoint; 4] = [Self::Xs, Self::Sm, Self::Md, Self::Lg];

	/// Convert breakpoint to CSS class suffix
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Xs => "xs",
			Self::Sm => "sm",
			Self::Md => "md",
			Self::Lg => "lg",
		}
	}

	fn index(self) -> usize {
		self as usize
	}

	/// This breakpoint and every narrower one, narrowest first.
	pub fn and_below(self) -> &'static [Breakpoint] {
		&ORDERED[..=self.index()]
	}

	/// This breakpoint and every wider one, narrowest first.
	pub fn and_above(self) -> &'static [Breakpoint] {
		&ORDERED[self.index()..]
	}

	/// Parses the `hidden` attribute. Only `xs`, `sm` and `md` are accepted.
	pub fn parse_hidden(token: &str) -> Result<Self> {
		match token {
			"xs" => Ok(Self::Xs),
			"sm" => Ok(Self::Sm),
			"md" => Ok(Self::Md),
			other => Err(ComponentError::InvalidHidden(other.to_string())),
		}
	}

	/// Parses the `visible` attribute. Only `sm`, `md` and `lg` are accepted.
	pub fn parse_visible(token: &str) -> Result<Self> {
		match token {
			"sm" => Ok(Self::Sm),
			"md" => Ok(Self::Md),
			"lg" => Ok(Self::Lg),
			other => Err(ComponentError::InvalidVisible(other.to_string())),
		}
	}
}

impl std::fmt::Display for Breakpoint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Responsive value that can vary by breakpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsiveValue<T> {
	/// Extra small
	pub xs: Option<T>,
	/// Small
	pub sm: Option<T>,
	/// Medium
	pub md: Option<T>,
	/// Large
	pub lg: Option<T>,
}

impl<T> Default for ResponsiveValue<T> {
	fn default() -> Self {
		Self {
			xs: None,
			sm: None,
			md: None,
			lg: None,
		}
	}
}

impl<T> ResponsiveValue<T> {
	/// Create an empty responsive value
	pub fn new() -> Self {
		Self::default()
	}

	/// Value stored for `breakpoint`, if any
	pub fn get(&self, breakpoint: Breakpoint) -> Option<&T> {
		match breakpoint {
			Breakpoint::Xs => self.xs.as_ref(),
			Breakpoint::Sm => self.sm.as_ref(),
			Breakpoint::Md => self.md.as_ref(),
			Breakpoint::Lg => self.lg.as_ref(),
		}
	}

	/// Replace the value stored for `breakpoint`
	pub fn set(&mut self, breakpoint: Breakpoint, value: Option<T>) {
		let slot = match breakpoint {
			Breakpoint::Xs => &mut self.xs,
			Breakpoint::Sm => &mut self.sm,
			Breakpoint::Md => &mut self.md,
			Breakpoint::Lg => &mut self.lg,
		};
		*slot = value;
	}
}
