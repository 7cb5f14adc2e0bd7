//! `<b:column>` attributes and grid class composition.

use crate::error::Result;
use crate::responsive::{Breakpoint, ResponsiveValue};
use crate::size::{GRID_COLUMNS, parse_column_size};

/// Display mode used for `visible-*` classes when none is configured.
pub const DEFAULT_DISPLAY: &str = "block";

/// Attributes of a single `<b:column>` instance.
///
/// Sizes are kept as raw tokens (`"6"`, `"half"`, `"4 columns"`) and only
/// resolved when classes are computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnProps {
	/// Per-breakpoint column sizes
	pub sizes: ResponsiveValue<String>,
	/// Medium size alias; wins over `sizes.md` when positive
	pub span: Option<String>,
	/// Per-breakpoint offsets
	pub offsets: ResponsiveValue<u32>,
	/// Medium offset alias; wins over `offsets.md` when positive
	pub offset: Option<u32>,
	/// Hide on this breakpoint and every narrower one
	pub hidden: Option<String>,
	/// Show on this breakpoint and every wider one
	pub visible: Option<String>,
	/// Display mode for `visible-*` classes (`block`, `inline`, `inline-block`)
	pub display: Option<String>,
	/// Extra CSS classes, appended verbatim
	pub style_class: Option<String>,
	/// Inline style
	pub style: Option<String>,
	/// Text direction (`ltr`, `rtl`)
	pub dir: Option<String>,
	/// Client id
	pub id: Option<String>,
	/// When `false` the column produces no output at all
	pub rendered: bool,
}

impl Default for ColumnProps {
	fn default() -> Self {
		Self {
			sizes: ResponsiveValue::default(),
			span: None,
			offsets: ResponsiveValue::default(),
			offset: None,
			hidden: None,
			visible: None,
			display: None,
			style_class: None,
			style: None,
			dir: None,
			id: None,
			rendered: true,
		}
	}
}

impl ColumnProps {
	/// Create a column with no attributes set
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the size for a breakpoint
	pub fn col(mut self, breakpoint: Breakpoint, size: impl Into<String>) -> Self {
		self.sizes.set(breakpoint, Some(size.into()));
		self
	}

	/// Set `col-xs`
	pub fn col_xs(self, size: impl Into<String>) -> Self {
		self.col(Breakpoint::Xs, size)
	}

	/// Set `col-sm`
	pub fn col_sm(self, size: impl Into<String>) -> Self {
		self.col(Breakpoint::Sm, size)
	}

	/// Set `col-md`
	pub fn col_md(self, size: impl Into<String>) -> Self {
		self.col(Breakpoint::Md, size)
	}

	/// Set `col-lg`
	pub fn col_lg(self, size: impl Into<String>) -> Self {
		self.col(Breakpoint::Lg, size)
	}

	/// Set `span`
	pub fn span(mut self, size: impl Into<String>) -> Self {
		self.span = Some(size.into());
		self
	}

	/// Set the offset for a breakpoint
	pub fn offset_at(mut self, breakpoint: Breakpoint, columns: u32) -> Self {
		self.offsets.set(breakpoint, Some(columns));
		self
	}

	/// Set `offset-xs`
	pub fn offset_xs(self, columns: u32) -> Self {
		self.offset_at(Breakpoint::Xs, columns)
	}

	/// Set `offset-sm`
	pub fn offset_sm(self, columns: u32) -> Self {
		self.offset_at(Breakpoint::Sm, columns)
	}

	/// Set `offset-md`
	pub fn offset_md(self, columns: u32) -> Self {
		self.offset_at(Breakpoint::Md, columns)
	}

	/// Set `offset-lg`
	pub fn offset_lg(self, columns: u32) -> Self {
		self.offset_at(Breakpoint::Lg, columns)
	}

	/// Set `offset`
	pub fn offset(mut self, columns: u32) -> Self {
		self.offset = Some(columns);
		self
	}

	/// Set `hidden`
	pub fn hidden(mut self, token: impl Into<String>) -> Self {
		self.hidden = Some(token.into());
		self
	}

	/// Set `visible`
	pub fn visible(mut self, token: impl Into<String>) -> Self {
		self.visible = Some(token.into());
		self
	}

	/// Set `display`
	pub fn display(mut self, mode: impl Into<String>) -> Self {
		self.display = Some(mode.into());
		self
	}

	/// Set `styleClass`
	pub fn style_class(mut self, class: impl Into<String>) -> Self {
		self.style_class = Some(class.into());
		self
	}

	/// Set `style`
	pub fn style(mut self, style: impl Into<String>) -> Self {
		self.style = Some(style.into());
		self
	}

	/// Set `dir`
	pub fn dir(mut self, dir: impl Into<String>) -> Self {
		self.dir = Some(dir.into());
		self
	}

	/// Set the client id
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Set `rendered`
	pub fn rendered(mut self, rendered: bool) -> Self {
		self.rendered = rendered;
		self
	}

	/// Computes the class string using [`DEFAULT_DISPLAY`] as fallback display mode.
	pub fn classes(&self) -> Result<String> {
		grid_classes(self, DEFAULT_DISPLAY)
	}

	fn offset_for(&self, breakpoint: Breakpoint) -> u32 {
		self.offsets.get(breakpoint).copied().unwrap_or(0)
	}

	fn size_for(&self, breakpoint: Breakpoint) -> Result<i32> {
		parse_column_size(self.sizes.get(breakpoint).map(String::as_str))
	}
}

/// Builds the `class` attribute of a column.
///
/// `default_display` is used for `visible-*` classes when the column has no
/// `display` of its own.
///
/// # Errors
///
/// Fails when a size token cannot be parsed, or when `hidden`/`visible`
/// hold a token outside their legal set.
///
/// # Examples
///
/// ```
/// use bootsgrid_components::column::{ColumnProps, grid_classes};
///
/// let props = ColumnProps::new().col_sm("half").offset_xs(2).style_class("extra");
/// assert_eq!(
///     grid_classes(&props, "block").unwrap(),
///     "col-sm-6 col-xs-offset-2 extra"
/// );
/// ```
pub fn grid_classes(props: &ColumnProps, default_display: &str) -> Result<String> {
	let xs = props.size_for(Breakpoint::Xs)?;
	let sm = props.size_for(Breakpoint::Sm)?;
	let lg = props.size_for(Breakpoint::Lg)?;

	let span = parse_column_size(props.span.as_deref())?;
	let md = if span > 0 {
		span
	} else {
		props.size_for(Breakpoint::Md)?
	};
	// Any explicit small/large size switches to breakpoint-specific layout,
	// otherwise an unsized column fills the row.
	let md = match md {
		md if md > 0 => md,
		_ if xs > 0 || sm > 0 || lg > 0 => 0,
		_ => GRID_COLUMNS,
	};

	let offset_md = match props.offset {
		Some(offset) if offset > 0 => offset,
		_ => props.offset_for(Breakpoint::Md),
	};

	let mut classes: Vec<String> = Vec::new();
	if md > 0 {
		classes.push(format!("col-md-{md}"));
	}
	if offset_md > 0 {
		classes.push(format!("col-md-offset-{offset_md}"));
	}

	for (breakpoint, size) in [(Breakpoint::Xs, xs), (Breakpoint::Sm, sm), (Breakpoint::Lg, lg)] {
		if size > 0 {
			classes.push(format!("col-{breakpoint}-{size}"));
		} else if size == 0 {
			classes.push(format!("hidden-{breakpoint}"));
		}
	}

	if let Some(hidden) = props.hidden.as_deref() {
		let hidden = Breakpoint::parse_hidden(hidden)?;
		classes.extend(hidden.and_below().iter().map(|bp| format!("hidden-{bp}")));
	}

	if let Some(visible) = props.visible.as_deref() {
		let visible = Breakpoint::parse_visible(visible)?;
		let display = props.display.as_deref().unwrap_or(default_display);
		classes.extend(
			visible
				.and_above()
				.iter()
				.map(|bp| format!("visible-{bp}-{display}")),
		);
	}

	for breakpoint in [Breakpoint::Xs, Breakpoint::Sm, Breakpoint::Lg] {
		let offset = props.offset_for(breakpoint);
		if offset > 0 {
			classes.push(format!("col-{breakpoint}-offset-{offset}"));
		}
	}

	if let Some(style_class) = props.style_class.as_deref() {
		classes.push(style_class.to_string());
	}

	Ok(classes.join(" ").trim().to_string())
}
