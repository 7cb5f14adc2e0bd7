//! # Bootsgrid
//!
//! Server-side Bootstrap grid components.
//!
//! This crate re-exports the member crates behind feature flags, so
//! applications depend on `bootsgrid` alone.
//!
//! ## Feature Flags
//!
//! - `components` (default): the grid column renderer from
//!   `bootsgrid-components`.
//!
//! ## Example
//!
//! ```
//! # #[cfg(feature = "components")]
//! # {
//! use bootsgrid::prelude::*;
//!
//! let column = Column::new(ColumnProps::new().span("half").offset(3)).child(Text::new("Hello"));
//! let html = render_to_string(&column, &ColumnSettings::default()).unwrap();
//! assert_eq!(html, r#"<div class="col-md-6 col-md-offset-3">Hello</div>"#);
//! # }
//! ```

#[cfg(feature = "components")]
pub use bootsgrid_components as components;

#[cfg(feature = "components")]
pub use bootsgrid_components::{
	Breakpoint, Column, ColumnProps, ColumnRenderer, ColumnSettings, Component, ComponentError,
	HtmlResponseWriter, RenderContext, Renderer, ResponseWriter, Text, grid_classes,
	parse_column_size, render_to_string,
};

/// Commonly used types
pub mod prelude {
	#[cfg(feature = "components")]
	pub use bootsgrid_components::{
		Breakpoint, Column, ColumnProps, ColumnSettings, Component, Renderer, ResponseWriter,
		Text, render_to_string,
	};
}
