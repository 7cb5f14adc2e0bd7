//! # bootsgrid-components
//!
//! Server-side rendering of Bootstrap 3 grid columns.
//!
//! A [`Column`] turns its responsive attributes (sizes, offsets, `hidden`,
//! `visible`) into the grid classes of a `<div>`:
//!
//! ```
//! use bootsgrid_components::{Column, ColumnProps, ColumnSettings, render_to_string};
//!
//! let column = Column::new(
//!     ColumnProps::new()
//!         .col_xs("12")
//!         .col_sm("half")
//!         .hidden("xs")
//!         .style_class("sidebar"),
//! );
//! let html = render_to_string(&column, &ColumnSettings::default()).unwrap();
//! assert_eq!(
//!     html,
//!     r#"<div class="col-xs-12 col-sm-6 hidden-xs sidebar"></div>"#
//! );
//! ```
//!
//! The class computation itself is available as the pure function
//! [`grid_classes`].

pub mod column;
pub mod component;
pub mod error;
pub mod responsive;
pub mod settings;
pub mod size;
pub mod writer;

pub use column::{ColumnProps, DEFAULT_DISPLAY, grid_classes};
pub use component::{
	Column, ColumnRenderer, Component, RenderContext, Renderer, Text, render_to_string,
};
pub use error::{ComponentError, Result};
pub use responsive::{Breakpoint, ResponsiveValue};
pub use settings::{ColumnSettings, SettingsError};
pub use size::parse_column_size;
pub use writer::{HtmlResponseWriter, ResponseWriter};
