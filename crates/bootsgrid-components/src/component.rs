//! Component and renderer traits, and the `<b:column>` renderer

use crate::column::{ColumnProps, grid_classes};
use crate::error::Result;
use crate::settings::ColumnSettings;
use crate::writer::{HtmlResponseWriter, ResponseWriter};

/// Per-render state shared by a component tree.
pub struct RenderContext<'a> {
	settings: &'a ColumnSettings,
	writer: &'a mut dyn ResponseWriter,
}

impl<'a> RenderContext<'a> {
	/// Creates a context writing to `writer`
	pub fn new(settings: &'a ColumnSettings, writer: &'a mut dyn ResponseWriter) -> Self {
		Self { settings, writer }
	}

	/// Active settings
	pub fn settings(&self) -> &ColumnSettings {
		self.settings
	}

	/// Output sink
	pub fn writer(&mut self) -> &mut dyn ResponseWriter {
		&mut *self.writer
	}
}

/// Component trait - base interface for all UI components
pub trait Component: Send + Sync {
	/// Returns the component's name (for debugging)
	fn name(&self) -> &'static str;

	/// Writes the component, including its children
	fn encode(&self, ctx: &mut RenderContext<'_>) -> Result<()>;
}

/// Three-phase rendering of a component.
///
/// The host calls [`encode_begin`](Self::encode_begin),
/// [`encode_children`](Self::encode_children) and
/// [`encode_end`](Self::encode_end) in that order;
/// [`encode_all`](Self::encode_all) does exactly that.
pub trait Renderer {
	/// Component type handled by this renderer
	type Component;

	/// Writes the opening markup
	fn encode_begin(&self, ctx: &mut RenderContext<'_>, component: &Self::Component) -> Result<()>;

	/// Writes the content between opening and closing markup
	fn encode_children(&self, ctx: &mut RenderContext<'_>, component: &Self::Component)
	-> Result<()>;

	/// Writes the closing markup
	fn encode_end(&self, ctx: &mut RenderContext<'_>, component: &Self::Component) -> Result<()>;

	/// Runs all three phases
	fn encode_all(&self, ctx: &mut RenderContext<'_>, component: &Self::Component) -> Result<()> {
		self.encode_begin(ctx, component)?;
		self.encode_children(ctx, component)?;
		self.encode_end(ctx, component)
	}
}

/// Plain text node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text(pub String);

impl Text {
	/// Creates a text node
	pub fn new(text: impl Into<String>) -> Self {
		Self(text.into())
	}
}

impl Component for Text {
	fn name(&self) -> &'static str {
		"Text"
	}

	fn encode(&self, ctx: &mut RenderContext<'_>) -> Result<()> {
		ctx.writer().write_text(&self.0)
	}
}

/// Grid column (`<b:column>`)
pub struct Column {
	/// Column attributes
	pub props: ColumnProps,
	children: Vec<Box<dyn Component>>,
}

impl Column {
	/// Creates a column without children
	pub fn new(props: ColumnProps) -> Self {
		Self {
			props,
			children: Vec::new(),
		}
	}

	/// Appends a child component
	pub fn child(mut self, child: impl Component + 'static) -> Self {
		self.children.push(Box::new(child));
		self
	}

	/// Child components, in render order
	pub fn children(&self) -> &[Box<dyn Component>] {
		&self.children
	}
}

impl std::fmt::Debug for Column {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Column")
			.field("props", &self.props)
			.field("children", &self.children.len())
			.finish()
	}
}

impl Component for Column {
	fn name(&self) -> &'static str {
		"Column"
	}

	fn encode(&self, ctx: &mut RenderContext<'_>) -> Result<()> {
		ColumnRenderer.encode_all(ctx, self)
	}
}

/// Renders a [`Column`] as a grid `<div>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnRenderer;

impl Renderer for ColumnRenderer {
	type Component = Column;

	fn encode_begin(&self, ctx: &mut RenderContext<'_>, column: &Column) -> Result<()> {
		let props = &column.props;
		if !props.rendered {
			tracing::trace!(id = ?props.id, "Skipping column that is not rendered");
			return Ok(());
		}

		ctx.settings().validate()?;
		let classes = grid_classes(props, &ctx.settings().default_display).inspect_err(|e| {
			tracing::warn!(id = ?props.id, error = %e, "Invalid column attributes");
		})?;
		tracing::debug!(id = ?props.id, classes = %classes, "Rendering column");

		let render_client_id = ctx.settings().render_client_id;
		let writer = ctx.writer();
		writer.start_element("div")?;
		if let Some(dir) = props.dir.as_deref() {
			writer.write_attribute("dir", dir)?;
		}
		if render_client_id && let Some(id) = props.id.as_deref() {
			writer.write_attribute("id", id)?;
		}
		writer.write_attribute("class", &classes)?;
		if let Some(style) = props.style.as_deref() {
			writer.write_attribute("style", style)?;
		}
		Ok(())
	}

	fn encode_children(&self, ctx: &mut RenderContext<'_>, column: &Column) -> Result<()> {
		if !column.props.rendered {
			return Ok(());
		}
		for child in column.children() {
			child.encode(ctx)?;
		}
		Ok(())
	}

	fn encode_end(&self, ctx: &mut RenderContext<'_>, column: &Column) -> Result<()> {
		if !column.props.rendered {
			return Ok(());
		}
		ctx.writer().end_element("div")
	}
}

/// Renders `component` to an HTML string.
///
/// # Examples
///
/// ```
/// use bootsgrid_components::{Column, ColumnProps, ColumnSettings, Text, render_to_string};
///
/// let column = Column::new(ColumnProps::new().col_sm("half").id("c1")).child(Text::new("Hi"));
/// let html = render_to_string(&column, &ColumnSettings::default()).unwrap();
/// assert_eq!(html, r#"<div id="c1" class="col-sm-6">Hi</div>"#);
/// ```
pub fn render_to_string(component: &dyn Component, settings: &ColumnSettings) -> Result<String> {
	let mut writer = HtmlResponseWriter::new();
	let mut ctx = RenderContext::new(settings, &mut writer);
	component.encode(&mut ctx)?;
	writer.into_html()
}
