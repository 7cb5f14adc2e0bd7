//! Response writers
//!
//! Renderers never build markup by hand; they stream elements, attributes
//! and text through a [`ResponseWriter`]. [`HtmlResponseWriter`] collects
//! the output into a string.

use crate::error::{ComponentError, Result};

/// Streaming sink for rendered markup.
///
/// Attributes may only be written between [`start_element`](Self::start_element)
/// and the first piece of content or nested element.
pub trait ResponseWriter {
	/// Opens an element. The start tag stays open for attributes.
	fn start_element(&mut self, name: &str) -> Result<()>;

	/// Writes an attribute on the currently open start tag.
	fn write_attribute(&mut self, name: &str, value: &str) -> Result<()>;

	/// Writes escaped text content.
	fn write_text(&mut self, text: &str) -> Result<()>;

	/// Closes the innermost open element, which must be `name`.
	fn end_element(&mut self, name: &str) -> Result<()>;
}

/// [`ResponseWriter`] that buffers HTML in memory.
#[derive(Debug, Default)]
pub struct HtmlResponseWriter {
	html: String,
	open: Vec<String>,
	start_tag_pending: bool,
}

impl HtmlResponseWriter {
	/// Creates an empty writer
	pub fn new() -> Self {
		Self::default()
	}

	/// Markup written so far
	pub fn as_str(&self) -> &str {
		&self.html
	}

	/// Consumes the writer and returns the finished markup.
	///
	/// Fails if any element is still open.
	pub fn into_html(self) -> Result<String> {
		if let Some(name) = self.open.last() {
			return Err(ComponentError::RenderingError(format!(
				"element <{name}> was never closed"
			)));
		}
		Ok(self.html)
	}

	fn finish_start_tag(&mut self) {
		if self.start_tag_pending {
			self.html.push('>');
			self.start_tag_pending = false;
		}
	}
}

impl ResponseWriter for HtmlResponseWriter {
	fn start_element(&mut self, name: &str) -> Result<()> {
		self.finish_start_tag();
		self.html.push('<');
		self.html.push_str(name);
		self.open.push(name.to_string());
		self.start_tag_pending = true;
		Ok(())
	}

	fn write_attribute(&mut self, name: &str, value: &str) -> Result<()> {
		if !self.start_tag_pending {
			return Err(ComponentError::InvalidAttribute(format!(
				"{name} written outside of a start tag"
			)));
		}
		self.html.push(' ');
		self.html.push_str(name);
		self.html.push_str("=\"");
		html_escape::encode_double_quoted_attribute_to_string(value, &mut self.html);
		self.html.push('"');
		Ok(())
	}

	fn write_text(&mut self, text: &str) -> Result<()> {
		self.finish_start_tag();
		html_escape::encode_text_to_string(text, &mut self.html);
		Ok(())
	}

	fn end_element(&mut self, name: &str) -> Result<()> {
		match self.open.last() {
			Some(open) if open == name => {
				self.open.pop();
				self.finish_start_tag();
				self.html.push_str("</");
				self.html.push_str(name);
				self.html.push('>');
				Ok(())
			}
			Some(open) => Err(ComponentError::RenderingError(format!(
				"expected </{open}>, found </{name}>"
			))),
			None => Err(ComponentError::RenderingError(format!(
				"</{name}> has no matching start tag"
			))),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn writer() -> HtmlResponseWriter {
		HtmlResponseWriter::new()
	}

	#[rstest]
	fn test_empty_element(mut writer: HtmlResponseWriter) {
		// Act
		writer.start_element("div").unwrap();
		writer.end_element("div").unwrap();

		// Assert
		assert_eq!(writer.into_html().unwrap(), "<div></div>");
	}

	#[rstest]
	fn test_attributes_are_escaped(mut writer: HtmlResponseWriter) {
		writer.start_element("div").unwrap();
		writer.write_attribute("style", "font-family: \"A&B\"").unwrap();
		writer.end_element("div").unwrap();

		assert_eq!(
			writer.as_str(),
			r#"<div style="font-family: &quot;A&amp;B&quot;"></div>"#
		);
	}

	#[rstest]
	fn test_text_is_escaped(mut writer: HtmlResponseWriter) {
		writer.start_element("p").unwrap();
		writer.write_text("<b>1 & 2</b>").unwrap();
		writer.end_element("p").unwrap();

		assert_eq!(writer.as_str(), "<p>&lt;b&gt;1 &amp; 2&lt;/b&gt;</p>");
	}

	#[rstest]
	fn test_nested_elements(mut writer: HtmlResponseWriter) {
		writer.start_element("div").unwrap();
		writer.write_attribute("class", "row").unwrap();
		writer.start_element("span").unwrap();
		writer.end_element("span").unwrap();
		writer.end_element("div").unwrap();

		assert_eq!(writer.as_str(), r#"<div class="row"><span></span></div>"#);
	}

	#[rstest]
	fn test_attribute_after_content_fails(mut writer: HtmlResponseWriter) {
		// Arrange
		writer.start_element("div").unwrap();
		writer.write_text("x").unwrap();

		// Act
		let result = writer.write_attribute("id", "late");

		// Assert
		assert!(matches!(result, Err(ComponentError::InvalidAttribute(_))));
	}

	#[rstest]
	fn test_mismatched_end_tag_fails(mut writer: HtmlResponseWriter) {
		writer.start_element("div").unwrap();

		assert!(matches!(
			writer.end_element("span"),
			Err(ComponentError::RenderingError(_))
		));
		assert!(matches!(
			HtmlResponseWriter::new().end_element("div"),
			Err(ComponentError::RenderingError(_))
		));
	}

	#[rstest]
	fn test_mismatched_end_tag_keeps_element_open(mut writer: HtmlResponseWriter) {
		// Arrange
		writer.start_element("div").unwrap();
		let _ = writer.end_element("span");

		// Act
		let result = writer.into_html();

		// Assert
		assert!(matches!(result, Err(ComponentError::RenderingError(_))));
	}

	#[rstest]
	fn test_end_tag_after_mismatch_still_closes(mut writer: HtmlResponseWriter) {
		writer.start_element("div").unwrap();
		assert!(writer.end_element("span").is_err());
		writer.end_element("div").unwrap();

		assert_eq!(writer.into_html().unwrap(), "<div></div>");
	}

	#[rstest]
	fn test_unclosed_element_fails(mut writer: HtmlResponseWriter) {
		writer.start_element("div").unwrap();

		let err = writer.into_html().unwrap_err();

		assert_eq!(err.to_string(), "Rendering error: element <div> was never closed");
	}
}
