//! The rendering contract shared by every document element
//!
//! Anything that can appear inside a document body, a table cell, or a
//! list item implements [`Renderable`]. Plain text and numbers get
//! blanket implementations so callers can pass them anywhere an element
//! is expected; the conversion to Typst source happens exactly once, at
//! the boundary where the value enters a builder.

/// Capability to produce Typst source text.
pub trait Renderable {
    /// Render the value to Typst source.
    fn render(&self) -> String;
}

impl Renderable for str {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Renderable for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl Renderable for bool {
    fn render(&self) -> String {
        if *self { "true" } else { "false" }.to_string()
    }
}

macro_rules! impl_renderable_for_numbers {
    ($($ty:ty),*) => {
        $(
            impl Renderable for $ty {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_renderable_for_numbers!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: Renderable + ?Sized> Renderable for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

/// Indent every line after the first by two spaces.
///
/// This is the transform used to nest multi-line content inside a
/// function call such as `#table(...)` or `#figure(...)`.
pub(crate) fn indent_lines(text: &str) -> String {
    text.replace('\n', "\n  ")
}

/// Strip one pair of surrounding double quotes, if present.
///
/// Markdown-style forms (headings, list items) are not in code mode, so
/// a quoted string literal would render its quotes verbatim.
pub(crate) fn strip_quotes(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
}

/// Quote a string exactly once.
pub(crate) fn quote(text: &str) -> String {
    format!("\"{}\"", strip_quotes(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_renders_verbatim() {
        assert_eq!("1pt".render(), "1pt");
        assert_eq!(String::from("(x, _) => 1pt").render(), "(x, _) => 1pt");
    }

    #[test]
    fn test_bool_renders_lowercase() {
        assert_eq!(true.render(), "true");
        assert_eq!(false.render(), "false");
    }

    #[test]
    fn test_numbers_render_decimal() {
        assert_eq!(42i64.render(), "42");
        assert_eq!(2.5f64.render(), "2.5");
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"Heading\""), "Heading");
        assert_eq!(strip_quotes("Heading"), "Heading");
        assert_eq!(strip_quotes("\"unterminated"), "\"unterminated");
    }

    #[test]
    fn test_quote_is_idempotent() {
        assert_eq!(quote("image.png"), "\"image.png\"");
        assert_eq!(quote("\"image.png\""), "\"image.png\"");
    }

    #[test]
    fn test_indent_lines() {
        assert_eq!(indent_lines("a\nb"), "a\n  b");
    }
}
