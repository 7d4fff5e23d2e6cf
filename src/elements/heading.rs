//! Heading element
//!
//! A heading with only a body and an absolute level renders in markup
//! form (`== Title`); as soon as any other attribute is set it switches
//! to the `#heading(...)` function form, which is the only form that
//! can express depth, numbering, or outline behavior.

use crate::render::{strip_quotes, Renderable};
use crate::utils::error::{Error, Result};

/// A section heading.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heading {
    body: String,
    level: Option<usize>,
    depth: Option<usize>,
    offset: Option<usize>,
    numbering: Option<String>,
    supplement: Option<String>,
    outlined: Option<bool>,
    bookmarked: Option<bool>,
}

impl Heading {
    pub fn new(body: impl Renderable) -> Self {
        Heading {
            body: body.render(),
            level: None,
            depth: None,
            offset: None,
            numbering: None,
            supplement: None,
            outlined: None,
            bookmarked: None,
        }
    }

    /// Absolute nesting depth, starting from one. Mutually exclusive
    /// with `depth`/`offset`.
    pub fn with_level(mut self, level: usize) -> Result<Self> {
        if level < 1 {
            return Err(Error::attribute("level must be greater than 0"));
        }
        if self.depth.is_some() || self.offset.is_some() {
            return Err(Error::attribute(
                "level cannot be set if depth or offset is set",
            ));
        }
        self.level = Some(level);
        Ok(self)
    }

    /// Relative nesting depth, starting from one.
    pub fn with_depth(mut self, depth: usize) -> Result<Self> {
        if depth < 1 {
            return Err(Error::attribute("depth must be greater than 0"));
        }
        if self.level.is_some() {
            return Err(Error::attribute(
                "level cannot be set if depth or offset is set",
            ));
        }
        self.depth = Some(depth);
        Ok(self)
    }

    /// Starting offset applied to the relative depth.
    pub fn with_offset(mut self, offset: usize) -> Result<Self> {
        if self.level.is_some() {
            return Err(Error::attribute(
                "level cannot be set if depth or offset is set",
            ));
        }
        self.offset = Some(offset);
        Ok(self)
    }

    pub fn with_numbering(mut self, numbering: impl Into<String>) -> Self {
        self.numbering = Some(numbering.into());
        self
    }

    pub fn with_supplement(mut self, supplement: impl Renderable) -> Self {
        self.supplement = Some(supplement.render());
        self
    }

    pub fn with_outlined(mut self, outlined: bool) -> Self {
        self.outlined = Some(outlined);
        self
    }

    pub fn with_bookmarked(mut self, bookmarked: bool) -> Self {
        self.bookmarked = Some(bookmarked);
        self
    }
}

impl Renderable for Heading {
    fn render(&self) -> String {
        let mut args = vec![self.body.clone()];
        if let Some(level) = self.level {
            args.push(format!("level: {}", level));
        }
        if let Some(depth) = self.depth {
            args.push(format!("depth: {}", depth));
        }
        if let Some(offset) = self.offset {
            args.push(format!("offset: {}", offset));
        }
        if let Some(numbering) = &self.numbering {
            args.push(format!("numbering: {}", numbering));
        }
        if let Some(supplement) = &self.supplement {
            args.push(format!("supplement: {}", supplement));
        }
        if let Some(outlined) = self.outlined {
            args.push(format!("outlined: {}", outlined.render()));
        }
        if let Some(bookmarked) = self.bookmarked {
            args.push(format!("bookmarked: {}", bookmarked.render()));
        }

        if let (Some(level), 2) = (self.level, args.len()) {
            // Markup form is not in code mode, so literal quotes would
            // show up verbatim
            format!("{} {}", "=".repeat(level), strip_quotes(&self.body))
        } else {
            // Function form is in code mode; drop the body's leading
            // hashtag
            args[0] = args[0].trim_start_matches('#').to_string();
            format!("#heading({})", args.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_markup_form() {
        let h = Heading::new("Heading 1").with_level(1).unwrap();
        assert_eq!(h.render(), "= Heading 1");

        let h = Heading::new("Heading 1").with_level(3).unwrap();
        assert_eq!(h.render(), "=== Heading 1");
    }

    #[test]
    fn test_markup_form_strips_quotes() {
        let h = Heading::new("\"Quoted\"").with_level(2).unwrap();
        assert_eq!(h.render(), "== Quoted");
    }

    #[test]
    fn test_function_form() {
        let h = Heading::new("\"Heading 1\"")
            .with_depth(2)
            .unwrap()
            .with_offset(1)
            .unwrap();
        assert_eq!(h.render(), "#heading(\"Heading 1\", depth: 2, offset: 1)");
    }

    #[test]
    fn test_any_extra_attribute_forces_function_form() {
        let h = Heading::new("\"H\"")
            .with_level(1)
            .unwrap()
            .with_numbering("\"1.1\"");
        assert_eq!(h.render(), "#heading(\"H\", level: 1, numbering: \"1.1\")");
    }

    #[test]
    fn test_outlined_and_bookmarked_render_lowercase() {
        let h = Heading::new("\"H\"").with_outlined(false).with_bookmarked(true);
        assert_eq!(
            h.render(),
            "#heading(\"H\", outlined: false, bookmarked: true)"
        );
    }

    #[test]
    fn test_level_validation() {
        assert!(Heading::new("H").with_level(0).is_err());
        assert!(Heading::new("H").with_depth(0).is_err());
        let err = Heading::new("H")
            .with_depth(2)
            .unwrap()
            .with_level(1)
            .unwrap_err();
        assert!(err.to_string().contains("level"));
        assert!(Heading::new("H")
            .with_level(1)
            .unwrap()
            .with_offset(1)
            .is_err());
    }
}
