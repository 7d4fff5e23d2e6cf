//! Top-level document with import aggregation
//!
//! A document wraps one body element and an ordered list of `#import`
//! statements. It deliberately does not implement [`Renderable`], so a
//! document can never be nested inside another element; the type system
//! keeps it top-level.
//!
//! [`Renderable`]: crate::render::Renderable

use std::fmt;

use crate::render::{quote, Renderable};
use crate::utils::error::{Error, Result};

/// A complete Typst source file: imports followed by a body.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    imports: Vec<Import>,
    body: String,
}

impl Document {
    pub fn new(body: impl Renderable) -> Self {
        Document {
            imports: Vec::new(),
            body: body.render(),
        }
    }

    /// Append an `#import` statement.
    ///
    /// `members` may name specific members or a single `"*"` to import
    /// everything; mixing the two is rejected.
    pub fn add_import<S: Into<String>>(
        &mut self,
        module: impl Into<String>,
        members: impl IntoIterator<Item = S>,
    ) -> Result<()> {
        let import = Import::new(module, members)?;
        self.imports.push(import);
        Ok(())
    }

    /// Render the document source: imports joined by newlines, a blank
    /// line, then the body.
    pub fn render(&self) -> String {
        if self.imports.is_empty() {
            return self.body.clone();
        }
        let imports: Vec<String> = self.imports.iter().map(Import::render).collect();
        format!("{}\n\n{}", imports.join("\n"), self.body)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// A single `#import` statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Import {
    module: String,
    members: Vec<String>,
}

impl Import {
    pub fn new<S: Into<String>>(
        module: impl Into<String>,
        members: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let module = module.into();
        let members: Vec<String> = members.into_iter().map(Into::into).collect();
        if members.len() > 1 && members.iter().any(|m| m == "*") {
            return Err(Error::attribute(format!(
                "import of '{}' cannot name all and specific members at the same time",
                module
            )));
        }

        Ok(Import { module, members })
    }

    fn render(&self) -> String {
        let mut rendered = format!("#import {}", quote(&self.module));
        if !self.members.is_empty() {
            rendered.push_str(": ");
            rendered.push_str(&self.members.join(", "));
        }

        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_body_only() {
        let doc = Document::new("Hello, world!");
        assert_eq!(doc.render(), "Hello, world!");
    }

    #[test]
    fn test_imports_precede_body() {
        let mut doc = Document::new("= Report");
        doc.add_import("utils.typ", ["*"]).unwrap();
        doc.add_import("colors.typ", ["red", "blue"]).unwrap();
        assert_eq!(
            doc.render(),
            "#import \"utils.typ\": *\n#import \"colors.typ\": red, blue\n\n= Report"
        );
    }

    #[test]
    fn test_module_is_quoted_once() {
        let mut doc = Document::new("x");
        doc.add_import("\"pre-quoted.typ\"", Vec::<String>::new())
            .unwrap();
        assert_eq!(doc.render(), "#import \"pre-quoted.typ\"\n\nx");
    }

    #[test]
    fn test_wildcard_cannot_mix_with_members() {
        let mut doc = Document::new("x");
        let err = doc.add_import("m.typ", ["*", "thing"]).unwrap_err();
        assert!(err.to_string().contains("m.typ"));
    }
}
