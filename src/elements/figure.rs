//! Figure element
//!
//! Wraps any renderable body in a `#figure(...)` call with optional
//! caption, placement, and numbering attributes. Multi-line bodies
//! (tables, nested lists) keep their shape through the standard
//! two-space inner indent.

use crate::render::{indent_lines, Renderable};

/// A figure wrapping a body element.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Figure {
    body: String,
    placement: Option<String>,
    caption: Option<String>,
    kind: Option<String>,
    supplement: Option<String>,
    numbering: Option<String>,
    gap: Option<String>,
    outlined: Option<bool>,
}

impl Figure {
    pub fn new(body: impl Renderable) -> Self {
        Figure {
            body: body.render(),
            placement: None,
            caption: None,
            kind: None,
            supplement: None,
            numbering: None,
            gap: None,
            outlined: None,
        }
    }

    pub fn with_placement(mut self, placement: impl Into<String>) -> Self {
        self.placement = Some(placement.into());
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_supplement(mut self, supplement: impl Into<String>) -> Self {
        self.supplement = Some(supplement.into());
        self
    }

    pub fn with_numbering(mut self, numbering: impl Into<String>) -> Self {
        self.numbering = Some(numbering.into());
        self
    }

    pub fn with_gap(mut self, gap: impl Into<String>) -> Self {
        self.gap = Some(gap.into());
        self
    }

    pub fn with_outlined(mut self, outlined: bool) -> Self {
        self.outlined = Some(outlined);
        self
    }
}

impl Renderable for Figure {
    fn render(&self) -> String {
        // Code mode: drop the body's leading hashtag
        let mut args = vec![self.body.trim_start_matches('#').to_string()];
        if let Some(placement) = &self.placement {
            args.push(format!("placement: {}", placement));
        }
        if let Some(caption) = &self.caption {
            args.push(format!("caption: {}", caption));
        }
        if let Some(kind) = &self.kind {
            args.push(format!("kind: {}", kind));
        }
        if let Some(supplement) = &self.supplement {
            args.push(format!("supplement: {}", supplement));
        }
        if let Some(numbering) = &self.numbering {
            args.push(format!("numbering: {}", numbering));
        }
        if let Some(gap) = &self.gap {
            args.push(format!("gap: {}", gap));
        }
        if let Some(outlined) = self.outlined {
            args.push(format!("outlined: {}", outlined.render()));
        }

        format!("#figure(\n  {}\n)", indent_lines(&args.join(",\n")))
    }
}
