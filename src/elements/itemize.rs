//! Bullet point and numbered lists
//!
//! Both list kinds render in markup form (`- item` / `+ item`) while no
//! option is set, and switch to the `#list(...)` / `#enum(...)` function
//! form as soon as one is. Lists nest inside each other in either form;
//! nested lists are indented by two spaces in markup form and wrapped
//! in their own content block in function form.

use crate::render::{indent_lines, strip_quotes, Renderable};
use crate::table::{render_arg, ArgValue};
use crate::utils::error::{Error, Result};

/// One entry of a list: plain content or a nested list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListItem {
    Plain(String),
    Bullets(Itemize),
    Numbered(Enumerate),
}

impl ListItem {
    /// Wrap any renderable element as a plain item.
    pub fn plain(value: impl Renderable) -> Self {
        ListItem::Plain(value.render())
    }
}

impl From<&str> for ListItem {
    fn from(value: &str) -> Self {
        ListItem::Plain(value.to_string())
    }
}

impl From<String> for ListItem {
    fn from(value: String) -> Self {
        ListItem::Plain(value)
    }
}

impl From<Itemize> for ListItem {
    fn from(value: Itemize) -> Self {
        ListItem::Bullets(value)
    }
}

impl From<Enumerate> for ListItem {
    fn from(value: Enumerate) -> Self {
        ListItem::Numbered(value)
    }
}

/// A bullet point list.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itemize {
    elements: Vec<ListItem>,
    tight: Option<bool>,
    marker: Option<ArgValue>,
    indent: Option<String>,
    body_indent: Option<String>,
    spacing: Option<String>,
}

impl Itemize {
    pub fn new() -> Self {
        Itemize::default()
    }

    pub fn from_items(items: impl IntoIterator<Item = impl Into<ListItem>>) -> Self {
        Itemize {
            elements: items.into_iter().map(Into::into).collect(),
            ..Itemize::default()
        }
    }

    /// Add an element to the list.
    pub fn add(&mut self, item: impl Into<ListItem>) {
        self.elements.push(item.into());
    }

    pub fn with_tight(mut self, tight: bool) -> Self {
        self.tight = Some(tight);
        self
    }

    /// Bullet marker: a single marker or a per-depth list.
    pub fn with_marker(mut self, marker: impl Into<ArgValue>) -> Result<Self> {
        let marker = marker.into();
        match &marker {
            ArgValue::Str(_) | ArgValue::List(_) => {}
            other => {
                return Err(Error::attribute(format!(
                    "marker must be a string or list of strings, got {}",
                    other.shape()
                )));
            }
        }
        self.marker = Some(marker);
        Ok(self)
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = Some(indent.into());
        self
    }

    pub fn with_body_indent(mut self, body_indent: impl Into<String>) -> Self {
        self.body_indent = Some(body_indent.into());
        self
    }

    pub fn with_spacing(mut self, spacing: impl Into<String>) -> Self {
        self.spacing = Some(spacing.into());
        self
    }

    fn args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.tight == Some(true) {
            args.push("tight: true".to_string());
        }
        if let Some(marker) = &self.marker {
            args.push(format!("marker: {}", render_arg(marker)));
        }
        if let Some(indent) = &self.indent {
            args.push(format!("indent: {}", indent));
        }
        if let Some(body_indent) = &self.body_indent {
            args.push(format!("body-indent: {}", body_indent));
        }
        if let Some(spacing) = &self.spacing {
            args.push(format!("spacing: {}", spacing));
        }

        args
    }
}

impl Renderable for Itemize {
    fn render(&self) -> String {
        let args = self.args();
        if args.is_empty() {
            render_markdown(&self.elements, "-")
        } else {
            render_functional(args, &self.elements, "list")
        }
    }
}

/// A numbered list.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enumerate {
    elements: Vec<ListItem>,
    tight: Option<bool>,
    numbering: Option<String>,
    start: Option<usize>,
    full: Option<bool>,
    indent: Option<String>,
    body_indent: Option<String>,
    spacing: Option<String>,
    number_align: Option<String>,
}

impl Enumerate {
    pub fn new() -> Self {
        Enumerate::default()
    }

    pub fn from_items(items: impl IntoIterator<Item = impl Into<ListItem>>) -> Self {
        Enumerate {
            elements: items.into_iter().map(Into::into).collect(),
            ..Enumerate::default()
        }
    }

    /// Add an element to the list.
    pub fn add(&mut self, item: impl Into<ListItem>) {
        self.elements.push(item.into());
    }

    pub fn with_tight(mut self, tight: bool) -> Self {
        self.tight = Some(tight);
        self
    }

    pub fn with_numbering(mut self, numbering: impl Into<String>) -> Self {
        self.numbering = Some(numbering.into());
        self
    }

    pub fn with_start(mut self, start: usize) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_full(mut self, full: bool) -> Self {
        self.full = Some(full);
        self
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = Some(indent.into());
        self
    }

    pub fn with_body_indent(mut self, body_indent: impl Into<String>) -> Self {
        self.body_indent = Some(body_indent.into());
        self
    }

    pub fn with_spacing(mut self, spacing: impl Into<String>) -> Self {
        self.spacing = Some(spacing.into());
        self
    }

    pub fn with_number_align(mut self, number_align: impl Into<String>) -> Self {
        self.number_align = Some(number_align.into());
        self
    }

    fn args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.tight == Some(true) {
            args.push("tight: true".to_string());
        }
        if let Some(numbering) = &self.numbering {
            args.push(format!("numbering: {}", numbering));
        }
        if let Some(start) = self.start {
            args.push(format!("start: {}", start));
        }
        if self.full == Some(true) {
            args.push("full: true".to_string());
        }
        if let Some(indent) = &self.indent {
            args.push(format!("indent: {}", indent));
        }
        if let Some(body_indent) = &self.body_indent {
            args.push(format!("body-indent: {}", body_indent));
        }
        if let Some(spacing) = &self.spacing {
            args.push(format!("spacing: {}", spacing));
        }
        if let Some(number_align) = &self.number_align {
            args.push(format!("number-align: {}", number_align));
        }

        args
    }
}

impl Renderable for Enumerate {
    fn render(&self) -> String {
        let args = self.args();
        if args.is_empty() {
            render_markdown(&self.elements, "+")
        } else {
            render_functional(args, &self.elements, "enum")
        }
    }
}

fn render_markdown(elements: &[ListItem], prefix: &str) -> String {
    let body: Vec<String> = elements
        .iter()
        .map(|item| match item {
            ListItem::Plain(text) => format!("{} {}", prefix, strip_quotes(text)),
            ListItem::Bullets(list) => format!("  {}", indent_lines(&list.render())),
            ListItem::Numbered(list) => format!("  {}", indent_lines(&list.render())),
        })
        .collect();

    body.join("\n")
}

fn render_functional(args: Vec<String>, elements: &[ListItem], name: &str) -> String {
    let mut parts = args;
    for item in elements {
        let block = match item {
            ListItem::Plain(text) => format!("[{}]", strip_quotes(text)),
            ListItem::Bullets(list) => format!("[\n{}\n]", list.render()),
            ListItem::Numbered(list) => format!("[\n{}\n]", list.render()),
        };
        parts.push(block);
    }

    format!("#{}(\n  {}\n)", name, indent_lines(&parts.join(",\n")))
}
