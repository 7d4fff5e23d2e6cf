//! Image element

use crate::render::{quote, Renderable};

/// Supported image file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImageFormat {
    Png,
    Jpg,
    Gif,
    Svg,
}

impl ImageFormat {
    fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Gif => "gif",
            ImageFormat::Svg => "svg",
        }
    }
}

/// How an image fills the space defined by `width` and `height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImageFit {
    Cover,
    Contain,
    Stretch,
}

impl ImageFit {
    fn as_str(&self) -> &'static str {
        match self {
            ImageFit::Cover => "cover",
            ImageFit::Contain => "contain",
            ImageFit::Stretch => "stretch",
        }
    }
}

/// An `#image(...)` element.
///
/// The path is interpreted relative to the Typst file the output ends
/// up in; this builder performs no file I/O.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Image {
    path: String,
    format: Option<ImageFormat>,
    width: Option<String>,
    height: Option<String>,
    alt: Option<String>,
    fit: Option<ImageFit>,
}

impl Image {
    pub fn new(path: impl Into<String>) -> Self {
        Image {
            path: path.into(),
            format: None,
            width: None,
            height: None,
            alt: None,
            fit: None,
        }
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_height(mut self, height: impl Into<String>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn with_fit(mut self, fit: ImageFit) -> Self {
        self.fit = Some(fit);
        self
    }
}

impl Renderable for Image {
    fn render(&self) -> String {
        let mut args = vec![quote(&self.path)];
        if let Some(format) = self.format {
            args.push(format!("format: \"{}\"", format.as_str()));
        }
        if let Some(width) = &self.width {
            args.push(format!("width: {}", width));
        }
        if let Some(height) = &self.height {
            args.push(format!("height: {}", height));
        }
        if let Some(alt) = &self.alt {
            args.push(format!("alt: {}", alt));
        }
        if let Some(fit) = self.fit {
            args.push(format!("fit: \"{}\"", fit.as_str()));
        }

        format!("#image({})", args.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_path_is_quoted_once() {
        assert_eq!(Image::new("image.png").render(), "#image(\"image.png\")");
        assert_eq!(
            Image::new("\"image.png\"").render(),
            "#image(\"image.png\")"
        );
    }

    #[test]
    fn test_dimensions() {
        let image = Image::new("image.png").with_width("100%").with_height("50%");
        assert_eq!(
            image.render(),
            "#image(\"image.png\", width: 100%, height: 50%)"
        );
    }

    #[test]
    fn test_format_and_fit_are_quoted_keywords() {
        let image = Image::new("logo")
            .with_format(ImageFormat::Svg)
            .with_fit(ImageFit::Contain);
        assert_eq!(
            image.render(),
            "#image(\"logo\", format: \"svg\", fit: \"contain\")"
        );
    }
}
