//! Document element builders
//!
//! Everything besides the table subsystem: headings, bullet and
//! numbered lists, figures, images, and the top-level document with
//! its import list. Each element renders independently through
//! [`Renderable`] and composes freely with the others.
//!
//! [`Renderable`]: crate::render::Renderable

pub mod document;
pub mod figure;
pub mod heading;
pub mod image;
pub mod itemize;

// Re-export commonly used types
pub use document::{Document, Import};
pub use figure::Figure;
pub use heading::Heading;
pub use image::{Image, ImageFit, ImageFormat};
pub use itemize::{Enumerate, Itemize, ListItem};
