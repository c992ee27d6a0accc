//! Rendering boundary for mdeck slide decks.
//!
//! This crate sits in front of the external markdown engine: [`create`] takes
//! the one recognized option, a `source_url` pointing at a markdown slide
//! deck, fetches it, and returns a [`SlideShow`] holding the rendered HTML
//! document. Markdown parsing and HTML generation are delegated wholesale to
//! the [`markdown`] crate; nothing here inspects markdown syntax.
//!
//! Slide boundaries are lines consisting solely of `---`. Each slide becomes
//! one `<section class="slide">` in the output.
//!
//! # Usage
//!
//! ```rust,no_run
//! use deck_render::{Options, create};
//!
//! let slide_show = create(Options {
//!     source_url: "slides/monoids.md".to_string(),
//! })?;
//! println!("{}", slide_show.to_html());
//! # Ok::<(), deck_render::RenderError>(())
//! ```

use std::fs;
use std::path::PathBuf;

use itertools::Itertools;

mod error;

pub use error::RenderError;

/// Configuration accepted by [`create`].
#[derive(Debug, Clone)]
pub struct Options {
    /// Path to the markdown slide deck to fetch and render.
    pub source_url: String,
}

/// A rendered slide deck.
#[derive(Debug)]
pub struct SlideShow {
    source_url: String,
    html: String,
}

impl SlideShow {
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn to_html(&self) -> &str {
        &self.html
    }
}

/// Fetches the markdown source named by `options.source_url` and renders it
/// into a [`SlideShow`].
///
/// The source's existence is not checked in advance; an unreadable source is
/// reported as [`RenderError::Io`].
pub fn create(options: Options) -> Result<SlideShow, RenderError> {
    let source = fs::read_to_string(&options.source_url).map_err(|source| RenderError::Io {
        path: PathBuf::from(&options.source_url),
        source,
    })?;
    let body = split_slides(&source)
        .iter()
        .map(|slide| {
            format!(
                "<section class=\"slide\">\n{}\n</section>",
                markdown::to_html(slide)
            )
        })
        .join("\n");

    Ok(SlideShow {
        source_url: options.source_url,
        html: format!("<div class=\"slideshow\">\n{}\n</div>\n", body),
    })
}

// A line consisting solely of `---` separates slides.
fn split_slides(source: &str) -> Vec<String> {
    let mut slides = Vec::new();
    let mut current = String::new();

    for line in source.lines() {
        if line.trim() == "---" {
            slides.push(std::mem::take(&mut current));
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }

    slides.push(current);
    slides
}
