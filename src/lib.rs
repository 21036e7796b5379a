//! Render HTML as plain text, keeping its visual structure.
//!
//! Block elements start new lines and are separated by their vertical
//! margins, list items get bullets and indentation, preformatted text is
//! kept verbatim and tables are laid out in aligned columns.  Styling
//! follows a small, CSS-like profile (see [`css::CssProfile`]) which can be
//! adjusted per tag.
//!
//! # Examples
//!
//! ```rust
//! # use htmlcanvas::from_read;
//! let html = b"
//!        <p>Some names:</p>
//!        <ul>
//!          <li>Thomas</li>
//!          <li>Anton</li>
//!        </ul>";
//! assert_eq!(from_read(&html[..]).unwrap(),
//!            "\
//! Some names:
//!
//!   * Thomas
//!   * Anton");
//! ```
//!
//! Rendering is configured through [`config::Config`]:
//!
//! ```rust
//! let html = b"<a href=\"https://example.com\">a link</a> <img alt=\"logo\">";
//! let text = htmlcanvas::config::strict()
//!     .display_links(true)
//!     .display_images(true)
//!     .string_from_read(&html[..])
//!     .unwrap();
//! assert_eq!(text, "[a link](https://example.com) [logo]");
//! ```
//!
//! A small command-line converter is included as an example:
//!
//! ```sh
//! $ cargo run --example htmlcanvas -- --links foo.html
//! [...]
//! ```

#![deny(missing_docs)]

#[macro_use]
mod macros;

pub mod css;
pub mod dom;
pub mod render;

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use markup5ever_rcdom::{Handle, RcDom};
use std::io;

use render::text_renderer::TextRenderer;

/// Errors from reading and parsing HTML.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error while reading the input.
    #[error("I/O error")]
    IoError(#[from] io::Error),
}

/// A `Result` with this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

pub mod config {
    //! Configure the HTML to text translation using the `Config` type, which can be
    //! constructed using one of the functions in this module.

    use crate::css::CssProfile;
    use crate::dom::HtmlNode;
    use crate::render::table::DEFAULT_CELL_SEPARATOR;
    use crate::render::text_renderer::TextRenderer;
    use crate::{parse, Result};

    /// Configure the HTML processing.
    #[derive(Clone, Debug)]
    pub struct Config {
        pub(crate) css: CssProfile,
        pub(crate) display_links: bool,
        pub(crate) display_anchors: bool,
        pub(crate) display_images: bool,
        pub(crate) deduplicate_captions: bool,
        pub(crate) table_cell_separator: String,
    }

    impl Default for Config {
        fn default() -> Self {
            relaxed()
        }
    }

    impl Config {
        /// Reads HTML from `input`, and returns the rendered text.
        pub fn string_from_read<R: std::io::Read>(&self, input: R) -> Result<String> {
            Ok(parse(input)?.render(self))
        }

        /// Render an already parsed tree.
        pub fn render_node<N: HtmlNode>(&self, node: N) -> String {
            TextRenderer::new(self).render(node)
        }

        /// The tag profile in use.
        pub fn css(&self) -> &CssProfile {
            &self.css
        }

        /// Replace the tag profile.
        pub fn profile(mut self, css: CssProfile) -> Self {
            self.css = css;
            self
        }

        /// Render links as `[text](href)`.
        pub fn display_links(mut self, display: bool) -> Self {
            self.display_links = display;
            self
        }

        /// Render anchors without a link target as `[text](name)`.
        pub fn display_anchors(mut self, display: bool) -> Self {
            self.display_anchors = display;
            self
        }

        /// Render images as `[alt]`, falling back to their title.
        pub fn display_images(mut self, display: bool) -> Self {
            self.display_images = display;
            self
        }

        /// Don't repeat an image caption identical to the previous one.
        pub fn deduplicate_captions(mut self, dedup: bool) -> Self {
            self.deduplicate_captions = dedup;
            self
        }

        /// The text placed between table cells.  Defaults to two spaces.
        pub fn table_cell_separator(mut self, separator: &str) -> Self {
            self.table_cell_separator = separator.into();
            self
        }
    }

    /// Return a Config using the given tag profile, with links, anchors
    /// and images hidden.
    pub fn with_profile(css: CssProfile) -> Config {
        Config {
            css,
            display_links: false,
            display_anchors: false,
            display_images: false,
            deduplicate_captions: false,
            table_cell_separator: DEFAULT_CELL_SEPARATOR.into(),
        }
    }

    /// Return a Config using [`CssProfile::strict`].
    pub fn strict() -> Config {
        with_profile(CssProfile::strict())
    }

    /// Return a Config using [`CssProfile::relaxed`].
    pub fn relaxed() -> Config {
        with_profile(CssProfile::relaxed())
    }
}

/// A parsed HTML document.
#[derive(Clone)]
pub struct Document(Handle);

impl Document {
    /// The root node of the document.
    pub fn root(&self) -> Handle {
        self.0.clone()
    }

    /// Render this document as text using `config`.
    pub fn render(&self, config: &config::Config) -> String {
        html_trace_quiet!("render: {:?}", config);
        TextRenderer::new(config).render(self.root())
    }
}

/// Reads and parses UTF-8 HTML from `input`.
pub fn parse(mut input: impl io::Read) -> Result<Document> {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            ..Default::default()
        },
        ..Default::default()
    };
    let dom = parse_document(RcDom::default(), opts)
        .from_utf8()
        .read_from(&mut input)?;
    Ok(Document(dom.document))
}

/// Reads HTML from `input`, and returns it rendered as text with the
/// default (relaxed) configuration.
pub fn from_read<R>(input: R) -> Result<String>
where
    R: io::Read,
{
    config::Config::default().string_from_read(input)
}

#[cfg(test)]
mod tests;
