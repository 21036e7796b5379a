//! The text layout engine.
//!
//! An [`ElementStyle`] describes how one HTML element lays out its content.
//! Styles are refined from parent to child while the document is walked, and
//! text is written through them into a [`canvas::Canvas`], which takes care
//! of margins, indentation and list bullets.  Tables are collected into a
//! [`table::Table`] and laid out once they are complete.

pub mod canvas;
pub mod strings;
pub mod table;
pub mod text_renderer;

use std::fmt;

/// Whether an element flows inline, starts its own block, or is hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Display {
    /// Flows along with the surrounding text.
    #[default]
    Inline,
    /// Starts on a new line and takes part in margin collapsing.
    Block,
    /// Not rendered, and neither are any of its descendants.
    None,
}

/// Whitespace handling for text content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WhiteSpace {
    /// Runs of whitespace collapse into a single space.
    Normal,
    /// Whitespace is kept verbatim.
    Pre,
}

/// Horizontal alignment of a table cell's lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HorizontalAlignment {
    /// Pad on the right.
    #[default]
    Left,
    /// Pad on the left.
    Right,
    /// Pad on both sides.
    Center,
}

/// Vertical alignment of a table cell within its row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    /// Blank lines go below the content.
    Top,
    /// Blank lines are split above and below.
    #[default]
    Middle,
    /// Blank lines go above the content.
    Bottom,
}

/// Handle to the canvas an element writes into.
///
/// Canvases live in the renderer: `Surface` indexes a free-standing canvas
/// (the document root or a table's own canvas) and `Cell` addresses the
/// canvas owned by a cell of an open table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanvasId {
    /// A free-standing canvas.
    Surface(usize),
    /// The canvas of a table cell: table stack depth, row and column.
    Cell {
        /// Position of the table on the stack of open tables.
        table: usize,
        /// Row index within the table.
        row: usize,
        /// Column index within the row.
        column: usize,
    },
}

impl CanvasId {
    /// The document's root canvas.
    pub const ROOT: CanvasId = CanvasId::Surface(0);
}

impl Default for CanvasId {
    fn default() -> Self {
        CanvasId::ROOT
    }
}

/// The layout properties of one HTML element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementStyle {
    /// The element's tag name.
    pub tag: String,
    /// Inline, block or hidden.
    pub display: Display,
    /// Whitespace handling; `None` inherits from the parent.
    pub whitespace: Option<WhiteSpace>,
    /// Text inserted before each piece of the element's text content.
    pub prefix: String,
    /// Text appended after each piece of the element's text content.
    pub suffix: String,
    /// Blank lines required before the block.
    pub margin_before: usize,
    /// Blank lines required after the block.
    pub margin_after: usize,
    /// Indentation added for the element's content.
    pub padding_inline: usize,
    /// Bullet printed on the block's first line.
    pub list_bullet: String,
    /// Drop whitespace-only affixes inside preformatted text.
    pub limit_whitespace_affixes: bool,
    /// Alignment if the element becomes a table cell.
    pub align: HorizontalAlignment,
    /// Vertical alignment if the element becomes a table cell.
    pub valign: VerticalAlignment,
    /// The `margin_after` of the enclosing block, used for collapsing.
    pub previous_margin_after: usize,
    /// Where the element's text goes.
    pub canvas: CanvasId,
}

impl Default for ElementStyle {
    fn default() -> Self {
        ElementStyle {
            tag: String::from("/"),
            display: Display::Inline,
            whitespace: None,
            prefix: String::new(),
            suffix: String::new(),
            margin_before: 0,
            margin_after: 0,
            padding_inline: 0,
            list_bullet: String::new(),
            limit_whitespace_affixes: false,
            align: HorizontalAlignment::Left,
            valign: VerticalAlignment::Middle,
            previous_margin_after: 0,
            canvas: CanvasId::ROOT,
        }
    }
}

impl ElementStyle {
    /// An inline style for `tag` with every other property at its default.
    pub fn new(tag: &str) -> Self {
        ElementStyle {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Set the display mode.
    pub fn display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    /// Set the whitespace handling.
    pub fn whitespace(mut self, whitespace: WhiteSpace) -> Self {
        self.whitespace = Some(whitespace);
        self
    }

    /// Set the margins before and after the block.
    pub fn margins(mut self, before: usize, after: usize) -> Self {
        self.margin_before = before;
        self.margin_after = after;
        self
    }

    /// Set the inline padding.
    pub fn padding(mut self, padding_inline: usize) -> Self {
        self.padding_inline = padding_inline;
        self
    }

    /// Set prefix and suffix.
    pub fn affixes(mut self, prefix: &str, suffix: &str) -> Self {
        self.prefix = prefix.into();
        self.suffix = suffix.into();
        self
    }

    /// Drop whitespace-only affixes in preformatted regions.
    pub fn limit_whitespace_affixes(mut self, limit: bool) -> Self {
        self.limit_whitespace_affixes = limit;
        self
    }

    /// Set the list bullet.
    pub fn list_bullet(mut self, bullet: &str) -> Self {
        self.list_bullet = bullet.into();
        self
    }

    /// Set the horizontal alignment.
    pub fn align(mut self, align: HorizontalAlignment) -> Self {
        self.align = align;
        self
    }

    /// Set the vertical alignment.
    pub fn valign(mut self, valign: VerticalAlignment) -> Self {
        self.valign = valign;
        self
    }

    /// Return true if the element starts a block.
    pub fn is_block(&self) -> bool {
        self.display == Display::Block
    }

    /// Return true if the element carries a list bullet.
    pub fn has_list_bullet(&self) -> bool {
        !self.list_bullet.is_empty()
    }

    /// Wrap `text` in the element's prefix and suffix.
    pub fn decorate(&self, text: &str) -> String {
        let mut result = String::with_capacity(self.prefix.len() + text.len() + self.suffix.len());
        result.push_str(&self.prefix);
        result.push_str(text);
        result.push_str(&self.suffix);
        result
    }
}

impl fmt::Display for ElementStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{} {:?} ws={:?} margin={}/{} padding={} bullet={:?}>",
            self.tag,
            self.display,
            self.whitespace,
            self.margin_before,
            self.margin_after,
            self.padding_inline,
            self.list_bullet
        )
    }
}

/// Compute the effective style of `child` inside `parent`.
///
/// `display: none` is sticky: once an ancestor is hidden every descendant is
/// hidden too and no other property is inherited.
pub fn refine(parent: &ElementStyle, mut child: ElementStyle) -> ElementStyle {
    child.canvas = parent.canvas;

    if parent.display == Display::None {
        child.display = Display::None;
        return child;
    }

    if child.whitespace.is_none() {
        child.whitespace = parent.whitespace;
    }

    if child.limit_whitespace_affixes && child.whitespace == Some(WhiteSpace::Pre) {
        if strings::is_blank(&child.prefix) {
            child.prefix.clear();
        }
        if strings::is_blank(&child.suffix) {
            child.suffix.clear();
        }
    }

    if parent.is_block() && child.is_block() {
        child.previous_margin_after = parent.margin_after;
    }

    child
}
