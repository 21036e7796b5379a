//! A drawing surface collecting finished lines of output.
//!
//! The canvas owns the [`Block`] currently being written and the
//! [`Prefix`] describing the indentation of the open block elements.
//! Vertical spacing between blocks is tracked as a single `margin` counter:
//! the number of blank-line units already emitted since the last line of
//! content.  Opening or closing a block only ever tops this up to the
//! required amount, so adjacent margins collapse to their maximum.

pub mod block;
pub mod prefix;

use self::block::Block;
use self::prefix::Prefix;
use super::{ElementStyle, WhiteSpace};

// Effectively "infinitely far from any previous block", so that leading
// margins at the very start of a canvas are suppressed.
const INITIAL_MARGIN: usize = 1000;

/// An ordered list of output lines plus the line being written.
#[derive(Debug, Clone)]
pub struct Canvas {
    margin: usize,
    current_block: Block,
    blocks: Vec<String>,
    prefix: Prefix,
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas::new()
    }
}

impl Canvas {
    /// An empty canvas.
    pub fn new() -> Self {
        Canvas {
            margin: INITIAL_MARGIN,
            current_block: Block::new(0),
            blocks: Vec::new(),
            prefix: Prefix::new(),
        }
    }

    /// The finished lines.  Call [`flush_inline`](Canvas::flush_inline)
    /// first to include the current line.
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// Mutable access to the finished lines, for layout passes which reshape
    /// a canvas after writing has finished.
    pub fn blocks_mut(&mut self) -> &mut Vec<String> {
        &mut self.blocks
    }

    /// The line being written.
    pub fn current_block(&self) -> &Block {
        &self.current_block
    }

    /// The indentation currently in effect.
    pub fn left_margin(&self) -> usize {
        self.prefix.current_padding()
    }

    /// Append a finished line.
    pub fn add_block(&mut self, block: impl Into<String>) {
        self.blocks.push(block.into());
    }

    fn add_margin(&mut self, required: usize) {
        if required > self.margin {
            let newlines = required - self.margin;
            self.current_block.add_idx(newlines);
            self.add_block("\n".repeat(newlines - 1));
            self.margin = required;
        }
    }

    /// Start a block element: print a bullet left over from an empty
    /// enclosing list item, push the element's indentation and emit the
    /// margin required before it.
    pub fn open_block(&mut self, style: &ElementStyle) {
        if !self.flush_inline() && style.has_list_bullet() {
            self.write_unconsumed_bullet();
        }
        self.prefix
            .register_prefix(style.padding_inline, &style.list_bullet);

        self.add_margin(style.previous_margin_after.max(style.margin_before));
    }

    /// Emit the margin required after a block element.
    pub fn close_block(&mut self, style: &ElementStyle) {
        self.add_margin(style.margin_after);
    }

    /// Finish an element.  Inline elements leave no trace on the canvas.
    pub fn close_tag(&mut self, style: &ElementStyle) {
        if !style.is_block() {
            return;
        }
        if !self.flush_inline() && style.has_list_bullet() {
            self.write_unconsumed_bullet();
        }
        self.prefix.remove_last_prefix();
        self.close_block(style);
    }

    /// Move the current line into the finished lines if it has any content.
    /// Returns whether anything was flushed.
    pub fn flush_inline(&mut self) -> bool {
        if self.current_block.is_empty() {
            return false;
        }
        let next = self.current_block.new_block(&mut self.prefix);
        let finished = std::mem::replace(&mut self.current_block, next);
        self.blocks.push(finished.into_content());
        self.margin = 0;
        true
    }

    /// End the current line; on an empty line this produces a blank line.
    pub fn write_newline(&mut self) {
        if !self.flush_inline() {
            self.add_block("");
            self.current_block = self.current_block.new_block(&mut self.prefix);
        }
    }

    /// Write `text` into the current line.
    pub fn write(&mut self, text: &str, whitespace: WhiteSpace) {
        self.current_block.merge(text, whitespace, &mut self.prefix);
    }

    /// Print a pending bullet on a line of its own.
    pub fn write_unconsumed_bullet(&mut self) {
        let bullet = self.prefix.unconsumed_bullet();
        if !bullet.is_empty() {
            self.current_block.add_idx(bullet.chars().count());
            self.add_block(bullet);
            self.current_block = self.current_block.new_block(&mut self.prefix);
            self.margin = 0;
        }
    }

    /// Flush the current line and return all lines joined by newlines.
    pub fn get_text(&mut self) -> String {
        self.flush_inline();
        self.blocks.join("\n")
    }
}
