//! Walks an HTML tree and lays it out as text.
//!
//! The [`TextRenderer`] keeps a stack with the effective style of every open
//! element.  Text is written through the style on top of the stack into the
//! canvas that style is bound to.  Canvases live in the renderer and are
//! addressed by [`CanvasId`]: free-standing surfaces for the document and
//! for each open table, and the cells of the open tables.

use super::canvas::Canvas;
use super::table::{Table, TableCell};
use super::{refine, CanvasId, Display, ElementStyle, WhiteSpace};
use crate::config::Config;
use crate::css;
use crate::dom::{HtmlNode, NodeKind};

/// Bullets of unordered lists, by nesting depth.
const LIST_BULLETS: [&str; 4] = ["* ", "+ ", "o ", "- "];

/// The bullet used for a list item outside of any list.
const DEFAULT_BULLET: &str = "* ";

#[derive(Debug, Clone, PartialEq, Eq)]
enum BulletSource {
    Glyph(&'static str),
    Counter(usize),
}

#[derive(Debug)]
struct Frame {
    style: ElementStyle,
    // Where the element's block was opened, so that it is closed on the same
    // canvas even after the element was rebound to a table or cell.
    block_canvas: Option<CanvasId>,
}

enum Step<N> {
    Enter(N),
    Leave(String),
}

/// The state of one rendering pass.
#[derive(Debug)]
pub struct TextRenderer<'c> {
    config: &'c Config,
    stack: Vec<Frame>,
    surfaces: Vec<Canvas>,
    tables: Vec<Table>,
    bullets: Vec<BulletSource>,
    link_target: String,
    last_caption: Option<String>,
}

impl<'c> TextRenderer<'c> {
    /// A renderer with an empty root canvas, using the `body` style of the
    /// configured profile as the outermost style.
    pub fn new(config: &'c Config) -> TextRenderer<'c> {
        let mut root = config.css.get_or_default("body");
        root.canvas = CanvasId::ROOT;
        TextRenderer {
            config,
            stack: vec![Frame {
                style: root,
                block_canvas: None,
            }],
            surfaces: vec![Canvas::new()],
            tables: Vec::new(),
            bullets: Vec::new(),
            link_target: String::new(),
            last_caption: None,
        }
    }

    /// Render the tree below `root` and return the text.
    pub fn render<N: HtmlNode>(mut self, root: N) -> String {
        let mut work = vec![Step::Enter(root)];
        while let Some(step) = work.pop() {
            match step {
                Step::Enter(node) => {
                    match node.kind() {
                        NodeKind::Document => (),
                        NodeKind::Element { tag, attrs } => {
                            self.start_element(&tag, &attrs);
                            work.push(Step::Leave(tag));
                        }
                        NodeKind::Text(text) => {
                            self.add_text(&text);
                            continue;
                        }
                        NodeKind::Other => continue,
                    }
                    work.extend(node.children().into_iter().rev().map(Step::Enter));
                }
                Step::Leave(tag) => self.end_element(&tag),
            }
        }
        self.finish()
    }

    /// The effective style of the innermost open element.
    pub fn current_style(&self) -> &ElementStyle {
        // The root frame is never popped.
        &self.stack[self.stack.len() - 1].style
    }

    fn current_style_mut(&mut self) -> &mut ElementStyle {
        let last = self.stack.len() - 1;
        &mut self.stack[last].style
    }

    /// The canvas behind `id`, if it still exists.
    pub fn canvas_mut(&mut self, id: CanvasId) -> Option<&mut Canvas> {
        match id {
            CanvasId::Surface(index) => self.surfaces.get_mut(index),
            CanvasId::Cell { table, row, column } => self
                .tables
                .get_mut(table)?
                .cell_mut(row, column)
                .map(TableCell::canvas_mut),
        }
    }

    /// Write `text` decorated with the affixes of `style` into its canvas.
    fn write_styled(&mut self, style: &ElementStyle, text: &str) {
        if style.display == Display::None {
            return;
        }
        let whitespace = style.whitespace.unwrap_or(WhiteSpace::Normal);
        let text = style.decorate(text);
        if let Some(canvas) = self.canvas_mut(style.canvas) {
            canvas.write(&text, whitespace);
        }
    }

    fn write_current(&mut self, text: &str) {
        let style = self.current_style().clone();
        self.write_styled(&style, text);
    }

    /// Write a text node.
    pub fn add_text(&mut self, text: &str) {
        self.write_current(text);
    }

    /// Open an element.
    pub fn start_element(&mut self, tag: &str, attrs: &[(String, String)]) {
        let refined = refine(self.current_style(), self.config.css.get_or_default(tag));
        let mut style = css::apply_attributes(
            refined,
            attrs.iter().map(|(name, value)| (name.as_str(), value.as_str())),
        );
        if tag == "li" {
            style.list_bullet = self.next_bullet();
        }
        html_trace!("start_element({}): {}", tag, style);

        let block_canvas = if style.is_block() {
            if let Some(canvas) = self.canvas_mut(style.canvas) {
                canvas.open_block(&style);
            }
            Some(style.canvas)
        } else {
            None
        };
        self.stack.push(Frame {
            style,
            block_canvas,
        });

        match tag {
            "table" => self.start_table(),
            "tr" => self.start_tr(),
            "td" | "th" => self.start_td(),
            "ul" => {
                let depth = self.bullets.len();
                self.bullets
                    .push(BulletSource::Glyph(LIST_BULLETS[depth % LIST_BULLETS.len()]));
            }
            "ol" => self.bullets.push(BulletSource::Counter(1)),
            "br" => {
                let style = self.current_style();
                if style.display != Display::None {
                    let id = style.canvas;
                    if let Some(canvas) = self.canvas_mut(id) {
                        canvas.write_newline();
                    }
                }
            }
            "a" => {
                if self.config.display_links || self.config.display_anchors {
                    self.start_a(attrs);
                }
            }
            "img" => {
                if self.config.display_images {
                    self.start_img(attrs);
                }
            }
            _ => (),
        }
    }

    /// Close the innermost element, which must be a `tag`.
    pub fn end_element(&mut self, tag: &str) {
        html_trace!("end_element({})", tag);
        match tag {
            "table" => self.end_table(),
            "ul" | "ol" => {
                debug_assert!(!self.bullets.is_empty(), "list bullet stack underflow");
                self.bullets.pop();
            }
            "a" => {
                if self.config.display_links || self.config.display_anchors {
                    self.end_a();
                }
            }
            _ => (),
        }

        debug_assert!(self.stack.len() > 1, "element stack underflow");
        if self.stack.len() <= 1 {
            return;
        }
        if let Some(frame) = self.stack.pop() {
            if let Some(id) = frame.block_canvas {
                if let Some(canvas) = self.canvas_mut(id) {
                    canvas.close_tag(&frame.style);
                }
            }
        }
    }

    fn next_bullet(&mut self) -> String {
        match self.bullets.last_mut() {
            None => DEFAULT_BULLET.into(),
            Some(BulletSource::Glyph(glyph)) => (*glyph).into(),
            Some(BulletSource::Counter(counter)) => {
                let bullet = format!("{}. ", counter);
                *counter += 1;
                bullet
            }
        }
    }

    fn start_table(&mut self) {
        self.tables
            .push(Table::new(&self.config.table_cell_separator));
        self.surfaces.push(Canvas::new());
        let id = CanvasId::Surface(self.surfaces.len() - 1);
        self.current_style_mut().canvas = id;
    }

    fn start_tr(&mut self) {
        if self.current_style().display == Display::None {
            return;
        }
        if let Some(table) = self.tables.last_mut() {
            table.add_row();
        }
    }

    fn start_td(&mut self) {
        let (align, valign) = {
            let style = self.current_style();
            if style.display == Display::None {
                return;
            }
            (style.align, style.valign)
        };
        let depth = self.tables.len();
        if let Some(table) = self.tables.last_mut() {
            let (row, column) = table.add_cell(TableCell::new(align, valign));
            self.current_style_mut().canvas = CanvasId::Cell {
                table: depth - 1,
                row,
                column,
            };
        }
    }

    fn end_table(&mut self) {
        let mut table = match self.tables.pop() {
            Some(table) => table,
            None => return,
        };
        let outside_cells = if self.surfaces.len() > 1 {
            self.surfaces.pop().map(|mut canvas| canvas.get_text())
        } else {
            None
        };

        // A hidden table (or one below a hidden element) leaves no trace.
        if self.current_style().display == Display::None {
            return;
        }
        // The style the table element itself was refined from.
        let parent = match self.stack.len() {
            0 | 1 => return,
            len => self.stack[len - 2].style.clone(),
        };

        if let Some(text) = outside_cells {
            let text = text.trim();
            if !text.is_empty() {
                self.write_styled(&parent, text);
                if let Some(canvas) = self.canvas_mut(parent.canvas) {
                    canvas.write_newline();
                }
            }
        }

        let mut text = table.get_text();
        if text.ends_with('\n') {
            text.pop();
        }
        html_trace!("end_table: splicing {:?}", text);
        if let Some(canvas) = self.canvas_mut(parent.canvas) {
            if !text.is_empty() {
                canvas.write(&text, WhiteSpace::Pre);
            }
            canvas.flush_inline();
        }
    }

    fn start_a(&mut self, attrs: &[(String, String)]) {
        let attr = |wanted: &str| {
            attrs
                .iter()
                .find(|(name, _)| name == wanted)
                .map(|(_, value)| value.clone())
        };
        self.link_target.clear();
        if self.config.display_links {
            self.link_target = attr("href").unwrap_or_default();
        }
        if self.config.display_anchors && self.link_target.is_empty() {
            self.link_target = attr("name").unwrap_or_default();
        }
        if !self.link_target.is_empty() {
            self.write_current("[");
        }
    }

    fn end_a(&mut self) {
        if !self.link_target.is_empty() {
            let target = std::mem::take(&mut self.link_target);
            self.write_current(&format!("]({})", target));
        }
    }

    fn start_img(&mut self, attrs: &[(String, String)]) {
        if self.current_style().display == Display::None {
            return;
        }
        let find = |wanted: &str| attrs.iter().find(|(name, _)| name == wanted);
        let caption = match find("alt").or_else(|| find("title")) {
            Some((_, value)) => value.clone(),
            None => return,
        };
        if caption.is_empty() {
            return;
        }
        if self.config.deduplicate_captions && self.last_caption.as_ref() == Some(&caption) {
            html_trace_quiet!("start_img: skipping repeated caption {:?}", caption);
            return;
        }
        self.write_current(&format!("[{}]", caption));
        self.last_caption = Some(caption);
    }

    /// Finish rendering, returning the document text without trailing
    /// whitespace.
    pub fn finish(mut self) -> String {
        let text = match self.surfaces.first_mut() {
            Some(root) => root.get_text(),
            None => String::new(),
        };
        text.trim_end().to_string()
    }
}
