//! The line currently being assembled on a canvas.

use super::prefix::Prefix;
use crate::render::strings::is_collapsible_whitespace;
use crate::render::WhiteSpace;

/// The text of the current output line.
///
/// A block usually becomes a single line of output; preformatted text merged
/// into it may contain further newlines.  Whitespace collapsing state is
/// carried across calls to [`merge`](Block::merge), so text arriving in
/// pieces from different nodes collapses exactly as if it had been one
/// string.
#[derive(Debug, Clone)]
pub struct Block {
    idx: usize,
    content: String,
    collapsible_whitespace: bool,
}

impl Block {
    /// An empty block starting at running offset `idx`.
    pub fn new(idx: usize) -> Self {
        Block {
            idx,
            content: String::new(),
            collapsible_whitespace: true,
        }
    }

    /// The running offset of the block's end.
    pub fn idx(&self) -> usize {
        self.idx
    }

    /// Advance the running offset by `len`.
    pub fn add_idx(&mut self, len: usize) {
        self.idx += len;
    }

    /// Return true if nothing has been written to the block.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Whether the next whitespace character would be dropped.
    pub fn has_collapsible_whitespace(&self) -> bool {
        self.collapsible_whitespace
    }

    #[cfg(test)]
    pub(crate) fn set_collapsible_whitespace(&mut self, collapsible: bool) {
        self.collapsible_whitespace = collapsible;
    }

    /// The raw buffer, including a trailing collapsible space.
    pub fn raw_content(&self) -> &str {
        &self.content
    }

    /// The block's text without a trailing collapsible space.
    pub fn content(&mut self) -> &str {
        if self.collapsible_whitespace && self.content.ends_with(' ') {
            self.content.pop();
            self.idx -= 1;
        }
        &self.content
    }

    /// Consume the block, returning its finished text.
    pub fn into_content(mut self) -> String {
        self.content();
        self.content
    }

    /// The block following this one.  Resets the prefix so the next line
    /// receives its indentation.
    pub fn new_block(&self, prefix: &mut Prefix) -> Block {
        prefix.set_consumed(false);
        Block::new(self.idx + 1)
    }

    /// Merge `text` into the block using the given whitespace handling.
    pub fn merge(&mut self, text: &str, whitespace: WhiteSpace, prefix: &mut Prefix) {
        match whitespace {
            WhiteSpace::Pre => self.merge_pre_text(text, prefix),
            WhiteSpace::Normal => self.merge_normal_text(text, prefix),
        }
    }

    fn push(&mut self, text: &str) {
        self.content.push_str(text);
        self.idx += text.chars().count();
    }

    fn merge_normal_text(&mut self, text: &str, prefix: &mut Prefix) {
        let mut normalized = String::with_capacity(text.len());
        for c in text.chars() {
            if !is_collapsible_whitespace(c) {
                normalized.push(c);
                self.collapsible_whitespace = false;
            } else if !self.collapsible_whitespace {
                normalized.push(' ');
                self.collapsible_whitespace = true;
            }
        }

        if !normalized.is_empty() {
            if self.is_empty() {
                let first = prefix.first();
                self.push(&first);
            }
            self.push(&normalized);
        }
    }

    fn merge_pre_text(&mut self, text: &str, prefix: &mut Prefix) {
        let mut result = prefix.first();
        if !text.is_empty() {
            let indent = prefix.rest();
            for (i, line) in text.split('\n').enumerate() {
                if i > 0 {
                    result.push('\n');
                    result.push_str(&indent);
                }
                result.push_str(line);
            }
        }
        if !result.is_empty() {
            self.push(&result);
        }
        self.collapsible_whitespace = false;
    }
}

#[cfg(test)]
mod tests {
    use super::Block;
    use crate::render::canvas::prefix::Prefix;
    use crate::render::WhiteSpace;

    fn merged(collapsible: bool, text: &str) -> Block {
        let mut block = Block::new(0);
        block.set_collapsible_whitespace(collapsible);
        block.merge(text, WhiteSpace::Normal, &mut Prefix::new());
        block
    }

    #[test]
    fn collapsible_start() {
        let cases = [
            ("", "", true),
            ("Hallo", "Hallo", false),
            (" ", "", true),
            ("  ", "", true),
            (" Hallo ", "Hallo ", true),
        ];
        for (input, content, collapsible) in cases {
            let block = merged(true, input);
            assert_eq!(block.raw_content(), content, "input {:?}", input);
            assert_eq!(block.has_collapsible_whitespace(), collapsible);
        }
    }

    #[test]
    fn non_collapsible_start() {
        let cases = [
            ("", "", false),
            ("Hallo", "Hallo", false),
            (" ", " ", true),
            ("  ", " ", true),
            (" Hallo ", " Hallo ", true),
        ];
        for (input, content, collapsible) in cases {
            let block = merged(false, input);
            assert_eq!(block.raw_content(), content, "input {:?}", input);
            assert_eq!(block.has_collapsible_whitespace(), collapsible);
        }
    }

    #[test]
    fn chunking_does_not_matter() {
        let text = "  Ehre \t sei\n\n Gott!\u{a0} ";
        let mut whole = Block::new(0);
        whole.merge(text, WhiteSpace::Normal, &mut Prefix::new());

        for split in 0..text.len() {
            if !text.is_char_boundary(split) {
                continue;
            }
            let mut prefix = Prefix::new();
            let mut pieces = Block::new(0);
            pieces.merge(&text[..split], WhiteSpace::Normal, &mut prefix);
            pieces.merge(&text[split..], WhiteSpace::Normal, &mut prefix);
            assert_eq!(pieces.raw_content(), whole.raw_content());
        }
        assert_eq!(whole.into_content(), "Ehre sei Gott!");
    }

    #[test]
    fn content_strips_one_trailing_space() {
        let mut block = merged(true, "a ");
        assert_eq!(block.idx(), 2);
        assert_eq!(block.content(), "a");
        assert_eq!(block.idx(), 1);
    }

    #[test]
    fn pre_text_is_verbatim() {
        let mut prefix = Prefix::new();
        let mut block = Block::new(0);
        block.merge("  a  \n b", WhiteSpace::Pre, &mut prefix);
        assert!(!block.has_collapsible_whitespace());
        // A following space is not swallowed.
        block.merge(" c", WhiteSpace::Normal, &mut prefix);
        assert_eq!(block.into_content(), "  a  \n b c");
    }

    #[test]
    fn pre_text_is_indented() {
        let mut prefix = Prefix::new();
        prefix.register_prefix(4, "");
        let mut block = Block::new(0);
        let text = "def f():\n  return 1\n";
        block.merge(text, WhiteSpace::Pre, &mut prefix);
        assert_eq!(block.raw_content(), "    def f():\n      return 1\n    ");

        let restored: Vec<_> = block
            .raw_content()
            .split('\n')
            .map(|line| line.strip_prefix("    ").unwrap_or(line))
            .collect();
        assert_eq!(restored.join("\n"), text);
    }

    #[test]
    fn first_line_gets_prefix() {
        let mut prefix = Prefix::new();
        prefix.register_prefix(4, "");
        prefix.register_prefix(0, "* ");
        let mut block = Block::new(0);
        block.merge(" a ", WhiteSpace::Normal, &mut prefix);
        block.merge("b", WhiteSpace::Normal, &mut prefix);
        assert_eq!(block.into_content(), "  * a b");
    }
}
