//! Left indentation and list bullets for the lines of a canvas.

use crate::render::strings;

#[derive(Debug, Clone, PartialEq, Eq)]
struct PrefixItem {
    padding: usize,
    // Taken (and cleared) the first time it is printed.
    bullet: Option<String>,
}

/// Tracks the indentation contributed by each open block and the bullets
/// still waiting to be printed.
///
/// Every block element registers one item when it opens and removes it when
/// it closes, so `current_padding` is always the sum of the open items'
/// paddings.  A bullet is printed at most once: whichever of
/// [`first`](Prefix::first) or [`unconsumed_bullet`](Prefix::unconsumed_bullet)
/// takes it first removes it.
#[derive(Debug, Default, Clone)]
pub struct Prefix {
    current_padding: usize,
    items: Vec<PrefixItem>,
    consumed: bool,
}

impl Prefix {
    /// An empty prefix with no indentation.
    pub fn new() -> Self {
        Default::default()
    }

    /// The total indentation of all open blocks.
    pub fn current_padding(&self) -> usize {
        self.current_padding
    }

    /// Whether the prefix has already been emitted for the current line.
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    /// Mark the prefix of the current line as (not) yet emitted.
    pub fn set_consumed(&mut self, consumed: bool) {
        self.consumed = consumed;
    }

    /// Open a block contributing `padding` columns and an optional bullet.
    pub fn register_prefix(&mut self, padding: usize, bullet: &str) {
        self.current_padding += padding;
        self.items.push(PrefixItem {
            padding,
            bullet: if bullet.is_empty() {
                None
            } else {
                Some(bullet.into())
            },
        });
    }

    /// Close the most recently opened block.
    pub fn remove_last_prefix(&mut self) {
        debug_assert!(!self.items.is_empty(), "prefix stack underflow");
        if let Some(item) = self.items.pop() {
            debug_assert!(item.padding <= self.current_padding);
            self.current_padding = self.current_padding.saturating_sub(item.padding);
        }
    }

    /// Take the innermost bullet which has not been printed yet.
    fn pop_next_bullet(&mut self) -> Option<String> {
        self.items
            .iter_mut()
            .rev()
            .find_map(|item| item.bullet.take())
    }

    /// The prefix for the first line of a block: indentation with the
    /// pending bullet (if any) right-aligned into it.  Returns an empty
    /// string once the current line's prefix has been used.
    pub fn first(&mut self) -> String {
        if self.consumed {
            return String::new();
        }
        self.consumed = true;

        let bullet = self.pop_next_bullet().unwrap_or_default();
        let mut result = String::with_capacity(self.current_padding.max(bullet.len()));
        strings::push_spaces(
            &mut result,
            self.current_padding.saturating_sub(strings::width(&bullet)),
        );
        result.push_str(&bullet);
        result
    }

    /// The indentation for continuation lines of preformatted text.
    pub fn rest(&self) -> String {
        strings::spaces(self.current_padding)
    }

    /// A bullet that was never printed because its block stayed empty,
    /// aligned to the indentation of the enclosing block.
    pub fn unconsumed_bullet(&mut self) -> String {
        if self.consumed {
            return String::new();
        }
        let bullet = match self.pop_next_bullet() {
            Some(bullet) => bullet,
            None => return String::new(),
        };

        let top_padding = self.items.last().map(|item| item.padding).unwrap_or(0);
        let padding = self.current_padding.saturating_sub(top_padding);
        let mut result = String::new();
        strings::push_spaces(
            &mut result,
            padding.saturating_sub(strings::width(&bullet)),
        );
        result.push_str(&bullet);
        result
    }
}
