//! Tag profiles and the handful of presentational attributes the renderer
//! understands.
//!
//! A [`CssProfile`] maps tag names to their base [`ElementStyle`].  Unknown
//! tags render inline.  The `style`, `align` and `valign` attributes of an
//! element are applied on top of its base style before it is refined
//! against its parent.
use std::collections::HashMap;

use crate::render::{Display, ElementStyle, WhiteSpace};

pub(crate) mod parser;

use self::parser::Decl;

/// A mapping from tag name to base style.
#[derive(Clone, Debug, Default)]
pub struct CssProfile {
    styles: HashMap<String, ElementStyle>,
}

impl CssProfile {
    /// An empty profile: every tag renders inline.
    pub fn new() -> Self {
        Default::default()
    }

    /// Styles close to the defaults of common browsers.
    pub fn strict() -> Self {
        let mut profile = CssProfile::new();
        profile.insert(ElementStyle::new("body").whitespace(WhiteSpace::Normal));

        for tag in ["head", "link", "meta", "script", "style", "title"] {
            profile.insert(ElementStyle::new(tag).display(Display::None));
        }
        for tag in ["p", "figure", "h1", "h2", "h3", "h4", "h5", "h6"] {
            profile.insert(ElementStyle::new(tag).display(Display::Block).margins(1, 1));
        }
        for tag in ["ul", "ol"] {
            profile.insert(ElementStyle::new(tag).display(Display::Block).padding(4));
        }
        for tag in [
            "li",
            "address",
            "article",
            "aside",
            "div",
            "footer",
            "header",
            "hgroup",
            "layer",
            "main",
            "nav",
            "figcaption",
            "blockquote",
            "table",
        ] {
            profile.insert(ElementStyle::new(tag).display(Display::Block));
        }
        for tag in ["pre", "xmp", "listing", "plaintext"] {
            profile.insert(
                ElementStyle::new(tag)
                    .display(Display::Block)
                    .whitespace(WhiteSpace::Pre),
            );
        }
        profile.insert(ElementStyle::new("q").affixes("\"", "\""));
        profile
    }

    /// The strict profile with indented `div`s, and `span`s padded with
    /// spaces so that adjacent inline text doesn't run together.
    pub fn relaxed() -> Self {
        let mut profile = CssProfile::strict();
        profile.insert(ElementStyle::new("div").display(Display::Block).padding(2));
        profile.insert(
            ElementStyle::new("span")
                .affixes(" ", " ")
                .limit_whitespace_affixes(true),
        );
        profile
    }

    /// Add or replace the style for `style.tag`.
    pub fn insert(&mut self, style: ElementStyle) {
        self.styles.insert(style.tag.clone(), style);
    }

    /// The style registered for `tag`, if any.
    pub fn get(&self, tag: &str) -> Option<&ElementStyle> {
        self.styles.get(tag)
    }

    /// The base style for `tag`, falling back to a plain inline style.
    pub fn get_or_default(&self, tag: &str) -> ElementStyle {
        match self.styles.get(tag) {
            Some(style) => style.clone(),
            None => ElementStyle::new(tag),
        }
    }
}

/// Apply the declarations of a `style` attribute.
pub fn apply_style_attribute(mut style: ElementStyle, text: &str) -> ElementStyle {
    html_trace_quiet!("Parsing inline style: {}", text);
    for decl in parser::parse_style(text) {
        match decl {
            Decl::Display { value } => {
                if style.display != Display::None {
                    style.display = value;
                }
            }
            Decl::MarginTop { value } => style.margin_before = value,
            Decl::MarginBottom { value } => style.margin_after = value,
            Decl::PaddingLeft { value } => style.padding_inline = value,
            Decl::WhiteSpace { value } => style.whitespace = Some(value),
            Decl::VerticalAlign { value } => style.valign = value,
            Decl::Unknown { name, value } => {
                html_trace_quiet!("CSS: ignoring {}: {}", name.0, value);
            }
        }
    }
    style
}

/// Apply the `style`, `align` and `valign` attributes of an element to its
/// base style.  Values which aren't understood leave the style unchanged.
pub fn apply_attributes<'a, I>(mut style: ElementStyle, attrs: I) -> ElementStyle
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    for (name, value) in attrs {
        match name {
            "style" => style = apply_style_attribute(style, value),
            "align" => {
                if let Some(align) = parser::parse_horizontal_align(value) {
                    style.align = align;
                }
            }
            "valign" => {
                if let Some(valign) = parser::parse_vertical_align(value) {
                    style.valign = valign;
                }
            }
            _ => (),
        }
    }
    style
}
