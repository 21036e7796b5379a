//! Parsing for the subset of inline CSS understood by the layout engine.

use nom::bytes::complete::take_while1;
use nom::character::complete::{char, multispace0};
use nom::combinator::{map, map_res, rest};
use nom::{IResult, Parser};

use crate::render::{Display, HorizontalAlignment, VerticalAlignment, WhiteSpace};

/// Units taken as a number of lines directly; anything else is scaled down.
const RELATIVE_UNITS: [&str; 3] = ["em", "qem", "rem"];

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PropertyName(pub String);

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Decl {
    Display { value: Display },
    MarginTop { value: usize },
    MarginBottom { value: usize },
    PaddingLeft { value: usize },
    WhiteSpace { value: WhiteSpace },
    VerticalAlign { value: VerticalAlignment },
    Unknown { name: PropertyName, value: String },
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn parse_property_name(text: &str) -> IResult<&str, PropertyName> {
    map(take_while1(is_name_char), |name: &str| {
        PropertyName(name.replace("-webkit-", ""))
    })
    .parse(text)
}

fn parse_number(text: &str) -> IResult<&str, f32> {
    map_res(
        take_while1(|c: char| c == '-' || c == '.' || c.is_ascii_digit()),
        |digits: &str| digits.parse::<f32>(),
    )
    .parse(text)
}

/// A number immediately followed by its unit, e.g. `1.5em` or `-12px`.
pub fn parse_length(text: &str) -> IResult<&str, (f32, &str)> {
    (
        parse_number,
        take_while1(|c: char| c.is_alphanumeric() || c == '_'),
    )
        .parse(text)
}

/// Convert a length into whole lines (or columns).  Relative units map one
/// to one, other units count eight per line.
pub fn length_to_lines(value: f32, unit: &str) -> usize {
    let value = if RELATIVE_UNITS.contains(&unit) {
        value
    } else {
        value / 8.0
    };
    let rounded = (value + 0.5).floor();
    if rounded > 0.0 {
        rounded as usize
    } else {
        0
    }
}

/// Lines for a CSS length value; zero if it can't be read.
pub fn parse_em(value: &str) -> usize {
    match parse_length(value.trim()) {
        Ok((_, (number, unit))) => length_to_lines(number, unit),
        Err(_) => 0,
    }
}

pub fn parse_display(value: &str) -> Display {
    match value {
        "block" => Display::Block,
        "none" => Display::None,
        _ => Display::Inline,
    }
}

pub fn parse_white_space(value: &str) -> Option<WhiteSpace> {
    match value {
        "normal" | "nowrap" => Some(WhiteSpace::Normal),
        "pre" | "pre-line" | "pre-wrap" => Some(WhiteSpace::Pre),
        _ => None,
    }
}

pub fn parse_vertical_align(value: &str) -> Option<VerticalAlignment> {
    match value.trim().to_ascii_lowercase().as_str() {
        "top" => Some(VerticalAlignment::Top),
        "middle" => Some(VerticalAlignment::Middle),
        "bottom" => Some(VerticalAlignment::Bottom),
        _ => None,
    }
}

pub fn parse_horizontal_align(value: &str) -> Option<HorizontalAlignment> {
    match value.trim().to_ascii_lowercase().as_str() {
        "left" => Some(HorizontalAlignment::Left),
        "right" => Some(HorizontalAlignment::Right),
        "center" => Some(HorizontalAlignment::Center),
        _ => None,
    }
}

/// Parse one `name: value` declaration.  Known properties with values that
/// don't mean anything here come back as `Decl::Unknown`.
pub fn parse_declaration(text: &str) -> IResult<&str, Decl> {
    let (remaining, (_ws1, name, _ws2, _colon, value)) = (
        multispace0,
        parse_property_name,
        multispace0,
        char(':'),
        rest,
    )
        .parse(text)?;
    let value = value.trim();

    let unknown = || Decl::Unknown {
        name: name.clone(),
        value: value.into(),
    };
    let decl = match name.0.as_str() {
        "display" => Decl::Display {
            value: parse_display(value),
        },
        "margin-top" => Decl::MarginTop {
            value: parse_em(value),
        },
        "margin-bottom" => Decl::MarginBottom {
            value: parse_em(value),
        },
        "padding-left" => Decl::PaddingLeft {
            value: parse_em(value),
        },
        "white-space" => match parse_white_space(value) {
            Some(value) => Decl::WhiteSpace { value },
            None => unknown(),
        },
        "vertical-align" => match parse_vertical_align(value) {
            Some(value) => Decl::VerticalAlign { value },
            None => unknown(),
        },
        _ => unknown(),
    };
    Ok((remaining, decl))
}

/// Parse the contents of a `style` attribute.  Declarations which can't be
/// parsed at all are skipped.
pub fn parse_style(text: &str) -> Vec<Decl> {
    let text = text.to_lowercase();
    text.split(';')
        .filter_map(|directive| parse_declaration(directive).ok())
        .map(|(_, decl)| decl)
        .collect()
}
