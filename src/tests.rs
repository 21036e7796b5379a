use std::io;

use crate::config::{self, Config};
use crate::css::CssProfile;
use crate::dom::Node;
use crate::render::{Display, ElementStyle};
use crate::{from_read, parse, Error};

/// Like assert_eq!(), but prints out the results normally as well
macro_rules! assert_eq_str {
    ($a:expr, $b:expr) => {
        if $a != $b {
            println!("<<<\n{}===\n{}>>>", $a, $b);
            assert_eq!($a, $b);
        }
    };
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[track_caller]
fn test_html(input: &[u8], expected: &str) {
    init_logging();
    let output = from_read(input).unwrap();
    assert_eq_str!(output, expected);
}

#[track_caller]
fn test_html_conf<F>(input: &[u8], expected: &str, conf: F)
where
    F: Fn(Config) -> Config,
{
    init_logging();
    let result = conf(config::strict()).string_from_read(input).unwrap();
    assert_eq_str!(result, expected);
}

#[track_caller]
fn test_html_strict(input: &[u8], expected: &str) {
    test_html_conf(input, expected, |conf| conf)
}

#[test]
fn test_content() {
    test_html(b"<html><body>first</body></html>", "first");
}

#[test]
fn test_empty_and_corrupt() {
    test_html(b"test", "test");
    test_html(b"  ", "");
    test_html(b"", "");
    test_html(b"<<<", "<<<");
}

#[test]
fn test_xml_declaration() {
    test_html(
        br#"<?xml version="1.0" encoding="UTF-8" ?> Hallo?>"#,
        "Hallo?>",
    );
}

#[test]
fn test_entities() {
    test_html(b"fish &amp; chips", "fish & chips");
}

#[test]
fn test_br() {
    test_html(b"<html><body><br>first</p></body></html>", "\nfirst");
}

#[test]
fn test_margin_before() {
    test_html(b"<html><body><p>first</p></body></html>", "first");
}

#[test]
fn test_margin_before_with_text() {
    test_html(
        b"<html><body>first<p>second</p></body></html>",
        "first\n\nsecond",
    );
}

#[test]
fn test_paragraphs_collapse() {
    test_html_strict(
        b"<h1>Title</h1><p>One</p><p>Two</p>",
        "Title\n\nOne\n\nTwo",
    );
}

#[test]
fn test_margin_from_style() {
    test_html_strict(
        br#"a<p style="margin-top: 3em">x</p>"#,
        "a\n\n\n\nx",
    );
}

#[test]
fn test_divs() {
    test_html_strict(
        b"<body>Thomas<div>Anton</div>Maria</body>",
        "Thomas\nAnton\nMaria",
    );
    test_html_strict(
        "<body>Thomas<div>Anna <b>läuft</b> weit weg.</div>".as_bytes(),
        "Thomas\nAnna läuft weit weg.",
    );
    test_html_strict(
        b"<body>Thomas <ul><li><div>Anton</div>Maria</ul></body>",
        "Thomas\n  * Anton\n    Maria",
    );
    test_html_strict(
        b"<body>Thomas <ul><li>  <div>Anton</div>Maria</ul></body>",
        "Thomas\n  * Anton\n    Maria",
    );
    test_html_strict(
        b"<body>Thomas <ul><li> a  <div>Anton</div>Maria</ul></body>",
        "Thomas\n  * a\n    Anton\n    Maria",
    );
}

#[test]
fn test_relaxed_divs_are_indented() {
    test_html(
        b"<body>Thomas<div>Anton</div>Maria</body>",
        "Thomas\n  Anton\nMaria",
    );
}

#[test]
fn test_relaxed_spans_stay_apart() {
    test_html(b"<span>a</span><span>b</span>", "a b");
    test_html_strict(b"<span>a</span><span>b</span>", "ab");
}

#[test]
fn test_hidden_elements() {
    test_html(
        b"<html><head><title>Ignored</title><style>p { x: y }</style></head>\
          <body>Shown</body></html>",
        "Shown",
    );
    test_html_strict(
        br#"<body>visible<span style="display:none">hidden <b>deep</b></span> text</body>"#,
        "visible text",
    );
}

#[test]
fn test_quotes() {
    test_html_strict(b"He said <q>hi</q>.", "He said \"hi\".");
}

#[test]
fn test_white_space() {
    test_html_strict(
        br#"<body><span style="white-space: normal"><i>1</i>2
3</span></body>"#,
        "12 3",
    );
    test_html_strict(
        br#"<body><span style="white-space: nowrap"><i>1</i>2
3</span></body>"#,
        "12 3",
    );
    test_html_strict(
        br#"<body><span style="white-space: pre"><i>1</i>2
3</span></body>"#,
        "12\n3",
    );
    test_html_strict(
        br#"<body><span style="white-space: pre-line"><i>1</i>2
3</span></body>"#,
        "12\n3",
    );
    test_html_strict(
        br#"<body><span style="white-space: pre-wrap"><i>1</i>2
3</span></body>"#,
        "12\n3",
    );
}

#[test]
fn test_pre_between_collapsing_text() {
    test_html_strict(
        br#"<body>a <span style="white-space: pre"><i>1</i>2
3</span>  b</body>"#,
        "a 12\n3 b",
    );
}

#[test]
fn test_block_override_after_refinement() {
    test_html_strict(
        br#"<p>a<span style="display:block">b</span></p>"#,
        "a\nb",
    );
}

#[test]
fn test_limit_whitespace_affixes() {
    test_html(
        br#"<html>
  <body>
    hallo<span>echo</span>
    <pre>
def <span>hallo</span>():
   print("echo")
    </pre>
  </body>
</html>"#,
        "hallo echo\ndef hallo():\n   print(\"echo\")",
    );
}

#[test]
fn test_pre_in_list() {
    test_html_strict(
        b"<ul><li><pre>a\nb</pre></li></ul>",
        "  * a\n    b",
    );
}

#[test]
fn test_nested_lists() {
    test_html_strict(
        b"<ul><li>one<ul><li>inner</li></ul></li><li>two</li></ul>",
        "  * one\n      + inner\n  * two",
    );
}

#[test]
fn test_ordered_list() {
    test_html(b"<ol><li>a</li><li>b</li></ol>", " 1. a\n 2. b");
}

#[test]
fn test_successive_links() {
    test_html(
        br#"<html><body><a href="first">first</a><a href="second">second</a></body></html>"#,
        "firstsecond",
    );
    test_html(
        br#"<html><body><a href="first">first</a>
<a href="second">second</a></body></html>"#,
        "first second",
    );
    test_html_conf(
        br#"<html><body><a href="first">first</a><a href="second">second</a></body></html>"#,
        "[first](first)[second](second)",
        |conf| conf.display_links(true),
    );
}

const LINKS: &[u8] = br#"<html>
  <body>
    <a name="first">first</a>
    <a href="second">second</a>
    <a href="third">third</a>
  </body>
</html>"#;

#[test]
fn test_display_links() {
    test_html_conf(
        br#"<html>
  <body>
    <a href="first">first</a>
    <a href="second">second</a>
    <a name="third">third</a>
  </body>
</html>"#,
        "[first](first) [second](second) third",
        |conf| conf.display_links(true),
    );
}

#[test]
fn test_display_anchors() {
    test_html_conf(
        br#"<html>
  <body>
    <a name="first">first</a>
    <a href="second">second</a>
  </body>
</html>"#,
        "[first](first) second",
        |conf| conf.display_anchors(true),
    );
}

#[test]
fn test_display_links_and_anchors() {
    test_html_conf(
        LINKS,
        "[first](first) [second](second) [third](third)",
        |conf| conf.display_links(true).display_anchors(true),
    );
    test_html_conf(LINKS, "first second third", |conf| conf);
}

const IMAGES: &[u8] = br#"<html>
  <body>
    <img src="test1" alt="Ein Test Bild" title="Hallo" />
    <img src="test2" alt="Ein Test Bild" title="Juhu" />
    <img src="test3" alt="Ein zweites Bild" title="Echo" />
  </body>
</html>"#;

#[test]
fn test_display_images() {
    test_html_conf(
        IMAGES,
        "[Ein Test Bild] [Ein Test Bild] [Ein zweites Bild]",
        |conf| conf.display_images(true),
    );
    test_html_conf(IMAGES, "", |conf| conf);
}

#[test]
fn test_display_images_deduplicated() {
    test_html_conf(
        IMAGES,
        "[Ein Test Bild] [Ein zweites Bild]",
        |conf| conf.display_images(true).deduplicate_captions(true),
    );
}

#[test]
fn test_image_title_fallback() {
    test_html_conf(
        br#"<img src="a" title="Titel">"#,
        "[Titel]",
        |conf| conf.display_images(true),
    );
}

#[test]
fn test_forgotten_td_close_tag_one_line() {
    test_html(
        b"<body>hallo<table><tr><td>1<td>2</tr></table>echo</body>",
        "hallo\n1  2\necho",
    );
}

#[test]
fn test_forgotten_td_close_tag_two_lines() {
    test_html(
        b"<body>hallo<table><tr><td>1<td>2<tr><td>3<td>4</table>echo</body>",
        "hallo\n1  2\n3  4\necho",
    );
}

#[test]
fn test_empty_table() {
    test_html_strict(b"before<table></table>after", "before\nafter");
}

#[test]
fn test_hidden_table() {
    test_html_strict(
        br#"a<table style="display:none"><tr><td>x</td></tr><tr><td>y</td></tr><tr><td>z</td></tr></table>b"#,
        "ab",
    );
    test_html_strict(
        br#"<ul><li><table style="display:none"><tr><td>x</td></tr></table></li><li>n</li></ul>"#,
        "  * \n  * n",
    );
}

#[test]
fn test_hidden_table_row() {
    test_html_strict(
        br#"a<table><tr style="display:none"><td>x</td></tr><tr><td>y</td></tr></table>b"#,
        "a\ny\nb",
    );
}

#[test]
fn test_hidden_image_caption_not_deduplicated() {
    test_html_conf(
        br#"<span style="display:none"><img alt=a></span><img alt=a>"#,
        "[a]",
        |conf| conf.display_images(true).deduplicate_captions(true),
    );
}

#[test]
fn test_table_alignment() {
    test_html_strict(
        b"<table><tr><td align=right>1</td><td>long text</td></tr>\
          <tr><td>wider</td><td align=center>x</td></tr></table>end",
        "    1  long text\nwider      x    \nend",
    );
}

#[test]
fn test_table_vertical_alignment() {
    test_html_strict(
        b"<table><tr><td>a<br>b</td><td>c</td></tr></table>",
        "a  c\nb",
    );
    test_html_strict(
        b"<table><tr><td>a<br>b</td><td valign=bottom>c</td></tr></table>",
        "a   \nb  c",
    );
}

#[test]
fn test_table_wide_characters() {
    test_html_strict(
        "<table><tr><td>日本</td><td>x</td></tr><tr><td>ab</td><td>y</td></tr></table>"
            .as_bytes(),
        "日本  x\nab    y",
    );
}

#[test]
fn test_table_cell_separator() {
    test_html_conf(
        b"<table><tr><td>a</td><td>b</td></tr><tr><td>cc</td><td>d</td></tr></table>",
        "a  | b\ncc | d",
        |conf| conf.table_cell_separator(" | "),
    );
}

#[test]
fn test_nested_tables() {
    test_html_strict(
        b"<table><tr><td>a</td><td>\
          <table><tr><td>x</td><td>y</td></tr></table>\
          </td></tr></table>",
        "a  x  y",
    );
}

#[test]
fn test_table_text_outside_cells() {
    let doc = Node::document().child(
        Node::element("table")
            .child(Node::text("caption"))
            .child(Node::element("tr").child(Node::element("td").child(Node::text("1")))),
    );
    assert_eq_str!(config::strict().render_node(&doc), "caption\n1");
}

#[test]
fn test_node_tree() {
    let doc = Node::document().child(
        Node::element("body")
            .child(Node::element("h2").child(Node::text("Links")))
            .child(
                Node::element("a")
                    .attr("href", "https://example.com")
                    .child(Node::text("home")),
            ),
    );
    let text = config::strict().display_links(true).render_node(&doc);
    assert_eq_str!(text, "Links\n\n[home](https://example.com)");
}

#[test]
fn test_custom_profile() {
    test_html_conf(b"<p>a</p><p>b</p>", "ab", |conf| {
        conf.profile(CssProfile::new())
    });

    let mut css = CssProfile::strict();
    css.insert(ElementStyle::new("p").display(Display::Block).margins(0, 2));
    test_html_conf(b"<p>a</p><p>b</p>", "a\n\n\nb", move |conf| {
        conf.profile(css.clone())
    });
}

#[test]
fn test_document_renders_with_several_configs() {
    let doc = parse(&br#"<a href="x">y</a>"#[..]).unwrap();
    assert_eq_str!(doc.render(&config::strict()), "y");
    assert_eq_str!(
        doc.render(&config::strict().display_links(true)),
        "[y](x)"
    );
}

struct FailingReader;

impl io::Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "boom"))
    }
}

#[test]
fn test_read_error() {
    assert!(matches!(from_read(FailingReader), Err(Error::IoError(_))));
}
