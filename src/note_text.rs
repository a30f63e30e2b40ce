//! Note Text
//!
//! Plain note text with two kinds of markup: newlines and bare hyperlinks.
//! A regex splitter is enough here; anything richer needs a real parser.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::{Key, ProtoNote};

/// Number of pigment colours cycled through by note id
const PIGMENT_COUNT: Key = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Link(&'a str),
}

fn link_regex() -> &'static Regex {
    static LINK: OnceLock<Regex> = OnceLock::new();
    LINK.get_or_init(|| Regex::new(r"(?:https://|http://|www\.)\S*").unwrap())
}

/// Split one line into text and hyperlink segments. A link runs from its
/// prefix to the next whitespace.
pub fn split_hyperlinks(line: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;
    for m in link_regex().find_iter(line) {
        if m.start() > last {
            segments.push(Segment::Text(&line[last..m.start()]));
        }
        segments.push(Segment::Link(m.as_str()));
        last = m.end();
    }
    if last < line.len() {
        segments.push(Segment::Text(&line[last..]));
    }
    segments
}

/// Segments per line; the renderer puts a line break between lines
pub fn note_lines(text: &str) -> Vec<Vec<Segment<'_>>> {
    text.split('\n').map(split_hyperlinks).collect()
}

/// `www.` links are scheme-relative
pub fn link_href(link: &str) -> String {
    if link.starts_with("www.") {
        format!("//{}", link)
    } else {
        link.to_string()
    }
}

/// First line is the title, the rest (trimmed) the content.
/// `None` when both are empty.
pub fn note_from_text(text: &str) -> Option<ProtoNote> {
    let (title, rest) = text.split_once('\n').unwrap_or((text, ""));
    let content = rest.trim();

    if title.is_empty() && content.is_empty() {
        return None;
    }
    Some(ProtoNote {
        title: title.to_string(),
        content: content.to_string(),
    })
}

/// Stable per-note colour classes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pigment {
    pub num: u8,
    pub class: String,
    pub class_hi: String,
}

pub fn pigment(id: Key) -> Pigment {
    let num = (id.rem_euclid(PIGMENT_COUNT) + 1) as u8;
    let class = format!("pigment-clock-{:02}", num);
    let class_hi = format!("{}-hi", class);
    Pigment { num, class, class_hi }
}
