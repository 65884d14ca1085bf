//! A sample sink that renders the diff as a standalone HTML page.
//!
//! Different parts are shown from both sides, left in red and right in
//! green. Common parts are printed once, from the left side, in grey.

use std::fmt::Display;
use std::io::{self, Write};

use crate::primitives::Range;
use crate::sequence::Sequence;
use crate::sink::{DiffSink, EventType, Side};

const LEFT_DIFFERENT: &str = "background-color: #c33;";
const RIGHT_DIFFERENT: &str = "background-color: #3a3;";
const COMMON: &str = "background-color: #ccc;";

/// Where line breaks go in the rendered page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NewLines {
    /// No `<br/>` at all.
    None,
    /// A `<br/>` after every token.
    PerItem,
    /// A `<br/>` after every common or different block.
    #[default]
    PerBlock,
}

/// Writes the diff events of one comparison as HTML.
///
/// `DiffSink` methods cannot fail, so the first I/O error is kept and every
/// later write is skipped. Call [`HtmlWriter::finish`] to get it back.
pub struct HtmlWriter<W: Write> {
    out: W,
    title: String,
    new_lines: NewLines,
    separator: String,
    error: Option<io::Error>,
}

impl<W: Write> HtmlWriter<W> {
    pub fn new(out: W) -> HtmlWriter<W> {
        return HtmlWriter {
            out,
            title: "diff".to_string(),
            new_lines: NewLines::default(),
            separator: " ".to_string(),
            error: None,
        };
    }

    /// Page `<title>`. Defaults to "diff".
    pub fn title(mut self, title: impl Into<String>) -> HtmlWriter<W> {
        self.title = title.into();
        return self;
    }

    pub fn new_lines(mut self, new_lines: NewLines) -> HtmlWriter<W> {
        self.new_lines = new_lines;
        return self;
    }

    /// Text printed after every token. Defaults to a single space.
    pub fn separator(mut self, separator: impl Into<String>) -> HtmlWriter<W> {
        self.separator = separator.into();
        return self;
    }

    /// Flush and return the underlying writer, or the first error seen.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        return Ok(self.out);
    }

    fn emit(&mut self, write: impl FnOnce(&mut W) -> io::Result<()>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = write(&mut self.out) {
            self.error = Some(err);
        }
    }
}

/// Escape text for use in HTML element content and quoted attributes.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    return out;
}

impl<T: Display, W: Write> DiffSink<T> for HtmlWriter<W> {
    fn on_before_start(&mut self) {
        let title = escape(&self.title);
        self.emit(|out| {
            writeln!(out, "<!DOCTYPE html>")?;
            writeln!(out, "<html>")?;
            writeln!(out, "<head>")?;
            writeln!(out, "<meta charset='UTF-8'>")?;
            writeln!(out, "<title>{title}</title>")?;
            writeln!(out, "</head>")?;
            return writeln!(out, "<body>");
        });
    }

    fn handle(&mut self, sequence: &Sequence<T>, range: Range, event: EventType, side: Side) {
        let style = match (event, side) {
            (EventType::DifferentPart, Side::Left) => LEFT_DIFFERENT,
            (EventType::DifferentPart, Side::Right) => RIGHT_DIFFERENT,
            (EventType::CommonPart, Side::Left) => COMMON,
            // The left side already printed this run.
            (EventType::CommonPart, Side::Right) => return,
        };

        let new_lines = self.new_lines;
        let separator = escape(&self.separator);
        self.emit(|out| {
            writeln!(out, "<span style='{style}'>")?;
            for item in sequence.iter_range(range) {
                writeln!(out, "{}{}", escape(&item.to_string()), separator)?;
                if new_lines == NewLines::PerItem {
                    writeln!(out, "<br/>")?;
                }
            }
            writeln!(out, "</span>")?;
            if new_lines == NewLines::PerBlock {
                writeln!(out, "<br/>")?;
            }
            return Ok(());
        });
    }

    fn on_done(&mut self, similarity: f64) {
        self.emit(|out| {
            writeln!(out, "<br/>")?;
            writeln!(out, "<div>Contents similarity is: {similarity}</div>")?;
            writeln!(out, "</body>")?;
            return writeln!(out, "</html>");
        });
    }
}
