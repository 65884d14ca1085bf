//! Splitting text into token sequences.

use std::fmt;
use std::str::FromStr;

use crate::sequence::Sequence;

/// How a text is cut into tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Tokenizer {
    /// One token per line. `\r\n` endings are accepted.
    #[default]
    Lines,
    /// One token per whitespace-separated word.
    Words,
    /// One token per paragraph; paragraphs are separated by blank lines.
    Blocks,
}

impl Tokenizer {
    pub fn tokenize(&self, text: &str) -> Sequence<String> {
        return match self {
            Tokenizer::Lines => text
                .lines()
                .map(str::to_owned)
                .collect(),
            Tokenizer::Words => text
                .split_whitespace()
                .map(str::to_owned)
                .collect(),
            Tokenizer::Blocks => blocks(text),
        };
    }
}

fn blocks(text: &str) -> Sequence<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                out.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current.join("\n"));
    }

    return Sequence::new(out);
}

impl FromStr for Tokenizer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        return match s.to_ascii_lowercase().as_str() {
            "lines" | "line" => Ok(Tokenizer::Lines),
            "words" | "word" => Ok(Tokenizer::Words),
            "blocks" | "block" | "paragraphs" => Ok(Tokenizer::Blocks),
            other => Err(format!("unknown tokenizer '{other}' (expected lines, words or blocks)")),
        };
    }
}

impl fmt::Display for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tokenizer::Lines => "lines",
            Tokenizer::Words => "words",
            Tokenizer::Blocks => "blocks",
        };
        return f.write_str(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_drop_trailing_newline() {
        let seq = Tokenizer::Lines.tokenize("one\r\ntwo\n\nthree\n");
        assert_eq!(seq.tokens(), &["one", "two", "", "three"]);
    }

    #[test]
    fn words_split_on_whitespace() {
        let seq = Tokenizer::Words.tokenize("  the quick\tbrown\n fox ");
        assert_eq!(seq.tokens(), &["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn blocks_join_paragraph_lines() {
        let text = "a\nb\n\n\n  \nc\n\nd\ne";
        let seq = Tokenizer::Blocks.tokenize(text);
        assert_eq!(seq.tokens(), &["a\nb", "c", "d\ne"]);
    }

    #[test]
    fn empty_text_is_empty_sequence() {
        assert!(Tokenizer::Lines.tokenize("").is_empty());
        assert!(Tokenizer::Words.tokenize("   ").is_empty());
        assert!(Tokenizer::Blocks.tokenize("\n\n").is_empty());
    }

    #[test]
    fn parse_round_trip() {
        for t in [Tokenizer::Lines, Tokenizer::Words, Tokenizer::Blocks] {
            assert_eq!(t.to_string().parse::<Tokenizer>(), Ok(t));
        }
        assert!("sentences".parse::<Tokenizer>().is_err());
    }
}
