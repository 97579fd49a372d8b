//! One line of a character-to-ZhuYin table, e.g. `一 ㄧ/ㄧˊ/ㄧˋ`.
use crate::error::{MapError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub character: String,
    pub readings: Vec<Reading>,
}

/// A single ZhuYin reading. Only the initial matters to us, tones and finals are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reading {
    text: String,
    initial: char,
}

impl Reading {
    /// `None` for a blank reading, which has no initial.
    pub fn new(text: &str) -> Option<Self> {
        let text = text.trim();
        let initial = text.chars().next()?;
        Some(Self {
            text: text.to_string(),
            initial,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn initial(&self) -> char {
        self.initial
    }
}

/// Parse a table line. `line_no` is 1-based and only used for error reporting.
pub fn parse_line(line: &str, line_no: usize) -> Result<Entry> {
    let malformed = |reason| MapError::MalformedLine {
        line_no,
        line: line.to_string(),
        reason,
    };

    let (character, readings) = line
        .split_once(' ')
        .ok_or_else(|| malformed("missing space between character and readings"))?;
    if character.is_empty() {
        return Err(malformed("empty character"));
    }
    if readings.trim().is_empty() {
        return Err(malformed("no readings"));
    }

    let readings = readings
        .split('/')
        .map(|r| Reading::new(r).ok_or_else(|| malformed("empty reading")))
        .collect::<Result<Vec<_>>>()?;

    Ok(Entry {
        character: character.to_string(),
        readings,
    })
}

impl Entry {
    /// Initials of all readings, in reading order. May repeat.
    pub fn initials(&self) -> impl Iterator<Item = char> + '_ {
        self.readings.iter().map(Reading::initial)
    }
}
