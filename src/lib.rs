//! Invert a character-to-ZhuYin table (`Big5-ZhuYin.map`) into a ZhuYin-to-character table
//! (`ZhuYin-Big5.map`), keyed by the initial of each reading.
use std::fs;
use std::path::Path;

use encoding_rs::Encoding;

pub mod args;
pub mod codec;
pub mod entry;
pub mod error;
pub mod index;

pub use entry::{parse_line, Entry, Reading};
pub use error::{MapError, Result};
pub use index::{CharacterSet, ReverseIndex};

/// Parse every line and fold it into a fresh index. The first bad line aborts.
pub fn build<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<ReverseIndex> {
    let mut index = ReverseIndex::new();
    for (i, line) in lines.into_iter().enumerate() {
        let entry = parse_line(line, i + 1)?;
        index.insert_entry(&entry);
    }
    Ok(index)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines_read: usize,
    pub characters: usize,
    pub initials: usize,
    pub lines_written: usize,
}

/// Read `input`, invert it and write the result to `output`, both in `encoding`.
///
/// The input is fully parsed before `output` is touched, so a bad table leaves no output file.
pub fn convert(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    encoding: &'static Encoding,
) -> Result<Summary> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let bytes = fs::read(input).map_err(|e| MapError::io(input, e))?;
    log::debug!("read {} bytes from {}", bytes.len(), input.display());
    let text = codec::decode(&bytes, encoding, input)?;

    let index = build(text.lines())?;
    log::debug!("parsed {} lines into {} initials", index.entry_count(), index.len());

    let bytes = codec::encode(&index.to_string(), encoding, output)?;
    fs::write(output, &bytes).map_err(|e| MapError::io(output, e))?;
    log::debug!("wrote {} bytes to {}", bytes.len(), output.display());

    Ok(Summary {
        lines_read: index.entry_count(),
        characters: index.character_count(),
        initials: index.len(),
        lines_written: index.line_count(),
    })
}
