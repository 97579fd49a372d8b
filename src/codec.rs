//! The ZhuYin tables are stored in a legacy encoding (Big5, or Microsoft's CP950 flavour of it),
//! so everything goes through `encoding_rs` on the way in and on the way out.
use std::path::Path;

use encoding_rs::{Encoding, BIG5};

use crate::error::{MapError, Result};

pub const DEFAULT_ENCODING: &str = "big5";

/// Look up an encoding by its WHATWG label. `cp950` isn't a WHATWG label but it's what the
/// tables are usually described as, and Big5 decodes it.
///
/// Both tables share one encoding, so encodings that encoding_rs can only decode (UTF-16 and
/// the replacement encoding, which it writes as UTF-8) are refused.
pub fn resolve(label: &str) -> Result<&'static Encoding> {
    let label = label.trim();
    if label.eq_ignore_ascii_case("cp950") {
        return Ok(BIG5);
    }
    let encoding = Encoding::for_label(label.as_bytes())
        .ok_or_else(|| MapError::UnknownEncoding(label.into()))?;
    if encoding.output_encoding() != encoding {
        return Err(MapError::UnsupportedEncoding {
            label: label.into(),
            encoding: encoding.name(),
        });
    }
    Ok(encoding)
}

/// Strict decode: malformed sequences are an error, never U+FFFD.
///
/// Text that decodes but can't be written back in the same encoding is rejected here as well.
/// encoding_rs decodes HKSCS under Big5 but only encodes plain Big5, and the output table has
/// to be written in the encoding it was read in.
pub fn decode(bytes: &[u8], encoding: &'static Encoding, path: &Path) -> Result<String> {
    let invalid = || MapError::Encoding {
        path: path.to_path_buf(),
        encoding: encoding.name(),
    };
    let text = encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or_else(invalid)?;
    if let Some(character) = first_unencodable(&text, encoding) {
        log::debug!("{:?} in {} has no {} encoding", character, path.display(), encoding.name());
        return Err(invalid());
    }
    Ok(text.into_owned())
}

pub fn encode(text: &str, encoding: &'static Encoding, path: &Path) -> Result<Vec<u8>> {
    let (bytes, actual, had_errors) = encoding.encode(text);
    if had_errors {
        return Err(MapError::Unencodable {
            path: path.to_path_buf(),
            encoding: actual.name(),
            character: first_unencodable(text, actual).unwrap_or(char::REPLACEMENT_CHARACTER),
        });
    }
    Ok(bytes.into_owned())
}

fn first_unencodable(text: &str, encoding: &'static Encoding) -> Option<char> {
    if !encoding.encode(text).2 {
        return None;
    }
    // encoding_rs substitutes numeric character references, find the culprit instead
    let mut buf = [0u8; 4];
    text.chars().find(|c| encoding.encode(c.encode_utf8(&mut buf)).2)
}
