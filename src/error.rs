//! Errors raised while building a ZhuYin map.

use std::path::PathBuf;

pub type Result<T, E = MapError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// The input could not be read or the output could not be written.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line that does not look like `<character> <reading>/<reading>...`.
    ///
    /// One bad line aborts the whole conversion.
    #[error("malformed line {line_no}: {reason}: {line:?}")]
    MalformedLine {
        line_no: usize,
        line: String,
        reason: &'static str,
    },

    #[error("'{}' is not valid {encoding}", path.display())]
    Encoding {
        path: PathBuf,
        encoding: &'static str,
    },

    #[error("cannot write {character:?} to '{}' as {encoding}", path.display())]
    Unencodable {
        path: PathBuf,
        encoding: &'static str,
        character: char,
    },

    #[error("unknown text encoding {0:?}")]
    UnknownEncoding(String),

    /// An encoding encoding_rs can read but not write, like UTF-16.
    #[error("text encoding {label:?} ({encoding}) can be read but not written")]
    UnsupportedEncoding {
        label: String,
        encoding: &'static str,
    },
}

impl MapError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
