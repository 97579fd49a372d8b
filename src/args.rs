use std::path::PathBuf;

use clap::Parser;

#[derive(Clone, Debug, Parser)]
#[command(
    version,
    about = "Generate a ZhuYin-to-character map from a character-to-ZhuYin map"
)]
pub struct Cli {
    /// Character-to-ZhuYin table, e.g. Big5-ZhuYin.map
    pub input: PathBuf,
    /// Where to write the ZhuYin-to-character table
    pub output: PathBuf,
    /// Text encoding of both tables (any WHATWG label, cp950 is accepted)
    #[clap(long, short, default_value = crate::codec::DEFAULT_ENCODING)]
    pub encoding: String,
}
