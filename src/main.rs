use anyhow::Context;
use clap::Parser;

use zhuyin_map::{args::Cli, codec, convert};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Cli::parse();

    let encoding = codec::resolve(&args.encoding)?;
    let summary = convert(&args.input, &args.output, encoding).with_context(|| {
        format!(
            "Failed to build '{}' from '{}'",
            args.output.display(),
            args.input.display()
        )
    })?;

    log::info!(
        "{} lines, {} characters under {} initials -> {} lines in '{}'",
        summary.lines_read,
        summary.characters,
        summary.initials,
        summary.lines_written,
        args.output.display(),
    );
    Ok(())
}
