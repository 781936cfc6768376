use crate::cmd::RenderArgs;
use crate::config::Config;
use anyhow::{Context, Result};
use std::io::{self, Write};
use tokio::fs;
use tracing::{debug, trace};

pub async fn run_render_command(args: RenderArgs) -> Result<()> {
    trace!("running render command with args: {args:?}");

    let mut config = match args.config.as_deref() {
        Some(path) => Config::load(path).await?,
        None => Config::default(),
    };
    if args.emphasis {
        config.emphasis = true;
    }
    let parser = config.build_parser()?;

    let mut stdout = io::stdout();
    for file in args.files.iter() {
        debug!("rendering file {file}");
        let content = fs::read_to_string(file)
            .await
            .with_context(|| format!("when reading content file {file}"))?;
        stdout
            .write_all(parser.transform(content.as_str()).as_bytes())
            .context("when writing html")?;
    }
    stdout.flush().context("when flushing html")?;

    Ok(())
}
