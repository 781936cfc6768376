use crate::cmd::TokensArgs;
use anyhow::{Context, Result};
use bbh_parser::lexer::Lexer;
use bbh_parser::token::Token;
use tokio::fs;
use tracing::trace;

pub async fn run_tokens_command(args: TokensArgs) -> Result<()> {
    trace!("running tokens command with args: {args:?}");

    let content = fs::read_to_string(&args.file)
        .await
        .context("when reading content file")?;
    let tokens = Lexer::new(content.as_str()).collect::<Vec<Token>>();
    println!("{}", serde_json::to_string_pretty(&tokens)?);
    Ok(())
}
