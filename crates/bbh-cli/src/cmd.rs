use crate::render::run_render_command;
use crate::tokens::run_tokens_command;
use anyhow::Result;
use clap::ArgAction;
use clap::{Args, Parser, Subcommand};

///////// Args /////////

#[derive(Clone, Debug, Args)]
pub struct RenderArgs {
    #[arg(help = "BBCode files to convert, html is written to stdout in the same order")]
    pub files: Vec<String>,

    #[arg(
        short = 'c',
        long = "config",
        help = "Path to the toml config file defining extra tags and render style"
    )]
    pub config: Option<String>,

    #[arg(
        long = "emphasis",
        help = "Render [b] and [i] as <strong> and <em>. Override the config when presents",
        default_value = "false",
        action = ArgAction::SetTrue,
    )]
    pub emphasis: bool,
}

#[derive(Clone, Debug, Args)]
pub struct TokensArgs {
    #[arg(help = "BBCode file to tokenize")]
    pub file: String,
}

///////// Subcommand /////////

#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    #[command(about = "convert bbcode files into html")]
    Render(RenderArgs),

    #[command(about = "print the tokens of a bbcode file in json")]
    Tokens(TokensArgs),
}

/// Main entry of all subcommands.
pub async fn run_command_with_args(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Render(render_args) => run_render_command(render_args).await,
        Command::Tokens(tokens_args) => run_tokens_command(tokens_args).await,
    }
}
