use anyhow::Context;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use is_terminal::IsTerminal;
use std::path::PathBuf;
use tokdiff::diff::{OperationKind, TokenDiff};
use tokdiff::lexer;
use tokdiff::render::{RenderOptions, render};

#[derive(Parser)]
#[command(
    name = "tokdiff",
    version = "0.1.0",
    about = "Token-level semantic diff",
    long_about = "Compares two versions of a file token by token and reports only the \
    semantically meaningful changes. Quote style, optional separators such as \
    semicolons, and the indentation convention (spaces vs tabs, step size) are \
    treated as non-changes.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The old version of the file")]
    old: PathBuf,
    #[arg(index = 2, help = "The new version of the file")]
    new: PathBuf,
    #[arg(
        short,
        long,
        default_value = "text",
        help = "Language tag used to pick the lexer (text, javascript, typescript, ...)"
    )]
    language: String,
    #[arg(long, value_enum, help = "Operation kinds to leave out of the output")]
    omit: Vec<OmitKind>,
    #[arg(
        long,
        conflicts_with = "color",
        help = "Mark changes with <ins>/<del> tags instead of [+ ]/[- ]"
    )]
    html: bool,
    #[arg(long, help = "Colorize the change markers")]
    color: bool,
    #[arg(long, help = "Never pipe the output through the pager")]
    no_pager: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OmitKind {
    Equal,
    Insert,
    Delete,
}

impl From<OmitKind> for OperationKind {
    fn from(kind: OmitKind) -> Self {
        match kind {
            OmitKind::Equal => OperationKind::Equal,
            OmitKind::Insert => OperationKind::Insert,
            OmitKind::Delete => OperationKind::Delete,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let old = std::fs::read_to_string(&cli.old)
        .with_context(|| format!("failed to read {}", cli.old.display()))?;
    let new = std::fs::read_to_string(&cli.new)
        .with_context(|| format!("failed to read {}", cli.new.display()))?;

    let a = lexer::tokenize(&old, &cli.language)?;
    let b = lexer::tokenize(&new, &cli.language)?;

    let diff = TokenDiff::new(&a, &b).collect()?;

    let mut options = if cli.html {
        RenderOptions::html()
    } else if cli.color {
        colored_options()
    } else {
        RenderOptions::default()
    };
    options.omit = cli.omit.iter().map(|kind| (*kind).into()).collect();

    let output = render(&diff, &options);

    if !cli.no_pager && std::io::stdout().is_terminal() {
        let pager = minus::Pager::new();
        pager.push_str(&output)?;
        minus::page_all(pager)?;
    } else {
        print!("{output}");
    }

    Ok(())
}

fn colored_options() -> RenderOptions {
    RenderOptions {
        insert_tag_open: "[+ ".green().bold().to_string(),
        insert_tag_close: " +]".green().bold().to_string(),
        delete_tag_open: "[- ".red().bold().to_string(),
        delete_tag_close: " -]".red().bold().to_string(),
        ..RenderOptions::default()
    }
}
