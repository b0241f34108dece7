//! UUID Format Converter CLI
//!
//! Command-line front end over hexuuid-core: reads pasted text from an
//! argument, a file, or stdin and prints the four output columns.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use hexuuid_core::{convert, FormatKind};
use hexuuid_gui_common::{clipboard, JoinMode, OutputPanels};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input text; reads stdin when omitted and --file is not set
    text: Option<String>,

    /// Read input from a file instead of the command line
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Join values with commas instead of newlines
    #[arg(long)]
    commas: bool,

    /// Print a single output format without its label
    #[arg(short, long, value_enum)]
    only: Option<KindArg>,

    /// Copy the printed output to the clipboard as well
    #[arg(long)]
    copy: bool,
}

/// CLI-facing names for the output formats
#[derive(ValueEnum, Debug, Clone, Copy)]
enum KindArg {
    Hyphenated,
    Compact,
    HexPrefixed,
    ByteLiteral,
}

impl From<KindArg> for FormatKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Hyphenated => FormatKind::Hyphenated,
            KindArg::Compact => FormatKind::Compact,
            KindArg::HexPrefixed => FormatKind::HexPrefixed,
            KindArg::ByteLiteral => FormatKind::ByteLiteral,
        }
    }
}

fn read_input(args: &Args) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read stdin")?;
    Ok(buf)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let text = read_input(&args)?;

    let mut panels = OutputPanels::default();
    if args.commas {
        for kind in FormatKind::ALL {
            panels.panel_mut(kind).join = JoinMode::Commas;
        }
    }
    panels.refresh(&convert(&text));

    let output = match args.only {
        Some(kind) => panels.panel(kind.into()).display_text(),
        None => FormatKind::ALL
            .iter()
            .map(|&kind| format!("{}:\n{}", kind.label(), panels.panel(kind).display_text()))
            .collect::<Vec<_>>()
            .join("\n\n"),
    };

    println!("{output}");

    if args.copy {
        clipboard::copy_to_clipboard(&output).map_err(|e| anyhow!(e))?;
    }

    Ok(())
}
