//! quill: The Quill parser CLI.
//!
//! Usage:
//!   quill [options] [file]
//!
//! Parses a Quill source file (or an inline snippet, or stdin) and prints
//! the resulting tree, either as an indented dump or as JSON.

use bumpalo::Bump;
use clap::Parser as ClapParser;
use miette::{miette, IntoDiagnostic, Result};
use quill_parser::parse;
use quill_printer::Printer;
use quill_tokenizer::Tokenizer;
use std::io::Read;

#[derive(ClapParser, Debug)]
#[command(name = "quill", about = "quill - a parser for the Quill scripting language")]
struct Cli {
    /// Quill source file to parse. Reads stdin when omitted.
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Parse an inline snippet instead of a file.
    #[arg(short = 'e', long = "eval", value_name = "SOURCE")]
    eval: Option<String>,

    /// Emit the tree as JSON.
    #[arg(long)]
    json: bool,

    /// Print the token stream instead of parsing.
    #[arg(long)]
    tokens: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let source = read_source(&cli)?;

    if cli.tokens {
        return print_tokens(&source);
    }

    let arena = Bump::new();
    let program = parse(&arena, &source).map_err(|error| miette!("{error}"))?;

    if cli.json {
        let json = serde_json::to_string_pretty(&program).into_diagnostic()?;
        println!("{json}");
    } else {
        let mut printer = Printer::new();
        print!("{}", printer.print_program(&program));
    }
    Ok(())
}

fn read_source(cli: &Cli) -> Result<String> {
    if let Some(ref source) = cli.eval {
        return Ok(source.clone());
    }
    if let Some(ref path) = cli.file {
        return std::fs::read_to_string(path)
            .into_diagnostic()
            .map_err(|error| error.context(format!("failed to read {path}")));
    }
    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .into_diagnostic()?;
    Ok(source)
}

fn print_tokens(source: &str) -> Result<()> {
    let mut tokenizer = Tokenizer::new(source);
    while let Some(token) = tokenizer.next_token().map_err(|error| miette!("{error}"))? {
        println!("{:<24} {:?}", token.kind.grammar_name(), token.text);
    }
    Ok(())
}
