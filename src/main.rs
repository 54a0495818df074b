//! `tafak` driver: runs the front end over a file and prints the result.

use std::{fs::read_to_string, path::PathBuf, process, time::Instant};

use clap::{Parser, Subcommand};
use tafak::{
    errors::report::render_diagnostic,
    lexer::{lexer::tokenize, tokens::Token},
    parser::{
        keywords::{ConfigError, KeywordMap, KeywordRole},
        parser::parse_with_keywords,
    },
};

#[derive(Parser, Debug)]
#[command(name = "tafak", version, about = "Tokenizer and parser for the TAFAK language")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Keyword that opens an if statement
    #[arg(long = "if", global = true, value_name = "KEYWORD")]
    if_keyword: Option<String>,

    /// Keyword that opens the else branch
    #[arg(long = "else", global = true, value_name = "KEYWORD")]
    else_keyword: Option<String>,

    /// Keyword that opens a while loop
    #[arg(long = "while", global = true, value_name = "KEYWORD")]
    while_keyword: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the token stream, one token per line
    Tokens { file: PathBuf },
    /// Print the parsed syntax tree
    Ast { file: PathBuf },
}

impl Cli {
    fn keyword_map(&self) -> Result<KeywordMap, ConfigError> {
        let overrides = [
            (KeywordRole::If, &self.if_keyword),
            (KeywordRole::Else, &self.else_keyword),
            (KeywordRole::While, &self.while_keyword),
        ];

        KeywordMap::new(
            overrides
                .into_iter()
                .filter_map(|(role, lexeme)| lexeme.as_deref().map(|lexeme| (role, lexeme))),
        )
    }
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    let keywords = match cli.keyword_map() {
        Ok(keywords) => keywords,
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(2);
        }
    };

    let file = match &cli.command {
        Command::Tokens { file } | Command::Ast { file } => file,
    };
    let file_name = file.to_string_lossy();

    let source = match read_to_string(file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: failed to read {}: {}", file_name, error);
            process::exit(1);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprint!("{}", render_diagnostic(&error, &source, &file_name));
            process::exit(1);
        }
    };

    tracing::info!(elapsed = ?start.elapsed(), "tokenized");

    if let Command::Tokens { .. } = cli.command {
        for token in &tokens {
            println!("{}", format_token(token));
        }
        return;
    }

    let parse_start = Instant::now();
    let program = match parse_with_keywords(tokens, keywords) {
        Ok(program) => program,
        Err(error) => {
            eprint!("{}", render_diagnostic(&error, &source, &file_name));
            process::exit(1);
        }
    };

    tracing::info!(elapsed = ?parse_start.elapsed(), "parsed");

    println!("{:#?}", program);
}

fn format_token(token: &Token) -> String {
    format!(
        "{}:{}\t{}\t{}",
        token.line, token.column, token.kind, token.value
    )
}
