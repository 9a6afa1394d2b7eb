use std::fs;

use clap::Parser;
use pascaline::{
    interpret,
    interpreter::{
        lexer::Lexer,
        token::TokenKind,
        translator::{lisp::LispTranslator, postfix::PostfixTranslator},
    },
    parse_expression,
};

/// pascaline interprets programs written in a small Pascal-like language and
/// can translate arithmetic expressions into alternate notations.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells pascaline to look at a file instead of inline source text.
    #[arg(short, long)]
    file: bool,

    /// Translates an arithmetic expression into postfix notation instead of
    /// interpreting a program.
    #[arg(long, conflicts_with = "lisp")]
    postfix: bool,

    /// Translates an arithmetic expression into Lisp-style prefix notation
    /// instead of interpreting a program.
    #[arg(long)]
    lisp: bool,

    /// Prints the token stream instead of interpreting the input.
    #[arg(long)]
    tokens: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    if let Err(e) = run(&args, &source) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args, source: &str) -> Result<(), Box<dyn std::error::Error>> {
    if args.tokens {
        let mut lexer = Lexer::new(source);
        loop {
            let token = lexer.advance()?;
            println!("{token}");
            if token.kind == TokenKind::EndOfFile {
                break;
            }
        }
        return Ok(());
    }

    if args.postfix {
        let tree = parse_expression(source)?;
        println!("{}", PostfixTranslator::new().translate(&tree)?);
        return Ok(());
    }

    if args.lisp {
        let tree = parse_expression(source)?;
        println!("{}", LispTranslator::new().translate(&tree)?);
        return Ok(());
    }

    for (name, value) in interpret(source)? {
        println!("{name} = {value}");
    }

    Ok(())
}
