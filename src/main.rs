/*
 * ==========================================================================
 * SYNTA - See Your Syntax!
 * ==========================================================================
 *
 * File:     main.rs
 * Purpose:  Command-line driver: analyze a source file or inline snippet
 *           and report tokens, the parse tree, and diagnostics.
 *
 * License:
 * This file is part of the Synta source analyzer project.
 *
 * Synta is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::env;
use std::fs;
use std::process;

use synta::{analyze, suggestion_for, Analysis, DiagnosticPrinter};

const USAGE: &str = "\
Synta - See Your Syntax!

Usage:
  synta <file>              analyze a source file
  synta -e <code>           analyze an inline snippet

Options:
  --tokens                  show only the token table
  --tree                    show only the parse tree
  --json                    emit the full analysis as JSON
";

struct Options {
    source_name: String,
    source: String,
    tokens_only: bool,
    tree_only: bool,
    json: bool,
}

fn parse_args() -> Result<Options, String> {
    let mut args = env::args().skip(1);
    let mut tokens_only = false;
    let mut tree_only = false;
    let mut json = false;
    let mut inline: Option<String> = None;
    let mut path: Option<String> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--tokens" => tokens_only = true,
            "--tree" => tree_only = true,
            "--json" => json = true,
            "-e" => match args.next() {
                Some(code) => inline = Some(code),
                None => return Err("-e requires a code argument".to_string()),
            },
            _ if arg.starts_with('-') => {
                return Err(format!("unknown option '{arg}'"));
            }
            _ => path = Some(arg),
        }
    }

    match (inline, path) {
        (Some(code), _) => Ok(Options {
            source_name: "<input>".to_string(),
            source: code,
            tokens_only,
            tree_only,
            json,
        }),
        (None, Some(path)) => {
            let source = fs::read_to_string(&path)
                .map_err(|e| format!("cannot read '{path}': {e}"))?;
            Ok(Options {
                source_name: path,
                source,
                tokens_only,
                tree_only,
                json,
            })
        }
        (None, None) => Err("no input given".to_string()),
    }
}

fn print_tokens(analysis: &Analysis) {
    println!("{} token(s):", analysis.tokens.len());
    for token in &analysis.tokens {
        println!(
            "  {:<10} {:<12} {:<10} line {}, col {}",
            token.kind.name(),
            format!("'{}'", token.lexeme),
            token.category.to_string(),
            token.line,
            token.column
        );
    }
}

fn report(options: &Options, analysis: &Analysis) {
    let everything = !options.tokens_only && !options.tree_only;

    if options.tokens_only || everything {
        print_tokens(analysis);
    }

    if options.tree_only || everything {
        if let Some(tree) = &analysis.parse_tree {
            println!("\nParse tree:\n{}", tree.ascii());
        }
    }

    if !analysis.errors.is_empty() {
        eprintln!();
        let printer = DiagnosticPrinter::new(&options.source_name, &options.source);
        for error in &analysis.errors {
            let mut error = error.clone();
            if error.suggestion.is_none() {
                error.suggestion = Some(suggestion_for(&error.message).to_string());
            }
            printer.print(&error);
        }
        eprintln!("\n✗ rejected with {} error(s)", analysis.errors.len());
    } else if everything {
        println!("\n✓ accepted");
    }
}

fn main() {
    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}\n\n{USAGE}");
            process::exit(2);
        }
    };

    let analysis = analyze(&options.source);

    if options.json {
        match serde_json::to_string_pretty(&analysis) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: cannot serialize analysis: {e}");
                process::exit(2);
            }
        }
    } else {
        report(&options, &analysis);
    }

    process::exit(i32::from(!analysis.accepted));
}
