use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quirk::{
    Interpreter,
    config::InterpreterConfig,
    interpreter::lexer::{Token, TokenKind},
    logging, parse, tokenize,
};

/// quirk runs programs written in the Quirk scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Adds a directory in front of the module search path. May be repeated.
    #[arg(short = 'I', long = "module-path", global = true)]
    module_paths: Vec<PathBuf>,

    /// Logs module loading and other diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Runs a program file.
    Run {
        /// The program to run.
        file: PathBuf,
    },
    /// Starts an interactive session. This is the default.
    Repl,
    /// Prints the tokens of a program file, one per line.
    Tokens {
        /// The program to tokenize.
        file: PathBuf,
    },
    /// Prints the parsed program in canonical form.
    Ast {
        /// The program to parse.
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = args.module_paths
                     .iter()
                     .rev()
                     .fold(InterpreterConfig::from_env(), |config, path| {
                         config.with_search_path(path)
                     });

    let outcome = match args.command.unwrap_or(Command::Repl) {
        Command::Run { file } => run_file(&file, config),
        Command::Repl => repl(config),
        Command::Tokens { file } => dump_tokens(&file),
        Command::Ast { file } => dump_ast(&file),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        },
    }
}

fn read_source(file: &Path) -> Result<String> {
    fs::read_to_string(file).with_context(|| format!("Failed to read '{}'", file.display()))
}

fn run_file(file: &Path, config: InterpreterConfig) -> Result<()> {
    let source = read_source(file)?;
    Interpreter::with_config(config).run_source(&source)?;
    Ok(())
}

fn dump_tokens(file: &Path) -> Result<()> {
    let source = read_source(file)?;
    for Token { kind, text, line } in tokenize(&source)? {
        if kind == TokenKind::NewLine {
            println!("{line:>4}  {kind:?}");
        } else {
            println!("{line:>4}  {kind:?} {text:?}");
        }
    }
    Ok(())
}

fn dump_ast(file: &Path) -> Result<()> {
    let source = read_source(file)?;
    print!("{}", parse(&source)?);
    Ok(())
}

/// Reads entries from stdin and runs each in one persistent interpreter.
///
/// Lines are buffered while a block is open, counting `function`, `if`,
/// `while` and `for` openers against `end`. Faults are printed and the
/// session continues.
fn repl(config: InterpreterConfig) -> Result<()> {
    let mut interpreter = Interpreter::with_config(config);
    let stdin = io::stdin();
    let mut buffer = String::new();
    let mut depth = 0_usize;

    prompt(depth)?;
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if depth == 0 && matches!(line.trim(), "exit" | "quit") {
            break;
        }

        depth = depth.saturating_add_signed(block_delta(&line));
        buffer.push_str(&line);
        buffer.push('\n');

        if depth == 0 {
            if let Err(e) = interpreter.run_source(&buffer) {
                eprintln!("{e}");
            }
            buffer.clear();
        }
        prompt(depth)?;
    }
    println!();
    Ok(())
}

/// How a line changes the block nesting: `+1` for a block opener, `-1` for
/// `end`, judged by the first token.
fn block_delta(line: &str) -> isize {
    match tokenize(line).ok().and_then(|tokens| tokens.first().map(|t| t.kind)) {
        Some(TokenKind::Function | TokenKind::If | TokenKind::While | TokenKind::For) => 1,
        Some(TokenKind::End) => -1,
        _ => 0,
    }
}

fn prompt(depth: usize) -> Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", if depth == 0 { ">>> " } else { "... " })?;
    stdout.flush()?;
    Ok(())
}
