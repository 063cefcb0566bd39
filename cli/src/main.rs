mod highlighter;
mod lexer;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use simulator::{EvaluationOptions, evaluate_expression_with_options, render_error_to, tokenize};
use simulator_core::lexer::display_tokens;
use std::io::BufRead;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

/// Simulator - evaluate arithmetic expressions
#[derive(Parser, Debug)]
#[command(name = "simulator")]
#[command(about = "Evaluate arithmetic expressions", long_about = None)]
struct Args {
    /// Print the token stream (for debugging)
    #[arg(long)]
    debug_tokens: bool,

    /// Disable colors in error reports
    #[arg(long)]
    no_color: bool,

    /// Maximum nesting of parentheses
    #[arg(long, default_value_t = EvaluationOptions::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

impl Args {
    fn options(&self) -> EvaluationOptions {
        EvaluationOptions {
            max_depth: self.max_depth,
        }
    }
}

const HISTORY_CAPACITY: usize = 1000;

fn history_path() -> Option<PathBuf> {
    Some(dirs::data_dir()?.join("simulator").join("history.txt"))
}

fn setup_reedline() -> (Reedline, DefaultPrompt) {
    let mut line_editor = Reedline::create()
        .with_highlighter(Box::new(highlighter::Highlighter))
        .with_validator(Box::new(highlighter::ParenValidator));

    if let Some(path) = history_path() {
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path) {
            Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
            Err(e) => tracing::warn!(error = %e, "history disabled"),
        }
    }

    let prompt = DefaultPrompt::new(DefaultPromptSegment::Empty, DefaultPromptSegment::Empty);

    (line_editor, prompt)
}

/// Evaluate one expression, printing the value or rendering the error.
///
/// Returns whether evaluation succeeded.
fn interpret_input(input: &str, args: &Args) -> Result<bool> {
    if args.debug_tokens {
        // Tokenizer errors are reported by the evaluation below.
        if let Ok(tokens) = tokenize(input) {
            println!("=== Tokens ===");
            println!("{}", display_tokens(&tokens));
            println!();
        }
    }

    match evaluate_expression_with_options(input, &args.options()) {
        Ok(value) => {
            println!("{}", value);
            Ok(true)
        }
        Err(e) => {
            tracing::debug!(error = %e, category = ?e.category(), "evaluation failed");
            render_error_to(&e, input, &mut std::io::stderr(), !args.no_color).into_diagnostic()?;
            Ok(false)
        }
    }
}

fn run_repl(args: &Args) -> Result<()> {
    let (mut line_editor, prompt) = setup_reedline();

    println!("Simulator REPL - Type expressions to evaluate (Ctrl+D or Ctrl+C to exit)");

    loop {
        let sig = line_editor.read_line(&prompt).into_diagnostic()?;

        match sig {
            Signal::Success(buffer) => {
                if buffer.trim().is_empty() {
                    continue;
                }
                interpret_input(&buffer, args)?;
            }
            Signal::CtrlD | Signal::CtrlC => {
                println!("\nGoodbye!");
                return Ok(());
            }
        }
    }
}

fn run_stdin(args: &Args) -> Result<bool> {
    let stdin = std::io::stdin();
    run_lines(BufReader::new(stdin.lock()), args)
}

/// Evaluate every non-blank line. Keeps going after a failure and returns
/// whether all lines succeeded.
fn run_lines<R: BufRead>(reader: R, args: &Args) -> Result<bool> {
    let mut all_ok = true;

    for line in reader.lines() {
        let line = line.into_diagnostic()?;
        if line.trim().is_empty() {
            continue;
        }
        all_ok &= interpret_input(&line, args)?;
    }

    Ok(all_ok)
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Check if we have a direct expression argument
    let ok = if let Some(expr) = &args.expression {
        interpret_input(expr, &args)?
    } else if atty::is(atty::Stream::Stdin) {
        run_repl(&args)?;
        true
    } else {
        run_stdin(&args)?
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
