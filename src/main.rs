use std::{fs, process::ExitCode};

use clap::Parser;
use monkey::interpreter::{environment::Environment, value::core::Value};
use rustyline::{DefaultEditor, error::ReadlineError};

/// monkey is an interpreter for the Monkey programming language. Without a
/// script it starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells monkey to read the script from the file named by `contents`.
    #[arg(short, long)]
    file: bool,

    /// Prints the value of the script's final statement.
    #[arg(short, long)]
    print: bool,

    /// The script to run, or its path with `--file`.
    contents: Option<String>,
}

const PROMPT: &str = ">> ";

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let Some(contents) = args.contents else {
        return match run_repl() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. \
                           Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    run_script(&script, args.print)
}

/// Runs a whole script. Parse errors and a failed evaluation are reported on
/// stderr with a failure exit status.
fn run_script(script: &str, print: bool) -> ExitCode {
    let env = Environment::new_shared();

    match monkey::run(script, &env) {
        Ok(Value::Error(error)) => {
            eprintln!("ERROR: {error}");
            ExitCode::FAILURE
        },
        Ok(value) => {
            if print {
                println!("{value}");
            }
            ExitCode::SUCCESS
        },
        Err(errors) => {
            eprintln!("{errors}");
            ExitCode::FAILURE
        },
    }
}

/// Reads, evaluates and prints one line at a time. Bindings persist across
/// lines; Ctrl-C or Ctrl-D ends the session.
fn run_repl() -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let env = Environment::new_shared();

    let user = std::env::var("USER").or_else(|_| std::env::var("USERNAME"))
                                    .unwrap_or_else(|_| "there".to_string());
    println!("Hello {user}! This is the Monkey programming language!");
    println!("Feel free to type in commands");

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                match monkey::run(&line, &env) {
                    Ok(value) => println!("{value}"),
                    Err(errors) => {
                        for error in errors {
                            println!("\t{error}");
                        }
                    },
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

/// Installs a stderr subscriber filtered by `RUST_LOG`. Without `RUST_LOG`
/// nothing is logged.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}
