mod cli;
mod error;
mod runtime;
mod syntax;

use std::{
    io::{self, BufRead},
    process::ExitCode,
};

use chrono::Local;
use clap::Parser as _;

use cli::Cli;
use runtime::eval::Interpreter;

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    log::debug!("today = {today}");

    let interpreter = Interpreter::new(today);

    let ok = if cli.exprs.is_empty() {
        eval_stdin(&interpreter)
    } else {
        eval_args(&interpreter, &cli.exprs)
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn eval_args(interpreter: &Interpreter, exprs: &[String]) -> bool {
    let mut ok = true;

    for expr in exprs {
        ok &= eval_line(interpreter, expr);
    }
    ok
}

// Reads one expression per line until a blank line or end of stream.
fn eval_stdin(interpreter: &Interpreter) -> bool {
    let mut ok = true;

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(why) => {
                eprintln!("Failed to read stdin: {why}");
                return false;
            }
        };

        if line.is_empty() {
            break;
        }
        ok &= eval_line(interpreter, &line);
    }
    ok
}

fn eval_line(interpreter: &Interpreter, src: &str) -> bool {
    match interpreter.eval(src) {
        Ok(Some(value)) => {
            println!("{value}");
            true
        }
        Ok(None) => true,
        Err(why) => {
            eprintln!("{why}");
            false
        }
    }
}
