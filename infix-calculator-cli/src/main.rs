use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use infix_calculator::interpreter::evaluator::Evaluation;
use infix_calculator::interpreter::tokens_to_string;
use infix_calculator::session::Session;
use log::{debug, warn};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::{fs, io};

/// Evaluates arithmetic statements, one per line
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// File with one statement per line. Statements are read from the terminal when omitted
    program: Option<PathBuf>,
    /// Print the tree of every statement
    #[clap(long)]
    tree: bool,
    /// Print every statement regenerated from its simplified tree
    #[clap(long)]
    infix: bool,
    /// Skip statements that fail instead of stopping the program
    #[clap(long)]
    keep_going: bool,
    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let mut session = Session::new();
    match &args.program {
        Some(path) => run_program(&args, path, &mut session)?,
        None => run_interactive(&args, &mut session)?,
    }

    debug!("variables at exit:\n{}", session.table());
    Ok(())
}

fn run_program(args: &Arguments, path: &Path, session: &mut Session) -> Result<()> {
    let program = fs::read_to_string(path)
        .with_context(|| format!("could not read program {}", path.display()))?;

    for (index, line) in program.lines().enumerate() {
        let result = execute_line(args, session, line)
            .with_context(|| format!("line {}: '{}'", index + 1, line));
        match result {
            Ok(()) => {}
            Err(error) if args.keep_going => warn!("{:#}", error),
            Err(error) => return Err(error),
        }
    }
    Ok(())
}

fn run_interactive(args: &Arguments, session: &mut Session) -> Result<()> {
    loop {
        print!(">>> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }

        match line.trim() {
            ":vars" => println!("{}", session.table()),
            ":quit" => return Ok(()),
            _ => {
                if let Err(error) = execute_line(args, session, &line) {
                    eprintln!("error: {:#}", error);
                }
            }
        }
    }
}

fn execute_line(args: &Arguments, session: &mut Session, line: &str) -> Result<()> {
    let tree = match session.prepare(line, &mut prompt_for_value)? {
        Some(tree) => tree,
        None => return Ok(()),
    };

    if args.tree {
        print!("{}", tree);
    }
    if args.infix {
        let text = tokens_to_string(tree.to_infix()).context("could not regenerate statement")?;
        println!("{}", text);
    }

    match session.run(&tree)? {
        Evaluation::Value(value) => println!("{}", value),
        Evaluation::Assignment { name, value } => debug!("{} = {}", name, value),
    }
    Ok(())
}

fn prompt_for_value(name: &str) -> io::Result<String> {
    print!("{} = ", name);
    io::stdout().flush()?;

    let mut value = String::new();
    if io::stdin().read_line(&mut value)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before a value was given",
        ));
    }
    Ok(value)
}
