mod error;
mod logger;

use bool_parser::{parse, Node};
use bool_simplify::{
    equivalent,
    simplify_with,
    truth_table,
    variables,
    Record,
    Simplified,
    SimplifyOptions,
    SimplifyOptionsBuilder,
    DEFAULT_MAX_ITERATIONS,
};
use clap::{ArgEnum, Parser};
use error::Error;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{
    fs,
    io::{self, BufRead, IsTerminal},
    path::{Path, PathBuf},
};

/// Where `:export` writes when no file is given.
const DEFAULT_EXPORT_FILE: &str = "simplification.json";

/// Truth tables with more variables than this are not printed.
const MAX_TABLE_VARIABLES: usize = 12;

const HELP: &str = "\
Enter a boolean expression to simplify it, for example `~(A & B) | A`.

Operators, from loosest to tightest:
  |  +  v  V    or
  &  *  ·       and
  ~  !          not
Constants are `0` and `1`; variables start with a letter other than `v` / `V`.

Commands:
  :export [FILE]  write the last result as JSON (default `simplification.json`)
  :table          print truth tables of the last input and result
  :clear          forget the last result
  :help           show this message
  :quit           exit";

#[derive(Parser)]
#[clap(name = "bool-repl", version, about = "Simplify boolean expressions step by step")]
struct Cli {
    /// The expression to simplify. If omitted, expressions are read line by line from stdin, or
    /// interactively if stdin is a terminal.
    expr: Option<String>,

    /// Writes the JSON record of the last successful simplification to this file.
    #[clap(long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// The maximum number of rewrite passes per expression.
    #[clap(long, value_name = "N", default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Prints the truth tables of each input and its simplified form.
    #[clap(long)]
    table: bool,

    /// Sets the maximum logging level.
    #[clap(arg_enum, long = "log", default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Disables output coloring.
    #[clap(long)]
    no_color: bool,
}

#[derive(ArgEnum, Clone, Copy)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
        }
    }
}

/// A REPL command, entered as a line starting with `:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command<'a> {
    Export(Option<&'a str>),
    Table,
    Clear,
    Help,
    Quit,
}

impl<'a> Command<'a> {
    /// Parses the line as a command. Returns `None` if the line is not a command at all.
    fn parse(line: &'a str) -> Option<Result<Self, &'a str>> {
        let rest = line.trim().strip_prefix(':')?;
        let mut words = rest.split_whitespace();
        let name = words.next().unwrap_or("");
        let argument = words.next();

        Some(match (name, argument) {
            ("export", file) => Ok(Command::Export(file)),
            ("table", None) => Ok(Command::Table),
            ("clear", None) => Ok(Command::Clear),
            ("help", None) => Ok(Command::Help),
            ("quit" | "q", None) => Ok(Command::Quit),
            _ => Err(rest),
        })
    }
}

/// Whether to keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The result of simplifying one line of input.
struct Outcome {
    input: Node,
    simplified: Simplified,
    record: Record,
}

/// State shared across lines of input.
struct Session {
    options: SimplifyOptions,
    print_tables: bool,

    /// The most recent successful simplification.
    last: Option<Outcome>,

    /// Set if any line failed.
    failed: bool,
}

impl Session {
    fn new(options: SimplifyOptions, print_tables: bool) -> Self {
        Self { options, print_tables, last: None, failed: false }
    }

    /// Handles one line of input: a command, an expression, or nothing.
    fn handle(&mut self, line: &str) -> Flow {
        if line.trim().is_empty() {
            return Flow::Continue;
        }

        let result = match Command::parse(line) {
            Some(Ok(Command::Quit)) => return Flow::Quit,
            Some(Ok(command)) => self.run_command(command),
            Some(Err(unknown)) => {
                log::error!("unknown command `:{}`, try `:help`", unknown);
                self.failed = true;
                return Flow::Continue;
            },
            None => self.simplify(line),
        };

        if let Err(err) = result {
            err.report_to_stderr(line);
            self.failed = true;
        }
        Flow::Continue
    }

    fn run_command(&mut self, command: Command) -> Result<(), Error> {
        match command {
            Command::Export(file) => {
                let path = Path::new(file.unwrap_or(DEFAULT_EXPORT_FILE));
                self.export(path)
            },
            Command::Table => {
                let outcome = self.last.as_ref().ok_or(Error::NoResult)?;
                print_tables(outcome)
            },
            Command::Clear => {
                self.last = None;
                Ok(())
            },
            Command::Help => {
                println!("{}", HELP);
                Ok(())
            },
            Command::Quit => Ok(()),
        }
    }

    /// Parses and simplifies the source, printing each step and the result.
    fn simplify(&mut self, source: &str) -> Result<(), Error> {
        let input = parse(source)?;
        let simplified = simplify_with(&input, self.options);
        let record = Record::new(source, &simplified);
        log::debug!("`{}`: {} step(s)", record.normalized, record.steps.len());

        if let Some(warning) = simplified.non_convergence {
            log::warn!("{}", warning);
        }

        let outcome = Outcome { input, simplified, record };
        print_outcome(&outcome);
        let outcome = self.last.insert(outcome);
        if self.print_tables {
            print_tables(outcome)?;
        }
        Ok(())
    }

    /// Writes the record of the last simplification to the file as JSON.
    fn export(&self, path: &Path) -> Result<(), Error> {
        let outcome = self.last.as_ref().ok_or(Error::NoResult)?;
        let json = serde_json::to_string_pretty(&outcome.record)?;
        fs::write(path, json + "\n").map_err(|err| Error::Export(path.to_path_buf(), err))?;
        log::info!("exported `{}` to {}", outcome.record.normalized, path.display());
        Ok(())
    }
}

fn print_outcome(outcome: &Outcome) {
    let width = outcome.record.steps.len().to_string().len();
    for (i, step) in outcome.record.steps.iter().enumerate() {
        println!("{:>width$}. {}", i + 1, step, width = width);
    }
    println!("{}", outcome.record.simplified);
}

fn print_tables(outcome: &Outcome) -> Result<(), Error> {
    let count = variables(&outcome.input).len();
    if count > MAX_TABLE_VARIABLES {
        log::warn!(
            "not printing truth tables for {} variables (at most {} are shown)",
            count,
            MAX_TABLE_VARIABLES,
        );
        return Ok(());
    }

    println!("\n{}", outcome.record.normalized);
    print!("{}", truth_table(&outcome.input)?);
    println!("\n{}", outcome.record.simplified);
    print!("{}", truth_table(&outcome.simplified.result)?);

    if !equivalent(&outcome.input, &outcome.simplified.result)? {
        log::error!("the simplified expression is not equivalent to the input");
    }
    Ok(())
}

/// Handles every line of stdin in turn.
fn run_stdin(session: &mut Session) {
    for line in io::stdin().lock().lines() {
        match line {
            Ok(line) => {
                if session.handle(&line) == Flow::Quit {
                    break;
                }
            },
            Err(err) => {
                log::error!("could not read stdin: {}", err);
                session.failed = true;
                break;
            },
        }
    }
}

/// Runs the interactive REPL until end of input or `:quit`.
fn run_repl(session: &mut Session) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    loop {
        let input = match rl.readline("> ") {
            Ok(input) => input,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err),
        };

        if !input.trim().is_empty() {
            rl.add_history_entry(&input)?;
        }

        if session.handle(&input) == Flow::Quit {
            return Ok(());
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let colors_enabled = !cli.no_color && io::stderr().is_terminal();
    logger::init(cli.log_level.into(), colors_enabled);

    let options = SimplifyOptionsBuilder::new()
        .max_iterations(cli.max_iterations)
        .build();
    let mut session = Session::new(options, cli.table);

    if let Some(expr) = &cli.expr {
        if let Err(err) = session.simplify(expr) {
            err.report_to_stderr(expr);
            session.failed = true;
        }
    } else if !io::stdin().is_terminal() {
        run_stdin(&mut session);
    } else if let Err(err) = run_repl(&mut session) {
        log::error!("{}", err);
        session.failed = true;
    }

    if let Some(path) = &cli.export {
        if let Err(err) = session.export(path) {
            log::error!("{}", err);
            session.failed = true;
        }
    }

    if session.failed {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn commands() {
        assert_eq!(Command::parse(":export"), Some(Ok(Command::Export(None))));
        assert_eq!(Command::parse(" :export out.json "), Some(Ok(Command::Export(Some("out.json")))));
        assert_eq!(Command::parse(":table"), Some(Ok(Command::Table)));
        assert_eq!(Command::parse(":q"), Some(Ok(Command::Quit)));
        assert_eq!(Command::parse(":frobnicate"), Some(Err("frobnicate")));
        assert_eq!(Command::parse(":table now"), Some(Err("table now")));
        assert_eq!(Command::parse("A & B"), None);
    }

    #[test]
    fn session_keeps_last_result() {
        let mut session = Session::new(SimplifyOptions::default(), false);
        assert_eq!(session.handle("A & 1"), Flow::Continue);
        assert_eq!(session.last.as_ref().map(|o| o.record.simplified.as_str()), Some("A"));

        assert_eq!(session.handle("A &"), Flow::Continue);
        assert!(session.failed);
        assert_eq!(session.last.as_ref().map(|o| o.record.simplified.as_str()), Some("A"));

        session.handle(":clear");
        assert!(session.last.is_none());
        assert_eq!(session.handle(":quit"), Flow::Quit);
    }

    #[test]
    fn export_needs_a_result() {
        let session = Session::new(SimplifyOptions::default(), false);
        assert!(matches!(session.export(Path::new("unused.json")), Err(Error::NoResult)));
    }
}
