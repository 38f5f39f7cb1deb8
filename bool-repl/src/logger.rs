use ansi_term::{Color, Style};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fmt;

/// Crates whose `debug` and `trace` records are shown. Other crates, such as the line editor, only
/// get through at `info` and above.
const OWN_TARGETS: [&str; 3] = ["bool_repl", "bool_simplify", "bool_parser"];

/// Writes log records to stderr, prefixed with their level. Records at `debug` and `trace` also
/// name the module that produced them, and are only shown for this workspace's crates.
pub struct Logger {
    colors_enabled: bool,
}

impl Logger {
    pub fn new(colors_enabled: bool) -> Self {
        Self { colors_enabled }
    }

    fn style(&self, level: Level) -> Style {
        if !self.colors_enabled {
            return Style::new();
        }
        match level {
            Level::Error => Color::Red.bold(),
            Level::Warn => Color::Yellow.bold(),
            Level::Info => Color::Cyan.bold(),
            Level::Debug => Color::Purple.normal(),
            Level::Trace => Color::Green.dimmed(),
        }
    }

    /// Builds the line written for a record with the given level, target, and message.
    fn format(&self, level: Level, target: &str, message: &fmt::Arguments) -> String {
        let prefix = self.style(level).paint(format!("[{}]", level.as_str().to_lowercase()));
        if level <= Level::Info {
            format!("{} {}", prefix, message)
        } else {
            format!("{} {}: {}", prefix, target, message)
        }
    }
}

fn is_own_target(target: &str) -> bool {
    OWN_TARGETS.iter().any(|own| {
        target.strip_prefix(own).map_or(false, |rest| rest.is_empty() || rest.starts_with("::"))
    })
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
            && (metadata.level() <= Level::Info || is_own_target(metadata.target()))
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", self.format(record.level(), record.target(), record.args()));
        }
    }

    fn flush(&self) {}
}

/// Installs the logger. Does nothing if a logger was already installed.
pub fn init(max_level: LevelFilter, colors_enabled: bool) {
    if log::set_boxed_logger(Box::new(Logger::new(colors_enabled))).is_ok() {
        log::set_max_level(max_level);
    }
}
