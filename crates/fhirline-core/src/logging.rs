//! Log setup for the CLI and long-running conversions

use indicatif::MultiProgress;

/// Default log verbosity when `RUST_LOG` is unset
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Debug,
}

impl Verbosity {
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        match (quiet, debug) {
            (_, true) => Self::Debug,
            (true, false) => Self::Quiet,
            (false, false) => Self::Normal,
        }
    }

    fn filter(self) -> &'static str {
        match self {
            Self::Quiet => "warn",
            Self::Normal => "info",
            Self::Debug => "debug",
        }
    }
}

fn level_tag(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERROR",
        log::Level::Warn => "WARN ",
        log::Level::Info => "INFO ",
        log::Level::Debug => "DEBUG",
        log::Level::Trace => "TRACE",
    }
}

fn level_color(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "\x1b[31m",
        log::Level::Warn => "\x1b[33m",
        log::Level::Info => "\x1b[32m",
        log::Level::Debug => "\x1b[36m",
        log::Level::Trace => "\x1b[35m",
    }
}

/// Render one record; the target is only shown at debug level and below
fn render(record: &log::Record, color: bool) -> String {
    let tag = level_tag(record.level());
    let tag = if color {
        format!("{}{tag}\x1b[0m", level_color(record.level()))
    } else {
        tag.to_string()
    };
    if record.level() >= log::Level::Debug {
        format!("[{tag}] {}: {}", record.target(), record.args())
    } else {
        format!("[{tag}] {}", record.args())
    }
}

/// Routes records through a [`MultiProgress`] so they don't tear progress bars
pub struct ProgressAwareLogger {
    filter: env_logger::Logger,
    bars: MultiProgress,
}

impl log::Log for ProgressAwareLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.filter.enabled(metadata)
    }

    fn log(&self, record: &log::Record) {
        if !self.filter.matches(record) {
            return;
        }
        let line = render(record, true);
        self.bars.suspend(|| eprintln!("{line}"));
    }

    fn flush(&self) {}
}

fn builder(verbosity: Verbosity) -> env_logger::Builder {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(verbosity.filter()))
}

/// Install the global logger.
///
/// With `bars` (interactive terminal), records are colored and printed above
/// the progress bars. Otherwise they go plain to stderr.
pub fn init_logging(
    verbosity: Verbosity,
    bars: Option<&MultiProgress>,
) -> Result<(), log::SetLoggerError> {
    use std::io::Write;

    match bars {
        Some(bars) => {
            let filter = builder(verbosity).build();
            let max_level = filter.filter();
            log::set_boxed_logger(Box::new(ProgressAwareLogger {
                filter,
                bars: bars.clone(),
            }))?;
            log::set_max_level(max_level);
            Ok(())
        }
        None => builder(verbosity)
            .format(|buf, record| writeln!(buf, "{}", render(record, false)))
            .try_init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_flags() {
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Debug);
    }

    fn render_plain(level: log::Level, message: &str) -> String {
        render(
            &log::Record::builder()
                .level(level)
                .target("fhirline_client::http")
                .args(format_args!("{message}"))
                .build(),
            false,
        )
    }

    #[test]
    fn target_only_at_debug() {
        assert_eq!(render_plain(log::Level::Info, "retrying"), "[INFO ] retrying");
        assert_eq!(
            render_plain(log::Level::Debug, "GET /metadata"),
            "[DEBUG] fhirline_client::http: GET /metadata"
        );
    }
}
