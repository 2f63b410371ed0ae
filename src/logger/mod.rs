#[cfg(feature = "log")]
mod inner {
    use std::collections::HashMap;
    use log::{Level, Metadata, Record};
    use colored::Colorize;

    lazy_static::lazy_static! {
        pub static ref LOGGER_COLORS: HashMap<Level, String> = HashMap::from([
            (Level::Trace, "magenta".to_string()),
            (Level::Debug, "green".to_string()),
            (Level::Info, "blue".to_string()),
            (Level::Warn, "yellow".to_string()),
            (Level::Error, "red".to_string()),
        ]);
    }

    pub static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;
    pub struct ConsoleLogger;

    impl ConsoleLogger {
        /// Only records emitted by this crate (library or binary) are shown.
        fn owns(record: &Record) -> bool {
            let path = record.module_path().unwrap_or("");
            path.starts_with("print_ip") || path.starts_with("printIp")
        }
    }

    impl log::Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) && Self::owns(record) {
                let level = format!("{:>7}", record.level());
                eprintln!(
                    "{}: {}",
                    match LOGGER_COLORS.get(&record.level()) {
                        Some(c) => level.color(&**c).to_string(),
                        None => level
                    },
                    record.args())
            }
        }

        fn flush(&self) {}
    }
}

#[cfg(feature = "log")]
pub use inner::{ConsoleLogger, CONSOLE_LOGGER};

#[cfg(not(feature = "log"))]
mod dummy {
    macro_rules! trace { ($($arg:tt)*) => {{ () }}; }
    macro_rules! debug { ($($arg:tt)*) => {{ () }}; }
    macro_rules! info { ($($arg:tt)*) => {{ () }}; }
    macro_rules! error { ($($arg:tt)*) => {{ () }}; }

    pub(crate) use {trace, debug, info, error};
}

#[cfg(not(feature = "log"))]
pub(crate) use dummy::{trace, debug, info, error};
