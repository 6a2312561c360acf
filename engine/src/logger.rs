use std::sync::OnceLock;

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn write(&self, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        match &self.prefix {
            Some(prefix) => println!("[{}][{}] {}", timestamp, prefix, message),
            None => println!("[{}] {}", timestamp, message),
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

// Messages are dropped until init_logger has been called; embedding the
// engine without a logger stays silent.
pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.write(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
