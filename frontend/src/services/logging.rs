use log::{Level, LevelFilter, Log, Metadata, Record};

/// Routes `log` records to the browser console
pub struct Logger;

static LOGGER: Logger = Logger;

impl Logger {
    /// Install the console logger. Calling it again only changes the level.
    pub fn init(level: LevelFilter) {
        if log::set_logger(&LOGGER).is_err() {
            log::debug!("console logger already installed");
        }
        log::set_max_level(level);
    }

    pub fn format_line(record: &Record) -> String {
        format!("[{}] {}", record.target(), record.args())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = Self::format_line(record);
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[test]
    fn test_format_line_prefixes_target() {
        let line = Logger::format_line(
            &Record::builder()
                .target("storage")
                .level(Level::Warn)
                .args(format_args!("quota exceeded"))
                .build(),
        );
        assert_eq!(line, "[storage] quota exceeded");
    }

    #[wasm_bindgen_test]
    fn test_init_twice_in_browser() {
        Logger::init(LevelFilter::Debug);
        Logger::init(LevelFilter::Warn);
        assert_eq!(log::max_level(), LevelFilter::Warn);
        log::warn!("console logger test");
    }
}
