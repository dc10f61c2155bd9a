//! Per-thread log capture for integration tests
//!
//! Installed once as the global logger. Every record is kept in a
//! thread-local buffer, so parallel tests only see their own records, and
//! is then forwarded to `env_logger` for normal test output.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::sync::Once;

#[derive(Debug, Clone)]
pub struct Captured {
    pub level: Level,
    pub message: String,
}

thread_local! {
    static RECORDS: RefCell<Vec<Captured>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger {
    inner: env_logger::Logger,
}

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records.borrow_mut().push(Captured {
                level: record.level(),
                message: record.args().to_string(),
            })
        });
        if self.inner.enabled(record.metadata()) {
            self.inner.log(record);
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

pub fn install() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let inner = env_logger::Builder::from_default_env().is_test(true).build();
        if log::set_boxed_logger(Box::new(CaptureLogger { inner })).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
}

/// Drop everything captured so far on this thread.
pub fn clear() {
    RECORDS.with(|records| records.borrow_mut().clear());
}

/// Records captured on this thread at `level` or more severe.
pub fn records_at_least(level: Level) -> Vec<Captured> {
    RECORDS.with(|records| {
        records
            .borrow()
            .iter()
            .filter(|r| r.level <= level)
            .cloned()
            .collect()
    })
}
