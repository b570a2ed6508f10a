use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

static LOG_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Kind of queue operation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Op {
    Push,
    Pop,
}

/// Log entry recording one operation by one worker
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogEntry<T> {
    pub local_log_id: u64,
    pub worker: String,
    pub op: Op,
    pub item: T,
}

impl<T: std::fmt::Debug> Display for LogEntry<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogEntry {{ local_log_id: {}, worker: {}, op: {:?}, item: {:?} }}",
            self.local_log_id, self.worker, self.op, self.item,
        )
    }
}

#[derive(Clone, Debug)]
/// Logger storing all entries for one worker
pub struct Logger<T> {
    entries: Vec<LogEntry<T>>,
    worker: String,
}

impl<T> Logger<T> {
    pub fn new(worker: String) -> Self {
        Self { entries: Vec::new(), worker }
    }

    /// Log an operation
    pub fn log(&mut self, op: Op, item: T) {
        let local_log_id = LOG_ID_COUNTER.fetch_add(1, Ordering::SeqCst);

        // --- Log entry insertion ---
        let before = self.entries.len();
        self.entries.push(LogEntry {
            local_log_id,
            worker: self.worker.clone(),
            op,
            item,
        });

        // --- Negative-space assertion: log length increased exactly by 1 ---
        assert_eq!(
            self.entries.len(),
            before + 1,
            "Logger must increase by exactly one entry"
        );
    }

    pub fn entries(&self) -> &[LogEntry<T>] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<LogEntry<T>> {
        self.entries
    }
}

pub fn append_logs<T: Serialize>(log: &[LogEntry<T>], path: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)?;

    for entry in log {
        let json = serde_json::to_string(entry).expect("Serialization failed");
        writeln!(file, "{}", json)?; // one JSON object per line
    }
    Ok(())
}

/// Thread-safe wrapper
pub type SafeLogger<T> = Arc<Mutex<Logger<T>>>;
