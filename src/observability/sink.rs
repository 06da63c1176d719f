//! Log records and the sinks that receive them.
//!
//! # Responsibilities
//! - Model a structured log line (level, message, ordered attributes)
//! - Provide the injectable [`Logger`] handle passed to every flow
//! - Forward records to `tracing`, or capture them in memory
//!
//! # Design Decisions
//! - No global logger: flows receive a `Logger` explicitly
//! - Attributes keep insertion order

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::Level;

/// Attribute forwarded to `tracing` as a typed integer field.
pub const INDEX_KEY: &str = "index";

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    UInt(u64),
    Str(String),
    Bool(bool),
}

impl Value {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::UInt(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Int(v) => u64::try_from(*v).ok(),
            Value::UInt(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::UInt(v) => write!(f, "{}", v),
            Value::Str(v) => write!(f, "{:?}", v),
            Value::Bool(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::UInt(v)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        // usize is at most 64 bits on every supported target.
        Value::UInt(v as u64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

/// A structured log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    level: Level,
    message: String,
    attrs: Vec<(&'static str, Value)>,
}

impl LogRecord {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            attrs: Vec::new(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Level::INFO, message)
    }

    /// Append an attribute.
    pub fn with_attr(mut self, key: &'static str, value: impl Into<Value>) -> Self {
        self.attrs.push((key, value.into()));
        self
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn attrs(&self) -> &[(&'static str, Value)] {
        &self.attrs
    }

    /// First attribute named `key`.
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Attributes rendered as `key=value` pairs.
    pub fn display_attrs(&self) -> DisplayAttrs<'_> {
        DisplayAttrs {
            attrs: &self.attrs,
            skip: None,
        }
    }

    /// Like [`display_attrs`](Self::display_attrs), leaving out `key`.
    pub fn display_attrs_except<'a>(&'a self, key: &'a str) -> DisplayAttrs<'a> {
        DisplayAttrs {
            attrs: &self.attrs,
            skip: Some(key),
        }
    }
}

pub struct DisplayAttrs<'a> {
    attrs: &'a [(&'static str, Value)],
    skip: Option<&'a str>,
}

impl<'a> DisplayAttrs<'a> {
    fn shown(&self) -> impl Iterator<Item = &'a (&'static str, Value)> {
        let skip = self.skip;
        self.attrs.iter().filter(move |(k, _)| Some(*k) != skip)
    }

    pub fn is_empty(&self) -> bool {
        self.shown().next().is_none()
    }
}

impl fmt::Display for DisplayAttrs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.shown().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

/// Destination for log records.
pub trait LogSink: Send + Sync {
    fn emit(&self, record: LogRecord);
}

/// Cloneable logging handle.
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn LogSink>,
}

impl Logger {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    /// Logger backed by the process `tracing` subscriber.
    pub fn tracing() -> Self {
        Self::new(Arc::new(TracingSink))
    }

    pub fn log(&self, record: LogRecord) {
        self.sink.emit(record);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(LogRecord::info(message));
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}

// `index` becomes a numeric field; other attributes are flattened into `attrs`.
macro_rules! forward {
    ($mac:ident, $record:expr) => {{
        let record = $record;
        let index = record.attr(INDEX_KEY).and_then(Value::as_i64);
        let rest = match index {
            Some(_) => record.display_attrs_except(INDEX_KEY),
            None => record.display_attrs(),
        };
        match (index, rest.is_empty()) {
            (Some(index), true) => tracing::$mac!(index, "{}", record.message()),
            (Some(index), false) => {
                tracing::$mac!(index, attrs = %rest, "{}", record.message())
            }
            (None, true) => tracing::$mac!("{}", record.message()),
            (None, false) => tracing::$mac!(attrs = %rest, "{}", record.message()),
        }
    }};
}

/// Sink that turns records into `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, record: LogRecord) {
        match record.level() {
            Level::ERROR => forward!(error, &record),
            Level::WARN => forward!(warn, &record),
            Level::INFO => forward!(info, &record),
            Level::DEBUG => forward!(debug, &record),
            _ => forward!(trace, &record),
        }
    }
}

/// Sink that keeps every record in emission order.
#[derive(Debug, Default)]
pub struct CaptureSink {
    records: Mutex<Vec<LogRecord>>,
}

impl CaptureSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of the records captured so far.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for CaptureSink {
    fn emit(&self, record: LogRecord) {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::test_writer::TestWriter;

    #[test]
    fn test_attrs_keep_order() {
        let record = LogRecord::info("go routine")
            .with_attr("index", 7usize)
            .with_attr("task", "printer")
            .with_attr("joined", true);

        assert_eq!(record.attr("index"), Some(&Value::UInt(7)));
        assert_eq!(record.attr("index").and_then(Value::as_i64), Some(7));
        assert_eq!(
            record.display_attrs().to_string(),
            r#"index=7 task="printer" joined=true"#
        );
        assert!(record.attr("missing").is_none());
    }

    #[test]
    fn test_capture_sink_records_in_order() {
        let sink = CaptureSink::new();
        let logger = Logger::new(sink.clone());

        logger.info("first");
        logger.log(LogRecord::new(Level::WARN, "second"));

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message(), "first");
        assert_eq!(records[1].level(), Level::WARN);
    }

    #[test]
    fn test_tracing_sink_without_subscriber() {
        // No subscriber installed: events are dropped, not an error.
        let logger = Logger::tracing();
        logger.log(LogRecord::info("go routine").with_attr("index", 0usize));
        logger.log(LogRecord::new(Level::TRACE, "quiet"));
    }

    #[test]
    fn test_display_attrs_except() {
        let record = LogRecord::info("go routine")
            .with_attr("index", 3usize)
            .with_attr("task", "printer");

        assert_eq!(record.display_attrs_except("index").to_string(), r#"task="printer""#);
        assert!(LogRecord::info("x")
            .with_attr("index", 1usize)
            .display_attrs_except("index")
            .is_empty());
    }

    #[test]
    fn test_usize_keeps_full_range() {
        let value = Value::from(usize::MAX);
        assert_eq!(value.as_u64(), Some(usize::MAX as u64));
        assert_eq!(Value::from(u64::MAX).as_i64(), None);
        assert_eq!(Value::Int(-1).as_u64(), None);
    }

    #[test]
    fn test_tracing_sink_index_is_numeric_field() {
        let writer = TestWriter::default();
        tracing::subscriber::with_default(writer.json_subscriber(Level::INFO), || {
            let logger = Logger::tracing();
            logger.log(LogRecord::info("go routine").with_attr("index", 7usize));
            logger.log(
                LogRecord::info("go routine")
                    .with_attr("index", 8usize)
                    .with_attr("task", "printer"),
            );
            logger.info("main routine end");
        });

        let lines = writer.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains(r#""index":7"#), "{}", lines[0]);
        assert!(!lines[0].contains("attrs"), "{}", lines[0]);
        assert!(lines[1].contains(r#""index":8"#), "{}", lines[1]);
        assert!(lines[1].contains(r#""attrs":"task=\"printer\"""#), "{}", lines[1]);
        assert!(!lines[2].contains("index"), "{}", lines[2]);
    }
}
