use tracing::Level;

/// Sink for the human-readable status lines emitted while organizing.
pub trait Reporter {
    fn info(&mut self, message: &str);
    fn warn(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// Forwards every line to `tracing`; the installed subscriber decides where it goes.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn info(&mut self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warn(&mut self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn error(&mut self, message: &str) {
        tracing::error!("{}", message);
    }
}

/// Keeps messages in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryReporter {
    entries: Vec<(Level, String)>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[(Level, String)] {
        &self.entries
    }

    pub fn messages(&self, level: Level) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.as_str())
            .collect()
    }

    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.messages(level).iter().any(|m| m.contains(needle))
    }

    fn push(&mut self, level: Level, message: &str) {
        self.entries.push((level, message.to_string()));
    }
}

impl Reporter for MemoryReporter {
    fn info(&mut self, message: &str) {
        self.push(Level::INFO, message);
    }

    fn warn(&mut self, message: &str) {
        self.push(Level::WARN, message);
    }

    fn error(&mut self, message: &str) {
        self.push(Level::ERROR, message);
    }
}
