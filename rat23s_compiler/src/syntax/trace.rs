//! Production trace with snapshot/restore for backtracking

/// Position in a [`ProductionTrace`] to roll back to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceMark(usize);

/// Grammar rules applied since the last matched terminal, oldest first
#[derive(Debug, Default)]
pub struct ProductionTrace {
    labels: Vec<&'static str>,
}

impl ProductionTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: &'static str) {
        self.labels.push(label);
    }

    pub fn snapshot(&self) -> TraceMark {
        TraceMark(self.labels.len())
    }

    /// Drop every label pushed after `mark`
    pub fn restore(&mut self, mark: TraceMark) {
        debug_assert!(mark.0 <= self.labels.len(), "restore past current trace");
        self.labels.truncate(mark.0);
    }

    pub fn clear(&mut self) {
        self.labels.clear();
    }

    pub fn labels(&self) -> &[&'static str] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
