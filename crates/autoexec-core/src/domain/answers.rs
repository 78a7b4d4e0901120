//! The answers collected during one run.

/// One accepted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub key: String,
    pub value: String,
    /// Gate flags are recorded for completeness but never rendered.
    pub synthetic: bool,
}

/// Ordered key → value map, in the order answers were recorded.
///
/// Recording a key twice replaces the value in place and keeps the original
/// position, so output order always follows the first time a key was seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    entries: Vec<Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the accepted value for a catalog setting.
    pub fn record(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.upsert(key.into(), value.into(), false);
    }

    /// Records a gate flag; it is kept out of the rendered file.
    pub fn record_synthetic(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.upsert(key.into(), value.into(), true);
    }

    fn upsert(&mut self, key: String, value: String, synthetic: bool) {
        match self.entries.iter_mut().find(|a| a.key == key) {
            Some(existing) => {
                existing.value = value;
                existing.synthetic = synthetic;
            }
            None => self.entries.push(Answer {
                key,
                value,
                synthetic,
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }

    /// Every answer, synthetic ones included.
    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.entries.iter()
    }

    /// Answers that belong in the output file.
    pub fn rendered(&self) -> impl Iterator<Item = &Answer> {
        self.entries.iter().filter(|a| !a.synthetic)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
