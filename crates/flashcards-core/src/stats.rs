// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Per-term wrong-answer counts for the current session. Entries are kept in
/// first-error order and are never persisted across runs.
#[derive(Clone, Debug, Default)]
pub struct Stats {
    entries: Vec<(String, u32)>,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            entries: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record one wrong answer for the given term, creating the entry on the
    /// first error.
    pub fn record_error(&mut self, term: &str) {
        match self.entries.iter_mut().find(|(t, _)| t == term) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((term.to_string(), 1)),
        }
    }

    pub fn error_count(&self, term: &str) -> u32 {
        self.entries
            .iter()
            .find(|(t, _)| t == term)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// The terms with the maximum error count (ties included, in first-error
    /// order) and that maximum. `None` if no errors have been recorded.
    pub fn hardest(&self) -> Option<(Vec<&str>, u32)> {
        let max = self.entries.iter().map(|(_, count)| *count).max()?;
        let terms = self
            .entries
            .iter()
            .filter(|(_, count)| *count == max)
            .map(|(term, _)| term.as_str())
            .collect();
        Some((terms, max))
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let stats = Stats::new();
        assert!(stats.is_empty());
        assert_eq!(stats.hardest(), None);
        assert_eq!(stats.error_count("a"), 0);
    }

    #[test]
    fn test_record_increments_once() {
        let mut stats = Stats::new();
        stats.record_error("a");
        assert_eq!(stats.error_count("a"), 1);
        stats.record_error("a");
        assert_eq!(stats.error_count("a"), 2);
    }

    #[test]
    fn test_hardest_with_ties() {
        let mut stats = Stats::new();
        stats.record_error("a");
        stats.record_error("a");
        stats.record_error("b");
        stats.record_error("b");
        stats.record_error("c");
        let (terms, max) = stats.hardest().unwrap();
        assert_eq!(terms, vec!["a", "b"]);
        assert_eq!(max, 2);
    }

    #[test]
    fn test_hardest_single() {
        let mut stats = Stats::new();
        stats.record_error("a");
        let (terms, max) = stats.hardest().unwrap();
        assert_eq!(terms, vec!["a"]);
        assert_eq!(max, 1);
    }

    #[test]
    fn test_reset() {
        let mut stats = Stats::new();
        stats.record_error("a");
        stats.reset();
        assert!(stats.is_empty());
        assert_eq!(stats.hardest(), None);
    }
}
