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

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use flashcards_core::error::Fallible;

/// The session log sink: every printed line and every echoed input line, in
/// order, exportable on demand.
#[derive(Debug, Default)]
pub struct Transcript {
    buffer: String,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript {
            buffer: String::new(),
        }
    }

    /// Record one line.
    pub fn record(&mut self, line: &str) {
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    /// Append the buffer to the given file, creating it if needed. The
    /// buffer is not cleared, so a later save appends the full history
    /// again.
    pub fn append_to(&self, path: &Path) -> Fallible<()> {
        let mut file = OpenOptions::new().append(true).create(true).open(path)?;
        file.write_all(self.buffer.as_bytes())?;
        Ok(())
    }

    pub fn contents(&self) -> &str {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_record() {
        let mut transcript = Transcript::new();
        transcript.record("first");
        transcript.record("second");
        assert_eq!(transcript.contents(), "first\nsecond\n");
    }

    #[test]
    fn test_append_creates_file() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("session.log");
        let mut transcript = Transcript::new();
        transcript.record("hello");
        transcript.append_to(&path)?;
        assert_eq!(read_to_string(&path)?, "hello\n");
        Ok(())
    }

    #[test]
    fn test_append_does_not_truncate() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("session.log");
        std::fs::write(&path, "old\n")?;
        let mut transcript = Transcript::new();
        transcript.record("new");
        transcript.append_to(&path)?;
        assert_eq!(read_to_string(&path)?, "old\nnew\n");
        Ok(())
    }

    #[test]
    fn test_repeated_saves_keep_history() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("session.log");
        let mut transcript = Transcript::new();
        transcript.record("a");
        transcript.append_to(&path)?;
        transcript.record("b");
        transcript.append_to(&path)?;
        assert_eq!(read_to_string(&path)?, "a\na\nb\n");
        Ok(())
    }
}
