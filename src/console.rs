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

use std::io::BufRead;
use std::io::Write;

use flashcards_core::error::Fallible;

use crate::transcript::Transcript;

/// Terminal front-end for the command loop. Every printed line and every
/// input line flows through here and into the transcript; the `_unrecorded`
/// variants skip the transcript. Generic over the reader and writer so the
/// whole loop can be driven from in-memory buffers in tests.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    transcript: Transcript,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Console {
            reader,
            writer,
            transcript: Transcript::new(),
        }
    }

    /// Print a line and record it in the transcript.
    pub fn say(&mut self, text: &str) -> Fallible<()> {
        writeln!(self.writer, "{text}")?;
        self.transcript.record(text);
        Ok(())
    }

    /// Print a line without recording it.
    pub fn say_unrecorded(&mut self, text: &str) -> Fallible<()> {
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    /// Print a prompt, then read one line of input. Both are recorded.
    pub fn ask(&mut self, prompt: &str) -> Fallible<Option<String>> {
        self.say(prompt)?;
        self.read_line()
    }

    /// Like `ask`, but neither the prompt nor the input is recorded.
    pub fn ask_unrecorded(&mut self, prompt: &str) -> Fallible<Option<String>> {
        self.say_unrecorded(prompt)?;
        self.read_raw()
    }

    /// Read one line of input, recording it. `None` at end of input.
    pub fn read_line(&mut self) -> Fallible<Option<String>> {
        match self.read_raw()? {
            Some(line) => {
                self.transcript.record(&line);
                Ok(Some(line))
            }
            None => Ok(None),
        }
    }

    fn read_raw(&mut self) -> Fallible<Option<String>> {
        let mut line = String::new();
        let count = self.reader.read_line(&mut line)?;
        if count == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_say_records() -> Fallible<()> {
        let mut output: Vec<u8> = Vec::new();
        let mut console = Console::new(Cursor::new(""), &mut output);
        console.say("hello")?;
        assert_eq!(console.transcript().contents(), "hello\n");
        drop(console);
        assert_eq!(String::from_utf8(output).unwrap(), "hello\n");
        Ok(())
    }

    #[test]
    fn test_say_unrecorded_skips_transcript() -> Fallible<()> {
        let mut output: Vec<u8> = Vec::new();
        let mut console = Console::new(Cursor::new(""), &mut output);
        console.say_unrecorded("hello")?;
        assert_eq!(console.transcript().contents(), "");
        Ok(())
    }

    #[test]
    fn test_ask_echoes_input() -> Fallible<()> {
        let mut output: Vec<u8> = Vec::new();
        let mut console = Console::new(Cursor::new("tea\n"), &mut output);
        let answer = console.ask("Drink?")?;
        assert_eq!(answer.as_deref(), Some("tea"));
        assert_eq!(console.transcript().contents(), "Drink?\ntea\n");
        Ok(())
    }

    #[test]
    fn test_read_line_strips_crlf() -> Fallible<()> {
        let mut output: Vec<u8> = Vec::new();
        let mut console = Console::new(Cursor::new("tea\r\n"), &mut output);
        assert_eq!(console.read_line()?.as_deref(), Some("tea"));
        Ok(())
    }

    #[test]
    fn test_end_of_input() -> Fallible<()> {
        let mut output: Vec<u8> = Vec::new();
        let mut console = Console::new(Cursor::new(""), &mut output);
        assert_eq!(console.read_line()?, None);
        Ok(())
    }
}
