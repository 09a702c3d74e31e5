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

use std::fs::read_to_string;
use std::fs::write;
use std::io::BufRead;
use std::io::ErrorKind;
use std::io::Write;
use std::path::Path;

use flashcards_core::error::Fallible;
use flashcards_core::persist::read_store;
use flashcards_core::persist::write_store;
use flashcards_core::quiz::Verdict;
use flashcards_core::quiz::grade;
use flashcards_core::rng::SampleRng;
use flashcards_core::stats::Stats;
use flashcards_core::store::Card;
use flashcards_core::store::CardStore;

use crate::console::Console;

/// Session-level configuration, resolved from the command line and the
/// optional defaults file.
#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    /// Path to load the store from at startup, and to reuse for the import
    /// action.
    pub import_from: Option<String>,
    /// Path to write the store to on exit, and to reuse for the export
    /// action.
    pub export_to: Option<String>,
}

/// The actions the command loop understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
}

impl Action {
    /// The action names, as listed in the menu prompt.
    const MENU: &'static str =
        "add, remove, import, export, ask, exit, log, hardest card, reset stats";

    fn parse(input: &str) -> Option<Action> {
        match input.trim() {
            "add" => Some(Action::Add),
            "remove" => Some(Action::Remove),
            "import" => Some(Action::Import),
            "export" => Some(Action::Export),
            "ask" => Some(Action::Ask),
            "exit" => Some(Action::Exit),
            "log" => Some(Action::Log),
            "hardest card" => Some(Action::HardestCard),
            "reset stats" => Some(Action::ResetStats),
            _ => None,
        }
    }
}

/// One interactive study session: the card store, the session stats, and
/// the command loop over them.
pub struct Session<R, W> {
    config: SessionConfig,
    store: CardStore,
    stats: Stats,
    rng: SampleRng,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: SessionConfig, rng: SampleRng, reader: R, writer: W) -> Self {
        Session {
            config,
            store: CardStore::new(),
            stats: Stats::new(),
            rng,
            console: Console::new(reader, writer),
        }
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Run the command loop until the user exits or input runs out. Both
    /// take the clean-exit path: auto-export if a target is configured,
    /// then the farewell.
    pub fn run(&mut self) -> Fallible<()> {
        if let Some(path) = self.config.import_from.clone() {
            self.import_from_path(&path)?;
        }
        loop {
            let prompt = format!("Input the action ({}):", Action::MENU);
            let Some(input) = self.console.ask(&prompt)? else {
                break;
            };
            match Action::parse(&input) {
                Some(Action::Exit) => break,
                Some(action) => self.dispatch(action)?,
                None => {
                    let input = input.trim();
                    self.console.say(&format!("Unknown action \"{input}\".\n"))?;
                }
            }
        }
        if let Some(path) = self.config.export_to.clone() {
            self.export_to_path(&path)?;
        }
        self.console.say("Bye bye!")
    }

    fn dispatch(&mut self, action: Action) -> Fallible<()> {
        match action {
            Action::Add => self.add_card(),
            Action::Remove => self.remove_card(),
            Action::Import => self.import_cards(),
            Action::Export => self.export_cards(),
            Action::Ask => self.quiz(),
            Action::Log => self.save_log(),
            Action::HardestCard => self.hardest_card(),
            Action::ResetStats => self.reset_stats(),
            // Exit never reaches dispatch; the loop handles it.
            Action::Exit => Ok(()),
        }
    }

    /// Prompt for a value, re-prompting until one not already taken is
    /// given. `None` at end of input.
    fn read_unique(
        &mut self,
        prompt: &str,
        taken: impl Fn(&CardStore, &str) -> bool,
        already: impl Fn(&str) -> String,
    ) -> Fallible<Option<String>> {
        self.console.say(prompt)?;
        loop {
            let Some(value) = self.console.read_line()? else {
                return Ok(None);
            };
            if !taken(&self.store, &value) {
                return Ok(Some(value));
            }
            self.console.say(&already(&value))?;
        }
    }

    fn add_card(&mut self) -> Fallible<()> {
        let Some(term) = self.read_unique(
            "The card:",
            |store, value| store.contains_term(value),
            |value| format!("The card \"{value}\" already exists. Try again:"),
        )?
        else {
            return Ok(());
        };
        let Some(definition) = self.read_unique(
            "The definition of the card:",
            |store, value| store.contains_definition(value),
            |value| format!("The definition \"{value}\" already exists. Try again:"),
        )?
        else {
            return Ok(());
        };
        let added = format!("The pair (\"{term}\":\"{definition}\") has been added.\n");
        match self.store.add(term, definition) {
            Ok(()) => self.console.say(&added),
            Err(e) => self.console.say(&format!("{e}\n")),
        }
    }

    fn remove_card(&mut self) -> Fallible<()> {
        let Some(term) = self.console.ask("Which card?")? else {
            return Ok(());
        };
        if self.store.remove(&term) {
            self.console.say("The card has been removed.\n")
        } else {
            self.console
                .say(&format!("Can't remove \"{term}\": there is no such card.\n"))
        }
    }

    fn import_cards(&mut self) -> Fallible<()> {
        let path = match self.config.import_from.clone() {
            Some(path) => path,
            None => match self.console.ask("File name:")? {
                Some(path) => path,
                None => return Ok(()),
            },
        };
        self.import_from_path(&path)
    }

    fn import_from_path(&mut self, path: &str) -> Fallible<()> {
        let text = match read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return self.console.say("File not found.\n");
            }
            Err(e) => return Err(e.into()),
        };
        let imported = read_store(&text)?;
        let count = self.store.merge(imported);
        log::debug!("loaded {count} cards from {path}");
        self.console
            .say(&format!("{count} cards have been loaded.\n"))
    }

    fn export_cards(&mut self) -> Fallible<()> {
        let path = match self.config.export_to.clone() {
            Some(path) => path,
            None => match self.console.ask("File name:")? {
                Some(path) => path,
                None => return Ok(()),
            },
        };
        self.export_to_path(&path)
    }

    fn export_to_path(&mut self, path: &str) -> Fallible<()> {
        let text = write_store(&self.store)?;
        write(path, text)?;
        log::debug!("saved {} cards to {path}", self.store.len());
        self.console
            .say(&format!("{} cards have been saved.\n", self.store.len()))
    }

    fn quiz(&mut self) -> Fallible<()> {
        if self.store.is_empty() {
            return self.console.say("There are no cards yet.\n");
        }
        let Some(input) = self.console.ask("How many times to ask?")? else {
            return Ok(());
        };
        let rounds: usize = match input.trim().parse() {
            Ok(rounds) => rounds,
            Err(_) => {
                return self.console.say(&format!("\"{input}\" is not a number.\n"));
            }
        };
        for _ in 0..rounds {
            let Some(card) = self.pick_card() else {
                break;
            };
            let prompt = format!("Print the definition of \"{}\":", card.term);
            let Some(answer) = self.console.ask(&prompt)? else {
                return Ok(());
            };
            match grade(&card, &self.store, &answer) {
                Verdict::Correct => self.console.say("Correct!")?,
                Verdict::Wrong => {
                    self.stats.record_error(&card.term);
                    self.console.say(&format!(
                        "Wrong. The right answer is \"{}\".\n",
                        card.definition
                    ))?;
                }
                Verdict::WrongMatchesOther { other_term } => {
                    self.stats.record_error(&card.term);
                    self.console.say(&format!(
                        "Wrong. The right answer is \"{}\", but your definition is correct for \"{other_term}\".\n",
                        card.definition
                    ))?;
                }
            }
        }
        Ok(())
    }

    /// Pick a card uniformly at random, with replacement.
    fn pick_card(&mut self) -> Option<Card> {
        if self.store.is_empty() {
            return None;
        }
        let index = self.rng.pick(self.store.len());
        self.store.nth(index).cloned()
    }

    fn save_log(&mut self) -> Fallible<()> {
        // The log action's own prompt, input, and confirmation stay out of
        // the log itself.
        let Some(path) = self.console.ask_unrecorded("File name:")? else {
            return Ok(());
        };
        self.console.transcript().append_to(Path::new(&path))?;
        self.console.say_unrecorded("The log has been saved.\n")
    }

    fn hardest_card(&mut self) -> Fallible<()> {
        match self.stats.hardest() {
            None => self.console.say("There are no cards with errors.\n"),
            Some((terms, errors)) => {
                let quoted: Vec<String> = terms.iter().map(|t| format!("\"{t}\"")).collect();
                let quoted = quoted.join(", ");
                let message = if terms.len() == 1 {
                    format!("The hardest card is {quoted}. You have {errors} errors answering it.\n")
                } else {
                    format!(
                        "The hardest cards are {quoted}. You have {errors} errors answering them.\n"
                    )
                };
                self.console.say(&message)
            }
        }
    }

    fn reset_stats(&mut self) -> Fallible<()> {
        self.stats.reset();
        self.console.say("Card statistics have been reset.\n")
    }
}
