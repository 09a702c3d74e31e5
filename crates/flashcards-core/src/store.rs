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

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

/// A single flashcard: a term and its definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub term: String,
    pub definition: String,
}

impl Card {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Card {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// Why a card could not be added to the store.
#[derive(Debug, PartialEq, Eq)]
pub enum AddError {
    DuplicateTerm(String),
    DuplicateDefinition(String),
}

impl Display for AddError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AddError::DuplicateTerm(term) => {
                write!(f, "the card \"{term}\" already exists")
            }
            AddError::DuplicateDefinition(definition) => {
                write!(f, "the definition \"{definition}\" already exists")
            }
        }
    }
}

impl Error for AddError {}

/// An insertion-ordered mapping from terms to definitions.
///
/// The store is small (a study session's worth of cards), so lookups are
/// linear scans. The reverse lookup from definition to term is explicit
/// rather than an incidental property of the primary mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    pub fn new() -> Self {
        CardStore { cards: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.cards.iter().any(|c| c.term == term)
    }

    pub fn contains_definition(&self, definition: &str) -> bool {
        self.cards.iter().any(|c| c.definition == definition)
    }

    pub fn definition_of(&self, term: &str) -> Option<&str> {
        self.cards
            .iter()
            .find(|c| c.term == term)
            .map(|c| c.definition.as_str())
    }

    /// Find the term whose definition matches exactly. First match wins.
    pub fn term_for_definition(&self, definition: &str) -> Option<&str> {
        self.cards
            .iter()
            .find(|c| c.definition == definition)
            .map(|c| c.term.as_str())
    }

    /// Add a new card, rejecting duplicate terms and duplicate definitions.
    /// On rejection the store is unchanged.
    pub fn add(
        &mut self,
        term: impl Into<String>,
        definition: impl Into<String>,
    ) -> Result<(), AddError> {
        let term = term.into();
        let definition = definition.into();
        if self.contains_term(&term) {
            return Err(AddError::DuplicateTerm(term));
        }
        if self.contains_definition(&definition) {
            return Err(AddError::DuplicateDefinition(definition));
        }
        self.cards.push(Card { term, definition });
        Ok(())
    }

    /// Remove the card with the given term. Returns whether it was present.
    pub fn remove(&mut self, term: &str) -> bool {
        let before = self.cards.len();
        self.cards.retain(|c| c.term != term);
        self.cards.len() < before
    }

    /// Insert a card, overwriting the definition if the term is already
    /// present. An overwritten card keeps its position; a new term is
    /// appended.
    pub fn upsert(&mut self, term: impl Into<String>, definition: impl Into<String>) {
        let term = term.into();
        let definition = definition.into();
        match self.cards.iter_mut().find(|c| c.term == term) {
            Some(card) => card.definition = definition,
            None => self.cards.push(Card { term, definition }),
        }
    }

    /// Merge another store into this one, overwriting on term collision.
    /// Returns the number of entries in the source.
    pub fn merge(&mut self, source: CardStore) -> usize {
        let count = source.len();
        for card in source.cards {
            self.upsert(card.term, card.definition);
        }
        count
    }

    pub fn nth(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
