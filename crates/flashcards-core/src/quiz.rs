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

use crate::store::Card;
use crate::store::CardStore;

/// The outcome of grading one quiz answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The answer matches the card's definition exactly.
    Correct,
    /// The answer is wrong.
    Wrong,
    /// The answer is wrong for this card, but is the exact definition of
    /// another card in the store.
    WrongMatchesOther { other_term: String },
}

/// Grade an answer against a card. Grading is pure: recording the error for
/// a wrong answer is the caller's job, so it happens exactly once.
pub fn grade(card: &Card, store: &CardStore, response: &str) -> Verdict {
    if response == card.definition {
        return Verdict::Correct;
    }
    match store.term_for_definition(response) {
        Some(other) => Verdict::WrongMatchesOther {
            other_term: other.to_string(),
        },
        None => Verdict::Wrong,
    }
}
