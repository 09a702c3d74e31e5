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

//! The persistence format: a flat JSON object mapping term strings to
//! definition strings, UTF-8 text. Serialization walks the store in
//! insertion order; deserialization preserves document order, and a later
//! duplicate key overwrites an earlier one.

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use crate::error::Fallible;
use crate::store::CardStore;

impl Serialize for CardStore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for card in self.iter() {
            map.serialize_entry(&card.term, &card.definition)?;
        }
        map.end()
    }
}

struct StoreVisitor;

impl<'de> Visitor<'de> for StoreVisitor {
    type Value = CardStore;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a flat object mapping terms to definitions")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut store = CardStore::new();
        while let Some((term, definition)) = access.next_entry::<String, String>()? {
            store.upsert(term, definition);
        }
        Ok(store)
    }
}

impl<'de> Deserialize<'de> for CardStore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(StoreVisitor)
    }
}

/// Parse a persisted store. A malformed document is an error.
pub fn read_store(text: &str) -> Fallible<CardStore> {
    Ok(serde_json::from_str(text)?)
}

/// Serialize the full store.
pub fn write_store(store: &CardStore) -> Fallible<String> {
    Ok(serde_json::to_string(store)?)
}
