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

//! flashcards-core: Core library for the flashcards terminal trainer.
//!
//! This library provides the I/O-free parts of the tool:
//! - The insertion-ordered card store
//! - The flat JSON persistence format
//! - Quiz answer grading
//! - Per-session error statistics
//! - Card sampling

pub mod error;
pub mod persist;
pub mod quiz;
pub mod rng;
pub mod stats;
pub mod store;

// Re-exports for convenience
pub use error::{ErrorReport, Fallible, fail};
pub use persist::{read_store, write_store};
pub use quiz::{Verdict, grade};
pub use rng::SampleRng;
pub use stats::Stats;
pub use store::{AddError, Card, CardStore};
