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
use std::path::Path;

use serde::Deserialize;

use flashcards_core::error::ErrorReport;
use flashcards_core::error::Fallible;

/// Name of the optional defaults file, looked up in the working directory.
pub const CONFIG_FILE: &str = "flashcards.toml";

/// Defaults that can be set in `flashcards.toml`. Command-line flags take
/// precedence over these.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub import_from: Option<String>,
    pub export_to: Option<String>,
}

impl FileConfig {
    /// Read the defaults file. An absent file means empty defaults; a
    /// malformed file is an error.
    pub fn load(path: &Path) -> Fallible<FileConfig> {
        if !path.exists() {
            return Ok(FileConfig::default());
        }
        let text = read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|e| ErrorReport::new(format!("failed to parse {}: {e}", path.display())))
    }
}
