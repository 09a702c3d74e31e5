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

use std::io;
use std::path::Path;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use clap::Parser;

use flashcards_core::error::Fallible;
use flashcards_core::rng::SampleRng;

use crate::config::CONFIG_FILE;
use crate::config::FileConfig;
use crate::repl::Session;
use crate::repl::SessionConfig;

/// An interactive terminal flashcard trainer.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Load cards from this JSON file at startup.
    #[arg(long = "import_from", value_name = "PATH")]
    import_from: Option<String>,
    /// Write the cards to this JSON file on exit.
    #[arg(long = "export_to", value_name = "PATH")]
    export_to: Option<String>,
}

pub fn entrypoint() -> Fallible<()> {
    let cli = Cli::parse();
    let defaults = FileConfig::load(Path::new(CONFIG_FILE))?;
    let config = SessionConfig {
        import_from: cli.import_from.or(defaults.import_from),
        export_to: cli.export_to.or(defaults.export_to),
    };
    log::debug!(
        "starting session (import: {:?}, export: {:?})",
        config.import_from,
        config.export_to
    );
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos() as u64;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(
        config,
        SampleRng::from_seed(seed),
        stdin.lock(),
        stdout.lock(),
    );
    session.run()
}
