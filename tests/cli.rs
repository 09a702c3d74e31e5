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

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn flashcards() -> Command {
    Command::cargo_bin("flashcards").unwrap()
}

#[test]
fn test_exit_cleanly() {
    flashcards()
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Input the action ("))
        .stdout(predicate::str::ends_with("Bye bye!\n"));
}

#[test]
fn test_add_and_quiz() {
    let script = "add\ncat\na small domesticated animal\nask\n1\ndog\nexit\n";
    flashcards()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The pair (\"cat\":\"a small domesticated animal\") has been added.",
        ))
        .stdout(predicate::str::contains(
            "Wrong. The right answer is \"a small domesticated animal\".",
        ));
}

#[test]
fn test_import_from_flag() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cards.json");
    write(&path, r#"{"a":"1","b":"2"}"#).unwrap();
    flashcards()
        .arg("--import_from")
        .arg(&path)
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2 cards have been loaded.\n"));
}

#[test]
fn test_import_from_missing_file_is_not_fatal() {
    flashcards()
        .arg("--import_from")
        .arg("./no-such-file.json")
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("File not found.\n"))
        .stdout(predicate::str::ends_with("Bye bye!\n"));
}

#[test]
fn test_export_to_flag_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cards.json");
    flashcards()
        .arg("--export_to")
        .arg(&path)
        .write_stdin("add\ncat\nmeows\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 cards have been saved."));
    assert_eq!(read_to_string(&path).unwrap(), r#"{"cat":"meows"}"#);

    flashcards()
        .arg("--import_from")
        .arg(&path)
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1 cards have been loaded.\n"));
}

#[test]
fn test_malformed_import_file_is_fatal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cards.json");
    write(&path, "not json at all").unwrap();
    flashcards()
        .arg("--import_from")
        .arg(&path)
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn test_save_log() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.log");
    let script = format!("add\ncat\nmeows\nlog\n{}\nexit\n", path.display());
    flashcards()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("The log has been saved."));
    let saved = read_to_string(&path).unwrap();
    assert!(saved.contains("The pair (\"cat\":\"meows\") has been added."));
    assert!(saved.contains("cat"));
    assert!(!saved.contains("The log has been saved."));
}

#[test]
fn test_hardest_card_flow() {
    let script = "add\ncat\nmeows\nask\n2\nno\nno\nhardest card\nreset stats\nhardest card\nexit\n";
    flashcards()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The hardest card is \"cat\". You have 2 errors answering it.",
        ))
        .stdout(predicate::str::contains("Card statistics have been reset."))
        .stdout(predicate::str::contains("There are no cards with errors."));
}
