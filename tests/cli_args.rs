//! Tests for the command-line interface, run against the real binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

struct Env {
    dir: TempDir,
}

impl Env {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    fn data_path(&self) -> PathBuf {
        self.dir.path().join("data").join("notes.json")
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_vibenotes"))
            .arg("--config")
            .arg(self.dir.path().join("missing-config.toml"))
            .arg("--data")
            .arg(self.data_path())
            .args(args)
            .env_remove("VIBENOTES_LOG")
            .output()
            .expect("Failed to execute command")
    }

    fn stdout(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "{:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }
}

#[test]
fn test_help_lists_subcommands() {
    let output = Command::new(env!("CARGO_BIN_EXE_vibenotes"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["list", "folders", "new", "new-folder", "export", "path"] {
        assert!(stdout.contains(command), "missing {}", command);
    }
    assert!(stdout.contains("--ephemeral"));
}

#[test]
fn test_path_prints_data_override() {
    let env = Env::new();
    assert_eq!(env.stdout(&["path"]), env.data_path().display().to_string());
}

#[test]
fn test_new_note_is_listed_and_persisted() {
    let env = Env::new();
    let id = env.stdout(&["new", "--title", "Groceries", "--content", "buy milk"]);
    assert!(!id.is_empty());
    assert!(env.data_path().exists());

    let listing = env.stdout(&["list"]);
    assert!(listing.contains(&id));
    assert!(listing.contains("Groceries"));

    let stored = std::fs::read_to_string(env.data_path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(json["version"], 0);
    assert_eq!(json["state"]["notes"][0]["content"], "buy milk");
}

#[test]
fn test_folders_and_filters() {
    let env = Env::new();
    let folder = env.stdout(&["new-folder", "Work", "--color", "#10b981"]);
    let filed = env.stdout(&["new", "--title", "Standup", "--folder", &folder]);
    let loose = env.stdout(&["new", "--title", "Loose"]);

    let folders = env.stdout(&["folders"]);
    assert!(folders.contains("Work"));
    assert!(folders.contains("#10b981"));

    let in_work = env.stdout(&["list", "--folder", &folder]);
    assert!(in_work.contains(&filed));
    assert!(!in_work.contains(&loose));

    let uncategorized = env.stdout(&["list", "--uncategorized"]);
    assert!(uncategorized.contains(&loose));
    assert!(!uncategorized.contains(&filed));

    let searched = env.stdout(&["list", "--search", "STAND"]);
    assert!(searched.contains(&filed));
    assert!(!searched.contains(&loose));
}

#[test]
fn test_export_writes_markdown() {
    let env = Env::new();
    let id = env.stdout(&["new", "--title", "Trip: Rome", "--content", "# Rome\n"]);
    let out = env.dir.path().join("exports");

    let written = env.stdout(&["export", &id, "--out", out.to_str().unwrap()]);

    assert_eq!(Path::new(&written), out.join("Trip__Rome.md"));
    assert_eq!(std::fs::read_to_string(&written).unwrap(), "# Rome\n");
}

#[test]
fn test_unknown_ids_exit_with_error() {
    let env = Env::new();

    let output = env.run(&["export", "no-such-note"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Note 'no-such-note' not found"), "{}", stderr);

    let output = env.run(&["new", "--folder", "no-such-folder"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!env.data_path().exists());
}

#[test]
fn test_ephemeral_never_touches_disk() {
    let env = Env::new();
    env.stdout(&["--ephemeral", "new", "--title", "Scratch"]);
    assert!(!env.data_path().exists());
    assert_eq!(env.stdout(&["--ephemeral", "path"]), "(in memory)");
}

#[test]
fn test_malformed_data_file_starts_empty() {
    let env = Env::new();
    std::fs::create_dir_all(env.data_path().parent().unwrap()).unwrap();
    std::fs::write(env.data_path(), "{ not json").unwrap();

    assert_eq!(env.stdout(&["list"]), "");
}

#[test]
fn test_invalid_config_exits_with_error() {
    let env = Env::new();
    let config = env.dir.path().join("bad.toml");
    std::fs::write(&config, "[editor]\ntick_rate_ms = 1\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_vibenotes"))
        .arg("--config")
        .arg(&config)
        .arg("path")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"), "{}", stderr);
}
