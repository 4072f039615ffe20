//! Acceptance tests for the mindmate-report binary
//!
//! Each test runs the real binary against an isolated XDG environment so
//! nothing touches the developer's own companion data.

use mindmate_core::types::{ChatRecord, JournalRecord};
use mindmate_core::Database;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct CliTestEnv {
    _temp_dir: TempDir,
    home: PathBuf,
    xdg_data: PathBuf,
    xdg_config: PathBuf,
    xdg_state: PathBuf,
}

impl CliTestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let base = temp_dir.path().to_path_buf();
        let home = base.join("home");
        let xdg_data = base.join("xdg-data");
        let xdg_config = base.join("xdg-config");
        let xdg_state = base.join("xdg-state");

        fs::create_dir_all(&home).expect("failed to create HOME");
        fs::create_dir_all(&xdg_data).expect("failed to create XDG_DATA_HOME");
        fs::create_dir_all(&xdg_config).expect("failed to create XDG_CONFIG_HOME");
        fs::create_dir_all(&xdg_state).expect("failed to create XDG_STATE_HOME");

        Self {
            _temp_dir: temp_dir,
            home,
            xdg_data,
            xdg_config,
            xdg_state,
        }
    }

    fn db_path(&self) -> PathBuf {
        self.xdg_data.join("mindmate/data.db")
    }

    /// Seed two weeks of chats (11 negative) and ten journal entries.
    fn seed_low_fortnight(&self) {
        let db = Database::open(&self.db_path()).expect("failed to open db");
        db.migrate().expect("failed to migrate db");

        for day in 1..=14 {
            let mood = if day > 3 { "sad" } else { "calm" };
            db.append_chat(&ChatRecord::new(
                format!("2024-03-{day:02} 10:00:00"),
                format!("day {day}"),
                "reply",
                Some(mood.to_string()),
            ))
            .expect("failed to append chat");
        }

        for day in 1..=10 {
            let text = if day % 2 == 0 {
                "anxiety reduced today"
            } else {
                "plain entry"
            };
            db.append_journal(&JournalRecord::new(format!("2024-03-{day:02}"), text))
                .expect("failed to append journal");
        }
    }
}

fn run_report(env: &CliTestEnv, args: &[&str]) -> Output {
    let bin_path = PathBuf::from(assert_cmd::cargo::cargo_bin!("mindmate-report"));

    Command::new(bin_path)
        .args(args)
        .env("HOME", &env.home)
        .env("XDG_DATA_HOME", &env.xdg_data)
        .env("XDG_CONFIG_HOME", &env.xdg_config)
        .env("XDG_STATE_HOME", &env.xdg_state)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute mindmate-report: {e}"))
}

fn assert_success(args: &[&str], output: &Output) {
    if output.status.success() {
        return;
    }

    let rendered_args = args
        .iter()
        .map(|arg| OsString::from(arg).to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    panic!(
        "mindmate-report {rendered_args} failed\nstatus: {}\nstdout:\n{}\nstderr:\n{}",
        output.status, stdout, stderr
    );
}

#[test]
fn report_runs_on_empty_store() {
    let env = CliTestEnv::new();

    let output = run_report(&env, &[]);
    assert_success(&[], &output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("YOUR WELLNESS PROGRESS OVERVIEW"));
    assert!(stdout.contains("No journal entries yet"));
    assert!(stdout.contains("No mood data yet"));

    assert!(
        env.db_path().exists(),
        "database file should exist at {}",
        env.db_path().display()
    );
}

#[test]
fn report_shows_seeded_overview() {
    let env = CliTestEnv::new();
    env.seed_low_fortnight();

    let args = ["--date", "2024-03-14"];
    let output = run_report(&env, &args);
    assert_success(&args, &output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("JOURNALING"));
    assert!(stdout.contains("Improvement (est.): 50%"));
    assert!(stdout.contains("EMOTIONAL INSIGHTS"));
    assert!(stdout.contains("Sad"));
    assert!(stdout.contains("Negative-day streak: 11"));
}

#[test]
fn report_exports_valid_json() {
    let env = CliTestEnv::new();
    env.seed_low_fortnight();

    let args = ["--date", "2024-03-14", "--export", "json"];
    let output = run_report(&env, &args);
    assert_success(&args, &output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("export should be valid JSON");
    assert_eq!(json["journaling"]["improvement_pct"], 50.0);
    assert_eq!(json["negative_streak"], 11);
    assert_eq!(json["suggested_music"], "sad");
}

#[test]
fn check_in_flag_prints_decision_and_debounces() {
    let env = CliTestEnv::new();
    env.seed_low_fortnight();

    let args = ["--date", "2024-03-14", "--check-in"];
    let first = run_report(&env, &args);
    assert_success(&args, &first);
    let stdout = String::from_utf8_lossy(&first.stdout);
    assert!(stdout.contains("Check-in suggested"));

    // Same day, second run: the persisted alert date debounces
    let second = run_report(&env, &args);
    assert_success(&args, &second);
    let stdout = String::from_utf8_lossy(&second.stdout);
    assert!(stdout.contains("No check-in needed today"));
}

#[test]
fn report_derives_xdg_paths_from_home_when_unset() {
    let env = CliTestEnv::new();
    let bin_path = PathBuf::from(assert_cmd::cargo::cargo_bin!("mindmate-report"));

    // Only HOME set: the binary pins the XDG vars itself and the
    // database lands under ~/.local/share/mindmate/
    let output = Command::new(bin_path)
        .env("HOME", &env.home)
        .env_remove("XDG_DATA_HOME")
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("XDG_STATE_HOME")
        .output()
        .expect("failed to execute mindmate-report");
    assert_success(&[], &output);

    let db_path = env.home.join(".local/share/mindmate/data.db");
    assert!(
        db_path.exists(),
        "database file should exist at {}",
        db_path.display()
    );
}

#[test]
fn practices_flag_prints_catalog() {
    let env = CliTestEnv::new();

    let args = ["--practices"];
    let output = run_report(&env, &args);
    assert_success(&args, &output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("MINDFULNESS EXERCISES"));
    assert!(stdout.contains("4-4-4 Breathing"));
    assert!(stdout.contains("YOGA POSES"));
    assert!(stdout.contains("Child's Pose"));
}

#[test]
fn unknown_export_format_fails() {
    let env = CliTestEnv::new();

    let args = ["--export", "xml"];
    let output = run_report(&env, &args);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown export format"));
}
