use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        // Keep the user's own config file out of the picture
        std::fs::write(dir.path().join("config.toml"), "").unwrap();
        Workspace { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_icsgen"));
        cmd.arg("--config").arg(self.path("config.toml"));
        cmd
    }

    fn run(&self, input: Option<&Path>, output: &Path) -> Output {
        let mut cmd = self.command();
        if let Some(input) = input {
            cmd.arg(input);
        }
        cmd.arg("-o").arg(output).output().unwrap()
    }
}

#[test]
fn generates_file_and_reports_single_event() {
    let ws = Workspace::new();
    let input = ws.write(
        "events.json",
        r#"{"events": [{"date": "2024-03-10", "summary": "Launch"}]}"#,
    );
    let output = ws.path("out.ics");

    let result = ws.run(Some(&input), &output);

    assert!(result.status.success(), "{}", String::from_utf8_lossy(&result.stderr));
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("(1 event)"), "{}", stdout);
    assert!(stdout.contains("out.ics"), "{}", stdout);

    let bytes = std::fs::read(&output).unwrap();
    let ics = String::from_utf8(bytes).unwrap();
    assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(ics.ends_with("\r\nEND:VCALENDAR"));
    assert!(!ics.replace("\r\n", "").contains('\n'), "bare LF in output");
}

#[test]
fn reports_plural_event_count() {
    let ws = Workspace::new();
    let input = ws.write(
        "events.json",
        r#"{"events": [
            {"date": "2024-03-10", "summary": "One"},
            {"date": "2024-03-11", "summary": "Two"}
        ]}"#,
    );

    let result = ws.run(Some(&input), &ws.path("out.ics"));

    assert!(result.status.success());
    assert!(String::from_utf8_lossy(&result.stdout).contains("(2 events)"));
}

#[test]
fn reads_from_stdin_when_no_input_given() {
    let ws = Workspace::new();
    let output = ws.path("out.ics");

    let mut child = ws
        .command()
        .arg("-o")
        .arg(&output)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"{"timezone": "UTC", "events": [{"date": "2024-06-01", "time": "09:00", "summary": "Sync"}]}"#)
        .unwrap();
    let result = child.wait_with_output().unwrap();

    assert!(result.status.success(), "{}", String::from_utf8_lossy(&result.stderr));
    let ics = std::fs::read_to_string(&output).unwrap();
    assert!(ics.contains("DTSTART;TZID=UTC:20240601T090000\r\n"));
    assert!(ics.contains("DURATION:PT1H\r\n"));
}

#[test]
fn validation_error_goes_to_stderr_with_failure_status() {
    let ws = Workspace::new();
    let input = ws.write(
        "events.json",
        r#"{"events": [{"date": "2024-06-01", "summary": "Sync", "status": "MAYBE"}]}"#,
    );
    let output = ws.path("out.ics");

    let result = ws.run(Some(&input), &output);

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Error:"), "{}", stderr);
    assert!(stderr.contains("TENTATIVE/CONFIRMED/CANCELLED"), "{}", stderr);
    assert!(result.stdout.is_empty());
    assert!(!output.exists());
}

#[test]
fn config_file_sets_product_id_and_fallback_timezone() {
    let ws = Workspace::new();
    ws.write(
        "config.toml",
        "product_id = \"-//Acme//Planner//EN\"\nuid_domain = \"acme.example\"\ntimezone = \"Europe/Paris\"\n",
    );
    let input = ws.write(
        "events.json",
        r#"{"events": [{"date": "2024-06-01", "time": "14:15", "summary": "Demo"}]}"#,
    );
    let output = ws.path("out.ics");

    let result = ws.run(Some(&input), &output);

    assert!(result.status.success(), "{}", String::from_utf8_lossy(&result.stderr));
    let ics = std::fs::read_to_string(&output).unwrap();
    assert!(ics.contains("PRODID:-//Acme//Planner//EN\r\n"));
    assert!(ics.contains("@acme.example\r\n"));
    assert!(ics.contains("DTSTART;TZID=Europe/Paris:20240601T141500\r\n"));
}

#[test]
fn missing_output_flag_is_a_usage_error() {
    let ws = Workspace::new();
    let input = ws.write("events.json", r#"{"events": []}"#);

    let result = ws.command().arg(&input).output().unwrap();

    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("--output"));
}
