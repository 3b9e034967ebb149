//! Generation script executor.
//!
//! Runs `<interpreter> <script> <name> <manager_name> <company_name>
//! <job_title> <skills> <company_values>` with stdout and stderr merged into a
//! single capture file, a bounded wait, and kill-on-timeout.

use crate::error::{LetterError, Result};
use crate::placeholder::FieldMap;
use std::collections::HashMap;
use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

/// Result of running the generation script.
#[derive(Debug, Clone)]
pub struct ScriptOutput {
    /// Exit code of the process (None if killed or terminated by a signal).
    pub exit_code: Option<i32>,
    /// Combined stdout and stderr, in write order.
    pub output: String,
    /// Duration of execution.
    pub duration: Duration,
    /// Whether the process was killed due to timeout.
    pub timed_out: bool,
}

impl ScriptOutput {
    /// Check if the script ran to completion with exit code 0.
    pub fn is_success(&self) -> bool {
        !self.timed_out && self.exit_code == Some(0)
    }

    /// The letter text on success, or a backend error carrying the captured output.
    pub fn into_text(self) -> Result<String> {
        if self.is_success() {
            return Ok(self.output.trim().to_string());
        }

        let message = if self.timed_out {
            format!(
                "script timed out after {}s and was killed. Output:\n{}",
                self.duration.as_secs(),
                self.output
            )
        } else if let Some(code) = self.exit_code {
            format!("script exited with code {}. Output:\n{}", code, self.output)
        } else {
            format!("script was terminated by a signal. Output:\n{}", self.output)
        };

        Err(LetterError::BackendError(message))
    }
}

/// Runs an external generation script with the field values as arguments.
#[derive(Debug, Clone)]
pub struct ScriptRunner {
    interpreter: Vec<String>,
    script: PathBuf,
    timeout: Duration,
    environment: HashMap<String, String>,
}

impl ScriptRunner {
    /// Create a runner.
    ///
    /// `interpreter` is split shell-style so it may carry flags (`python3 -u`).
    pub fn new<P: Into<PathBuf>>(interpreter: &str, script: P, timeout_seconds: u64) -> Result<Self> {
        let interpreter = shell_words::split(interpreter).map_err(|e| {
            LetterError::UserError(format!(
                "failed to parse interpreter '{}': {}\n\
                 Fix: check for unmatched quotes or invalid escape sequences.",
                interpreter, e
            ))
        })?;

        if interpreter.is_empty() {
            return Err(LetterError::UserError(
                "script interpreter is empty".to_string(),
            ));
        }

        Ok(Self {
            interpreter,
            script: script.into(),
            timeout: Duration::from_secs(timeout_seconds),
            environment: HashMap::new(),
        })
    }

    /// Set extra environment variables for the script process.
    pub fn with_environment(mut self, environment: HashMap<String, String>) -> Self {
        self.environment = environment;
        self
    }

    /// Run the script and return its trimmed output, or a backend error.
    pub fn generate(&self, fields: &FieldMap) -> Result<String> {
        self.run(fields)?.into_text()
    }

    /// Run the script to completion (or timeout) and capture its output.
    pub fn run(&self, fields: &FieldMap) -> Result<ScriptOutput> {
        if !self.script.is_file() {
            return Err(LetterError::SourceError(format!(
                "generation script '{}' not found",
                self.script.display()
            )));
        }

        let mut capture = tempfile::tempfile().map_err(|e| {
            LetterError::SourceError(format!("failed to create output capture file: {}", e))
        })?;
        let stdout = clone_handle(&capture)?;
        let stderr = clone_handle(&capture)?;

        let program = &self.interpreter[0];
        let mut command = Command::new(program);
        command
            .args(&self.interpreter[1..])
            .arg(&self.script)
            .args(fields.positional_args())
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::from(stderr));

        for (key, value) in &self.environment {
            command.env(key, value);
        }

        log::info!(
            "running {} {}",
            self.interpreter.join(" "),
            self.script.display()
        );

        let start_time = Instant::now();
        let mut child = command.spawn().map_err(|e| match e.kind() {
            ErrorKind::NotFound => LetterError::UserError(format!(
                "failed to execute script interpreter '{}': {}\n\
                 Fix: ensure the interpreter is installed and in PATH.",
                program, e
            )),
            _ => LetterError::UserError(format!(
                "failed to execute script interpreter '{}': {}",
                program, e
            )),
        })?;

        let (exit_code, timed_out) = wait_with_timeout(&mut child, self.timeout)?;
        let duration = start_time.elapsed();

        let output = read_capture(&mut capture)?;
        log::debug!(
            "script finished in {:?} (exit code {:?}, timed out: {})",
            duration,
            exit_code,
            timed_out
        );

        Ok(ScriptOutput {
            exit_code,
            output,
            duration,
            timed_out,
        })
    }
}

fn clone_handle(file: &File) -> Result<File> {
    file.try_clone().map_err(|e| {
        LetterError::SourceError(format!("failed to share output capture file: {}", e))
    })
}

/// Read everything the child wrote, tolerating invalid UTF-8.
fn read_capture(capture: &mut File) -> Result<String> {
    let mut bytes = Vec::new();
    capture
        .seek(SeekFrom::Start(0))
        .and_then(|_| capture.read_to_end(&mut bytes))
        .map_err(|e| LetterError::SourceError(format!("failed to read script output: {}", e)))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Wait for a child process with timeout.
///
/// Returns (exit_code, timed_out).
fn wait_with_timeout(child: &mut Child, timeout: Duration) -> Result<(Option<i32>, bool)> {
    let start = Instant::now();
    let poll_interval = Duration::from_millis(50);

    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok((status.code(), false)),
            Ok(None) => {
                if start.elapsed() >= timeout {
                    kill_process(child);
                    return Ok((None, true));
                }
                std::thread::sleep(poll_interval);
            }
            Err(e) => {
                return Err(LetterError::BackendError(format!(
                    "failed to check script status: {}",
                    e
                )));
            }
        }
    }
}

/// Kill a process and reap it.
fn kill_process(child: &mut Child) {
    // SIGKILL on Unix, TerminateProcess on Windows.
    let _ = child.kill();
    let _ = child.wait();
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::test_support::{sample_fields, write_script};
    use std::path::Path;
    use tempfile::TempDir;

    fn runner(script: &Path, timeout_seconds: u64) -> ScriptRunner {
        ScriptRunner::new("sh", script, timeout_seconds).unwrap()
    }

    #[test]
    fn test_passes_fields_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let script = write_script(
            temp_dir.path(),
            "gen.sh",
            r#"printf '%s|%s|%s|%s|%s|%s\n' "$1" "$2" "$3" "$4" "$5" "$6""#,
        );

        let text = runner(&script, 10).generate(&sample_fields()).unwrap();
        assert_eq!(text, "Ada|Grace|Acme|Engineer|C++|Integrity");
    }

    #[test]
    fn test_values_are_passed_literally() {
        let temp_dir = TempDir::new().unwrap();
        let script = write_script(temp_dir.path(), "gen.sh", r#"printf '%s' "$5""#);
        let fields = sample_fields().with(crate::placeholder::Placeholder::Skills, "C++, Rust & $HOME \"quoted\"");

        let text = runner(&script, 10).generate(&fields).unwrap();
        assert_eq!(text, "C++, Rust & $HOME \"quoted\"");
    }

    #[test]
    fn test_output_is_trimmed() {
        let temp_dir = TempDir::new().unwrap();
        let script = write_script(temp_dir.path(), "gen.sh", "echo\necho '  Dear Grace,  '\necho\n");

        let text = runner(&script, 10).generate(&sample_fields()).unwrap();
        assert_eq!(text, "Dear Grace,");
    }

    #[test]
    fn test_stderr_is_merged() {
        let temp_dir = TempDir::new().unwrap();
        let script = write_script(temp_dir.path(), "gen.sh", "echo out\necho err 1>&2\n");

        let output = runner(&script, 10).run(&sample_fields()).unwrap();
        assert!(output.is_success());
        assert!(output.output.contains("out"));
        assert!(output.output.contains("err"));
    }

    #[test]
    fn test_nonzero_exit_reports_code_and_output() {
        let temp_dir = TempDir::new().unwrap();
        let script = write_script(temp_dir.path(), "gen.sh", "echo 'traceback...'\nexit 2\n");

        let err = runner(&script, 10).generate(&sample_fields()).unwrap_err();
        assert!(matches!(err, LetterError::BackendError(_)));
        let msg = err.to_string();
        assert!(msg.contains("exited with code 2"), "{}", msg);
        assert!(msg.contains("traceback..."), "{}", msg);
    }

    #[test]
    fn test_timeout_kills_script() {
        let temp_dir = TempDir::new().unwrap();
        let script = write_script(temp_dir.path(), "gen.sh", "echo started\nsleep 10\n");

        let output = runner(&script, 1).run(&sample_fields()).unwrap();
        assert!(output.timed_out);
        assert!(!output.is_success());
        assert!(output.duration < Duration::from_secs(10));

        let err = output.into_text().unwrap_err();
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_environment_is_passed() {
        let temp_dir = TempDir::new().unwrap();
        let script = write_script(temp_dir.path(), "gen.sh", "printf '%s' \"$LETTER_TONE\"\n");
        let mut env = HashMap::new();
        env.insert("LETTER_TONE".to_string(), "formal".to_string());

        let text = runner(&script, 10)
            .with_environment(env)
            .generate(&sample_fields())
            .unwrap();
        assert_eq!(text, "formal");
    }

    #[test]
    fn test_interpreter_with_flags() {
        let temp_dir = TempDir::new().unwrap();
        let script = write_script(temp_dir.path(), "gen.sh", "printf '%s' \"$1\"\n");

        let runner = ScriptRunner::new("sh -e", &script, 10).unwrap();
        assert_eq!(runner.generate(&sample_fields()).unwrap(), "Ada");
    }

    #[test]
    fn test_missing_script_is_source_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = runner(&temp_dir.path().join("missing.sh"), 10)
            .generate(&sample_fields())
            .unwrap_err();
        assert!(matches!(err, LetterError::SourceError(_)));
    }

    #[test]
    fn test_missing_interpreter_is_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let script = write_script(temp_dir.path(), "gen.sh", "echo hi\n");

        let err = ScriptRunner::new("nonexistent_interpreter_xyz_123", &script, 10)
            .unwrap()
            .generate(&sample_fields())
            .unwrap_err();
        assert!(matches!(err, LetterError::UserError(_)));
        assert!(err.to_string().contains("failed to execute"));
    }

    #[test]
    fn test_nul_byte_in_field_has_no_install_hint() {
        let temp_dir = TempDir::new().unwrap();
        let script = write_script(temp_dir.path(), "gen.sh", "echo hi\n");
        let fields = sample_fields().with(crate::placeholder::Placeholder::Skills, "C\0++");

        let err = runner(&script, 10).generate(&fields).unwrap_err();
        assert!(matches!(err, LetterError::UserError(_)));
        let msg = err.to_string();
        assert!(msg.contains("failed to execute"), "{}", msg);
        assert!(!msg.contains("installed and in PATH"), "{}", msg);
    }

    #[test]
    fn test_missing_interpreter_has_install_hint() {
        let temp_dir = TempDir::new().unwrap();
        let script = write_script(temp_dir.path(), "gen.sh", "echo hi\n");

        let err = ScriptRunner::new("nonexistent_interpreter_xyz_123", &script, 10)
            .unwrap()
            .generate(&sample_fields())
            .unwrap_err();
        assert!(err.to_string().contains("installed and in PATH"));
    }

    #[test]
    fn test_bad_interpreter_strings() {
        assert!(ScriptRunner::new("python \"unterminated", "x.py", 10).is_err());
        assert!(ScriptRunner::new("   ", "x.py", 10).is_err());
    }

    #[test]
    fn test_script_output_into_text() {
        let output = ScriptOutput {
            exit_code: Some(0),
            output: "\n letter \n".to_string(),
            duration: Duration::from_secs(1),
            timed_out: false,
        };
        assert_eq!(output.clone().into_text().unwrap(), "letter");

        let killed = ScriptOutput {
            exit_code: None,
            ..output
        };
        let err = killed.into_text().unwrap_err();
        assert!(err.to_string().contains("terminated by a signal"));
    }
}
