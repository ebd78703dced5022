//! Test helpers for behavioral specifications.
//!
//! Provides a high-level DSL for testing warden CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Create a CLI builder for warden commands.
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// High-level CLI builder for fluent test assertions.
pub struct CliBuilder {
    args: Vec<String>,
    dir: Option<PathBuf>,
    envs: Vec<(String, String)>,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            dir: None,
            envs: Vec::new(),
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set working directory
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl AsRef<str>) -> Self {
        self.envs
            .push((key.to_string(), value.as_ref().to_string()));
        self
    }

    fn spawn(self) -> Output {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin("warden"));
        cmd.args(&self.args);
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }

        // Sim overrides in the ambient environment would script every
        // child run; strip them so only explicit .env() calls apply.
        cmd.env_remove("WARDEN_SIM_FAIL");
        cmd.env_remove("WARDEN_SIM_ITEMS");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        cmd.output().expect("warden binary should run")
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        let run = RunAssert {
            output: self.spawn(),
        };
        assert!(
            run.output.status.success(),
            "exit code {:?} from a run that should pass\n{}",
            run.output.status.code(),
            run.dump()
        );
        run
    }

    /// Run and expect failure (non-zero exit code)
    pub fn fails(self) -> RunAssert {
        let run = RunAssert {
            output: self.spawn(),
        };
        assert!(
            !run.output.status.success(),
            "run passed but a failure was expected\n{}",
            run.dump()
        );
        run
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    fn dump(&self) -> String {
        format!("stdout:\n{}\nstderr:\n{}", self.stdout(), self.stderr())
    }

    /// Assert stdout contains substring.
    pub fn stdout_has(self, needle: &str) -> Self {
        let haystack = self.stdout();
        assert!(
            haystack.contains(needle),
            "'{needle}' missing from stdout\n{}",
            self.dump()
        );
        self
    }

    /// Assert stdout does not contain substring.
    pub fn stdout_lacks(self, needle: &str) -> Self {
        let haystack = self.stdout();
        assert!(
            !haystack.contains(needle),
            "'{needle}' unexpectedly present in stdout\n{}",
            self.dump()
        );
        self
    }

    /// Assert stderr contains substring.
    pub fn stderr_has(self, needle: &str) -> Self {
        let haystack = self.stderr();
        assert!(
            haystack.contains(needle),
            "'{needle}' missing from stderr\n{}",
            self.dump()
        );
        self
    }

    /// Assert stderr does not contain substring.
    pub fn stderr_lacks(self, needle: &str) -> Self {
        let haystack = self.stderr();
        assert!(
            !haystack.contains(needle),
            "'{needle}' unexpectedly present in stderr\n{}",
            self.dump()
        );
        self
    }
}

// =============================================================================
// Workbench
// =============================================================================

/// Temporary directory holding a bot config, a log directory, and a
/// directory-backed document store for one spec.
pub struct Workbench {
    dir: tempfile::TempDir,
}

impl Workbench {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file at the given path (parent directories created
    /// automatically) and return its absolute path.
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Create a directory tree under the workbench root.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.path().join(rel);
        std::fs::create_dir_all(&path).unwrap();
        path
    }

    /// Write a standard bot config and return its path.
    ///
    /// `extra` is appended verbatim, letting specs flip feature toggles.
    pub fn config(&self, bot_name: &str, extra: &str) -> PathBuf {
        self.file(
            "bot.toml",
            &format!(
                r#"
bot_name = "{bot_name}"
developer = "dev"
sector = "ops"
stakeholder = "ops"
recurrence = "daily"
folder_prefix = "09"
store_root = "store"
log_dir = "{logs}"
{extra}
"#,
                logs = self.path().join("logs").display(),
            ),
        )
    }

    /// Names of entries in a directory under the workbench, sorted.
    pub fn entries(&self, rel: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.path().join(rel))
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// A warden invocation rooted at this workbench.
    pub fn warden(&self) -> CliBuilder {
        cli().pwd(self.path())
    }
}
