//! Shared testing utilities for ebookgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Endpoint path the CLI posts to with the default model.
#[allow(dead_code)]
pub const GENERATE_PATH: &str = "/models/gemini-1.5-flash:generateContent";

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `ebookgen` binary without any credential.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("ebookgen").expect("Failed to locate ebookgen binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.root.path())
            .env_remove("GEMINI_API_KEY")
            .env_remove("EBOOKGEN_LOG");
        cmd
    }

    /// Build a command with `GEMINI_API_KEY` set in the environment.
    pub fn cli_with_key(&self, key: &str) -> Command {
        let mut cmd = self.cli();
        cmd.env("GEMINI_API_KEY", key);
        cmd
    }

    fn config_dir(&self) -> PathBuf {
        let dir = self.work_dir.join(".ebookgen");
        fs::create_dir_all(&dir).expect("Failed to create .ebookgen directory");
        dir
    }

    /// Point the generation client at a local mock server.
    pub fn use_api_url(&self, url: &str) {
        let config = format!("[generation]\napi_url = \"{}\"\ntimeout_secs = 5\n", url);
        fs::write(self.config_dir().join("config.toml"), config).expect("Failed to write config.toml");
    }

    /// Store the API key in `.ebookgen/secrets.toml`.
    pub fn write_secret(&self, key: &str) {
        fs::write(self.config_dir().join("secrets.toml"), format!("GEMINI_API_KEY = \"{}\"\n", key))
            .expect("Failed to write secrets.toml");
    }

    /// Path of a generated e-book in the working directory.
    pub fn output_file(&self, file_name: &str) -> PathBuf {
        self.work_dir.join(file_name)
    }

    /// Read a generated e-book.
    pub fn read_output(&self, file_name: &str) -> String {
        fs::read_to_string(self.output_file(file_name)).expect("Failed to read generated e-book")
    }

    /// Assert no HTML file has been written to the working directory.
    pub fn assert_no_html_written(&self) {
        let written: Vec<_> = fs::read_dir(&self.work_dir)
            .expect("Failed to read work directory")
            .filter_map(Result::ok)
            .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "html"))
            .collect();
        assert!(written.is_empty(), "unexpected HTML output: {:?}", written);
    }
}

/// Gemini-style JSON body carrying `text` as the only candidate part.
#[allow(dead_code)]
pub fn gemini_body(text: &str) -> String {
    serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": text }], "role": "model" } }]
    })
    .to_string()
}
