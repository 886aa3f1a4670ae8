use std::path::PathBuf;
use std::process::Command;

use lexis_types::{LookupQuery, RawLookupOutput};

/// Source of raw dictionary output
pub trait LookupBackend: Send + Sync {
    /// Run one lookup; blocks until the answer is available
    fn invoke(&self, query: &LookupQuery) -> Result<RawLookupOutput, InvocationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum InvocationError {
    #[error("Failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with status {code}: {stderr}")]
    UnexpectedExit {
        tool: String,
        code: i32,
        stderr: String,
    },

    #[error("{tool} was terminated by a signal")]
    Terminated { tool: String },
}

/// Runs `<tool> -d <dictionary> <term>` through the local `dict` client
#[derive(Debug, Clone)]
pub struct DictCommand {
    tool_path: PathBuf,
    not_found_exit_code: i32,
}

impl DictCommand {
    pub fn new(tool_path: impl Into<PathBuf>, not_found_exit_code: i32) -> Self {
        Self {
            tool_path: tool_path.into(),
            not_found_exit_code,
        }
    }

    pub fn from_config(config: &lexis_config::dictionary::DictionaryConfig) -> Self {
        Self::new(&config.tool_path, config.not_found_exit_code)
    }

    fn tool_name(&self) -> String {
        self.tool_path.display().to_string()
    }
}

impl LookupBackend for DictCommand {
    fn invoke(&self, query: &LookupQuery) -> Result<RawLookupOutput, InvocationError> {
        tracing::debug!(
            "Running {} -d {} {}",
            self.tool_path.display(),
            query.dictionary_id,
            query.term
        );

        let output = Command::new(&self.tool_path)
            .arg("-d")
            .arg(&query.dictionary_id)
            .arg(&query.term)
            .output()
            .map_err(|source| InvocationError::Spawn {
                tool: self.tool_name(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        match output.status.code() {
            Some(0) => Ok(RawLookupOutput::definitions(stdout)),
            Some(code) if code == self.not_found_exit_code => {
                Ok(RawLookupOutput::not_found(stderr))
            }
            Some(code) => Err(InvocationError::UnexpectedExit {
                tool: self.tool_name(),
                code,
                stderr: stderr.trim().to_string(),
            }),
            None => Err(InvocationError::Terminated {
                tool: self.tool_name(),
            }),
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::sync::LazyLock;

    use tempfile::TempDir;

    use super::*;

    /// Fake `dict` that exits with the status named by the term
    ///
    /// Written once so no test forks while another still holds the file open.
    static FAKE_TOOL: LazyLock<(TempDir, PathBuf)> = LazyLock::new(|| {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fake-dict");
        let script = r#"#!/bin/sh
case "$3" in
  found) printf '1 definition found\n\nFrom %s:\n\n%s: ok\n' "$2" "$3"; exit 0 ;;
  missing) printf 'No definitions found for "%s", perhaps you mean:\nmist  misting' "$3" >&2; exit 21 ;;
  *) echo "server unreachable" >&2; exit 30 ;;
esac
"#;
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        (dir, path)
    });

    fn fake_backend() -> DictCommand {
        DictCommand::new(&FAKE_TOOL.1, 21)
    }

    #[test]
    fn success_wraps_stdout() {
        let backend = fake_backend();

        let raw = backend.invoke(&LookupQuery::new("found", "wn")).unwrap();
        assert!(!raw.was_not_found_signal);
        assert_eq!(raw.text, "1 definition found\n\nFrom wn:\n\nfound: ok\n");
    }

    #[test]
    fn not_found_status_wraps_stderr() {
        let backend = fake_backend();

        let raw = backend.invoke(&LookupQuery::new("missing", "wn")).unwrap();
        assert!(raw.was_not_found_signal);
        assert!(raw.text.starts_with("No definitions found for \"missing\""));
    }

    #[test]
    fn other_status_is_an_error() {
        let backend = fake_backend();

        match backend.invoke(&LookupQuery::new("boom", "wn")) {
            Err(InvocationError::UnexpectedExit { code, stderr, .. }) => {
                assert_eq!(code, 30);
                assert_eq!(stderr, "server unreachable");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn missing_tool_is_a_spawn_error() {
        let dir = TempDir::new().unwrap();
        let backend = DictCommand::new(dir.path().join("no-such-dict"), 21);

        assert!(matches!(
            backend.invoke(&LookupQuery::new("cat", "wn")),
            Err(InvocationError::Spawn { .. })
        ));
    }
}
