//! External relocation tool invoked as a child process.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use super::{MoovRelocator, RelocateError};

/// Token replaced by the input path in configured arguments.
pub const INPUT_TOKEN: &str = "{input}";
/// Token replaced by the output path in configured arguments.
pub const OUTPUT_TOKEN: &str = "{output}";

/// Runs an external program (e.g. `qtfaststart in.mp4 out.mp4`).
#[derive(Debug, Clone)]
pub struct CommandRelocator {
    program: PathBuf,
    args: Vec<String>,
}

impl Default for CommandRelocator {
    fn default() -> Self {
        Self::new("qtfaststart", vec![INPUT_TOKEN.into(), OUTPUT_TOKEN.into()])
    }
}

impl CommandRelocator {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments with `{input}` / `{output}` substituted.
    pub fn expand_args(&self, input: &Path, output: &Path) -> Vec<String> {
        let input = input.to_string_lossy();
        let output = output.to_string_lossy();
        self.args
            .iter()
            .map(|a| a.replace(INPUT_TOKEN, &input).replace(OUTPUT_TOKEN, &output))
            .collect()
    }
}

impl MoovRelocator for CommandRelocator {
    fn process(&self, input: &Path, output: &Path) -> Result<(), RelocateError> {
        let args = self.expand_args(input, output);
        tracing::debug!(program = %self.program.display(), ?args, "spawning relocation tool");
        let out = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|source| RelocateError::Io {
                operation: "spawn relocation tool",
                path: self.program.clone(),
                source,
            })?;
        if out.status.success() {
            return Ok(());
        }
        Err(classify_failure(&out))
    }
}

/// Maps a failed tool run to an error kind by looking at its stderr.
pub fn classify_failure(out: &Output) -> RelocateError {
    let stderr = String::from_utf8_lossy(&out.stderr).trim().to_string();
    let lower = stderr.to_ascii_lowercase();
    if lower.contains("faststartsetuperror") || lower.contains("already be setup") {
        RelocateError::Setup(stderr)
    } else if lower.contains("malformedfileerror") {
        RelocateError::MalformedFile(stderr)
    } else if lower.contains("unsupportedformaterror") {
        RelocateError::UnsupportedFormat(stderr)
    } else {
        RelocateError::Tool {
            status: out.status.to_string(),
            stderr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_qtfaststart() {
        let r = CommandRelocator::default();
        assert_eq!(r.program(), Path::new("qtfaststart"));
        assert_eq!(
            r.expand_args(Path::new("/r/a.mp4"), Path::new("/r/a-fs.mp4")),
            vec!["/r/a.mp4".to_string(), "/r/a-fs.mp4".to_string()]
        );
    }

    #[test]
    fn expands_tokens_inside_arguments() {
        let r = CommandRelocator::new(
            "ffmpeg",
            ["-i", "{input}", "-movflags", "+faststart", "out={output}"]
                .map(String::from)
                .to_vec(),
        );
        let args = r.expand_args(Path::new("in.mov"), Path::new("o.mov"));
        assert_eq!(args, vec!["-i", "in.mov", "-movflags", "+faststart", "out=o.mov"]);
    }

    #[test]
    fn missing_program_is_io_error() {
        let r = CommandRelocator::new("/nonexistent/faststart-tool", vec![]);
        let err = r.process(Path::new("a"), Path::new("b")).unwrap_err();
        assert!(matches!(err, RelocateError::Io { .. }));
    }

    #[cfg(unix)]
    mod unix {
        use super::*;

        fn sh(script: &str) -> Output {
            Command::new("sh").arg("-c").arg(script).output().unwrap()
        }

        #[test]
        fn classifies_known_errors() {
            let e = classify_failure(&sh(
                "echo 'FastStartSetupError: file is already start-ready' >&2; exit 1",
            ));
            assert!(matches!(e, RelocateError::Setup(_)));
            let e = classify_failure(&sh(
                "echo 'This file appears to already be setup for streaming!' >&2; exit 1",
            ));
            assert!(matches!(e, RelocateError::Setup(_)));
            let e = classify_failure(&sh("echo 'output file already exists' >&2; exit 1"));
            assert!(matches!(e, RelocateError::Tool { .. }));
            assert!(!e.is_skip());
            let e = classify_failure(&sh("echo 'MalformedFileError: bad atom' >&2; exit 1"));
            assert!(matches!(e, RelocateError::MalformedFile(_)));
            let e = classify_failure(&sh(
                "echo 'UnsupportedFormatError: compressed moov' >&2; exit 1",
            ));
            assert!(matches!(e, RelocateError::UnsupportedFormat(_)));
        }

        #[test]
        fn unknown_failure_keeps_stderr() {
            match classify_failure(&sh("echo boom >&2; exit 3")) {
                RelocateError::Tool { stderr, .. } => assert_eq!(stderr, "boom"),
                other => panic!("unexpected {other:?}"),
            }
        }

        #[test]
        fn successful_tool_run() {
            let dir = tempfile::tempdir().unwrap();
            let input = dir.path().join("a.mp4");
            let output = dir.path().join("a-faststart.mp4");
            std::fs::write(&input, b"data").unwrap();

            let r = CommandRelocator::new(
                "sh",
                ["-c", "cp \"$0\" \"$1\"", INPUT_TOKEN, OUTPUT_TOKEN]
                    .map(String::from)
                    .to_vec(),
            );
            r.process(&input, &output).unwrap();
            assert_eq!(std::fs::read(&output).unwrap(), b"data");
        }
    }
}
