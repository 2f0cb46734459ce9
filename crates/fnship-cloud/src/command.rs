#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("`{program}` CLI not found — is it installed and on PATH?")]
    NotFound {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} command failed: {args:?}\n{stderr}")]
    CommandFailed {
        program: String,
        args: Vec<String>,
        stderr: String,
    },

    #[error("{program} output was not valid UTF-8")]
    InvalidUtf8 {
        program: String,
        source: std::string::FromUtf8Error,
    },

    #[error("failed to write to {program} stdin")]
    StdinWrite {
        program: String,
        source: std::io::Error,
    },
}

impl CommandError {
    /// Whether a failed command reported the given marker on stderr.
    /// Used to tell "not found" apart from real failures.
    pub fn stderr_contains(&self, marker: &str) -> bool {
        matches!(self, CommandError::CommandFailed { stderr, .. } if stderr.contains(marker))
    }
}
