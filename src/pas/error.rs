use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort the evaluation of a command line.
///
/// The `Display` text of the first six variants is stable and meant to be
/// matched by scripts and tests.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Invalid syntax encountered.")]
    Syntax,

    #[error("Invalid app.")]
    InvalidApp(String),

    #[error("Input redirection file same as output redirection file.")]
    SameRedirection,

    #[error("Ambigious globbing for IO Redirection.")]
    AmbiguousGlob,

    #[error("File not found.")]
    GlobNoMatch,

    #[error("File output redirection and pipe operator cannot be used side by side.")]
    RedirectionWithPipe,

    #[error("Cannot open redirection file '{path}': {source}")]
    Redirection {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Cannot read directory '{}' while globbing: {source}", dir.display())]
    GlobWalk {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    // Raised by an application; `reason` carries its own context chain.
    #[error("{app}: {reason:#}")]
    Application { app: String, reason: anyhow::Error },
}

