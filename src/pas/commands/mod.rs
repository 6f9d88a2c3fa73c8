pub mod builtins;

use crate::pas::context::ShellContext;
use anyhow::Result;
use std::io::{Read, Write};

/// A runnable capability, looked up by name from the context's registry.
///
/// `args` excludes the application name. `stdin` is `None` when nothing is
/// attached; `stdout` being `None` is always an error for the application.
pub trait Application: Send + Sync {
    fn run(
        &self,
        args: &[String],
        stdin: Option<&mut dyn Read>,
        stdout: Option<&mut dyn Write>,
        ctx: &ShellContext,
    ) -> Result<()>;
}
