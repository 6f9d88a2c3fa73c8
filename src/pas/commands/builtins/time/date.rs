// Date command

use crate::pas::commands::Application;
use crate::pas::commands::builtins::common::require_stdout;
use crate::pas::context::ShellContext;
use anyhow::{Result, bail};
use chrono::Local;
use std::io::{Read, Write};

// Local time carries no zone name, only its offset from UTC.
const DATE_FORMAT: &str = "%a %b %d %H:%M:%S %:z %Y";

/// Prints the current local date and time.
pub struct DateCommand;
impl Application for DateCommand {
    fn run(
        &self,
        args: &[String],
        _stdin: Option<&mut dyn Read>,
        stdout: Option<&mut dyn Write>,
        _ctx: &ShellContext,
    ) -> Result<()> {
        if !args.is_empty() {
            bail!("No arguments expected");
        }
        let out = require_stdout(stdout)?;
        writeln!(out, "{}", Local::now().format(DATE_FORMAT))?;
        Ok(())
    }
}
