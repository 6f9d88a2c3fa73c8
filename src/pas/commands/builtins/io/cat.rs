// Cat command

use crate::pas::commands::Application;
use crate::pas::commands::builtins::common::{read_file_bytes, require_stdout};
use crate::pas::context::ShellContext;
use anyhow::{Context, Result, anyhow};
use std::io::{self, Read, Write};

pub struct CatCommand;
impl Application for CatCommand {
    fn run(
        &self,
        args: &[String],
        stdin: Option<&mut dyn Read>,
        stdout: Option<&mut dyn Write>,
        ctx: &ShellContext,
    ) -> Result<()> {
        let out = require_stdout(stdout)?;

        if args.is_empty() {
            let input = stdin.ok_or_else(|| anyhow!("No input stream to read from"))?;
            io::copy(input, out).context("Failed to copy stdin")?;
            return Ok(());
        }

        for filename in args {
            let buffer = read_file_bytes(ctx, filename)?;
            out.write_all(&buffer)?;
        }

        Ok(())
    }
}
