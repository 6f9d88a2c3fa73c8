// Head command

use crate::pas::commands::Application;
use crate::pas::commands::builtins::common::{parse_count_args, read_source, require_stdout};
use crate::pas::context::ShellContext;
use anyhow::Result;
use std::io::{Read, Write};

const DEFAULT_LINES: usize = 10;

pub struct HeadCommand;
impl Application for HeadCommand {
    fn run(
        &self,
        args: &[String],
        stdin: Option<&mut dyn Read>,
        stdout: Option<&mut dyn Write>,
        ctx: &ShellContext,
    ) -> Result<()> {
        let out = require_stdout(stdout)?;
        let (count, file) = parse_count_args(args, DEFAULT_LINES)?;
        let content = read_source(ctx, file, stdin)?;

        for line in content.split_inclusive('\n').take(count) {
            out.write_all(line.as_bytes())?;
        }
        Ok(())
    }
}
