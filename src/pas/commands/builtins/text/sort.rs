// Sort command

use crate::pas::commands::Application;
use crate::pas::commands::builtins::common::{read_source, require_stdout};
use crate::pas::context::ShellContext;
use anyhow::{Result, bail};
use std::io::{Read, Write};

pub struct SortCommand;
impl Application for SortCommand {
    fn run(
        &self,
        args: &[String],
        stdin: Option<&mut dyn Read>,
        stdout: Option<&mut dyn Write>,
        ctx: &ShellContext,
    ) -> Result<()> {
        let out = require_stdout(stdout)?;

        let mut numeric = false;
        let mut file = None;
        for arg in args {
            if arg == "-n" {
                numeric = true;
            } else if arg.starts_with('-') {
                bail!("Unknown option: {}", arg);
            } else if file.is_some() {
                bail!("Only one file can be sorted at a time");
            } else {
                file = Some(arg.as_str());
            }
        }

        let content = read_source(ctx, file, stdin)?;
        let mut lines: Vec<&str> = content.lines().collect();
        if numeric {
            lines.sort_by(|a, b| numeric_key(a).total_cmp(&numeric_key(b)).then_with(|| a.cmp(b)));
        } else {
            lines.sort();
        }

        for line in lines {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

// Leading number of the line; lines without one sort as zero.
fn numeric_key(line: &str) -> f64 {
    let line = line.trim_start();
    let end = line
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && c == '-')))
        .map_or(line.len(), |(i, _)| i);
    line[..end].parse().unwrap_or(0.0)
}
