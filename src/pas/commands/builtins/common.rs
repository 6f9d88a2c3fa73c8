use crate::pas::context::ShellContext;
use anyhow::{Context, Result, anyhow, bail};
use std::fs;
use std::io::{Read, Write};

pub fn require_stdout(stdout: Option<&mut dyn Write>) -> Result<&mut dyn Write> {
    stdout.ok_or_else(|| anyhow!("Cannot write to stdout as it is null"))
}

/// Reads a whole file named on the command line, or stdin when no file is
/// given.
pub fn read_source(ctx: &ShellContext, file: Option<&str>, stdin: Option<&mut dyn Read>) -> Result<String> {
    match file {
        Some(name) => read_file(ctx, name),
        None => {
            let stdin = stdin.ok_or_else(|| anyhow!("No input stream to read from"))?;
            let mut buffer = String::new();
            stdin.read_to_string(&mut buffer).context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

pub fn read_file(ctx: &ShellContext, name: &str) -> Result<String> {
    let bytes = read_file_bytes(ctx, name)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn read_file_bytes(ctx: &ShellContext, name: &str) -> Result<Vec<u8>> {
    let path = ctx.resolve_path(name);
    if path.is_dir() {
        bail!("{}: Is a directory", name);
    }
    fs::read(&path).with_context(|| format!("{}: No such file or directory", name))
}

/// Parses `[-n COUNT] [FILE]`, options first.
pub fn parse_count_args(args: &[String], default: usize) -> Result<(usize, Option<&str>)> {
    match args {
        [] => Ok((default, None)),
        [file] if !file.starts_with('-') => Ok((default, Some(file.as_str()))),
        [flag, count, rest @ ..] if flag == "-n" && rest.len() <= 1 => {
            let count = count
                .parse::<usize>()
                .with_context(|| format!("Invalid line count: {}", count))?;
            Ok((count, rest.first().map(String::as_str)))
        }
        _ => bail!("Invalid arguments: expected [-n COUNT] [FILE]"),
    }
}
