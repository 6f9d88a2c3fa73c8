mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use colored::*;
use pavidi_shell::config::load_config;
use pavidi_shell::{ShellContext, run_command_line};
use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let cwd = match &cli.dir {
        Some(dir) => fs::canonicalize(dir).with_context(|| format!("Cannot enter {}", dir.display()))?,
        None => std::env::current_dir().context("Cannot determine the working directory")?,
    };
    let config = load_config(cli.config.as_deref(), &cwd)?;
    let ctx = ShellContext::with_cwd(cwd).with_config(config);

    match cli.command {
        Some(line) => run_once(&line, &ctx),
        None => run_loop(&ctx),
    }
}

fn run_once(line: &str, ctx: &ShellContext) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    let result = run_command_line(line, ctx, Some(&mut input), &mut out);
    out.flush()?;
    if let Err(e) = result {
        eprintln!("{} {}", "pas:".red().bold(), e);
        std::process::exit(1);
    }
    Ok(())
}

// One command per input line. Applications get no stdin here since the
// lines themselves come from it.
fn run_loop(ctx: &ShellContext) -> Result<()> {
    let interactive = io::stdin().is_terminal();
    let mut out = io::stdout().lock();

    let prompt = |out: &mut dyn Write| -> io::Result<()> {
        if interactive && !ctx.config.shell.prompt.is_empty() {
            write!(out, "{}", ctx.config.shell.prompt.cyan())?;
            out.flush()?;
        }
        Ok(())
    };

    prompt(&mut out)?;
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read command line")?;
        if let Err(e) = run_command_line(&line, ctx, None, &mut out) {
            out.flush()?;
            eprintln!("{} {}", "pas:".red().bold(), e);
        }
        prompt(&mut out)?;
    }
    Ok(())
}
