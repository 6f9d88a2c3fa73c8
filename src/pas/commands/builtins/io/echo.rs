// Echo command

use crate::pas::commands::Application;
use crate::pas::commands::builtins::common::require_stdout;
use crate::pas::context::ShellContext;
use anyhow::Result;
use std::io::{Read, Write};

pub struct EchoCommand;

impl Application for EchoCommand {
    fn run(
        &self,
        args: &[String],
        _stdin: Option<&mut dyn Read>,
        stdout: Option<&mut dyn Write>,
        _ctx: &ShellContext,
    ) -> Result<()> {
        let out = require_stdout(stdout)?;
        writeln!(out, "{}", args.join(" "))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_joins_args() {
        let ctx = ShellContext::new();
        let mut out = Vec::new();
        EchoCommand
            .run(&["a".to_string(), "b  c".to_string()], None, Some(&mut out), &ctx)
            .unwrap();
        assert_eq!(out, b"a b  c\n");
    }

    #[test]
    fn test_echo_without_stdout_fails() {
        let ctx = ShellContext::new();
        assert!(EchoCommand.run(&[], None, None, &ctx).is_err());
    }
}
