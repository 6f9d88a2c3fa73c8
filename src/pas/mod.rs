pub mod ast;
pub mod commands;
pub mod context;
pub mod error;
pub mod executor;
pub mod expansion;
pub mod lexer;
pub mod parser;
pub mod quoting;
pub mod redirect;
pub mod substitution;
pub mod wildcard;

use context::ShellContext;
use error::ShellError;
use std::io::{Read, Write};


/// Evaluates one full command line.
///
/// The whole line is parsed first, so a syntax or redirection error anywhere
/// means nothing runs. Segments separated by `;` then run in order against
/// the same streams, each one's back-quoted commands just before it; the
/// first error stops the line and is returned as is.
pub fn run_command_line(
    line: &str,
    ctx: &ShellContext,
    stdin: Option<&mut dyn Read>,
    stdout: &mut dyn Write,
) -> Result<(), ShellError> {
    let mut stdin = stdin;
    for expr in parser::parse_line(line, ctx)? {
        let pipeline = expansion::expand_pipeline(&expr, ctx)?;
        executor::execute_pipeline(&pipeline, ctx, executor::reborrow(&mut stdin), &mut *stdout)?;
    }
    Ok(())
}
