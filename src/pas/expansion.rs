use crate::pas::ast::{Arg, ArgPart, CommandExpr, ParsedCommand, Pipeline, PipelineExpr};
use crate::pas::context::ShellContext;
use crate::pas::error::ShellError;
use crate::pas::substitution::capture;

/// Expands every stage of `expr`, running its back-quoted commands left to
/// right. Nothing in the pipeline itself runs until all stages expanded.
pub fn expand_pipeline(expr: &PipelineExpr, ctx: &ShellContext) -> Result<Pipeline, ShellError> {
    let stages = expr
        .stages
        .iter()
        .map(|stage| expand_command(stage, ctx))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Pipeline { stages })
}

pub fn expand_command(expr: &CommandExpr, ctx: &ShellContext) -> Result<ParsedCommand, ShellError> {
    let mut words = Vec::with_capacity(expr.words.len());
    for arg in &expr.words {
        words.extend(expand_arg(arg, ctx)?);
    }

    let mut words = words.into_iter();
    // Every word may vanish when it was a lone substitution with no output.
    let app = words.next().unwrap_or_default();
    Ok(ParsedCommand {
        app,
        args: words.collect(),
        input_path: expr.input_path.clone(),
        output_path: expr.output_path.clone(),
    })
}

/// Turns one written argument into zero or more final arguments.
///
/// Bare substitution output is split on whitespace; quoted output stays in
/// its field. Only a lone bare word is matched against the filesystem, so
/// text coming out of a command is never globbed or parsed.
pub fn expand_arg(arg: &Arg, ctx: &ShellContext) -> Result<Vec<String>, ShellError> {
    if let [ArgPart::Pattern(text)] = arg.0.as_slice() {
        if text.contains('*') {
            return ctx.globber().expand_argument(text);
        }
        return Ok(vec![text.clone()]);
    }

    let mut fields = Vec::new();
    let mut current: Option<String> = None;
    for part in &arg.0 {
        match part {
            ArgPart::Literal(text) | ArgPart::Pattern(text) => {
                current.get_or_insert_with(String::new).push_str(text);
            }
            ArgPart::Substitution { command, quoted: true } => {
                let output = capture(command, ctx)?;
                current.get_or_insert_with(String::new).push_str(&output);
            }
            ArgPart::Substitution { command, quoted: false } => {
                let output = capture(command, ctx)?;
                split_fields(&output, &mut current, &mut fields);
            }
        }
    }
    fields.extend(current);
    Ok(fields)
}

// Glues the first piece to the field in progress and leaves the last one open
// for whatever follows. Surrounding whitespace closes the open field.
fn split_fields(output: &str, current: &mut Option<String>, fields: &mut Vec<String>) {
    if output.starts_with(char::is_whitespace) {
        fields.extend(current.take());
    }
    let mut pieces = output.split_whitespace().peekable();
    while let Some(piece) = pieces.next() {
        current.get_or_insert_with(String::new).push_str(piece);
        if pieces.peek().is_some() {
            fields.extend(current.take());
        }
    }
    if output.ends_with(char::is_whitespace) {
        fields.extend(current.take());
    }
}
