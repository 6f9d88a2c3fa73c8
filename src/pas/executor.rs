use crate::pas::ast::{ParsedCommand, Pipeline};
use crate::pas::context::ShellContext;
use crate::pas::error::ShellError;
use std::fs::{File, OpenOptions};
use std::io::{Cursor, Read, Write};

/// Runs the stages of `pipeline` one after another.
///
/// Each stage's output is buffered in full and then handed to the next
/// stage as its input. The first stage reads `stdin`, the last one writes
/// `stdout` unless they redirect to files. The first failing stage stops the
/// chain; output already written to `stdout` stays there.
pub fn execute_pipeline(
    pipeline: &Pipeline,
    ctx: &ShellContext,
    stdin: Option<&mut dyn Read>,
    stdout: &mut dyn Write,
) -> Result<(), ShellError> {
    let mut stdin = stdin;
    let mut carried: Option<Vec<u8>> = None;
    let last = pipeline.stages.len().saturating_sub(1);

    for (idx, stage) in pipeline.stages.iter().enumerate() {
        let mut buffer = Vec::new();
        let output: &mut dyn Write = if idx == last { &mut *stdout } else { &mut buffer };

        match carried.take() {
            Some(previous) => execute_stage(stage, ctx, Some(&mut Cursor::new(previous)), output)?,
            None if idx == 0 => execute_stage(stage, ctx, reborrow(&mut stdin), output)?,
            None => execute_stage(stage, ctx, None, output)?,
        }

        if idx != last {
            log::trace!("stage {} handed on {} byte(s)", stage.app, buffer.len());
            carried = Some(buffer);
        }
    }
    Ok(())
}

/// Runs one stage, opening its redirection files for the duration of the
/// call.
pub fn execute_stage(
    stage: &ParsedCommand,
    ctx: &ShellContext,
    stdin: Option<&mut dyn Read>,
    stdout: &mut dyn Write,
) -> Result<(), ShellError> {
    let app = ctx.lookup(&stage.app)?;
    log::debug!("running {} {:?}", stage.app, stage.args);

    let mut input_file = stage
        .input_path
        .as_deref()
        .map(|path| open_input(ctx, path))
        .transpose()?;
    let mut output_file = stage
        .output_path
        .as_deref()
        .map(|path| open_output(ctx, path))
        .transpose()?;

    let mut stdin = stdin;
    let input: Option<&mut dyn Read> = match input_file.as_mut() {
        Some(file) => Some(file),
        None => reborrow(&mut stdin),
    };
    let output: &mut dyn Write = match output_file.as_mut() {
        Some(file) => file,
        None => stdout,
    };

    let app_error = |reason: anyhow::Error| ShellError::Application {
        app: stage.app.clone(),
        reason,
    };
    app.run(&stage.args, input, Some(&mut *output), ctx)
        .map_err(app_error)?;
    output.flush().map_err(|e| app_error(e.into()))
}

/// Shortens the borrow of a caller's reader so it can stand in for a
/// stage-local one.
pub(crate) fn reborrow<'s>(reader: &'s mut Option<&mut dyn Read>) -> Option<&'s mut dyn Read> {
    match reader {
        Some(r) => Some(&mut **r),
        None => None,
    }
}

fn open_input(ctx: &ShellContext, path: &str) -> Result<File, ShellError> {
    File::open(ctx.resolve_path(path)).map_err(|source| ShellError::Redirection {
        path: path.to_string(),
        source,
    })
}

fn open_output(ctx: &ShellContext, path: &str) -> Result<File, ShellError> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(ctx.resolve_path(path))
        .map_err(|source| ShellError::Redirection {
            path: path.to_string(),
            source,
        })
}
