use crate::pas::ast::ArgPart;
use crate::pas::context::ShellContext;
use crate::pas::error::ShellError;
use crate::pas::run_command_line;

/// Splits token text into plain runs and back-quoted commands.
///
/// `text` must hold balanced back-quotes, which the tokenizer guarantees.
/// Spans pair left to right. Plain runs become `Literal` parts inside double
/// quotes and `Pattern` parts otherwise.
pub fn split_spans(text: &str, quoted: bool) -> Vec<ArgPart> {
    text.split('`')
        .enumerate()
        .filter_map(|(idx, piece)| {
            if idx % 2 == 1 {
                Some(ArgPart::Substitution {
                    command: piece.to_string(),
                    quoted,
                })
            } else if piece.is_empty() {
                None
            } else if quoted {
                Some(ArgPart::Literal(piece.to_string()))
            } else {
                Some(ArgPart::Pattern(piece.to_string()))
            }
        })
        .collect()
}

/// Runs `command` as a full command line with no input and returns its
/// output as one line.
///
/// One trailing line terminator is dropped and the remaining ones become
/// spaces. The text is data: callers never parse it again.
pub fn capture(command: &str, ctx: &ShellContext) -> Result<String, ShellError> {
    log::debug!("substituting `{}`", command);
    let mut output = Vec::new();
    run_command_line(command, ctx, None, &mut output)?;

    let captured = match String::from_utf8(output) {
        Ok(text) => text,
        Err(e) => {
            log::debug!("output of `{}` is not UTF-8, invalid bytes replaced", command);
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    let trimmed = captured
        .strip_suffix("\r\n")
        .or_else(|| captured.strip_suffix('\n'))
        .unwrap_or(&captured);
    Ok(trimmed.replace("\r\n", " ").replace('\n', " "))
}
