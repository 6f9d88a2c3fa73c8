use crate::pas::error::ShellError;
use crate::pas::wildcard::GlobExpander;

/// Input and output files declared at the tail of a stage.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Redirections {
    pub input: Option<String>,
    pub output: Option<String>,
}

/// Consumes the text left over by the tokenizer.
///
/// Accepts `[< target] [> target]` and nothing else: each operator at most
/// once, input before output, targets unquoted. Wildcard targets must name
/// exactly one existing path.
pub fn resolve_redirections(rest: &str, globber: &GlobExpander) -> Result<Redirections, ShellError> {
    let mut redirs = Redirections::default();
    let mut rest = rest;

    loop {
        let text = rest.trim_start();
        let Some(op) = text.chars().next() else {
            break;
        };
        let slot = match op {
            '<' if redirs.input.is_none() && redirs.output.is_none() => &mut redirs.input,
            '>' if redirs.output.is_none() => &mut redirs.output,
            _ => return Err(ShellError::Syntax),
        };

        let body = text[1..].trim_start();
        let end = body.find(ends_target).unwrap_or(body.len());
        let target = &body[..end];
        if target.is_empty() {
            return Err(ShellError::Syntax);
        }

        let resolved = if target.contains('*') {
            globber.expand_redirection(target)?
        } else {
            target.to_string()
        };
        log::debug!("redirect {} {:?}", op, resolved);
        *slot = Some(resolved);
        rest = &body[end..];
    }

    if let (Some(input), Some(output)) = (&redirs.input, &redirs.output) {
        if input == output {
            return Err(ShellError::SameRedirection);
        }
    }
    Ok(redirs)
}

fn ends_target(c: char) -> bool {
    c.is_whitespace() || matches!(c, '"' | '\'' | '`' | '<' | '>' | ';' | '|')
}
