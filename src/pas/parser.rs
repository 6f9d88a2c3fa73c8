use crate::pas::ast::{Arg, ArgPart, CommandExpr, PipelineExpr, Token, TokenKind};
use crate::pas::context::ShellContext;
use crate::pas::error::ShellError;
use crate::pas::lexer::tokenize;
use crate::pas::quoting::split_unquoted;
use crate::pas::redirect::resolve_redirections;
use crate::pas::substitution::split_spans;

/// Splits a full line at top-level `;`.
///
/// A blank line has no segments; an empty segment anywhere else is invalid.
/// Quote balance is checked over the whole line here, so an unterminated
/// quote is reported before any segment runs.
pub fn split_segments(line: &str) -> Result<Vec<&str>, ShellError> {
    if line.trim().is_empty() {
        return Ok(Vec::new());
    }
    let segments = split_unquoted(line, ';')?;
    if segments.iter().any(|s| s.trim().is_empty()) {
        return Err(ShellError::Syntax);
    }
    Ok(segments)
}

/// Parses every segment of `line` before any of them runs.
pub fn parse_line(line: &str, ctx: &ShellContext) -> Result<Vec<PipelineExpr>, ShellError> {
    split_segments(line)?
        .into_iter()
        .map(|segment| parse_pipeline(segment, ctx))
        .collect()
}

/// Parses one segment into stages. Back-quoted commands stay unevaluated.
pub fn parse_pipeline(text: &str, ctx: &ShellContext) -> Result<PipelineExpr, ShellError> {
    let parts = split_unquoted(text, '|')?;
    let mut stages = Vec::with_capacity(parts.len());
    for part in parts {
        if part.trim().is_empty() {
            return Err(ShellError::Syntax);
        }
        stages.push(parse_command(part, ctx)?);
    }

    // Only the ends of the chain may talk to files.
    let last = stages.len() - 1;
    for (idx, stage) in stages.iter().enumerate() {
        if (stage.output_path.is_some() && idx != last) || (stage.input_path.is_some() && idx != 0) {
            return Err(ShellError::RedirectionWithPipe);
        }
    }

    log::debug!("pipeline with {} stage(s): {:?}", stages.len(), stages);
    Ok(PipelineExpr { stages })
}

/// Parses a single stage: words and redirections.
pub fn parse_command(text: &str, ctx: &ShellContext) -> Result<CommandExpr, ShellError> {
    let text = text.trim();

    let (tokens, stop) = tokenize(text)?;
    let redirs = resolve_redirections(&text[stop..], &ctx.globber())?;
    if tokens.is_empty() {
        return Err(ShellError::Syntax);
    }

    Ok(CommandExpr {
        words: tokens.into_iter().map(to_arg).collect(),
        input_path: redirs.input,
        output_path: redirs.output,
    })
}

fn to_arg(token: Token) -> Arg {
    match token.kind {
        TokenKind::Word | TokenKind::BackQuoted => Arg(split_spans(&token.raw, false)),
        TokenKind::BackQuotedInDoubleQuoted => Arg(split_spans(&token.value, true)),
        // Quoted wildcards are never expanded.
        TokenKind::Flag | TokenKind::DoubleQuoted | TokenKind::SingleQuoted => {
            Arg(vec![ArgPart::Literal(token.value)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs::File;
    use tempfile::tempdir;

    fn lit(s: &str) -> Arg {
        Arg(vec![ArgPart::Literal(s.to_string())])
    }

    fn pat(s: &str) -> Arg {
        Arg(vec![ArgPart::Pattern(s.to_string())])
    }

    #[test]
    fn test_sort_with_redirections() {
        let ctx = ShellContext::new();
        let cmd = parse_command("sort -n < file1.txt > file2.txt", &ctx).unwrap();
        assert_eq!(
            cmd,
            CommandExpr {
                words: vec![pat("sort"), lit("-n")],
                input_path: Some("file1.txt".to_string()),
                output_path: Some("file2.txt".to_string()),
            }
        );
    }

    #[test]
    fn test_quoted_arguments() {
        let ctx = ShellContext::new();
        let cmd = parse_command(r#"echo "a  b" 'c' plain '*.txt'"#, &ctx).unwrap();
        assert_eq!(cmd.words, vec![pat("echo"), lit("a  b"), lit("c"), pat("plain"), lit("*.txt")]);
        assert_eq!(cmd.input_path, None);
    }

    #[test]
    fn test_back_quotes_stay_unevaluated() {
        let ctx = ShellContext::new();
        let cmd = parse_command(r#"echo `nosuchapp | x > y` "a `b`""#, &ctx).unwrap();
        assert_eq!(
            cmd.words[1],
            Arg(vec![ArgPart::Substitution {
                command: "nosuchapp | x > y".to_string(),
                quoted: false,
            }])
        );
        assert_eq!(
            cmd.words[2],
            Arg(vec![
                ArgPart::Literal("a ".to_string()),
                ArgPart::Substitution {
                    command: "b".to_string(),
                    quoted: true,
                },
            ])
        );
        assert_eq!(cmd.output_path, None);
    }

    #[test]
    fn test_glob_redirection_resolved_at_parse() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("x.txt")).unwrap();
        let ctx = ShellContext::with_cwd(dir.path());

        let cmd = parse_command("cat < *.txt", &ctx).unwrap();
        assert_eq!(cmd.input_path.as_deref(), Some("x.txt"));
        assert!(matches!(parse_command("cat < *.md", &ctx), Err(ShellError::GlobNoMatch)));
    }

    #[test]
    fn test_missing_app_is_syntax_error() {
        let ctx = ShellContext::new();
        assert!(matches!(parse_command("< in.txt", &ctx), Err(ShellError::Syntax)));
        assert!(matches!(parse_command("echo abc\"", &ctx), Err(ShellError::Syntax)));
    }

    #[test]
    fn test_pipeline_stages() {
        let ctx = ShellContext::new();
        let pipeline = parse_pipeline("cat a.txt b.txt | sort | head -n 1", &ctx).unwrap();
        assert_eq!(pipeline.stages.len(), 3);
        assert_eq!(pipeline.stages[2].words, vec![pat("head"), lit("-n"), pat("1")]);
    }

    #[test]
    fn test_pipe_inside_back_quotes() {
        let ctx = ShellContext::new();
        let pipeline = parse_pipeline("echo `cat a | sort` | head", &ctx).unwrap();
        assert_eq!(pipeline.stages.len(), 2);
    }

    #[test]
    fn test_pipeline_redirection_conflicts() {
        let ctx = ShellContext::new();
        assert!(matches!(
            parse_pipeline("echo a > out.txt | cat", &ctx),
            Err(ShellError::RedirectionWithPipe)
        ));
        assert!(matches!(
            parse_pipeline("echo a | cat < in.txt", &ctx),
            Err(ShellError::RedirectionWithPipe)
        ));
        assert!(parse_pipeline("cat < in.txt | sort > out.txt", &ctx).is_ok());
        assert!(matches!(parse_pipeline("echo a | ", &ctx), Err(ShellError::Syntax)));
    }

    #[test]
    fn test_segments() {
        assert_eq!(split_segments("  ").unwrap(), Vec::<&str>::new());
        assert_eq!(split_segments("echo a; echo 'b;c'").unwrap(), vec!["echo a", " echo 'b;c'"]);
        assert!(matches!(split_segments("echo a;; echo b"), Err(ShellError::Syntax)));
        assert!(matches!(split_segments("echo `date"), Err(ShellError::Syntax)));
    }

    #[test]
    fn test_line_parsed_as_a_whole() {
        let ctx = ShellContext::new();
        assert_eq!(parse_line("echo a ; echo b | cat", &ctx).unwrap().len(), 2);
        assert!(matches!(parse_line("echo a ; echo b\"c\"", &ctx), Err(ShellError::Syntax)));
        assert!(matches!(
            parse_line("echo a ; sort < x.txt > x.txt", &ctx),
            Err(ShellError::SameRedirection)
        ));
    }
}
