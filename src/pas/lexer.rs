use crate::pas::ast::{Token, TokenKind};
use crate::pas::error::ShellError;
use once_cell::sync::Lazy;
use regex::Regex;

// Each pattern needs whitespace in front of the token and one delimiter
// (whitespace, `<` or `>`) after it. The text is padded with a space on both
// sides, and after a match scanning resumes *on* that delimiter so it can
// lead the next token.
//
// Bare words may glue back-quoted spans to plain text (`a`cmd`b`); the spans
// may hold any character but a newline or a back-quote.
//
// Declaration order breaks ties between matches starting at the same offset.
static PATTERNS: Lazy<Vec<(TokenKind, Regex)>> = Lazy::new(|| {
    vec![
        (TokenKind::Flag, Regex::new(r"\s+(?P<raw>-[A-Za-z]*)[\s<>]").unwrap()),
        (
            TokenKind::Word,
            Regex::new(r#"\s+(?P<raw>[^\s"'`;|<>](?:[^\s"'`;|<>]|`[^\n`]*`)*)[\s<>]"#).unwrap(),
        ),
        (
            TokenKind::BackQuotedInDoubleQuoted,
            Regex::new(r#"\s+(?P<raw>"(?P<val>[^\n"`]*(?:`[^\n`]*`[^\n"`]*)+)")[\s<>]"#).unwrap(),
        ),
        (TokenKind::DoubleQuoted, Regex::new(r#"\s+(?P<raw>"(?P<val>[^\n"`]*)")[\s<>]"#).unwrap()),
        (TokenKind::SingleQuoted, Regex::new(r"\s+(?P<raw>'(?P<val>[^\n']*)')[\s<>]").unwrap()),
        (
            TokenKind::BackQuoted,
            Regex::new(r#"\s+(?P<raw>`[^\n`]*`(?:[^\s"'`;|<>]|`[^\n`]*`)*)[\s<>]"#).unwrap(),
        ),
    ]
});

/// Splits one stage's text into tokens.
///
/// Scanning stops at the end of the text or where a redirection operator
/// begins. The returned offset (into `text`) is where the redirection
/// resolver has to pick up; anything it cannot consume is a syntax error.
pub fn tokenize(text: &str) -> Result<(Vec<Token>, usize), ShellError> {
    let padded = format!(" {} ", text);
    let mut tokens = Vec::new();
    let mut pos = 0;

    loop {
        let rest = &padded[pos..];
        let trimmed = rest.trim_start();
        if trimmed.is_empty() || trimmed.starts_with(['<', '>']) {
            break;
        }

        let earliest = PATTERNS
            .iter()
            .filter_map(|(kind, re)| re.captures(rest).map(|caps| (*kind, caps)))
            .min_by_key(|(_, caps)| caps.get(0).map_or(usize::MAX, |m| m.start()));
        let Some((kind, caps)) = earliest else {
            break;
        };
        let (Some(whole), Some(raw)) = (caps.get(0), caps.name("raw")) else {
            break;
        };

        // Something between here and the match was not recognised.
        if whole.start() != 0 {
            log::debug!("unrecognised text before {:?} in {:?}", raw.as_str(), text);
            return Err(ShellError::Syntax);
        }

        let token = Token {
            kind,
            raw: raw.as_str().to_string(),
            value: caps.name("val").unwrap_or(raw).as_str().to_string(),
        };
        log::trace!("token {:?}", token);
        tokens.push(token);

        let delimiter = whole.as_str().chars().next_back().map_or(0, char::len_utf8);
        pos += whole.end() - delimiter;
    }

    let stop = pos.saturating_sub(1).min(text.len());
    Ok((tokens, stop))
}
