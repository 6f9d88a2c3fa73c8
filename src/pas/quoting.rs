use crate::pas::error::ShellError;

/// Quoting state in force at a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quoting {
    Bare,
    Single,
    Double,
    Back,
    BackInDouble,
}

/// Walks `text` and reports, for every character, the quoting state *before*
/// that character is consumed. An opening delimiter therefore reports the
/// outer state and a closing delimiter reports the quote it closes.
pub fn scan(text: &str) -> Result<Vec<(usize, char, Quoting)>, ShellError> {
    let mut state = Quoting::Bare;
    let mut marks = Vec::with_capacity(text.len());

    for (idx, c) in text.char_indices() {
        marks.push((idx, c, state));
        state = match (state, c) {
            (Quoting::Bare, '\'') => Quoting::Single,
            (Quoting::Bare, '"') => Quoting::Double,
            (Quoting::Bare, '`') => Quoting::Back,
            (Quoting::Single, '\'') => Quoting::Bare,
            (Quoting::Double, '"') => Quoting::Bare,
            (Quoting::Double, '`') => Quoting::BackInDouble,
            (Quoting::Back, '`') => Quoting::Bare,
            (Quoting::BackInDouble, '`') => Quoting::Double,
            (s, _) => s,
        };
    }

    if state != Quoting::Bare {
        log::debug!("unterminated {:?} span in {:?}", state, text);
        return Err(ShellError::Syntax);
    }
    Ok(marks)
}

/// Splits `text` at every `sep` that is not inside any quote or back-quote.
pub fn split_unquoted(text: &str, sep: char) -> Result<Vec<&str>, ShellError> {
    let mut parts = Vec::new();
    let mut start = 0;
    for (idx, c, quoting) in scan(text)? {
        if c == sep && quoting == Quoting::Bare {
            parts.push(&text[start..idx]);
            start = idx + c.len_utf8();
        }
    }
    parts.push(&text[start..]);
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_respects_quotes() {
        let parts = split_unquoted("echo 'a;b' ; echo \"c;d\" ; echo `x; y`", ';').unwrap();
        assert_eq!(parts, vec!["echo 'a;b' ", " echo \"c;d\" ", " echo `x; y`"]);
    }

    #[test]
    fn test_split_pipe() {
        let parts = split_unquoted("cat a | sort | head -n 1", '|').unwrap();
        assert_eq!(parts, vec!["cat a ", " sort ", " head -n 1"]);
    }

    #[test]
    fn test_back_quote_inside_double_quote() {
        let marks = scan("\"a`b`\"").unwrap();
        let states: Vec<Quoting> = marks.iter().map(|m| m.2).collect();
        assert_eq!(
            states,
            vec![
                Quoting::Bare,
                Quoting::Double,
                Quoting::Double,
                Quoting::BackInDouble,
                Quoting::BackInDouble,
                Quoting::Double,
            ]
        );
    }

    #[test]
    fn test_back_quote_literal_in_single_quote() {
        assert!(split_unquoted("echo '`'", ';').is_ok());
    }

    #[test]
    fn test_unterminated() {
        assert!(matches!(split_unquoted("echo `date", ';'), Err(ShellError::Syntax)));
        assert!(matches!(split_unquoted("echo \"abc", ';'), Err(ShellError::Syntax)));
        assert!(matches!(split_unquoted("echo 'abc", '|'), Err(ShellError::Syntax)));
    }
}
