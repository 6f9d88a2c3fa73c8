use crate::pas::error::ShellError;
use glob::{MatchOptions, Pattern};
use std::fs;
use std::io;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Resolves `*` wildcards against the filesystem.
///
/// Patterns are split at the last separator before the first `*`: the text
/// on the left names the directory to walk, the text on the right is matched
/// against paths relative to it. A `*` never crosses a separator, so
/// `src/*/mod.rs` walks two levels below `src`.
pub struct GlobExpander<'a> {
    cwd: &'a Path,
    include_hidden: bool,
}

impl<'a> GlobExpander<'a> {
    pub fn new(cwd: &'a Path, include_hidden: bool) -> Self {
        Self { cwd, include_hidden }
    }

    /// Every path matching `pattern`, in walk order. A pattern with no
    /// wildcard is returned unchanged, whether or not it exists.
    pub fn matches(&self, pattern: &str) -> Result<Vec<String>, ShellError> {
        let Some(star) = pattern.find('*') else {
            return Ok(vec![pattern.to_string()]);
        };

        let split = pattern[..star].rfind(is_separator);
        let (prefix, rel_pattern) = match split {
            Some(idx) => (&pattern[..=idx], &pattern[idx + 1..]),
            None => ("", pattern),
        };
        let root = match split {
            Some(0) => self.cwd.join(&pattern[..1]),
            Some(idx) => self.cwd.join(&pattern[..idx]),
            None => self.cwd.to_path_buf(),
        };

        let compiled = Pattern::new(&escape_literals(rel_pattern)).map_err(|e| {
            log::debug!("rejected glob pattern {:?}: {}", pattern, e);
            ShellError::Syntax
        })?;
        let depth = rel_pattern.split(is_separator).count();

        let mut found = Vec::new();
        self.walk(&root, &root, &compiled, depth, &mut found)?;

        let matches: Vec<String> = found
            .iter()
            .map(|rel| format!("{}{}", prefix, rel.to_string_lossy()))
            .collect();
        log::trace!("glob {:?} matched {:?}", pattern, matches);
        Ok(matches)
    }

    /// Argument policy: no match keeps the pattern text as the only result.
    pub fn expand_argument(&self, pattern: &str) -> Result<Vec<String>, ShellError> {
        let matches = self.matches(pattern)?;
        if matches.is_empty() {
            Ok(vec![pattern.to_string()])
        } else {
            Ok(matches)
        }
    }

    /// Redirection policy: the pattern must name exactly one path.
    pub fn expand_redirection(&self, pattern: &str) -> Result<String, ShellError> {
        let mut matches = self.matches(pattern)?;
        match matches.len() {
            0 => Err(ShellError::GlobNoMatch),
            1 => Ok(matches.remove(0)),
            _ => Err(ShellError::AmbiguousGlob),
        }
    }

    fn walk(
        &self,
        root: &Path,
        dir: &Path,
        pattern: &Pattern,
        depth: usize,
        found: &mut Vec<PathBuf>,
    ) -> Result<(), ShellError> {
        let walk_err = |source: io::Error| ShellError::GlobWalk {
            dir: dir.to_path_buf(),
            source,
        };

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            // Nothing below a missing directory, or below a plain file, can match.
            Err(e)
                if dir == root
                    && matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) =>
            {
                return Ok(());
            }
            Err(e) => return Err(walk_err(e)),
        };
        let mut entries = entries.collect::<Result<Vec<_>, _>>().map_err(walk_err)?;
        entries.sort_by_key(|entry| entry.file_name());

        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: !self.include_hidden,
        };

        for entry in entries {
            let path = entry.path();
            let rel = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
            if pattern.matches_path_with(&rel, options) {
                found.push(rel);
            }
            if depth > 1 && entry.file_type().map_err(walk_err)?.is_dir() {
                self.walk(root, &path, pattern, depth - 1, found)?;
            }
        }
        Ok(())
    }
}

fn is_separator(c: char) -> bool {
    c == '/' || c == MAIN_SEPARATOR
}

// Only `*` is special; everything else must match literally.
fn escape_literals(pattern: &str) -> String {
    pattern
        .split('*')
        .map(Pattern::escape)
        .collect::<Vec<_>>()
        .join("*")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn fixture() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("b.txt")).unwrap();
        File::create(dir.path().join("a.txt")).unwrap();
        File::create(dir.path().join("notes.md")).unwrap();
        File::create(dir.path().join(".hidden.txt")).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        File::create(dir.path().join("sub").join("c.txt")).unwrap();
        File::create(dir.path().join("sub").join("[x].txt")).unwrap();
        dir
    }

    #[test]
    fn test_no_wildcard_is_unchanged() {
        let dir = fixture();
        let globber = GlobExpander::new(dir.path(), false);
        assert_eq!(globber.matches("missing?.txt").unwrap(), vec!["missing?.txt"]);
        assert_eq!(globber.matches("sub/c.txt").unwrap(), vec!["sub/c.txt"]);
    }

    #[test]
    fn test_single_level_sorted() {
        let dir = fixture();
        let globber = GlobExpander::new(dir.path(), false);
        assert_eq!(globber.matches("*.txt").unwrap(), vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_hidden_files_opt_in() {
        let dir = fixture();
        let globber = GlobExpander::new(dir.path(), true);
        assert_eq!(
            globber.matches("*.txt").unwrap(),
            vec![".hidden.txt", "a.txt", "b.txt"]
        );
    }

    #[test]
    fn test_prefix_and_multi_level() {
        let dir = fixture();
        let globber = GlobExpander::new(dir.path(), false);
        assert_eq!(globber.matches("sub/*.txt").unwrap(), vec!["sub/[x].txt", "sub/c.txt"]);
        assert_eq!(globber.matches("*/c.txt").unwrap(), vec!["sub/c.txt"]);
        assert_eq!(globber.matches("sub/[x]*").unwrap(), vec!["sub/[x].txt"]);
    }

    #[test]
    fn test_argument_keeps_literal() {
        let dir = fixture();
        let globber = GlobExpander::new(dir.path(), false);
        assert_eq!(globber.expand_argument("*.nomatch").unwrap(), vec!["*.nomatch"]);
        assert_eq!(globber.expand_argument("nodir/*.txt").unwrap(), vec!["nodir/*.txt"]);
    }

    #[test]
    fn test_file_as_parent_matches_nothing() {
        let dir = fixture();
        let globber = GlobExpander::new(dir.path(), false);
        assert_eq!(globber.matches("a.txt/*").unwrap(), Vec::<String>::new());
        assert_eq!(globber.expand_argument("a.txt/*").unwrap(), vec!["a.txt/*"]);
        assert!(matches!(globber.expand_redirection("a.txt/*"), Err(ShellError::GlobNoMatch)));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_is_walk_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir = fixture();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        // Privileged users can list it anyway.
        let readable = fs::read_dir(&locked).is_ok();

        let result = GlobExpander::new(dir.path(), false).matches("*/x");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if readable {
            return;
        }
        assert!(
            matches!(result, Err(ShellError::GlobWalk { ref dir, .. }) if dir.ends_with("locked"))
        );
    }

    #[test]
    fn test_redirection_requires_one_match() {
        let dir = fixture();
        let globber = GlobExpander::new(dir.path(), false);
        assert_eq!(globber.expand_redirection("*.md").unwrap(), "notes.md");
        assert!(matches!(globber.expand_redirection("*.txt"), Err(ShellError::AmbiguousGlob)));
        assert!(matches!(globber.expand_redirection("*.csv"), Err(ShellError::GlobNoMatch)));
    }
}
