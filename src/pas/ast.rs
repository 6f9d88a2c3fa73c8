#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Short flag: "-n"
    Flag,
    // Bare word: "file.txt", "*.rs"
    Word,
    // "..." containing one or more `...` spans
    BackQuotedInDoubleQuoted,
    // "..."
    DoubleQuoted,
    // '...'
    SingleQuoted,
    // `...`
    BackQuoted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Text as written, quotes included.
    pub raw: String,
    /// Quotes stripped. Bare words and back-quoted tokens keep their
    /// back-quotes, since they may glue several spans together.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgPart {
    /// Quoted text, taken as is.
    Literal(String),
    /// Bare text; a lone bare part may hold `*` wildcards.
    Pattern(String),
    /// A back-quoted command whose output is spliced in at run time.
    /// Inside double quotes the output stays one field.
    Substitution { command: String, quoted: bool },
}

/// One argument as written, before substitution and wildcard expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg(pub Vec<ArgPart>);

/// A stage as parsed. Redirection targets are already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandExpr {
    pub words: Vec<Arg>,
    pub input_path: Option<String>,
    pub output_path: Option<String>,
}

/// Parsed stages joined by `|`, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineExpr {
    pub stages: Vec<CommandExpr>,
}

/// A stage ready to run: `app args... [< input] [> output]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedCommand {
    pub app: String,
    pub args: Vec<String>,
    pub input_path: Option<String>,
    pub output_path: Option<String>,
}

/// Stages joined by `|`, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    pub stages: Vec<ParsedCommand>,
}
