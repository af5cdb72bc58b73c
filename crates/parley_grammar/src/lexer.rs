//! Lexer for the pattern language.
//!
//! Converts a pattern string like `set [a] timer for <n:#>` into a stream of
//! tokens for the recursive descent parser. Patterns are single-line, so
//! positions are tracked as 1-based columns only.

/// A token from pattern lexical analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternToken {
    /// The type and value of this token.
    pub kind: PatternTokenKind,
    /// 1-based column where this token starts.
    pub column: usize,
}

impl PatternToken {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: PatternTokenKind, column: usize) -> Self {
        Self { kind, column }
    }
}

/// Token types for the pattern language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternTokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `<`
    LAngle,
    /// `>`
    RAngle,
    /// `|`
    Pipe,
    /// `:`
    Colon,
    /// `+` bounded wildcard
    Plus,
    /// `*` unbounded wildcard
    Star,
    /// `#` numeric slot
    Hash,
    /// A literal word
    Word(String),
    /// End of pattern
    Eof,
}

/// Lexer for pattern strings.
pub struct PatternLexer<'src> {
    /// Remaining pattern text.
    rest: &'src str,
    /// Current 1-based column.
    column: usize,
}

impl<'src> PatternLexer<'src> {
    /// Creates a new lexer for the given pattern.
    #[must_use]
    pub const fn new(pattern: &'src str) -> Self {
        Self {
            rest: pattern,
            column: 1,
        }
    }

    /// Returns the next token from the pattern.
    pub fn next_token(&mut self) -> PatternToken {
        self.skip_whitespace();

        let column = self.column;
        let Some(c) = self.peek_char() else {
            return PatternToken::new(PatternTokenKind::Eof, column);
        };

        let kind = match c {
            '(' => {
                self.advance();
                PatternTokenKind::LParen
            }
            ')' => {
                self.advance();
                PatternTokenKind::RParen
            }
            '[' => {
                self.advance();
                PatternTokenKind::LBracket
            }
            ']' => {
                self.advance();
                PatternTokenKind::RBracket
            }
            '{' => {
                self.advance();
                PatternTokenKind::LBrace
            }
            '}' => {
                self.advance();
                PatternTokenKind::RBrace
            }
            '<' => {
                self.advance();
                PatternTokenKind::LAngle
            }
            '>' => {
                self.advance();
                PatternTokenKind::RAngle
            }
            '|' => {
                self.advance();
                PatternTokenKind::Pipe
            }
            ':' => {
                self.advance();
                PatternTokenKind::Colon
            }
            '+' => {
                self.advance();
                PatternTokenKind::Plus
            }
            '*' => {
                self.advance();
                PatternTokenKind::Star
            }
            '#' => {
                self.advance();
                PatternTokenKind::Hash
            }
            _ => PatternTokenKind::Word(self.scan_word()),
        };

        PatternToken::new(kind, column)
    }

    /// Tokenizes an entire pattern.
    #[must_use]
    pub fn tokenize_all(pattern: &str) -> Vec<PatternToken> {
        let mut lexer = PatternLexer::new(pattern);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == PatternTokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.rest = &self.rest[c.len_utf8()..];
            self.column += 1;
        }
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Scans a literal word up to the next delimiter or whitespace.
    fn scan_word(&mut self) -> String {
        let mut word = String::new();
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() || is_delimiter(c) {
                break;
            }
            word.push(c);
            self.advance();
        }
        word
    }
}

/// Returns true if `c` is a pattern-language delimiter.
const fn is_delimiter(c: char) -> bool {
    matches!(
        c,
        '(' | ')' | '[' | ']' | '{' | '}' | '<' | '>' | '|' | ':' | '+' | '*' | '#'
    )
}
