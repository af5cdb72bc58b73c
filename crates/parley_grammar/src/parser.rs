//! Parser for the pattern language.
//!
//! Converts a stream of pattern tokens into a [`GrammarNode`] tree. The
//! parser is a plain recursive descent over the surface described in the
//! crate docs: whitespace sequencing, `(a|b)` alternation, `[x]` optional
//! groups, `{a b}` all-of groups, `+`/`*` wildcards, `#` numeric slots and
//! `<name:...>` capturing entities.

use parley_foundation::{Error, Result};

use crate::lexer::{PatternLexer, PatternToken, PatternTokenKind};
use crate::tree::{DEFAULT_MAX_SKIP, GrammarNode};

/// Parser for pattern strings.
pub struct PatternParser<'src> {
    /// The lexer providing tokens.
    lexer: PatternLexer<'src>,
    /// Current token (lookahead).
    current: PatternToken,
}

impl<'src> PatternParser<'src> {
    /// Creates a new parser for the given pattern.
    #[must_use]
    pub fn new(pattern: &'src str) -> Self {
        let mut lexer = PatternLexer::new(pattern);
        let current = lexer.next_token();
        Self { lexer, current }
    }

    /// Parses the whole pattern into a grammar tree.
    ///
    /// The returned root is always a [`GrammarNode::Sequence`].
    ///
    /// # Errors
    /// Returns a pattern error if the pattern is empty or malformed.
    pub fn parse(&mut self) -> Result<GrammarNode> {
        let children = self.parse_sequence()?;
        if children.is_empty() {
            return Err(Error::pattern("empty pattern", self.current.column));
        }
        if self.current.kind != PatternTokenKind::Eof {
            return Err(Error::pattern(
                format!("unexpected {}", describe(&self.current.kind)),
                self.current.column,
            ));
        }
        Ok(GrammarNode::Sequence(children))
    }

    /// Parses elements until a closing delimiter, `|`, or end of pattern.
    fn parse_sequence(&mut self) -> Result<Vec<GrammarNode>> {
        let mut children = Vec::new();
        loop {
            match &self.current.kind {
                PatternTokenKind::Eof
                | PatternTokenKind::RParen
                | PatternTokenKind::RBracket
                | PatternTokenKind::RBrace
                | PatternTokenKind::RAngle
                | PatternTokenKind::Pipe => break,
                _ => children.push(self.parse_element()?),
            }
        }
        Ok(children)
    }

    /// Parses a single pattern element.
    fn parse_element(&mut self) -> Result<GrammarNode> {
        let column = self.current.column;
        match self.current.kind.clone() {
            PatternTokenKind::Word(text) => {
                self.advance();
                Ok(GrammarNode::Word(text))
            }
            PatternTokenKind::Plus => {
                self.advance();
                Ok(GrammarNode::short_wildcard(DEFAULT_MAX_SKIP))
            }
            PatternTokenKind::Star => {
                self.advance();
                Ok(GrammarNode::LongWildcard)
            }
            PatternTokenKind::Hash => {
                self.advance();
                Ok(GrammarNode::Number { slot: None })
            }
            PatternTokenKind::LParen => {
                self.advance();
                let node = self.parse_alternation()?;
                self.expect(&PatternTokenKind::RParen)?;
                Ok(node)
            }
            PatternTokenKind::LBracket => {
                self.advance();
                let children = self.parse_sequence()?;
                if children.is_empty() {
                    return Err(Error::pattern("empty optional group", column));
                }
                self.expect(&PatternTokenKind::RBracket)?;
                Ok(GrammarNode::Optional(children))
            }
            PatternTokenKind::LBrace => {
                self.advance();
                let children = self.parse_sequence()?;
                if children.is_empty() {
                    return Err(Error::pattern("empty all-of group", column));
                }
                self.expect(&PatternTokenKind::RBrace)?;
                Ok(GrammarNode::AllOf(children))
            }
            PatternTokenKind::LAngle => {
                self.advance();
                self.parse_capture(column)
            }
            kind => Err(Error::pattern(
                format!("unexpected {}", describe(&kind)),
                column,
            )),
        }
    }

    /// Parses the inside of `<name:...>` after the opening angle.
    ///
    /// `<name:#>` is a named numeric slot; any other body becomes a
    /// capturing entity wrapping the sub-pattern.
    fn parse_capture(&mut self, open_column: usize) -> Result<GrammarNode> {
        let name = match self.current.kind.clone() {
            PatternTokenKind::Word(name) => {
                self.advance();
                name
            }
            _ => {
                return Err(Error::pattern(
                    "expected capture name after '<'",
                    self.current.column,
                ));
            }
        };
        self.expect(&PatternTokenKind::Colon)?;

        let children = self.parse_sequence()?;
        if children.is_empty() {
            return Err(Error::pattern(
                format!("empty body for capture '{name}'"),
                open_column,
            ));
        }
        self.expect(&PatternTokenKind::RAngle)?;

        // <name:#> captures the number itself rather than a text span.
        if let [GrammarNode::Number { slot: None }] = children.as_slice() {
            return Ok(GrammarNode::Number { slot: Some(name) });
        }
        Ok(GrammarNode::Entity { name, children })
    }

    /// Parses `|`-separated alternatives inside parentheses.
    fn parse_alternation(&mut self) -> Result<GrammarNode> {
        let mut alternatives = Vec::new();
        loop {
            let column = self.current.column;
            let mut children = self.parse_sequence()?;
            match children.len() {
                0 => return Err(Error::pattern("empty alternative", column)),
                1 => alternatives.extend(children.pop()),
                _ => alternatives.push(GrammarNode::Sequence(children)),
            }
            if self.current.kind == PatternTokenKind::Pipe {
                self.advance();
            } else {
                break;
            }
        }
        Ok(GrammarNode::OneOf(alternatives))
    }

    /// Consumes the current token, failing if it is not the expected kind.
    fn expect(&mut self, expected: &PatternTokenKind) -> Result<()> {
        if &self.current.kind == expected {
            self.advance();
            Ok(())
        } else {
            Err(Error::pattern(
                format!(
                    "expected {}, found {}",
                    describe(expected),
                    describe(&self.current.kind)
                ),
                self.current.column,
            ))
        }
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }
}

/// Parses a pattern string into an uncompiled grammar tree.
///
/// # Errors
/// Returns a pattern error if the pattern is empty or malformed.
pub fn parse(pattern: &str) -> Result<GrammarNode> {
    PatternParser::new(pattern).parse()
}

/// Human-readable description of a token kind for error messages.
fn describe(kind: &PatternTokenKind) -> String {
    match kind {
        PatternTokenKind::LParen => "'('".to_string(),
        PatternTokenKind::RParen => "')'".to_string(),
        PatternTokenKind::LBracket => "'['".to_string(),
        PatternTokenKind::RBracket => "']'".to_string(),
        PatternTokenKind::LBrace => "'{'".to_string(),
        PatternTokenKind::RBrace => "'}'".to_string(),
        PatternTokenKind::LAngle => "'<'".to_string(),
        PatternTokenKind::RAngle => "'>'".to_string(),
        PatternTokenKind::Pipe => "'|'".to_string(),
        PatternTokenKind::Colon => "':'".to_string(),
        PatternTokenKind::Plus => "'+'".to_string(),
        PatternTokenKind::Star => "'*'".to_string(),
        PatternTokenKind::Hash => "'#'".to_string(),
        PatternTokenKind::Word(w) => format!("word '{w}'"),
        PatternTokenKind::Eof => "end of pattern".to_string(),
    }
}
