//! Lexer configuration

/// Where a `//` comment ends
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CommentMode {
    /// The comment state consumes every remaining character of the input
    #[default]
    UntilEndOfInput,
    /// The comment stops before the next newline
    UntilEndOfLine,
}

/// Configuration used to build a [`TransitionTable`](super::dfa::TransitionTable)
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LexerConfig {
    comment_mode: CommentMode,
}

impl LexerConfig {
    /// Creates the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how comments end
    pub fn with_comment_mode(mut self, comment_mode: CommentMode) -> Self {
        self.comment_mode = comment_mode;
        self
    }

    pub fn comment_mode(&self) -> CommentMode {
        self.comment_mode
    }
}
