//! The transition table driving the lexer.
//!
//! The automaton is a dense `state × category` matrix. A missing edge is stored as `None`, so a
//! scan that falls off the table can never land back in a valid state. Each accepting state has a
//! [Resolver] turning the final lexeme into a [TokenKind].

use crate::lexer::category::Category;
use crate::lexer::config::{CommentMode, LexerConfig};
use parl_tokens::token::TokenKind;
use parl_tokens::vocabulary::{
    AdditiveOperator, Keyword, MultiplicativeOperator, PrimitiveType, FALSE, TRUE,
};
use std::str::FromStr;
use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// A state of the automaton
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum State {
    Start,
    Identifier,
    Underscore,
    DoubleUnderscore,
    Builtin,
    Integer,
    Fraction,
    Float,
    Hash,
    Colour1,
    Colour2,
    Colour3,
    Colour4,
    Colour5,
    Colour6,
    Whitespace,
    Slash,
    Comment,
    Plus,
    Minus,
    Star,
    Less,
    Greater,
    Equals,
    Bang,
    /// a two character relational operator
    Comparison,
    LCurly,
    RCurly,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Colon,
    Semicolon,
    Comma,
}

impl State {
    /// The row of this state in a transition table
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// `#` followed by exactly six hex digits
const COLOUR_CHAIN: [State; 7] = [
    State::Hash,
    State::Colour1,
    State::Colour2,
    State::Colour3,
    State::Colour4,
    State::Colour5,
    State::Colour6,
];

/// Assigns the token kind once a scan halts in an accepting state
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Resolver {
    /// Always the same kind
    Fixed(TokenKind),
    /// Reclassifies identifier shaped lexemes found in the vocabulary
    Word,
}

impl Resolver {
    pub fn resolve(&self, lexeme: &str) -> TokenKind {
        match self {
            Resolver::Fixed(kind) => *kind,
            Resolver::Word => resolve_word(lexeme),
        }
    }
}

fn resolve_word(lexeme: &str) -> TokenKind {
    if lexeme == TRUE || lexeme == FALSE {
        TokenKind::BooleanLiteral
    } else if Keyword::from_str(lexeme).is_ok() {
        TokenKind::Keyword
    } else if PrimitiveType::from_str(lexeme).is_ok() {
        TokenKind::TypeName
    } else if MultiplicativeOperator::from_str(lexeme).is_ok() {
        TokenKind::MultiplicativeOp
    } else if AdditiveOperator::from_str(lexeme).is_ok() {
        TokenKind::AdditiveOp
    } else {
        TokenKind::Identifier
    }
}

type Row = [Option<State>; Category::COUNT];

/// The transition function and accepting states of the lexer's automaton
#[derive(Debug, Clone)]
pub struct TransitionTable {
    transitions: Vec<Row>,
    resolvers: Vec<Option<Resolver>>,
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::new(&LexerConfig::default())
    }
}

impl TransitionTable {
    /// Builds the table for a configuration
    pub fn new(config: &LexerConfig) -> Self {
        let mut table = Self {
            transitions: vec![[None; Category::COUNT]; State::COUNT],
            resolvers: vec![None; State::COUNT],
        };
        let word = |category: &Category| {
            category.is_letter() || matches!(category, Category::Digit | Category::Underscore)
        };

        // identifiers, keywords and word operators
        table.edges(State::Start, Category::iter().filter(|c| c.is_letter()), State::Identifier);
        table.edges(State::Identifier, Category::iter().filter(word), State::Identifier);
        table.accept(State::Identifier, Resolver::Word);

        // double underscore built ins
        table.edge(State::Start, Category::Underscore, State::Underscore);
        table.edge(State::Underscore, Category::Underscore, State::DoubleUnderscore);
        table.edges(
            State::DoubleUnderscore,
            Category::iter().filter(|c| c.is_letter()),
            State::Builtin,
        );
        table.edges(State::Builtin, Category::iter().filter(word), State::Builtin);
        table.accept(State::Builtin, Resolver::Word);

        // numbers
        table.edge(State::Start, Category::Digit, State::Integer);
        table.edge(State::Integer, Category::Digit, State::Integer);
        table.edge(State::Integer, Category::Fullstop, State::Fraction);
        table.edge(State::Fraction, Category::Digit, State::Float);
        table.edge(State::Float, Category::Digit, State::Float);
        table.accept(State::Integer, Resolver::Fixed(TokenKind::IntegerLiteral));
        table.accept(State::Float, Resolver::Fixed(TokenKind::FloatLiteral));

        // colours
        table.edge(State::Start, Category::Hash, State::Hash);
        for pair in COLOUR_CHAIN.windows(2) {
            table.edges(pair[0], [Category::Digit, Category::HexLetter], pair[1]);
        }
        table.accept(State::Colour6, Resolver::Fixed(TokenKind::ColourLiteral));

        let whitespace = [Category::Whitespace, Category::Newline];
        table.edges(State::Start, whitespace, State::Whitespace);
        table.edges(State::Whitespace, whitespace, State::Whitespace);
        table.accept(State::Whitespace, Resolver::Fixed(TokenKind::Whitespace));

        // `/` or a line comment, which takes any character after `//`
        table.edge(State::Start, Category::Slash, State::Slash);
        table.accept(State::Slash, Resolver::Fixed(TokenKind::MultiplicativeOp));
        table.edge(State::Slash, Category::Slash, State::Comment);
        let comment_mode = config.comment_mode();
        table.edges(
            State::Comment,
            Category::iter().filter(|&c| {
                c != Category::Newline || comment_mode == CommentMode::UntilEndOfInput
            }),
            State::Comment,
        );
        table.accept(State::Comment, Resolver::Fixed(TokenKind::Comment));

        // operators
        for (category, state, kind) in [
            (Category::Plus, State::Plus, TokenKind::AdditiveOp),
            (Category::Minus, State::Minus, TokenKind::AdditiveOp),
            (Category::Star, State::Star, TokenKind::MultiplicativeOp),
            (Category::Lt, State::Less, TokenKind::RelationalOp),
            (Category::Gt, State::Greater, TokenKind::RelationalOp),
            (Category::Equals, State::Equals, TokenKind::Equal),
        ] {
            table.edge(State::Start, category, state);
            table.accept(state, Resolver::Fixed(kind));
        }
        table.edge(State::Start, Category::Bang, State::Bang);
        for state in [State::Less, State::Greater, State::Equals, State::Bang] {
            table.edge(state, Category::Equals, State::Comparison);
        }
        table.accept(State::Comparison, Resolver::Fixed(TokenKind::RelationalOp));

        // punctuation
        for (category, state, kind) in [
            (Category::LCurly, State::LCurly, TokenKind::LCurly),
            (Category::RCurly, State::RCurly, TokenKind::RCurly),
            (Category::LParen, State::LParen, TokenKind::LParen),
            (Category::RParen, State::RParen, TokenKind::RParen),
            (Category::LBracket, State::LBracket, TokenKind::LBracket),
            (Category::RBracket, State::RBracket, TokenKind::RBracket),
            (Category::Colon, State::Colon, TokenKind::Colon),
            (Category::Semicolon, State::Semicolon, TokenKind::Semicolon),
            (Category::Comma, State::Comma, TokenKind::Comma),
        ] {
            table.edge(State::Start, category, state);
            table.accept(state, Resolver::Fixed(kind));
        }

        table
    }

    /// The state every scan starts in
    pub const fn start(&self) -> State {
        State::Start
    }

    /// Follows the edge out of `state` on `category`, if there is one
    pub fn next(&self, state: State, category: Category) -> Option<State> {
        self.transitions[state.index()][category.index()]
    }

    /// Gets the resolver of an accepting state, or `None` if `state` is not accepting
    pub fn resolver(&self, state: State) -> Option<Resolver> {
        self.resolvers[state.index()]
    }

    pub fn is_accepting(&self, state: State) -> bool {
        self.resolver(state).is_some()
    }

    fn edge(&mut self, from: State, category: Category, to: State) {
        self.transitions[from.index()][category.index()] = Some(to);
    }

    fn edges(&mut self, from: State, categories: impl IntoIterator<Item = Category>, to: State) {
        for category in categories {
            self.edge(from, category, to);
        }
    }

    fn accept(&mut self, state: State, resolver: Resolver) {
        self.resolvers[state.index()] = Some(resolver);
    }
}
