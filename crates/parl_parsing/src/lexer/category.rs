//! Character classification

use strum::{EnumCount, EnumIter};

/// The lexical category of a single character.
///
/// Every character maps to exactly one category. Anything the language does not use is
/// [`Other`](Category::Other), which only continues a comment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum Category {
    /// a letter that is not a hex digit
    Letter,
    /// `a-f` and `A-F`
    HexLetter,
    Digit,
    Underscore,
    /// spaces, tabs and carriage returns
    Whitespace,
    Newline,
    Fullstop,
    Hash,
    LCurly,
    RCurly,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Colon,
    Semicolon,
    Comma,
    Plus,
    Minus,
    Star,
    Slash,
    Lt,
    Gt,
    Equals,
    Bang,
    Other,
}

impl Category {
    /// Classifies a character
    pub fn of(c: char) -> Self {
        match c {
            'a'..='f' | 'A'..='F' => Category::HexLetter,
            'g'..='z' | 'G'..='Z' => Category::Letter,
            '0'..='9' => Category::Digit,
            '_' => Category::Underscore,
            ' ' | '\t' | '\r' => Category::Whitespace,
            '\n' => Category::Newline,
            '.' => Category::Fullstop,
            '#' => Category::Hash,
            '{' => Category::LCurly,
            '}' => Category::RCurly,
            '(' => Category::LParen,
            ')' => Category::RParen,
            '[' => Category::LBracket,
            ']' => Category::RBracket,
            ':' => Category::Colon,
            ';' => Category::Semicolon,
            ',' => Category::Comma,
            '+' => Category::Plus,
            '-' => Category::Minus,
            '*' => Category::Star,
            '/' => Category::Slash,
            '<' => Category::Lt,
            '>' => Category::Gt,
            '=' => Category::Equals,
            '!' => Category::Bang,
            _ => Category::Other,
        }
    }

    /// The column of this category in a transition table
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Letters, hex letters included
    pub const fn is_letter(self) -> bool {
        matches!(self, Category::Letter | Category::HexLetter)
    }
}
