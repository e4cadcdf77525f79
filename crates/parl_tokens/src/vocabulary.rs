//! The fixed words and operators of the language.
//!
//! Lexemes are mapped onto these with [`FromStr`](std::str::FromStr), which is derived by strum,
//! so every table here is closed and checked at compile time.

use strum::{Display, EnumString};

/// Reserved words, including the double-underscore built-ins
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString)]
pub enum Keyword {
    #[strum(serialize = "if")]
    If,
    #[strum(serialize = "else")]
    Else,
    #[strum(serialize = "while")]
    While,
    #[strum(serialize = "for")]
    For,
    #[strum(serialize = "return")]
    Return,
    #[strum(serialize = "let")]
    Let,
    #[strum(serialize = "as")]
    As,
    #[strum(serialize = "then")]
    Then,
    #[strum(serialize = "do")]
    Do,
    #[strum(serialize = "not")]
    Not,
    #[strum(serialize = "__print")]
    Print,
    #[strum(serialize = "__delay")]
    Delay,
    #[strum(serialize = "__write")]
    Write,
    #[strum(serialize = "__write_box")]
    WriteBox,
    #[strum(serialize = "__width")]
    Width,
    #[strum(serialize = "__height")]
    Height,
    #[strum(serialize = "__read")]
    Read,
    #[strum(serialize = "__random_int")]
    RandomInt,
}

/// The primitive type names
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PrimitiveType {
    Int,
    Float,
    Bool,
    Colour,
}

/// Operators of the additive precedence class
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString)]
pub enum AdditiveOperator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "or")]
    Or,
}

/// Operators of the multiplicative precedence class
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString)]
pub enum MultiplicativeOperator {
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
    #[strum(serialize = "and")]
    And,
}

/// Operators of the relational precedence class
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString)]
pub enum RelationalOperator {
    #[strum(serialize = "<")]
    Lt,
    #[strum(serialize = ">")]
    Gt,
    #[strum(serialize = "<=")]
    Lte,
    #[strum(serialize = ">=")]
    Gte,
    #[strum(serialize = "==")]
    Eq,
    #[strum(serialize = "!=")]
    Neq,
}

pub const TRUE: &str = "true";
pub const FALSE: &str = "false";

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use test_log::test;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(Keyword::from_str("while"), Ok(Keyword::While));
        assert_eq!(Keyword::from_str("__random_int"), Ok(Keyword::RandomInt));
        assert!(Keyword::from_str("While").is_err());
        assert!(Keyword::from_str("print").is_err());
    }

    #[test]
    fn test_operator_display_matches_lexeme() {
        assert_eq!(RelationalOperator::Lte.to_string(), "<=");
        assert_eq!(AdditiveOperator::from_str("or"), Ok(AdditiveOperator::Or));
        assert_eq!(MultiplicativeOperator::And.to_string(), "and");
        assert_eq!(PrimitiveType::from_str("colour"), Ok(PrimitiveType::Colour));
    }
}
