use itertools::Itertools;
use parl_parsing::lexer::{tokenize, Lexer};
use parl_parsing::{CommentMode, LexerConfig};
use parl_tokens::spanned::{Span, Spanned};
use parl_tokens::token::{Token, TokenKind};
use test_log::test;

const PROGRAM: &str = "\
let size: int = __random_int 10;
for (let i: int = 0; i < size; i = i + 1) {
\tif i >= 5 and not (i == 7) then {
\t\t__write i, 0, #ff00AA;
\t} else {
\t\t__delay 2.5 * 1.0 as int;
\t};
};
// done";

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(Token::kind).collect()
}

#[test]
fn assignment_tokens() {
    let tokens = tokenize("x = 23;").unwrap();
    assert_eq!(
        tokens,
        [
            Token::new(Span::new(0, 1), TokenKind::Identifier, "x"),
            Token::new(Span::new(1, 1), TokenKind::Whitespace, " "),
            Token::new(Span::new(2, 1), TokenKind::Equal, "="),
            Token::new(Span::new(3, 1), TokenKind::Whitespace, " "),
            Token::new(Span::new(4, 2), TokenKind::IntegerLiteral, "23"),
            Token::new(Span::new(6, 1), TokenKind::Semicolon, ";"),
        ]
    );
}

#[test]
fn longest_match() {
    for op in ["<=", ">=", "==", "!="] {
        let tokens = tokenize(op).unwrap();
        assert_eq!(tokens, [Token::new(Span::new(0, 2), TokenKind::RelationalOp, op)]);
    }
    assert_eq!(kinds(&tokenize("< =").unwrap()).len(), 3);
    assert_eq!(
        kinds(&tokenize("x==y").unwrap()),
        [TokenKind::Identifier, TokenKind::RelationalOp, TokenKind::Identifier]
    );
    assert_eq!(kinds(&tokenize("12.75").unwrap()), [TokenKind::FloatLiteral]);
    assert_eq!(kinds(&tokenize("iffy").unwrap()), [TokenKind::Identifier]);
}

#[test]
fn keyword_reclassification() {
    let cases = [
        ("if", TokenKind::Keyword),
        ("then", TokenKind::Keyword),
        ("__print", TokenKind::Keyword),
        ("int", TokenKind::TypeName),
        ("bool", TokenKind::TypeName),
        ("true", TokenKind::BooleanLiteral),
        ("false", TokenKind::BooleanLiteral),
        ("and", TokenKind::MultiplicativeOp),
        ("or", TokenKind::AdditiveOp),
        ("ints", TokenKind::Identifier),
    ];
    for (lexeme, kind) in cases {
        let tokens = tokenize(lexeme).unwrap();
        assert_eq!(kinds(&tokens), [kind], "{lexeme}");
    }
}

#[test]
fn whitespace_runs_coalesce() {
    let tokens = tokenize("a \t\n\r\n  b").unwrap();
    assert_eq!(
        kinds(&tokens),
        [TokenKind::Identifier, TokenKind::Whitespace, TokenKind::Identifier]
    );
    assert_eq!(tokens[1].lexeme(), " \t\n\r\n  ");
}

#[test]
fn lossless_scan() {
    let tokens = tokenize(PROGRAM).unwrap();
    assert_eq!(tokens.iter().map(Token::lexeme).join(""), PROGRAM);
    assert!(tokens
        .iter()
        .tuple_windows()
        .all(|(a, b)| a.span().end().offset() == b.span().offset()));
}

#[test]
fn comment_spans_rest_of_input() {
    let tokens = tokenize("// note").unwrap();
    assert_eq!(tokens, [Token::new(Span::new(0, 7), TokenKind::Comment, "// note")]);

    let tokens = tokenize("x; // note\ny;").unwrap();
    assert_eq!(tokens.last().map(Token::lexeme), Some("// note\ny;"));
}

#[test]
fn comment_until_end_of_line() {
    let config = LexerConfig::new().with_comment_mode(CommentMode::UntilEndOfLine);
    let tokens = Lexer::with_config("x; // note\ny;", &config)
        .tokenize()
        .unwrap();
    assert_eq!(
        kinds(&tokens),
        [
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::Whitespace,
            TokenKind::Comment,
            TokenKind::Whitespace,
            TokenKind::Identifier,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn lexical_error_keeps_tokens_so_far() {
    let error = tokenize("x = 1 @ 2").unwrap_err();
    assert_eq!(error.character, '@');
    assert_eq!(error.span, Span::new(6, 1));
    assert_eq!(
        kinds(&error.tokens),
        [
            TokenKind::Identifier,
            TokenKind::Whitespace,
            TokenKind::Equal,
            TokenKind::Whitespace,
            TokenKind::IntegerLiteral,
            TokenKind::Whitespace,
            TokenKind::Error,
        ]
    );
    assert_eq!(error.to_string(), "unexpected character '@' at byte 6");
}

#[test]
fn non_ascii_is_rejected() {
    let error = tokenize("é").unwrap_err();
    assert_eq!(error.span, Span::new(0, 2));
    assert_eq!(error.tokens, [Token::new(Span::new(0, 2), TokenKind::Error, "é")]);
}
