use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("var", TokenKind::Var);
        map.insert("const", TokenKind::Const);
        map.insert("class", TokenKind::Class);
        map.insert("struct", TokenKind::Struct);
        map.insert("type", TokenKind::Type);
        map.insert("new", TokenKind::New);
        map.insert("import", TokenKind::Import);
        map.insert("from", TokenKind::From);
        map.insert("fn", TokenKind::Fn);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("elif", TokenKind::Elif);
        map.insert("auto", TokenKind::Auto);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("kindof", TokenKind::Kindof);
        map.insert("export", TokenKind::Export);
        map.insert("in", TokenKind::In);

        // Type annotations
        map.insert("str", TokenKind::StrType);
        map.insert("int", TokenKind::IntType);
        map.insert("boolean", TokenKind::BoolType);
        map.insert("list", TokenKind::ListType);
        map.insert("dict", TokenKind::DictType);
        map.insert("rune", TokenKind::RuneType);
        map.insert("func", TokenKind::FuncType);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Rune,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Arrow,      // =>

    Equals,    // ==
    NotEquals, // ~=
    Less,
    Greater,
    LessEquals,
    GreaterEquals,

    Dot,
    DotDot,
    Semicolon,
    Colon,
    Question,
    Comma,

    Not, // ~
    And,
    Or,
    Xor, // ~|
    ShiftLeft,
    ShiftRight,

    PlusPlus,
    MinusMinus,
    PlusEquals,
    MinusEquals,

    Plus,
    Dash,
    Slash,
    DoubleSlash,
    Star,
    Power,   // ^
    Sqrt,    // @
    Percent, // %
    Modulo,  // $

    // Reserved
    Var,
    Const,
    Class,
    Struct,
    Type,
    New,
    Import,
    From,
    Fn,
    If,
    Else,
    Elif,
    Auto,
    While,
    For,
    Kindof,
    Export,
    In,

    // Type annotations
    StrType,
    IntType,
    BoolType,
    ListType,
    DictType,
    RuneType,
    FuncType,
}

impl TokenKind {
    /// Human readable name, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EOF => "end of file",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Rune => "rune",
            TokenKind::Identifier => "identifier",
            TokenKind::OpenBracket => "open_bracket",
            TokenKind::CloseBracket => "close_bracket",
            TokenKind::OpenCurly => "open_curly",
            TokenKind::CloseCurly => "close_curly",
            TokenKind::OpenParen => "open_paren",
            TokenKind::CloseParen => "close_paren",
            TokenKind::Assignment => "assign",
            TokenKind::Arrow => "arrow",
            TokenKind::Equals => "equal",
            TokenKind::NotEquals => "not_equal",
            TokenKind::Less => "less",
            TokenKind::Greater => "greater",
            TokenKind::LessEquals => "less_equal",
            TokenKind::GreaterEquals => "greater_equal",
            TokenKind::Dot => "dot",
            TokenKind::DotDot => "dot_dot",
            TokenKind::Semicolon => "semi_colon",
            TokenKind::Colon => "colon",
            TokenKind::Question => "question",
            TokenKind::Comma => "comma",
            TokenKind::Not => "not",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Xor => "xor",
            TokenKind::ShiftLeft => "shift_left",
            TokenKind::ShiftRight => "shift_right",
            TokenKind::PlusPlus => "plus_plus",
            TokenKind::MinusMinus => "minus_minus",
            TokenKind::PlusEquals => "plus_equal",
            TokenKind::MinusEquals => "minus_equal",
            TokenKind::Plus => "plus",
            TokenKind::Dash => "minus",
            TokenKind::Slash => "slash",
            TokenKind::DoubleSlash => "integer_slash",
            TokenKind::Star => "star",
            TokenKind::Power => "power",
            TokenKind::Sqrt => "square_root",
            TokenKind::Percent => "percent",
            TokenKind::Modulo => "modulo",
            TokenKind::StrType
            | TokenKind::IntType
            | TokenKind::BoolType
            | TokenKind::ListType
            | TokenKind::DictType
            | TokenKind::RuneType
            | TokenKind::FuncType => "type_annotation",
            _ => "keyword",
        }
    }

    /// The fixed lexeme of a punctuation, operator or reserved kind.
    ///
    /// Literal kinds and EOF have no fixed text and return `None`.
    pub fn symbol(&self) -> Option<&'static str> {
        let symbol = match self {
            TokenKind::EOF
            | TokenKind::Number
            | TokenKind::String
            | TokenKind::Rune
            | TokenKind::Identifier => return None,
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Assignment => "=",
            TokenKind::Arrow => "=>",
            TokenKind::Equals => "==",
            TokenKind::NotEquals => "~=",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::LessEquals => "<=",
            TokenKind::GreaterEquals => ">=",
            TokenKind::Dot => ".",
            TokenKind::DotDot => "..",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Question => "?",
            TokenKind::Comma => ",",
            TokenKind::Not => "~",
            TokenKind::And => "&&",
            TokenKind::Or => "||",
            TokenKind::Xor => "~|",
            TokenKind::ShiftLeft => "<<",
            TokenKind::ShiftRight => ">>",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::PlusEquals => "+=",
            TokenKind::MinusEquals => "-=",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Slash => "/",
            TokenKind::DoubleSlash => "//",
            TokenKind::Star => "*",
            TokenKind::Power => "^",
            TokenKind::Sqrt => "@",
            TokenKind::Percent => "%",
            TokenKind::Modulo => "$",
            reserved => {
                return RESERVED_LOOKUP
                    .iter()
                    .find(|(_, kind)| *kind == reserved)
                    .map(|(word, _)| *word)
            }
        };

        Some(symbol)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Short form used in trace logs: literal kinds show their text.
    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Rune,
            TokenKind::Identifier,
            TokenKind::Number,
        ]) {
            format!("{} ({})", self.kind, self.value)
        } else {
            format!("{} ()", self.kind)
        }
    }
}
