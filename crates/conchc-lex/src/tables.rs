//! The three compile-time lookup tables the lexer probes against: keywords
//! (including primitive type names), `@builtin` names, and operators.
//!
//! Each table is a `&'static` array sorted ascending by key and searched
//! with [`slice::binary_search_by_key`] rather than a hash map — there are a
//! few dozen entries in each, small enough that a sorted array beats the
//! constant overhead of hashing, and the table never mutates after startup.

use crate::token::TokenType;

/// Identifier text, sorted ascending. Covers both statement/expression
/// keywords and primitive type names, since the lexer looks both up the same
/// way: read an identifier, then see if its text names a keyword.
static KEYWORDS: &[(&str, TokenType)] = &[
    ("_", TokenType::Underscore),
    ("and", TokenType::And),
    ("as", TokenType::As),
    ("bool", TokenType::BoolKw),
    ("break", TokenType::Break),
    ("byte", TokenType::ByteKw),
    ("comptime", TokenType::Comptime),
    ("const", TokenType::Const),
    ("continue", TokenType::Continue),
    ("do", TokenType::Do),
    ("else", TokenType::Else),
    ("enum", TokenType::Enum),
    ("export", TokenType::Export),
    ("extern", TokenType::Extern),
    ("false", TokenType::False),
    ("float", TokenType::FloatKw),
    ("fn", TokenType::Fn),
    ("for", TokenType::For),
    ("if", TokenType::If),
    ("import", TokenType::Import),
    ("in", TokenType::In),
    ("int", TokenType::IntKw),
    ("is", TokenType::Is),
    ("isize", TokenType::IsizeKw),
    ("long", TokenType::LongKw),
    ("loop", TokenType::Loop),
    ("match", TokenType::Match),
    ("mut", TokenType::Mut),
    ("noreturn", TokenType::Noreturn),
    ("or", TokenType::Or),
    ("orelse", TokenType::Orelse),
    ("packed", TokenType::Packed),
    ("private", TokenType::Private),
    ("ref", TokenType::Ref),
    ("return", TokenType::Return),
    ("static", TokenType::Static),
    ("string", TokenType::StringKw),
    ("struct", TokenType::Struct),
    ("true", TokenType::True),
    ("type", TokenType::Type),
    ("uint", TokenType::UintKw),
    ("ulong", TokenType::UlongKw),
    ("usize", TokenType::UsizeKw),
    ("var", TokenType::Var),
    ("void", TokenType::VoidKw),
    ("volatile", TokenType::Volatile),
    ("while", TokenType::While),
];

/// `@builtin` names, sorted ascending, without the leading `@`.
static BUILTINS: &[(&str, TokenType)] = &[
    ("alignOf", TokenType::AtAlignOf),
    ("cast", TokenType::AtCast),
    ("ceil", TokenType::AtCeil),
    ("clz", TokenType::AtClz),
    ("cos", TokenType::AtCos),
    ("ctz", TokenType::AtCtz),
    ("divmod", TokenType::AtDivmod),
    ("exp", TokenType::AtExp),
    ("exp2", TokenType::AtExp2),
    ("floor", TokenType::AtFloor),
    ("log", TokenType::AtLog),
    ("log10", TokenType::AtLog10),
    ("log2", TokenType::AtLog2),
    ("max", TokenType::AtMax),
    ("min", TokenType::AtMin),
    ("mod", TokenType::AtMod),
    ("sin", TokenType::AtSin),
    ("sizeOf", TokenType::AtSizeOf),
    ("sqrt", TokenType::AtSqrt),
    ("tan", TokenType::AtTan),
    ("trunc", TokenType::AtTrunc),
    ("typeOf", TokenType::AtTypeOf),
];

/// The longest operator text in [`OPERATORS`]. The lexer probes for an
/// operator by trying candidate slices of this length, then shorter, until
/// one matches (longest-match tokenization).
pub const MAX_OPERATOR_LEN: usize = 3;

/// Operator and punctuation text, sorted ascending (plain byte-wise string
/// order, so shorter prefixes like `"<"` sort before the operators that
/// extend them, like `"<<"` and `"<<="`).
static OPERATORS: &[(&str, TokenType)] = &[
    ("!", TokenType::Bang),
    ("!=", TokenType::NotEq),
    ("%", TokenType::Percent),
    ("%=", TokenType::PercentAssign),
    ("&", TokenType::Ampersand),
    ("&=", TokenType::AmpAssign),
    ("(", TokenType::LParen),
    (")", TokenType::RParen),
    ("*", TokenType::Star),
    ("*=", TokenType::StarAssign),
    ("+", TokenType::Plus),
    ("+=", TokenType::PlusAssign),
    (",", TokenType::Comma),
    ("-", TokenType::Minus),
    ("-=", TokenType::MinusAssign),
    (".", TokenType::Dot),
    ("..", TokenType::DotDot),
    ("..=", TokenType::DotDotEq),
    ("/", TokenType::Slash),
    ("/=", TokenType::SlashAssign),
    (":", TokenType::Colon),
    ("::", TokenType::ColonColon),
    (":=", TokenType::Walrus),
    (";", TokenType::Semicolon),
    ("<", TokenType::Lt),
    ("<<", TokenType::Shl),
    ("<<=", TokenType::ShlAssign),
    ("<=", TokenType::LtEq),
    ("=", TokenType::Assign),
    ("==", TokenType::EqEq),
    ("=>", TokenType::FatArrow),
    (">", TokenType::Gt),
    (">=", TokenType::GtEq),
    (">>", TokenType::Shr),
    (">>=", TokenType::ShrAssign),
    ("[", TokenType::LBracket),
    ("]", TokenType::RBracket),
    ("^", TokenType::Caret),
    ("^=", TokenType::CaretAssign),
    ("{", TokenType::LBrace),
    ("|", TokenType::Pipe),
    ("|=", TokenType::PipeAssign),
    ("}", TokenType::RBrace),
    ("~", TokenType::Tilde),
];

/// Exact-match lookup: does `text` name a keyword or primitive type?
pub fn lookup_keyword(text: &str) -> Option<TokenType> {
    KEYWORDS
        .binary_search_by_key(&text, |&(key, _)| key)
        .ok()
        .map(|idx| KEYWORDS[idx].1)
}

/// Exact-match lookup: does `name` (without the leading `@`) name a builtin?
pub fn lookup_builtin(name: &str) -> Option<TokenType> {
    BUILTINS
        .binary_search_by_key(&name, |&(key, _)| key)
        .ok()
        .map(|idx| BUILTINS[idx].1)
}

/// Longest-match lookup over `bytes`: try the first `MAX_OPERATOR_LEN` bytes
/// as an operator, then fewer, until one is recognized. Returns the matched
/// token type and how many bytes it consumed.
pub fn lookup_operator(bytes: &[u8]) -> Option<(TokenType, usize)> {
    let max = MAX_OPERATOR_LEN.min(bytes.len());
    for len in (1..=max).rev() {
        let candidate = match std::str::from_utf8(&bytes[..len]) {
            Ok(s) => s,
            Err(_) => continue,
        };
        if let Ok(idx) = OPERATORS.binary_search_by_key(&candidate, |&(key, _)| key) {
            return Some((OPERATORS[idx].1, len));
        }
    }
    None
}
