//! The closed set of errors the parser can raise.
//!
//! Every variant corresponds to exactly one diagnosable situation; none of
//! them carry data, since the "what went wrong, specifically" detail lives
//! in the freeform message attached to the surrounding
//! [`conchc_util::Diagnostic`], not in the error kind itself. The kind is
//! what a caller pattern-matches on; the message is what a human reads.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParserError {
    #[error("UNEXPECTED_TOKEN")]
    UnexpectedToken,
    #[error("END_OF_TOKEN_STREAM")]
    EndOfTokenStream,
    #[error("MISSING_PREFIX_PARSER")]
    MissingPrefixParser,
    #[error("INFIX_MISSING_RHS")]
    InfixMissingRhs,
    #[error("ILLEGAL_IDENTIFIER")]
    IllegalIdentifier,

    #[error("CONST_DECL_MISSING_VALUE")]
    ConstDeclMissingValue,
    #[error("FORWARD_VAR_DECL_MISSING_TYPE")]
    ForwardVarDeclMissingType,
    #[error("DUPLICATE_DECL_MODIFIER")]
    DuplicateDeclModifier,
    #[error("ILLEGAL_DECL_MODIFIERS")]
    IllegalDeclModifiers,
    #[error("EXTERN_VALUE_INITIALIZED")]
    ExternValueInitialized,
    #[error("EXTERN_MISSING_TYPE")]
    ExternMissingType,

    #[error("ILLEGAL_IMPORT")]
    IllegalImport,
    #[error("USER_IMPORT_MISSING_ALIAS")]
    UserImportMissingAlias,

    #[error("INTEGER_OVERFLOW")]
    IntegerOverflow,
    #[error("MALFORMED_INTEGER")]
    MalformedInteger,
    #[error("FLOAT_OVERFLOW")]
    FloatOverflow,
    #[error("MALFORMED_FLOAT")]
    MalformedFloat,
    #[error("UNKNOWN_CHARACTER_ESCAPE")]
    UnknownCharacterEscape,
    #[error("MALFORMED_CHARACTER")]
    MalformedCharacter,
    #[error("MALFORMED_STRING")]
    MalformedString,

    #[error("PREFIX_MISSING_OPERAND")]
    PrefixMissingOperand,
    #[error("INDEX_MISSING_EXPRESSION")]
    IndexMissingExpression,

    #[error("EMPTY_LOOP")]
    EmptyLoop,
    #[error("WHILE_MISSING_CONDITION")]
    WhileMissingCondition,
    #[error("EMPTY_WHILE_LOOP")]
    EmptyWhileLoop,
    #[error("IMPROPER_WHILE_CONTINUATION")]
    ImproperWhileContinuation,
    #[error("ILLEGAL_LOOP_NON_BREAK")]
    IllegalLoopNonBreak,

    #[error("ILLEGAL_FOR_LOOP_CAPTURE")]
    IllegalForLoopCapture,
    #[error("EMPTY_FOR_LOOP")]
    EmptyForLoop,
    #[error("FOR_ITERABLE_CAPTURE_MISMATCH")]
    ForIterableCaptureMismatch,
    #[error("ILLEGAL_FOR_LOOP_DISCARD")]
    IllegalForLoopDiscard,

    #[error("ILLEGAL_IF_BRANCH")]
    IllegalIfBranch,

    #[error("MISSING_ARRAY_SIZE_TOKEN")]
    MissingArraySizeToken,
    #[error("UNEXPECTED_ARRAY_SIZE_TOKEN")]
    UnexpectedArraySizeToken,
    #[error("INCORRECT_EXPLICIT_ARRAY_SIZE")]
    IncorrectExplicitArraySize,
    #[error("EMPTY_ARRAY")]
    EmptyArray,

    #[error("MATCH_EXPR_MISSING_CONDITION")]
    MatchExprMissingCondition,
    #[error("ARMLESS_MATCH_EXPR")]
    ArmlessMatchExpr,
    #[error("ILLEGAL_MATCH_ARM")]
    IllegalMatchArm,
    #[error("ILLEGAL_MATCH_CATCH_ALL")]
    IllegalMatchCatchAll,

    #[error("INVALID_STRUCT_MEMBER")]
    InvalidStructMember,
    #[error("EMPTY_STRUCT")]
    EmptyStruct,

    #[error("ENUM_MISSING_VARIANTS")]
    EnumMissingVariants,
    #[error("MISSING_TRAILING_COMMA")]
    MissingTrailingComma,

    #[error("ILLEGAL_FUNCTION_PARAMETER_TYPE")]
    IllegalFunctionParameterType,
    #[error("ILLEGAL_FUNCTION_DEFINITION")]
    IllegalFunctionDefinition,
    #[error("EXPLICIT_FN_TYPE_HAS_BODY")]
    ExplicitFnTypeHasBody,

    #[error("ILLEGAL_TYPE_MODIFIERS")]
    IllegalTypeModifiers,
    #[error("ILLEGAL_EXPLICIT_TYPE")]
    IllegalExplicitType,
}
