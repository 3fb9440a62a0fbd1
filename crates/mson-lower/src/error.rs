use mson_ast::SourceMap;
use thiserror::Error;

/// Conditions that abort conversion of the enclosing data structure
/// (§7's abort-kind rows). Warnings (§6.3) do not go through this type.
#[derive(Debug, Error, PartialEq)]
pub enum LoweringError {
    #[error("primitive member given more than one value")]
    TooManyValues { source_map: SourceMap },

    #[error("variable property key is not a string or a sub-type of string")]
    BadVariableKey { source_map: SourceMap },

    #[error("unrecognized type section class '{class}'")]
    UnknownSection { class: String, source_map: SourceMap },

    #[error("unrecognized MSON element class")]
    UnknownElement { source_map: SourceMap },
}
