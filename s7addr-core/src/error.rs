use std::result::Result as StdResult;
use thiserror::Error as ThisError;

/// Unified result type for the fallible parsing helpers
pub type Result<T> = StdResult<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Area token is not one of `DB`, `I`, `Q`, `M`, `C`, `T`
    #[error("unknown memory area: {0}")]
    UnknownArea(String),

    /// Neither a known softdatatype name nor a numeric code
    #[error("unknown softdatatype: {0}")]
    UnknownDatatype(String),

    /// Access-area code is not a decimal or `0x`-prefixed hex `u32`
    #[error("invalid access area code: {0}")]
    InvalidAccessArea(String),
}
