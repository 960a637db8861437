use thiserror::Error;

/// Errors raised on the build/lookup side of the engine.
///
/// Stream decoding never raises: malformed input degrades to a best-effort
/// rendering plus a diagnostic flag so the classifier keeps moving through a
/// live byte stream. Only callers constructing outgoing commands can hand us
/// something unusable.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Configuration item name not present in the registry.
    #[error("unknown configuration item `{0}`")]
    UnknownConfigItem(String),

    /// A value whose shape cannot be encoded for the item's declared type,
    /// e.g. a boolean handed to a numeric item.
    #[error("configuration item `{item}` expects a {expected} value")]
    ValueType {
        item: String,
        expected: &'static str,
    },

    /// Textual value that does not parse as the item's declared type.
    #[error("cannot parse `{value}` as a {expected} value for `{item}`")]
    InvalidValue {
        item: String,
        value: String,
        expected: &'static str,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
