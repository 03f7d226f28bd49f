//! Errors shared by every module of the crate.
//!
//! Every variant carries the context needed to act on it (the offending key,
//! the enum it was looked up on, the value that could not be advanced) as
//! named fields rather than a preformatted message.

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Lookup of a name that is not a member of `receiver`.
    #[error("key not found: {key:?}")]
    KeyNotFound { key: String, receiver: String },

    /// Lookup of a scope-delimited name (`A::B`). Never resolved, even when
    /// something by that path exists.
    #[error("cannot use scoped enum key: {key:?}")]
    ScopedKey { key: String, receiver: String },

    /// Reverse lookup of a value that no member of `receiver` holds.
    /// `value` is the `Debug` rendering of the value searched for.
    #[error("no key found for value: {value}")]
    ValueNotFound { value: String, receiver: String },

    #[error("cannot subclass enum {parent}")]
    Inheritance { parent: String },

    /// `given` counts the key, like the arity of a call would.
    #[error("wrong number of arguments (given {given}, expected 1..2)")]
    Arity { given: usize },

    #[error("wrong member name: {name:?}")]
    InvalidName { name: String },

    /// An `auto` declaration asked to continue a sequence that was never
    /// started.
    #[error("no sequence to continue for {enum_name}")]
    NoSequence { enum_name: String },

    #[error("cannot increment {value}: no successor operation")]
    NoSuccessor { value: String },

    #[error("cannot increment {value}: successor overflows")]
    Overflow { value: String },

    #[error("undefined member `{member}` for {record}")]
    NoMember { member: String, record: String },

    #[error("{record} does not serialize to a record of members")]
    NotARecord { record: String },

    /// A serde failure, with the JSON path it happened at when known.
    #[error("at JSON path {path} → {message}")]
    Json { path: String, message: String },
}

/// Coarse classification of [`Error`], for callers that only care which
/// family a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    KeyNotFound,
    Inheritance,
    Argument,
    TypeMismatch,
    Overflow,
    Record,
    Json,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::KeyNotFound { .. } | Error::ScopedKey { .. } | Error::ValueNotFound { .. } => {
                ErrorKind::KeyNotFound
            }
            Error::Inheritance { .. } => ErrorKind::Inheritance,
            Error::Arity { .. } | Error::InvalidName { .. } | Error::NoSequence { .. } => {
                ErrorKind::Argument
            }
            Error::NoSuccessor { .. } => ErrorKind::TypeMismatch,
            Error::Overflow { .. } => ErrorKind::Overflow,
            Error::NoMember { .. } | Error::NotARecord { .. } => ErrorKind::Record,
            Error::Json { .. } => ErrorKind::Json,
        }
    }

    pub fn is_key_not_found(&self) -> bool {
        self.kind() == ErrorKind::KeyNotFound
    }

    /// The key a lookup failed on, for the variants that have one.
    pub fn key(&self) -> Option<&str> {
        match self {
            Error::KeyNotFound { key, .. } | Error::ScopedKey { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Display name of the enum a lookup failed on.
    pub fn receiver(&self) -> Option<&str> {
        match self {
            Error::KeyNotFound { receiver, .. }
            | Error::ScopedKey { receiver, .. }
            | Error::ValueNotFound { receiver, .. } => Some(receiver),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json { path: ".".to_string(), message: err.to_string() }
    }
}
