use thiserror::Error;

/// Top-level error type for keytexts.
#[derive(Debug, Error)]
pub enum KeyTextsError {
    /// The same name was registered twice.
    #[error("duplicate text name: {0}")]
    DuplicateName(String),

    /// A name outside `[a-z_0-9]+`.
    #[error("invalid text name: {0:?}")]
    InvalidName(String),

    /// Strict lookup of a name that is not in the registry.
    #[error("unknown text name: {0}")]
    UnknownName(String),

    /// Reference expansion did not reach a fixed point in time.
    #[error("too many !text/ name indirections after {passes} passes: {text}")]
    TooManyIndirections { text: String, passes: usize },

    /// A locale table does not line up with the name registry.
    #[error("table shape error: {0}")]
    TableShape(String),

    /// An override provider could not supply a string.
    #[error("provider error: {0}")]
    Provider(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
