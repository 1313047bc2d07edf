use core::fmt;

/// Errors produced while building natural numbers or configuring the multiplier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A negative value was supplied where only naturals are accepted
    Negative,
    /// The decimal text contained no digits
    Empty,
    /// The decimal text contained a character which is not a digit
    Malformed { input: String, position: usize },
    /// A configuration value could not be used
    InvalidConfig { name: &'static str, value: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Negative => write!(f, "negative operands are not supported"),
            Error::Empty => write!(f, "expected at least one decimal digit"),
            Error::Malformed { input, position } => {
                write!(f, "invalid digit at position {position} in '{input}'")
            }
            Error::InvalidConfig { name, value } => write!(f, "invalid value for {name}: '{value}'"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
