use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) enum ErrorKind {
    MalformedExpression(String),
    UnknownWord(String),
    UnknownUnit(String),
    OutOfRange(String),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedExpression(why) => write!(f, "Malformed expression: {why}"),
            Self::UnknownWord(word) => write!(f, "Unknown word `{word}`"),
            Self::UnknownUnit(unit) => write!(f, "Unknown unit `{unit}`"),
            Self::OutOfRange(why) => write!(f, "Out of range: {why}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

pub(crate) type PResult<T> = Result<T, ErrorKind>;
