use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A value was requested from an optional value that has none.
    #[error("no value present")]
    EmptyValue,
}

pub type Result<T> = std::result::Result<T, Error>;
