use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("ingredient master not loaded; load the master table before lookups")]
    Uninitialized,
}

pub type Result<T> = std::result::Result<T, BridgeError>;
