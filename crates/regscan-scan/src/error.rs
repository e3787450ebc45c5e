use regscan_map::BridgeError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("reimbursement lookup failed for '{inn}': {source}")]
    Bridge {
        inn: String,
        #[source]
        source: BridgeError,
    },
}

pub type Result<T> = std::result::Result<T, ScanError>;
