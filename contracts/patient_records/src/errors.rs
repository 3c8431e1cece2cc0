use soroban_sdk::{contracterror, contracttype};

/// Error categories for classifying rejected calls
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Lifecycle errors: contract used before or re-initialized after setup
    Lifecycle = 1,
    /// Authorization errors: caller lacks the global role or per-record custody
    Authorization = 2,
    /// Not found errors: referenced record does not exist
    NotFound = 3,
    /// Validation errors: an argument names an unusable principal
    Validation = 4,
}

/// Error severity levels
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorSeverity {
    Low = 1,
    Medium = 2,
    High = 3,
}

/// Every rejected call returns exactly one of these. The host rolls back all
/// storage writes and events of the failed invocation.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Caller lacks the required role (owner, or authorized provider).
    Unauthorized = 3,
    /// Caller is an authorized provider but not the record's custodian.
    Forbidden = 4,
    RecordNotFound = 5,
    /// Transfer target is not currently authorized.
    InvalidTarget = 6,
    /// The id counter is at `u64::MAX`; ids are never reused.
    RecordIdOverflow = 7,
}

impl ContractError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized
            | ContractError::AlreadyInitialized
            | ContractError::RecordIdOverflow => ErrorCategory::Lifecycle,
            ContractError::Unauthorized | ContractError::Forbidden => {
                ErrorCategory::Authorization
            }
            ContractError::RecordNotFound => ErrorCategory::NotFound,
            ContractError::InvalidTarget => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ContractError::RecordNotFound | ContractError::InvalidTarget => ErrorSeverity::Low,
            ContractError::Unauthorized | ContractError::Forbidden => ErrorSeverity::Medium,
            ContractError::NotInitialized
            | ContractError::AlreadyInitialized
            | ContractError::RecordIdOverflow => ErrorSeverity::High,
        }
    }

    /// Rejections are never transient: the caller has to change something
    /// (get authorized, target another record) before resubmitting.
    pub fn retryable(&self) -> bool {
        false
    }

    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract is already initialized",
            ContractError::Unauthorized => "Caller is not authorized for this operation",
            ContractError::Forbidden => "Caller is not the custodian of this record",
            ContractError::RecordNotFound => "Record not found",
            ContractError::InvalidTarget => "Transfer target is not an authorized provider",
            ContractError::RecordIdOverflow => "Record id space is exhausted",
        }
    }
}
