#![no_std]

pub mod errors;
pub mod events;
pub mod registry;
pub mod store;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use errors::{ContractError, ErrorCategory, ErrorSeverity};
pub use store::{PatientDetails, PatientRecord};

#[contract]
pub struct PatientRecordsContract;

#[contractimpl]
impl PatientRecordsContract {
    /// Initialize the contract with its owner. The owner is authorized
    /// immediately and can never be replaced.
    pub fn initialize(env: Env, owner: Address) -> Result<(), ContractError> {
        registry::initialize(&env, owner)
    }

    /// Get the owner address
    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        registry::get_owner(&env)
    }

    /// Check if the contract is initialized
    pub fn is_initialized(env: Env) -> bool {
        registry::is_initialized(&env)
    }

    // ======================== Authorization ========================

    /// Authorize a provider. Owner only; idempotent.
    pub fn authorize(env: Env, caller: Address, target: Address) -> Result<(), ContractError> {
        caller.require_auth();
        registry::authorize(&env, &caller, target)
    }

    /// Revoke a provider. Owner only; idempotent.
    pub fn revoke(env: Env, caller: Address, target: Address) -> Result<(), ContractError> {
        caller.require_auth();
        registry::revoke(&env, &caller, target)
    }

    /// Check whether a principal may currently act on records.
    pub fn is_authorized(env: Env, principal: Address) -> bool {
        registry::is_authorized(&env, &principal)
    }

    // ======================== Records ========================

    /// Add a patient record. The caller becomes its custodian.
    #[allow(clippy::too_many_arguments)]
    pub fn add_record(
        env: Env,
        caller: Address,
        name: String,
        age: u32,
        sex: String,
        mobile: String,
        diagnosis: String,
        treatment: String,
    ) -> Result<u64, ContractError> {
        caller.require_auth();
        let details = PatientDetails {
            name,
            age,
            sex,
            mobile,
            diagnosis,
            treatment,
        };
        store::add_record(&env, &caller, details)
    }

    /// Overwrite the clinical fields of a record. Custodian only.
    #[allow(clippy::too_many_arguments)]
    pub fn update_record(
        env: Env,
        caller: Address,
        record_id: u64,
        name: String,
        age: u32,
        sex: String,
        mobile: String,
        diagnosis: String,
        treatment: String,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        let details = PatientDetails {
            name,
            age,
            sex,
            mobile,
            diagnosis,
            treatment,
        };
        store::update_record(&env, &caller, record_id, details)
    }

    /// Move custody of a record to another authorized provider. Custodian only.
    pub fn transfer_record(
        env: Env,
        caller: Address,
        record_id: u64,
        to: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        store::transfer_record(&env, &caller, record_id, to)
    }

    /// Get a patient record by ID
    pub fn get_record(
        env: Env,
        caller: Address,
        record_id: u64,
    ) -> Result<PatientRecord, ContractError> {
        caller.require_auth();
        store::get_record(&env, &caller, record_id)
    }

    /// All record IDs in creation order
    pub fn list_all_ids(env: Env, caller: Address) -> Result<Vec<u64>, ContractError> {
        caller.require_auth();
        store::list_all_ids(&env, &caller)
    }

    /// Record IDs currently custodied by `principal`, in creation order
    pub fn list_ids_by_custodian(
        env: Env,
        caller: Address,
        principal: Address,
    ) -> Result<Vec<u64>, ContractError> {
        caller.require_auth();
        store::list_ids_by_custodian(&env, &caller, &principal)
    }

    /// Get the total number of records
    pub fn get_record_count(env: Env) -> u64 {
        store::record_count(&env)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }
}

#[cfg(test)]
mod test_events;
