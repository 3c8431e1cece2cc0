//! Patient record storage and the per-record custody rules.
//!
//! Ids come from an instance-storage counter and start at 1. Records are
//! never removed, so the insertion-ordered id list is always `1..=counter`.

use crate::{events, registry, ContractError};
use soroban_sdk::{contracttype, log, symbol_short, Address, Env, String, Symbol, Vec};

const RECORD: Symbol = symbol_short!("RECORD");
const RECORD_COUNTER: Symbol = symbol_short!("REC_CTR");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

/// Patient record as stored on the ledger.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRecord {
    pub id: u64,
    pub name: String,
    pub age: u32,
    pub sex: String,
    pub mobile: String,
    pub diagnosis: String,
    pub treatment: String,
    /// Provider currently responsible for the record.
    pub custodian: Address,
    pub created_at: u64,
    /// Refreshed by clinical edits only, never by custody transfers.
    pub last_updated: u64,
}

/// The clinical fields supplied on create and overwritten on update.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientDetails {
    pub name: String,
    pub age: u32,
    pub sex: String,
    pub mobile: String,
    pub diagnosis: String,
    pub treatment: String,
}

pub fn record_key(record_id: u64) -> (Symbol, u64) {
    (RECORD, record_id)
}

fn extend_ttl_record_key(env: &Env, key: &(Symbol, u64)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn save_record(env: &Env, record: &PatientRecord) {
    let key = record_key(record.id);
    env.storage().persistent().set(&key, record);
    extend_ttl_record_key(env, &key);
}

fn load_record(env: &Env, record_id: u64) -> Result<PatientRecord, ContractError> {
    match env.storage().persistent().get(&record_key(record_id)) {
        Some(record) => Ok(record),
        None => {
            log!(env, "record not found", record_id);
            Err(ContractError::RecordNotFound)
        }
    }
}

fn require_custodian(
    env: &Env,
    record: &PatientRecord,
    caller: &Address,
) -> Result<(), ContractError> {
    if record.custodian != *caller {
        log!(env, "custody gate rejected caller", record.id, caller.clone());
        return Err(ContractError::Forbidden);
    }
    Ok(())
}

/// Number of records ever created, which is also the highest assigned id.
pub fn record_count(env: &Env) -> u64 {
    env.storage().instance().get(&RECORD_COUNTER).unwrap_or(0u64)
}

fn next_record_id(env: &Env) -> Result<u64, ContractError> {
    let record_id = record_count(env)
        .checked_add(1)
        .ok_or(ContractError::RecordIdOverflow)?;
    env.storage().instance().set(&RECORD_COUNTER, &record_id);
    Ok(record_id)
}

pub fn add_record(
    env: &Env,
    caller: &Address,
    details: PatientDetails,
) -> Result<u64, ContractError> {
    registry::require_authorized(env, caller)?;

    let record_id = next_record_id(env)?;
    let now = env.ledger().timestamp();

    let record = PatientRecord {
        id: record_id,
        name: details.name,
        age: details.age,
        sex: details.sex,
        mobile: details.mobile,
        diagnosis: details.diagnosis,
        treatment: details.treatment,
        custodian: caller.clone(),
        created_at: now,
        last_updated: now,
    };
    save_record(env, &record);

    events::publish_record_added(env, record_id, caller.clone(), now);

    Ok(record_id)
}

/// Overwrites every clinical field. Only the current custodian may edit.
pub fn update_record(
    env: &Env,
    caller: &Address,
    record_id: u64,
    details: PatientDetails,
) -> Result<(), ContractError> {
    registry::require_authorized(env, caller)?;

    let mut record = load_record(env, record_id)?;
    require_custodian(env, &record, caller)?;

    let now = env.ledger().timestamp();
    record.name = details.name;
    record.age = details.age;
    record.sex = details.sex;
    record.mobile = details.mobile;
    record.diagnosis = details.diagnosis;
    record.treatment = details.treatment;
    record.last_updated = now;
    save_record(env, &record);

    events::publish_record_updated(env, record_id, caller.clone(), now);

    Ok(())
}

/// Hands custody to another authorized provider. `last_updated` is untouched.
pub fn transfer_record(
    env: &Env,
    caller: &Address,
    record_id: u64,
    to: Address,
) -> Result<(), ContractError> {
    registry::require_authorized(env, caller)?;

    let mut record = load_record(env, record_id)?;
    require_custodian(env, &record, caller)?;

    if !registry::is_authorized(env, &to) {
        log!(env, "transfer target not authorized", record_id, to.clone());
        return Err(ContractError::InvalidTarget);
    }

    record.custodian = to.clone();
    save_record(env, &record);

    events::publish_record_transferred(env, record_id, caller.clone(), to);

    Ok(())
}

pub fn get_record(
    env: &Env,
    caller: &Address,
    record_id: u64,
) -> Result<PatientRecord, ContractError> {
    registry::require_authorized(env, caller)?;
    load_record(env, record_id)
}

/// Every id ever assigned, in insertion order.
pub fn list_all_ids(env: &Env, caller: &Address) -> Result<Vec<u64>, ContractError> {
    registry::require_authorized(env, caller)?;

    let mut ids = Vec::new(env);
    for record_id in 1..=record_count(env) {
        ids.push_back(record_id);
    }
    Ok(ids)
}

/// Linear scan over all records, keeping those custodied by `principal`.
pub fn list_ids_by_custodian(
    env: &Env,
    caller: &Address,
    principal: &Address,
) -> Result<Vec<u64>, ContractError> {
    registry::require_authorized(env, caller)?;

    let mut ids = Vec::new(env);
    for record_id in 1..=record_count(env) {
        let record = load_record(env, record_id)?;
        if record.custodian == *principal {
            ids.push_back(record_id);
        }
    }
    Ok(ids)
}
