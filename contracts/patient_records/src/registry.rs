//! Owner and authorized-provider bookkeeping.
//!
//! The owner is written once by [`initialize`] and is authorized from that
//! point on. Providers are tracked as one persistent membership entry each;
//! an absent entry means "not authorized".

use crate::{events, ContractError};
use soroban_sdk::{log, symbol_short, Address, Env, Symbol};

const OWNER: Symbol = symbol_short!("OWNER");
const INITIALIZED: Symbol = symbol_short!("INIT");
const PROVIDER: Symbol = symbol_short!("PROVIDER");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

pub fn provider_key(principal: &Address) -> (Symbol, Address) {
    (PROVIDER, principal.clone())
}

fn extend_ttl_provider_key(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn set_authorized(env: &Env, principal: &Address) {
    let key = provider_key(principal);
    env.storage().persistent().set(&key, &true);
    extend_ttl_provider_key(env, &key);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

pub fn initialize(env: &Env, owner: Address) -> Result<(), ContractError> {
    if is_initialized(env) {
        return Err(ContractError::AlreadyInitialized);
    }

    env.storage().instance().set(&OWNER, &owner);
    env.storage().instance().set(&INITIALIZED, &true);
    set_authorized(env, &owner);

    events::publish_initialized(env, owner);

    Ok(())
}

pub fn get_owner(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&OWNER)
        .ok_or(ContractError::NotInitialized)
}

/// Pure membership lookup. Never fails, even before initialization.
pub fn is_authorized(env: &Env, principal: &Address) -> bool {
    env.storage()
        .persistent()
        .get::<_, bool>(&provider_key(principal))
        .unwrap_or(false)
}

/// Owner gate for registry mutations.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
    let owner = get_owner(env)?;
    if *caller != owner {
        log!(env, "owner gate rejected caller", caller.clone());
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Authorized-provider gate for every record store operation.
pub fn require_authorized(env: &Env, caller: &Address) -> Result<(), ContractError> {
    if !is_authorized(env, caller) {
        log!(env, "provider gate rejected caller", caller.clone());
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Adds `target` to the authorized set. Re-authorizing is a successful no-op
/// on state but still publishes the event.
pub fn authorize(env: &Env, caller: &Address, target: Address) -> Result<(), ContractError> {
    require_owner(env, caller)?;

    set_authorized(env, &target);
    events::publish_provider_authorized(env, target);

    Ok(())
}

/// Removes `target` from the authorized set if present.
///
/// The owner's own membership is permanent: revoking the owner address
/// succeeds without changing state. Records custodied by a revoked provider
/// are left untouched; the provider simply can no longer act on them.
pub fn revoke(env: &Env, caller: &Address, target: Address) -> Result<(), ContractError> {
    require_owner(env, caller)?;

    if target != *caller {
        env.storage().persistent().remove(&provider_key(&target));
    }
    events::publish_provider_revoked(env, target);

    Ok(())
}
