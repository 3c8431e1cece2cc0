use soroban_sdk::{symbol_short, Address, Env};

/// Event published when the contract is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub timestamp: u64,
}

/// Event published when the owner authorizes a provider.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderAuthorizedEvent {
    pub provider: Address,
    pub timestamp: u64,
}

/// Event published when the owner revokes a provider.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderRevokedEvent {
    pub provider: Address,
    pub timestamp: u64,
}

/// Event published when a new patient record is added.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordAddedEvent {
    pub record_id: u64,
    pub custodian: Address,
    pub timestamp: u64,
}

/// Event published when the custodian edits a record's clinical fields.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordUpdatedEvent {
    pub record_id: u64,
    pub custodian: Address,
    pub timestamp: u64,
}

/// Event published when custody of a record moves to another provider.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordTransferredEvent {
    pub record_id: u64,
    pub from: Address,
    pub to: Address,
    pub timestamp: u64,
}

/// Publishes an event when the contract is initialized with its owner.
pub fn publish_initialized(env: &Env, owner: Address) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        owner,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a provider is authorized.
/// Published on every successful call, including re-authorizations.
pub fn publish_provider_authorized(env: &Env, provider: Address) {
    let topics = (symbol_short!("PRV_AUTH"), provider.clone());
    let data = ProviderAuthorizedEvent {
        provider,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a provider is revoked.
pub fn publish_provider_revoked(env: &Env, provider: Address) {
    let topics = (symbol_short!("PRV_REV"), provider.clone());
    let data = ProviderRevokedEvent {
        provider,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a new record is added.
/// This event includes the record ID, the creating custodian, and the creation timestamp.
pub fn publish_record_added(env: &Env, record_id: u64, custodian: Address, timestamp: u64) {
    let topics = (symbol_short!("REC_ADD"), record_id);
    let data = RecordAddedEvent {
        record_id,
        custodian,
        timestamp,
    };
    env.events().publish(topics, data);
}

/// Publishes an event when the custodian edits a record.
/// This event includes the record ID, the editing custodian, and the edit timestamp.
pub fn publish_record_updated(env: &Env, record_id: u64, custodian: Address, timestamp: u64) {
    let topics = (symbol_short!("REC_UPD"), record_id);
    let data = RecordUpdatedEvent {
        record_id,
        custodian,
        timestamp,
    };
    env.events().publish(topics, data);
}

/// Publishes an event when custody of a record is transferred.
/// Every record event is topic-keyed by `(kind, record_id)`.
pub fn publish_record_transferred(env: &Env, record_id: u64, from: Address, to: Address) {
    let topics = (symbol_short!("REC_XFR"), record_id);
    let data = RecordTransferredEvent {
        record_id,
        from,
        to,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
