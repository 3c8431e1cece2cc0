#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::arithmetic_side_effects
)]

use super::*;
use crate::events::{
    InitializedEvent, ProviderAuthorizedEvent, ProviderRevokedEvent, RecordAddedEvent,
    RecordTransferredEvent, RecordUpdatedEvent,
};
use soroban_sdk::testutils::{Address as _, Events, Ledger};
use soroban_sdk::{symbol_short, vec, Address, Env, IntoVal, String, Val, Vec};

const NOW: u64 = 12_345;

fn setup() -> (Env, PatientRecordsContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(NOW);

    let contract_id = env.register(PatientRecordsContract, ());
    let client = PatientRecordsContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(&owner);

    (env, client, owner)
}

fn add_record(env: &Env, client: &PatientRecordsContractClient, caller: &Address) -> u64 {
    let text = String::from_str(env, "x");
    client.add_record(caller, &text, &30, &text, &text, &text, &text)
}

#[test]
fn test_initialize_publishes_event() {
    let env = Env::default();
    env.ledger().set_timestamp(NOW);
    let contract_id = env.register(PatientRecordsContract, ());
    let client = PatientRecordsContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(&owner);

    let expected: Vec<(Address, Vec<Val>, Val)> = vec![
        &env,
        (
            client.address.clone(),
            (symbol_short!("INIT"),).into_val(&env),
            InitializedEvent {
                owner,
                timestamp: NOW,
            }
            .into_val(&env),
        ),
    ];
    assert_eq!(env.events().all(), expected);
}

#[test]
fn test_authorize_publishes_event_every_time() {
    let (env, client, owner) = setup();
    let provider = Address::generate(&env);

    for _ in 0..2 {
        client.authorize(&owner, &provider);

        let expected: Vec<(Address, Vec<Val>, Val)> = vec![
            &env,
            (
                client.address.clone(),
                (symbol_short!("PRV_AUTH"), provider.clone()).into_val(&env),
                ProviderAuthorizedEvent {
                    provider: provider.clone(),
                    timestamp: NOW,
                }
                .into_val(&env),
            ),
        ];
        assert_eq!(env.events().all(), expected);
    }
}

#[test]
fn test_revoke_publishes_event_every_time() {
    let (env, client, owner) = setup();
    let provider = Address::generate(&env);
    client.authorize(&owner, &provider);

    for _ in 0..2 {
        client.revoke(&owner, &provider);

        let expected: Vec<(Address, Vec<Val>, Val)> = vec![
            &env,
            (
                client.address.clone(),
                (symbol_short!("PRV_REV"), provider.clone()).into_val(&env),
                ProviderRevokedEvent {
                    provider: provider.clone(),
                    timestamp: NOW,
                }
                .into_val(&env),
            ),
        ];
        assert_eq!(env.events().all(), expected);
    }
}

#[test]
fn test_record_lifecycle_events_are_keyed_by_record_id() {
    let (env, client, owner) = setup();
    let provider = Address::generate(&env);
    client.authorize(&owner, &provider);

    let id = add_record(&env, &client, &owner);
    let expected: Vec<(Address, Vec<Val>, Val)> = vec![
        &env,
        (
            client.address.clone(),
            (symbol_short!("REC_ADD"), id).into_val(&env),
            RecordAddedEvent {
                record_id: id,
                custodian: owner.clone(),
                timestamp: NOW,
            }
            .into_val(&env),
        ),
    ];
    assert_eq!(env.events().all(), expected);

    env.ledger().set_timestamp(NOW + 10);
    let text = String::from_str(&env, "y");
    client.update_record(&owner, &id, &text, &31, &text, &text, &text, &text);
    let expected: Vec<(Address, Vec<Val>, Val)> = vec![
        &env,
        (
            client.address.clone(),
            (symbol_short!("REC_UPD"), id).into_val(&env),
            RecordUpdatedEvent {
                record_id: id,
                custodian: owner.clone(),
                timestamp: NOW + 10,
            }
            .into_val(&env),
        ),
    ];
    assert_eq!(env.events().all(), expected);

    client.transfer_record(&owner, &id, &provider);
    let expected: Vec<(Address, Vec<Val>, Val)> = vec![
        &env,
        (
            client.address.clone(),
            (symbol_short!("REC_XFR"), id).into_val(&env),
            RecordTransferredEvent {
                record_id: id,
                from: owner.clone(),
                to: provider.clone(),
                timestamp: NOW + 10,
            }
            .into_val(&env),
        ),
    ];
    assert_eq!(env.events().all(), expected);
}

#[test]
fn test_rejected_calls_publish_nothing() {
    let (env, client, owner) = setup();
    let stranger = Address::generate(&env);
    let id = add_record(&env, &client, &owner);
    let nothing: Vec<(Address, Vec<Val>, Val)> = Vec::new(&env);

    assert_eq!(
        client.try_authorize(&stranger, &stranger),
        Err(Ok(ContractError::Unauthorized))
    );
    assert_eq!(env.events().all(), nothing);

    assert_eq!(
        client.try_transfer_record(&owner, &id, &stranger),
        Err(Ok(ContractError::InvalidTarget))
    );
    assert_eq!(env.events().all(), nothing);

    let text = String::from_str(&env, "x");
    assert_eq!(
        client.try_add_record(&stranger, &text, &1, &text, &text, &text, &text),
        Err(Ok(ContractError::Unauthorized))
    );
    assert_eq!(env.events().all(), nothing);
}
