use ethnum::U256;

use super::events::*;
use crate::tests::{pair_address, token_x, token_y};

fn pair_created() -> PairCreated {
    PairCreated {
        token0: token_x(),
        token1: token_y(),
        stable: true,
        pair: pair_address(),
        all_pairs_length: U256::from(7_u8),
    }
}

#[test]
fn decodes_pair_created_by_position() {
    let event = RawEvent {
        name: PAIR_CREATED.to_string(),
        args: vec![
            EventArg::Address(token_x()),
            EventArg::Address(token_y()),
            EventArg::Bool(true),
            EventArg::Address(pair_address()),
            EventArg::Uint(U256::from(7_u8)),
        ],
    };

    assert_eq!(PairCreated::try_from(&event), Ok(pair_created()));
    assert_eq!(RawEvent::from(&pair_created()), event);
}

#[test]
fn rejects_other_events() {
    let mut event = RawEvent::from(&pair_created());
    event.name = "Transfer".to_string();

    assert_eq!(
        PairCreated::try_from(&event),
        Err(DecodeEventError::UnexpectedEvent {
            name: "Transfer".to_string()
        })
    );
}

#[test]
fn rejects_non_address_pair_argument() {
    let mut event = RawEvent::from(&pair_created());
    event.args[pair_created_args::PAIR] = EventArg::Bool(false);

    assert_eq!(
        PairCreated::try_from(&event),
        Err(DecodeEventError::UnexpectedArgument {
            index: 3,
            field: "pair",
            found: EventArg::Bool(false),
        })
    );
}

#[test]
fn rejects_reordered_arguments() {
    // stable and token1 swapped, the pair address is still in place
    let mut event = RawEvent::from(&pair_created());
    event.args.swap(1, 2);

    assert!(matches!(
        PairCreated::try_from(&event),
        Err(DecodeEventError::UnexpectedArgument { index: 1, .. })
    ));
}

#[test]
fn rejects_extra_arguments() {
    let mut event = RawEvent::from(&pair_created());
    event.args.push(EventArg::Bool(true));

    assert_eq!(
        PairCreated::try_from(&event),
        Err(DecodeEventError::UnexpectedArgumentCount {
            expected: 5,
            found: 6
        })
    );
}

#[test]
fn receipt_decodes_from_cbor() {
    let receipt = TransactionReceipt {
        events: vec![
            RawEvent::from(&pair_created()),
            RawEvent {
                name: "Sync".to_string(),
                args: vec![EventArg::Uint(U256::ZERO), EventArg::Uint(U256::MAX)],
            },
        ],
    };

    let bytes = receipt.to_cbor().unwrap();
    assert_eq!(TransactionReceipt::from_cbor(&bytes).unwrap(), receipt);
}

#[test]
fn receipt_rejects_truncated_cbor() {
    let bytes = TransactionReceipt {
        events: vec![RawEvent::from(&pair_created())],
    }
    .to_cbor()
    .unwrap();

    assert!(TransactionReceipt::from_cbor(&bytes[..bytes.len() - 4]).is_err());
}
