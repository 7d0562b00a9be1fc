use std::convert::Infallible;

use ethnum::U256;
use minicbor::{Decode, Encode};

use crate::token::TokenId;

pub const PAIR_CREATED: &str = "PairCreated";

/// Position of each `PairCreated(token0, token1, stable, pair, allPairsLength)`
/// argument.
pub mod pair_created_args {
    pub const TOKEN0: usize = 0;
    pub const TOKEN1: usize = 1;
    pub const STABLE: usize = 2;
    pub const PAIR: usize = 3;
    pub const ALL_PAIRS_LENGTH: usize = 4;
    pub const COUNT: usize = 5;
}

#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub enum EventArg {
    #[n(0)]
    Address(#[cbor(n(0), with = "crate::cbor::address")] TokenId),
    #[n(1)]
    Bool(#[n(0)] bool),
    #[n(2)]
    Uint(#[cbor(n(0), with = "crate::cbor::u256")] U256),
}

/// An emitted event as the execution layer reports it: a name and the
/// ordered argument list.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub struct RawEvent {
    #[n(0)]
    pub name: String,
    #[n(1)]
    pub args: Vec<EventArg>,
}

#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq, Default)]
pub struct TransactionReceipt {
    #[n(0)]
    pub events: Vec<RawEvent>,
}

impl TransactionReceipt {
    pub fn from_cbor(bytes: &[u8]) -> Result<Self, minicbor::decode::Error> {
        minicbor::decode(bytes)
    }

    pub fn to_cbor(&self) -> Result<Vec<u8>, minicbor::encode::Error<Infallible>> {
        minicbor::to_vec(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeEventError {
    MissingEvent,
    UnexpectedEvent {
        name: String,
    },
    MissingArgument {
        index: usize,
        field: &'static str,
    },
    UnexpectedArgument {
        index: usize,
        field: &'static str,
        found: EventArg,
    },
    UnexpectedArgumentCount {
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairCreated {
    pub token0: TokenId,
    pub token1: TokenId,
    pub stable: bool,
    pub pair: TokenId,
    pub all_pairs_length: U256,
}

fn arg<'a>(
    event: &'a RawEvent,
    index: usize,
    field: &'static str,
) -> Result<&'a EventArg, DecodeEventError> {
    event
        .args
        .get(index)
        .ok_or(DecodeEventError::MissingArgument { index, field })
}

fn address_arg(
    event: &RawEvent,
    index: usize,
    field: &'static str,
) -> Result<TokenId, DecodeEventError> {
    match arg(event, index, field)? {
        EventArg::Address(address) => Ok(*address),
        other => Err(DecodeEventError::UnexpectedArgument {
            index,
            field,
            found: other.clone(),
        }),
    }
}

impl TryFrom<&RawEvent> for PairCreated {
    type Error = DecodeEventError;

    fn try_from(event: &RawEvent) -> Result<Self, Self::Error> {
        use pair_created_args::*;

        if event.name != PAIR_CREATED {
            return Err(DecodeEventError::UnexpectedEvent {
                name: event.name.clone(),
            });
        }

        // the pair address is what callers need, report it first
        let pair = address_arg(event, PAIR, "pair")?;
        let token0 = address_arg(event, TOKEN0, "token0")?;
        let token1 = address_arg(event, TOKEN1, "token1")?;
        let stable = match arg(event, STABLE, "stable")? {
            EventArg::Bool(stable) => *stable,
            other => {
                return Err(DecodeEventError::UnexpectedArgument {
                    index: STABLE,
                    field: "stable",
                    found: other.clone(),
                });
            }
        };
        let all_pairs_length = match arg(event, ALL_PAIRS_LENGTH, "all_pairs_length")? {
            EventArg::Uint(length) => *length,
            other => {
                return Err(DecodeEventError::UnexpectedArgument {
                    index: ALL_PAIRS_LENGTH,
                    field: "all_pairs_length",
                    found: other.clone(),
                });
            }
        };

        if event.args.len() != COUNT {
            return Err(DecodeEventError::UnexpectedArgumentCount {
                expected: COUNT,
                found: event.args.len(),
            });
        }

        Ok(PairCreated {
            token0,
            token1,
            stable,
            pair,
            all_pairs_length,
        })
    }
}

impl From<&PairCreated> for RawEvent {
    fn from(event: &PairCreated) -> Self {
        RawEvent {
            name: PAIR_CREATED.to_string(),
            args: vec![
                EventArg::Address(event.token0),
                EventArg::Address(event.token1),
                EventArg::Bool(event.stable),
                EventArg::Address(event.pair),
                EventArg::Uint(event.all_pairs_length),
            ],
        }
    }
}
