use std::{fmt, str::FromStr};

use candid::{
    CandidType,
    types::{Type, TypeInner},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};


pub const ADDRESS_LENGTH: usize = 20;

/// A 20 byte token (or account) address.
///
/// Parsing accepts upper, lower and mixed case hex, with or without the `0x`
/// prefix. Ordering over the raw bytes is the same as the lexicographic order
/// of the lowercase hex form, so two addresses that differ only in case are
/// equal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenId([u8; ADDRESS_LENGTH]);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenIdError {
    InvalidHex(String),
    InvalidLength { expected: usize, actual: usize },
}

impl fmt::Display for TokenIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenIdError::InvalidHex(reason) => write!(f, "invalid hex address: {reason}"),
            TokenIdError::InvalidLength { expected, actual } => write!(
                f,
                "invalid address length: expected {expected} bytes, got {actual}"
            ),
        }
    }
}

impl std::error::Error for TokenIdError {}

impl TokenId {
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, TokenIdError> {
        let bytes: [u8; ADDRESS_LENGTH] =
            bytes.try_into().map_err(|_| TokenIdError::InvalidLength {
                expected: ADDRESS_LENGTH,
                actual: bytes.len(),
            })?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Lowercase `0x` prefixed hex form, the form ordering is defined over.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl From<[u8; ADDRESS_LENGTH]> for TokenId {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl FromStr for TokenId {
    type Err = TokenIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.len() % 2 != 0 {
            return Err(TokenIdError::InvalidHex(
                hex::FromHexError::OddLength.to_string(),
            ));
        }
        if digits.len() != ADDRESS_LENGTH * 2 {
            return Err(TokenIdError::InvalidLength {
                expected: ADDRESS_LENGTH,
                actual: digits.len() / 2,
            });
        }
        let mut bytes = [0_u8; ADDRESS_LENGTH];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|e| TokenIdError::InvalidHex(e.to_string()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenId({})", self.to_hex())
    }
}

impl Serialize for TokenId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TokenId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// Travels as candid text so call arguments stay readable in replica logs.
impl CandidType for TokenId {
    fn _ty() -> Type {
        TypeInner::Text.into()
    }

    fn idl_serialize<S>(&self, serializer: S) -> Result<(), S::Error>
    where
        S: candid::types::Serializer,
    {
        serializer.serialize_text(&self.to_hex())
    }
}

/// An ordered token pair, token0 is never greater than token1.
///
/// Pool identity is defined over this order only, so every pool or position
/// call goes through [`canonicalize`] first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalPair {
    token0: TokenId,
    token1: TokenId,
}

impl CanonicalPair {
    pub fn token0(&self) -> TokenId {
        self.token0
    }

    pub fn token1(&self) -> TokenId {
        self.token1
    }
}

pub fn canonicalize(token_a: TokenId, token_b: TokenId) -> CanonicalPair {
    // sort token_a and b, token 0 is always the smaller token
    let (token0, token1) = if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    };
    CanonicalPair { token0, token1 }
}
