//! `#[cbor(with = ...)]` helpers for receipt types.

pub mod address {
    use minicbor::decode::{Decoder, Error};
    use minicbor::encode::{Encoder, Write};

    use crate::token::TokenId;

    pub fn decode<Ctx>(d: &mut Decoder<'_>, _ctx: &mut Ctx) -> Result<TokenId, Error> {
        let bytes = d.bytes()?;
        TokenId::from_slice(bytes).map_err(|e| Error::message(e.to_string()))
    }

    pub fn encode<Ctx, W: Write>(
        v: &TokenId,
        e: &mut Encoder<W>,
        _ctx: &mut Ctx,
    ) -> Result<(), minicbor::encode::Error<W::Error>> {
        e.bytes(v.as_bytes())?;
        Ok(())
    }
}

pub mod u256 {
    use ethnum::U256;
    use minicbor::decode::{Decoder, Error};
    use minicbor::encode::{Encoder, Write};

    pub fn decode<Ctx>(d: &mut Decoder<'_>, _ctx: &mut Ctx) -> Result<U256, Error> {
        let bytes = d.bytes()?;
        if bytes.len() > 32 {
            return Err(Error::message(format!(
                "expected at most 32 bytes, got: {}",
                bytes.len()
            )));
        }
        let mut be_bytes = [0u8; 32];
        be_bytes[32 - bytes.len()..].copy_from_slice(bytes);
        Ok(U256::from_be_bytes(be_bytes))
    }

    pub fn encode<Ctx, W: Write>(
        v: &U256,
        e: &mut Encoder<W>,
        _ctx: &mut Ctx,
    ) -> Result<(), minicbor::encode::Error<W::Error>> {
        let be_bytes = v.to_be_bytes();
        // leading zeros are dropped
        let start = be_bytes.iter().position(|b| *b != 0).unwrap_or(32);
        e.bytes(&be_bytes[start..])?;
        Ok(())
    }
}
