pub mod constants;
pub mod price_encoding;
pub mod safe_cast;
