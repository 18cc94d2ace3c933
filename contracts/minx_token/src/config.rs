//! Deployment configuration of the MINX token.
//!
//! Applied by `MinxToken::initialize_default`; a custom deployment passes its
//! own values to `MinxToken::initialize` instead.

pub const NAME: &str = "InnovaMinex";
pub const SYMBOL: &str = "MINX";
pub const DECIMALS: u32 = 6;

/// 300 million whole tokens, expressed in smallest units (`10^DECIMALS`).
pub const INITIAL_SUPPLY: i128 = 300_000_000_000_000;
