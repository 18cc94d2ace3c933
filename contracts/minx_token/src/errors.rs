use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 400,
    NotInitialized = 401,
    InsufficientBalance = 402,
    InsufficientAllowance = 403,
    Overflow = 404,
    NegativeAmount = 405,
}
