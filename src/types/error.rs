use soroban_sdk::contracterror;

// Router contract errors
#[contracterror]
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RouterError {
    // Caller is not allowed to execute this function
    UnauthorizedCaller = 32_700,
    // Contract has not been initialized yet
    NotInitialized = 32_701,
    // Cannot initialize the contract for the second time
    AlreadyInitialized = 32_702,
    // Deployment configuration rejected
    InvalidConfig = 32_703,
    // Route bytes do not match the packed hop layout
    MalformedRoute = 32_711,
    // Intermediate or final amount does not fit the available precision
    ArithmeticOverflow = 32_712,
    // Pair reported an empty input reserve
    DivisionByZero = 32_713,
    // Pair or token contract call failed
    ExternalCallFailure = 32_714,
    // Route references a pair that was never registered
    UnknownPair = 32_715,
}
