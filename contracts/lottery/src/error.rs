use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-5)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,

    // ============================================
    // AUTHORIZATION ERRORS (10-15)
    // ============================================
    /// Caller is not the admin
    Unauthorized = 10,

    // ============================================
    // CONFIGURATION ERRORS (20-29)
    // ============================================
    /// Config change attempted while tickets are sold
    RoundInProgress = 20,
    /// Capacity must be non-zero, ticket cost must be positive
    InvalidParameter = 21,

    // ============================================
    // SALE ERRORS (30-39)
    // ============================================
    /// No tickets left in the current round
    SoldOut = 30,
    /// Payment does not cover the requested tickets
    InsufficientPayment = 31,
    /// Requested more tickets than remain available
    ExceedsSupply = 32,

    // ============================================
    // RESOLUTION ERRORS (40-49)
    // ============================================
    /// Round still has unsold tickets
    RoundNotComplete = 40,

    // ============================================
    // ARITHMETIC ERRORS (50-59)
    // ============================================
    /// Ticket cost multiplication overflowed
    Overflow = 50,
}
