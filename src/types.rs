use soroban_sdk::{contracterror, contracttype, Address};

/// Upper bound on allocation slots per portfolio.
pub const MAX_ALLOCATIONS: u32 = 10;

/// Upper bound on portfolios indexed under one owner.
pub const MAX_PORTFOLIOS_PER_USER: u32 = 20;

/// 10000 basis points = 100%.
pub const MAX_BPS: u32 = 10_000;

/// Advisory rebalance interval in ledger ticks (one day's worth).
pub const MIN_REBALANCE_INTERVAL: u64 = 144;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Portfolio {
    pub owner: Address,
    pub created_at: u64,
    pub last_rebalanced: u64,
    pub total_value: i128,
    pub active: bool,
    pub token_count: u32,
}

/// One allocation slot, keyed by (portfolio id, slot index).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PortfolioAsset {
    pub token: Address,
    pub target_percentage: u32,
    pub current_amount: i128,
}

/// Read-only snapshot returned by calculate_rebalance_amounts.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RebalanceStatus {
    pub portfolio_id: u64,
    pub total_value: i128,
    pub needs_rebalance: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    ProtocolOwner,
    ProtocolFeeBps,
    NextPortfolioId,
    Portfolio(u64),
    PortfolioAsset(u64, u32),
    UserPortfolios(Address),
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    InvalidPortfolio = 4,
    InvalidToken = 5,
    InvalidTokenId = 6,
    InvalidPercentage = 7,
    MaxTokensExceeded = 8,
    LengthMismatch = 9,
    UserStorageFailed = 10,
}
