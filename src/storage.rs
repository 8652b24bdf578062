use soroban_sdk::{Address, Env, Vec};

use crate::types::{DataKey, Error, Portfolio, PortfolioAsset, MAX_PORTFOLIOS_PER_USER};
use crate::validation::validate_percentage;

// Config scalars live in instance storage; portfolio state is persistent.

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::ProtocolOwner)
}

pub fn read_protocol_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::ProtocolOwner)
        .ok_or(Error::NotInitialized)
}

pub fn write_protocol_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::ProtocolOwner, owner);
}

pub fn read_protocol_fee(env: &Env) -> Result<u32, Error> {
    env.storage()
        .instance()
        .get(&DataKey::ProtocolFeeBps)
        .ok_or(Error::NotInitialized)
}

pub fn write_protocol_fee(env: &Env, fee_bps: u32) {
    env.storage()
        .instance()
        .set(&DataKey::ProtocolFeeBps, &fee_bps);
}

pub fn read_next_portfolio_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::NextPortfolioId)
        .unwrap_or(0)
}

pub fn write_next_portfolio_id(env: &Env, id: u64) {
    env.storage().instance().set(&DataKey::NextPortfolioId, &id);
}

pub fn read_portfolio(env: &Env, portfolio_id: u64) -> Option<Portfolio> {
    env.storage()
        .persistent()
        .get(&DataKey::Portfolio(portfolio_id))
}

pub fn write_portfolio(env: &Env, portfolio_id: u64, portfolio: &Portfolio) {
    env.storage()
        .persistent()
        .set(&DataKey::Portfolio(portfolio_id), portfolio);
}

pub fn read_asset(env: &Env, portfolio_id: u64, slot_index: u32) -> Option<PortfolioAsset> {
    env.storage()
        .persistent()
        .get(&DataKey::PortfolioAsset(portfolio_id, slot_index))
}

pub fn write_asset(env: &Env, portfolio_id: u64, slot_index: u32, asset: &PortfolioAsset) {
    env.storage()
        .persistent()
        .set(&DataKey::PortfolioAsset(portfolio_id, slot_index), asset);
}

/// Writes a fresh allocation slot with a zero held amount. The bound check
/// is unreachable from create_portfolio, which validates first; it guards
/// direct misuse of the table.
pub fn initialize_slot(
    env: &Env,
    portfolio_id: u64,
    slot_index: u32,
    token: Address,
    percentage: u32,
) -> Result<(), Error> {
    if !validate_percentage(percentage) {
        return Err(Error::InvalidToken);
    }
    let asset = PortfolioAsset {
        token,
        target_percentage: percentage,
        current_amount: 0,
    };
    write_asset(env, portfolio_id, slot_index, &asset);
    Ok(())
}

/// Empty for owners with no portfolios, never an error.
pub fn read_user_portfolios(env: &Env, owner: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::UserPortfolios(owner.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

/// Appends a portfolio id to the owner's index, preserving insertion order.
pub fn append_user_portfolio(env: &Env, owner: &Address, portfolio_id: u64) -> Result<(), Error> {
    let mut portfolios = read_user_portfolios(env, owner);
    if portfolios.len() >= MAX_PORTFOLIOS_PER_USER {
        return Err(Error::UserStorageFailed);
    }
    portfolios.push_back(portfolio_id);
    env.storage()
        .persistent()
        .set(&DataKey::UserPortfolios(owner.clone()), &portfolios);
    Ok(())
}
