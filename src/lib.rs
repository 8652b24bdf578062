#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

mod rebalance;
mod storage;
mod types;
mod validation;


pub use types::*;

#[contract]
pub struct PortfolioRegistry;

#[contractimpl]
impl PortfolioRegistry {
    pub fn initialize(env: Env, owner: Address, fee_bps: u32) -> Result<(), Error> {
        owner.require_auth();

        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        if !validation::validate_percentage(fee_bps) {
            return Err(Error::InvalidPercentage);
        }

        storage::write_protocol_owner(&env, &owner);
        storage::write_protocol_fee(&env, fee_bps);
        storage::write_next_portfolio_id(&env, 0);
        Ok(())
    }

    /// Registers a portfolio for `user` with one allocation slot per token.
    /// Returns the new portfolio id.
    pub fn create_portfolio(
        env: Env,
        user: Address,
        tokens: Vec<Address>,
        percentages: Vec<u32>,
    ) -> Result<u64, Error> {
        user.require_auth();

        if tokens.len() > MAX_ALLOCATIONS {
            return Err(Error::MaxTokensExceeded);
        }
        if tokens.len() != percentages.len() {
            return Err(Error::LengthMismatch);
        }
        if tokens.is_empty() {
            return Err(Error::InvalidToken);
        }
        if !validation::validate_percentages(&percentages) {
            return Err(Error::InvalidPercentage);
        }

        let portfolio_id = storage::read_next_portfolio_id(&env) + 1;
        let now = env.ledger().sequence() as u64;
        let portfolio = Portfolio {
            owner: user.clone(),
            created_at: now,
            last_rebalanced: now,
            total_value: 0,
            active: true,
            token_count: tokens.len(),
        };
        storage::write_portfolio(&env, portfolio_id, &portfolio);

        for slot_index in 0..tokens.len() {
            storage::initialize_slot(
                &env,
                portfolio_id,
                slot_index,
                tokens.get_unchecked(slot_index),
                percentages.get_unchecked(slot_index),
            )?;
        }

        storage::append_user_portfolio(&env, &user, portfolio_id)?;
        storage::write_next_portfolio_id(&env, portfolio_id);

        env.events()
            .publish(("portfolio", "created"), (portfolio_id, user));
        Ok(portfolio_id)
    }

    /// Overwrites the target weight of one slot. The held amount and token
    /// address are untouched.
    pub fn update_portfolio_allocation(
        env: Env,
        user: Address,
        portfolio_id: u64,
        slot_index: u32,
        new_percentage: u32,
    ) -> Result<(), Error> {
        user.require_auth();

        let portfolio =
            storage::read_portfolio(&env, portfolio_id).ok_or(Error::InvalidPortfolio)?;
        if user != portfolio.owner {
            return Err(Error::NotAuthorized);
        }
        if slot_index >= portfolio.token_count {
            return Err(Error::InvalidTokenId);
        }
        if !validation::validate_percentage(new_percentage) {
            return Err(Error::InvalidPercentage);
        }

        let mut asset =
            storage::read_asset(&env, portfolio_id, slot_index).ok_or(Error::InvalidTokenId)?;
        asset.target_percentage = new_percentage;
        storage::write_asset(&env, portfolio_id, slot_index, &asset);

        env.events().publish(
            ("portfolio", "updated"),
            (portfolio_id, slot_index, new_percentage),
        );
        Ok(())
    }

    /// Marks the portfolio's allocation timestamp current. The interval
    /// reported by needs_rebalance is not enforced here.
    pub fn rebalance_portfolio(env: Env, user: Address, portfolio_id: u64) -> Result<(), Error> {
        user.require_auth();

        let mut portfolio =
            storage::read_portfolio(&env, portfolio_id).ok_or(Error::InvalidPortfolio)?;
        if user != portfolio.owner {
            return Err(Error::NotAuthorized);
        }
        if !portfolio.active {
            return Err(Error::InvalidPortfolio);
        }

        let now = env.ledger().sequence() as u64;
        portfolio.last_rebalanced = now;
        storage::write_portfolio(&env, portfolio_id, &portfolio);

        env.events()
            .publish(("rebalance", "executed"), (portfolio_id, now));
        Ok(())
    }

    pub fn get_portfolio(env: Env, portfolio_id: u64) -> Option<Portfolio> {
        storage::read_portfolio(&env, portfolio_id)
    }

    pub fn get_portfolio_asset(
        env: Env,
        portfolio_id: u64,
        slot_index: u32,
    ) -> Option<PortfolioAsset> {
        storage::read_asset(&env, portfolio_id, slot_index)
    }

    pub fn get_user_portfolios(env: Env, owner: Address) -> Vec<u64> {
        storage::read_user_portfolios(&env, &owner)
    }

    pub fn needs_rebalance(env: Env, portfolio_id: u64) -> Result<bool, Error> {
        let portfolio =
            storage::read_portfolio(&env, portfolio_id).ok_or(Error::InvalidPortfolio)?;
        let now = env.ledger().sequence() as u64;
        Ok(rebalance::needs_rebalance(&portfolio, now))
    }

    pub fn calculate_rebalance_amounts(
        env: Env,
        portfolio_id: u64,
    ) -> Result<RebalanceStatus, Error> {
        let portfolio =
            storage::read_portfolio(&env, portfolio_id).ok_or(Error::InvalidPortfolio)?;
        let now = env.ledger().sequence() as u64;
        Ok(rebalance::rebalance_status(portfolio_id, &portfolio, now))
    }

    pub fn set_protocol_fee(env: Env, caller: Address, fee_bps: u32) -> Result<(), Error> {
        caller.require_auth();

        let owner = storage::read_protocol_owner(&env)?;
        if caller != owner {
            return Err(Error::NotAuthorized);
        }
        if !validation::validate_percentage(fee_bps) {
            return Err(Error::InvalidPercentage);
        }
        storage::write_protocol_fee(&env, fee_bps);
        Ok(())
    }

    pub fn set_protocol_owner(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        caller.require_auth();

        let owner = storage::read_protocol_owner(&env)?;
        if caller != owner {
            return Err(Error::NotAuthorized);
        }
        storage::write_protocol_owner(&env, &new_owner);
        Ok(())
    }

    pub fn get_protocol_fee(env: Env) -> Result<u32, Error> {
        storage::read_protocol_fee(&env)
    }

    pub fn get_protocol_owner(env: Env) -> Result<Address, Error> {
        storage::read_protocol_owner(&env)
    }
}
