use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

/// Inactivity window added to the current block time whenever the
/// take-over clock is reset (30 days).
pub const GRACE_PERIOD_SECONDS: u64 = 30 * 24 * 60 * 60;

#[cw_serde]
pub struct Config {
    /// Current controller; sole authority to withdraw funds
    pub owner: Addr,
    /// Account eligible to claim ownership once the deadline passes
    pub heir: Addr,
    /// Native denomination this account manages
    pub denom: String,
    /// Earliest timestamp (unix seconds) at which a take-over may succeed
    pub next_take_over_time: u64,
}

/// Account record storage
pub const CONFIG: Item<Config> = Item::new("config");
