use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// Account that may claim ownership after the grace period
    pub heir: String,
    /// Native denomination the account manages
    pub denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Withdraw funds to the owner (owner only). A zero amount is a
    /// heartbeat: no transfer, but the take-over clock still resets.
    Withdraw { amount: Uint128 },
    /// Claim ownership after the deadline (heir only), naming the next heir
    TakeOver { new_heir: String },
    /// Add funds to the account (anyone, funds attached)
    Deposit {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Current owner
    #[returns(OwnerResponse)]
    Owner {},

    /// Current heir
    #[returns(HeirResponse)]
    Heir {},

    /// Earliest timestamp at which a take-over may succeed
    #[returns(NextTakeOverTimeResponse)]
    NextTakeOverTime {},

    /// Full account view, balance included
    #[returns(AccountResponse)]
    Account {},

    /// Whether the heir can claim now, and how long remains otherwise
    #[returns(TakeOverStatusResponse)]
    TakeOverStatus {},
}

// Response types

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct HeirResponse {
    pub heir: Addr,
}

#[cw_serde]
pub struct NextTakeOverTimeResponse {
    pub next_take_over_time: u64,
}

#[cw_serde]
pub struct AccountResponse {
    pub owner: Addr,
    pub heir: Addr,
    pub denom: String,
    pub balance: Uint128,
    pub next_take_over_time: u64,
}

#[cw_serde]
pub struct TakeOverStatusResponse {
    pub claimable: bool,
    pub time_remaining: Option<u64>,
}
