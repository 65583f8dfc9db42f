use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Only owner can withdraw")]
    NotOwner {},

    #[error("Only heir can take over")]
    NotHeir {},

    #[error("Too soon")]
    TooSoon {},

    #[error("Invalid heir address")]
    InvalidHeir {},

    #[error("Failed to withdraw")]
    InsufficientFunds {},

    #[error("Amount must be greater than zero")]
    InvalidAmount {},
}
