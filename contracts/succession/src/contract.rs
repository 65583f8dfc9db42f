use cosmwasm_std::{
    coins, entry_point, to_json_binary, BankMsg, Binary, Deps, DepsMut, Env, MessageInfo,
    Response, StdResult, Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{
    AccountResponse, ExecuteMsg, HeirResponse, InstantiateMsg, NextTakeOverTimeResponse,
    OwnerResponse, QueryMsg, TakeOverStatusResponse,
};
use crate::state::{Config, CONFIG, GRACE_PERIOD_SECONDS};

const CONTRACT_NAME: &str = "crates.io:succession";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let heir = deps.api.addr_validate(&msg.heir)?;

    let config = Config {
        owner: info.sender.clone(),
        heir: heir.clone(),
        denom: msg.denom,
        next_take_over_time: env.block.time.seconds() + GRACE_PERIOD_SECONDS,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("heir", heir)
        .add_attribute("next_take_over_time", config.next_take_over_time.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Withdraw { amount } => execute_withdraw(deps, env, info, amount),
        ExecuteMsg::TakeOver { new_heir } => execute_take_over(deps, env, info, new_heir),
        ExecuteMsg::Deposit {} => execute_deposit(deps, info),
    }
}

pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.owner {
        return Err(ContractError::NotOwner {});
    }

    let balance = deps
        .querier
        .query_balance(env.contract.address, &config.denom)?;
    if amount > balance.amount {
        return Err(ContractError::InsufficientFunds {});
    }

    // Every successful withdrawal is a proof of life, a zero amount included
    config.next_take_over_time = env.block.time.seconds() + GRACE_PERIOD_SECONDS;
    CONFIG.save(deps.storage, &config)?;

    let mut res = Response::new()
        .add_attribute("method", "withdraw")
        .add_attribute("owner", config.owner.clone())
        .add_attribute("amount", amount)
        .add_attribute("next_take_over_time", config.next_take_over_time.to_string());

    // The bank module rejects empty sends; a zero withdrawal only resets the clock
    if !amount.is_zero() {
        res = res.add_message(BankMsg::Send {
            to_address: config.owner.into_string(),
            amount: coins(amount.u128(), config.denom),
        });
    }

    Ok(res)
}

pub fn execute_take_over(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    new_heir: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.heir {
        return Err(ContractError::NotHeir {});
    }

    // Strict: a claim landing exactly on the deadline is still too soon
    if env.block.time.seconds() <= config.next_take_over_time {
        return Err(ContractError::TooSoon {});
    }

    if new_heir.is_empty() {
        return Err(ContractError::InvalidHeir {});
    }
    let new_heir = deps
        .api
        .addr_validate(&new_heir)
        .map_err(|_| ContractError::InvalidHeir {})?;

    config.owner = config.heir.clone();
    config.heir = new_heir;
    config.next_take_over_time = env.block.time.seconds() + GRACE_PERIOD_SECONDS;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "take_over")
        .add_attribute("new_owner", config.owner)
        .add_attribute("new_heir", config.heir)
        .add_attribute("next_take_over_time", config.next_take_over_time.to_string()))
}

pub fn execute_deposit(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let amount = info
        .funds
        .iter()
        .find(|coin| coin.denom == config.denom)
        .map(|coin| coin.amount)
        .unwrap_or_default();

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {});
    }

    // Deposits are not a proof of life; the take-over clock is untouched
    Ok(Response::new()
        .add_attribute("method", "deposit")
        .add_attribute("sender", info.sender)
        .add_attribute("amount", amount))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?),
        QueryMsg::Heir {} => to_json_binary(&query_heir(deps)?),
        QueryMsg::NextTakeOverTime {} => to_json_binary(&query_next_take_over_time(deps)?),
        QueryMsg::Account {} => to_json_binary(&query_account(deps, env)?),
        QueryMsg::TakeOverStatus {} => to_json_binary(&query_take_over_status(deps, env)?),
    }
}

fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(OwnerResponse {
        owner: config.owner,
    })
}

fn query_heir(deps: Deps) -> StdResult<HeirResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(HeirResponse { heir: config.heir })
}

fn query_next_take_over_time(deps: Deps) -> StdResult<NextTakeOverTimeResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(NextTakeOverTimeResponse {
        next_take_over_time: config.next_take_over_time,
    })
}

fn query_account(deps: Deps, env: Env) -> StdResult<AccountResponse> {
    let config = CONFIG.load(deps.storage)?;
    let balance = deps
        .querier
        .query_balance(env.contract.address, &config.denom)?;

    Ok(AccountResponse {
        owner: config.owner,
        heir: config.heir,
        denom: config.denom,
        balance: balance.amount,
        next_take_over_time: config.next_take_over_time,
    })
}

fn query_take_over_status(deps: Deps, env: Env) -> StdResult<TakeOverStatusResponse> {
    let config = CONFIG.load(deps.storage)?;
    let now = env.block.time.seconds();

    let claimable = now > config.next_take_over_time;
    let time_remaining = if claimable {
        None
    } else {
        Some(config.next_take_over_time - now)
    };

    Ok(TakeOverStatusResponse {
        claimable,
        time_remaining,
    })
}
