//! Custody of the locked token.
//! Centralizes balance/allowance checks and every transfer in or out of the
//! escrow, so each call site either moves the full amount or fails with a
//! distinct error before touching the lock ledger.

use escrow_errors::ContractError;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env};

use crate::events;
use crate::ledger::get_config;
use crate::types::PenaltySink;

fn token_client(e: &Env) -> Result<TokenClient<'_>, ContractError> {
    let config = get_config(e)?;
    Ok(TokenClient::new(e, &config.locked_token))
}

/// @notice Checks that `from` can pay `amount` to the escrow.
/// @dev Balance is checked before allowance so an unfunded, unapproved payer
///      reports `InsufficientBalance`.
pub fn require_payable(e: &Env, from: &Address, amount: i128) -> Result<(), ContractError> {
    let token = token_client(e)?;
    if token.balance(from) < amount {
        return Err(ContractError::InsufficientBalance);
    }
    let contract = e.current_contract_address();
    if token.allowance(from, &contract) < amount {
        return Err(ContractError::InsufficientAllowance);
    }
    Ok(())
}

/// @notice Pulls `amount` from `from` into custody.
/// @dev Requires prior approval for the escrow contract as spender.
pub fn pull_into_custody(e: &Env, from: &Address, amount: i128) -> Result<(), ContractError> {
    require_payable(e, from, amount)?;
    let contract = e.current_contract_address();
    token_client(e)?.transfer_from(&contract, from, &contract, &amount);
    Ok(())
}

/// @notice Pays `amount` out of custody to `recipient`.
pub fn release_from_custody(
    e: &Env,
    recipient: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    if amount == 0 {
        return Ok(());
    }
    let contract = e.current_contract_address();
    token_client(e)?.transfer(&contract, recipient, &amount);
    Ok(())
}

/// @notice Moves a forfeited penalty out of custody to `sink`.
pub fn forfeit_penalty(e: &Env, sink: &PenaltySink, penalty: i128) -> Result<(), ContractError> {
    if penalty == 0 {
        return Ok(());
    }
    let contract = e.current_contract_address();
    let token = token_client(e)?;
    match sink {
        PenaltySink::Burn => token.burn(&contract, &penalty),
        PenaltySink::Treasury(treasury) => token.transfer(&contract, treasury, &penalty),
    }
    events::emit_penalty_forfeited(e, sink, penalty);
    Ok(())
}

/// @notice Decimals of the locked token.
pub fn decimals(e: &Env) -> Result<u32, ContractError> {
    Ok(token_client(e)?.decimals())
}
