//! Reentrancy guard held for the whole of each mutating operation.

use escrow_errors::ContractError;
use soroban_sdk::Env;

use crate::types::DataKey;

fn is_locked(e: &Env) -> bool {
    e.storage().instance().get(&DataKey::Guard).unwrap_or(false)
}

fn acquire(e: &Env) -> Result<(), ContractError> {
    if is_locked(e) {
        return Err(ContractError::ReentrancyDetected);
    }
    e.storage().instance().set(&DataKey::Guard, &true);
    Ok(())
}

fn release(e: &Env) {
    e.storage().instance().set(&DataKey::Guard, &false);
}

/// Runs `f` with the guard held. The guard is released on both success and
/// error; on error the host discards the operation's writes anyway.
pub fn with_reentrancy_guard<T, F>(e: &Env, f: F) -> Result<T, ContractError>
where
    F: FnOnce() -> Result<T, ContractError>,
{
    acquire(e)?;
    let result = f();
    release(e);
    result
}
