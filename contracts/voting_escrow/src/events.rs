use soroban_sdk::{Address, Env, String, Symbol};

use crate::types::{DepositType, ExpiryRounding, PenaltySink};

/// Emitted once by `initialize`.
///
/// # Topics
/// * `Symbol` - "initialized"
///
/// # Data
/// * `Address` - Admin
/// * `Address` - Locked token
/// * `String` - Name of the escrow balance
/// * `i128` - Minimum lock amount
pub fn emit_initialized(
    e: &Env,
    admin: &Address,
    locked_token: &Address,
    name: &String,
    min_locked_amount: i128,
) {
    let topics = (Symbol::new(e, "initialized"),);
    let data = (
        admin.clone(),
        locked_token.clone(),
        name.clone(),
        min_locked_amount,
    );
    e.events().publish(topics, data);
}

/// Emitted whenever principal is added or a lock is extended.
///
/// # Topics
/// * `Symbol` - "deposit"
/// * `Address` - The account whose lock changed
///
/// # Data
/// * `i128` - Principal added (0 for an extension)
/// * `u64` - Lock end after the operation
/// * `DepositType` - Which operation ran
/// * `u64` - Ledger timestamp
pub fn emit_deposit(
    e: &Env,
    account: &Address,
    value: i128,
    end: u64,
    deposit_type: DepositType,
) {
    let topics = (Symbol::new(e, "deposit"), account.clone());
    let data = (value, end, deposit_type, e.ledger().timestamp());
    e.events().publish(topics, data);
}

/// Emitted when a matured lock is withdrawn.
///
/// # Topics
/// * `Symbol` - "withdraw"
/// * `Address` - The account withdrawing
///
/// # Data
/// * `i128` - Principal returned
/// * `u64` - Ledger timestamp
pub fn emit_withdraw(e: &Env, account: &Address, value: i128) {
    let topics = (Symbol::new(e, "withdraw"), account.clone());
    let data = (value, e.ledger().timestamp());
    e.events().publish(topics, data);
}

/// Emitted on a forced early exit.
///
/// # Topics
/// * `Symbol` - "emergency_withdraw"
/// * `Address` - The account withdrawing
///
/// # Data
/// * `i128` - Principal released from the lock
/// * `i128` - Penalty forfeited
/// * `i128` - Net amount paid to the account
/// * `u64` - Ledger timestamp
pub fn emit_emergency_withdraw(
    e: &Env,
    account: &Address,
    principal: i128,
    penalty: i128,
    net: i128,
) {
    let topics = (Symbol::new(e, "emergency_withdraw"), account.clone());
    let data = (principal, penalty, net, e.ledger().timestamp());
    e.events().publish(topics, data);
}

/// Emitted whenever total locked principal changes.
pub fn emit_supply(e: &Env, prev_total_locked: i128, total_locked: i128) {
    let topics = (Symbol::new(e, "supply"),);
    e.events().publish(topics, (prev_total_locked, total_locked));
}

pub fn emit_penalty_forfeited(e: &Env, sink: &PenaltySink, penalty: i128) {
    let topics = (Symbol::new(e, "penalty_forfeited"),);
    e.events().publish(topics, (sink.clone(), penalty));
}

pub fn emit_penalty_sink_set(e: &Env, sink: &PenaltySink) {
    let topics = (Symbol::new(e, "penalty_sink_set"),);
    e.events().publish(topics, sink.clone());
}

pub fn emit_expiry_rounding_set(e: &Env, rounding: ExpiryRounding) {
    let topics = (Symbol::new(e, "expiry_rounding_set"),);
    e.events().publish(topics, rounding);
}
