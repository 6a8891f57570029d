//! create_lock: happy path, bounds, transfer failures and rollback.

#![cfg(test)]

use crate::test_helpers::*;
use crate::{ContractError, ErrorCategory, ErrorExt, ExpiryRounding, MAXTIME, MIN_LOCK_DURATION};
use soroban_sdk::Env;

// ═══════════════════════════════════════════════════════════════════
// 1. Happy path
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_create_lock_seven_days() {
    let e = Env::default();
    let f = setup(&e);

    let lock = f.client.create_lock(&f.bob, &(10 * UNIT), &7);

    assert_eq!(lock.amount, 10 * UNIT);
    assert_eq!(lock.end, START + 7 * ONE_DAY);
    assert_eq!(f.token.balance(&f.bob), INITIAL_AMOUNT - 10 * UNIT);
    assert_eq!(f.custody(), 10 * UNIT);

    // 10 * 604800 / 124416000 = 0.048611111111111111
    assert_eq!(f.client.balance_of(&f.bob), 48_611_111_111_111_111);
    assert_eq!(f.client.total_supply(), 48_611_111_111_111_111);
}

#[test]
fn test_create_lock_max_duration_balance_equals_principal() {
    let e = Env::default();
    let f = setup(&e);

    f.client.create_lock(&f.bob, &(100 * UNIT), &(4 * 360));

    assert_eq!(f.client.locked_end(&f.bob), START + MAXTIME);
    assert_eq!(f.client.balance_of(&f.bob), 100 * UNIT);
    assert_eq!(f.client.total_supply(), 100 * UNIT);
}

#[test]
fn test_create_lock_records_ledger_fields() {
    let e = Env::default();
    let f = setup(&e);

    f.client.create_lock(&f.bob, &(25 * UNIT), &30);

    let lock = f.client.get_lock(&f.bob);
    assert_eq!(lock.amount, 25 * UNIT);
    assert_eq!(lock.end, START + 30 * ONE_DAY);
    assert_eq!(f.client.locked_of(&f.bob), 25 * UNIT);
    assert_eq!(f.client.total_locked(), 25 * UNIT);
}

#[test]
fn test_create_lock_at_min_amount() {
    let e = Env::default();
    let f = setup(&e);
    let lock = f.client.create_lock(&f.bob, &MIN_LOCKED, &7);
    assert_eq!(lock.amount, MIN_LOCKED);
}

// ═══════════════════════════════════════════════════════════════════
// 2. Precondition failures
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_create_lock_one_day_too_short() {
    let e = Env::default();
    let f = setup(&e);
    assert_eq!(
        f.client.try_create_lock(&f.bob, &(10 * UNIT), &1),
        Err(Ok(ContractError::LockTooShort))
    );
}

#[test]
fn test_create_lock_six_days_too_short() {
    let e = Env::default();
    let f = setup(&e);
    assert_eq!(
        f.client.try_create_lock(&f.bob, &(10 * UNIT), &6),
        Err(Ok(ContractError::LockTooShort))
    );
}

#[test]
fn test_create_lock_five_years_too_long() {
    let e = Env::default();
    let f = setup(&e);
    assert_eq!(
        f.client.try_create_lock(&f.bob, &(10 * UNIT), &(5 * 360)),
        Err(Ok(ContractError::LockTooLong))
    );
}

#[test]
fn test_create_lock_one_day_over_max_too_long() {
    let e = Env::default();
    let f = setup(&e);
    assert_eq!(
        f.client.try_create_lock(&f.bob, &(10 * UNIT), &(4 * 360 + 1)),
        Err(Ok(ContractError::LockTooLong))
    );
}

#[test]
fn test_create_lock_duration_overflow() {
    let e = Env::default();
    let f = setup(&e);
    assert_eq!(
        f.client.try_create_lock(&f.bob, &(10 * UNIT), &u64::MAX),
        Err(Ok(ContractError::Overflow))
    );
}

#[test]
fn test_create_lock_below_min_amount() {
    let e = Env::default();
    let f = setup(&e);
    assert_eq!(
        f.client.try_create_lock(&f.bob, &(MIN_LOCKED - 1), &7),
        Err(Ok(ContractError::BelowMinLockAmount))
    );
}

#[test]
fn test_create_lock_zero_amount() {
    let e = Env::default();
    let f = setup(&e);
    assert_eq!(
        f.client.try_create_lock(&f.bob, &0_i128, &7),
        Err(Ok(ContractError::AmountMustBePositive))
    );
    assert_eq!(
        f.client.try_create_lock(&f.bob, &-5_i128, &7),
        Err(Ok(ContractError::AmountMustBePositive))
    );
}

#[test]
fn test_create_lock_with_existing_lock_fails() {
    let e = Env::default();
    let f = setup(&e);

    f.client.create_lock(&f.bob, &(10 * UNIT), &7);
    assert_eq!(
        f.client.try_create_lock(&f.bob, &(10 * UNIT), &7),
        Err(Ok(ContractError::LockExists))
    );
    assert_eq!(f.client.locked_of(&f.bob), 10 * UNIT);
}

#[test]
fn test_create_lock_with_expired_unwithdrawn_lock_fails() {
    let e = Env::default();
    let f = setup(&e);

    f.client.create_lock(&f.bob, &(10 * UNIT), &7);
    advance_time(&e, 8 * ONE_DAY);
    assert_eq!(
        f.client.try_create_lock(&f.bob, &(10 * UNIT), &7),
        Err(Ok(ContractError::LockExists))
    );

    f.client.withdraw(&f.bob);
    let lock = f.client.create_lock(&f.bob, &(10 * UNIT), &7);
    assert_eq!(lock.amount, 10 * UNIT);
}

// ═══════════════════════════════════════════════════════════════════
// 3. Transfer failures
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_create_lock_more_than_balance() {
    let e = Env::default();
    let f = setup_unapproved(&e);

    let err = f.client.try_create_lock(&f.bob, &(2_000 * UNIT), &7);
    assert_eq!(err, Err(Ok(ContractError::InsufficientBalance)));
    assert_eq!(
        ContractError::InsufficientBalance.category(),
        ErrorCategory::Transfer
    );
}

#[test]
fn test_create_lock_before_approve() {
    let e = Env::default();
    let f = setup_unapproved(&e);

    assert_eq!(
        f.client.try_create_lock(&f.bob, &(10 * UNIT), &7),
        Err(Ok(ContractError::InsufficientAllowance))
    );
}

#[test]
fn test_create_lock_allowance_smaller_than_amount() {
    let e = Env::default();
    let f = setup_unapproved(&e);
    f.approve(&f.bob, 5 * UNIT);

    assert_eq!(
        f.client.try_create_lock(&f.bob, &(10 * UNIT), &7),
        Err(Ok(ContractError::InsufficientAllowance))
    );
}

#[test]
fn test_failed_create_lock_leaves_no_state() {
    let e = Env::default();
    let f = setup_unapproved(&e);

    let _ = f.client.try_create_lock(&f.bob, &(10 * UNIT), &7);

    assert_eq!(f.client.locked_of(&f.bob), 0);
    assert_eq!(f.client.locked_end(&f.bob), 0);
    assert_eq!(f.client.total_locked(), 0);
    assert_eq!(f.client.total_supply(), 0);
    assert_eq!(f.custody(), 0);
    assert_eq!(f.token.balance(&f.bob), INITIAL_AMOUNT);

    // The guard was not left held by the failed call.
    f.approve(&f.bob, INITIAL_AMOUNT);
    f.client.create_lock(&f.bob, &(10 * UNIT), &7);
    assert_eq!(f.client.locked_of(&f.bob), 10 * UNIT);
}

// ═══════════════════════════════════════════════════════════════════
// 4. Week rounding
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_create_lock_week_rounding_floors_end() {
    let e = Env::default();
    let f = setup(&e);
    f.client.set_expiry_rounding(&f.admin, &ExpiryRounding::Week);

    let lock = f.client.create_lock(&f.bob, &(10 * UNIT), &30);

    let week = 7 * ONE_DAY;
    let expected = (START + 30 * ONE_DAY) / week * week;
    assert_eq!(lock.end, expected);
    assert_eq!(lock.end % week, 0);
    assert!(lock.end <= START + 30 * ONE_DAY);
    assert!(lock.end > START);
}

#[test]
fn test_create_lock_week_rounding_enforces_minimum_after_floor() {
    let e = Env::default();
    let f = setup(&e);
    f.client.set_expiry_rounding(&f.admin, &ExpiryRounding::Week);

    // START is not on a week boundary, so 7 days floors to under 7 days.
    assert_ne!((START + 7 * ONE_DAY) % (7 * ONE_DAY), 0);
    assert_eq!(
        f.client.try_create_lock(&f.bob, &(10 * UNIT), &7),
        Err(Ok(ContractError::LockTooShort))
    );
    assert_eq!(f.client.locked_of(&f.bob), 0);

    let lock = f.client.create_lock(&f.bob, &(10 * UNIT), &14);
    assert!(lock.end - START >= MIN_LOCK_DURATION);
    assert!(lock.end - START < 14 * ONE_DAY);
}

#[test]
fn test_create_lock_week_rounding_on_boundary_allows_seven_days() {
    let e = Env::default();
    let f = setup(&e);
    f.client.set_expiry_rounding(&f.admin, &ExpiryRounding::Week);

    let week = 7 * ONE_DAY;
    let boundary = (START / week + 1) * week;
    set_time(&e, boundary);
    let lock = f.client.create_lock(&f.bob, &(10 * UNIT), &7);
    assert_eq!(lock.end, boundary + week);
}

#[test]
fn test_create_lock_exact_rounding_keeps_seven_days() {
    let e = Env::default();
    let f = setup(&e);
    f.client.set_expiry_rounding(&f.admin, &ExpiryRounding::Week);
    f.client.set_expiry_rounding(&f.admin, &ExpiryRounding::Exact);

    let lock = f.client.create_lock(&f.bob, &(10 * UNIT), &7);
    assert_eq!(lock.end, START + 7 * ONE_DAY);
    assert_eq!(f.client.balance_of(&f.bob), 48_611_111_111_111_111);
}
