//! Incremental total supply.
//!
//! Summing every account's balance on each read would touch one storage entry
//! per lock. Instead the contract keeps a single `SupplyPoint` holding the
//! undivided sum of all live locks at the checkpoint time, plus a schedule of
//! how much principal stops decaying at each lock end.
//!
//! The schedule is sharded by week: `DataKey::SlopeChanges(week)` is a sorted
//! `Map<u64, i128>` holding only the end times that fall inside that week. A
//! mutation touches the bucket of the old end, the bucket of the new end and
//! the buckets between the last checkpoint and now, so its cost depends on
//! how many ends share those weeks rather than on the number of live locks.
//! With `ExpiryRounding::Week` every bucket holds a single entry.
//!
//! Entries at or before the checkpoint have already been applied and are
//! skipped. Buckets the checkpoint has moved fully past are deleted.
//!
//! Every mutation replaces one account's contribution: the old lock is
//! removed and the new one added at the same `now`. Contributions are plain
//! sums, so updates from different accounts commute.

use escrow_errors::ContractError;
use soroban_sdk::{log, Env, Map, Vec};

use crate::decay::{lock_bias, MAXTIME, WEEK};
use crate::ledger::{BUMP_TARGET, BUMP_THRESHOLD};
use crate::math::{add_i128, mul_i128, sub_i128};
use crate::types::{DataKey, LockedBalance, SupplyPoint};

pub fn load_point(e: &Env) -> SupplyPoint {
    e.storage()
        .instance()
        .get(&DataKey::SupplyPoint)
        .unwrap_or_default()
}

fn save_point(e: &Env, point: &SupplyPoint) {
    e.storage().instance().set(&DataKey::SupplyPoint, point);
}

/// Week index of the bucket holding end time `ts`.
pub fn bucket_of(ts: u64) -> u64 {
    ts / WEEK
}

/// Slope changes scheduled inside `week`, empty if none.
pub fn load_bucket(e: &Env, week: u64) -> Map<u64, i128> {
    let key = DataKey::SlopeChanges(week);
    let storage = e.storage().persistent();
    match storage.get::<_, Map<u64, i128>>(&key) {
        Some(bucket) => {
            storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
            bucket
        }
        None => Map::new(e),
    }
}

fn save_bucket(e: &Env, week: u64, bucket: &Map<u64, i128>) {
    let key = DataKey::SlopeChanges(week);
    let storage = e.storage().persistent();
    if bucket.is_empty() {
        storage.remove(&key);
        return;
    }
    storage.set(&key, bucket);
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

/// Adds `delta` to the slope change scheduled at `end`, dropping the entry
/// when it reaches zero.
fn schedule(e: &Env, end: u64, delta: i128) -> Result<(), ContractError> {
    let week = bucket_of(end);
    let mut bucket = load_bucket(e, week);
    let scheduled = add_i128(bucket.get(end).unwrap_or(0), delta)?;
    if scheduled == 0 {
        bucket.remove(end);
    } else {
        bucket.set(end, scheduled);
    }
    save_bucket(e, week, &bucket);
    Ok(())
}

/// Moves `point` forward to `to`, applying every slope change in
/// `(point.ts, to]`. Returns the non-empty weeks the checkpoint moved fully
/// past.
///
/// A lock ending at `t` contributes `amount * (t - t) = 0` to the bias at
/// `t`, so removing it from the slope there leaves the bias unchanged.
///
/// Every live end lies within `MAXTIME` of the checkpoint, so the walk stops
/// once the slope is exhausted, after at most `MAXTIME / WEEK + 1` buckets.
pub fn advance(
    e: &Env,
    point: &SupplyPoint,
    to: u64,
) -> Result<(SupplyPoint, Vec<u64>), ContractError> {
    let mut next = point.clone();
    let mut passed = Vec::new(e);
    if to <= next.ts {
        return Ok((next, passed));
    }

    let last = bucket_of(to);
    let mut week = bucket_of(next.ts);
    while week <= last && next.slope > 0 {
        let bucket = load_bucket(e, week);
        for (t, d_slope) in bucket.iter() {
            if t > to {
                break;
            }
            if t <= next.ts {
                continue;
            }
            let elapsed = mul_i128(next.slope, (t - next.ts) as i128)?;
            next.bias = sub_i128(next.bias, elapsed)?;
            next.ts = t;
            next.slope = sub_i128(next.slope, d_slope)?;
        }
        if week < last && !bucket.is_empty() {
            passed.push_back(week);
        }
        week += 1;
    }

    let elapsed = mul_i128(next.slope, (to - next.ts) as i128)?;
    next.bias = sub_i128(next.bias, elapsed)?;
    next.ts = to;
    Ok((next, passed))
}

/// Total supply at `ts` without writing anything.
pub fn supply_at(e: &Env, ts: u64) -> Result<i128, ContractError> {
    let point = load_point(e);
    if ts < point.ts {
        return Err(ContractError::TimestampBeforeCheckpoint);
    }
    let (at, _) = advance(e, &point, ts)?;
    Ok(at.bias / MAXTIME as i128)
}

/// Replaces one account's contribution to the aggregate at `now`.
///
/// `old` is the lock as it was before the mutation, `new` as it will be
/// stored. Advances and persists the checkpoint first so the delta is taken
/// against the curve at `now`.
pub fn replace_contribution(
    e: &Env,
    old: &LockedBalance,
    new: &LockedBalance,
    now: u64,
) -> Result<(), ContractError> {
    let (mut point, passed) = advance(e, &load_point(e), now)?;
    for week in passed.iter() {
        e.storage().persistent().remove(&DataKey::SlopeChanges(week));
    }

    if old.is_live(now) {
        point.bias = sub_i128(point.bias, lock_bias(old.amount, old.end, now)?)?;
        point.slope = sub_i128(point.slope, old.amount)?;
        schedule(e, old.end, -old.amount)?;
    }

    if new.is_live(now) {
        point.bias = add_i128(point.bias, lock_bias(new.amount, new.end, now)?)?;
        point.slope = add_i128(point.slope, new.amount)?;
        schedule(e, new.end, new.amount)?;
    }

    log!(e, "supply checkpoint", point.ts, point.bias, point.slope);

    save_point(e, &point);
    Ok(())
}
