use soroban_sdk::{contracttype, Address, String};

// ─── Lock state ────────────────────────────────────────────────────────────

/// Principal locked by one account and the time it unlocks.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LockedBalance {
    /// Underlying token units held in custody for this account.
    pub amount: i128,
    /// Ledger timestamp at which the lock matures. 0 when no lock is held.
    pub end: u64,
}

impl LockedBalance {
    /// A lock is live while it holds principal and has not reached its end.
    pub fn is_live(&self, now: u64) -> bool {
        self.amount > 0 && now < self.end
    }
}

// ─── Configuration ─────────────────────────────────────────────────────────

/// Parameters written once by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowConfig {
    pub name: String,
    pub symbol: String,
    /// Token accepted as principal.
    pub locked_token: Address,
    /// Smallest principal `create_lock` accepts.
    pub min_locked_amount: i128,
    /// Early-withdraw penalty in basis points (5000 = 50 %).
    pub early_withdraw_fee_rate: u32,
}

/// Where penalty tokens go on `emergency_withdraw`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PenaltySink {
    /// Burned through the underlying token's `burn`.
    Burn,
    /// Transferred to a fee collector.
    Treasury(Address),
}

/// How a newly computed unlock time is aligned.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExpiryRounding {
    /// Unlock exactly `duration` seconds from now.
    Exact,
    /// Floor the unlock time to a whole week since the epoch.
    Week,
}

// ─── Aggregate supply ──────────────────────────────────────────────────────

/// Checkpoint of the aggregate decay curve.
///
/// Both fields are kept undivided by `MAXTIME` so that the only rounding
/// happens once, when supply is read.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SupplyPoint {
    /// Timestamp the checkpoint was advanced to.
    pub ts: u64,
    /// `Σ amount_i * (end_i - ts)` over locks with `end_i > ts`.
    pub bias: i128,
    /// `Σ amount_i` over locks with `end_i > ts`.
    pub slope: i128,
}

// ─── Events ────────────────────────────────────────────────────────────────

/// Which operation produced a `deposit` event.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum DepositType {
    DepositFor = 0,
    CreateLock = 1,
    IncreaseAmount = 2,
    IncreaseUnlockTime = 3,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Contract admin address. Instance.
    Admin,
    /// `EscrowConfig`. Instance.
    Config,
    /// `PenaltySink`. Instance.
    PenaltySink,
    /// `ExpiryRounding`. Instance.
    ExpiryRounding,
    /// Sum of all locked principal. Instance.
    TotalLocked,
    /// `SupplyPoint`. Instance.
    SupplyPoint,
    /// Reentrancy flag. Instance.
    Guard,
    /// `Map<u64, i128>` of principal leaving the aggregate at each end time
    /// inside one week, keyed by week index. Persistent.
    SlopeChanges(u64),
    /// Per-account `LockedBalance`. Persistent.
    Lock(Address),
}
