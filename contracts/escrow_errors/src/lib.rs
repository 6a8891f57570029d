#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by failure kind so callers can tell a rejected
///         precondition apart from a failed token movement.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `ContractError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup and initialization errors (codes 1-99).
    Initialization,
    /// Caller identity and permission errors (codes 100-199).
    Authorization,
    /// Lock precondition violations (codes 200-299).
    Precondition,
    /// Underlying token could not move the requested amount (codes 300-399).
    Transfer,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  ContractError
/// @notice Canonical error enum for the vote-escrow contracts.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///         Use the ErrorExt trait to retrieve the category and description.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Precondition
///   300 - 399 : Transfer
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    NotInitialized = 1,

    /// `initialize` was called a second time.
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// Caller is not the admin.
    NotAdmin = 100,

    // --- Precondition (200-299) ---
    /// Token amount argument must be strictly positive.
    AmountMustBePositive = 200,

    /// Initial lock amount is below the configured minimum.
    BelowMinLockAmount = 201,

    /// Requested lock is shorter than the 7 day minimum.
    LockTooShort = 202,

    /// Requested lock (or extension) ends more than 1440 days from now.
    LockTooLong = 203,

    /// Account still holds principal; withdraw old tokens first.
    LockExists = 204,

    /// Account has no unexpired lock to top up or extend.
    NoLiveLock = 205,

    /// Lock has not reached its end yet.
    LockNotExpired = 206,

    /// Account has no principal to withdraw.
    NothingToWithdraw = 207,

    /// Extension does not move the unlock time forward.
    ExtensionMustBePositive = 208,

    /// A mutation was re-entered while another one was in progress.
    ReentrancyDetected = 209,

    /// Supply was queried for a time before the last stored checkpoint.
    TimestampBeforeCheckpoint = 210,

    // --- Transfer (300-399) ---
    /// Payer does not hold enough of the underlying token.
    InsufficientBalance = 300,

    /// Payer has not approved the escrow for enough of the underlying token.
    InsufficientAllowance = 301,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    Overflow = 700,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every ContractError variant.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for ContractError {
    fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }

            ContractError::NotAdmin => ErrorCategory::Authorization,

            ContractError::AmountMustBePositive
            | ContractError::BelowMinLockAmount
            | ContractError::LockTooShort
            | ContractError::LockTooLong
            | ContractError::LockExists
            | ContractError::NoLiveLock
            | ContractError::LockNotExpired
            | ContractError::NothingToWithdraw
            | ContractError::ExtensionMustBePositive
            | ContractError::ReentrancyDetected
            | ContractError::TimestampBeforeCheckpoint => ErrorCategory::Precondition,

            ContractError::InsufficientBalance | ContractError::InsufficientAllowance => {
                ErrorCategory::Transfer
            }

            ContractError::Overflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract has already been initialized",
            ContractError::NotAdmin => "Caller is not the admin",
            ContractError::AmountMustBePositive => "Amount must be strictly positive (> 0)",
            ContractError::BelowMinLockAmount => "Lock amount is below the minimum",
            ContractError::LockTooShort => "Voting lock can be 7 days min",
            ContractError::LockTooLong => "Voting lock can be 4 years max",
            ContractError::LockExists => "Withdraw old tokens first",
            ContractError::NoLiveLock => "No existing lock found or lock expired",
            ContractError::LockNotExpired => "The lock didn't expire",
            ContractError::NothingToWithdraw => "Nothing to withdraw",
            ContractError::ExtensionMustBePositive => "Can only increase lock duration",
            ContractError::ReentrancyDetected => "Reentrancy detected; call rejected",
            ContractError::TimestampBeforeCheckpoint => {
                "Timestamp precedes the last supply checkpoint"
            }
            ContractError::InsufficientBalance => "Transfer amount exceeds balance",
            ContractError::InsufficientAllowance => "Transfer amount exceeds allowance",
            ContractError::Overflow => "Integer overflow in checked arithmetic",
        }
    }
}

#[cfg(test)]
mod test_errors;
