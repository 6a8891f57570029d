#[cfg(test)]
mod tests {
    extern crate std;
    use crate::{ContractError, ErrorCategory, ErrorExt};
    use std::vec::Vec;

    fn all_variants() -> Vec<ContractError> {
        std::vec![
            ContractError::NotInitialized,
            ContractError::AlreadyInitialized,
            ContractError::NotAdmin,
            ContractError::AmountMustBePositive,
            ContractError::BelowMinLockAmount,
            ContractError::LockTooShort,
            ContractError::LockTooLong,
            ContractError::LockExists,
            ContractError::NoLiveLock,
            ContractError::LockNotExpired,
            ContractError::NothingToWithdraw,
            ContractError::ExtensionMustBePositive,
            ContractError::ReentrancyDetected,
            ContractError::TimestampBeforeCheckpoint,
            ContractError::InsufficientBalance,
            ContractError::InsufficientAllowance,
            ContractError::Overflow,
        ]
    }

    // --- Wire code tests ---

    #[test]
    fn test_codes_initialization() {
        assert_eq!(ContractError::NotInitialized as u32, 1);
        assert_eq!(ContractError::AlreadyInitialized as u32, 2);
    }

    #[test]
    fn test_codes_authorization() {
        assert_eq!(ContractError::NotAdmin as u32, 100);
    }

    #[test]
    fn test_codes_precondition() {
        assert_eq!(ContractError::AmountMustBePositive as u32, 200);
        assert_eq!(ContractError::BelowMinLockAmount as u32, 201);
        assert_eq!(ContractError::LockTooShort as u32, 202);
        assert_eq!(ContractError::LockTooLong as u32, 203);
        assert_eq!(ContractError::LockExists as u32, 204);
        assert_eq!(ContractError::NoLiveLock as u32, 205);
        assert_eq!(ContractError::LockNotExpired as u32, 206);
        assert_eq!(ContractError::NothingToWithdraw as u32, 207);
        assert_eq!(ContractError::ExtensionMustBePositive as u32, 208);
        assert_eq!(ContractError::ReentrancyDetected as u32, 209);
        assert_eq!(ContractError::TimestampBeforeCheckpoint as u32, 210);
    }

    #[test]
    fn test_codes_transfer() {
        assert_eq!(ContractError::InsufficientBalance as u32, 300);
        assert_eq!(ContractError::InsufficientAllowance as u32, 301);
    }

    #[test]
    fn test_codes_arithmetic() {
        assert_eq!(ContractError::Overflow as u32, 700);
    }

    // --- Category mapping tests ---

    #[test]
    fn test_category_matches_code_range() {
        for e in all_variants() {
            let code = e as u32;
            let expected = match code {
                1..=99 => ErrorCategory::Initialization,
                100..=199 => ErrorCategory::Authorization,
                200..=299 => ErrorCategory::Precondition,
                300..=399 => ErrorCategory::Transfer,
                700..=799 => ErrorCategory::Arithmetic,
                _ => panic!("{:?} has a code outside every block", e),
            };
            assert_eq!(e.category(), expected, "{:?}", e);
        }
    }

    #[test]
    fn test_transfer_failures_are_not_preconditions() {
        assert_eq!(
            ContractError::InsufficientBalance.category(),
            ErrorCategory::Transfer
        );
        assert_eq!(
            ContractError::InsufficientAllowance.category(),
            ErrorCategory::Transfer
        );
        assert_ne!(
            ContractError::InsufficientBalance,
            ContractError::InsufficientAllowance
        );
    }

    // --- Description tests ---

    #[test]
    fn test_descriptions_non_empty() {
        for e in all_variants() {
            assert!(!e.description().is_empty(), "{:?} has empty description", e);
        }
    }

    #[test]
    fn test_descriptions_unique() {
        let variants = all_variants();
        for i in 0..variants.len() {
            for j in (i + 1)..variants.len() {
                assert_ne!(variants[i].description(), variants[j].description());
            }
        }
    }

    #[test]
    fn test_lock_descriptions() {
        assert_eq!(
            ContractError::LockExists.description(),
            "Withdraw old tokens first"
        );
        assert_eq!(
            ContractError::LockNotExpired.description(),
            "The lock didn't expire"
        );
        assert_eq!(
            ContractError::NothingToWithdraw.description(),
            "Nothing to withdraw"
        );
    }

    // --- Variant count guard ---

    #[test]
    fn test_all_variants_count() {
        assert_eq!(
            all_variants().len(),
            17,
            "Update all_variants() and this count when adding new errors"
        );
    }

    #[test]
    fn test_copy_semantics() {
        let a = ContractError::NoLiveLock;
        let b = a;
        assert_eq!(a, b);
    }

    // --- Result propagation ---

    #[test]
    fn test_overflow() {
        let result: Result<i128, ContractError> =
            i128::MAX.checked_add(1).ok_or(ContractError::Overflow);
        assert_eq!(result, Err(ContractError::Overflow));
    }
}
