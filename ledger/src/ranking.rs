//! Top-holder ranking — the voting-eligibility oracle.

use crate::memory::InMemoryLedger;
use crate::RewardLedger;
use merit_types::WalletAddress;

/// Answers whether an address currently ranks among the top-K balance
/// holders of the reward token.
///
/// Implementations must reflect live balances at call time; the poll engine
/// re-checks eligibility on every ballot submission, not at candidacy time.
pub trait EligibilityOracle {
    fn is_top_holder(&self, address: &WalletAddress, k: u32) -> bool;
}

/// Rank by balance over the in-memory ledger.
///
/// An address is a top-K holder iff its balance is non-zero and fewer than K
/// addresses hold a strictly greater balance. Equal balances share a rank,
/// so a tie at the cutoff widens the eligible set rather than choosing
/// arbitrarily between equal holders.
impl EligibilityOracle for InMemoryLedger {
    fn is_top_holder(&self, address: &WalletAddress, k: u32) -> bool {
        if k == 0 {
            return false;
        }
        let balance = self.balance_of(address);
        if balance == 0 {
            return false;
        }
        let richer = self.balances.values().filter(|&&b| b > balance).count();
        richer < k as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_address(n: u8) -> WalletAddress {
        WalletAddress::new(format!("mrt_{:0>60}", n))
    }

    fn ledger_with_balances(balances: &[(u8, u128)]) -> InMemoryLedger {
        let mut ledger = InMemoryLedger::new();
        for &(n, amount) in balances {
            ledger.set_balance(test_address(n), amount);
        }
        ledger
    }

    #[test]
    fn test_top_holders_by_rank() {
        let ledger = ledger_with_balances(&[(1, 500), (2, 400), (3, 300), (4, 200)]);
        assert!(ledger.is_top_holder(&test_address(1), 2));
        assert!(ledger.is_top_holder(&test_address(2), 2));
        assert!(!ledger.is_top_holder(&test_address(3), 2));
        assert!(ledger.is_top_holder(&test_address(3), 3));
    }

    #[test]
    fn test_zero_balance_is_never_eligible() {
        let ledger = ledger_with_balances(&[(1, 500)]);
        assert!(!ledger.is_top_holder(&test_address(9), 10));
    }

    #[test]
    fn test_zero_rank_is_never_eligible() {
        let ledger = ledger_with_balances(&[(1, 500)]);
        assert!(!ledger.is_top_holder(&test_address(1), 0));
    }

    #[test]
    fn test_ties_share_a_rank() {
        // Three holders tied at the 2nd rank: all stay eligible at k = 2.
        let ledger = ledger_with_balances(&[(1, 500), (2, 300), (3, 300), (4, 300)]);
        assert!(ledger.is_top_holder(&test_address(2), 2));
        assert!(ledger.is_top_holder(&test_address(3), 2));
        assert!(ledger.is_top_holder(&test_address(4), 2));
    }

    #[test]
    fn test_fewer_holders_than_rank() {
        let ledger = ledger_with_balances(&[(1, 100), (2, 50)]);
        assert!(ledger.is_top_holder(&test_address(2), 10));
    }
}
