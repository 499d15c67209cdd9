//! Seam between a token pallet and the compliance service.

use crate::{Config, Decision, Pallet};
use sp_core::{H160, U256};

/// Verdicts a token asks for before it moves, mints, burns or edits balances, or swaps
/// its compliance service. Implementations never mutate state.
pub trait ComplianceValidator {
    fn validate_transfer(sender: &H160, recipient: &H160, amount: U256) -> Decision;
    fn validate_issuance(sender: &H160, recipient: &H160, amount: U256) -> Decision;
    fn validate_redemption(redeemer: &H160, amount: U256, reason: &[u8]) -> Decision;
    fn validate_editing(sender: &H160) -> Decision;
    fn validate_updating(sender: &H160, new_service: &H160, new_version: u16) -> Decision;
}

impl<T: Config> ComplianceValidator for Pallet<T> {
    fn validate_transfer(sender: &H160, recipient: &H160, amount: U256) -> Decision {
        Pallet::<T>::validate_transfer(sender, recipient, amount)
    }

    fn validate_issuance(sender: &H160, recipient: &H160, amount: U256) -> Decision {
        Pallet::<T>::validate_issuance(sender, recipient, amount)
    }

    fn validate_redemption(redeemer: &H160, amount: U256, reason: &[u8]) -> Decision {
        Pallet::<T>::validate_redemption(redeemer, amount, reason)
    }

    fn validate_editing(sender: &H160) -> Decision {
        Pallet::<T>::validate_editing(sender)
    }

    fn validate_updating(sender: &H160, new_service: &H160, new_version: u16) -> Decision {
        Pallet::<T>::validate_updating(sender, new_service, new_version)
    }
}
