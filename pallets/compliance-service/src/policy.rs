//! Policy engine: read-only verdicts for the token's transfer, issuance, redemption,
//! editing and upgrade flows.
//!
//! Checks run in a fixed order and the first failing one decides the reason. For
//! transfers the sender's permission is checked before either pause switch and the
//! recipient's registration after them.

use super::*;
use sp_core::U256;

impl<T: Config> Pallet<T> {
    /// Editors may always send; anyone else must be a registered wallet.
    pub fn has_transfer_permission(account: &H160) -> bool {
        Self::has_role(ST_EDIT_ROLE, account) || Self::contains_wallet(account)
    }

    pub fn has_redemption_permission(account: &H160) -> bool {
        Self::has_role(DEFAULT_ADMIN_ROLE, account) || Self::has_role(ST_EDIT_ROLE, account)
    }

    pub fn validate_transfer(sender: &H160, recipient: &H160, _amount: U256) -> Decision {
        Self::check_transfer(sender, recipient).into()
    }

    /// Transfer pause does not apply, and the recipient is not checked.
    pub fn validate_issuance(sender: &H160, _recipient: &H160, _amount: U256) -> Decision {
        Self::check_editor(sender).into()
    }

    /// `amount` and `reason` are audit data only.
    pub fn validate_redemption(redeemer: &H160, _amount: U256, _reason: &[u8]) -> Decision {
        Self::check_redeemer(redeemer).into()
    }

    pub fn validate_editing(sender: &H160) -> Decision {
        Self::check_editor(sender).into()
    }

    /// `new_service` and `new_version` are recorded by the token, not inspected here.
    pub fn validate_updating(sender: &H160, _new_service: &H160, _new_version: u16) -> Decision {
        Self::check_upgrader(sender).into()
    }

    fn check_transfer(sender: &H160, recipient: &H160) -> Result<(), Rejection> {
        ensure!(Self::has_transfer_permission(sender), Rejection::NoKyc);
        Self::check_not_paused()?;
        ensure!(!TransferPause::<T>::get(), Rejection::TransferPaused);
        ensure!(Self::contains_wallet(recipient), Rejection::NoKyc);
        Ok(())
    }

    fn check_editor(sender: &H160) -> Result<(), Rejection> {
        ensure!(Self::has_role(ST_EDIT_ROLE, sender), Rejection::NoKyc);
        Self::check_not_paused()
    }

    fn check_redeemer(redeemer: &H160) -> Result<(), Rejection> {
        ensure!(Self::has_redemption_permission(redeemer), Rejection::NoKyc);
        Self::check_not_paused()
    }

    fn check_upgrader(sender: &H160) -> Result<(), Rejection> {
        ensure!(Self::has_role(ST_UPGRADE_ROLE, sender), Rejection::NoKyc);
        Self::check_not_paused()
    }

    fn check_not_paused() -> Result<(), Rejection> {
        ensure!(!GlobalPause::<T>::get(), Rejection::Paused);
        Ok(())
    }
}
