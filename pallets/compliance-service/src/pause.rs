//! Global and transfer pause switches.

use super::*;

impl<T: Config> Pallet<T> {
    /// Roles allowed to flip either switch. The first is named in the revert message.
    const PAUSER_ROLES: [RoleId; 2] = [DEFAULT_ADMIN_ROLE, ST_CONTROL_ROLE];

    pub fn paused() -> bool {
        GlobalPause::<T>::get()
    }

    pub fn transfer_paused() -> bool {
        TransferPause::<T>::get()
    }

    pub fn do_pause(sender: &H160) -> Result<(), ServiceError> {
        Self::check_role(&Self::PAUSER_ROLES, sender)?;
        ensure!(!GlobalPause::<T>::get(), ServiceError::EnforcedPause);

        GlobalPause::<T>::put(true);
        log::info!(target: LOG_TARGET, "global pause set by {sender:?}");
        Self::deposit_event(Event::Paused { account: *sender });
        Ok(())
    }

    pub fn do_unpause(sender: &H160) -> Result<(), ServiceError> {
        Self::check_role(&Self::PAUSER_ROLES, sender)?;
        ensure!(GlobalPause::<T>::get(), ServiceError::ExpectedPause);

        GlobalPause::<T>::put(false);
        log::info!(target: LOG_TARGET, "global pause cleared by {sender:?}");
        Self::deposit_event(Event::Unpaused { account: *sender });
        Ok(())
    }

    /// Sets the transfer pause. Not guarded against an already-set switch: a repeated
    /// call succeeds and emits again.
    pub fn do_transfer_pause(sender: &H160) -> Result<(), ServiceError> {
        Self::check_role(&Self::PAUSER_ROLES, sender)?;

        TransferPause::<T>::put(true);
        log::info!(target: LOG_TARGET, "transfer pause set by {sender:?}");
        Self::deposit_event(Event::TransferPaused { account: *sender });
        Ok(())
    }

    /// Clears the transfer pause, unguarded like [`Self::do_transfer_pause`].
    pub fn do_transfer_unpause(sender: &H160) -> Result<(), ServiceError> {
        Self::check_role(&Self::PAUSER_ROLES, sender)?;

        TransferPause::<T>::put(false);
        log::info!(target: LOG_TARGET, "transfer pause cleared by {sender:?}");
        Self::deposit_event(Event::TransferUnpaused { account: *sender });
        Ok(())
    }
}
