//! KYC wallet registry.
//!
//! An enumerable set over storage: [`Wallets`] is a dense array indexed `0..WalletCount`
//! and [`WalletSlots`] maps each member to its 1-based position, so insert, lookup and
//! removal each touch a constant number of entries. Removal moves the tail element into
//! the vacated position, so indices of other members may change.

use super::*;

impl<T: Config> Pallet<T> {
    pub fn contains_wallet(account: &H160) -> bool {
        WalletSlots::<T>::get(account) != 0
    }

    pub fn count_wallet() -> u32 {
        WalletCount::<T>::get()
    }

    pub fn get_wallet(index: u32) -> Result<H160, ServiceError> {
        let length = WalletCount::<T>::get();
        if index >= length {
            return Err(ServiceError::WalletIndexOutOfBounds { index, length });
        }
        Wallets::<T>::get(index).ok_or(ServiceError::WalletIndexOutOfBounds { index, length })
    }

    /// All registered wallets in index order.
    pub fn wallets() -> Vec<H160> {
        (0..WalletCount::<T>::get()).filter_map(|index| Wallets::<T>::get(index)).collect()
    }

    pub fn do_register_wallet(sender: &H160, account: H160) -> Result<(), ServiceError> {
        Self::ensure_wallet_operator(sender)?;
        if Self::insert_wallet(account)? {
            log::debug!(target: LOG_TARGET, "wallet {account:?} registered by {sender:?}");
        }
        Ok(())
    }

    pub fn do_renounce_wallet(sender: &H160, account: H160) -> Result<(), ServiceError> {
        Self::ensure_wallet_operator(sender)?;
        if Self::remove_wallet(&account) {
            log::debug!(target: LOG_TARGET, "wallet {account:?} removed by {sender:?}");
        }
        Ok(())
    }

    fn ensure_wallet_operator(sender: &H160) -> Result<(), ServiceError> {
        ensure!(
            Self::has_role(DEFAULT_ADMIN_ROLE, sender) || Self::has_role(ST_EDIT_ROLE, sender),
            ServiceError::Unauthorized
        );
        Ok(())
    }

    /// Appends `account`. Returns `false` if it was already a member.
    pub(crate) fn insert_wallet(account: H160) -> Result<bool, ServiceError> {
        if Self::contains_wallet(&account) {
            return Ok(false);
        }
        let length = WalletCount::<T>::get();
        let new_length = length.checked_add(1).ok_or(ServiceError::Overflow)?;

        Wallets::<T>::insert(length, account);
        WalletSlots::<T>::insert(account, new_length);
        WalletCount::<T>::put(new_length);
        Ok(true)
    }

    /// Swap-removes `account`. Returns `false` if it was not a member.
    pub(crate) fn remove_wallet(account: &H160) -> bool {
        let slot = WalletSlots::<T>::take(account);
        if slot == 0 {
            return false;
        }
        let index = slot - 1;
        // Non-zero slot implies a non-empty set.
        let last = WalletCount::<T>::get().saturating_sub(1);

        if index != last {
            if let Some(moved) = Wallets::<T>::get(last) {
                Wallets::<T>::insert(index, moved);
                WalletSlots::<T>::insert(moved, slot);
            }
        }
        Wallets::<T>::remove(last);
        WalletCount::<T>::put(last);
        true
    }

    /// Checks that the dense array, the slot map and the counter describe the same set,
    /// and that the root role administers itself.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        let length = WalletCount::<T>::get();

        for index in 0..length {
            let wallet = Wallets::<T>::get(index)
                .ok_or(sp_runtime::TryRuntimeError::Other("hole in wallet array"))?;
            ensure!(
                WalletSlots::<T>::get(wallet) == index + 1,
                sp_runtime::TryRuntimeError::Other("wallet slot does not match array index")
            );
        }
        ensure!(
            Wallets::<T>::iter_keys().all(|index| index < length),
            sp_runtime::TryRuntimeError::Other("wallet stored past the end of the array")
        );
        ensure!(
            WalletSlots::<T>::iter_keys().count() as u32 == length,
            sp_runtime::TryRuntimeError::Other("slot map size differs from wallet count")
        );
        ensure!(
            Self::get_role_admin(DEFAULT_ADMIN_ROLE) == DEFAULT_ADMIN_ROLE,
            sp_runtime::TryRuntimeError::Other("root role must administer itself")
        );
        Ok(())
    }
}
