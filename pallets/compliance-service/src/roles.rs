//! Role registry.
//!
//! A role's admin role authorizes changes to its membership, and so does the role
//! itself: any holder of a role may grant or revoke that same role.

use super::*;

impl<T: Config> Pallet<T> {
    pub fn has_role(role: RoleId, account: &H160) -> bool {
        RoleMembers::<T>::get(role, account)
    }

    pub fn get_role_admin(role: RoleId) -> RoleId {
        RoleAdmins::<T>::get(role)
    }

    /// Passes when `account` holds any of `roles`. The revert names the first role.
    pub fn check_role(roles: &[RoleId], account: &H160) -> Result<(), ServiceError> {
        if roles.iter().any(|role| Self::has_role(*role, account)) {
            return Ok(());
        }
        Err(ServiceError::MissingRole {
            account: *account,
            role: roles.first().copied().unwrap_or(DEFAULT_ADMIN_ROLE),
        })
    }

    pub fn do_grant_role(sender: &H160, role: RoleId, account: H160) -> Result<(), ServiceError> {
        Self::check_role(&[Self::get_role_admin(role), role], sender)?;
        Self::grant(role, account, sender);
        Ok(())
    }

    pub fn do_revoke_role(sender: &H160, role: RoleId, account: H160) -> Result<(), ServiceError> {
        Self::check_role(&[Self::get_role_admin(role), role], sender)?;
        Self::revoke(role, account, sender);
        Ok(())
    }

    pub fn do_renounce_role(
        sender: &H160,
        role: RoleId,
        account: H160,
    ) -> Result<(), ServiceError> {
        ensure!(account == *sender, ServiceError::OnlySelfRenounce);
        Self::revoke(role, account, sender);
        Ok(())
    }

    pub fn do_set_role_admin(
        sender: &H160,
        role: RoleId,
        admin_role: RoleId,
    ) -> Result<(), ServiceError> {
        let previous_admin_role = Self::get_role_admin(role);
        Self::check_role(&[previous_admin_role], sender)?;

        RoleAdmins::<T>::insert(role, admin_role);
        Self::deposit_event(Event::RoleAdminChanged {
            role,
            previous_admin_role,
            new_admin_role: admin_role,
        });
        Ok(())
    }

    /// Bootstrap grant: holders of root or the editing role may grant any role, whoever
    /// administers it.
    pub fn do_setup_role(sender: &H160, role: RoleId, account: H160) -> Result<(), ServiceError> {
        Self::check_role(&[DEFAULT_ADMIN_ROLE, ST_EDIT_ROLE], sender)?;
        Self::grant(role, account, sender);
        Ok(())
    }

    // Existing members are left alone and emit nothing.
    fn grant(role: RoleId, account: H160, sender: &H160) {
        if Self::has_role(role, &account) {
            return;
        }
        RoleMembers::<T>::insert(role, account, true);
        Self::deposit_event(Event::RoleGranted { role, account, sender: *sender });
    }

    fn revoke(role: RoleId, account: H160, sender: &H160) {
        if !Self::has_role(role, &account) {
            return;
        }
        RoleMembers::<T>::remove(role, account);
        Self::deposit_event(Event::RoleRevoked { role, account, sender: *sender });
    }
}
