//! Storage migrations for pallet-compliance-service.
//!
//! Each migration checks the on-chain storage version first, so it runs exactly once
//! and is safe to leave in a runtime's migration tuple. Wire them into `Executive`:
//!
//! ```ignore
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     pallet_compliance_service::migrations::v1::MigrateToV1<Runtime>,
//! >;
//! ```

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{Config, Pallet, RoleAdmins, DEFAULT_ADMIN_ROLE, LOG_TARGET};

/// Version 1: initial layout.
///
/// Stamps the storage version and records the root role as its own admin, which a
/// chain that added the pallet without running genesis lacks.
pub mod v1 {
    use super::*;

    pub struct MigrateToV1<T>(PhantomData<T>);

    impl<T: Config> OnRuntimeUpgrade for MigrateToV1<T> {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version < 1 {
                log::info!(target: LOG_TARGET, "Running migration v0 → v1");

                RoleAdmins::<T>::insert(DEFAULT_ADMIN_ROLE, DEFAULT_ADMIN_ROLE);
                StorageVersion::new(1).put::<Pallet<T>>();

                // 1 read (version) + 2 writes (root admin, version)
                T::DbWeight::get().reads_writes(1, 2)
            } else {
                log::info!(
                    target: LOG_TARGET,
                    "Storage already at v{on_chain_version:?}, skipping v1 migration"
                );
                T::DbWeight::get().reads(1)
            }
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();
            log::info!(
                target: LOG_TARGET,
                "Pre-upgrade: on-chain storage version is {:?}",
                on_chain_version
            );
            Ok(on_chain_version.encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let pre_version: u16 = Decode::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;
            let post_version = Pallet::<T>::on_chain_storage_version();

            if pre_version < 1 {
                frame_support::ensure!(
                    post_version >= 1,
                    sp_runtime::TryRuntimeError::Other("Migration to v1 did not complete")
                );
            }
            Pallet::<T>::do_try_state()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{new_test_ext, Test};
    use frame_support::traits::StorageVersion;

    #[test]
    fn migration_v1_from_v0_works() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(0).put::<Pallet<Test>>();
            RoleAdmins::<Test>::remove(DEFAULT_ADMIN_ROLE);
            assert!(!RoleAdmins::<Test>::contains_key(DEFAULT_ADMIN_ROLE));

            let _weight = v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
            assert!(RoleAdmins::<Test>::contains_key(DEFAULT_ADMIN_ROLE));
            assert_eq!(Pallet::<Test>::get_role_admin(DEFAULT_ADMIN_ROLE), DEFAULT_ADMIN_ROLE);
        });
    }

    /// Running twice leaves the version at 1.
    #[test]
    fn migration_v1_idempotent() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(0).put::<Pallet<Test>>();

            v1::MigrateToV1::<Test>::on_runtime_upgrade();
            v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
        });
    }

    #[test]
    fn migration_v1_skipped_on_higher_version() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(5).put::<Pallet<Test>>();
            RoleAdmins::<Test>::remove(DEFAULT_ADMIN_ROLE);

            v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 5);
            assert!(!RoleAdmins::<Test>::contains_key(DEFAULT_ADMIN_ROLE));
        });
    }
}
