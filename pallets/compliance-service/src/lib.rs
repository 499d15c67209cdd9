//! # Compliance Service Pallet
//!
//! Permission model and transfer policy for a regulated token. The pallet owns four stores:
//!
//! - a role registry mapping 32-byte role tags to member addresses and to an admin role,
//! - the KYC wallet registry, an enumerable set of approved addresses,
//! - the global pause switch, blocking every state-changing flow,
//! - the transfer pause switch, blocking peer-to-peer transfers only.
//!
//! Token logic lives elsewhere and asks this pallet for a verdict through
//! [`traits::ComplianceValidator`] before it moves balances. Administrative calls are
//! authorized through role membership and revert with the messages rendered by
//! [`ServiceError`].

#![cfg_attr(not(feature = "std"), no_std)]
// `Config::RuntimeEvent` is deprecated upstream but runtimes on older releases still wire it
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, pallet_prelude::*, traits::EnsureOrigin};
use frame_system::pallet_prelude::*;
use sp_core::H160;
use sp_std::prelude::*;

pub use pallet::*;
pub use primitives::*;
pub use weights::WeightInfo;

pub mod abi;
pub mod migrations;
mod pause;
mod policy;
pub mod primitives;
mod roles;
pub mod traits;
mod wallets;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub(crate) const LOG_TARGET: &str = "compliance-service";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        /// Resolves the calling principal's 20-byte address from an origin.
        type PrincipalOrigin: EnsureOrigin<Self::RuntimeOrigin, Success = H160>;
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Role membership: (role, account) -> member
    #[pallet::storage]
    pub type RoleMembers<T> =
        StorageDoubleMap<_, Blake2_128Concat, RoleId, Blake2_128Concat, H160, bool, ValueQuery>;

    /// Admin role of each role. Unset entries read as the root role.
    #[pallet::storage]
    pub type RoleAdmins<T> = StorageMap<_, Blake2_128Concat, RoleId, RoleId, ValueQuery>;

    /// Dense array of registered wallets, indices `0..WalletCount`.
    #[pallet::storage]
    pub type Wallets<T> = StorageMap<_, Twox64Concat, u32, H160, OptionQuery>;

    /// 1-based position of a wallet in [`Wallets`]; 0 means absent.
    #[pallet::storage]
    pub type WalletSlots<T> = StorageMap<_, Blake2_128Concat, H160, u32, ValueQuery>;

    /// Number of registered wallets
    #[pallet::storage]
    pub type WalletCount<T> = StorageValue<_, u32, ValueQuery>;

    /// Global pause: blocks transfers, issuance, redemption, editing and upgrades
    #[pallet::storage]
    pub type GlobalPause<T> = StorageValue<_, bool, ValueQuery>;

    /// Transfer pause: blocks peer-to-peer transfers only
    #[pallet::storage]
    pub type TransferPause<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event {
        /// `account` was granted `role`; `sender` authorized the grant
        RoleGranted { role: RoleId, account: H160, sender: H160 },
        /// `account` lost `role`; `sender` is the revoking admin or the renouncing account
        RoleRevoked { role: RoleId, account: H160, sender: H160 },
        /// Admin role of `role` replaced (emitted even when unchanged)
        RoleAdminChanged { role: RoleId, previous_admin_role: RoleId, new_admin_role: RoleId },
        /// Global pause set
        Paused { account: H160 },
        /// Global pause cleared
        Unpaused { account: H160 },
        /// Transfer pause set
        TransferPaused { account: H160 },
        /// Transfer pause cleared
        TransferUnpaused { account: H160 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller holds none of the roles that authorize the call.
        MissingRole,
        /// Roles can only be renounced by their holder.
        OnlySelfRenounce,
        /// Global pause is already set.
        EnforcedPause,
        /// Global pause is not set.
        ExpectedPause,
        /// Caller may not edit the wallet registry.
        Unauthorized,
        /// Wallet index past the end of the registry.
        WalletIndexOutOfBounds,
        /// Wallet registry is full.
        Overflow,
    }

    impl<T> From<ServiceError> for Error<T> {
        fn from(err: ServiceError) -> Self {
            match err {
                ServiceError::MissingRole { .. } => Error::<T>::MissingRole,
                ServiceError::OnlySelfRenounce => Error::<T>::OnlySelfRenounce,
                ServiceError::EnforcedPause => Error::<T>::EnforcedPause,
                ServiceError::ExpectedPause => Error::<T>::ExpectedPause,
                ServiceError::Unauthorized => Error::<T>::Unauthorized,
                ServiceError::WalletIndexOutOfBounds { .. } => Error::<T>::WalletIndexOutOfBounds,
                ServiceError::Overflow => Error::<T>::Overflow,
            }
        }
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Grant `role` to `account`. Caller must hold `role` or its admin role.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::grant_role())]
        pub fn grant_role(origin: OriginFor<T>, role: RoleId, account: H160) -> DispatchResult {
            let sender = T::PrincipalOrigin::ensure_origin(origin)?;
            Self::do_grant_role(&sender, role, account).map_err(Self::revert)
        }

        /// Revoke `role` from `account`. Same authorization as [`Self::grant_role`].
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::revoke_role())]
        pub fn revoke_role(origin: OriginFor<T>, role: RoleId, account: H160) -> DispatchResult {
            let sender = T::PrincipalOrigin::ensure_origin(origin)?;
            Self::do_revoke_role(&sender, role, account).map_err(Self::revert)
        }

        /// Drop `role` from the caller. `account` must be the caller.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::renounce_role())]
        pub fn renounce_role(origin: OriginFor<T>, role: RoleId, account: H160) -> DispatchResult {
            let sender = T::PrincipalOrigin::ensure_origin(origin)?;
            Self::do_renounce_role(&sender, role, account).map_err(Self::revert)
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::set_role_admin())]
        pub fn set_role_admin(
            origin: OriginFor<T>,
            role: RoleId,
            admin_role: RoleId,
        ) -> DispatchResult {
            let sender = T::PrincipalOrigin::ensure_origin(origin)?;
            Self::do_set_role_admin(&sender, role, admin_role).map_err(Self::revert)
        }

        /// Bootstrap grant without an admin-of-role check.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::setup_role())]
        pub fn setup_role(origin: OriginFor<T>, role: RoleId, account: H160) -> DispatchResult {
            let sender = T::PrincipalOrigin::ensure_origin(origin)?;
            Self::do_setup_role(&sender, role, account).map_err(Self::revert)
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::register_wallet())]
        pub fn register_wallet(origin: OriginFor<T>, account: H160) -> DispatchResult {
            let sender = T::PrincipalOrigin::ensure_origin(origin)?;
            Self::do_register_wallet(&sender, account).map_err(Self::revert)
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::renounce_wallet())]
        pub fn renounce_wallet(origin: OriginFor<T>, account: H160) -> DispatchResult {
            let sender = T::PrincipalOrigin::ensure_origin(origin)?;
            Self::do_renounce_wallet(&sender, account).map_err(Self::revert)
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let sender = T::PrincipalOrigin::ensure_origin(origin)?;
            Self::do_pause(&sender).map_err(Self::revert)
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let sender = T::PrincipalOrigin::ensure_origin(origin)?;
            Self::do_unpause(&sender).map_err(Self::revert)
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::transfer_pause())]
        pub fn transfer_pause(origin: OriginFor<T>) -> DispatchResult {
            let sender = T::PrincipalOrigin::ensure_origin(origin)?;
            Self::do_transfer_pause(&sender).map_err(Self::revert)
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::transfer_unpause())]
        pub fn transfer_unpause(origin: OriginFor<T>) -> DispatchResult {
            let sender = T::PrincipalOrigin::ensure_origin(origin)?;
            Self::do_transfer_unpause(&sender).map_err(Self::revert)
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Deploying account, granted the root role
        pub deployer: Option<H160>,
        /// Additional role grants (role, account)
        pub roles: Vec<(RoleId, H160)>,
        /// Admin relations (role, admin role) other than the root default
        pub role_admins: Vec<(RoleId, RoleId)>,
        /// Wallets registered at genesis, in index order
        pub wallets: Vec<H160>,
        /// Start with the global pause set
        pub paused: bool,
        /// Start with the transfer pause set
        pub transfer_paused: bool,
        #[serde(skip)]
        pub _config: sp_std::marker::PhantomData<T>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            RoleAdmins::<T>::insert(DEFAULT_ADMIN_ROLE, DEFAULT_ADMIN_ROLE);

            if let Some(deployer) = self.deployer {
                RoleMembers::<T>::insert(DEFAULT_ADMIN_ROLE, deployer, true);
            }

            for (role, account) in &self.roles {
                RoleMembers::<T>::insert(role, account, true);
            }

            for (role, admin_role) in &self.role_admins {
                RoleAdmins::<T>::insert(role, admin_role);
            }

            for wallet in &self.wallets {
                Pallet::<T>::insert_wallet(*wallet).expect("Genesis wallet list overflows u32");
            }

            GlobalPause::<T>::put(self.paused);
            TransferPause::<T>::put(self.transfer_paused);
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Log the revert reason and turn it into the pallet error.
    fn revert(err: ServiceError) -> DispatchError {
        log::debug!(target: LOG_TARGET, "call reverted: {err}");
        Error::<T>::from(err).into()
    }
}
