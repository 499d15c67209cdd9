//! Weights for pallet-compliance-service.
//!
//! Hand-estimated from the storage accesses of each call until benchmark output from
//! reference hardware replaces them. Regenerate with
//! `frame-omni-bencher v1 benchmark pallet --pallet pallet_compliance_service`.

#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};
use sp_std::marker::PhantomData;

pub trait WeightInfo {
    fn grant_role() -> Weight;
    fn revoke_role() -> Weight;
    fn renounce_role() -> Weight;
    fn set_role_admin() -> Weight;
    fn setup_role() -> Weight;
    fn register_wallet() -> Weight;
    fn renounce_wallet() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
    fn transfer_pause() -> Weight;
    fn transfer_unpause() -> Weight;
}

/// Weights for pallet-compliance-service using the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // Reads: RoleAdmins, RoleMembers (admin, role, target). Writes: RoleMembers
    fn grant_role() -> Weight {
        Weight::from_parts(14_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn revoke_role() -> Weight {
        Weight::from_parts(14_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    // Reads: RoleMembers. Writes: RoleMembers
    fn renounce_role() -> Weight {
        Weight::from_parts(10_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    // Reads: RoleAdmins, RoleMembers. Writes: RoleAdmins
    fn set_role_admin() -> Weight {
        Weight::from_parts(11_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    // Reads: RoleMembers (root, editor, target). Writes: RoleMembers
    fn setup_role() -> Weight {
        Weight::from_parts(13_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    // Reads: RoleMembers (root, editor), WalletSlots, WalletCount.
    // Writes: Wallets, WalletSlots, WalletCount
    fn register_wallet() -> Weight {
        Weight::from_parts(16_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    // Reads: RoleMembers (root, editor), WalletSlots, WalletCount, Wallets (tail).
    // Writes: Wallets (moved, tail), WalletSlots (removed, moved), WalletCount
    fn renounce_wallet() -> Weight {
        Weight::from_parts(19_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(5))
            .saturating_add(T::DbWeight::get().writes(5))
    }
    // Reads: RoleMembers (root, controller), GlobalPause. Writes: GlobalPause
    fn pause() -> Weight {
        Weight::from_parts(10_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn unpause() -> Weight {
        Weight::from_parts(10_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    // Reads: RoleMembers (root, controller). Writes: TransferPause
    fn transfer_pause() -> Weight {
        Weight::from_parts(9_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn transfer_unpause() -> Weight {
        Weight::from_parts(9_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
}

// For backwards compatibility and tests
impl WeightInfo for () {
    fn grant_role() -> Weight {
        Weight::from_parts(14_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(4))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn revoke_role() -> Weight {
        Weight::from_parts(14_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(4))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn renounce_role() -> Weight {
        Weight::from_parts(10_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn set_role_admin() -> Weight {
        Weight::from_parts(11_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn setup_role() -> Weight {
        Weight::from_parts(13_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(3))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn register_wallet() -> Weight {
        Weight::from_parts(16_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(4))
            .saturating_add(RocksDbWeight::get().writes(3))
    }
    fn renounce_wallet() -> Weight {
        Weight::from_parts(19_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(5))
            .saturating_add(RocksDbWeight::get().writes(5))
    }
    fn pause() -> Weight {
        Weight::from_parts(10_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(3))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn unpause() -> Weight {
        Weight::from_parts(10_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(3))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn transfer_pause() -> Weight {
        Weight::from_parts(9_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn transfer_unpause() -> Weight {
        Weight::from_parts(9_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
}
