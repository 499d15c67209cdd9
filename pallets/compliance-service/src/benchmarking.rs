//! Benchmarking setup for pallet-compliance-service

use super::*;

#[allow(unused)]
use crate::Pallet as Compliance;
use frame_benchmarking::v2::*;

/// Origin accepted by `PrincipalOrigin`, with its address granted `roles`.
fn authorized_origin<T: Config>(roles: &[RoleId]) -> (T::RuntimeOrigin, H160) {
    let origin = T::PrincipalOrigin::try_successful_origin().expect("Principal origin");
    let caller = T::PrincipalOrigin::ensure_origin(origin.clone()).expect("Origin resolves");
    for role in roles {
        RoleMembers::<T>::insert(role, caller, true);
    }
    (origin, caller)
}

fn wallet(index: u32) -> H160 {
    H160::from_low_u64_be(0x1000 + index as u64)
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn grant_role() {
        let (origin, _) = authorized_origin::<T>(&[DEFAULT_ADMIN_ROLE]);
        let account = wallet(0);

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, ST_EDIT_ROLE, account);

        assert!(Compliance::<T>::has_role(ST_EDIT_ROLE, &account));
    }

    #[benchmark]
    fn revoke_role() {
        let (origin, _) = authorized_origin::<T>(&[DEFAULT_ADMIN_ROLE]);
        let account = wallet(0);
        RoleMembers::<T>::insert(ST_EDIT_ROLE, account, true);

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, ST_EDIT_ROLE, account);

        assert!(!Compliance::<T>::has_role(ST_EDIT_ROLE, &account));
    }

    #[benchmark]
    fn renounce_role() {
        let (origin, caller) = authorized_origin::<T>(&[ST_EDIT_ROLE]);

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, ST_EDIT_ROLE, caller);

        assert!(!Compliance::<T>::has_role(ST_EDIT_ROLE, &caller));
    }

    #[benchmark]
    fn set_role_admin() {
        let (origin, _) = authorized_origin::<T>(&[DEFAULT_ADMIN_ROLE]);

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, ST_UPGRADE_ROLE, ST_CONTROL_ROLE);

        assert_eq!(Compliance::<T>::get_role_admin(ST_UPGRADE_ROLE), ST_CONTROL_ROLE);
    }

    #[benchmark]
    fn setup_role() {
        let (origin, _) = authorized_origin::<T>(&[ST_EDIT_ROLE]);
        let account = wallet(0);

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, ST_UPGRADE_ROLE, account);

        assert!(Compliance::<T>::has_role(ST_UPGRADE_ROLE, &account));
    }

    #[benchmark]
    fn register_wallet() {
        let (origin, _) = authorized_origin::<T>(&[ST_EDIT_ROLE]);
        for index in 0..100 {
            Compliance::<T>::insert_wallet(wallet(index)).expect("Room for wallets");
        }
        let account = wallet(100);

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, account);

        assert!(Compliance::<T>::contains_wallet(&account));
    }

    #[benchmark]
    fn renounce_wallet() {
        let (origin, _) = authorized_origin::<T>(&[ST_EDIT_ROLE]);
        for index in 0..100 {
            Compliance::<T>::insert_wallet(wallet(index)).expect("Room for wallets");
        }
        // Removing the head moves the tail
        let account = wallet(0);

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, account);

        assert!(!Compliance::<T>::contains_wallet(&account));
        assert_eq!(Compliance::<T>::get_wallet(0), Ok(wallet(99)));
    }

    #[benchmark]
    fn pause() {
        let (origin, _) = authorized_origin::<T>(&[ST_CONTROL_ROLE]);

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin);

        assert!(Compliance::<T>::paused());
    }

    #[benchmark]
    fn unpause() {
        let (origin, _) = authorized_origin::<T>(&[ST_CONTROL_ROLE]);
        GlobalPause::<T>::put(true);

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin);

        assert!(!Compliance::<T>::paused());
    }

    #[benchmark]
    fn transfer_pause() {
        let (origin, _) = authorized_origin::<T>(&[ST_CONTROL_ROLE]);

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin);

        assert!(Compliance::<T>::transfer_paused());
    }

    #[benchmark]
    fn transfer_unpause() {
        let (origin, _) = authorized_origin::<T>(&[ST_CONTROL_ROLE]);
        TransferPause::<T>::put(true);

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin);

        assert!(!Compliance::<T>::transfer_paused());
    }

    impl_benchmark_test_suite!(Compliance, crate::mock::new_test_ext(), crate::mock::Test);
}
