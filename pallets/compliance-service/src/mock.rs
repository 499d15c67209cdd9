use crate as pallet_compliance_service;
use frame_support::{
    derive_impl,
    traits::{ConstU32, ConstU64},
};
use sp_core::{H160, H256};
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Compliance: pallet_compliance_service,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

/// Deployer, holds the root role from genesis.
pub const DEPLOYER: u64 = 1;
pub const EDITOR: u64 = 2;
pub const CONTROLLER: u64 = 3;
pub const UPGRADER: u64 = 4;
pub const W1: u64 = 10;
pub const W2: u64 = 11;
pub const W3: u64 = 12;
/// Holds no role and is not registered.
pub const OUTSIDER: u64 = 99;

/// 20-byte address of mock account `n`.
pub fn addr(n: u64) -> H160 {
    H160::from_low_u64_be(n)
}

/// Maps a signed `u64` origin onto its 20-byte address.
pub struct EnsurePrincipal;
impl frame_support::traits::EnsureOrigin<RuntimeOrigin> for EnsurePrincipal {
    type Success = H160;

    fn try_origin(o: RuntimeOrigin) -> Result<Self::Success, RuntimeOrigin> {
        match o.clone().into() {
            Ok(frame_system::RawOrigin::Signed(account)) => Ok(addr(account)),
            _ => Err(o),
        }
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn try_successful_origin() -> Result<RuntimeOrigin, ()> {
        Ok(RuntimeOrigin::signed(DEPLOYER))
    }
}

impl pallet_compliance_service::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type PrincipalOrigin = EnsurePrincipal;
    type WeightInfo = ();
}

/// Genesis with only the deployer holding root.
pub fn new_test_ext() -> sp_io::TestExternalities {
    new_test_ext_with(pallet_compliance_service::GenesisConfig::<Test> {
        deployer: Some(addr(DEPLOYER)),
        ..Default::default()
    })
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext_with(
    genesis: pallet_compliance_service::GenesisConfig<Test>,
) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
    genesis.assimilate_storage(&mut t).unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    // Events are only recorded from block 1 onwards.
    ext.execute_with(|| System::set_block_number(1));
    ext
}

/// Pallet events deposited so far, oldest first.
pub fn compliance_events() -> Vec<pallet_compliance_service::Event> {
    System::events()
        .into_iter()
        .filter_map(|record| match record.event {
            RuntimeEvent::Compliance(event) => Some(event),
            _ => None,
        })
        .collect()
}
