//! Value types shared by the role registry, wallet registry and policy engine.

use codec::{Decode, Encode, MaxEncodedLen};
use core::fmt;
use scale_info::TypeInfo;
use sp_core::{H160, H256};
use sp_runtime::RuntimeDebug;

/// 32-byte role tag. Named roles are `keccak256` of their ASCII name.
pub type RoleId = H256;

/// Root role. Administers every role whose admin was never changed, itself included.
pub const DEFAULT_ADMIN_ROLE: RoleId = H256([0u8; 32]);

/// `keccak256("ST_EDIT_ROLE")`
#[rustfmt::skip]
pub const ST_EDIT_ROLE: RoleId = H256([
    0x02, 0x5c, 0x10, 0xff, 0xb4, 0xb4, 0xf9, 0x77,
    0xa8, 0x89, 0x9d, 0xa5, 0x4e, 0x53, 0x27, 0x8b,
    0xc5, 0x28, 0x63, 0xe8, 0x06, 0x45, 0xc6, 0xb1,
    0xf1, 0xee, 0x50, 0x85, 0xab, 0x00, 0x69, 0xbc,
]);

/// `keccak256("ST_CONTROL_ROLE")`
#[rustfmt::skip]
pub const ST_CONTROL_ROLE: RoleId = H256([
    0xb6, 0xce, 0x5d, 0x7b, 0x1a, 0xbd, 0x7b, 0x8d,
    0xb1, 0x9b, 0xd2, 0x68, 0xa0, 0x63, 0x56, 0xfe,
    0x34, 0x3d, 0x6a, 0x81, 0xac, 0xa7, 0xf8, 0x64,
    0x55, 0x28, 0x9d, 0x12, 0xae, 0xcb, 0xdc, 0xda,
]);

/// `keccak256("ST_UPGRADE_ROLE")`
#[rustfmt::skip]
pub const ST_UPGRADE_ROLE: RoleId = H256([
    0x45, 0xab, 0x91, 0xc2, 0x90, 0x56, 0x4b, 0xe6,
    0x49, 0x50, 0xf5, 0x1c, 0xe1, 0xd4, 0xf7, 0x00,
    0xff, 0x1f, 0x5b, 0x9f, 0x8e, 0x0c, 0xff, 0x8b,
    0x3f, 0x73, 0xe0, 0x58, 0xb4, 0xd9, 0x25, 0xd4,
]);

/// Why a policy check refused an operation.
#[derive(Encode, Decode, Clone, Copy, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub enum Rejection {
    /// Principal is neither in the wallet registry nor holds the required role.
    NoKyc,
    /// Global pause is set.
    Paused,
    /// Transfer pause is set.
    TransferPaused,
}

impl Rejection {
    /// Reason tag handed back to the token contract.
    pub const fn reason(&self) -> &'static str {
        match self {
            Rejection::NoKyc => "no kyc",
            Rejection::Paused => "paused",
            Rejection::TransferPaused => "transfer paused",
        }
    }
}

/// Outcome of a `validate_*` query.
#[derive(Encode, Decode, Clone, Copy, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub enum Decision {
    Allowed,
    Rejected(Rejection),
}

impl Decision {
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }

    /// Empty for an allowed operation, otherwise the rejection tag.
    pub const fn reason(&self) -> &'static str {
        match self {
            Decision::Allowed => "",
            Decision::Rejected(rejection) => rejection.reason(),
        }
    }

    /// `(ok, reason)` as returned by the `validate*` entry points.
    pub const fn into_parts(self) -> (bool, &'static str) {
        (self.is_allowed(), self.reason())
    }
}

impl From<Result<(), Rejection>> for Decision {
    fn from(result: Result<(), Rejection>) -> Self {
        match result {
            Ok(()) => Decision::Allowed,
            Err(rejection) => Decision::Rejected(rejection),
        }
    }
}

/// Revert reason of an administrative call.
///
/// `Display` renders the exact message callers match on.
#[derive(Clone, PartialEq, Eq, RuntimeDebug)]
pub enum ServiceError {
    MissingRole { account: H160, role: RoleId },
    OnlySelfRenounce,
    EnforcedPause,
    ExpectedPause,
    Unauthorized,
    WalletIndexOutOfBounds { index: u32, length: u32 },
    Overflow,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::MissingRole { account, role } => {
                write!(f, "AccessControl: account {account:#x} is missing role {role:#x}")
            }
            ServiceError::OnlySelfRenounce => {
                f.write_str("AccessControl: can only renounce roles for self")
            }
            ServiceError::EnforcedPause => f.write_str("Pausable: paused"),
            ServiceError::ExpectedPause => f.write_str("Pausable: not paused"),
            ServiceError::Unauthorized => f.write_str("unauthorized"),
            ServiceError::WalletIndexOutOfBounds { index, length } => {
                write!(f, "EnumerableSet: index {index} out of bounds (length {length})")
            }
            ServiceError::Overflow => f.write_str("EnumerableSet: wallet count overflow"),
        }
    }
}
