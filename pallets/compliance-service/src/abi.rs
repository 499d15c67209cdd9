//! Contract-compatible identifiers: call selectors, event topics and interface ids.
//!
//! These reproduce the values a Solidity deployment of the service exposes, so that
//! off-chain tooling written against the contract ABI can address this pallet.

use crate::{primitives::RoleId, Event};
use sp_core::H256;

/// 4-byte call selector.
pub type Selector = [u8; 4];

/// Leading four bytes of `keccak256(signature)`.
pub fn selector(signature: &str) -> Selector {
    let hash = sp_io::hashing::keccak_256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Role tag of a named role: `keccak256(name)`.
pub fn role_id(name: &str) -> RoleId {
    H256(sp_io::hashing::keccak_256(name.as_bytes()))
}

/// Canonical signature and selector of every entry point.
pub const SELECTORS: &[(&str, Selector)] = &[
    ("DEFAULT_ADMIN_ROLE()", [0xa2, 0x17, 0xfd, 0xdf]),
    ("ST_EDIT_ROLE()", [0x42, 0xc5, 0x9e, 0xa1]),
    ("ST_CONTROL_ROLE()", [0x7a, 0xd2, 0x60, 0xd5]),
    ("ST_UPGRADE_ROLE()", [0x9e, 0x29, 0xd1, 0x1c]),
    ("getRoleAdmin(bytes32)", [0x24, 0x8a, 0x9c, 0xa3]),
    ("hasRole(bytes32,address)", [0x91, 0xd1, 0x48, 0x54]),
    ("grantRole(bytes32,address)", [0x2f, 0x2f, 0xf1, 0x5d]),
    ("revokeRole(bytes32,address)", [0xd5, 0x47, 0x74, 0x1f]),
    ("renounceRole(bytes32,address)", [0x36, 0x56, 0x8a, 0xbe]),
    ("setRoleAdmin(bytes32,bytes32)", [0x1e, 0x4e, 0x00, 0x91]),
    ("setupRole(bytes32,address)", [0xfa, 0x82, 0xac, 0x76]),
    ("containsWallet(address)", [0x22, 0xc3, 0x73, 0xe8]),
    ("countWallet()", [0x9a, 0x12, 0x6a, 0x36]),
    ("getWallet(uint256)", [0x54, 0x70, 0xb1, 0x3b]),
    ("registerWallet(address)", [0x77, 0x9b, 0xee, 0xdf]),
    ("renounceWallet(address)", [0x85, 0x14, 0x16, 0xf1]),
    ("paused()", [0x5c, 0x97, 0x5a, 0xbb]),
    ("pause()", [0x84, 0x56, 0xcb, 0x59]),
    ("unpause()", [0x3f, 0x4b, 0xa8, 0x3a]),
    ("transferPaused()", [0xfb, 0x2c, 0xb3, 0x4e]),
    ("transferPause()", [0x0e, 0x0a, 0xb6, 0x54]),
    ("transferUnpause()", [0xe9, 0x3a, 0x10, 0x12]),
    ("hasRedemptionPermission(address)", [0x6e, 0x8e, 0x4b, 0xb4]),
    ("hasTransferPermission(address)", [0xbd, 0x7a, 0x82, 0xed]),
    ("validateEditing(address)", [0x9d, 0xea, 0x93, 0xa9]),
    ("validateIssuance(address,address,uint256)", [0x45, 0x4d, 0x69, 0x83]),
    ("validateRedemption(address,uint256,string)", [0x7c, 0x41, 0x61, 0x5f]),
    ("validateTransfer(address,address,uint256)", [0xc6, 0x94, 0x6a, 0x12]),
    ("validateUpdating(address,address,uint16)", [0x2b, 0x26, 0x88, 0x13]),
    ("supportsInterface(bytes4)", [0x01, 0xff, 0xc9, 0xa7]),
];

/// Signature for a selector, if it names an entry point.
pub fn signature_of(selector: Selector) -> Option<&'static str> {
    SELECTORS.iter().find(|(_, known)| *known == selector).map(|(signature, _)| *signature)
}

pub mod topics {
    use super::*;

    /// `RoleGranted(bytes32,address,address)`
    #[rustfmt::skip]
    pub const ROLE_GRANTED: H256 = H256([
        0x2f, 0x87, 0x88, 0x11, 0x7e, 0x7e, 0xff, 0x1d,
        0x82, 0xe9, 0x26, 0xec, 0x79, 0x49, 0x01, 0xd1,
        0x7c, 0x78, 0x02, 0x4a, 0x50, 0x27, 0x09, 0x40,
        0x30, 0x45, 0x40, 0xa7, 0x33, 0x65, 0x6f, 0x0d,
    ]);
    /// `RoleRevoked(bytes32,address,address)`
    #[rustfmt::skip]
    pub const ROLE_REVOKED: H256 = H256([
        0xf6, 0x39, 0x1f, 0x5c, 0x32, 0xd9, 0xc6, 0x9d,
        0x2a, 0x47, 0xea, 0x67, 0x0b, 0x44, 0x29, 0x74,
        0xb5, 0x39, 0x35, 0xd1, 0xed, 0xc7, 0xfd, 0x64,
        0xeb, 0x21, 0xe0, 0x47, 0xa8, 0x39, 0x17, 0x1b,
    ]);
    /// `RoleAdminChanged(bytes32,bytes32,bytes32)`
    #[rustfmt::skip]
    pub const ROLE_ADMIN_CHANGED: H256 = H256([
        0xbd, 0x79, 0xb8, 0x6f, 0xfe, 0x0a, 0xb8, 0xe8,
        0x77, 0x61, 0x51, 0x51, 0x42, 0x17, 0xcd, 0x7c,
        0xac, 0xd5, 0x2c, 0x90, 0x9f, 0x66, 0x47, 0x5c,
        0x3a, 0xf4, 0x4e, 0x12, 0x9f, 0x0b, 0x00, 0xff,
    ]);
    /// `Paused(address)`
    #[rustfmt::skip]
    pub const PAUSED: H256 = H256([
        0x62, 0xe7, 0x8c, 0xea, 0x01, 0xbe, 0xe3, 0x20,
        0xcd, 0x4e, 0x42, 0x02, 0x70, 0xb5, 0xea, 0x74,
        0x00, 0x0d, 0x11, 0xb0, 0xc9, 0xf7, 0x47, 0x54,
        0xeb, 0xdb, 0xfc, 0x54, 0x4b, 0x05, 0xa2, 0x58,
    ]);
    /// `Unpaused(address)`
    #[rustfmt::skip]
    pub const UNPAUSED: H256 = H256([
        0x5d, 0xb9, 0xee, 0x0a, 0x49, 0x5b, 0xf2, 0xe6,
        0xff, 0x9c, 0x91, 0xa7, 0x83, 0x4c, 0x1b, 0xa4,
        0xfd, 0xd2, 0x44, 0xa5, 0xe8, 0xaa, 0x4e, 0x53,
        0x7b, 0xd3, 0x8a, 0xea, 0xe4, 0xb0, 0x73, 0xaa,
    ]);
    /// `TransferPaused(address)`
    #[rustfmt::skip]
    pub const TRANSFER_PAUSED: H256 = H256([
        0x48, 0x3d, 0x42, 0xb2, 0xec, 0x35, 0x5e, 0xef,
        0xc3, 0x05, 0x08, 0x02, 0x0d, 0x12, 0x3d, 0xe3,
        0xc2, 0xfc, 0xa2, 0xf0, 0xd6, 0xf8, 0xe7, 0x51,
        0xf9, 0x84, 0x49, 0x09, 0x92, 0x42, 0xb7, 0x6b,
    ]);
    /// `TransferUnpaused(address)`
    #[rustfmt::skip]
    pub const TRANSFER_UNPAUSED: H256 = H256([
        0x27, 0xb7, 0x79, 0x56, 0x34, 0x80, 0x87, 0x9c,
        0x8e, 0x28, 0x72, 0x99, 0x98, 0x40, 0xb7, 0x21,
        0x53, 0x7e, 0xb0, 0x9d, 0xcc, 0xf9, 0x41, 0x15,
        0xa2, 0x27, 0x6c, 0xa3, 0x41, 0xcd, 0xbb, 0x52,
    ]);
}

impl Event {
    /// Log topic the contract emits for this event.
    pub fn topic(&self) -> H256 {
        match self {
            Event::RoleGranted { .. } => topics::ROLE_GRANTED,
            Event::RoleRevoked { .. } => topics::ROLE_REVOKED,
            Event::RoleAdminChanged { .. } => topics::ROLE_ADMIN_CHANGED,
            Event::Paused { .. } => topics::PAUSED,
            Event::Unpaused { .. } => topics::UNPAUSED,
            Event::TransferPaused { .. } => topics::TRANSFER_PAUSED,
            Event::TransferUnpaused { .. } => topics::TRANSFER_UNPAUSED,
        }
    }
}

/// ERC-165 id of the interface-discovery interface.
pub const ERC165_INTERFACE_ID: Selector = [0x01, 0xff, 0xc9, 0xa7];

/// ERC-165 id of the access-control interface: XOR of the `hasRole`, `getRoleAdmin`,
/// `grantRole`, `revokeRole` and `renounceRole` selectors.
pub const ACCESS_CONTROL_INTERFACE_ID: Selector = [0x79, 0x65, 0xdb, 0x0b];

pub fn supports_interface(interface_id: Selector) -> bool {
    interface_id == ACCESS_CONTROL_INTERFACE_ID || interface_id == ERC165_INTERFACE_ID
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::*;
    use sp_core::H160;

    #[test]
    fn selector_table_matches_signature_hashes() {
        for (signature, expected) in SELECTORS {
            assert_eq!(selector(signature), *expected, "selector of {signature}");
        }
    }

    #[test]
    fn selectors_are_unique() {
        for (i, (_, a)) in SELECTORS.iter().enumerate() {
            for (_, b) in &SELECTORS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn signature_lookup() {
        assert_eq!(
            signature_of([0xc6, 0x94, 0x6a, 0x12]),
            Some("validateTransfer(address,address,uint256)")
        );
        assert_eq!(signature_of([0xde, 0xad, 0xbe, 0xef]), None);
    }

    #[test]
    fn named_role_ids() {
        assert_eq!(role_id("ST_EDIT_ROLE"), ST_EDIT_ROLE);
        assert_eq!(role_id("ST_CONTROL_ROLE"), ST_CONTROL_ROLE);
        assert_eq!(role_id("ST_UPGRADE_ROLE"), ST_UPGRADE_ROLE);
    }

    #[test]
    fn event_topics_match_signature_hashes() {
        let account = H160::repeat_byte(7);
        let cases = [
            (
                Event::RoleGranted { role: ST_EDIT_ROLE, account, sender: account },
                "RoleGranted(bytes32,address,address)",
            ),
            (
                Event::RoleRevoked { role: ST_EDIT_ROLE, account, sender: account },
                "RoleRevoked(bytes32,address,address)",
            ),
            (
                Event::RoleAdminChanged {
                    role: ST_EDIT_ROLE,
                    previous_admin_role: DEFAULT_ADMIN_ROLE,
                    new_admin_role: ST_CONTROL_ROLE,
                },
                "RoleAdminChanged(bytes32,bytes32,bytes32)",
            ),
            (Event::Paused { account }, "Paused(address)"),
            (Event::Unpaused { account }, "Unpaused(address)"),
            (Event::TransferPaused { account }, "TransferPaused(address)"),
            (Event::TransferUnpaused { account }, "TransferUnpaused(address)"),
        ];
        for (event, signature) in cases {
            assert_eq!(event.topic().0, sp_io::hashing::keccak_256(signature.as_bytes()));
        }
    }

    #[test]
    fn access_control_interface_id_is_xor_of_its_selectors() {
        let id = [
            "hasRole(bytes32,address)",
            "getRoleAdmin(bytes32)",
            "grantRole(bytes32,address)",
            "revokeRole(bytes32,address)",
            "renounceRole(bytes32,address)",
        ]
        .iter()
        .map(|signature| u32::from_be_bytes(selector(signature)))
        .fold(0u32, |acc, s| acc ^ s);
        assert_eq!(id.to_be_bytes(), ACCESS_CONTROL_INTERFACE_ID);
    }

    #[test]
    fn supports_only_the_two_known_interfaces() {
        assert!(supports_interface([0x79, 0x65, 0xdb, 0x0b]));
        assert!(supports_interface([0x01, 0xff, 0xc9, 0xa7]));
        assert!(!supports_interface([0xff, 0xff, 0xff, 0xff]));
        assert!(!supports_interface([0x00, 0x00, 0x00, 0x00]));
        assert!(!supports_interface([0xc6, 0x94, 0x6a, 0x12]));
    }
}
