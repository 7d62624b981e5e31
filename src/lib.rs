#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod events;
pub mod governance_token_proxy;
pub mod membership;
pub mod proposals;
pub mod registry;
pub mod settings;
pub mod storage;
pub mod treasury;
pub mod types;
pub mod views;

// ============================================================
// Constants
// ============================================================

/// Organization ids are assigned from 1 upward and never reused
const FIRST_ORG_ID: u64 = 1;

/// Default voting window: 1440 blocks
pub const DEFAULT_VOTING_PERIOD: u64 = 1_440;

/// Default quorum: 20% of the reference supply (2000 basis points)
pub const DEFAULT_QUORUM_BPS: u64 = 2_000;

/// Default majority: 50% of cast weight (5000 basis points)
pub const DEFAULT_MAJORITY_BPS: u64 = 5_000;

/// Basis points denominator
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Flat weight granted by joinDirectly
pub const DIRECT_JOIN_VOTING_POWER: u64 = 1_000_000;

/// Fixed quorum denominator; not tied to any live token supply
pub const REFERENCE_TOTAL_SUPPLY: u64 = 1_000_000;

// ============================================================
// Contract
// ============================================================

/// Hosts any number of independent organizations, each with its own
/// members, settings, proposals and EGLD treasury, keyed by org id.
#[multiversx_sc::contract]
pub trait DaoHub:
    storage::StorageModule
    + events::EventsModule
    + registry::RegistryModule
    + membership::MembershipModule
    + settings::SettingsModule
    + proposals::ProposalsModule
    + treasury::TreasuryModule
    + views::ViewsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self) {
        self.next_org_id().set_if_empty(FIRST_ORG_ID);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
