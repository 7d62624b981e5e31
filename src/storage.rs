multiversx_sc::imports!();

use crate::types::{GovernanceSettings, Member, Organization, Proposal, Treasury, Vote};

/// Keyed records shared by every component. Nested entities are addressed
/// by composite keys, never by collections stored inside a parent record.
#[multiversx_sc::module]
pub trait StorageModule {
    // ── Organization Registry ──

    #[storage_mapper("nextOrgId")]
    fn next_org_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("organizations")]
    fn organizations(&self, org_id: u64) -> SingleValueMapper<Organization<Self::Api>>;

    // ── Governance Settings ──

    #[storage_mapper("settings")]
    fn settings(&self, org_id: u64) -> SingleValueMapper<GovernanceSettings<Self::Api>>;

    // ── Membership ──

    #[storage_mapper("members")]
    fn members(&self, org_id: u64, account: &ManagedAddress) -> SingleValueMapper<Member<Self::Api>>;

    #[storage_mapper("orgMembers")]
    fn org_members(&self, org_id: u64) -> UnorderedSetMapper<ManagedAddress>;

    // ── Proposals ──

    #[storage_mapper("nextProposalId")]
    fn next_proposal_id(&self, org_id: u64) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, org_id: u64, proposal_id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("votes")]
    fn votes(
        &self,
        org_id: u64,
        proposal_id: u64,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<Vote<Self::Api>>;

    // ── Treasury ──

    #[storage_mapper("treasuries")]
    fn treasuries(&self, org_id: u64) -> SingleValueMapper<Treasury<Self::Api>>;
}
