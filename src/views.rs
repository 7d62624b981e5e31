multiversx_sc::imports!();

use crate::errors::ERR_NOT_FOUND;
use crate::governance_token_proxy;
use crate::types::{
    GovernanceSettings, Member, Organization, Proposal, ProposalStatus, Treasury, Vote,
};
use crate::{
    BPS_DENOMINATOR, DEFAULT_MAJORITY_BPS, DEFAULT_QUORUM_BPS, DEFAULT_VOTING_PERIOD,
    DIRECT_JOIN_VOTING_POWER, REFERENCE_TOTAL_SUPPLY,
};

#[multiversx_sc::module]
pub trait ViewsModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::registry::RegistryModule
    + crate::membership::MembershipModule
{
    // ========================================================
    // Record lookups: empty when the record does not exist
    // ========================================================

    #[view(getOrganization)]
    fn get_organization(&self, org_id: u64) -> OptionalValue<Organization<Self::Api>> {
        let mapper = self.organizations(org_id);
        if mapper.is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(mapper.get())
    }

    #[view(getSettings)]
    fn get_settings(&self, org_id: u64) -> OptionalValue<GovernanceSettings<Self::Api>> {
        let mapper = self.settings(org_id);
        if mapper.is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(mapper.get())
    }

    #[view(getProposal)]
    fn get_proposal(&self, org_id: u64, proposal_id: u64) -> OptionalValue<Proposal<Self::Api>> {
        let mapper = self.proposals(org_id, proposal_id);
        if mapper.is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(mapper.get())
    }

    #[view(getMember)]
    fn get_member(&self, org_id: u64, account: &ManagedAddress) -> OptionalValue<Member<Self::Api>> {
        let mapper = self.members(org_id, account);
        if mapper.is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(mapper.get())
    }

    #[view(getTreasury)]
    fn get_treasury(&self, org_id: u64) -> OptionalValue<Treasury<Self::Api>> {
        let mapper = self.treasuries(org_id);
        if mapper.is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(mapper.get())
    }

    #[view(getVote)]
    fn get_vote(
        &self,
        org_id: u64,
        proposal_id: u64,
        voter: &ManagedAddress,
    ) -> OptionalValue<Vote<Self::Api>> {
        let mapper = self.votes(org_id, proposal_id, voter);
        if mapper.is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(mapper.get())
    }

    #[view(getNextOrgId)]
    fn get_next_org_id(&self) -> u64 {
        self.next_org_id().get()
    }

    // ========================================================
    // Predicates
    // ========================================================

    #[view(isMember)]
    fn is_member_view(&self, org_id: u64, account: &ManagedAddress) -> bool {
        self.is_active_member(org_id, account)
    }

    #[view(isAdmin)]
    fn is_admin_view(&self, org_id: u64, account: &ManagedAddress) -> bool {
        self.is_administrator(org_id, account)
    }

    #[view(hasVoted)]
    fn has_voted(&self, org_id: u64, proposal_id: u64, voter: &ManagedAddress) -> bool {
        !self.votes(org_id, proposal_id, voter).is_empty()
    }

    // ========================================================
    // Listings
    // ========================================================

    /// Next unassigned proposal id, which is also the number of proposals.
    #[view(getProposalCount)]
    fn get_proposal_count(&self, org_id: u64) -> u64 {
        self.next_proposal_id(org_id).get()
    }

    #[view(getProposals)]
    fn get_proposals(
        &self,
        org_id: u64,
        from: u64,
        count: u64,
    ) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.next_proposal_id(org_id).get();
        if count == 0 || from >= total {
            return result;
        }
        let end = core::cmp::min(from.saturating_add(count), total);

        for proposal_id in from..end {
            let mapper = self.proposals(org_id, proposal_id);
            if !mapper.is_empty() {
                result.push(mapper.get());
            }
        }
        result
    }

    #[view(getActiveProposals)]
    fn get_active_proposals(&self, org_id: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.next_proposal_id(org_id).get();
        let now = self.blockchain().get_block_nonce();

        for proposal_id in 0..total {
            let mapper = self.proposals(org_id, proposal_id);
            if mapper.is_empty() {
                continue;
            }
            let proposal = mapper.get();
            // Past-deadline proposals awaiting finalize are not votable
            if proposal.status == ProposalStatus::Active && now < proposal.voting_ends_at {
                result.push(proposal);
            }
        }
        result
    }

    #[view(getMemberCount)]
    fn get_member_count(&self, org_id: u64) -> u64 {
        self.org_members(org_id).len() as u64
    }

    #[view(getMembers)]
    fn get_members(&self, org_id: u64, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let roster = self.org_members(org_id);
        let total = roster.len() as u64;
        if count == 0 || from >= total {
            return result;
        }
        // Bounds checked in u64 before narrowing to the 32-bit wasm usize
        let start = from as usize;
        let end = core::cmp::min(from.saturating_add(count), total) as usize;

        for (idx, member) in roster.iter().enumerate() {
            if idx >= end {
                break;
            }
            if idx >= start {
                result.push(member);
            }
        }
        result
    }

    // ========================================================
    // Governance token helpers for building a balance proof.
    // Read-only; joinWithTokenProof never calls these.
    // ========================================================

    #[view(getTokenProofBalance)]
    fn get_token_proof_balance(&self, org_id: u64, account: ManagedAddress) -> BigUint {
        let token = self.governance_token_of(org_id);
        self.tx()
            .to(&token)
            .typed(governance_token_proxy::GovernanceTokenProxy)
            .balance_of(account)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    #[view(getGovernanceTokenInfo)]
    fn get_governance_token_info(
        &self,
        org_id: u64,
    ) -> MultiValue5<ManagedBuffer, ManagedBuffer, u32, BigUint, ManagedBuffer> {
        let token = self.governance_token_of(org_id);

        let name = self
            .tx()
            .to(&token)
            .typed(governance_token_proxy::GovernanceTokenProxy)
            .get_name()
            .returns(ReturnsResult)
            .sync_call_readonly();
        let symbol = self
            .tx()
            .to(&token)
            .typed(governance_token_proxy::GovernanceTokenProxy)
            .get_symbol()
            .returns(ReturnsResult)
            .sync_call_readonly();
        let decimals = self
            .tx()
            .to(&token)
            .typed(governance_token_proxy::GovernanceTokenProxy)
            .get_decimals()
            .returns(ReturnsResult)
            .sync_call_readonly();
        let total_supply = self
            .tx()
            .to(&token)
            .typed(governance_token_proxy::GovernanceTokenProxy)
            .get_total_supply()
            .returns(ReturnsResult)
            .sync_call_readonly();
        let token_uri = self
            .tx()
            .to(&token)
            .typed(governance_token_proxy::GovernanceTokenProxy)
            .get_token_uri()
            .returns(ReturnsResult)
            .sync_call_readonly();

        (name, symbol, decimals, total_supply, token_uri).into()
    }

    fn governance_token_of(&self, org_id: u64) -> ManagedAddress {
        let mapper = self.organizations(org_id);
        require!(!mapper.is_empty(), ERR_NOT_FOUND);
        mapper.get().governance_token
    }

    // ========================================================
    // Contract constants
    // ========================================================

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue6<u64, u64, u64, u64, u64, u64> {
        (
            DEFAULT_VOTING_PERIOD,
            DEFAULT_QUORUM_BPS,
            DEFAULT_MAJORITY_BPS,
            BPS_DENOMINATOR,
            DIRECT_JOIN_VOTING_POWER,
            REFERENCE_TOTAL_SUPPLY,
        )
            .into()
    }
}
