multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_VOTED, ERR_ARITHMETIC_OVERFLOW, ERR_INSUFFICIENT_BALANCE, ERR_INVALID_PARAMS,
    ERR_NOT_FOUND, ERR_VOTING_ENDED,
};
use crate::types::{GovernanceSettings, Proposal, ProposalStatus, Vote, VoteDirection};
use crate::{BPS_DENOMINATOR, REFERENCE_TOTAL_SUPPLY};

#[multiversx_sc::module]
pub trait ProposalsModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::registry::RegistryModule
    + crate::membership::MembershipModule
{
    // ========================================================
    // ENDPOINT: createProposal
    // Any member holding at least the proposal threshold.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(&self, org_id: u64, title: ManagedBuffer, description: ManagedBuffer) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_active_org(org_id);
        let member = self.require_member(org_id, &caller);

        let settings = self.require_settings(org_id);
        require!(
            member.voting_power >= settings.proposal_threshold,
            ERR_INSUFFICIENT_BALANCE
        );
        require!(!title.is_empty(), ERR_INVALID_PARAMS);

        let proposal_id = self.next_proposal_id(org_id).get();
        let following = proposal_id
            .checked_add(1)
            .unwrap_or_else(|| sc_panic!(ERR_ARITHMETIC_OVERFLOW));

        let now = self.blockchain().get_block_nonce();
        let voting_ends_at = now
            .checked_add(settings.voting_period)
            .unwrap_or_else(|| sc_panic!(ERR_ARITHMETIC_OVERFLOW));

        let proposal = Proposal {
            id: proposal_id,
            title,
            description,
            proposer: caller.clone(),
            created_at: now,
            voting_ends_at,
            status: ProposalStatus::Active,
            votes_for: BigUint::zero(),
            votes_against: BigUint::zero(),
            total_votes: BigUint::zero(),
        };

        self.proposals(org_id, proposal_id).set(&proposal);
        self.next_proposal_id(org_id).set(following);

        self.proposal_created_event(org_id, proposal_id, &caller, voting_ends_at);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // One vote per member per proposal, weighted by the voter's
    // power at cast time. Cast votes are never revised.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, org_id: u64, proposal_id: u64, direction: VoteDirection) {
        let caller = self.blockchain().get_caller();
        self.require_active_org(org_id);
        let member = self.require_member(org_id, &caller);

        let proposal_mapper = self.proposals(org_id, proposal_id);
        require!(!proposal_mapper.is_empty(), ERR_NOT_FOUND);

        let mut proposal = proposal_mapper.get();
        require!(proposal.status == ProposalStatus::Active, ERR_INVALID_PARAMS);

        let now = self.blockchain().get_block_nonce();
        require!(now < proposal.voting_ends_at, ERR_VOTING_ENDED);

        let vote_mapper = self.votes(org_id, proposal_id, &caller);
        require!(vote_mapper.is_empty(), ERR_ALREADY_VOTED);

        let weight = member.voting_power;
        require!(weight > 0u64, ERR_INSUFFICIENT_BALANCE);

        match direction {
            VoteDirection::For => proposal.votes_for += &weight,
            VoteDirection::Against => proposal.votes_against += &weight,
        }
        proposal.total_votes += &weight;

        vote_mapper.set(&Vote {
            direction,
            weight: weight.clone(),
            cast_at: now,
        });
        proposal_mapper.set(&proposal);

        self.vote_cast_event(org_id, proposal_id, &caller, direction, &weight);
    }

    // ========================================================
    // ENDPOINT: finalize
    // Anyone may settle a proposal once its deadline is reached.
    // Transitions Active → Passed or Rejected, exactly once.
    // ========================================================

    #[endpoint(finalize)]
    fn finalize(&self, org_id: u64, proposal_id: u64) {
        let proposal_mapper = self.proposals(org_id, proposal_id);
        require!(!proposal_mapper.is_empty(), ERR_NOT_FOUND);

        let mut proposal = proposal_mapper.get();
        require!(proposal.status == ProposalStatus::Active, ERR_INVALID_PARAMS);

        // Same error kind as a late vote, here meaning "not ended yet"
        let now = self.blockchain().get_block_nonce();
        require!(now >= proposal.voting_ends_at, ERR_VOTING_ENDED);

        let settings = self.require_settings(org_id);
        let passed = self.quorum_met(&proposal, &settings) && self.majority_met(&proposal, &settings);

        if passed {
            proposal.status = ProposalStatus::Passed;
            proposal_mapper.set(&proposal);
            self.proposal_passed_event(org_id, proposal_id, &proposal.votes_for);
        } else {
            proposal.status = ProposalStatus::Rejected;
            proposal_mapper.set(&proposal);
            self.proposal_rejected_event(org_id, proposal_id, &proposal.votes_for);
        }
    }

    // ========================================================
    // INTERNAL: threshold arithmetic (floor division, no wrapping)
    // ========================================================

    fn quorum_met(
        &self,
        proposal: &Proposal<Self::Api>,
        settings: &GovernanceSettings<Self::Api>,
    ) -> bool {
        let reference_supply = BigUint::from(REFERENCE_TOTAL_SUPPLY);
        let required = (&reference_supply * settings.quorum_bps) / BPS_DENOMINATOR;
        proposal.total_votes >= required
    }

    fn majority_met(
        &self,
        proposal: &Proposal<Self::Api>,
        settings: &GovernanceSettings<Self::Api>,
    ) -> bool {
        let required = (&proposal.total_votes * settings.majority_bps) / BPS_DENOMINATOR;
        proposal.votes_for >= required
    }

    fn require_settings(&self, org_id: u64) -> GovernanceSettings<Self::Api> {
        let mapper = self.settings(org_id);
        require!(!mapper.is_empty(), ERR_NOT_FOUND);
        mapper.get()
    }
}
