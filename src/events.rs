multiversx_sc::imports!();

use crate::types::VoteDirection;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("organizationCreated")]
    fn organization_created_event(
        &self,
        #[indexed] org_id: u64,
        #[indexed] creator: &ManagedAddress,
        name: &ManagedBuffer,
    );

    #[event("memberJoined")]
    fn member_joined_event(
        &self,
        #[indexed] org_id: u64,
        #[indexed] account: &ManagedAddress,
        voting_power: &BigUint,
    );

    #[event("settingsUpdated")]
    fn settings_updated_event(
        &self,
        #[indexed] org_id: u64,
        #[indexed] admin: &ManagedAddress,
        voting_period: u64,
    );

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] org_id: u64,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        voting_ends_at: u64,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] org_id: u64,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] direction: VoteDirection,
        weight: &BigUint,
    );

    #[event("proposalPassed")]
    fn proposal_passed_event(
        &self,
        #[indexed] org_id: u64,
        #[indexed] proposal_id: u64,
        votes_for: &BigUint,
    );

    #[event("proposalRejected")]
    fn proposal_rejected_event(
        &self,
        #[indexed] org_id: u64,
        #[indexed] proposal_id: u64,
        votes_for: &BigUint,
    );

    #[event("treasuryDeposit")]
    fn treasury_deposit_event(
        &self,
        #[indexed] org_id: u64,
        #[indexed] depositor: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("treasuryWithdraw")]
    fn treasury_withdraw_event(
        &self,
        #[indexed] org_id: u64,
        #[indexed] recipient: &ManagedAddress,
        amount: &BigUint,
    );
}
