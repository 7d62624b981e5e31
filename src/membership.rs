multiversx_sc::imports!();

use crate::errors::{ERR_INSUFFICIENT_BALANCE, ERR_INVALID_PARAMS, ERR_UNAUTHORIZED};
use crate::types::Member;
use crate::DIRECT_JOIN_VOTING_POWER;

#[multiversx_sc::module]
pub trait MembershipModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::registry::RegistryModule
{
    // ========================================================
    // ENDPOINT: joinDirectly
    // Open admission with a flat weight, not backed by any balance.
    // ========================================================

    #[endpoint(joinDirectly)]
    fn join_directly(&self, org_id: u64) {
        let caller = self.blockchain().get_caller();
        self.require_active_org(org_id);

        self.admit_member(org_id, &caller, BigUint::from(DIRECT_JOIN_VOTING_POWER));
    }

    // ========================================================
    // ENDPOINT: joinWithTokenProof
    // The asserted balance is taken at face value. Callers build it
    // off-chain from the organization's governance token; this
    // endpoint never queries the token contract itself.
    // ========================================================

    #[endpoint(joinWithTokenProof)]
    fn join_with_token_proof(&self, org_id: u64, asserted_balance: BigUint) {
        let caller = self.blockchain().get_caller();
        let organization = self.require_active_org(org_id);

        require!(
            asserted_balance >= organization.membership_threshold,
            ERR_INSUFFICIENT_BALANCE
        );

        self.admit_member(org_id, &caller, asserted_balance);
    }

    // ========================================================
    // INTERNAL: admission and role predicates
    // ========================================================

    fn admit_member(&self, org_id: u64, account: &ManagedAddress, voting_power: BigUint) {
        let mapper = self.members(org_id, account);
        require!(mapper.is_empty(), ERR_INVALID_PARAMS);

        mapper.set(&Member {
            joined_at: self.blockchain().get_block_nonce(),
            active: true,
            is_admin: false,
            voting_power: voting_power.clone(),
        });
        self.org_members(org_id).insert(account.clone());

        self.member_joined_event(org_id, account, &voting_power);
    }

    fn is_active_member(&self, org_id: u64, account: &ManagedAddress) -> bool {
        let mapper = self.members(org_id, account);
        !mapper.is_empty() && mapper.get().active
    }

    fn is_administrator(&self, org_id: u64, account: &ManagedAddress) -> bool {
        let mapper = self.members(org_id, account);
        if mapper.is_empty() {
            return false;
        }
        let member = mapper.get();
        member.active && member.is_admin
    }

    /// Loads the caller's membership, failing unless it is active.
    fn require_member(&self, org_id: u64, account: &ManagedAddress) -> Member<Self::Api> {
        require!(self.is_active_member(org_id, account), ERR_UNAUTHORIZED);
        self.members(org_id, account).get()
    }

    fn require_admin(&self, org_id: u64, account: &ManagedAddress) {
        require!(self.is_administrator(org_id, account), ERR_UNAUTHORIZED);
    }
}
