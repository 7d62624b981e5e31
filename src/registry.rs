multiversx_sc::imports!();

use crate::errors::{ERR_ARITHMETIC_OVERFLOW, ERR_DAO_INACTIVE, ERR_INVALID_PARAMS, ERR_NOT_FOUND};
use crate::types::{GovernanceSettings, Member, Organization, Treasury};
use crate::{DEFAULT_MAJORITY_BPS, DEFAULT_QUORUM_BPS, DEFAULT_VOTING_PERIOD};

#[multiversx_sc::module]
pub trait RegistryModule:
    crate::storage::StorageModule + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: createOrganization
    // Writes the organization together with its default settings,
    // an empty treasury and the creator's admin membership.
    // ========================================================

    #[endpoint(createOrganization)]
    fn create_organization(
        &self,
        name: ManagedBuffer,
        description: ManagedBuffer,
        governance_token: ManagedAddress,
        membership_threshold: BigUint,
    ) -> u64 {
        require!(membership_threshold > 0u64, ERR_INVALID_PARAMS);
        require!(!name.is_empty(), ERR_INVALID_PARAMS);

        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_nonce();

        let org_id = self.next_org_id().get();
        let following = org_id
            .checked_add(1)
            .unwrap_or_else(|| sc_panic!(ERR_ARITHMETIC_OVERFLOW));
        self.next_org_id().set(following);

        let organization = Organization {
            id: org_id,
            name: name.clone(),
            description,
            creator: caller.clone(),
            created_at: now,
            governance_token,
            membership_threshold: membership_threshold.clone(),
            active: true,
        };
        self.organizations(org_id).set(&organization);

        self.settings(org_id).set(&GovernanceSettings {
            voting_period: DEFAULT_VOTING_PERIOD,
            quorum_bps: DEFAULT_QUORUM_BPS,
            majority_bps: DEFAULT_MAJORITY_BPS,
            proposal_threshold: membership_threshold,
        });

        self.treasuries(org_id).set(&Treasury {
            balance: BigUint::zero(),
            last_updated: now,
        });

        // Creator administers the organization regardless of weight
        self.members(org_id, &caller).set(&Member {
            joined_at: now,
            active: true,
            is_admin: true,
            voting_power: BigUint::zero(),
        });
        self.org_members(org_id).insert(caller.clone());

        self.next_proposal_id(org_id).set(0u64);

        self.organization_created_event(org_id, &caller, &name);
        self.member_joined_event(org_id, &caller, &BigUint::zero());

        org_id
    }

    // ========================================================
    // INTERNAL: organization gate
    // ========================================================

    /// Loads the organization, failing unless it exists and is active.
    fn require_active_org(&self, org_id: u64) -> Organization<Self::Api> {
        let mapper = self.organizations(org_id);
        require!(!mapper.is_empty(), ERR_NOT_FOUND);

        let organization = mapper.get();
        require!(organization.active, ERR_DAO_INACTIVE);
        organization
    }
}
