multiversx_sc::imports!();

use crate::errors::ERR_INVALID_PARAMS;
use crate::types::GovernanceSettings;
use crate::BPS_DENOMINATOR;

#[multiversx_sc::module]
pub trait SettingsModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::registry::RegistryModule
    + crate::membership::MembershipModule
{
    // ========================================================
    // ENDPOINT: updateSettings
    // Full replacement of the organization's tunables. Admin only.
    // ========================================================

    #[endpoint(updateSettings)]
    fn update_settings(
        &self,
        org_id: u64,
        voting_period: u64,
        quorum_bps: u64,
        majority_bps: u64,
        proposal_threshold: BigUint,
    ) {
        let caller = self.blockchain().get_caller();
        self.require_active_org(org_id);
        self.require_admin(org_id, &caller);

        require!(voting_period > 0, ERR_INVALID_PARAMS);
        require!(quorum_bps <= BPS_DENOMINATOR, ERR_INVALID_PARAMS);
        require!(majority_bps <= BPS_DENOMINATOR, ERR_INVALID_PARAMS);

        self.settings(org_id).set(&GovernanceSettings {
            voting_period,
            quorum_bps,
            majority_bps,
            proposal_threshold,
        });

        self.settings_updated_event(org_id, &caller, voting_period);
    }
}
