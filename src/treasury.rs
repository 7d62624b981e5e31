multiversx_sc::imports!();

use crate::errors::{ERR_INSUFFICIENT_BALANCE, ERR_INVALID_PARAMS, ERR_NOT_FOUND};

#[multiversx_sc::module]
pub trait TreasuryModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::registry::RegistryModule
    + crate::membership::MembershipModule
{
    // ========================================================
    // ENDPOINT: deposit
    // The attached EGLD moves into custody with the call; a failed
    // check reverts both the transfer and the ledger write.
    // ========================================================

    #[endpoint(deposit)]
    #[payable("EGLD")]
    fn deposit(&self, org_id: u64) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();

        self.require_active_org(org_id);
        require!(amount > 0u64, ERR_INVALID_PARAMS);

        let treasury_mapper = self.treasuries(org_id);
        require!(!treasury_mapper.is_empty(), ERR_NOT_FOUND);

        let now = self.blockchain().get_block_nonce();
        treasury_mapper.update(|treasury| {
            treasury.balance += &amount;
            treasury.last_updated = now;
        });

        self.treasury_deposit_event(org_id, &caller, &amount);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Admin only, bounded by the organization's own balance.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self, org_id: u64, recipient: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.require_active_org(org_id);
        self.require_admin(org_id, &caller);
        require!(amount > 0u64, ERR_INVALID_PARAMS);

        let treasury_mapper = self.treasuries(org_id);
        require!(!treasury_mapper.is_empty(), ERR_NOT_FOUND);

        let mut treasury = treasury_mapper.get();
        require!(treasury.balance >= amount, ERR_INSUFFICIENT_BALANCE);

        treasury.balance -= &amount;
        treasury.last_updated = self.blockchain().get_block_nonce();
        treasury_mapper.set(&treasury);

        self.send().direct_egld(&recipient, &amount);
        self.treasury_withdraw_event(org_id, &recipient, &amount);
    }
}
