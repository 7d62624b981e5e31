#![no_std]

multiversx_sc::imports!();

/// Stand-in for an organization's governance token in tests. Serves the
/// read surface the hub's proxy expects, with balances set at deploy.
#[multiversx_sc::contract]
pub trait MockGovernanceToken {
    #[init]
    fn init(&self, holder: ManagedAddress, balance: BigUint) {
        self.total_supply().set(&balance);
        self.balances(&holder).set(&balance);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[view(getName)]
    fn get_name(&self) -> ManagedBuffer {
        ManagedBuffer::new_from_bytes(b"Guild Token")
    }

    #[view(getSymbol)]
    fn get_symbol(&self) -> ManagedBuffer {
        ManagedBuffer::new_from_bytes(b"GUILD")
    }

    #[view(getDecimals)]
    fn get_decimals(&self) -> u32 {
        6
    }

    #[view(balanceOf)]
    fn balance_of(&self, account: ManagedAddress) -> BigUint {
        self.balances(&account).get()
    }

    #[view(getTotalSupply)]
    fn get_total_supply_view(&self) -> BigUint {
        self.total_supply().get()
    }

    #[view(getTokenUri)]
    fn get_token_uri(&self) -> ManagedBuffer {
        ManagedBuffer::new_from_bytes(b"ipfs://guild-token")
    }

    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("balances")]
    fn balances(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
