// Governance-token helpers read a live token contract, so these tests run
// the hub next to a mock token in a full scenario world.

use dao_hub::membership::MembershipModule;
use dao_hub::registry::RegistryModule;
use dao_hub::views::ViewsModule;
use dao_hub::DaoHub;
use mock_governance_token::MockGovernanceToken;
use multiversx_sc_scenario::api::DebugApi;
use multiversx_sc_scenario::imports::*;

const HUB_CODE: MxscPath = MxscPath::new("mxsc:output/dao-hub.mxsc.json");
const TOKEN_CODE: MxscPath = MxscPath::new("mxsc:mock-governance-token/output/mock-governance-token.mxsc.json");

const OWNER: TestAddress = TestAddress::new("owner");
const HOLDER: TestAddress = TestAddress::new("holder");
const STRANGER: TestAddress = TestAddress::new("stranger");
const HUB: TestSCAddress = TestSCAddress::new("dao-hub");
const TOKEN: TestSCAddress = TestSCAddress::new("guild-token");

const ORG_ID: u64 = 1;

fn world() -> ScenarioWorld {
    let mut world = ScenarioWorld::new();
    world.register_contract(HUB_CODE, dao_hub::ContractBuilder);
    world.register_contract(TOKEN_CODE, mock_governance_token::ContractBuilder);
    world
}

/// Hub with one organization whose governance token gives HOLDER 750 units.
fn setup() -> ScenarioWorld {
    let mut world = world();
    world.account(OWNER).nonce(1);
    world.account(HOLDER).nonce(1);
    world.account(STRANGER).nonce(1);

    world
        .tx()
        .from(OWNER)
        .raw_deploy()
        .code(TOKEN_CODE)
        .new_address(TOKEN)
        .whitebox(mock_governance_token::contract_obj, |sc| {
            sc.init(
                ManagedAddress::from_address(&HOLDER.to_address()),
                BigUint::from(750u64),
            );
        });

    world
        .tx()
        .from(OWNER)
        .raw_deploy()
        .code(HUB_CODE)
        .new_address(HUB)
        .whitebox(dao_hub::contract_obj, |sc| {
            sc.init();
        });

    world
        .tx()
        .from(OWNER)
        .to(HUB)
        .whitebox(dao_hub::contract_obj, |sc| {
            let org_id = sc.create_organization(
                ManagedBuffer::new_from_bytes(b"Guild"),
                ManagedBuffer::new_from_bytes(b"Builders guild"),
                ManagedAddress::from_address(&TOKEN.to_address()),
                BigUint::from(100u64),
            );
            assert_eq!(org_id, ORG_ID);
        });

    world
}

#[test]
fn test_token_proof_balance_reads_token() {
    let mut world = setup();

    world
        .tx()
        .from(HOLDER)
        .to(HUB)
        .whitebox(dao_hub::contract_obj, |sc| {
            let holder = ManagedAddress::from_address(&HOLDER.to_address());
            let stranger = ManagedAddress::from_address(&STRANGER.to_address());
            assert_eq!(
                sc.get_token_proof_balance(ORG_ID, holder),
                BigUint::<DebugApi>::from(750u64)
            );
            assert_eq!(
                sc.get_token_proof_balance(ORG_ID, stranger),
                BigUint::<DebugApi>::zero()
            );
        });
}

#[test]
fn test_governance_token_info() {
    let mut world = setup();

    world
        .tx()
        .from(HOLDER)
        .to(HUB)
        .whitebox(dao_hub::contract_obj, |sc| {
            let (name, symbol, decimals, total_supply, token_uri) =
                sc.get_governance_token_info(ORG_ID).into_tuple();
            assert_eq!(name, ManagedBuffer::<DebugApi>::new_from_bytes(b"Guild Token"));
            assert_eq!(symbol, ManagedBuffer::<DebugApi>::new_from_bytes(b"GUILD"));
            assert_eq!(decimals, 6u32);
            assert_eq!(total_supply, BigUint::<DebugApi>::from(750u64));
            assert_eq!(
                token_uri,
                ManagedBuffer::<DebugApi>::new_from_bytes(b"ipfs://guild-token")
            );
        });
}

#[test]
fn test_proof_join_does_not_consult_token() {
    let mut world = setup();

    // STRANGER holds nothing on the token, yet an asserted balance is accepted
    world
        .tx()
        .from(STRANGER)
        .to(HUB)
        .whitebox(dao_hub::contract_obj, |sc| {
            sc.join_with_token_proof(ORG_ID, BigUint::from(500u64));
        });

    world
        .tx()
        .from(STRANGER)
        .to(HUB)
        .whitebox(dao_hub::contract_obj, |sc| {
            let stranger = ManagedAddress::from_address(&STRANGER.to_address());
            let member = sc.get_member(ORG_ID, &stranger).into_option().unwrap();
            assert_eq!(member.voting_power, BigUint::<DebugApi>::from(500u64));
            assert_eq!(
                sc.get_token_proof_balance(ORG_ID, stranger),
                BigUint::<DebugApi>::zero()
            );
        });
}
