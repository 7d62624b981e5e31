multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Organization: one tenant of the hub
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Organization<M: ManagedTypeApi> {
    pub id: u64,
    pub name: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub creator: ManagedAddress<M>,
    pub created_at: u64,
    /// External token contract callers consult off-chain to build a balance proof
    pub governance_token: ManagedAddress<M>,
    /// Minimum weight a joining-by-proof account must present
    pub membership_threshold: BigUint<M>,
    pub active: bool,
}

// ============================================================
// Governance Settings: per-organization tunables
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct GovernanceSettings<M: ManagedTypeApi> {
    /// Voting window length in blocks
    pub voting_period: u64,
    /// Share of the reference supply that must vote, in basis points
    pub quorum_bps: u64,
    /// Share of cast weight that must vote "for", in basis points
    pub majority_bps: u64,
    /// Minimum voting power needed to open a proposal
    pub proposal_threshold: BigUint<M>,
}

// ============================================================
// Member: admission record per (organization, account)
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Member<M: ManagedTypeApi> {
    pub joined_at: u64,
    pub active: bool,
    pub is_admin: bool,
    pub voting_power: BigUint<M>,
}

// ============================================================
// Proposal Status: active -> {passed, rejected}
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Voting is open until `voting_ends_at`.
    Active,
    /// Quorum and majority both met. Terminal.
    Passed,
    /// Quorum or majority missed. Terminal.
    Rejected,
}

// ============================================================
// Proposal: the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub title: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub proposer: ManagedAddress<M>,
    pub created_at: u64,
    pub voting_ends_at: u64,
    pub status: ProposalStatus,
    pub votes_for: BigUint<M>,
    pub votes_against: BigUint<M>,
    /// Always `votes_for + votes_against`
    pub total_votes: BigUint<M>,
}

// ============================================================
// Vote: one per (organization, proposal, voter), never rewritten
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum VoteDirection {
    For,
    Against,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Vote<M: ManagedTypeApi> {
    pub direction: VoteDirection,
    /// Voter's power at cast time
    pub weight: BigUint<M>,
    pub cast_at: u64,
}

// ============================================================
// Treasury: custodial EGLD ledger per organization
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Treasury<M: ManagedTypeApi> {
    pub balance: BigUint<M>,
    pub last_updated: u64,
}
