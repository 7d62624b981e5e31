//! Error messages, one per failure kind. Every check aborts the whole
//! transaction, so no kind ever leaves a partial write behind.

/// Organization, proposal, member or settings record is absent.
pub const ERR_NOT_FOUND: &str = "not found";

/// Caller lacks membership or the administrator role.
pub const ERR_UNAUTHORIZED: &str = "unauthorized";

/// Malformed input, or an action attempted in the wrong state.
pub const ERR_INVALID_PARAMS: &str = "invalid params";

/// Weight, treasury funds or asserted token balance below a required floor.
pub const ERR_INSUFFICIENT_BALANCE: &str = "insufficient balance";

pub const ERR_DAO_INACTIVE: &str = "DAO is inactive";

/// Raised by `vote` once the deadline has passed, and by `finalize`
/// while the deadline has not been reached yet.
pub const ERR_VOTING_ENDED: &str = "voting ended";

pub const ERR_ALREADY_VOTED: &str = "already voted";

pub const ERR_ARITHMETIC_OVERFLOW: &str = "arithmetic overflow";
