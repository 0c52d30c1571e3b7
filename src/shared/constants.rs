// =============================================================================
// ENVELOPE
// =============================================================================

/// Envelope code for a successful call
pub const CODE_SUCCESS: i32 = 0;

/// Envelope code for every failure kind
pub const CODE_FAILURE: i32 = 1;

pub const MESSAGE_SUCCESS: &str = "success";

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// The distinguished identity allowed to modify any record and to publish
pub const ADMIN_USER: &str = "admin";
