//! Role names used by the CEPEX backend.
//!
//! The session core treats roles as opaque strings and performs no
//! validation against a fixed enum: a role introduced by the backend works
//! here without a client change, as long as comparisons go by name. These
//! constants only spare call sites from retyping the contract names.

/// Full administrative access, including user management.
pub const ADMIN: &str = "ADMIN";

/// Teaching staff: owns monitorships and supervises projects.
pub const PROFESSOR: &str = "PROFESSOR";

/// Coordinates research and extension projects for a department.
pub const COORDINATOR: &str = "COORDINATOR";

/// Clerical staff handling approvals and certificates.
pub const SECRETARY: &str = "SECRETARY";

/// Enrolled student; applies to monitorships and project openings.
pub const STUDENT: &str = "STUDENT";
