// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Error taxonomy for window and resource-type resolution
// role: errors/types
// outputs: ApiError with exactly two kinds; Result alias
// invariants:
// - Display text echoes the offending input verbatim inside brackets (empty input renders `[]`)
// - UnknownResourceType text is a fixed contract relied on by callers and tests
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
  /// A window name or wire code with no counterpart in the window table.
  #[error("invalid time window [{0}]")]
  UnknownWindow(String),
  #[error("cannot find Kubernetes canonical name from friendly name [{0}]")]
  UnknownResourceType(String),
}
