// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Static synonym table from friendly Kubernetes resource names to canonical kinds
// role: domain/resource-names
// inputs: Friendly resource names typed by users ("po", "deploy", "svc", ...)
// outputs: ResourceKind values and their canonical strings
// side_effects: None; the table is built once on first access and never written again
// invariants:
// - Every kind is reachable from its plural, singular and abbreviation forms
// - Lookups are exact and case-sensitive
// errors: ApiError::UnknownResourceType with the fixed "cannot find Kubernetes canonical name" text
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// Kubernetes kinds the stats service can aggregate over.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
  Deployments,
  Namespaces,
  Pods,
  ReplicationControllers,
  Services,
}

impl ResourceKind {
  pub const ALL: [ResourceKind; 5] = [
    ResourceKind::Deployments,
    ResourceKind::Namespaces,
    ResourceKind::Pods,
    ResourceKind::ReplicationControllers,
    ResourceKind::Services,
  ];

  /// Canonical identifier as recognized by the stats service.
  pub fn as_str(self) -> &'static str {
    match self {
      ResourceKind::Deployments => "deployments",
      ResourceKind::Namespaces => "namespaces",
      ResourceKind::Pods => "pods",
      ResourceKind::ReplicationControllers => "replicationcontrollers",
      ResourceKind::Services => "services",
    }
  }
}

const SYNONYMS: [(&str, ResourceKind); 15] = [
  ("deployments", ResourceKind::Deployments),
  ("deployment", ResourceKind::Deployments),
  ("deploy", ResourceKind::Deployments),
  ("namespaces", ResourceKind::Namespaces),
  ("namespace", ResourceKind::Namespaces),
  ("ns", ResourceKind::Namespaces),
  ("pods", ResourceKind::Pods),
  ("pod", ResourceKind::Pods),
  ("po", ResourceKind::Pods),
  ("replicationcontrollers", ResourceKind::ReplicationControllers),
  ("replicationcontroller", ResourceKind::ReplicationControllers),
  ("rc", ResourceKind::ReplicationControllers),
  ("services", ResourceKind::Services),
  ("service", ResourceKind::Services),
  ("svc", ResourceKind::Services),
];

static RESOURCE_NAMES: Lazy<HashMap<&'static str, ResourceKind>> =
  Lazy::new(|| SYNONYMS.iter().copied().collect());

/// Resolve a friendly name to its kind.
pub fn canonical_kind(friendly: &str) -> Result<ResourceKind> {
  RESOURCE_NAMES
    .get(friendly)
    .copied()
    .ok_or_else(|| ApiError::UnknownResourceType(friendly.to_string()))
}

/// Resolve a friendly name to the canonical identifier string.
pub fn canonicalize(friendly: &str) -> Result<&'static str> {
  canonical_kind(friendly).map(ResourceKind::as_str)
}

/// Every registered spelling of `kind`, sorted.
pub fn friendly_names(kind: ResourceKind) -> Vec<&'static str> {
  let mut names: Vec<&'static str> = RESOURCE_NAMES
    .iter()
    .filter(|(_, k)| **k == kind)
    .map(|(name, _)| *name)
    .collect();
  names.sort_unstable();
  names
}
