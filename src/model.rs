// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Define the stat summary request shape handed to the transport layer
// role: model/types
// outputs: Serializable structs with stable field names
// invariants: selector.resource.type is a ResourceKind; requests are built only by params::build_stat_summary_request
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::Serialize;

use crate::k8s::ResourceKind;
use crate::window::TimeWindow;

/// The selected resource. Its type is a closed kind, so it always serializes canonically.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct SelectedResource {
  pub namespace: String,
  #[serde(rename = "type")]
  pub r#type: ResourceKind,
  pub name: String,
}

/// A peer resource, passed through as typed by the caller.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Resource {
  pub namespace: String,
  #[serde(rename = "type")]
  pub r#type: String,
  pub name: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ResourceSelection {
  pub resource: SelectedResource,
  #[serde(skip_serializing_if = "String::is_empty")]
  pub label_selector: String,
}

/// Optional peer restriction for outbound traffic stats.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outbound {
  #[default]
  None,
  ToResource(Resource),
  FromResource(Resource),
}

/// Only produced by `params::build_stat_summary_request`.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct StatSummaryRequest {
  pub selector: ResourceSelection,
  pub time_window: TimeWindow,
  pub outbound: Outbound,
  pub skip_stats: bool,
}
