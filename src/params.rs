// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Assemble a StatSummaryRequest from loosely-typed caller parameters
// role: builder/request
// inputs: StatSummaryRequestParams (friendly resource type + pass-through filters)
// outputs: StatSummaryRequest with a canonical selector.resource.type
// side_effects: None
// invariants:
// - Only resource_type is validated here; every other field is copied through verbatim
// - On failure no request is produced and the table error is returned unchanged
// errors: ApiError::UnknownResourceType from k8s::canonical_kind
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::k8s;
use crate::model::{Outbound, Resource, ResourceSelection, SelectedResource, StatSummaryRequest};
use crate::window::TimeWindow;

/// Raw caller input. Missing fields deserialize to their empty defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatSummaryRequestParams {
  pub resource_type: String,
  pub time_window: TimeWindow,
  pub namespace: String,
  pub resource_name: String,
  pub label_selector: String,
  pub to_namespace: String,
  pub to_type: String,
  pub to_name: String,
  pub from_namespace: String,
  pub from_type: String,
  pub from_name: String,
  pub skip_stats: bool,
}

impl StatSummaryRequestParams {
  fn outbound(&self) -> Outbound {
    if !(self.to_namespace.is_empty() && self.to_type.is_empty() && self.to_name.is_empty()) {
      return Outbound::ToResource(Resource {
        namespace: self.to_namespace.clone(),
        r#type: self.to_type.clone(),
        name: self.to_name.clone(),
      });
    }

    if !(self.from_namespace.is_empty() && self.from_type.is_empty() && self.from_name.is_empty()) {
      return Outbound::FromResource(Resource {
        namespace: self.from_namespace.clone(),
        r#type: self.from_type.clone(),
        name: self.from_name.clone(),
      });
    }

    Outbound::None
  }
}

pub fn build_stat_summary_request(params: &StatSummaryRequestParams) -> Result<StatSummaryRequest> {
  let resource_type = k8s::canonical_kind(&params.resource_type)?;

  Ok(StatSummaryRequest {
    selector: ResourceSelection {
      resource: SelectedResource {
        namespace: params.namespace.clone(),
        r#type: resource_type,
        name: params.resource_name.clone(),
      },
      label_selector: params.label_selector.clone(),
    },
    time_window: params.time_window,
    outbound: params.outbound(),
    skip_stats: params.skip_stats,
  })
}
