// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Turn built requests and lookup tables into stdout text
// role: presentation/render
// inputs: StatSummaryRequest; window and resource tables
// outputs: Pretty JSON request; one-line-per-entry listings
// invariants: Listings are derived from the lookup tables, never from hard-coded copies
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::Result;

use crate::k8s::{self, ResourceKind};
use crate::model::StatSummaryRequest;
use crate::window::{self, TimeWindow};

pub fn render_request(request: &StatSummaryRequest) -> Result<String> {
  Ok(serde_json::to_string_pretty(request)?)
}

/// One friendly window name per line, rendered back through the window table.
pub fn render_window_list() -> Result<String> {
  let mut out = String::new();
  for w in TimeWindow::ALL {
    out.push_str(window::format_window(w)?);
    out.push('\n');
  }
  Ok(out)
}

/// `canonical: synonym, synonym, ...` per supported kind.
pub fn render_resource_list() -> String {
  ResourceKind::ALL
    .iter()
    .map(|kind| format!("{}: {}\n", kind.as_str(), k8s::friendly_names(*kind).join(", ")))
    .collect()
}
