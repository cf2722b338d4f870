//! Translate friendly time windows and Kubernetes resource names into typed
//! stat summary requests.
//!
//! ```
//! use stat_request::{ResourceKind, StatSummaryRequestParams, build_stat_summary_request};
//!
//! let req = build_stat_summary_request(&StatSummaryRequestParams {
//!   resource_type: "po".into(),
//!   ..Default::default()
//! })
//! .unwrap();
//! assert_eq!(req.selector.resource.r#type, ResourceKind::Pods);
//! ```

pub mod cli;
pub mod error;
pub mod k8s;
pub mod model;
pub mod params;
pub mod render;
pub mod util;
pub mod window;

pub use error::{ApiError, Result};
pub use k8s::{ResourceKind, canonical_kind, canonicalize};
pub use model::{Outbound, Resource, ResourceSelection, SelectedResource, StatSummaryRequest};
pub use params::{StatSummaryRequestParams, build_stat_summary_request};
pub use window::{TimeWindow, format_window, format_window_code, resolve_window, resolve_window_or_default};
