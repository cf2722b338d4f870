// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Translate between friendly window names ("10s", "1m", ...) and the TimeWindow enumeration
// role: domain/windowing
// inputs: Raw window strings from callers; TimeWindow values or raw wire codes
// outputs: TimeWindow values; canonical friendly strings
// invariants:
// - WINDOWS is a bijection: one name per variant, one variant per name
// - Matching is exact and case-sensitive; no trimming, no normalization
// - Unknown names resolve to the declared default (OneMin) only alongside an error
// errors: ApiError::UnknownWindow carrying the offending input
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ApiError, Result};

/// Fixed durations supported for range queries.
///
/// Discriminants are the wire codes used by the stats service.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[repr(i32)]
pub enum TimeWindow {
  TenSec = 0,
  #[default]
  OneMin = 1,
  TenMin = 2,
  OneHour = 3,
}

/// Friendly name table. The inverse direction is a lookup over the same pairs.
const WINDOWS: [(&str, TimeWindow); 4] = [
  ("10s", TimeWindow::TenSec),
  ("1m", TimeWindow::OneMin),
  ("10m", TimeWindow::TenMin),
  ("1h", TimeWindow::OneHour),
];

impl TimeWindow {
  pub const ALL: [TimeWindow; 4] = [
    TimeWindow::TenSec,
    TimeWindow::OneMin,
    TimeWindow::TenMin,
    TimeWindow::OneHour,
  ];

  pub fn code(self) -> i32 {
    self as i32
  }
}

impl TryFrom<i32> for TimeWindow {
  type Error = ApiError;

  fn try_from(code: i32) -> Result<Self> {
    TimeWindow::ALL
      .into_iter()
      .find(|w| w.code() == code)
      .ok_or_else(|| ApiError::UnknownWindow(code.to_string()))
  }
}

/// Resolve a friendly window name.
pub fn resolve_window(name: &str) -> Result<TimeWindow> {
  WINDOWS
    .iter()
    .find(|(friendly, _)| *friendly == name)
    .map(|(_, window)| *window)
    .ok_or_else(|| ApiError::UnknownWindow(name.to_string()))
}

/// Resolve a friendly window name, pairing any error with the declared default.
///
/// The returned window is only meaningful when the error slot is `None`; on failure it
/// is `TimeWindow::default()` so callers holding a fallback never see a non-default value.
pub fn resolve_window_or_default(name: &str) -> (TimeWindow, Option<ApiError>) {
  match resolve_window(name) {
    Ok(window) => (window, None),
    Err(err) => (TimeWindow::default(), Some(err)),
  }
}

/// Render a window back to its friendly name.
pub fn format_window(window: TimeWindow) -> Result<&'static str> {
  WINDOWS
    .iter()
    .find(|(_, w)| *w == window)
    .map(|(friendly, _)| *friendly)
    .ok_or_else(|| ApiError::UnknownWindow(format!("{:?}", window)))
}

/// Render a raw wire code; codes outside the enumeration are rejected with no fallback.
pub fn format_window_code(code: i32) -> Result<&'static str> {
  format_window(TimeWindow::try_from(code)?)
}

/// All supported friendly names, shortest window first.
pub fn window_names() -> Vec<&'static str> {
  WINDOWS.iter().map(|(friendly, _)| *friendly).collect()
}

impl Serialize for TimeWindow {
  fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    let name = format_window(*self).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(name)
  }
}

impl<'de> Deserialize<'de> for TimeWindow {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
    let raw = String::deserialize(deserializer)?;
    resolve_window(&raw).map_err(serde::de::Error::custom)
  }
}
