// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Process-level helpers: tracing setup and man page rendering
// role: utilities/helpers
// inputs: RUST_LOG; clap CommandFactory
// outputs: Global tracing subscriber on stderr; man page text
// side_effects: init_tracing installs a global subscriber (first call wins)
// invariants: Logs never go to stdout, which carries the request JSON
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use clap::CommandFactory;
use tracing_subscriber::{EnvFilter, fmt};

/// Install a stderr subscriber honoring `RUST_LOG` (default: `warn`).
pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> anyhow::Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}
