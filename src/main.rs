use anyhow::Result;
use clap::Parser;

use stat_request::cli::{Action, Cli, normalize};
use stat_request::{build_stat_summary_request, render, util};

fn main() -> Result<()> {
  let cli = Cli::parse();
  util::init_tracing();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(());
  }

  // Phase 1: normalize CLI
  let cfg = normalize(cli)?;
  tracing::debug!(config = %serde_json::to_string(&cfg)?, "effective config");

  // Phase 2: build or list
  match cfg.action {
    Action::ListWindows => print!("{}", render::render_window_list()?),
    Action::ListResources => print!("{}", render::render_resource_list()),
    Action::Build => {
      let request = build_stat_summary_request(&cfg.params)?;
      tracing::debug!(resource_type = request.selector.resource.r#type.as_str(), "built stat summary request");
      println!("{}", render::render_request(&request)?);
    }
  }

  Ok(())
}
