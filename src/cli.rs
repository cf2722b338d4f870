use anyhow::{Result, bail};
use clap::Parser;
use serde::Serialize;

use crate::params::StatSummaryRequestParams;
use crate::window::{self, TimeWindow};

#[derive(Parser, Debug)]
#[command(
    name = "stat-request",
    version,
    about = "Build a stat summary request from friendly resource and window names",
    long_about = None
)]
pub struct Cli {
  /// Resource type: plural, singular or short form (e.g. deployments, deploy, po, svc)
  #[arg(required_unless_present_any = ["list_windows", "list_resources", "gen_man"])]
  pub resource_type: Option<String>,

  /// Restrict stats to a single named resource
  pub resource_name: Option<String>,

  /// Namespace of the selected resource
  #[arg(short = 'n', long, env = "STAT_REQUEST_NAMESPACE", default_value = "default")]
  pub namespace: String,

  /// Select resources across all namespaces (overrides --namespace)
  #[arg(long)]
  pub all_namespaces: bool,

  /// Stats window: one of 10s, 1m, 10m, 1h
  #[arg(
    short = 't',
    long,
    env = "STAT_REQUEST_WINDOW",
    default_value = "1m",
    value_parser = parse_window
  )]
  pub time_window: TimeWindow,

  /// Label selector passed through to the stats service
  #[arg(short = 'l', long, default_value = "")]
  pub label_selector: String,

  /// Restrict outbound stats to traffic sent to this resource name
  #[arg(long)]
  pub to: Option<String>,

  /// Namespace of the --to resource
  #[arg(long)]
  pub to_namespace: Option<String>,

  /// Type of the --to resource
  #[arg(long)]
  pub to_resource: Option<String>,

  /// Restrict outbound stats to traffic received from this resource name
  #[arg(long)]
  pub from: Option<String>,

  /// Namespace of the --from resource
  #[arg(long)]
  pub from_namespace: Option<String>,

  /// Type of the --from resource
  #[arg(long)]
  pub from_resource: Option<String>,

  /// Ask the service for resource listings only, without traffic stats
  #[arg(long)]
  pub skip_stats: bool,

  /// Print the supported window names and exit
  #[arg(long)]
  pub list_windows: bool,

  /// Print the supported resource types with their synonyms and exit
  #[arg(long)]
  pub list_resources: bool,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,
}

fn parse_window(raw: &str) -> std::result::Result<TimeWindow, String> {
  window::resolve_window(raw)
    .map_err(|e| format!("{} (expected one of: {})", e, window::window_names().join(", ")))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
  Build,
  ListWindows,
  ListResources,
}

#[derive(Debug, Serialize)]
pub struct EffectiveConfig {
  pub action: Action,
  pub params: StatSummaryRequestParams,
}

fn non_empty(flag: Option<String>) -> Option<String> {
  flag.filter(|v| !v.is_empty())
}

pub fn normalize(cli: Cli) -> Result<EffectiveConfig> {
  let action = match (cli.list_windows, cli.list_resources) {
    (true, true) => bail!("Choose only one of --list-windows | --list-resources"),
    (true, false) => Action::ListWindows,
    (false, true) => Action::ListResources,
    (false, false) => Action::Build,
  };

  // Empty peer flags select nothing, same as leaving them out.
  let to = non_empty(cli.to);
  let to_namespace = non_empty(cli.to_namespace);
  let to_resource = non_empty(cli.to_resource);
  let from = non_empty(cli.from);
  let from_namespace = non_empty(cli.from_namespace);
  let from_resource = non_empty(cli.from_resource);

  let has_to = to.is_some() || to_namespace.is_some() || to_resource.is_some();
  let has_from = from.is_some() || from_namespace.is_some() || from_resource.is_some();
  if has_to && has_from {
    bail!("--to and --from flags are mutually exclusive: restrict outbound stats by one peer only");
  }

  let resource_type = match (action, cli.resource_type) {
    (Action::Build, None) => bail!("Provide a resource type, e.g. `stat-request deploy`"),
    (_, rt) => rt.unwrap_or_default(),
  };

  // An empty namespace selects every namespace on the stats service side.
  let namespace = if cli.all_namespaces { String::new() } else { cli.namespace };

  tracing::debug!(
    ?action,
    resource_type = %resource_type,
    namespace = %namespace,
    has_to,
    has_from,
    "normalized cli"
  );

  Ok(EffectiveConfig {
    action,
    params: StatSummaryRequestParams {
      resource_type,
      time_window: cli.time_window,
      namespace,
      resource_name: cli.resource_name.unwrap_or_default(),
      label_selector: cli.label_selector,
      to_namespace: to_namespace.unwrap_or_default(),
      to_type: to_resource.unwrap_or_default(),
      to_name: to.unwrap_or_default(),
      from_namespace: from_namespace.unwrap_or_default(),
      from_type: from_resource.unwrap_or_default(),
      from_name: from.unwrap_or_default(),
      skip_stats: cli.skip_stats,
    },
  })
}
