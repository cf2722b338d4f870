use stat_request::{ApiError, StatSummaryRequestParams, TimeWindow, build_stat_summary_request};
use test_support::read_fixture_json;

fn load(name: &str) -> StatSummaryRequestParams {
  read_fixture_json(format!("params/{}.json", name))
}

#[test]
fn deploy_with_to_peer_snapshot() {
  let params = load("deploy_to_service");
  assert_eq!(params.time_window, TimeWindow::TenMin);
  let req = build_stat_summary_request(&params).unwrap();

  insta::assert_json_snapshot!(req, @r###"
  {
    "selector": {
      "resource": {
        "namespace": "emojivoto",
        "type": "deployments",
        "name": "web"
      }
    },
    "time_window": "10m",
    "outbound": {
      "to_resource": {
        "namespace": "",
        "type": "svc",
        "name": "emoji-svc"
      }
    },
    "skip_stats": false
  }
  "###);
}

#[test]
fn pods_from_namespace_snapshot() {
  let req = build_stat_summary_request(&load("pods_from_namespace")).unwrap();

  insta::assert_json_snapshot!(req, @r###"
  {
    "selector": {
      "resource": {
        "namespace": "emojivoto",
        "type": "pods",
        "name": ""
      },
      "label_selector": "app=voting"
    },
    "time_window": "1m",
    "outbound": {
      "from_resource": {
        "namespace": "linkerd",
        "type": "",
        "name": ""
      }
    },
    "skip_stats": true
  }
  "###);
}

#[test]
fn unknown_type_fixture_builds_nothing() {
  let err = build_stat_summary_request(&load("unknown_type")).unwrap_err();
  assert_eq!(err, ApiError::UnknownResourceType("deploys".into()));
  assert_eq!(
    err.to_string(),
    "cannot find Kubernetes canonical name from friendly name [deploys]"
  );
}
