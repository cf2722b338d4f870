use assert_cmd::Command;

#[test]
fn gen_man_outputs_troff() {
  test_support::init_tracing();
  let mut cmd = Command::cargo_bin("stat-request").unwrap();
  let out = cmd.args(["--gen-man"]).output().unwrap();
  assert!(out.status.success());
  let text = String::from_utf8_lossy(&out.stdout);
  // clap_mangen emits a roff manpage starting with .TH and mentions the binary name
  assert!(text.starts_with(".TH"), "expected troff man header");
  assert!(text.contains("stat\\-request") || text.contains("stat-request"));
  assert!(text.contains("time\\-window") || text.contains("time-window"));
}
