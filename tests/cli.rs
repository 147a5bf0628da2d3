use std::ffi::OsStr;
use std::process::{Command, Output};

fn mk_xilprims<S: AsRef<OsStr>>(args: &[S]) -> Output {
  Command::new(env!("CARGO_BIN_EXE_mk_xilprims"))
    .args(args)
    .env_remove("RUST_LOG")
    .output()
    .expect("failed to run mk_xilprims")
}

fn stdout(output: &Output) -> String {
  String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
  String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_wrong_argument_count_prints_usage() {
  let cases: [&[&str]; 6] = [
    &[],
    &["c", "h"],
    &["h", "c", "x"],
    &["c", "--"],
    &["--", "c"],
    &["--", "--"],
  ];
  for args in cases {
    let output = mk_xilprims(args);
    assert_eq!(output.status.code(), Some(1), "args: {:?}", args);
    assert!(
      stdout(&output).starts_with("Usage: mk_xilprims"),
      "args: {:?}",
      args
    );
    assert!(stdout(&output).contains("c|h"));
  }
}

#[test]
fn test_source_mode() {
  let output = mk_xilprims(&["c"]);
  assert!(output.status.success());

  let text = stdout(&output);
  let mut lines = text.lines();
  assert_eq!(
    lines.next(),
    Some("/* Generated automatically by mk_xilprims. Do not edit manually! */")
  );
  assert_eq!(lines.next(), Some("#include <stdlib.h>"));
  assert_eq!(lines.next(), Some("#include <netlist/net.h>"));
  assert_eq!(lines.next(), Some("#include <netlist/xilprims.h>"));

  assert!(text.contains("struct netlist_primitive netlist_xilprims[] = {\n"));
  assert_eq!(text.matches(".type = NETLIST_PRIMITIVE_INTERNAL,").count(), 11);
  assert!(text.contains("static char *LUT6_attribute_defaults[] = {\n\t\"0000000000000000\",\n};\n"));
  assert!(text.ends_with("\t},\n};\n"));
}

#[test]
fn test_header_mode() {
  let output = mk_xilprims(&["h"]);
  assert!(output.status.success());

  let text = stdout(&output);
  assert!(text.starts_with(
    "/* Generated automatically by mk_xilprims. Do not edit manually! */\n#ifndef __NETLIST_XILPRIMS_H\n#define __NETLIST_XILPRIMS_H\n"
  ));
  assert!(text.contains("\tNETLIST_XIL_IBUF = 0,\n"));
  assert!(text.contains("\tNETLIST_XIL_LUT6 = 10,\n"));
  assert!(text.contains("\tNETLIST_XIL_FDE_CE = 1,\n"));
  assert!(text.contains("extern struct netlist_primitive netlist_xilprims[];\n"));
  assert!(text.ends_with("#endif /* __NETLIST_XILPRIMS_H */\n"));
}

#[test]
fn test_unrecognized_selector_emits_header() {
  let header = mk_xilprims(&["h"]);
  assert!(!stderr(&header).contains("unrecognized mode selector"));

  for selector in ["x", "-h", "--", "--help", "source"] {
    let output = mk_xilprims(&[selector]);
    assert!(output.status.success(), "selector: {}", selector);
    assert_eq!(output.stdout, header.stdout, "selector: {}", selector);
    assert!(
      stderr(&output).contains("unrecognized mode selector"),
      "selector: {}",
      selector
    );
  }
}

#[cfg(unix)]
#[test]
fn test_non_utf8_selector_emits_header() {
  use std::os::unix::ffi::OsStrExt;

  let header = mk_xilprims(&["h"]);
  let output = mk_xilprims(&[OsStr::from_bytes(b"\xff")]);

  assert_eq!(output.status.code(), Some(0));
  assert_eq!(output.stdout, header.stdout);
}

#[test]
fn test_logging_stays_off_stdout() {
  let quiet = mk_xilprims(&["c"]);
  let output = Command::new(env!("CARGO_BIN_EXE_mk_xilprims"))
    .arg("c")
    .env("RUST_LOG", "debug")
    .output()
    .expect("failed to run mk_xilprims");

  assert!(output.status.success());
  assert_eq!(output.stdout, quiet.stdout);
}
