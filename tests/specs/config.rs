//! Behavioral specs for detoast.toml handling.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > `root` in detoast.toml replaces the default `src`
#[test]
fn config_root_is_walked() {
    let call = "uni.showToast({ title: 'x' })\n";
    let project = Project::with_files(&[
        ("detoast.toml", "version = 1\nroot = \"client\"\n"),
        ("client/index.js", call),
        ("src/index.js", call),
    ]);

    project.run(&["remove"]);

    assert_eq!(project.read("client/index.js"), "// uni.showToast() - 已屏蔽\n");
    assert_eq!(project.read("src/index.js"), call);
}

/// > `exclude` globs prune the walk
#[test]
fn config_exclude_skips_files() {
    let call = "uni.showToast({ title: 'x' })\n";
    let project = Project::with_files(&[
        ("detoast.toml", "version = 1\nexclude = [\"vendor/**\"]\n"),
        ("src/vendor/sdk.js", call),
        ("src/index.js", call),
    ]);

    project.run(&["remove"]);

    assert_eq!(project.read("src/vendor/sdk.js"), call);
    assert_eq!(project.read("src/index.js"), "// uni.showToast() - 已屏蔽\n");
}

/// > An unsupported version is a config error (exit 2)
#[test]
fn config_bad_version_exits_2() {
    let project = Project::with_files(&[("detoast.toml", "version = 9\n")]);

    project
        .cmd(&["remove"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 9"));
}

/// > A missing explicit config is a config error (exit 2)
#[test]
fn config_missing_explicit_file_exits_2() {
    let project = Project::empty();

    project
        .cmd(&["remove", "-C", "nope.toml"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("config file not found"));
}

/// > Unknown keys warn on stderr and the run proceeds
#[test]
fn config_unknown_key_warns() {
    let project = Project::with_files(&[("detoast.toml", "version = 1\nkeys = [\"position\"]\n")]);

    project
        .cmd(&["remove"])
        .assert()
        .success()
        .stderr(predicates::str::contains("unrecognized field `keys`"));
}
