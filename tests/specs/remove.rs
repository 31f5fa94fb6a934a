//! Behavioral specs for `detoast remove`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;
use similar_asserts::assert_eq;

fn page(body: &str) -> String {
    format!("<script>\nexport default {{\n  onLoad() {{\n{}  }}\n}}\n</script>\n", body)
}

/// > A multi-line call collapses to one marker line at its indentation
#[test]
fn remove_replaces_call_with_marker() {
    let project = Project::with_files(&[("src/pages/index.vue", page(TOAST_CALL).as_str())]);

    let stdout = project.run(&["remove"]);

    assert_eq!(
        stdout,
        "Cleaning uni.showToast calls...\ncleaned file: src/pages/index.vue\nDone: cleaned 1 file(s)\n"
    );
    assert_eq!(
        project.read("src/pages/index.vue"),
        page("    // uni.showToast() - 已屏蔽\n")
    );
}

/// > Running the remover twice changes nothing the second time
#[test]
fn remove_is_idempotent() {
    let project = Project::with_files(&[
        ("src/pages/index.vue", page(TOAST_CALL).as_str()),
        ("src/utils/notify.js", "export const ok = () => uni.showToast({ title: 'ok' })\n"),
    ]);

    project.run(&["remove"]);
    let first = project.read("src/utils/notify.js");
    let stdout = project.run(&["remove"]);

    assert_eq!(stdout, "Cleaning uni.showToast calls...\nDone: cleaned 0 file(s)\n");
    assert_eq!(project.read("src/utils/notify.js"), first);
    assert_eq!(
        first,
        "export const ok = () => // uni.showToast() - 已屏蔽\n"
    );
}

/// > Only .vue, .js and .ts files are opened
#[test]
fn remove_skips_other_extensions() {
    let call = "uni.showToast({ title: 'x' })\n";
    let project = Project::with_files(&[
        ("src/App.jsx", call),
        ("src/pages.json", call),
        ("src/notes.md", call),
    ]);

    let stdout = project.run(&["remove"]);

    assert!(stdout.ends_with("Done: cleaned 0 file(s)\n"));
    assert_eq!(project.read("src/App.jsx"), call);
    assert_eq!(project.read("src/pages.json"), call);
    assert_eq!(project.read("src/notes.md"), call);
}

/// > Files outside the default `src` root are untouched
#[test]
fn remove_defaults_to_src() {
    let call = "uni.showToast({ title: 'x' })\n";
    let project = Project::with_files(&[("main.js", call), ("src/main.js", call)]);

    project.run(&["remove"]);

    assert_eq!(project.read("main.js"), call);
    assert_eq!(project.read("src/main.js"), "// uni.showToast() - 已屏蔽\n");
}

/// > A file that cannot be decoded is reported and the run continues
#[test]
fn remove_isolates_per_file_errors() {
    let project = Project::with_files(&[("src/b_page.vue", page(TOAST_CALL).as_str())]);
    project.write("src/a_legacy.js", b"\xcc\xe1\xca\xbe");

    project
        .cmd(&["remove"])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "error processing file src/a_legacy.js: invalid utf-8",
        ))
        .stdout(predicates::str::contains("cleaned file: src/b_page.vue"))
        .stdout(predicates::str::ends_with("Done: cleaned 1 file(s)\n"));

    assert_eq!(
        std::fs::read(project.join("src/a_legacy.js")).unwrap(),
        b"\xcc\xe1\xca\xbe".to_vec()
    );
}

/// > A missing source directory is not an error
#[test]
fn remove_with_missing_root_reports_zero() {
    let project = Project::empty();

    let stdout = project.run(&["remove"]);

    assert_eq!(stdout, "Cleaning uni.showToast calls...\nDone: cleaned 0 file(s)\n");
}

/// > An explicit PATH overrides the default root
#[test]
fn remove_accepts_explicit_path() {
    let call = "uni.showToast({ title: 'x' })\n";
    let project = Project::with_files(&[("app/index.js", call)]);

    let stdout = project.run(&["remove", "app"]);

    assert!(stdout.contains("cleaned file: app/index.js"));
    assert_eq!(project.read("app/index.js"), "// uni.showToast() - 已屏蔽\n");
}

/// > DETOAST_ROOT sets the root when no PATH is given
#[test]
fn remove_reads_root_from_env() {
    let call = "uni.showToast({ title: 'x' })\n";
    let project = Project::with_files(&[("web/index.ts", call)]);

    project
        .cmd(&["remove"])
        .env("DETOAST_ROOT", "web")
        .assert()
        .success()
        .stdout(predicates::str::contains("cleaned file: web/index.ts"));
}

/// > --color forces ANSI styling on the path
#[test]
fn remove_color_flag_styles_output() {
    let call = "uni.showToast({ title: 'x' })\n";
    let project = Project::with_files(&[("src/index.js", call)]);

    project
        .cmd(&["remove", "--color"])
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b["));
}

/// > NO_COLOR keeps output plain even when piped
#[test]
fn remove_no_color_env_keeps_output_plain() {
    let call = "uni.showToast({ title: 'x' })\n";
    let project = Project::with_files(&[("src/index.js", call)]);

    project
        .cmd(&["remove"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b[").not());
}
