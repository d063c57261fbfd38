//! CLI integration tests for tokensmith.
//!
//! These tests drive the binary end to end: manifest in, generated source
//! out, and the generated names checked against a real asset catalog.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the tokensmith binary command, isolated from the user's global config.
fn tokensmith(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tokensmith").unwrap();
    cmd.env("HOME", home).env_remove("TOKENSMITH_CONFIG");
    cmd
}

/// Create a temporary directory for test projects.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

const MANIFEST: &str = r#"bundle-id = "com.venkat.focal.app"

[[token]]
name = "Amber"
variants = ["any", "dark"]

[[token]]
name = "AmberLight"

[[token]]
name = "Overlay"
"#;

fn write_manifest(dir: &Path, contents: &str) {
    fs::write(dir.join("tokens.toml"), contents).unwrap();
}

/// Write a colorset with an `any` value and an optional dark value.
fn write_colorset(catalog: &Path, name: &str, any: &str, dark: Option<&str>) {
    let component = |hex: &str| {
        format!(
            r#"{{ "color-space" : "srgb", "components" : {{ "red" : "0x{}", "green" : "0x{}", "blue" : "0x{}", "alpha" : "1.000" }} }}"#,
            &hex[0..2],
            &hex[2..4],
            &hex[4..6]
        )
    };

    let mut slots = vec![format!(
        r#"{{ "color" : {}, "idiom" : "universal" }}"#,
        component(any)
    )];
    if let Some(dark) = dark {
        slots.push(format!(
            r#"{{ "appearances" : [ {{ "appearance" : "luminosity", "value" : "dark" }} ], "color" : {}, "idiom" : "universal" }}"#,
            component(dark)
        ));
    }

    let dir = catalog.join(format!("{}.colorset", name));
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("Contents.json"),
        format!(r#"{{ "colors" : [ {} ], "info" : {{ "author" : "xcode", "version" : 1 }} }}"#, slots.join(", ")),
    )
    .unwrap();
}

/// Catalog with Amber and AmberLight but no Overlay.
fn write_catalog(dir: &Path) {
    let catalog = dir.join("Assets.xcassets");
    write_colorset(&catalog, "Amber", "F59E0B", Some("B45309"));
    write_colorset(&catalog, "AmberLight", "FDE68A", None);
}

// ============================================================================
// tokensmith generate
// ============================================================================

#[test]
fn test_generate_objc_header() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), MANIFEST);

    tokensmith(tmp.path())
        .args(["generate", "--manifest", "tokens.toml", "--output", "AssetSymbols.h"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 3 symbols"));

    let header = fs::read_to_string(tmp.path().join("AssetSymbols.h")).unwrap();
    assert!(header.contains("static NSString * const ColorNameAmber TOKENS_SWIFT_PRIVATE = @\"Amber\";"));
    assert!(header.contains("static NSString * const ColorNameAmberLight TOKENS_SWIFT_PRIVATE = @\"AmberLight\";"));
    assert!(header.contains("@\"com.venkat.focal.app\""));
}

#[test]
fn test_generate_twice_is_up_to_date() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), MANIFEST);
    let args = ["generate", "-m", "tokens.toml", "-o", "AssetSymbols.swift"];

    tokensmith(tmp.path())
        .args(args)
        .current_dir(tmp.path())
        .assert()
        .success();
    let first = fs::read(tmp.path().join("AssetSymbols.swift")).unwrap();

    tokensmith(tmp.path())
        .args(args)
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("is up to date"));
    let second = fs::read(tmp.path().join("AssetSymbols.swift")).unwrap();

    assert_eq!(first, second);
    assert!(String::from_utf8(first).unwrap().contains("static let amber"));
}

#[test]
fn test_generate_uses_project_config() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), MANIFEST);
    fs::write(
        tmp.path().join("tokensmith.toml"),
        r#"
[generate]
manifest = "tokens.toml"
output = "src/tokens.rs"
target = "rust"
namespace = "AC"
public = ["Amber"]
"#,
    )
    .unwrap();

    tokensmith(tmp.path())
        .arg("generate")
        .current_dir(tmp.path())
        .assert()
        .success();

    let source = fs::read_to_string(tmp.path().join("src/tokens.rs")).unwrap();
    assert!(source.contains("pub const AC_COLOR_NAME_AMBER: &str = \"Amber\";"));
    assert!(source.contains("pub(crate) const AC_COLOR_NAME_OVERLAY: &str = \"Overlay\";"));
}

#[test]
fn test_generate_duplicate_fails_without_output() {
    let tmp = temp_dir();
    write_manifest(
        tmp.path(),
        r#"bundle-id = "app"

[[token]]
name = "Sky"

[[token]]
name = "Sky"
"#,
    );

    tokensmith(tmp.path())
        .args(["generate", "-m", "tokens.toml", "-o", "AssetSymbols.h"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("`Sky` is declared twice"));

    assert!(!tmp.path().join("AssetSymbols.h").exists());
}

#[test]
fn test_generate_check_reports_stale_output() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), MANIFEST);
    fs::write(tmp.path().join("AssetSymbols.h"), "// stale\n").unwrap();

    tokensmith(tmp.path())
        .args(["generate", "-m", "tokens.toml", "-o", "AssetSymbols.h", "--check"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of date"));

    assert_eq!(
        fs::read_to_string(tmp.path().join("AssetSymbols.h")).unwrap(),
        "// stale\n"
    );
}

#[test]
fn test_generate_from_asset_catalog() {
    let tmp = temp_dir();
    write_catalog(tmp.path());

    tokensmith(tmp.path())
        .args([
            "generate",
            "-m",
            "Assets.xcassets",
            "-o",
            "AssetSymbols.h",
            "--bundle-id",
            "com.venkat.focal.app",
        ])
        .current_dir(tmp.path())
        .assert()
        .success();

    let header = fs::read_to_string(tmp.path().join("AssetSymbols.h")).unwrap();
    assert!(header.contains("ColorNameAmber "));
    assert!(header.contains("ColorNameAmberLight "));
}

#[test]
fn test_generate_without_manifest_suggests_config() {
    let tmp = temp_dir();

    tokensmith(tmp.path())
        .args(["generate", "-o", "AssetSymbols.h"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--manifest"));
}

// ============================================================================
// tokensmith verify
// ============================================================================

#[test]
fn test_verify_reports_missing_asset() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), MANIFEST);
    write_catalog(tmp.path());

    tokensmith(tmp.path())
        .args(["verify", "-m", "tokens.toml", "-b", "Assets.xcassets"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("ColorNameOverlay -> color `Overlay`"))
        .stdout(predicate::str::contains("Verification FAILED"));
}

#[test]
fn test_verify_names_namespaced_symbols() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), MANIFEST);
    write_catalog(tmp.path());
    fs::write(
        tmp.path().join("tokensmith.toml"),
        "[generate]\nnamespace = \"AC\"\n",
    )
    .unwrap();

    tokensmith(tmp.path())
        .args(["verify", "-m", "tokens.toml", "-b", "Assets.xcassets"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("ACColorNameOverlay -> color `Overlay`"));
}

#[test]
fn test_malformed_manifest_points_at_file() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), "[[token]]\nname = \"Amber\"\ncolour = true\n");

    tokensmith(tmp.path())
        .args(["generate", "-m", "tokens.toml", "-o", "Symbols.h", "--bundle-id", "com.venkat.focal.app"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: invalid manifest file"))
        .stderr(predicate::str::contains("--> tokens.toml"));

    assert!(!tmp.path().join("Symbols.h").exists());
}

#[test]
fn test_verify_passes_once_asset_is_added() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), MANIFEST);
    write_catalog(tmp.path());
    write_colorset(&tmp.path().join("Assets.xcassets"), "Overlay", "000000", None);

    tokensmith(tmp.path())
        .args(["verify", "-m", "tokens.toml", "-b", "Assets.xcassets"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Verification PASSED"));
}

#[test]
fn test_verify_json_output() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), MANIFEST);
    write_catalog(tmp.path());
    write_colorset(&tmp.path().join("Assets.xcassets"), "Overlay", "000000", None);
    write_colorset(&tmp.path().join("Assets.xcassets"), "Legacy", "FFFFFF", None);

    let output = tokensmith(tmp.path())
        .args([
            "verify",
            "-m",
            "tokens.toml",
            "-b",
            "Assets.xcassets",
            "--output-format",
            "json",
        ])
        .current_dir(tmp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["bundle"], "com.venkat.focal.app");
    assert_eq!(report["undeclared"][0]["name"], "Legacy");
}

#[test]
fn test_verify_strict_fails_on_undeclared() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), MANIFEST);
    write_catalog(tmp.path());
    write_colorset(&tmp.path().join("Assets.xcassets"), "Overlay", "000000", None);
    write_colorset(&tmp.path().join("Assets.xcassets"), "Legacy", "FFFFFF", None);

    tokensmith(tmp.path())
        .args(["verify", "-m", "tokens.toml", "-b", "Assets.xcassets", "--strict"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("[FAIL] 1 assets have no symbol"));
}

#[test]
fn test_verify_missing_bundle() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), MANIFEST);

    tokensmith(tmp.path())
        .args(["verify", "-m", "tokens.toml", "-b", "Missing.xcassets"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not open bundle"));
}

// ============================================================================
// tokensmith resolve
// ============================================================================

#[test]
fn test_resolve_light_and_dark() {
    let tmp = temp_dir();
    write_catalog(tmp.path());

    tokensmith(tmp.path())
        .args(["resolve", "Amber", "-b", "Assets.xcassets"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ColorNameAmber = #F59E0BFF (any variant"));

    tokensmith(tmp.path())
        .args(["resolve", "Amber", "-b", "Assets.xcassets", "--dark"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("#B45309FF (dark variant"));
}

#[test]
fn test_resolve_missing_resource() {
    let tmp = temp_dir();
    write_catalog(tmp.path());

    tokensmith(tmp.path())
        .args(["resolve", "Overlay", "-b", "Assets.xcassets"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not find color `Overlay`"));
}

#[test]
fn test_resolve_uses_configured_bundle() {
    let tmp = temp_dir();
    write_catalog(tmp.path());
    fs::write(
        tmp.path().join("tokensmith.toml"),
        r#"
[generate]
bundle-id = "com.venkat.focal.app"

[bundles]
"com.venkat.focal.app" = "Assets.xcassets"
"#,
    )
    .unwrap();

    let output = tokensmith(tmp.path())
        .args(["resolve", "AmberLight", "--dark", "--json"])
        .current_dir(tmp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let handle: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(handle["bundle"], "com.venkat.focal.app");
    assert_eq!(handle["variant"], "any");
    assert_eq!(handle["resource"]["kind"], "color");
}

// ============================================================================
// tokensmith completions
// ============================================================================

#[test]
fn test_completions_bash() {
    let tmp = temp_dir();

    tokensmith(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tokensmith"));
}
