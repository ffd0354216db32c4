/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SNAPSHOT: &str = "tests/fixtures/snapshot.json";
const BATCH: &str = "tests/fixtures/batch.json";

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - every component resolved
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("purl-licenses")
            .args(["-s", SNAPSHOT, "resolve", "pkg:npm/react@18.2.0"])
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("purl-licenses").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("purl-licenses")
            .arg("--version")
            .assert()
            .code(0);
    }

    /// Exit code 1: no component of the batch could be resolved
    #[test]
    fn test_exit_code_all_components_unresolved() {
        cargo_bin_cmd!("purl-licenses")
            .args(["-s", SNAPSHOT, "resolve", "pkg:npm/does-not-exist"])
            .assert()
            .code(1);
    }

    /// Exit code 1: unknown license id
    #[test]
    fn test_exit_code_details_not_found() {
        cargo_bin_cmd!("purl-licenses")
            .args(["-s", SNAPSHOT, "details", "NOT-A-LICENSE"])
            .assert()
            .code(1);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("purl-licenses")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("purl-licenses")
            .args(["-f", "invalid_format", "resolve", "pkg:npm/react"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid source name
    #[test]
    fn test_exit_code_invalid_source() {
        cargo_bin_cmd!("purl-licenses")
            .args(["resolve", "pkg:npm/react", "--source", "guesswork"])
            .assert()
            .code(2);
    }

    /// Exit code 2: neither PURLs nor an input file
    #[test]
    fn test_exit_code_missing_purls() {
        cargo_bin_cmd!("purl-licenses")
            .args(["-s", SNAPSHOT, "resolve"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - snapshot file does not exist
    #[test]
    fn test_exit_code_application_error_missing_snapshot() {
        cargo_bin_cmd!("purl-licenses")
            .args([
                "-s",
                "/nonexistent/path/snapshot.json",
                "resolve",
                "pkg:npm/react",
            ])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("snapshot"));
    }

    /// Exit code 3: Application error - no snapshot configured at all
    #[test]
    fn test_exit_code_application_error_no_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        cargo_bin_cmd!("purl-licenses")
            .current_dir(temp_dir.path())
            .args(["resolve", "pkg:npm/react"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("--snapshot"));
    }

    /// Exit code 3: Application error - empty PURL
    #[test]
    fn test_exit_code_application_error_empty_purl() {
        cargo_bin_cmd!("purl-licenses")
            .args(["-s", SNAPSHOT, "resolve", "  "])
            .assert()
            .code(3);
    }
}

mod resolve_tests {
    use super::*;

    #[test]
    fn test_resolve_exact_version_json() {
        let output = cargo_bin_cmd!("purl-licenses")
            .args([
                "-s",
                SNAPSHOT,
                "resolve",
                "pkg:github/scanoss/engine",
                "-r",
                "5.0.0",
            ])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json = stdout_json(&output);
        let component = &json["components"][0];
        assert_eq!(component["purl"], "pkg:github/scanoss/engine");
        assert_eq!(component["requirement"], "5.0.0");
        assert_eq!(component["version"], "5.0.0");
        // scancode findings are excluded by default
        assert_eq!(component["statement"], "GPL-2.0-only");
        assert_eq!(component["licenses"][0]["id"], "GPL-2.0-only");
        assert_eq!(
            component["licenses"][0]["full_name"],
            "GNU General Public License v2.0 only"
        );
        assert_eq!(json["status"]["status"], "SUCCESS");
        assert_eq!(json["status"]["code"], 200);
        assert_eq!(json["status"]["message"], "Licenses retrieved successfully");
        assert_eq!(json["summary"]["resolved_exact"], 1);
    }

    #[test]
    fn test_resolve_unversioned_fallback() {
        let output = cargo_bin_cmd!("purl-licenses")
            .args(["-s", SNAPSHOT, "resolve", "pkg:npm/react@18.2.0"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json = stdout_json(&output);
        let component = &json["components"][0];
        assert_eq!(component["purl"], "pkg:npm/react@18.2.0");
        assert_eq!(component["requirement"], "");
        assert_eq!(component["version"], "18.2.0");
        assert_eq!(component["statement"], "MIT");
        assert_eq!(json["summary"]["resolved_fallback"], 1);
    }

    #[test]
    fn test_resolve_merges_sources_and_splits_records() {
        let output = cargo_bin_cmd!("purl-licenses")
            .args(["-s", SNAPSHOT, "resolve", "pkg:pypi/requests@2.31.0"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json = stdout_json(&output);
        assert_eq!(json["components"][0]["statement"], "Apache-2.0 AND MIT");
        assert_eq!(json["components"][0]["licenses"][1]["full_name"], "MIT License");
    }

    #[test]
    fn test_resolve_single_best_strategy() {
        let output = cargo_bin_cmd!("purl-licenses")
            .args([
                "-s",
                SNAPSHOT,
                "resolve",
                "pkg:pypi/requests@2.31.0",
                "--merge-strategy",
                "single_best",
            ])
            .output()
            .unwrap();
        assert!(output.status.success());

        // spdx_attribution_file outranks component_declared
        let json = stdout_json(&output);
        assert_eq!(json["components"][0]["statement"], "Apache-2.0");
    }

    #[test]
    fn test_resolve_with_explicit_source() {
        let output = cargo_bin_cmd!("purl-licenses")
            .args([
                "-s",
                SNAPSHOT,
                "resolve",
                "pkg:github/scanoss/engine@5.0.0",
                "--source",
                "scancode_attribution_file",
            ])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json = stdout_json(&output);
        assert_eq!(json["components"][0]["statement"], "GPL-3.0-only");
    }

    #[test]
    fn test_resolve_partial_success() {
        let output = cargo_bin_cmd!("purl-licenses")
            .args([
                "-s",
                SNAPSHOT,
                "resolve",
                "pkg:npm/react",
                "pkg:npm/does-not-exist",
                "pkg:npm/no-license",
            ])
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(0));

        let json = stdout_json(&output);
        let components = json["components"].as_array().unwrap();
        assert_eq!(components.len(), 3);
        assert_eq!(components[0]["purl"], "pkg:npm/react");
        assert_eq!(components[1]["purl"], "pkg:npm/does-not-exist");
        assert_eq!(components[1]["statement"], "");
        assert_eq!(components[1]["version"], "");
        assert_eq!(components[2]["version"], "1.0.0");
        assert!(components[2]["licenses"].as_array().unwrap().is_empty());

        assert_eq!(json["status"]["status"], "SUCCEEDED_WITH_WARNINGS");
        assert_eq!(
            json["status"]["message"],
            "No licenses found for the following component(s): pkg:npm/does-not-exist, pkg:npm/no-license"
        );
        assert_eq!(json["summary"]["component_not_found"], 1);
        assert_eq!(json["summary"]["no_license_data"], 1);
    }

    #[test]
    fn test_resolve_all_failed_still_prints_report() {
        let output = cargo_bin_cmd!("purl-licenses")
            .args(["-s", SNAPSHOT, "resolve", "pkg:npm/does-not-exist"])
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(1));

        let json = stdout_json(&output);
        assert_eq!(json["status"]["status"], "FAILED");
        assert_eq!(json["status"]["code"], 404);
    }

    #[test]
    fn test_resolve_batch_input_file() {
        let output = cargo_bin_cmd!("purl-licenses")
            .args(["-s", SNAPSHOT, "resolve", "--input", BATCH])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json = stdout_json(&output);
        let components = json["components"].as_array().unwrap();
        assert_eq!(components.len(), 3);
        assert_eq!(components[0]["statement"], "GPL-2.0-only");
        assert_eq!(components[1]["purl"], "pkg:npm/does-not-exist");
        assert_eq!(components[1]["requirement"], "1.0.0");
        assert_eq!(components[2]["purl"], "pkg:pypi/requests@2.31.0");
        assert_eq!(components[2]["statement"], "Apache-2.0 AND MIT");
    }

    #[test]
    fn test_resolve_text_format() {
        cargo_bin_cmd!("purl-licenses")
            .args(["-s", SNAPSHOT, "-f", "text", "resolve", "pkg:npm/react"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("pkg:npm/react (18.2.0)"))
            .stdout(predicate::str::contains("statement: MIT"))
            .stdout(predicate::str::contains("1 of 1 component(s) resolved"))
            .stdout(predicate::str::contains("SUCCESS"));
    }

    #[test]
    fn test_resolve_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("licenses.json");

        cargo_bin_cmd!("purl-licenses")
            .args(["-s", SNAPSHOT, "resolve", "pkg:npm/react", "-o"])
            .arg(&output_path)
            .assert()
            .code(0)
            .stdout(predicate::str::is_empty());

        let content = fs::read_to_string(&output_path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["components"][0]["statement"], "MIT");
    }

    #[test]
    fn test_quiet_suppresses_progress() {
        cargo_bin_cmd!("purl-licenses")
            .args(["-q", "-s", SNAPSHOT, "resolve", "pkg:npm/react"])
            .assert()
            .code(0)
            .stderr(predicate::str::contains("Resolving").not());
    }
}

mod details_tests {
    use super::*;

    #[test]
    fn test_details_case_insensitive_with_osadl() {
        let output = cargo_bin_cmd!("purl-licenses")
            .args(["-s", SNAPSHOT, "details", "mit"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json = stdout_json(&output);
        assert_eq!(json["license"]["full_name"], "MIT License");
        assert_eq!(json["license"]["spdx"]["id"], "MIT");
        assert_eq!(json["license"]["spdx"]["is_osi_approved"], true);
        assert_eq!(json["license"]["osadl"]["copyleft_clause"], false);
        assert_eq!(json["license"]["osadl"]["compatibility"][0], "Apache-2.0");
        assert_eq!(json["status"]["status"], "SUCCESS");
    }

    #[test]
    fn test_details_without_osadl() {
        let output = cargo_bin_cmd!("purl-licenses")
            .args(["-s", SNAPSHOT, "details", "MIT", "--no-osadl"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json = stdout_json(&output);
        assert_eq!(json["license"]["spdx"]["id"], "MIT");
        assert!(json["license"].get("osadl").is_none());
    }

    #[test]
    fn test_details_not_found_reports_id() {
        let output = cargo_bin_cmd!("purl-licenses")
            .args(["-s", SNAPSHOT, "details", "not-a-license"])
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(1));

        let json = stdout_json(&output);
        assert!(json.get("license").is_none());
        assert_eq!(json["status"]["status"], "NOT_FOUND");
        assert_eq!(
            json["status"]["message"],
            "License details not found: not-a-license"
        );
    }

    #[test]
    fn test_details_text_format() {
        cargo_bin_cmd!("purl-licenses")
            .args(["-s", SNAPSHOT, "-f", "text", "details", "Apache-2.0"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("Apache License 2.0 (Apache-2.0)"))
            .stdout(predicate::str::contains("osi approved:  yes"));
    }
}
