use oxidized_frontmatter::config::Schema;
use oxidized_frontmatter::finding::LintReport;
use oxidized_frontmatter::lint;
use oxidized_frontmatter::output::{self, OutputFormat};
use std::path::Path;

fn get_dirty_report() -> LintReport {
    lint::run_lint(
        Path::new("tests/fixtures/dirty"),
        "SKILL.md",
        &Schema::default(),
    )
    .unwrap()
}

fn get_clean_report() -> LintReport {
    lint::run_lint(
        Path::new("tests/fixtures/clean"),
        "SKILL.md",
        &Schema::default(),
    )
    .unwrap()
}

#[test]
fn json_output_is_valid() {
    let report = get_dirty_report();
    let json = output::format_report(&report, &OutputFormat::Json);

    let parsed: serde_json::Value = serde_json::from_str(&json).expect("JSON should be valid");
    assert!(parsed["root"].is_string());
    assert!(parsed["lint_timestamp"].is_string());
    assert!(parsed["errors"].is_array());
    assert!(parsed["documents"].is_array());
    assert!(!parsed["passed"].as_bool().unwrap());
}

#[test]
fn json_summary_counts_categories() {
    let report = get_dirty_report();
    let json = output::format_report(&report, &OutputFormat::Json);

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let summary = &parsed["summary"];
    assert_eq!(summary["structural"], 1);
    assert_eq!(summary["syntax"], 1);
    assert_eq!(summary["shape"], 0);
    assert_eq!(summary["field"], 2);
}

#[test]
fn json_clean_skill_passes() {
    let report = get_clean_report();
    let json = output::format_report(&report, &OutputFormat::Json);

    let parsed: serde_json::Value = serde_json::from_str(&json).expect("JSON should be valid");
    assert!(parsed["passed"].as_bool().unwrap());
    assert_eq!(parsed["errors"].as_array().unwrap().len(), 0);
    assert_eq!(parsed["summary"]["documents"], 2);
}

#[test]
fn sarif_output_is_valid() {
    let report = get_dirty_report();
    let sarif = output::format_report(&report, &OutputFormat::Sarif);

    let parsed: serde_json::Value =
        serde_json::from_str(&sarif).expect("SARIF JSON should be valid");
    assert_eq!(parsed["version"], "2.1.0");
    assert!(parsed["runs"].is_array());
    assert_eq!(
        parsed["runs"][0]["tool"]["driver"]["name"],
        "oxidized-frontmatter"
    );

    let results = parsed["runs"][0]["results"].as_array().unwrap();
    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|r| r["level"] == "error"));
    assert_eq!(
        results[0]["locations"][0]["physicalLocation"]["artifactLocation"]["uri"],
        "tests/fixtures/dirty/a-skill/SKILL.md"
    );
}

#[test]
fn sarif_rule_index_points_at_rule() {
    let report = get_dirty_report();
    let sarif = output::format_report(&report, &OutputFormat::Sarif);
    let parsed: serde_json::Value = serde_json::from_str(&sarif).unwrap();

    let rules = parsed["runs"][0]["tool"]["driver"]["rules"]
        .as_array()
        .unwrap();
    for result in parsed["runs"][0]["results"].as_array().unwrap() {
        let idx = result["ruleIndex"].as_u64().unwrap() as usize;
        assert_eq!(rules[idx]["id"], result["ruleId"]);
    }
}

#[test]
fn pretty_output_lists_each_error() {
    let report = get_dirty_report();
    let pretty = output::format_report(&report, &OutputFormat::Pretty);

    assert!(pretty.contains("validation failed"));
    assert!(pretty.contains("- tests/fixtures/dirty/a-skill/SKILL.md: missing YAML frontmatter block"));
    assert!(pretty.contains("4 errors in 3 of 4 skill(s)"));
}

#[test]
fn pretty_output_clean_summarises() {
    let report = get_clean_report();
    let pretty = output::format_report(&report, &OutputFormat::Pretty);

    assert!(pretty.contains("Validated 2 skill(s)."));
    assert!(!pretty.contains("failed"));
}
