use super::*;
use crate::rules::Diagnostic;
use crate::rules::RuleConfig;
use pretty_assertions::assert_eq;
use std::fs;

fn engine() -> RuleEngine {
    RuleEngine::new(RuleConfig::default())
}

fn fail_result() -> ValidationResult {
    ValidationResult {
        name: "broken".to_string(),
        diagnostics: vec![
            Diagnostic::error("Missing required section: ---"),
            Diagnostic::warning("No code examples found"),
        ],
    }
}

fn render<F>(color: bool, write: F) -> String
where
    F: FnOnce(&mut Reporter<&mut Vec<u8>>) -> std::io::Result<()>,
{
    let mut buf = Vec::new();
    let mut reporter = Reporter::new(&mut buf, color);
    write(&mut reporter).expect("write to buffer");
    String::from_utf8(buf).expect("report is UTF-8")
}

#[test]
fn test_summary_fold() {
    let mut summary = Summary::default();
    summary.record(&fail_result());
    summary.record(&ValidationResult {
        name: "clean".to_string(),
        diagnostics: Vec::new(),
    });

    assert_eq!(
        summary,
        Summary {
            documents: 2,
            errors: 1,
            warnings: 1,
        }
    );
    assert!(summary.has_errors());
    assert!(!Summary::default().has_errors());
}

#[test]
fn test_document_format_plain() {
    let out = render(false, |r| r.document(&fail_result()));
    assert_eq!(
        out,
        "[FAIL] broken\n    ERROR: Missing required section: ---\n    WARN: No code examples found\n"
    );
}

#[test]
fn test_passing_document_format() {
    let result = ValidationResult {
        name: "clean".to_string(),
        diagnostics: Vec::new(),
    };
    let out = render(false, |r| r.document(&result));
    assert_eq!(out, "[PASS] clean\n");
}

#[test]
fn test_summary_format() {
    let summary = Summary {
        documents: 3,
        errors: 2,
        warnings: 5,
    };
    let out = render(false, |r| r.summary(&summary));
    assert!(out.contains("Summary: 3 skills validated"));
    assert!(out.contains("  Errors: 2"));
    assert!(out.contains("  Warnings: 5"));
}

#[test]
fn test_color_output_uses_ansi_codes() {
    let out = render(true, |r| r.document(&fail_result()));
    assert!(out.contains("\u{1b}["));

    let plain = render(false, |r| r.document(&fail_result()));
    assert!(!plain.contains("\u{1b}["));
}

#[test]
fn test_run_report_over_corpus() {
    let tmp = tempfile::tempdir().expect("create temp dir");

    let clean = tmp.path().join("alpha");
    fs::create_dir_all(&clean).expect("mkdir");
    fs::write(
        clean.join("SKILL.md"),
        "# n8n Alpha\n\n> **First**\n\n## Overview\n\n---\n\n```javascript\nreturn [{json: {}}];\n```\n",
    )
    .expect("write SKILL.md");

    // No SKILL.md inside: reported as a failing document
    fs::create_dir_all(tmp.path().join("beta")).expect("mkdir");

    let mut buf = Vec::new();
    let mut reporter = Reporter::new(&mut buf, false);
    let summary = run_report(tmp.path(), &engine(), &mut reporter).expect("run report");

    assert_eq!(
        summary,
        Summary {
            documents: 2,
            errors: 1,
            warnings: 0,
        }
    );

    let out = String::from_utf8(buf).expect("report is UTF-8");
    assert!(out.contains("Skill Validation Report"));
    assert!(out.contains("[PASS] alpha"));
    assert!(out.contains("[FAIL] beta"));
    assert!(out.contains("    ERROR: SKILL.md not found"));
    assert!(out.contains("Summary: 2 skills validated"));

    // Sorted processing order
    let alpha = out.find("[PASS] alpha").expect("alpha line");
    let beta = out.find("[FAIL] beta").expect("beta line");
    assert!(alpha < beta);
}

#[test]
fn test_run_report_empty_corpus() {
    let tmp = tempfile::tempdir().expect("create temp dir");

    let mut buf = Vec::new();
    let mut reporter = Reporter::new(&mut buf, false);
    let summary = run_report(tmp.path(), &engine(), &mut reporter).expect("run report");

    assert_eq!(summary, Summary::default());

    let out = String::from_utf8(buf).expect("report is UTF-8");
    assert!(out.contains("Summary: 0 skills validated"));
    assert!(out.contains("  Errors: 0"));
    assert!(out.contains("  Warnings: 0"));
}

#[test]
fn test_run_report_missing_root() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let missing = tmp.path().join("nope");

    let mut buf = Vec::new();
    let mut reporter = Reporter::new(&mut buf, false);
    let err = run_report(&missing, &engine(), &mut reporter).expect_err("missing root");
    assert!(err.to_string().contains("Skills directory not found"));

    // Nothing was printed before the fatal condition was detected
    assert!(buf.is_empty());
}
