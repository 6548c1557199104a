/*!
 * End-to-end package workflow tests
 *
 * Runs the controller flows over real temp directories with a mock
 * provider: translate a package, revise it from a sheet, preview a sheet.
 */

use std::fs;

use scormtran::app_config::Config;
use scormtran::app_controller::Controller;
use scormtran::providers::mock::MockTranslator;
use scormtran::tabular::read_revision_rows;

use crate::common::{create_temp_dir, create_test_file, init_test_logging, write_sample_package};

/// Test the full translation flow: package in, package + audit sheet out
#[tokio::test]
async fn test_runTranslation_withSamplePackage_shouldProduceOutputAndSheet() {
    init_test_logging();
    let temp_dir = create_temp_dir().unwrap();
    let input_dir = temp_dir.path().join("course");
    let output_dir = temp_dir.path().join("course-out");
    let sheet_path = temp_dir.path().join("ES-translations.csv");
    write_sample_package(&input_dir).unwrap();

    let controller = Controller::with_config(Config::default()).unwrap();
    let translator = MockTranslator::working();

    let summary = controller
        .run_translation(&input_dir, &output_dir, &sheet_path, &translator)
        .await
        .unwrap();

    assert_eq!(summary.files, 2);
    assert_eq!(summary.translated, 5);
    assert_eq!(summary.skipped, 0);

    // Documents are translated in place of the originals
    let index = fs::read_to_string(output_dir.join("index.html")).unwrap();
    assert!(index.contains("[ES] Welcome"));
    assert!(index.contains("[ES] world"));
    let quiz = fs::read_to_string(output_dir.join("pages/quiz.html")).unwrap();
    assert!(quiz.contains("[ES] Question one"));

    // Non-HTML assets are carried over untouched
    let css = fs::read_to_string(output_dir.join("style.css")).unwrap();
    assert_eq!(css, "body { margin: 0; }");

    // The input package is never mutated
    let original = fs::read_to_string(input_dir.join("index.html")).unwrap();
    assert!(original.contains("Welcome"));
    assert!(!original.contains("[ES]"));
}

/// Test that the audit sheet matches the translated package row for row
#[tokio::test]
async fn test_runTranslation_withSamplePackage_shouldWriteOrderedAuditSheet() {
    let temp_dir = create_temp_dir().unwrap();
    let input_dir = temp_dir.path().join("course");
    let output_dir = temp_dir.path().join("course-out");
    let sheet_path = temp_dir.path().join("ES-translations.csv");
    write_sample_package(&input_dir).unwrap();

    let controller = Controller::with_config(Config::default()).unwrap();
    let translator = MockTranslator::working();

    controller
        .run_translation(&input_dir, &output_dir, &sheet_path, &translator)
        .await
        .unwrap();

    let sheet = fs::read_to_string(&sheet_path).unwrap();
    let rows = read_revision_rows(&sheet).unwrap();

    let keys: Vec<(String, String)> = rows
        .into_iter()
        .map(|row| (row.file_name, row.original_text))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("index.html".to_string(), "Welcome".to_string()),
            ("index.html".to_string(), "Hello ".to_string()),
            ("index.html".to_string(), "world".to_string()),
            ("quiz.html".to_string(), "Question one".to_string()),
            ("quiz.html".to_string(), "Question two".to_string()),
        ]
    );
}

/// Test the revision flow over a package directory
#[test]
fn test_runRevision_withMatchingSheet_shouldRewritePackage() {
    let temp_dir = create_temp_dir().unwrap();
    let input_dir = temp_dir.path().join("course");
    let output_dir = temp_dir.path().join("REVISED-course");
    create_test_file(
        &input_dir,
        "index.html",
        "<!DOCTYPE html><html><head></head><body><p>Hola mundo</p></body></html>",
    )
    .unwrap();
    create_test_file(&input_dir, "notes.txt", "asset").unwrap();
    let sheet_path = create_test_file(
        temp_dir.path(),
        "revisions.csv",
        "File Name,Original Text,Revision\nindex.html,Hola,Bonjour\nindex.html,missing text,x\n",
    )
    .unwrap();

    let controller = Controller::with_config(Config::default()).unwrap();
    let summary = controller
        .run_revision(&input_dir, &sheet_path, &output_dir)
        .unwrap();

    assert_eq!(summary.files, 1);
    assert_eq!(summary.applied, 1);

    let revised = fs::read_to_string(output_dir.join("index.html")).unwrap();
    assert!(revised.contains("Bonjour mundo"));

    // Assets are mirrored, and the input stays as uploaded
    assert_eq!(
        fs::read_to_string(output_dir.join("notes.txt")).unwrap(),
        "asset"
    );
    let original = fs::read_to_string(input_dir.join("index.html")).unwrap();
    assert!(original.contains("Hola mundo"));
}

/// Test the preview flow: report only, nothing written
#[test]
fn test_runPreview_withMixedSheet_shouldReportOnlyMatches() {
    let temp_dir = create_temp_dir().unwrap();
    let input_dir = temp_dir.path().join("course");
    create_test_file(
        &input_dir,
        "index.html",
        "<!DOCTYPE html><html><head></head><body><p>Hola mundo</p></body></html>",
    )
    .unwrap();
    let sheet_path = create_test_file(
        temp_dir.path(),
        "revisions.csv",
        "File Name,Original Text,Revision\nindex.html,Hola,Bonjour\nindex.html,gone text,x\nother.html,Hola,y\n",
    )
    .unwrap();

    let controller = Controller::with_config(Config::default()).unwrap();
    let report = controller.run_preview(&input_dir, &sheet_path).unwrap();

    assert_eq!(report.len(), 1);
    assert_eq!(report[0].file, "index.html");
    assert_eq!(report[0].matches.len(), 1);
    assert_eq!(report[0].matches[0].original_text, "Hola");

    // Preview never touches the package
    let original = fs::read_to_string(input_dir.join("index.html")).unwrap();
    assert!(original.contains("Hola mundo"));
}

/// Test that a malformed sheet aborts the revision flow before any writes
#[test]
fn test_runRevision_withMalformedSheet_shouldFailFast() {
    let temp_dir = create_temp_dir().unwrap();
    let input_dir = temp_dir.path().join("course");
    let output_dir = temp_dir.path().join("REVISED-course");
    create_test_file(&input_dir, "index.html", "<p>text</p>").unwrap();
    let sheet_path = create_test_file(
        temp_dir.path(),
        "revisions.csv",
        "Wrong,Columns\nfoo,bar\n",
    )
    .unwrap();

    let controller = Controller::with_config(Config::default()).unwrap();
    let result = controller.run_revision(&input_dir, &sheet_path, &output_dir);

    assert!(result.is_err());
    assert!(!output_dir.exists());
}

/// Test that an empty package directory is rejected
#[test]
fn test_runPreview_withNoHtmlFiles_shouldFail() {
    let temp_dir = create_temp_dir().unwrap();
    let input_dir = temp_dir.path().join("course");
    create_test_file(&input_dir, "notes.txt", "asset").unwrap();
    let sheet_path = create_test_file(
        temp_dir.path(),
        "revisions.csv",
        "File Name,Original Text,Revision\n",
    )
    .unwrap();

    let controller = Controller::with_config(Config::default()).unwrap();
    assert!(controller.run_preview(&input_dir, &sheet_path).is_err());
}
