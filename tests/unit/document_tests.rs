/*!
 * Tests for the HTML document text model
 *
 * Covers leaf collection order, the excluded-tag invariant, whitespace
 * preservation, in-place mutation and structure-preserving serialization.
 */

use scormtran::document::{DocumentTextModel, EXCLUDED_TAGS};

use crate::common::sample_course_html;

/// Test leaf collection in document order
#[test]
fn test_parse_withCoursePage_shouldCollectLeavesInDocumentOrder() {
    let model = DocumentTextModel::parse(sample_course_html()).unwrap();

    let texts: Vec<String> = model
        .text_leaves()
        .iter()
        .map(|leaf| model.leaf_text(leaf))
        .collect();

    assert_eq!(texts, vec!["Welcome", "Hello ", "world"]);
}

/// Test that leaf indexes follow collection order
#[test]
fn test_parse_withCoursePage_shouldNumberLeavesSequentially() {
    let model = DocumentTextModel::parse(sample_course_html()).unwrap();

    for (i, leaf) in model.text_leaves().iter().enumerate() {
        assert_eq!(leaf.index(), i);
    }
}

/// Test parent tag context of each leaf
#[test]
fn test_parse_withCoursePage_shouldRecordParentTags() {
    let model = DocumentTextModel::parse(sample_course_html()).unwrap();

    let tags: Vec<&str> = model
        .text_leaves()
        .iter()
        .map(|leaf| leaf.parent_tag())
        .collect();

    assert_eq!(tags, vec!["h1", "p", "b"]);
}

/// Test that non-content elements contribute no leaves
#[test]
fn test_parse_withExcludedElements_shouldSkipTheirText() {
    let html = r#"<!DOCTYPE html><html><head><title>Skip title</title><style>p { color: red; }</style></head><body><p>Keep me</p><script>var skip = "script text";</script><noscript><p>NoJS fallback</p></noscript></body></html>"#;
    let model = DocumentTextModel::parse(html).unwrap();

    let texts: Vec<String> = model
        .text_leaves()
        .iter()
        .map(|leaf| model.leaf_text(leaf))
        .collect();

    assert_eq!(texts, vec!["Keep me"]);
}

/// Test text authored inside link markup.
///
/// link is a void element, so lenient parsing hoists the stray text out of
/// it and drops the bogus end tag; the text must surface with the real
/// container's context, never as link content.
#[test]
fn test_parse_withTextInsideLinkMarkup_shouldNotAttributeTextToLink() {
    let html = r#"<!DOCTYPE html><html><head></head><body><div><link rel="stylesheet">stray link text</link></div></body></html>"#;
    let model = DocumentTextModel::parse(html).unwrap();

    let leaves = model.text_leaves();
    assert_eq!(leaves.len(), 1);
    assert_eq!(model.leaf_text(&leaves[0]), "stray link text");
    assert_eq!(leaves[0].parent_tag(), "div");
}

/// Test text authored inside meta markup; same void-element hoisting as link
#[test]
fn test_parse_withTextInsideMetaMarkup_shouldNotAttributeTextToMeta() {
    let html = r#"<!DOCTYPE html><html><head></head><body><div><meta name="x">stray meta text</meta></div></body></html>"#;
    let model = DocumentTextModel::parse(html).unwrap();

    let leaves = model.text_leaves();
    assert_eq!(leaves.len(), 1);
    assert_eq!(model.leaf_text(&leaves[0]), "stray meta text");
    assert_eq!(leaves[0].parent_tag(), "div");
}

/// Test the full exclusion set: no leaf ever reports an excluded context
#[test]
fn test_parse_withAllExcludedTags_shouldNeverReportExcludedContext() {
    let html = r#"<!DOCTYPE html><html><head><title>Doc title</title><meta charset="utf-8"><link href="a.css" rel="stylesheet"><style>body { margin: 0; }</style><script>var a = 1;</script></head><body><noscript>enable js</noscript><link>loose text</link><meta>more loose text</meta><p>visible</p></body></html>"#;
    let model = DocumentTextModel::parse(html).unwrap();

    for leaf in model.text_leaves() {
        assert!(
            !EXCLUDED_TAGS.contains(&leaf.parent_tag()),
            "leaf {:?} attributed to excluded element {}",
            model.leaf_text(leaf),
            leaf.parent_tag()
        );
    }

    let texts: Vec<String> = model
        .text_leaves()
        .iter()
        .map(|leaf| model.leaf_text(leaf))
        .collect();
    assert!(texts.contains(&"visible".to_string()));
    assert!(!texts.contains(&"Doc title".to_string()));
    assert!(!texts.contains(&"enable js".to_string()));
    assert!(!texts.iter().any(|t| t.contains("margin")));
    assert!(!texts.iter().any(|t| t.contains("var a")));
}

/// Test that whitespace-only text nodes are not leaves
#[test]
fn test_parse_withIndentedMarkup_shouldIgnoreWhitespaceNodes() {
    let html = "<!DOCTYPE html><html><head></head><body>\n  <div>\n    <p>content</p>\n  </div>\n</body></html>";
    let model = DocumentTextModel::parse(html).unwrap();

    let texts: Vec<String> = model
        .text_leaves()
        .iter()
        .map(|leaf| model.leaf_text(leaf))
        .collect();

    assert_eq!(texts, vec!["content"]);
}

/// Test that leading/trailing whitespace inside a leaf is preserved
#[test]
fn test_leafText_withPaddedText_shouldPreserveWhitespace() {
    let html = "<!DOCTYPE html><html><head></head><body><p>  padded  </p></body></html>";
    let model = DocumentTextModel::parse(html).unwrap();

    assert_eq!(model.text_leaves().len(), 1);
    assert_eq!(model.leaf_text(&model.text_leaves()[0]), "  padded  ");
}

/// Test documents with no translatable text at all
#[test]
fn test_parse_withEmptyBody_shouldCollectNoLeaves() {
    let html = "<!DOCTYPE html><html><head></head><body></body></html>";
    let model = DocumentTextModel::parse(html).unwrap();

    assert!(model.text_leaves().is_empty());
}

/// Test in-place text replacement
#[test]
fn test_setLeafText_withNewText_shouldRewriteOnlyThatLeaf() {
    let model = DocumentTextModel::parse(sample_course_html()).unwrap();
    let leaves = model.text_leaves();

    // leaves: "Welcome", "Hello ", "world"
    model.set_leaf_text(&leaves[2], "mundo");

    let output = model.serialize().unwrap();
    assert!(output.contains("<b>mundo</b>"));
    assert!(!output.contains("<b>world</b>"));
    // Untouched leaves and non-content text survive as-is
    assert!(output.contains("Hello "));
    assert!(output.contains(r#"var skip = "me";"#));
}

/// Test that serialization preserves markup structure
#[test]
fn test_serialize_withoutMutation_shouldPreserveStructure() {
    let html = r#"<!DOCTYPE html><html><head><title>T</title></head><body><div class="wrap" id="main"><p>Hello <b>world</b></p><!-- a comment --></div></body></html>"#;
    let model = DocumentTextModel::parse(html).unwrap();

    let output = model.serialize().unwrap();
    assert!(output.contains(r#"<div class="wrap" id="main">"#));
    assert!(output.contains("<p>Hello <b>world</b></p>"));
    assert!(output.contains("<!-- a comment -->"));
    assert!(output.contains("<title>T</title>"));
}

/// Test that a serialize/parse/serialize round trip is stable
#[test]
fn test_serialize_roundTrip_shouldBeIdempotent() {
    let first = DocumentTextModel::parse(sample_course_html())
        .unwrap()
        .serialize()
        .unwrap();
    let second = DocumentTextModel::parse(&first).unwrap().serialize().unwrap();

    assert_eq!(first, second);
}

/// Test replacing every leaf with its own text changes nothing structural
#[test]
fn test_setLeafText_withIdenticalText_shouldReproduceMarkup() {
    let model = DocumentTextModel::parse(sample_course_html()).unwrap();
    let baseline = model.serialize().unwrap();

    for leaf in model.text_leaves() {
        let text = model.leaf_text(leaf);
        model.set_leaf_text(leaf, &text);
    }

    assert_eq!(model.serialize().unwrap(), baseline);
}
