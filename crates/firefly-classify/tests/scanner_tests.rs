//! Integration tests for the fragment scanner.

use firefly_classify::{
    Category, ClassifiedSpan, HostCategory, ResumeState, ScanOutcome, ScanState, SpanCategory,
    scan_fragment,
};

/// Helper to scan a fragment from the initial state and return its spans
fn scan(fragment: &str) -> Vec<ClassifiedSpan> {
    let (outcome, _) = scan_fragment(fragment, 0, HostCategory::String, ResumeState::default());
    match outcome {
        ScanOutcome::Classified(spans) => spans,
        ScanOutcome::NotHtmlShaped => panic!("fragment should classify: {fragment}"),
    }
}

fn html(category: Category, offset: usize, length: usize) -> ClassifiedSpan {
    ClassifiedSpan::new(offset, length, SpanCategory::Html(category))
}

fn host(category: HostCategory, offset: usize, length: usize) -> ClassifiedSpan {
    ClassifiedSpan::new(offset, length, SpanCategory::Host(category))
}

#[test]
fn test_simple_element() {
    let spans = scan("<div></div>");
    assert_eq!(
        spans,
        vec![
            html(Category::Delimiter, 0, 1),
            html(Category::Element, 1, 3),
            html(Category::Delimiter, 4, 1),
            html(Category::Delimiter, 5, 1),
            html(Category::Delimiter, 6, 1),
            html(Category::Element, 7, 3),
            html(Category::Delimiter, 10, 1),
        ]
    );
}

#[test]
fn test_attribute_double_quoted() {
    let spans = scan(r#"<input type="text" />"#);
    assert_eq!(
        spans,
        vec![
            html(Category::Delimiter, 0, 1),
            html(Category::Element, 1, 5),
            html(Category::AttributeName, 7, 4),
            html(Category::Delimiter, 11, 1),
            html(Category::Quote, 12, 1),
            html(Category::AttributeValue, 13, 4),
            html(Category::Quote, 17, 1),
            html(Category::Delimiter, 19, 1),
            html(Category::Delimiter, 20, 1),
        ]
    );
}

#[test]
fn test_attribute_single_quoted() {
    let spans = scan("<a b='c d'>");
    assert_eq!(
        spans,
        vec![
            html(Category::Delimiter, 0, 1),
            html(Category::Element, 1, 1),
            html(Category::AttributeName, 3, 1),
            html(Category::Delimiter, 4, 1),
            html(Category::Quote, 5, 1),
            html(Category::AttributeValue, 6, 3),
            html(Category::Quote, 9, 1),
            html(Category::Delimiter, 10, 1),
        ]
    );
}

#[test]
fn test_unquoted_value_runs_to_fragment_end() {
    let spans = scan("<a b=c");
    assert_eq!(
        spans,
        vec![
            html(Category::Delimiter, 0, 1),
            html(Category::Element, 1, 1),
            html(Category::AttributeName, 3, 1),
            html(Category::Delimiter, 4, 1),
            html(Category::AttributeValue, 5, 1),
        ]
    );
}

#[test]
fn test_lit_binding_attribute() {
    let spans = scan("<p .value=${x}></p>");
    assert_eq!(
        spans,
        vec![
            html(Category::Delimiter, 0, 1),
            html(Category::Element, 1, 1),
            html(Category::LitAttributeName, 3, 1),
            html(Category::LitAttributeName, 4, 5),
            html(Category::LitAttributeName, 9, 1),
            html(Category::LitAttributeValue, 10, 1),
            html(Category::LitAttributeValue, 11, 1),
            html(Category::LitAttributeValue, 12, 1),
            html(Category::LitAttributeValue, 13, 1),
            html(Category::Delimiter, 14, 1),
            html(Category::Delimiter, 15, 1),
            html(Category::Delimiter, 16, 1),
            html(Category::Element, 17, 1),
            html(Category::Delimiter, 18, 1),
        ]
    );
}

#[test]
fn test_event_binding_sigil() {
    let spans = scan("<b @click=${f}>");
    assert_eq!(spans[2], html(Category::LitAttributeName, 3, 1));
    assert_eq!(spans[3], html(Category::LitAttributeName, 4, 5));
}

#[test]
fn test_free_text_keeps_host_category() {
    let spans = scan("<b>hi</b>");
    assert_eq!(
        spans,
        vec![
            html(Category::Delimiter, 0, 1),
            html(Category::Element, 1, 1),
            html(Category::Delimiter, 2, 1),
            host(HostCategory::String, 3, 2),
            html(Category::Delimiter, 5, 1),
            html(Category::Delimiter, 6, 1),
            html(Category::Element, 7, 1),
            html(Category::Delimiter, 8, 1),
        ]
    );
}

#[test]
fn test_braces_in_content_are_delimiters() {
    let spans = scan("<div>{x}</div>");
    assert_eq!(
        spans,
        vec![
            html(Category::Delimiter, 0, 1),
            html(Category::Element, 1, 3),
            html(Category::Delimiter, 4, 1),
            html(Category::Delimiter, 5, 1),
            host(HostCategory::String, 6, 1),
            html(Category::Delimiter, 7, 1),
            html(Category::Delimiter, 8, 1),
            html(Category::Delimiter, 9, 1),
            html(Category::Element, 10, 3),
            html(Category::Delimiter, 13, 1),
        ]
    );
}

#[test]
fn test_literal_quotes_are_not_markup() {
    let spans = scan("\"<div>\"");
    assert_eq!(
        spans,
        vec![
            html(Category::Delimiter, 1, 1),
            html(Category::Element, 2, 3),
            html(Category::Delimiter, 5, 1),
        ]
    );
}

#[test]
fn test_closing_quote_resets_carried_state() {
    let (_, carried) =
        scan_fragment("\"<div>\"", 0, HostCategory::String, ResumeState::default());
    assert_eq!(carried, ResumeState::default());
}

#[test]
fn test_digit_after_open_angle_is_not_markup() {
    let (outcome, carried) =
        scan_fragment("<1bad>", 0, HostCategory::String, ResumeState::default());
    assert_eq!(outcome, ScanOutcome::NotHtmlShaped);
    assert_eq!(carried, ResumeState::default());
}

#[test]
fn test_garbage_in_attribute_list_is_not_markup() {
    let (outcome, _) = scan_fragment("<a ~b>", 0, HostCategory::String, ResumeState::default());
    assert_eq!(outcome, ScanOutcome::NotHtmlShaped);
}

#[test]
fn test_resume_across_interpolation_hole() {
    let (outcome, carried) =
        scan_fragment("<a hre", 0, HostCategory::String, ResumeState::default());
    assert_eq!(
        outcome,
        ScanOutcome::Classified(vec![
            html(Category::Delimiter, 0, 1),
            html(Category::Element, 1, 1),
            html(Category::AttributeName, 3, 3),
        ])
    );
    assert_eq!(carried.state, ScanState::AttributeName);

    // The continuation begins at the hole's closing brace.
    let (outcome, _) = scan_fragment("}f=\"x\">", 6, HostCategory::String, carried);
    assert_eq!(
        outcome,
        ScanOutcome::Classified(vec![
            html(Category::Delimiter, 6, 1),
            html(Category::AttributeName, 7, 1),
            html(Category::Delimiter, 8, 1),
            html(Category::Quote, 9, 1),
            html(Category::AttributeValue, 10, 1),
            html(Category::Quote, 11, 1),
            html(Category::Delimiter, 12, 1),
        ])
    );
}

#[test]
fn test_verbatim_doubled_quotes_delimit_values() {
    let (outcome, carried) = scan_fragment(
        "@\"<a b=\"\"x\"\" />\"",
        0,
        HostCategory::String,
        ResumeState::default(),
    );
    assert_eq!(
        outcome,
        ScanOutcome::Classified(vec![
            html(Category::Delimiter, 2, 1),
            html(Category::Element, 3, 1),
            html(Category::AttributeName, 5, 1),
            html(Category::Delimiter, 6, 1),
            html(Category::Quote, 7, 1),
            html(Category::Quote, 8, 1),
            html(Category::AttributeValue, 9, 1),
            html(Category::Quote, 10, 1),
            html(Category::Quote, 11, 1),
            html(Category::Delimiter, 13, 1),
            html(Category::Delimiter, 14, 1),
        ])
    );
    assert_eq!(carried, ResumeState::default());
}

#[test]
fn test_escaped_quote_delimits_value() {
    // `\"` around the value in a plain interpolated literal
    let spans = scan("$\"<a b=\\\"x\\\">\"");
    assert_eq!(
        spans,
        vec![
            html(Category::Delimiter, 2, 1),
            html(Category::Element, 3, 1),
            html(Category::AttributeName, 5, 1),
            html(Category::Delimiter, 6, 1),
            html(Category::Quote, 8, 1),
            html(Category::AttributeValue, 9, 1),
            html(Category::Quote, 11, 1),
            html(Category::Delimiter, 12, 1),
        ]
    );
}

#[test]
fn test_self_closing_tag() {
    let spans = scan("<br/>");
    assert_eq!(
        spans,
        vec![
            html(Category::Delimiter, 0, 1),
            html(Category::Element, 1, 2),
            html(Category::Delimiter, 3, 1),
            html(Category::Delimiter, 4, 1),
        ]
    );
}

#[test]
fn test_scan_is_deterministic() {
    let first = scan(r#"<input type="text" />"#);
    let second = scan(r#"<input type="text" />"#);
    assert_eq!(first, second);
}

#[test]
fn test_spans_are_ordered_and_disjoint() {
    let spans = scan(r#"<div class="a">{x}</div>"#);
    for pair in spans.windows(2) {
        assert!(pair[0].end() <= pair[1].offset, "{} overlaps {}", pair[0], pair[1]);
    }
    for span in &spans {
        assert!(span.length > 0);
    }
}
