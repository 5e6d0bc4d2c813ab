//! Integration tests for string-kind classification and resume rules.

use firefly_classify::{QuoteStyle, ResumeState, ScanState, StringKind};

#[test]
fn test_interpolated_triple_starts_multi_line() {
    let state = ResumeState::for_fragment("$\"\"\"<div>", ResumeState::default());
    assert_eq!(state.kind, StringKind::InterpolatedMultiLine);
    assert_eq!(state.state, ScanState::Default);
}

#[test]
fn test_interpolated_quote_starts_simple() {
    let state = ResumeState::for_fragment("$\"<div>", ResumeState::default());
    assert_eq!(state.kind, StringKind::InterpolatedSimple);
    assert_eq!(state.quoting, QuoteStyle::Escaped);
}

#[test]
fn test_verbatim_quote_starts_simple() {
    let state = ResumeState::for_fragment("@\"<div>\"", ResumeState::default());
    assert_eq!(state.kind, StringKind::Simple);
    assert_eq!(state.quoting, QuoteStyle::Verbatim);
}

#[test]
fn test_plain_quote_starts_simple() {
    let state = ResumeState::for_fragment("\"<div>\"", ResumeState::default());
    assert_eq!(state.kind, StringKind::Simple);
    assert_eq!(state.quoting, QuoteStyle::Escaped);
}

#[test]
fn test_fragment_opening_new_literal_resets_scanner() {
    let prior = ResumeState {
        kind: StringKind::InterpolatedSimple,
        state: ScanState::AttributeName,
        ..ResumeState::default()
    };
    let state = ResumeState::for_fragment("$\"<p>", prior);
    assert_eq!(state.state, ScanState::Default);
}

#[test]
fn test_leading_brace_resumes_prior_state() {
    let prior = ResumeState {
        kind: StringKind::InterpolatedSimple,
        state: ScanState::AttributeName,
        ..ResumeState::default()
    };
    assert_eq!(ResumeState::for_fragment("}f=\"x\">", prior), prior);
}

#[test]
fn test_multi_line_interior_line_resumes() {
    let prior = ResumeState {
        kind: StringKind::InterpolatedMultiLine,
        state: ScanState::InsideAttributeList,
        ..ResumeState::default()
    };
    assert_eq!(ResumeState::for_fragment("  class=\"a\">", prior), prior);
}

#[test]
fn test_multi_line_terminator_resets() {
    let prior = ResumeState {
        kind: StringKind::InterpolatedMultiLine,
        state: ScanState::InsideAttributeList,
        ..ResumeState::default()
    };
    let state = ResumeState::for_fragment("\"\"\"", prior);
    assert_eq!(state, ResumeState::default());
}

#[test]
fn test_unrecognized_fragment_is_unknown() {
    let state = ResumeState::for_fragment("plain text", ResumeState::default());
    assert_eq!(state.kind, StringKind::Unknown);
}

#[test]
fn test_trailing_triple_quote_closes() {
    let current = ResumeState {
        kind: StringKind::InterpolatedMultiLine,
        state: ScanState::AfterCloseAngleBracket,
        ..ResumeState::default()
    };
    let carried = ResumeState::after_fragment("</div>\"\"\"", current);
    assert_eq!(carried, ResumeState::default());
}

#[test]
fn test_trailing_quote_closes_single_line_literal() {
    let current = ResumeState {
        kind: StringKind::InterpolatedSimple,
        state: ScanState::AfterCloseAngleBracket,
        ..ResumeState::default()
    };
    let carried = ResumeState::after_fragment("}</b>\"", current);
    assert_eq!(carried, ResumeState::default());
}

#[test]
fn test_single_quote_does_not_close_multi_line_literal() {
    let current = ResumeState {
        kind: StringKind::InterpolatedMultiLine,
        state: ScanState::InsideElement,
        ..ResumeState::default()
    };
    assert_eq!(ResumeState::after_fragment("say \"", current), current);
}

#[test]
fn test_open_fragment_carries_state() {
    let current = ResumeState {
        kind: StringKind::InterpolatedSimple,
        state: ScanState::AttributeName,
        ..ResumeState::default()
    };
    assert_eq!(ResumeState::after_fragment("<a hre", current), current);
}
