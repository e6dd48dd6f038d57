//! Integration tests for the Markdown adapter

use chessmark::DiagramBuilder;

#[test]
fn test_plain_document_unchanged() {
    let document = "# Openings\n\nSome *text*.\r\n\n```rust\nfn main() {}\n```\n";
    let output = DiagramBuilder::default().render_markdown(document).unwrap();

    assert_eq!(output, document);
}

#[test]
fn test_container_replaced() {
    let document = "Before\n::: chess\ntitle demo\n|kl|__|\n:::\nAfter\n";
    let output = DiagramBuilder::default().render_markdown(document).unwrap();

    assert!(output.starts_with("Before\n<div"));
    assert!(output.ends_with("</div>\nAfter\n"));
    assert!(output.contains("Demo"));
    assert!(!output.contains(":::"));
}

#[test]
fn test_fenced_block_wrapped_in_pre() {
    let document = "```chess\n|qd|\n```\n";
    let output = DiagramBuilder::default().render_markdown(document).unwrap();

    assert!(output.starts_with(r#"<pre style="all:unset;"><div"#));
    assert!(output.ends_with("</pre>\n"));
    assert!(output.contains("#piece-qd"));
}

#[test]
fn test_other_language_mentioning_chess_unchanged() {
    let document = "```rust title=\"chess engine\"\nfn main() {}\n```\n\n```my_chess\n|kl|\n```\n";
    let output = DiagramBuilder::default().render_markdown(document).unwrap();

    assert_eq!(output, document);
}

#[test]
fn test_container_inside_other_fence_is_code() {
    let document = "~~~markdown\n::: chess\n|kl|\n:::\n~~~\n";
    let output = DiagramBuilder::default().render_markdown(document).unwrap();

    assert_eq!(output, document);
}

#[test]
fn test_unclosed_block_runs_to_end() {
    let document = "intro\n::: chess\n|kl|\n|pl|";
    let output = DiagramBuilder::default().render_markdown(document).unwrap();

    assert!(output.starts_with("intro\n<div"));
    assert_eq!(output.matches("<use").count(), 2);
}

#[test]
fn test_multiple_blocks_and_determinism() {
    let document = "::: chess\n|kl|\n:::\n\ntext\n\n```chess\n|kd|\n```\n";
    let builder = DiagramBuilder::default();

    let first = builder.render_markdown(document).unwrap();
    let second = builder.render_markdown(document).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.matches(r#"class="chess""#).count(), 2);
    assert!(first.contains("\n\ntext\n\n"));
}

#[test]
fn test_fragment_stays_one_html_block() {
    let document = "::: chess\n|kl|\n:::\n";
    let output = DiagramBuilder::default().render_markdown(document).unwrap();

    assert!(output.starts_with("<div"));
    assert!(!output.trim_end().contains("\n\n"), "{output}");
}
