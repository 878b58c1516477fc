use coursemark_engine::{ContentBlock, RoundTrip, check_round_trip, parse_document, render_document};
use pretty_assertions::assert_eq;

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn assert_fixture(name: &str, expected_types: &[&str]) {
    let text = read_fixture(name);
    let blocks = parse_document(&text);

    let types: Vec<&str> = blocks.iter().map(ContentBlock::type_name).collect();
    assert_eq!(types, expected_types, "block kinds of {name}");

    assert_eq!(render_document(&blocks), text, "{name} should survive a load/save cycle");
}

#[test]
fn fixture_course_intro() {
    assert_fixture("course_intro", &["heading1", "heading2", "text", "list"]);
}

#[test]
fn fixture_lesson_with_video() {
    assert_fixture(
        "lesson_with_video",
        &[
            "heading1", "text", "video", "heading2", "list", "heading3", "text", "text",
        ],
    );
}

#[test]
fn fixture_blank_lines() {
    assert_fixture(
        "blank_lines",
        &[
            "text", "text", "list", "text", "list", "text", "text", "text", "text",
        ],
    );
}

#[test]
fn fixture_asterisk_bullets_is_rewritten() {
    let text = read_fixture("asterisk_bullets");
    let blocks = parse_document(&text);

    assert_eq!(
        blocks,
        vec![
            ContentBlock::heading1("Shopping"),
            ContentBlock::list(["eggs", "milk", "bread"]),
        ]
    );
    assert_eq!(
        check_round_trip(&text),
        RoundTrip::Unstable {
            line: 2,
            original: Some("* eggs".to_string()),
            rendered: Some("- eggs".to_string()),
        }
    );
}

#[test]
fn end_to_end_course_intro() {
    let text = read_fixture("course_intro");

    assert_eq!(
        parse_document(&text),
        vec![
            ContentBlock::heading1("Heading One"),
            ContentBlock::heading2("Heading Two"),
            ContentBlock::text("Some text content."),
            ContentBlock::list(["List item one", "List item two"]),
        ]
    );
}

#[test]
fn lesson_video_url_is_captured() {
    let blocks = parse_document(&read_fixture("lesson_with_video"));
    assert_eq!(
        blocks[2],
        ContentBlock::video("https://www.youtube.com/embed/dQw4w9WgXcQ")
    );
}

#[test]
fn video_block_renders_exact_embed_markup() {
    let blocks = vec![ContentBlock::video(
        "https://www.youtube.com/embed/testvideo123",
    )];
    let text = render_document(&blocks);

    insta::assert_snapshot!(text, @r#"<iframe width="560" height="315" src="https://www.youtube.com/embed/testvideo123" title="YouTube video player" frameborder="0" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share" referrerpolicy="strict-origin-when-cross-origin" allowfullscreen></iframe>"#);
    assert_eq!(parse_document(&text), blocks);
}

#[test]
fn stored_heading_video_and_text() {
    let embed = render_document(&[ContentBlock::video(
        "https://www.youtube.com/embed/testvideo123",
    )]);
    let text = format!("# Heading One\n{embed}\nSome text content.");

    assert_eq!(
        parse_document(&text),
        vec![
            ContentBlock::heading1("Heading One"),
            ContentBlock::video("https://www.youtube.com/embed/testvideo123"),
            ContentBlock::text("Some text content."),
        ]
    );
}

#[test]
fn wrapped_iframe_loads_as_text() {
    let text = "<iframe src=\"https://www.youtube.com/embed/testvideo123\"\n></iframe>";
    assert_eq!(
        parse_document(text),
        vec![
            ContentBlock::text("<iframe src=\"https://www.youtube.com/embed/testvideo123\""),
            ContentBlock::text("></iframe>"),
        ]
    );
}
