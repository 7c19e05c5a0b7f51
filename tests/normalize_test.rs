use feed_normalize::sanitize::{cut_empty_tags_with_options, cut_tags_with_options};
use feed_normalize::text::paragraphing_with_options;
use feed_normalize::{
    cut_empty_tags, cut_tags, cut_tags_attributes, is_not_empty, normalize_space_in_string, paragraphing,
    remove_spaces, strip_tags, trim_class, trim_whitespace, uc_first, uc_words, Options,
};
use rstest::rstest;

#[test]
fn description_pipeline_produces_clean_markup() {
    let raw = r#"
        <div class="description">
            <p class="lead">Soft   combed cotton.</p>
            <p> </p>
            <ul class="care"><li></li></ul>
            <span data-x="1">Machine wash.</span>
            <a href="/size-guide">Size guide</a>
        </div>
    "#;

    let cleaned = remove_spaces(&cut_empty_tags(&cut_tags(raw, true, &[])));
    assert_eq!(cleaned, "<p>Soft combed cotton.</p> <span>Machine wash.</span>");
}

#[test]
fn plain_text_description_gets_paragraphs() {
    let text = remove_spaces("Durable canvas.\nWater resistant.  Fits 15\" laptops. Lifetime warranty.");
    assert_eq!(
        paragraphing(&text, 2),
        "<p>Durable canvas.Water resistant. Fits 15\" laptops.</p><p>Lifetime warranty.</p>"
    );
}

#[rstest]
#[case::spaces("  Organic   Kale  ")]
#[case::line_breaks("Organic\n\nKale\r\nChips")]
#[case::nbsp("\u{a0}Organic\u{a0}\u{a0}Kale")]
#[case::tabs("\tOrganic\t\tKale\t")]
#[case::empty("")]
fn remove_spaces_is_idempotent(#[case] text: &str) {
    let once = remove_spaces(text);
    assert_eq!(remove_spaces(&once), once);
    assert!(!once.starts_with(' ') && !once.ends_with(' '));
    assert!(!once.contains('\n'));
    assert!(!once.contains("  "));
}

#[rstest]
#[case::class_and_style(r#"<p class="a" style="b">x</p>"#)]
#[case::self_closing("<img src=\"a.png\"/><br />")]
#[case::already_bare("<ul><li>x</li></ul>")]
fn cut_tags_attributes_is_idempotent(#[case] markup: &str) {
    let once = cut_tags_attributes(markup);
    assert_eq!(cut_tags_attributes(&once), once);
}

#[test]
fn normalize_space_keeps_lines() {
    assert_eq!(
        normalize_space_in_string("Ingredients:\n\n\n   oats,  honey\r\n\tsalt"),
        "Ingredients:\noats, honey\nsalt"
    );
}

#[rstest]
#[case("", false)]
#[case("   \n\t  ", false)]
#[case("\u{a0}", false)]
#[case("a", true)]
#[case("0", true)]
fn is_not_empty_cases(#[case] text: &str, #[case] expected: bool) {
    assert_eq!(is_not_empty(text), expected);
}

#[test]
fn case_helpers() {
    assert_eq!(uc_first("über soft"), "Über soft");
    assert_eq!(uc_words("stainless steel water bottle"), "Stainless Steel Water Bottle");
    assert_eq!(uc_words(""), "");
}

#[test]
fn trimming_helpers() {
    assert_eq!(trim_whitespace("\n  Blue / Navy \t"), "Blue / Navy");
    assert_eq!(trim_class("|| Blue | Navy ||", r"|\s").expect("valid class"), "Blue | Navy");
}

#[test]
fn strip_tags_without_allow_list_leaves_text() {
    assert_eq!(strip_tags("<h3>Care</h3><p>Hand wash<br/>only</p>", &[]), "CareHand washonly");
}

#[test]
fn cut_empty_tags_nested_shells() {
    assert_eq!(cut_empty_tags("<div><p><span> </span></p></div>Text"), "Text");
    assert_eq!(cut_empty_tags("<p></div>"), "<p></div>");
    assert_eq!(cut_empty_tags("<P></p>x"), "x");
}

#[test]
fn options_drive_the_configurable_normalizers() {
    let options = Options::from_json(
        r#"{"keep_structural_tags": false, "extra_tags": ["b"], "sentences_per_paragraph": 1, "max_empty_tag_passes": 1}"#,
    )
    .expect("valid options JSON");

    assert_eq!(cut_tags_with_options("<p>Hi <b class=\"x\">there</b></p>", &options), "Hi <b>there</b>");
    assert_eq!(paragraphing_with_options("One. Two.", &options), "<p>One.</p><p>Two.</p>");
    // One pass removes the inner pair only.
    assert_eq!(cut_empty_tags_with_options("<p><b></b></p>", &options), "<p></p>");
}

#[test]
fn options_default_values() {
    let options = Options::default();
    assert!(options.keep_structural_tags);
    assert!(options.extra_tags.is_empty());
    assert_eq!(options.sentences_per_paragraph, 3);
    assert_eq!(options.max_empty_tag_passes, 64);
}
