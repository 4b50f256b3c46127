use typewriter_core::{NoJitter, UniformJitter, WordsetError};
use typewriter_css::{
    generate_css, generate_stylesheet, generate_stylesheet_with, Block, CssError, Defaults,
    PluginOptions,
};
use typewriter_test_fixtures::options;

fn render_fixture(name: &str, seed: u64) -> String {
    let opts: PluginOptions = options::load(name).expect("options fixture");
    generate_stylesheet_with(&opts, &Defaults::default(), &mut UniformJitter::seeded(seed, 0.5))
        .expect("fixture renders")
        .to_string()
}

#[test]
fn fixtures_contain_expected_fragments() {
    for name in ["defaults", "basic", "advanced"] {
        let css = render_fixture(name, 3);
        let fragments = options::expected_fragments(name).unwrap();
        assert!(!fragments.is_empty(), "{name} has no expectations");
        for fragment in fragments {
            assert!(
                css.contains(&fragment),
                "{name}: missing fragment\n{fragment}\n--- in ---\n{css}"
            );
        }
    }
}

#[test]
fn blocks_are_grouped_by_kind() {
    let opts = PluginOptions::from_json(
        r#"{"wordsets": {"a": {"words": ["x"]}, "b": {"words": ["y"]}}}"#,
    )
    .unwrap();
    let sheet = generate_stylesheet(&opts).unwrap();
    let names: Vec<String> = sheet
        .blocks
        .iter()
        .map(|b| match b {
            Block::Keyframes(k) => k.name.clone(),
            Block::Rule(r) => r.selector.clone(),
        })
        .collect();
    assert_eq!(
        names,
        vec![
            "blink-caret-a",
            "blink-caret-b",
            "write-a",
            "write-b",
            ".type-a::after",
            ".type-b::after",
        ]
    );
}

#[test]
fn names_and_content_are_escaped() {
    let opts: PluginOptions = options::load("escaping").unwrap();
    let sheet = generate_stylesheet_with(&opts, &Defaults::default(), &mut NoJitter).unwrap();
    let css = sheet.to_string();

    assert!(sheet.keyframes("blink-caret-\\31st\\ hero").is_some());
    assert!(sheet.keyframes("write-\\-9lives").is_some());
    assert!(sheet.rule(".type-1st\\ hero::after").is_some());
    assert!(sheet.rule(".type--9lives::after").is_some());

    assert!(css.contains("content: \"say \\\"hi\\\"\""));
    assert!(css.contains("content: \"back\\\\slash\""));

    // no erase and a finite repeat: the cycle ends on the last word
    let write = sheet.keyframes("write-\\31st\\ hero").unwrap();
    let to = write.frames.iter().find(|r| r.selector == "to").unwrap();
    assert_eq!(to.declarations[0].value, "\"na\\EFve\"");

    let utility = sheet.rule(".type-1st\\ hero::after").unwrap();
    assert!(utility.declarations[3].value.ends_with(" 3 forwards"));
}

#[test]
fn invalid_wordsets_are_rejected() {
    let err = generate_css(r#"{"wordsets": {"empty": {"words": []}}}"#).unwrap_err();
    assert!(matches!(
        err,
        CssError::InvalidWordset {
            source: WordsetError::EmptyWords,
            ..
        }
    ));

    let err = generate_css(
        r#"{"wordsets": {"still": {"writeSpeed": 0, "eraseSpeed": 0, "pauseBetween": 0}}}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("'still'"));
}

#[test]
fn blank_options_render_the_example() {
    let css = generate_css("").unwrap();
    assert!(css.contains("@keyframes write-example {"));
    assert!(css.contains(".type-example::after {"));
}
