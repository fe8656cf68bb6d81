#![cfg(unix)]

use mecab_rs::{MeCab, MeCabConfig, MeCabError};

/// Stand-in analyzer used instead of a real `mecab` install. It echoes its
/// stdin back in the output format selected by the `-O` flag, mirroring what
/// the real tool emits for a single token.
const STAND_IN_ANALYZER: &str = r#"
text=$(cat)
case "$1" in
-Owakati|-Oyomi)
    printf '%s \n' "$text"
    ;;
-Odump)
    printf '0 %s dummy,*,*,*,*,*,*,*,* 0 0 0 0 0 0 0 0 0.000000 0.000000 0.000000 1\n' "$text"
    ;;
-Ochasen|-Ochasen2)
    printf '%s\tヨミ\t%s\t名詞-一般\t\t\nEOS\n' "$text" "$text"
    ;;
-Osimple)
    printf '%s\t名詞-一般\nEOS\n' "$text"
    ;;
*)
    printf '%s\tdummy,*,*,*,*,*,*,*,*\nEOS\n' "$text"
    ;;
esac
"#;

fn stand_in_mecab() -> MeCab {
    script_mecab(STAND_IN_ANALYZER)
}

fn script_mecab(script: &str) -> MeCab {
    MeCab::new(["sh", "-c", script, "stand-in-mecab"]).expect("non-empty command")
}

#[test]
fn parse_decodes_one_word_per_token_line() {
    let words = stand_in_mecab().parse("あいうえお").expect("parse");

    assert_eq!(words.len(), 1);
    assert_eq!(words[0].surface, "あいうえお");
    assert_eq!(words[0].feature, "dummy");
    assert_eq!(words[0].feature_details, ["*", "*", "*"]);
    assert_eq!(words[0].conjugation_forms, ["*", "*"]);
    assert_eq!(words[0].original_form, "*");
    assert_eq!(words[0].reading.as_deref(), Some("*"));
    assert_eq!(words[0].pronunciation.as_deref(), Some("*"));
}

#[test]
fn dump_decodes_one_lattice_node() {
    let nodes = stand_in_mecab().dump("あいうえお").expect("dump");

    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].node_id, 0);
    assert_eq!(nodes[0].word.surface, "あいうえお");
    assert_eq!(nodes[0].word.feature, "dummy");
    assert_eq!(nodes[0].character_start_byte, 0);
    assert_eq!(nodes[0].alpha, 0.0);
    assert_eq!(nodes[0].prob, 0.0);
    assert_eq!(nodes[0].cost, Some(1));
}

#[test]
fn chasen_decodes_tab_separated_fields() {
    let words = stand_in_mecab().chasen("猫", false).expect("chasen");

    assert_eq!(words.len(), 1);
    assert_eq!(words[0].surface, "猫");
    assert_eq!(words[0].feature, "ヨミ");
    assert_eq!(words[0].feature_details[0], "猫");
    assert_eq!(words[0].feature_details[1], "名詞-一般");
}

#[test]
fn chasen_with_spaces_uses_the_same_grammar() {
    let words = stand_in_mecab().chasen("猫", true).expect("chasen2");
    assert_eq!(words[0].surface, "猫");
    assert_eq!(words[0].feature, "ヨミ");
}

#[test]
fn simple_decodes_surface_and_part_of_speech_only() {
    let words = stand_in_mecab().simple("猫").expect("simple");

    assert_eq!(words.len(), 1);
    assert_eq!(words[0].surface, "猫");
    assert_eq!(words[0].feature, "名詞-一般");
    assert_eq!(words[0].reading, None);
}

#[test]
fn wakati_drops_the_join_artifact() {
    let surfaces = stand_in_mecab().wakati("あ いうえ お").expect("wakati");
    assert_eq!(surfaces, ["あ", "いうえ", "お"]);
}

#[test]
fn yomi_returns_the_bare_reading_string() {
    let reading = stand_in_mecab().yomi("あいうえお").expect("yomi");
    assert_eq!(reading, "あいうえお");
}

#[test]
fn non_zero_exit_surfaces_stderr_as_run_failure() {
    let mecab = script_mecab("cat >/dev/null; echo 'analyzer blew up' >&2; exit 2");
    let error = mecab.parse("猫").unwrap_err();

    assert!(matches!(error, MeCabError::RunFailure(_)));
    assert_eq!(
        error.to_string(),
        "Failed to run MeCab correctly: analyzer blew up"
    );
}

#[test]
fn run_failure_falls_back_to_stdout_then_exit_status() {
    let mecab = script_mecab("cat >/dev/null; echo 'written to stdout'; exit 3");
    let error = mecab.dump("猫").unwrap_err();
    assert_eq!(
        error.to_string(),
        "Failed to run MeCab correctly: written to stdout"
    );

    let mecab = script_mecab("cat >/dev/null; exit 4");
    let error = mecab.wakati("猫").unwrap_err();
    assert!(matches!(error, MeCabError::RunFailure(_)));
    assert!(error.to_string().contains("process exited with status"));
}

#[test]
fn every_operation_fails_on_non_zero_exit() {
    let mecab = script_mecab("cat >/dev/null; exit 1");

    assert!(mecab.parse("猫").is_err());
    assert!(mecab.dump("猫").is_err());
    assert!(mecab.chasen("猫", false).is_err());
    assert!(mecab.simple("猫").is_err());
    assert!(mecab.wakati("猫").is_err());
    assert!(mecab.yomi("猫").is_err());
}

#[test]
fn missing_executable_is_a_run_failure() {
    let mecab = MeCab::new(["/nonexistent/mecab-rs-test-binary"]).expect("non-empty command");
    let error = mecab.parse("猫").unwrap_err();
    assert!(matches!(error, MeCabError::RunFailure(_)));
}

#[test]
fn working_directory_override_applies_to_the_child() {
    let config = MeCabConfig::default().with_working_dir("/");
    let mecab = MeCab::from_config(
        ["sh", "-c", "cat >/dev/null; printf '%s \\n' \"$(pwd)\"", "stand-in-mecab"],
        config,
    )
    .expect("non-empty command");

    assert_eq!(mecab.yomi("無視される").expect("yomi"), "/");
}

#[test]
fn environment_overrides_reach_the_child() {
    let config = MeCabConfig::default().with_env_var("MECAB_RS_TEST_VAR", "ねこ");
    let mecab = MeCab::from_config(
        [
            "sh",
            "-c",
            "cat >/dev/null; printf '%s \\n' \"$MECAB_RS_TEST_VAR\"",
            "stand-in-mecab",
        ],
        config,
    )
    .expect("non-empty command");

    assert_eq!(mecab.yomi("無視される").expect("yomi"), "ねこ");
}

#[test]
fn empty_input_yields_empty_collections() {
    let mecab = script_mecab("cat >/dev/null; printf 'EOS\\n'");
    assert!(mecab.parse("").expect("parse").is_empty());

    let mecab = script_mecab("cat >/dev/null; printf '\\n'");
    assert!(mecab.dump("").expect("dump").is_empty());

    let mecab = script_mecab("cat >/dev/null; printf '\\n'");
    assert!(mecab.wakati("").expect("wakati").is_empty());
}
