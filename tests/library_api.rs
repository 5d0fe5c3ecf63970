use jscleanup::prelude::*;
use jscleanup::tokenizer::{Comment, ParseError, Token, TokenKind, TokenVisitor};

const TEN: &str = "\n\n\n\n\n\n\n\n\n\n";

fn clean(source: &str, policy: &Policy) -> String {
    cleanup(source, "test.js", policy)
        .unwrap()
        .map_or_else(|| source.to_string(), |c| c.code)
}

fn policy(max: i32, eol: LineEnding) -> Policy {
    ConfigBuilder::new()
        .max_empty_lines(max)
        .line_endings(eol)
        .build_policy()
        .unwrap()
}

#[test]
fn test_squashes_around_template_literal() {
    let source = format!("{TEN}const s = `{TEN}`;{TEN}");
    assert_eq!(
        clean(&source, &policy(0, LineEnding::Unix)),
        format!("const s = `{TEN}`;\n")
    );
    assert_eq!(
        clean(&source, &policy(2, LineEnding::Unix)),
        format!("\n\nconst s = `{TEN}`;\n\n\n")
    );
    assert_eq!(
        clean(&source, &policy(1, LineEnding::Win)),
        format!("\r\nconst s = `{TEN}`;\r\n\r\n")
    );
    assert_eq!(clean(&source, &policy(-1, LineEnding::Unix)), source);
}

#[test]
fn test_named_filters() {
    let source = "/**\n * Adds.\n * @param {number} a\n */\n// eslint-disable-line\n/* plain */\nadd(1);\n";
    let policy = ConfigBuilder::new()
        .comments(["jsdoc", "eslint"])
        .build_policy()
        .unwrap();
    assert_eq!(
        clean(source, &policy),
        "/**\n * Adds.\n * @param {number} a\n */\n// eslint-disable-line\nadd(1);\n"
    );
}

#[test]
fn test_source_map_points_at_original_lines() -> Result<()> {
    let source = "// a\n// b\n\nfirst();\n\n\n\nsecond();\n";
    let cleaned = cleanup(source, "lib.js", &Policy::default())?.expect("changed");
    assert_eq!(cleaned.code, "first();\nsecond();\n");

    let map = cleaned.map.as_ref().expect("map");
    assert_eq!(map.get_source(0), Some("lib.js"));
    assert_eq!(map.get_source_contents(0), Some(source));
    let token = map.lookup_token(1, 0).expect("token");
    assert_eq!((token.get_src_line(), token.get_src_col()), (7, 0));

    let json = cleaned.map_json()?.expect("json");
    assert!(json.contains("\"sourcesContent\""));
    Ok(())
}

#[test]
fn test_policy_from_options_json() -> Result<()> {
    let options = Options::from_json(
        r#"{ "comments": ["license", "/^.\\s*keep/"], "maxEmptyLines": 1, "eolType": "win" }"#,
        "inline",
    )?;
    let policy = Policy::from_options(&options)?;
    assert_eq!(policy.line_endings, LineEnding::Win);
    assert_eq!(
        clean("// keep me\n// drop me\n\n\n\nx();", &policy),
        "// keep me\r\n\r\nx();"
    );
    Ok(())
}

#[test]
fn test_regex_after_if_header() {
    let source = "if (ok) /'/.test(s); // note\nif (a) /\\/*/.test(b);\n";
    assert_eq!(
        clean(source, &Policy::default()),
        "if (ok) /'/.test(s);\nif (a) /\\/*/.test(b);\n"
    );
}

#[test]
fn test_all_ends_a_filter_list() {
    let policy = ConfigBuilder::new()
        .comments(["license", "all"])
        .build_policy()
        .unwrap();
    assert_eq!(clean("// kept\nx();\n", &policy), "// kept\nx();\n");
}

#[test]
fn test_unknown_filter_is_rejected() {
    let err = ConfigBuilder::new().comments(["nope"]).build_policy().unwrap_err();
    assert_eq!(err.to_string(), "unknown comment filter \"nope\"");
}

// A toy tokenizer: `#` starts a line comment, other words are tokens.
struct HashComments;

impl Tokenizer for HashComments {
    fn tokenize(&self, source: &str, visitor: &mut dyn TokenVisitor) -> Result<(), ParseError> {
        let mut offset = 0;
        for line in source.split_inclusive('\n') {
            let body = line.trim_end_matches(['\n', '\r']);
            if let Some(hash) = body.find('#') {
                let start = offset + hash;
                visitor.on_comment(Comment {
                    block: false,
                    text: &body[hash + 1..],
                    start,
                    end: offset + body.len(),
                });
            }
            let code = body.split('#').next().unwrap_or("");
            let mut pos = 0;
            for word in code.split_whitespace() {
                let at = code[pos..].find(word).map_or(pos, |i| pos + i);
                visitor.on_token(Token {
                    start: offset + at,
                    end: offset + at + word.len(),
                    kind: TokenKind::Name,
                });
                pos = at + word.len();
            }
            offset += line.len();
        }
        visitor.on_token(Token {
            start: source.len(),
            end: source.len(),
            kind: TokenKind::Eof,
        });
        Ok(())
    }
}

#[test]
fn test_custom_tokenizer() -> Result<()> {
    let source = "# header\nalpha beta # trailing\n\n\n\ngamma\n";
    let cleaned = cleanup_with(source, "toy.txt", &Policy::default(), &HashComments)?
        .expect("changed");
    assert_eq!(cleaned.code, "alpha beta\ngamma\n");
    Ok(())
}
