use lexan::lexer::{MISSING_BEGIN, MISSING_END};
use lexan::{Kind, LexItem, Lexer};
use proptest::prelude::*;

fn scan(input: &str) -> Vec<LexItem> {
    Lexer::new(input).collect()
}

fn kinds(input: &str) -> Vec<Kind> {
    scan(input).iter().map(LexItem::kind).collect()
}

#[test]
fn test_print_string_program() {
    let items = scan("begin\nprint \"a\";\nend;");
    assert_eq!(
        items.iter().map(LexItem::kind).collect::<Vec<_>>(),
        vec![
            Kind::Begin, Kind::Print, Kind::Sconst, Kind::Scoma,
            Kind::End, Kind::Scoma, Kind::Done,
        ]
    );
    assert_eq!(items[2].lexeme(), "\"a\"");
    assert_eq!(items[2].line(), 2);
    assert_eq!(items[4].line(), 3);
}

#[test]
fn test_assignment_program() {
    let items = scan("begin\nx=5;\nend;");
    let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        ["BEGIN", "IDENT (x)", "EQ", "ICONST (5)", "SCOMA", "END", "SCOMA", "DONE"]
    );
}

#[test]
fn test_if_then_program() {
    assert_eq!(
        kinds("begin\nif(x)then print x;\nend;"),
        vec![
            Kind::Begin, Kind::If, Kind::LParen, Kind::Ident, Kind::RParen,
            Kind::Then, Kind::Print, Kind::Ident, Kind::Scoma, Kind::End,
            Kind::Scoma, Kind::Done,
        ]
    );
}

#[test]
fn test_missing_begin() {
    let items = scan("print x;");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].kind(), Kind::Err);
    assert_eq!(items[0].lexeme(), MISSING_BEGIN);
}

#[test]
fn test_adjacent_identifiers() {
    let items = scan("begin\nx y;\nend;");
    let err = items.last().unwrap();
    assert_eq!(err.kind(), Kind::Err);
    assert_eq!(err.lexeme(), "y");
    assert_eq!(err.line(), 2);
}

#[test]
fn test_arithmetic_program() {
    let source = "begin\n\
                  // compute a value\n\
                  total = a + 2 * 3.5 - b / .25;\n\
                  print \"total\", \"is\";\n\
                  print total;\n\
                  end;\n";
    let items = scan(source);
    assert_eq!(items.last().map(LexItem::kind), Some(Kind::Done));
    let total = items.iter().find(|item| item.lexeme() == "total").unwrap();
    assert_eq!(total.line(), 3);
    assert!(items.iter().any(|item| item.kind() == Kind::Rconst && item.lexeme() == ".25"));
}

#[test]
fn test_reader_input_and_previous_kind() {
    let mut lexer = Lexer::from_reader("begin\nx = 1;\nend;".as_bytes()).unwrap();
    assert_eq!(lexer.previous(), None);

    assert_eq!(lexer.next_token().kind(), Kind::Begin);
    assert_eq!(lexer.previous(), Some(Kind::Begin));
    lexer.next_token();
    lexer.next_token();
    assert_eq!(lexer.previous(), Some(Kind::Eq));

    let rest: Vec<Kind> = lexer.by_ref().map(|item| item.kind()).collect();
    assert_eq!(rest, [Kind::Iconst, Kind::Scoma, Kind::End, Kind::Scoma, Kind::Done]);
    assert_eq!(lexer.previous(), Some(Kind::Scoma));
}

#[test]
fn test_errors_do_not_replace_previous_kind() {
    let mut lexer = Lexer::new("begin x @");
    lexer.next_token();
    lexer.next_token();
    assert!(lexer.next_token().is_err());
    assert_eq!(lexer.previous(), Some(Kind::Ident));
}

#[test]
fn test_missing_end_points_at_last_token() {
    let items = scan("begin\nx = 1;\n\n\n\n");
    let err = items.last().unwrap();
    assert_eq!(err.lexeme(), MISSING_END);
    assert_eq!(err.line(), 2);
}

proptest! {
    #[test]
    fn prop_first_item_is_begin(names in prop::collection::vec("[a-z][a-z0-9]{0,6}", 1..8)) {
        let body: String = names
            .iter()
            .filter(|name| lexan::Kind::keyword(name).is_none())
            .map(|name| format!("{} = 1;\n", name))
            .collect();
        let source = format!("begin\nfirst = 0;\n{}end;", body);
        let items = scan(&source);
        prop_assert_eq!(items[0].kind(), Kind::Begin);
        prop_assert_eq!(items.last().map(LexItem::kind), Some(Kind::Done));
    }

    #[test]
    fn prop_missing_end(values in prop::collection::vec(0u32..1000, 0..6)) {
        let body: String = values.iter().map(|v| format!("x = {};\n", v)).collect();
        let items = scan(&format!("begin\n{}", body));
        let last = items.last().unwrap();
        prop_assert_eq!(last.kind(), Kind::Err);
        prop_assert_eq!(last.lexeme(), MISSING_END);
    }

    #[test]
    fn prop_literal_lexemes_survive_rescan(
        literal in prop_oneof![
            "[A-Za-z][A-Za-z0-9]{0,10}"
                .prop_filter("not a keyword", |s| Kind::keyword(s).is_none()),
            "[0-9]{1,9}",
            "[0-9]{0,4}\\.[0-9]{1,4}",
            "\"[ !#-\\[\\]-~]{0,12}\"",
        ]
    ) {
        let items = scan(&format!("begin print {};", literal));
        let first = &items[2];
        prop_assert_eq!(first.lexeme(), literal.as_str());

        let again = scan(&format!("begin print {};", first.lexeme()));
        prop_assert_eq!(again[2].kind(), first.kind());
        prop_assert_eq!(again[2].lexeme(), first.lexeme());
    }

    #[test]
    fn prop_error_is_sticky(garbage in "[@#$%^&?!~]") {
        let mut lexer = Lexer::new(&format!("begin x = {};", garbage));
        let mut item = lexer.next_token();
        while !item.is_err() {
            prop_assert!(!item.is_done());
            item = lexer.next_token();
        }
        for _ in 0..4 {
            prop_assert_eq!(lexer.next_token().kind(), Kind::Err);
        }
    }

    #[test]
    fn prop_line_numbers(blank in 0usize..20, comments in 0usize..5) {
        let source = format!(
            "begin{}{}x = 1;\nend;",
            "\n".repeat(blank + 1),
            "// note\n".repeat(comments)
        );
        let items = scan(&source);
        prop_assert_eq!(items[1].kind(), Kind::Ident);
        prop_assert_eq!(items[1].line(), blank + comments + 2);
    }
}
