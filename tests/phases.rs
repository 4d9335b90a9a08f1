use countavg::{
    ast::{Element, ListNode, Node},
    error::Error,
    interpreter::{
        evaluator::{
            core::{evaluate, summarize_program},
            flatten::flatten_values,
        },
        lexer::{Token, TokenKind, tokenize},
        parser::core::parse,
    },
    parse_source,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().iter().map(|t| t.kind).collect()
}

#[test]
fn lexer_records_kind_text_and_offset() {
    let tokens = tokenize("[12, 3]/count(12,3)").unwrap();

    assert_eq!(tokens[1],
               Token { kind:   TokenKind::Number,
                       text:   "12".to_string(),
                       offset: 1, });
    assert_eq!(tokens[3].text, "3");
    assert_eq!(tokens[3].offset, 5);
    assert_eq!(tokens[6].kind, TokenKind::CountKeyword);
    assert_eq!(tokens[7].kind, TokenKind::LParen);
    assert_eq!(tokens[7].offset, 13);

    let last = tokens.last().unwrap();
    assert_eq!(last.kind, TokenKind::EndOfInput);
    assert_eq!(last.offset, 19);
    assert_eq!(last.text, "");
}

#[test]
fn lexer_ends_every_sequence_with_one_end_of_input() {
    assert_eq!(kinds(""), [TokenKind::EndOfInput]);
    assert_eq!(kinds(" \t\r\n"), [TokenKind::EndOfInput]);
    assert_eq!(kinds("]]"),
               [TokenKind::RBracket, TokenKind::RBracket, TokenKind::EndOfInput]);

    let tokens = tokenize("  ").unwrap();
    assert_eq!(tokens[0].offset, 2);
}

#[test]
fn lexer_splits_digit_runs_only_at_non_digits() {
    assert_eq!(kinds("007 8"),
               [TokenKind::Number, TokenKind::Number, TokenKind::EndOfInput]);

    let tokens = tokenize("007").unwrap();
    assert_eq!(tokens[0].text, "007");
}

#[test]
fn lexer_normalizes_keyword_case_but_keeps_text() {
    let tokens = tokenize("CoUnT").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::CountKeyword);
    assert_eq!(tokens[0].text, "CoUnT");
}

#[test]
fn lexer_errors_point_at_the_offending_character() {
    assert_eq!(tokenize("[1, 2.5]"),
               Err(Error::Lexical { message: "float not allowed (integer only)".to_string(),
                                    offset:  5, }));
    assert_eq!(tokenize("[1]/sum(1)"),
               Err(Error::Lexical { message: "unknown keyword 'sum'".to_string(),
                                    offset:  4, }));
    assert_eq!(tokenize("[1] # 2"),
               Err(Error::Lexical { message: "unexpected character '#'".to_string(),
                                    offset:  4, }));
    assert_eq!(tokenize("[18446744073709551616]"),
               Err(Error::Lexical { message: "integer literal too large".to_string(),
                                    offset:  1, }));
}

#[test]
fn lexer_offsets_count_characters_not_bytes() {
    let err = tokenize("[é]").unwrap_err();
    assert_eq!(err.offset(), Some(1));
    assert_eq!(err.message(), "unexpected character 'é'");

    let err = tokenize("[1]/count(1)→").unwrap_err();
    assert_eq!(err.offset(), Some(12));
}

#[test]
fn lexer_offsets_stay_exact_on_long_inputs() {
    let values = vec!["12"; 50_000].join(", ");
    let source = format!("[{values}] / count({values})");
    let tokens = tokenize(&source).unwrap();

    for token in &tokens[..tokens.len() - 1] {
        assert_eq!(&source[token.offset..token.offset + token.text.len()], token.text);
    }

    let last = tokens.last().unwrap();
    assert_eq!(last.kind, TokenKind::EndOfInput);
    assert_eq!(last.offset, source.len());

    let err = tokenize(&format!("{source} é")).unwrap_err();
    assert_eq!(err.offset(), Some(source.len() + 1));
}

#[test]
fn token_display_matches_trace_format() {
    let tokens = tokenize("[4]").unwrap();
    assert_eq!(tokens[1].to_string(), "Token(NUMBER, '4', pos=1)");
    assert_eq!(tokens[3].to_string(), "Token(EOF, '', pos=3)");
}

#[test]
fn parser_builds_division_of_list_by_count() {
    let program = parse_source("[1, [2, 3]] / count(1, 2, 3)").unwrap();

    assert_eq!(program.offset, 12);
    assert_eq!(program.left.offset, 0);
    assert_eq!(program.right.offset, 14);
    assert_eq!(program.right.list.offset, 19);
    assert_eq!(program.right.list.elements.len(), 3);

    match &program.left.elements[1] {
        Element::List(ListNode { elements, offset }) => {
            assert_eq!(*offset, 4);
            assert_eq!(elements.len(), 2);
        },
        other => panic!("expected a sublist, found {other:?}"),
    }
}

#[test]
fn parser_accepts_empty_lists() {
    let program = parse_source("[[]] / count()").unwrap();
    assert_eq!(program.left.elements,
               [Element::List(ListNode { elements: Vec::new(),
                                         offset:   1, })]);
    assert!(program.right.list.elements.is_empty());
}

#[test]
fn parser_reports_expected_and_found_tokens() {
    assert_eq!(parse_source("[1, 2 / count(1, 2)"),
               Err(Error::Syntax { expected: "']'".to_string(),
                                   found:    "'/'".to_string(),
                                   offset:   6, }));
    assert_eq!(parse_source("[1] / count(1) ]"),
               Err(Error::Syntax { expected: "end of input".to_string(),
                                   found:    "']'".to_string(),
                                   offset:   15, }));
    assert_eq!(parse_source("[1, /] / count(1)"),
               Err(Error::Syntax { expected: "integer or '['".to_string(),
                                   found:    "'/'".to_string(),
                                   offset:   4, }));
    assert_eq!(parse_source("[1] / count(1"),
               Err(Error::Syntax { expected: "')'".to_string(),
                                   found:    "end of input".to_string(),
                                   offset:   13, }));
}

#[test]
fn parser_rejects_token_streams_without_end_marker() {
    let mut tokens = tokenize("[1]/count(1)").unwrap();
    tokens.pop();

    let err = parse(&tokens).unwrap_err();
    assert_eq!(err.offset(), Some(12));

    assert!(parse(&[]).is_err());
}

#[test]
fn parser_reports_out_of_range_number_tokens_as_syntax_errors() {
    let mut tokens = tokenize("[1]/count(1)").unwrap();
    tokens[1].text = "99999999999999999999".to_string();

    assert_eq!(parse(&tokens),
               Err(Error::Syntax { expected: "integer within the 64-bit range".to_string(),
                                   found:    "'99999999999999999999'".to_string(),
                                   offset:   1, }));
}

#[test]
fn flatten_preserves_depth_first_order() {
    let program = parse_source("[[1, 2], 3, [[4], []], 5] / count()").unwrap();
    assert_eq!(flatten_values(&program.left), [1, 2, 3, 4, 5]);
    assert!(flatten_values(&program.right.list).is_empty());
}

#[test]
fn evaluator_checks_count_operand_before_averaging() {
    let program = parse_source("[1, 2] / count(1, 3)").unwrap();
    assert_eq!(evaluate(&program),
               Err(Error::Semantic { message: "count() list must match the source list".to_string(),
                                     offset:  Some(18), }));

    let program = parse_source("[1, 2] / count(1)").unwrap();
    assert_eq!(evaluate(&program).unwrap_err().offset(), Some(9));

    let program = parse_source("[1] / count(1, 2)").unwrap();
    assert_eq!(evaluate(&program).unwrap_err().offset(), Some(15));
}

#[test]
fn evaluator_rejects_empty_dividend() {
    let program = parse_source("[] / count()").unwrap();
    let err = evaluate(&program).unwrap_err();

    assert_eq!(err, Error::EmptyInput { message: "list must not be empty".to_string() });
    assert_eq!(err.offset(), None);
}

#[test]
fn evaluator_summarizes_programs() {
    let program = parse_source("[5, 5, 6] / count(5, 5, 6)").unwrap();
    let summary = summarize_program(&program).unwrap();

    assert_eq!(summary.size, 3);
    assert_eq!(summary.sum, 16);
    assert!((summary.average - 16.0 / 3.0).abs() < 1e-12);
}

#[test]
fn node_view_walks_the_whole_tree() {
    let program = parse_source("[[1], 2] / count(1, 2)").unwrap();
    let root = Node::Division(&program);

    let children = root.children();
    assert!(matches!(children[..], [Node::List(_), Node::Count(_)]));

    let mut numbers = 0;
    let mut pending = vec![root];
    while let Some(node) = pending.pop() {
        if let Node::Number(_) = node {
            numbers += 1;
        }
        pending.extend(node.children());
    }
    assert_eq!(numbers, 4);

    let rendered = root.to_string();
    assert!(rendered.starts_with("Division @9\n  List (2 elements) @0\n    List (1 elements) @1\n"));
    assert_eq!(rendered.lines().count(), 9);
}
