use bulletlist::{
    ParseOptions, RenderOptions, SpecError, parse, parse_with_options, render,
    render_with_options, specs_to_text,
};
use pretty_assertions::assert_eq;

fn assert_text(specs: &[&str], expected: &str) {
    assert_eq!(specs_to_text(specs).unwrap(), expected);
}

#[test]
fn renders_flat_arabic_list() {
    assert_text(&["1:3"], "1. 1. \n   2. \n   3. \n");
}

#[test]
fn renders_roman_list_with_padding() {
    assert_text(&["1:2:type=romanbig"], "I. I.  \n   II. \n");
}

#[test]
fn renders_nested_list_under_first_item() {
    assert_text(&["1:2;[1:2]"], "1. 1. 1. \n      2. \n   2. \n");
}

#[test]
fn leaf_lines_match_items_without_children() {
    let specs = [
        "1:3",
        "1:4;[2:3;[1:2]];[4:5:type=alpha]",
        "3:2:type=roman;{1:12;[12:3]};{2:1}",
        "1:2;[9:9]",
    ];
    for spec in specs {
        let tree = parse(spec).unwrap();
        let text = render(std::slice::from_ref(&tree));
        assert_eq!(
            text.matches('\n').count(),
            tree.leaf_line_count(),
            "spec {spec}"
        );
    }
}

#[test]
fn right_padded_markers_line_up() {
    let text = specs_to_text(&["1:12:type=roman"]).unwrap();
    let widths: Vec<usize> = text.lines().map(|line| line.chars().count()).collect();
    assert_eq!(widths.len(), 12);
    // "VIII. " is the widest marker, and the label is as wide as the indent
    assert!(widths.iter().all(|&w| w == 3 + 6), "{widths:?}");
}

#[test]
fn left_padded_markers_line_up() {
    let text = specs_to_text(&["1:10:leftpad"]).unwrap();
    let closures: Vec<usize> = text
        .lines()
        .map(|line| line.rfind('.').unwrap())
        .collect();
    assert!(closures.iter().all(|&c| c == closures[0]), "{closures:?}");
}

#[test]
fn extra_closing_bracket_is_unopened() {
    assert!(matches!(
        specs_to_text(&["1:2;[1:1]}"]),
        Err(SpecError::UnopenedBracket { .. })
    ));
}

#[test]
fn missing_closing_bracket_is_unclosed() {
    assert!(matches!(
        specs_to_text(&["1:2;[1:1;[2:1]"]),
        Err(SpecError::UnclosedBracket { .. })
    ));
}

#[test]
fn syntax_error_in_any_spec_renders_nothing() {
    let result = specs_to_text(&["1:3", "1:1;["]);
    assert_eq!(result, Err(SpecError::UnclosedBracket { depth: 1 }));
}

#[test]
fn error_messages() {
    assert_eq!(
        SpecError::UnopenedBracket { offset: 0 }.to_string(),
        "Syntax Error: Unopened brackets"
    );
    assert_eq!(
        SpecError::UnclosedBracket { depth: 1 }.to_string(),
        "Syntax Error: Unclosed brackets!"
    );
}

#[test]
fn escaped_separators_do_not_split() {
    assert_text(&["1:2;\\;"], "1. 1. \n   2. \n");
    assert_text(&["1:2;\\]"], "1. 1. \n   2. \n");
    // The child text is `\;2:1`, whose number field does not parse
    assert_text(&["1:2;[\\;2:1]"], "1. 1. \n   2. \n");
}

#[test]
fn custom_indent() {
    let trees = vec![parse("1:2;[2:2]").unwrap()];
    let options = RenderOptions {
        indent: "\t".to_string(),
    };
    assert_eq!(
        render_with_options(&trees, &options),
        "1. 1. \n\t2. 1. \n\t\t2. \n"
    );
}

#[test]
fn strict_parsing_is_opt_in() {
    assert_text(&["1:lots"], "1. ");

    let options = ParseOptions {
        strict: true,
        ..Default::default()
    };
    assert!(matches!(
        parse_with_options("1:lots", &options),
        Err(SpecError::InvalidNumber { .. })
    ));
}

#[test]
fn label_at_integer_limit_does_not_overflow() {
    assert_text(&["9223372036854775807:1:type=alpha"], "\u{FFFD}. a. \n");
}
