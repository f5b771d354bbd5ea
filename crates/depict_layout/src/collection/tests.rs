use pretty_assertions::assert_eq;

use super::*;

fn add_text(lines: &mut LineCollection, text: &str, indentation: usize) -> LineId {
    let mut line = lines.new_line(indentation);
    line.append(text);
    match lines.add(line) {
        Ok(id) => id,
        Err(overflow) => panic!("unexpected {overflow}"),
    }
}

#[test]
fn sole_line_renders_without_indentation() {
    let mut lines = LineCollection::new(10);
    add_text(&mut lines, "{1, 2, 3}", 2);
    assert_eq!(lines.to_string(), "{1, 2, 3}");
}

#[test]
fn second_line_materializes_whitespace_of_both() {
    let mut lines = LineCollection::new(10);
    add_text(&mut lines, "a", 1);
    add_text(&mut lines, "b", 2);
    assert!(lines.iter().all(Line::has_whitespace));
    assert_eq!(lines.to_string(), "    a\n        b");
}

#[test]
fn insert_after_and_at_top_keep_order() {
    let mut lines = LineCollection::new(10);
    let first = add_text(&mut lines, "first", 0);
    add_text(&mut lines, "third", 0);

    let mut second = lines.new_line(0);
    second.append("second");
    lines.insert_after(first, second).unwrap();

    let mut top = lines.new_line(0);
    top.append("top");
    lines.insert_at_top(top).unwrap();

    assert_eq!(lines.to_string(), "top\nfirst\nsecond\nthird");
    assert_eq!(lines.position(first), Some(1));
}

#[test]
fn line_start_or_top_prepends_to_sole_line() {
    let mut lines = LineCollection::new(10);
    add_text(&mut lines, "XY", 0);
    lines.insert_at_line_start_or_top("Z", 0).unwrap();
    assert_eq!(lines.to_string(), "ZXY");
}

#[test]
fn line_start_or_top_inserts_top_line_when_several_exist() {
    let mut lines = LineCollection::new(10);
    add_text(&mut lines, "a", 1);
    add_text(&mut lines, "b", 1);
    lines.insert_at_line_start_or_top("{", 0).unwrap();
    assert_eq!(lines.to_string(), "{\n    a\n    b");
}

#[test]
fn split_line_moves_remainder_after() {
    let mut lines = LineCollection::new(10);
    let id = add_text(&mut lines, "Items = Customer", 1);
    add_text(&mut lines, "tail", 1);

    let remainder = lines.split_line(id, 8).unwrap();
    let Some(remainder) = remainder else {
        panic!("remainder should have been inserted");
    };
    assert_eq!(lines.position(remainder), Some(1));
    assert_eq!(lines.get(remainder).map(Line::text), Some("Customer"));
    assert_eq!(lines.get(id).map(Line::text), Some("Items = "));
    assert_eq!(lines.len(), 3);
}

#[test]
fn split_line_with_blank_remainder_adds_nothing() {
    let mut lines = LineCollection::new(10);
    let id = add_text(&mut lines, "{1, ", 0);
    assert_eq!(lines.split_line(id, 3).unwrap(), None);
    assert_eq!(lines.len(), 1);
}

#[test]
fn lines_beyond() {
    let mut lines = LineCollection::new(10);
    let a = add_text(&mut lines, "a", 0);
    assert!(!lines.has_lines_beyond(a));
    assert!(!lines.has_lines_beyond_index(0));
    let b = add_text(&mut lines, "b", 0);
    assert!(lines.has_lines_beyond(a));
    assert!(!lines.has_lines_beyond(b));
    assert!(lines.has_lines_beyond_index(0));
    assert!(!lines.has_lines_beyond_index(1));
}

#[test]
fn growth_beyond_cap_appends_notice_and_fails() {
    let mut lines = LineCollection::new(3);
    for text in ["a", "b", "c"] {
        add_text(&mut lines, text, 0);
    }
    let extra = lines.new_line(0);
    let err = lines.add(extra).unwrap_err();
    assert_eq!(err, Overflow { max_lines: 3 });
    assert!(lines.has_overflowed());
    assert_eq!(lines.len(), 5);

    let rendered = lines.to_string();
    let last = rendered.lines().last().unwrap_or_default();
    assert!(last.contains("maximum of 3 lines"), "{rendered}");
    assert_eq!(rendered.lines().nth(3), Some(""));
}

#[test]
fn collection_refuses_growth_after_overflow() {
    let mut lines = LineCollection::new(1);
    add_text(&mut lines, "a", 0);
    let extra = lines.new_line(0);
    assert!(lines.add(extra).is_err());
    let again = lines.new_line(0);
    assert!(lines.insert_at_top(again).is_err());
    assert_eq!(lines.len(), 3);
}

#[test]
fn zero_cap_overflows_on_first_line() {
    let mut lines = LineCollection::new(0);
    let line = lines.new_line(0);
    assert!(lines.add(line).is_err());
    assert_eq!(lines.len(), 2);
}
