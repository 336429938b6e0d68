use super::*;

fn frame_with(text: &str) -> Frame {
    let mut frame = Frame::new("test", DEFAULT_SPACE);
    frame.load_text(text).unwrap();
    frame
}

#[test]
fn new_frame_is_empty_and_named_in_upper_case() {
    let frame = Frame::new("main", DEFAULT_SPACE);
    assert_eq!(frame.name(), "MAIN");
    assert_eq!(frame.line_count(), 0);
    assert_eq!(frame.dot(), Position::new(0, 0));
    assert!(frame.at_eop());
    assert!(frame.at_eol());
    assert_eq!(frame.margin_right, 79);
    assert!(!frame.is_special());
}

#[test]
fn space_limit_never_drops_below_overhead() {
    let frame = Frame::new("tiny", 3);
    assert_eq!(frame.space_limit(), EOP_OVERHEAD);
    assert_eq!(frame.space_left(), 0);
}

#[test]
fn load_text_terminates_last_line_and_resets_state() {
    let mut frame = frame_with("one\ntwo");
    assert_eq!(frame.text(), "one\ntwo\n");
    assert_eq!(frame.line_count(), 2);
    assert_eq!(frame.line_text(1), "two");
    assert_eq!(frame.line_len(1), 3);
    assert!(!frame.is_modified());

    frame.advance(1).unwrap();
    frame.set_mark(1).unwrap();
    frame.load_text("other\n").unwrap();
    assert_eq!(frame.dot(), Position::new(0, 0));
    assert_eq!(frame.mark(1), None);
}

#[test]
fn load_text_respects_space_limit() {
    let mut frame = Frame::new("small", 60);
    assert_eq!(frame.load_text("0123456789abc"), Err(FrameError::NoRoom));
    assert!(frame.load_text("012345678").is_ok());
}

#[test]
fn set_space_limit_refuses_to_shrink_below_text() {
    let mut frame = frame_with("hello\n");
    assert_eq!(frame.set_space_limit(10), Err(FrameError::NoRoom));
    frame.set_space_limit(1000).unwrap();
    assert_eq!(frame.space_left(), 1000 - EOP_OVERHEAD - 6);
}

#[test]
fn marks_are_one_based() {
    let mut frame = frame_with("a\nb\n");
    frame.advance(1).unwrap();
    frame.set_mark(1).unwrap();
    assert_eq!(frame.mark(1), Some(Position::new(1, 0)));
    assert_eq!(frame.mark(0), None);
    assert_eq!(frame.set_mark(0), Err(FrameError::Fail));
    assert_eq!(frame.set_mark(MAX_MARKS + 1), Err(FrameError::Fail));
    frame.clear_mark(1).unwrap();
    assert_eq!(frame.mark(1), None);
}

#[test]
fn advance_moves_to_line_start() {
    let mut frame = frame_with("abc\ndef\n");
    frame.jump(2).unwrap();
    frame.advance(1).unwrap();
    assert_eq!(frame.dot(), Position::new(1, 0));
    frame.advance(1).unwrap();
    assert!(frame.at_eop());
    assert_eq!(frame.advance(1), Err(FrameError::Fail));
    frame.advance(-2).unwrap();
    assert_eq!(frame.advance(-1), Err(FrameError::Fail));
    frame.advance_to_end(true);
    assert_eq!(frame.dot(), Position::new(2, 0));
    frame.advance_to_end(false);
    assert_eq!(frame.dot(), Position::new(0, 0));
}

#[test]
fn move_lines_keeps_column() {
    let mut frame = frame_with("abcdef\nx\n");
    frame.jump(4).unwrap();
    frame.move_lines(1).unwrap();
    assert_eq!(frame.dot(), Position::new(1, 4));
    assert_eq!(frame.move_lines(5), Err(FrameError::Fail));
}

#[test]
fn jump_stays_within_columns() {
    let mut frame = frame_with("abc\n");
    assert_eq!(frame.jump(-1), Err(FrameError::Fail));
    frame.jump(10).unwrap();
    assert_eq!(frame.dot().col, 10);
    assert_eq!(frame.jump(MAX_COL as i64), Err(FrameError::Fail));
}

#[test]
fn tab_stops() {
    let mut frame = frame_with("x\n");
    frame.tab(true).unwrap();
    assert_eq!(frame.dot().col, 8);
    frame.jump(2).unwrap();
    frame.tab(false).unwrap();
    assert_eq!(frame.dot().col, 8);
    frame.tab(false).unwrap();
    assert_eq!(frame.dot().col, 0);
    assert_eq!(frame.tab(false), Err(FrameError::Fail));
}

#[test]
fn return_at_end_of_page_opens_a_line() {
    let mut frame = Frame::new("t", DEFAULT_SPACE);
    frame.return_line().unwrap();
    assert_eq!(frame.text(), "\n");
    assert_eq!(frame.dot(), Position::new(1, 0));
}

#[test]
fn matches_at_dot_sees_virtual_space() {
    let mut frame = frame_with("Hello\n");
    assert!(frame.matches_at_dot("hel", true));
    assert!(!frame.matches_at_dot("hel", false));
    frame.jump(3).unwrap();
    assert!(frame.matches_at_dot("lo  ", false));
    assert!(!frame.matches_at_dot("lox", false));
}

#[test]
fn get_forward_lands_after_match() {
    let mut frame = frame_with("hello world\nsecond line\n");
    frame.get("world", true, false).unwrap();
    assert_eq!(frame.dot(), Position::new(0, 11));
    frame.get("LINE", true, true).unwrap();
    assert_eq!(frame.dot(), Position::new(1, 11));
    assert_eq!(frame.get("hello", true, false), Err(FrameError::Fail));
}

#[test]
fn get_backward_lands_on_match_start() {
    let mut frame = frame_with("hello world\nsecond line\n");
    frame.advance_to_end(true);
    frame.get("world", false, false).unwrap();
    assert_eq!(frame.dot(), Position::new(0, 6));
    assert_eq!(frame.get("", false, false), Err(FrameError::Fail));
}

#[test]
fn get_without_fold_is_case_sensitive() {
    let mut frame = frame_with("Alpha\n");
    assert_eq!(frame.get("alpha", true, false), Err(FrameError::Fail));
    assert_eq!(frame.dot(), Position::new(0, 0));
}

#[test]
fn next_and_bridge() {
    let mut frame = frame_with("abc def\n");
    frame.next_in_set("d", true).unwrap();
    assert_eq!(frame.dot(), Position::new(0, 4));
    assert_eq!(frame.next_in_set("q", true), Err(FrameError::Fail));

    let mut frame = frame_with("   x\n");
    frame.bridge(" ", true).unwrap();
    assert_eq!(frame.dot(), Position::new(0, 3));
}

#[test]
fn insert_text_pads_virtual_space() {
    let mut frame = frame_with("ab\n");
    frame.jump(5).unwrap();
    frame.insert_text("x", 1).unwrap();
    assert_eq!(frame.text(), "ab   x\n");
    assert_eq!(frame.dot(), Position::new(0, 6));
    assert!(frame.is_modified());
}

#[test]
fn insert_text_at_end_of_page_creates_line() {
    let mut frame = Frame::new("t", DEFAULT_SPACE);
    frame.insert_text("hi", 2).unwrap();
    assert_eq!(frame.text(), "hihi\n");
    assert_eq!(frame.dot(), Position::new(0, 4));
}

#[test]
fn insert_text_respects_space() {
    let mut frame = Frame::new("t", EOP_OVERHEAD + 10);
    assert_eq!(frame.insert_text("0123456789ab", 1), Err(FrameError::NoRoom));
    assert_eq!(frame.text(), "");
}

#[test]
fn read_only_frames_refuse_edits() {
    let mut frame = frame_with("abc\n");
    frame.options |= FrameOptions::READ_ONLY;
    assert_eq!(frame.insert_text("x", 1), Err(FrameError::ReadOnly));
    assert_eq!(frame.delete_lines(1), Err(FrameError::ReadOnly));
    assert_eq!(frame.text(), "abc\n");
}

#[test]
fn overtype_replaces_and_extends() {
    let mut frame = frame_with("abc\n");
    frame.jump(1).unwrap();
    frame.overtype_text("xyz", 1).unwrap();
    assert_eq!(frame.text(), "axyz\n");
    assert_eq!(frame.dot().col, 4);
}

#[test]
fn insert_lines_above_dot() {
    let mut frame = frame_with("a\nb\n");
    frame.advance(1).unwrap();
    frame.insert_lines(2).unwrap();
    assert_eq!(frame.text(), "a\n\n\nb\n");
    assert_eq!(frame.dot(), Position::new(1, 0));
}

#[test]
fn insert_spaces_only_inside_line() {
    let mut frame = frame_with("ab\n");
    frame.jump(1).unwrap();
    frame.insert_spaces(2).unwrap();
    assert_eq!(frame.text(), "a  b\n");
    frame.jump(10).unwrap();
    frame.insert_spaces(2).unwrap();
    assert_eq!(frame.text(), "a  b\n");
}

#[test]
fn delete_lines_both_directions() {
    let mut frame = frame_with("a\nb\nc\n");
    assert_eq!(frame.delete_lines(1).unwrap(), "a\n");
    assert_eq!(frame.text(), "b\nc\n");
    frame.advance(1).unwrap();
    assert_eq!(frame.delete_lines(-1).unwrap(), "b\n");
    assert_eq!(frame.text(), "c\n");
    assert_eq!(frame.dot(), Position::new(0, 0));
    assert_eq!(frame.delete_lines(5), Err(FrameError::Fail));
}

#[test]
fn delete_to_mark_is_inclusive() {
    let mut frame = frame_with("a\nb\nc\n");
    frame.advance(1).unwrap();
    frame.set_mark(1).unwrap();
    frame.advance(-1).unwrap();
    assert_eq!(frame.delete_to_mark(1).unwrap(), "a\nb\n");
    assert_eq!(frame.text(), "c\n");
    assert_eq!(frame.delete_to_mark(2), Err(FrameError::Fail));
}

#[test]
fn delete_to_mark_above_dot() {
    let mut frame = frame_with("a\nb\nc\n");
    frame.set_mark(1).unwrap();
    frame.advance(1).unwrap();
    assert_eq!(frame.delete_to_mark(1).unwrap(), "a\nb\n");
    assert_eq!(frame.text(), "c\n");
    assert_eq!(frame.dot(), Position::new(0, 0));
}

#[test]
fn failed_delete_to_mark_keeps_dot() {
    let mut frame = frame_with("a\n");
    frame.set_mark(1).unwrap();
    frame.advance(1).unwrap();
    frame.options |= FrameOptions::READ_ONLY;
    assert_eq!(frame.delete_to_mark(1), Err(FrameError::ReadOnly));
    assert_eq!(frame.dot(), Position::new(1, 0));
    assert_eq!(frame.validate(), Ok(()));
}

#[test]
fn delete_chars_returns_removed_text() {
    let mut frame = frame_with("hello\n");
    assert_eq!(frame.delete_chars(2).unwrap(), "he");
    assert_eq!(frame.text(), "llo\n");
    frame.jump(3).unwrap();
    assert_eq!(frame.delete_chars(-1).unwrap(), "o");
    assert_eq!(frame.text(), "ll\n");
    assert_eq!(frame.delete_chars(-5), Err(FrameError::Fail));
}

#[test]
fn rubout_in_both_text_modes() {
    let mut frame = frame_with("abc\n");
    frame.jump(3).unwrap();
    frame.rubout(true).unwrap();
    assert_eq!(frame.text(), "ab\n");

    frame.advance_to_end(false);
    frame.jump(1).unwrap();
    frame.rubout(false).unwrap();
    assert_eq!(frame.text(), " b\n");
    assert_eq!(frame.rubout(false), Err(FrameError::Fail));
}

#[test]
fn swap_line_moves_dot_with_line() {
    let mut frame = frame_with("a\nb\n");
    frame.swap_line(true).unwrap();
    assert_eq!(frame.text(), "b\na\n");
    assert_eq!(frame.dot().line, 1);
    assert_eq!(frame.swap_line(true), Err(FrameError::Fail));
}

#[test]
fn split_line_at_dot() {
    let mut frame = frame_with("hello\n");
    frame.jump(2).unwrap();
    frame.split_line().unwrap();
    assert_eq!(frame.text(), "he\nllo\n");
    assert_eq!(frame.dot(), Position::new(1, 0));
}

#[test]
fn ditto_copies_from_neighbour_line() {
    let mut frame = frame_with("abc\nx\n");
    frame.advance(1).unwrap();
    frame.jump(1).unwrap();
    frame.ditto(true).unwrap();
    assert_eq!(frame.line_text(1), "xb");
    assert_eq!(frame.ditto(false), Err(FrameError::Fail));
}

#[test]
fn case_changes() {
    let mut frame = frame_with("hELLO\n");
    frame.change_case(CaseChange::Edit, true).unwrap();
    frame.change_case(CaseChange::Edit, true).unwrap();
    assert_eq!(frame.line_text(0), "HeLLO");
    frame.change_case(CaseChange::Low, true).unwrap();
    assert_eq!(frame.line_text(0), "HelLO");
    frame.change_case(CaseChange::Up, false).unwrap();
    assert_eq!(frame.line_text(0), "HeLLO");
    assert_eq!(frame.dot().col, 2);
}

#[test]
fn words() {
    let mut frame = frame_with("one two\n");
    frame.word_advance(true).unwrap();
    assert_eq!(frame.dot(), Position::new(0, 4));
    frame.word_advance(false).unwrap();
    assert_eq!(frame.dot(), Position::new(0, 0));
    assert_eq!(frame.word_delete().unwrap(), "one ");
    assert_eq!(frame.text(), "two\n");
}

#[test]
fn replace_next_occurrence() {
    let mut frame = frame_with("one two two\n");
    frame.replace("two", "2", true, false).unwrap();
    assert_eq!(frame.text(), "one 2 two\n");
    assert_eq!(frame.dot(), Position::new(0, 5));
    assert_eq!(frame.replace("six", "6", true, false), Err(FrameError::Fail));
}

#[test]
fn align_between_margins() {
    let mut frame = frame_with("   abc\nabcd\n");
    frame.align_line(Align::Left).unwrap();
    assert_eq!(frame.line_text(0), "abc");
    assert_eq!(frame.dot(), Position::new(1, 0));

    frame.margin_right = 9;
    frame.align_line(Align::Centre).unwrap();
    assert_eq!(frame.line_text(1), "   abcd");
    assert_eq!(frame.align_line(Align::Right), Err(FrameError::Fail));
}

#[test]
fn visible_lines_clip_to_text() {
    let frame = frame_with("a\nb\nc\n");
    assert_eq!(frame.visible_lines(1, 5), vec!["b".to_string(), "c".to_string()]);
    assert!(frame.visible_lines(7, 5).is_empty());
}

#[test]
fn validate_and_dump() {
    let frame = frame_with("a\n");
    assert!(frame.validate().is_ok());
    let dump = frame.dump();
    assert!(dump.starts_with("TEST "));
    assert!(dump.contains("lines=1"));
}

#[test]
fn error_messages() {
    assert_eq!(FrameError::NoRoom.to_string(), "No room in frame");
    assert_eq!(
        FrameError::Special("OOPS".into()).to_string(),
        "Frame OOPS cannot be killed"
    );
}
