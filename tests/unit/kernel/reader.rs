use super::*;
use crate::core::event::{KEY_RESIZE, KEY_UP};
use crate::kernel::code::CodeArena;
use crate::kernel::keymap::Dialect;
use crate::kernel::services::ports::StringKeys;

fn read_one(dialect: Dialect, text: &str) -> Result<ReadOutcome, ReadError> {
    let keymap = Keymap::load(dialect);
    CommandReader::batch().read(&keymap, &mut StringKeys::new(text))
}

fn instruction(dialect: Dialect, text: &str) -> Instruction {
    match read_one(dialect, text) {
        Ok(ReadOutcome::Instruction(instruction)) => instruction,
        other => panic!("expected instruction from {text:?}, got {other:?}"),
    }
}

#[test]
fn plain_command_has_no_lead() {
    let ins = instruction(Dialect::Old, "A");
    assert_eq!(ins.command, Command::Advance);
    assert_eq!(ins.lead, LeadParam::None);
    assert_eq!(ins.count, 1);
    assert!(ins.tpar.is_none());
}

#[test]
fn leading_parameter_forms() {
    let cases = [
        ("+A", LeadParam::Plus, 1),
        ("-A", LeadParam::Minus, -1),
        ("12A", LeadParam::Pint, 12),
        ("+7A", LeadParam::Pint, 7),
        ("-4A", LeadParam::Nint, -4),
        (">A", LeadParam::Pindef, 0),
        ("<A", LeadParam::Nindef, 0),
    ];
    for (text, lead, count) in cases {
        let ins = instruction(Dialect::Old, text);
        assert_eq!((ins.lead, ins.count), (lead, count), "{text}");
    }
}

#[test]
fn counts_are_capped() {
    let ins = instruction(Dialect::Old, "99999999A");
    assert_eq!(ins.count, 1_000_000);
}

#[test]
fn marker_lead() {
    let ins = instruction(Dialect::New, "@3J");
    assert_eq!(ins.command, Command::Jump);
    assert_eq!((ins.lead, ins.count), (LeadParam::Marker, 3));
}

#[test]
fn at_sign_without_digit_is_ignored() {
    let ins = instruction(Dialect::New, "@J");
    assert_eq!(ins.command, Command::Jump);
    assert_eq!(ins.lead, LeadParam::None);
}

#[test]
fn illegal_lead_is_rejected() {
    let err = read_one(Dialect::New, "3XA").unwrap_err();
    assert!(matches!(err, ReadError::IllegalLeadParam(Command::ExitAbort)));
    assert!(err.to_string().contains("exit_abort"));
}

#[test]
fn nosuch_skips_lead_check() {
    let ins = instruction(Dialect::New, "5AQ");
    assert_eq!(ins.command, Command::NoSuch);
    assert_eq!(ins.count, 5);
}

#[test]
fn single_trailing_parameter() {
    let ins = instruction(Dialect::New, "IT 'Hello world'");
    assert_eq!(ins.command, Command::InsertText);
    let tpar = ins.tpar.unwrap();
    assert_eq!(tpar.dlm, TparDelimiter::Exact);
    assert_eq!(tpar.text, "Hello world");
    assert!(tpar.nxt.is_none());
}

#[test]
fn two_parameters_share_a_delimiter() {
    let ins = instruction(Dialect::New, "R/old/new/");
    let tpar = ins.tpar.unwrap();
    assert_eq!(tpar.dlm, TparDelimiter::Smart);
    assert_eq!(tpar.text, "old");
    assert_eq!(tpar.next().map(|t| t.text.as_str()), Some("new"));
}

#[test]
fn line_end_in_parameter_starts_continuation() {
    let ins = instruction(Dialect::New, "IT/one\ntwo/");
    let tpar = ins.tpar.unwrap();
    assert_eq!(tpar.text, "one");
    assert_eq!(tpar.full_text(), "one\ntwo");
}

#[test]
fn environment_and_span_delimiters() {
    assert_eq!(
        instruction(Dialect::New, "G$HOME$").tpar.unwrap().dlm,
        TparDelimiter::Environment
    );
    assert_eq!(
        instruction(Dialect::New, "G&SPAN&").tpar.unwrap().dlm,
        TparDelimiter::Span
    );
}

#[test]
fn unterminated_parameter() {
    let err = read_one(Dialect::New, "G/abc").unwrap_err();
    assert!(matches!(err, ReadError::UnterminatedParameter));
}

#[test]
fn bad_delimiter() {
    let err = read_one(Dialect::New, "Gxabcx").unwrap_err();
    assert!(matches!(err, ReadError::BadDelimiter(b'x')));
}

#[test]
fn end_of_input_mid_command() {
    assert!(matches!(read_one(Dialect::New, ""), Ok(ReadOutcome::EndOfInput)));
    assert!(matches!(read_one(Dialect::New, "  "), Ok(ReadOutcome::EndOfInput)));
    assert!(matches!(read_one(Dialect::New, "X"), Ok(ReadOutcome::EndOfInput)));
    assert!(matches!(read_one(Dialect::New, "12"), Ok(ReadOutcome::EndOfInput)));
}

#[test]
fn batch_reader_skips_blanks_between_commands() {
    let keymap = Keymap::load(Dialect::Old);
    let reader = CommandReader::batch();
    let mut keys = StringKeys::new("  A \n K ");
    let mut commands = Vec::new();
    while let ReadOutcome::Instruction(ins) = reader.read(&keymap, &mut keys).unwrap() {
        commands.push(ins.command);
    }
    assert_eq!(commands, vec![Command::Advance, Command::DeleteLine]);
}

#[test]
fn interactive_reader_sees_introducer_and_resize() {
    let keymap = Keymap::load(Dialect::New);
    let reader = CommandReader::interactive(b'\\');
    let mut keys = StringKeys::from_events([
        KeyEvent::byte(b'\\'),
        KeyEvent::special(KEY_RESIZE),
        KeyEvent::special(KEY_UP),
    ]);
    assert!(matches!(
        reader.read(&keymap, &mut keys),
        Ok(ReadOutcome::Introducer)
    ));
    assert!(matches!(reader.read(&keymap, &mut keys), Ok(ReadOutcome::Resize)));
    match reader.read(&keymap, &mut keys) {
        Ok(ReadOutcome::Instruction(ins)) => assert_eq!(ins.command, Command::Up),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn interactive_reader_runs_compiled_keys() {
    let mut keymap = Keymap::load(Dialect::New);
    let mut arena = CodeArena::new();
    let id = arena.insert(Vec::new());
    assert!(keymap.bind_code(crate::core::KeyCode::from(b'#'), id));

    let mut keys = StringKeys::new("#");
    let outcome = CommandReader::interactive(b'\\').read(&keymap, &mut keys);
    assert!(matches!(outcome, Ok(ReadOutcome::Code(got)) if got == id));

    let mut keys = StringKeys::new("#");
    let outcome = CommandReader::batch().read(&keymap, &mut keys);
    assert!(matches!(outcome, Ok(ReadOutcome::Instruction(_))));
}
