use super::*;
use crate::kernel::keymap::Dialect;

fn keys(text: &str) -> Vec<KeyCode> {
    text.bytes().map(KeyCode::from).collect()
}

#[test]
fn old_dialect_single_key() {
    let keymap = Keymap::load(Dialect::Old);
    assert_eq!(
        PrefixDispatcher::resolve(&keymap, &keys("A")),
        Some(Command::Advance)
    );
}

#[test]
fn new_dialect_two_key_chain() {
    let keymap = Keymap::load(Dialect::New);
    let mut dispatcher = PrefixDispatcher::new();
    assert_eq!(
        dispatcher.feed(&keymap, b'a' as KeyCode),
        Dispatch::Pending(Prefix::A)
    );
    assert_eq!(dispatcher.pending(), Some(Prefix::A));
    assert_eq!(
        dispatcher.feed(&keymap, b'l' as KeyCode),
        Dispatch::Command(Command::Advance)
    );
    assert!(dispatcher.is_idle());
}

#[test]
fn three_key_chain_in_both_dialects() {
    for dialect in [Dialect::Old, Dialect::New] {
        let keymap = Keymap::load(dialect);
        assert_eq!(
            PrefixDispatcher::resolve(&keymap, &keys("EOL")),
            Some(Command::EqualEol),
            "{dialect:?}"
        );
    }
}

#[test]
fn exit_abort_chain() {
    let keymap = Keymap::load(Dialect::New);
    assert_eq!(
        PrefixDispatcher::resolve(&keymap, &keys("XA")),
        Some(Command::ExitAbort)
    );
}

#[test]
fn special_key_after_prefix_is_nosuch() {
    let keymap = Keymap::load(Dialect::New);
    let mut dispatcher = PrefixDispatcher::new();
    dispatcher.feed(&keymap, b'A' as KeyCode);
    assert_eq!(
        dispatcher.feed(&keymap, crate::core::event::KEY_UP),
        Dispatch::Command(Command::NoSuch)
    );
    assert!(dispatcher.is_idle());
}

#[test]
fn unfinished_chain_resolves_to_none() {
    let keymap = Keymap::load(Dialect::New);
    assert_eq!(PrefixDispatcher::resolve(&keymap, &keys("T")), None);
    assert_eq!(PrefixDispatcher::resolve(&keymap, &keys("TC")), None);
    assert_eq!(
        PrefixDispatcher::resolve(&keymap, &keys("TCU")),
        Some(Command::CaseUp)
    );
}

#[test]
fn reset_drops_pending_prefix() {
    let keymap = Keymap::load(Dialect::New);
    let mut dispatcher = PrefixDispatcher::new();
    dispatcher.feed(&keymap, b'X' as KeyCode);
    dispatcher.reset();
    assert_eq!(
        dispatcher.feed(&keymap, b'G' as KeyCode),
        Dispatch::Command(Command::Get)
    );
}
