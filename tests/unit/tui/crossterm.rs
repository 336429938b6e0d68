use super::*;

fn press(code: ct::KeyCode, modifiers: ct::KeyModifiers) -> Option<KeyEvent> {
    into_key_event(ct::KeyEvent::new(code, modifiers))
}

#[test]
fn printable_characters_map_to_bytes() {
    let key = press(ct::KeyCode::Char('a'), ct::KeyModifiers::NONE).unwrap();
    assert_eq!(key.as_byte(), Some(b'a'));

    let key = press(ct::KeyCode::Char('é'), ct::KeyModifiers::NONE).unwrap();
    assert_eq!(key.as_byte(), Some(0xe9));

    let key = press(ct::KeyCode::Char('€'), ct::KeyModifiers::NONE).unwrap();
    assert_eq!(key.as_byte(), Some(b'?'));
}

#[test]
fn control_characters_fold_to_ascii_controls() {
    let key = press(ct::KeyCode::Char('c'), ct::KeyModifiers::CONTROL).unwrap();
    assert_eq!(key.as_byte(), Some(CTRL_C));
    assert!(key.modifiers.contains(KeyModifiers::CONTROL));

    let key = press(ct::KeyCode::Null, ct::KeyModifiers::NONE).unwrap();
    assert_eq!(key.as_byte(), Some(0));
}

#[test]
fn editing_keys_map_to_bytes() {
    let enter = press(ct::KeyCode::Enter, ct::KeyModifiers::NONE).unwrap();
    assert_eq!(enter.as_byte(), Some(CR));
    let tab = press(ct::KeyCode::Tab, ct::KeyModifiers::NONE).unwrap();
    assert_eq!(tab.as_byte(), Some(TAB));
    let esc = press(ct::KeyCode::Esc, ct::KeyModifiers::NONE).unwrap();
    assert_eq!(esc.as_byte(), Some(ESC));
}

#[test]
fn terminal_keys_map_to_special_codes() {
    let cases = [
        (ct::KeyCode::Up, event::KEY_UP),
        (ct::KeyCode::Down, event::KEY_DOWN),
        (ct::KeyCode::PageDown, event::KEY_PAGE_DOWN),
        (ct::KeyCode::Backspace, event::KEY_BACKSPACE),
        (ct::KeyCode::BackTab, event::KEY_BACK_TAB),
        (ct::KeyCode::F(1), event::KEY_F1),
    ];
    for (code, expected) in cases {
        let key = press(code, ct::KeyModifiers::NONE).unwrap();
        assert_eq!(key.code, expected, "{code:?}");
        assert!(key.is_special());
    }
}

#[test]
fn shift_and_alt_are_carried() {
    let key = press(ct::KeyCode::Left, ct::KeyModifiers::SHIFT | ct::KeyModifiers::ALT).unwrap();
    assert_eq!(key.code, event::KEY_LEFT);
    assert_eq!(key.modifiers, KeyModifiers::SHIFT | KeyModifiers::ALT);
}

#[test]
fn releases_and_unmapped_keys_are_dropped() {
    let mut release = ct::KeyEvent::new(ct::KeyCode::Char('a'), ct::KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    assert_eq!(into_key_event(release), None);

    assert_eq!(press(ct::KeyCode::F(60), ct::KeyModifiers::NONE), None);
    assert_eq!(press(ct::KeyCode::CapsLock, ct::KeyModifiers::NONE), None);
}
