use super::*;
use std::io::Cursor;

#[test]
fn string_keys_yield_latin1_bytes() {
    let mut keys = StringKeys::new("aé");
    assert_eq!(keys.remaining(), 2);
    assert_eq!(keys.next_key().unwrap(), Some(KeyEvent::byte(b'a')));
    assert_eq!(keys.next_key().unwrap(), Some(KeyEvent::byte(0xe9)));
    assert_eq!(keys.next_key().unwrap(), None);
}

#[test]
fn pushed_events_come_last() {
    let mut keys = StringKeys::from_events([KeyEvent::byte(b'x')]);
    keys.push(KeyEvent::byte(b'y'));
    assert_eq!(keys.next_key().unwrap(), Some(KeyEvent::byte(b'x')));
    assert_eq!(keys.next_key().unwrap(), Some(KeyEvent::byte(b'y')));
}

#[test]
fn stream_keys_read_bytes_until_eof() {
    let mut keys = StreamKeys::new(Cursor::new(b"Q\n".to_vec()));
    assert_eq!(keys.next_key().unwrap(), Some(KeyEvent::byte(b'Q')));
    assert_eq!(keys.next_key().unwrap(), Some(KeyEvent::byte(b'\n')));
    assert_eq!(keys.next_key().unwrap(), None);
}
