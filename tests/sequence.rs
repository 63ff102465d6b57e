use route_patterns::sequence::digest_hex;
use route_patterns::{Pull, StringSequence};

const EGOR: &str = "0e3959d76db5a16ff6afb41a85b9b11772f590bb";
const ILYA: &str = "dc49d4c1902456c63393c9ece4c6f2d108da32da";

#[test]
fn egor_then_ilya_then_end() {
    let mut names = StringSequence::new();
    names.push("Egor");
    names.push("Ilya");

    let mut cursor = names.cursor();
    assert_eq!(cursor.pull(), Pull::Value(EGOR.to_string()));
    assert_eq!(cursor.pull(), Pull::Value(ILYA.to_string()));
    assert_eq!(cursor.pull(), Pull::EndOfSequence);
}

#[test]
fn yields_one_digest_per_item_in_order() {
    let items = ["How", "do", "you?", "", "Привет"];
    let sequence: StringSequence = items.into_iter().collect();

    let digests: Vec<String> = sequence.cursor().collect();
    assert_eq!(digests.len(), items.len());
    for (digest, item) in digests.iter().zip(items) {
        assert_eq!(digest, &digest_hex(item));
        assert_eq!(digest.len(), 40);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}

#[test]
fn exhausted_cursor_stays_exhausted() {
    let sequence: StringSequence = ["Egor"].into_iter().collect();
    let mut cursor = sequence.cursor();
    assert!(matches!(cursor.pull(), Pull::Value(_)));

    for _ in 0..10 {
        assert_eq!(cursor.pull(), Pull::EndOfSequence);
        assert_eq!(cursor.next(), None);
    }
    assert_eq!(cursor.position(), 1);
}

#[test]
fn new_cursor_restarts_traversal() {
    let sequence: StringSequence = ["Egor", "How do you?", "Ilya"].into_iter().collect();

    let first: Vec<String> = sequence.cursor().collect();
    let second: Vec<String> = (&sequence).into_iter().collect();
    assert_eq!(first, second);
    assert_eq!(first[0], EGOR);
}

#[test]
fn cursors_do_not_share_position() {
    let sequence: StringSequence = ["Egor", "Ilya"].into_iter().collect();
    let mut a = sequence.cursor();
    let mut b = sequence.cursor();

    assert_eq!(a.pull(), Pull::Value(EGOR.to_string()));
    assert_eq!(a.pull(), Pull::Value(ILYA.to_string()));
    assert_eq!(b.pull(), Pull::Value(EGOR.to_string()));
    assert_eq!(a.pull(), Pull::EndOfSequence);
    assert_eq!(b.position(), 1);
}

#[test]
fn appends_are_seen_by_later_cursors() {
    let mut sequence = StringSequence::new();
    sequence.push("Egor");
    assert_eq!(sequence.cursor().count(), 1);

    sequence.push("Ilya");
    let digests: Vec<String> = sequence.cursor().collect();
    assert_eq!(digests, vec![EGOR, ILYA]);
}

#[test]
fn empty_sequence_ends_immediately() {
    let sequence = StringSequence::new();
    assert_eq!(sequence.cursor().pull(), Pull::EndOfSequence);
}
