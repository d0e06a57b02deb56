use super::*;

fn t(hour: u8, minute: u8) -> ClockTime {
    ClockTime::new(hour, minute)
}

fn room(name: &str, price: &str) -> RoomOption {
    RoomOption { name: name.to_owned(), price: price.to_owned(), ..RoomOption::default() }
}

fn kinds(state: &ChatState) -> Vec<&ChatEntryKind> {
    state.entries.iter().map(|e| &e.kind).collect()
}

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_is_empty() {
    let state = ChatState::default();
    assert!(state.entries.is_empty());
    assert_eq!(state.pending_count(), 0);
}

// =============================================================
// Composer
// =============================================================

#[test]
fn composer_blank_send_keeps_input() {
    let mut composer = Composer::default();
    composer.set("   ".to_owned());
    assert_eq!(composer.take_message(), None);
    assert_eq!(composer.text, "   ");
}

#[test]
fn composer_send_returns_raw_text_and_clears_input() {
    let mut composer = Composer::default();
    composer.set(" two guests ".to_owned());
    assert_eq!(composer.take_message().as_deref(), Some(" two guests "));
    assert!(composer.text.is_empty());
}

#[test]
fn composer_message_starts_turn() {
    let mut composer = Composer::default();
    let mut state = ChatState::default();
    composer.set("hello".to_owned());

    let text = composer.take_message().unwrap();
    let turn = state.begin_turn(&text, 1_000, t(9, 0)).unwrap();
    assert_eq!(turn.message, "hello");
    assert!(composer.text.is_empty());
    assert_eq!(state.pending_count(), 1);
}

// =============================================================
// begin_turn
// =============================================================

#[test]
fn begin_turn_appends_user_bubble_then_placeholder() {
    let mut state = ChatState::default();
    let turn = state.begin_turn("hello", 1_000, t(10, 30)).unwrap();

    assert_eq!(turn.message, "hello");
    assert_eq!(state.entries.len(), 2);
    assert_eq!(
        state.entries[0].kind,
        ChatEntryKind::User { text: "hello".to_owned(), time: t(10, 30) }
    );
    assert_eq!(state.entries[1].kind, ChatEntryKind::Loading { turn: turn.id.clone() });
    assert!(state.is_pending(&turn.id));
}

#[test]
fn begin_turn_ignores_blank_input() {
    let mut state = ChatState::default();
    for input in ["", "   ", "\n\t "] {
        assert!(state.begin_turn(input, 1_000, t(0, 0)).is_none());
    }
    assert!(state.entries.is_empty());
    assert_eq!(state.pending_count(), 0);
}

#[test]
fn begin_turn_sends_raw_text() {
    let mut state = ChatState::default();
    let turn = state.begin_turn("  two guests  ", 1_000, t(0, 0)).unwrap();
    assert_eq!(turn.message, "  two guests  ");
}

#[test]
fn turns_sent_in_same_millisecond_get_distinct_ids() {
    let mut state = ChatState::default();
    let a = state.begin_turn("a", 5, t(0, 0)).unwrap();
    let b = state.begin_turn("b", 5, t(0, 0)).unwrap();
    assert_ne!(a.id, b.id);
    assert!(a.id.as_str().starts_with("turn-5-"));
    assert_eq!(state.pending_count(), 2);
}

// =============================================================
// complete_turn / fail_turn
// =============================================================

#[test]
fn hello_scenario_renders_conclusion_and_one_card() {
    let mut state = ChatState::default();
    let turn = state.begin_turn("hello", 1_000, t(9, 0)).unwrap();
    let reply = ChatReply {
        conclusion: "Here are options".to_owned(),
        rooms: vec![room("Suite A", "2000")],
    };
    state.complete_turn(&turn.id, reply, t(9, 1));

    assert!(!state.is_pending(&turn.id));
    assert!(!kinds(&state).iter().any(|k| matches!(k, ChatEntryKind::Loading { .. })));
    assert_eq!(
        kinds(&state)[1..],
        [
            &ChatEntryKind::Bot { lines: vec!["Here are options".to_owned()], time: t(9, 1) },
            &ChatEntryKind::Room(room("Suite A", "2000")),
        ]
    );
    assert_eq!(state.card_count(), 1);
}

#[test]
fn empty_rooms_render_no_cards() {
    let mut state = ChatState::default();
    let turn = state.begin_turn("hi", 1, t(0, 0)).unwrap();
    state.complete_turn(&turn.id, ChatReply { conclusion: "none".to_owned(), rooms: vec![] }, t(0, 0));
    assert_eq!(state.card_count(), 0);
    assert_eq!(state.entries.len(), 2);
}

#[test]
fn n_rooms_render_n_cards_in_order() {
    let mut state = ChatState::default();
    let turn = state.begin_turn("hi", 1, t(0, 0)).unwrap();
    let rooms = vec![room("C", "3"), room("A", "1"), room("B", "2")];
    state.complete_turn(&turn.id, ChatReply { conclusion: "ok".to_owned(), rooms: rooms.clone() }, t(0, 0));

    let cards: Vec<RoomOption> = state
        .entries
        .iter()
        .filter_map(|e| match &e.kind {
            ChatEntryKind::Room(r) => Some(r.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(cards, rooms);
}

#[test]
fn failed_turn_replaces_placeholder_with_apology() {
    let mut state = ChatState::default();
    let turn = state.begin_turn("hello", 1, t(0, 0)).unwrap();
    state.fail_turn(&turn.id, t(0, 2));

    assert_eq!(state.pending_count(), 0);
    assert_eq!(state.entries.len(), 2);
    assert_eq!(state.entries[1].kind, ChatEntryKind::Apology { time: t(0, 2) });
}

#[test]
fn out_of_order_replies_only_remove_their_own_placeholder() {
    let mut state = ChatState::default();
    let first = state.begin_turn("first", 1, t(0, 0)).unwrap();
    let second = state.begin_turn("second", 2, t(0, 0)).unwrap();

    state.complete_turn(&second.id, ChatReply { conclusion: "for second".to_owned(), rooms: vec![] }, t(0, 1));
    assert!(state.is_pending(&first.id));
    assert!(!state.is_pending(&second.id));
    assert!(state
        .entries
        .iter()
        .any(|e| e.kind == ChatEntryKind::Loading { turn: first.id.clone() }));

    state.fail_turn(&first.id, t(0, 2));
    assert_eq!(state.pending_count(), 0);
    assert!(matches!(state.entries.last().map(|e| &e.kind), Some(ChatEntryKind::Apology { .. })));
}

#[test]
fn entry_keys_stay_unique_after_placeholder_removal() {
    let mut state = ChatState::default();
    let turn = state.begin_turn("a", 1, t(0, 0)).unwrap();
    state.complete_turn(&turn.id, ChatReply { conclusion: "x".to_owned(), rooms: vec![room("R", "1")] }, t(0, 0));
    state.begin_turn("b", 2, t(0, 0));

    let mut keys: Vec<u64> = state.entries.iter().map(|e| e.key).collect();
    let len = keys.len();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), len);
}

#[test]
fn earlier_entries_are_never_edited() {
    let mut state = ChatState::default();
    let turn = state.begin_turn("a", 1, t(0, 0)).unwrap();
    state.complete_turn(&turn.id, ChatReply { conclusion: "x".to_owned(), rooms: vec![room("R", "1")] }, t(0, 0));
    let before = state.entries.clone();

    let next = state.begin_turn("b", 2, t(0, 0)).unwrap();
    state.fail_turn(&next.id, t(0, 0));
    assert_eq!(state.entries[..before.len()], before[..]);
}

// =============================================================
// conclusion_lines
// =============================================================

#[test]
fn conclusion_lines_split_on_newlines() {
    assert_eq!(conclusion_lines("one\ntwo\r\nthree"), ["one", "two", "three"]);
}
