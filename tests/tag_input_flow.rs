//! End-to-end keyboard flows through the public tag input API.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tagbox::{filter_suggestions, InputOutcome, Suggestion, Tag, TagInput, TagInputAction};

fn press(input: &mut TagInput, code: KeyCode) -> InputOutcome {
    input.handle_input(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(input: &mut TagInput, text: &str) {
    for c in text.chars() {
        press(input, KeyCode::Char(c));
    }
}

/// Owner-side bookkeeping: apply requested changes and hand the list back.
fn apply(tags: &mut Vec<Tag>, input: &mut TagInput, outcome: InputOutcome) {
    match outcome.action {
        Some(TagInputAction::Add(tag)) => tags.push(tag),
        Some(TagInputAction::Delete(index)) => {
            tags.remove(index);
        }
        _ => return,
    }
    input.set_tags(tags.clone());
}

fn pool() -> Vec<Suggestion> {
    vec![
        Suggestion::new("Apple"),
        Suggestion::new("Avocado"),
        Suggestion::new("Banana"),
        Suggestion::disabled("Apricot"),
    ]
}

#[test]
fn build_and_edit_a_tag_list() {
    let mut tags = Vec::new();
    let mut input = TagInput::default();
    input.set_suggestions(pool());

    type_text(&mut input, "av");
    press(&mut input, KeyCode::Down);
    let outcome = press(&mut input, KeyCode::Enter);
    apply(&mut tags, &mut input, outcome);

    type_text(&mut input, "b");
    press(&mut input, KeyCode::Up);
    let outcome = press(&mut input, KeyCode::Tab);
    assert!(outcome.consumed);
    apply(&mut tags, &mut input, outcome);

    assert_eq!(tags, vec![Tag::new("Avocado"), Tag::new("Banana")]);

    // Backspace on the empty query pops the last tag
    let outcome = press(&mut input, KeyCode::Backspace);
    apply(&mut tags, &mut input, outcome);
    assert_eq!(tags, vec![Tag::new("Avocado")]);
}

#[test]
fn disabled_suggestion_leaves_everything_unchanged() {
    let mut tags = vec![Tag::new("Banana")];
    let mut input = TagInput::default();
    input.set_tags(tags.clone());
    input.set_suggestions(pool());

    type_text(&mut input, "apr");
    press(&mut input, KeyCode::Down);
    let outcome = press(&mut input, KeyCode::Enter);
    assert_eq!(outcome.action, None);
    apply(&mut tags, &mut input, outcome);

    assert_eq!(tags, vec![Tag::new("Banana")]);
    assert_eq!(input.query(), "apr");
}

#[test]
fn cycling_is_circular_for_every_query() {
    for query in ["", "a", "av", "b", "zzz"] {
        let mut input = TagInput::default();
        input.set_suggestions(pool());
        input.set_query(query);

        let count = input.suggestions().len();
        assert_eq!(input.suggestions(), filter_suggestions(query, &pool()).as_slice());

        press(&mut input, KeyCode::Down);
        let start = input.selected_index();
        for _ in 0..count {
            press(&mut input, KeyCode::Down);
        }
        assert_eq!(input.selected_index(), start, "query {:?}", query);

        if count > 0 {
            input.select_next();
            while input.selected_index() != Some(0) {
                input.select_next();
            }
            press(&mut input, KeyCode::Up);
            assert_eq!(input.selected_index(), Some(count - 1));
        } else {
            assert_eq!(input.selected_index(), None);
        }
    }
}

#[test]
fn pool_refresh_keeps_query_and_clamps_selection() {
    let mut input = TagInput::default();
    input.set_suggestions(pool());
    type_text(&mut input, "a");
    press(&mut input, KeyCode::Up);
    assert_eq!(input.selected_index(), Some(2));

    input.set_suggestions(vec![Suggestion::new("Apple"), Suggestion::new("Banana")]);
    assert_eq!(input.query(), "a");
    assert_eq!(input.suggestions(), &[Suggestion::new("Apple")]);
    assert_eq!(input.selected_index(), None);
}
