//! End-to-end swipe sessions driven through the public API

use flick_core::{
    CardDeck, Commit, CommitSource, DeckConfig, DeckFrame, DeckInput, Direction, Feed, FeedFilter,
    GesturePhase, Item, StaticProvider,
};

const FRAME: f32 = 1.0 / 60.0;

fn abc() -> CardDeck {
    CardDeck::with_items(
        vec![
            Item::new("a", "A"),
            Item::new("b", "B"),
            Item::new("c", "C"),
        ]
        .into(),
    )
}

/// Tick until the deck stops animating, collecting commits
fn settle(deck: &mut CardDeck) -> Vec<Commit> {
    let mut commits = Vec::new();
    for _ in 0..600 {
        let report = deck.tick(FRAME);
        commits.extend(report.commit);
        if !report.animating {
            return commits;
        }
    }
    panic!("deck never settled");
}

fn labels(deck: &CardDeck) -> (Option<String>, Option<String>) {
    let frame = DeckFrame::project(deck);
    let label = |view: Option<&flick_core::CardView<'_>>| {
        view.and_then(|v| v.item).map(|i| i.label().to_string())
    };
    (label(frame.top()), label(frame.companion()))
}

#[test]
fn button_dismiss_right_shows_next_pair() {
    let mut deck = abc();
    assert_eq!(labels(&deck), (Some("A".into()), Some("B".into())));

    assert!(deck.dismiss(Direction::Right));
    let commits = settle(&mut deck);

    assert_eq!(
        commits,
        vec![Commit {
            direction: Direction::Right,
            source: CommitSource::Button,
            index: 1,
        }]
    );
    assert_eq!(deck.current_index(), 1);
    assert_eq!(deck.drag_offset(), 0.0);
    assert_eq!(labels(&deck), (Some("B".into()), Some("C".into())));
}

#[test]
fn drag_past_threshold_commits_once() {
    let mut deck = abc();
    deck.handle_input(DeckInput::PressStart);
    for dx in [40.0, 120.0, 200.0, 260.0] {
        deck.handle_input(DeckInput::DragMove { dx });
    }
    deck.handle_input(DeckInput::Release { dx: 260.0 });
    assert_eq!(deck.phase(), GesturePhase::Committing(Direction::Right));

    let commits = settle(&mut deck);
    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0].direction, Direction::Right);
    assert_eq!(commits[0].source, CommitSource::Gesture);
    assert_eq!(deck.current_index(), 1);
}

#[test]
fn short_drag_springs_back() {
    let mut deck = abc();
    deck.handle_input(DeckInput::PressStart);
    deck.handle_input(DeckInput::DragMove { dx: 100.0 });
    deck.handle_input(DeckInput::Release { dx: 100.0 });

    // Moving back toward center, not jumping there
    deck.tick(FRAME);
    let first = deck.drag_offset();
    assert!(first > 0.0 && first < 100.0);

    let commits = settle(&mut deck);
    assert!(commits.is_empty());
    assert_eq!(deck.current_index(), 0);
    assert_eq!(deck.drag_offset(), 0.0);
    assert_eq!(deck.press_scale(), 1.0);
    assert_eq!(deck.phase(), GesturePhase::Idle);
}

#[test]
fn release_exactly_at_threshold_cancels() {
    for dx in [-250.0, 250.0] {
        let mut deck = abc();
        deck.press_start();
        deck.drag_move(dx);
        deck.release(dx);
        assert!(settle(&mut deck).is_empty());
        assert_eq!(deck.current_index(), 0);
    }
}

#[test]
fn flick_again_during_snap_back() {
    let mut deck = abc();
    deck.press_start();
    deck.drag_move(-180.0);
    deck.release(-180.0);
    for _ in 0..4 {
        deck.tick(FRAME);
    }

    // Grab the card mid-return and throw it left this time
    deck.press_start();
    deck.drag_move(-300.0);
    deck.release(-300.0);

    let commits = settle(&mut deck);
    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0].direction, Direction::Left);
    assert_eq!(deck.current_index(), 1);
}

#[test]
fn rapid_double_dislike_advances_once_per_completion() {
    let mut deck = abc();
    assert!(deck.dislike());
    deck.tick(FRAME);
    assert!(!deck.dislike());

    assert_eq!(settle(&mut deck).len(), 1);
    assert_eq!(deck.current_index(), 1);
}

#[test]
fn swipe_through_whole_deck() {
    let mut deck = abc();
    for expected in 1..=4 {
        assert!(deck.like());
        settle(&mut deck);
        assert_eq!(deck.current_index(), expected);
    }
    assert_eq!(labels(&deck), (None, None));
}

#[test]
fn feed_drives_deck() {
    let provider = StaticProvider::new(vec![
        Item::new("btc", "Bitcoin").with_rank(1),
        Item::new("dead", "Dead").with_rank(9).with_active(false),
        Item::new("eth", "Ethereum").with_rank(2),
    ]);
    let mut feed = Feed::new(provider, FeedFilter::default());
    let mut deck = CardDeck::new(DeckConfig::default());
    assert_eq!(DeckFrame::project(&deck), DeckFrame::Loading);

    deck.replace_items(feed.refresh().unwrap());
    assert_eq!(
        labels(&deck),
        (Some("Bitcoin".into()), Some("Ethereum".into()))
    );
}
