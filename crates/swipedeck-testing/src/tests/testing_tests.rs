use super::*;

use crate::recording::{cards, CardView, RecordingContent};
use swipedeck_foundation::ScreenMetrics;
use swipedeck_ui::{DeckPhase, SwipeDecision, SwipeDirection};

fn deck_of(
    rule: &DeckTestRule,
    ids: impl IntoIterator<Item = u32>,
) -> (
    Deck<crate::TestCard, RecordingContent<u32>>,
    RecordingContent<u32>,
) {
    let content = RecordingContent::new();
    let deck = Deck::with_defaults(
        cards(ids),
        content.clone(),
        ScreenMetrics::new(400.0, 800.0),
        rule.runtime_handle(),
    )
    .expect("valid deck");
    (deck, content)
}

#[test]
fn frames_advance_the_virtual_clock() {
    run_deck_test(|rule| {
        assert_eq!(rule.frame_time_nanos(), 0);
        rule.advance_frame();
        assert_eq!(rule.frame_time_nanos(), FRAME_INTERVAL_NANOS);

        rule.advance_time_by(100);
        assert!(rule.frame_time_millis() >= 116);
        assert!(!rule.is_animating());
        assert_eq!(rule.pump_until_idle(), 0);
    });
}

#[test]
fn drag_leaves_release_animation_running() {
    run_deck_test(|rule| {
        let (deck, content) = deck_of(rule, [1, 2]);

        let released = rule.drag(&deck, Point::new(150.0, 0.0)).expect("drag");
        assert_eq!(
            released,
            Some(DeckGesture::Released(SwipeDecision::Commit(
                SwipeDirection::Right
            )))
        );
        assert!(rule.is_animating());
        assert_eq!(content.commit_count(), 0);

        assert!(rule.pump_until_idle() > 0);
        assert_eq!(content.commits(), vec![(SwipeDirection::Right, 1)]);
    });
}

#[test]
fn swipe_runs_to_rest() {
    run_deck_test(|rule| {
        let (deck, content) = deck_of(rule, [7, 8]);

        rule.swipe(&deck, Point::new(-30.0, 60.0)).expect("swipe");
        assert!(!rule.is_animating());
        assert_eq!(deck.phase(), DeckPhase::Idle);
        assert_eq!(deck.position(), Point::ZERO);
        assert_eq!(content.commit_count(), 0);

        rule.swipe(&deck, Point::new(-300.0, 0.0)).expect("swipe");
        assert_eq!(content.swiped(SwipeDirection::Left), vec![7]);
        assert!(content.swiped(SwipeDirection::Right).is_empty());
    });
}

#[test]
fn recording_counts_renders() {
    run_deck_test(|rule| {
        let (deck, content) = deck_of(rule, [1, 2, 3]);

        let frame = deck.render();
        assert_eq!(content.item_renders(), 3);
        assert_eq!(
            frame.active_card().map(|card| card.content.clone()),
            Some(CardView::Card(1))
        );

        deck.set_data(cards([]));
        let frame = deck.render();
        assert_eq!(frame.empty_view(), Some(&CardView::NoMoreCards));
        assert_eq!(content.empty_renders(), 1);
    });
}
