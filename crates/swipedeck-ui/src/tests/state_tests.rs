use super::*;

use super::{DeckAction as A, DeckPhase as P};

fn at(index: usize, len: usize, phase: DeckPhase) -> DeckState {
    DeckState { index, len, phase }
}

#[test]
fn release_decision_uses_strict_threshold() {
    let threshold = 100.0;
    assert_eq!(
        SwipeDecision::for_release(150.0, threshold),
        SwipeDecision::Commit(SwipeDirection::Right)
    );
    assert_eq!(
        SwipeDecision::for_release(-100.5, threshold),
        SwipeDecision::Commit(SwipeDirection::Left)
    );
    assert_eq!(SwipeDecision::for_release(100.0, threshold), SwipeDecision::Cancel);
    assert_eq!(SwipeDecision::for_release(-100.0, threshold), SwipeDecision::Cancel);
    assert_eq!(SwipeDecision::for_release(-50.0, threshold), SwipeDecision::Cancel);
    assert_eq!(SwipeDecision::for_release(0.0, threshold), SwipeDecision::Cancel);
}

#[test]
fn drag_release_commit_cycle_advances_index() {
    let state = DeckState::new(2)
        .reduce(A::GestureStarted)
        .and_then(|s| s.reduce(A::GestureMoved))
        .and_then(|s| s.reduce(A::GestureReleased(SwipeDecision::Commit(SwipeDirection::Right))))
        .expect("drag accepted");
    assert_eq!(state, at(0, 2, P::AnimatingCommit(SwipeDirection::Right)));

    let state = state.reduce(A::CommitFinished).expect("commit finishes");
    assert_eq!(state, at(1, 2, P::Idle));
    assert_eq!(state.remaining(), 1);
}

#[test]
fn cancel_cycle_keeps_index() {
    let state = at(1, 3, P::Dragging)
        .reduce(A::GestureReleased(SwipeDecision::Cancel))
        .expect("release accepted");
    assert_eq!(state.phase, P::AnimatingCancel);
    let state = state.reduce(A::CancelSettled).expect("settles");
    assert_eq!(state, at(1, 3, P::Idle));
}

#[test]
fn gesture_can_grab_a_springing_card() {
    let state = at(0, 1, P::AnimatingCancel)
        .reduce(A::GestureStarted)
        .expect("spring is interruptible");
    assert_eq!(state.phase, P::Dragging);
}

#[test]
fn commit_animation_rejects_competing_actions() {
    let committing = at(0, 2, P::AnimatingCommit(SwipeDirection::Left));
    for action in [
        A::GestureStarted,
        A::GestureMoved,
        A::GestureReleased(SwipeDecision::Cancel),
        A::ForceSwipe(SwipeDirection::Right),
        A::ResetRequested,
        A::CancelSettled,
    ] {
        assert_eq!(
            committing.reduce(action),
            Err(DeckError::TransitionRejected {
                phase: committing.phase,
                action
            }),
            "{action:?} should be rejected"
        );
    }
}

#[test]
fn moves_and_releases_need_an_active_drag() {
    let idle = at(0, 2, P::Idle);
    assert!(idle.reduce(A::GestureMoved).is_err());
    assert!(idle.reduce(A::GestureReleased(SwipeDecision::Cancel)).is_err());
    assert!(idle.reduce(A::CommitFinished).is_err());
    assert!(at(0, 2, P::Dragging).reduce(A::GestureStarted).is_err());
}

#[test]
fn exhausted_deck_refuses_new_swipes() {
    let done = at(2, 2, P::Idle);
    assert!(done.is_exhausted());
    assert_eq!(done.remaining(), 0);
    assert_eq!(done.reduce(A::GestureStarted), Err(DeckError::Exhausted));
    assert_eq!(
        done.reduce(A::ForceSwipe(SwipeDirection::Left)),
        Err(DeckError::Exhausted)
    );
}

#[test]
fn force_swipe_is_allowed_mid_drag() {
    let state = at(0, 2, P::Dragging)
        .reduce(A::ForceSwipe(SwipeDirection::Left))
        .expect("programmatic swipe");
    assert_eq!(state.phase, P::AnimatingCommit(SwipeDirection::Left));
}

#[test]
fn replacing_data_resets_from_any_phase() {
    let phases = [
        P::Idle,
        P::Dragging,
        P::AnimatingCancel,
        P::AnimatingCommit(SwipeDirection::Right),
    ];
    for phase in phases {
        let state = at(3, 5, phase)
            .reduce(A::DataReplaced { len: 4 })
            .expect("always accepted");
        assert_eq!(state, at(0, 4, P::Idle));
    }
    let from_exhausted = at(5, 5, P::Idle)
        .reduce(A::DataReplaced { len: 0 })
        .expect("always accepted");
    assert_eq!(from_exhausted, at(0, 0, P::Idle));
    assert!(from_exhausted.is_exhausted());
}

#[test]
fn errors_render_readably() {
    let err = at(0, 1, P::AnimatingCommit(SwipeDirection::Right))
        .reduce(A::GestureStarted)
        .unwrap_err();
    assert_eq!(err.to_string(), "cannot apply GestureStarted while swiping right");
    assert_eq!(DeckError::Exhausted.to_string(), "no cards left in the deck");
}
