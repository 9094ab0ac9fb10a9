use super::*;

#[derive(Debug, Clone, PartialEq)]
struct Card(u32);

impl DeckItem for Card {
    type Id = u32;

    fn id(&self) -> u32 {
        self.0
    }
}

fn geometry() -> CardGeometry {
    CardGeometry {
        width: 400.0,
        top: 200.0,
        stack_offset: 10.0,
    }
}

#[test]
fn renders_remaining_cards_back_to_front() {
    let data = [Card(1), Card(2), Card(3), Card(4)];
    let cards = render_stack(&data, 1, Point::ZERO, 0.0, &geometry(), |card| card.0 * 10);

    let keys: Vec<u32> = cards.iter().map(|card| card.key).collect();
    assert_eq!(keys, vec![4, 3, 2]);
    let contents: Vec<u32> = cards.iter().map(|card| card.content).collect();
    assert_eq!(contents, vec![40, 30, 20]);
    assert!(cards.last().is_some_and(|card| card.is_active()));
}

#[test]
fn stacked_cards_fan_out_by_depth() {
    let data = [Card(1), Card(2), Card(3)];
    let cards = render_stack(&data, 0, Point::new(30.0, -5.0), 6.0, &geometry(), |_| ());

    assert_eq!(cards[0].role, CardRole::Stacked { depth: 2 });
    assert_eq!(cards[0].origin, Point::new(0.0, 220.0));
    assert_eq!(cards[1].role, CardRole::Stacked { depth: 1 });
    assert_eq!(cards[1].origin, Point::new(0.0, 210.0));
    for stacked in &cards[..2] {
        assert!(stacked.layer.is_identity());
        assert_eq!(stacked.width, 400.0);
    }
}

#[test]
fn active_card_carries_offset_and_rotation() {
    let data = [Card(7)];
    let cards = render_stack(&data, 0, Point::new(30.0, -5.0), 6.0, &geometry(), |_| ());

    let active = &cards[0];
    assert_eq!(active.role, CardRole::Active);
    assert_eq!(active.index, 0);
    assert_eq!(active.origin, Point::new(0.0, 200.0));
    assert_eq!(active.layer.translation(), Point::new(30.0, -5.0));
    assert_eq!(active.layer.rotation_z, 6.0);
}

#[test]
fn nothing_renders_past_the_end() {
    let data = [Card(1), Card(2)];
    let mut calls = 0;
    let cards = render_stack(&data, 2, Point::ZERO, 0.0, &geometry(), |_| calls += 1);
    assert!(cards.is_empty());
    assert_eq!(calls, 0);
}

#[test]
fn frame_accessors() {
    let data = [Card(1), Card(2)];
    let frame = DeckFrame {
        content: DeckFrameContent::Cards(render_stack(
            &data,
            0,
            Point::ZERO,
            0.0,
            &geometry(),
            |card| card.0,
        )),
        layout_transition: None,
    };
    assert!(!frame.is_exhausted());
    assert_eq!(frame.cards().len(), 2);
    assert_eq!(frame.active_card().map(|card| card.key), Some(1));
    assert_eq!(frame.empty_view(), None);

    let empty: DeckFrame<u32, &str> = DeckFrame {
        content: DeckFrameContent::Exhausted("done"),
        layout_transition: None,
    };
    assert!(empty.is_exhausted());
    assert!(empty.cards().is_empty());
    assert!(empty.active_card().is_none());
    assert_eq!(empty.empty_view(), Some(&"done"));
}
