use super::*;

use swipedeck_ui_graphics::Point;

#[test]
fn reports_cumulative_deltas_from_touch_down() {
    let mut pan = PanGestureRecognizer::new();

    assert_eq!(
        pan.on_pointer_event(&PointerEvent::down(1, Point::new(100.0, 300.0))),
        Some(PanGestureEvent::Started {
            position: Point::new(100.0, 300.0)
        })
    );
    assert_eq!(
        pan.on_pointer_event(&PointerEvent::moved(1, Point::new(120.0, 310.0))),
        Some(PanGestureEvent::Moved {
            delta: Point::new(20.0, 10.0)
        })
    );
    assert_eq!(
        pan.on_pointer_event(&PointerEvent::moved(1, Point::new(250.0, 290.0))),
        Some(PanGestureEvent::Moved {
            delta: Point::new(150.0, -10.0)
        })
    );
    assert_eq!(pan.current_delta(), Some(Point::new(150.0, -10.0)));
    assert_eq!(
        pan.on_pointer_event(&PointerEvent::up(1, Point::new(250.0, 290.0))),
        Some(PanGestureEvent::Ended {
            delta: Point::new(150.0, -10.0)
        })
    );
    assert!(!pan.is_active());
}

#[test]
fn second_pointer_is_ignored_while_panning() {
    let mut pan = PanGestureRecognizer::new();
    pan.on_pointer_event(&PointerEvent::down(1, Point::ZERO));

    assert_eq!(
        pan.on_pointer_event(&PointerEvent::down(2, Point::new(50.0, 50.0))),
        None
    );
    assert_eq!(
        pan.on_pointer_event(&PointerEvent::moved(2, Point::new(80.0, 50.0))),
        None
    );
    assert_eq!(
        pan.on_pointer_event(&PointerEvent::up(2, Point::new(80.0, 50.0))),
        None
    );
    assert!(pan.is_active());
}

#[test]
fn moves_without_touch_down_are_ignored() {
    let mut pan = PanGestureRecognizer::new();
    assert_eq!(
        pan.on_pointer_event(&PointerEvent::moved(1, Point::new(10.0, 0.0))),
        None
    );
    assert_eq!(
        pan.on_pointer_event(&PointerEvent::up(1, Point::new(10.0, 0.0))),
        None
    );
}

#[test]
fn cancel_reports_last_known_delta() {
    let mut pan = PanGestureRecognizer::new();
    pan.on_pointer_event(&PointerEvent::down(7, Point::new(10.0, 10.0)).at(5));
    pan.on_pointer_event(&PointerEvent::moved(7, Point::new(40.0, 10.0)).at(21));

    assert_eq!(
        pan.on_pointer_event(&PointerEvent::cancel(7, Point::new(400.0, 10.0))),
        Some(PanGestureEvent::Cancelled {
            delta: Point::new(30.0, 0.0)
        })
    );
    assert!(!pan.is_active());
}

#[test]
fn screen_metrics_threshold_and_validation() {
    let metrics = ScreenMetrics::new(400.0, 800.0);
    assert!(metrics.is_valid());
    assert_eq!(
        metrics.swipe_threshold(gesture_constants::SWIPE_THRESHOLD_FRACTION),
        100.0
    );
    assert!(!ScreenMetrics::new(0.0, 800.0).is_valid());
    assert!(!ScreenMetrics::new(f32::INFINITY, 800.0).is_valid());
    assert!(!ScreenMetrics::new(400.0, f32::NAN).is_valid());
}
