use super::*;

fn rotation_table() -> Interpolation {
    Interpolation::new(&[-600.0, 0.0, 600.0], &[-120.0, 0.0, 120.0]).expect("valid table")
}

#[test]
fn hits_control_points_exactly() {
    let table = rotation_table();
    assert_eq!(table.apply(-600.0), -120.0);
    assert_eq!(table.apply(0.0), 0.0);
    assert_eq!(table.apply(600.0), 120.0);
}

#[test]
fn interpolates_linearly_between_points() {
    let table = rotation_table();
    assert!((table.apply(150.0) - 30.0).abs() < 1e-4);
    assert!((table.apply(-300.0) + 60.0).abs() < 1e-4);
}

#[test]
fn clamps_outside_range_by_default() {
    let table = rotation_table();
    assert_eq!(table.extrapolate(), Extrapolate::Clamp);
    assert_eq!(table.apply(10_000.0), 120.0);
    assert_eq!(table.apply(-10_000.0), -120.0);
}

#[test]
fn extend_continues_outer_slope() {
    let table = rotation_table().with_extrapolate(Extrapolate::Extend);
    assert!((table.apply(1200.0) - 240.0).abs() < 1e-3);
    assert!((table.apply(-1200.0) + 240.0).abs() < 1e-3);
}

#[test]
fn output_is_monotonic_for_monotonic_table() {
    let table = rotation_table();
    let mut previous = f32::NEG_INFINITY;
    let mut x = -900.0;
    while x <= 900.0 {
        let y = table.apply(x);
        assert!(y >= previous, "rotation decreased at x = {x}");
        previous = y;
        x += 7.5;
    }
}

#[test]
fn rejects_malformed_tables() {
    assert_eq!(
        Interpolation::new(&[0.0, 1.0], &[0.0]),
        Err(InterpolationError::LengthMismatch {
            input: 2,
            output: 1
        })
    );
    assert_eq!(
        Interpolation::new(&[0.0], &[0.0]),
        Err(InterpolationError::TooFewPoints { len: 1 })
    );
    assert_eq!(
        Interpolation::new(&[0.0, 0.0], &[0.0, 1.0]),
        Err(InterpolationError::NotIncreasing { index: 1 })
    );
    assert_eq!(
        Interpolation::new(&[0.0, f32::NAN], &[0.0, 1.0]),
        Err(InterpolationError::NotFinite { index: 1 })
    );
}
