use vitalrisk_core::models::boundary::Cohort;
use vitalrisk_model::boundary::{BoundaryGrid, reference_points, reference_regions};
use vitalrisk_model::generate_boundary_grid;

#[test]
fn grid_has_169_points() {
    let grid = generate_boundary_grid();
    assert_eq!(grid.len(), 169);
    assert_eq!(grid.count(), 169);
}

#[test]
fn grid_axes_cover_inclusive_ranges() {
    let systolic: Vec<f64> = BoundaryGrid::systolic_values().collect();
    let glucose: Vec<f64> = BoundaryGrid::glucose_values().collect();

    assert_eq!(systolic.len(), 13);
    assert_eq!(systolic.first(), Some(&80.0));
    assert_eq!(systolic.last(), Some(&200.0));

    assert_eq!(glucose.len(), 13);
    assert_eq!(glucose.first(), Some(&60.0));
    assert_eq!(glucose.last(), Some(&240.0));
}

#[test]
fn grid_is_systolic_major() {
    let points: Vec<_> = generate_boundary_grid().take(14).collect();

    assert_eq!((points[0].systolic_bp, points[0].glucose), (80.0, 60.0));
    assert_eq!((points[1].systolic_bp, points[1].glucose), (80.0, 75.0));
    assert_eq!((points[12].systolic_bp, points[12].glucose), (80.0, 240.0));
    assert_eq!((points[13].systolic_bp, points[13].glucose), (90.0, 60.0));
}

#[test]
fn risk_flag_agrees_with_probability() {
    for point in generate_boundary_grid() {
        assert_eq!(point.risk == 1, point.probability >= 0.5, "{point:?}");
        assert!(point.risk <= 1);
    }
}

#[test]
fn grid_contains_both_classes() {
    let at_risk = generate_boundary_grid().filter(|p| p.risk == 1).count();
    assert!(at_risk > 0);
    assert!(at_risk < 169);
}

#[test]
fn cloned_grid_restarts_identically() {
    let grid = generate_boundary_grid();
    let first: Vec<_> = grid.clone().collect();
    let second: Vec<_> = grid.collect();
    assert_eq!(first, second);
}

#[test]
fn size_hint_shrinks_as_grid_is_consumed() {
    let mut grid = generate_boundary_grid();
    grid.nth(99);
    assert_eq!(grid.len(), 69);
    assert_eq!(grid.by_ref().count(), 69);
    assert_eq!(grid.next(), None);
}

#[test]
fn reference_cohort_matches_plot() {
    let points = reference_points();
    assert_eq!(points.len(), 9);
    assert_eq!(points.iter().filter(|p| p.cohort == Cohort::Healthy).count(), 4);

    let [healthy, risk] = reference_regions();
    assert!(healthy.contains(110.0, 80.0));
    assert!(risk.contains(165.0, 180.0));
    assert!(!healthy.contains(165.0, 180.0));
}
