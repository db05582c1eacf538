use stack_chart::core::{LinearScale, PlotArea, Viewport};
use stack_chart::error::ChartError;

#[test]
fn scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(10.0, 110.0).expect("valid scale");

    let original = 42.5;
    let px = scale.domain_to_pixel(original, 50.0, 950.0).expect("to pixel");
    let recovered = scale.pixel_to_domain(px, 50.0, 950.0).expect("from pixel");

    let epsilon = 1e-9;
    assert!((recovered - original).abs() <= epsilon);
}

#[test]
fn descending_pixel_span_inverts_value_axis() {
    let scale = LinearScale::new(0.0, 24.0).expect("valid scale");

    let top = scale.domain_to_pixel(24.0, 560.0, 10.0).expect("top pixel");
    let bottom = scale.domain_to_pixel(0.0, 560.0, 10.0).expect("bottom pixel");
    assert_eq!(top, 10.0);
    assert_eq!(bottom, 560.0);

    let noon = scale.pixel_to_domain(285.0, 560.0, 10.0).expect("noon");
    assert!((noon - 12.0).abs() <= 1e-9);
}

#[test]
fn degenerate_inputs_are_rejected() {
    assert!(matches!(
        LinearScale::new(1.0, 1.0),
        Err(ChartError::InvalidData(_))
    ));
    assert!(LinearScale::new(f64::NEG_INFINITY, 1.0).is_err());

    let scale = LinearScale::new(0.0, 1.0).expect("valid scale");
    assert!(scale.domain_to_pixel(0.5, 100.0, 100.0).is_err());
    assert!(scale.domain_to_pixel(f64::NAN, 0.0, 100.0).is_err());
    assert!(scale.pixel_to_domain(f64::INFINITY, 0.0, 100.0).is_err());
}

#[test]
fn domain_reports_construction_bounds() {
    let scale = LinearScale::new(-0.5, 3.5).expect("valid scale");
    assert_eq!(scale.domain(), (-0.5, 3.5));
}

#[test]
fn full_plot_area_matches_viewport() {
    let viewport = Viewport::new(1000, 600);
    let area = viewport.full_plot_area();
    assert_eq!(area, PlotArea::new(0.0, 0.0, 1000.0, 600.0));
    assert!(area.is_valid());
    assert!(area.fits_within(viewport));
    assert_eq!(area.width(), 1000.0);
    assert_eq!(area.height(), 600.0);
}

#[test]
fn plot_area_containment_is_inclusive() {
    let area = PlotArea::new(50.0, 10.0, 950.0, 560.0);
    assert!(area.contains(50.0, 10.0));
    assert!(area.contains(950.0, 560.0));
    assert!(!area.contains(49.9, 200.0));
    assert!(!area.contains(400.0, 560.1));
    assert!(!area.fits_within(Viewport::new(900, 600)));
    assert!(!PlotArea::new(10.0, 10.0, 10.0, 20.0).is_valid());
}
