use pixelgrid_engine::domain::strategy::ColorStrategy;
use pixelgrid_engine::{PixelGridCore, Rainbow, WidgetOptions};

#[test]
fn default_widget_smoke_has_expected_shape() {
    let core = PixelGridCore::new(Box::new(Rainbow::default()));

    assert_eq!(core.width(), 100);
    assert_eq!(core.height(), 100);
    assert_eq!(core.grid().size(), 100 * 100);
    assert_eq!(core.viewport().scale, 1.0);

    // Freshly built: every cell untoggled, painted with the disabled branch.
    assert!(core.grid().toggled.iter().all(|&t| t == 0));
    let strategy = Rainbow::default();
    assert_eq!(
        core.grid().get_color(0, 0),
        strategy.color(0, 0, false).packed_abgr()
    );
}

#[test]
fn options_json_drives_construction_end_to_end() {
    let options = WidgetOptions::from_json(
        r#"{
            "strategy": "rainbow",
            "width": 50,
            "height": 25,
            "min_scale": 1.0,
            "max_scale": 4.0,
            "tap_slop": 12.0
        }"#,
    )
    .expect("options should parse");

    let mut core = PixelGridCore::with_options(&options).expect("widget should build");
    assert_eq!(core.width(), 50);
    assert_eq!(core.height(), 25);

    // The tighter max_scale is honored by pinches.
    core.set_bounds(100.0, 50.0);
    core.pointer_down(1, 40.0, 25.0);
    core.pointer_down(2, 60.0, 25.0);
    core.pointer_move(2, 260.0, 25.0);
    assert!(core.viewport().scale <= 4.0 + 1e-3);
}

#[test]
fn unknown_strategy_fails_construction() {
    let options = WidgetOptions::from_json(r#"{"strategy": "checkerboard"}"#).unwrap();
    assert!(PixelGridCore::with_options(&options).is_err());
}

#[test]
fn full_gesture_script_mixing_all_three_gestures() {
    let mut core = PixelGridCore::new(Box::new(Rainbow::default()));
    core.set_bounds(200.0, 200.0);
    let colors_at_rest = core.grid().colors.clone();

    // Tap toggles a cell.
    core.pointer_down(1, 50.0, 50.0);
    core.pointer_up(1, 50.0, 50.0);
    assert!(core.is_toggled(25, 25));

    // Pan moves the viewport, not cells.
    core.pointer_down(2, 100.0, 100.0);
    core.pointer_move(2, 130.0, 100.0);
    core.pointer_move(2, 170.0, 120.0);
    core.pointer_up(2, 170.0, 120.0);
    assert_ne!(core.viewport().tx, 0.0);
    assert!(core.is_toggled(25, 25));

    // Pinch zooms in; the toggled cell's color is still the tapped one.
    core.pointer_down(3, 90.0, 100.0);
    core.pointer_down(4, 110.0, 100.0);
    core.pointer_move(4, 150.0, 100.0);
    core.pointer_up(4, 150.0, 100.0);
    core.pointer_up(3, 90.0, 100.0);
    assert!(core.viewport().scale > 1.0);

    // Exactly one cell differs from the at-rest colors: the tapped one.
    let diffs: Vec<usize> = colors_at_rest
        .iter()
        .zip(core.grid().colors.iter())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(diffs, vec![core.grid().index(25, 25)]);
}
