//! Loading surface settings from disk and handing them to a controller

use ring_charts_config::{ConfigError, ConfigParser, ConfigSerializer, RingChartConfig};
use ring_charts_renderer::SurfaceController;
use ring_charts_shared::{PointerEvent, RawEntry};
use std::fs;

#[test]
fn test_file_drives_controller() {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chart.yaml");
    fs::write(&path, "surface:\n  strokeWidth: 100.0\n  touchSlop: 2.0\n").unwrap();

    let config = ConfigParser::parse_file(&path).unwrap();
    let mut controller = SurfaceController::with_options(config.surface_options()).unwrap();
    controller.set_data(&[RawEntry::new(5.0, "Books")]).unwrap();
    controller.on_resize(400, 400);

    // 110 from center: inside a 100-wide band
    let tap = ring_charts_shared::Point::new(200.0, 90.0);
    assert_eq!(controller.category_at(tap).map(|c| c.name), Some("Books".to_string()));

    // 3 units of travel exceed the configured slop
    controller.on_pointer_event(PointerEvent::Down { position: tap });
    let moved = ring_charts_shared::Point::new(203.0, 90.0);
    assert_eq!(controller.on_pointer_event(PointerEvent::Up { position: moved }), None);
}

#[test]
fn test_serialize_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = RingChartConfig::default();
    config.surface.stroke_width = 64.0;

    for name in ["out.json", "out.toml", "out.yml"] {
        let path = dir.path().join(name);
        ConfigSerializer::serialize_file(&config, &path).unwrap();
        assert_eq!(ConfigParser::parse_file(&path).unwrap(), config);
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ConfigParser::parse_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
