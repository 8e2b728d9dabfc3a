use image::RgbImage;
use wloutput_core::background::CompositeRequest;
use wloutput_core::command::DisplayEnvironment;
use wloutput_core::scale::ScalePolicy;
use wloutput_core::setup::{SavedSetup, load_setup, save_setup};
use wloutput_core::{
    Canvas, Geometry, Mode, Monitor, PhysicalSize, Rect, Scale, ScaleFilter, plan_layout, run,
};

fn desk() -> Vec<Monitor> {
    vec![
        Monitor::new(
            "DP-1",
            vec![
                Mode::new(1920, 1080, 60000),
                Mode::new(3840, 2160, 30000),
                Mode::new(3840, 2160, 60000),
            ],
            PhysicalSize::new(60, 34),
        ),
        Monitor::new(
            "HDMI-A-1",
            vec![Mode::new(1920, 1080, 60000), Mode::new(1280, 720, 60000)],
            PhysicalSize::new(48, 27),
        ),
        Monitor::new(
            "eDP-1",
            vec![Mode::new(2560, 1600, 165000)],
            PhysicalSize::unknown(),
        ),
    ]
}

#[test]
fn single_monitor_with_unknown_size() {
    let monitors = vec![Monitor::new(
        "eDP-1",
        vec![Mode::new(1920, 1080, 60000)],
        PhysicalSize::unknown(),
    )];

    let arrangement = plan_layout(&monitors, &ScalePolicy::default()).unwrap();
    let screen = &arrangement.screens()[0];

    assert_eq!(screen.geometry, Geometry::unknown());
    assert_eq!(screen.scale, Scale::ONE);
    assert_eq!(screen.scale_filter, ScaleFilter::Nearest);
    assert_eq!(screen.position, Rect::new(0, 0, 1920, 1080));
    assert_eq!(arrangement.canvas(), Canvas::new(1920, 1080));
}

#[test]
fn mixed_desk_layout() {
    let arrangement = plan_layout(&desk(), &ScalePolicy::default()).unwrap();
    let screens = arrangement.screens();

    assert_eq!(screens[0].mode, Mode::new(3840, 2160, 60000));
    assert_eq!(screens[0].scale.to_string(), "1.5");
    assert_eq!(screens[0].scale_filter, ScaleFilter::Linear);
    assert_eq!(screens[1].scale, Scale::ONE);
    // Unknown density falls back to 1 without influencing the others
    assert_eq!(screens[2].scale, Scale::ONE);

    assert_eq!(screens[0].position, Rect::new(0, 80, 2560, 1440));
    assert_eq!(screens[1].position, Rect::new(2560, 260, 1920, 1080));
    assert_eq!(screens[2].position, Rect::new(4480, 0, 2560, 1600));
    assert_eq!(arrangement.canvas(), Canvas::new(7040, 1600));
}

#[test]
fn replanning_is_idempotent() {
    let first = plan_layout(&desk(), &ScalePolicy::default()).unwrap();
    let second = plan_layout(&desk(), &ScalePolicy::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn full_run_splits_background_across_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("wallpaper.png");
    RgbImage::from_fn(320, 90, |x, y| image::Rgb([(x % 256) as u8, y as u8, 64]))
        .save(&source)
        .unwrap();
    let output_dir = dir.path().join("segments");

    let options = wloutput_core::PipelineOptions::new(DisplayEnvironment::Sway)
        .with_background(CompositeRequest::new(&source, &output_dir));
    let output = run(&desk(), &options).unwrap();

    for (screen, command) in output.arrangement.screens().iter().zip(&output.commands) {
        let background = screen.background.as_ref().unwrap();
        assert!(background.starts_with(&output_dir));
        assert_eq!(
            image::image_dimensions(background).unwrap(),
            (screen.position.width, screen.position.height)
        );
        assert!(command.starts_with(&format!("output \"{}\"", screen.name)));
        assert!(command.ends_with(" fill"));
    }
}

#[test]
fn wlroots_run_skips_background() {
    let dir = tempfile::tempdir().unwrap();
    let options = wloutput_core::PipelineOptions::new(DisplayEnvironment::Wlroots)
        .with_background(CompositeRequest::new(
            dir.path().join("missing.png"),
            dir.path(),
        ));

    let output = run(&desk(), &options).unwrap();
    assert!(
        output
            .arrangement
            .screens()
            .iter()
            .all(|s| s.background.is_none())
    );
    assert!(output.commands[0].starts_with("wlr-randr --output DP-1"));
}

#[test]
fn saved_setup_overrides_by_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("setup.json");

    let planned = plan_layout(&desk(), &ScalePolicy::default()).unwrap();
    let mut edited = planned.screens()[1].clone();
    edited.scale = "1.25".parse().unwrap();
    edited.scale_filter = ScaleFilter::Linear;
    edited.position = Rect::new(2560, 0, 1536, 864);

    let mut saved = SavedSetup::default();
    saved.outputs.insert(edited.name.clone(), edited.clone());
    save_setup(&path, &saved).unwrap();

    let options = wloutput_core::PipelineOptions::new(DisplayEnvironment::Sway)
        .with_saved(load_setup(&path).unwrap());
    let output = run(&desk(), &options).unwrap();

    let screens = output.arrangement.screens();
    assert_eq!(screens[1], edited);
    assert_eq!(screens[0], planned.screens()[0]);
    assert!(output.commands[1].contains("scale 1.25 scale_filter linear"));
}
