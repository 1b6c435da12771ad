//! Config loading tests

use miniturbo_config::{ConfigError, MiniturboConfig};
use miniturbo_core::{GenerationDefaults, ImageOptions, OmniModalMiniturbo, VideoOptions};

use crate::common::write_config;

#[test]
fn config_file_defaults_reach_the_engine() {
    let (_dir, path) = write_config(
        r"
[generation]
image_resolution = 768
video_fps = 25
",
    );

    let config = MiniturboConfig::load_from(&path)
        .expect("config should load")
        .expect("config file exists");
    let engine = OmniModalMiniturbo::with_defaults(config.generation_defaults());

    assert_eq!(engine.default_image_options(), ImageOptions::new(768));
    assert_eq!(engine.default_video_options(), VideoOptions::new(25));
}

#[test]
fn config_without_generation_section_uses_builtin_defaults() {
    let (_dir, path) = write_config("# nothing configured\n");

    let config = MiniturboConfig::load_from(&path).unwrap().unwrap();
    assert_eq!(config.generation_defaults(), GenerationDefaults::default());
}

#[test]
fn negative_values_are_kept_verbatim() {
    let (_dir, path) = write_config("[generation]\nimage_resolution = -1\nvideo_fps = 0\n");

    let defaults = MiniturboConfig::load_from(&path)
        .unwrap()
        .unwrap()
        .generation_defaults();
    assert_eq!(defaults.image.resolution, -1);
    assert_eq!(defaults.video.fps, 0);
}

#[test]
fn malformed_config_is_a_parse_error_with_path() {
    let (_dir, path) = write_config("[generation]\nimage_resolution = = 3\n");

    let err = MiniturboConfig::load_from(&path).unwrap_err();
    match &err {
        ConfigError::Parse { path: err_path, .. } => assert_eq!(err_path, &path),
        ConfigError::Read { .. } => panic!("expected parse error, got {err:?}"),
    }
    assert!(err.to_string().contains("config.toml"));
}
