//! Image service behaviour against a real output directory.

use rowgram_core::{
    image_service::sanitize_name, BoatType, CanvasDimensions, ColorScheme, Crew, ImageService,
    Preset, RowgramConfig, RowgramError, TemplateGenerator,
};
use std::fs;
use tempfile::TempDir;

fn thames_eight() -> Crew {
    Crew::from_json(
        r#"{
            "clubName": "Thames RC",
            "name": "First VIII",
            "boatType": {"seats": 8, "name": "Eight", "value": "8+"},
            "raceName": "Head Race",
            "crewNames": ["Amy", "Bella", "Chloe", "Daisy", "Eve", "Freya", "Grace", "Holly"],
            "coxName": "Sarah",
            "coachName": "Coach Roberts"
        }"#,
    )
    .unwrap()
}

fn service(dir: &TempDir) -> ImageService {
    let config = RowgramConfig {
        output_dir: dir.path().join("generated"),
        presets_dir: dir.path().join("icons"),
        uploads_dir: dir.path().join("uploads"),
        ..RowgramConfig::default()
    };
    ImageService::new(&config).unwrap()
}

#[test]
fn thames_classic_lineup_end_to_end() {
    let dir = TempDir::new().unwrap();
    let crew = thames_eight();
    let colors = ColorScheme::new("#2563eb", "#1e40af");

    let image = service(&dir)
        .generate_crew_image(
            &crew,
            "First VIII",
            Some("classic-lineup"),
            Some(colors.clone()),
            None,
        )
        .unwrap();
    assert_eq!(image.preset, Preset::ClassicLineup);

    let path = image.path.expect("image should be saved");
    assert_eq!(path, dir.path().join("generated").join("First_VIII.png"));
    assert_eq!(fs::read(&path).unwrap(), image.png);
    let decoded = image::load_from_memory(&image.png).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (1080, 1080));

    // Same render through the generator, to inspect the text drawn.
    let generator = TemplateGenerator::new().unwrap();
    let config = Preset::ClassicLineup.config(CanvasDimensions::SQUARE, Some(colors));
    let rendering = generator.render(&crew, &config, None).unwrap();
    assert_eq!(rendering.encode_png().unwrap(), image.png);
    let rows = [
        "Bow: Amy",
        "2: Bella",
        "7: Grace",
        "Stroke: Holly",
        "Cox: Sarah",
        "Coach: Coach Roberts",
    ];
    for row in rows {
        assert_eq!(rendering.text_count(row), 1, "missing {row}");
    }
}

#[test]
fn repeated_names_get_numbered_files() {
    let dir = TempDir::new().unwrap();
    let svc = service(&dir);
    let crew = thames_eight();
    let names: Vec<_> = (0..3)
        .map(|_| {
            svc.generate_crew_image(&crew, "lineup", None, None, None)
                .unwrap()
                .path
                .unwrap()
        })
        .collect();
    let files: Vec<_> = names
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(files, ["lineup.png", "lineup_1.png", "lineup_2.png"]);
}

#[test]
fn unknown_preset_falls_back_to_default() {
    let dir = TempDir::new().unwrap();
    let svc = service(&dir);
    let crew = thames_eight();
    let fallback = svc
        .generate_crew_image(&crew, "a", Some("neon-dreams"), None, None)
        .unwrap();
    let default = svc
        .generate_crew_image(&crew, "b", Some("classic-lineup"), None, None)
        .unwrap();
    assert_eq!(fallback.preset, Preset::ClassicLineup);
    assert_eq!(fallback.png, default.png);
}

#[test]
fn every_preset_renders() {
    let dir = TempDir::new().unwrap();
    let svc = service(&dir);
    let crew = thames_eight();
    for preset in Preset::ALL {
        let image = svc
            .generate_crew_image(&crew, preset.id(), Some(preset.id()), None, None)
            .unwrap();
        assert_eq!(image.preset, preset);
        assert!(image.path.unwrap().ends_with(format!("{}.png", sanitize_name(preset.id()))));
    }
}

#[test]
fn write_failure_still_returns_png() {
    let dir = TempDir::new().unwrap();
    let blocked = dir.path().join("blocked");
    fs::write(&blocked, b"a file, not a directory").unwrap();
    let svc = ImageService::with_generator(
        TemplateGenerator::new().unwrap(),
        &blocked,
        CanvasDimensions::PORTRAIT,
    );
    let crew = thames_eight();

    let image = svc.generate_crew_image(&crew, "lineup", None, None, None).unwrap();
    assert!(image.path.is_none());
    let decoded = image::load_from_memory(&image.png).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (1080, 1350));

    let strict = svc.save_crew_image(&crew, "lineup", None, None, None);
    assert!(matches!(strict, Err(RowgramError::Persistence { .. })));
}

#[test]
fn invalid_crew_is_not_written() {
    let dir = TempDir::new().unwrap();
    let svc = service(&dir);
    let mut crew = thames_eight();
    crew.crew_names.clear();
    let result = svc.generate_crew_image(&crew, "empty", None, None, None);
    assert!(matches!(result, Err(RowgramError::InvalidInput(_))));
    assert!(!svc.output_dir().join("empty.png").exists());
}
