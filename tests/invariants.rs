//! Contract Invariant Tests
//!
//! These tests verify the guarantees every render must keep.

use rowgram_core::{
    color::Color,
    registry,
    seats::seat_labels,
    Background, BoatStyle, BoatType, CanvasDimensions, ClubIconData, ColorScheme, Crew,
    LogoPosition, NameDisplay, Rendering, RowgramConfig, RowgramError, TemplateConfig,
    TemplateGenerator, TextLayout,
};

fn eight(cox: Option<&str>, coach: Option<&str>) -> Crew {
    Crew {
        name: "First VIII".to_string(),
        club_name: "Thames RC".to_string(),
        race_name: "Head Race".to_string(),
        boat_type: BoatType::new(8, "Eight", "8+"),
        crew_names: [
            "Alice Archer",
            "Beth Barnes",
            "Cara Cole",
            "Dana Dunn",
            "Erin Ellis",
            "Fay Ford",
            "Gina Grant",
            "Hana Hale",
        ]
        .iter()
        .map(|n| n.to_string())
        .collect(),
        cox_name: cox.map(str::to_string),
        coach_name: coach.map(str::to_string),
    }
}

fn config_for(id: &str, dims: CanvasDimensions) -> TemplateConfig {
    TemplateConfig::for_template(id, dims, ColorScheme::new("#2563eb", "#1e40af"))
}

fn generator() -> TemplateGenerator {
    TemplateGenerator::new().unwrap()
}

/// Runs naming `role`: either the bare label or an inline `label: name` row.
fn role_runs(rendering: &Rendering, role: &str) -> usize {
    let prefix = format!("{}:", role.to_ascii_lowercase());
    rendering
        .text_log
        .iter()
        .filter(|run| {
            run.text.eq_ignore_ascii_case(role)
                || run.text.to_ascii_lowercase().starts_with(&prefix)
        })
        .count()
}

fn shows_label(rendering: &Rendering, label: &str) -> bool {
    let prefix = format!("{}:", label.to_ascii_lowercase());
    rendering.text_log.iter().any(|run| {
        run.text.eq_ignore_ascii_case(label) || run.text.to_ascii_lowercase().starts_with(&prefix)
    })
}

#[test]
fn invariant_output_matches_requested_dimensions() {
    let gen = generator();
    let crew = eight(Some("Sarah"), Some("Coach Roberts"));
    for dims in [CanvasDimensions::SQUARE, CanvasDimensions::PORTRAIT] {
        for id in registry::ids() {
            let png = gen.generate_template(&crew, &config_for(id, dims), None).unwrap();
            let decoded = image::load_from_memory(&png).unwrap();
            assert_eq!(
                (decoded.width(), decoded.height()),
                (dims.width, dims.height),
                "template {id}"
            );
        }
    }
}

#[test]
fn invariant_render_is_deterministic() {
    let gen = generator();
    let crew = eight(Some("Sarah"), None);
    for id in registry::ids() {
        let config = config_for(id, CanvasDimensions::SQUARE);
        let a = gen.generate_template(&crew, &config, None).unwrap();
        let b = gen.generate_template(&crew, &config, None).unwrap();
        assert_eq!(a, b, "template {id} is not reproducible");
    }
}

#[test]
fn invariant_seed_changes_texture_only() {
    let gen = generator();
    let crew = eight(None, None);
    let mut config = config_for("vintage", CanvasDimensions::SQUARE);
    config.seed = Some(1);
    let first = gen.render(&crew, &config, None).unwrap();
    config.seed = Some(2);
    let second = gen.render(&crew, &config, None).unwrap();

    assert_ne!(first.image, second.image);
    assert_eq!(first.text_log, second.text_log);
}

#[test]
fn invariant_entropy_generator_still_renders() {
    let gen = generator().with_entropy();
    let crew = eight(None, None);
    let config = config_for("pulse", CanvasDimensions::SQUARE);
    let rendering = gen.render(&crew, &config, None).unwrap();
    assert_eq!(rendering.image.dimensions(), (1080, 1080));
}

#[test]
fn invariant_eight_seat_labels_all_appear() {
    let gen = generator();
    let crew = eight(None, None);
    for id in registry::ids() {
        let template = registry::get(id).unwrap();
        let config = config_for(id, CanvasDimensions::SQUARE);
        let rendering = gen.render(&crew, &config, None).unwrap();
        for label in seat_labels(template.seat_style(), 8, 8) {
            assert!(
                shows_label(&rendering, &label),
                "template {id} is missing seat label {label}"
            );
        }
        for name in &crew.crew_names {
            assert!(
                rendering.text_log.iter().any(|run| run.text.contains(name.as_str())),
                "template {id} is missing rower {name}"
            );
        }
    }
}

#[test]
fn invariant_cox_and_coach_only_when_present() {
    let gen = generator();
    let cases = [
        (None, None, 0, 0),
        (Some("Sarah"), None, 1, 0),
        (None, Some("Coach Roberts"), 0, 1),
        (Some("Sarah"), Some("Coach Roberts"), 1, 1),
        (Some("   "), Some(""), 0, 0),
    ];
    for id in registry::ids() {
        for (cox, coach, want_cox, want_coach) in cases {
            let rendering = gen
                .render(&eight(cox, coach), &config_for(id, CanvasDimensions::SQUARE), None)
                .unwrap();
            assert_eq!(role_runs(&rendering, "cox"), want_cox, "template {id}, cox {cox:?}");
            assert_eq!(
                role_runs(&rendering, "coach"),
                want_coach,
                "template {id}, coach {coach:?}"
            );
        }
    }
}

#[test]
fn invariant_cox_row_follows_seats_and_precedes_coach() {
    let gen = generator();
    let crew = eight(Some("Sarah"), Some("Coach Roberts"));
    for id in registry::ids() {
        let rendering = gen.render(&crew, &config_for(id, CanvasDimensions::SQUARE), None).unwrap();
        let position = |needle: &str| {
            rendering
                .text_log
                .iter()
                .position(|run| run.text.contains(needle))
                .unwrap_or_else(|| panic!("template {id} never drew {needle}"))
        };
        let stroke = position("Hana Hale");
        let cox = position("Sarah");
        let coach = position("Coach Roberts");
        assert!(stroke < cox && cox < coach, "template {id} draws roles out of order");
    }
}

#[test]
fn invariant_unknown_template_is_an_error() {
    let gen = generator();
    let result = gen.generate_template(
        &eight(None, None),
        &config_for("holographic", CanvasDimensions::SQUARE),
        None,
    );
    assert!(matches!(result, Err(RowgramError::UnknownTemplate(id)) if id == "holographic"));
}

#[test]
fn invariant_invalid_crew_rejected_before_drawing() {
    let gen = generator();
    let mut crew = eight(None, None);
    crew.crew_names.clear();
    let result = gen.render(&crew, &config_for("classic", CanvasDimensions::SQUARE), None);
    assert!(matches!(result, Err(RowgramError::InvalidInput(_))));

    let parsed =
        Crew::from_json(r#"{"name": "x", "boatType": {"seats": 8}, "crewNames": {"a": 1}}"#);
    assert!(matches!(parsed, Err(RowgramError::InvalidInput(_))));
}

#[test]
fn invariant_missing_icon_does_not_fail_render() {
    let dir = tempfile::tempdir().unwrap();
    let config = RowgramConfig {
        presets_dir: dir.path().to_path_buf(),
        uploads_dir: dir.path().to_path_buf(),
        ..RowgramConfig::default()
    };
    let gen = TemplateGenerator::with_config(&config).unwrap();
    let crew = eight(None, None);
    let icons = [
        ClubIconData::Preset { filename: "does-not-exist.png".into() },
        ClubIconData::Upload { file_path: dir.path().join("gone.png") },
        ClubIconData::Inline { base64: "!!not base64!!".into() },
    ];
    for icon in &icons {
        for id in registry::ids() {
            let rendering = gen
                .render(&crew, &config_for(id, CanvasDimensions::SQUARE), Some(icon))
                .unwrap();
            assert!(!rendering.icon_applied);
            assert_eq!(rendering.image.dimensions(), (1080, 1080));
        }
    }
}

#[test]
fn invariant_resolvable_icon_is_composited() {
    let dir = tempfile::tempdir().unwrap();
    let icon = image::RgbaImage::from_pixel(64, 64, image::Rgba([255, 0, 255, 255]));
    icon.save(dir.path().join("crest.png")).unwrap();
    let config = RowgramConfig {
        presets_dir: dir.path().to_path_buf(),
        ..RowgramConfig::default()
    };
    let gen = TemplateGenerator::with_config(&config).unwrap();
    let crew = eight(None, None);
    let data = ClubIconData::Preset { filename: "crest.png".into() };

    let mut custom = TemplateConfig::new(CanvasDimensions::SQUARE, ColorScheme::default());
    custom.logo = LogoPosition::BottomLeft;
    let with = gen.render(&crew, &custom, Some(&data)).unwrap();
    let without = gen.render(&crew, &custom, None).unwrap();
    assert!(with.icon_applied);
    assert_ne!(with.image, without.image);

    // Default margin and size put the icon centre well inside this corner.
    let [r, g, b, _] = with.image.get_pixel(80, 1080 - 80).0;
    assert!(r > 240 && g < 16 && b > 240, "corner is {r},{g},{b}");

    custom.logo = LogoPosition::None;
    let hidden = gen.render(&crew, &custom, Some(&data)).unwrap();
    let plain = gen.render(&crew, &custom, None).unwrap();
    assert_eq!(hidden.image, plain.image);
}

fn magenta_icon_generator(dir: &std::path::Path) -> TemplateGenerator {
    let icon = image::RgbaImage::from_pixel(64, 64, image::Rgba([255, 0, 255, 255]));
    icon.save(dir.join("crest.png")).unwrap();
    let config = RowgramConfig {
        presets_dir: dir.to_path_buf(),
        ..RowgramConfig::default()
    };
    TemplateGenerator::with_config(&config).unwrap()
}

#[test]
fn invariant_icon_lands_in_its_corner() {
    let dir = tempfile::tempdir().unwrap();
    let gen = magenta_icon_generator(dir.path());
    let crew = eight(None, None);
    let data = ClubIconData::Preset { filename: "crest.png".into() };

    let custom = |logo| TemplateConfig {
        logo,
        ..TemplateConfig::new(CanvasDimensions::SQUARE, ColorScheme::default())
    };
    // Centre of the icon box: size 110 with a 36px margin for the custom
    // template, 120/36 for classic and 110/60 for heritage.
    let cases = [
        ("custom top right", custom(LogoPosition::TopRight), (989, 91)),
        ("custom bottom right", custom(LogoPosition::BottomRight), (989, 989)),
        ("custom bottom left", custom(LogoPosition::BottomLeft), (91, 989)),
        ("classic", config_for("classic", CanvasDimensions::SQUARE), (984, 96)),
        ("heritage", config_for("heritage", CanvasDimensions::SQUARE), (115, 965)),
    ];
    for (name, config, (x, y)) in cases {
        let rendering = gen.render(&crew, &config, Some(&data)).unwrap();
        assert!(rendering.icon_applied, "{name}");
        let [r, g, b, _] = rendering.image.get_pixel(x, y).0;
        assert!(r > 240 && g < 16 && b > 240, "{name}: ({x}, {y}) is {r},{g},{b}");
    }
}

/// Background next to a text run: the median-luminance pixel of short
/// vertical strips just left and right of its box.
fn background_beside(rendering: &Rendering, run: &rowgram_core::TextRun) -> Color {
    let (w, h) = rendering.image.dimensions();
    let b = run.bounds;
    let cy = b.y + b.h / 2.0;
    let mut samples: Vec<Color> = [b.x - 6.0, b.x + b.w + 6.0]
        .into_iter()
        .flat_map(|x| (-4..=4).map(move |dy| (x, cy + dy as f32)))
        .map(|(x, y)| {
            let x = (x.round().max(0.0) as u32).min(w - 1);
            let y = (y.round().max(0.0) as u32).min(h - 1);
            let [r, g, b, _] = rendering.image.get_pixel(x, y).0;
            Color::rgb(r, g, b)
        })
        .collect();
    samples.sort_by(|a, b| a.luminance().total_cmp(&b.luminance()));
    samples[samples.len() / 2]
}

fn over(fg: Color, bg: Color) -> Color {
    let a = fg.a as f32 / 255.0;
    let blend = |f: u8, b: u8| (f as f32 * a + b as f32 * (1.0 - a)).round() as u8;
    Color::rgb(blend(fg.r, bg.r), blend(fg.g, bg.g), blend(fg.b, bg.b))
}

fn assert_header_legible(rendering: &Rendering, case: &str) {
    let header: Vec<_> = rendering
        .text_log
        .iter()
        .filter(|run| run.text == "First VIII" || run.text.eq_ignore_ascii_case("Thames RC"))
        .collect();
    assert_eq!(header.len(), 2, "{case}: crew and club names should each be drawn once");

    for run in header {
        let bg = background_beside(rendering, run);
        let ink = over(run.color, bg);
        let ratio = ink.contrast_ratio(bg);
        assert!(
            ratio >= 3.0,
            "{case}: {:?} in {ink:?} on {bg:?} has contrast {ratio:.2}",
            run.text
        );

        let b = run.bounds;
        let painted = (b.x.max(0.0) as u32..(b.x + b.w) as u32)
            .flat_map(|x| (b.y.max(0.0) as u32..(b.y + b.h) as u32).map(move |y| (x, y)))
            .filter(|&(x, y)| x < rendering.image.width() && y < rendering.image.height())
            .any(|(x, y)| {
                let p = rendering.image.get_pixel(x, y).0;
                [p[0].abs_diff(bg.r), p[1].abs_diff(bg.g), p[2].abs_diff(bg.b)]
                    .into_iter()
                    .any(|d| d > 80)
            });
        assert!(painted, "{case}: {:?} left no visible glyphs", run.text);
    }
}

#[test]
fn invariant_header_text_contrasts_with_background() {
    let gen = generator();
    let crew = eight(None, None);
    let schemes = [
        ("light", ColorScheme::new("#ffffff", "#f3f4f6")),
        ("dark", ColorScheme::new("#111827", "#1f2937")),
        ("yellow", ColorScheme::new("#facc15", "#fde047")),
    ];
    for (scheme_name, scheme) in &schemes {
        for id in registry::ids() {
            let mut config =
                TemplateConfig::for_template(id, CanvasDimensions::SQUARE, scheme.clone());
            config.seed = Some(7);
            let rendering = gen.render(&crew, &config, None).unwrap();
            assert_header_legible(&rendering, &format!("{id} on {scheme_name}"));
        }
        for background in Background::ALL {
            let config = TemplateConfig {
                background,
                seed: Some(7),
                ..TemplateConfig::new(CanvasDimensions::SQUARE, scheme.clone())
            };
            let rendering = gen.render(&crew, &config, None).unwrap();
            assert_header_legible(&rendering, &format!("custom {background:?} on {scheme_name}"));
        }
    }
}

#[test]
fn invariant_single_seat_uses_numeric_label() {
    let gen = generator();
    let crew = Crew {
        name: "Sculler".to_string(),
        club_name: "Thames RC".to_string(),
        race_name: "Sculls Head".to_string(),
        boat_type: BoatType::new(1, "Single", "1x"),
        crew_names: vec!["Solo Rower".to_string()],
        cox_name: None,
        coach_name: None,
    };
    for id in registry::ids() {
        let rendering = gen.render(&crew, &config_for(id, CanvasDimensions::SQUARE), None).unwrap();
        assert!(shows_label(&rendering, "1"), "template {id}");
        assert!(!shows_label(&rendering, "Bow"), "template {id}");
    }
}

#[test]
fn invariant_seat_mismatch_falls_back_to_numbers() {
    let gen = generator();
    let mut crew = eight(None, None);
    crew.boat_type = BoatType::new(4, "Four", "4-");
    let config = config_for("classic", CanvasDimensions::SQUARE);
    let rendering = gen.render(&crew, &config, None).unwrap();
    for label in ["Bow", "2", "3", "Stroke", "5", "6", "7", "8"] {
        assert!(shows_label(&rendering, label), "missing {label}");
    }
    assert!(rendering.validation.warnings().any(|w| w.rule == "seat_count"));
}

#[test]
fn invariant_every_configurable_combination_renders() {
    let gen = generator();
    let crew = eight(Some("Sarah"), Some("Coach Roberts"));
    let dims = CanvasDimensions::new(320, 400);
    for background in Background::ALL {
        for name_display in NameDisplay::ALL {
            for boat_style in BoatStyle::ALL {
                for text_layout in TextLayout::ALL {
                    for logo in LogoPosition::ALL {
                        let config = TemplateConfig {
                            background,
                            name_display,
                            boat_style,
                            text_layout,
                            logo,
                            ..TemplateConfig::new(dims, ColorScheme::default())
                        };
                        let rendering = gen.render(&crew, &config, None).unwrap();
                        assert_eq!(rendering.template_id, "custom");
                        assert_eq!(rendering.image.dimensions(), (320, 400));
                        assert_eq!(role_runs(&rendering, "cox"), 1);
                        assert_eq!(role_runs(&rendering, "coach"), 1);
                    }
                }
            }
        }
    }
}

#[test]
fn invariant_fixed_templates_ignore_configurable_fields() {
    let gen = generator();
    let crew = eight(None, None);
    let plain = config_for("heritage", CanvasDimensions::SQUARE);
    let decorated = TemplateConfig {
        background: Background::Texture,
        name_display: NameDisplay::Banners,
        boat_style: BoatStyle::Oars,
        text_layout: TextLayout::Grid,
        logo: LogoPosition::None,
        ..plain.clone()
    };
    let a = gen.render(&crew, &plain, None).unwrap();
    let b = gen.render(&crew, &decorated, None).unwrap();
    assert_eq!(a.template_id, "heritage");
    assert_eq!(a.text_log, b.text_log);
}

#[test]
fn invariant_inputs_are_not_mutated() {
    let gen = generator();
    let crew = eight(Some("Sarah"), None);
    let config = config_for("regatta", CanvasDimensions::SQUARE);
    let (crew_before, config_before) = (crew.clone(), config.clone());
    gen.generate_template(&crew, &config, None).unwrap();
    assert_eq!(crew, crew_before);
    assert_eq!(config, config_before);
}

#[test]
fn invariant_job_hash_is_key_order_independent() {
    let a: Crew = serde_json::from_str(
        r#"{"name":"A","clubName":"C","boatType":{"seats":2,"name":"Pair"},"crewNames":["x","y"]}"#,
    )
    .unwrap();
    let b: Crew = serde_json::from_str(
        r#"{"crewNames":["x","y"],"boatType":{"name":"Pair","seats":2},"clubName":"C","name":"A"}"#,
    )
    .unwrap();
    let config = config_for("minimal", CanvasDimensions::SQUARE);
    let gen = generator();
    let ra = gen.render(&a, &config, None).unwrap();
    let rb = gen.render(&b, &config, None).unwrap();
    assert_eq!(ra.job_hash, rb.job_hash);
    assert_eq!(ra.seed, rb.seed);
}
