//! RowGram CLI - Bridge interface for the web app
//!
//! Commands: templates, presets, render, generate
//! Outputs JSON to stdout
//! Returns 2 on rejected input, 1 on any other failure

use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use rowgram_core::{
    presets::Preset, registry, Background, BoatStyle, CanvasDimensions, ClubIconData,
    ColorScheme, Crew, ImageService, LogoPosition, NameDisplay, RowgramConfig, RowgramError,
    TemplateConfig, TemplateGenerator, TextLayout,
};

#[derive(Parser)]
#[command(name = "rowgram-cli")]
#[command(about = "RowGram CLI - Crew lineup image renderer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the JSON config file
    #[arg(short, long, default_value = "rowgram.json")]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// List the fixed templates
    Templates,

    /// List the image presets
    Presets,

    /// Render one crew with a fixed template or configurable options
    Render {
        #[command(flatten)]
        input: CrewInput,

        /// Fixed template id; omit to use the configurable options
        #[arg(short, long)]
        template: Option<String>,

        #[arg(long, value_parser = parse_kebab::<Background>)]
        background: Option<Background>,

        #[arg(long, value_parser = parse_kebab::<NameDisplay>)]
        name_display: Option<NameDisplay>,

        #[arg(long, value_parser = parse_kebab::<BoatStyle>)]
        boat_style: Option<BoatStyle>,

        #[arg(long, value_parser = parse_kebab::<TextLayout>)]
        text_layout: Option<TextLayout>,

        #[arg(long, value_parser = parse_kebab::<LogoPosition>)]
        logo: Option<LogoPosition>,

        #[arg(long)]
        width: Option<u32>,

        #[arg(long)]
        height: Option<u32>,

        /// Seed for decorative texture
        #[arg(long)]
        seed: Option<u64>,

        /// Output PNG path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Render with a preset through the image service and save it
    Generate {
        #[command(flatten)]
        input: CrewInput,

        /// Preset id; unknown ids use the default preset
        #[arg(short, long)]
        preset: Option<String>,

        /// Base name of the output file
        #[arg(short, long)]
        name: String,
    },
}

#[derive(Args)]
struct CrewInput {
    /// Crew JSON, or @path to read it from a file
    #[arg(long)]
    crew: String,

    #[arg(long)]
    primary: Option<String>,

    #[arg(long)]
    secondary: Option<String>,

    /// Club icon JSON, e.g. {"type":"preset","filename":"oars.png"}
    #[arg(long)]
    icon: Option<String>,
}

impl CrewInput {
    fn crew(&self) -> Result<Crew, RowgramError> {
        Crew::from_json(&read_arg(&self.crew)?)
    }

    fn icon(&self) -> Result<Option<ClubIconData>, RowgramError> {
        self.icon
            .as_deref()
            .map(|raw| {
                serde_json::from_str(&read_arg(raw)?)
                    .map_err(|e| RowgramError::InvalidInput(format!("club icon: {e}")))
            })
            .transpose()
    }

    fn colors(&self) -> Option<ColorScheme> {
        match (&self.primary, &self.secondary) {
            (None, None) => None,
            (primary, secondary) => {
                let fallback = ColorScheme::default();
                Some(ColorScheme::new(
                    primary.clone().unwrap_or(fallback.primary),
                    secondary.clone().unwrap_or(fallback.secondary),
                ))
            }
        }
    }
}

fn read_arg(value: &str) -> Result<String, RowgramError> {
    match value.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| RowgramError::InvalidInput(format!("{path}: {e}"))),
        None => Ok(value.to_string()),
    }
}

fn parse_kebab<T: DeserializeOwned>(s: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(s.to_string())).map_err(|e| e.to_string())
}

fn fail(e: &RowgramError) -> ExitCode {
    let output = json!({
        "success": false,
        "error": e.to_string(),
    });
    println!("{}", output);
    match e {
        RowgramError::InvalidInput(_) | RowgramError::UnknownTemplate(_) => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}

fn write_png(path: &Path, png: &[u8]) -> Result<(), RowgramError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| RowgramError::Persistence {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, png).map_err(|source| RowgramError::Persistence {
        path: path.to_path_buf(),
        source,
    })
}

fn run(cli: Cli) -> Result<serde_json::Value, RowgramError> {
    let config = RowgramConfig::load(&cli.config)?;

    match cli.command {
        Commands::Templates => Ok(serde_json::to_value(registry::list())?),

        Commands::Presets => {
            let presets: Vec<_> = Preset::ALL.iter().map(|p| p.info()).collect();
            Ok(serde_json::to_value(presets)?)
        }

        Commands::Render {
            input,
            template,
            background,
            name_display,
            boat_style,
            text_layout,
            logo,
            width,
            height,
            seed,
            output,
        } => {
            let crew = input.crew()?;
            let icon = input.icon()?;
            let defaults = config.default_dimensions;
            let dimensions = CanvasDimensions::new(
                width.unwrap_or(defaults.width),
                height.unwrap_or(defaults.height),
            );
            let base = TemplateConfig::new(dimensions, input.colors().unwrap_or_default());
            let template_config = TemplateConfig {
                template_id: template,
                background: background.unwrap_or(base.background),
                name_display: name_display.unwrap_or(base.name_display),
                boat_style: boat_style.unwrap_or(base.boat_style),
                text_layout: text_layout.unwrap_or(base.text_layout),
                logo: logo.unwrap_or(base.logo),
                seed,
                ..base
            };

            let generator = TemplateGenerator::with_config(&config)?;
            let rendering = generator.render(&crew, &template_config, icon.as_ref())?;
            let png = rendering.encode_png()?;
            write_png(&output, &png)?;

            Ok(json!({
                "success": true,
                "path": output,
                "render": rendering.summary(&png),
            }))
        }

        Commands::Generate { input, preset, name } => {
            let crew = input.crew()?;
            let icon = input.icon()?;
            let service = ImageService::new(&config)?;
            let image = service.save_crew_image(
                &crew,
                &name,
                preset.as_deref(),
                input.colors(),
                icon.as_ref(),
            )?;
            Ok(json!({
                "success": true,
                "preset": image.preset,
                "path": image.path,
                "pngSha256": rowgram_core::sha256_hex(&image.png),
                "pngBytes": image.png.len(),
            }))
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    match run(Cli::parse()) {
        Ok(output) => match serde_json::to_string_pretty(&output) {
            Ok(text) => {
                println!("{}", text);
                ExitCode::SUCCESS
            }
            Err(e) => fail(&e.into()),
        },
        Err(e) => fail(&e),
    }
}
