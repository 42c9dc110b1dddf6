mod config;
mod error;
mod writer;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use gibbs_core::{parse_energy_text, prepare_profiles, EnergySeries, ParseOptions, PreparedProfiles};
use gibbs_guides::diagram::make_diagram;
use gibbs_guides::style::StylePalette;
use gibbs_scenegraph::renderer::SceneRenderer;
use log::info;

use crate::config::GibbsConfig;
use crate::error::GibbsCliError;
use crate::writer::{open_output, write_json, JsonSceneWriter};

/// Free energy diagrams from `label,energy` files
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the diagram scene graph and write it as JSON
    Render {
        #[command(flatten)]
        input: InputArgs,

        /// Title of the energy axis
        #[arg(long)]
        y_title: Option<String>,

        /// Legend label per input file, in order (defaults to the file stem)
        #[arg(long = "legend")]
        legend: Vec<String>,

        /// CSS colors used for the series, in order
        #[arg(long = "color")]
        colors: Vec<String>,
    },

    /// Write the computed plateaus, connectors, label anchors and axis ranges as JSON
    Layout {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Energy files, one mechanism each
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output path (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Treat the first line as data rather than a header
    #[arg(long)]
    no_header: bool,

    /// Field separator between label and energy
    #[arg(long)]
    delimiter: Option<char>,

    /// Factor applied to the vertical range to leave room for labels
    #[arg(long)]
    y_scaling: Option<f64>,

    #[arg(long)]
    plateau_width: Option<f64>,

    #[arg(long)]
    connector_width: Option<f64>,

    /// Label offset as a fraction of the energy span
    #[arg(long)]
    label_offset: Option<f64>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,
}

impl InputArgs {
    /// Loads the config file, if any, and applies command line overrides on top
    fn resolve_config(&self) -> Result<GibbsConfig, GibbsCliError> {
        let mut config = match &self.config {
            Some(path) => GibbsConfig::from_json_file(path)?,
            None => GibbsConfig::default(),
        };

        if self.no_header {
            config.parse.skip_header = false;
        }
        if let Some(delimiter) = self.delimiter {
            config.parse.delimiter = delimiter;
        }
        let diagram = &mut config.diagram;
        if let Some(y_scaling) = self.y_scaling {
            diagram.y_scaling = y_scaling;
        }
        if let Some(plateau_width) = self.plateau_width {
            diagram.layout.plateau_width = plateau_width;
        }
        if let Some(connector_width) = self.connector_width {
            diagram.layout.connector_width = connector_width;
        }
        if let Some(label_offset) = self.label_offset {
            diagram.layout.label_offset_fraction = label_offset;
        }
        Ok(config)
    }
}

fn load_series(path: &Path, options: &ParseOptions) -> Result<EnergySeries, GibbsCliError> {
    let content = fs::read_to_string(path).map_err(|source| GibbsCliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let series = parse_energy_text(&content, options).map_err(|source| GibbsCliError::InvalidInput {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded {} states from {}", series.len(), path.display());
    Ok(series)
}

fn prepare(input: &InputArgs, config: &GibbsConfig) -> Result<PreparedProfiles, GibbsCliError> {
    let raw = input
        .files
        .iter()
        .map(|path| load_series(path, &config.parse))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(prepare_profiles(
        &raw,
        &config.diagram.layout,
        config.diagram.y_scaling,
    )?)
}

fn legend_labels(files: &[PathBuf], explicit: &[String]) -> Vec<Option<String>> {
    files
        .iter()
        .enumerate()
        .map(|(i, path)| {
            explicit.get(i).cloned().or_else(|| {
                path.file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
        })
        .collect()
}

fn palette(colors: &[String], series_count: usize) -> Result<StylePalette, GibbsCliError> {
    if !colors.is_empty() {
        Ok(StylePalette::from_css(colors)?)
    } else if series_count == 1 {
        Ok(StylePalette::black())
    } else {
        Ok(StylePalette::category10())
    }
}

fn run(cli: Cli) -> Result<(), GibbsCliError> {
    match cli.command {
        Commands::Render {
            input,
            y_title,
            legend,
            colors,
        } => {
            let mut config = input.resolve_config()?;
            if let Some(y_title) = y_title {
                config.diagram.y_axis.title = y_title;
            }
            let prepared = prepare(&input, &config)?;

            let labels = legend_labels(&input.files, &legend);
            let styles = palette(&colors, prepared.len())?.styles(&labels);
            let scene = make_diagram(&prepared, &styles, &config.diagram)?;

            let mut renderer = JsonSceneWriter::new(open_output(input.output.as_deref())?, input.pretty);
            renderer.render(&scene)?;
            if let Some(output) = &input.output {
                info!("Saved scene graph to {}", output.display());
            }
            Ok(())
        }
        Commands::Layout { input } => {
            let config = input.resolve_config()?;
            let prepared = prepare(&input, &config)?;
            let mut out = open_output(input.output.as_deref())?;
            write_json(&mut out, &prepared, input.pretty)?;
            if let Some(output) = &input.output {
                info!("Saved layout to {}", output.display());
            }
            Ok(())
        }
    }
}

fn main() -> Result<(), GibbsCliError> {
    // Setup logger
    env_logger::init();

    let cli = Cli::parse();
    run(cli)
}
