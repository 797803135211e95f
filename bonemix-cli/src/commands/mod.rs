//! Command implementations and shared palette output

pub mod blend;
pub mod check;
pub mod eval;

use anyhow::{Context, Result};
use bonemix::{DEFAULT_MAX_HIERARCHY_DEPTH, ErrorReport, EvaluatorOptions, Mat4, ModelData};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per bone
    Text,
    /// Palette and reports as a JSON document
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MatrixLayout {
    /// All sixteen column-major entries
    #[value(name = "4x4")]
    Full,
    /// First three rows of each column, for 4x3 bone uniforms
    #[value(name = "4x3")]
    Affine,
}

/// Options shared by the evaluating subcommands
#[derive(Debug, Args)]
pub struct EvalOptions {
    /// Deepest parent chain followed before a bone is skipped
    #[arg(long, default_value_t = DEFAULT_MAX_HIERARCHY_DEPTH)]
    pub max_depth: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Matrix layout in the output
    #[arg(long, value_enum, default_value_t = MatrixLayout::Full)]
    pub layout: MatrixLayout,

    /// Write the palette to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl EvalOptions {
    pub fn evaluator_options(&self) -> EvaluatorOptions {
        EvaluatorOptions::default().with_max_hierarchy_depth(self.max_depth)
    }
}

#[derive(Serialize)]
struct PaletteDocument<'a> {
    bone_ids: &'a [u32],
    matrices: Vec<Vec<f32>>,
    reports: &'a [ErrorReport],
}

fn matrix_values(matrix: &Mat4, layout: MatrixLayout) -> Vec<f32> {
    match layout {
        MatrixLayout::Full => matrix.as_array().to_vec(),
        MatrixLayout::Affine => matrix.as_4x3().to_vec(),
    }
}

fn render_palette(
    model: &ModelData,
    palette: &[Mat4],
    reports: &[ErrorReport],
    options: &EvalOptions,
) -> Result<String> {
    match options.format {
        OutputFormat::Json => {
            let document = PaletteDocument {
                bone_ids: model.bone_ids(),
                matrices: palette
                    .iter()
                    .map(|m| matrix_values(m, options.layout))
                    .collect(),
                reports,
            };
            let mut text = serde_json::to_string_pretty(&document)?;
            text.push('\n');
            Ok(text)
        }
        OutputFormat::Text => {
            let mut text = String::new();
            for (&bone_id, matrix) in model.bone_ids().iter().zip(palette) {
                let values: Vec<String> = matrix_values(matrix, options.layout)
                    .iter()
                    .map(|v| format!("{v:.6}"))
                    .collect();
                writeln!(text, "bone {bone_id}: [{}]", values.join(", "))?;
            }
            Ok(text)
        }
    }
}

/// Print reports to stderr and the palette to stdout or `--output`
pub fn emit_palette(
    model: &ModelData,
    palette: &[Mat4],
    reports: &[ErrorReport],
    options: &EvalOptions,
) -> Result<()> {
    for report in reports {
        eprintln!("warning: {report}");
    }

    let text = render_palette(model, palette, reports, options)?;
    match &options.output {
        Some(path) => {
            fs::write(path, text)
                .with_context(|| format!("Failed to write palette to {}", path.display()))?;
            log::info!("Wrote {} matrices to {}", palette.len(), path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}
