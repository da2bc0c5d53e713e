use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use boxmatch_core::error::BoxMatchError;
use boxmatch_core::reconcile::{reconcile, validate, Priority, ReconcileConfig, ReconcileParams};
use boxmatch_core::units::order_pixel_sizes;
use clap::{Args, ValueEnum};
use tracing::debug;

use crate::prompt::Prompter;
use crate::summary;

const TARGET_PROMPT: &str = "Enter the target pixel size after rescaling: ";
const BOX_AIM_PROMPT: &str =
    "Enter your preferred extraction box size in pixels for the smallest pixel size: ";
const TOLERANCE_PROMPT: &str = "Enter the box size tolerance in pixels: ";
const RESULTS_PROMPT: &str = "Enter the number of results to select: ";
const PRIORITY_PROMPT: &str =
    "Is FFT efficiency more important than the exact target pixel size? Enter 'yes' or 'no': ";

#[derive(Clone, Copy, ValueEnum)]
pub enum PriorityArg {
    /// Snap rescaled boxes to FFT-efficient sizes
    Fft,
    /// Keep the exact target pixel size
    Exact,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Fft => Priority::FftEfficiency,
            PriorityArg::Exact => Priority::ExactTarget,
        }
    }
}

#[derive(Args)]
pub struct ReconcileArgs {
    /// Reconciler config file (TOML); flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// First calibrated pixel size in A/px
    #[arg(long)]
    pub pix1: Option<f64>,

    /// Second calibrated pixel size in A/px
    #[arg(long)]
    pub pix2: Option<f64>,

    /// Pixel size after rescaling, at least the larger calibrated size
    #[arg(long)]
    pub target: Option<f64>,

    /// Preferred box size in pixels for the smaller pixel size
    #[arg(long)]
    pub box_aim: Option<f64>,

    /// Allowed deviation from the preferred box size, in pixels
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Number of recommendations to list
    #[arg(short = 'n', long)]
    pub results: Option<usize>,

    /// Favour FFT-efficient boxes or the exact target pixel size
    #[arg(long, value_enum)]
    pub priority: Option<PriorityArg>,

    /// Save the recommendations as TOML
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Exit without waiting for Enter
    #[arg(long)]
    pub no_wait: bool,
}

impl ReconcileArgs {
    fn flag_config(&self) -> ReconcileConfig {
        ReconcileConfig {
            pix1: self.pix1,
            pix2: self.pix2,
            target_pixel_size: self.target,
            box_aim: self.box_aim,
            tolerance: self.tolerance,
            num_results: self.results,
            priority: self.priority.map(Priority::from),
        }
    }
}

fn load_config(path: &Path) -> Result<ReconcileConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&contents).context("Invalid reconciler config")
}

pub fn run(args: &ReconcileArgs) -> Result<()> {
    let file_config = match args.config {
        Some(ref path) => load_config(path)?,
        None => ReconcileConfig::default(),
    };
    let preset = args.flag_config().or(file_config);
    debug!(?preset, "Reconciler presets");

    let mut prompter = Prompter::stdio();
    let params = collect_params(&mut prompter, preset)?;
    let report = reconcile(&params);
    summary::print_reconcile_report(&report);

    if let Some(ref path) = args.save {
        let toml_str = toml::to_string_pretty(&report)?;
        std::fs::write(path, toml_str)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        println!("Recommendations saved to {}", path.display());
    }

    if !args.no_wait {
        prompter.pause("Press Enter to exit...")?;
    }
    Ok(())
}

fn result_count(n: usize) -> Result<usize, BoxMatchError> {
    if n == 0 {
        return Err(BoxMatchError::NoResultsRequested);
    }
    Ok(n)
}

/// Gather valid reconciler parameters, taking presets where they pass
/// validation and asking for everything else.
///
/// A result count larger than the tolerance allows sends the user back to
/// pick both the count and the tolerance again.
fn collect_params<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    preset: ReconcileConfig,
) -> Result<ReconcileParams> {
    let pix_a = prompter.value_or_ask(
        preset.pix1,
        "Enter the first calibrated pixel size: ",
        validate::pixel_size,
    )?;
    let pix_b = prompter.value_or_ask(
        preset.pix2,
        "Enter the second calibrated pixel size: ",
        validate::pixel_size,
    )?;

    let (pix1, pix2) = order_pixel_sizes(pix_a, pix_b);
    prompter.say("")?;
    prompter.say(format!("The largest pixel size (pix1) is: {pix1}"))?;
    prompter.say(format!("The smallest pixel size (pix2) is: {pix2}"))?;
    prompter.say("")?;

    let target = prompter.value_or_ask(preset.target_pixel_size, TARGET_PROMPT, |t| {
        validate::target_pixel_size(t, pix1)
    })?;
    let box_aim = prompter.value_or_ask(preset.box_aim, BOX_AIM_PROMPT, validate::box_aim)?;
    let check_tolerance = |t| validate::tolerance(t, box_aim);
    let mut tolerance =
        prompter.value_or_ask(preset.tolerance, TOLERANCE_PROMPT, check_tolerance)?;
    let mut num_results =
        prompter.value_or_ask(preset.num_results, RESULTS_PROMPT, result_count)?;

    while let Err(err) = validate::result_count(num_results, box_aim, tolerance) {
        prompter.say(err)?;
        prompter.say("Please provide a smaller number of results or adjust the tolerance:")?;
        num_results = prompter.parse_valid(RESULTS_PROMPT, result_count)?;
        tolerance = prompter.parse_valid(TOLERANCE_PROMPT, check_tolerance)?;
    }

    let priority = match preset.priority {
        Some(priority) => priority,
        None => {
            if prompter.yes_no(PRIORITY_PROMPT)? {
                Priority::FftEfficiency
            } else {
                Priority::ExactTarget
            }
        }
    };

    Ok(ReconcileParams::new(
        pix1,
        pix2,
        target,
        box_aim,
        tolerance,
        num_results,
        priority,
    )?)
}
