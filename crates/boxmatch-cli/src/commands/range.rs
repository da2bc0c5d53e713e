use std::io::{BufRead, Write};

use anyhow::Result;
use boxmatch_core::error::BoxMatchError;
use boxmatch_core::estimate::{estimate_box_size, BoxEstimate};
use boxmatch_core::reconcile::validate;
use clap::Args;

use crate::prompt::Prompter;
use crate::summary;

#[derive(Args)]
pub struct RangeArgs {
    /// Pixel size in A/px (asked for when omitted)
    #[arg(long)]
    pub pixel_size: Option<f64>,

    /// Longest particle diameter in Angstrom (asked for when omitted)
    #[arg(long)]
    pub diameter: Option<u32>,
}

fn check_diameter(value: u32) -> Result<u32, BoxMatchError> {
    if value == 0 {
        return Err(BoxMatchError::InvalidDiameter(0.0));
    }
    Ok(value)
}

const PIXEL_SIZE_PROMPT: &str = "Enter pixel size: ";
const DIAMETER_PROMPT: &str = "Enter longest particle diameter in Angstrom: ";

pub fn run(args: &RangeArgs) -> Result<()> {
    let mut prompter = Prompter::stdio();
    let estimate = collect_estimate(&mut prompter, args)?;
    summary::print_box_estimate(&estimate);

    Ok(())
}

/// Ask for anything the flags leave out. A box range too large to represent
/// sends the user back to pick both values again.
fn collect_estimate<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    args: &RangeArgs,
) -> Result<BoxEstimate> {
    let mut pixel_size =
        prompter.value_or_ask(args.pixel_size, PIXEL_SIZE_PROMPT, validate::pixel_size)?;
    let mut diameter = prompter.value_or_ask(args.diameter, DIAMETER_PROMPT, check_diameter)?;

    loop {
        match estimate_box_size(pixel_size, diameter as f64) {
            Ok(estimate) => return Ok(estimate),
            Err(err) => {
                prompter.say(err)?;
                prompter.say("Please provide a larger pixel size or a smaller diameter:")?;
                pixel_size = prompter.parse_valid(PIXEL_SIZE_PROMPT, validate::pixel_size)?;
                diameter = prompter.parse_valid(DIAMETER_PROMPT, check_diameter)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::tests::{scripted, transcript};

    fn no_flags() -> RangeArgs {
        RangeArgs {
            pixel_size: None,
            diameter: None,
        }
    }

    #[test]
    fn test_flags_skip_prompts() {
        let args = RangeArgs {
            pixel_size: Some(1.0),
            diameter: Some(150),
        };
        let mut p = scripted("");
        let estimate = collect_estimate(&mut p, &args).unwrap();
        assert_eq!((estimate.range.low, estimate.range.high), (226, 300));
        assert!(transcript(p).is_empty());
    }

    #[test]
    fn test_zero_diameter_reprompts() {
        let mut p = scripted("1\n0\n150\n");
        let estimate = collect_estimate(&mut p, &no_flags()).unwrap();
        assert_eq!(estimate.particle_diameter, 150.0);
        assert_eq!(transcript(p).matches(DIAMETER_PROMPT).count(), 2);
    }

    #[test]
    fn test_oversized_range_reprompts_both_values() {
        let mut p = scripted("0.000001\n10000\n1\n150\n");
        let estimate = collect_estimate(&mut p, &no_flags()).unwrap();
        assert_eq!(estimate.pixel_size, 1.0);
        assert_eq!(estimate.range.high, 300);
        let out = transcript(p);
        assert!(out.contains("exceeds the largest supported box"), "got: {out}");
        assert_eq!(out.matches(PIXEL_SIZE_PROMPT).count(), 2);
    }
}
