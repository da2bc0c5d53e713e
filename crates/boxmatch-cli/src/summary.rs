use boxmatch_core::consts::{DEVIATION_DECIMALS, PIXEL_SIZE_DECIMALS};
use boxmatch_core::estimate::BoxEstimate;
use boxmatch_core::reconcile::{DatasetBox, ReconcileReport};
use boxmatch_core::units::round_to;
use console::Style;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    size: Style,
    disabled: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            size: Style::new().green(),
            disabled: Style::new().dim().yellow(),
        }
    }
}

fn underline(text: &str) -> String {
    "\u{2550}".repeat(text.chars().count())
}

fn pixel_size(value: f64) -> String {
    format!("{} A/px", round_to(value, PIXEL_SIZE_DECIMALS))
}

pub fn print_box_estimate(estimate: &BoxEstimate) {
    let s = Styles::new();
    let title = "Box Size Estimate";

    println!();
    println!("  {}", s.title.apply_to(title));
    println!("  {}", s.title.apply_to(underline(title)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Pixel size"),
        s.value.apply_to(pixel_size(estimate.pixel_size))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Diameter"),
        s.value.apply_to(format!("{} A", estimate.particle_diameter))
    );
    println!();

    let range = estimate.range;
    if range.is_empty() {
        println!(
            "  {:<14}{}",
            s.header.apply_to("Box range"),
            s.disabled
                .apply_to("none (particle is too small for this pixel size)")
        );
    } else {
        println!(
            "  Your particles need a box size between {} and {}",
            s.value.apply_to(range.low),
            s.value.apply_to(range.high)
        );
    }
    println!();

    if estimate.fft_sizes.is_empty() {
        println!(
            "  {:<14}{}",
            s.header.apply_to("FFT sizes"),
            s.disabled.apply_to("none in range")
        );
        let (below, above) = range.fft_neighbors();
        if let Some(below) = below {
            println!(
                "    {:<12}{}",
                s.label.apply_to("Below"),
                s.size.apply_to(below)
            );
        }
        if let Some(above) = above {
            println!(
                "    {:<12}{}",
                s.label.apply_to("Above"),
                s.size.apply_to(above)
            );
        }
    } else {
        let sizes: Vec<String> = estimate.fft_sizes.iter().map(|size| size.to_string()).collect();
        println!("  {}", s.header.apply_to("Suggested FFT efficient box sizes"));
        println!("    {}", s.size.apply_to(sizes.join(", ")));
    }
    println!();
}

pub fn print_reconcile_report(report: &ReconcileReport) {
    let s = Styles::new();
    let params = &report.params;
    let title = "Compatible Box Sizes";

    println!();
    println!("  {}", s.title.apply_to(title));
    println!("  {}", s.title.apply_to(underline(title)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("pix1"),
        s.value.apply_to(pixel_size(params.pix1))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("pix2"),
        s.value.apply_to(pixel_size(params.pix2))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Target"),
        s.value.apply_to(pixel_size(params.target_pixel_size))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Box aim"),
        s.value.apply_to(format!(
            "{} +- {} px ({} candidates)",
            params.box_aim, params.tolerance, report.pool_size
        ))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Priority"),
        s.size.apply_to(params.priority)
    );
    println!();

    for (i, rec) in report.recommendations.iter().enumerate() {
        println!("  {}", s.header.apply_to(format!("Result {}", i + 1)));
        print_dataset_line(&s, "pix1", &rec.pix1);
        print_dataset_line(&s, "pix2", &rec.pix2);
        println!(
            "    {:<12}{}",
            s.label.apply_to("Deviation"),
            s.value
                .apply_to(format!("{} px", round_to(rec.deviation, DEVIATION_DECIMALS)))
        );
        println!(
            "    {:<12}{}",
            s.label.apply_to("Mismatch"),
            s.value.apply_to(pixel_size(rec.pixel_size_mismatch()))
        );
        println!();
    }
}

fn print_dataset_line(s: &Styles, name: &str, dataset: &DatasetBox) {
    if dataset.is_rescaled() {
        println!(
            "    {:<12}extract {} px, rescale to {} px, giving {}",
            s.label.apply_to(name),
            s.size.apply_to(dataset.extract_box),
            s.size.apply_to(dataset.final_box),
            s.value.apply_to(pixel_size(dataset.pixel_size))
        );
    } else {
        println!(
            "    {:<12}extract {} px at {}",
            s.label.apply_to(name),
            s.size.apply_to(dataset.extract_box),
            s.value.apply_to(pixel_size(dataset.pixel_size))
        );
    }
}
