use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};

use riemann::estimation::{EstimationReport, Rule};
use riemann::input::parse_samples;
use riemann::plot::{render, PlotCfg};

/// Command line arguments for the area calculator
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Riemann and trapezoidal sum calculator",
    long_about = "Estimates the area under a sampled curve using a left Riemann sum (LRAM), \
        a right Riemann sum (RRAM) or the trapezoidal rule.\n\n\
        Samples are given as two whitespace-separated lists of equal length, e.g.\n  \
        riemann --x \"0 1 2 3\" --fx \"0 1 4 9\" --rule trapezoidal_sum --save area.png"
)]
struct Args {
    #[arg(long = "x", allow_hyphen_values = true, help = "Whitespace-separated x values")]
    x: String,

    #[arg(long = "fx", allow_hyphen_values = true, help = "Whitespace-separated f(x) values")]
    fx: String,

    #[arg(
        short,
        long,
        default_value = "left_riemann",
        value_parser = clap::builder::ValueParser::new(str::parse::<Rule>),
        help = "Approximation rule",
        long_help = "Approximation rule to apply. Available rules:\n  \
            - left_riemann (left, lram): rectangle height from the left endpoint\n  \
            - right_riemann (right, rram): rectangle height from the right endpoint\n  \
            - trapezoidal_sum (trapezoidal, trap): trapezoid between both endpoints"
    )]
    rule: Rule,

    #[arg(
        short,
        long,
        help = "Save the plot to this file",
        long_help = "Render the curve and the approximating shapes to an image. The format \
            follows the extension: png, bmp, jpg/jpeg or svg."
    )]
    save: Option<PathBuf>,

    #[arg(long, help = "Print the full report as JSON")]
    json: bool,

    #[arg(long, default_value_t = PlotCfg::DEFAULT_WIDTH, help = "Plot width in pixels")]
    width: u32,

    #[arg(long, default_value_t = PlotCfg::DEFAULT_HEIGHT, help = "Plot height in pixels")]
    height: u32,

    #[arg(long, default_value = PlotCfg::DEFAULT_TITLE, help = "Plot title")]
    title: String,
}

/// Text summary, or the full report as pretty JSON.
fn summary(report: &EstimationReport, json: bool) -> Result<String, serde_json::Error> {
    if json {
        serde_json::to_string_pretty(report)
    } else {
        Ok(format!("{}\nSum of Area: {}", report.rule.label(), report.total))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let samples = parse_samples(&args.x, &args.fx)?;
    debug!("rule={} samples={}", args.rule, samples.len());

    let report = samples.estimate(args.rule);
    info!("{} over {} intervals: {}", report.rule_name, report.n_intervals, report.total);

    println!("{}", summary(&report, args.json)?);

    if let Some(path) = &args.save {
        let cfg = PlotCfg::new()
            .with_width(args.width)
            .with_height(args.height)
            .with_title(args.title.clone());
        render(&report, samples.xs(), samples.fxs(), path, &cfg)?;
        println!("Plot saved to: {}", path.display());
    }

    Ok(())
}
