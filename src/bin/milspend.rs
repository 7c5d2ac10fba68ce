use anyhow::Result;
use clap::Parser;
use milspend::{AnalysisConfig, Client, pipeline, report, viz};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "milspend",
    version,
    about = "Military expenditure (% of GDP) of Russia and its neighbours: ranking, chart, and event impact"
)]
struct Cli {
    /// Where to write the chart (.svg, otherwise a bitmap such as .png).
    #[arg(long, default_value = "military_expenditure.svg")]
    plot: PathBuf,
    /// Width of the chart in pixels.
    #[arg(long, default_value_t = 1500)]
    width: u32,
    /// Height of the chart in pixels.
    #[arg(long, default_value_t = 800)]
    height: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = AnalysisConfig::default();
    let client = Client::default();

    let build = pipeline::build_table(&client, &config)?;
    print!("{}", report::render_preview(&build.table));

    let analysis = pipeline::analyze(&build.table, &config)?;
    print!("{}", report::render_ranking(&analysis.ranking));

    viz::plot_expenditure(
        &build.table,
        &config.events,
        config.min_year,
        analysis.latest_year,
        &cli.plot,
        cli.width,
        cli.height,
    )?;
    eprintln!("Wrote plot to {}", cli.plot.display());

    for impact in &analysis.impacts {
        print!("{}", report::render_impact(impact));
    }

    Ok(())
}
