mod app;
mod color;
mod config;
mod data;
mod report;
mod ui;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use config::{Args, Settings};
use data::loader::load_file;
use data::model::Dataset;
use data::partition::{partition, ScatterFigure};
use data::score::compute_scores;
use report::GroupSummary;

/// Everything computed for one cohort before anything is shown.
#[derive(Debug)]
struct GroupResult {
    dataset: Dataset,
    scores: Vec<f64>,
    summary: GroupSummary,
    figure: ScatterFigure,
}

fn main() -> Result<()> {
    env_logger::init();

    let settings = Settings::from_args(Args::parse())?;
    if let Err(e) = run(&settings) {
        log::error!("{e:#}");
        return Err(e);
    }
    Ok(())
}

fn run(settings: &Settings) -> Result<()> {
    let results = analyse_groups(settings)?;

    let summaries: Vec<GroupSummary> = results.iter().map(|r| r.summary.clone()).collect();
    if settings.json {
        println!("{}", report::render_json(&summaries)?);
    } else {
        println!("{}", report::render_text(&summaries));
    }

    if settings.plot {
        for result in results {
            app::show_figure(result.figure, settings.window_size)?;
        }
    }
    Ok(())
}

/// Load and score both groups, then export. Nothing is written unless every
/// group loaded and scored cleanly.
fn analyse_groups(settings: &Settings) -> Result<Vec<GroupResult>> {
    let groups = [
        ("experimental", settings.experimental.as_path(), "Experimental group"),
        ("control", settings.control.as_path(), "Control group"),
    ];

    let results = groups
        .iter()
        .map(|&(label, path, title)| {
            process_group(settings, label, path, title)
                .with_context(|| format!("processing {label} group"))
        })
        .collect::<Result<Vec<_>>>()?;

    if let Some(dir) = &settings.export_dir {
        for result in &results {
            report::export_scores(dir, &result.dataset, &result.scores)?;
        }
    }
    Ok(results)
}

fn process_group(settings: &Settings, label: &str, path: &Path, title: &str) -> Result<GroupResult> {
    let dataset = load_file(path, label)?;
    if dataset.is_empty() {
        log::warn!("{label} group has no complete records; its averages are reported as 0");
    }
    let scores = compute_scores(&dataset.records)?;

    Ok(GroupResult {
        summary: GroupSummary::new(&dataset, &scores, &settings.codes),
        figure: partition(&dataset, &settings.codes, title),
        dataset,
        scores,
    })
}
