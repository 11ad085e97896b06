// Calendar layout CLI
// Prints a month grid with its event lanes

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use calendar_layout::models::calendar_day::DateCell;
use calendar_layout::models::settings::{Settings, WeekStart};
use calendar_layout::services::config::CalendarConfig;
use calendar_layout::services::events::load_events;
use calendar_layout::services::grid::GridBuilder;
use calendar_layout::services::layout::{layout_month, MonthLayout};
use calendar_layout::services::placement::place_for;

#[derive(Parser)]
#[command(name = "calendar-layout")]
#[command(about = "Lay out a month of events on a 6x7 calendar grid")]
struct Cli {
    year: i32,

    month: u32,

    /// Events JSON file (array of backend events)
    #[arg(short, long)]
    events: Option<PathBuf>,

    /// Config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured week start ("monday" or "sunday")
    #[arg(short, long)]
    week_start: Option<WeekStart>,

    /// Only print the event query window for the month
    #[arg(long)]
    range_only: bool,

    /// Print the layout as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CalendarConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => CalendarConfig::load_or_default(&CalendarConfig::default_path()),
    };
    let settings = Settings {
        week_start: cli.week_start.unwrap_or(config.settings.week_start),
        ..config.settings.clone()
    };
    let week_start = settings.week_start;

    let grid = GridBuilder::standard()
        .with_workdays(config.workdays.clone())
        .build(cli.year, cli.month, week_start)
        .with_context(|| format!("Failed to build grid for {}-{}", cli.year, cli.month))?;

    if cli.range_only {
        let query = grid.event_query().context("Grid has no cells")?;
        println!("{} .. {}", query.start_time, query.end_time);
        return Ok(());
    }

    let events = match &cli.events {
        Some(path) => load_events(path)
            .with_context(|| format!("Failed to load events from {}", path.display()))?,
        None => Vec::new(),
    };

    let layout = layout_month(&grid, &events).context("Failed to lay out events")?;

    if cli.json {
        let output = serde_json::json!({
            "cells": grid.cells(),
            "layout": layout,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", settings.weekday_labels().join("\t"));
    for (row, week) in grid.weeks().enumerate() {
        print_week(row, week, &layout);
    }

    Ok(())
}

fn print_week(row: usize, week: &[DateCell], layout: &MonthLayout) {
    let days: Vec<String> = week.iter().map(cell_header).collect();
    println!("{}", days.join("\t"));

    let lanes = week
        .iter()
        .filter_map(|cell| layout.day(cell.date_index))
        .map(|day| day.lanes.lane_count())
        .max()
        .unwrap_or(0);

    for lane in 0..lanes {
        let line: Vec<String> = week
            .iter()
            .map(|cell| {
                layout
                    .day(cell.date_index)
                    .and_then(|day| day.lanes.slots().get(lane))
                    .and_then(Option::as_ref)
                    .map(|event| {
                        let marker = if event.has_last { "<" } else { " " };
                        let tail = if event.has_next { ">" } else { " " };
                        format!("{}{}{}", marker, event.id(), tail)
                    })
                    .unwrap_or_else(|| " . ".to_string())
            })
            .collect();
        println!("{}", line.join("\t"));
    }

    if let Some(first) = week.first() {
        log::debug!("Row {} popover opens {}", row + 1, place_for(first.date_index).placement);
    }
}

fn cell_header(cell: &DateCell) -> String {
    let mut header = format!("{:>2}", cell.day());
    if !cell.is_current_month() {
        header.push('*');
    }
    if !cell.festival_name.is_empty() {
        header.push(' ');
        header.push_str(&cell.festival_name);
    } else if !cell.label.is_empty() {
        header.push(' ');
        header.push_str(&cell.label);
    }
    if cell.is_holiday {
        header.push_str(" (休)");
    } else if cell.is_additional_workday {
        header.push_str(" (班)");
    }
    header
}
