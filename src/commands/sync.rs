use anyhow::{Context, Result};
use calsieve_core::config::SieveConfig;
use calsieve_core::ics::serialize_calendar;
use calsieve_core::sieve::{filter_and_annotate, note_for};
use icalendar::{Calendar, CalendarComponent};
use owo_colors::OwoColorize;

use super::create_spinner;
use crate::fetch::fetch_calendar;

pub async fn run(config: &SieveConfig, dry_run: bool) -> Result<()> {
    let spinner = create_spinner(format!("Fetching {}", config.url));
    let fetched = fetch_calendar(&config.url).await;
    spinner.finish_and_clear();
    let calendar = fetched?;

    let blocklist = config.blocklist_set();
    let before = event_count(&calendar);

    let sieved = filter_and_annotate(&calendar, &blocklist, &config.notes);

    let kept = event_count(&sieved);
    let excluded = before - kept;
    let annotated = sieved
        .components
        .iter()
        .filter_map(CalendarComponent::as_event)
        .filter(|event| note_for(event, &config.notes).is_some())
        .count();
    let summary = format!(
        "{} kept, {} excluded, {} annotated",
        kept, excluded, annotated
    );

    let output = config.output_path();

    if dry_run {
        println!(
            "{} would write {} ({})",
            "dry-run:".yellow(),
            output.display(),
            summary
        );
        return Ok(());
    }

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create output directory {}", parent.display())
        })?;
    }
    std::fs::write(&output, serialize_calendar(&sieved))
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("{} {} ({})", "Wrote".green(), output.display(), summary);

    Ok(())
}

fn event_count(calendar: &Calendar) -> usize {
    calendar
        .components
        .iter()
        .filter(|component| component.as_event().is_some())
        .count()
}
