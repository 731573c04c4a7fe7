use anyhow::Result;
use calsieve_core::config::SieveConfig;
use calsieve_core::sieve::{is_blocked, note_for};
use icalendar::{CalendarComponent, Component};
use owo_colors::OwoColorize;

use super::create_spinner;
use crate::fetch::fetch_calendar;

pub async fn run(config: &SieveConfig) -> Result<()> {
    let spinner = create_spinner(format!("Fetching {}", config.url));
    let fetched = fetch_calendar(&config.url).await;
    spinner.finish_and_clear();
    let calendar = fetched?;

    let blocklist = config.blocklist_set();

    let mut kept = 0;
    let mut excluded = 0;

    for event in calendar
        .components
        .iter()
        .filter_map(CalendarComponent::as_event)
    {
        let title = event.get_summary().unwrap_or("(no title)");

        if is_blocked(event, &blocklist) {
            excluded += 1;
            println!("{} {}", "-".red(), title.red());
        } else if let Some(note) = note_for(event, &config.notes) {
            kept += 1;
            let annotation = format!("+ note: {}", first_line(note));
            println!("{} {} {}", "~".yellow(), title, annotation.dimmed());
        } else {
            kept += 1;
            println!("{} {}", "·".dimmed(), title);
        }
    }

    println!("\n{} kept, {} excluded", kept, excluded);

    Ok(())
}

fn first_line(note: &str) -> &str {
    note.lines().next().unwrap_or(note)
}
