//! The filter-and-annotate transformation.
//!
//! Given a parsed calendar, a blocklist of titles/UIDs, and a notes
//! mapping, produce a new calendar with blocked events excluded and notes
//! appended to the descriptions of the events that survive. Everything an
//! event carries besides SUMMARY, UID, and DESCRIPTION is opaque here and
//! passes through untouched.

use std::collections::{HashMap, HashSet};

use icalendar::{Calendar, CalendarComponent, Component, Event, EventLike};

/// Header line placed before an appended note in the description.
const NOTES_HEADER: &str = "--- Notes ---\n";

/// Whether an event matches the blocklist.
///
/// An event is blocked iff its title or its uid appears in the blocklist
/// (exact, case-sensitive match on each independently). A missing title
/// or uid compares as the empty string, so incomplete events survive
/// unless the blocklist explicitly contains "".
pub fn is_blocked(event: &Event, blocklist: &HashSet<String>) -> bool {
    let title = event.get_summary().unwrap_or("");
    let uid = event.get_uid().unwrap_or("");

    blocklist.contains(title) || blocklist.contains(uid)
}

/// Drop blocked events, preserving the order of the survivors.
///
/// An empty blocklist is the identity.
pub fn filter_events(events: Vec<Event>, blocklist: &HashSet<String>) -> Vec<Event> {
    events
        .into_iter()
        .filter(|event| !is_blocked(event, blocklist))
        .collect()
}

/// Look up the note for an event by lower-cased title.
///
/// Events with no title (or an empty one) never match. Keys in `notes`
/// are expected to already be lower-cased (the config loader guarantees
/// this).
pub fn note_for<'a>(event: &Event, notes: &'a HashMap<String, String>) -> Option<&'a str> {
    let title = event.get_summary()?;
    if title.is_empty() {
        return None;
    }

    notes.get(&title.to_lowercase()).map(String::as_str)
}

/// Append the matching note (if any) to the event's description.
///
/// With an existing description `D` the result is
/// `D + "\n\n--- Notes ---\n" + note`; with no description it is
/// `"--- Notes ---\n" + note`. The description property is replaced
/// wholesale. Without a matching note the event is returned untouched.
///
/// Annotation is deliberately not idempotent: annotating an
/// already-annotated event appends the block again.
pub fn annotate_event(mut event: Event, notes: &HashMap<String, String>) -> Event {
    let Some(note) = note_for(&event, notes) else {
        return event;
    };

    let existing = event.get_description().unwrap_or("");
    let description = if existing.is_empty() {
        format!("{NOTES_HEADER}{note}")
    } else {
        format!("{existing}\n\n{NOTES_HEADER}{note}")
    };
    event.description(&description);

    event
}

/// Apply the sieve to a whole calendar, returning a new one.
///
/// The source calendar is not modified. Calendar-level properties and
/// non-VEVENT components (VTIMEZONE, VTODO, ...) carry over unchanged;
/// only VEVENTs are subject to the blocklist and the notes mapping.
pub fn filter_and_annotate(
    source: &Calendar,
    blocklist: &HashSet<String>,
    notes: &HashMap<String, String>,
) -> Calendar {
    let mut sieved = source.clone();

    sieved.components = source
        .components
        .iter()
        .filter_map(|component| match component {
            CalendarComponent::Event(event) => {
                if is_blocked(event, blocklist) {
                    None
                } else {
                    let event = annotate_event(event.clone(), notes);
                    Some(CalendarComponent::Event(event))
                }
            }
            other => Some(other.clone()),
        })
        .collect();

    sieved
}
