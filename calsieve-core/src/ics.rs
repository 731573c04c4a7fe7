//! ICS wire-format round-trip using the icalendar crate.
//!
//! The sieve never touches raw ICS text; these wrappers are the only
//! place the wire format crosses into or out of the crate.

use icalendar::Calendar;

use crate::error::{SieveError, SieveResult};

/// Parse an ICS document into a calendar.
pub fn parse_calendar(content: &str) -> SieveResult<Calendar> {
    content
        .parse::<Calendar>()
        .map_err(SieveError::IcsParse)
}

/// Serialize a calendar back to ICS text.
pub fn serialize_calendar(calendar: &Calendar) -> String {
    calendar.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sieve::filter_and_annotate;
    use std::collections::{HashMap, HashSet};

    const FEED: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:RAPLA\r\n\
BEGIN:VEVENT\r\n\
UID:u1\r\n\
SUMMARY:Math 101\r\n\
DTSTART:20260112T080000Z\r\n\
DTEND:20260112T093000Z\r\n\
LOCATION:Room 221\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:u2\r\n\
SUMMARY:Lunch\r\n\
DTSTART:20260112T120000Z\r\n\
DTEND:20260112T130000Z\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

    #[test]
    fn parse_sieve_serialize_drops_blocked_events() {
        let calendar = parse_calendar(FEED).unwrap();
        let blocklist: HashSet<String> = ["Lunch".to_string()].into();

        let sieved = filter_and_annotate(&calendar, &blocklist, &HashMap::new());
        let output = serialize_calendar(&sieved);

        assert!(output.contains("SUMMARY:Math 101"));
        assert!(output.contains("LOCATION:Room 221"));
        assert!(!output.contains("SUMMARY:Lunch"));
        assert!(!output.contains("UID:u2"));
    }

    #[test]
    fn parse_rejects_non_ics_content() {
        let result = parse_calendar("this is not a calendar");

        assert!(matches!(result, Err(SieveError::IcsParse(_))));
    }
}
