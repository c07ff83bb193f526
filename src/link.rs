//! Shareable-link construction.

use url::Url;

use crate::engine::Converter;

/// Fixed origin the widget shares links under.
pub const SHARE_ORIGIN: &str = "https://time-converter/";

/// Fixed calendar-event-creation URL behind the "schedule meeting" action.
/// No parameters are passed; opening it is the environment's job.
pub const MEETING_URL: &str = "https://calendar.google.com/calendar/u/0/r/eventedit";

/// Ephemeral share-link options: two include flags and two literal fields.
/// The literals pass through verbatim; nothing here validates them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub include_time: bool,
    pub include_date: bool,
    pub time: String,
    pub date: String,
}

impl ShareLink {
    /// Fill the literals from current state: the selected date and the first
    /// displayed zone's time. Both flags start unset.
    pub fn from_state(conv: &Converter) -> Self {
        let mut link = ShareLink {
            date: conv.selected_date().format("%Y-%m-%d").to_string(),
            ..ShareLink::default()
        };
        if let Some(row) = conv.rows().first() {
            link.time = format!("{:02}:{:02}", row.time.hour(), row.time.minute());
        }
        link
    }

    /// `<origin>?time=<literal-or-empty>&date=<literal-or-empty>`. A
    /// parameter carries its literal only when its include flag is set.
    pub fn build(&self) -> String {
        let time = if self.include_time { self.time.as_str() } else { "" };
        let date = if self.include_date { self.date.as_str() } else { "" };
        let query = format!("time={time}&date={date}");
        match Url::parse(SHARE_ORIGIN) {
            Ok(mut url) => {
                url.set_query(Some(&query));
                url.into()
            }
            Err(_) => format!("{SHARE_ORIGIN}?{query}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn only_flagged_parameters_carry_values() {
        let link = ShareLink {
            include_time: false,
            include_date: true,
            time: "09:00".to_string(),
            date: "2024-05-01".to_string(),
        };
        assert_eq!(link.build(), "https://time-converter/?time=&date=2024-05-01");
    }

    #[test]
    fn both_parameters_when_both_flags_set() {
        let link = ShareLink {
            include_time: true,
            include_date: true,
            time: "23:30".to_string(),
            date: "2024-01-01".to_string(),
        };
        assert_eq!(
            link.build(),
            "https://time-converter/?time=23:30&date=2024-01-01"
        );
    }

    #[test]
    fn malformed_literals_pass_through_verbatim() {
        let link = ShareLink {
            include_time: true,
            include_date: true,
            time: "half-past-nine".to_string(),
            date: "someday".to_string(),
        };
        assert_eq!(
            link.build(),
            "https://time-converter/?time=half-past-nine&date=someday"
        );
    }

    #[test]
    fn literals_are_wired_to_current_state() {
        let mut conv = Converter::new();
        conv.add_zone_seeded("UTC", Utc.with_ymd_and_hms(2024, 5, 1, 9, 15, 0).unwrap())
            .unwrap();
        conv.set_date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()).unwrap();
        let link = ShareLink::from_state(&conv);
        assert_eq!(link.date, "2024-05-01");
        assert_eq!(link.time, "09:15");
        assert!(!link.include_time && !link.include_date);
    }
}
