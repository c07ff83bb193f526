//! Command grammar for the script and REPL surfaces. Each command is the
//! terminal analogue of one discrete action in the widget.

use chrono::{NaiveDate, NaiveTime, Timelike};
use thiserror::Error;

use crate::types::{SLIDER_STEP, ZoneKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <canonical-id>`: register a zone from the catalog.
    Add(String),
    /// `add local`: register the host's own zone.
    AddLocal,
    /// `remove <key>`
    Remove(ZoneKey),
    /// `set <key> <HH:MM>`: slider drop or dropdown pick.
    Set { key: ZoneKey, minutes: u32 },
    /// `date <YYYY-MM-DD>`: date-picker selection.
    Date(NaiveDate),
    /// `reverse`: flip the display order.
    Reverse,
    /// `move <key> <key>`: drop the first key at the second's position.
    Move { dragged: ZoneKey, target: ZoneKey },
    /// `list`: render all rows.
    List,
    /// `zones [filter]`: browse the catalog.
    Zones(Option<String>),
    /// `times`: the dropdown's 15-minute grid.
    Times,
    /// `link [--time[=H:M]] [--date[=Y-M-D]]`: build the share link.
    Link {
        include_time: bool,
        include_date: bool,
        time: Option<String>,
        date: Option<String>,
    },
    /// `dark`: toggle and persist the theme preference.
    Dark,
    /// `meet`: print the meeting-scheduler URL.
    Meet,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("cannot parse time {0:?} (expected HH:MM)")]
    BadTime(String),

    #[error("cannot parse date {0:?} (expected YYYY-MM-DD)")]
    BadDate(String),

    #[error("{0} minutes is off the 15-minute slider grid")]
    OffStep(u32),
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = words.collect();

    let cmd = match head {
        "add" => match rest.as_slice() {
            ["local"] => Command::AddLocal,
            [id] => Command::Add((*id).to_string()),
            _ => return Err(ParseError::Usage("add <zone|local>")),
        },
        "remove" | "rm" => match rest.as_slice() {
            [key] => Command::Remove(ZoneKey::new(*key)),
            _ => return Err(ParseError::Usage("remove <key>")),
        },
        "set" => match rest.as_slice() {
            [key, time] => {
                let minutes = parse_minutes(time)?;
                // the slider only stops on the quarter-hour grid
                if minutes % SLIDER_STEP != 0 {
                    return Err(ParseError::OffStep(minutes));
                }
                Command::Set {
                    key: ZoneKey::new(*key),
                    minutes,
                }
            }
            _ => return Err(ParseError::Usage("set <key> <HH:MM>")),
        },
        "date" => match rest.as_slice() {
            [raw] => Command::Date(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| ParseError::BadDate((*raw).to_string()))?,
            ),
            _ => return Err(ParseError::Usage("date <YYYY-MM-DD>")),
        },
        "reverse" | "rev" => Command::Reverse,
        "move" | "mv" => match rest.as_slice() {
            [dragged, target] => Command::Move {
                dragged: ZoneKey::new(*dragged),
                target: ZoneKey::new(*target),
            },
            _ => return Err(ParseError::Usage("move <key> <key>")),
        },
        "list" | "ls" | "show" => Command::List,
        "zones" => Command::Zones(rest.first().map(|f| (*f).to_string())),
        "times" => Command::Times,
        "link" => {
            let mut include_time = false;
            let mut include_date = false;
            let mut time = None;
            let mut date = None;
            for word in &rest {
                if *word == "--time" {
                    include_time = true;
                } else if let Some(literal) = word.strip_prefix("--time=") {
                    include_time = true;
                    // literals are passed through verbatim, even malformed
                    time = Some(literal.to_string());
                } else if *word == "--date" {
                    include_date = true;
                } else if let Some(literal) = word.strip_prefix("--date=") {
                    include_date = true;
                    date = Some(literal.to_string());
                } else {
                    return Err(ParseError::Usage("link [--time[=HH:MM]] [--date[=YYYY-MM-DD]]"));
                }
            }
            Command::Link {
                include_time,
                include_date,
                time,
                date,
            }
        }
        "dark" => Command::Dark,
        "meet" => Command::Meet,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(Some(cmd))
}

fn parse_minutes(raw: &str) -> Result<u32, ParseError> {
    let time = NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|_| ParseError::BadTime(raw.to_string()))?;
    Ok(time.hour() * 60 + time.minute())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one(line: &str) -> Command {
        parse(line).unwrap().unwrap()
    }

    #[test]
    fn blank_lines_parse_to_nothing() {
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse("   "), Ok(None));
    }

    #[test]
    fn zone_management_commands() {
        assert_eq!(one("add Europe/Paris"), Command::Add("Europe/Paris".into()));
        assert_eq!(one("add local"), Command::AddLocal);
        assert_eq!(one("rm Asia-Kolkata"), Command::Remove(ZoneKey::new("Asia-Kolkata")));
    }

    #[test]
    fn set_accepts_grid_times_only() {
        assert_eq!(
            one("set UTC 09:15"),
            Command::Set {
                key: ZoneKey::new("UTC"),
                minutes: 555
            }
        );
        assert_eq!(parse("set UTC 09:07"), Err(ParseError::OffStep(547)));
        assert_eq!(
            parse("set UTC nineish"),
            Err(ParseError::BadTime("nineish".into()))
        );
        assert_eq!(parse("set UTC"), Err(ParseError::Usage("set <key> <HH:MM>")));
    }

    #[test]
    fn date_and_ordering_commands() {
        assert_eq!(
            one("date 2024-05-01"),
            Command::Date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
        );
        assert_eq!(
            parse("date yesterday"),
            Err(ParseError::BadDate("yesterday".into()))
        );
        assert_eq!(one("reverse"), Command::Reverse);
        assert_eq!(
            one("move UTC Asia-Kolkata"),
            Command::Move {
                dragged: ZoneKey::new("UTC"),
                target: ZoneKey::new("Asia-Kolkata"),
            }
        );
    }

    #[test]
    fn link_flags_and_literals() {
        assert_eq!(
            one("link"),
            Command::Link {
                include_time: false,
                include_date: false,
                time: None,
                date: None
            }
        );
        assert_eq!(
            one("link --time --date=2024-05-01"),
            Command::Link {
                include_time: true,
                include_date: true,
                time: None,
                date: Some("2024-05-01".into()),
            }
        );
        // verbatim pass-through of whatever the user typed
        assert_eq!(
            one("link --time=half-past"),
            Command::Link {
                include_time: true,
                include_date: false,
                time: Some("half-past".into()),
                date: None,
            }
        );
    }

    #[test]
    fn misc_commands_and_unknowns() {
        assert_eq!(one("zones kolkata"), Command::Zones(Some("kolkata".into())));
        assert_eq!(one("zones"), Command::Zones(None));
        assert_eq!(one("times"), Command::Times);
        assert_eq!(one("dark"), Command::Dark);
        assert_eq!(one("meet"), Command::Meet);
        assert_eq!(one("quit"), Command::Quit);
        assert_eq!(parse("frobnicate"), Err(ParseError::Unknown("frobnicate".into())));
    }
}
