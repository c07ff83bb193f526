//! Zone catalog queries backed by the bundled tz database.

use chrono::{DateTime, Utc};
use chrono_tz::{TZ_VARIANTS, Tz};

/// All canonical identifiers, optionally narrowed by a case-insensitive
/// substring. Feeds the searchable zone picker.
pub fn zone_names(filter: Option<&str>) -> Vec<&'static str> {
    let needle = filter.map(str::to_ascii_lowercase);
    TZ_VARIANTS
        .iter()
        .map(|tz| tz.name())
        .filter(|name| {
            needle
                .as_deref()
                .is_none_or(|n| name.to_ascii_lowercase().contains(n))
        })
        .collect()
}

/// Zone abbreviation (e.g. `IST`) in force at `instant`.
pub fn zone_abbr(tz: Tz, instant: DateTime<Utc>) -> String {
    instant.with_timezone(&tz).format("%Z").to_string()
}

/// `GMT ±HH:MM` label in force at `instant`, as the widget renders offsets.
pub fn offset_label(tz: Tz, instant: DateTime<Utc>) -> String {
    format!("GMT {}", instant.with_timezone(&tz).format("%:z"))
}

/// The host's own zone, UTC when discovery fails.
pub fn host_zone() -> Tz {
    iana_time_zone::get_timezone()
        .ok()
        .and_then(|name| name.parse().ok())
        .unwrap_or(Tz::UTC)
}
