use std::fmt;

use chrono::NaiveDate;

/// Minutes in one calendar day; local times are encoded as 0..1440.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Granularity of the time slider and the dropdown grid.
pub const SLIDER_STEP: u32 = 15;

/// Key a registered zone is listed under, derived from the canonical
/// identifier with path separators replaced (`Asia/Kolkata` → `Asia-Kolkata`).
/// Distinct from the canonical identifier, which stays in the registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneKey(String);

impl ZoneKey {
    pub fn new(raw: impl Into<String>) -> Self {
        ZoneKey(raw.into())
    }

    pub fn from_canonical(id: &str) -> Self {
        ZoneKey(id.replace('/', "-"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One zone's entry in the time vector: wrapped minutes-of-day plus the
/// calendar date those minutes fall on. The date can differ from the shared
/// selected date when a conversion crosses midnight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoneTime {
    pub minutes: u32,
    pub date: NaiveDate,
}

impl ZoneTime {
    pub fn hour(&self) -> u32 {
        self.minutes / 60
    }

    pub fn minute(&self) -> u32 {
        self.minutes % 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_derivation_substitutes_separators() {
        assert_eq!(
            ZoneKey::from_canonical("Asia/Kolkata"),
            ZoneKey::new("Asia-Kolkata")
        );
        assert_eq!(ZoneKey::from_canonical("UTC"), ZoneKey::new("UTC"));
        assert_eq!(
            ZoneKey::from_canonical("America/Argentina/Ushuaia").as_str(),
            "America-Argentina-Ushuaia"
        );
    }

    #[test]
    fn zone_time_split() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let t = ZoneTime { minutes: 570, date };
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 30);
    }
}
