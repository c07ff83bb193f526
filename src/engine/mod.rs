//! View-state orchestration: the zone registry, the per-zone time vector and
//! the shared selected date, kept consistent across every user action.

pub(crate) mod convert;
mod order;

use chrono::{DateTime, Local, NaiveDate, Utc};
use chrono_tz::Tz;
use rustc_hash::FxHashMap;

use crate::error::ConvertError;
use crate::types::{MINUTES_PER_DAY, ZoneKey, ZoneTime};
use order::DisplayOrder;

/// The pair every session starts with.
pub const DEFAULT_ZONES: [&str; 2] = ["Asia/Kolkata", "UTC"];

/// One visible row: the key, its canonical zone and its current entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRow {
    pub key: ZoneKey,
    pub tz: Tz,
    pub time: ZoneTime,
}

/// In-memory widget state. The registry, the time vector and the order list
/// always hold exactly the same key set.
pub struct Converter {
    zones: FxHashMap<ZoneKey, Tz>,
    times: FxHashMap<ZoneKey, ZoneTime>,
    order: DisplayOrder,
    selected_date: NaiveDate,
}

impl Converter {
    pub fn new() -> Self {
        Converter {
            zones: FxHashMap::default(),
            times: FxHashMap::default(),
            order: DisplayOrder::default(),
            selected_date: Local::now().date_naive(),
        }
    }

    pub fn with_default_zones() -> Self {
        let mut conv = Self::new();
        for id in DEFAULT_ZONES {
            // the fixed seed pair always resolves
            let _ = conv.add_zone(id);
        }
        conv
    }

    /// Register `canonical_id`, seeding its entry from the current wall clock
    /// in that zone.
    pub fn add_zone(&mut self, canonical_id: &str) -> Result<ZoneKey, ConvertError> {
        self.add_zone_seeded(canonical_id, Utc::now())
    }

    /// Register a zone and seed its entry from `now` projected into it.
    /// Seeding deliberately ignores any previously adjusted shared time: a
    /// fresh zone starts at the wall clock it currently shows.
    pub fn add_zone_seeded(
        &mut self,
        canonical_id: &str,
        now: DateTime<Utc>,
    ) -> Result<ZoneKey, ConvertError> {
        let tz: Tz = canonical_id
            .parse()
            .map_err(|_| ConvertError::UnknownZone(canonical_id.to_string()))?;
        let key = ZoneKey::from_canonical(tz.name());
        if self.zones.contains_key(&key) {
            return Err(ConvertError::DuplicateZone(key.to_string()));
        }
        self.times
            .insert(key.clone(), convert::instant_to_zone_time(tz, now));
        self.zones.insert(key.clone(), tz);
        self.order.push(key.clone());
        Ok(key)
    }

    /// Drop a zone from the registry, the time vector and the order list
    /// together. Returns false when the key was never registered.
    pub fn remove_zone(&mut self, key: &ZoneKey) -> bool {
        let existed = self.zones.remove(key).is_some();
        self.times.remove(key);
        self.order.remove(key);
        existed
    }

    /// Re-anchor one zone's wall clock and propagate the shared instant to
    /// every other registered zone.
    pub fn set_time(&mut self, key: &ZoneKey, minutes: u32) -> Result<(), ConvertError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(ConvertError::TimeOutOfRange(minutes));
        }
        let tz = *self
            .zones
            .get(key)
            .ok_or_else(|| ConvertError::UnknownKey(key.to_string()))?;
        let naive = convert::compose_naive(self.selected_date, minutes)?;
        let instant = convert::local_to_instant(tz, naive)?;
        for (k, ktz) in &self.zones {
            if k != key {
                self.times
                    .insert(k.clone(), convert::instant_to_zone_time(*ktz, instant));
            }
        }
        // the edited zone keeps the requested reading verbatim
        self.times.insert(
            key.clone(),
            ZoneTime {
                minutes,
                date: instant.with_timezone(&tz).date_naive(),
            },
        );
        Ok(())
    }

    /// Move the anchor date and re-derive the whole time vector from it. The
    /// first registered zone keeps its wall-clock reading; every other entry
    /// is re-converted so no zone's date is left pointing at the old anchor.
    pub fn set_date(&mut self, date: NaiveDate) -> Result<(), ConvertError> {
        self.selected_date = date;
        if let Some(key) = self.order.first().cloned() {
            let minutes = self.times[&key].minutes;
            self.set_time(&key, minutes)?;
        }
        Ok(())
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn toggle_reverse(&mut self) -> bool {
        self.order.toggle_reverse()
    }

    pub fn is_reversed(&self) -> bool {
        self.order.is_reversed()
    }

    pub fn move_zone(&mut self, dragged: &ZoneKey, target: &ZoneKey) -> bool {
        self.order.move_to(dragged, target)
    }

    pub fn contains(&self, key: &ZoneKey) -> bool {
        self.zones.contains_key(key)
    }

    pub fn zone_time(&self, key: &ZoneKey) -> Option<ZoneTime> {
        self.times.get(key).copied()
    }

    /// Rows in display order, reverse applied.
    pub fn rows(&self) -> Vec<ZoneRow> {
        self.order
            .visible()
            .into_iter()
            .map(|key| {
                let tz = self.zones[&key];
                let time = self.times[&key];
                ZoneRow { key, tz, time }
            })
            .collect()
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
