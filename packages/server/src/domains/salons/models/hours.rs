//! Weekly business hours as stored on a provider record.
//!
//! The account store writes `business_hours` in one of two shapes:
//!
//! - a key-ordered map, persisted as a JSON array of
//!   `{"day": "Monday", "open": true, "start": "9:00 AM", "end": "5:00 PM"}` entries
//! - a plain keyed object, `{"Monday": {"open": true, ...}, ...}`
//!
//! [`BusinessHours::from_stored`] inspects the stored value once and picks the
//! matching [`HoursLookup`] adapter. Anything else (null, a string, a number)
//! is treated as "no hours stored".

use chrono::Weekday;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::warn;

pub const DEFAULT_OPEN_TIME: &str = "10:00 AM";
pub const DEFAULT_CLOSE_TIME: &str = "8:00 PM";

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English weekday name, as used for stored hour keys.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Opening hours for a single day.
///
/// Missing sub-fields decode as closed with empty times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    #[serde(default)]
    pub open: bool,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

impl DayHours {
    pub fn new(open: bool, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            open,
            start: start.into(),
            end: end.into(),
        }
    }

    /// Hours assumed when a record stores nothing for the requested day.
    pub fn default_open() -> Self {
        Self::new(true, DEFAULT_OPEN_TIME, DEFAULT_CLOSE_TIME)
    }

    /// `"<start> - <end>"`, or `"Closed"` when the day is not open.
    pub fn summary(&self) -> String {
        if self.open {
            format!("{} - {}", self.start, self.end)
        } else {
            "Closed".to_string()
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }
}

/// Read access to a week of hours, independent of the stored encoding.
pub trait HoursLookup {
    /// Hours stored under `day` (a full weekday name), if any.
    fn lookup(&self, day: &str) -> Option<DayHours>;

    /// Every stored day. Order follows the encoding and is not significant.
    fn entries(&self) -> Vec<(String, DayHours)>;
}

/// Adapter over the key-ordered map encoding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderedHours(Vec<(String, DayHours)>);

#[derive(Deserialize)]
struct OrderedEntry {
    day: String,
    #[serde(flatten)]
    hours: DayHours,
}

impl OrderedHours {
    fn from_array(items: &[Value]) -> Self {
        let mut entries: Vec<(String, DayHours)> = Vec::with_capacity(items.len());
        for item in items {
            let Ok(entry) = serde_json::from_value::<OrderedEntry>(item.clone()) else {
                continue;
            };
            // First entry for a day wins, as with a map insert-if-absent.
            if entries.iter().all(|(day, _)| *day != entry.day) {
                entries.push((entry.day, entry.hours));
            }
        }
        Self(entries)
    }
}

impl HoursLookup for OrderedHours {
    fn lookup(&self, day: &str) -> Option<DayHours> {
        self.0
            .iter()
            .find(|(stored, _)| stored == day)
            .map(|(_, hours)| hours.clone())
    }

    fn entries(&self) -> Vec<(String, DayHours)> {
        self.0.clone()
    }
}

/// Adapter over the plain keyed-object encoding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyedHours(Map<String, Value>);

impl HoursLookup for KeyedHours {
    fn lookup(&self, day: &str) -> Option<DayHours> {
        self.0.get(day).and_then(DayHours::from_value)
    }

    fn entries(&self) -> Vec<(String, DayHours)> {
        self.0
            .iter()
            .filter_map(|(day, value)| DayHours::from_value(value).map(|h| (day.clone(), h)))
            .collect()
    }
}

/// Stored weekly hours with the encoding resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum BusinessHours {
    Ordered(OrderedHours),
    Keyed(KeyedHours),
    Missing,
}

impl BusinessHours {
    /// Select the adapter for whatever shape the record holds.
    pub fn from_stored(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Array(items)) => Self::Ordered(OrderedHours::from_array(items)),
            Some(Value::Object(map)) => Self::Keyed(KeyedHours(map.clone())),
            None | Some(Value::Null) => Self::Missing,
            Some(other) => {
                warn!(stored = %other, "Unrecognised business_hours shape, treating as missing");
                Self::Missing
            }
        }
    }

    /// Hours for `day`, or the default open hours when nothing is stored.
    pub fn for_day(&self, day: Weekday) -> DayHours {
        self.lookup(weekday_name(day))
            .unwrap_or_else(DayHours::default_open)
    }

    /// Every stored day, weekdays first in Monday..Sunday order, then any
    /// other keys sorted by name.
    pub fn weekly(&self) -> WeeklyHours {
        let mut stored = self.entries();
        let mut days = Vec::with_capacity(stored.len());
        for day in WEEK {
            let name = weekday_name(day);
            if let Some(pos) = stored.iter().position(|(key, _)| key == name) {
                days.push(stored.remove(pos));
            }
        }
        stored.sort_by(|(a, _), (b, _)| a.cmp(b));
        days.extend(stored);
        WeeklyHours(days)
    }
}

impl HoursLookup for BusinessHours {
    fn lookup(&self, day: &str) -> Option<DayHours> {
        match self {
            Self::Ordered(hours) => hours.lookup(day),
            Self::Keyed(hours) => hours.lookup(day),
            Self::Missing => None,
        }
    }

    fn entries(&self) -> Vec<(String, DayHours)> {
        match self {
            Self::Ordered(hours) => hours.entries(),
            Self::Keyed(hours) => hours.entries(),
            Self::Missing => Vec::new(),
        }
    }
}

/// A plain day -> hours mapping, serialized as a JSON object in entry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyHours(Vec<(String, DayHours)>);

impl WeeklyHours {
    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for WeeklyHours {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (day, hours) in &self.0 {
            map.serialize_entry(day, hours)?;
        }
        map.end()
    }
}
