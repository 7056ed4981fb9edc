//! Timezone lookup for displaying transaction dates in local time.

use time::{OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone, Tz};

/// Look up a timezone by its canonical name, e.g. "Pacific/Auckland".
pub fn get_timezone(canonical_timezone: &str) -> Option<&'static Tz> {
    time_tz::timezones::get_by_name(canonical_timezone)
}

/// The UTC offset that `timezone` observed at `date_time`.
pub fn get_local_offset_at(timezone: &Tz, date_time: OffsetDateTime) -> UtcOffset {
    timezone.get_offset_utc(&date_time).to_utc()
}
