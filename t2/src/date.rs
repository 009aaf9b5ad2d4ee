use crate::Result;
use time::format_description::BorrowedFormatItem;
use time::macros::{format_description, offset};
use time::{OffsetDateTime, UtcOffset};

/// The web client reports wall-clock time at the marketplace's own
/// offset (UTC+5), regardless of where the process runs.
const LOCAL_OFFSET: UtcOffset = offset!(+5);

const FORMAT: &[BorrowedFormatItem<'_>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3][offset_hour sign:mandatory][offset_minute]"
);

/// Current time as `YYYY-MM-DDTHH:MM:SS.mmm±HHMM` for the
/// `x-user-local-time` header.
pub(crate) fn local_time() -> Result<String> {
    format_at(OffsetDateTime::now_utc().to_offset(LOCAL_OFFSET))
}

fn format_at(moment: OffsetDateTime) -> Result<String> {
    Ok(moment.format(FORMAT)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn formats_with_millisecond_precision_and_flat_offset() {
        let moment = datetime!(2025-01-15 10:20:30.123456 +5);
        assert_eq!(format_at(moment).unwrap(), "2025-01-15T10:20:30.123+0500");
    }

    #[test]
    fn pads_subsecond_and_offset_fields() {
        let moment = datetime!(2025-06-01 00:00:05.007 +5);
        assert_eq!(format_at(moment).unwrap(), "2025-06-01T00:00:05.007+0500");
    }

    #[test]
    fn current_time_carries_the_fixed_offset() {
        assert!(local_time().unwrap().ends_with("+0500"));
    }
}
