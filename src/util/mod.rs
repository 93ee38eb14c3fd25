use chrono::{DateTime, Utc};

pub mod geo;
pub mod logging;

pub struct DateTimeUtils {}

impl DateTimeUtils {
    pub fn timestamp_to_str(timestamp: i64) -> String {
        match DateTime::<Utc>::from_timestamp(timestamp, 0) {
            Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_format_as_utc_date_time() {
        assert_eq!(
            DateTimeUtils::timestamp_to_str(1700000000),
            "2023-11-14 22:13:20"
        );
    }

    #[test]
    fn epoch_formats_cleanly() {
        assert_eq!(DateTimeUtils::timestamp_to_str(0), "1970-01-01 00:00:00");
    }
}
