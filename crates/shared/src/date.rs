use time::{Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

pub const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

pub fn parse_date(value: impl AsRef<str>) -> crate::Result<Date> {
    Ok(Date::parse(value.as_ref().trim(), DATE_FORMAT)?)
}

pub fn format_date(date: Date) -> crate::Result<String> {
    Ok(date.format(DATE_FORMAT)?)
}

/// Serde adapter storing a [`Date`] as `YYYY-MM-DD`.
pub mod serde_date {
    use serde::{Deserialize, Deserializer, Serializer, de, ser};
    use time::Date;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let value = date.format(super::DATE_FORMAT).map_err(ser::Error::custom)?;
        serializer.serialize_str(&value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let value = String::deserialize(deserializer)?;
        Date::parse(&value, super::DATE_FORMAT).map_err(de::Error::custom)
    }
}
