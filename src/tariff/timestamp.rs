use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

#[derive(Debug, thiserror::Error)]
pub enum RateError {
    #[error("no timestamp is given")]
    MissingTimestamp,

    #[error("`{input}` is not a valid date-time")]
    Parse {
        input: String,

        #[source]
        source: chrono::ParseError,
    },
}

const FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse the timestamp as the local civil time.
///
/// An explicit UTC offset is accepted and discarded, no conversion is made.
/// A bare date stands for its midnight.
pub fn parse_timestamp(input: Option<&str>) -> Result<NaiveDateTime, RateError> {
    let input = input.ok_or(RateError::MissingTimestamp)?.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Ok(timestamp.naive_local());
    }
    if let Some(timestamp) =
        FORMATS.iter().find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
    {
        return Ok(timestamp);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|source| RateError::Parse { input: input.to_owned(), source })
}
