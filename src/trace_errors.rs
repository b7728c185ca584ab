use thiserror::Error;

use crate::{
    sgp4::PropagationError,
    time::{ParseTimeError, UtcInstant},
    tle::ParseTleError,
};

#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Error while parsing the element set: {0}")]
    TleParsing(#[from] ParseTleError),

    #[error("Error while parsing a timestamp: {0}")]
    TimestampParsing(#[from] ParseTimeError),

    #[error("Step size must be strictly positive, got {0} s")]
    NonPositiveStep(i64),

    #[error("End of the time window ({end}) is before its start ({start})")]
    EndBeforeStart { start: UtcInstant, end: UtcInstant },

    #[error("Propagation failed at {timestamp}: {source}")]
    Propagation {
        timestamp: UtcInstant,
        source: PropagationError,
    },

    #[error("Satellite not found in the catalog: {0}")]
    SatelliteNotFound(String),

    #[error("CSV writing error: {0}")]
    CsvError(#[from] csv::Error),
}

impl PartialEq for TraceError {
    fn eq(&self, other: &Self) -> bool {
        use TraceError::*;
        match (self, other) {
            (TleParsing(a), TleParsing(b)) => a == b,
            (TimestampParsing(a), TimestampParsing(b)) => a == b,
            (NonPositiveStep(a), NonPositiveStep(b)) => a == b,
            (
                EndBeforeStart { start, end },
                EndBeforeStart {
                    start: other_start,
                    end: other_end,
                },
            ) => start == other_start && end == other_end,
            (
                Propagation { timestamp, source },
                Propagation {
                    timestamp: other_timestamp,
                    source: other_source,
                },
            ) => timestamp == other_timestamp && source == other_source,
            (SatelliteNotFound(a), SatelliteNotFound(b)) => a == b,

            // not comparable, equal when the variant matches
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,

            _ => false,
        }
    }
}
