//! Date-window chunking for parallel provider fetches.

use chrono::{Duration, NaiveDate};

use crate::error::FetchError;

/// Split an inclusive `[from, to]` date window into consecutive chunks of
/// at most `chunk_days` days each.
pub(crate) fn split_window(
    from: NaiveDate,
    to: NaiveDate,
    chunk_days: i64,
) -> Result<Vec<(NaiveDate, NaiveDate)>, FetchError> {
    if from > to {
        return Err(FetchError::InvalidWindow(format!(
            "from {from} is after to {to}"
        )));
    }
    if chunk_days < 1 {
        return Err(FetchError::InvalidWindow(format!(
            "chunk_days must be at least 1, got {chunk_days}"
        )));
    }

    let mut chunks = Vec::new();
    let mut start = from;
    while start <= to {
        let end = (start + Duration::days(chunk_days - 1)).min(to);
        chunks.push((start, end));
        start = end + Duration::days(1);
    }
    Ok(chunks)
}
