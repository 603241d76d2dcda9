use anime_sync_models::MediaRecord;
use std::cmp::Reverse;

/// Pick the record that fronts a cluster. Ascending order over a composite
/// key, first element wins:
/// 1. earliest start date (unknown year sorts last),
/// 2. format priority (TV first),
/// 3. longest description,
/// 4. highest average score (missing scores count as 0),
/// 5. lowest id, so equal records select identically in any member order.
pub fn select_primary(members: &[MediaRecord]) -> Option<&MediaRecord> {
    members.iter().min_by_key(|record| {
        (
            record.start_date.sort_key(),
            record.format.map_or(99, |f| f.priority()),
            Reverse(record.description_len()),
            Reverse(record.average_score.unwrap_or(0)),
            record.id,
        )
    })
}
