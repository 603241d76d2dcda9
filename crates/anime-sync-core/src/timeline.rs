use anime_sync_models::{MediaRecord, TimelineEntry, TimelineKind};

/// Flatten a cluster into its release-ordered timeline. Entries without a
/// resolvable date sort before everything else; ties break on title. ISO
/// dates compare correctly as strings, so the sort key is just the pair.
pub fn build_timeline(members: &[MediaRecord]) -> Vec<TimelineEntry> {
    let mut entries: Vec<TimelineEntry> = members.iter().map(to_entry).collect();
    entries.sort_by(|a, b| {
        let key_a = (a.release_date.as_deref().unwrap_or(""), a.title.as_str());
        let key_b = (b.release_date.as_deref().unwrap_or(""), b.title.as_str());
        key_a.cmp(&key_b)
    });
    entries
}

fn to_entry(record: &MediaRecord) -> TimelineEntry {
    TimelineEntry {
        kind: record
            .format
            .map_or(TimelineKind::Season, |f| f.timeline_kind()),
        title: record.title.display().to_string(),
        episodes: record.episodes,
        is_canon: record.format.is_some_and(|f| f.is_main_series()),
        status: record
            .status
            .as_deref()
            .unwrap_or("released")
            .to_lowercase(),
        release_date: record.start_date.iso_date(),
        season_year: record.season_year,
        anilist_id: record.id,
    }
}
