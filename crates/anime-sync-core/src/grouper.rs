use crate::classifier::is_excluded;
use anime_sync_models::MediaRecord;
use std::collections::HashMap;
use tracing::trace;

/// Groups records into franchise clusters: a union-find over ids connected
/// by allow-listed relation edges. Parent pointers live in a flat index
/// table; the id→record map is owned here for the duration of one run, so
/// repeated runs never share state.
///
/// Exclusion policy: an adult/kids record is never registered at all. It
/// cannot join a cluster and it cannot act as a bridge between two records
/// that are otherwise unrelated.
#[derive(Default)]
pub struct RelationGrouper {
    parent: Vec<usize>,
    index_of: HashMap<i64, usize>,
    records: HashMap<i64, MediaRecord>,
}

impl RelationGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest one fetched record and its qualifying relation edges.
    pub fn insert(&mut self, record: MediaRecord) {
        if is_excluded(&record) {
            trace!(id = record.id, "skipping excluded record");
            return;
        }

        let index = self.register(record.id);
        let edges: Vec<(i64, MediaRecord)> = record
            .relations
            .iter()
            .filter(|edge| edge.kind.is_franchise())
            .filter_map(|edge| edge.target.as_ref())
            .filter(|target| target.is_anime() && !is_excluded(target))
            .map(|target| (target.id, target.clone()))
            .collect();

        // First occurrence wins: whichever copy of a record arrives first,
        // top-level or nested in another record's edges, stays in the table.
        // Top-level records are inserted before their edge targets.
        self.records.entry(record.id).or_insert(record);

        for (target_id, target) in edges {
            let target_index = self.register(target_id);
            self.records.entry(target_id).or_insert(target);
            self.union(index, target_index);
        }
    }

    /// Partition everything seen so far into clusters, applying the
    /// exclusion filter once more over final membership. Clusters and their
    /// members come out in ascending id order.
    pub fn clusters(mut self) -> Vec<Vec<MediaRecord>> {
        let mut by_root: HashMap<usize, Vec<i64>> = HashMap::new();
        let ids: Vec<(i64, usize)> = self.index_of.iter().map(|(&id, &idx)| (id, idx)).collect();
        for (id, index) in ids {
            let root = self.find(index);
            by_root.entry(root).or_default().push(id);
        }

        let mut clusters: Vec<Vec<MediaRecord>> = by_root
            .into_values()
            .map(|mut member_ids| {
                member_ids.sort_unstable();
                member_ids
                    .into_iter()
                    .filter_map(|id| self.records.remove(&id))
                    .filter(|record| !is_excluded(record))
                    .collect::<Vec<_>>()
            })
            .filter(|members: &Vec<MediaRecord>| !members.is_empty())
            .collect();

        clusters.sort_by_key(|members| members[0].id);
        clusters
    }

    fn register(&mut self, id: i64) -> usize {
        if let Some(&index) = self.index_of.get(&id) {
            return index;
        }
        let index = self.parent.len();
        self.parent.push(index);
        self.index_of.insert(id, index);
        index
    }

    fn find(&mut self, index: usize) -> usize {
        if self.parent[index] != index {
            let root = self.find(self.parent[index]);
            self.parent[index] = root;
        }
        self.parent[index]
    }

    fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            self.parent[root_b] = root_a;
        }
    }
}
