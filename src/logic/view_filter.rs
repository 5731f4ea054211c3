//! Filter and sort pipeline behind the main list view.
//!
//! Every derivation is a pure function of the collection and the query;
//! callers recompute on each state change instead of caching results.

use std::cmp::Ordering;

use crate::logic::collation::locale_compare;
use crate::model::{AdvancedFilter, Record, SortKey, SortOrder, ViewQuery};

/// Record predicate evaluator
pub struct RecordFilterEvaluator;

impl RecordFilterEvaluator {
    /// Keep the records that satisfy every predicate of the query
    pub fn filter_records<'a>(records: &'a [Record], query: &ViewQuery) -> Vec<&'a Record> {
        records
            .iter()
            .filter(|record| Self::matches(record, query))
            .collect()
    }

    /// Search, status, type and organization predicates combined
    pub fn matches(record: &Record, query: &ViewQuery) -> bool {
        Self::matches_search(record, &query.search)
            && query.status.accepts(record.status())
            && query.record_type.accepts(record.type_label())
            && query.org.accepts(record.owner(), record.team())
    }

    /// Case-insensitive substring match on name, description or type
    pub fn matches_search(record: &Record, search: &str) -> bool {
        if search.is_empty() {
            return true;
        }
        let needle = search.to_lowercase();
        record.name().to_lowercase().contains(&needle)
            || record.description().to_lowercase().contains(&needle)
            || record
                .type_label()
                .is_some_and(|t| t.to_lowercase().contains(&needle))
    }

    /// Advanced-search criteria. Unlike the list predicates, a non-empty
    /// criterion fails records that lack the field entirely.
    pub fn matches_advanced(record: &Record, filter: &AdvancedFilter) -> bool {
        if !Self::matches_search(record, &filter.query) {
            return false;
        }
        if !filter.types.is_empty()
            && !record
                .type_label()
                .is_some_and(|t| filter.types.iter().any(|wanted| wanted == t))
        {
            return false;
        }
        if !filter.statuses.is_empty()
            && !record
                .status()
                .is_some_and(|s| filter.statuses.iter().any(|wanted| wanted == s))
        {
            return false;
        }
        if !filter.owners.is_empty() {
            let owner = record.owner().or_else(|| record.team());
            if !owner.is_some_and(|o| filter.owners.iter().any(|wanted| wanted == o)) {
                return false;
            }
        }
        if !filter.tags.is_empty()
            && !record
                .tags()
                .is_some_and(|tags| tags.iter().any(|tag| filter.tags.contains(tag)))
        {
            return false;
        }
        if filter.has_repository && !record.repository().is_some_and(|r| !r.is_empty()) {
            return false;
        }
        if filter.has_dependencies && !record.dependencies().is_some_and(|d| !d.is_empty()) {
            return false;
        }
        true
    }

    /// Derived sort key; missing fields sort as the empty string
    pub fn sort_key(record: &Record, key: SortKey) -> &str {
        match key {
            SortKey::Name => record.name(),
            SortKey::Updated => record.updated().unwrap_or(""),
            SortKey::Owner => record.owner().or_else(|| record.team()).unwrap_or(""),
        }
    }

    pub fn compare(a: &Record, b: &Record, key: SortKey, order: SortOrder) -> Ordering {
        let ordering = locale_compare(Self::sort_key(a, key), Self::sort_key(b, key));
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }

    /// Stable sort: records with equal keys keep their incoming order in
    /// both directions
    pub fn sort_records(records: &mut [&Record], key: SortKey, order: SortOrder) {
        records.sort_by(|a, b| Self::compare(a, b, key, order));
    }
}

/// Filter, optionally narrow by advanced criteria, then sort
pub fn compose_view(
    records: &[Record],
    query: &ViewQuery,
    advanced: Option<&AdvancedFilter>,
) -> Vec<Record> {
    let mut visible = RecordFilterEvaluator::filter_records(records, query);
    if let Some(advanced) = advanced.filter(|a| !a.is_empty()) {
        visible.retain(|record| RecordFilterEvaluator::matches_advanced(record, advanced));
    }
    RecordFilterEvaluator::sort_records(&mut visible, query.sort_by, query.sort_order);

    log::debug!(
        "composed view: {} of {} records visible",
        visible.len(),
        records.len()
    );
    visible.into_iter().cloned().collect()
}
