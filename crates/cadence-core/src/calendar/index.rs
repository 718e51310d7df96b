//! Items grouped by calendar day.

use std::collections::BTreeMap;

use jiff::civil::{Date, DateTime};
use log::debug;

use crate::{
    dates::{self, DateKey},
    models::{ScheduledItem, ViewFilter},
};

/// Mapping from day key to that day's items, ascending by time.
///
/// Items whose timestamp does not parse are skipped and only counted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventIndex {
    days: BTreeMap<DateKey, Vec<ScheduledItem>>,
    unplaced: usize,
}

impl EventIndex {
    /// Indexes every item.
    pub fn build(items: &[ScheduledItem]) -> Self {
        Self::build_filtered(items, &ViewFilter::default())
    }

    /// Indexes the items admitted by `filter`.
    pub fn build_filtered(items: &[ScheduledItem], filter: &ViewFilter) -> Self {
        let mut grouped: BTreeMap<DateKey, Vec<(DateTime, &ScheduledItem)>> = BTreeMap::new();
        let mut unplaced = 0;

        for item in items.iter().filter(|item| filter.matches(item)) {
            match item.scheduled_datetime() {
                Some(at) => grouped
                    .entry(dates::date_key(at))
                    .or_default()
                    .push((at, item)),
                None => {
                    debug!(
                        "Skipping item '{}': unparseable timestamp '{}'",
                        item.id, item.scheduled_at
                    );
                    unplaced += 1;
                }
            }
        }

        let days: BTreeMap<DateKey, Vec<ScheduledItem>> = grouped
            .into_iter()
            .map(|(key, mut entries)| {
                // Stable: items sharing a timestamp keep collection order.
                entries.sort_by_key(|(at, _)| *at);
                let items = entries.into_iter().map(|(_, item)| item.clone()).collect();
                (key, items)
            })
            .collect();

        let index = Self { days, unplaced };
        debug!("Indexed {} items, {} unplaced", index.len(), unplaced);
        index
    }

    /// Items on the given day, ascending by time.
    pub fn items_on(&self, key: DateKey) -> &[ScheduledItem] {
        self.days.get(&key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of indexed items on days of the month containing `month`.
    pub fn count_in_month(&self, month: Date) -> usize {
        let first = DateKey::from(dates::month_start(month));
        let last = DateKey::from(dates::month_end(month));
        self.days.range(first..=last).map(|(_, items)| items.len()).sum()
    }

    /// Total number of placed items.
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Items skipped because their timestamp did not parse.
    pub fn unplaced(&self) -> usize {
        self.unplaced
    }

    /// Placed items at or after `from`, ascending.
    pub fn upcoming(&self, from: DateTime) -> impl Iterator<Item = &ScheduledItem> {
        self.days
            .range(dates::date_key(from)..)
            .flat_map(|(_, items)| items.iter())
            .filter(move |item| item.scheduled_datetime().is_some_and(|at| at >= from))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, datetime};

    use super::*;
    use crate::models::{ContentType, ItemStatus, Platform};

    fn item(id: &str, at: &str, platform: Platform) -> ScheduledItem {
        ScheduledItem {
            id: id.to_string(),
            title: id.to_string(),
            scheduled_at: at.to_string(),
            platform: Some(platform),
            status: ItemStatus::Scheduled,
            content_type: ContentType::Post,
            ai_generated: false,
            campaign: None,
            description: None,
            priority: None,
        }
    }

    fn ids(items: &[ScheduledItem]) -> Vec<&str> {
        items.iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn test_groups_and_sorts_by_time() {
        let items = vec![
            item("late", "2024-05-01T20:00", Platform::Instagram),
            item("other-day", "2024-05-02T08:00", Platform::Instagram),
            item("early", "2024-05-01T07:30", Platform::Facebook),
            item("noon", "2024-05-01T12:00", Platform::Tiktok),
        ];
        let index = EventIndex::build(&items);

        assert_eq!(
            ids(index.items_on(date(2024, 5, 1).into())),
            vec!["early", "noon", "late"]
        );
        assert_eq!(ids(index.items_on(date(2024, 5, 2).into())), vec!["other-day"]);
        assert!(index.items_on(date(2024, 5, 3).into()).is_empty());
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn test_ties_keep_collection_order() {
        let items = vec![
            item("b", "2024-05-01T09:00", Platform::Instagram),
            item("a", "2024-05-01T09:00", Platform::Instagram),
        ];
        let index = EventIndex::build(&items);
        assert_eq!(ids(index.items_on(date(2024, 5, 1).into())), vec!["b", "a"]);
    }

    #[test]
    fn test_unparseable_items_are_skipped() {
        let items = vec![
            item("ok", "2024-05-01T09:00", Platform::Instagram),
            item("bad", "31/05/2024 9am", Platform::Instagram),
            item("empty", "", Platform::Instagram),
        ];
        let index = EventIndex::build(&items);

        assert_eq!(index.len(), 1);
        assert_eq!(index.unplaced(), 2);
    }

    #[test]
    fn test_count_in_month() {
        let items = vec![
            item("apr", "2024-04-30T23:59", Platform::Instagram),
            item("may-1", "2024-05-01T00:00", Platform::Instagram),
            item("may-31", "2024-05-31T23:00", Platform::Instagram),
            item("jun", "2024-06-01T00:00", Platform::Instagram),
        ];
        let index = EventIndex::build(&items);

        assert_eq!(index.count_in_month(date(2024, 5, 17)), 2);
        assert_eq!(index.count_in_month(date(2024, 4, 1)), 1);
        assert_eq!(index.count_in_month(date(2024, 7, 1)), 0);
    }

    #[test]
    fn test_filtered_build() {
        let items = vec![
            item("ig", "2024-05-01T09:00", Platform::Instagram),
            item("fb", "2024-05-01T10:00", Platform::Facebook),
        ];
        let index = EventIndex::build_filtered(&items, &ViewFilter::for_platform(Platform::Facebook));
        assert_eq!(ids(index.items_on(date(2024, 5, 1).into())), vec!["fb"]);
    }

    #[test]
    fn test_upcoming() {
        let items = vec![
            item("past", "2024-05-01T09:00", Platform::Instagram),
            item("same-day-later", "2024-05-02T18:00", Platform::Instagram),
            item("same-day-earlier", "2024-05-02T07:00", Platform::Instagram),
            item("next-week", "2024-05-09T09:00", Platform::Instagram),
        ];
        let index = EventIndex::build(&items);
        let upcoming: Vec<&str> = index
            .upcoming(datetime(2024, 5, 2, 12, 0, 0, 0))
            .map(|item| item.id.as_str())
            .collect();

        assert_eq!(upcoming, vec!["same-day-later", "next-week"]);
    }
}
