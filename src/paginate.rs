//! Sorting and "load more" pagination shared by every grid region
//!
//! A [`PaginationState`] owns the loaded items together with the sort mode and
//! page cursor. Pages accumulate: the visible window is always the first
//! `current_page * page_size` items of the sorted collection.

use crate::types::{Counters, SortMode};
use chrono::{DateTime, Utc};
use icu_collator::{Collator, CollatorOptions};
use std::cmp::{Ordering, Reverse};
use tracing::warn;

/// Recency key of an item. Larger is newer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Recency {
    /// Position in a source that is already ordered newest-first
    Listed(Reverse<usize>),
    Dated(DateTime<Utc>),
}

impl Recency {
    pub fn listed(position: usize) -> Self {
        Recency::Listed(Reverse(position))
    }
}

/// Sort keys an item type exposes to the paginator
pub trait Listing {
    /// Stable display key
    fn key(&self) -> &str;
    fn title(&self) -> &str;
    fn recency(&self) -> Recency;
}

thread_local! {
    // Root-locale UCA collation; `None` if the compiled collation data fails to load
    static TITLE_COLLATOR: Option<Collator> =
        match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(e) => {
                warn!(error = %e, "Collator unavailable, sorting titles case-insensitively");
                None
            }
        };
}

/// Locale-aware title order: accents and case are secondary to the base
/// letters, so "Éclair" sorts among the E's. Among titles the collator
/// treats as equal, lowercase sorts first.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    TITLE_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => a
                .chars()
                .flat_map(char::to_lowercase)
                .cmp(b.chars().flat_map(char::to_lowercase)),
        })
        .then_with(|| b.cmp(a))
}

/// Order `items` by `mode` without touching the input. Ties keep their
/// source order.
pub fn sort<T: Listing>(items: &[T], mode: SortMode) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    match mode {
        SortMode::Newest => sorted.sort_by(|a, b| b.recency().cmp(&a.recency())),
        SortMode::Oldest => sorted.sort_by(|a, b| a.recency().cmp(&b.recency())),
        SortMode::NameAsc => sorted.sort_by(|a, b| compare_titles(a.title(), b.title())),
    }
    sorted
}

#[derive(Debug, Clone)]
pub struct PaginationState<T> {
    items: Vec<T>,
    sort_mode: SortMode,
    page_size: usize,
    current_page: usize,
}

impl<T: Listing> PaginationState<T> {
    /// `page_size` of zero is treated as one.
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            sort_mode: SortMode::default(),
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    /// Same as [`PaginationState::new`] but every item is visible at once.
    pub fn unpaginated(items: Vec<T>) -> Self {
        Self::new(items, usize::MAX)
    }

    #[cfg(test)]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    #[cfg(test)]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    fn window_len(&self) -> usize {
        self.current_page.saturating_mul(self.page_size)
    }

    /// The sorted prefix currently shown
    pub fn visible_window(&self) -> Vec<&T> {
        let mut sorted = sort(&self.items, self.sort_mode);
        sorted.truncate(self.window_len());
        sorted
    }

    pub fn counters(&self) -> Counters {
        let total = self.items.len();
        Counters {
            showing: self.window_len().min(total),
            total,
        }
    }

    /// Whether a "load more" trigger should still be offered
    pub fn has_more(&self) -> bool {
        self.window_len() < self.items.len()
    }

    /// Switch ordering; the window collapses back to the first page.
    pub fn on_sort_change(&mut self, mode: SortMode) {
        self.sort_mode = mode;
        self.current_page = 1;
    }

    pub fn on_load_more(&mut self) {
        self.current_page = self.current_page.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::{parse_date_text, FALLBACK_INSTANT};
    use chrono::TimeZone;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        key: String,
        title: String,
        recency: Recency,
    }

    impl Listing for Item {
        fn key(&self) -> &str {
            &self.key
        }
        fn title(&self) -> &str {
            &self.title
        }
        fn recency(&self) -> Recency {
            self.recency
        }
    }

    fn dated(key: &str, date: &str) -> Item {
        let ts = parse_date_text(date, Utc::now()).unwrap_or(FALLBACK_INSTANT);
        Item {
            key: key.to_string(),
            title: key.to_string(),
            recency: Recency::Dated(ts),
        }
    }

    fn titled(title: &str) -> Item {
        Item {
            key: title.to_string(),
            title: title.to_string(),
            recency: Recency::Dated(FALLBACK_INSTANT),
        }
    }

    fn keys(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.key.clone()).collect()
    }

    fn numbered(n: usize) -> Vec<Item> {
        (0..n)
            .map(|i| Item {
                key: format!("item-{i:02}"),
                title: format!("Item {i:02}"),
                recency: Recency::Dated(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
                    + chrono::Duration::days(i as i64)),
            })
            .collect()
    }

    #[test]
    fn newest_and_oldest_order_by_date() {
        let items = vec![
            dated("b", "2023-06-01"),
            dated("a", "2021-01-15"),
            dated("c", "2024-02-29"),
        ];
        assert_eq!(keys(&sort(&items, SortMode::Newest)), ["c", "b", "a"]);
        assert_eq!(keys(&sort(&items, SortMode::Oldest)), ["a", "b", "c"]);
    }

    #[test]
    fn sort_leaves_input_untouched() {
        let items = vec![dated("old", "2019-01-01"), dated("new", "2024-01-01")];
        let before = items.clone();
        let _ = sort(&items, SortMode::Newest);
        assert_eq!(items, before);
    }

    #[test]
    fn name_sort_ignores_case() {
        let items = vec![titled("zebra"), titled("Apple"), titled("mango"), titled("banana")];
        assert_eq!(
            keys(&sort(&items, SortMode::NameAsc)),
            ["Apple", "banana", "mango", "zebra"]
        );
    }

    #[test]
    fn name_sort_places_accented_titles_with_their_base_letter() {
        let items = vec![titled("Zebra"), titled("Éclair"), titled("apple")];
        assert_eq!(
            keys(&sort(&items, SortMode::NameAsc)),
            ["apple", "Éclair", "Zebra"]
        );

        assert_eq!(compare_titles("Éclair", "Zebra"), Ordering::Less);
        assert_eq!(compare_titles("émile", "Fred"), Ordering::Less);
        assert_eq!(compare_titles("Eclair", "Éclair"), Ordering::Less);
    }

    #[test]
    fn name_sort_mixes_case_and_accents() {
        let items = vec![
            titled("Österreich"),
            titled("banana"),
            titled("Ångström"),
            titled("oak"),
            titled("Zoo"),
            titled("ember"),
        ];
        assert_eq!(
            keys(&sort(&items, SortMode::NameAsc)),
            ["Ångström", "banana", "ember", "oak", "Österreich", "Zoo"]
        );
    }

    #[test]
    fn name_sort_puts_lowercase_first_on_case_ties() {
        let items = vec![titled("Rust"), titled("rust")];
        assert_eq!(keys(&sort(&items, SortMode::NameAsc)), ["rust", "Rust"]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let items = vec![
            dated("x", "2022-03-01"),
            dated("y", "2020-03-01"),
            dated("z", "2022-03-01"),
            dated("w", "not-a-date"),
        ];
        for mode in SortMode::ALL {
            let once: Vec<Item> = sort(&items, mode).into_iter().cloned().collect();
            let twice = sort(&once, mode);
            assert_eq!(keys(&twice), once.iter().map(|i| i.key.clone()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn equal_dates_keep_source_order() {
        let items = vec![
            dated("A", "2024-01-01"),
            dated("older", "2023-01-01"),
            dated("B", "2024-01-01"),
        ];
        assert_eq!(keys(&sort(&items, SortMode::Newest)), ["A", "B", "older"]);
        assert_eq!(keys(&sort(&items, SortMode::Oldest)), ["older", "A", "B"]);
    }

    #[test]
    fn equal_titles_keep_source_order() {
        let mut first = titled("Same");
        first.key = "first".into();
        let mut second = titled("Same");
        second.key = "second".into();
        let items = vec![first, titled("Earlier"), second];
        assert_eq!(
            keys(&sort(&items, SortMode::NameAsc)),
            ["Earlier", "first", "second"]
        );
    }

    #[test]
    fn unparseable_dates_sort_oldest() {
        let items = vec![
            dated("bad", "not-a-date"),
            dated("ancient", "1901-01-01"),
            dated("recent", "2024-01-01"),
        ];
        assert_eq!(keys(&sort(&items, SortMode::Newest)), ["recent", "ancient", "bad"]);
        assert_eq!(keys(&sort(&items, SortMode::Oldest)), ["bad", "ancient", "recent"]);
    }

    #[test]
    fn listed_items_keep_source_order_as_newest() {
        let items: Vec<Item> = ["first", "second", "third"]
            .iter()
            .enumerate()
            .map(|(i, k)| Item {
                key: k.to_string(),
                title: k.to_string(),
                recency: Recency::listed(i),
            })
            .collect();
        assert_eq!(keys(&sort(&items, SortMode::Newest)), ["first", "second", "third"]);
        assert_eq!(keys(&sort(&items, SortMode::Oldest)), ["third", "second", "first"]);
    }

    #[test]
    fn counters_cap_at_total() {
        let mut state = PaginationState::new(numbered(14), 6);
        assert_eq!(state.counters(), Counters { showing: 6, total: 14 });
        assert!(state.has_more());

        state.on_load_more();
        assert_eq!(state.counters(), Counters { showing: 12, total: 14 });
        assert!(state.has_more());

        state.on_load_more();
        assert_eq!(state.current_page(), 3);
        assert_eq!(state.counters(), Counters { showing: 14, total: 14 });
        assert!(!state.has_more());
    }

    #[test]
    fn windows_grow_as_prefixes() {
        let mut state = PaginationState::new(numbered(20), 6);
        let mut previous = keys(&state.visible_window());
        assert_eq!(previous.len(), 6);
        for _ in 0..4 {
            state.on_load_more();
            let next = keys(&state.visible_window());
            assert!(next.len() >= previous.len());
            assert_eq!(&next[..previous.len()], &previous[..]);
            previous = next;
        }
        assert_eq!(previous.len(), 20);
    }

    #[test]
    fn sort_change_resets_to_first_page() {
        let mut state = PaginationState::new(numbered(14), 6);
        state.on_load_more();
        state.on_load_more();
        assert_eq!(state.current_page(), 3);

        state.on_sort_change(SortMode::NameAsc);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.sort_mode(), SortMode::NameAsc);
        assert_eq!(state.visible_window().len(), 6);

        state.on_sort_change(SortMode::NameAsc);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn load_more_past_the_end_changes_nothing() {
        let mut state = PaginationState::new(numbered(5), 2);
        for _ in 0..10 {
            state.on_load_more();
        }
        let full: Vec<String> = keys(&sort(state.items(), state.sort_mode()));
        assert_eq!(keys(&state.visible_window()), full);
        let counters = state.counters();
        assert_eq!(counters.showing, counters.total);
        assert!(!state.has_more());
    }

    #[test]
    fn empty_collection() {
        let mut state: PaginationState<Item> = PaginationState::new(Vec::new(), 6);
        assert_eq!(state.counters(), Counters { showing: 0, total: 0 });
        assert!(state.visible_window().is_empty());
        assert!(!state.has_more());
        state.on_load_more();
        state.on_sort_change(SortMode::Oldest);
        assert!(state.visible_window().is_empty());
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let state = PaginationState::new(numbered(3), 0);
        assert_eq!(state.page_size(), 1);
        assert_eq!(state.visible_window().len(), 1);
    }

    #[test]
    fn unpaginated_shows_everything() {
        let mut state = PaginationState::unpaginated(numbered(40));
        assert_eq!(state.counters(), Counters { showing: 40, total: 40 });
        state.on_load_more();
        assert_eq!(state.visible_window().len(), 40);
        assert!(!state.has_more());
    }

    #[test]
    fn default_mode_is_newest() {
        let state = PaginationState::new(numbered(3), 6);
        assert_eq!(state.sort_mode(), SortMode::Newest);
        assert_eq!(keys(&state.visible_window()), ["item-02", "item-01", "item-00"]);
    }
}
