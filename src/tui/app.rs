use crate::index::types::DocRecord;
use crate::index::SearchIndexTable;
use crate::query::LookupOptions;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Instant;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Search,
    Help,
}

/// One selectable line in the results list
#[derive(Debug, Clone)]
pub struct ResultRow {
    pub key: String,
    pub record: DocRecord,
    /// Number of records sharing this key (overloads)
    pub siblings: usize,
}

/// LRU cache size for lookup results
const SEARCH_CACHE_SIZE: usize = 64;

/// Rows moved by page up/down
const PAGE_SIZE: usize = 10;

/// Application state
pub struct App {
    table: Arc<SearchIndexTable>,
    options: LookupOptions,
    pub query: String,
    pub results: Vec<ResultRow>,
    pub selected: usize,
    pub mode: Mode,
    pub status_message: String,
    /// Record picked with Enter
    pub chosen: Option<DocRecord>,
    /// Recent lookups, keyed by query text
    search_cache: LruCache<String, Vec<ResultRow>>,
}

impl App {
    pub fn new(table: Arc<SearchIndexTable>, options: LookupOptions) -> Self {
        let status_message = format!(
            "{} entries, {} records loaded",
            table.len(),
            table.record_count()
        );

        Self {
            table,
            options,
            query: String::new(),
            results: Vec::new(),
            selected: 0,
            mode: Mode::Search,
            status_message,
            chosen: None,
            search_cache: LruCache::new(
                NonZeroUsize::new(SEARCH_CACHE_SIZE).unwrap_or(NonZeroUsize::MIN),
            ),
        }
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.execute_search();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.execute_search();
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
        self.execute_search();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.execute_search();
    }

    /// Look up the current query and refresh the results list
    pub fn execute_search(&mut self) {
        let start = Instant::now();
        self.selected = 0;

        if let Some(cached) = self.search_cache.get(&self.query) {
            self.results = cached.clone();
        } else {
            let entries = self.table.lookup_with(&self.query, &self.options);
            let results: Vec<ResultRow> = entries
                .iter()
                .flat_map(|entry| {
                    let siblings = entry.records.len();
                    entry.records.iter().map(move |record| ResultRow {
                        key: entry.key.clone(),
                        record: record.clone(),
                        siblings,
                    })
                })
                .collect();
            self.search_cache.put(self.query.clone(), results.clone());
            self.results = results;
        }

        self.status_message = format!(
            "{} results for \"{}\" ({:.2}ms)",
            self.results.len(),
            self.query,
            start.elapsed().as_secs_f64() * 1000.0
        );
    }

    pub fn selected_result(&self) -> Option<&ResultRow> {
        self.results.get(self.selected)
    }

    /// Pick the selected record; the caller exits afterwards
    pub fn choose_selected(&mut self) -> bool {
        self.chosen = self.selected_result().map(|row| row.record.clone());
        self.chosen.is_some()
    }

    pub fn select_next(&mut self) {
        if !self.results.is_empty() {
            self.selected = (self.selected + 1).min(self.results.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_page_down(&mut self) {
        if !self.results.is_empty() {
            self.selected = (self.selected + PAGE_SIZE).min(self.results.len() - 1);
        }
    }

    pub fn select_page_up(&mut self) {
        self.selected = self.selected.saturating_sub(PAGE_SIZE);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.results.len().saturating_sub(1);
    }

    pub fn show_help(&mut self) {
        self.mode = Mode::Help;
    }

    pub fn hide_help(&mut self) {
        self.mode = Mode::Search;
    }

    /// Delete the last word of the query (Ctrl+W)
    pub fn delete_word(&mut self) {
        while self.query.ends_with(' ') {
            self.query.pop();
        }
        while !self.query.is_empty() && !self.query.ends_with(' ') {
            self.query.pop();
        }
        self.execute_search();
    }
}
