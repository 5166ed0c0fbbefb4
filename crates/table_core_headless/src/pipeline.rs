//! Query/sort/page controller over an owned record collection.

use crate::config::PipelineConfig;
use crate::filter::filter_records;
use crate::paginate::{paginate, total_pages, PageRange, DEFAULT_PAGE_SIZE};
use crate::record::{CellValue, TableRecord};
use crate::sort::{sort_records, SortDirection, SortSpec};

/// Record reference tagged with its position in the owned collection.
struct Indexed<'a, R> {
    index: usize,
    record: &'a R,
}

impl<R> Clone for Indexed<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Indexed<'_, R> {}

impl<R> TableRecord for Indexed<'_, R>
where
    R: TableRecord,
{
    fn cell(&self, field: &str) -> CellValue {
        self.record.cell(field)
    }

    fn cells(&self) -> Vec<CellValue> {
        self.record.cells()
    }
}

/// Read-only view of the pipeline output after the latest transition.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSnapshot<'a, R> {
    /// Records on the current page, in display order.
    pub paginated_records: Vec<&'a R>,
    /// Records left after filtering, across all pages.
    pub total_items: usize,
    /// Active search query.
    pub current_query: &'a str,
    /// Active sort field, if any.
    pub current_sort_field: Option<&'a str>,
    /// Active sort direction.
    pub current_sort_direction: SortDirection,
    /// 1-based page index.
    pub current_page: usize,
    /// Records per page.
    pub page_size: usize,
    /// Page count for the filtered set (at least one).
    pub total_pages: usize,
    /// 1-based item window of the current page.
    pub page_range: PageRange,
}

/// Search, sort, and pagination state for one table.
///
/// Every mutator runs synchronously and leaves the pipeline consistent. Query and sort changes
/// always return to page 1; page changes only move the window. The filtered and ordered sets are
/// rebuilt only when the query, sort, or records actually change.
#[derive(Debug, Clone)]
pub struct TablePipeline<R> {
    records: Vec<R>,
    config: PipelineConfig,
    query: String,
    sort: SortSpec,
    current_page: usize,
    page_size: usize,
    filtered: Vec<usize>,
    ordered: Vec<usize>,
    generation: u64,
}

impl<R> TablePipeline<R>
where
    R: TableRecord,
{
    /// Builds a pipeline over `records`. Invalid config values fall back to their defaults.
    pub fn new(records: Vec<R>, config: PipelineConfig) -> Self {
        let config = config.normalized();
        let mut pipeline = Self {
            records,
            query: String::new(),
            sort: config.initial_sort(),
            current_page: 1,
            page_size: config.page_size,
            config,
            filtered: Vec::new(),
            ordered: Vec::new(),
            generation: 0,
        };
        pipeline.refilter();
        pipeline
    }

    /// Owned records in their original order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Normalized config the pipeline was built with.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Active search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Active sort.
    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    /// 1-based page index.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Records per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Records left after filtering.
    pub fn total_items(&self) -> usize {
        self.filtered.len()
    }

    /// Page count for the filtered set.
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items(), self.page_size)
    }

    /// 1-based item window of the current page.
    pub fn page_range(&self) -> PageRange {
        PageRange::for_page(self.total_items(), self.current_page, self.page_size)
    }

    /// Counter bumped every time the filtered/ordered sets are rebuilt.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Filtered and sorted records across every page.
    pub fn ordered_records(&self) -> Vec<&R> {
        self.ordered
            .iter()
            .map(|&index| &self.records[index])
            .collect()
    }

    /// Records on the current page.
    pub fn page_records(&self) -> Vec<&R> {
        paginate(&self.ordered, self.current_page, self.page_size)
            .iter()
            .map(|&index| &self.records[index])
            .collect()
    }

    /// Full read-side view.
    pub fn snapshot(&self) -> PipelineSnapshot<'_, R> {
        PipelineSnapshot {
            paginated_records: self.page_records(),
            total_items: self.total_items(),
            current_query: &self.query,
            current_sort_field: self.sort.field.as_deref(),
            current_sort_direction: self.sort.direction,
            current_page: self.current_page,
            page_size: self.page_size,
            total_pages: self.total_pages(),
            page_range: self.page_range(),
        }
    }

    /// Replaces the search query and returns to page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.query {
            self.query = query;
            self.refilter();
        }
        self.current_page = 1;
    }

    /// Replaces the sort field, keeping the direction, and returns to page 1.
    pub fn set_sort_field(&mut self, field: Option<String>) {
        let direction = self.sort.direction;
        self.set_sort(field, direction);
    }

    /// Replaces the sort direction, keeping the field, and returns to page 1.
    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        let field = self.sort.field.clone();
        self.set_sort(field, direction);
    }

    /// Replaces the sort and returns to page 1. An empty field means no sorting.
    pub fn set_sort(&mut self, field: Option<String>, direction: SortDirection) {
        let next = SortSpec {
            field: field.filter(|field| !field.is_empty()),
            direction,
        };
        if next != self.sort {
            self.sort = next;
            self.reorder();
        }
        self.current_page = 1;
    }

    /// Header-click behavior: the active field flips direction, any other field starts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        let direction = if self.sort.is_sorted_by(field) {
            self.sort.direction.toggled()
        } else {
            SortDirection::Asc
        };
        self.set_sort(Some(field.to_string()), direction);
    }

    /// Moves to `page`, clamped into `1..=total_pages`.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    /// Changes the page size and returns to page 1. Zero falls back to the default size.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        self.current_page = 1;
    }

    /// Swaps the record collection, keeping query, sort, and page (clamped into range).
    pub fn set_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.refilter();
        self.current_page = self.current_page.clamp(1, self.total_pages());
    }

    /// Returns query, sort, page, and page size to the configured defaults.
    pub fn reset(&mut self) {
        self.query.clear();
        self.sort = self.config.initial_sort();
        self.page_size = self.config.page_size;
        self.current_page = 1;
        self.refilter();
    }

    fn refilter(&mut self) {
        let indexed: Vec<Indexed<'_, R>> = self
            .records
            .iter()
            .enumerate()
            .map(|(index, record)| Indexed { index, record })
            .collect();
        self.filtered = filter_records(&indexed, &self.query, self.config.searchable)
            .into_iter()
            .map(|entry| entry.index)
            .collect();
        self.reorder();
    }

    fn reorder(&mut self) {
        let indexed: Vec<Indexed<'_, R>> = self
            .filtered
            .iter()
            .map(|&index| Indexed {
                index,
                record: &self.records[index],
            })
            .collect();
        self.ordered = sort_records(&indexed, self.sort.field.as_deref(), self.sort.direction)
            .into_iter()
            .map(|entry| entry.index)
            .collect();
        self.generation += 1;
    }
}
