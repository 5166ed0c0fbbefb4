//! Reactive wrapper around [`TablePipeline`] for table and grid components.

use leptos::*;
use table_core_headless::{
    PageRange, PipelineConfig, SortDirection, SortSpec, TablePipeline, TableRecord,
};

/// Copyable handle to one table's pipeline state.
///
/// Each call to [`use_table_pipeline`] owns an independent pipeline; handles to the same pipeline
/// share it.
pub struct TablePipelineHandle<R: 'static> {
    pipeline: RwSignal<TablePipeline<R>>,
}

impl<R> Clone for TablePipelineHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for TablePipelineHandle<R> {}

/// Creates a pipeline over `records`.
///
/// Invalid config values are logged and replaced by their fallbacks.
pub fn use_table_pipeline<R>(records: Vec<R>, config: PipelineConfig) -> TablePipelineHandle<R>
where
    R: TableRecord + Clone + 'static,
{
    if let Err(err) = config.validate() {
        logging::warn!("table pipeline config rejected, using fallbacks: {err}");
    }
    TablePipelineHandle {
        pipeline: create_rw_signal(TablePipeline::new(records, config)),
    }
}

impl<R> TablePipelineHandle<R>
where
    R: TableRecord + Clone + 'static,
{
    /// Replaces the search query and returns to page 1.
    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.pipeline.update(|pipeline| pipeline.set_query(query));
    }

    /// Replaces the sort field and returns to page 1.
    pub fn set_sort_field(&self, field: Option<String>) {
        self.pipeline
            .update(|pipeline| pipeline.set_sort_field(field));
    }

    /// Replaces the sort direction and returns to page 1.
    pub fn set_sort_direction(&self, direction: SortDirection) {
        self.pipeline
            .update(|pipeline| pipeline.set_sort_direction(direction));
    }

    /// Replaces the sort and returns to page 1.
    pub fn set_sort(&self, field: Option<String>, direction: SortDirection) {
        self.pipeline
            .update(|pipeline| pipeline.set_sort(field, direction));
    }

    /// Column-header click.
    pub fn toggle_sort(&self, field: &str) {
        self.pipeline.update(|pipeline| pipeline.toggle_sort(field));
    }

    /// Moves to `page`, clamped into range.
    pub fn set_page(&self, page: usize) {
        self.pipeline.update(|pipeline| pipeline.set_page(page));
    }

    /// Changes the page size and returns to page 1.
    pub fn set_page_size(&self, page_size: usize) {
        self.pipeline
            .update(|pipeline| pipeline.set_page_size(page_size));
    }

    /// Swaps the record collection.
    pub fn set_records(&self, records: Vec<R>) {
        self.pipeline.update(|pipeline| pipeline.set_records(records));
    }

    /// Returns to the configured defaults.
    pub fn reset(&self) {
        self.pipeline.update(TablePipeline::reset);
    }

    /// Reads the pipeline without tracking.
    pub fn with_untracked<T>(&self, f: impl FnOnce(&TablePipeline<R>) -> T) -> T {
        self.pipeline.with_untracked(f)
    }

    /// Records on the current page.
    pub fn page_records(&self) -> Signal<Vec<R>> {
        let pipeline = self.pipeline;
        Signal::derive(move || {
            pipeline.with(|pipeline| pipeline.page_records().into_iter().cloned().collect())
        })
    }

    /// Records left after filtering.
    pub fn total_items(&self) -> Signal<usize> {
        let pipeline = self.pipeline;
        Signal::derive(move || pipeline.with(TablePipeline::total_items))
    }

    /// Page count of the filtered set.
    pub fn total_pages(&self) -> Signal<usize> {
        let pipeline = self.pipeline;
        Signal::derive(move || pipeline.with(TablePipeline::total_pages))
    }

    /// 1-based current page.
    pub fn current_page(&self) -> Signal<usize> {
        let pipeline = self.pipeline;
        Signal::derive(move || pipeline.with(TablePipeline::current_page))
    }

    /// Records per page.
    pub fn page_size(&self) -> Signal<usize> {
        let pipeline = self.pipeline;
        Signal::derive(move || pipeline.with(TablePipeline::page_size))
    }

    /// Active search query.
    pub fn query(&self) -> Signal<String> {
        let pipeline = self.pipeline;
        Signal::derive(move || pipeline.with(|pipeline| pipeline.query().to_string()))
    }

    /// Active sort.
    pub fn sort(&self) -> Signal<SortSpec> {
        let pipeline = self.pipeline;
        Signal::derive(move || pipeline.with(|pipeline| pipeline.sort().clone()))
    }

    /// 1-based item window of the current page.
    pub fn page_range(&self) -> Signal<PageRange> {
        let pipeline = self.pipeline;
        Signal::derive(move || pipeline.with(TablePipeline::page_range))
    }
}
