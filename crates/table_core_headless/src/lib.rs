//! Headless search/sort/paginate pipeline shared by table and grid widgets.
//!
//! Covers the in-memory data path behind a client-side table: record field access,
//! case-insensitive substring search, stable field sorting, page windows, and the controller that
//! owns query, sort, and page state. Nothing here depends on a renderer.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod config;
mod filter;
mod paginate;
mod pipeline;
mod record;
mod sort;

pub use config::{ConfigError, DefaultSort, PipelineConfig};
pub use filter::{filter_records, record_matches};
pub use paginate::{
    page_items, paginate, total_pages, PageItem, PageRange, DEFAULT_PAGE_SIZE,
};
pub use pipeline::{PipelineSnapshot, TablePipeline};
pub use record::{CellValue, TableRecord};
pub use sort::{compare_cells, locale_compare, sort_records, SortDirection, SortSpec};
