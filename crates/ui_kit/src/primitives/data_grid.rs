use std::fmt;
use std::rc::Rc;

use table_core_headless::{PageRange, PipelineConfig, SortDirection, SortSpec, TableRecord};

use super::*;
use crate::pipeline::{use_table_pipeline, TablePipelineHandle};

/// One column of a [`DataGrid`].
pub struct ColumnDef<R> {
    /// Record field the column reads, sorts, and labels cells with.
    pub field: String,
    /// Header text.
    pub header: String,
    /// Whether the header toggles sorting.
    pub sortable: bool,
    /// Right-aligned numeric column.
    pub numeric: bool,
    render: Option<Rc<dyn Fn(&R) -> View>>,
}

impl<R> Clone for ColumnDef<R> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            header: self.header.clone(),
            sortable: self.sortable,
            numeric: self.numeric,
            render: self.render.clone(),
        }
    }
}

impl<R> fmt::Debug for ColumnDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("field", &self.field)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("numeric", &self.numeric)
            .field("custom_render", &self.render.is_some())
            .finish()
    }
}

impl<R: TableRecord> ColumnDef<R> {
    /// Plain text column.
    pub fn new(field: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            header: header.into(),
            sortable: false,
            numeric: false,
            render: None,
        }
    }

    /// Makes the header a sort toggle.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Marks the column numeric.
    pub fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }

    /// Replaces the default text cell with custom markup.
    pub fn render(mut self, render: impl Fn(&R) -> View + 'static) -> Self {
        self.render = Some(Rc::new(render));
        self
    }

    /// Text the default cell shows for `record`.
    pub fn cell_text(&self, record: &R) -> String {
        record.cell(&self.field).display_text()
    }

    fn render_cell(&self, record: &R) -> View {
        match &self.render {
            Some(render) => render(record),
            None => self.cell_text(record).into_view(),
        }
    }
}

/// "Showing" label for a page window.
pub(crate) fn range_label(range: PageRange) -> String {
    if range.is_empty() {
        format!("0 of {}", range.total)
    } else {
        format!("{}\u{2013}{} of {}", range.start, range.end, range.total)
    }
}

/// Pushes every later value of `records` into `pipeline`. The value present at creation is
/// skipped because the pipeline was built from it.
pub(crate) fn forward_records<R>(pipeline: TablePipelineHandle<R>, records: Signal<Vec<R>>)
where
    R: TableRecord + Clone + 'static,
{
    create_effect(move |previous: Option<()>| {
        let next = records.get();
        if previous.is_some() {
            pipeline.set_records(next);
        }
    });
}

/// Sort direction of `field` while it is the active sort column.
pub(crate) fn column_sort(sort: Signal<SortSpec>, field: String) -> Signal<Option<SortDirection>> {
    Signal::derive(move || sort.with(|sort| sort.is_sorted_by(&field).then_some(sort.direction)))
}

#[component]
/// Searchable, sortable, paginated table over in-memory records.
///
/// The grid owns one pipeline. When `records` is a signal, later values replace the collection
/// while keeping the query, sort, and (clamped) page.
pub fn DataGrid<R>(
    columns: Vec<ColumnDef<R>>,
    #[prop(into)] records: MaybeSignal<Vec<R>>,
    #[prop(optional)] config: PipelineConfig,
    #[prop(optional, into)] caption: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(default = "Search".to_string(), into)] search_label: String,
    #[prop(optional, into)] search_placeholder: Option<String>,
    #[prop(default = "No matching records".to_string(), into)] empty_message: String,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView
where
    R: TableRecord + Clone + 'static,
{
    let searchable = config.searchable;
    let pipeline = use_table_pipeline(records.get_untracked(), config);
    if let MaybeSignal::Dynamic(records) = records {
        forward_records(pipeline, records);
    }

    let sort = pipeline.sort();
    let page_records = pipeline.page_records();
    let total_items = pipeline.total_items();
    let page_range = pipeline.page_range();
    let column_count = columns.len().max(1) as u32;

    let headers = columns
        .iter()
        .map(|column| {
            let active = column_sort(sort, column.field.clone());
            let toggle_field = column.field.clone();
            let header = column.header.clone();
            view! {
                <TableHeaderCell
                    sortable=column.sortable
                    active=active
                    column=column.field.clone()
                    on_sort=Callback::new(move |()| pipeline.toggle_sort(&toggle_field))
                >
                    {header}
                </TableHeaderCell>
            }
        })
        .collect_view();
    let columns = store_value(columns);

    view! {
        <div
            class=merge_layout_class("ui-data-grid", layout_class)
            data-ui-primitive="true"
            data-ui-kind="data-grid"
        >
            {searchable.then(|| view! {
                <TextField
                    label=search_label
                    input_type="search"
                    placeholder=search_placeholder.unwrap_or_default()
                    ui_slot="search"
                    value=pipeline.query()
                    on_input=Callback::new(move |query: String| pipeline.set_query(query))
                />
            })}
            <Table caption=caption.unwrap_or_default() aria_label=aria_label.unwrap_or_default()>
                <thead>
                    <tr>{headers}</tr>
                </thead>
                <tbody>
                    {move || {
                        if total_items.get() == 0 {
                            let message = empty_message.clone();
                            return view! {
                                <tr>
                                    <TableCell colspan=column_count>
                                        <EmptyState title=message />
                                    </TableCell>
                                </tr>
                            }
                            .into_view();
                        }
                        page_records
                            .get()
                            .into_iter()
                            .map(|record| {
                                let cells = columns.with_value(|columns| {
                                    columns
                                        .iter()
                                        .map(|column| {
                                            let cell = column.render_cell(&record);
                                            view! {
                                                <TableCell
                                                    numeric=column.numeric
                                                    column=column.field.clone()
                                                >
                                                    {cell}
                                                </TableCell>
                                            }
                                        })
                                        .collect_view()
                                });
                                view! { <TableRow>{cells}</TableRow> }
                            })
                            .collect_view()
                    }}
                </tbody>
            </Table>
            <Cluster justify=LayoutJustify::Between ui_slot="footer">
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    {move || range_label(page_range.get())}
                </Text>
                <Pagination
                    current_page=pipeline.current_page()
                    total_pages=pipeline.total_pages()
                    on_page_change=Callback::new(move |page| pipeline.set_page(page))
                />
            </Cluster>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn default_cells_use_display_text() {
        let column = ColumnDef::<serde_json::Value>::new("age", "Age").numeric().sortable();
        assert_eq!(column.cell_text(&json!({ "age": 31 })), "31");
        assert_eq!(column.cell_text(&json!({ "name": "Amy" })), "");
        assert!(column.numeric);
        assert!(column.sortable);
    }

    #[test]
    fn grid_wiring_keeps_state_across_record_updates() {
        let runtime = create_runtime();
        let rows = create_rw_signal(vec![json!({ "name": "Bob" }), json!({ "name": "Amy" })]);
        let pipeline = use_table_pipeline(
            rows.get_untracked(),
            PipelineConfig::default().with_page_size(1),
        );
        forward_records(pipeline, rows.into());
        let name_sort = column_sort(pipeline.sort(), "name".to_string());
        let age_sort = column_sort(pipeline.sort(), "age".to_string());

        assert_eq!(name_sort.get_untracked(), None);
        pipeline.toggle_sort("name");
        assert_eq!(name_sort.get_untracked(), Some(SortDirection::Asc));
        pipeline.toggle_sort("name");
        assert_eq!(name_sort.get_untracked(), Some(SortDirection::Desc));
        assert_eq!(age_sort.get_untracked(), None);

        pipeline.set_query("A");
        assert_eq!(pipeline.total_items().get_untracked(), 1);

        rows.update(|rows| rows.push(json!({ "name": "Al" })));
        assert_eq!(pipeline.total_items().get_untracked(), 2);
        assert_eq!(pipeline.query().get_untracked(), "A");
        assert_eq!(name_sort.get_untracked(), Some(SortDirection::Desc));
        assert_eq!(pipeline.page_records().get_untracked()[0]["name"], "Amy");

        pipeline.set_page(2);
        rows.set(vec![json!({ "name": "Ann" })]);
        assert_eq!(pipeline.current_page().get_untracked(), 1);
        assert_eq!(pipeline.page_records().get_untracked()[0]["name"], "Ann");

        runtime.dispose();
    }

    #[test]
    fn range_label_covers_empty_and_partial_pages() {
        assert_eq!(range_label(PageRange::for_page(0, 1, 10)), "0 of 0");
        assert_eq!(range_label(PageRange::for_page(25, 3, 10)), "21\u{2013}25 of 25");
    }
}
