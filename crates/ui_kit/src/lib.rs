//! Accessible Leptos widgets built on design tokens and the headless table pipeline.
//!
//! Every widget emits the stable `data-ui-*` DOM contract (`data-ui-primitive`, `data-ui-kind`,
//! `data-ui-variant`, `data-ui-size`, `data-ui-state`, ...) that stylesheets target; the crate
//! itself ships no styling. Variant props resolve through static token tables, form fields share
//! one validation resolver and one id generator, and [`DataGrid`] runs its records through
//! [`table_core_headless::TablePipeline`] via [`use_table_pipeline`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod class_names;
mod ids;
mod pipeline;
mod primitives;
mod validation;
mod variants;

pub use class_names::{merge_classes, merge_layout_class};
pub use ids::{provide_id_generator, use_field_ids, use_id_generator, FieldIds, IdGenerator};
pub use pipeline::{use_table_pipeline, TablePipelineHandle};
pub use primitives::{
    aria_sort, is_active_route, Badge, Button, CheckboxField, Cluster, ColumnDef, DataGrid,
    EmptyState, FieldMessage, Heading, Pagination, SelectField, SelectOption, Sidebar, SidebarItem,
    SidebarSection, Stack, Surface, Table, TableCell, TableHeaderCell, TableRow, Text, TextField,
};
pub use validation::{resolve_validation, FieldFeedback, FieldValidation, ValidationState};
pub use variants::{
    button_classes, field_focus_ring, focus_ring, provide_variant_defaults, use_variant_defaults,
    ButtonSize, ButtonVariant, Elevation, FieldSize, FocusRing, LayoutAlign, LayoutGap,
    LayoutJustify, LayoutPadding, SurfaceVariant, TextRole, TextTone, VariantDefaults,
    VariantToken,
};

/// Convenience imports for application crates.
pub mod prelude {
    pub use crate::{
        use_table_pipeline, Badge, Button, ButtonSize, ButtonVariant, CheckboxField, Cluster,
        ColumnDef, DataGrid, EmptyState, FieldFeedback, FieldMessage, FieldSize, Heading,
        LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, Pagination, SelectField,
        SelectOption, Sidebar, SidebarItem, SidebarSection, Stack, Surface, SurfaceVariant, Table,
        TableCell, TableHeaderCell, TableRow, Text, TextField, TextRole, TextTone,
        ValidationState, VariantToken,
    };
    pub use table_core_headless::{PipelineConfig, SortDirection, TableRecord};
}
