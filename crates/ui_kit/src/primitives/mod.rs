//! Leptos widgets: controls, table pieces, data grid, navigation, and layout.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::class_names::merge_layout_class;
use crate::ids::use_field_ids;
use crate::validation::{resolve_validation, FieldFeedback};
use crate::variants::{
    button_classes, field_focus_ring, focus_ring, use_variant_defaults, ButtonSize,
    ButtonVariant, Elevation, FieldSize, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding,
    SurfaceVariant, TextRole, TextTone, VariantToken,
};

mod controls;
mod data_display;
mod data_grid;
mod layout;
mod navigation;

pub use controls::{Button, CheckboxField, FieldMessage, SelectField, SelectOption, TextField};
pub use data_display::{
    aria_sort, Badge, EmptyState, Heading, Surface, Table, TableCell, TableHeaderCell, TableRow,
    Text,
};
pub use data_grid::{ColumnDef, DataGrid};
pub use layout::{Cluster, Stack};
pub use navigation::{is_active_route, Pagination, Sidebar, SidebarItem, SidebarSection};

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
