use table_core_headless::SortDirection;

use super::*;

#[component]
/// Generic surface primitive.
pub fn Surface(
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(default = Elevation::Flat)] elevation: Elevation,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-surface", layout_class)
            data-ui-primitive="true"
            data-ui-kind="surface"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-elevation=elevation.token()
            data-ui-padding=padding.token()
            role=role
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Inline text with a role and tone.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Section heading. `level` is clamped to 1..=6 and exposed through `aria-level`.
pub fn Heading(
    #[prop(default = 2)] level: u8,
    #[prop(default = TextRole::Title)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-heading", layout_class)
            id=id
            role="heading"
            aria-level=level.clamp(1, 6)
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Compact status badge.
pub fn Badge(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Placeholder block for lists and tables with nothing to show.
pub fn EmptyState(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            role="status"
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {title.map(|title| view! { <Text role=TextRole::Label>{title}</Text> })}
            {children.map(|children| children())}
        </div>
    }
}

#[component]
/// Table element. Blank `caption` and `aria_label` values are omitted.
pub fn Table(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] caption: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] aria_busy: MaybeSignal<bool>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let caption = caption.filter(|caption| !caption.trim().is_empty());
    let aria_label = aria_label.filter(|label| !label.trim().is_empty());
    view! {
        <table
            class=merge_layout_class("ui-table", layout_class)
            aria-label=aria_label
            aria-busy=move || bool_token(aria_busy.get())
            data-ui-primitive="true"
            data-ui-kind="table"
            data-ui-slot=ui_slot
        >
            {caption.map(|caption| view! { <caption>{caption}</caption> })}
            {children()}
        </table>
    }
}

/// `aria-sort` value of a header cell. Unsortable columns carry no attribute.
pub fn aria_sort(sortable: bool, active: Option<SortDirection>) -> Option<&'static str> {
    if !sortable {
        return None;
    }
    Some(match active {
        Some(SortDirection::Asc) => "ascending",
        Some(SortDirection::Desc) => "descending",
        None => "none",
    })
}

#[component]
/// Column header.
///
/// `active` is the column's current sort direction, `None` when another column (or nothing) is
/// sorted. Sortable headers render their content inside a button that fires `on_sort`.
pub fn TableHeaderCell(
    #[prop(optional)] sortable: bool,
    #[prop(optional, into)] active: MaybeSignal<Option<SortDirection>>,
    #[prop(optional, into)] column: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_sort: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let content = children();
    let body = if sortable {
        view! {
            <button
                type="button"
                class="ui-table-sort"
                data-ui-slot="sort-trigger"
                on:click=move |_| {
                    if let Some(on_sort) = on_sort.as_ref() {
                        on_sort.call(());
                    }
                }
            >
                {content}
                <span data-ui-slot="sort-indicator" aria-hidden="true">
                    {move || match active.get() {
                        Some(SortDirection::Asc) => "\u{25b2}",
                        Some(SortDirection::Desc) => "\u{25bc}",
                        None => "",
                    }}
                </span>
            </button>
        }
        .into_view()
    } else {
        content.into_view()
    };

    view! {
        <th
            class=merge_layout_class("ui-table-header-cell", layout_class)
            scope="col"
            aria-sort=move || aria_sort(sortable, active.get())
            data-ui-primitive="true"
            data-ui-kind="table-header-cell"
            data-ui-column=column
            data-ui-sortable=bool_token(sortable)
            data-ui-state=move || active.get().map_or("idle", SortDirection::token)
        >
            {body}
        </th>
    }
}

#[component]
/// Table row.
pub fn TableRow(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <tr
            class=merge_layout_class("ui-table-row", layout_class)
            aria-selected=move || selected.get().then_some("true")
            data-ui-primitive="true"
            data-ui-kind="table-row"
            data-ui-selected=move || bool_token(selected.get())
            data-ui-interactive=bool_token(on_click.is_some())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </tr>
    }
}

#[component]
/// Data cell. `numeric` right-aligns through the `data-ui-numeric` hook.
pub fn TableCell(
    #[prop(optional)] numeric: bool,
    #[prop(optional)] colspan: Option<u32>,
    #[prop(optional, into)] column: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <td
            class=merge_layout_class("ui-table-cell", layout_class)
            colspan=colspan
            data-ui-primitive="true"
            data-ui-kind="table-cell"
            data-ui-column=column
            data-ui-numeric=bool_token(numeric)
        >
            {children()}
        </td>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn aria_sort_reflects_active_direction() {
        assert_eq!(aria_sort(false, Some(SortDirection::Asc)), None);
        assert_eq!(aria_sort(true, None), Some("none"));
        assert_eq!(aria_sort(true, Some(SortDirection::Asc)), Some("ascending"));
        assert_eq!(aria_sort(true, Some(SortDirection::Desc)), Some("descending"));
    }
}
