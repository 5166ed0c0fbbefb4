use table_core_headless::{page_items, PageItem};

use super::*;
use crate::ids::use_id_generator;

#[component]
/// Page switcher: previous/next buttons around a windowed list of page numbers.
///
/// `on_page_change` receives the requested page already clamped to `1..=total_pages`.
pub fn Pagination(
    #[prop(into)] current_page: MaybeSignal<usize>,
    #[prop(into)] total_pages: MaybeSignal<usize>,
    #[prop(default = 1)] siblings: usize,
    #[prop(optional)] size: Option<ButtonSize>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = "Pagination".to_string(), into)] aria_label: String,
    #[prop(optional)] on_page_change: Option<Callback<usize>>,
) -> impl IntoView {
    let current = Signal::derive(move || current_page.get().max(1));
    let total = Signal::derive(move || total_pages.get().max(1));
    let go = move |page: usize| {
        let page = page.clamp(1, total.get_untracked());
        if page == current.get_untracked() {
            return;
        }
        if let Some(on_page_change) = on_page_change.as_ref() {
            on_page_change.call(page);
        }
    };

    view! {
        <nav
            class=merge_layout_class("ui-pagination", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="pagination"
            data-ui-page=move || current.get()
            data-ui-pages=move || total.get()
        >
            <Button
                variant=ButtonVariant::Outline
                size=size.unwrap_or(ButtonSize::Sm)
                aria_label="Previous page"
                ui_slot="previous"
                disabled=Signal::derive(move || current.get() <= 1)
                on_click=Callback::new(move |_| go(current.get_untracked().saturating_sub(1)))
            >
                "Previous"
            </Button>
            {move || {
                let current_page = current.get();
                page_items(current_page, total.get(), siblings)
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(page) => {
                            let is_current = page == current_page;
                            view! {
                                <Button
                                    variant=if is_current { ButtonVariant::Primary } else { ButtonVariant::Ghost }
                                    size=size.unwrap_or(ButtonSize::Sm)
                                    aria_label=format!("Page {page}")
                                    ui_slot="page"
                                    current=is_current
                                    on_click=Callback::new(move |_| go(page))
                                >
                                    {page}
                                </Button>
                            }
                            .into_view()
                        }
                        PageItem::Ellipsis => view! {
                            <span data-ui-slot="ellipsis" aria-hidden="true">"\u{2026}"</span>
                        }
                        .into_view(),
                    })
                    .collect_view()
            }}
            <Button
                variant=ButtonVariant::Outline
                size=size.unwrap_or(ButtonSize::Sm)
                aria_label="Next page"
                ui_slot="next"
                disabled=Signal::derive(move || current.get() >= total.get())
                on_click=Callback::new(move |_| go(current.get_untracked() + 1))
            >
                "Next"
            </Button>
        </nav>
    }
}

/// Whether a navigation entry pointing at `href` is active for `current_path`.
///
/// Query strings, fragments, and trailing slashes are ignored. Without `exact`, a parent path is
/// also active for its children (`/settings` for `/settings/profile`), except the root.
pub fn is_active_route(current_path: &str, href: &str, exact: bool) -> bool {
    fn normalize(path: &str) -> &str {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            "/"
        } else {
            trimmed
        }
    }

    let current = normalize(current_path);
    let href = normalize(href);
    if current == href {
        return true;
    }
    if exact || href == "/" {
        return false;
    }
    current
        .strip_prefix(href)
        .is_some_and(|rest| rest.starts_with('/'))
}

#[derive(Clone, Copy)]
struct ActiveRoute(Signal<String>);

#[component]
/// Side navigation landmark. Items below it read `current_path` to mark themselves active.
pub fn Sidebar(
    #[prop(optional, into)] current_path: MaybeSignal<String>,
    #[prop(default = "Sidebar".to_string(), into)] aria_label: String,
    #[prop(optional, into)] collapsed: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    provide_context(ActiveRoute(Signal::derive(move || current_path.get())));

    view! {
        <nav
            class=merge_layout_class("ui-sidebar", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="sidebar"
            data-ui-collapsed=move || bool_token(collapsed.get())
        >
            {children()}
        </nav>
    }
}

#[component]
/// Titled group of sidebar items.
pub fn SidebarSection(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let heading_id = title
        .as_ref()
        .map(|_| use_id_generator().next_id_for("sidebar-section"));

    view! {
        <div
            class=merge_layout_class("ui-sidebar-section", layout_class)
            role="group"
            aria-labelledby=heading_id.clone()
            data-ui-primitive="true"
            data-ui-kind="sidebar-section"
        >
            {title.map(|title| view! {
                <Text role=TextRole::Caption tone=TextTone::Secondary ui_slot="title">
                    <span id=heading_id>{title}</span>
                </Text>
            })}
            <ul data-ui-slot="items">{children()}</ul>
        </div>
    }
}

#[component]
/// Sidebar link, marked with `aria-current="page"` when its route is active.
pub fn SidebarItem(
    #[prop(into)] href: String,
    #[prop(optional)] exact: bool,
    #[prop(optional, into)] badge: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_navigate: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let route = use_context::<ActiveRoute>();
    let target = href.clone();
    let active = Signal::derive(move || {
        route.is_some_and(|ActiveRoute(path)| path.with(|path| is_active_route(path, &target, exact)))
    });

    view! {
        <li class=merge_layout_class("ui-sidebar-item", layout_class)>
            <a
                href=href
                aria-current=move || active.get().then_some("page")
                aria-disabled=move || disabled.get().then_some("true")
                data-ui-primitive="true"
                data-ui-kind="sidebar-item"
                data-ui-state=move || {
                    if disabled.get() {
                        "disabled"
                    } else if active.get() {
                        "active"
                    } else {
                        "idle"
                    }
                }
                on:click=move |ev| {
                    if disabled.get_untracked() {
                        ev.prevent_default();
                        return;
                    }
                    if let Some(on_navigate) = on_navigate.as_ref() {
                        on_navigate.call(ev);
                    }
                }
            >
                <span data-ui-slot="label">{children()}</span>
                {badge.map(|badge| view! { <Badge>{badge}</Badge> })}
            </a>
        </li>
    }
}
