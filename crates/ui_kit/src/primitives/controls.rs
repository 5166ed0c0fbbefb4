use super::*;

use crate::validation::FieldValidation;

#[component]
/// Action button.
///
/// `variant` and `size` fall back to the nearest [`crate::VariantDefaults`] and then to the
/// built-in defaults. The focus ring comes from the static ring table as inline custom
/// properties.
pub fn Button(
    #[prop(optional)] variant: Option<ButtonVariant>,
    #[prop(optional)] size: Option<ButtonSize>,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] aria_controls: Option<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional, into)] current: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    let defaults = use_variant_defaults();
    let variant = ButtonVariant::cascade(variant, defaults.button_variant);
    let size = ButtonSize::cascade(size, defaults.button_size);

    view! {
        <button
            type=button_type.unwrap_or("button")
            class=button_classes(variant, size, full_width, layout_class)
            style=focus_ring(variant, size).style()
            id=id
            aria-label=aria_label
            aria-controls=aria_controls
            aria-current=move || current.get().then_some("page")
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || {
                if disabled.get() {
                    "disabled"
                } else if current.get() {
                    "current"
                } else if pressed.get() {
                    "pressed"
                } else {
                    "idle"
                }
            }
            data-ui-pressed=move || bool_token(pressed.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Validation message for a field. Renders nothing until the resolved validation carries text.
pub fn FieldMessage(
    #[prop(into)] id: String,
    #[prop(into)] validation: Signal<FieldValidation>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let class = merge_layout_class("ui-field-message", layout_class);
    move || {
        validation.get().message.map(|message| {
            let state = validation.get_untracked().state;
            view! {
                <p
                    id=id.clone()
                    class=class.clone()
                    role=state.message_role()
                    data-ui-primitive="true"
                    data-ui-kind="field-message"
                    data-ui-state=state.token()
                    data-ui-tone=TextTone::from(state).token()
                >
                    {message}
                </p>
            }
        })
    }
}

fn field_validation(feedback: MaybeSignal<FieldFeedback>) -> Signal<FieldValidation> {
    Signal::derive(move || feedback.with(resolve_validation))
}

#[component]
/// Labelled single-line input.
pub fn TextField(
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] size: Option<FieldSize>,
    #[prop(optional)] required: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] feedback: MaybeSignal<FieldFeedback>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    let size = FieldSize::cascade(size, use_variant_defaults().field_size);
    let ids = use_field_ids(id, "text-field");
    let validation = field_validation(feedback);
    let has_description = description.is_some();
    let described = ids.clone();

    view! {
        <div
            class=merge_layout_class("ui-field-group", layout_class)
            style=move || field_focus_ring(validation.get().state, size).style()
            data-ui-primitive="true"
            data-ui-kind="text-field"
            data-ui-slot=ui_slot
            data-ui-size=size.token()
            data-ui-state=move || validation.get().state.token()
            data-ui-disabled=move || bool_token(disabled.get())
        >
            {label.map(|label| view! {
                <label id=ids.label.clone() for=ids.input.clone() data-ui-slot="label">
                    {label}
                </label>
            })}
            <input
                class="ui-field"
                id=ids.input.clone()
                name=name
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                autocomplete=autocomplete
                required=required
                prop:value=move || value.get()
                disabled=move || disabled.get()
                aria-invalid=move || bool_token(validation.get().state.is_invalid())
                aria-describedby=move || {
                    described.described_by(has_description, validation.get().message.is_some())
                }
                data-ui-slot="control"
                on:input=move |ev| {
                    if let Some(on_input) = on_input.as_ref() {
                        on_input.call(event_target_value(&ev));
                    }
                }
                on:keydown=move |ev| {
                    if let Some(on_keydown) = on_keydown.as_ref() {
                        on_keydown.call(ev);
                    }
                }
            />
            {description.map(|description| view! {
                <span id=ids.description.clone() data-ui-slot="description">{description}</span>
            })}
            <FieldMessage id=ids.message.clone() validation=validation />
        </div>
    }
}

/// One entry of a [`SelectField`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted value.
    pub value: String,
    /// Visible label.
    pub label: String,
    /// Whether the option can be chosen.
    pub disabled: bool,
}

impl SelectOption {
    /// Enabled option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Marks the option as not selectable.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[component]
/// Labelled native select over a list of [`SelectOption`]s.
pub fn SelectField(
    #[prop(into)] options: MaybeSignal<Vec<SelectOption>>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] size: Option<FieldSize>,
    #[prop(optional)] required: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] feedback: MaybeSignal<FieldFeedback>,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let size = FieldSize::cascade(size, use_variant_defaults().field_size);
    let ids = use_field_ids(id, "select");
    let value = Signal::derive(move || value.get());
    let validation = field_validation(feedback);
    let has_description = description.is_some();
    let described = ids.clone();

    view! {
        <div
            class=merge_layout_class("ui-field-group", layout_class)
            style=move || field_focus_ring(validation.get().state, size).style()
            data-ui-primitive="true"
            data-ui-kind="select"
            data-ui-slot=ui_slot
            data-ui-size=size.token()
            data-ui-state=move || validation.get().state.token()
            data-ui-disabled=move || bool_token(disabled.get())
        >
            {label.map(|label| view! {
                <label id=ids.label.clone() for=ids.input.clone() data-ui-slot="label">
                    {label}
                </label>
            })}
            <select
                class="ui-field"
                id=ids.input.clone()
                name=name
                required=required
                prop:value=move || value.get()
                disabled=move || disabled.get()
                aria-invalid=move || bool_token(validation.get().state.is_invalid())
                aria-describedby=move || {
                    described.described_by(has_description, validation.get().message.is_some())
                }
                data-ui-slot="control"
                on:change=move |ev| {
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(event_target_value(&ev));
                    }
                }
            >
                {placeholder.map(|placeholder| view! {
                    <option value="" disabled=true>{placeholder}</option>
                })}
                {move || {
                    let current = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|option| {
                            let selected = option.value == current;
                            view! {
                                <option
                                    value=option.value
                                    disabled=option.disabled
                                    selected=selected
                                >
                                    {option.label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
            {description.map(|description| view! {
                <span id=ids.description.clone() data-ui-slot="description">{description}</span>
            })}
            <FieldMessage id=ids.message.clone() validation=validation />
        </div>
    }
}

#[component]
/// Checkbox with its label, helper text, and validation message.
pub fn CheckboxField(
    #[prop(into)] label: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] size: Option<FieldSize>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] feedback: MaybeSignal<FieldFeedback>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
) -> impl IntoView {
    let size = FieldSize::cascade(size, use_variant_defaults().field_size);
    let ids = use_field_ids(id, "checkbox");
    let validation = field_validation(feedback);
    let has_description = description.is_some();
    let described = ids.clone();

    view! {
        <div
            class=merge_layout_class("ui-checkbox-field", layout_class)
            style=move || field_focus_ring(validation.get().state, size).style()
            data-ui-primitive="true"
            data-ui-kind="checkbox"
            data-ui-slot=ui_slot
            data-ui-size=size.token()
            data-ui-state=move || validation.get().state.token()
            data-ui-selected=move || bool_token(checked.get())
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <label id=ids.label.clone() for=ids.input.clone() data-ui-slot="label">
                <input
                    class="ui-checkbox"
                    type="checkbox"
                    id=ids.input.clone()
                    name=name
                    prop:checked=move || checked.get()
                    disabled=move || disabled.get()
                    aria-invalid=move || bool_token(validation.get().state.is_invalid())
                    aria-describedby=move || {
                        described.described_by(has_description, validation.get().message.is_some())
                    }
                    on:change=move |ev| {
                        if let Some(on_change) = on_change.as_ref() {
                            on_change.call(event_target_checked(&ev));
                        }
                    }
                />
                <span data-ui-slot="text">{label}</span>
            </label>
            {description.map(|description| view! {
                <span id=ids.description.clone() data-ui-slot="description">{description}</span>
            })}
            <FieldMessage id=ids.message.clone() validation=validation />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::validation::ValidationState;

    #[test]
    fn select_option_builder() {
        let option = SelectOption::new("eu", "Europe").disabled();
        assert_eq!(option.value, "eu");
        assert_eq!(option.label, "Europe");
        assert!(option.disabled);
        assert!(!SelectOption::new("us", "United States").disabled);
    }

    #[test]
    fn field_validation_tracks_feedback() {
        let runtime = create_runtime();
        let feedback = create_rw_signal(FieldFeedback::default());
        let validation = field_validation(feedback.into());

        assert_eq!(validation.get_untracked().state, ValidationState::Default);
        feedback.set(FieldFeedback::error("Required"));
        assert_eq!(validation.get_untracked().state, ValidationState::Error);
        assert_eq!(validation.get_untracked().message.as_deref(), Some("Required"));

        runtime.dispose();
    }
}
