//! Design-token variant enums and their resolution into style hooks.
//!
//! Every prop that selects a visual treatment is a small `Copy` enum with a stable token string.
//! Tokens feed the `data-ui-*` attribute contract and the static class/focus-ring tables below,
//! so styling is a pure function of props with no runtime stylesheet mutation.

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::class_names::merge_classes;
use crate::validation::ValidationState;

/// Shared behavior of token-backed variant enums.
pub trait VariantToken: Copy + Default + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Stable token string used in `data-ui-*` attributes and config files.
    fn token(self) -> &'static str;

    /// Parses a token, ignoring case and surrounding whitespace.
    fn from_token(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.token().eq_ignore_ascii_case(raw))
    }

    /// Parses an optional token, falling back to the default variant for missing or unknown
    /// tokens.
    fn resolve_token(raw: Option<&str>) -> Self {
        raw.and_then(Self::from_token).unwrap_or_default()
    }

    /// Resolves an explicit prop, then an inherited default, then the built-in default.
    fn cascade(explicit: Option<Self>, inherited: Option<Self>) -> Self {
        explicit.or(inherited).unwrap_or_default()
    }
}

macro_rules! variant_tokens {
    ($name:ident { $($variant:ident => $token:literal),+ $(,)? }) => {
        impl VariantToken for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token),+
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Button emphasis variants.
pub enum ButtonVariant {
    /// Filled, highest-emphasis action.
    #[default]
    Primary,
    /// Muted filled action.
    Secondary,
    /// Bordered action without fill.
    Outline,
    /// Text-only action.
    Ghost,
    /// Destructive action.
    Danger,
}

variant_tokens!(ButtonVariant {
    Primary => "primary",
    Secondary => "secondary",
    Outline => "outline",
    Ghost => "ghost",
    Danger => "danger",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
    /// Large button.
    Lg,
}

variant_tokens!(ButtonSize {
    Sm => "sm",
    Md => "md",
    Lg => "lg",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Sizing tokens for text inputs, selects, and checkboxes.
pub enum FieldSize {
    /// Dense field.
    Sm,
    /// Default field.
    #[default]
    Md,
    /// Large field.
    Lg,
}

variant_tokens!(FieldSize {
    Sm => "sm",
    Md => "md",
    Lg => "lg",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Semantic surface variants for structural primitives.
pub enum SurfaceVariant {
    /// Primary surface.
    #[default]
    Standard,
    /// Secondary or muted surface.
    Muted,
    /// Inset surface.
    Inset,
}

variant_tokens!(SurfaceVariant {
    Standard => "standard",
    Muted => "muted",
    Inset => "inset",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Semantic elevation levels.
pub enum Elevation {
    /// Flat surface.
    #[default]
    Flat,
    /// Raised surface.
    Raised,
    /// Overlay surface.
    Overlay,
}

variant_tokens!(Elevation {
    Flat => "flat",
    Raised => "raised",
    Overlay => "overlay",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Text roles.
pub enum TextRole {
    /// Body text.
    #[default]
    Body,
    /// Label text.
    Label,
    /// Caption text.
    Caption,
    /// Title text.
    Title,
    /// Monospace/code text.
    Code,
}

variant_tokens!(TextRole {
    Body => "body",
    Label => "label",
    Caption => "caption",
    Title => "title",
    Code => "code",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Text tone.
pub enum TextTone {
    /// Primary text.
    #[default]
    Primary,
    /// Secondary text.
    Secondary,
    /// Success tone.
    Success,
    /// Warning tone.
    Warning,
    /// Danger tone.
    Danger,
}

variant_tokens!(TextTone {
    Primary => "primary",
    Secondary => "secondary",
    Success => "success",
    Warning => "warning",
    Danger => "danger",
});

impl From<ValidationState> for TextTone {
    fn from(state: ValidationState) -> Self {
        match state {
            ValidationState::Error => Self::Danger,
            ValidationState::Warning => Self::Warning,
            ValidationState::Success => Self::Success,
            ValidationState::Default => Self::Secondary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Layout gap tokens.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Small gap.
    Sm,
    /// Default gap.
    #[default]
    Md,
    /// Large gap.
    Lg,
}

variant_tokens!(LayoutGap {
    None => "none",
    Sm => "sm",
    Md => "md",
    Lg => "lg",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Layout padding tokens.
pub enum LayoutPadding {
    /// No padding.
    None,
    /// Compact padding.
    Sm,
    /// Default padding.
    #[default]
    Md,
    /// Spacious padding.
    Lg,
}

variant_tokens!(LayoutPadding {
    None => "none",
    Sm => "sm",
    Md => "md",
    Lg => "lg",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Cross-axis alignment tokens.
pub enum LayoutAlign {
    /// Stretch/fill alignment.
    #[default]
    Stretch,
    /// Start alignment.
    Start,
    /// Center alignment.
    Center,
    /// End alignment.
    End,
}

variant_tokens!(LayoutAlign {
    Stretch => "stretch",
    Start => "start",
    Center => "center",
    End => "end",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Main-axis justification tokens.
pub enum LayoutJustify {
    /// Start justification.
    #[default]
    Start,
    /// Center justification.
    Center,
    /// Space between items.
    Between,
    /// End justification.
    End,
}

variant_tokens!(LayoutJustify {
    Start => "start",
    Center => "center",
    Between => "between",
    End => "end",
});

/// Inherited variant defaults for a subtree, the middle step of [`VariantToken::cascade`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VariantDefaults {
    /// Default button variant.
    pub button_variant: Option<ButtonVariant>,
    /// Default button size.
    pub button_size: Option<ButtonSize>,
    /// Default field size.
    pub field_size: Option<FieldSize>,
}

/// Makes `defaults` the inherited variants for the current component subtree.
pub fn provide_variant_defaults(defaults: VariantDefaults) {
    provide_context(defaults);
}

/// Inherited variants for the current subtree, or all-`None` outside a provider.
pub fn use_variant_defaults() -> VariantDefaults {
    use_context::<VariantDefaults>().unwrap_or_default()
}

/// Focus-ring hooks for one control, rendered as CSS custom properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRing {
    /// Ring color, a token reference with a static fallback.
    pub color: &'static str,
    /// Ring width.
    pub width: &'static str,
    /// Gap between control edge and ring.
    pub offset: &'static str,
}

impl FocusRing {
    /// Inline `style` value carrying the ring as custom properties.
    pub fn style(&self) -> String {
        format!(
            "--ui-focus-ring-color: {}; --ui-focus-ring-width: {}; --ui-focus-ring-offset: {};",
            self.color, self.width, self.offset
        )
    }
}

const FOCUS_NEUTRAL: &str = "var(--ui-color-focus, #64748b)";
const FOCUS_PRIMARY: &str = "var(--ui-color-focus-primary, #2563eb)";
const FOCUS_DANGER: &str = "var(--ui-color-focus-danger, #dc2626)";
const FOCUS_WARNING: &str = "var(--ui-color-focus-warning, #d97706)";
const FOCUS_SUCCESS: &str = "var(--ui-color-focus-success, #16a34a)";

fn ring_metrics(size: ButtonSize) -> (&'static str, &'static str) {
    match size {
        ButtonSize::Sm => ("2px", "1px"),
        ButtonSize::Md => ("2px", "2px"),
        ButtonSize::Lg => ("3px", "2px"),
    }
}

/// Focus ring for a button.
pub fn focus_ring(variant: ButtonVariant, size: ButtonSize) -> FocusRing {
    let color = match variant {
        ButtonVariant::Primary => FOCUS_PRIMARY,
        ButtonVariant::Danger => FOCUS_DANGER,
        ButtonVariant::Secondary | ButtonVariant::Outline | ButtonVariant::Ghost => FOCUS_NEUTRAL,
    };
    let (width, offset) = ring_metrics(size);
    FocusRing {
        color,
        width,
        offset,
    }
}

/// Focus ring for a form field, colored by its validation state.
pub fn field_focus_ring(state: ValidationState, size: FieldSize) -> FocusRing {
    let color = match state {
        ValidationState::Error => FOCUS_DANGER,
        ValidationState::Warning => FOCUS_WARNING,
        ValidationState::Success => FOCUS_SUCCESS,
        ValidationState::Default => FOCUS_PRIMARY,
    };
    let width = match size {
        FieldSize::Lg => "3px",
        FieldSize::Sm | FieldSize::Md => "2px",
    };
    FocusRing {
        color,
        width,
        offset: "0px",
    }
}

/// Class list for a button.
pub fn button_classes(
    variant: ButtonVariant,
    size: ButtonSize,
    full_width: bool,
    layout_class: Option<&str>,
) -> String {
    let variant_class = format!("ui-button--{}", variant.token());
    let size_class = format!("ui-button--{}", size.token());
    merge_classes([
        Some("ui-button"),
        Some(variant_class.as_str()),
        Some(size_class.as_str()),
        full_width.then_some("ui-button--block"),
        layout_class,
    ])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tokens_round_trip_through_from_token() {
        for variant in ButtonVariant::ALL {
            assert_eq!(ButtonVariant::from_token(variant.token()), Some(*variant));
        }
        assert_eq!(LayoutGap::from_token(" LG "), Some(LayoutGap::Lg));
    }

    #[test]
    fn unknown_tokens_fall_back_to_default() {
        assert_eq!(ButtonVariant::resolve_token(Some("neon")), ButtonVariant::Primary);
        assert_eq!(ButtonSize::resolve_token(None), ButtonSize::Md);
        assert_eq!(
            ButtonVariant::resolve_token(Some("danger")),
            ButtonVariant::Danger
        );
    }

    #[test]
    fn cascade_prefers_explicit_then_inherited_then_default() {
        assert_eq!(
            ButtonVariant::cascade(Some(ButtonVariant::Ghost), Some(ButtonVariant::Danger)),
            ButtonVariant::Ghost
        );
        assert_eq!(
            ButtonVariant::cascade(None, Some(ButtonVariant::Danger)),
            ButtonVariant::Danger
        );
        assert_eq!(ButtonVariant::cascade(None, None), ButtonVariant::Primary);
    }

    #[test]
    fn focus_ring_is_a_pure_lookup() {
        let ring = focus_ring(ButtonVariant::Danger, ButtonSize::Lg);
        assert_eq!(ring.color, FOCUS_DANGER);
        assert_eq!(ring.width, "3px");
        assert_eq!(ring, focus_ring(ButtonVariant::Danger, ButtonSize::Lg));
        assert_eq!(
            focus_ring(ButtonVariant::Ghost, ButtonSize::Sm).style(),
            "--ui-focus-ring-color: var(--ui-color-focus, #64748b); --ui-focus-ring-width: 2px; --ui-focus-ring-offset: 1px;"
        );
    }

    #[test]
    fn field_ring_follows_validation_state() {
        assert_eq!(
            field_focus_ring(ValidationState::Error, FieldSize::Md).color,
            FOCUS_DANGER
        );
        assert_eq!(
            field_focus_ring(ValidationState::Default, FieldSize::Md).color,
            FOCUS_PRIMARY
        );
    }

    #[test]
    fn button_classes_compose_variant_size_and_layout() {
        assert_eq!(
            button_classes(ButtonVariant::Outline, ButtonSize::Sm, true, Some("toolbar-action")),
            "ui-button ui-button--outline ui-button--sm ui-button--block toolbar-action"
        );
        assert_eq!(
            button_classes(ButtonVariant::Primary, ButtonSize::Md, false, None),
            "ui-button ui-button--primary ui-button--md"
        );
    }

    #[test]
    fn variants_deserialize_from_lowercase_tokens() {
        let variant: ButtonVariant = serde_json::from_str("\"secondary\"").expect("parse");
        assert_eq!(variant, ButtonVariant::Secondary);
    }
}
