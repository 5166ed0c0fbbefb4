//! Deterministic element ids for label/description/message wiring.

use std::cell::Cell;
use std::rc::Rc;

use leptos::*;

/// Hands out `prefix-1`, `prefix-2`, ... from its own counter.
///
/// Clones share the counter, so a generator provided at an app root never repeats an id inside
/// that app. Separate generators are independent of each other.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: Rc<str>,
    next: Rc<Cell<u64>>,
}

impl IdGenerator {
    /// Creates a generator. The prefix is reduced to lowercase ASCII letters, digits, and `-`.
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: Rc::from(sanitize_prefix(prefix).as_str()),
            next: Rc::new(Cell::new(1)),
        }
    }

    /// Prefix every id starts with.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Next unused id.
    pub fn next_id(&self) -> String {
        let value = self.next.get();
        self.next.set(value + 1);
        format!("{}-{value}", self.prefix)
    }

    /// Next unused id with a kind suffix, for example `app-3-text-field`.
    pub fn next_id_for(&self, kind: &str) -> String {
        let id = self.next_id();
        let kind = sanitize_prefix(kind);
        format!("{id}-{kind}")
    }

    /// Number of ids issued so far.
    pub fn issued(&self) -> u64 {
        self.next.get() - 1
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new("ui")
    }
}

fn sanitize_prefix(raw: &str) -> String {
    let mut sanitized = String::with_capacity(raw.len());
    for ch in raw.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            sanitized.push(ch.to_ascii_lowercase());
        } else if !sanitized.ends_with('-') && !sanitized.is_empty() {
            sanitized.push('-');
        }
    }
    while sanitized.ends_with('-') {
        sanitized.pop();
    }
    if sanitized.is_empty() {
        sanitized.push_str("ui");
    }
    sanitized
}

/// Related ids of one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIds {
    /// Control id, referenced by the label's `for`.
    pub input: String,
    /// Label id.
    pub label: String,
    /// Helper text id.
    pub description: String,
    /// Validation message id.
    pub message: String,
}

impl FieldIds {
    /// Derives every field id from `base`.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            label: format!("{base}-label"),
            description: format!("{base}-description"),
            message: format!("{base}-message"),
            input: base,
        }
    }

    /// `aria-describedby` value for whichever helper elements are rendered.
    pub fn described_by(&self, has_description: bool, has_message: bool) -> Option<String> {
        let ids: Vec<&str> = [
            has_description.then_some(self.description.as_str()),
            has_message.then_some(self.message.as_str()),
        ]
        .into_iter()
        .flatten()
        .collect();
        if ids.is_empty() {
            None
        } else {
            Some(ids.join(" "))
        }
    }
}

thread_local! {
    static FALLBACK_IDS: IdGenerator = IdGenerator::new("ui");
}

/// Scopes `generator` to the current component subtree.
pub fn provide_id_generator(generator: IdGenerator) {
    provide_context(generator);
}

/// Generator for the current subtree.
///
/// Outside any [`provide_id_generator`] scope this falls back to a per-thread `ui-N` generator so
/// ids stay unique.
pub fn use_id_generator() -> IdGenerator {
    use_context::<IdGenerator>().unwrap_or_else(|| FALLBACK_IDS.with(Clone::clone))
}

/// Field ids for one component instance: the caller's explicit id wins, otherwise a fresh id is
/// drawn once from the subtree generator.
pub fn use_field_ids(explicit_id: Option<String>, kind: &str) -> FieldIds {
    let base = explicit_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| use_id_generator().next_id_for(kind));
    FieldIds::new(base)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ids_count_up_per_generator() {
        let ids = IdGenerator::new("checkout");
        assert_eq!(ids.next_id(), "checkout-1");
        assert_eq!(ids.next_id(), "checkout-2");
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn clones_share_a_counter_and_generators_are_independent() {
        let root = IdGenerator::new("app");
        let handle = root.clone();
        let other = IdGenerator::new("app");

        assert_eq!(root.next_id(), "app-1");
        assert_eq!(handle.next_id(), "app-2");
        assert_eq!(other.next_id(), "app-1");
    }

    #[test]
    fn prefixes_are_sanitized() {
        assert_eq!(IdGenerator::new("  Sign Up Form! ").prefix(), "sign-up-form");
        assert_eq!(IdGenerator::new("***").prefix(), "ui");
        assert_eq!(IdGenerator::new("app").next_id_for("Text Field"), "app-1-text-field");
    }

    #[test]
    fn field_ids_derive_from_base() {
        let ids = FieldIds::new("email");
        assert_eq!(ids.input, "email");
        assert_eq!(ids.label, "email-label");
        assert_eq!(ids.described_by(false, false), None);
        assert_eq!(ids.described_by(true, false).as_deref(), Some("email-description"));
        assert_eq!(
            ids.described_by(true, true).as_deref(),
            Some("email-description email-message")
        );
    }

    #[test]
    fn explicit_ids_win_and_generated_ids_come_from_context() {
        let runtime = create_runtime();

        provide_id_generator(IdGenerator::new("form"));
        assert_eq!(use_field_ids(Some("name".to_string()), "text-field").input, "name");
        assert_eq!(use_field_ids(None, "text-field").input, "form-1-text-field");
        assert_eq!(use_field_ids(Some(" ".to_string()), "select").input, "form-2-select");

        runtime.dispose();
    }
}
