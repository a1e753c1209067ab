//! Filter descriptors: the static definition of one filterable field.

use super::clause::Clause;
use super::kind::FilterKind;
use super::reference::{ReferenceBinding, Sentinel};

/// Per-field encoder override. `None` rejects the clause.
pub type EncodeFn = fn(&Clause) -> Option<String>;

/// Per-field decoder override. `None` rejects the raw occurrence.
pub type DecodeFn = fn(&str) -> Option<Clause>;

/// Optional replacement for a kind's default string codec.
#[derive(Debug, Clone, Copy)]
pub struct CustomCodec {
    pub encode: Option<EncodeFn>,
    pub decode: Option<DecodeFn>,
}

/// Kind-specific configuration of a field.
///
/// Reference bindings only exist on the kinds that resolve tokens, so a
/// `Select` without a provider cannot be described.
#[derive(Debug, Clone, Copy)]
pub enum FieldSpec {
    Text {
        codec: Option<CustomCodec>,
    },
    Select {
        reference: ReferenceBinding,
        sentinel: Option<Sentinel>,
        codec: Option<CustomCodec>,
    },
    MultiSelect {
        reference: ReferenceBinding,
        codec: Option<CustomCodec>,
    },
    Chips {
        codec: Option<CustomCodec>,
    },
    Date {
        codec: Option<CustomCodec>,
    },
    CategorizedValue {
        reference: ReferenceBinding,
        codec: Option<CustomCodec>,
    },
}

impl FieldSpec {
    pub fn kind(&self) -> FilterKind {
        match self {
            FieldSpec::Text { .. } => FilterKind::Text,
            FieldSpec::Select { .. } => FilterKind::Select,
            FieldSpec::MultiSelect { .. } => FilterKind::MultiSelect,
            FieldSpec::Chips { .. } => FilterKind::Chips,
            FieldSpec::Date { .. } => FilterKind::Date,
            FieldSpec::CategorizedValue { .. } => FilterKind::CategorizedValue,
        }
    }

    pub fn codec(&self) -> Option<&CustomCodec> {
        match self {
            FieldSpec::Text { codec }
            | FieldSpec::Select { codec, .. }
            | FieldSpec::MultiSelect { codec, .. }
            | FieldSpec::Chips { codec }
            | FieldSpec::Date { codec }
            | FieldSpec::CategorizedValue { codec, .. } => codec.as_ref(),
        }
    }

    pub fn reference(&self) -> Option<&ReferenceBinding> {
        match self {
            FieldSpec::Select { reference, .. }
            | FieldSpec::MultiSelect { reference, .. }
            | FieldSpec::CategorizedValue { reference, .. } => Some(reference),
            FieldSpec::Text { .. } | FieldSpec::Chips { .. } | FieldSpec::Date { .. } => None,
        }
    }
}

/// One filterable field. `name` is also the backend query-parameter base name.
#[derive(Debug, Clone, Copy)]
pub struct FilterDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub spec: FieldSpec,
}

impl FilterDescriptor {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            spec: FieldSpec::Text { codec: None },
        }
    }

    pub const fn chips(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            spec: FieldSpec::Chips { codec: None },
        }
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            spec: FieldSpec::Date { codec: None },
        }
    }

    pub const fn select(
        name: &'static str,
        label: &'static str,
        reference: ReferenceBinding,
    ) -> Self {
        Self {
            name,
            label,
            spec: FieldSpec::Select {
                reference,
                sentinel: None,
                codec: None,
            },
        }
    }

    pub const fn multi_select(
        name: &'static str,
        label: &'static str,
        reference: ReferenceBinding,
    ) -> Self {
        Self {
            name,
            label,
            spec: FieldSpec::MultiSelect {
                reference,
                codec: None,
            },
        }
    }

    pub const fn categorized(
        name: &'static str,
        label: &'static str,
        reference: ReferenceBinding,
    ) -> Self {
        Self {
            name,
            label,
            spec: FieldSpec::CategorizedValue {
                reference,
                codec: None,
            },
        }
    }

    /// Attach a "no value" sentinel. Only meaningful for `Select`; other kinds are returned unchanged.
    pub const fn with_sentinel(self, sentinel: Sentinel) -> Self {
        let spec = match self.spec {
            FieldSpec::Select {
                reference, codec, ..
            } => FieldSpec::Select {
                reference,
                sentinel: Some(sentinel),
                codec,
            },
            other => other,
        };
        Self { spec, ..self }
    }

    pub const fn with_codec(self, codec: CustomCodec) -> Self {
        let codec = Some(codec);
        let spec = match self.spec {
            FieldSpec::Text { .. } => FieldSpec::Text { codec },
            FieldSpec::Select {
                reference,
                sentinel,
                ..
            } => FieldSpec::Select {
                reference,
                sentinel,
                codec,
            },
            FieldSpec::MultiSelect { reference, .. } => FieldSpec::MultiSelect { reference, codec },
            FieldSpec::Chips { .. } => FieldSpec::Chips { codec },
            FieldSpec::Date { .. } => FieldSpec::Date { codec },
            FieldSpec::CategorizedValue { reference, .. } => {
                FieldSpec::CategorizedValue { reference, codec }
            }
        };
        Self { spec, ..self }
    }

    pub fn kind(&self) -> FilterKind {
        self.spec.kind()
    }

    /// Parameter key for excluded clauses: `"not"` + capitalized name.
    pub fn negated_name(&self) -> String {
        negated_key(self.name)
    }
}

/// `"owner"` → `"notOwner"`.
pub fn negated_key(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => format!("not{}{}", first.to_uppercase(), chars.as_str()),
        None => "not".to_string(),
    }
}

/// Inverse of [`negated_key`]: `"notOwner"` → `Some("owner")`.
///
/// Requires an uppercase letter right after the prefix, so names that merely
/// start with "not" (e.g. `"notes"`) are not treated as negations.
pub fn strip_negation(key: &str) -> Option<String> {
    let rest = key.strip_prefix("not")?;
    let mut chars = rest.chars();
    let first = chars.next()?;
    if !first.is_uppercase() {
        return None;
    }
    Some(format!("{}{}", first.to_lowercase(), chars.as_str()))
}

/// Look up a descriptor by name.
pub fn find_descriptor<'a>(
    descriptors: &'a [FilterDescriptor],
    name: &str,
) -> Option<&'a FilterDescriptor> {
    descriptors.iter().find(|d| d.name == name)
}
