//! Typed [`FilterSet`] → flat backend query parameters.

use tracing::debug;

use crate::datetime::format_datetime;
use crate::params::{FlatParams, ParamValue};
use crate::schema::{
    find_descriptor, Clause, FieldSpec, FilterDescriptor, FilterField, FilterSet, Polarity,
};

/// Encode every field of `filters` known to `descriptors`.
///
/// `included` clauses go under the field name, `notIncluded` under
/// `not` + Capitalized name. Values are always lists, one string per clause,
/// in clause order. Fields without a descriptor are dropped.
pub fn encode_filters(descriptors: &[FilterDescriptor], filters: &FilterSet) -> FlatParams {
    let mut params = FlatParams::new();
    for (name, field) in filters.iter() {
        let Some(descriptor) = find_descriptor(descriptors, name) else {
            debug!(field = %name, "no descriptor for filter field, not encoding");
            continue;
        };
        encode_field(descriptor, field, &mut params);
    }
    params
}

/// Encode filters on top of pass-through parameters (pagination, sort...).
///
/// Pass-through keys keep their position and value unless a filter key
/// shadows them.
pub fn format_object_filters_for_api(
    descriptors: &[FilterDescriptor],
    filters: &FilterSet,
    passthrough: &FlatParams,
) -> FlatParams {
    let mut params = passthrough.clone();
    params.extend(encode_filters(descriptors, filters));
    params
}

fn encode_field(descriptor: &FilterDescriptor, field: &FilterField, params: &mut FlatParams) {
    for (polarity, key) in [
        (Polarity::Include, descriptor.name.to_string()),
        (Polarity::Exclude, descriptor.negated_name()),
    ] {
        let clauses = field.clauses(polarity);
        if clauses.is_empty() {
            continue;
        }
        let values: Vec<String> = clauses
            .iter()
            .filter_map(|clause| {
                let encoded = encode_clause(descriptor, clause);
                if encoded.is_none() {
                    debug!(field = %descriptor.name, kind = %clause.kind(), "clause did not encode, skipping");
                }
                encoded
            })
            .collect();
        if !values.is_empty() {
            params.insert(key, ParamValue::Multiple(values));
        }
    }
}

/// Encode one clause with the descriptor's custom encoder or the kind default.
///
/// A clause whose kind differs from the field's kind is not encoded.
pub fn encode_clause(descriptor: &FilterDescriptor, clause: &Clause) -> Option<String> {
    if clause.kind() != descriptor.kind() {
        debug!(
            field = %descriptor.name,
            expected = %descriptor.kind(),
            found = %clause.kind(),
            "clause kind does not match its field"
        );
        return None;
    }
    if let Some(encode) = descriptor.spec.codec().and_then(|c| c.encode) {
        return encode(clause);
    }
    encode_default(&descriptor.spec, clause)
}

fn encode_default(spec: &FieldSpec, clause: &Clause) -> Option<String> {
    match (spec, clause) {
        (FieldSpec::Text { .. }, Clause::Text(text)) => Some(text.clone()),
        (FieldSpec::Date { .. }, Clause::Date(dt)) => Some(format_datetime(dt)),
        (FieldSpec::Chips { .. }, Clause::Chips(tokens)) => Some(tokens.join(",")),
        (FieldSpec::MultiSelect { reference, .. }, Clause::MultiSelect(items)) => {
            let tokens = items
                .iter()
                .map(|item| item.lookup(reference.lookup_key))
                .collect::<Option<Vec<_>>>()?;
            Some(tokens.join(","))
        }
        (FieldSpec::Select { reference, .. }, Clause::Select(item)) => {
            item.lookup(reference.lookup_key)
        }
        (
            FieldSpec::CategorizedValue { reference, .. },
            Clause::CategorizedValue { category, value },
        ) => {
            let category = category.lookup(reference.lookup_key)?;
            Some(format!("{}|{}", category, value))
        }
        _ => None,
    }
}
