//! Raw parameter map → typed, reference-resolved [`FilterSet`].
//!
//! Decoding is biased towards silence: filters arrive from bookmarked URLs,
//! old persisted state and foreign queue configurations, so anything that
//! cannot be understood is dropped (and logged at debug level) instead of
//! failing the whole set.

use tracing::{debug, trace};

use crate::datetime::parse_datetime;
use crate::encoder::encode_filters;
use crate::params::RawParams;
use crate::resolver::ReferenceResolver;
use crate::schema::{
    find_descriptor, strip_negation, Clause, FieldSpec, FilterDescriptor, FilterSet, Polarity,
    ReferenceBinding, ReferenceItem, Sentinel,
};

/// Decode a raw parameter map against the active descriptor table.
///
/// Each occurrence of a key (each element of a list value) decodes into at
/// most one clause, appended in order to `included`, or to `notIncluded` for
/// `not`-prefixed keys. Reference collections must be populated beforehand;
/// an empty collection resolves nothing.
pub fn parse_filters(
    raw: &RawParams,
    descriptors: &[FilterDescriptor],
    resolver: &dyn ReferenceResolver,
) -> FilterSet {
    let mut filters = FilterSet::new();

    for (key, value) in raw {
        let Some((descriptor, polarity)) = route_key(key, descriptors) else {
            trace!(key = %key, "dropping parameter with no filter descriptor");
            continue;
        };

        for occurrence in value.occurrences() {
            match decode_clause(descriptor, &occurrence, resolver) {
                Some(clause) => filters.push(descriptor.name, polarity, clause),
                None => debug!(
                    field = %descriptor.name,
                    kind = %descriptor.kind(),
                    raw = %occurrence,
                    "filter value did not decode, skipping"
                ),
            }
        }
    }

    filters
}

/// Map a raw key to its descriptor and side. Exact names win over the
/// `not` prefix so a field called e.g. `notes` stays reachable.
fn route_key<'a>(
    key: &str,
    descriptors: &'a [FilterDescriptor],
) -> Option<(&'a FilterDescriptor, Polarity)> {
    if let Some(descriptor) = find_descriptor(descriptors, key) {
        return Some((descriptor, Polarity::Include));
    }
    let name = strip_negation(key)?;
    find_descriptor(descriptors, &name).map(|d| (d, Polarity::Exclude))
}

/// Decode one raw occurrence into a clause, or `None` if it must be dropped.
pub fn decode_clause(
    descriptor: &FilterDescriptor,
    raw: &str,
    resolver: &dyn ReferenceResolver,
) -> Option<Clause> {
    if let Some(decode) = descriptor.spec.codec().and_then(|c| c.decode) {
        return decode(raw);
    }

    match &descriptor.spec {
        FieldSpec::Text { .. } => Some(Clause::Text(raw.to_string())),
        FieldSpec::Date { .. } => parse_datetime(raw).map(Clause::Date),
        FieldSpec::Chips { .. } => {
            let tokens: Vec<String> = split_tokens(raw).map(str::to_string).collect();
            (!tokens.is_empty()).then_some(Clause::Chips(tokens))
        }
        FieldSpec::MultiSelect { reference, .. } => {
            log_if_unpopulated(descriptor, reference, resolver);
            let items: Vec<_> = split_tokens(raw)
                .filter_map(|token| resolve_token(descriptor, reference, token, resolver))
                .collect();
            (!items.is_empty()).then_some(Clause::MultiSelect(items))
        }
        FieldSpec::Select {
            reference,
            sentinel,
            ..
        } => decode_select(descriptor, reference, sentinel.as_ref(), raw, resolver),
        FieldSpec::CategorizedValue { reference, .. } => {
            let (category, value) = raw.split_once('|')?;
            log_if_unpopulated(descriptor, reference, resolver);
            let category = resolve_token(descriptor, reference, category.trim(), resolver)?;
            Some(Clause::CategorizedValue {
                category,
                value: value.to_string(),
            })
        }
    }
}

fn decode_select(
    descriptor: &FilterDescriptor,
    reference: &ReferenceBinding,
    sentinel: Option<&Sentinel>,
    raw: &str,
    resolver: &dyn ReferenceResolver,
) -> Option<Clause> {
    let token = raw.trim();
    if let Some(sentinel) = sentinel.filter(|s| s.raw == token) {
        return Some(Clause::Select(sentinel.item(reference.lookup_key)));
    }
    log_if_unpopulated(descriptor, reference, resolver);
    resolve_token(descriptor, reference, token, resolver).map(Clause::Select)
}

fn resolve_token(
    descriptor: &FilterDescriptor,
    reference: &ReferenceBinding,
    token: &str,
    resolver: &dyn ReferenceResolver,
) -> Option<ReferenceItem> {
    let item = resolver.resolve(reference, token);
    if item.is_none() {
        debug!(
            field = %descriptor.name,
            provider = %reference.provider,
            lookup_key = reference.lookup_key,
            token,
            "reference lookup miss"
        );
    }
    item
}

fn log_if_unpopulated(
    descriptor: &FilterDescriptor,
    reference: &ReferenceBinding,
    resolver: &dyn ReferenceResolver,
) {
    if resolver.items(reference.provider).is_empty() {
        debug!(
            field = %descriptor.name,
            provider = %reference.provider,
            "reference collection is empty; decode before population resolves nothing"
        );
    }
}

/// Comma-separated tokens, trimmed, empties removed.
fn split_tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|t| !t.is_empty())
}

/// Re-resolve a filter set against the current reference snapshot.
///
/// Persisted filter sets carry the reference items that were current when
/// they were saved. Round-tripping through the encoder re-resolves them, and
/// clauses whose references have since disappeared are dropped.
pub fn refresh_filters(
    descriptors: &[FilterDescriptor],
    filters: &FilterSet,
    resolver: &dyn ReferenceResolver,
) -> FilterSet {
    parse_filters(&encode_filters(descriptors, filters), descriptors, resolver)
}
