//! Alert filter tables.

use crate::schema::{
    Clause, CustomCodec, FilterDescriptor, ReferenceBinding, ReferenceProvider, Sentinel,
};

const TITLE: FilterDescriptor = FilterDescriptor::text("title", "Title");

const OWNER: FilterDescriptor = FilterDescriptor::select(
    "owner",
    "Owner",
    ReferenceBinding::keyed(ReferenceProvider::Users, "username"),
)
.with_sentinel(Sentinel::new("none", "Unassigned"));

const QUEUE: FilterDescriptor = FilterDescriptor::select(
    "queue",
    "Queue",
    ReferenceBinding::new(ReferenceProvider::Queues),
);

const STATUS: FilterDescriptor = FilterDescriptor::multi_select(
    "status",
    "Status",
    ReferenceBinding::new(ReferenceProvider::Statuses),
);

const SEVERITY: FilterDescriptor = FilterDescriptor::multi_select(
    "severity",
    "Severity",
    ReferenceBinding::new(ReferenceProvider::Severities),
);

const TAGS: FilterDescriptor = FilterDescriptor::multi_select(
    "tags",
    "Tags",
    ReferenceBinding::keyed(ReferenceProvider::Tags, "name"),
);

const SOURCES: FilterDescriptor = FilterDescriptor::multi_select(
    "sources",
    "Sources",
    ReferenceBinding::new(ReferenceProvider::Sources),
);

const OBSERVABLE_TYPES: FilterDescriptor = FilterDescriptor::multi_select(
    "observableTypes",
    "Observable types",
    ReferenceBinding::new(ReferenceProvider::ObservableTypes),
);

const OBSERVABLES: FilterDescriptor = FilterDescriptor::categorized(
    "observables",
    "Observables",
    ReferenceBinding::new(ReferenceProvider::ObservableTypes),
);

const REFERENCES: FilterDescriptor = FilterDescriptor::chips("references", "External references");

const CREATED_AFTER: FilterDescriptor = FilterDescriptor::date("createdAfter", "Created after");

const CREATED_BEFORE: FilterDescriptor = FilterDescriptor::date("createdBefore", "Created before");

const MIN_RISK_SCORE: FilterDescriptor = FilterDescriptor::text("minRiskScore", "Minimum risk score")
    .with_codec(CustomCodec {
        encode: None,
        decode: Some(decode_score),
    });

/// Only finite numbers pass, normalized so `"07.50"` and `"7.5"` compare equal.
fn decode_score(raw: &str) -> Option<Clause> {
    let score: f64 = raw.trim().parse().ok()?;
    score.is_finite().then(|| Clause::Text(score.to_string()))
}

pub static ALERT_FILTERS_INTERNAL: &[FilterDescriptor] = &[
    TITLE,
    OWNER,
    QUEUE,
    STATUS,
    SEVERITY,
    TAGS,
    SOURCES,
    OBSERVABLE_TYPES,
    OBSERVABLES,
    REFERENCES,
    CREATED_AFTER,
    CREATED_BEFORE,
    MIN_RISK_SCORE,
];

pub static ALERT_FILTERS_EXTERNAL: &[FilterDescriptor] = &[
    TITLE,
    STATUS,
    SEVERITY,
    TAGS,
    SOURCES,
    OBSERVABLE_TYPES,
    OBSERVABLES,
    REFERENCES,
    CREATED_AFTER,
    CREATED_BEFORE,
];
