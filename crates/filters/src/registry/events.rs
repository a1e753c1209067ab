//! Event filter table, shared by every queue variant.

use crate::schema::{FilterDescriptor, ReferenceBinding, ReferenceProvider};

pub static EVENT_FILTERS: &[FilterDescriptor] = &[
    FilterDescriptor::text("title", "Title"),
    FilterDescriptor::multi_select(
        "sources",
        "Sources",
        ReferenceBinding::new(ReferenceProvider::Sources),
    ),
    FilterDescriptor::multi_select(
        "severity",
        "Severity",
        ReferenceBinding::new(ReferenceProvider::Severities),
    ),
    FilterDescriptor::multi_select(
        "tags",
        "Tags",
        ReferenceBinding::keyed(ReferenceProvider::Tags, "name"),
    ),
    FilterDescriptor::multi_select(
        "observableTypes",
        "Observable types",
        ReferenceBinding::new(ReferenceProvider::ObservableTypes),
    ),
    FilterDescriptor::categorized(
        "observables",
        "Observables",
        ReferenceBinding::new(ReferenceProvider::ObservableTypes),
    ),
    FilterDescriptor::chips("eventIds", "Event IDs"),
    FilterDescriptor::date("eventTimeAfter", "Event time after"),
    FilterDescriptor::date("eventTimeBefore", "Event time before"),
];
