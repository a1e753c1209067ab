//! Compiled-in descriptor tables per object type and queue variant.
//!
//! Tables are static: they are not loaded at runtime and are not part of the
//! wire protocol. External queues expose a subset of the internal alert filters.

mod alerts;
mod events;

use sift_core::{ObjectType, QueueVariant};

use crate::schema::FilterDescriptor;

pub use crate::schema::find_descriptor as find;
pub use alerts::{ALERT_FILTERS_EXTERNAL, ALERT_FILTERS_INTERNAL};
pub use events::EVENT_FILTERS;

/// Descriptor table for an object type viewed through a queue.
pub fn descriptors(object: ObjectType, queue: QueueVariant) -> &'static [FilterDescriptor] {
    match (object, queue) {
        (ObjectType::Alerts, QueueVariant::Internal) => ALERT_FILTERS_INTERNAL,
        (ObjectType::Alerts, QueueVariant::External) => ALERT_FILTERS_EXTERNAL,
        (ObjectType::Events, _) => EVENT_FILTERS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FilterKind;
    use std::collections::HashSet;

    const ALL_TABLES: [(ObjectType, QueueVariant); 4] = [
        (ObjectType::Alerts, QueueVariant::Internal),
        (ObjectType::Alerts, QueueVariant::External),
        (ObjectType::Events, QueueVariant::Internal),
        (ObjectType::Events, QueueVariant::External),
    ];

    #[test]
    fn names_are_unique_per_table() {
        for (object, queue) in ALL_TABLES {
            let table = descriptors(object, queue);
            let names: HashSet<_> = table.iter().map(|d| d.name).collect();
            assert_eq!(names.len(), table.len(), "duplicate name in {object}/{queue}");
        }
    }

    #[test]
    fn negated_names_never_collide_with_plain_names() {
        for (object, queue) in ALL_TABLES {
            let table = descriptors(object, queue);
            for d in table {
                assert!(
                    find(table, &d.negated_name()).is_none(),
                    "{} shadows the negation of {}",
                    d.negated_name(),
                    d.name
                );
            }
        }
    }

    #[test]
    fn reference_kinds_carry_a_binding() {
        for (object, queue) in ALL_TABLES {
            for d in descriptors(object, queue) {
                assert_eq!(d.kind().uses_reference(), d.spec.reference().is_some(), "{}", d.name);
            }
        }
    }

    #[test]
    fn external_alerts_are_a_subset_of_internal() {
        let internal = descriptors(ObjectType::Alerts, QueueVariant::Internal);
        let external = descriptors(ObjectType::Alerts, QueueVariant::External);
        assert!(external.len() < internal.len());
        for d in external {
            assert!(find(internal, d.name).is_some(), "{} missing from internal", d.name);
        }
        assert!(find(external, "owner").is_none());
        assert!(find(external, "queue").is_none());
    }

    #[test]
    fn find_borrows_from_the_table() {
        let table = descriptors(ObjectType::Alerts, QueueVariant::Internal);
        let owner: &'static FilterDescriptor = find(table, &String::from("owner")).unwrap();
        assert_eq!(owner.kind(), FilterKind::Select);
        assert!(find(table, "notOwner").is_none());
    }

    #[test]
    fn events_share_one_table() {
        let internal = descriptors(ObjectType::Events, QueueVariant::Internal);
        let external = descriptors(ObjectType::Events, QueueVariant::External);
        assert!(std::ptr::eq(internal, external));
        assert_eq!(find(internal, "eventTimeBefore").map(|d| d.kind()), Some(FilterKind::Date));
    }
}
