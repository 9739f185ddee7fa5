//! Conversions between declarative models and service shapes.
//!
//! Every nested value object converts both ways through `From`, so a
//! mapper lifted over `Option` keeps absent values absent. Enumerations
//! become strings on the way out and are parsed back on the way in; an
//! unknown string is dropped rather than guessed.

pub mod common;
pub mod dataset;
pub mod job;
pub mod project;
pub mod recipe;
pub mod ruleset;
pub mod schedule;
pub mod tags;

use tracing::debug;

use crate::model::ServiceEnum;

/// Enum to its service string.
pub(crate) fn enum_to_remote<E: ServiceEnum>(value: Option<E>) -> Option<String> {
    value.map(|v| v.as_str().to_string())
}

/// Service string to enum. Unknown values map to `None`.
pub(crate) fn enum_from_remote<E: ServiceEnum>(value: Option<String>) -> Option<E> {
    let raw = value?;
    let parsed = E::from_service_str(&raw);
    if parsed.is_none() {
        debug!(value = %raw, "Dropping unrecognized service enum value");
    }
    parsed
}

/// Convert each element of an optional list.
pub(crate) fn map_list<A, B: From<A>>(items: Option<Vec<A>>) -> Option<Vec<B>> {
    items.map(|items| items.into_iter().map(B::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::job::SampleMode;

    #[test]
    fn test_enum_round_trip() {
        let wire = enum_to_remote(Some(SampleMode::FullDataset));
        assert_eq!(wire.as_deref(), Some("FULL_DATASET"));
        assert_eq!(enum_from_remote::<SampleMode>(wire), Some(SampleMode::FullDataset));
    }

    #[test]
    fn test_enum_absent_and_unknown() {
        assert_eq!(enum_to_remote::<SampleMode>(None), None);
        assert_eq!(enum_from_remote::<SampleMode>(None), None);
        assert_eq!(enum_from_remote::<SampleMode>(Some("HALF".into())), None);
    }
}
