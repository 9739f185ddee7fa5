//! Tag codec: ordered `{Key, Value}` list <-> key-unique mapping.
//!
//! Absence is preserved in both directions, so "no tags" and "empty tags"
//! stay distinguishable.

use crate::model::Tag;
use crate::remote::Tags;

/// List to mapping. Duplicate keys: the last entry wins.
pub fn to_mapping(tags: Option<&[Tag]>) -> Option<Tags> {
    tags.map(|tags| {
        tags.iter()
            .map(|tag| (tag.key.clone(), tag.value.clone()))
            .collect()
    })
}

/// Mapping to list, ordered by key.
pub fn to_list(tags: Option<&Tags>) -> Option<Vec<Tag>> {
    tags.map(|tags| {
        let mut list: Vec<Tag> = tags
            .iter()
            .map(|(key, value)| Tag::new(key.clone(), value.clone()))
            .collect();
        list.sort_by(|a, b| a.key.cmp(&b.key));
        list
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    #[test]
    fn test_absent_stays_absent() {
        assert_eq!(to_mapping(None), None);
        assert_eq!(to_list(None), None);
    }

    #[test]
    fn test_empty_stays_empty() {
        let empty: Vec<Tag> = vec![];
        let mapping = to_mapping(Some(empty.as_slice())).unwrap();
        assert!(mapping.is_empty());
        assert_eq!(to_list(Some(&mapping)), Some(vec![]));
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let tags = vec![Tag::new("env", "dev"), Tag::new("env", "prod")];
        let mapping = to_mapping(Some(tags.as_slice())).unwrap();
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping["env"], "prod");
    }

    #[test]
    fn test_list_is_sorted_by_key() {
        let mapping: Tags = HashMap::from([
            ("zeta".to_string(), "1".to_string()),
            ("alpha".to_string(), "2".to_string()),
            ("mid".to_string(), "3".to_string()),
        ]);
        let keys: Vec<String> = to_list(Some(&mapping))
            .unwrap()
            .into_iter()
            .map(|t| t.key)
            .collect();
        assert_eq!(keys, vec!["alpha", "mid", "zeta"]);
    }

    proptest! {
        #[test]
        fn round_trip_preserves_pairs(
            pairs in prop::collection::hash_map(
                "[a-zA-Z][a-zA-Z0-9:_.-]{0,15}",
                "[ -~]{0,20}",
                0..12,
            )
        ) {
            let tags: Vec<Tag> = pairs
                .iter()
                .map(|(k, v)| Tag::new(k.clone(), v.clone()))
                .collect();
            let back = to_list(to_mapping(Some(tags.as_slice())).as_ref()).unwrap();

            prop_assert_eq!(back.len(), tags.len());
            for tag in &back {
                prop_assert_eq!(pairs.get(&tag.key), Some(&tag.value));
            }
        }
    }
}
