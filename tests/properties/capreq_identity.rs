//! Property tests for record equality and hashing.

use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, HashMap};
use std::hash::{Hash, Hasher};

use proptest::prelude::*;

use capreq::{Attr, CapReq, CapReqMode, Capability, Requirement, ResourceId, Version};

use crate::common::{ForeignCapability, ForeignRequirement};

fn key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z.]{0,8}").unwrap()
}

fn attr() -> impl Strategy<Value = Attr> {
    prop_oneof![
        "[a-zA-Z0-9.]{0,12}".prop_map(Attr::from),
        any::<i64>().prop_map(Attr::from),
        (-1.0e6f64..1.0e6).prop_map(Attr::from),
        (0u32..20, 0u32..20, 0u32..20).prop_map(|(a, b, c)| Attr::from(Version::new(a, b, c))),
    ]
}

fn directives() -> impl Strategy<Value = BTreeMap<String, String>> {
    proptest::collection::btree_map(key(), "[a-z0-9()=.]{0,16}", 0..5)
}

fn attributes() -> impl Strategy<Value = BTreeMap<String, Attr>> {
    proptest::collection::btree_map(key(), attr(), 0..5)
}

fn mode() -> impl Strategy<Value = CapReqMode> {
    prop_oneof![Just(CapReqMode::Capability), Just(CapReqMode::Requirement)]
}

fn owner() -> impl Strategy<Value = Option<ResourceId>> {
    proptest::option::of("[a-z.]{1,12}".prop_map(ResourceId::from))
}

prop_compose! {
    fn record()(
        mode in mode(),
        namespace in key(),
        owner in owner(),
        directives in directives(),
        attributes in attributes(),
    ) -> CapReq {
        CapReq::new(Some(mode), Some(&namespace), owner, directives, attributes)
            .expect("generated record is valid")
    }
}

fn std_hash(record: &CapReq) -> u64 {
    let mut hasher = DefaultHasher::new();
    record.hash(&mut hasher);
    hasher.finish()
}

fn rebuild(record: &CapReq) -> CapReq {
    CapReq::new(
        Some(record.mode()),
        Some(record.namespace()),
        record.owner().cloned(),
        record.directives().clone(),
        record.attributes().clone(),
    )
    .expect("rebuilding a valid record")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every record equals itself and hashes stably.
    #[test]
    fn property_reflexive_and_stable_hash(r in record()) {
        prop_assert!(r == r);
        prop_assert_eq!(r.hash_code(), r.hash_code());
        prop_assert_eq!(std_hash(&r), std_hash(&r));
    }

    /// PROPERTY: Records built from the same parts are equal, both ways, with equal hashes.
    #[test]
    fn property_same_parts_equal_and_hash_equal(r in record()) {
        let twin = rebuild(&r);
        prop_assert!(r == twin);
        prop_assert!(twin == r);
        prop_assert_eq!(r.hash_code(), twin.hash_code());
        prop_assert_eq!(std_hash(&r), std_hash(&twin));
    }

    /// PROPERTY: Map insertion order never affects equality or hash.
    #[test]
    fn property_insertion_order_irrelevant(
        mode in mode(),
        namespace in key(),
        directives in directives(),
        attributes in attributes(),
        seed in any::<u64>(),
    ) {
        let forward_dirs: Vec<_> = directives.clone().into_iter().collect();
        let forward_attrs: Vec<_> = attributes.clone().into_iter().collect();
        let mut shuffled_dirs = forward_dirs.clone();
        let mut shuffled_attrs = forward_attrs.clone();
        let len = shuffled_dirs.len().max(1);
        shuffled_dirs.rotate_left((seed as usize) % len);
        shuffled_dirs.reverse();
        let len = shuffled_attrs.len().max(1);
        shuffled_attrs.rotate_left((seed as usize) % len);
        shuffled_attrs.reverse();

        let a = CapReq::new(Some(mode), Some(&namespace), None, forward_dirs, forward_attrs).unwrap();
        let b = CapReq::new(Some(mode), Some(&namespace), None, shuffled_dirs, shuffled_attrs).unwrap();
        prop_assert!(a == b);
        prop_assert_eq!(a.hash_code(), b.hash_code());
    }

    /// PROPERTY: Records differing only in mode are never equal.
    #[test]
    fn property_mode_separates(r in record()) {
        let flipped = match r.mode() {
            CapReqMode::Capability => CapReqMode::Requirement,
            CapReqMode::Requirement => CapReqMode::Capability,
        };
        let other = CapReq::new(
            Some(flipped),
            Some(r.namespace()),
            r.owner().cloned(),
            r.directives().clone(),
            r.attributes().clone(),
        )
        .unwrap();
        prop_assert!(r != other);
        prop_assert!(other != r);
    }

    /// PROPERTY: Mutating the caller's maps after construction changes nothing.
    #[test]
    fn property_construction_copies_inputs(
        mode in mode(),
        namespace in key(),
        directives in directives(),
        attributes in attributes(),
    ) {
        let mut dirs: HashMap<String, String> = directives.into_iter().collect();
        let mut attrs: HashMap<String, Attr> = attributes.into_iter().collect();
        let r = CapReq::new(Some(mode), Some(&namespace), None, &dirs, &attrs).unwrap();
        let before = rebuild(&r);
        let hash_before = r.hash_code();

        dirs.insert("zz.injected".to_string(), "x".to_string());
        attrs.clear();

        prop_assert!(r == before);
        prop_assert_eq!(r.hash_code(), hash_before);
        prop_assert!(!r.directives().contains_key("zz.injected"));
    }

    /// PROPERTY: A capability record equals a foreign capability with the same parts.
    #[test]
    fn property_foreign_capability_equal(r in record()) {
        let foreign = ForeignCapability::mirror(&r);
        let view: &dyn Capability = &foreign;
        prop_assert_eq!(r == *view, r.mode().is_capability());
    }

    /// PROPERTY: A requirement record equals a foreign requirement with the same parts.
    #[test]
    fn property_foreign_requirement_equal(r in record()) {
        let foreign = ForeignRequirement::mirror(&r);
        let view: &dyn Requirement = &foreign;
        prop_assert_eq!(r == *view, r.mode().is_requirement());
    }

    /// PROPERTY: Any present namespace, including the empty one, builds a record.
    #[test]
    fn property_construction_accepts_any_namespace(namespace in ".{0,16}", mode in mode()) {
        let empty: [(&str, &str); 0] = [];
        let no_attrs: [(&str, Attr); 0] = [];
        let r = CapReq::new(Some(mode), Some(&namespace), None, empty, no_attrs);
        prop_assert!(r.is_ok());
        let r = r.unwrap();
        prop_assert_eq!(r.namespace(), namespace.as_str());
        let _ = r.hash_code();
        let _ = r.to_string();
    }
}
