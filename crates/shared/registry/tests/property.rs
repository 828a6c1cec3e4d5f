use canon_registry::prelude::*;
use proptest::collection::hash_set;
use proptest::prelude::*;

fn identities() -> impl Strategy<Value = Vec<String>> {
    hash_set("[A-Z][A-Z_]{0,11}", 1..24).prop_map(|set| set.into_iter().collect())
}

fn label(position: usize) -> String {
    format!("label-{position}")
}

fn declare(identities: &[String]) -> VariantSet<(usize, String)> {
    identities
        .iter()
        .enumerate()
        .fold(VariantSet::<(usize, String)>::builder("Generated"), |builder, (at, identity)| {
            builder.variant(identity.clone(), (at, label(at)))
        })
        .alternate_key("label", KeyPolicy::ignore_case(), |(_, label)| Some(label.as_str()))
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn every_identity_resolves_to_its_declaration(ids in identities()) {
        let set = declare(&ids);
        prop_assert_eq!(set.len(), ids.len());
        for (position, identity) in ids.iter().enumerate() {
            let record = set.by_identity(identity).unwrap();
            prop_assert_eq!(record.data().0, position);
            prop_assert_eq!(record.ordinal().get(), position);
        }
    }

    #[test]
    fn canonical_codec_round_trips(ids in identities()) {
        let codec = Codec::canonical(declare(&ids)).unwrap();
        for variant in codec.set().iter() {
            let encoded = codec.encode(variant).unwrap();
            prop_assert_eq!(codec.decode(encoded).unwrap(), variant);
        }
    }

    #[test]
    fn labels_resolve_in_any_casing(ids in identities()) {
        let codec = Codec::builder(declare(&ids))
            .represent(Representation::Alternate("label".into()))
            .resolve(Resolution::Identity)
            .resolve(Resolution::Alternate("label".into()))
            .build()
            .unwrap();
        for variant in codec.set().iter() {
            let encoded = codec.encode(variant).unwrap();
            prop_assert_eq!(encoded, variant.data().1.as_str());
            prop_assert_eq!(codec.decode(&encoded.to_uppercase()).unwrap(), variant);
            prop_assert_eq!(codec.decode(variant.identity()).unwrap(), variant);
        }
    }

    #[test]
    fn undeclared_input_is_rejected(ids in identities(), input in "[a-z0-9 -]{1,16}") {
        prop_assume!((0..ids.len()).all(|position| !label(position).eq_ignore_ascii_case(&input)));
        let set = declare(&ids);
        let codec = Codec::builder(declare(&ids))
            .resolve(Resolution::Identity)
            .resolve(Resolution::Alternate("label".into()))
            .build()
            .unwrap();
        prop_assert!(set.by_identity(&input).is_err());
        prop_assert!(set.by_alternate("label", &input).is_err());
        let err = codec.decode(&input).unwrap_err();
        prop_assert_eq!(err.input(), input.as_str());
    }

    #[test]
    fn ordinal_order_is_transitive(ids in identities(), a in any::<usize>(), b in any::<usize>(), c in any::<usize>()) {
        let set = declare(&ids);
        let pick = |i: usize| &set.records()[i % set.len()];
        let (a, b, c) = (pick(a), pick(b), pick(c));
        if a < b && b < c {
            prop_assert!(a < c);
        }
        prop_assert_eq!(a.partial_cmp(b), Some(a.ordinal().cmp(&b.ordinal())));
    }
}
