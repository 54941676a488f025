//! End-to-end scenarios for encode, decode, late binding and the registry.

use serde_json::json;
use syncgraph_codec::{to_json_value, SyncEntry, SyncValue};
use syncgraph_core::{
    broadcast, create_sync_data, is_syncable, late_bind_member, sync_list_items, AsAny, SyncData,
    SyncError, SyncKind, SyncProvider, SyncType, Syncable,
};
use syncgraph_testkit::prelude::*;

#[test]
fn complex_encodes_in_declaration_order() {
    let c1 = Complex::new(21.0, 7.0);
    let data = create_sync_data(&c1).unwrap();
    assert_eq!(
        to_json_value(&data).unwrap(),
        json!([
            {"prop": "real", "value": 21.0, "isArray": false},
            {"prop": "imaginary", "value": 7.0, "isArray": false},
        ])
    );

    let mut c2 = Complex::new(0.0, 0.0);
    c2.sync_from(&data).unwrap();
    assert_eq!(c2, c1);
}

#[test]
fn holder_decode_fabricates_a_new_complex() {
    let h1 = Holder {
        value: Some(Complex::new(1.0, 2.0)),
    };
    let mut h2: Holder = fresh();
    h2.sync_from(&h1.to_sync_data().unwrap()).unwrap();

    assert_eq!(h2.value, Some(Complex::new(1.0, 2.0)));
    let (a, b) = (h1.value.as_ref().unwrap(), h2.value.as_ref().unwrap());
    assert!(!std::ptr::eq(a, b));

    h2.value.as_mut().unwrap().real = 99.0;
    assert_eq!(h1.value.as_ref().unwrap().real, 1.0);
}

#[test]
fn holder_decode_replaces_rather_than_merges() {
    let source = Holder {
        value: Some(Complex::new(3.0, 4.0)),
    };
    let mut target: Holder = fresh();
    target.value = Some(Complex::new(-1.0, -1.0));
    target.sync_from(&source.to_sync_data().unwrap()).unwrap();
    assert_eq!(target.value, Some(Complex::new(3.0, 4.0)));

    target.sync_from(&Holder::default().to_sync_data().unwrap()).unwrap();
    assert_eq!(target.value, None);
}

#[test]
fn node_chain_round_trips() {
    let n1 = Node::chain(&[1020, 27]);
    let mut n2: Node = fresh();
    n2.sync_from(&n1.to_sync_data().unwrap()).unwrap();

    assert_eq!(n2.num, 1020);
    let next = n2.next.as_ref().unwrap();
    assert_eq!(next.num, 27);
    assert!(next.next.is_none());
    assert!(!std::ptr::eq(next.as_ref(), n1.next.as_deref().unwrap()));
}

#[test]
fn long_chain_round_trips() {
    let values: Vec<i64> = (0..64).collect();
    let source = Node::chain(&values);
    let mut target: Node = fresh();
    target.sync_from(&source.to_sync_data().unwrap()).unwrap();
    assert_eq!(target.values(), values);
}

#[test]
fn late_binding_is_one_shot() {
    fresh::<Node>();
    let schema = Node::type_schema();
    assert!(schema.is_fully_bound());
    assert_eq!(
        schema.descriptor("next").unwrap().kind(),
        SyncKind::TypeRef(Node::TYPE_TAG)
    );

    // Later calls, even naming another type, change nothing.
    late_bind_member(&Node::default(), "next", Complex::TYPE_TAG).unwrap();
    assert_eq!(
        schema.descriptor("next").unwrap().kind(),
        SyncKind::TypeRef(Node::TYPE_TAG)
    );
    assert!(!schema.descriptor("next").unwrap().allow_late_binding());
}

#[test]
fn late_bind_unknown_member_fails() {
    let err = late_bind_member(&Node::default(), "prev", Node::TYPE_TAG).unwrap_err();
    assert!(matches!(err, SyncError::UnknownMember { .. }));
}

#[test]
fn record_metadata_matches_declaration() {
    let schema = DataRecord::type_schema();
    let names: Vec<_> = schema.table().names().map(str::to_owned).collect();
    assert_eq!(names, vec!["numval", "stringval", "complexVal"]);

    let stringval = schema.descriptor("stringval").unwrap();
    assert_eq!(stringval.prop_name(), "_stringval");
    assert_eq!(stringval.kind(), SyncKind::Primitive);
    assert!(!stringval.allow_late_binding());

    let complex = schema.descriptor("complexVal").unwrap();
    assert_eq!(complex.kind(), SyncKind::TypeRef(Complex::TYPE_TAG));
    assert!(schema.descriptor("val").is_none());

    fixture_provider();
    assert!(schema.provider().unwrap().ptr_eq(fixture_provider()));
}

#[test]
fn record_round_trip_keeps_local_state() {
    let source = DataRecord::new(42, "synced", Some(Complex::new(5.0, 6.0)), "source only");
    let mut target: DataRecord = fresh();
    target.sync_from(&source.to_sync_data().unwrap()).unwrap();

    assert_eq!(target.numval, 42);
    assert_eq!(target.stringval, "synced");
    assert_eq!(target.complex_val, Some(Complex::new(5.0, 6.0)));
    assert_eq!(target.val, "dont sync this");
}

#[test]
fn record_defers_derived_state_until_decode_ends() {
    let source = DataRecord::new(7, "n=", None, "");
    let mut target: DataRecord = fresh();
    let builds_before = target.summary_builds();

    target.sync_from(&source.to_sync_data().unwrap()).unwrap();
    assert_eq!(target.summary(), "n=7");
    assert_eq!(target.summary_builds(), builds_before + 1);
    assert!(!target.is_sync_in_progress());
}

#[test]
fn record_accepts_published_alias() {
    let mut target: DataRecord = fresh();
    let data = SyncData::from(vec![SyncEntry::primitive("stringval", "by name")]);
    target.sync_from(&data).unwrap();
    assert_eq!(target.stringval, "by name");
}

#[test]
fn unknown_property_fails_fast() {
    let mut target = Complex::default();
    let data = SyncData::from(vec![
        SyncEntry::primitive("real", 1.0),
        SyncEntry::primitive("phase", 0.5),
    ]);
    let err = target.sync_from(&data).unwrap_err();
    assert!(matches!(err, SyncError::UnknownMember { ref member, .. } if member == "phase"));
    assert_eq!(target, Complex::default());
}

#[test]
fn rejected_primitive_fails_before_any_write() {
    let mut target = Complex::default();
    let data = SyncData::from(vec![
        SyncEntry::primitive("real", 1.0),
        SyncEntry::primitive("imaginary", "not a number"),
    ]);
    let err = target.sync_from(&data).unwrap_err();
    assert!(matches!(err, SyncError::FieldMismatch { ref member, .. } if member == "imaginary"));
    assert_eq!(target, Complex::default());

    let mut record = DataRecord::default();
    let builds = record.summary_builds();
    let data = SyncData::from(vec![
        SyncEntry::primitive("numval", 5),
        SyncEntry::primitive("_stringval", 3),
    ]);
    assert!(record.sync_from(&data).is_err());
    assert_eq!(record.numval, 1);
    assert_eq!(record.stringval, "hello ");
    assert_eq!(record.summary_builds(), builds + 1);
}

#[test]
fn roster_round_trips_elements() {
    let source = Roster {
        items: vec![Complex::new(1.0, 1.0), Complex::new(2.0, 3.0)],
    };
    let data = source.to_sync_data().unwrap();
    let entry = data.get("items").unwrap();
    assert!(entry.is_array);
    assert!(matches!(&entry.value, SyncValue::Elements(items) if items.len() == 2));

    let mut target: Roster = fresh();
    target.sync_from(&data).unwrap();
    assert_eq!(target, source);
}

#[test]
fn registry_rejects_unknown_names() {
    let err = fixture_provider().create("Quaternion").err().unwrap();
    assert!(matches!(err, SyncError::UnknownType { ref name } if name == "Quaternion"));
}

#[test]
fn registry_creates_fresh_defaults() {
    let provider = fixture_provider();
    let created = provider.create(Complex::TYPE_TAG).unwrap();
    assert!(is_syncable(&*created));
    let complex = (*created).as_any().downcast_ref::<Complex>().unwrap();
    assert_eq!(complex, &Complex::default());
}

#[test]
fn separate_provider_does_not_steal_association() {
    fixture_provider();
    let other = SyncProvider::new();
    other.register::<Holder>().unwrap();
    assert!(Holder::type_schema().provider().unwrap().ptr_eq(fixture_provider()));
    assert!(other.contains(Holder::TYPE_TAG));
}

#[test]
fn list_items_follow_the_authority() {
    let mut items = vec![
        Complex::new(0.0, 0.0),
        Complex::new(0.0, 0.0),
        Complex::new(8.0, 9.0),
    ];
    assert_eq!(sync_list_items(&mut items, 2).unwrap(), 2);
    assert!(items.iter().all(|c| *c == Complex::new(8.0, 9.0)));

    let err = sync_list_items(&mut items, 3).unwrap_err();
    assert!(matches!(err, SyncError::AuthorityOutOfRange { index: 3, len: 3 }));
}

#[test]
fn broadcast_reaches_every_client() {
    let authority = Roster {
        items: vec![Complex::new(1.0, 2.0)],
    };
    let mut clients: Vec<Roster> = (0..3).map(|_| fresh()).collect();
    assert_eq!(broadcast(&authority, clients.iter_mut()).unwrap(), 3);
    assert!(clients.iter().all(|client| *client == authority));
}

#[test]
fn stress_helpers_report_no_failures() {
    let config = StressConfig::light();
    assert_eq!(stress_concurrent_encode(&config).failed_ops, 0);
    assert_eq!(stress_concurrent_round_trip(&config).failed_ops, 0);
    assert_eq!(stress_concurrent_create(&config).failed_ops, 0);
}
