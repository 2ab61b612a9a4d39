use pretty_assertions::assert_eq;
use rewind::{IdMapper, Record, Registry, SingleIdMapper, Value, ValueMap};
use tests::{init_logging, models::*, value_map};
use uuid::Uuid;

#[test]
fn unknown_property_names_type_and_property() {
    init_logging();

    let mapper = SingleIdMapper::new("pk");
    let err = mapper
        .map_to_id_from_entity(Some(&User::default()))
        .unwrap_err();

    assert!(err.is_property_resolution());
    assert_eq!(
        err.to_string(),
        "cannot resolve property `pk` on `User`: no such property"
    );
}

#[test]
fn resolution_errors_are_not_swallowed_by_map_writes() {
    let mapper = SingleIdMapper::new("pk");
    let mut data = ValueMap::new();

    let err = mapper
        .map_to_map_from_entity(&mut data, Some(&User::default()))
        .unwrap_err();

    assert!(err.is_property_resolution());
    assert!(data.is_empty());
}

#[test]
fn renamed_property_and_type_name() {
    let mapper = SingleIdMapper::new("uuid");
    let key = Uuid::new_v4();
    let doc = Doc {
        key,
        title: "t".to_string(),
        cached_len: 1,
    };

    assert_eq!(
        mapper.map_to_id_from_entity(Some(&doc)).unwrap(),
        Value::Uuid(key)
    );

    let mut restored = Doc::default();
    mapper
        .map_to_entity_from_map(Some(&mut restored), Some(&value_map!("uuid" => key)))
        .unwrap();
    assert_eq!(restored.key, key);

    let err = SingleIdMapper::new("key")
        .map_to_id_from_entity(Some(&doc))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot resolve property `key` on `Document`: no such property"
    );
}

#[test]
fn skipped_fields_are_not_properties() {
    let err = Registry::global()
        .resolve_getter(&Doc::default().record_type(), "cached_len")
        .unwrap_err();

    assert!(err.is_property_resolution());
}

#[test]
fn read_only_identifier() {
    let mapper = SingleIdMapper::new("id");
    let snapshot = Snapshot { id: 3 };

    assert_eq!(
        mapper.map_to_id_from_entity(Some(&snapshot)).unwrap(),
        Value::I64(3)
    );

    let err = mapper
        .map_to_entity_from_entity(Some(&mut Snapshot::default()), Some(&snapshot))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot resolve property `id` on `Snapshot`: property is read-only"
    );
}

#[test]
fn record_type_identity() {
    let a = User::default().record_type();
    let b = User {
        id: 1,
        ..Default::default()
    }
    .record_type();

    assert_eq!(a, b);
    assert_ne!(a, Draft::default().record_type());
    assert_eq!(a.name(), "User");
}
