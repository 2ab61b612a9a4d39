use pretty_assertions::assert_eq;
use rewind::{
    IdMapper, IdMapperBuilder, ModificationStore, QueryParameterData, SingleIdMapper, Value,
    ValueMap,
};
use tests::{init_logging, models::*, value_map};

fn bound_mapper() -> SingleIdMapper {
    init_logging();

    let mut builder = SingleIdMapper::builder();
    builder.add("id", ModificationStore::Full).unwrap();
    builder.build().unwrap()
}

#[test]
fn bind_extract_and_query() {
    let mapper = bound_mapper();
    let user = User {
        id: 42,
        name: "ann".to_string(),
    };

    let mut data = ValueMap::new();
    mapper
        .map_to_map_from_entity(&mut data, Some(&user))
        .unwrap();
    assert_eq!(data, value_map!("id" => 42_i64));

    assert_eq!(mapper.map_to_id_from_map(Some(&data)), Value::I64(42));
    assert_eq!(
        mapper.map_to_query_parameters_from_id(Some(&user)).unwrap(),
        [QueryParameterData::new("id", 42_i64)]
    );
}

#[test]
fn round_trip_through_map() {
    let mapper = bound_mapper();
    let user = User {
        id: 7,
        name: "bo".to_string(),
    };

    let mut data = ValueMap::new();
    mapper
        .map_to_map_from_entity(&mut data, Some(&user))
        .unwrap();

    let mut restored = User::default();
    mapper
        .map_to_entity_from_map(Some(&mut restored), Some(&data))
        .unwrap();

    assert_eq!(
        mapper.map_to_id_from_entity(Some(&restored)).unwrap(),
        mapper.map_to_id_from_entity(Some(&user)).unwrap()
    );
    // Only the identifier is carried over.
    assert_eq!(restored.name, "");
}

#[test]
fn extraction_is_consistent() {
    let mapper = bound_mapper();

    for id in [i64::MIN, -1, 0, 1, i64::MAX] {
        let user = User {
            id,
            ..Default::default()
        };

        let mut data = ValueMap::new();
        mapper
            .map_to_map_from_entity(&mut data, Some(&user))
            .unwrap();

        assert_eq!(
            mapper.map_to_id_from_entity(Some(&user)).unwrap(),
            mapper.map_to_id_from_map(Some(&data))
        );
    }
}

#[test]
fn absent_inputs_are_no_ops() {
    let mapper = bound_mapper();
    let data = value_map!("id" => 5_i64);
    let mut user = User {
        id: 1,
        name: "cy".to_string(),
    };
    let original = user.clone();

    mapper.map_to_entity_from_map(None, Some(&data)).unwrap();
    mapper
        .map_to_entity_from_map(Some(&mut user), None)
        .unwrap();
    assert_eq!(mapper.map_to_id_from_map(None), Value::Null);
    assert_eq!(mapper.map_to_id_from_entity(None).unwrap(), Value::Null);
    mapper
        .map_to_entity_from_entity(None, Some(&original))
        .unwrap();
    mapper
        .map_to_entity_from_entity(Some(&mut user), None)
        .unwrap();

    assert_eq!(user, original);
    assert_eq!(data, value_map!("id" => 5_i64));
}

#[test]
fn absent_entity_is_recorded_as_null() {
    let mapper = bound_mapper();
    let mut data = ValueMap::new();

    mapper.map_to_map_from_entity(&mut data, None).unwrap();

    assert!(data.contains_key("id"));
    assert_eq!(data.get("id"), Some(&Value::Null));
}

#[test]
fn copy_between_entities() {
    let mapper = bound_mapper();
    let source = User {
        id: 99,
        name: "src".to_string(),
    };
    let mut target = User {
        id: 1,
        name: "dst".to_string(),
    };

    mapper
        .map_to_entity_from_entity(Some(&mut target), Some(&source))
        .unwrap();

    assert_eq!(target.id, 99);
    assert_eq!(target.name, "dst");
}

#[test]
fn copy_between_record_types() {
    let mapper = bound_mapper();
    let source = Draft {
        id: Some(3),
        body: String::new(),
    };
    let mut target = Draft::default();

    mapper
        .map_to_entity_from_entity(Some(&mut target), Some(&source))
        .unwrap();
    assert_eq!(target.id, Some(3));

    // `User::id` cannot hold a null identifier
    let err = mapper
        .map_to_entity_from_entity(Some(&mut User::default()), Some(&Draft::default()))
        .unwrap_err();
    assert!(err.is_type_conversion());
}

#[test]
fn missing_key_loads_as_null() {
    let mapper = bound_mapper();
    let mut draft = Draft {
        id: Some(10),
        body: "text".to_string(),
    };

    mapper
        .map_to_entity_from_map(Some(&mut draft), Some(&ValueMap::new()))
        .unwrap();
    assert_eq!(draft.id, None);

    let err = mapper
        .map_to_entity_from_map(Some(&mut User::default()), Some(&ValueMap::new()))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "failed to set property `id` on `User`: cannot convert Null to i64"
    );
}

#[test]
fn values_are_not_coerced() {
    let mapper = bound_mapper();
    let mut user = User::default();

    let err = mapper
        .map_to_entity_from_map(Some(&mut user), Some(&value_map!("id" => 5_i32)))
        .unwrap_err();

    assert!(err.is_type_conversion());
    assert_eq!(user.id, 0);
}

#[test]
fn second_binding_is_rejected() {
    init_logging();

    let mut builder = SingleIdMapper::builder();
    builder.add("id", ModificationStore::Full).unwrap();

    let err = builder.add("name", ModificationStore::Full).unwrap_err();
    assert!(err.is_configuration());

    let mapper = builder.build().unwrap();
    let user = User {
        id: 5,
        name: "dee".to_string(),
    };
    assert_eq!(
        mapper.map_to_id_from_entity(Some(&user)).unwrap(),
        Value::I64(5)
    );
}
