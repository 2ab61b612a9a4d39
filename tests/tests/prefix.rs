use pretty_assertions::assert_eq;
use rewind::{IdMapper, QueryParameterData, SingleIdMapper, Value, ValueMap};
use tests::{init_logging, models::*, value_map};

#[test]
fn prefix_changes_map_key_not_record_property() {
    init_logging();

    let owner = SingleIdMapper::new("id");
    let reference = owner.prefix_mapped_properties("owner_");
    let user = User {
        id: 12,
        name: "eve".to_string(),
    };

    let mut data = ValueMap::new();
    reference
        .map_to_map_from_entity(&mut data, Some(&user))
        .unwrap();
    assert_eq!(data, value_map!("owner_id" => 12_i64));

    let mut restored = User::default();
    reference
        .map_to_entity_from_map(Some(&mut restored), Some(&data))
        .unwrap();
    assert_eq!(restored.id, 12);

    // The unprefixed mapper does not see the prefixed key.
    assert_eq!(owner.map_to_id_from_map(Some(&data)), Value::Null);
}

#[test]
fn prefixed_query_parameters_use_the_map_key() {
    let reference = SingleIdMapper::new("id").prefix_mapped_properties("owner_");
    let user = User {
        id: 4,
        ..Default::default()
    };

    assert_eq!(
        reference.map_to_query_parameters_from_id(Some(&user)).unwrap(),
        [QueryParameterData::new("owner_id", 4_i64)]
    );
}

#[test]
fn prefixes_stack_on_the_key() {
    let mapper = SingleIdMapper::new("id")
        .prefix_mapped_properties("owner_")
        .prefix_mapped_properties("prev_");
    let user = User {
        id: 8,
        ..Default::default()
    };

    let mut data = ValueMap::new();
    mapper
        .map_to_map_from_entity(&mut data, Some(&user))
        .unwrap();
    assert_eq!(data, value_map!("prev_owner_id" => 8_i64));
}

#[test]
fn prefix_leaves_original_untouched() {
    let owner = SingleIdMapper::new("id");
    let _ = owner.prefix_mapped_properties("owner_");

    assert_eq!(owner.internal_property(), "id");
    assert_eq!(owner.external_property(), "id");
}
