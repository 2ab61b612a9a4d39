use pretty_assertions::assert_eq;
use rewind::{Config, Metadata, Parameters, Value, ValueMap};
use tests::{init_logging, models::*, value_map};

fn metadata() -> Metadata {
    init_logging();

    let config = Config::from_json(
        r#"{
            "entities": [
                { "name": "User", "id": "id" },
                { "name": "Document", "id": "uuid", "modification_store": "full" }
            ],
            "references": [
                { "name": "Document.owner", "target": "User", "prefix": "owner_" }
            ]
        }"#,
    )
    .unwrap();

    Metadata::from_config(&config).unwrap()
}

#[test]
fn config_builds_every_entity() {
    let metadata = metadata();

    assert_eq!(
        metadata.entities().collect::<Vec<_>>(),
        ["User", "Document", "Document.owner"]
    );
    assert!(metadata.id_mapper("Post").is_none());
}

#[test]
fn replay_revision_row() {
    let metadata = metadata();
    let owner = metadata.id_mapper("Document.owner").unwrap();
    let user_mapper = metadata.id_mapper("User").unwrap();

    // A stored revision row references its owner under a prefixed key.
    let row: ValueMap = value_map!(
        "owner_id" => 17_i64,
        "title" => "draft",
    );

    let mut user = User::default();
    owner
        .map_to_entity_from_map(Some(&mut user), Some(&row))
        .unwrap();
    assert_eq!(user.id, 17);

    let mut params = Parameters::default();
    user_mapper.add_id_equals_to_query(
        &mut params,
        user_mapper.map_to_id_from_entity(Some(&user)).unwrap(),
        Some("e"),
        true,
    );
    user_mapper.add_ids_equal_to_query(&mut params, Some("e"), &**owner, Some("r"));

    let (clause, values) = params.render();
    assert_eq!(clause, "e.id = :_p0 and e.id = r.owner_id");
    assert_eq!(values, value_map!("_p0" => 17_i64));
}

#[test]
fn null_identifier_becomes_null_check() {
    let metadata = metadata();
    let mapper = metadata.id_mapper("User").unwrap();

    let mut params = Parameters::default();
    mapper.add_id_equals_to_query(&mut params, Value::Null, None, true);

    assert_eq!(params.render().0, "id is null");
}

#[test]
fn invalid_config_is_rejected() {
    let err = Config::from_json(r#"{ "entities": [{ "name": "User" }] }"#).unwrap_err();
    assert!(err.is_configuration());

    let config = Config::new().reference("Document.owner", "User", "owner_");
    let err = Metadata::from_config(&config).unwrap_err();
    assert!(err.is_configuration());
}
