use rewind::{IdMapper, Metadata, SingleIdMapper, Value, ValueMap};
use tests::{init_logging, models::*};

use std::sync::Arc;

fn assert_sync_send<T: Send + Sync>(val: T) -> T {
    val
}

#[test]
fn mappers_are_shared_across_threads() {
    init_logging();

    let mapper: Arc<dyn IdMapper> = assert_sync_send(Arc::new(SingleIdMapper::new("id")));
    let prefixed: Arc<dyn IdMapper> = Arc::from(mapper.prefix_mapped_properties("owner_"));

    std::thread::scope(|s| {
        for thread in 0..8_i64 {
            let mapper = mapper.clone();
            let prefixed = prefixed.clone();

            s.spawn(move || {
                for i in 0..200_i64 {
                    let id = thread * 1_000 + i;
                    let user = User {
                        id,
                        ..Default::default()
                    };

                    let mut data = ValueMap::new();
                    prefixed
                        .map_to_map_from_entity(&mut data, Some(&user))
                        .unwrap();

                    let mut restored = User::default();
                    prefixed
                        .map_to_entity_from_map(Some(&mut restored), Some(&data))
                        .unwrap();

                    assert_eq!(
                        mapper.map_to_id_from_entity(Some(&restored)).unwrap(),
                        Value::I64(id)
                    );
                }
            });
        }
    });
}

#[test]
fn metadata_is_shareable() {
    let metadata = assert_sync_send(Arc::new(Metadata::default()));
    assert!(metadata.is_empty());
}
