//! Shared records and helpers for the integration tests.

pub mod models;

pub use rewind;

/// Installs a test logger once per test binary. Set `RUST_LOG=debug` to see
/// binding and prefixing output.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds a [`rewind::ValueMap`] from `key => value` pairs.
#[macro_export]
macro_rules! value_map {
    ( $( $key:expr => $value:expr ),* $(,)? ) => {{
        let mut map = $crate::rewind::ValueMap::new();
        $( map.insert($key, $value); )*
        map
    }};
}
