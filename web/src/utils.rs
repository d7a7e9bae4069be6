use blossom_core::{KeyValueStore, StoreError};

/// Browser `localStorage`, accessed raw so the stored JSON is exactly what the roster wrote.
///
/// Storage that is disabled or missing reads as empty and rejects writes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let Some(storage) = Self::storage() else {
            log::warn!("local storage unavailable, cannot read {:?}", key);
            return None;
        };
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::error!("failed to read {:?} from local storage: {:?}", key, err);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let rejected = |reason: String| StoreError::WriteRejected {
            key: key.to_string(),
            reason,
        };
        let storage =
            Self::storage().ok_or_else(|| rejected("local storage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|err| rejected(format!("{:?}", err)))
    }
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}
