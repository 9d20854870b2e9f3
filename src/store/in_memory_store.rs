use std::collections::HashMap;

use super::{StateStore, StoreError};

/// Process-local store used by the driver binary and by tests. Real
/// deployments plug the hosting platform's store in behind [`StateStore`].
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    entries: HashMap<String, Vec<u8>>,
}

impl InMemoryStateStore {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StateStore for InMemoryStateStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
