use thiserror::Error;

pub mod in_memory_store;

/// Key of the singleton fee-accumulator record.
pub const OWNER_KEY: &str = "owner";

const TRANSFER_KEY_PREFIX: &str = "Transfer";

/// Key of the replay-protection record for a transaction id.
pub fn transfer_key(tx_id: &str) -> String {
    format!("{TRANSFER_KEY_PREFIX}{tx_id}")
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Reading `{key}` from the state store failed: {reason}")]
    Read { key: String, reason: String },
    #[error("Writing `{key}` to the state store failed: {reason}")]
    Write { key: String, reason: String },
}

/// Keyed byte storage the ledger runs on. The backing platform provides no
/// transactions or schema; every consistency rule is enforced by the caller.
///
/// An invocation's reads are assumed to observe one consistent snapshot and
/// its writes to commit together or not at all; that guarantee belongs to
/// the platform sequencing invocations, not to implementations of this trait.
pub trait StateStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;
}
