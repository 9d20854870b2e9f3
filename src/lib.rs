/// The four persisted record types (owner, bank aggregate, account,
/// transfer marker) and their byte codec.
pub mod entity;

/// Decodes an invocation (function name + string arguments) into a typed,
/// validated command, later executed by [`ledger`].
pub mod command;

/// The key-value seam the ledger runs on, plus the in-memory implementation
/// used by the binary and tests. A real deployment plugs the hosting
/// platform's store in here.
pub mod store;

/// The ledger core: bank registration, account registration, fee-bearing
/// transfers with replay protection, and key-shape queries.
pub mod ledger;

/// Drives the core from a CSV of invocations. Belongs to the binary rather
/// than the library, but living here lets the integration test reuse it.
pub mod bin_utils;
