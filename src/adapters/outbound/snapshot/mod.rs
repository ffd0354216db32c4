/// Snapshot adapter serving license data from a local JSON file
mod snapshot_store;

pub use snapshot_store::SnapshotStore;
