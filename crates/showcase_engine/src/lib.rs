//! Showcase engine: storage, timers, catalog loading and the contact endpoint.
mod catalog;
mod contact_client;
mod contact_server;
mod debounce;
mod persist;
mod saved;
mod store;

pub use catalog::{load_catalog, parse_catalog, CatalogError};
pub use contact_client::{ClientSettings, ContactSubmitter, ReqwestContactClient, SubmitError};
pub use contact_server::{
    router, serve, shutdown_signal, ContactAccepted, ContactApiError, ContactRejected, LogSink,
    SinkError, SubmissionSink, CONTACT_PATH,
};
pub use debounce::Debouncer;
pub use persist::{ensure_dir, write_export, AtomicFileWriter, PersistError};
pub use saved::{hydrate_saved, persist_saved};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
