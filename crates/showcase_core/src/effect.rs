use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send `Msg::QueryDebounceElapsed { generation }` after `delay`.
    ScheduleQueryCommit { generation: u64, delay: Duration },
    /// Write the saved set under `key`; failures are swallowed.
    PersistSaved {
        key: &'static str,
        saved: crate::SavedSet,
    },
    WriteExport {
        file_name: &'static str,
        contents: String,
    },
}
