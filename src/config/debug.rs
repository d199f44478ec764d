//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every API request with its duration and record count.
    pub log_fetch: bool,

    /// Anything about opening/closing the detail overlay.
    pub log_selection: bool,

    /// Sort / filter / page changes in the coin table.
    pub log_table: bool,

    /// Activate trace_time macro (for slow-panel warnings)
    pub log_performance: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetch: true,
    log_selection: false,
    log_table: false,
    log_performance: false,
};
