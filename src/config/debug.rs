//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet.

pub struct DebugFlags {
    /// Emit one line per dropped CSV row with the reason it was rejected.
    pub print_dropped_rows: bool,
    /// Emit every group and its band after thresholds are built.
    pub print_threshold_tables: bool,
    /// Emit the group key used for each classification lookup.
    pub print_lookup_keys: bool,
    /// Emit engine reload/swap events.
    pub print_engine_reloads: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_dropped_rows: false,
    print_threshold_tables: false,
    print_lookup_keys: false,
    print_engine_reloads: false,
};
