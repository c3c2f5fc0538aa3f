mod options_tests;

use std::sync::Once;

static LOG_INIT: Once = Once::new();

/// Tests exercising the trace/warn paths call this first so log output
/// shows up under `--nocapture`.
pub(crate) fn init_logging() {
    LOG_INIT.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
}
