use std::io;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, prelude::*};

pub struct Logger;

impl Logger {
    /// Call **once** near the start of `main`.
    ///
    /// Logs go to stderr only, so they never interleave with the match list
    /// or the selection prompt on stdout. Default level is `warn`; override
    /// with `RUST_LOG`.
    pub fn init_tracing() {
        let filter: EnvFilter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        let stderr_layer = fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_filter(filter);

        tracing_subscriber::registry().with(stderr_layer).init();
    }
}
