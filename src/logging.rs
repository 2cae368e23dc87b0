use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt::SubscriberBuilder};

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set; otherwise `verbose` selects
/// `debug` over the default `warn`. Diagnostics go to stderr so they never
/// interleave with program output. Calling this twice is harmless; the second
/// installation is ignored.
pub fn init(verbose: bool) {
    let default_level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let filter = EnvFilter::builder().with_default_directive(default_level.into())
                                     .from_env_lossy();

    let _ = SubscriberBuilder::default().with_env_filter(filter)
                                        .with_writer(std::io::stderr)
                                        .with_target(false)
                                        .try_init();
}
