use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the crate's default subscriber. Embedding applications that
/// configure their own tracing setup should skip this.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
        )
        .with(EnvFilter::from_default_env()
            .add_directive(tracing::Level::INFO.into())
        )
        .init();
}
