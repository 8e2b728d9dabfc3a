use tracing::{error, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::errors::WlOutputError;

/// Install the global JSON subscriber on stderr.
///
/// `RUST_LOG` takes precedence; otherwise `info`, or `warn` in quiet mode. Calling this twice
/// is harmless, the second install is ignored.
pub fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .json()
                .with_current_span(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

/// Log an error at the level its kind deserves
pub fn log_app_error<E: WlOutputError + ?Sized>(error: &E) {
    if error.is_user_error() {
        warn!(
            event = "core.app.user_error",
            error_code = error.error_code(),
            error = %error
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error = %error
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutError;

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging(true);
        init_logging(false);
    }

    #[test]
    fn test_log_app_error_accepts_any_error() {
        log_app_error(&LayoutError::NoScreens);
        log_app_error(&LayoutError::DegenerateCanvas {
            width: 0,
            height: 0,
        });
    }
}
