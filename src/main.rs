//! Binary entry point: logging + event bus init, then the platform loop.

#[cfg(target_os = "macos")]
mod macos_main;

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dockhide=info")),
        )
        .init();

    dockhide::events::init_event_bus();

    #[cfg(target_os = "macos")]
    macos_main::run();

    #[cfg(not(target_os = "macos"))]
    {
        eprintln!("dockhide requires the macOS Dock; nothing to do on this platform.");
        std::process::exit(1);
    }
}
