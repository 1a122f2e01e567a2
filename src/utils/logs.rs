use tracing::Level;

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(log_level())
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .json()
        .init();
}

fn log_level() -> Level {
    std::env::var("SIPUDES_LOG").ok()
        .and_then(|level| parse_level(level.as_str()))
        .unwrap_or(Level::INFO)
}

fn parse_level(level: &str) -> Option<Level> {
    level.trim().parse::<Level>().ok()
}
