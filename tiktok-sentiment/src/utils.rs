use {
    tracing::Level,
    tracing_subscriber::{
        prelude::*,
        filter::filter_fn,
    },
};

// targets that log every download and request at info level
const NOISY_TARGETS: &[&str] = &["cached_path", "reqwest", "hyper"];

pub fn init_logging() {
    tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish()
        .with(filter_fn(|metadata| {
            if NOISY_TARGETS.iter().any(|target| metadata.target().starts_with(target)) {
                metadata.level() <= &Level::WARN
            } else {
                true
            }
        }))
        .init();
}

/// First `max_chars` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
