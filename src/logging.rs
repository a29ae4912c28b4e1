use once_cell::sync::Lazy;
pub use slog::*;

fn async_drain<D>(drain: D) -> Fuse<slog_async::Async>
where
    D: Drain<Err = Never, Ok = ()> + Send + 'static,
{
    slog_async::Async::default(slog_envlogger::new(drain)).fuse()
}

/// Logs go to stderr; stdout carries only the converted values.
pub static DEFAULT: Lazy<Logger> = Lazy::new(|| {
    let format = std::env::var("LOG_FORMAT").unwrap_or_default();
    let drain = match format.as_str() {
        "json" => async_drain(slog_json::Json::default(std::io::stderr()).fuse()),
        _ => {
            let decorator = slog_term::TermDecorator::new().stderr().build();
            async_drain(slog_term::FullFormat::new(decorator).build().fuse())
        }
    };

    Logger::root(
        drain,
        o!(
            "version" => env!("CARGO_PKG_VERSION"),
        ),
    )
});
