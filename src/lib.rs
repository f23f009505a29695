pub mod cmd;
pub mod error;
pub mod stream;

fn log_error<T, E: std::fmt::Display>(x: Result<T, E>) -> Option<T> {
    x.map_err(|e| {
        log::error!("{e}");
    })
    .ok()
}
