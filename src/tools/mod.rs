use std::fmt::Debug;


/// Log the error at error level and replace it with the given value.
pub fn log_error_and_return<E: Debug, T>(value_to_return: T) -> impl FnOnce(E) -> T {
    |e| {
        error!("{e:#?}");
        value_to_return
    }
}

/// Log the error at warn level, prefixed with a message, and discard it.
pub fn log_message<E: Debug>(message: &str) -> impl FnOnce(E) + '_ {
    move |e| {
        warn!("{message}\n{e:#?}");
    }
}
