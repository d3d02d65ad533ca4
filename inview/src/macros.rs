#[cfg(feature = "tracing")]
macro_rules! ivtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "inview", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ivtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! ivdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "inview", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ivdebug {
    ($($tt:tt)*) => {};
}
