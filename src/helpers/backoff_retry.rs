use std::fmt::Display;
use std::time::Duration;

use backoff::{retry_notify, Error, ExponentialBackoff, ExponentialBackoffBuilder};

/// Exponential backoff starting at `initial_interval` that gives up once
/// `max_elapsed` has passed since the first attempt.
pub fn backoff_policy(initial_interval: Duration, max_elapsed: Duration) -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_initial_interval(initial_interval)
        .with_max_elapsed_time(Some(max_elapsed))
        .build()
}

/// Runs `fn_to_try` until it succeeds, fails permanently, or the policy runs
/// out. The last error is returned unwrapped either way.
pub fn backoff_retry<F, T, E>(policy: ExponentialBackoff, fn_to_try: F) -> Result<T, E>
where
    F: FnMut() -> Result<T, Error<E>>,
    E: Display,
{
    let notify = |err: E, dur: Duration| {
        log::warn!(
            "Temporary error, retrying in {:.1}s: {}",
            dur.as_secs_f32(),
            err
        );
    };

    retry_notify(policy, fn_to_try, notify).map_err(|err| match err {
        Error::Permanent(err) => err,
        Error::Transient { err, .. } => err,
    })
}
