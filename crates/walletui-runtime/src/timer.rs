use std::time::Duration;

/// Suspend the calling task for `duration` without blocking other tasks.
///
/// Not cancellable on its own; wrap in `tokio::time::timeout` or `select!`
/// to race it.
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Seconds-based [`sleep`]. Negative, NaN or out-of-range input sleeps for zero time.
pub async fn sleep_secs(seconds: f64) {
    let duration = Duration::try_from_secs_f64(seconds).unwrap_or(Duration::ZERO);
    sleep(duration).await;
}
