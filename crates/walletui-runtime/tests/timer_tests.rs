use std::time::Duration;
use tokio::time::Instant;
use walletui_runtime::{sleep, sleep_secs};

#[tokio::test(start_paused = true)]
async fn test_sleep_waits_for_duration() {
    let start = Instant::now();
    sleep(Duration::from_millis(1500)).await;
    assert!(start.elapsed() >= Duration::from_millis(1500));
}

#[tokio::test(start_paused = true)]
async fn test_sleep_secs_accepts_fractions() {
    let start = Instant::now();
    sleep_secs(0.25).await;
    assert!(start.elapsed() >= Duration::from_millis(250));
}

#[tokio::test(start_paused = true)]
async fn test_invalid_seconds_do_not_wait() {
    let start = Instant::now();
    sleep_secs(-1.0).await;
    sleep_secs(f64::NAN).await;
    assert!(start.elapsed() < Duration::from_millis(5));
}

#[tokio::test(start_paused = true)]
async fn test_sleep_does_not_block_other_tasks() {
    let sleeper = tokio::spawn(sleep_secs(10.0));
    let quick = tokio::spawn(async { 7 });

    assert_eq!(quick.await.unwrap(), 7);
    assert!(!sleeper.is_finished());
    sleeper.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_sleep_can_be_raced_by_timeout() {
    let result = tokio::time::timeout(Duration::from_secs(1), sleep_secs(5.0)).await;
    assert!(result.is_err());
}
