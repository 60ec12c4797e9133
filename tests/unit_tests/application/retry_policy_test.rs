use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::time::Instant;

use whisper_relay::application::services::{RetryPolicy, TRANSIENT_ERROR_MARKERS};

const DELAY: Duration = Duration::from_millis(1000);

#[test]
fn given_default_policy_when_created_then_allows_three_retries_one_second_apart() {
    let policy = RetryPolicy::default();

    assert_eq!(policy.max_retries(), 3);
    assert_eq!(policy.delay(), Duration::from_millis(1000));
}

#[test]
fn given_each_transient_marker_when_checked_then_is_transient() {
    for marker in TRANSIENT_ERROR_MARKERS {
        let message = format!("upstream failed: {} while reading", marker);
        assert!(RetryPolicy::is_transient(&message), "{}", message);
    }
}

#[test]
fn given_marker_with_different_case_when_checked_then_is_not_transient() {
    assert!(!RetryPolicy::is_transient("Request Timeout"));
    assert!(!RetryPolicy::is_transient("econnreset"));
    assert!(!RetryPolicy::is_transient("connection error"));
    assert!(!RetryPolicy::is_transient("Network unreachable"));
}

#[tokio::test(start_paused = true)]
async fn given_persistent_timeout_when_running_then_returns_original_error_after_four_attempts() {
    let policy = RetryPolicy::new(3, DELAY);
    let attempts = AtomicUsize::new(0);
    let started = Instant::now();

    let result = policy
        .run(|| {
            let attempt = attempts.fetch_add(1, Ordering::SeqCst);
            async move { Err::<(), String>(format!("request timeout on attempt {}", attempt)) }
        })
        .await;

    assert_eq!(result, Err("request timeout on attempt 3".to_string()));
    assert_eq!(attempts.load(Ordering::SeqCst), 4);
    assert!(started.elapsed() >= DELAY * 3);
    assert!(started.elapsed() < DELAY * 4);
}

#[tokio::test(start_paused = true)]
async fn given_two_connection_resets_when_running_then_succeeds_after_two_delayed_retries() {
    let policy = RetryPolicy::new(3, DELAY);
    let attempts = AtomicUsize::new(0);
    let started = Instant::now();

    let result = policy
        .run(|| {
            let attempt = attempts.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt < 2 {
                    Err("read ECONNRESET".to_string())
                } else {
                    Ok("hello world")
                }
            }
        })
        .await;

    assert_eq!(result, Ok("hello world"));
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
    assert!(started.elapsed() >= DELAY * 2);
    assert!(started.elapsed() < DELAY * 3);
}

#[tokio::test(start_paused = true)]
async fn given_non_transient_error_when_running_then_fails_without_delay() {
    let policy = RetryPolicy::new(3, DELAY);
    let attempts = AtomicUsize::new(0);
    let started = Instant::now();

    let result = policy
        .run(|| {
            attempts.fetch_add(1, Ordering::SeqCst);
            async { Err::<(), String>("401 Incorrect API key provided".to_string()) }
        })
        .await;

    assert_eq!(result, Err("401 Incorrect API key provided".to_string()));
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
    assert_eq!(started.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn given_zero_budget_when_transient_failure_then_does_not_retry() {
    let policy = RetryPolicy::new(0, DELAY);
    let attempts = AtomicUsize::new(0);

    let result = policy
        .run(|| {
            attempts.fetch_add(1, Ordering::SeqCst);
            async { Err::<(), String>("network unreachable".to_string()) }
        })
        .await;

    assert!(result.is_err());
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn given_eventual_success_when_running_then_payload_matches_first_try_success() {
    let policy = RetryPolicy::new(3, DELAY);

    let first_try = policy
        .run(|| async { Ok::<_, String>(vec![1, 2, 3]) })
        .await;

    let attempts = AtomicUsize::new(0);
    let after_retry = policy
        .run(|| {
            let attempt = attempts.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt == 0 {
                    Err("Connection error.".to_string())
                } else {
                    Ok(vec![1, 2, 3])
                }
            }
        })
        .await;

    assert_eq!(first_try, after_retry);
}
