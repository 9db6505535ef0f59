use crate::publish::{CircuitBreaker, CircuitBreakerParams, CircuitState};
use std::thread;
use std::time::Duration;

const ENDPOINT: &str = "http://127.0.0.1:9200/latency/";
const COOLDOWN: Duration = Duration::from_millis(100);

fn breaker() -> CircuitBreaker {
    CircuitBreaker::new(
        ENDPOINT,
        CircuitBreakerParams {
            failure_threshold: 3,
            open_duration: COOLDOWN,
            half_open_max_requests: 1,
            success_threshold: 2,
        },
    )
}

fn fail_times(cb: &mut CircuitBreaker, n: u32) {
    for _ in 0..n {
        assert!(cb.allow_request());
        cb.record(false);
    }
}

fn tripped_and_cooled() -> CircuitBreaker {
    let mut cb = breaker();
    fail_times(&mut cb, 3);
    thread::sleep(COOLDOWN + Duration::from_millis(10));
    cb
}

#[test]
fn opens_after_consecutive_failures() {
    // Arrange
    let mut cb = breaker();

    // Act
    fail_times(&mut cb, 2);
    let after_two = cb.state();
    fail_times(&mut cb, 1);

    // Assert
    assert_eq!(after_two, CircuitState::Closed);
    assert_eq!(cb.state(), CircuitState::Open);
    assert!(!cb.allow_request());
}

#[test]
fn success_resets_the_failure_streak() {
    let mut cb = breaker();

    fail_times(&mut cb, 2);
    cb.record(true);
    fail_times(&mut cb, 2);

    assert_eq!(cb.state(), CircuitState::Closed);
}

#[test]
fn cooldown_admits_limited_trial_posts() {
    // Arrange
    let mut cb = breaker();
    fail_times(&mut cb, 3);
    assert!(!cb.allow_request());

    // Act
    thread::sleep(COOLDOWN + Duration::from_millis(10));
    let first = cb.allow_request();
    let second = cb.allow_request();

    // Assert
    assert!(first);
    assert!(!second);
    assert_eq!(cb.state(), CircuitState::HalfOpen);
}

#[test]
fn enough_trial_successes_close_the_circuit() {
    // Arrange
    let mut cb = tripped_and_cooled();

    // Act
    assert!(cb.allow_request());
    cb.record(true);
    let after_one = cb.state();
    assert!(cb.allow_request());
    cb.record(true);

    // Assert
    assert_eq!(after_one, CircuitState::HalfOpen);
    assert_eq!(cb.state(), CircuitState::Closed);
    assert!(cb.allow_request());
}

#[test]
fn trial_failure_reopens() {
    let mut cb = tripped_and_cooled();

    assert!(cb.allow_request());
    cb.record(false);

    assert_eq!(cb.state(), CircuitState::Open);
    assert!(!cb.allow_request());
}

#[test]
fn closed_after_recovery_needs_a_full_streak_to_reopen() {
    // Arrange
    let mut cb = tripped_and_cooled();
    for _ in 0..2 {
        assert!(cb.allow_request());
        cb.record(true);
    }

    // Act
    fail_times(&mut cb, 2);

    // Assert
    assert_eq!(cb.state(), CircuitState::Closed);
}
