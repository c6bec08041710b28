//! Unit tests for the blocking-call dispatcher

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use futures::future::join_all;
use mqo_providers::{BlockingDispatcher, Error};

#[tokio::test]
async fn test_dispatch_returns_task_result() {
    let dispatcher = BlockingDispatcher::new(2);
    let value = dispatcher.dispatch(|| Ok(21 * 2)).await.expect("dispatch");
    assert_eq!(value, 42);
}

#[tokio::test]
async fn test_dispatch_propagates_task_error() {
    let dispatcher = BlockingDispatcher::new(2);
    let err = dispatcher
        .dispatch::<_, ()>(|| Err(Error::backend("model not found")))
        .await
        .expect_err("task error must surface");

    assert!(err.is_backend());
    assert!(err.to_string().contains("model not found"));
}

#[tokio::test]
async fn test_panicking_task_is_backend_error() {
    let dispatcher = BlockingDispatcher::new(1);
    let err = dispatcher
        .dispatch::<_, ()>(|| panic!("client exploded"))
        .await
        .expect_err("panic must surface as an error");

    assert!(err.is_backend());
    // The permit is released even though the worker panicked
    assert_eq!(dispatcher.available_workers(), 1);
}

#[tokio::test]
async fn test_zero_workers_is_raised_to_one() {
    let dispatcher = BlockingDispatcher::new(0);
    assert_eq!(dispatcher.max_workers(), 1);
    assert_eq!(dispatcher.dispatch(|| Ok("ran")).await.expect("dispatch"), "ran");
}

#[tokio::test]
async fn test_default_worker_limit() {
    let dispatcher = BlockingDispatcher::default();
    assert_eq!(dispatcher.max_workers(), 4);
    assert_eq!(dispatcher.available_workers(), 4);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_calls_are_bounded() {
    let dispatcher = Arc::new(BlockingDispatcher::new(2));
    let in_flight = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));

    let calls = (0..6).map(|i| {
        let dispatcher = Arc::clone(&dispatcher);
        let in_flight = Arc::clone(&in_flight);
        let peak = Arc::clone(&peak);
        async move {
            dispatcher
                .dispatch(move || {
                    let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    std::thread::sleep(Duration::from_millis(40));
                    in_flight.fetch_sub(1, Ordering::SeqCst);
                    Ok(i)
                })
                .await
        }
    });

    let results: Vec<usize> = join_all(calls)
        .await
        .into_iter()
        .map(|r| r.expect("dispatch"))
        .collect();

    assert_eq!(results, vec![0, 1, 2, 3, 4, 5]);
    assert!(peak.load(Ordering::SeqCst) <= 2);
    assert_eq!(dispatcher.available_workers(), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn test_blocking_call_does_not_stall_scheduler() {
    let dispatcher = BlockingDispatcher::new(1);

    let blocking = dispatcher.dispatch(|| {
        std::thread::sleep(Duration::from_millis(200));
        Ok(Instant::now())
    });
    let ticker = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        Instant::now()
    };

    let (blocking_done, ticker_done) = tokio::join!(blocking, ticker);
    let blocking_done = blocking_done.expect("dispatch");

    assert!(ticker_done < blocking_done);
}

#[test]
fn test_dispatch_on_injected_runtime() {
    let pool = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("embedding-pool")
        .enable_all()
        .build()
        .expect("worker runtime");
    let dispatcher = BlockingDispatcher::new(1).with_runtime(pool.handle().clone());

    let caller = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("caller runtime");
    let thread_name = caller
        .block_on(dispatcher.dispatch(|| {
            Ok(std::thread::current().name().map(str::to_string))
        }))
        .expect("dispatch");

    assert_eq!(thread_name.as_deref(), Some("embedding-pool"));
}
