use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use deferral::{defer_async, shared, AsyncEvaluate, Evaluate};

#[tokio::test]
async fn test_shared_expression_forced_in_tasks() {
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&runs);
    let expr = shared(move || counter.fetch_add(1, Ordering::SeqCst));

    let mut tasks = Vec::new();
    for _ in 0..3 {
        let expr = expr.clone();
        tasks.push(tokio::task::spawn_blocking(move || expr.evaluate()));
    }
    for task in tasks {
        task.await.unwrap();
    }

    assert_eq!(runs.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_async_expression_runs_per_force() {
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&runs);
    let expr = defer_async(move || {
        let counter = Arc::clone(&counter);
        async move {
            tokio::time::sleep(Duration::from_millis(1)).await;
            counter.fetch_add(1, Ordering::SeqCst) + 1
        }
    });

    assert_eq!(runs.load(Ordering::SeqCst), 0);
    assert_eq!(expr.evaluate_async().await, 1);
    assert_eq!(expr.force().await, 2);
}

#[tokio::test]
async fn test_async_timeout_is_callers_concern() {
    let expr = defer_async(|| async {
        tokio::time::sleep(Duration::from_secs(60)).await;
        "late"
    });

    let result = tokio::time::timeout(Duration::from_millis(5), expr.force()).await;
    assert!(result.is_err());
}
