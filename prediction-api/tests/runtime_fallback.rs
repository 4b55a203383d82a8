//! Fallback invocation against real child processes

#![cfg(unix)]

use prediction_api::application::RuntimeReply;
use prediction_api::{
    LaunchError, LaunchSpec, NoopObserver, PredictError, ProcessLauncher, RuntimeInvoker,
    TokioProcessLauncher,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

const REPLY: &str = r#"{"prediction":101.25,"confidence":0.6,"model_performance":{"rmse":1.0,"mae":0.5,"r2":0.9},"feature_importance":[],"individual_predictions":{"random_forest":100.0,"ridge":102.0,"xgboost":101.0,"meta_model":101.25},"using_fallback":true}"#;

fn sh(label: &str, script: &str) -> LaunchSpec {
    LaunchSpec::new("sh")
        .with_label(label)
        .arg("-c")
        .arg(script)
}

fn replying(label: &str) -> LaunchSpec {
    sh(label, &format!("cat > /dev/null; printf '%s' '{}'", REPLY))
}

fn invoker(candidates: Vec<LaunchSpec>, timeout: Duration) -> RuntimeInvoker<TokioProcessLauncher> {
    RuntimeInvoker::new(
        Arc::new(TokioProcessLauncher::new()),
        candidates,
        timeout,
        Arc::new(NoopObserver),
    )
}

async fn invoke(invoker: &RuntimeInvoker<TokioProcessLauncher>) -> Result<RuntimeReply, PredictError> {
    invoker.invoke(Uuid::new_v4(), b"{\"open_price\":1.0}").await
}

#[tokio::test]
async fn test_first_working_candidate_wins() {
    let invoker = invoker(
        vec![
            LaunchSpec::new("no-such-interpreter-5d1e"),
            sh("broken", "cat > /dev/null; exit 1"),
            replying("good"),
            sh("never", "exit 9"),
        ],
        Duration::from_secs(10),
    );

    let reply = invoke(&invoker).await.unwrap();

    assert_eq!(reply.candidate, "good");
    assert_eq!(reply.attempts, 3);
    assert_eq!(reply.prediction.prediction, 101.25);
    assert!(reply.prediction.using_fallback);
}

#[tokio::test]
async fn test_all_missing_means_environment_missing() {
    let invoker = invoker(
        vec![
            LaunchSpec::new("no-such-interpreter-5d1e"),
            LaunchSpec::new("no-such-interpreter-6f2a"),
        ],
        Duration::from_secs(10),
    );

    let err = invoke(&invoker).await.unwrap_err();

    assert!(matches!(
        err,
        PredictError::RuntimeUnavailable {
            environment_missing: true,
            attempts: 2,
            ..
        }
    ));
}

#[tokio::test]
async fn test_failed_run_keeps_output() {
    let invoker = invoker(
        vec![
            LaunchSpec::new("no-such-interpreter-5d1e"),
            sh("broken", "cat > /dev/null; echo partial; echo 'ValueError: bad input' >&2; exit 4"),
        ],
        Duration::from_secs(10),
    );

    match invoke(&invoker).await.unwrap_err() {
        PredictError::RuntimeUnavailable {
            environment_missing,
            last_stdout,
            last_stderr,
            cause,
            ..
        } => {
            assert!(!environment_missing);
            assert_eq!(last_stdout, "partial\n");
            assert_eq!(last_stderr, "ValueError: bad input\n");
            assert_eq!(cause, "`broken` exited with code 4");
        }
        other => panic!("expected unavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unparseable_reply_stops_fallback() {
    let invoker = invoker(
        vec![sh("chatty", "cat > /dev/null; echo 'Loading...'"), replying("good")],
        Duration::from_secs(10),
    );

    match invoke(&invoker).await.unwrap_err() {
        PredictError::RuntimeProtocol {
            candidate,
            raw_output,
            ..
        } => {
            assert_eq!(candidate, "chatty");
            assert_eq!(raw_output, "Loading...\n");
        }
        other => panic!("expected protocol error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_hung_candidate_times_out_and_falls_back() {
    let invoker = invoker(
        vec![sh("hung", "exec sleep 30"), replying("good")],
        Duration::from_millis(300),
    );

    let started = Instant::now();
    let reply = invoke(&invoker).await.unwrap();

    assert_eq!(reply.candidate, "good");
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn test_timeout_is_reported() {
    let launcher = TokioProcessLauncher::new();
    let err = launcher
        .run(&sh("hung", "exec sleep 30"), b"", Duration::from_millis(200))
        .await
        .unwrap_err();

    assert_eq!(err, LaunchError::TimedOut(Duration::from_millis(200)));
}

#[tokio::test]
async fn test_large_payload_does_not_deadlock() {
    // Far beyond any pipe buffer, echoed back while still being written
    let input = vec![b'x'; 1024 * 1024];
    let launcher = TokioProcessLauncher::new();

    let output = launcher
        .run(&sh("echo", "cat"), &input, Duration::from_secs(20))
        .await
        .unwrap();

    assert!(output.success());
    assert_eq!(output.stdout.len(), input.len());
}

#[tokio::test]
async fn test_child_ignoring_stdin_still_counts() {
    // Exits without reading; the write side sees a closed pipe
    let input = vec![b'x'; 1024 * 1024];
    let launcher = TokioProcessLauncher::new();

    let output = launcher
        .run(
            &sh("deaf", &format!("printf '%s' '{}'", REPLY)),
            &input,
            Duration::from_secs(20),
        )
        .await
        .unwrap();

    assert!(output.success());
    assert_eq!(output.stdout_lossy(), REPLY);
}
