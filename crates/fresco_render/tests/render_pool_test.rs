//! Tests for the render pool with a mock image driver.

use async_trait::async_trait;
use fresco_core::{BatchReport, GeneratedImage, ImageEditRequest, ImageRequest};
use fresco_error::{FrescoResult, ModelsError, OpenAiErrorKind};
use fresco_interface::{ImageDriver, ImageEditing};
use fresco_render::{MAX_WORKERS, RenderPool};
use fresco_storage::SessionStore;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock image driver that records call traffic.
#[derive(Debug, Default)]
struct MockDriver {
    generate_calls: Arc<AtomicUsize>,
    edit_calls: Arc<AtomicUsize>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
    seen_models: Arc<Mutex<Vec<String>>>,
    seen_sources: Arc<Mutex<Vec<Vec<PathBuf>>>>,
    fail_containing: Option<String>,
    panic_containing: Option<String>,
    delay: Duration,
}

impl MockDriver {
    fn new() -> Self {
        Self::default()
    }

    /// Fail any request whose prompt contains the given substring.
    fn with_failure_on(mut self, substring: &str) -> Self {
        self.fail_containing = Some(substring.to_string());
        self
    }

    /// Panic inside any request whose prompt contains the given substring.
    fn with_panic_on(mut self, substring: &str) -> Self {
        self.panic_containing = Some(substring.to_string());
        self
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    async fn render(&self, prompt: &str, model: &str) -> FrescoResult<GeneratedImage> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.seen_models
            .lock()
            .expect("models lock")
            .push(model.to_string());

        if let Some(needle) = &self.panic_containing {
            if prompt.contains(needle) {
                panic!("mock driver panic on {prompt:?}");
            }
        }
        if let Some(needle) = &self.fail_containing {
            if prompt.contains(needle) {
                return Err(ModelsError::new(
                    OpenAiErrorKind::Api {
                        status: 429,
                        message: "rate limited".to_string(),
                    }
                    .into(),
                )
                .into());
            }
        }
        Ok(GeneratedImage::new(format!("png:{prompt}").into_bytes()))
    }
}

#[async_trait]
impl ImageDriver for MockDriver {
    async fn generate(&self, req: &ImageRequest) -> FrescoResult<GeneratedImage> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        self.render(&req.prompt, &req.model).await
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn default_model(&self) -> &str {
        "mock-image-1"
    }
}

#[async_trait]
impl ImageEditing for MockDriver {
    async fn edit(&self, req: &ImageEditRequest) -> FrescoResult<GeneratedImage> {
        self.edit_calls.fetch_add(1, Ordering::SeqCst);
        self.seen_sources
            .lock()
            .expect("sources lock")
            .push(req.sources.clone());
        self.render(&req.prompt, &req.model).await
    }
}

fn prompts(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("meme scene {i}")).collect()
}

#[tokio::test]
async fn test_generate_batch_reports_every_task_in_order() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let pool = RenderPool::new(MockDriver::new()).with_store(SessionStore::new(tmp.path()));

    let report = pool
        .generate_batch(&prompts(5), None, None)
        .await
        .expect("batch");

    assert!(report.success);
    assert!(report.error.is_none());
    assert_eq!(report.results.len(), 5);
    assert_eq!(report.output_paths.len(), 5);
    assert_eq!(report.message, "Generated 5 images out of 5 requested");
    for (i, outcome) in report.results.iter().enumerate() {
        assert_eq!(outcome.index, i);
        assert!(outcome.success);
        assert!(outcome.error.is_none());
    }
    for path in &report.output_paths {
        assert!(path.exists(), "missing output {}", path.display());
    }
}

#[tokio::test]
async fn test_output_filenames_are_deterministic() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let pool = RenderPool::new(MockDriver::new()).with_store(SessionStore::new(tmp.path()));

    let report = pool
        .generate_batch(&prompts(4), None, None)
        .await
        .expect("batch");

    for (i, path) in report.output_paths.iter().enumerate() {
        assert!(path.ends_with(format!("image_{i:03}.png")));
        assert!(path.starts_with(report.session_dir.as_path()));
    }
}

#[tokio::test]
async fn test_failed_task_does_not_abort_batch() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let driver = MockDriver::new().with_failure_on("dog");
    let pool = RenderPool::new(driver).with_store(SessionStore::new(tmp.path()));

    let prompts = vec!["a cat meme".to_string(), "a dog meme".to_string()];
    let report = pool
        .generate_batch(&prompts, None, None)
        .await
        .expect("batch");

    assert!(!report.success);
    assert!(report.error.is_none(), "per-task failure is not batch error");
    assert_eq!(report.results.len(), 2);

    assert!(report.results[0].success);
    assert_eq!(
        report.results[0].output_path,
        Some(report.session_dir.join("image_000.png"))
    );

    assert!(!report.results[1].success);
    assert!(report.results[1].output_path.is_none());
    let error = report.results[1].error.as_deref().expect("error message");
    assert!(error.contains("rate limited"), "got: {error}");

    assert_eq!(
        report.output_paths,
        vec![report.session_dir.join("image_000.png")]
    );
    assert_eq!(report.message, "Generated 1 images out of 2 requested");
}

#[tokio::test]
async fn test_panicking_worker_becomes_failed_outcome() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let driver = MockDriver::new().with_panic_on("scene 1");
    let pool = RenderPool::new(driver).with_store(SessionStore::new(tmp.path()));

    let report = pool
        .generate_batch(&prompts(3), None, None)
        .await
        .expect("batch");

    assert!(!report.success);
    assert_eq!(report.results.len(), 3);

    assert!(report.results[0].success);
    assert!(report.results[2].success);

    assert!(!report.results[1].success);
    assert!(report.results[1].output_path.is_none());
    let error = report.results[1].error.as_deref().expect("error message");
    assert!(error.contains("panicked"), "got: {error}");

    assert_eq!(
        report.output_paths,
        vec![
            report.session_dir.join("image_000.png"),
            report.session_dir.join("image_002.png"),
        ]
    );
    assert_eq!(report.message, "Generated 2 images out of 3 requested");
}

#[tokio::test]
async fn test_report_serializes_with_stable_field_names() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let driver = MockDriver::new().with_failure_on("dog");
    let pool = RenderPool::new(driver).with_store(SessionStore::new(tmp.path()));

    let prompts = vec!["a cat meme".to_string(), "a dog meme".to_string()];
    let report = pool
        .generate_batch(&prompts, None, None)
        .await
        .expect("batch");

    let value = serde_json::to_value(&report).expect("serialize");
    let object = value.as_object().expect("report object");
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        ["message", "output_paths", "results", "session_dir", "success"]
    );

    let results = value["results"].as_array().expect("results array");
    let mut result_keys: Vec<&str> = results[0]
        .as_object()
        .expect("result object")
        .keys()
        .map(String::as_str)
        .collect();
    result_keys.sort_unstable();
    assert_eq!(result_keys, ["error", "index", "output_path", "success"]);

    assert_eq!(results[0]["index"], 0);
    assert_eq!(results[0]["success"], true);
    assert!(results[0]["output_path"].is_string());
    assert!(results[0]["error"].is_null());

    assert_eq!(results[1]["success"], false);
    assert!(results[1]["output_path"].is_null());
    assert!(results[1]["error"].is_string());

    // Batch-level `error` appears only in the precondition-failure form.
    let rejected = serde_json::to_value(BatchReport::from_failure("no prompts supplied"))
        .expect("serialize rejection");
    assert_eq!(rejected["success"], false);
    assert_eq!(rejected["error"], "no prompts supplied");
    assert_eq!(rejected["message"], "no prompts supplied");
}

#[tokio::test]
async fn test_concurrency_stays_under_hard_cap() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let driver = MockDriver::new().with_delay(Duration::from_millis(10));
    let max_in_flight = Arc::clone(&driver.max_in_flight);
    let calls = Arc::clone(&driver.generate_calls);

    let pool = RenderPool::new(driver)
        .with_store(SessionStore::new(tmp.path()))
        .with_workers(50);
    assert_eq!(pool.workers(), MAX_WORKERS);

    let report = pool
        .generate_batch(&prompts(50), None, None)
        .await
        .expect("batch");

    assert!(report.success);
    assert_eq!(calls.load(Ordering::SeqCst), 50);
    let observed = max_in_flight.load(Ordering::SeqCst);
    assert!(observed <= MAX_WORKERS, "observed {observed} in flight");
    assert!(observed > 1, "expected concurrent dispatch");
}

#[test]
fn test_worker_limit_is_clamped() {
    assert_eq!(RenderPool::new(MockDriver::new()).workers(), MAX_WORKERS);
    assert_eq!(
        RenderPool::new(MockDriver::new()).with_workers(0).workers(),
        1
    );
    assert_eq!(
        RenderPool::new(MockDriver::new()).with_workers(3).workers(),
        3
    );
    assert_eq!(
        RenderPool::new(MockDriver::new())
            .with_workers(500)
            .workers(),
        MAX_WORKERS
    );
}

#[tokio::test]
async fn test_empty_batch_is_rejected_before_dispatch() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let driver = MockDriver::new();
    let calls = Arc::clone(&driver.generate_calls);
    let pool = RenderPool::new(driver).with_store(SessionStore::new(tmp.path()));

    let result = pool.generate_batch(&[], None, None).await;

    let err = result.err().expect("empty batch must fail");
    assert!(format!("{err}").contains("no prompts"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    // No session directory may be created for a rejected batch.
    let entries: Vec<_> = std::fs::read_dir(tmp.path()).expect("read root").collect();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_edit_batch_length_mismatch_is_rejected_before_dispatch() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let driver = MockDriver::new();
    let generate_calls = Arc::clone(&driver.generate_calls);
    let edit_calls = Arc::clone(&driver.edit_calls);
    let pool = RenderPool::new(driver).with_store(SessionStore::new(tmp.path()));

    let sources = vec![vec![PathBuf::from("a.png")], vec![PathBuf::from("b.png")]];
    let result = pool.edit_batch(&prompts(3), &sources, None, None).await;

    let err = result.err().expect("mismatch must fail");
    let text = format!("{err}");
    assert!(text.contains("3 prompts"), "got: {text}");
    assert!(text.contains("2 source sets"), "got: {text}");
    assert_eq!(generate_calls.load(Ordering::SeqCst), 0);
    assert_eq!(edit_calls.load(Ordering::SeqCst), 0);
    let entries: Vec<_> = std::fs::read_dir(tmp.path()).expect("read root").collect();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_edit_batch_pairs_prompts_with_sources() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let driver = MockDriver::new();
    let seen_sources = Arc::clone(&driver.seen_sources);
    let pool = RenderPool::new(driver).with_store(SessionStore::new(tmp.path()));

    let prompts = vec!["add a hat".to_string(), "add sunglasses".to_string()];
    let sources = vec![
        vec![PathBuf::from("cat.png")],
        vec![PathBuf::from("dog.png"), PathBuf::from("fish.png")],
    ];
    let report = pool
        .edit_batch(&prompts, &sources, None, None)
        .await
        .expect("batch");

    assert!(report.success);
    assert!(report.output_paths[0].ends_with("edited_image_000.png"));
    assert!(report.output_paths[1].ends_with("edited_image_001.png"));

    let mut seen = seen_sources.lock().expect("sources lock").clone();
    seen.sort_by_key(|set| set.len());
    assert_eq!(seen, sources);
}

#[tokio::test]
async fn test_edit_task_without_sources_degrades_to_generation() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let driver = MockDriver::new();
    let generate_calls = Arc::clone(&driver.generate_calls);
    let edit_calls = Arc::clone(&driver.edit_calls);
    let pool = RenderPool::new(driver).with_store(SessionStore::new(tmp.path()));

    let report = pool
        .edit_batch(&["plain prompt".to_string()], &[vec![]], None, None)
        .await
        .expect("batch");

    assert!(report.success);
    assert_eq!(generate_calls.load(Ordering::SeqCst), 1);
    assert_eq!(edit_calls.load(Ordering::SeqCst), 0);
    // The output name still reflects the batch kind it was submitted under.
    assert!(report.output_paths[0].ends_with("edited_image_000.png"));
}

#[tokio::test]
async fn test_session_dir_is_reported_even_when_all_tasks_fail() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let driver = MockDriver::new().with_failure_on("meme");
    let pool = RenderPool::new(driver).with_store(SessionStore::new(tmp.path()));

    let report = pool
        .generate_batch(&prompts(1), None, None)
        .await
        .expect("batch");

    assert!(!report.success);
    assert!(report.output_paths.is_empty());
    assert!(report.session_dir.starts_with(tmp.path()));
    assert!(report.session_dir.exists());
    assert_eq!(report.message, "Generated 0 images out of 1 requested");
}

#[tokio::test]
async fn test_explicit_session_dir_is_reused() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = tmp.path().join("shared_session");
    let pool = RenderPool::new(MockDriver::new()).with_store(SessionStore::new(tmp.path()));

    let first = pool
        .generate_batch(&prompts(1), None, Some(&dir))
        .await
        .expect("first");
    let second = pool
        .generate_batch(&prompts(2), None, Some(&dir))
        .await
        .expect("second");

    assert_eq!(first.session_dir, dir);
    assert_eq!(second.session_dir, dir);
    assert!(dir.join("image_000.png").exists());
    assert!(dir.join("image_001.png").exists());
}

#[tokio::test]
async fn test_model_override_reaches_the_driver() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let driver = MockDriver::new();
    let seen_models = Arc::clone(&driver.seen_models);
    let pool = RenderPool::new(driver).with_store(SessionStore::new(tmp.path()));

    pool.generate_batch(&prompts(2), Some("custom-image-model"), None)
        .await
        .expect("override batch");
    pool.generate_batch(&prompts(1), None, None)
        .await
        .expect("default batch");

    let seen = seen_models.lock().expect("models lock").clone();
    assert_eq!(
        seen,
        vec!["custom-image-model", "custom-image-model", "mock-image-1"]
    );
}
