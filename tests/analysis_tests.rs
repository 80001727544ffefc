//! Integration tests for the simulated analysis.

mod common;

use std::collections::HashSet;
use std::time::Duration;

use common::TokioDelay;
use nutrition_track::config::CONFIG_KEY;
use nutrition_track::state::{analyze, select_file, AnalysisState, Screen, UploadState, NUTRITION_TABLE};
use nutrition_track::{AppConfig, MemoryStore};
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_analysis_resolves_after_latency() {
    let controller = common::logged_in_with_png().await;
    let started = Instant::now();

    let result = analyze(&controller, &TokioDelay)
        .await
        .expect("analysis should finish");

    assert!(started.elapsed() >= Duration::from_millis(2000));
    assert!(NUTRITION_TABLE.iter().any(|entry| entry == result));
    let snapshot = controller.borrow().snapshot();
    assert!(snapshot.view.results_shown);
    assert_eq!(snapshot.result, Some(result));
}

#[tokio::test(start_paused = true)]
async fn test_analysis_is_busy_while_waiting() {
    let controller = common::logged_in_with_png().await;

    let (result, _) = tokio::join!(analyze(&controller, &TokioDelay), async {
        tokio::time::sleep(Duration::from_millis(1000)).await;
        let ctl = controller.borrow();
        let view = ctl.view();
        assert!(view.analyzing);
        assert!(!view.analyze_enabled);
        assert!(!view.results_shown);
        // A second trigger while busy does nothing
        drop(ctl);
        assert!(controller.borrow_mut().begin_analysis().is_none());
    });
    assert!(result.is_some());
}

#[tokio::test(start_paused = true)]
async fn test_analysis_without_image_is_noop() {
    let controller = common::controller();
    controller.borrow_mut().login("a@b.com", "x").unwrap();
    let started = Instant::now();

    assert!(analyze(&controller, &TokioDelay).await.is_none());
    assert_eq!(started.elapsed(), Duration::ZERO);
    assert_eq!(controller.borrow().analysis().state(), AnalysisState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_repeated_analysis_covers_every_result() {
    let controller = common::logged_in_with_png().await;
    let mut seen = HashSet::new();

    for _ in 0..100 {
        let result = analyze(&controller, &TokioDelay).await.unwrap();
        seen.insert(result.food_name);
    }

    assert_eq!(seen.len(), NUTRITION_TABLE.len());
}

#[tokio::test(start_paused = true)]
async fn test_logout_discards_pending_analysis() {
    let controller = common::logged_in_with_png().await;

    let (result, _) = tokio::join!(analyze(&controller, &TokioDelay), async {
        tokio::time::sleep(Duration::from_millis(500)).await;
        controller.borrow_mut().logout().unwrap();
    });

    assert!(result.is_none());
    let ctl = controller.borrow();
    assert_eq!(ctl.analysis().state(), AnalysisState::Idle);
    assert_eq!(ctl.upload().state(), &UploadState::Empty);
    assert_eq!(ctl.view().screen, Screen::Auth);
}

#[tokio::test(start_paused = true)]
async fn test_logout_after_results_resets_everything() {
    let controller = common::logged_in_with_png().await;
    analyze(&controller, &TokioDelay).await.unwrap();

    controller.borrow_mut().logout().unwrap();

    let snapshot = controller.borrow().snapshot();
    assert_eq!(controller.borrow().upload().state(), &UploadState::Empty);
    assert_eq!(snapshot.result, None);
    assert!(!snapshot.view.results_shown);

    // Logging back in starts from an empty upload box
    controller.borrow_mut().login("a@b.com", "x").unwrap();
    assert_eq!(controller.borrow().snapshot().preview, None);
}

#[tokio::test(start_paused = true)]
async fn test_new_image_during_analysis_drops_old_result() {
    let controller = common::logged_in_with_png().await;

    let (result, _) = tokio::join!(analyze(&controller, &TokioDelay), async {
        tokio::time::sleep(Duration::from_millis(1500)).await;
        select_file(&controller, &common::png()).await.unwrap();
    });

    assert!(result.is_none());
    assert_eq!(controller.borrow().analysis().state(), AnalysisState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_configured_latency_is_used() {
    let store = MemoryStore::with_entry(CONFIG_KEY, r#"{"analysis_latency_ms": 10}"#);
    let config = AppConfig::load(&store);
    let controller = common::controller_with(store, config);
    controller.borrow_mut().login("a@b.com", "x").unwrap();
    select_file(&controller, &common::png()).await.unwrap();

    let started = Instant::now();
    analyze(&controller, &TokioDelay).await.unwrap();
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(10));
    assert!(elapsed < Duration::from_millis(2000));
}
