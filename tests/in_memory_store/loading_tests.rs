//! Delayed activation tests.

use super::helpers::{activate, store, visible_titles};
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;
use std::time::Duration;
use tasklane::task::{
    adapters::memory::InMemoryKeyValueStore,
    services::{TaskStoreConfig, activate_after},
};
use tokio::time::Instant;

#[rstest]
#[tokio::test(start_paused = true)]
async fn activation_waits_for_loading_delay(store: Arc<InMemoryKeyValueStore>) {
    let started = Instant::now();

    let controller = activate_after(store, Arc::new(DefaultClock), TaskStoreConfig::default()).await;

    assert!(started.elapsed() >= Duration::from_millis(500));
    assert!(controller.state().is_empty());
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn zero_delay_activates_immediately(store: Arc<InMemoryKeyValueStore>) {
    let started = Instant::now();
    let config = TaskStoreConfig::default().with_loading_delay(Duration::ZERO);

    let _controller = activate_after(store, Arc::new(DefaultClock), config).await;

    assert_eq!(started.elapsed(), Duration::ZERO);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn delayed_activation_hydrates_saved_tasks(store: Arc<InMemoryKeyValueStore>) {
    let mut writer = activate(&store);
    writer.add_task("Saved earlier");
    drop(writer.close());

    let config = TaskStoreConfig::default().with_loading_delay(Duration::from_millis(50));
    let controller = activate_after(store, Arc::new(DefaultClock), config).await;

    assert_eq!(visible_titles(&controller), vec!["Saved earlier"]);
}
