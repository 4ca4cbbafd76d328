//! Delayed activation modelling the initial loading screen.

use super::{TaskStoreConfig, TaskStoreController};
use crate::task::ports::KeyValueStore;
use mockable::Clock;
use std::sync::Arc;
use tracing::debug;

/// Waits for `config.loading_delay`, then activates the controller.
///
/// Nothing else can touch the store before activation completes, so the
/// pause has no ordering effects.
pub async fn activate_after<S, C>(
    store: Arc<S>,
    clock: Arc<C>,
    config: TaskStoreConfig,
) -> TaskStoreController<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    let delay = config.loading_delay;
    if !delay.is_zero() {
        debug!(?delay, "holding task store activation");
        tokio::time::sleep(delay).await;
    }
    TaskStoreController::activate(store, clock, config)
}
