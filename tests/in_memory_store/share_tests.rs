//! Share URLs built from controller state.

use super::helpers::{activate, id_of, store};
use eyre::{Result, ensure, eyre};
use rstest::rstest;
use std::sync::Arc;
use tasklane::task::{
    adapters::memory::InMemoryKeyValueStore,
    domain::{StatusChange, TaskStatus},
    share::{ShareConfig, share_url},
};

#[rstest]
fn completed_task_shares_its_comment(store: Arc<InMemoryKeyValueStore>) -> Result<()> {
    let mut controller = activate(&store);
    controller.add_task("Run 5k");
    let id = id_of(&controller, "Run 5k")?;
    controller
        .change_status(id, StatusChange::Select(TaskStatus::Completed))
        .map_err(|err| eyre!(err))?;
    controller
        .set_completion_comment(id, "Personal best")
        .map_err(|err| eyre!(err))?;

    let task = controller
        .state()
        .find(id)
        .ok_or_else(|| eyre!("task missing"))?;
    let url = share_url(task, &ShareConfig::default())?;

    let text = url
        .query_pairs()
        .find(|(name, _)| name == "text")
        .map(|(_, value)| value.into_owned());
    ensure!(
        text.as_deref() == Some("Task: Run 5k - Status: Completed\nPersonal best"),
        "unexpected share text {text:?}"
    );
    Ok(())
}
