//! Drag-and-drop repositioning.

use crate::task::domain::{Task, TaskId};
use std::sync::Arc;

/// Moves `dragged` to the position held by `target` and renumbers `order`
/// densely from zero.
///
/// Positions follow the `order` field, not the sequence. Returns `None` when
/// the task is dropped onto itself or either identifier is unknown. Tasks
/// whose position is unchanged keep their allocation.
#[must_use]
pub fn move_onto(
    tasks: &[Arc<Task>],
    dragged: TaskId,
    target: TaskId,
) -> Option<Vec<Arc<Task>>> {
    if dragged == target {
        return None;
    }
    let mut ordered: Vec<Arc<Task>> = tasks.to_vec();
    ordered.sort_by_key(|task| task.order());

    let from = ordered.iter().position(|task| task.id() == dragged)?;
    let to = ordered.iter().position(|task| task.id() == target)?;
    let moved = ordered.remove(from);
    ordered.insert(to, moved);

    Some(
        ordered
            .into_iter()
            .zip(0_u64..)
            .map(|(task, order)| {
                if task.order() == order {
                    task
                } else {
                    Arc::new(task.reordered(order))
                }
            })
            .collect(),
    )
}
