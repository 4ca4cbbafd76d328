//! Versioned layout of the persisted task list.
//!
//! **v1 format** (legacy bare array):
//! ```json
//! [{ "id": "...", "title": "...", "status": "not_started", ... }]
//! ```
//!
//! **v2 format** (current envelope):
//! ```json
//! { "version": 2, "tasks": [{ "id": "...", ... }] }
//! ```

use super::SchemaUpgradeError;
use crate::task::domain::{Task, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::HashSet;
use std::sync::Arc;

/// Result type for upgrade operations.
pub type UpgradeResult<T> = Result<T, SchemaUpgradeError>;

/// Borrowed envelope written to storage.
#[derive(Debug, Serialize)]
pub struct TaskListEnvelope<'a> {
    version: u64,
    tasks: &'a [Arc<Task>],
}

impl<'a> TaskListEnvelope<'a> {
    /// Wraps `tasks` in the current envelope version.
    #[must_use]
    pub const fn current(tasks: &'a [Arc<Task>]) -> Self {
        Self {
            version: TaskListUpgrader::CURRENT_VERSION,
            tasks,
        }
    }
}

#[derive(Debug, Deserialize)]
struct StoredTaskList {
    tasks: Vec<Value>,
}

/// Upgrades persisted task list payloads to the current envelope.
#[derive(Debug, Default, Clone, Copy)]
pub struct TaskListUpgrader;

impl TaskListUpgrader {
    /// The current schema version.
    pub const CURRENT_VERSION: u64 = 2;

    /// Schema versions [`Self::upgrade`] accepts.
    const SUPPORTED_VERSIONS: &'static [u64] = &[1, 2];

    /// Creates a new upgrader.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns `true` if payloads at `version` can be read.
    #[must_use]
    pub fn supports_version(self, version: u64) -> bool {
        Self::SUPPORTED_VERSIONS.contains(&version)
    }

    /// Detects the payload version and upgrades it to the current envelope.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaUpgradeError::UnsupportedVersion`] for unknown
    /// versions and [`SchemaUpgradeError::Malformed`] when the payload is
    /// neither an array nor a versioned object.
    pub fn upgrade(self, payload: Value) -> UpgradeResult<Value> {
        match payload {
            Value::Array(tasks) => Ok(Self::upgrade_v1_to_v2(tasks)),
            Value::Object(mut envelope) => {
                let version = envelope
                    .get("version")
                    .and_then(Value::as_u64)
                    .ok_or_else(|| SchemaUpgradeError::malformed("missing numeric version"))?;
                if !self.supports_version(version) {
                    return Err(SchemaUpgradeError::UnsupportedVersion(version));
                }
                if version == Self::CURRENT_VERSION {
                    return Ok(Value::Object(envelope));
                }
                match envelope.remove("tasks") {
                    Some(Value::Array(tasks)) => Ok(Self::upgrade_v1_to_v2(tasks)),
                    _ => Err(SchemaUpgradeError::malformed("missing tasks array")),
                }
            }
            _ => Err(SchemaUpgradeError::malformed(
                "expected a task array or a versioned object",
            )),
        }
    }

    /// Wraps a v1 bare array in the v2 envelope.
    fn upgrade_v1_to_v2(tasks: Vec<Value>) -> Value {
        json!({ "version": 2, "tasks": tasks })
    }

    /// Upgrades a payload and decodes its task records one by one.
    ///
    /// Record problems never discard the list. A record that does not
    /// decode, or repeats an earlier identifier, is dropped; a record that
    /// decodes but breaks a field limit is kept. Both are reported in
    /// [`DecodedTaskList::issues`].
    ///
    /// # Errors
    ///
    /// Returns [`SchemaUpgradeError`] when the payload as a whole cannot be
    /// upgraded or carries no task array.
    pub fn decode(self, payload: Value) -> UpgradeResult<DecodedTaskList> {
        let upgraded = self.upgrade(payload)?;
        let StoredTaskList { tasks: records } = serde_json::from_value(upgraded)
            .map_err(|error| SchemaUpgradeError::malformed(error.to_string()))?;

        let mut decoded = DecodedTaskList::default();
        let mut seen: HashSet<TaskId> = HashSet::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let task: Task = match serde_json::from_value(record) {
                Ok(task) => task,
                Err(error) => {
                    decoded.issues.push(SchemaUpgradeError::MalformedRecord {
                        index,
                        reason: error.to_string(),
                    });
                    continue;
                }
            };
            if !seen.insert(task.id()) {
                decoded
                    .issues
                    .push(SchemaUpgradeError::DuplicateTaskId(task.id()));
                continue;
            }
            if let Err(source) = task.validate() {
                decoded
                    .issues
                    .push(SchemaUpgradeError::InvalidRecord { index, source });
            }
            decoded.tasks.push(Arc::new(task));
        }
        Ok(decoded)
    }
}

/// Tasks recovered from a persisted payload, with per-record findings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedTaskList {
    /// Records that decoded, in stored order.
    pub tasks: Vec<Arc<Task>>,
    /// Records that were dropped or kept despite breaking a field limit.
    pub issues: Vec<SchemaUpgradeError>,
}
