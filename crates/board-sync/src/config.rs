//! Board Configuration
//!
//! Column layout, ordering constants and request timeouts.

use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{SyncError, SyncResult};
use crate::model::{ColumnDef, TaskStatus};

/// Spacing left between keys on head/tail inserts and after renumbering
pub const DEFAULT_ORDER_GAP: f64 = 1000.0;

/// Neighbour distance below which a column is renumbered before bisecting
pub const DEFAULT_MIN_GAP: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub columns: Vec<ColumnDef>,
    pub order_gap: f64,
    pub min_gap: f64,
    pub write_timeout_ms: u64,
    /// How long a toast stays up
    pub notice_ttl_ms: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: vec![
                ColumnDef::new(TaskStatus::NotStarted, "Not Started"),
                ColumnDef::new(TaskStatus::InProgress, "In Progress"),
                ColumnDef::new(TaskStatus::Done, "Done"),
            ],
            order_gap: DEFAULT_ORDER_GAP,
            min_gap: DEFAULT_MIN_GAP,
            write_timeout_ms: 10_000,
            notice_ttl_ms: 3_000,
        }
    }
}

impl BoardConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json(raw: &str) -> SyncResult<Self> {
        let config: BoardConfig =
            serde_json::from_str(raw).map_err(|e| SyncError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SyncResult<()> {
        if !(self.order_gap > 0.0 && self.order_gap.is_finite()) {
            return Err(SyncError::InvalidConfig(format!(
                "order_gap must be positive, got {}",
                self.order_gap
            )));
        }
        if !(self.min_gap >= 0.0 && self.min_gap < self.order_gap) {
            return Err(SyncError::InvalidConfig(format!(
                "min_gap must be in [0, order_gap), got {}",
                self.min_gap
            )));
        }
        if self.columns.is_empty() {
            return Err(SyncError::InvalidConfig("at least one column is required".to_string()));
        }
        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.id()) {
                return Err(SyncError::InvalidConfig(format!("duplicate column '{}'", column.id())));
            }
        }
        Ok(())
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_millis(self.write_timeout_ms)
    }

    pub fn notice_ttl(&self) -> Duration {
        Duration::from_millis(self.notice_ttl_ms)
    }

    /// Find a column by its drop-target id
    pub fn column(&self, id: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.id() == id)
    }

    pub fn label_for<'a>(&'a self, status: &'a TaskStatus) -> &'a str {
        self.columns
            .iter()
            .find(|c| &c.status == status)
            .map(|c| c.label.as_str())
            .unwrap_or_else(|| status.as_str())
    }
}
