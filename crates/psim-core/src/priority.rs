//! Process priority labels.
//!
//! Priority is cosmetic in this simulator: every process follows the same
//! transition rules regardless of its label.  It exists so list views can
//! show the familiar High/Medium/Low column, and so the default process set
//! is distinguishable at a glance.

/// Display-only priority class of a process.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Human-readable label, useful for CSV column values and list views.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High   => "high",
            Priority::Medium => "medium",
            Priority::Low    => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
