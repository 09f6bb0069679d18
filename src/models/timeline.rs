//! Timeline (Gantt) model.
//!
//! A timeline is a sequence of labeled logical time units. Index `i`
//! covers the half-open interval `[i, i + 1)`. Every unit from t=0 to
//! the last completion is accounted for as idle, overhead, or exactly
//! one process.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SimError;

/// What the CPU did during one time unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Label {
    /// No process had arrived.
    Idle,
    /// Context-switch overhead.
    Overhead,
    /// The process with this id was executing.
    Process(u32),
}

impl Label {
    /// Whether this unit did useful work.
    #[inline]
    pub fn is_process(&self) -> bool {
        matches!(self, Label::Process(_))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Idle => write!(f, "Idle"),
            Label::Overhead => write!(f, "Overhead"),
            Label::Process(id) => write!(f, "P{id}"),
        }
    }
}

impl FromStr for Label {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Idle" => Ok(Label::Idle),
            "Overhead" => Ok(Label::Overhead),
            _ => s
                .strip_prefix('P')
                .and_then(|id| id.parse::<u32>().ok())
                .map(Label::Process)
                .ok_or_else(|| SimError::InvalidLabel(s.to_string())),
        }
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.to_string()
    }
}

impl TryFrom<String> for Label {
    type Error = SimError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Unit-by-unit execution record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    units: Vec<Label>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `count` units of `label`.
    pub fn push_n(&mut self, label: Label, count: i64) {
        for _ in 0..count {
            self.units.push(label);
        }
    }

    /// Appends a single unit.
    pub fn push(&mut self, label: Label) {
        self.units.push(label);
    }

    /// Number of time units recorded.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether no unit has been recorded.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Label of the unit `[t, t + 1)`.
    pub fn label_at(&self, t: usize) -> Option<Label> {
        self.units.get(t).copied()
    }

    /// Iterates units in temporal order.
    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.units.iter()
    }

    /// Units as a slice.
    pub fn as_slice(&self) -> &[Label] {
        &self.units
    }

    /// Number of units carrying `label`.
    pub fn count(&self, label: Label) -> usize {
        self.units.iter().filter(|&&l| l == label).count()
    }

    /// Units spent executing processes.
    pub fn useful_time(&self) -> usize {
        self.units.iter().filter(|l| l.is_process()).count()
    }

    /// Units spent idle.
    pub fn idle_time(&self) -> usize {
        self.count(Label::Idle)
    }

    /// Units spent on context-switch overhead.
    pub fn overhead_time(&self) -> usize {
        self.count(Label::Overhead)
    }
}

impl From<Vec<Label>> for Timeline {
    fn from(units: Vec<Label>) -> Self {
        Self { units }
    }
}

impl FromIterator<Label> for Timeline {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        Self {
            units: iter.into_iter().collect(),
        }
    }
}

/// A maximal run of identical consecutive labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// Label shared by every unit of the run.
    pub label: Label,
    /// First time unit of the run.
    pub start: usize,
    /// Number of units in the run.
    pub duration: usize,
}

impl Run {
    /// Creates a new run.
    pub fn new(label: Label, start: usize, duration: usize) -> Self {
        Self {
            label,
            start,
            duration,
        }
    }

    /// Exclusive end unit.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_display_and_parse() {
        assert_eq!(Label::Idle.to_string(), "Idle");
        assert_eq!(Label::Overhead.to_string(), "Overhead");
        assert_eq!(Label::Process(12).to_string(), "P12");

        assert_eq!("P12".parse::<Label>().unwrap(), Label::Process(12));
        assert_eq!("Idle".parse::<Label>().unwrap(), Label::Idle);
        assert!(matches!(
            "Q1".parse::<Label>(),
            Err(SimError::InvalidLabel(_))
        ));
        assert!("P".parse::<Label>().is_err());
    }

    #[test]
    fn test_label_serde_as_string() {
        let json = serde_json::to_string(&vec![Label::Overhead, Label::Process(3)]).unwrap();
        assert_eq!(json, r#"["Overhead","P3"]"#);

        let back: Vec<Label> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Label::Overhead, Label::Process(3)]);
        assert!(serde_json::from_str::<Label>(r#""Busy""#).is_err());
    }

    #[test]
    fn test_timeline_counts() {
        let mut t = Timeline::new();
        t.push_n(Label::Overhead, 1);
        t.push_n(Label::Idle, 2);
        t.push_n(Label::Process(1), 3);
        t.push(Label::Process(2));

        assert_eq!(t.len(), 7);
        assert_eq!(t.useful_time(), 4);
        assert_eq!(t.idle_time(), 2);
        assert_eq!(t.overhead_time(), 1);
        assert_eq!(t.count(Label::Process(1)), 3);
        assert_eq!(t.label_at(3), Some(Label::Process(1)));
        assert_eq!(t.label_at(7), None);
    }

    #[test]
    fn test_push_n_zero_is_noop() {
        let mut t = Timeline::new();
        t.push_n(Label::Overhead, 0);
        assert!(t.is_empty());
    }

    #[test]
    fn test_run_end() {
        let r = Run::new(Label::Process(1), 3, 4);
        assert_eq!(r.end(), 7);
    }
}
