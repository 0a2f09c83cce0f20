//! Reading-browser state
//!
//! The only mutable state tied to normalized data: which date/zone is
//! selected, which reading group tab is active, and which version within
//! each group is projected for display. Everything upstream of this is a
//! pure function of the fetched payload.
//!
//! Fetch completions are applied through request tags: a completion whose
//! tag no longer matches the current selection is discarded, so rapid
//! date navigation with overlapping in-flight requests can never display
//! a stale day's readings.

use std::collections::HashMap;

use chrono::NaiveDate;
use lectio_common::calendar;

use crate::model::{NormalizedResponse, Reading, ReadingGroup};

/// Identifies the selection a fetch was issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTag {
    date: NaiveDate,
    zone: String,
}

impl RequestTag {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }
}

/// Tab selection state over one normalized reading set
///
/// Selecting never mutates the reading data; indices only choose what is
/// projected. Both indices reset when the reading set changes identity.
#[derive(Debug, Clone, Default)]
pub struct TabState {
    active_group: usize,
    versions: HashMap<usize, usize>,
}

impl TabState {
    /// Activate a group tab; out-of-range indices are ignored
    pub fn select_group(&mut self, index: usize, group_count: usize) {
        if index < group_count {
            self.active_group = index;
        }
    }

    /// Choose a version within a group; out-of-range indices are ignored
    pub fn select_version(&mut self, group: usize, version: usize, version_count: usize) {
        if version < version_count {
            self.versions.insert(group, version);
        }
    }

    pub fn active_group(&self) -> usize {
        self.active_group
    }

    /// Selected version for a group, defaulting to the first
    pub fn version_for(&self, group: usize) -> usize {
        self.versions.get(&group).copied().unwrap_or(0)
    }

    /// Back to defaults (new reading set)
    pub fn reset(&mut self) {
        self.active_group = 0;
        self.versions.clear();
    }
}

/// Date-keyed reading browser with stale-response discarding
#[derive(Debug, Default)]
pub struct ReadingBrowser {
    date: Option<NaiveDate>,
    zone: String,
    data: Option<NormalizedResponse>,
    tabs: TabState,
}

impl ReadingBrowser {
    pub fn new(date: NaiveDate, zone: impl Into<String>) -> Self {
        Self {
            date: Some(date),
            zone: zone.into(),
            data: None,
            tabs: TabState::default(),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// Select a date; the returned tag keys the fetch this triggers
    pub fn select_date(&mut self, date: NaiveDate) -> RequestTag {
        self.date = Some(date);
        self.tag()
    }

    /// Move one day back
    pub fn previous_day(&mut self) -> RequestTag {
        let date = self.date.unwrap_or_else(calendar::today);
        self.select_date(calendar::previous_day(date))
    }

    /// Move one day forward
    pub fn next_day(&mut self) -> RequestTag {
        let date = self.date.unwrap_or_else(calendar::today);
        self.select_date(calendar::next_day(date))
    }

    /// Switch zones, keeping the selected date
    pub fn select_zone(&mut self, zone: impl Into<String>) -> RequestTag {
        self.zone = zone.into();
        self.tag()
    }

    /// Re-fetch the current selection (explicit retry)
    pub fn refresh(&self) -> RequestTag {
        self.tag()
    }

    /// Whether a completion for `tag` still matches the current selection
    pub fn is_current(&self, tag: &RequestTag) -> bool {
        self.date == Some(tag.date) && self.zone == tag.zone
    }

    /// Apply a completed fetch
    ///
    /// Returns false (and changes nothing) when the tag is stale. On
    /// success the tab state resets: a new reading set has a new identity.
    pub fn apply(&mut self, tag: &RequestTag, response: NormalizedResponse) -> bool {
        if !self.is_current(tag) {
            return false;
        }
        self.data = Some(response);
        self.tabs.reset();
        true
    }

    pub fn data(&self) -> Option<&NormalizedResponse> {
        self.data.as_ref()
    }

    /// Reading groups in presentation order
    pub fn groups(&self) -> Vec<&ReadingGroup> {
        self.data
            .as_ref()
            .map(|d| d.lectures.groups().collect())
            .unwrap_or_default()
    }

    pub fn select_group(&mut self, index: usize) {
        let count = self.groups().len();
        self.tabs.select_group(index, count);
    }

    pub fn select_version(&mut self, version: usize) {
        let group = self.tabs.active_group();
        let count = self
            .groups()
            .get(group)
            .map(|g| g.versions.len())
            .unwrap_or(0);
        self.tabs.select_version(group, version, count);
    }

    pub fn tabs(&self) -> &TabState {
        &self.tabs
    }

    /// The reading currently projected for display
    pub fn active_reading(&self) -> Option<&Reading> {
        let groups = self.groups();
        let group = groups.get(self.tabs.active_group())?;
        let version = self.tabs.version_for(self.tabs.active_group());
        group.versions.get(version).or_else(|| group.versions.first())
    }

    fn tag(&self) -> RequestTag {
        RequestTag {
            date: self.date.unwrap_or_else(calendar::today),
            zone: self.zone.clone(),
        }
    }
}
