//! Stored place document and its `OpenHours` field.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone};
use derive_more::{AsRef, Deref, From, IntoIterator};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use crate::hours::{OpenHoursState, OpenStatus, parse_tokens, serialize, status};

/// Place document, of which only the opening hours are interpreted.
#[serde_as]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlaceDocument {
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "OpenHours", default)]
    pub open_hours: OpenHours,

    /// Everything else, passed through as is.
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

/// Opening hours in their stored flat-token form.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[derive(AsRef, Deref, From, IntoIterator)]
#[serde(transparent)]
pub struct OpenHours(#[into_iterator(owned, ref)] Vec<String>);

impl From<&OpenHoursState> for OpenHours {
    fn from(state: &OpenHoursState) -> Self {
        Self(serialize(state))
    }
}

impl OpenHours {
    #[must_use]
    pub fn to_state(&self) -> OpenHoursState {
        parse_tokens(&self.0)
    }

    pub fn status_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> OpenStatus {
        status(&self.0, now)
    }

    pub fn is_open_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> bool {
        self.status_at(now).is_open()
    }
}
