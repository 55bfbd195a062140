// Copyright (C) 2025 Agostinho Junior
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{Error, FieldError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::{Display, Formatter};

/// Filters accepted by the account-scoped list endpoints (activities, executions, orders).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    /// Kept as text so that unknown states are reported by validation instead of being
    /// unrepresentable. See [StateFilter] for the accepted values.
    pub state: Option<String>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StateFilter {
    All,
    Open,
    Closed,
}

impl StateFilter {
    pub const ALL: [StateFilter; 3] = [StateFilter::All, StateFilter::Open, StateFilter::Closed];

    pub fn as_str(&self) -> &'static str {
        match self {
            StateFilter::All => "All",
            StateFilter::Open => "Open",
            StateFilter::Closed => "Closed",
        }
    }
}

impl Display for StateFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<StateFilter> for String {
    fn from(state: StateFilter) -> Self {
        state.as_str().into()
    }
}

/// A borrowed option value, as handed to validators and transforms.
#[derive(Clone, Copy, Debug)]
pub enum FieldValue<'a> {
    Date(&'a DateTime<Utc>),
    Text(&'a str),
}

/// Validation and wire encoding rule for one option.
pub struct FieldDescriptor {
    pub key: &'static str,
    pub wire_name: &'static str,
    pub required: bool,
    pub message: &'static str,
    pub read: fn(&QueryOptions) -> Option<FieldValue<'_>>,
    pub validate: fn(FieldValue<'_>) -> bool,
    pub transform: fn(FieldValue<'_>) -> String,
}

impl FieldDescriptor {
    fn check(&self, options: &QueryOptions) -> Option<FieldError> {
        let valid = match (self.read)(options) {
            Some(value) => (self.validate)(value),
            None => !self.required,
        };
        (!valid).then(|| FieldError {
            field: self.key.into(),
            message: self.message.into(),
        })
    }
}

/// The `start`, `end` and `state` filters of the account list endpoints.
pub static ACCOUNTS: [FieldDescriptor; 3] = [
    FieldDescriptor {
        key: "start",
        wire_name: "startTime",
        required: false,
        message: "start must be an instance of the Date object with a valid value",
        read: read_start,
        validate: is_date,
        transform: to_iso_string,
    },
    FieldDescriptor {
        key: "end",
        wire_name: "endTime",
        required: false,
        message: "end must be an instance of the Date object with a valid value",
        read: read_end,
        validate: is_date,
        transform: to_iso_string,
    },
    FieldDescriptor {
        key: "state",
        wire_name: "stateFilter",
        required: false,
        message: "state must be a string with a value of either 'All', 'Open', or 'Closed'",
        read: read_state,
        validate: is_state,
        transform: as_text,
    },
];

fn read_start(options: &QueryOptions) -> Option<FieldValue<'_>> {
    options.start.as_ref().map(FieldValue::Date)
}

fn read_end(options: &QueryOptions) -> Option<FieldValue<'_>> {
    options.end.as_ref().map(FieldValue::Date)
}

fn read_state(options: &QueryOptions) -> Option<FieldValue<'_>> {
    options.state.as_deref().map(FieldValue::Text)
}

fn is_date(value: FieldValue<'_>) -> bool {
    matches!(value, FieldValue::Date(_))
}

fn is_state(value: FieldValue<'_>) -> bool {
    match value {
        FieldValue::Text(text) => StateFilter::ALL.iter().any(|state| state.as_str() == text),
        FieldValue::Date(_) => false,
    }
}

/// Millisecond precision with a `Z` suffix, e.g. `2014-10-01T00:00:00.000Z`.
fn to_iso_string(value: FieldValue<'_>) -> String {
    match value {
        FieldValue::Date(date) => date.to_rfc3339_opts(SecondsFormat::Millis, true),
        FieldValue::Text(text) => text.into(),
    }
}

fn as_text(value: FieldValue<'_>) -> String {
    match value {
        FieldValue::Text(text) => text.into(),
        FieldValue::Date(date) => to_iso_string(FieldValue::Date(date)),
    }
}

/// Validates `options` against `descriptors` and encodes the present values as a query string.
///
/// Every failing field is reported at once. Values are emitted in descriptor order under their
/// wire names; nothing present yields an empty string.
pub fn build_query_string(options: &QueryOptions, descriptors: &[FieldDescriptor]) -> Result<String> {
    let errors: Vec<FieldError> = descriptors
        .iter()
        .filter_map(|descriptor| descriptor.check(options))
        .collect();
    if !errors.is_empty() {
        return Err(Error::Validation(errors));
    }

    let pairs: Vec<(&str, String)> = descriptors
        .iter()
        .filter_map(|descriptor| {
            (descriptor.read)(options).map(|value| (descriptor.wire_name, (descriptor.transform)(value)))
        })
        .collect();

    serde_urlencoded::to_string(&pairs).map_err(|err| Error::Argument(err.to_string()))
}

/// Appends `?query` to `path` when the query is not empty.
pub(crate) fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.into()
    } else {
        format!("{path}?{query}")
    }
}
