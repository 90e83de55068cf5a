//! Data models for Splunk search session responses.
//!
//! This module contains the decode targets for the three endpoints the client
//! talks to. Every response is decoded into a fresh value owned by the call
//! that received it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::serde_helpers::records_from_rows;

/// One row of search output: field name to field value.
pub type ResultRecord = HashMap<String, String>;

/// Type of message from Splunk API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MessageType {
    #[serde(rename = "FATAL")]
    Fatal,
    #[serde(rename = "ERROR")]
    Error,
    #[serde(rename = "WARN")]
    Warn,
    #[serde(rename = "INFO")]
    Info,
    #[serde(rename = "DEBUG")]
    Debug,
    /// Unknown or unrecognized message type.
    #[serde(other)]
    #[default]
    Unknown,
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fatal => write!(f, "FATAL"),
            Self::Error => write!(f, "ERROR"),
            Self::Warn => write!(f, "WARN"),
            Self::Info => write!(f, "INFO"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// A single message from Splunk (usually in error responses).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SplunkMessage {
    #[serde(rename = "type", default)]
    pub message_type: MessageType,
    pub text: String,
}

/// A collection of messages from Splunk.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SplunkMessages {
    pub messages: Vec<SplunkMessage>,
}

impl SplunkMessages {
    /// Render the messages as `TYPE: text` joined with `; `.
    pub fn summary(&self) -> String {
        self.messages
            .iter()
            .map(|msg| format!("{}: {}", msg.message_type, msg.text))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Body of `GET /services/search/jobs/{sid}/results?output_mode=json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResults {
    /// Rows in the order the server returned them.
    #[serde(alias = "Results", default, deserialize_with = "records_from_rows")]
    pub results: Vec<ResultRecord>,
    /// True when the server returned preview rows of a job still running.
    #[serde(default)]
    pub preview: bool,
    /// Informational or warning messages attached to the results.
    #[serde(default)]
    pub messages: Vec<SplunkMessage>,
}
