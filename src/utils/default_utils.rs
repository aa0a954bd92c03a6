use std::collections::HashMap;
use crate::utils::constants::{DEFAULT_KEEP_ALIVE_SCHEDULE, DEFAULT_USER_AGENT};

pub(crate) fn default_as_true() -> bool { true }

pub(crate) fn default_host() -> String { String::from("0.0.0.0") }

pub(crate) fn default_port() -> u16 { 8080 }

pub(crate) fn default_timeout_secs() -> u64 { 60 }

pub(crate) fn default_keep_alive() -> Option<String> { Some(String::from(DEFAULT_KEEP_ALIVE_SCHEDULE)) }

pub(crate) fn default_request_headers() -> HashMap<String, String> {
    HashMap::from([(String::from("User-Agent"), String::from(DEFAULT_USER_AGENT))])
}
