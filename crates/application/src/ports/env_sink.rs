//! Environment sink port

use std::collections::{BTreeMap, HashMap};

use runref_domain::EnvVars;

/// Destination of projected variables.
///
/// `put` overwrites any existing value for the key.
pub trait EnvSink {
    /// Sets `key` to `value`.
    fn put(&mut self, key: String, value: String);
}

impl EnvSink for EnvVars {
    fn put(&mut self, key: String, value: String) {
        self.insert(key, value);
    }
}

impl EnvSink for HashMap<String, String> {
    fn put(&mut self, key: String, value: String) {
        self.insert(key, value);
    }
}

impl EnvSink for BTreeMap<String, String> {
    fn put(&mut self, key: String, value: String) {
        self.insert(key, value);
    }
}

impl<S: EnvSink + ?Sized> EnvSink for &mut S {
    fn put(&mut self, key: String, value: String) {
        (**self).put(key, value);
    }
}
