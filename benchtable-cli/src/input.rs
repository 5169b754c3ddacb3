//! Session Input
//!
//! A session is a JSON document holding the runs to print, grouped by
//! benchmark, and optionally the execution context:
//!
//! ```json
//! {
//!   "context": { "num_cpus": 4, "mhz_per_cpu": 2400.0, "name_field_width": 10 },
//!   "batches": [
//!     [ { "benchmark_name": "BM_Foo", "iterations": 1000, "real_accumulated_time": 50000.0 } ]
//!   ]
//! }
//! ```

use benchtable_report::{ExecutionContext, Run};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from reading a session document
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read session from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read session from stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("Malformed session document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Runs to print, grouped by benchmark
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    /// Execution context; detected from the machine when absent
    #[serde(default)]
    pub context: Option<ExecutionContext>,
    /// One batch per benchmark, runs in print order
    #[serde(default)]
    pub batches: Vec<Vec<Run>>,
}

impl Session {
    /// Parse a session from JSON text
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a session from a file, or from stdin when `path` is `None`
    pub fn load(path: Option<&Path>) -> Result<Self, InputError> {
        let content = match path {
            Some(path) => std::fs::read_to_string(path).map_err(|source| InputError::Read {
                path: path.to_path_buf(),
                source,
            })?,
            None => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(InputError::Stdin)?;
                buf
            }
        };
        Self::from_json(&content)
    }

    /// Keep only batches whose benchmark name matches `filter`.
    ///
    /// Empty batches are dropped as well.
    pub fn retain_matching(&mut self, filter: &Regex) {
        self.batches.retain(|batch| {
            batch
                .first()
                .is_some_and(|run| filter.is_match(&run.benchmark_name))
        });
    }

    /// Benchmark name of every non-empty batch, in order
    pub fn benchmark_names(&self) -> Vec<&str> {
        self.batches
            .iter()
            .filter_map(|batch| batch.first())
            .map(|run| run.benchmark_name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SESSION: &str = r#"{
        "batches": [
            [{"benchmark_name": "BM_Foo", "iterations": 10}],
            [],
            [{"benchmark_name": "BM_Bar"}, {"benchmark_name": "BM_Bar"}]
        ]
    }"#;

    #[test]
    fn test_parse_without_context() {
        let session = Session::from_json(SESSION).unwrap();

        assert!(session.context.is_none());
        assert_eq!(session.batches.len(), 3);
        assert_eq!(session.batches[0][0].iterations, 10);
        assert_eq!(session.benchmark_names(), vec!["BM_Foo", "BM_Bar"]);
    }

    #[test]
    fn test_parse_with_context() {
        let session = Session::from_json(
            r#"{"context": {"num_cpus": 2, "mhz_per_cpu": 1000.0, "manual_time_used": true}}"#,
        )
        .unwrap();

        let ctx = session.context.unwrap();
        assert_eq!(ctx.num_cpus, 2);
        assert!(ctx.manual_time_used);
        assert!(session.batches.is_empty());
    }

    #[test]
    fn test_retain_matching() {
        let mut session = Session::from_json(SESSION).unwrap();
        session.retain_matching(&Regex::new("Bar$").unwrap());

        assert_eq!(session.benchmark_names(), vec!["BM_Bar"]);
        assert_eq!(session.batches.len(), 1);
    }

    #[test]
    fn test_malformed() {
        let err = Session::from_json("{\"batches\": 3}").unwrap_err();
        assert!(matches!(err, InputError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Session::load(Some(Path::new("/nonexistent/benchtable.json"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/benchtable.json"));
    }
}
