#![allow(dead_code)]

use ddlkit::DdlExecutor;

/// Error returned by [`RecordingExecutor`] when told to fail
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct FakeServerError(pub String);

/// In-memory executor that records every statement and can refuse one.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    pub executed: Vec<String>,
    /// Fail the statement containing this text
    pub reject_containing: Option<(&'static str, &'static str)>,
}

impl RecordingExecutor {
    pub fn rejecting(needle: &'static str, message: &'static str) -> Self {
        Self {
            executed: Vec::new(),
            reject_containing: Some((needle, message)),
        }
    }
}

impl DdlExecutor for RecordingExecutor {
    type Error = FakeServerError;

    async fn execute(&mut self, sql: &str) -> Result<(), Self::Error> {
        if let Some((needle, message)) = self.reject_containing
            && sql.contains(needle)
        {
            return Err(FakeServerError(message.to_string()));
        }
        self.executed.push(sql.to_string());
        Ok(())
    }
}

/// `n` characters of lorem ipsum
pub fn lorem(n: usize) -> String {
    const LOREM: &str = "Lorem ipsum dolor sit amet, consetetur sadipscing elitr, sed diam \
        nonumy eirmod tempor invidunt ut labore et dolore magna aliquyam erat, sed diam voluptua. ";
    LOREM.chars().cycle().take(n).collect()
}
