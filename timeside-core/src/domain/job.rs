//! Job domain types

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Server-tracked processing of one item by one pipeline (a TimeSide "task")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "uuid")]
    pub id: Uuid,
    pub status: JobStatus,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub selection: Option<String>,
    #[serde(default)]
    pub item: Option<String>,
}

/// Job lifecycle status
///
/// Carried on the wire as the TimeSide integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum JobStatus {
    Failed,
    Draft,
    Pending,
    Running,
    Done,
}

impl JobStatus {
    pub fn is_done(&self) -> bool {
        matches!(self, JobStatus::Done)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, JobStatus::Failed)
    }
}

impl TryFrom<u8> for JobStatus {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(JobStatus::Failed),
            1 => Ok(JobStatus::Draft),
            2 => Ok(JobStatus::Pending),
            3 => Ok(JobStatus::Running),
            4 => Ok(JobStatus::Done),
            other => Err(format!("unknown task status code {}", other)),
        }
    }
}

impl From<JobStatus> for u8 {
    fn from(status: JobStatus) -> Self {
        match status {
            JobStatus::Failed => 0,
            JobStatus::Draft => 1,
            JobStatus::Pending => 2,
            JobStatus::Running => 3,
            JobStatus::Done => 4,
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JobStatus::Failed => "failed",
            JobStatus::Draft => "draft",
            JobStatus::Pending => "pending",
            JobStatus::Running => "running",
            JobStatus::Done => "done",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_codes() {
        let job: Job = serde_json::from_str(
            r#"{"uuid": "6a1f1d4e-7d35-4f4a-9f6f-2f4b2a3b9c10", "status": 4}"#,
        )
        .unwrap();
        assert_eq!(job.status, JobStatus::Done);
        assert!(job.status.is_done());

        let encoded = serde_json::to_value(JobStatus::Pending).unwrap();
        assert_eq!(encoded, serde_json::json!(2));
    }

    #[test]
    fn test_unknown_status_code_rejected() {
        let result: Result<Job, _> = serde_json::from_str(
            r#"{"uuid": "6a1f1d4e-7d35-4f4a-9f6f-2f4b2a3b9c10", "status": 9}"#,
        );
        assert!(result.is_err());
    }
}
