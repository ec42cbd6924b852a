//! Batch summary
//!
//! Per-item outcomes of an import run and the console report printed at the
//! end of it.

use chrono::{DateTime, Utc};
use colored::*;
use std::time::Duration;
use timeside_core::domain::job::JobStatus;
use uuid::Uuid;

/// How one record's pipeline ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// Job reached `Done`
    Succeeded {
        item_id: Uuid,
        job_id: Uuid,
        player_url: String,
        elapsed: Duration,
    },
    /// Polling budget exhausted before the job finished
    TimedOut {
        item_id: Uuid,
        job_id: Uuid,
        last_status: Option<JobStatus>,
        elapsed: Duration,
    },
    /// Rejected locally or remotely, or the job reported a failure
    Failed {
        /// Set once the job was created
        job_id: Option<Uuid>,
        error: String,
    },
}

/// Outcome of one input record, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemReport {
    /// Position of the record in the batch file
    pub index: usize,
    pub title: String,
    pub outcome: ItemOutcome,
}

impl ItemReport {
    pub fn failed(index: usize, title: impl Into<String>, error: impl ToString) -> Self {
        Self {
            index,
            title: title.into(),
            outcome: ItemOutcome::Failed {
                job_id: None,
                error: error.to_string(),
            },
        }
    }
}

/// Aggregated result of a batch run
#[derive(Debug, Clone)]
pub struct BatchSummary {
    pub collection_id: Uuid,
    pub pipeline_id: Uuid,
    /// Records that passed local checks and entered submission
    pub submitted: usize,
    pub items: Vec<ItemReport>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl BatchSummary {
    pub fn succeeded(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Succeeded { .. }))
    }

    pub fn timed_out(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::TimedOut { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&ItemOutcome) -> bool) -> usize {
        self.items.iter().filter(|i| pred(&i.outcome)).count()
    }

    /// Print the report to stdout
    pub fn print(&self) {
        println!();
        println!("{}", "Import summary:".bold());
        println!("  Collection: {}", self.collection_id.to_string().dimmed());
        println!("  Pipeline:   {}", self.pipeline_id.to_string().dimmed());
        let duration = self.finished_at.signed_duration_since(self.started_at);
        println!("  Duration:   {}s", duration.num_seconds());
        println!();

        for item in &self.items {
            print_item(item);
        }

        println!(
            "{} records, {} submitted: {} done, {} timed out, {} failed",
            self.items.len(),
            self.submitted,
            self.succeeded().to_string().green(),
            self.timed_out().to_string().yellow(),
            self.failed().to_string().red(),
        );
    }
}

fn print_item(item: &ItemReport) {
    match &item.outcome {
        ItemOutcome::Succeeded {
            job_id,
            player_url,
            elapsed,
            ..
        } => {
            println!("  {} {}", "✓".green(), item.title.bold());
            println!("    Job:    {} ({}ms)", job_id.to_string().dimmed(), elapsed.as_millis());
            println!("    Player: {}", player_url.cyan());
        }
        ItemOutcome::TimedOut {
            job_id,
            last_status,
            elapsed,
            ..
        } => {
            let status = last_status
                .map(|s| s.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            println!("  {} {}", "…".yellow(), item.title.bold());
            println!(
                "    Job:    {} still {} after {}s",
                job_id.to_string().dimmed(),
                status,
                elapsed.as_secs()
            );
        }
        ItemOutcome::Failed { job_id, error } => {
            println!("  {} {}", "✗".red(), item.title.bold());
            if let Some(job_id) = job_id {
                println!("    Job:    {}", job_id.to_string().dimmed());
            }
            println!("    Error:  {}", error.red());
        }
    }
}
