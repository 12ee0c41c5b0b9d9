use crate::{disk_client::DiskClient, models::FolderDescriptor};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct DeletionOutcome {
    pub descriptor: FolderDescriptor,
    pub succeeded: bool,
    pub error_detail: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DeletionSummary {
    pub deleted_count: usize,
    pub failed_count: usize,
    pub outcomes: Vec<DeletionOutcome>,
    /// Operator declined; nothing was attempted.
    pub aborted: bool,
}

impl DeletionSummary {
    pub fn aborted() -> Self {
        DeletionSummary {
            aborted: true,
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        !self.aborted && self.failed_count == 0
    }
}

/// Deletes each candidate in order, one request at a time. A failed item is
/// recorded and the batch moves on.
pub async fn delete_folders(
    client: &DiskClient,
    candidates: &[FolderDescriptor],
    confirmed: bool,
    verbose: bool,
) -> DeletionSummary {
    if !confirmed {
        return DeletionSummary::aborted();
    }

    let mut summary = DeletionSummary::default();
    for folder in candidates {
        println!("\n🗑️  Deleting: {}...", folder.name);
        if verbose {
            println!("   Path: {}", folder.path);
        }

        let outcome = match client.delete_permanently(&folder.path).await {
            Ok(()) => {
                println!("   ✅ Deleted: {}", folder.name);
                summary.deleted_count += 1;
                DeletionOutcome {
                    descriptor: folder.clone(),
                    succeeded: true,
                    error_detail: None,
                }
            }
            Err(e) => {
                eprintln!("   ❌ Failed to delete {}: {}", folder.name, e);
                warn!(path = %folder.path, error = %e, "folder deletion failed");
                summary.failed_count += 1;
                DeletionOutcome {
                    descriptor: folder.clone(),
                    succeeded: false,
                    error_detail: Some(e.to_string()),
                }
            }
        };
        summary.outcomes.push(outcome);
    }

    summary
}
