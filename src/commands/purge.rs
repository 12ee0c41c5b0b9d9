use crate::{
    commands::delete::{delete_folders, DeletionSummary},
    disk_client::DiskClient,
    filter::filter_by_suffix,
    models::FolderDescriptor,
    report,
};
use anyhow::{bail, Result};

/// Lists `base`, picks folders ending with `suffix` and deletes them once
/// `confirm` agrees. `confirm` is not called when there is nothing to delete.
pub async fn purge_folders<F>(
    client: &DiskClient,
    base: &str,
    suffix: &str,
    limit: u32,
    verbose: bool,
    confirm: F,
) -> Result<DeletionSummary>
where
    F: FnOnce(&[FolderDescriptor]) -> Result<bool>,
{
    // An empty suffix matches every folder.
    if suffix.trim().is_empty() {
        bail!("--suffix must not be empty");
    }

    report::banner(&format!("Removing '{}' folders from '{}'", suffix, base));
    println!("\n🔍 Searching folders in '{}'...", base);

    let listing = client.list_children(base, limit).await?;
    if verbose {
        println!("  {} folder(s) in listing", listing.folders.len());
    }
    if listing.is_truncated() {
        println!("⚠️  Only the first {} entries were inspected", listing.returned);
    }

    let candidates = filter_by_suffix(&listing.folders, suffix);
    if candidates.is_empty() {
        println!("✅ No folders ending with '{}' in '{}'", suffix, base);
        return Ok(DeletionSummary::default());
    }

    println!("\n📁 Folders to delete: {}", candidates.len());
    report::folder_list(&candidates);

    let confirmed = confirm(&candidates)?;
    if !confirmed {
        println!("❌ Deletion cancelled");
        return Ok(DeletionSummary::aborted());
    }

    let summary = delete_folders(client, &candidates, confirmed, verbose).await;
    report::summary(&summary);
    Ok(summary)
}
