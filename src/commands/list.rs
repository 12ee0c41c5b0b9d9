use crate::disk_client::DiskClient;
use anyhow::Result;

pub async fn list_folders(
    client: &DiskClient,
    path: &str,
    limit: u32,
    verbose: bool,
) -> Result<()> {
    if verbose {
        println!("📄 Listing folders in {}", path);
        println!("  Limit: {}", limit);
    }

    let listing = client.list_children(path, limit).await?;

    if listing.folders.is_empty() {
        println!("No folders found");
    } else {
        println!("Found {} folder(s):", listing.folders.len());
        for (i, folder) in listing.folders.iter().enumerate() {
            println!("{}. {} ({})", i + 1, folder.name, folder.path);
        }
    }
    if listing.is_truncated() {
        println!(
            "⚠️  Showing the first {} of {} entries",
            listing.returned,
            listing.total.unwrap_or_default()
        );
    }

    Ok(())
}
