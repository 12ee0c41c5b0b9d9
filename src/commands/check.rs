use crate::{disk_client::DiskClient, filter::filter_by_name, report};
use anyhow::{bail, Result};

/// Returns whether a folder called `name` exists directly under `path`.
pub async fn check_folder(
    client: &DiskClient,
    path: &str,
    name: &str,
    limit: u32,
    verbose: bool,
) -> Result<bool> {
    if name.trim().is_empty() {
        bail!("folder name must not be empty");
    }

    report::banner("Checking for a folder on Yandex Disk");
    println!("Looking for: {}\n", name);
    if verbose {
        println!("  Searching in: {}", path);
    }

    let listing = client.list_children(path, limit).await?;
    println!("📁 Folders found in {}: {}\n", path, listing.folders.len());

    match filter_by_name(&listing.folders, name) {
        Some(folder) => {
            println!("✅ Folder '{}' FOUND!", name);
            println!("   Path: {}", folder.path);
            Ok(true)
        }
        None => {
            println!("❌ Folder '{}' NOT found in {}", name, path);
            if !listing.folders.is_empty() {
                println!("\n📋 All folders in {}:", path);
                report::folder_list(&listing.folders);
            }
            if listing.is_truncated() {
                println!("\n⚠️  Listing was truncated, the folder may be beyond --limit");
            }
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disk_client::create_client;
    use crate::error::DiskError;
    use crate::test_support::{mount_listing, received, test_config};
    use wiremock::MockServer;

    const ROOT_LISTING: &str = r#"{"_embedded":{"items":[
        {"name":"Тест комтех","path":"/Тест комтех","type":"dir"},
        {"name":"notes.txt","path":"/notes.txt","type":"file"}
    ]}}"#;

    async fn root_server() -> (MockServer, DiskClient) {
        let server = MockServer::start().await;
        mount_listing(&server, "/", 200, ROOT_LISTING).await;
        let client = create_client(&test_config(&server.uri(), 5)).unwrap();
        (server, client)
    }

    #[tokio::test]
    async fn finds_folder_at_root() {
        let (_server, client) = root_server().await;

        let found = check_folder(&client, "/", "Тест комтех", 1000, false).await;

        assert!(found.unwrap());
    }

    #[tokio::test]
    async fn files_never_match() {
        let (_server, client) = root_server().await;

        let found = check_folder(&client, "/", "notes.txt", 1000, false).await;

        assert!(!found.unwrap());
    }

    #[tokio::test]
    async fn blank_name_is_rejected_without_listing() {
        let (server, client) = root_server().await;

        assert!(check_folder(&client, "/", "  ", 1000, false).await.is_err());
        assert!(received(&server).await.is_empty());
    }

    #[tokio::test]
    async fn listing_failure_is_an_error_not_a_miss() {
        let server = MockServer::start().await;
        mount_listing(&server, "/", 500, "internal").await;
        let client = create_client(&test_config(&server.uri(), 5)).unwrap();

        let err = check_folder(&client, "/", "Тест комтех", 1000, false)
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DiskError>(),
            Some(DiskError::ListingFailed { status: 500, .. })
        ));
    }
}
