use crate::commands::delete::DeletionSummary;
use crate::models::FolderDescriptor;

const RULE_WIDTH: usize = 60;

pub fn banner(title: &str) {
    rule();
    println!("{}", title);
    rule();
}

pub fn rule() {
    println!("{}", "=".repeat(RULE_WIDTH));
}

pub fn folder_list(folders: &[FolderDescriptor]) {
    for folder in folders {
        println!("   - {} ({})", folder.name, folder.path);
    }
}

pub fn summary(summary: &DeletionSummary) {
    println!();
    rule();
    println!("Deletion summary:");
    println!("   ✅ Deleted: {}", summary.deleted_count);
    if summary.failed_count > 0 {
        println!("   ❌ Failed: {}", summary.failed_count);
        for outcome in summary.outcomes.iter().filter(|o| !o.succeeded) {
            println!(
                "      - {}: {}",
                outcome.descriptor.name,
                outcome.error_detail.as_deref().unwrap_or("unknown error")
            );
        }
    }
    rule();
}

pub fn finish(success: bool) {
    println!();
    rule();
    if success {
        println!("✅ Done!");
    } else {
        println!("❌ Finished with errors");
    }
    rule();
}
