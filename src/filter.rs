use crate::models::FolderDescriptor;

pub fn filter_by_name<'a>(
    items: &'a [FolderDescriptor],
    name: &str,
) -> Option<&'a FolderDescriptor> {
    items.iter().find(|folder| folder.name == name)
}

/// Folders whose name (not path) ends with `suffix`, in listing order.
pub fn filter_by_suffix(items: &[FolderDescriptor], suffix: &str) -> Vec<FolderDescriptor> {
    items
        .iter()
        .filter(|folder| folder.name.ends_with(suffix))
        .cloned()
        .collect()
}
