use serde::Deserialize;

/// A directory entry on the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderDescriptor {
    pub name: String,
    pub path: String,
}

/// One page of folders under a single path.
#[derive(Debug, Clone, Default)]
pub struct ListingResult {
    pub folders: Vec<FolderDescriptor>,
    /// Child count reported by the service, files included.
    pub total: Option<u64>,
    /// Entries (of any type) actually returned in this page.
    pub returned: usize,
}

impl ListingResult {
    pub fn is_truncated(&self) -> bool {
        self.total.is_some_and(|total| total > self.returned as u64)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResourceResponse {
    #[serde(rename = "_embedded")]
    embedded: Option<EmbeddedItems>,
}

#[derive(Debug, Deserialize)]
struct EmbeddedItems {
    #[serde(default)]
    items: Vec<ResourceItem>,
    total: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ResourceItem {
    #[serde(default)]
    name: String,
    #[serde(default)]
    path: String,
    #[serde(rename = "type", default)]
    kind: ResourceKind,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum ResourceKind {
    Dir,
    File,
    #[default]
    #[serde(other)]
    Unknown,
}

impl From<ResourceResponse> for ListingResult {
    fn from(response: ResourceResponse) -> Self {
        let Some(embedded) = response.embedded else {
            return ListingResult::default();
        };
        let returned = embedded.items.len();
        let folders = embedded
            .items
            .into_iter()
            .filter(|item| item.kind == ResourceKind::Dir)
            .filter(|item| !item.name.is_empty() && !item.path.is_empty())
            .map(|item| FolderDescriptor {
                name: item.name,
                path: item.path,
            })
            .collect();

        ListingResult {
            folders,
            total: embedded.total,
            returned,
        }
    }
}
