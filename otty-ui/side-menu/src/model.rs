use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One selectable entry of the side menu list.
///
/// Items are plain values: the host builds the list once and clones them
/// freely. Equality covers every field, so two items that share a title and
/// an icon but were created separately are not equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TabItem {
    id: Uuid,
    title: String,
    icon_name: String,
}

impl TabItem {
    /// Create an item with a freshly generated identifier.
    pub fn new(title: impl Into<String>, icon_name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, icon_name)
    }

    /// Create an item with a caller-provided identifier.
    pub fn with_id(
        id: Uuid,
        title: impl Into<String>,
        icon_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            icon_name: icon_name.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon_name(&self) -> &str {
        &self.icon_name
    }
}

/// Field used to decide which list entry matches the selected tab.
///
/// [`SelectionKey::Title`] is the default and matches entries by their
/// label. With duplicate titles only the first matching entry is
/// highlighted; switch to [`SelectionKey::Id`] when titles are not unique.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SelectionKey {
    #[default]
    Title,
    Id,
}

impl SelectionKey {
    /// Return whether `candidate` represents the `selected` tab.
    pub fn matches(self, candidate: &TabItem, selected: &TabItem) -> bool {
        match self {
            SelectionKey::Title => candidate.title == selected.title,
            SelectionKey::Id => candidate.id == selected.id,
        }
    }
}

/// Index of the single highlighted entry, if any.
pub fn highlighted_index(
    tabs: &[TabItem],
    selected: &TabItem,
    key: SelectionKey,
) -> Option<usize> {
    tabs.iter().position(|tab| key.matches(tab, selected))
}
