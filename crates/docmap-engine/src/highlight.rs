use docmap_types::DocumentId;
use serde::Serialize;

use crate::cluster_list::ListItem;

/// Visual emphasis of a list item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    #[default]
    Default,
    Selected,
}

/// Recolors list items to reflect the current selection.
///
/// Both operations re-scan every item; there is no incremental state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionHighlighter;

impl SelectionHighlighter {
    /// Emphasize every item equal to `id` and reset all others.
    pub fn highlight<'a>(&self, items: impl IntoIterator<Item = &'a mut ListItem>, id: &DocumentId) {
        for item in items {
            item.emphasis = if item.id == *id {
                Emphasis::Selected
            } else {
                Emphasis::Default
            };
        }
    }

    /// Reset every item, including `id`, to the default emphasis.
    pub fn unhighlight<'a>(
        &self,
        items: impl IntoIterator<Item = &'a mut ListItem>,
        _id: &DocumentId,
    ) {
        for item in items {
            item.emphasis = Emphasis::Default;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(names: &[&str]) -> Vec<ListItem> {
        names.iter().map(|n| ListItem::new(*n)).collect()
    }

    fn emphasis(items: &[ListItem]) -> Vec<Emphasis> {
        items.iter().map(|i| i.emphasis).collect()
    }

    #[test]
    fn test_highlight_selects_only_matching() {
        let mut list = items(&["a.txt", "b.txt", "c.txt"]);
        SelectionHighlighter.highlight(list.iter_mut(), &DocumentId::from("b.txt"));
        assert_eq!(
            emphasis(&list),
            vec![Emphasis::Default, Emphasis::Selected, Emphasis::Default]
        );
    }

    #[test]
    fn test_highlight_is_idempotent() {
        let mut once = items(&["a.txt", "b.txt"]);
        let mut twice = items(&["a.txt", "b.txt"]);
        let id = DocumentId::from("a.txt");

        SelectionHighlighter.highlight(once.iter_mut(), &id);
        SelectionHighlighter.highlight(twice.iter_mut(), &id);
        SelectionHighlighter.highlight(twice.iter_mut(), &id);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_highlight_moves_selection() {
        let mut list = items(&["a.txt", "b.txt"]);
        SelectionHighlighter.highlight(list.iter_mut(), &DocumentId::from("a.txt"));
        SelectionHighlighter.highlight(list.iter_mut(), &DocumentId::from("b.txt"));
        assert_eq!(emphasis(&list), vec![Emphasis::Default, Emphasis::Selected]);
    }

    #[test]
    fn test_unhighlight_resets_everything() {
        let mut list = items(&["a.txt", "b.txt"]);
        SelectionHighlighter.highlight(list.iter_mut(), &DocumentId::from("a.txt"));
        // Unhovering a different id still clears the selected one
        SelectionHighlighter.unhighlight(list.iter_mut(), &DocumentId::from("b.txt"));
        assert_eq!(emphasis(&list), vec![Emphasis::Default, Emphasis::Default]);
    }

    #[test]
    fn test_unknown_id_clears_all() {
        let mut list = items(&["a.txt"]);
        SelectionHighlighter.highlight(list.iter_mut(), &DocumentId::from("a.txt"));
        SelectionHighlighter.highlight(list.iter_mut(), &DocumentId::from("zzz"));
        assert_eq!(emphasis(&list), vec![Emphasis::Default]);
    }
}
