//! Chaptered pagination
//!
//! Items are grouped by resolved chapter in first-seen order, optionally
//! shuffled within each group, then cut into pages of [`PAGE_SIZE`]. The
//! last page of a chapter may be short; it is never filled from the next
//! chapter.

use crate::types::{Page, WordItem, CHAPTER_PLACEHOLDER, PAGE_SIZE};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// Resolve the display chapter for an item
///
/// The first non-empty of the trimmed item chapter, the trimmed default
/// chapter, and [`CHAPTER_PLACEHOLDER`].
pub fn resolve_chapter(item_chapter: &str, default_chapter: &str) -> String {
    [item_chapter.trim(), default_chapter.trim()]
        .into_iter()
        .find(|label| !label.is_empty())
        .unwrap_or(CHAPTER_PLACEHOLDER)
        .to_string()
}

/// Build printable pages, shuffling with the thread-local generator
///
/// Repeated calls with `shuffle = true` produce independent orderings.
pub fn build_pages(items: &[WordItem], default_chapter: &str, shuffle: bool) -> Vec<Page> {
    build_pages_with_rng(items, default_chapter, shuffle, &mut rand::rng())
}

/// Build printable pages, shuffling with the given generator
///
/// When `shuffle` is false the generator is never touched and each chapter
/// keeps its input order.
pub fn build_pages_with_rng<R: Rng + ?Sized>(
    items: &[WordItem],
    default_chapter: &str,
    shuffle: bool,
    rng: &mut R,
) -> Vec<Page> {
    if items.is_empty() {
        return Vec::new();
    }

    let mut pages = Vec::with_capacity(items.len().div_ceil(PAGE_SIZE));
    for (chapter, mut group) in group_by_chapter(items, default_chapter) {
        if shuffle {
            group.shuffle(&mut *rng);
        }

        pages.extend(group.chunks(PAGE_SIZE).map(|chunk| Page {
            chapter: chapter.clone(),
            items: chunk.to_vec(),
        }));
    }

    pages
}

/// Group items by resolved chapter, preserving first-seen chapter order
fn group_by_chapter(items: &[WordItem], default_chapter: &str) -> Vec<(String, Vec<WordItem>)> {
    let mut groups: Vec<(String, Vec<WordItem>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        let key = resolve_chapter(&item.chapter, default_chapter);
        let slot = match index.get(&key) {
            Some(&slot) => slot,
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, Vec::new()));
                groups.len() - 1
            }
        };
        groups[slot].1.push(item.clone());
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn items(chapter: &str, count: usize) -> Vec<WordItem> {
        (0..count)
            .map(|i| WordItem::new(format!("語{i}"), format!("word{i}"), chapter))
            .collect()
    }

    #[test]
    fn test_resolve_chapter() {
        assert_eq!(resolve_chapter("Unit 3", "Unit1"), "Unit 3");
        assert_eq!(resolve_chapter("", "Unit1"), "Unit1");
        assert_eq!(resolve_chapter("  ", " Unit1 "), "Unit1");
        assert_eq!(resolve_chapter("", ""), CHAPTER_PLACEHOLDER);
        assert_eq!(resolve_chapter(" ", "\t"), CHAPTER_PLACEHOLDER);
    }

    #[test]
    fn test_empty_items() {
        assert!(build_pages(&[], "Unit1", true).is_empty());
    }

    #[test]
    fn test_exact_page_boundaries() {
        assert_eq!(build_pages(&items("A", 12), "", false).len(), 1);

        let pages = build_pages(&items("A", 13), "", false);
        let sizes: Vec<usize> = pages.iter().map(|p| p.items.len()).collect();
        assert_eq!(sizes, vec![12, 1]);
    }

    #[test]
    fn test_chapters_never_share_a_page() {
        let mut input = items("A", 5);
        input.extend(items("B", 5));
        let pages = build_pages(&input, "", false);

        assert_eq!(pages.len(), 2);
        assert!(pages[0].items.iter().all(|i| i.chapter == "A"));
        assert!(pages[1].items.iter().all(|i| i.chapter == "B"));
    }

    #[test]
    fn test_default_chapter_merges_with_explicit_label() {
        // An unassigned item joins the group whose label equals the default
        let input = vec![
            WordItem::new("犬", "dog", "Unit1"),
            WordItem::new("猫", "cat", ""),
        ];
        let pages = build_pages(&input, "Unit1", false);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].items.len(), 2);
    }

    #[test]
    fn test_page_items_keep_their_raw_chapter() {
        let input = vec![WordItem::new("猫", "cat", "")];
        let pages = build_pages(&input, "Unit1", false);
        assert_eq!(pages[0].chapter, "Unit1");
        assert_eq!(pages[0].items[0].chapter, "");
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let input = items("A", 30);
        let first = build_pages_with_rng(&input, "", true, &mut StdRng::seed_from_u64(7));
        let second = build_pages_with_rng(&input, "", true, &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn test_shuffle_does_not_mutate_input() {
        let input = items("A", 20);
        let snapshot = input.clone();
        let _ = build_pages_with_rng(&input, "", true, &mut StdRng::seed_from_u64(1));
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_shuffle_stays_within_chapter() {
        let mut input = items("A", 14);
        input.extend(items("B", 3));
        let pages = build_pages_with_rng(&input, "", true, &mut StdRng::seed_from_u64(99));

        let labels: Vec<&str> = pages.iter().map(|p| p.chapter.as_str()).collect();
        assert_eq!(labels, vec!["A", "A", "B"]);
        for page in &pages {
            assert!(page.items.iter().all(|i| i.chapter == page.chapter));
        }
    }
}
