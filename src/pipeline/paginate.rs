//! Fixed-size page slicing.

/// Number of pages needed for `len` items, never less than one.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size).max(1)
}

/// Slice out 1-indexed page `page`. Out-of-range pages yield an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let Some(index) = page.checked_sub(1) else {
        return &[];
    };

    let start = index.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 8), 1);
        assert_eq!(total_pages(8, 8), 1);
        assert_eq!(total_pages(9, 8), 2);
        assert_eq!(total_pages(10, 8), 2);
        assert_eq!(total_pages(17, 8), 3);
    }

    #[test]
    fn test_last_page_is_short() {
        let items: Vec<u32> = (1..=10).collect();
        assert_eq!(paginate(&items, 1, 8), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(paginate(&items, 2, 8), &[9, 10]);
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        let items: Vec<u32> = (1..=10).collect();
        assert!(paginate(&items, 0, 8).is_empty());
        assert!(paginate(&items, 3, 8).is_empty());
        assert!(paginate(&items, usize::MAX, 8).is_empty());
        assert!(paginate::<u32>(&[], 1, 8).is_empty());
    }

    #[test]
    fn test_pages_partition_input() {
        for len in 0..30usize {
            let items: Vec<usize> = (0..len).collect();
            for page_size in 1..10usize {
                let pages = total_pages(items.len(), page_size);
                let mut joined = Vec::new();
                for page in 1..=pages {
                    let slice = paginate(&items, page, page_size);
                    assert!(slice.len() <= page_size);
                    joined.extend_from_slice(slice);
                }
                assert_eq!(joined, items, "len={len} page_size={page_size}");
            }
        }
    }
}
