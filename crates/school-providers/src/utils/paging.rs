//! Search filtering and paging over in-memory rows

use school_domain::Page;

/// Substring name filter; an absent filter matches every row
pub fn name_matches(candidate: Option<&str>, filter: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(filter) => candidate.is_some_and(|name| name.contains(filter)),
    }
}

/// Cut one 1-based page out of already filtered and ordered rows
///
/// `total_count` covers every row, not just the returned page. A page number
/// of 0 is read as the first page.
pub fn paginate<T>(rows: Vec<T>, page_number: u32, page_size: u32) -> Page<T> {
    let total_count = rows.len() as u64;
    let offset = page_number.saturating_sub(1) as usize * page_size as usize;

    let data = rows
        .into_iter()
        .skip(offset)
        .take(page_size as usize)
        .collect();
    Page::new(data, total_count, page_number, page_size)
}
