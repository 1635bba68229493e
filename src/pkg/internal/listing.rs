//! Pure projections over the job collection: search filtering and paging.

use crate::{
    pkg::internal::adaptors::jobs::spec::Job,
    prelude::{BoardError, Result},
};

/// Jobs whose title, description or category contains `search` and whose
/// location contains `location`, both compared case-insensitively and
/// verbatim, surrounding whitespace included. Empty needles match everything.
/// Input order is preserved.
pub fn filter<'a>(jobs: &'a [Job], search: &str, location: &str) -> Vec<&'a Job> {
    let search = search.to_lowercase();
    let location = location.to_lowercase();
    jobs.iter()
        .filter(|job| {
            job.title.to_lowercase().contains(&search)
                || job.description.to_lowercase().contains(&search)
                || job.category.to_lowercase().contains(&search)
        })
        .filter(|job| job.location.to_lowercase().contains(&location))
        .collect()
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Brings `page` into `[1, total_pages]`. An empty listing still has page 1.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// The `page`-th (1-based) slice of `page_size` items. Pages outside
/// `[1, total_pages]` are rejected rather than clamped; page 1 of an empty
/// listing is the empty slice.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> Result<&[T]> {
    if page_size == 0 {
        return Err(BoardError::InvalidPageSize);
    }
    let total = total_pages(items.len(), page_size);
    if page == 0 || page > total.max(1) {
        return Err(BoardError::PageOutOfRange {
            page,
            total_pages: total,
        });
    }
    let start = ((page - 1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());
    Ok(&items[start..end])
}
