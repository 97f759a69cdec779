// src/scrape.rs
// Aggregator: walk the listing pages in order, merge, sort by status weight.

use crate::{
    config::consts::PAGES,
    core::PageFetcher,
    parcel::ParcelItem,
    specs::packages,
};

/// Merged result of one pass over the listing pages.
#[derive(Debug, Default)]
pub struct Collected {
    /// Sorted by status weight, highest first; ties keep page order.
    pub parcels: Vec<ParcelItem>,
    /// Pages that failed to fetch or parse and were counted as empty.
    pub failed_pages: usize,
}

/// Fetch and extract every page in `PAGES`.
pub fn collect_parcels(fetcher: &dyn PageFetcher) -> Collected {
    collect_pages(fetcher, &PAGES)
}

/// Fetch and extract `pages` one after another. Failures degrade to an empty page.
pub fn collect_pages(fetcher: &dyn PageFetcher, pages: &[&str]) -> Collected {
    let mut collected = Collected::default();

    for path in pages {
        let extracted = fetcher
            .fetch_page(path)
            .and_then(|doc| packages::extract(&doc));

        match extracted {
            Ok(mut items) => {
                logf!("{path}: {} parcels", items.len());
                collected.parcels.append(&mut items);
            }
            Err(e) => {
                loge!("{path}: {e}");
                collected.failed_pages += 1;
            }
        }
    }

    sort_by_weight(&mut collected.parcels);
    collected
}

/// Stable sort, heaviest status first.
pub fn sort_by_weight(items: &mut [ParcelItem]) {
    items.sort_by(|a, b| b.status.weight().cmp(&a.status.weight()));
}
