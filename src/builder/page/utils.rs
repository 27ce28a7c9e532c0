use crate::builder::page::model::Page;

/// Sort pages newest first; pages with equal dates keep their order
pub fn sort_pages(pages: &mut [Page]) {
    pages.sort_by(|a, b| b.created.cmp(&a.created));
}

/// Pages whose type equals `page_type`, in their current order
pub fn filter_by_type(pages: &[Page], page_type: &str) -> Vec<Page> {
    pages
        .iter()
        .filter(|page| page.page_type == page_type)
        .cloned()
        .collect()
}
