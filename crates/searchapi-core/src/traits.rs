/// A value written in a single locale.
pub trait Localized {
    fn language(&self) -> &str;
}

/// A localized unit carrying one text value (title, introduction, ...).
pub trait LocalizedText: Localized {
    fn text(&self) -> &str;
}

/// A page of hits with the backend's pagination metadata.
///
/// `page` is `None` for multi-type results where the backend omits it.
pub trait Paged {
    type Item;

    fn total_count(&self) -> i64;
    fn page(&self) -> Option<i64>;
    fn page_size(&self) -> i64;
    fn results(&self) -> &[Self::Item];
}
