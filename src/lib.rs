pub mod index;
pub mod query;
pub mod util;

#[cfg(test)]
mod tests {
    use super::index::{SearchOpts, TrigramIndex};

    #[test]
    fn test_basic_add_search() {
        let mut idx = TrigramIndex::new();
        idx.add("котёнок играет с клубком", "cats");
        idx.add("щенок играет с мячиком", "dogs");

        let hits = idx.search("котенок", SearchOpts::default());
        assert!(!hits.is_empty());
        assert_eq!(*hits[0].item, "cats");
    }
}
