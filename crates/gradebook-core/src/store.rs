use crate::record::Record;

/// Ordered, growable collection of student records.
///
/// Position is the only identity: duplicate names and duplicate score sets
/// are permitted and never deduplicated. Insertion order is preserved across
/// append, load, and save.
#[derive(Debug, Clone, Default)]
pub struct Store {
    records: Vec<Record>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all records. Idempotent.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Adds a record at the end, preserving prior order.
    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Replaces the entire contents with the given records, in their order.
    pub fn replace_all<I: IntoIterator<Item = Record>>(&mut self, records: I) {
        self.records.clear();
        self.records.extend(records);
    }

    /// Read-only ordered view of all records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut store = Store::new();
        store.append(Record::new("A", 1, 2, 3));
        store.append(Record::new("B", 4, 5, 6));
        store.append(Record::new("C", 7, 8, 9));

        let names: Vec<&str> = store.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut store = Store::new();
        store.append(Record::new("A", 1, 2, 3));

        store.clear();
        assert!(store.is_empty());
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_replace_all_discards_previous_contents() {
        let mut store = Store::new();
        store.append(Record::new("Old", 0, 0, 0));

        store.replace_all([Record::new("X", 1, 1, 1), Record::new("Y", 2, 2, 2)]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].name, "X");
        assert_eq!(store.records()[1].name, "Y");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut store = Store::new();
        let record = Record::new("Same", 50, 50, 50);
        store.append(record.clone());
        store.append(record.clone());

        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0], store.records()[1]);
    }
}
