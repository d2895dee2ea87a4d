use crate::domain::model::Entry;
use crate::utils::error::{Result, SolidError};
use std::fmt;

/// 只負責管理項目：新增與刪除。存檔交給 [`PersistenceManager`]。
///
/// [`PersistenceManager`]: crate::adapters::persistence::PersistenceManager
#[derive(Debug, Default, Clone)]
pub struct ShoppingList {
    entries: Vec<Entry>,
    count: usize,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, text: impl Into<String>) {
        let entry = Entry {
            index: self.count,
            text: text.into(),
        };
        tracing::debug!("Adding entry {}", entry);
        self.entries.push(entry);
        self.count += 1;
    }

    pub fn remove_entry(&mut self, position: usize) -> Result<Entry> {
        if position >= self.entries.len() {
            return Err(SolidError::IndexOutOfRange {
                position,
                len: self.entries.len(),
            });
        }

        let removed = self.entries.remove(position);
        self.count -= 1;
        tracing::debug!("Removed entry {}", removed);
        Ok(removed)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl fmt::Display for ShoppingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

/// 反例：同一個型別同時管理項目又負責存檔，兩種變動理由綁在一起
#[derive(Debug, Default)]
pub struct ShoppingListWrong {
    inner: ShoppingList,
}

impl ShoppingListWrong {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, text: impl Into<String>) {
        self.inner.add_entry(text);
    }

    pub fn remove_entry(&mut self, position: usize) -> Result<Entry> {
        self.inner.remove_entry(position)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        std::fs::write(path, self.to_string())?;
        Ok(())
    }
}

impl fmt::Display for ShoppingListWrong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_entries_in_order() {
        let mut list = ShoppingList::new();
        list.add_entry("bread");
        list.add_entry("phone");

        assert_eq!(list.len(), 2);
        assert_eq!(list.to_string(), "0: bread\n1: phone");
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        let list = ShoppingList::new();
        assert!(list.is_empty());
        assert_eq!(list.to_string(), "");
    }

    #[test]
    fn test_remove_entry_keeps_order_of_the_rest() {
        let mut list = ShoppingList::new();
        list.add_entry("bread");
        list.add_entry("phone");
        list.add_entry("milk");

        let removed = list.remove_entry(1).unwrap();
        assert_eq!(removed.text, "phone");
        assert_eq!(list.len(), 2);
        assert_eq!(list.to_string(), "0: bread\n2: milk");
    }

    #[test]
    fn test_counter_is_reused_after_removal() {
        let mut list = ShoppingList::new();
        list.add_entry("bread");
        list.add_entry("phone");
        list.remove_entry(0).unwrap();
        list.add_entry("milk");

        // 計數器遞減後，新項目沿用目前的計數值
        assert_eq!(list.to_string(), "1: phone\n1: milk");
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut list = ShoppingList::new();
        list.add_entry("bread");

        let err = list.remove_entry(1).unwrap_err();
        assert!(matches!(
            err,
            SolidError::IndexOutOfRange { position: 1, len: 1 }
        ));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_count_matches_additions_minus_removals() {
        let mut list = ShoppingList::new();
        let mut expected: Vec<String> = Vec::new();

        for (step, text) in ["a", "b", "c", "d", "e", "f"].iter().enumerate() {
            list.add_entry(*text);
            expected.push(text.to_string());
            if step % 3 == 2 {
                list.remove_entry(0).unwrap();
                expected.remove(0);
            }
        }

        assert_eq!(list.len(), expected.len());
        let texts: Vec<&str> = list.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, expected);
    }

    #[test]
    fn test_wrong_list_saves_itself() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wrong.txt");

        let mut list = ShoppingListWrong::new();
        list.add_entry("bread");
        list.save(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "0: bread");
    }
}
