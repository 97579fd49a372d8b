use std::collections::BTreeMap;
use std::fmt;

use fxhash::FxBuildHasher;
use indexmap::IndexSet;

use crate::entry::Entry;

/// Characters sharing an initial, deduplicated, kept in the order they were first seen.
pub type CharacterSet = IndexSet<String, FxBuildHasher>;

/// ZhuYin initial -> every character with at least one reading starting with it.
#[derive(Clone, Debug, Default)]
pub struct ReverseIndex {
    by_initial: BTreeMap<char, CharacterSet>,
    entries: usize,
}

impl ReverseIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, initial: char, character: &str) {
        let set = self.by_initial.entry(initial).or_default();
        if !set.contains(character) {
            set.insert(character.to_string());
        }
    }

    pub fn insert_entry(&mut self, entry: &Entry) {
        for initial in entry.initials() {
            self.insert(initial, &entry.character);
        }
        self.entries += 1;
    }

    /// Table lines folded in with [`insert_entry`](Self::insert_entry).
    pub fn entry_count(&self) -> usize {
        self.entries
    }

    pub fn get(&self, initial: char) -> Option<&CharacterSet> {
        self.by_initial.get(&initial)
    }

    /// Initials in ascending code point order.
    pub fn initials(&self) -> impl Iterator<Item = char> + '_ {
        self.by_initial.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &CharacterSet)> {
        self.by_initial.iter().map(|(i, set)| (*i, set))
    }

    pub fn len(&self) -> usize {
        self.by_initial.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_initial.is_empty()
    }

    /// Number of distinct characters across all initials.
    pub fn character_count(&self) -> usize {
        let mut seen = fxhash::FxHashSet::default();
        for set in self.by_initial.values() {
            seen.extend(set.iter().map(String::as_str));
        }
        seen.len()
    }

    /// Output lines, without line terminators. For every initial a header `ㄅ 八 巴 ...`
    /// followed by one `八 八` line per character, in header order.
    pub fn emit(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().flat_map(|(initial, set)| {
            let mut header = String::from(initial);
            for character in set {
                header.push(' ');
                header.push_str(character);
            }
            std::iter::once(header).chain(set.iter().map(|c| format!("{c} {c}")))
        })
    }

    /// Number of lines [`emit`](Self::emit) produces.
    pub fn line_count(&self) -> usize {
        self.by_initial.values().map(|set| set.len() + 1).sum()
    }
}

/// The whole table, every line of [`ReverseIndex::emit`] terminated by `\n`.
impl fmt::Display for ReverseIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.emit() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::parse_line;

    fn index_of(lines: &[&str]) -> ReverseIndex {
        let mut index = ReverseIndex::new();
        for (i, line) in lines.iter().enumerate() {
            index.insert_entry(&parse_line(line, i + 1).unwrap());
        }
        index
    }

    fn sorted(set: &CharacterSet) -> Vec<&str> {
        let mut v: Vec<&str> = set.iter().map(String::as_str).collect();
        v.sort();
        v
    }

    #[test]
    fn shared_initials_group_together() {
        let index = index_of(&["A ㄅㄚ/ㄆㄛ", "B ㄅㄧ"]);
        assert_eq!(index.initials().collect::<Vec<_>>(), vec!['ㄅ', 'ㄆ']);
        assert_eq!(sorted(index.get('ㄅ').unwrap()), vec!["A", "B"]);
        assert_eq!(sorted(index.get('ㄆ').unwrap()), vec!["A"]);
        assert!(index.get('ㄇ').is_none());
    }

    #[test]
    fn repeated_initials_insert_once() {
        let index = index_of(&["一 ㄧ/ㄧˊ/ㄧˋ", "一 ㄧˇ"]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get('ㄧ').unwrap().len(), 1);
        assert_eq!(index.character_count(), 1);
        assert_eq!(index.entry_count(), 2);
    }

    #[test]
    fn initials_are_sorted_by_code_point() {
        let index = index_of(&["Z ㄩ", "Y ㄅ", "X ㄐ", "W ˙ㄉㄜ"]);
        let initials: Vec<char> = index.initials().collect();
        let mut expected = initials.clone();
        expected.sort();
        assert_eq!(initials, expected);
        assert_eq!(initials, vec!['˙', 'ㄅ', 'ㄐ', 'ㄩ']);
    }

    #[test]
    fn emitted_blocks() {
        let index = index_of(&["A ㄅㄚ/ㄆㄛ", "B ㄅㄧ"]);
        let lines: Vec<String> = index.emit().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(index.line_count(), 5);

        let header: Vec<&str> = lines[0].split(' ').collect();
        assert_eq!(header[0], "ㄅ");
        let mut members = header[1..].to_vec();
        let block: Vec<String> = members.iter().map(|c| format!("{c} {c}")).collect();
        assert_eq!(lines[1..3], block[..]);
        members.sort();
        assert_eq!(members, vec!["A", "B"]);

        assert_eq!(lines[3], "ㄆ A");
        assert_eq!(lines[4], "A A");
    }

    #[test]
    fn display_terminates_every_line() {
        let index = index_of(&["A ㄅㄚ"]);
        assert_eq!(index.line_count(), 2);
        assert_eq!(index.to_string(), "ㄅ A\nA A\n");
    }

    #[test]
    fn empty_index_renders_nothing() {
        let index = ReverseIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.entry_count(), 0);
        assert_eq!(index.line_count(), 0);
        assert!(index.to_string().is_empty());
    }
}
