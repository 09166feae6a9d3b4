use std::fmt::Write as _;
use std::io;
use std::io::Write;

use record::Record;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::config::MapTargets;
use crate::demo::Demonstrator;
use crate::error::DemoError;
use crate::linked_map::LinkedMap;
use crate::timing::Transcript;

/// A map from records to owner names.
///
/// Sorting rebuilds the map from its entries in key order. Whether that
/// order survives depends on the map: a hash map forgets it, an
/// insertion-ordered map keeps it.
pub trait RecordMap: Default + FromIterator<(Record, String)> + IntoIterator<Item = (Record, String)> {
    /// Name used in transcript lines.
    const KIND: &'static str;
    /// Heading for the demonstrator running over this map.
    const HEADING: &'static str;

    fn len(&self) -> usize;
    fn get(&self, key: &Record) -> Option<&String>;
    fn insert(&mut self, key: Record, value: String) -> Option<String>;
    fn remove(&mut self, key: &Record) -> Option<String>;
    fn entries(&self) -> impl Iterator<Item = (&Record, &String)>;
}

impl RecordMap for FxHashMap<Record, String> {
    const KIND: &'static str = "HashMap";
    const HEADING: &'static str = "HashMap operations";

    fn len(&self) -> usize {
        return FxHashMap::len(self);
    }

    fn get(&self, key: &Record) -> Option<&String> {
        return FxHashMap::get(self, key);
    }

    fn insert(&mut self, key: Record, value: String) -> Option<String> {
        return FxHashMap::insert(self, key, value);
    }

    fn remove(&mut self, key: &Record) -> Option<String> {
        return FxHashMap::remove(self, key);
    }

    fn entries(&self) -> impl Iterator<Item = (&Record, &String)> {
        return self.iter();
    }
}

impl RecordMap for LinkedMap<Record, String> {
    const KIND: &'static str = "LinkedMap";
    const HEADING: &'static str = "LinkedMap operations";

    fn len(&self) -> usize {
        return LinkedMap::len(self);
    }

    fn get(&self, key: &Record) -> Option<&String> {
        return LinkedMap::get(self, key);
    }

    fn insert(&mut self, key: Record, value: String) -> Option<String> {
        return LinkedMap::insert(self, key, value);
    }

    fn remove(&mut self, key: &Record) -> Option<String> {
        return LinkedMap::remove(self, key);
    }

    fn entries(&self) -> impl Iterator<Item = (&Record, &String)> {
        return self.iter();
    }
}

/// The map walkthrough: search by key and value, print, sort, print,
/// search again, add, remove by key, remove by value.
pub struct MapDemo<M: RecordMap> {
    map: M,
    targets: MapTargets,
}

impl<M: RecordMap> MapDemo<M> {
    pub fn new(entries: impl IntoIterator<Item = (Record, String)>, targets: MapTargets) -> MapDemo<M> {
        return MapDemo {
            map: entries.into_iter().collect(),
            targets,
        };
    }

    pub fn map(&self) -> &M {
        return &self.map;
    }

    pub fn find_by_key<W: Write>(&self, out: &mut Transcript<W>) -> io::Result<Option<String>> {
        let key = &self.targets.key_to_find_and_delete;
        let owner = out.timed(format!("search by key in {}", M::KIND), || self.map.get(key).cloned())?;

        match &owner {
            Some(owner) => out.line(format_args!("Entry with key '{}' found. Owner: {}", key, owner))?,
            None => out.line(format_args!("Entry with key '{}' is absent from {}.", key, M::KIND))?,
        }
        return Ok(owner);
    }

    /// First record whose owner is the target value, scanning every entry.
    pub fn find_by_value<W: Write>(&self, out: &mut Transcript<W>) -> io::Result<Option<Record>> {
        let value = &self.targets.value_to_find_and_delete;
        let found = out.timed(format!("search by value in {}", M::KIND), || {
            self.map.entries().find(|(_, owner)| *owner == value).map(|(key, _)| key.clone())
        })?;

        match &found {
            Some(key) => out.line(format_args!("Owner '{}' found. Record: {}", value, key))?,
            None => out.line(format_args!("Owner '{}' is absent from {}.", value, M::KIND))?,
        }
        return Ok(found);
    }

    pub fn print_entries<W: Write>(&self, out: &mut Transcript<W>) -> io::Result<()> {
        out.line(format_args!("\n=== Key-value pairs in {} ===", M::KIND))?;
        let listing = out.timed(format!("render key-value pairs in {}", M::KIND), || {
            let mut listing = String::new();
            for (key, owner) in self.map.entries() {
                let _ = writeln!(listing, "  {} -> {}", key, owner);
            }
            listing
        })?;
        return out.line(listing.trim_end());
    }

    /// Rebuild the map from its entries in key order.
    pub fn sort_by_key<W: Write>(&mut self, out: &mut Transcript<W>) -> io::Result<()> {
        let map = &mut self.map;
        return out.timed(format!("sort {} by key", M::KIND), || {
            let mut entries: Vec<(Record, String)> = std::mem::take(map).into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            *map = entries.into_iter().collect();
        });
    }

    pub fn add_entry<W: Write>(&mut self, out: &mut Transcript<W>) -> io::Result<()> {
        let key = self.targets.key_to_add.clone();
        let value = self.targets.value_to_add.clone();
        let map = &mut self.map;
        out.timed(format!("add entry to {}", M::KIND), || map.insert(key, value))?;

        return out.line(format_args!(
            "Added entry: record='{}', owner='{}'",
            self.targets.key_to_add, self.targets.value_to_add
        ));
    }

    pub fn remove_by_key<W: Write>(&mut self, out: &mut Transcript<W>) -> io::Result<Option<String>> {
        let key = &self.targets.key_to_find_and_delete;
        let map = &mut self.map;
        let removed = out.timed(format!("remove by key from {}", M::KIND), || map.remove(key))?;

        match &removed {
            Some(owner) => out.line(format_args!("Removed entry with key '{}'. Owner was: {}", key, owner))?,
            None => out.line(format_args!("Key '{}' not found for removal.", key))?,
        }
        return Ok(removed);
    }

    /// Remove every entry owned by the target value, returning how many went.
    pub fn remove_by_value<W: Write>(&mut self, out: &mut Transcript<W>) -> io::Result<usize> {
        let value = &self.targets.value_to_find_and_delete;
        let map = &mut self.map;
        let removed = out.timed(format!("remove by value from {}", M::KIND), || {
            let keys: SmallVec<[Record; 4]> = map
                .entries()
                .filter(|(_, owner)| *owner == value)
                .map(|(key, _)| key.clone())
                .collect();
            for key in &keys {
                map.remove(key);
            }
            keys.len()
        })?;

        out.line(format_args!("Removed {} entries with owner '{}'", removed, value))?;
        return Ok(removed);
    }
}

impl<M: RecordMap> Demonstrator for MapDemo<M> {
    fn name(&self) -> &'static str {
        return M::HEADING;
    }

    fn run<W: Write>(&mut self, out: &mut Transcript<W>) -> Result<(), DemoError> {
        out.line(format_args!("Initial size of {}: {}", M::KIND, self.map.len()))?;

        self.find_by_key(out)?;
        self.find_by_value(out)?;

        self.print_entries(out)?;
        self.sort_by_key(out)?;
        self.print_entries(out)?;

        self.find_by_key(out)?;
        self.find_by_value(out)?;

        self.add_entry(out)?;

        self.remove_by_key(out)?;
        self.remove_by_value(out)?;

        out.line(format_args!("Final size of {}: {}", M::KIND, self.map.len()))?;
        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_map_entries;

    fn linked_demo() -> MapDemo<LinkedMap<Record, String>> {
        return MapDemo::new(default_map_entries(), MapTargets::default());
    }

    #[test]
    fn heading_names_the_map_kind() {
        assert_eq!(linked_demo().name(), "LinkedMap operations");
        let hashed: MapDemo<FxHashMap<Record, String>> =
            MapDemo::new(default_map_entries(), MapTargets::default());
        assert_eq!(hashed.name(), "HashMap operations");
    }

    #[test]
    fn sort_orders_linked_map_by_key() {
        let mut demo = linked_demo();
        demo.sort_by_key(&mut Transcript::new(io::sink())).unwrap();

        let keys: Vec<Record> = demo.map().keys().cloned().collect();
        let mut expected = keys.clone();
        expected.sort();
        assert_eq!(keys, expected);
        assert_eq!(keys.first(), Some(&Record::new("Zmiika", 25)));
        assert_eq!(keys.last(), Some(&Record::new("Aspid", 35)));

        let udavchyk: Vec<_> = keys.iter().filter(|k| k.label() == Some("Udavchyk")).collect();
        assert_eq!(udavchyk, vec![&Record::new("Udavchyk", 15), &Record::new("Udavchyk", 18)]);
    }

    #[test]
    fn lookups_find_targets() {
        let demo = linked_demo();
        let mut out = Transcript::new(io::sink());
        assert_eq!(demo.find_by_key(&mut out).unwrap(), Some("Oksana".to_string()));
        // Insertion order puts Sirius ahead of Orion.
        assert_eq!(demo.find_by_value(&mut out).unwrap(), Some(Record::new("Sirius", 32)));
    }

    #[test]
    fn mutations_on_hash_map() {
        let mut demo: MapDemo<FxHashMap<Record, String>> =
            MapDemo::new(default_map_entries(), MapTargets::default());
        let mut out = Transcript::new(io::sink());

        demo.add_entry(&mut out).unwrap();
        assert_eq!(demo.map().len(), 11);
        assert_eq!(demo.remove_by_key(&mut out).unwrap(), Some("Oksana".to_string()));
        assert_eq!(demo.remove_by_key(&mut out).unwrap(), None);
        assert_eq!(demo.remove_by_value(&mut out).unwrap(), 2);
        assert_eq!(demo.remove_by_value(&mut out).unwrap(), 0);
        assert_eq!(demo.map().len(), 8);
        assert!(demo.map().values().all(|owner| owner != "Myroslava"));
    }

    #[test]
    fn run_reports_sizes() {
        let mut demo = linked_demo();
        let mut out = Transcript::new(Vec::new());
        demo.run(&mut out).unwrap();

        let text = String::from_utf8(out.into_inner()).unwrap();
        assert!(text.contains("Initial size of LinkedMap: 10"), "{}", text);
        assert!(text.contains("Final size of LinkedMap: 8"));
        assert!(text.contains("Removed 2 entries with owner 'Myroslava'"));
        assert!(text.contains("  Record{label='Aspid', count=35, hash="));
    }

    #[test]
    fn empty_map_reports_absence() {
        let demo: MapDemo<LinkedMap<Record, String>> = MapDemo::new(Vec::new(), MapTargets::default());
        let mut out = Transcript::new(Vec::new());
        assert_eq!(demo.find_by_key(&mut out).unwrap(), None);
        assert_eq!(demo.find_by_value(&mut out).unwrap(), None);

        let text = String::from_utf8(out.into_inner()).unwrap();
        assert!(text.contains("is absent from LinkedMap."));
        assert!(text.contains("Owner 'Myroslava' is absent from LinkedMap."));
    }
}
