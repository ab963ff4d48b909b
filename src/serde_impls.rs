use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, SerializeStruct, Serializer};

use crate::table::{ExactTable, ExtendedTable, SparseSet, SparseTable};

impl<V: Serialize, K: Serialize> Serialize for ExactTable<V, K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut table = serializer.serialize_struct("ExactTable", 2)?;
        table.serialize_field("entries", self.entries())?;
        table.serialize_field("default", self.default_value())?;
        table.end()
    }
}

impl<V: Serialize> Serialize for SparseTable<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut table = serializer.serialize_struct("SparseTable", 2)?;
        table.serialize_field("entries", self.entries())?;
        table.serialize_field("default", self.default_value())?;
        table.end()
    }
}

impl Serialize for SparseSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.ranges().serialize(serializer)
    }
}

impl Serialize for ExtendedTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for entry in self.iter() {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }
}

// Loaded data goes through the checked constructors, via an interim
// representation.
#[derive(serde::Deserialize)]
struct Entries<K, V> {
    entries: Vec<(K, V)>,
    default: V,
}

impl<'de, V, K> Deserialize<'de> for ExactTable<V, K>
where
    V: Deserialize<'de>,
    K: Deserialize<'de> + Ord + Copy + Into<u64>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Entries { entries, default } = Entries::deserialize(deserializer)?;
        ExactTable::new(entries, default).map_err(de::Error::custom)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for SparseTable<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Entries { entries, default } = Entries::deserialize(deserializer)?;
        SparseTable::new(entries, default).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for SparseSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ranges = Vec::<(u32, u32)>::deserialize(deserializer)?;
        SparseSet::new(ranges).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for ExtendedTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<(u32, Vec<u32>)>::deserialize(deserializer)?;
        ExtendedTable::new(entries).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::char_props::{GeneralCategory, WordBreak};
    use crate::table::{ExactTable, ExtendedTable, Lookup, SparseSet, SparseTable};

    #[test]
    fn test_load_sparse_table() {
        let json = r#"{"entries":[[0,"Other"],[65,"ALetter"],[91,"Other"]],"default":"Other"}"#;
        let table: SparseTable<WordBreak> = serde_json::from_str(json).unwrap();
        assert_eq!(WordBreak::ALetter, table.lookup(0x5A));
        assert_eq!(WordBreak::Other, table.lookup(0x5B));
        assert_eq!(json, serde_json::to_string(&table).unwrap());
    }

    #[test]
    fn test_load_rejects_unsorted_entries() {
        let json = r#"{"entries":[[10,1],[5,2]],"default":0}"#;
        let err = serde_json::from_str::<ExactTable<u8>>(json).unwrap_err();
        assert!(err.to_string().contains("not strictly increasing"), "{}", err);
        assert!(serde_json::from_str::<SparseSet>("[[0,9],[9,12]]").is_err());
    }

    #[test]
    fn test_extended_table_as_pairs() {
        let table: ExtendedTable = serde_json::from_str("[[223,[83,83]],[64257,[70,73]]]").unwrap();
        assert_eq!(&[0x46, 0x49][..], table.get(0xFB01).unwrap());
        assert_eq!(
            "[[223,[83,83]],[64257,[70,73]]]",
            serde_json::to_string(&table).unwrap()
        );
    }

    #[test]
    fn test_property_values_by_name() {
        assert_eq!(
            "\"UppercaseLetter\"",
            serde_json::to_string(&GeneralCategory::UppercaseLetter).unwrap()
        );
        let set = SparseSet::new(vec![(0x30, 0x39)]).unwrap();
        assert_eq!("[[48,57]]", serde_json::to_string(&set).unwrap());
    }
}
