use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::Result;
use crate::path_de;

use super::{Enum, EnumBuilder};

impl<V: Serialize> Serialize for Enum<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.pairs())
    }
}

struct EnumVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for EnumVisitor<V> {
    type Value = Enum<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object of member names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Enum<V>, A::Error> {
        let mut builder = EnumBuilder::<V>::new();
        while let Some((name, value)) = map.next_entry::<String, V>()? {
            builder
                .constant(name, value)
                .map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(builder.build())
    }
}

/// Members come back in document order, as an anonymous enum.
impl<'de, V: Deserialize<'de>> Deserialize<'de> for Enum<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(EnumVisitor(PhantomData))
    }
}

impl<V: Serialize> Enum<V> {
    pub fn as_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<V: DeserializeOwned> Enum<V> {
    /// Parse an ordered JSON object. Errors carry the path they happened at.
    pub fn from_json_str(src: &str) -> Result<Self> {
        path_de::from_str_with_path(src)
    }

    pub fn from_json_value(value: Value) -> Result<Self> {
        path_de::from_value_with_path(value)
    }
}
