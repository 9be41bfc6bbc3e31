//! Serde support
//!
//! A grid serializes as an array of row arrays. Deserializing goes back
//! through `from_rows`, so a ragged snapshot is rejected just like ragged
//! text.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::*;

impl<T: Serialize> Serialize for Grid<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Grid<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Grid::from_rows(rows).map_err(D::Error::custom)
    }
}

impl<T> Grid<T> {
    pub fn to_json(&self) -> GridResult<String>
    where
        T: Serialize,
    {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> GridResult<Self>
    where
        T: DeserializeOwned,
    {
        Ok(serde_json::from_str(json)?)
    }
}
