//! Named default readers.
//!
//! The table is built once and passed by reference wherever readers are
//! resolved by name. Lookup ignores case; an unknown name is reported as a
//! [`ConfigurationError`] before any row is read.

use std::{collections::BTreeMap, sync::Arc};

use log::debug;

use crate::{
    error::ConfigurationError,
    reader::{
        BooleanReader, CharacterReader, DoubleReader, IntegerReader, StringReader, ValueReader,
        optional_double, optional_integer,
    },
};

pub type SharedReader = Arc<dyn ValueReader>;

pub const BOOLEAN: &str = "boolean";
pub const CHARACTER: &str = "character";
pub const DOUBLE: &str = "double";
pub const INTEGER: &str = "integer";
pub const STRING: &str = "string";
pub const OPTIONAL_DOUBLE: &str = "optional double";
pub const OPTIONAL_INTEGER: &str = "optional integer";

#[derive(Debug, Clone)]
pub struct CellReaders {
    readers: BTreeMap<&'static str, SharedReader>,
}

impl Default for CellReaders {
    fn default() -> Self {
        Self::with_boolean_reader(BooleanReader::default())
    }
}

impl CellReaders {
    /// Default table with a customised boolean reader under `"boolean"`.
    pub fn with_boolean_reader(boolean: BooleanReader) -> Self {
        let mut readers: BTreeMap<&'static str, SharedReader> = BTreeMap::new();
        readers.insert(BOOLEAN, Arc::new(boolean));
        readers.insert(CHARACTER, Arc::new(CharacterReader));
        readers.insert(DOUBLE, Arc::new(DoubleReader));
        readers.insert(INTEGER, Arc::new(IntegerReader));
        readers.insert(STRING, Arc::new(StringReader));
        readers.insert(OPTIONAL_DOUBLE, Arc::new(optional_double()));
        readers.insert(OPTIONAL_INTEGER, Arc::new(optional_integer()));
        Self { readers }
    }

    pub fn get(&self, name: &str) -> Option<SharedReader> {
        let normalized = name.trim().to_lowercase();
        self.readers.get(normalized.as_str()).cloned()
    }

    /// Resolves every name, failing on the first one that has no reader.
    pub fn generate<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<Vec<SharedReader>, ConfigurationError> {
        let readers = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name)
                    .ok_or_else(|| ConfigurationError::UnknownReader(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Resolved {} default reader(s)", readers.len());
        Ok(readers)
    }

    /// Name under which this exact reader instance is registered.
    pub fn name_of(&self, reader: &SharedReader) -> Option<&'static str> {
        self.readers
            .iter()
            .find(|(_, candidate)| Arc::ptr_eq(candidate, reader))
            .map(|(name, _)| *name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.readers.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &SharedReader)> {
        self.readers.iter().map(|(name, reader)| (*name, reader))
    }
}
