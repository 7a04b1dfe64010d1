use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokError};

mod defaults;

pub use defaults::{DEFAULT_FUNCTIONS, DEFAULT_STRINGS};

/// First token id that names a keyword or operator rather than a function.
pub const DEFAULT_KEYWORD_THRESHOLD: u8 = 162;

/// Maximum number of entries a string table can address.
pub const STRING_TABLE_CAPACITY: usize = 128;

pub const KW_INT: &str = "int";
pub const KW_OBJ: &str = "obj";
pub const KW_POS: &str = "pos";
pub const KW_IF: &str = "if";
pub const KW_ELSE: &str = "else";
pub const KW_ENDIF: &str = "endif";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionTable {
    /// Ids at or above this value are keywords/operators.
    pub keyword_threshold: u8,
    pub names: BTreeMap<u8, String>,
}

impl FunctionTable {
    pub fn new(keyword_threshold: u8, names: BTreeMap<u8, String>) -> Self {
        Self {
            keyword_threshold,
            names,
        }
    }

    pub fn name(&self, id: u8) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn is_keyword_id(&self, id: u8) -> bool {
        id >= self.keyword_threshold
    }

    /// Resolve `id` only if it lies in the keyword range.
    pub fn keyword(&self, id: u8) -> Option<&str> {
        if self.is_keyword_id(id) {
            self.name(id)
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for FunctionTable {
    fn default() -> Self {
        let names = DEFAULT_FUNCTIONS
            .iter()
            .enumerate()
            .map(|(id, name)| (id as u8, name.to_string()))
            .collect();
        Self::new(DEFAULT_KEYWORD_THRESHOLD, names)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct StringTable {
    names: Vec<String>,
}

impl StringTable {
    pub fn new(names: Vec<String>) -> Result<Self> {
        if names.len() > STRING_TABLE_CAPACITY {
            return Err(TokError::StringTableTooLarge { len: names.len() });
        }
        Ok(Self { names })
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for StringTable {
    fn default() -> Self {
        Self {
            names: DEFAULT_STRINGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for StringTable {
    type Error = TokError;

    fn try_from(names: Vec<String>) -> Result<Self> {
        Self::new(names)
    }
}

impl From<StringTable> for Vec<String> {
    fn from(table: StringTable) -> Self {
        table.names
    }
}

/// Lookup tables handed to every decode call.
///
/// Serialized layout:
///
/// ```yaml
/// functions:
///   keyword_threshold: 162
///   names:
///     0: ModelTick
///     162: int
/// strings:
///   - ATRefinery
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolTables {
    pub functions: FunctionTable,
    #[serde(default)]
    pub strings: Option<StringTable>,
}

impl SymbolTables {
    pub fn new(functions: FunctionTable, strings: Option<StringTable>) -> Self {
        Self { functions, strings }
    }

    pub fn without_strings(mut self) -> Self {
        self.strings = None;
        self
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let txt = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&txt)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn export_yaml(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_yaml()?)?;
        Ok(())
    }
}

impl Default for SymbolTables {
    fn default() -> Self {
        Self::new(FunctionTable::default(), Some(StringTable::default()))
    }
}
