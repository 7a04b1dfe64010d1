use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::symbols::{KW_INT, KW_OBJ, KW_POS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarType {
    Int,
    Obj,
    Pos,
}

impl VarType {
    pub fn as_str(self) -> &'static str {
        match self {
            VarType::Int => KW_INT,
            VarType::Obj => KW_OBJ,
            VarType::Pos => KW_POS,
        }
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VarType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            KW_INT => Ok(VarType::Int),
            KW_OBJ => Ok(VarType::Obj),
            KW_POS => Ok(VarType::Pos),
            _ => Err(()),
        }
    }
}

/// Variable slots discovered while walking one compiled unit.
///
/// Naming is total: a declared slot renders as `<type>_<slot>`, anything else
/// as `v<slot>`. A declaration is recorded once and never replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotTable {
    declared: BTreeMap<u8, VarType>,
}

impl SlotTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the slot already had a declaration.
    pub fn declare(&mut self, slot: u8, ty: VarType) -> bool {
        if self.declared.contains_key(&slot) {
            return false;
        }
        self.declared.insert(slot, ty);
        true
    }

    pub fn get(&self, slot: u8) -> Option<VarType> {
        self.declared.get(&slot).copied()
    }

    pub fn is_declared(&self, slot: u8) -> bool {
        self.declared.contains_key(&slot)
    }

    pub fn name(&self, slot: u8) -> String {
        match self.get(slot) {
            Some(ty) => format!("{}_{}", ty, slot),
            None => format!("v{}", slot),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, VarType)> + '_ {
        self.declared.iter().map(|(slot, ty)| (*slot, *ty))
    }

    pub fn len(&self) -> usize {
        self.declared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }
}
