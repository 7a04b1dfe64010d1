//! tok-script
//!
//! Decoder for the Lexan tokenized bytecode used by Emperor: Battle for Dune
//! mission scripts (`.tok`).
//!
//! A compiled unit is a small header followed by null-separated segments. Each
//! segment is walked once by the byte-pair decoder ([`decode`]), rendered to a
//! line by the formatter ([`format`]) and assembled into an indented listing by
//! [`assemble::Decompiler`].
//!
//! Symbol tables are plain configuration ([`symbols::SymbolTables`]); nothing in
//! this crate keeps process-wide state, so units can be decoded concurrently by
//! the caller.

pub mod analysis;
pub mod assemble;
pub mod cleanup;
pub mod decode;
pub mod error;
pub mod format;
pub mod slots;
pub mod symbols;
pub mod token;
pub mod unit;

pub use assemble::{Decompiler, Line, Listing};
pub use decode::{decode_segment, DecodeOptions, MarkerSkipRule};
pub use error::{Result, TokError};
pub use slots::{SlotTable, VarType};
pub use symbols::{FunctionTable, StringTable, SymbolTables};
pub use token::{Spanned, Token};
pub use unit::{CompiledUnit, UnitHeader};
