//! Symbol table module for Hack assembler
//!
//! Uses a hybrid approach: a compile-time perfect hash (PHF) for the
//! predefined symbols, and a `HashMap` for user-defined labels and
//! variables.

use phf::phf_map;
use std::collections::HashMap;
use std::fmt;

use crate::error::AssemblerError;

/// Predefined symbols, seeded at construction (spec §4.4).
static PREDEFINED_SYMBOLS: phf::Map<&'static str, u16> = phf_map! {
    "R0" => 0,
    "R1" => 1,
    "R2" => 2,
    "R3" => 3,
    "R4" => 4,
    "R5" => 5,
    "R6" => 6,
    "R7" => 7,
    "R8" => 8,
    "R9" => 9,
    "R10" => 10,
    "R11" => 11,
    "R12" => 12,
    "R13" => 13,
    "R14" => 14,
    "R15" => 15,

    "SP" => 0,
    "LCL" => 1,
    "ARG" => 2,
    "THIS" => 3,
    "THAT" => 4,

    "SCREEN" => 16384,
    "KBD" => 24576,
};

/// Symbol table for the Hack assembler.
///
/// Labels and variables share one `HashMap`; labels are inserted in pass
/// one via [`SymbolTable::define_label`], which rejects a redefinition
/// (spec §7). Variables are inserted lazily in pass two via
/// [`SymbolTable::get_or_insert`], which is a lookup-or-insert and never
/// errors (spec §4.4: "`add` is a no-op if the name already exists").
#[derive(Debug)]
pub struct SymbolTable {
    user_symbols: HashMap<String, u16>,
}

impl Default for SymbolTable {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolTable({} user symbols)", self.user_symbols.len())
    }
}

impl SymbolTable {
    #[must_use]
    pub fn new() -> Self {
        Self {
            user_symbols: HashMap::with_capacity(32),
        }
    }

    /// Binds a label declaration to a ROM address during pass one.
    ///
    /// # Errors
    /// Returns [`AssemblerError::DuplicateLabel`] if `symbol` is already a
    /// predefined symbol or a previously declared label (spec §7 — the
    /// source silently ignores the second definition; this rejects it).
    pub fn define_label(
        &mut self,
        symbol: &str,
        address: u16,
        line: usize,
    ) -> Result<(), AssemblerError> {
        if PREDEFINED_SYMBOLS.contains_key(symbol) || self.user_symbols.contains_key(symbol) {
            return Err(AssemblerError::DuplicateLabel {
                line,
                label: symbol.to_string(),
            });
        }
        self.user_symbols.insert(symbol.to_string(), address);
        Ok(())
    }

    /// Checks if a symbol exists (either predefined or user-defined).
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        PREDEFINED_SYMBOLS.contains_key(symbol) || self.user_symbols.contains_key(symbol)
    }

    /// Gets or inserts a symbol, returning its address. This is the hot
    /// path for variable resolution in pass two: predefined symbols and
    /// already-seen labels/variables are returned as-is; anything new is
    /// allocated at `next_address` and the counter is advanced.
    pub fn get_or_insert(&mut self, symbol: &str, next_address: &mut u16) -> u16 {
        use std::collections::hash_map::Entry;

        if let Some(&addr) = PREDEFINED_SYMBOLS.get(symbol) {
            return addr;
        }

        match self.user_symbols.entry(symbol.to_string()) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => {
                let addr = *next_address;
                *next_address += 1;
                *e.insert(addr)
            }
        }
    }

    #[must_use]
    pub fn user_symbol_count(&self) -> usize {
        self.user_symbols.len()
    }

    #[must_use]
    pub const fn predefined_symbol_count() -> usize {
        PREDEFINED_SYMBOLS.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predefined_symbols_are_seeded() {
        let mut st = SymbolTable::new();
        assert_eq!(st.get_or_insert("SP", &mut 16), 0);
        assert_eq!(st.get_or_insert("LCL", &mut 16), 1);
        assert_eq!(st.get_or_insert("SCREEN", &mut 16), 16384);
        assert_eq!(st.get_or_insert("KBD", &mut 16), 24576);
        for i in 0..=15u16 {
            assert_eq!(st.get_or_insert(&format!("R{i}"), &mut 16), i);
        }
    }

    #[test]
    fn define_label_rejects_duplicates() {
        let mut st = SymbolTable::new();
        st.define_label("LOOP", 10, 3).unwrap();
        let err = st.define_label("LOOP", 20, 7).unwrap_err();
        assert!(matches!(err, AssemblerError::DuplicateLabel { .. }));
    }

    #[test]
    fn define_label_rejects_predefined_collision() {
        let mut st = SymbolTable::new();
        assert!(st.define_label("SP", 10, 0).is_err());
    }

    #[test]
    fn get_or_insert_allocates_sequentially() {
        let mut st = SymbolTable::new();
        let mut next = 16u16;
        assert_eq!(st.get_or_insert("i", &mut next), 16);
        assert_eq!(next, 17);
        assert_eq!(st.get_or_insert("i", &mut next), 16);
        assert_eq!(next, 17);
        assert_eq!(st.get_or_insert("j", &mut next), 17);
        assert_eq!(next, 18);
    }

    #[test]
    fn symbol_counts() {
        let mut st = SymbolTable::new();
        assert_eq!(SymbolTable::predefined_symbol_count(), 23);
        assert_eq!(st.user_symbol_count(), 0);
        st.define_label("LOOP", 100, 0).unwrap();
        assert_eq!(st.user_symbol_count(), 1);
    }
}
