//! Layout check between the Rust mirrors and the native headers

use std::fmt;

use crate::probe::SizeRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutEntry {
    Match { name: String, size: usize },
    Mismatch { name: String, rust: usize, native: usize },
    /// Mirrored in Rust but absent from the native output
    RustOnly { name: String, size: usize },
    /// Reported natively but has no Rust mirror
    NativeOnly { name: String, size: usize },
}

impl LayoutEntry {
    pub fn name(&self) -> &str {
        match self {
            LayoutEntry::Match { name, .. }
            | LayoutEntry::Mismatch { name, .. }
            | LayoutEntry::RustOnly { name, .. }
            | LayoutEntry::NativeOnly { name, .. } => name,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, LayoutEntry::Match { .. })
    }
}

impl fmt::Display for LayoutEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutEntry::Match { name, size } => write!(f, "ok {} {}", name, size),
            LayoutEntry::Mismatch { name, rust, native } => {
                write!(f, "MISMATCH {} rust={} native={}", name, rust, native)
            }
            LayoutEntry::RustOnly { name, .. } => write!(f, "missing-native {}", name),
            LayoutEntry::NativeOnly { name, .. } => write!(f, "missing-rust {}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayoutReport {
    pub entries: Vec<LayoutEntry>,
}

impl LayoutReport {
    pub fn is_consistent(&self) -> bool {
        self.entries.iter().all(LayoutEntry::is_match)
    }

    pub fn problems(&self) -> impl Iterator<Item = &LayoutEntry> {
        self.entries.iter().filter(|e| !e.is_match())
    }
}

impl fmt::Display for LayoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

/// Pair records by name. Rust order first, then native-only names in
/// native order. Duplicate names keep the first occurrence.
pub fn compare(rust: &[SizeRecord], native: &[SizeRecord]) -> LayoutReport {
    let mut entries: Vec<LayoutEntry> = Vec::with_capacity(rust.len().max(native.len()));

    for r in rust {
        if entries.iter().any(|e| e.name() == r.name) {
            continue;
        }
        let entry = match native.iter().find(|n| n.name == r.name) {
            Some(n) if n.size == r.size => LayoutEntry::Match {
                name: r.name.clone(),
                size: r.size,
            },
            Some(n) => LayoutEntry::Mismatch {
                name: r.name.clone(),
                rust: r.size,
                native: n.size,
            },
            None => LayoutEntry::RustOnly {
                name: r.name.clone(),
                size: r.size,
            },
        };
        entries.push(entry);
    }

    for n in native {
        if entries.iter().any(|e| e.name() == n.name) {
            continue;
        }
        entries.push(LayoutEntry::NativeOnly {
            name: n.name.clone(),
            size: n.size,
        });
    }

    LayoutReport { entries }
}
