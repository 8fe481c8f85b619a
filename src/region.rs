//! Region code → display name + flag lookup.
//!
//! The table is deliberately partial. Anything it does not know, including a
//! profile that carries no region at all, resolves to [`RegionInfo::unknown`].

use std::collections::HashMap;

/// Symbol shown for codes the table does not know.
pub const UNKNOWN_SYMBOL: &str = "\u{1F30D}";

/// Display record for one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionInfo {
    pub name: String,
    pub symbol: String,
}

impl RegionInfo {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
        }
    }

    /// The `Unknown 🌍` sentinel.
    pub fn unknown() -> Self {
        Self::new("Unknown", UNKNOWN_SYMBOL)
    }
}

impl std::fmt::Display for RegionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.symbol)
    }
}

/// Flag emoji for a two-letter uppercase code, built from regional indicator letters.
pub fn flag_for(code: &str) -> Option<String> {
    let bytes = code.as_bytes();
    if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_uppercase) {
        return None;
    }
    bytes
        .iter()
        .map(|b| char::from_u32(0x1F1E6 + u32::from(b - b'A')))
        .collect()
}

/// Immutable code → [`RegionInfo`] mapping.
///
/// Build it once and share it (it is typically wrapped in an `Arc` and handed to
/// the [`Presenter`](crate::Presenter)).
#[derive(Debug, Clone)]
pub struct RegionTable {
    entries: HashMap<String, RegionInfo>,
    fallback: RegionInfo,
}

impl Default for RegionTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RegionTable {
    pub fn builder() -> RegionTableBuilder {
        RegionTableBuilder::default()
    }

    /// Builds a table from explicit `(code, info)` pairs. Later duplicates win.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, RegionInfo)>,
        K: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            fallback: RegionInfo::unknown(),
        }
    }

    /// The bundled table of common countries.
    pub fn builtin() -> Self {
        BUILTIN
            .iter()
            .fold(Self::builder(), |b, (code, name)| b.country(*code, *name))
            .build()
    }

    /// Looks up `code` exactly as given. Absent and unmapped codes both yield the fallback.
    pub fn resolve(&self, code: Option<&str>) -> &RegionInfo {
        code.and_then(|c| self.entries.get(c))
            .unwrap_or(&self.fallback)
    }

    pub fn get(&self, code: &str) -> Option<&RegionInfo> {
        self.entries.get(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct RegionTableBuilder {
    entries: HashMap<String, RegionInfo>,
}

impl RegionTableBuilder {
    /// Adds a country whose symbol is the flag derived from `code`.
    #[must_use]
    pub fn country(mut self, code: &str, name: &str) -> Self {
        let symbol = flag_for(code).unwrap_or_else(|| UNKNOWN_SYMBOL.to_string());
        self.entries
            .insert(code.to_string(), RegionInfo::new(name, symbol));
        self
    }

    /// Adds an entry with an explicit symbol.
    #[must_use]
    pub fn entry(mut self, code: impl Into<String>, info: RegionInfo) -> Self {
        self.entries.insert(code.into(), info);
        self
    }

    pub fn build(self) -> RegionTable {
        RegionTable {
            entries: self.entries,
            fallback: RegionInfo::unknown(),
        }
    }
}

// Partial: extend as needed.
const BUILTIN: &[(&str, &str)] = &[
    ("AF", "Afghanistan"),
    ("AX", "Åland Islands"),
    ("AL", "Albania"),
    ("DZ", "Algeria"),
    ("AR", "Argentina"),
    ("AU", "Australia"),
    ("AT", "Austria"),
    ("BE", "Belgium"),
    ("BR", "Brazil"),
    ("CA", "Canada"),
    ("CL", "Chile"),
    ("CN", "China"),
    ("CO", "Colombia"),
    ("CZ", "Czechia"),
    ("DK", "Denmark"),
    ("EG", "Egypt"),
    ("FI", "Finland"),
    ("FR", "France"),
    ("DE", "Germany"),
    ("GR", "Greece"),
    ("HK", "Hong Kong"),
    ("HU", "Hungary"),
    ("IN", "India"),
    ("ID", "Indonesia"),
    ("IE", "Ireland"),
    ("IL", "Israel"),
    ("IT", "Italy"),
    ("JP", "Japan"),
    ("KE", "Kenya"),
    ("KR", "South Korea"),
    ("MY", "Malaysia"),
    ("MX", "Mexico"),
    ("MA", "Morocco"),
    ("NL", "Netherlands"),
    ("NZ", "New Zealand"),
    ("NG", "Nigeria"),
    ("NO", "Norway"),
    ("PK", "Pakistan"),
    ("PE", "Peru"),
    ("PH", "Philippines"),
    ("PL", "Poland"),
    ("PT", "Portugal"),
    ("RO", "Romania"),
    ("SA", "Saudi Arabia"),
    ("SG", "Singapore"),
    ("ZA", "South Africa"),
    ("ES", "Spain"),
    ("SE", "Sweden"),
    ("CH", "Switzerland"),
    ("TW", "Taiwan"),
    ("TH", "Thailand"),
    ("TR", "Türkiye"),
    ("UA", "Ukraine"),
    ("AE", "United Arab Emirates"),
    ("GB", "United Kingdom"),
    ("US", "United States"),
    ("VN", "Vietnam"),
];
