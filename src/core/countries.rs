use crate::domain::model::CountryRecord;

/// Supported calling-code prefixes, in table order.
const COUNTRY_CODES: &[CountryRecord] = &[
    CountryRecord { prefix: "+62", name: "Indonesia", emoji: "🇮🇩" },
    CountryRecord { prefix: "+1", name: "USA / Canada", emoji: "🇺🇸" },
    CountryRecord { prefix: "+44", name: "United Kingdom", emoji: "🇬🇧" },
    CountryRecord { prefix: "+61", name: "Australia", emoji: "🇦🇺" },
    CountryRecord { prefix: "+60", name: "Malaysia", emoji: "🇲🇾" },
    CountryRecord { prefix: "+65", name: "Singapore", emoji: "🇸🇬" },
    CountryRecord { prefix: "+63", name: "Philippines", emoji: "🇵🇭" },
    CountryRecord { prefix: "+66", name: "Thailand", emoji: "🇹🇭" },
    CountryRecord { prefix: "+84", name: "Vietnam", emoji: "🇻🇳" },
    CountryRecord { prefix: "+81", name: "Japan", emoji: "🇯🇵" },
    CountryRecord { prefix: "+82", name: "South Korea", emoji: "🇰🇷" },
    CountryRecord { prefix: "+86", name: "China", emoji: "🇨🇳" },
    CountryRecord { prefix: "+91", name: "India", emoji: "🇮🇳" },
    CountryRecord { prefix: "+92", name: "Pakistan", emoji: "🇵🇰" },
    CountryRecord { prefix: "+93", name: "Afghanistan", emoji: "🇦🇫" },
    CountryRecord { prefix: "+94", name: "Sri Lanka", emoji: "🇱🇰" },
    CountryRecord { prefix: "+95", name: "Myanmar", emoji: "🇲🇲" },
    CountryRecord { prefix: "+98", name: "Iran", emoji: "🇮🇷" },
    CountryRecord { prefix: "+7", name: "Russia / Kazakhstan", emoji: "🇷🇺" },
    CountryRecord { prefix: "+33", name: "France", emoji: "🇫🇷" },
    CountryRecord { prefix: "+49", name: "Germany", emoji: "🇩🇪" },
    CountryRecord { prefix: "+39", name: "Italy", emoji: "🇮🇹" },
    CountryRecord { prefix: "+34", name: "Spain", emoji: "🇪🇸" },
    CountryRecord { prefix: "+55", name: "Brazil", emoji: "🇧🇷" },
    CountryRecord { prefix: "+27", name: "South Africa", emoji: "🇿🇦" },
    CountryRecord { prefix: "+20", name: "Egypt", emoji: "🇪🇬" },
    CountryRecord { prefix: "+234", name: "Nigeria", emoji: "🇳🇬" },
    CountryRecord { prefix: "+254", name: "Kenya", emoji: "🇰🇪" },
];

/// Prefix resolver over the static table. Candidates are sorted once at
/// construction by descending prefix length, so a linear scan yields the
/// longest match. The sort is stable: equal-length prefixes keep table order.
#[derive(Debug, Clone)]
pub struct CountryTable {
    by_length: Vec<&'static CountryRecord>,
}

impl CountryTable {
    pub fn new() -> Self {
        let mut by_length: Vec<&'static CountryRecord> = COUNTRY_CODES.iter().collect();
        by_length.sort_by(|a, b| b.prefix.len().cmp(&a.prefix.len()));
        Self { by_length }
    }

    /// Longest-prefix match of a normalized number against the table.
    /// Returns the record and the matched prefix, or `None` for an
    /// unsupported prefix (a normal outcome, not an error).
    pub fn resolve(&self, number: &str) -> Option<(&'static CountryRecord, &'static str)> {
        self.by_length
            .iter()
            .find(|record| number.starts_with(record.prefix))
            .map(|record| (*record, record.prefix))
    }

    /// The full table in its authored order, for `--list-countries`.
    pub fn all() -> &'static [CountryRecord] {
        COUNTRY_CODES
    }
}

impl Default for CountryTable {
    fn default() -> Self {
        Self::new()
    }
}
