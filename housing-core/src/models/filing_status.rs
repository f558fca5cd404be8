use serde::{Deserialize, Serialize};

use crate::TaxBracket;

/// Federal brackets for single filers, 2023 tax year.
static SINGLE_BRACKETS: [TaxBracket; 7] = [
    TaxBracket::new(Some(11_000.0), 0.10),
    TaxBracket::new(Some(44_725.0), 0.12),
    TaxBracket::new(Some(95_375.0), 0.22),
    TaxBracket::new(Some(182_050.0), 0.24),
    TaxBracket::new(Some(231_250.0), 0.32),
    TaxBracket::new(Some(578_125.0), 0.35),
    TaxBracket::new(None, 0.37),
];

/// Federal brackets for married couples filing jointly, 2023 tax year.
static MARRIED_FILING_JOINTLY_BRACKETS: [TaxBracket; 7] = [
    TaxBracket::new(Some(22_000.0), 0.10),
    TaxBracket::new(Some(89_450.0), 0.12),
    TaxBracket::new(Some(190_750.0), 0.22),
    TaxBracket::new(Some(364_200.0), 0.24),
    TaxBracket::new(Some(462_500.0), 0.32),
    TaxBracket::new(Some(693_750.0), 0.35),
    TaxBracket::new(None, 0.37),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilingStatus {
    Single,
    MarriedFilingJointly,
}

impl FilingStatus {
    pub const ALL: [FilingStatus; 2] = [Self::Single, Self::MarriedFilingJointly];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "S",
            Self::MarriedFilingJointly => "MFJ",
        }
    }

    /// Parses a short code (`S`, `MFJ`) or the long form (`SINGLE`,
    /// `MARRIED_FILING_JOINTLY`). Case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "S" | "SINGLE" => Some(Self::Single),
            "MFJ" | "MARRIED_FILING_JOINTLY" => Some(Self::MarriedFilingJointly),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::MarriedFilingJointly => "Married Filing Jointly",
        }
    }

    /// Marginal rate table for this status, ordered by ascending upper bound.
    /// The last bracket is always unbounded.
    pub fn brackets(&self) -> &'static [TaxBracket] {
        match self {
            Self::Single => &SINGLE_BRACKETS,
            Self::MarriedFilingJointly => &MARRIED_FILING_JOINTLY_BRACKETS,
        }
    }
}

impl std::fmt::Display for FilingStatus {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_short_and_long_codes() {
        assert_eq!(FilingStatus::parse("S"), Some(FilingStatus::Single));
        assert_eq!(FilingStatus::parse("single"), Some(FilingStatus::Single));
        assert_eq!(
            FilingStatus::parse(" mfj "),
            Some(FilingStatus::MarriedFilingJointly)
        );
        assert_eq!(
            FilingStatus::parse("MARRIED_FILING_JOINTLY"),
            Some(FilingStatus::MarriedFilingJointly)
        );
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        assert_eq!(FilingStatus::parse("HOH"), None);
        assert_eq!(FilingStatus::parse(""), None);
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for status in FilingStatus::ALL {
            assert_eq!(FilingStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn brackets_end_with_unbounded_top_rate() {
        for status in FilingStatus::ALL {
            let last = status.brackets().last().expect("table is never empty");

            assert_eq!(last.upper_bound, None);
            assert_eq!(last.rate, 0.37);
        }
    }

    #[test]
    fn brackets_are_sorted_by_upper_bound() {
        for status in FilingStatus::ALL {
            let bounds: Vec<f64> = status
                .brackets()
                .iter()
                .filter_map(|b| b.upper_bound)
                .collect();

            assert!(bounds.windows(2).all(|w| w[0] < w[1]), "{status} unsorted");
        }
    }

    #[test]
    fn married_thresholds_are_at_least_single_thresholds() {
        let single = FilingStatus::Single.brackets();
        let married = FilingStatus::MarriedFilingJointly.brackets();

        assert_eq!(single.len(), married.len());
        for (s, m) in single.iter().zip(married) {
            assert_eq!(s.rate, m.rate);
            if let (Some(s_bound), Some(m_bound)) = (s.upper_bound, m.upper_bound) {
                assert!(m_bound >= s_bound);
            }
        }
    }

    #[test]
    fn serializes_with_long_names() {
        let json = serde_json::to_string(&FilingStatus::MarriedFilingJointly).unwrap();

        assert_eq!(json, "\"MARRIED_FILING_JOINTLY\"");
    }
}
