// Presentation-facing label strings. Bucket membership never depends on the locale.

use serde::{Deserialize, Serialize};

const TR_MONTHS: [&str; 12] = [
    "Oca", "Şub", "Mar", "Nis", "May", "Haz", "Tem", "Ağu", "Eyl", "Eki", "Kas", "Ara",
];
const EN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Tr,
    En,
}

impl Locale {
    /// Short month name for `month` in 1..=12; out-of-range months yield "".
    pub fn month_abbrev(self, month: u32) -> &'static str {
        let months = match self {
            Locale::Tr => &TR_MONTHS,
            Locale::En => &EN_MONTHS,
        };
        month
            .checked_sub(1)
            .and_then(|i| months.get(i as usize))
            .copied()
            .unwrap_or("")
    }

    /// Weekly bucket label, e.g. "Hafta 3".
    pub fn week_label(self, ordinal: i64) -> String {
        match self {
            Locale::Tr => format!("Hafta {}", ordinal),
            Locale::En => format!("Week {}", ordinal),
        }
    }
}
