use crate::error::ErrorCore;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Closed set of categories a financial query is filed under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinancialTopic {
    Investment,
    Savings,
    Insurance,
    #[serde(rename = "Loans & Credit")]
    LoansAndCredit,
    #[serde(rename = "Tax Planning")]
    TaxPlanning,
    #[serde(rename = "Retirement Planning")]
    RetirementPlanning,
    Budgeting,
    #[serde(rename = "Real Estate")]
    RealEstate,
    #[serde(rename = "Emergency Fund")]
    EmergencyFund,
    #[default]
    #[serde(rename = "General Finance")]
    GeneralFinance,
}

impl FinancialTopic {
    pub const ALL: [FinancialTopic; 10] = [
        FinancialTopic::Investment,
        FinancialTopic::Savings,
        FinancialTopic::Insurance,
        FinancialTopic::LoansAndCredit,
        FinancialTopic::TaxPlanning,
        FinancialTopic::RetirementPlanning,
        FinancialTopic::Budgeting,
        FinancialTopic::RealEstate,
        FinancialTopic::EmergencyFund,
        FinancialTopic::GeneralFinance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FinancialTopic::Investment => "Investment",
            FinancialTopic::Savings => "Savings",
            FinancialTopic::Insurance => "Insurance",
            FinancialTopic::LoansAndCredit => "Loans & Credit",
            FinancialTopic::TaxPlanning => "Tax Planning",
            FinancialTopic::RetirementPlanning => "Retirement Planning",
            FinancialTopic::Budgeting => "Budgeting",
            FinancialTopic::RealEstate => "Real Estate",
            FinancialTopic::EmergencyFund => "Emergency Fund",
            FinancialTopic::GeneralFinance => "General Finance",
        }
    }

    /// Maps free-form model output onto the closed set.
    ///
    /// Exact (case-insensitive) label matches win; otherwise the label that
    /// appears earliest in the text is taken, as models tend to lead with
    /// their answer. Anything else is `GeneralFinance`.
    pub fn parse_lenient(text: &str) -> FinancialTopic {
        let normalized = text
            .trim()
            .trim_matches(|c: char| !c.is_alphanumeric() && c != '&')
            .to_lowercase();

        if let Ok(topic) = normalized.parse::<FinancialTopic>() {
            return topic;
        }

        FinancialTopic::ALL
            .iter()
            .filter_map(|topic| {
                normalized
                    .find(&topic.label().to_lowercase())
                    .map(|position| (position, *topic))
            })
            .min_by_key(|(position, _)| *position)
            .map(|(_, topic)| topic)
            .unwrap_or_default()
    }
}

impl Display for FinancialTopic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for FinancialTopic {
    type Err = ErrorCore;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FinancialTopic::ALL
            .iter()
            .find(|topic| topic.label().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| ErrorCore::UnknownTopic(s.to_string()))
    }
}
