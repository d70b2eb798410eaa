use crate::types::conversation::Conversation;
use crate::types::user_profile::UserProfile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportData {
    pub profile: UserProfile,
    pub conversations: Vec<Conversation>,
    pub export_date: DateTime<Utc>,
}

impl ExportData {
    /// `finguru-data-YYYY-MM-DD.json`
    pub fn file_name(&self) -> String {
        format!("finguru-data-{}.json", self.export_date.format("%Y-%m-%d"))
    }
}
