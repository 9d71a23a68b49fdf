use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One day's presence for one employee. Checked in on creation; checked out
/// once `check_out_time` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: String,
    pub employee_id: String,
    /// Name as it was at check-in; later renames don't touch it.
    pub employee_name: String,
    #[schema(value_type = String, format = Date, example = "2024-03-01")]
    pub date: NaiveDate,
    #[schema(value_type = String, format = DateTime)]
    pub check_in_time: DateTime<Utc>,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub check_out_time: Option<DateTime<Utc>>,
}

impl Attendance {
    pub fn is_checked_out(&self) -> bool {
        self.check_out_time.is_some()
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    #[schema(example = "6f1c2b9e-6a4e-4a3b-9a57-0d6a3f0b6c11")]
    pub employee_id: String,
}

/// Attendance summary. `absent_days` counts records that never checked out,
/// not calendar days without a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAnalysis {
    pub employee_name: String,
    #[serde(with = "decimal")]
    #[schema(value_type = String, example = "20")]
    pub total_days: u64,
    #[serde(with = "decimal")]
    #[schema(value_type = String, example = "18")]
    pub present_days: u64,
    #[serde(with = "decimal")]
    #[schema(value_type = String, example = "2")]
    pub absent_days: u64,
}

/// Counts travel as decimal strings (`"3"`), which is what the UI renders.
mod decimal {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(count: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(count)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}
