//! Mutable session form state and its reducer.
//!
//! All mutations flow through [`FormState::apply`], keyed by [`FormField`],
//! so the update contract stays uniform and testable. The wizard only moves
//! forward, so in practice every field is written at most once per session;
//! the reducer itself does not need to enforce that.

use serde::Serialize;

use crate::catalog::OptionValue;

/// Keys into [`FormState`]. One variant per serialized field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    OrganizationIndustry,
    CompanySize,
    Department,
    HumanCount,
    Description,
    SeniorityLevel,
    TurnoverRate,
    TrainingTime,
    MonthlyTaskVolume,
    AvgTaskDurationMinutes,
    CoverageHours,
    ContextSwitching,
    ErrorRate,
    DecisionComplexity,
    GrowthProjection,
    PrimaryBottleneck,
}

impl FormField {
    /// The wire key used in the `calculate-roi` payload.
    pub fn key(self) -> &'static str {
        match self {
            FormField::OrganizationIndustry => "organization_industry",
            FormField::CompanySize => "company_size",
            FormField::Department => "department",
            FormField::HumanCount => "human_count",
            FormField::Description => "description",
            FormField::SeniorityLevel => "seniority_level",
            FormField::TurnoverRate => "turnover_rate",
            FormField::TrainingTime => "training_time",
            FormField::MonthlyTaskVolume => "monthly_task_volume",
            FormField::AvgTaskDurationMinutes => "avg_task_duration_minutes",
            FormField::CoverageHours => "coverage_hours",
            FormField::ContextSwitching => "context_switching",
            FormField::ErrorRate => "error_rate",
            FormField::DecisionComplexity => "decision_complexity",
            FormField::GrowthProjection => "growth_projection",
            FormField::PrimaryBottleneck => "primary_bottleneck",
        }
    }
}

/// A value written through the reducer: free text or a representative number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(u32),
}

impl From<OptionValue> for FieldValue {
    fn from(value: OptionValue) -> Self {
        match value {
            OptionValue::Text(s) => FieldValue::Text(s.to_string()),
            OptionValue::Number(n) => FieldValue::Number(n),
        }
    }
}

/// Everything the wizard collects. Serializes directly into the
/// `calculate-roi` request body (numeric fields as JSON integers).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormState {
    pub organization_industry: String,
    pub company_size: String,
    pub department: String,
    pub current_tools: Vec<String>,
    pub human_count: u32,
    pub description: String,
    pub seniority_level: String,
    pub turnover_rate: String,
    pub training_time: String,
    pub monthly_task_volume: u32,
    pub avg_task_duration_minutes: u32,
    pub coverage_hours: String,
    pub context_switching: String,
    pub error_rate: String,
    pub decision_complexity: String,
    pub growth_projection: String,
    pub primary_bottleneck: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            organization_industry: String::new(),
            company_size: String::new(),
            department: String::new(),
            current_tools: Vec::new(),
            human_count: 5,
            description: String::new(),
            seniority_level: "Mid-Level Specialist (3-5 years experience)".to_string(),
            turnover_rate: "Moderate (10% - 20%)".to_string(),
            training_time: "1 - 4 weeks".to_string(),
            monthly_task_volume: 2000,
            avg_task_duration_minutes: 20,
            coverage_hours: "Standard Business Hours".to_string(),
            context_switching: "Occasionally".to_string(),
            error_rate: "Low (1-3%)".to_string(),
            decision_complexity: "Balanced".to_string(),
            growth_projection: "Steady (10-20%)".to_string(),
            primary_bottleneck: "Hiring Speed".to_string(),
        }
    }
}

impl FormState {
    /// Apply one field update. Selecting an industry invalidates the
    /// dependent department and tool selections.
    pub fn apply(&mut self, field: FormField, value: FieldValue) {
        match field {
            FormField::OrganizationIndustry => {
                self.organization_industry = into_text(field, value);
                self.department.clear();
                self.current_tools.clear();
            }
            FormField::CompanySize => self.company_size = into_text(field, value),
            FormField::Department => self.department = into_text(field, value),
            FormField::Description => self.description = into_text(field, value),
            FormField::HumanCount => {
                if let Some(n) = into_number(field, value) {
                    self.human_count = n.max(1);
                }
            }
            FormField::MonthlyTaskVolume => {
                if let Some(n) = into_number(field, value) {
                    self.monthly_task_volume = n;
                }
            }
            FormField::AvgTaskDurationMinutes => {
                if let Some(n) = into_number(field, value) {
                    self.avg_task_duration_minutes = n;
                }
            }
            FormField::SeniorityLevel => self.seniority_level = into_text(field, value),
            FormField::TurnoverRate => self.turnover_rate = into_text(field, value),
            FormField::TrainingTime => self.training_time = into_text(field, value),
            FormField::CoverageHours => self.coverage_hours = into_text(field, value),
            FormField::ContextSwitching => self.context_switching = into_text(field, value),
            FormField::ErrorRate => self.error_rate = into_text(field, value),
            FormField::DecisionComplexity => self.decision_complexity = into_text(field, value),
            FormField::GrowthProjection => self.growth_projection = into_text(field, value),
            FormField::PrimaryBottleneck => self.primary_bottleneck = into_text(field, value),
        }
    }

    /// Toggle membership of a tool in the selection set (no duplicates).
    pub fn toggle_tool(&mut self, tool: &str) {
        if let Some(pos) = self.current_tools.iter().position(|t| t == tool) {
            self.current_tools.remove(pos);
        } else {
            self.current_tools.push(tool.to_string());
        }
    }

    /// Intake submission gate: industry and department must be non-empty.
    pub fn intake_complete(&self) -> bool {
        !self.organization_industry.is_empty() && !self.department.is_empty()
    }

    /// Number of collected data points, as shown on the review screen.
    pub fn data_point_count(&self) -> usize {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map.len(),
            _ => 0,
        }
    }
}

fn into_text(field: FormField, value: FieldValue) -> String {
    match value {
        FieldValue::Text(s) => s,
        FieldValue::Number(n) => {
            tracing::warn!(field = field.key(), "numeric value for text field");
            n.to_string()
        }
    }
}

fn into_number(field: FormField, value: FieldValue) -> Option<u32> {
    match value {
        FieldValue::Number(n) => Some(n),
        FieldValue::Text(s) => match s.trim().parse() {
            Ok(n) => Some(n),
            Err(_) => {
                tracing::warn!(field = field.key(), input = %s, "unparseable number, ignored");
                None
            }
        },
    }
}
