//! Report wire model and pure renderer.
//!
//! [`ReportData`] mirrors the collaborator's `calculate-roi` response
//! byte-for-byte; every number the UI shows is taken verbatim from it.
//! [`ReportDocument::render`] is a pure function of the response and the
//! collected form state: optional-field fallbacks (`$0`, `"N/A"`) are
//! applied at render time only and are never written back into state.

use serde::Deserialize;
use serde::Serialize;

use crate::form::FormState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiMetrics {
    pub total_human_annual_cost: f64,
    pub total_ai_annual_cost: f64,
    pub net_annual_savings: f64,
    pub break_even_months: f64,
    pub productivity_multiplier: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_equivalent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumanCostBreakdown {
    pub salary_overhead: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits_insurance: Option<f64>,
    pub recruiting_training_waste: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_rework_cost: Option<f64>,
    pub tool_licensing_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiCostBreakdown {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_token_costs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_hosting_costs: Option<f64>,
    pub implementation_fee: f64,
    pub maintenance_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategicAnalysis {
    pub executive_summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottleneck_solution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scalability_argument: Option<String>,
}

/// Full `calculate-roi` response. Read-only once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub metrics: RoiMetrics,
    pub human_cost_breakdown: HumanCostBreakdown,
    pub ai_cost_breakdown: AiCostBreakdown,
    pub strategic_analysis: StrategicAnalysis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_data_found: Option<serde_json::Value>,
}

/// Format a dollar amount with thousands separators, e.g. `$125,000`.
pub fn format_usd(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// `$0` fallback for optional breakdown entries.
pub fn format_usd_opt(amount: Option<f64>) -> String {
    format_usd(amount.unwrap_or(0.0))
}

/// Trim trailing `.0` so `4.0` renders as `4` and `4.5` stays `4.5`.
fn format_plain(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{}", value as i64)
    } else {
        format!("{value:.1}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub value: String,
    pub caption: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CostRow {
    pub item: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CostTable {
    pub title: &'static str,
    pub rows: Vec<CostRow>,
    pub total: CostRow,
}

/// Two-series comparison data for the cost bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CostComparison {
    pub labels: [&'static str; 2],
    pub values: [u64; 2],
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskNote {
    pub heading: &'static str,
    pub body: String,
}

/// Fully formatted report, ready for the terminal view or the HTML export.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub title: &'static str,
    pub subtitle: String,
    pub confidence: String,
    pub executive_summary: String,
    pub cards: [MetricCard; 3],
    pub human_costs: CostTable,
    pub ai_costs: CostTable,
    pub comparison: CostComparison,
    pub risks: Vec<RiskNote>,
    pub footnote: &'static str,
}

impl ReportDocument {
    /// Render the report. Pure: neither input is mutated, identical inputs
    /// produce identical output.
    pub fn render(report: &ReportData, form: &FormState) -> Self {
        let metrics = &report.metrics;
        let human = &report.human_cost_breakdown;
        let ai = &report.ai_cost_breakdown;

        let cards = [
            MetricCard {
                value: format_usd(metrics.net_annual_savings),
                caption: "Projected Annual Savings",
            },
            MetricCard {
                value: format!("{} Mo", format_plain(metrics.break_even_months)),
                caption: "Break-Even Point",
            },
            MetricCard {
                value: format!("{}x", format_plain(metrics.productivity_multiplier)),
                caption: "Efficiency Gain",
            },
        ];

        let human_costs = CostTable {
            title: "Human Operational Costs",
            rows: vec![
                CostRow {
                    item: format!("Base Salaries ({} employees)", form.human_count),
                    amount: format_usd(human.salary_overhead),
                },
                CostRow {
                    item: "Benefits & Insurance".to_string(),
                    amount: format_usd_opt(human.benefits_insurance),
                },
                CostRow {
                    item: "Recruiting & Training Churn".to_string(),
                    amount: format_usd(human.recruiting_training_waste),
                },
                CostRow {
                    item: "Software Licenses".to_string(),
                    amount: format_usd(human.tool_licensing_cost),
                },
            ],
            total: CostRow {
                item: "Total Human Cost".to_string(),
                amount: format_usd(metrics.total_human_annual_cost),
            },
        };

        let ai_costs = CostTable {
            title: "AI Infrastructure Costs",
            rows: vec![
                CostRow {
                    item: "LLM Token Consumption".to_string(),
                    amount: format_usd_opt(ai.llm_token_costs),
                },
                CostRow {
                    item: "Server & Hosting".to_string(),
                    amount: format_usd_opt(ai.server_hosting_costs),
                },
                CostRow {
                    item: "Implementation (Amortized)".to_string(),
                    amount: format_usd(ai.implementation_fee),
                },
                CostRow {
                    item: "Human-in-the-Loop Review".to_string(),
                    amount: format_usd(ai.maintenance_cost),
                },
            ],
            total: CostRow {
                item: "Total AI Cost".to_string(),
                amount: format_usd(metrics.total_ai_annual_cost),
            },
        };

        let comparison = CostComparison {
            labels: ["Human Dept", "AI Agent System"],
            values: [
                metrics.total_human_annual_cost.round().max(0.0) as u64,
                metrics.total_ai_annual_cost.round().max(0.0) as u64,
            ],
        };

        let mut risks = vec![
            RiskNote {
                heading: "Churn Risk",
                body: format!(
                    "Current turnover ({}) requires constant retraining. \
                     An AI workforce retains 100% of knowledge.",
                    form.turnover_rate
                ),
            },
            RiskNote {
                heading: "Scalability",
                body: format!(
                    "With projected growth ({}), hiring will become a \
                     bottleneck. AI scales instantly.",
                    form.growth_projection
                ),
            },
        ];
        if let Some(solution) = &report.strategic_analysis.bottleneck_solution {
            risks.push(RiskNote {
                heading: "Bottleneck",
                body: solution.clone(),
            });
        }

        ReportDocument {
            title: "AI Strategy Report",
            subtitle: format!("{} | {}", form.organization_industry, form.department),
            confidence: report
                .confidence_score
                .clone()
                .unwrap_or_else(|| "High".to_string()),
            executive_summary: report.strategic_analysis.executive_summary.clone(),
            cards,
            human_costs,
            ai_costs,
            comparison,
            risks,
            footnote: "Calculations based on 2024-2025 market data.",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::form::{FieldValue, FormField};

    fn sample_report() -> ReportData {
        ReportData {
            metrics: RoiMetrics {
                total_human_annual_cost: 480000.0,
                total_ai_annual_cost: 96000.0,
                net_annual_savings: 125000.0,
                break_even_months: 4.5,
                productivity_multiplier: 3.0,
                department_equivalent: Some(6.2),
            },
            human_cost_breakdown: HumanCostBreakdown {
                salary_overhead: 320000.0,
                benefits_insurance: Some(80000.0),
                recruiting_training_waste: 50000.0,
                error_rework_cost: Some(18000.0),
                tool_licensing_cost: 30000.0,
            },
            ai_cost_breakdown: AiCostBreakdown {
                llm_token_costs: Some(12000.0),
                server_hosting_costs: Some(24000.0),
                implementation_fee: 30000.0,
                maintenance_cost: 30000.0,
            },
            strategic_analysis: StrategicAnalysis {
                executive_summary: "Automation removes the hiring bottleneck.".to_string(),
                bottleneck_solution: Some("Agents absorb seasonal spikes.".to_string()),
                scalability_argument: Some("Instant scaling versus hiring lag.".to_string()),
            },
            confidence_score: Some("High".to_string()),
            market_data_found: None,
        }
    }

    fn sample_form() -> FormState {
        let mut form = FormState::default();
        form.apply(
            FormField::OrganizationIndustry,
            FieldValue::Text("SaaS / Technology".to_string()),
        );
        form.apply(
            FormField::Department,
            FieldValue::Text("Customer Support (L1/L2)".to_string()),
        );
        form
    }

    #[test]
    fn usd_formatting_groups_thousands() {
        assert_eq!(format_usd(125000.0), "$125,000");
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(999.6), "$1,000");
        assert_eq!(format_usd(1234567.0), "$1,234,567");
        assert_eq!(format_usd(-5000.0), "-$5,000");
    }

    #[test]
    fn metric_values_are_taken_verbatim() {
        let doc = ReportDocument::render(&sample_report(), &sample_form());
        assert_eq!(doc.cards[0].value, "$125,000");
        assert_eq!(doc.cards[1].value, "4.5 Mo");
        assert_eq!(doc.cards[2].value, "3x");
        assert_eq!(doc.human_costs.total.amount, "$480,000");
        assert_eq!(doc.ai_costs.total.amount, "$96,000");
        assert_eq!(doc.comparison.values, [480000, 96000]);
    }

    #[test]
    #[expect(clippy::expect_used)]
    fn missing_optional_fields_render_zero_and_na_fallbacks() {
        let json = serde_json::json!({
            "metrics": {
                "total_human_annual_cost": 100000.0,
                "total_ai_annual_cost": 40000.0,
                "net_annual_savings": 60000.0,
                "break_even_months": 6.0,
                "productivity_multiplier": 2.5
            },
            "human_cost_breakdown": {
                "salary_overhead": 90000.0,
                "recruiting_training_waste": 5000.0,
                "tool_licensing_cost": 5000.0
            },
            "ai_cost_breakdown": {
                "implementation_fee": 20000.0,
                "maintenance_cost": 20000.0
            },
            "strategic_analysis": {
                "executive_summary": "Summary."
            }
        });
        let report: ReportData = serde_json::from_value(json).expect("deserialize");
        let doc = ReportDocument::render(&report, &sample_form());

        assert_eq!(doc.confidence, "High");
        assert_eq!(doc.human_costs.rows[1].amount, "$0");
        assert_eq!(doc.ai_costs.rows[0].amount, "$0");
        assert_eq!(doc.ai_costs.rows[1].amount, "$0");
        assert_eq!(doc.cards[1].value, "6 Mo");
        assert_eq!(doc.cards[2].value, "2.5x");
        // No bottleneck note without the optional analysis field.
        assert_eq!(doc.risks.len(), 2);
    }

    #[test]
    fn renderer_is_deterministic_and_does_not_mutate_inputs() {
        let report = sample_report();
        let form = sample_form();
        let report_before = report.clone();
        let form_before = form.clone();

        let first = ReportDocument::render(&report, &form);
        let second = ReportDocument::render(&report, &form);

        assert_eq!(first, second);
        assert_eq!(report, report_before);
        assert_eq!(form, form_before);
    }

    #[test]
    fn risk_notes_interpolate_form_values() {
        let doc = ReportDocument::render(&sample_report(), &sample_form());
        assert!(doc.risks[0].body.contains("Moderate (10% - 20%)"));
        assert!(doc.risks[1].body.contains("Steady (10-20%)"));
        assert_eq!(doc.risks[2].body, "Agents absorb seasonal spikes.");
    }

    #[test]
    #[expect(clippy::expect_used)]
    fn wire_model_round_trips_the_backend_schema() {
        let report = sample_report();
        let value = serde_json::to_value(&report).expect("serialize");
        let back: ReportData = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, report);
    }
}
