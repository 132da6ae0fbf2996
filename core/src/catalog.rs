//! Static intake catalog: industries, company sizes, and the questionnaire.
//!
//! Everything here is fixed at build time. Question ordering is significant;
//! it defines the step index of the wizard.

use crate::form::FormField;

/// One industry with its statically known departments and tooling.
#[derive(Debug, Clone, Copy)]
pub struct Industry {
    pub name: &'static str,
    pub departments: &'static [&'static str],
    pub tools: &'static [&'static str],
}

/// Sentinel department entry that reveals the free-text input.
pub const OTHER_DEPARTMENT: &str = "Other / Custom Role";

pub const COMPANY_SIZES: &[&str] = &[
    "Startup (1-10)",
    "Small Business (11-50)",
    "Mid-Market (51-200)",
    "Large Enterprise (201-1000)",
    "Corporate / MNC (1000+)",
];

pub const INDUSTRIES: &[Industry] = &[
    Industry {
        name: "SaaS / Technology",
        departments: &[
            "Customer Support (L1/L2)",
            "Sales Development (SDR)",
            "DevOps / SRE",
            "Quality Assurance (QA)",
        ],
        tools: &["Zendesk", "Intercom", "Jira", "Salesforce", "GitHub", "PagerDuty"],
    },
    Industry {
        name: "E-Commerce / Retail",
        departments: &[
            "Order Management",
            "Customer Returns",
            "Inventory Analysis",
            "Digital Marketing",
        ],
        tools: &["Shopify", "Magento", "Gorgias", "Klaviyo", "NetSuite", "Excel"],
    },
    Industry {
        name: "Healthcare / MedTech",
        departments: &[
            "Patient Scheduling",
            "Medical Billing/Coding",
            "Claims Processing",
            "Compliance Audit",
        ],
        tools: &["Epic", "Cerner", "DrChrono", "Kareo", "AthenaHealth"],
    },
    Industry {
        name: "Finance / Fintech",
        departments: &[
            "KYC / Compliance",
            "Loan Processing",
            "Fraud Detection",
            "Account Reconciliation",
        ],
        tools: &["Bloomberg", "Quickbooks", "Xero", "Plaid", "Fiserv", "Tableau"],
    },
    Industry {
        name: "Legal Services",
        departments: &[
            "Paralegal Research",
            "Contract Review",
            "Client Intake",
            "Document Discovery",
        ],
        tools: &["Clio", "LexisNexis", "Westlaw", "DocuSign", "iManage"],
    },
    Industry {
        name: "HR / Recruitment",
        departments: &[
            "Candidate Screening",
            "Onboarding",
            "Payroll Administration",
            "Employee Relations",
        ],
        tools: &["Workday", "BambooHR", "Greenhouse", "Lever", "ADP"],
    },
    Industry {
        name: "Logistics / Supply Chain",
        departments: &[
            "Dispatch Coordination",
            "Route Planning",
            "Freight Bill Audit",
            "Warehouse Management",
        ],
        tools: &["SAP", "Oracle SCM", "Flexport", "Samsara", "Descartes"],
    },
    Industry {
        name: "Real Estate",
        departments: &[
            "Property Management",
            "Lease Administration",
            "Lead Qualification",
        ],
        tools: &["Yardi", "AppFolio", "Zillow Premier", "Buildium"],
    },
];

/// Look up an industry by its display name.
pub fn industry(name: &str) -> Option<&'static Industry> {
    INDUSTRIES.iter().find(|i| i.name == name)
}

/// Literal option value; numeric questions carry a representative number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionValue {
    Text(&'static str),
    Number(u32),
}

/// One selectable answer for a multiple-choice question.
#[derive(Debug, Clone, Copy)]
pub struct QuestionOption {
    pub label: &'static str,
    pub value: OptionValue,
}

/// A multiple-choice question bound to one form field.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub id: u8,
    pub field: FormField,
    pub section: &'static str,
    pub prompt: &'static str,
    pub options: [QuestionOption; 4],
}

pub const QUESTIONS: [Question; 11] = [
    // Section A: Human Cost
    Question {
        id: 1,
        field: FormField::SeniorityLevel,
        section: "Human Cost",
        prompt: "What is the average seniority level of the employees?",
        options: [
            QuestionOption {
                label: "A) Entry Level / Intern",
                value: OptionValue::Text("Entry Level / Intern"),
            },
            QuestionOption {
                label: "B) Junior Associate (1-3 yrs)",
                value: OptionValue::Text("Junior Associate (1-3 years experience)"),
            },
            QuestionOption {
                label: "C) Mid-Level Specialist (3-5 yrs)",
                value: OptionValue::Text("Mid-Level Specialist (3-5 years experience)"),
            },
            QuestionOption {
                label: "D) Senior / Expert Level",
                value: OptionValue::Text("Senior / Expert Level"),
            },
        ],
    },
    Question {
        id: 2,
        field: FormField::TurnoverRate,
        section: "Human Cost",
        prompt: "What is the approximate annual turnover rate?",
        options: [
            QuestionOption {
                label: "A) Low (< 10%)",
                value: OptionValue::Text("Low (< 10% - Stable team)"),
            },
            QuestionOption {
                label: "B) Moderate (10% - 20%)",
                value: OptionValue::Text("Moderate (10% - 20% - Standard churn)"),
            },
            QuestionOption {
                label: "C) High (20% - 40%)",
                value: OptionValue::Text("High (20% - 40% - Frequent hiring needed)"),
            },
            QuestionOption {
                label: "D) Very High (> 40%)",
                value: OptionValue::Text("Very High (> 40% - Burn and churn)"),
            },
        ],
    },
    Question {
        id: 3,
        field: FormField::TrainingTime,
        section: "Human Cost",
        prompt: "How much training time does a new hire need?",
        options: [
            QuestionOption {
                label: "A) Less than 1 week",
                value: OptionValue::Text("Less than 1 week"),
            },
            QuestionOption {
                label: "B) 1 - 4 weeks",
                value: OptionValue::Text("1 - 4 weeks"),
            },
            QuestionOption {
                label: "C) 1 - 3 months",
                value: OptionValue::Text("1 - 3 months"),
            },
            QuestionOption {
                label: "D) 3+ months",
                value: OptionValue::Text("3+ months"),
            },
        ],
    },
    // Section B: Efficiency
    Question {
        id: 4,
        field: FormField::MonthlyTaskVolume,
        section: "Efficiency",
        prompt: "Estimated volume of tasks/tickets per month?",
        options: [
            QuestionOption {
                label: "A) Low (< 500)",
                value: OptionValue::Number(500),
            },
            QuestionOption {
                label: "B) Medium (500 - 2,000)",
                value: OptionValue::Number(2000),
            },
            QuestionOption {
                label: "C) High (2,000 - 10,000)",
                value: OptionValue::Number(10000),
            },
            QuestionOption {
                label: "D) Enterprise (10,000+)",
                value: OptionValue::Number(15000),
            },
        ],
    },
    Question {
        id: 5,
        field: FormField::AvgTaskDurationMinutes,
        section: "Efficiency",
        prompt: "Time to complete one task (minutes)?",
        options: [
            QuestionOption {
                label: "A) < 2 minutes",
                value: OptionValue::Number(2),
            },
            QuestionOption {
                label: "B) 2 - 10 minutes",
                value: OptionValue::Number(6),
            },
            QuestionOption {
                label: "C) 10 - 30 minutes",
                value: OptionValue::Number(20),
            },
            QuestionOption {
                label: "D) 30+ minutes",
                value: OptionValue::Number(45),
            },
        ],
    },
    Question {
        id: 6,
        field: FormField::CoverageHours,
        section: "Efficiency",
        prompt: "Current 'Coverage Window' for this team?",
        options: [
            QuestionOption {
                label: "A) Standard Business Hours",
                value: OptionValue::Text("Standard Business Hours"),
            },
            QuestionOption {
                label: "B) Extended Hours",
                value: OptionValue::Text("Extended Hours"),
            },
            QuestionOption {
                label: "C) 24/5 (Weekdays)",
                value: OptionValue::Text("24/5"),
            },
            QuestionOption {
                label: "D) 24/7 (Always on)",
                value: OptionValue::Text("24/7"),
            },
        ],
    },
    // Section C: Quality
    Question {
        id: 7,
        field: FormField::ContextSwitching,
        section: "Quality",
        prompt: "How often does this task require 'Context Switching'?",
        options: [
            QuestionOption {
                label: "A) Never",
                value: OptionValue::Text("Never"),
            },
            QuestionOption {
                label: "B) Occasionally",
                value: OptionValue::Text("Occasionally"),
            },
            QuestionOption {
                label: "C) Frequently",
                value: OptionValue::Text("Frequently"),
            },
            QuestionOption {
                label: "D) Constantly",
                value: OptionValue::Text("Constantly"),
            },
        ],
    },
    Question {
        id: 8,
        field: FormField::ErrorRate,
        section: "Quality",
        prompt: "Estimated error/rework rate?",
        options: [
            QuestionOption {
                label: "A) Negligible (< 1%)",
                value: OptionValue::Text("Negligible (< 1%)"),
            },
            QuestionOption {
                label: "B) Low (1-3%)",
                value: OptionValue::Text("Low (1-3%)"),
            },
            QuestionOption {
                label: "C) Moderate (3-10%)",
                value: OptionValue::Text("Moderate (3-10%)"),
            },
            QuestionOption {
                label: "D) High (> 10%)",
                value: OptionValue::Text("High (> 10%)"),
            },
        ],
    },
    Question {
        id: 9,
        field: FormField::DecisionComplexity,
        section: "Quality",
        prompt: "How repetitive is the decision-making?",
        options: [
            QuestionOption {
                label: "A) 100% Rules-based",
                value: OptionValue::Text("100% Rules-based"),
            },
            QuestionOption {
                label: "B) Mostly Standard",
                value: OptionValue::Text("Mostly Standard"),
            },
            QuestionOption {
                label: "C) Balanced",
                value: OptionValue::Text("Balanced"),
            },
            QuestionOption {
                label: "D) Highly Creative",
                value: OptionValue::Text("Highly Creative"),
            },
        ],
    },
    // Section D: Scalability
    Question {
        id: 10,
        field: FormField::GrowthProjection,
        section: "Scalability",
        prompt: "Projected growth in volume next 12 months?",
        options: [
            QuestionOption {
                label: "A) Flat (0%)",
                value: OptionValue::Text("Flat (0% growth)"),
            },
            QuestionOption {
                label: "B) Steady (10-20%)",
                value: OptionValue::Text("Steady (10-20% growth)"),
            },
            QuestionOption {
                label: "C) Aggressive (20-50%)",
                value: OptionValue::Text("Aggressive (20-50% growth)"),
            },
            QuestionOption {
                label: "D) Hyper-growth (2x)",
                value: OptionValue::Text("Hyper-growth (2x volume or more)"),
            },
        ],
    },
    Question {
        id: 11,
        field: FormField::PrimaryBottleneck,
        section: "Scalability",
        prompt: "What is your biggest bottleneck to doubling output?",
        options: [
            QuestionOption {
                label: "A) Budget",
                value: OptionValue::Text("Budget"),
            },
            QuestionOption {
                label: "B) Hiring Speed",
                value: OptionValue::Text("Hiring Speed"),
            },
            QuestionOption {
                label: "C) Training",
                value: OptionValue::Text("Training"),
            },
            QuestionOption {
                label: "D) Management Bandwidth",
                value: OptionValue::Text("Management Bandwidth"),
            },
        ],
    },
];

/// Number of questionnaire steps between intake and review.
pub const QUESTION_COUNT: usize = QUESTIONS.len();

/// The question rendered at wizard step `Question(index)` (1-based).
pub fn question_at(index: usize) -> Option<&'static Question> {
    index.checked_sub(1).and_then(|i| QUESTIONS.get(i))
}
