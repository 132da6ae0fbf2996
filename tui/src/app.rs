//! Application state machine.
//!
//! All mutation happens on the app loop thread through [`App::handle_event`];
//! keyboard input and async task results both arrive as [`AppEvent`]s.
//! Async work (department suggestions, the ROI computation, the question
//! advance timer) is spawned onto a tokio runtime handle; when no handle is
//! installed the spawns are skipped, which lets tests drive the state machine
//! synchronously by feeding completion events themselves.

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;

use roiwiz_backend_client::BackendClient;
use roiwiz_core::catalog;
use roiwiz_core::catalog::COMPANY_SIZES;
use roiwiz_core::catalog::INDUSTRIES;
use roiwiz_core::catalog::OTHER_DEPARTMENT;
use roiwiz_core::config::Config;
use roiwiz_core::config::DepartmentSource;
use roiwiz_core::export::export_html;
use roiwiz_core::form::FieldValue;
use roiwiz_core::form::FormField;
use roiwiz_core::form::FormState;
use roiwiz_core::report::ReportData;
use roiwiz_core::report::ReportDocument;
use roiwiz_core::wizard::ADVANCE_DELAY;
use roiwiz_core::wizard::AdvanceScheduler;
use roiwiz_core::wizard::ScheduledAdvance;
use roiwiz_core::wizard::WizardStep;

use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;

/// Which intake widget currently receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IntakeFocus {
    Industry,
    CompanySize,
    Department,
    CustomDepartment,
    HumanCount,
    Tools,
    Description,
    Submit,
}

/// Intake-screen view state that is not part of the submitted form.
#[derive(Debug)]
pub(crate) struct IntakeState {
    pub(crate) focus: IntakeFocus,
    pub(crate) industry_idx: Option<usize>,
    pub(crate) size_idx: Option<usize>,
    /// Selectable departments for the chosen industry, with the custom
    /// sentinel always last.
    pub(crate) departments: Vec<String>,
    pub(crate) department_idx: Option<usize>,
    pub(crate) custom_department: String,
    pub(crate) loading_departments: bool,
    /// Static tool list for the chosen industry; empty in remote mode.
    pub(crate) tools: Vec<&'static str>,
    pub(crate) tool_idx: usize,
}

impl Default for IntakeState {
    fn default() -> Self {
        Self {
            focus: IntakeFocus::Industry,
            industry_idx: None,
            size_idx: None,
            departments: Vec::new(),
            department_idx: None,
            custom_department: String::new(),
            loading_departments: false,
            tools: Vec::new(),
            tool_idx: 0,
        }
    }
}

impl IntakeState {
    /// Whether the custom-department sentinel is currently selected.
    pub(crate) fn other_selected(&self) -> bool {
        self.department_idx
            .and_then(|i| self.departments.get(i))
            .is_some_and(|d| d == OTHER_DEPARTMENT)
    }
}

pub(crate) struct App {
    config: Config,
    client: BackendClient,
    tx: AppEventSender,
    /// Runtime handle for background work. `None` skips spawning, so the
    /// state machine can be driven synchronously.
    runtime: Option<tokio::runtime::Handle>,

    pub(crate) form: FormState,
    pub(crate) step: WizardStep,
    scheduler: AdvanceScheduler,
    pub(crate) intake: IntakeState,
    /// Modal alert text; dismissed by the next key press.
    pub(crate) alert: Option<String>,
    /// Guards the single `calculate-roi` request.
    in_flight: bool,
    pub(crate) rendered: Option<ReportDocument>,
    pub(crate) done: bool,
}

impl App {
    pub(crate) fn new(
        config: Config,
        client: BackendClient,
        tx: AppEventSender,
        runtime: Option<tokio::runtime::Handle>,
    ) -> Self {
        Self {
            config,
            client,
            tx,
            runtime,
            form: FormState::default(),
            step: WizardStep::Intake,
            scheduler: AdvanceScheduler::default(),
            intake: IntakeState::default(),
            alert: None,
            in_flight: false,
            rendered: None,
            done: false,
        }
    }

    pub(crate) fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Redraw => {}
            AppEvent::DepartmentsLoaded {
                industry,
                departments,
            } => self.on_departments_loaded(industry, departments),
            AppEvent::DepartmentsFailed { industry, error } => {
                self.on_departments_failed(industry, &error);
            }
            AppEvent::AdvanceElapsed { generation } => {
                if let Some(target) = self.scheduler.commit(generation) {
                    self.step = target;
                }
            }
            AppEvent::ReportReady(report) => self.on_report_ready(*report),
            AppEvent::ReportFailed { error } => self.on_report_failed(error),
            AppEvent::ExitRequest => self.done = true,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.done = true;
            return;
        }
        // An open alert swallows the key that dismisses it.
        if self.alert.take().is_some() {
            return;
        }
        if key.code == KeyCode::Esc {
            self.done = true;
            return;
        }
        match self.step {
            WizardStep::Intake => self.handle_intake_key(key),
            WizardStep::Question(index) => self.handle_question_key(index, key),
            WizardStep::Review => self.handle_review_key(key),
            WizardStep::Computing => {}
            WizardStep::Report => self.handle_report_key(key),
        }
    }

    // ---- intake -----------------------------------------------------------

    /// Focus traversal order, reflecting which widgets are visible.
    pub(crate) fn focus_order(&self) -> Vec<IntakeFocus> {
        let mut order = vec![
            IntakeFocus::Industry,
            IntakeFocus::CompanySize,
            IntakeFocus::Department,
        ];
        if self.intake.other_selected() {
            order.push(IntakeFocus::CustomDepartment);
        }
        order.push(IntakeFocus::HumanCount);
        if !self.intake.tools.is_empty() {
            order.push(IntakeFocus::Tools);
        }
        order.push(IntakeFocus::Description);
        order.push(IntakeFocus::Submit);
        order
    }

    fn move_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let len = order.len();
        let current = order
            .iter()
            .position(|f| *f == self.intake.focus)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.intake.focus = order[next];
    }

    fn handle_intake_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.move_focus(true),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(false),
            KeyCode::Left => self.cycle_focused(false),
            KeyCode::Right => self.cycle_focused(true),
            KeyCode::Char(' ') if self.intake.focus == IntakeFocus::Tools => {
                if let Some(tool) = self.intake.tools.get(self.intake.tool_idx) {
                    self.form.toggle_tool(tool);
                }
            }
            KeyCode::Char(c) => self.edit_text(Some(c)),
            KeyCode::Backspace => self.edit_text(None),
            KeyCode::Enter => {
                if self.intake.focus == IntakeFocus::Submit {
                    self.submit_intake();
                } else {
                    self.move_focus(true);
                }
            }
            _ => {}
        }
    }

    /// Left/Right on a select cycles its options; on the counter it
    /// increments or decrements; on the tool list it moves the cursor.
    fn cycle_focused(&mut self, forward: bool) {
        match self.intake.focus {
            IntakeFocus::Industry => {
                let idx = cycle(self.intake.industry_idx, INDUSTRIES.len(), forward);
                self.select_industry(idx);
            }
            IntakeFocus::CompanySize => {
                let idx = cycle(self.intake.size_idx, COMPANY_SIZES.len(), forward);
                self.intake.size_idx = Some(idx);
                self.form.apply(
                    FormField::CompanySize,
                    FieldValue::Text(COMPANY_SIZES[idx].to_string()),
                );
            }
            IntakeFocus::Department => {
                if self.intake.departments.is_empty() {
                    return;
                }
                let idx = cycle(
                    self.intake.department_idx,
                    self.intake.departments.len(),
                    forward,
                );
                self.select_department(idx);
            }
            IntakeFocus::HumanCount => {
                let count = if forward {
                    self.form.human_count.saturating_add(1)
                } else {
                    self.form.human_count.saturating_sub(1)
                };
                self.form.apply(FormField::HumanCount, FieldValue::Number(count));
            }
            IntakeFocus::Tools => {
                if !self.intake.tools.is_empty() {
                    self.intake.tool_idx =
                        cycle(Some(self.intake.tool_idx), self.intake.tools.len(), forward);
                }
            }
            _ => {}
        }
    }

    /// Industry selection cascades: the dependent department and tool
    /// selections reset, and suggestions are (re)fetched in remote mode.
    fn select_industry(&mut self, idx: usize) {
        let industry = INDUSTRIES[idx];
        self.intake.industry_idx = Some(idx);
        self.intake.department_idx = None;
        self.intake.custom_department.clear();
        self.form.apply(
            FormField::OrganizationIndustry,
            FieldValue::Text(industry.name.to_string()),
        );
        match self.config.department_source {
            DepartmentSource::Static => {
                self.intake.loading_departments = false;
                self.intake.departments = industry
                    .departments
                    .iter()
                    .map(|d| (*d).to_string())
                    .chain(std::iter::once(OTHER_DEPARTMENT.to_string()))
                    .collect();
                self.intake.tools = industry.tools.to_vec();
                self.intake.tool_idx = 0;
            }
            DepartmentSource::Remote => {
                self.intake.loading_departments = true;
                self.intake.departments.clear();
                self.intake.tools.clear();
                self.spawn_departments(industry.name.to_string());
            }
        }
    }

    fn select_department(&mut self, idx: usize) {
        self.intake.department_idx = Some(idx);
        let value = if self.intake.other_selected() {
            self.intake.custom_department.clone()
        } else {
            self.intake.departments[idx].clone()
        };
        self.form.apply(FormField::Department, FieldValue::Text(value));
    }

    fn edit_text(&mut self, input: Option<char>) {
        match self.intake.focus {
            IntakeFocus::CustomDepartment => {
                match input {
                    Some(c) => self.intake.custom_department.push(c),
                    None => {
                        self.intake.custom_department.pop();
                    }
                }
                // The free-text entry is the department while the sentinel
                // is selected.
                if self.intake.other_selected() {
                    self.form.apply(
                        FormField::Department,
                        FieldValue::Text(self.intake.custom_department.clone()),
                    );
                }
            }
            IntakeFocus::Description => {
                let mut text = self.form.description.clone();
                match input {
                    Some(c) => text.push(c),
                    None => {
                        text.pop();
                    }
                }
                self.form.apply(FormField::Description, FieldValue::Text(text));
            }
            _ => {}
        }
    }

    fn submit_intake(&mut self) {
        if self.form.intake_complete() {
            self.step = WizardStep::Question(1);
        } else {
            self.alert = Some("Please fill in all required fields.".to_string());
        }
    }

    fn on_departments_loaded(&mut self, industry: String, departments: Vec<String>) {
        if self.step != WizardStep::Intake || self.form.organization_industry != industry {
            tracing::debug!(%industry, "dropping stale department suggestions");
            return;
        }
        self.intake.loading_departments = false;
        self.intake.departments = departments
            .into_iter()
            .chain(std::iter::once(OTHER_DEPARTMENT.to_string()))
            .collect();
        self.intake.department_idx = None;
    }

    /// Suggestion failures degrade to the custom entry; the wizard never
    /// blocks on this call.
    fn on_departments_failed(&mut self, industry: String, error: &str) {
        tracing::warn!(%industry, error, "department suggestion fetch failed");
        if self.step != WizardStep::Intake || self.form.organization_industry != industry {
            return;
        }
        self.intake.loading_departments = false;
        self.intake.departments = vec![OTHER_DEPARTMENT.to_string()];
        self.intake.department_idx = None;
    }

    // ---- questionnaire ----------------------------------------------------

    fn handle_question_key(&mut self, index: usize, key: KeyEvent) {
        let Some(question) = catalog::question_at(index) else {
            return;
        };
        let choice = match key.code {
            KeyCode::Char(c @ ('a'..='d' | 'A'..='D')) => {
                c.to_ascii_lowercase() as usize - 'a' as usize
            }
            KeyCode::Char(c @ '1'..='4') => c as usize - '1' as usize,
            _ => return,
        };
        let option = &question.options[choice];
        self.form.apply(question.field, option.value.into());
        // A re-answer within the delay supersedes the pending advance.
        let advance = self.scheduler.schedule(WizardStep::after_question(index));
        self.spawn_advance(advance);
    }

    // ---- review / computing -----------------------------------------------

    fn handle_review_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter && !self.in_flight {
            self.in_flight = true;
            self.step = WizardStep::Computing;
            self.spawn_compute();
        }
    }

    fn on_report_ready(&mut self, report: ReportData) {
        if self.step != WizardStep::Computing {
            return;
        }
        self.in_flight = false;
        self.rendered = Some(ReportDocument::render(&report, &self.form));
        self.step = WizardStep::Report;
    }

    /// A failed computation returns to review with the raw message, so the
    /// user can retry without losing any answers.
    fn on_report_failed(&mut self, error: String) {
        if self.step != WizardStep::Computing {
            return;
        }
        self.in_flight = false;
        self.step = WizardStep::Review;
        self.alert = Some(error);
    }

    // ---- report -----------------------------------------------------------

    fn handle_report_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => self.export_report(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Char('q') | KeyCode::Char('Q') => self.done = true,
            _ => {}
        }
    }

    /// Start a fresh assessment. Everything session-scoped resets; any
    /// pending scheduled advance is torn down with it.
    fn restart(&mut self) {
        self.form = FormState::default();
        self.intake = IntakeState::default();
        self.scheduler.cancel();
        self.rendered = None;
        self.step = WizardStep::Intake;
    }

    fn export_report(&mut self) {
        let Some(doc) = &self.rendered else {
            return;
        };
        match export_html(doc, &self.config.export_dir, &self.form.department) {
            Ok(path) => {
                self.alert = Some(format!("Report saved to {}", path.display()));
            }
            Err(e) => {
                tracing::error!("report export failed: {e}");
                self.alert = Some(format!("Export failed: {e}"));
            }
        }
    }

    // ---- background work --------------------------------------------------

    fn spawn_departments(&self, industry: String) {
        let Some(handle) = &self.runtime else {
            return;
        };
        let client = self.client.clone();
        let tx = self.tx.clone();
        handle.spawn(async move {
            match client.generate_departments(&industry).await {
                Ok(departments) => tx.send(AppEvent::DepartmentsLoaded {
                    industry,
                    departments,
                }),
                Err(e) => tx.send(AppEvent::DepartmentsFailed {
                    industry,
                    error: e.to_string(),
                }),
            }
        });
    }

    fn spawn_advance(&self, advance: ScheduledAdvance) {
        let Some(handle) = &self.runtime else {
            return;
        };
        let tx = self.tx.clone();
        handle.spawn(async move {
            tokio::time::sleep(ADVANCE_DELAY).await;
            tx.send(AppEvent::AdvanceElapsed {
                generation: advance.generation,
            });
        });
    }

    fn spawn_compute(&self) {
        let Some(handle) = &self.runtime else {
            return;
        };
        let client = self.client.clone();
        let form = self.form.clone();
        let tx = self.tx.clone();
        handle.spawn(async move {
            match client.calculate_roi(&form).await {
                Ok(report) => tx.send(AppEvent::ReportReady(Box::new(report))),
                Err(e) => tx.send(AppEvent::ReportFailed {
                    error: e.to_string(),
                }),
            }
        });
    }
}

fn cycle(current: Option<usize>, len: usize, forward: bool) -> usize {
    match current {
        None => 0,
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::channel;
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use roiwiz_core::catalog::QUESTION_COUNT;
    use roiwiz_core::report::AiCostBreakdown;
    use roiwiz_core::report::HumanCostBreakdown;
    use roiwiz_core::report::RoiMetrics;
    use roiwiz_core::report::StrategicAnalysis;

    use super::*;

    #[expect(clippy::expect_used)]
    fn test_app(source: DepartmentSource) -> App {
        let config = Config {
            department_source: source,
            ..Config::default()
        };
        let client =
            BackendClient::new("http://127.0.0.1:1", Duration::from_secs(1)).expect("client");
        let (tx, _rx) = channel();
        // No runtime handle: background spawns are skipped and tests feed
        // completion events directly.
        App::new(config, client, AppEventSender::new(tx), None)
    }

    fn press(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn sample_report() -> ReportData {
        ReportData {
            metrics: RoiMetrics {
                total_human_annual_cost: 480000.0,
                total_ai_annual_cost: 96000.0,
                net_annual_savings: 125000.0,
                break_even_months: 4.5,
                productivity_multiplier: 3.0,
                department_equivalent: None,
            },
            human_cost_breakdown: HumanCostBreakdown {
                salary_overhead: 320000.0,
                benefits_insurance: None,
                recruiting_training_waste: 50000.0,
                error_rework_cost: None,
                tool_licensing_cost: 30000.0,
            },
            ai_cost_breakdown: AiCostBreakdown {
                llm_token_costs: None,
                server_hosting_costs: None,
                implementation_fee: 30000.0,
                maintenance_cost: 30000.0,
            },
            strategic_analysis: StrategicAnalysis {
                executive_summary: "Summary.".to_string(),
                bottleneck_solution: None,
                scalability_argument: None,
            },
            confidence_score: None,
            market_data_found: None,
        }
    }

    fn answer_all_questions(app: &mut App) {
        for i in 1..=QUESTION_COUNT {
            assert_eq!(app.step, WizardStep::Question(i));
            app.handle_event(press(KeyCode::Char('a')));
            // The scheduler holds the pending transition; stand in for the
            // timer task.
            let generation = i as u64;
            app.handle_event(AppEvent::AdvanceElapsed { generation });
        }
        assert_eq!(app.step, WizardStep::Review);
    }

    fn complete_intake(app: &mut App) {
        app.handle_event(press(KeyCode::Right)); // first industry
        if app.intake.loading_departments {
            let industry = app.form.organization_industry.clone();
            app.handle_event(AppEvent::DepartmentsLoaded {
                industry,
                departments: vec!["Customer Support (L1/L2)".to_string()],
            });
        }
        app.intake.focus = IntakeFocus::Department;
        app.handle_event(press(KeyCode::Right)); // first department
        app.intake.focus = IntakeFocus::Submit;
        app.handle_event(press(KeyCode::Enter));
    }

    #[test]
    fn intake_submit_is_gated_on_required_fields() {
        let mut app = test_app(DepartmentSource::Static);
        app.intake.focus = IntakeFocus::Submit;
        app.handle_event(press(KeyCode::Enter));

        assert_eq!(app.step, WizardStep::Intake);
        assert_eq!(
            app.alert.as_deref(),
            Some("Please fill in all required fields.")
        );

        // The next key only dismisses the alert.
        app.handle_event(press(KeyCode::Enter));
        assert_eq!(app.alert, None);
        assert_eq!(app.step, WizardStep::Intake);
    }

    #[test]
    fn static_mode_populates_departments_and_tools_immediately() {
        let mut app = test_app(DepartmentSource::Static);
        app.handle_event(press(KeyCode::Right));

        assert_eq!(app.form.organization_industry, "SaaS / Technology");
        assert!(!app.intake.loading_departments);
        assert_eq!(app.intake.departments.len(), 5); // 4 static + custom entry
        assert_eq!(
            app.intake.departments.last().map(String::as_str),
            Some(OTHER_DEPARTMENT)
        );
        assert!(app.intake.tools.contains(&"Zendesk"));
    }

    #[test]
    fn remote_mode_appends_custom_entry_to_suggestions() {
        let mut app = test_app(DepartmentSource::Remote);
        app.handle_event(press(KeyCode::Right));
        assert!(app.intake.loading_departments);
        assert!(app.intake.tools.is_empty());

        app.handle_event(AppEvent::DepartmentsLoaded {
            industry: "SaaS / Technology".to_string(),
            departments: vec!["Tier 1 Triage".to_string(), "Renewals Desk".to_string()],
        });
        assert_eq!(
            app.intake.departments,
            vec![
                "Tier 1 Triage".to_string(),
                "Renewals Desk".to_string(),
                OTHER_DEPARTMENT.to_string(),
            ]
        );
    }

    #[test]
    fn stale_department_suggestions_are_dropped() {
        let mut app = test_app(DepartmentSource::Remote);
        app.handle_event(press(KeyCode::Right)); // SaaS / Technology
        app.handle_event(press(KeyCode::Right)); // E-Commerce / Retail

        app.handle_event(AppEvent::DepartmentsLoaded {
            industry: "SaaS / Technology".to_string(),
            departments: vec!["Tier 1 Triage".to_string()],
        });
        // Still waiting on the second industry's suggestions.
        assert!(app.intake.loading_departments);
        assert!(app.intake.departments.is_empty());
    }

    #[test]
    fn suggestion_failure_degrades_to_custom_entry_without_alert() {
        let mut app = test_app(DepartmentSource::Remote);
        app.handle_event(press(KeyCode::Right));
        app.handle_event(AppEvent::DepartmentsFailed {
            industry: "SaaS / Technology".to_string(),
            error: "request timed out".to_string(),
        });

        assert!(!app.intake.loading_departments);
        assert_eq!(app.intake.departments, vec![OTHER_DEPARTMENT.to_string()]);
        assert_eq!(app.alert, None);
    }

    #[test]
    fn custom_department_text_flows_into_the_form() {
        let mut app = test_app(DepartmentSource::Remote);
        app.handle_event(press(KeyCode::Right));
        app.handle_event(AppEvent::DepartmentsFailed {
            industry: "SaaS / Technology".to_string(),
            error: "boom".to_string(),
        });
        app.intake.focus = IntakeFocus::Department;
        app.handle_event(press(KeyCode::Right)); // selects the custom entry
        assert!(app.intake.other_selected());

        app.intake.focus = IntakeFocus::CustomDepartment;
        for c in "QA".chars() {
            app.handle_event(press(KeyCode::Char(c)));
        }
        assert_eq!(app.form.department, "QA");
        app.handle_event(press(KeyCode::Backspace));
        assert_eq!(app.form.department, "Q");
    }

    #[test]
    fn industry_change_resets_department_selection() {
        let mut app = test_app(DepartmentSource::Static);
        app.handle_event(press(KeyCode::Right));
        app.intake.focus = IntakeFocus::Department;
        app.handle_event(press(KeyCode::Right));
        assert!(!app.form.department.is_empty());

        app.intake.focus = IntakeFocus::Industry;
        app.handle_event(press(KeyCode::Right));
        assert_eq!(app.form.department, "");
        assert_eq!(app.intake.department_idx, None);
    }

    #[test]
    fn answering_a_question_applies_the_option_and_schedules_the_advance() {
        let mut app = test_app(DepartmentSource::Static);
        complete_intake(&mut app);
        assert_eq!(app.step, WizardStep::Question(1));

        app.handle_event(press(KeyCode::Char('d')));
        assert_eq!(app.form.seniority_level, "Senior / Expert Level");
        // Step only moves once the delay elapses.
        assert_eq!(app.step, WizardStep::Question(1));
        app.handle_event(AppEvent::AdvanceElapsed { generation: 1 });
        assert_eq!(app.step, WizardStep::Question(2));
    }

    #[test]
    fn digit_keys_select_options_too() {
        let mut app = test_app(DepartmentSource::Static);
        complete_intake(&mut app);

        app.handle_event(press(KeyCode::Char('2')));
        assert_eq!(
            app.form.seniority_level,
            "Junior Associate (1-3 years experience)"
        );
    }

    #[test]
    fn re_answering_supersedes_the_pending_advance() {
        let mut app = test_app(DepartmentSource::Static);
        complete_intake(&mut app);

        app.handle_event(press(KeyCode::Char('a')));
        app.handle_event(press(KeyCode::Char('b')));

        // The first timer fires late; its generation is stale.
        app.handle_event(AppEvent::AdvanceElapsed { generation: 1 });
        assert_eq!(app.step, WizardStep::Question(1));
        app.handle_event(AppEvent::AdvanceElapsed { generation: 2 });
        assert_eq!(app.step, WizardStep::Question(2));
        assert_eq!(
            app.form.seniority_level,
            "Junior Associate (1-3 years experience)"
        );
    }

    #[test]
    fn review_enter_is_debounced_while_in_flight() {
        let mut app = test_app(DepartmentSource::Static);
        complete_intake(&mut app);
        answer_all_questions(&mut app);

        app.handle_event(press(KeyCode::Enter));
        assert_eq!(app.step, WizardStep::Computing);
        assert!(app.in_flight);

        // A second Enter while computing changes nothing.
        app.handle_event(press(KeyCode::Enter));
        assert_eq!(app.step, WizardStep::Computing);
    }

    #[test]
    fn compute_failure_returns_to_review_with_the_raw_message() {
        let mut app = test_app(DepartmentSource::Static);
        complete_intake(&mut app);
        answer_all_questions(&mut app);
        app.handle_event(press(KeyCode::Enter));

        app.handle_event(AppEvent::ReportFailed {
            error: "backend error (500): Ensure Backend is running.".to_string(),
        });
        assert_eq!(app.step, WizardStep::Review);
        assert!(!app.in_flight);
        assert_eq!(
            app.alert.as_deref(),
            Some("backend error (500): Ensure Backend is running.")
        );

        // Retry is possible once the alert is dismissed.
        app.handle_event(press(KeyCode::Enter));
        assert_eq!(app.alert, None);
        app.handle_event(press(KeyCode::Enter));
        assert_eq!(app.step, WizardStep::Computing);
    }

    #[test]
    fn compute_success_renders_the_report() {
        let mut app = test_app(DepartmentSource::Static);
        complete_intake(&mut app);
        answer_all_questions(&mut app);
        app.handle_event(press(KeyCode::Enter));

        app.handle_event(AppEvent::ReportReady(Box::new(sample_report())));
        assert_eq!(app.step, WizardStep::Report);
        assert!(!app.in_flight);
        let doc = app.rendered.as_ref().map(|d| d.cards[0].value.clone());
        assert_eq!(doc.as_deref(), Some("$125,000"));
    }

    #[test]
    #[expect(clippy::expect_used)]
    fn export_from_report_writes_the_file_and_alerts_with_the_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = test_app(DepartmentSource::Static);
        app.config.export_dir = dir.path().to_path_buf();
        complete_intake(&mut app);
        answer_all_questions(&mut app);
        app.handle_event(press(KeyCode::Enter));
        app.handle_event(AppEvent::ReportReady(Box::new(sample_report())));

        app.handle_event(press(KeyCode::Char('s')));
        let alert = app.alert.clone().expect("export alert");
        assert!(alert.starts_with("Report saved to "));
        let exported = dir
            .path()
            .join("AI_ROI_Report_Customer_Support__L1_L2_.html");
        assert!(exported.exists());
    }

    #[test]
    fn export_failure_surfaces_as_an_alert() {
        let mut app = test_app(DepartmentSource::Static);
        app.config.export_dir = std::path::PathBuf::from("/nonexistent-roiwiz-dir");
        complete_intake(&mut app);
        answer_all_questions(&mut app);
        app.handle_event(press(KeyCode::Enter));
        app.handle_event(AppEvent::ReportReady(Box::new(sample_report())));

        app.handle_event(press(KeyCode::Char('s')));
        assert!(app.alert.as_deref().is_some_and(|a| a.starts_with("Export failed:")));
        assert_eq!(app.step, WizardStep::Report);
    }

    #[test]
    fn restart_returns_to_intake_with_fresh_state() {
        let mut app = test_app(DepartmentSource::Static);
        complete_intake(&mut app);
        answer_all_questions(&mut app);
        app.handle_event(press(KeyCode::Enter));
        app.handle_event(AppEvent::ReportReady(Box::new(sample_report())));

        app.handle_event(press(KeyCode::Char('r')));
        assert_eq!(app.step, WizardStep::Intake);
        assert_eq!(app.form, FormState::default());
        assert_eq!(app.rendered, None);
        assert_eq!(app.intake.industry_idx, None);
    }

    #[test]
    fn esc_and_ctrl_c_exit_from_any_step() {
        let mut app = test_app(DepartmentSource::Static);
        app.handle_event(press(KeyCode::Esc));
        assert!(app.done);

        let mut app = test_app(DepartmentSource::Static);
        app.handle_event(AppEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.done);
    }

    #[test]
    fn human_count_never_drops_below_one() {
        let mut app = test_app(DepartmentSource::Static);
        app.intake.focus = IntakeFocus::HumanCount;
        for _ in 0..10 {
            app.handle_event(press(KeyCode::Left));
        }
        assert_eq!(app.form.human_count, 1);
        app.handle_event(press(KeyCode::Right));
        assert_eq!(app.form.human_count, 2);
    }

    #[test]
    fn tool_toggle_round_trips_through_the_form() {
        let mut app = test_app(DepartmentSource::Static);
        app.handle_event(press(KeyCode::Right));
        app.intake.focus = IntakeFocus::Tools;
        app.handle_event(press(KeyCode::Char(' ')));
        assert_eq!(app.form.current_tools, vec!["Zendesk".to_string()]);
        app.handle_event(press(KeyCode::Char(' ')));
        assert!(app.form.current_tools.is_empty());
    }

    #[test]
    fn advance_delay_matches_the_cosmetic_pause() {
        assert_eq!(ADVANCE_DELAY, Duration::from_millis(300));
    }
}
