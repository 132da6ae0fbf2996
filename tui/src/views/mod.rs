//! Render-only view code. Views read [`App`] state and never mutate it.

mod alert;
mod intake;
mod question;
mod report;
mod review;

use ratatui::Frame;
use roiwiz_core::wizard::WizardStep;

use crate::app::App;

pub(crate) fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    match app.step {
        WizardStep::Intake => intake::draw(frame, area, app),
        WizardStep::Question(index) => question::draw(frame, area, app, index),
        WizardStep::Review | WizardStep::Computing => review::draw(frame, area, app),
        WizardStep::Report => report::draw(frame, area, app),
    }
    if let Some(text) = &app.alert {
        alert::draw(frame, area, text);
    }
}
