use serde::Serialize;
use tera::{Context, Tera};

use cardioguard_core::RiskReport;
use cardioguard_model::importance::FeatureImportance;
use cardioguard_rules::Assessment;

use crate::error::ExportError;

/// Built-in Markdown layout.
pub const DEFAULT_TEMPLATE: &str = include_str!("templates/report.md.tera");
pub const DEFAULT_TEMPLATE_NAME: &str = "report.md";

/// Shown in place of the indicator list when no risk driver fired.
pub const NO_DRIVERS_MESSAGE: &str = "Risk influenced by complex multi-factor interaction.";

pub const INTERACTION_NOTE: &str = "Risk estimation is based on multi-parameter interaction \
     patterns, not individual thresholds alone.";

pub const DISCLAIMER: &str = "Academic AI-based decision support tool — not a substitute for \
     professional medical diagnosis.";

#[derive(Debug, Clone, Serialize)]
pub struct StatusLine {
    pub parameter: String,
    pub description: &'static str,
}

/// Everything a template can reference. `report` fields are addressable
/// directly (e.g. `report.health_score`).
#[derive(Debug, Clone, Serialize)]
pub struct ReportView<'a> {
    pub report: &'a RiskReport,
    pub model: &'a str,
    /// Percentage with two decimals and a `%` sign.
    pub risk_percent: String,
    pub top_features: &'a [FeatureImportance],
    pub status_lines: Vec<StatusLine>,
    pub drivers_fallback: &'static str,
    pub interaction_note: &'static str,
    pub disclaimer: &'static str,
}

impl<'a> ReportView<'a> {
    pub fn new(assessment: &'a Assessment) -> Self {
        let report = &assessment.report;
        Self {
            report,
            model: &assessment.model,
            risk_percent: format!("{:.2}%", report.risk_percent),
            top_features: &assessment.top_features,
            status_lines: report
                .status_flags
                .iter()
                .map(|flag| StatusLine {
                    parameter: flag.parameter.clone(),
                    description: flag.status.description(),
                })
                .collect(),
            drivers_fallback: NO_DRIVERS_MESSAGE,
            interaction_note: INTERACTION_NOTE,
            disclaimer: DISCLAIMER,
        }
    }
}

/// Render a Tera template with a report view.
///
/// `template_content` is the raw template string (Jinja2 syntax). Names
/// ending in `.html` get Tera's HTML autoescaping.
pub fn render_report(
    template_name: &str,
    template_content: &str,
    view: &ReportView<'_>,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(view)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, bytes = rendered.len(), "report rendered");
    Ok(rendered)
}

/// Render an assessment with the built-in Markdown layout.
pub fn render_default(assessment: &Assessment) -> Result<String, ExportError> {
    render_report(
        DEFAULT_TEMPLATE_NAME,
        DEFAULT_TEMPLATE,
        &ReportView::new(assessment),
    )
}
