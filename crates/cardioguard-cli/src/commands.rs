use std::path::{Path, PathBuf};

use cardioguard_cli::config::{self, CardioguardConfig, OutputFormat};
use cardioguard_cli::input::{display_value, read_parameters};
use cardioguard_cli::resolve::{AssessOptions, ModelSource};
use cardioguard_core::{Field, RawParameters};
use cardioguard_export::render::{ReportView, render_default, render_report};
use cardioguard_model::RiskClassifier;
use cardioguard_model::fixed::FixedProbability;
use cardioguard_model::logistic::LogisticClassifier;
use cardioguard_rules::{RiskEvaluator, assess_validated};

pub fn assess(config_path: &Path, input: &Path, options: AssessOptions) -> eyre::Result<()> {
    // A manual probability with no config is fine; everything else needs one.
    let config = if config_path.exists() {
        Some(config::load_config(config_path)?)
    } else {
        None
    };
    let config = config.as_ref();

    let raw = read_parameters(input)?;
    let errors = raw.validation_errors();
    if !errors.is_empty() {
        let lines: Vec<String> = errors.iter().map(|e| format!("  {e}")).collect();
        return Err(eyre::eyre!("invalid parameters:\n{}", lines.join("\n")));
    }
    let params = raw.validate()?;

    let classifier: Box<dyn RiskClassifier> = match options.model_source(config)? {
        ModelSource::Manual(p) => Box::new(FixedProbability::named(p, "manual")),
        ModelSource::Artifact(path) => Box::new(LogisticClassifier::load(&path)?),
    };

    let assessment = assess_validated(classifier.as_ref(), &RiskEvaluator::default(), params)?;

    let output = match options.format(config) {
        OutputFormat::Json => serde_json::to_string_pretty(&assessment)?,
        OutputFormat::Markdown => match options.template(config) {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| eyre::eyre!("failed to read template {}: {e}", path.display()))?;
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "custom".to_string());
                render_report(&name, &content, &ReportView::new(&assessment))?
            }
            None => render_default(&assessment)?,
        },
    };

    println!("{output}");
    Ok(())
}

pub fn fields() -> eyre::Result<()> {
    let defaults = RawParameters::form_defaults();
    println!("{:<20} {:<32} {:<14} {}", "KEY", "LABEL", "RANGE", "DEFAULT");
    for field in Field::ALL {
        let range = match field.choice_labels() {
            Some([first, second]) => format!("{first}/{second}"),
            None => field.range().to_string(),
        };
        let default = defaults.get(field).map(display_value).unwrap_or_default();
        println!(
            "{:<20} {:<32} {:<14} {}",
            field.key(),
            field.label(),
            range,
            default
        );
    }
    Ok(())
}

pub fn defaults() -> eyre::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&RawParameters::form_defaults())?
    );
    Ok(())
}

pub fn init(
    config_path: &Path,
    model: PathBuf,
    template: Option<PathBuf>,
    format: OutputFormat,
    force: bool,
) -> eyre::Result<()> {
    if config_path.exists() && !force {
        return Err(eyre::eyre!(
            "config already exists at {} (use --force to replace it)",
            config_path.display()
        ));
    }

    // Fail now rather than on the first assessment.
    let classifier = LogisticClassifier::load(&model)?;

    let mut config = CardioguardConfig::new(model);
    config.template_path = template;
    config.default_format = format;
    config::save_config(&config, config_path)?;

    eprintln!(
        "Wrote {} (model: {})",
        config_path.display(),
        classifier.name()
    );
    Ok(())
}
