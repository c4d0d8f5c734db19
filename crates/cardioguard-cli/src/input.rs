use std::io::Read;
use std::path::Path;

use cardioguard_core::{InputValue, RawParameters};

/// Read form input from a JSON file, or from stdin when `source` is `-`.
pub fn read_parameters(source: &Path) -> eyre::Result<RawParameters> {
    let contents = if source == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(source)
            .map_err(|e| eyre::eyre!("failed to read {}: {e}", source.display()))?
    };
    parse_parameters(&contents)
}

pub fn parse_parameters(contents: &str) -> eyre::Result<RawParameters> {
    serde_json::from_str(contents).map_err(|e| eyre::eyre!("invalid parameter JSON: {e}"))
}

/// Render an input value the way a user would type it.
pub fn display_value(value: &InputValue) -> String {
    match value {
        InputValue::Number(n) => n.to_string(),
        InputValue::Label(label) => label.clone(),
    }
}
