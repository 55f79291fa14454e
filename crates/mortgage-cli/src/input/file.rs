use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a JSON or YAML file and deserialise into a typed struct.
///
/// `.yaml` / `.yml` files are parsed as YAML, everything else as JSON.
pub fn read_input<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;
    parse_document(&contents, &canonical)
        .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e).into())
}

fn parse_document<T: DeserializeOwned>(
    contents: &str,
    path: &Path,
) -> Result<T, Box<dyn std::error::Error>> {
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        Ok(serde_yaml::from_str(contents)?)
    } else {
        Ok(serde_json::from_str(contents)?)
    }
}

/// Resolve and validate the path, preventing directory traversal.
fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let canonical = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !canonical.exists() {
        return Err(format!("File not found: {}", canonical.display()).into());
    }

    if !canonical.is_file() {
        return Err(format!("Not a file: {}", canonical.display()).into());
    }

    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mortgage_core::{InstallmentType, ScheduleInput};
    use rust_decimal_macros::dec;

    const YAML: &str = "
loan:
  principal: '250000'
  annual_interest_rate: '0.045'
  loan_term_in_months: 300
  starting_date: 2025-02-01
installment_type: Decreasing
additional_payments:
  12:
    value: '5000'
";

    #[test]
    fn test_yaml_by_extension() {
        let input: ScheduleInput = parse_document(YAML, Path::new("loan.yaml")).unwrap();
        assert_eq!(input.loan.principal, dec!(250000));
        assert_eq!(input.loan.loan_term_in_months, 300);
        assert_eq!(input.installment_type, InstallmentType::Decreasing);
        assert_eq!(input.additional_payments[&12].value, dec!(5000));
    }

    #[test]
    fn test_json_otherwise() {
        let json = r#"{"loan":{"principal":"1000","annual_interest_rate":"0.05",
            "loan_term_in_months":12,"starting_date":"2025-02-01"}}"#;
        let input: ScheduleInput = parse_document(json, Path::new("loan.json")).unwrap();
        assert_eq!(input.installment_type, InstallmentType::Fixed);
        assert!(input.additional_payments.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = read_input::<ScheduleInput>("definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
