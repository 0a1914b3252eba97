//! YAML and JSON rendering of parsed notices and prepared records.

use clap::ValueEnum;
use serde::Serialize;

use crate::error::Result;

/// Serialisation format for command output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Render any serialisable value in the given format.
///
/// YAML output starts with a document marker and has no trailing whitespace.
/// JSON output is pretty-printed. Both end with a newline.
pub fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => render_yaml(value),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(value)?)),
    }
}

fn render_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let yaml = serde_yaml_ng::to_string(value)?;
    let lines: Vec<&str> = yaml.lines().map(str::trim_end).collect();
    Ok(format!("---\n{}\n", lines.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_notices;
    use crate::record::prepare_records;

    const BLOCK: &str = "Ub.Tec.: SE-SP-TR-01 Trafo principal\n\
                         Clase Aviso: 30 MttoCorr - Avería - Disparo de trafo\n\
                         02.03.2025 08:15:00 CET ANA RUIZ (12)\n\
                         S: Disparo por sobretemperatura";

    #[test]
    fn test_yaml_notices() {
        let notices = parse_notices(BLOCK);
        let yaml = render(&notices, OutputFormat::Yaml).unwrap();

        assert!(yaml.starts_with("---\n"));
        assert!(yaml.ends_with('\n'));
        assert!(yaml.contains("location_code: SE-SP-TR-01"));
        assert!(yaml.contains("title_source: classification_line"));
        assert!(!yaml.lines().any(|l| l.ends_with(' ')));
    }

    #[test]
    fn test_json_records() {
        let records = prepare_records(&parse_notices(BLOCK));
        let json = render(&records, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["date"], "2025-03-02 08:15");
        assert_eq!(value[0]["zone"], "SUBESTACIÓN");
        assert_eq!(value[0]["title"], "Disparo de trafo");
    }

    #[test]
    fn test_empty_list() {
        let notices = parse_notices("");
        assert_eq!(render(&notices, OutputFormat::Json).unwrap(), "[]\n");
        assert_eq!(render(&notices, OutputFormat::Yaml).unwrap(), "---\n[]\n");
    }

    #[test]
    fn test_default_format_is_yaml() {
        assert_eq!(OutputFormat::default(), OutputFormat::Yaml);
    }
}
