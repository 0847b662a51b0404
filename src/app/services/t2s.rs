use std::fs;
use std::path::Path;

use clap::ValueEnum;
use zhconv::{Variant, zhconv};

use crate::app::error::{AppError, Result};

/// Rewrites text from one Chinese script to another.
pub trait ScriptConverter {
    fn convert(&self, text: &str) -> String;
}

/// Target script, named after the MediaWiki variant codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Target {
    /// Simplified (zh-hans)
    #[default]
    Hans,
    /// Traditional (zh-hant)
    Hant,
    /// Mainland China (zh-cn)
    Cn,
    /// Taiwan (zh-tw)
    Tw,
    /// Hong Kong (zh-hk)
    Hk,
}

impl Target {
    fn variant(self) -> Variant {
        match self {
            Self::Hans => Variant::ZhHans,
            Self::Hant => Variant::ZhHant,
            Self::Cn => Variant::ZhCN,
            Self::Tw => Variant::ZhTW,
            Self::Hk => Variant::ZhHK,
        }
    }
}

/// Converter backed by the `zhconv` mapping tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZhConverter {
    pub target: Target,
}

impl ZhConverter {
    pub fn new(target: Target) -> Self {
        Self { target }
    }
}

impl ScriptConverter for ZhConverter {
    fn convert(&self, text: &str) -> String {
        zhconv(text, self.target.variant())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertReport {
    pub input_chars: usize,
    pub output_chars: usize,
}

/// Read `input` as UTF-8, convert it and write the result to `output`.
///
/// The whole input is read before `output` is created.
pub fn convert_file(input: &Path, output: &Path, converter: &dyn ScriptConverter) -> Result<ConvertReport> {
    let text = fs::read_to_string(input).map_err(|e| AppError::file(input, e))?;
    let converted = converter.convert(&text);
    fs::write(output, &converted).map_err(|e| AppError::file(output, e))?;

    let report = ConvertReport {
        input_chars: text.chars().count(),
        output_chars: converted.chars().count(),
    };
    log::info!(
        "Converted {} ({} chars) to {} ({} chars)",
        input.display(),
        report.input_chars,
        output.display(),
        report.output_chars
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct TableConverter(HashMap<char, char>);

    impl ScriptConverter for TableConverter {
        fn convert(&self, text: &str) -> String {
            text.chars().map(|c| *self.0.get(&c).unwrap_or(&c)).collect()
        }
    }

    #[test]
    fn test_traditional_to_simplified() {
        let converter = ZhConverter::default();
        assert_eq!(converter.convert("漢字"), "汉字");
        assert_eq!(converter.convert("中華人民共和國"), "中华人民共和国");
    }

    #[test]
    fn test_simplified_is_fixed_point() {
        let converter = ZhConverter::new(Target::Hans);
        let simplified = "汉字与中华人民共和国";
        assert_eq!(converter.convert(simplified), simplified);
    }

    #[test]
    fn test_conversion_is_idempotent() {
        let converter = ZhConverter::default();
        let once = converter.convert("繁體中文，國語。Mixed with ASCII 123.");
        assert_eq!(converter.convert(&once), once);
        assert!(once.contains("Mixed with ASCII 123."));
    }

    #[test]
    fn test_convert_file_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "體育\n").unwrap();

        let converter = TableConverter(HashMap::from([('體', '体')]));
        let report = convert_file(&input, &output, &converter).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "体育\n");
        assert_eq!(report, ConvertReport { input_chars: 3, output_chars: 3 });
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");
        let converter = TableConverter(HashMap::new());

        let err = convert_file(&dir.path().join("absent.txt"), &output, &converter).unwrap_err();
        assert!(matches!(err, AppError::File { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("latin1.txt");
        fs::write(&input, [0xff, 0xfe, 0x00]).unwrap();
        let converter = TableConverter(HashMap::new());
        assert!(convert_file(&input, &dir.path().join("out.txt"), &converter).is_err());
    }
}
