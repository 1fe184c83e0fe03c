// Tue Jan 13 2026 - Alex

use crate::structure::LayoutError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width given to any member whose type or name carries `*`. ARM7TDMI by default.
    pub pointer_width_bits: u32,
    pub padding_prefix: String,
    pub padding_type: String,
    /// Minimum column of the `//` comment in trace output.
    pub comment_column: usize,
    pub default_struct_name: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            pointer_width_bits: 32,
            padding_prefix: "pad_".to_string(),
            padding_type: "uint8_t".to_string(),
            comment_column: "uint32_t unk_FFF     ".len(),
            default_struct_name: "UnknownStruct".to_string(),
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pointer_width(mut self, bits: u32) -> Self {
        self.pointer_width_bits = bits;
        self
    }

    pub fn with_padding_prefix(mut self, prefix: &str) -> Self {
        self.padding_prefix = prefix.to_string();
        self
    }

    pub fn with_comment_column(mut self, column: usize) -> Self {
        self.comment_column = column;
        self
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LayoutError> {
        let path = path.as_ref();

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !ext.eq_ignore_ascii_case("json") {
            return Err(LayoutError::InvalidConfig(format!(
                "unsupported config format: {:?}",
                path
            )));
        }

        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), LayoutError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let bits = self.pointer_width_bits;
        if bits == 0 || bits % 8 != 0 || !bits.is_power_of_two() {
            return Err(LayoutError::InvalidConfig(format!(
                "pointer_width_bits must be a power of two multiple of 8, got {}",
                bits
            )));
        }
        if self.padding_prefix.is_empty() {
            return Err(LayoutError::InvalidConfig("padding_prefix must not be empty".to_string()));
        }
        if self.padding_type.is_empty() {
            return Err(LayoutError::InvalidConfig("padding_type must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LayoutConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pointer_width_bits, 32);
        assert_eq!(config.comment_column, 21);
    }

    #[test]
    fn test_validate_rejects_odd_pointer_width() {
        for bits in [0, 12, 24] {
            let config = LayoutConfig::new().with_pointer_width(bits);
            assert!(matches!(config.validate(), Err(LayoutError::InvalidConfig(_))));
        }
        assert!(LayoutConfig::new().with_pointer_width(64).validate().is_ok());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = std::env::temp_dir().join(format!("layout-config-{}.json", std::process::id()));
        let config = LayoutConfig::new().with_pointer_width(64).with_comment_column(30);
        config.save(&path).unwrap();

        let loaded = LayoutConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: LayoutConfig = serde_json::from_str(r#"{"pointer_width_bits": 64}"#).unwrap();
        assert_eq!(config.pointer_width_bits, 64);
        assert_eq!(config.padding_prefix, "pad_");
    }

    #[test]
    fn test_load_rejects_other_extensions() {
        let err = LayoutConfig::load("layout.toml").unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfig(_)));
    }
}
