// Tue Jan 13 2026 - Alex

use crate::structure::{LayoutError, LayoutOutcome, SerializableTemplate};
use serde_json::{to_string, to_string_pretty};

pub struct JsonExporter {
    pretty_print: bool,
}

impl JsonExporter {
    pub fn new() -> Self {
        Self { pretty_print: true }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn export(&self, outcome: &LayoutOutcome) -> Result<String, LayoutError> {
        let value = SerializableTemplate::from(&outcome.template).with_warnings(&outcome.warnings);
        let mut json = if self.pretty_print {
            to_string_pretty(&value)?
        } else {
            to_string(&value)?
        };
        json.push('\n');
        Ok(json)
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}
