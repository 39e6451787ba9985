use super::StatementEmitter;
use crate::error::Result;
use crate::types::NormalizedEvent;

/// One JSON object per event, for loading through something other than SQL
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLinesEmitter;

impl StatementEmitter for JsonLinesEmitter {
    fn format(&self, event: &NormalizedEvent) -> Result<String> {
        Ok(serde_json::to_string(event)?)
    }
}
