use crate::color_pipeline::common::error::Result;
use crate::color_pipeline::reference::types::ReferenceTable;

pub trait ReferenceTableReader {
    fn read_table(&self, text: &str) -> Result<ReferenceTable>;
}
