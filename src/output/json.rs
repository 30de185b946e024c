use crate::model::{ScanReport, VulnerabilityRecord};
use anyhow::Result;

pub fn print_json(records: &[VulnerabilityRecord]) -> Result<()> {
    let report = ScanReport::new(records.to_vec());
    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}
