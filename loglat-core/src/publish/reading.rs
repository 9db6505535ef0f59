use crate::filter::LineMatch;
use serde::{Deserialize, Serialize};

/// One parsed reading as sent to the indexing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LatencyReading {
    pub latency: f32,
    pub verb: String,
    pub date_time_str: String,
    #[serde(rename = "RegionID")]
    pub region_id: String,
}

/// Totals reported by a sink once it has been drained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishStats {
    pub submitted: u64,
    pub published: u64,
    pub failed: u64,
    pub dropped: u64,
}

/// Where readings go after extraction.
///
/// `submit` is called on the pipeline's consumer thread for every reading and
/// must not block on the remote side.
pub trait ReadingSink {
    fn submit(&self, reading: LatencyReading);

    /// Wait for in-flight readings and report totals.
    fn finish(self: Box<Self>) -> PublishStats;
}

/// How a matched line is turned into a `LatencyReading`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingFormat {
    pub region_id: String,
    pub date_field_index: usize,
    pub time_field_index: usize,
}

impl ReadingFormat {
    /// `None` when the line lacks the date or time column.
    pub fn reading(&self, m: &LineMatch, latency: f32) -> Option<LatencyReading> {
        let fields: Vec<&str> = m.line.split_whitespace().collect();
        let date = fields.get(self.date_field_index)?;
        let time = fields.get(self.time_field_index)?;

        Some(LatencyReading {
            latency,
            verb: m.verb.replace('/', "_"),
            date_time_str: format!("{date}T{time}"),
            region_id: self.region_id.clone(),
        })
    }
}
