//! AnalysisResult: the three timeframe blocks of one analysis call.

use serde::{Deserialize, Serialize};

use crate::domain::Timeframe;

use super::timeframe::TimeframeAnalysis;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub symbol: String,
    pub daily: TimeframeAnalysis,
    pub weekly: TimeframeAnalysis,
    pub monthly: TimeframeAnalysis,
}

impl AnalysisResult {
    pub fn get(&self, timeframe: Timeframe) -> &TimeframeAnalysis {
        match timeframe {
            Timeframe::Daily => &self.daily,
            Timeframe::Weekly => &self.weekly,
            Timeframe::Monthly => &self.monthly,
        }
    }

    /// Blocks in daily, weekly, monthly order.
    pub fn timeframes(&self) -> impl Iterator<Item = &TimeframeAnalysis> {
        Timeframe::ALL.into_iter().map(move |tf| self.get(tf))
    }

    /// BLAKE3 hex digest of the JSON serialisation.
    ///
    /// Identical history yields an identical fingerprint.
    pub fn fingerprint(&self) -> Result<String, serde_json::Error> {
        let mut hasher = blake3::Hasher::new();
        serde_json::to_writer(&mut hasher, self)?;
        Ok(hasher.finalize().to_hex().to_string())
    }
}
