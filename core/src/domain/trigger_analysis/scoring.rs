//! Ingredient trigger scoring.
//!
//! Each log gets a single severity (mean of its recorded symptom severities, 0 for a
//! symptom-free log). For every ingredient the scorer compares the mean severity of
//! the logs containing it with the baseline over all logs in range:
//!
//! ```text
//! diff          = avg_present - baseline
//! trigger_score = diff / sd_all                (0 when sd_all == 0)
//! interval      = diff ± z(level) · s / √n     (s falls back to sd_all when n < 2)
//! ```
//!
//! Results are ranked by score descending, then consumption count descending, then
//! ingredient id ascending.

use std::{
    cmp::Ordering,
    collections::{BTreeMap, HashSet},
};

use uuid::Uuid;

use crate::domain::trigger_analysis::{
    entities::{
        ConfidenceInterval, CorrelationRow, DateRange, LogObservation, TriggerAnalysis,
        TriggerAnalysisMeta, TriggerResult,
    },
    statistics::{mean, sample_std_dev, two_sided_z},
    value_objects::TriggerAnalysisConfig,
};

#[derive(Debug, Clone, Copy)]
pub struct TriggerScorer {
    config: TriggerAnalysisConfig,
}

struct IngredientTally {
    name: String,
    log_indices: Vec<usize>,
}

impl TriggerScorer {
    pub fn new(config: TriggerAnalysisConfig) -> Self {
        Self { config }
    }

    pub fn score(
        &self,
        observations: &[LogObservation],
        range: DateRange,
        limit: usize,
        detailed: bool,
    ) -> TriggerAnalysis {
        let logs: Vec<&LogObservation> = observations
            .iter()
            .filter(|log| range.contains(log.log_date))
            .collect();

        let meta = TriggerAnalysisMeta {
            date_range: range,
            total_logs: logs.len() as u32,
            min_consumption_threshold: self.config.min_consumption_threshold,
            min_logs_threshold: self.config.min_logs_threshold,
            confidence_level: self.config.confidence_level,
        };

        if logs.is_empty() || (logs.len() as u32) < self.config.min_logs_threshold {
            return TriggerAnalysis {
                triggers: Vec::new(),
                correlations: detailed.then(Vec::new),
                meta,
            };
        }

        let severities: Vec<f64> = logs.iter().map(|log| log.severity()).collect();
        let baseline = mean(&severities).unwrap_or(0.0);
        let overall_spread = sample_std_dev(&severities).unwrap_or(0.0);
        let z = two_sided_z(self.config.confidence_level);

        let mut ranked: Vec<(TriggerResult, Vec<usize>)> = tally_ingredients(&logs)
            .into_iter()
            .filter(|(_, tally)| {
                tally.log_indices.len() as u32 >= self.config.min_consumption_threshold
            })
            .map(|(ingredient_id, tally)| {
                let present: Vec<f64> = tally.log_indices.iter().map(|&i| severities[i]).collect();
                let n = present.len();
                let avg_present = mean(&present).unwrap_or(0.0);
                let diff = avg_present - baseline;

                let spread = sample_std_dev(&present).unwrap_or(overall_spread);
                let margin = z * spread / (n as f64).sqrt();

                let trigger_score = if overall_spread > 0.0 {
                    diff / overall_spread
                } else {
                    0.0
                };

                let result = TriggerResult {
                    ingredient_id,
                    name: tally.name,
                    consumption_count: n as u32,
                    avg_severity_when_present: avg_present,
                    baseline_avg_severity: baseline,
                    trigger_score,
                    confidence_interval: ConfidenceInterval::around(diff, margin),
                };
                (result, tally.log_indices)
            })
            .collect();

        ranked.sort_by(|(a, _), (b, _)| rank_order(a, b));
        ranked.truncate(limit);

        let correlations = detailed.then(|| correlation_rows(&ranked, &logs, limit * 2));

        TriggerAnalysis {
            triggers: ranked.into_iter().map(|(result, _)| result).collect(),
            correlations,
            meta,
        }
    }
}

/// Groups log positions by ingredient; an ingredient repeated within one log counts once.
fn tally_ingredients(logs: &[&LogObservation]) -> BTreeMap<Uuid, IngredientTally> {
    let mut tallies: BTreeMap<Uuid, IngredientTally> = BTreeMap::new();

    for (index, log) in logs.iter().enumerate() {
        let mut seen = HashSet::new();
        for ingredient in &log.ingredients {
            if !seen.insert(ingredient.ingredient_id) {
                continue;
            }
            tallies
                .entry(ingredient.ingredient_id)
                .or_insert_with(|| IngredientTally {
                    name: ingredient.name.clone(),
                    log_indices: Vec::new(),
                })
                .log_indices
                .push(index);
        }
    }

    tallies
}

fn rank_order(a: &TriggerResult, b: &TriggerResult) -> Ordering {
    b.trigger_score
        .total_cmp(&a.trigger_score)
        .then_with(|| b.consumption_count.cmp(&a.consumption_count))
        .then_with(|| a.ingredient_id.cmp(&b.ingredient_id))
}

fn correlation_rows(
    ranked: &[(TriggerResult, Vec<usize>)],
    logs: &[&LogObservation],
    max_rows: usize,
) -> Vec<CorrelationRow> {
    let mut rows = Vec::new();

    for (trigger, indices) in ranked {
        let mut ingredient_logs: Vec<&LogObservation> = indices.iter().map(|&i| logs[i]).collect();
        ingredient_logs.sort_by(|a, b| {
            b.log_date
                .cmp(&a.log_date)
                .then_with(|| a.log_id.cmp(&b.log_id))
        });

        for log in ingredient_logs {
            let mut symptoms: Vec<_> = log.symptoms.iter().collect();
            symptoms.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.symptom_id.cmp(&b.symptom_id)));

            for symptom in symptoms {
                if rows.len() == max_rows {
                    return rows;
                }
                rows.push(CorrelationRow {
                    log_id: log.log_id,
                    log_date: log.log_date,
                    ingredient_id: trigger.ingredient_id,
                    ingredient_name: trigger.name.clone(),
                    symptom_id: symptom.symptom_id,
                    symptom_name: symptom.name.clone(),
                    severity: symptom.severity,
                });
            }
        }
    }

    rows
}
