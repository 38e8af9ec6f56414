//! Deterministic and fuzzy tiers of ingredient normalization.

use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
    sync::LazyLock,
};

use regex::Regex;
use uuid::Uuid;

use crate::domain::{
    catalog::entities::Ingredient,
    ingredient_normalization::entities::{MatchMethod, NormalizedMatch},
};

pub const CANONICAL_NAME_CONFIDENCE: f64 = 1.0;
pub const ALIAS_CONFIDENCE: f64 = 0.95;

static APOSTROPHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"['’]").expect("apostrophe pattern"));
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("separator pattern"));

/// Lowercases, drops punctuation and collapses whitespace.
pub fn normalize_text(input: &str) -> String {
    let lowered = input.to_lowercase();
    let without_apostrophes = APOSTROPHES.replace_all(&lowered, "");
    NON_WORD
        .replace_all(&without_apostrophes, " ")
        .trim()
        .to_string()
}

/// Exact match on a canonical name first, then on an alias.
pub fn deterministic_match(normalized: &str, catalog: &[Ingredient]) -> Option<NormalizedMatch> {
    let by_name = catalog
        .iter()
        .find(|ingredient| normalize_text(&ingredient.name) == normalized)
        .map(|ingredient| (ingredient, CANONICAL_NAME_CONFIDENCE));

    let hit = by_name.or_else(|| {
        catalog
            .iter()
            .find(|ingredient| {
                ingredient
                    .aliases
                    .iter()
                    .any(|alias| normalize_text(alias) == normalized)
            })
            .map(|ingredient| (ingredient, ALIAS_CONFIDENCE))
    })?;

    Some(NormalizedMatch {
        ingredient_id: hit.0.id,
        name: hit.0.name.clone(),
        confidence: hit.1,
        method: MatchMethod::Deterministic,
    })
}

/// Scores every canonical name and alias, keeping the best score per ingredient.
pub fn fuzzy_matches(
    normalized: &str,
    catalog: &[Ingredient],
    threshold: f64,
    max_matches: usize,
) -> Vec<NormalizedMatch> {
    let mut best: HashMap<Uuid, NormalizedMatch> = HashMap::new();

    for ingredient in catalog {
        for candidate in ingredient.names() {
            let confidence = similarity(normalized, &normalize_text(candidate));
            if confidence < threshold {
                continue;
            }
            let entry = best.entry(ingredient.id).or_insert_with(|| NormalizedMatch {
                ingredient_id: ingredient.id,
                name: ingredient.name.clone(),
                confidence,
                method: MatchMethod::Fuzzy,
            });
            if confidence > entry.confidence {
                entry.confidence = confidence;
            }
        }
    }

    let mut matches: Vec<NormalizedMatch> = best.into_values().collect();
    sort_matches(&mut matches);
    matches.truncate(max_matches);
    matches
}

/// Confidence descending, then name.
pub fn sort_matches(matches: &mut [NormalizedMatch]) {
    matches.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Larger of edit-distance similarity and token overlap.
pub fn similarity(a: &str, b: &str) -> f64 {
    levenshtein_similarity(a, b).max(token_jaccard(a, b))
}

fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 1.0;
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    1.0 - previous[b.len()] as f64 / longest as f64
}

fn token_jaccard(a: &str, b: &str) -> f64 {
    let a: HashSet<&str> = a.split_whitespace().collect();
    let b: HashSet<&str> = b.split_whitespace().collect();
    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(&b).count() as f64 / union as f64
}
