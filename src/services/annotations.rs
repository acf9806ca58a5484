//! Redução do feed para a anotação mais recente de cada negociação

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rdstation::Activity;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Anotação vencedora de uma negociação
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestAnnotation {
    /// Data como veio do CRM; é o que vai para a planilha
    pub occurred_at: String,
    pub timestamp: DateTime<Utc>,
    pub text: String,
}

/// deal_id -> anotação mais recente
pub type AnnotationMap = HashMap<String, LatestAnnotation>;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Interpreta a data de uma atividade. Sem fuso explícito, assume UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    // Offset sem ':' (ex.: 2024-03-15T10:00:00-0300)
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Reduz as atividades a uma anotação por negociação.
///
/// Atividades sem deal_id, sem data ou com data ilegível são ignoradas. Uma
/// anotação só é substituída por outra estritamente mais recente: em empate
/// fica a que apareceu primeiro no feed.
pub fn reduce_latest(activities: &[Activity]) -> AnnotationMap {
    let mut latest = AnnotationMap::new();

    for activity in activities {
        let (Some(key), Some(occurred_at)) = (activity.deal_key(), activity.occurred_at()) else {
            continue;
        };

        let Some(timestamp) = parse_timestamp(occurred_at) else {
            tracing::debug!("Atividade do deal {} com data ilegível ignorada: {:?}", key, occurred_at);
            continue;
        };

        let candidate = LatestAnnotation {
            occurred_at: occurred_at.to_string(),
            timestamp,
            text: activity.text().to_string(),
        };

        match latest.entry(key.to_string()) {
            Entry::Occupied(mut current) => {
                if candidate.timestamp > current.get().timestamp {
                    current.insert(candidate);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(candidate);
            }
        }
    }

    latest
}
