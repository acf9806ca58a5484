//! Tipos do feed `/activities` do RD Station CRM

use serde::{Deserialize, Deserializer, Serialize};

/// Aceita string ou número (o CRM devolve ids nos dois formatos); outros tipos viram `None`
fn deserialize_flexible_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: serde_json::Value = Deserialize::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        _ => Ok(None),
    }
}

/// Uma anotação registrada em uma negociação
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default, rename = "_id", deserialize_with = "deserialize_flexible_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flexible_string")]
    pub deal_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flexible_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flexible_string")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flexible_string")]
    pub text: Option<String>,
}

impl Activity {
    /// Chave da negociação, sem espaços nas pontas. `None` se ausente ou vazia.
    pub fn deal_key(&self) -> Option<&str> {
        self.deal_id
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Data da anotação como veio do CRM (`date`, senão `created_at`)
    pub fn occurred_at(&self) -> Option<&str> {
        [self.date.as_deref(), self.created_at.as_deref()]
            .into_iter()
            .flatten()
            .find(|d| !d.trim().is_empty())
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

/// Uma página do feed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivitiesPage {
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deal_id_string_or_number() {
        let page: ActivitiesPage = serde_json::from_value(json!({
            "activities": [
                { "_id": "a1", "deal_id": "  64f0c2 ", "date": "2024-01-01", "text": "ligar" },
                { "_id": "a2", "deal_id": 12345, "date": "2024-01-02" },
                { "_id": "a3", "deal_id": null, "date": "2024-01-03", "text": null }
            ],
            "has_more": true
        }))
        .unwrap();

        assert!(page.has_more);
        assert_eq!(page.activities[0].deal_key(), Some("64f0c2"));
        assert_eq!(page.activities[1].deal_key(), Some("12345"));
        assert_eq!(page.activities[1].text(), "");
        assert_eq!(page.activities[2].deal_key(), None);
    }

    #[test]
    fn test_occurred_at_falls_back_to_created_at() {
        let activity: Activity = serde_json::from_value(json!({
            "deal_id": "d1",
            "date": "  ",
            "created_at": "2024-02-10T09:00:00-03:00"
        }))
        .unwrap();
        assert_eq!(activity.occurred_at(), Some("2024-02-10T09:00:00-03:00"));

        let empty: Activity = serde_json::from_value(json!({ "deal_id": "d1" })).unwrap();
        assert_eq!(empty.occurred_at(), None);
    }

    #[test]
    fn test_real_feed_record_with_extra_keys() {
        // O feed repete o id em `_id` e `id` e traz objetos aninhados
        let page: ActivitiesPage = serde_json::from_value(json!({
            "activities": [{
                "_id": "5e1",
                "id": "5e1",
                "deal_id": "D1",
                "date": "2024-03-15",
                "text": "x",
                "user": { "_id": "u1", "id": "u1", "name": "Ana" }
            }],
            "has_more": false
        }))
        .unwrap();

        let activity = &page.activities[0];
        assert_eq!(activity.id.as_deref(), Some("5e1"));
        assert_eq!(activity.deal_key(), Some("D1"));
        assert_eq!(activity.text(), "x");
    }

    #[test]
    fn test_non_string_text_does_not_break_page() {
        let page: ActivitiesPage = serde_json::from_value(json!({
            "activities": [
                { "deal_id": "D1", "date": "2024-03-15", "text": 42 },
                { "deal_id": "D2", "date": "2024-03-15", "text": { "html": "<p>x</p>" } },
                { "deal_id": "D3", "date": "2024-03-15", "text": "ok" }
            ]
        }))
        .unwrap();

        assert_eq!(page.activities[0].text(), "42");
        assert_eq!(page.activities[1].text(), "");
        assert_eq!(page.activities[2].text(), "ok");
    }

    #[test]
    fn test_missing_fields_default() {
        let page: ActivitiesPage = serde_json::from_value(json!({})).unwrap();
        assert!(page.activities.is_empty());
        assert!(!page.has_more);
    }
}
