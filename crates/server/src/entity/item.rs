use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

pub const DEFAULT_NAME: &str = "Sample Item";
pub const DEFAULT_DESCRIPTION: &str = "This is a sample item.";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "items")]
#[schema(as = Item)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    #[schema(max_length = 50)]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Fields for an item that has not been stored yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
}

impl Default for NewItem {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl NewItem {
    /// Build an item from a raw request body.
    ///
    /// Never fails: an empty or malformed body, a non-object, or a missing or `null`
    /// field fall back to the placeholder value for that field. Numbers and booleans are
    /// stored in their JSON text form; arrays and objects count as missing.
    pub fn from_body(body: &[u8]) -> Self {
        let fields = serde_json::from_slice::<JsonValue>(body).unwrap_or(JsonValue::Null);
        let text = |key: &str, fallback: &str| match fields.get(key) {
            Some(JsonValue::String(s)) => s.clone(),
            Some(JsonValue::Number(n)) => n.to_string(),
            Some(JsonValue::Bool(b)) => b.to_string(),
            _ => fallback.to_string(),
        };

        Self {
            name: text("name", DEFAULT_NAME),
            description: text("description", DEFAULT_DESCRIPTION),
        }
    }

    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            name: sea_orm::ActiveValue::Set(self.name),
            description: sea_orm::ActiveValue::Set(self.description),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_body() {
        let item = NewItem::from_body(br#"{"name": "Lamp", "description": "Desk lamp"}"#);
        assert_eq!(item.name, "Lamp");
        assert_eq!(item.description, "Desk lamp");
    }

    #[test]
    fn empty_body_uses_placeholders() {
        assert_eq!(NewItem::from_body(b""), NewItem::default());
        assert_eq!(NewItem::from_body(b"{}"), NewItem::default());
    }

    #[test]
    fn partial_body_defaults_missing_field() {
        let item = NewItem::from_body(br#"{"name": "Lamp"}"#);
        assert_eq!(item.name, "Lamp");
        assert_eq!(item.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn junk_is_absorbed() {
        assert_eq!(NewItem::from_body(b"{not json"), NewItem::default());
        assert_eq!(NewItem::from_body(b"[1, 2]"), NewItem::default());
        assert_eq!(
            NewItem::from_body(br#"{"name": null, "description": [1]}"#),
            NewItem::default()
        );
    }

    #[test]
    fn scalar_values_are_kept_as_text() {
        let item = NewItem::from_body(br#"{"name": 7, "description": true}"#);
        assert_eq!(item.name, "7");
        assert_eq!(item.description, "true");

        let item = NewItem::from_body(br#"{"name": 1.5, "description": false}"#);
        assert_eq!(item.name, "1.5");
        assert_eq!(item.description, "false");
    }

    #[test]
    fn serializes_as_flat_record() {
        let model = Model {
            id: 3,
            name: "Lamp".into(),
            description: "Desk lamp".into(),
        };
        assert_eq!(
            serde_json::to_value(&model).unwrap(),
            serde_json::json!({"id": 3, "name": "Lamp", "description": "Desk lamp"})
        );
    }
}
