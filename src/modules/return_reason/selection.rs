//! Which attributes and relations of a return reason are exposed by an endpoint.

use super::repository::ReturnReason;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnReasonField {
    Id,
    Value,
    Label,
    ParentReturnReasonId,
    Description,
    Metadata,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

impl ReturnReasonField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Value => "value",
            Self::Label => "label",
            Self::ParentReturnReasonId => "parent_return_reason_id",
            Self::Description => "description",
            Self::Metadata => "metadata",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::DeletedAt => "deleted_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnReasonRelation {
    ParentReturnReason,
    ReturnReasonChildren,
}

impl ReturnReasonRelation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ParentReturnReason => "parent_return_reason",
            Self::ReturnReasonChildren => "return_reason_children",
        }
    }
}

pub const DEFAULT_STORE_RETURN_REASON_FIELDS: &[ReturnReasonField] = &[
    ReturnReasonField::Id,
    ReturnReasonField::Value,
    ReturnReasonField::Label,
    ReturnReasonField::ParentReturnReasonId,
    ReturnReasonField::Description,
    ReturnReasonField::CreatedAt,
    ReturnReasonField::UpdatedAt,
    ReturnReasonField::DeletedAt,
];

pub const DEFAULT_STORE_RETURN_REASON_RELATIONS: &[ReturnReasonRelation] = &[
    ReturnReasonRelation::ParentReturnReason,
    ReturnReasonRelation::ReturnReasonChildren,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindConfig {
    pub select: Vec<ReturnReasonField>,
    pub relations: Vec<ReturnReasonRelation>,
}

impl FindConfig {
    /// The policy shared by every storefront return reason endpoint.
    pub fn store() -> Self {
        Self {
            select: DEFAULT_STORE_RETURN_REASON_FIELDS.to_vec(),
            relations: DEFAULT_STORE_RETURN_REASON_RELATIONS.to_vec(),
        }
    }

    pub fn includes(&self, relation: ReturnReasonRelation) -> bool {
        self.relations.contains(&relation)
    }

    fn project_fields(&self, reason: &ReturnReason) -> Map<String, Value> {
        let mut columns = match serde_json::to_value(reason) {
            Ok(Value::Object(columns)) => columns,
            _ => Map::new(),
        };

        self.select
            .iter()
            .map(|field| {
                let value = columns.remove(field.as_str()).unwrap_or(Value::Null);
                (field.as_str().to_string(), value)
            })
            .collect()
    }

    /// Renders exactly the selected fields and requested relations.
    /// Related reasons are rendered with the same field list and no relations of their own.
    pub fn project(&self, reason: &ReturnReason) -> Value {
        let mut object = self.project_fields(reason);

        for relation in &self.relations {
            let rendered = match relation {
                ReturnReasonRelation::ParentReturnReason => reason
                    .parent_return_reason
                    .as_ref()
                    .and_then(|parent| parent.as_deref())
                    .map(|parent| Value::Object(self.project_fields(parent)))
                    .unwrap_or(Value::Null),
                ReturnReasonRelation::ReturnReasonChildren => Value::Array(
                    reason
                        .return_reason_children
                        .iter()
                        .flatten()
                        .map(|child| Value::Object(self.project_fields(child)))
                        .collect(),
                ),
            };
            object.insert(relation.as_str().to_string(), rendered);
        }

        Value::Object(object)
    }
}
