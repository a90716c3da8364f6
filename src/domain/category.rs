use serde::{Deserialize, Serialize};

use crate::domain::capabilities::{Entity, impl_named_described};
use crate::domain::error::{ModelError, ModelResult};
use crate::domain::types::CategoryId;
use crate::domain::value::Value;

/// A classification node. Categories form a hierarchy through `parent_id`,
/// which is a lookup key and is never resolved or validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: Option<String>,
    description: Option<String>,
    hentai: bool,
    weight: i32,
    parent_id: Option<CategoryId>,
}

impl Category {
    pub fn new(id: CategoryId) -> Self {
        Self {
            id,
            name: None,
            description: None,
            hentai: false,
            weight: 0,
            parent_id: None,
        }
    }

    /// Whether the category marks adult material.
    pub fn is_hentai(&self) -> bool {
        self.hentai
    }

    /// Sets the adult-content flag.
    ///
    /// Only a genuine boolean is accepted; numbers and text are rejected with
    /// [`ModelError::TypeMismatch`] rather than interpreted as truthy.
    pub fn set_hentai<V: Into<Value>>(&mut self, value: V) -> ModelResult<()> {
        match value.into() {
            Value::Bool(flag) => {
                self.hentai = flag;
                Ok(())
            }
            other => Err(ModelError::TypeMismatch {
                expected: "Boolean",
                found: other.kind(),
            }),
        }
    }

    /// Relevance weight of the category for its anime.
    pub fn weight(&self) -> i32 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: i32) {
        self.weight = weight;
    }

    pub fn parent_id(&self) -> Option<CategoryId> {
        self.parent_id
    }

    pub fn set_parent_id(&mut self, parent_id: Option<CategoryId>) {
        self.parent_id = parent_id;
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> CategoryId {
        self.id
    }

    fn set_id(&mut self, id: CategoryId) {
        self.id = id;
    }
}

impl_named_described!(Category);
