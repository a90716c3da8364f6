use serde::{Deserialize, Serialize};

use crate::domain::capabilities::{Entity, impl_named_described};
use crate::domain::error::ModelResult;
use crate::domain::types::TagId;
use crate::domain::value::Value;

/// A descriptive label attached to an anime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    id: TagId,
    name: Option<String>,
    description: Option<String>,
    spoiler: bool,
    approval: Option<i64>,
    count: Option<i64>,
}

impl Tag {
    pub fn new(id: TagId) -> Self {
        Self {
            id,
            name: None,
            description: None,
            spoiler: false,
            approval: None,
            count: None,
        }
    }

    pub fn is_spoiler(&self) -> bool {
        self.spoiler
    }

    pub fn set_spoiler(&mut self, spoiler: bool) {
        self.spoiler = spoiler;
    }

    /// Number of users that approved the tag for this anime.
    pub fn approval(&self) -> Option<i64> {
        self.approval
    }

    pub fn set_approval<V: Into<Value>>(&mut self, value: V) -> ModelResult<()> {
        self.approval = Some(value.into().to_i64()?);
        Ok(())
    }

    /// Number of anime the tag is used on.
    pub fn count(&self) -> Option<i64> {
        self.count
    }

    pub fn set_count<V: Into<Value>>(&mut self, value: V) -> ModelResult<()> {
        self.count = Some(value.into().to_i64()?);
        Ok(())
    }
}

impl Entity for Tag {
    type Id = TagId;

    fn id(&self) -> TagId {
        self.id
    }

    fn set_id(&mut self, id: TagId) {
        self.id = id;
    }
}

impl_named_described!(Tag);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::capabilities::Described;

    #[test]
    fn counts_coerce_to_integers() {
        let mut tag = Tag::new(TagId::new(30).unwrap());
        tag.set_count("412").unwrap();
        tag.set_approval(17.0).unwrap();
        assert_eq!(tag.count(), Some(412));
        assert_eq!(tag.approval(), Some(17));
    }

    #[test]
    fn failed_coercion_keeps_previous_count() {
        let mut tag = Tag::new(TagId::new(30).unwrap());
        tag.set_count(3).unwrap();
        assert!(tag.set_count("lots").is_err());
        assert_eq!(tag.count(), Some(3));
    }

    #[test]
    fn failed_approval_coercion_keeps_previous_value() {
        let mut tag = Tag::new(TagId::new(30).unwrap());
        assert!(tag.set_approval("n/a").is_err());
        assert_eq!(tag.approval(), None);

        tag.set_approval(5).unwrap();
        let err = tag.set_approval("2.5").unwrap_err();
        assert!(matches!(
            err,
            crate::domain::error::ModelError::TypeConversion {
                target: "integer",
                ..
            }
        ));
        assert_eq!(tag.approval(), Some(5));
    }

    #[test]
    fn description_is_unvalidated() {
        let mut tag = Tag::new(TagId::new(30).unwrap());
        tag.set_description(Some(String::new()));
        assert_eq!(tag.description(), Some(""));
        assert!(!tag.is_spoiler());
    }
}
