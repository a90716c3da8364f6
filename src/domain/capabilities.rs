//! Capability traits shared by the entities.
//!
//! Each entity implements only the capabilities whose fields it carries;
//! there is no common base type.

use crate::domain::error::ModelResult;
use crate::domain::title::{Title, Titles};

/// A record identified by a database-assigned key.
pub trait Entity {
    type Id: Copy;

    fn id(&self) -> Self::Id;

    fn set_id(&mut self, id: Self::Id);
}

/// A record carrying localized titles.
pub trait Titled {
    fn titles(&self) -> &Titles;

    fn titles_mut(&mut self) -> &mut Titles;

    /// Adds a title to this record. See [`Titles::add`].
    fn add_title(&mut self, title: Title) -> ModelResult<()> {
        self.titles_mut().add(title)
    }
}

/// A record with an optional classifying kind.
pub trait Typed {
    type Kind: Copy;

    fn kind(&self) -> Option<Self::Kind>;

    fn set_kind(&mut self, kind: Option<Self::Kind>);
}

pub trait Named {
    fn name(&self) -> Option<&str>;

    fn set_name(&mut self, name: Option<String>);
}

pub trait Described {
    fn description(&self) -> Option<&str>;

    fn set_description(&mut self, description: Option<String>);
}

/// Implements [`Named`] and [`Described`] over `name`/`description` fields.
macro_rules! impl_named_described {
    ($name:ident) => {
        impl $crate::domain::capabilities::Named for $name {
            fn name(&self) -> Option<&str> {
                self.name.as_deref()
            }

            fn set_name(&mut self, name: Option<String>) {
                self.name = name;
            }
        }

        impl $crate::domain::capabilities::Described for $name {
            fn description(&self) -> Option<&str> {
                self.description.as_deref()
            }

            fn set_description(&mut self, description: Option<String>) {
                self.description = description;
            }
        }
    };
}

pub(crate) use impl_named_described;
