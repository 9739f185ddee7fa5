//! Declarative resource models.
//!
//! These are the caller-facing shapes the control plane hands to the
//! lifecycle handlers (desired state) and gets back from them (current
//! state). Members serialize in PascalCase; enumerations are closed types
//! that only become strings at the remote edge.

/// Declares a closed enumeration together with its service string form.
macro_rules! service_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $crate::model::ServiceEnum for $name {
            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            fn from_service_str(s: &str) -> Option<Self> {
                match s {
                    $($wire => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::model::ServiceEnum::as_str(*self))
            }
        }
    };
}

pub mod common;
pub mod dataset;
pub mod job;
pub mod project;
pub mod recipe;
pub mod ruleset;
pub mod schedule;

pub use common::{ColumnSelector, FilterExpression, FilterValue, S3Location, Tag};
pub use dataset::Dataset;
pub use job::{Job, JobType};
pub use project::Project;
pub use recipe::Recipe;
pub use ruleset::Ruleset;
pub use schedule::Schedule;

/// Closed enumeration with a service string form.
pub trait ServiceEnum: Copy + Sized {
    /// The string the remote service uses for this value.
    fn as_str(self) -> &'static str;

    /// Parse the service string form. Unknown values yield `None`.
    fn from_service_str(s: &str) -> Option<Self>;
}

/// Behaviour shared by every top-level declarative model.
pub trait ResourceModel {
    /// The identity key. Absent only on malformed input.
    fn name(&self) -> Option<&str>;

    /// Tag list, for the post-create backfill.
    fn tags_mut(&mut self) -> &mut Option<Vec<Tag>>;
}

macro_rules! impl_resource_model {
    ($($model:ty),+ $(,)?) => {
        $(
            impl ResourceModel for $model {
                fn name(&self) -> Option<&str> {
                    self.name.as_deref()
                }

                fn tags_mut(&mut self) -> &mut Option<Vec<Tag>> {
                    &mut self.tags
                }
            }
        )+
    };
}

impl_resource_model!(Dataset, Job, Project, Recipe, Ruleset, Schedule);
