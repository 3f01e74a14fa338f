//! Cliente e modelo de recursos do CRM

mod auth;
pub mod client;
pub mod config;
pub mod object;
pub mod objects;
pub mod owner;

pub use client::{CrmClient, ObjectQuery};
pub use config::{CrmConfig, DEFAULT_CRM_BASE_URL};
pub use object::{
    association_key, AssociationCategory, AssociationInput, AssociationLink, AssociationSpec,
    AssociationTarget, CrmObject, ObjectAssociations,
};
pub use owner::Owner;
