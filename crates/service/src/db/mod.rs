//! Relational store adapters, one thin module per resource kind. The CRUD
//! semantics live in `collection`; these map records to and from entity rows.

pub mod accomplishment_store;
pub mod certificate_store;
pub mod project_store;
