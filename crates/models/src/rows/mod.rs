//! SeaORM entities for the relational store shape, one table per resource
//! kind, plus conversions to and from the domain records. Primary keys are
//! not auto-incremented: identifiers come from the service's allocation
//! policy so both store shapes observe the same ids.

pub mod accomplishment;
pub mod certificate;
pub mod project;
