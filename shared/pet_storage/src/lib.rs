//! Pet record storage for the mrau backend
//!
//! This crate provides the DynamoDB-backed pet record table shared between the
//! backend and any future workers that process submissions.

pub mod pet_record;
