//! Общие типы для всех агрегатов

pub mod aggregate_id;

pub use aggregate_id::AggregateId;
