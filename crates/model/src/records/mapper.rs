use crate::{core::value::Value, records::row::RowData};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MappingError {
    #[error("key column '{0}' is missing from the row")]
    MissingKeyColumn(String),

    #[error("failed to map row to entity: {0}")]
    Entity(String),
}

/// Maps one fetched row to an entity.
pub trait RowMapper {
    type Entity;

    fn map_row(&self, row: &RowData) -> Result<Self::Entity, MappingError>;
}

/// Maps a row to a `(key, entity)` pair so an iterable of those can be
/// collected into a map for map-valued persistent properties. The key is read
/// from `key_column`; creation of the entity is delegated to the inner mapper.
pub struct MapEntryRowMapper<M> {
    key_column: String,
    delegate: M,
}

impl<M> MapEntryRowMapper<M> {
    pub fn new(key_column: impl Into<String>, delegate: M) -> Self {
        Self {
            key_column: key_column.into(),
            delegate,
        }
    }
}

impl<M: RowMapper> RowMapper for MapEntryRowMapper<M> {
    type Entity = (Value, M::Entity);

    fn map_row(&self, row: &RowData) -> Result<Self::Entity, MappingError> {
        // A missing column is a mapping failure; a present column holding SQL
        // NULL still keys the entry, with Value::Null.
        let field = row
            .get(&self.key_column)
            .ok_or_else(|| MappingError::MissingKeyColumn(self.key_column.clone()))?;
        let key = field.value.clone().unwrap_or(Value::Null);
        let entity = self.delegate.map_row(row)?;
        Ok((key, entity))
    }
}

/// Collects `(key, entity)` pairs into a map, later entries winning on
/// duplicate keys.
pub fn entries_to_map<T>(entries: impl IntoIterator<Item = (Value, T)>) -> HashMap<Value, T> {
    entries.into_iter().collect()
}
