use super::advanced::impl_advanced;
use super::standard::impl_standard;
use crate::mapper::ContextualMapper;
use crate::{Contextual, Fields, Value};

/// Maps a [`ContextualMapper`] to the [`Contextual`] interface.
///
/// Field attachment is delegated to the mapper, which builds the new logger;
/// everything else behaves as [`AdvancedMap`](super::AdvancedMap).
#[derive(Debug, Clone, Default)]
pub struct ContextualMap<M> {
    mapper: M,
}

impl<M: ContextualMapper> ContextualMap<M> {
    /// Wrap a mapper.
    pub fn new(mapper: M) -> Self {
        Self { mapper }
    }

    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    pub fn into_inner(self) -> M {
        self.mapper
    }
}

impl_standard!(ContextualMap);
impl_advanced!(ContextualMap);

impl<M: ContextualMapper> Contextual for ContextualMap<M> {
    fn with_fields(&self, fields: &[Value]) -> Box<dyn Contextual> {
        self.mapper.with_fields(fields)
    }

    fn fields(&self) -> &Fields {
        self.mapper.fields()
    }
}
