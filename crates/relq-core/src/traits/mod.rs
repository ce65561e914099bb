use crate::model::entity::EntityModel;

///
/// EntityKind
///
/// Binds a Rust entity type to its static runtime model.
///

pub trait EntityKind {
    const MODEL: &'static EntityModel;
}

///
/// EntityProvider
///
/// Metadata lookup by entity path, for callers that only hold a path.
///

pub trait EntityProvider {
    fn describe(&self, path: &str) -> Option<&'static EntityModel>;
}

///
/// StaticEntityProvider
/// Provider over a fixed model registry.
///

#[derive(Clone, Copy, Debug)]
pub struct StaticEntityProvider {
    models: &'static [&'static EntityModel],
}

impl StaticEntityProvider {
    #[must_use]
    pub const fn new(models: &'static [&'static EntityModel]) -> Self {
        Self { models }
    }
}

impl EntityProvider for StaticEntityProvider {
    fn describe(&self, path: &str) -> Option<&'static EntityModel> {
        self.models.iter().copied().find(|model| model.path == path)
    }
}
