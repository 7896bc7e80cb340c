//! Piercing and tattoo catalogs: records, backend fetchers, and the local
//! view state the pages render from.

mod client;
mod models;
mod view;

pub use client::{CatalogClient, PublicCatalog};
pub use models::{
    CatalogFields, CatalogItem, ItemId, Piercing, PiercingFields, Tattoo, TattooFields,
    format_price, image_src,
};
pub use view::{CatalogView, PUBLIC_PAGE_SIZE, page_count, page_items};

/// The two catalogs the backend exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CatalogResource {
    #[display("piercings")]
    Piercings,
    #[display("tattoos")]
    Tattoos,
}

impl CatalogResource {
    pub fn collection_path(self) -> &'static str {
        match self {
            CatalogResource::Piercings => "/api/piercs/piercings/",
            CatalogResource::Tattoos => "/api/tatts/tattoos/",
        }
    }

    pub fn item_path(self, id: ItemId) -> String {
        format!("{}{}/", self.collection_path(), id)
    }

    /// Spanish noun, singular
    pub fn singular(self) -> &'static str {
        match self {
            CatalogResource::Piercings => "piercing",
            CatalogResource::Tattoos => "tatuaje",
        }
    }

    /// Spanish noun, plural
    pub fn plural(self) -> &'static str {
        match self {
            CatalogResource::Piercings => "piercings",
            CatalogResource::Tattoos => "tatuajes",
        }
    }
}

/// Operation a failure message refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogAction {
    Load,
    Create,
    Update,
    Delete,
}

impl CatalogAction {
    pub fn failure_message(self, resource: CatalogResource) -> String {
        match self {
            CatalogAction::Load => format!("Error al cargar los {}", resource.plural()),
            CatalogAction::Create => format!("Error al añadir el {}", resource.singular()),
            CatalogAction::Update => format!("Error al actualizar el {}", resource.singular()),
            CatalogAction::Delete => format!("Error al eliminar el {}", resource.singular()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(
            CatalogResource::Piercings.collection_path(),
            "/api/piercs/piercings/"
        );
        assert_eq!(
            CatalogResource::Tattoos.item_path(ItemId(12)),
            "/api/tatts/tattoos/12/"
        );
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            CatalogAction::Load.failure_message(CatalogResource::Piercings),
            "Error al cargar los piercings"
        );
        assert_eq!(
            CatalogAction::Delete.failure_message(CatalogResource::Tattoos),
            "Error al eliminar el tatuaje"
        );
        assert_eq!(CatalogResource::Tattoos.to_string(), "tattoos");
    }
}
