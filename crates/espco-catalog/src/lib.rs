//! Item catalog for espco
//!
//! The catalog is fixed at build time. [`ItemCatalog::standard()`] indexes it
//! once per process; nothing adds, removes or mutates entries afterwards.

mod data;
pub mod entry;
pub mod pack;

pub use entry::{CatalogEntry, ItemKind};
pub use pack::{LineItem, Pack, describe};

use std::collections::HashMap;

use espco_utils::error::CatalogError;
use once_cell::sync::Lazy;

static STANDARD: Lazy<ItemCatalog> = Lazy::new(|| ItemCatalog::new(data::ENTRIES, data::PACKS));

/// Indexed view over a static set of entries and packs.
#[derive(Debug)]
pub struct ItemCatalog {
    entries: &'static [CatalogEntry],
    packs: &'static [Pack],
    entry_index: HashMap<&'static str, usize>,
    pack_index: HashMap<&'static str, usize>,
}

impl ItemCatalog {
    /// The built-in catalog.
    #[must_use]
    pub fn standard() -> &'static ItemCatalog {
        &STANDARD
    }

    fn new(entries: &'static [CatalogEntry], packs: &'static [Pack]) -> Self {
        let entry_index = entries.iter().enumerate().map(|(i, e)| (e.id, i)).collect();
        let pack_index = packs.iter().enumerate().map(|(i, p)| (p.id, i)).collect();
        Self {
            entries,
            packs,
            entry_index,
            pack_index,
        }
    }

    pub fn entries(&self) -> &'static [CatalogEntry] {
        self.entries
    }

    pub fn packs(&self) -> &'static [Pack] {
        self.packs
    }

    /// Look up an entry by id, ignoring ASCII case.
    pub fn entry(&self, id: &str) -> Result<&'static CatalogEntry, CatalogError> {
        let key = id.trim().to_ascii_lowercase();
        self.entry_index
            .get(key.as_str())
            .map(|&i| &self.entries[i])
            .ok_or_else(|| CatalogError::UnknownItem { id: id.to_string() })
    }

    /// Look up a pack by id, ignoring ASCII case.
    pub fn pack(&self, id: &str) -> Result<&'static Pack, CatalogError> {
        let key = id.trim().to_ascii_lowercase();
        self.pack_index
            .get(key.as_str())
            .map(|&i| &self.packs[i])
            .ok_or_else(|| CatalogError::UnknownPack { id: id.to_string() })
    }

    /// Expand a pack into the line it adds to an order.
    pub fn pack_line(&self, pack: &Pack) -> Result<LineItem, CatalogError> {
        let entry = self.entry(pack.item_id)?;
        Ok(LineItem {
            entry,
            quantity: pack.quantity,
            extra_weight_oz: pack.extra_weight_oz,
            description: pack.description.to_string(),
        })
    }

    /// Resolve a packer's token into an order line.
    ///
    /// `item-id:qty` always names a catalog item. A bare token is tried as a
    /// pack first and then as a single unit of an item.
    pub fn resolve(&self, token: &str) -> Result<LineItem, CatalogError> {
        let token = token.trim();

        if let Some((id, qty)) = token.split_once(':') {
            let quantity = qty
                .trim()
                .parse::<u32>()
                .map_err(|_| CatalogError::MalformedToken {
                    token: token.to_string(),
                    value: qty.to_string(),
                })?;
            let entry = self.entry(id)?;
            return Ok(LineItem::of(entry, quantity));
        }

        if let Ok(pack) = self.pack(token) {
            return self.pack_line(pack);
        }

        match self.entry(token) {
            Ok(entry) => Ok(LineItem::of(entry, 1)),
            Err(_) => {
                tracing::debug!(token = %token, "token matched neither a pack nor an item");
                Err(CatalogError::UnknownPack {
                    id: token.to_string(),
                })
            }
        }
    }
}
