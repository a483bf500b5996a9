//! The shopping list and its transitions.

use super::errors::{parse_quantity, DomainResult, Rejected};
use super::models::{Draft, Item, ItemId, FALLBACK_QUANTITY};
use tracing::{debug, info};

/// Ordered collection of items plus the transient add form.
///
/// The store owns every item exclusively. At most one item is being edited
/// at a time; that item is tracked by id here rather than by a flag on each
/// item.
///
/// # Examples
///
/// ```
/// use shoplist::domain::ListStore;
///
/// let mut store = ListStore::default();
/// let milk = store.add("Milk", "2").unwrap();
/// assert_eq!(milk.id, 1);
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ListStore {
    items: Vec<Item>,
    draft: Option<Draft>,
    editing: Option<ItemId>,
}

impl ListStore {
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn editing(&self) -> Option<ItemId> {
        self.editing
    }

    pub fn is_editing(&self, id: ItemId) -> bool {
        self.editing == Some(id)
    }

    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Next id to hand out: one past the largest id currently in the list.
    ///
    /// Ids are not reused while the item holding the maximum remains; an
    /// emptied list starts again at 1.
    fn next_id(&self) -> ItemId {
        self.items.iter().map(|item| item.id).max().unwrap_or(0) + 1
    }

    /// Appends a new item built from raw form text.
    ///
    /// On success the draft is discarded. On rejection nothing changes,
    /// including the draft.
    pub fn add(&mut self, name: &str, quantity_text: &str) -> DomainResult<Item> {
        if name.trim().is_empty() {
            return Err(Rejected::BlankName);
        }
        let quantity = parse_quantity(quantity_text)?;

        let item = Item::new(self.next_id(), name, quantity);
        self.items.push(item.clone());
        self.draft = None;

        info!(
            event = "store.item_added",
            id = item.id,
            name = %item.name,
            quantity = item.quantity
        );
        Ok(item)
    }

    /// Makes `id` the only item in edit mode. Unknown ids are ignored.
    pub fn begin_edit(&mut self, id: ItemId) {
        if self.get(id).is_none() {
            debug!(event = "store.begin_edit_ignored", id = id);
            return;
        }
        self.editing = Some(id);
        debug!(event = "store.edit_started", id = id);
    }

    /// Leaves edit mode without touching any item.
    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.editing.take() {
            debug!(event = "store.edit_cancelled", id = id);
        }
    }

    /// Commits an edit. Never rejects: a quantity that is not a positive
    /// integer becomes [`FALLBACK_QUANTITY`] and a blank name keeps the
    /// current name.
    ///
    /// Edit mode is cleared for every item, whether or not `id` exists.
    pub fn commit_edit(&mut self, id: ItemId, name: &str, quantity_text: &str) -> Option<Item> {
        self.editing = None;
        let quantity = parse_quantity(quantity_text).unwrap_or(FALLBACK_QUANTITY);
        self.replace(id, name, quantity)
    }

    /// Commits an edit only if the new values would also be accepted by
    /// [`ListStore::add`]. On rejection the item and edit mode are kept.
    pub fn commit_edit_strict(
        &mut self,
        id: ItemId,
        name: &str,
        quantity_text: &str,
    ) -> DomainResult<Option<Item>> {
        if name.trim().is_empty() {
            return Err(Rejected::BlankName);
        }
        let quantity = parse_quantity(quantity_text)?;
        self.editing = None;
        Ok(self.replace(id, name, quantity))
    }

    fn replace(&mut self, id: ItemId, name: &str, quantity: u32) -> Option<Item> {
        let Some(index) = self.position(id) else {
            debug!(event = "store.commit_edit_ignored", id = id);
            return None;
        };
        let current = &self.items[index];
        let name = if name.trim().is_empty() { current.name.as_str() } else { name };
        let updated = current.with_fields(name, quantity);
        self.items[index] = updated.clone();

        info!(
            event = "store.item_updated",
            id = id,
            name = %updated.name,
            quantity = updated.quantity
        );
        Some(updated)
    }

    /// Removes the item with `id`. Deleting an unknown id is a no-op.
    pub fn delete(&mut self, id: ItemId) -> Option<Item> {
        let index = self.position(id)?;
        let removed = self.items.remove(index);
        if self.editing == Some(id) {
            self.editing = None;
        }
        info!(event = "store.item_deleted", id = id, name = %removed.name);
        Some(removed)
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        self.draft.as_mut()
    }

    /// Opens an empty add form. An already open form is kept as is.
    pub fn open_draft(&mut self) -> &mut Draft {
        self.draft.get_or_insert_with(Draft::default)
    }

    pub fn cancel_draft(&mut self) {
        if self.draft.take().is_some() {
            debug!(event = "store.draft_discarded");
        }
    }

    /// Adds an item from the open draft. A rejected draft stays open.
    pub fn submit_draft(&mut self) -> DomainResult<Item> {
        let Some(draft) = self.draft.clone() else {
            return Err(Rejected::NoDraft);
        };
        self.add(&draft.name, &draft.quantity)
    }
}
