/// Identifier of a shopping list entry, unique within one list.
pub type ItemId = u64;

/// Quantity substituted when an edited quantity cannot be used.
pub const FALLBACK_QUANTITY: u32 = 1;

/// One shopping list entry.
///
/// Items are values: an edit replaces the record at its position in the
/// list rather than mutating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
        }
    }

    /// Returns a copy of this item carrying new field values and the same id.
    pub fn with_fields(&self, name: impl Into<String>, quantity: u32) -> Self {
        Self::new(self.id, name, quantity)
    }
}

/// Which of the two form fields receives typed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Quantity,
}

impl FormField {
    pub fn toggled(self) -> Self {
        match self {
            FormField::Name => FormField::Quantity,
            FormField::Quantity => FormField::Name,
        }
    }
}

/// Uncommitted text of the item form.
///
/// Both fields are kept as raw text; they are only validated when the form
/// is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub name: String,
    pub quantity: String,
}

impl Draft {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Quantity => &self.quantity,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Quantity => &mut self.quantity,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.quantity.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_fields_keeps_id() {
        let item = Item::new(7, "Milk", 2);
        let edited = item.with_fields("Oat milk", 3);

        assert_eq!(edited.id, 7);
        assert_eq!(edited.name, "Oat milk");
        assert_eq!(edited.quantity, 3);
        assert_eq!(item.name, "Milk");
    }

    #[test]
    fn test_draft_field_access() {
        let mut draft = Draft::default();
        assert!(draft.is_empty());

        draft.field_mut(FormField::Name).push_str("Bread");
        draft.field_mut(FormField::Quantity).push('4');

        assert_eq!(draft.field(FormField::Name), "Bread");
        assert_eq!(draft.field(FormField::Quantity), "4");
        assert!(!draft.is_empty());
    }

    #[test]
    fn test_form_field_toggle() {
        assert_eq!(FormField::Name.toggled(), FormField::Quantity);
        assert_eq!(FormField::Quantity.toggled(), FormField::Name);
    }
}
