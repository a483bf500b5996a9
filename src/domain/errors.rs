/// Reasons the list refuses to commit user input.
///
/// All of them are recoverable: the form that produced the input stays open
/// and the message is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejected {
    #[error("Item name cannot be blank")]
    BlankName,

    #[error("Quantity cannot be blank")]
    BlankQuantity,

    #[error("Quantity '{0}' is not a whole number")]
    InvalidQuantity(String),

    #[error("Quantity must be at least 1")]
    NonPositiveQuantity,

    #[error("No item form is open")]
    NoDraft,
}

pub type DomainResult<T> = Result<T, Rejected>;

/// Parses quantity text the way both the add and the strict edit paths
/// expect it: surrounding whitespace is ignored, the rest must be a
/// positive integer.
pub fn parse_quantity(text: &str) -> DomainResult<u32> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Rejected::BlankQuantity);
    }
    match trimmed.parse::<i64>() {
        Ok(n) if n <= 0 => Err(Rejected::NonPositiveQuantity),
        Ok(n) => u32::try_from(n).map_err(|_| Rejected::InvalidQuantity(trimmed.to_string())),
        Err(_) => Err(Rejected::InvalidQuantity(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("2"), Ok(2));
        assert_eq!(parse_quantity("  12 "), Ok(12));
        assert_eq!(parse_quantity(""), Err(Rejected::BlankQuantity));
        assert_eq!(parse_quantity("   "), Err(Rejected::BlankQuantity));
        assert_eq!(
            parse_quantity("abc"),
            Err(Rejected::InvalidQuantity("abc".to_string()))
        );
        assert_eq!(
            parse_quantity("1.5"),
            Err(Rejected::InvalidQuantity("1.5".to_string()))
        );
        assert_eq!(parse_quantity("0"), Err(Rejected::NonPositiveQuantity));
        assert_eq!(parse_quantity("-3"), Err(Rejected::NonPositiveQuantity));
        assert_eq!(
            parse_quantity("99999999999"),
            Err(Rejected::InvalidQuantity("99999999999".to_string()))
        );
    }

    #[test]
    fn test_rejected_display() {
        assert_eq!(Rejected::BlankName.to_string(), "Item name cannot be blank");
        assert_eq!(
            Rejected::InvalidQuantity("abc".into()).to_string(),
            "Quantity 'abc' is not a whole number"
        );
    }
}
