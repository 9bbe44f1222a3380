//! CSV serialization of the collection.
//!
//! Forward-only: there is no parse path. Fields are joined verbatim with no
//! quoting, so a name or category containing a comma or newline corrupts
//! the row structure. Documented behavior; consumers parse the unquoted
//! format.

use crate::model::Item;

pub const CSV_HEADER: &str = "Name,Category,Quantity,Price";

/// Encode the collection as CSV text: the fixed header line, then one line
/// per item with price formatted to exactly two fractional digits. Lines
/// are joined by `\n` with no trailing newline.
pub fn encode(items: &[Item]) -> String {
    let mut rows = Vec::with_capacity(items.len() + 1);
    rows.push(CSV_HEADER.to_string());
    for item in items {
        rows.push(format!(
            "{},{},{},{:.2}",
            item.name, item.category, item.quantity, item.price
        ));
    }
    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_is_just_the_header() {
        assert_eq!(encode(&[]), "Name,Category,Quantity,Price");
    }

    #[test]
    fn single_item_row_with_two_digit_price() {
        let items = vec![Item::new("Bolt".into(), "Hardware".into(), 10, 1.5)];
        assert_eq!(
            encode(&items),
            "Name,Category,Quantity,Price\nBolt,Hardware,10,1.50"
        );
    }

    #[test]
    fn no_trailing_newline() {
        let items = vec![
            Item::new("A".into(), "X".into(), 1, 1.0),
            Item::new("B".into(), "Y".into(), 2, 2.0),
        ];
        let out = encode(&items);
        assert!(!out.ends_with('\n'));
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn price_rounds_to_two_digits_and_quantity_is_verbatim() {
        let items = vec![Item::new("Rope".into(), "Hardware".into(), -7, 2.999)];
        assert_eq!(
            encode(&items).lines().nth(1).unwrap(),
            "Rope,Hardware,-7,3.00"
        );
    }

    #[test]
    fn fields_are_not_escaped_or_quoted() {
        // A comma in a field spills into the next column. Documented.
        let items = vec![Item::new("Nut, hex".into(), "Hardware".into(), 1, 0.1)];
        assert_eq!(
            encode(&items).lines().nth(1).unwrap(),
            "Nut, hex,Hardware,1,0.10"
        );
    }
}
