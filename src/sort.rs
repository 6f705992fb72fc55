use crate::models::Product;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    ProductName,
    Percentage,
}

impl SortColumn {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "product_name" => Some(SortColumn::ProductName),
            "percentage" => Some(SortColumn::Percentage),
            _ => None,
        }
    }

    /// Maps a table header label such as `Product Name` to its column.
    pub fn from_header(label: &str) -> Option<Self> {
        Self::from_key(&column_key(label))
    }

    pub fn header(self) -> &'static str {
        match self {
            SortColumn::ProductName => "Product Name",
            SortColumn::Percentage => "Percentage",
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            // UTF-16 unit order, matching how browsers compare strings.
            SortColumn::ProductName => a
                .product_name
                .encode_utf16()
                .cmp(b.product_name.encode_utf16()),
            SortColumn::Percentage => a
                .percentage
                .unwrap_or(0.0)
                .total_cmp(&b.percentage.unwrap_or(0.0)),
        }
    }
}

pub fn column_key(label: &str) -> String {
    label.trim().to_lowercase().replace(' ', "_")
}

/// Stable, descending sort by `column`. Missing percentages sort as zero.
pub fn sort_descending(products: &mut [Product], column: SortColumn) {
    products.sort_by(|a, b| column.compare(b, a));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, percentage: Option<f64>) -> Product {
        Product {
            product_name: name.to_string(),
            url: format!("https://shop.test/{name}"),
            percentage,
            sustainability_index: None,
        }
    }

    fn percentages(products: &[Product]) -> Vec<Option<f64>> {
        products.iter().map(|p| p.percentage).collect()
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.product_name.as_str()).collect()
    }

    #[test]
    fn header_labels_map_to_columns() {
        assert_eq!(column_key("Product Name"), "product_name");
        assert_eq!(SortColumn::from_header("Product Name"), Some(SortColumn::ProductName));
        assert_eq!(SortColumn::from_header("Percentage"), Some(SortColumn::Percentage));
        assert_eq!(SortColumn::from_header("Rating"), None);
        for column in [SortColumn::ProductName, SortColumn::Percentage] {
            assert_eq!(SortColumn::from_header(column.header()), Some(column));
        }
    }

    #[test]
    fn percentage_sorts_numerically_descending() {
        let mut products = vec![
            product("a", Some(10.0)),
            product("b", Some(-5.0)),
            product("c", Some(20.0)),
        ];
        sort_descending(&mut products, SortColumn::Percentage);
        assert_eq!(percentages(&products), vec![Some(20.0), Some(10.0), Some(-5.0)]);
    }

    #[test]
    fn name_sorts_lexicographically_descending() {
        let mut products = vec![
            product("Bag", Some(1.0)),
            product("Wallet", Some(2.0)),
            product("Apron", Some(3.0)),
        ];
        sort_descending(&mut products, SortColumn::ProductName);
        assert_eq!(names(&products), vec!["Wallet", "Bag", "Apron"]);
    }

    #[test]
    fn names_compare_by_utf16_units() {
        // U+FF61 is a single unit above the surrogate range; U+1F600 starts
        // with a high surrogate, so it orders lower in UTF-16.
        let mut products = vec![
            product("\u{1F600}", Some(1.0)),
            product("\u{FF61}", Some(2.0)),
        ];
        sort_descending(&mut products, SortColumn::ProductName);
        assert_eq!(names(&products), vec!["\u{FF61}", "\u{1F600}"]);
    }

    #[test]
    fn missing_percentage_sorts_as_zero() {
        let mut products = vec![
            product("neg", Some(-1.0)),
            product("none", None),
            product("pos", Some(1.0)),
        ];
        sort_descending(&mut products, SortColumn::Percentage);
        assert_eq!(names(&products), vec!["pos", "none", "neg"]);
    }

    #[test]
    fn equal_values_keep_relative_order() {
        let mut products = vec![
            product("first", Some(4.0)),
            product("top", Some(9.0)),
            product("second", Some(4.0)),
            product("third", Some(4.0)),
        ];
        sort_descending(&mut products, SortColumn::Percentage);
        assert_eq!(names(&products), vec!["top", "first", "second", "third"]);
    }
}
