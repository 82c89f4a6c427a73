/// Tabular output rendering
///
/// Builds the listing text as a `String` so the row format is testable
/// without capturing stdout. Numeric fields: prices as 2-decimal fixed,
/// counts and marks as plain integers.

use crate::db::models::{Product, Student};

/// Render the product listing: header, separator, one line per row.
///
/// The header prints even for an empty table; the inventory app shows an
/// empty listing rather than a special message.
pub fn product_table(products: &[Product]) -> String {
    let mut out = String::new();
    out.push_str("ProductID | ProductName | Price | Quantity\n");
    out.push_str("-------------------------------------------\n");
    for product in products {
        out.push_str(&format!("{}\n", product));
    }
    out
}

/// Render the student listing. Callers handle the empty case separately
/// with a "No students found." message.
pub fn student_table(students: &[Student]) -> String {
    let mut out = String::new();
    out.push_str("StudentID | Name | Department | Marks\n");
    out.push_str("----------------------------------------\n");
    for student in students {
        out.push_str(&format!("{}\n", student));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_table_rows() {
        let products = vec![Product {
            id: 1,
            name: "Widget".to_string(),
            price: 9.99,
            quantity: 10,
        }];

        let table = product_table(&products);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ProductID | ProductName | Price | Quantity");
        assert_eq!(lines[2], "1 | Widget | 9.99 | 10");
    }

    #[test]
    fn test_product_table_empty_still_has_header() {
        let table = product_table(&[]);
        assert!(table.starts_with("ProductID | ProductName | Price | Quantity\n"));
        assert_eq!(table.lines().count(), 2);
    }

    #[test]
    fn test_student_table_rows() {
        let students = vec![Student {
            id: 2,
            name: "Asha".to_string(),
            department: "CS".to_string(),
            marks: 92,
        }];

        let table = student_table(&students);
        assert!(table.contains("StudentID | Name | Department | Marks"));
        assert!(table.contains("ID: 2 | Name: Asha | Department: CS | Marks: 92"));
    }
}
