/// Data models for database entities
///
/// Row structs map to the Product and Student tables via sqlx; input structs
/// carry the non-key fields for insert and update. The primary key is
/// assigned by SQLite on insert and never supplied by the caller.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// One row of the Product table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {:.2} | {}",
            self.id, self.name, self.price, self.quantity
        )
    }
}

/// Non-key fields for creating or replacing a product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

/// One row of the Student table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub department: String,
    pub marks: i64,
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Department: {} | Marks: {}",
            self.id, self.name, self.department, self.marks
        )
    }
}

/// Non-key fields for creating or replacing a student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentInput {
    pub name: String,
    pub department: String,
    pub marks: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_display_formats_price_two_decimals() {
        let product = Product {
            id: 3,
            name: "Widget".to_string(),
            price: 9.9,
            quantity: 10,
        };
        assert_eq!(product.to_string(), "3 | Widget | 9.90 | 10");
    }

    #[test]
    fn test_student_display() {
        let student = Student {
            id: 1,
            name: "Asha".to_string(),
            department: "CS".to_string(),
            marks: 88,
        };
        assert_eq!(
            student.to_string(),
            "ID: 1 | Name: Asha | Department: CS | Marks: 88"
        );
    }
}
