/// SQL statements for the Product and Student tables
///
/// One parameterized statement per operation. Create, update and delete run
/// inside an explicit transaction: commit on success, rollback when an
/// update or delete matched no row. Reads go straight through the pool.

use crate::db::models::*;
use crate::db::Database;
use crate::error::{Result, StoreError};
use sqlx::Row;

const PRODUCT_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS Product (
    ProductID INTEGER PRIMARY KEY AUTOINCREMENT,
    ProductName TEXT NOT NULL,
    Price REAL NOT NULL,
    Quantity INTEGER NOT NULL
)";

const STUDENT_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS Student (
    StudentID INTEGER PRIMARY KEY AUTOINCREMENT,
    Name TEXT NOT NULL,
    Department TEXT NOT NULL,
    Marks INTEGER NOT NULL
)";

impl Database {
    /// Ensure the Product table exists. Safe to call on every startup.
    pub async fn ensure_product_table(&self) -> Result<()> {
        sqlx::query(PRODUCT_SCHEMA).execute(self.pool()).await?;
        Ok(())
    }

    /// Insert a product and return the engine-assigned id
    pub async fn insert_product(&self, input: &ProductInput) -> Result<i64> {
        let mut tx = self.pool().begin().await?;

        let row = sqlx::query(
            "INSERT INTO Product (ProductName, Price, Quantity) VALUES (?, ?, ?) RETURNING ProductID",
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(input.quantity)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row.get(0))
    }

    /// Fetch every product. No ORDER BY: rows come back in storage order.
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT ProductID AS id, ProductName AS name, Price AS price, Quantity AS quantity \
             FROM Product",
        )
        .fetch_all(self.pool())
        .await?;

        Ok(products)
    }

    /// Fetch one product by id
    pub async fn get_product(&self, id: i64) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT ProductID AS id, ProductName AS name, Price AS price, Quantity AS quantity \
             FROM Product WHERE ProductID = ?",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(product)
    }

    /// Replace every non-key field of the product with the given id
    ///
    /// Returns `StoreError::NotFound` (after rolling back) when no row
    /// matched; a matching row is unique because ids are.
    pub async fn update_product(&self, id: i64, input: &ProductInput) -> Result<()> {
        let mut tx = self.pool().begin().await?;

        let result = sqlx::query(
            "UPDATE Product SET ProductName = ?, Price = ?, Quantity = ? WHERE ProductID = ?",
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(input.quantity)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(StoreError::NotFound(id));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Delete the product with the given id, same zero/one row policy as update
    pub async fn delete_product(&self, id: i64) -> Result<()> {
        let mut tx = self.pool().begin().await?;

        let result = sqlx::query("DELETE FROM Product WHERE ProductID = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(StoreError::NotFound(id));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Ensure the Student table exists. Safe to call on every startup.
    pub async fn ensure_student_table(&self) -> Result<()> {
        sqlx::query(STUDENT_SCHEMA).execute(self.pool()).await?;
        Ok(())
    }

    /// Insert a student and return the engine-assigned id
    pub async fn insert_student(&self, input: &StudentInput) -> Result<i64> {
        let mut tx = self.pool().begin().await?;

        let row = sqlx::query(
            "INSERT INTO Student (Name, Department, Marks) VALUES (?, ?, ?) RETURNING StudentID",
        )
        .bind(&input.name)
        .bind(&input.department)
        .bind(input.marks)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row.get(0))
    }

    /// Fetch every student, in storage order
    pub async fn list_students(&self) -> Result<Vec<Student>> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT StudentID AS id, Name AS name, Department AS department, Marks AS marks \
             FROM Student",
        )
        .fetch_all(self.pool())
        .await?;

        Ok(students)
    }

    /// Fetch one student by id
    pub async fn get_student(&self, id: i64) -> Result<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT StudentID AS id, Name AS name, Department AS department, Marks AS marks \
             FROM Student WHERE StudentID = ?",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(student)
    }

    /// Replace every non-key field of the student with the given id
    pub async fn update_student(&self, id: i64, input: &StudentInput) -> Result<()> {
        let mut tx = self.pool().begin().await?;

        let result = sqlx::query(
            "UPDATE Student SET Name = ?, Department = ?, Marks = ? WHERE StudentID = ?",
        )
        .bind(&input.name)
        .bind(&input.department)
        .bind(input.marks)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(StoreError::NotFound(id));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Delete the student with the given id
    pub async fn delete_student(&self, id: i64) -> Result<()> {
        let mut tx = self.pool().begin().await?;

        let result = sqlx::query("DELETE FROM Student WHERE StudentID = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(StoreError::NotFound(id));
        }

        tx.commit().await?;
        Ok(())
    }
}
