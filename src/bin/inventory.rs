// inventory - menu-driven product catalog over a local SQLite file.
//
// Ensures the table exists, then loops on the menu until the user exits.

use anyhow::Context;
use recordkeeper_lib::{
    console::{prompt_f64, prompt_i64, prompt_line, render, MenuChoice},
    db::ProductInput,
    Database, StoreError,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let db = Database::open(data_file()?).await?;

    // Startup failure here is reported, not fatal; the menu still runs.
    match db.ensure_product_table().await {
        Ok(()) => println!("Table created or already exists."),
        Err(e) => println!("Error creating table: {}", e.user_message()),
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    loop {
        print_menu();
        let line = prompt_line(&mut input, &mut output, "Enter choice: ")?;
        match MenuChoice::parse(&line) {
            Some(MenuChoice::Add) => add_product(&db, &mut input, &mut output).await?,
            Some(MenuChoice::ViewAll) => view_products(&db).await,
            Some(MenuChoice::Update) => update_product(&db, &mut input, &mut output).await?,
            Some(MenuChoice::Delete) => delete_product(&db, &mut input, &mut output).await?,
            Some(MenuChoice::Exit) => {
                println!("Exiting program.");
                break;
            }
            None => println!("Invalid choice. Please try again."),
        }
    }

    db.close().await;
    Ok(())
}

fn print_menu() {
    println!("\nMenu:");
    println!("1. Add Product");
    println!("2. View Products");
    println!("3. Update Product");
    println!("4. Delete Product");
    println!("5. Exit");
}

async fn add_product<R: BufRead, W: Write>(
    db: &Database,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<()> {
    let name = prompt_line(input, output, "Enter product name: ")?;
    let price = prompt_f64(input, output, "Enter product price: ")?;
    let quantity = prompt_i64(input, output, "Enter product quantity: ")?;

    let product = ProductInput {
        name,
        price,
        quantity,
    };

    match db.insert_product(&product).await {
        Ok(_) => println!("Product added successfully!"),
        Err(e) => println!("Error inserting product: {}", e.user_message()),
    }

    Ok(())
}

async fn view_products(db: &Database) {
    match db.list_products().await {
        Ok(products) => print!("\n{}", render::product_table(&products)),
        Err(e) => println!("Error reading products: {}", e.user_message()),
    }
}

async fn update_product<R: BufRead, W: Write>(
    db: &Database,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<()> {
    let id = prompt_i64(input, output, "Enter ProductID to update: ")?;
    let name = prompt_line(input, output, "Enter new product name: ")?;
    let price = prompt_f64(input, output, "Enter new price: ")?;
    let quantity = prompt_i64(input, output, "Enter new quantity: ")?;

    let replacement = ProductInput {
        name,
        price,
        quantity,
    };

    match db.update_product(id, &replacement).await {
        Ok(()) => println!("Product updated successfully!"),
        Err(StoreError::NotFound(_)) => println!("No product found with that ID."),
        Err(e) => println!("Error updating product: {}", e.user_message()),
    }

    Ok(())
}

async fn delete_product<R: BufRead, W: Write>(
    db: &Database,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<()> {
    let id = prompt_i64(input, output, "Enter ProductID to delete: ")?;

    match db.delete_product(id).await {
        Ok(()) => println!("Product deleted successfully!"),
        Err(StoreError::NotFound(_)) => println!("No product found with that ID."),
        Err(e) => println!("Error deleting product: {}", e.user_message()),
    }

    Ok(())
}

fn data_file() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    Ok(home.join(".recordkeeper").join("inventory.db"))
}
