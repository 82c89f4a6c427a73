// students - menu-driven student register over a local SQLite file.
//
// Same menu shape as the inventory app; the update flow additionally shows
// the current row before asking for replacement values.

use anyhow::Context;
use recordkeeper_lib::{
    console::{prompt_i64, prompt_line, render, MenuChoice},
    db::StudentInput,
    Database, StoreError,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let db = Database::open(data_file()?).await?;

    match db.ensure_student_table().await {
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
            Some(MenuChoice::Add) => add_student(&db, &mut input, &mut output).await?,
            Some(MenuChoice::ViewAll) => view_students(&db).await,
            Some(MenuChoice::Update) => update_student(&db, &mut input, &mut output).await?,
            Some(MenuChoice::Delete) => delete_student(&db, &mut input, &mut output).await?,
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
    println!("1. Add Student");
    println!("2. View All Students");
    println!("3. Update Student");
    println!("4. Delete Student");
    println!("5. Exit");
}

async fn add_student<R: BufRead, W: Write>(
    db: &Database,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<()> {
    let student = read_student_fields(input, output)?;

    match db.insert_student(&student).await {
        Ok(_) => println!("Student added successfully!"),
        Err(e) => println!("Error inserting student: {}", e.user_message()),
    }

    Ok(())
}

async fn view_students(db: &Database) {
    match db.list_students().await {
        Ok(students) if students.is_empty() => println!("No students found."),
        Ok(students) => print!("\n{}", render::student_table(&students)),
        Err(e) => println!("Error reading students: {}", e.user_message()),
    }
}

async fn update_student<R: BufRead, W: Write>(
    db: &Database,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<()> {
    let id = prompt_i64(input, output, "Enter student ID: ")?;

    // Show the row being replaced before collecting new values.
    let current = match db.get_student(id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            println!("Student not found.");
            return Ok(());
        }
        Err(e) => {
            println!("Error reading student: {}", e.user_message());
            return Ok(());
        }
    };
    println!("Current details: {}", current);

    let replacement = read_student_fields(input, output)?;

    match db.update_student(id, &replacement).await {
        Ok(()) => println!("Student updated successfully!"),
        Err(StoreError::NotFound(_)) => println!("Student not found."),
        Err(e) => println!("Error updating student: {}", e.user_message()),
    }

    Ok(())
}

async fn delete_student<R: BufRead, W: Write>(
    db: &Database,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<()> {
    let id = prompt_i64(input, output, "Enter student ID: ")?;

    match db.delete_student(id).await {
        Ok(()) => println!("Student deleted successfully!"),
        Err(StoreError::NotFound(_)) => println!("Student not found."),
        Err(e) => println!("Error deleting student: {}", e.user_message()),
    }

    Ok(())
}

fn read_student_fields<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<StudentInput> {
    let name = prompt_line(input, output, "Enter student name: ")?;
    let department = prompt_line(input, output, "Enter department: ")?;
    let marks = prompt_i64(input, output, "Enter marks: ")?;

    Ok(StudentInput {
        name,
        department,
        marks,
    })
}

fn data_file() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    Ok(home.join(".recordkeeper").join("student.db"))
}
