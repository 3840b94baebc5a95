//! campusctl - command line client for the campus server.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(
    name = "campusctl",
    about = "Command line client for the campus server",
    version,
    arg_required_else_help = true
)]
struct Cli {
    /// Base URL of a running campus server.
    #[arg(long, global = true, default_value = "http://127.0.0.1:8000")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Course operations.
    Courses {
        #[command(subcommand)]
        command: ResourceCommands,
    },
    /// Student operations.
    Students {
        #[command(subcommand)]
        command: ResourceCommands,
    },
    /// Create a batch of sample records.
    Seed {
        /// Number of courses to create.
        #[arg(long, default_value_t = 10)]
        courses: usize,
        /// Number of students to create.
        #[arg(long, default_value_t = 10)]
        students: usize,
    },
    /// Check server liveness.
    Health,
}

#[derive(Subcommand)]
enum ResourceCommands {
    /// List records, optionally filtered by exact id or name.
    List {
        #[arg(long)]
        id: Option<i64>,
        #[arg(long)]
        name: Option<String>,
    },
    /// Fetch a single record by id.
    Get { id: i64 },
    /// Create a record.
    Create { name: String },
    /// Replace a record's name.
    Update { id: i64, name: String },
    /// Delete a record.
    Delete { id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = Client::new();
    let base = cli.server.trim_end_matches('/').to_string();

    match cli.command {
        Commands::Courses { command } => run_resource(&client, &base, "courses", command).await,
        Commands::Students { command } => run_resource(&client, &base, "students", command).await,
        Commands::Seed { courses, students } => seed(&client, &base, courses, students).await,
        Commands::Health => health(&client, &base).await,
    }
}

async fn run_resource(
    client: &Client,
    base: &str,
    resource: &str,
    command: ResourceCommands,
) -> Result<()> {
    match command {
        ResourceCommands::List { id, name } => {
            let mut request = client.get(format!("{base}/api/v1/{resource}/"));
            if let Some(id) = id {
                request = request.query(&[("id", id.to_string())]);
            }
            if let Some(name) = name {
                request = request.query(&[("name", name)]);
            }
            let response = request.send().await.context("request failed")?;
            print_json_response(response).await
        }
        ResourceCommands::Get { id } => {
            let response = client
                .get(format!("{base}/api/v1/{resource}/{id}/"))
                .send()
                .await
                .context("request failed")?;
            print_json_response(response).await
        }
        ResourceCommands::Create { name } => {
            let response = client
                .post(format!("{base}/api/v1/{resource}/"))
                .json(&json!({ "name": name }))
                .send()
                .await
                .context("request failed")?;
            print_json_response(response).await
        }
        ResourceCommands::Update { id, name } => {
            let response = client
                .put(format!("{base}/api/v1/{resource}/{id}/"))
                .json(&json!({ "name": name }))
                .send()
                .await
                .context("request failed")?;
            print_json_response(response).await
        }
        ResourceCommands::Delete { id } => {
            let response = client
                .delete(format!("{base}/api/v1/{resource}/{id}/"))
                .send()
                .await
                .context("request failed")?;
            let status = response.status();
            if status != StatusCode::NO_CONTENT {
                bail_with_detail(status, response).await?;
            }
            println!("deleted {resource}/{id}");
            Ok(())
        }
    }
}

async fn seed(client: &Client, base: &str, courses: usize, students: usize) -> Result<()> {
    for i in 1..=courses {
        let response = client
            .post(format!("{base}/api/v1/courses/"))
            .json(&json!({ "name": format!("Course {i}") }))
            .send()
            .await
            .context("request failed")?;
        if response.status() != StatusCode::CREATED {
            bail_with_detail(response.status(), response).await?;
        }
    }
    for i in 1..=students {
        let response = client
            .post(format!("{base}/api/v1/students/"))
            .json(&json!({ "name": format!("Student {i}") }))
            .send()
            .await
            .context("request failed")?;
        if response.status() != StatusCode::CREATED {
            bail_with_detail(response.status(), response).await?;
        }
    }
    println!("seeded {courses} courses, {students} students");
    Ok(())
}

async fn health(client: &Client, base: &str) -> Result<()> {
    let response = client
        .get(format!("{base}/health"))
        .send()
        .await
        .context("request failed")?;
    print_json_response(response).await
}

async fn print_json_response(response: reqwest::Response) -> Result<()> {
    let status = response.status();
    if !status.is_success() {
        return bail_with_detail(status, response).await;
    }
    let value: Value = response.json().await.context("invalid JSON response")?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

async fn bail_with_detail(status: StatusCode, response: reqwest::Response) -> Result<()> {
    let detail = response
        .json::<Value>()
        .await
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
        .unwrap_or_else(|| "no detail".to_string());
    bail!("server returned {status}: {detail}");
}
