use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "employee-cli")]
#[command(about = "Management CLI for the Employee API facade", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all employees
    List,
    /// Search employees by name substring
    Search { name: String },
    /// Fetch a single employee by id
    Get { id: String },
    /// Show the highest salary
    HighestSalary,
    /// Show the top ten earner names
    TopEarners,
    /// Create a new employee
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        salary: i32,
        #[arg(long)]
        age: i32,
        #[arg(long)]
        title: String,
        #[arg(long)]
        email: String,
    },
    /// Delete an employee by id
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::List => {
            let res = client.get(format!("{}/employee", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Search { name } => {
            let res = client
                .get(format!("{}/employee/search/{}", cli.url, name))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Get { id } => {
            let res = client
                .get(format!("{}/employee/{}", cli.url, id))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::HighestSalary => {
            let res = client
                .get(format!("{}/employee/highestSalary", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::TopEarners => {
            let res = client
                .get(format!("{}/employee/topTenHighestEarningEmployeeNames", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Create {
            name,
            salary,
            age,
            title,
            email,
        } => {
            let body = serde_json::json!({
                "name": name,
                "salary": salary,
                "age": age,
                "title": title,
                "email": email,
            });
            let res = client
                .post(format!("{}/employee", cli.url))
                .json(&body)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Delete { id } => {
            let res = client
                .delete(format!("{}/employee/{}", cli.url, id))
                .send()
                .await?;
            let status = res.status();
            let text = res.text().await?;
            println!("{} {}", status, text);
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    match serde_json::from_str::<Value>(&text) {
        Ok(value) => println!("{} {}", status, serde_json::to_string_pretty(&value)?),
        Err(_) => println!("{} {}", status, text),
    }
    Ok(())
}
