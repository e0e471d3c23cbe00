use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

use gatekeeper::modules::auth::service::AuthService;
use gatekeeper_cli::admin::{self, CliError};

#[derive(Parser)]
#[command(name = "gatekeeper-cli")]
#[command(about = "Gatekeeper CLI - Administrative tools for Gatekeeper", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a user with the ADMIN role
    CreateAdmin {
        /// Display name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Create a permission code
    CreatePermission {
        code: String,
    },
    /// Grant permission codes to a user by name
    Grant {
        /// User name
        name: String,

        /// Permission codes; unknown codes are skipped
        #[arg(required = true)]
        codes: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let pool = match gatekeeper_db::init_db_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = gatekeeper_db::run_migrations(&pool).await {
        eprintln!("❌ Failed to run migrations: {}", e);
        std::process::exit(1);
    }

    let service = admin::auth_service(pool);

    let result = match cli.command {
        Commands::CreateAdmin {
            name,
            email,
            password,
        } => handle_create_admin(&service, name, email, password).await,
        Commands::CreatePermission { code } => handle_create_permission(&service, &code).await,
        Commands::Grant { name, codes } => handle_grant(&service, &name, &codes).await,
    };

    if let Err(e) = result {
        eprintln!("\n❌ {}", e);
        std::process::exit(1);
    }
}

fn prompt_text(prompt: &str) -> String {
    match Input::new().with_prompt(prompt).interact_text() {
        Ok(value) => value,
        Err(e) => {
            eprintln!("❌ Failed to read {}: {}", prompt.to_lowercase(), e);
            std::process::exit(1);
        }
    }
}

async fn handle_create_admin(
    service: &AuthService,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> Result<(), CliError> {
    let name = name.unwrap_or_else(|| prompt_text("Name"));
    let email = email.unwrap_or_else(|| prompt_text("Email address"));
    let password = password.unwrap_or_else(|| {
        match Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
        {
            Ok(password) => password,
            Err(e) => {
                eprintln!("❌ Failed to read password: {}", e);
                std::process::exit(1);
            }
        }
    });

    admin::create_admin(service, &name, &email, &password).await?;

    println!("\n✅ Admin created successfully!");
    println!("   Email: {}", email);
    println!("   Name: {}", name);
    Ok(())
}

async fn handle_create_permission(service: &AuthService, code: &str) -> Result<(), CliError> {
    let permission = admin::create_permission(service, code).await?;
    println!("✅ Permission '{}' created ({})", permission.code, permission.id);
    Ok(())
}

async fn handle_grant(service: &AuthService, name: &str, codes: &[String]) -> Result<(), CliError> {
    admin::grant_permissions(service, name, codes).await?;
    println!("✅ Granted {} to '{}' (unknown codes skipped)", codes.join(", "), name);
    Ok(())
}
