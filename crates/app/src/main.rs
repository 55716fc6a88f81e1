//! Bookery catalog seeding CLI

use std::process;

use clap::{Args, Parser, Subcommand};

use bookery_app::{
    database::{self, Db},
    domain::catalog::{
        CatalogService, PgCatalogService,
        models::{CategoryKind, NewBook, NewCategory},
    },
};

#[derive(Debug, Parser)]
#[command(name = "bookery-app", about = "Bookery CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Category(CategoryCommand),
    Book(BookCommand),
}

#[derive(Debug, Args)]
struct CategoryCommand {
    #[command(subcommand)]
    command: CategorySubcommand,
}

#[derive(Debug, Subcommand)]
enum CategorySubcommand {
    Create(CreateCategoryArgs),
}

#[derive(Debug, Args)]
struct CreateCategoryArgs {
    /// Category kind: main, book, or special
    #[arg(long)]
    kind: String,

    /// Category title
    #[arg(long)]
    title: String,

    /// Optional slug; generated from the title when omitted
    #[arg(long)]
    slug: Option<String>,

    /// Slug of the owning main category (book kind only)
    #[arg(long)]
    main_category: Option<String>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[derive(Debug, Args)]
struct BookCommand {
    #[command(subcommand)]
    command: BookSubcommand,
}

#[derive(Debug, Subcommand)]
enum BookSubcommand {
    Create(CreateBookArgs),
}

#[derive(Debug, Args)]
struct CreateBookArgs {
    /// Book title
    #[arg(long)]
    title: String,

    /// Price in cents
    #[arg(long)]
    price: u64,

    /// Optional slug; generated from the title when omitted
    #[arg(long)]
    slug: Option<String>,

    /// Optional image path
    #[arg(long)]
    image: Option<String>,

    /// Description text
    #[arg(long, default_value = "")]
    info: String,

    /// Slugs of book/special categories; repeatable
    #[arg(long = "category")]
    categories: Vec<String>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Category(CategoryCommand {
            command: CategorySubcommand::Create(args),
        }) => create_category(args).await,
        Commands::Book(BookCommand {
            command: BookSubcommand::Create(args),
        }) => create_book(args).await,
    }
}

fn parse_kind(kind: &str) -> Result<CategoryKind, String> {
    match kind {
        "main" => Ok(CategoryKind::Main),
        "book" => Ok(CategoryKind::Book),
        "special" => Ok(CategoryKind::Special),
        other => Err(format!("unknown category kind: {other}")),
    }
}

async fn catalog_service(database_url: &str) -> Result<PgCatalogService, String> {
    let pool = database::connect(database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    Ok(PgCatalogService::new(Db::new(pool)))
}

async fn create_category(args: CreateCategoryArgs) -> Result<(), String> {
    let service = catalog_service(&args.database_url).await?;
    let kind = parse_kind(&args.kind)?;

    let category = service
        .create_category(NewCategory {
            kind,
            title: args.title,
            slug: args.slug,
            main_category: args.main_category,
        })
        .await
        .map_err(|error| format!("failed to create category: {error}"))?;

    println!("category_uuid: {}", category.uuid);
    println!("category_slug: {}", category.slug);

    Ok(())
}

async fn create_book(args: CreateBookArgs) -> Result<(), String> {
    let service = catalog_service(&args.database_url).await?;

    let book = service
        .create_book(NewBook {
            title: args.title,
            slug: args.slug,
            image: args.image,
            info: args.info,
            price: args.price,
            categories: args.categories,
        })
        .await
        .map_err(|error| format!("failed to create book: {error}"))?;

    println!("book_uuid: {}", book.uuid);
    println!("book_slug: {}", book.slug);

    Ok(())
}
