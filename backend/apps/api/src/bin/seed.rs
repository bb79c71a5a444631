//! Development Data Seeder
//!
//! Wipes products and categories, then inserts the sample fixtures and
//! a default admin account. Run with `cargo run --bin seed`.

use auth::application::register::{RegisterInput, RegisterUseCase};
use auth::domain::repository::UserRepository;
use auth::domain::value_object::{email::Email, user_role::UserRole};
use auth::{AuthConfig, PgUserRepository};
use catalog::PgCatalogRepository;
use catalog::application::{CreateCategoryUseCase, CreateProductUseCase};
use catalog::domain::entity::category::NewCategory;
use catalog::domain::entity::product::NewProduct;
use kernel::id::CategoryId;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct ProductFixture {
    name: &'static str,
    description: &'static str,
    price: &'static str,
    stock: i32,
    category: usize,
}

const CATEGORIES: &[(&str, &str)] = &[
    ("Electronics", "Electronic devices and gadgets"),
    ("Clothing", "Apparel and fashion items"),
    ("Books", "Physical and digital books"),
    ("Home & Garden", "Home improvement and garden supplies"),
    ("Sports", "Sports equipment and accessories"),
];

const PRODUCTS: &[ProductFixture] = &[
    ProductFixture {
        name: "Laptop Pro 15\"",
        description: "High-performance laptop with 16GB RAM and 512GB SSD",
        price: "1299.99",
        stock: 25,
        category: 0,
    },
    ProductFixture {
        name: "Wireless Mouse",
        description: "Ergonomic wireless mouse with precision tracking",
        price: "29.99",
        stock: 100,
        category: 0,
    },
    ProductFixture {
        name: "USB-C Hub",
        description: "7-in-1 USB-C hub with HDMI and SD card reader",
        price: "49.99",
        stock: 50,
        category: 0,
    },
    ProductFixture {
        name: "Cotton T-Shirt",
        description: "100% organic cotton comfortable t-shirt",
        price: "19.99",
        stock: 200,
        category: 1,
    },
    ProductFixture {
        name: "Denim Jeans",
        description: "Classic fit denim jeans",
        price: "59.99",
        stock: 80,
        category: 1,
    },
    ProductFixture {
        name: "Winter Jacket",
        description: "Warm winter jacket with waterproof exterior",
        price: "129.99",
        stock: 40,
        category: 1,
    },
    ProductFixture {
        name: "The Art of Programming",
        description: "Comprehensive guide to software development",
        price: "45.99",
        stock: 60,
        category: 2,
    },
    ProductFixture {
        name: "Cooking Masterclass",
        description: "Learn professional cooking techniques",
        price: "34.99",
        stock: 35,
        category: 2,
    },
    ProductFixture {
        name: "Garden Tool Set",
        description: "10-piece essential garden tool kit",
        price: "79.99",
        stock: 30,
        category: 3,
    },
    ProductFixture {
        name: "LED Desk Lamp",
        description: "Adjustable LED lamp with touch controls",
        price: "39.99",
        stock: 75,
        category: 3,
    },
    ProductFixture {
        name: "Yoga Mat",
        description: "Non-slip yoga mat with carrying strap",
        price: "24.99",
        stock: 120,
        category: 4,
    },
    ProductFixture {
        name: "Adjustable Dumbbells",
        description: "Set of adjustable dumbbells up to 50lbs",
        price: "149.99",
        stock: 20,
        category: 4,
    },
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await?;

    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Seeding database");

    // Products first, they carry the foreign key
    sqlx::query("DELETE FROM products").execute(&pool).await?;
    sqlx::query("DELETE FROM categories").execute(&pool).await?;

    let catalog_repo = Arc::new(PgCatalogRepository::new(pool.clone()));
    let create_category = CreateCategoryUseCase::new(catalog_repo.clone());
    let create_product = CreateProductUseCase::new(catalog_repo.clone());

    let mut category_ids: Vec<CategoryId> = Vec::with_capacity(CATEGORIES.len());
    for (name, description) in CATEGORIES {
        let category = create_category
            .execute(NewCategory {
                name: (*name).to_string(),
                description: Some((*description).to_string()),
                is_active: true,
            })
            .await?;
        category_ids.push(category.category_id);
    }
    tracing::info!(count = CATEGORIES.len(), "Categories created");

    for fixture in PRODUCTS {
        create_product
            .execute(NewProduct {
                name: fixture.name.to_string(),
                description: Some(fixture.description.to_string()),
                price: fixture.price.parse()?,
                stock: fixture.stock,
                category_id: Some(category_ids[fixture.category]),
                is_active: true,
            })
            .await?;
    }
    tracing::info!(count = PRODUCTS.len(), "Products created");

    // Default admin account, created only when absent
    let admin_email = env::var("SEED_ADMIN_EMAIL").unwrap_or_else(|_| "admin@example.com".into());
    let admin_password =
        env::var("SEED_ADMIN_PASSWORD").unwrap_or_else(|_| "ChangeMe#2024".into());

    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let email = Email::new(admin_email)?;
    if user_repo.exists_by_email(&email).await? {
        tracing::info!("Admin account already present");
    } else {
        let register = RegisterUseCase::new(user_repo, Arc::new(AuthConfig::default()));
        register
            .execute(RegisterInput {
                email,
                password: admin_password,
                role: Some(UserRole::Admin),
            })
            .await?;
        tracing::info!("Admin account created");
    }

    tracing::info!("Database seeding completed");

    Ok(())
}
