//! Demo fixtures: three customers and four orders covering the interesting
//! eligibility cases (plain items, a large item, a hazardous item). Enabled
//! at startup with `SEED_DEMO_DATA=true`; skipped when the data is already
//! present.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{Duration, Utc};
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::infrastructure::models::{NewCustomerRow, NewOrderItemRow, NewOrderRow};
use crate::schema::{customers, order_items, orders};

struct ItemSpec {
    product_id: &'static str,
    name: &'static str,
    description: &'static str,
    sku: &'static str,
    quantity: i32,
    unit_price: &'static str,
    category: &'static str,
    large: bool,
    hazardous: bool,
}

fn price(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).expect("valid demo price")
}

fn insert_customer(
    conn: &mut PgConnection,
    customer_id: &str,
    first: &str,
    last: &str,
    email: &str,
    phone: &str,
) -> Result<i64, DomainError> {
    let id = diesel::insert_into(customers::table)
        .values(&NewCustomerRow {
            customer_id: customer_id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            phone: Some(phone.to_string()),
        })
        .returning(customers::id)
        .get_result(conn)?;
    Ok(id)
}

fn insert_order(
    conn: &mut PgConnection,
    order_number: &str,
    customer_id: i64,
    total: &str,
    age_days: i64,
    items: &[ItemSpec],
) -> Result<(), DomainError> {
    let order_id: i64 = diesel::insert_into(orders::table)
        .values(&NewOrderRow {
            order_number: order_number.to_string(),
            customer_id,
            status: "COMPLETED".to_string(),
            total_amount: price(total),
            order_date: Utc::now() - Duration::days(age_days),
        })
        .returning(orders::id)
        .get_result(conn)?;

    let rows: Vec<NewOrderItemRow> = items
        .iter()
        .map(|i| NewOrderItemRow {
            order_id,
            product_id: i.product_id.to_string(),
            product_name: i.name.to_string(),
            product_description: Some(i.description.to_string()),
            sku: i.sku.to_string(),
            quantity: i.quantity,
            unit_price: price(i.unit_price),
            total_price: price(i.unit_price) * BigDecimal::from(i.quantity),
            category: Some(i.category.to_string()),
            is_large_item: i.large,
            is_hazardous: i.hazardous,
        })
        .collect();
    diesel::insert_into(order_items::table)
        .values(&rows)
        .execute(conn)?;

    Ok(())
}

pub fn seed_demo_data(pool: &DbPool) -> Result<(), DomainError> {
    let mut conn = pool.get()?;

    let already_seeded: i64 = customers::table
        .filter(customers::customer_id.eq("CUST001"))
        .count()
        .get_result(&mut conn)?;
    if already_seeded > 0 {
        log::info!("Demo data already present, skipping seed");
        return Ok(());
    }

    conn.transaction::<_, DomainError, _>(|conn| {
        let cust1 = insert_customer(
            conn,
            "CUST001",
            "John",
            "Doe",
            "john.doe@email.com",
            "+1-555-0123",
        )?;
        let cust2 = insert_customer(
            conn,
            "CUST002",
            "Jane",
            "Smith",
            "jane.smith@email.com",
            "+1-555-0456",
        )?;
        let cust3 = insert_customer(
            conn,
            "CUST003",
            "Bob",
            "Johnson",
            "bob.johnson@email.com",
            "+1-555-0789",
        )?;

        insert_order(
            conn,
            "ORD-2024-001",
            cust1,
            "299.99",
            30,
            &[
                ItemSpec {
                    product_id: "PROD001",
                    name: "Cordless Drill",
                    description: "20V MAX Cordless Drill/Driver Kit",
                    sku: "DW-20V-DRILL",
                    quantity: 1,
                    unit_price: "199.99",
                    category: "TOOLS",
                    large: false,
                    hazardous: false,
                },
                ItemSpec {
                    product_id: "PROD002",
                    name: "Screwdriver Set",
                    description: "32-Piece Screwdriver Set",
                    sku: "SD-32PC-SET",
                    quantity: 1,
                    unit_price: "49.99",
                    category: "TOOLS",
                    large: false,
                    hazardous: false,
                },
                ItemSpec {
                    product_id: "PROD003",
                    name: "Safety Glasses",
                    description: "Clear Safety Glasses",
                    sku: "SG-CLEAR",
                    quantity: 2,
                    unit_price: "24.99",
                    category: "SAFETY",
                    large: false,
                    hazardous: false,
                },
            ],
        )?;

        // Contains a large item: not returnable through self-service.
        insert_order(
            conn,
            "ORD-2024-002",
            cust2,
            "1299.99",
            15,
            &[
                ItemSpec {
                    product_id: "PROD004",
                    name: "Lawn Mower",
                    description: "21-Inch Self-Propelled Lawn Mower",
                    sku: "LM-21IN-SELF",
                    quantity: 1,
                    unit_price: "399.99",
                    category: "GARDEN",
                    large: true,
                    hazardous: false,
                },
                ItemSpec {
                    product_id: "PROD005",
                    name: "Garden Hose",
                    description: "50-Foot Professional Garden Hose",
                    sku: "GH-50FT-PRO",
                    quantity: 1,
                    unit_price: "39.99",
                    category: "GARDEN",
                    large: false,
                    hazardous: false,
                },
            ],
        )?;

        // Contains a hazardous item.
        insert_order(
            conn,
            "ORD-2024-003",
            cust3,
            "89.99",
            7,
            &[
                ItemSpec {
                    product_id: "PROD006",
                    name: "Paint Thinner",
                    description: "1-Gallon Paint Thinner",
                    sku: "PT-1GAL",
                    quantity: 2,
                    unit_price: "29.99",
                    category: "PAINT",
                    large: false,
                    hazardous: true,
                },
                ItemSpec {
                    product_id: "PROD007",
                    name: "Paint Brush Set",
                    description: "5-Piece Paint Brush Set",
                    sku: "PB-5PC-SET",
                    quantity: 1,
                    unit_price: "29.99",
                    category: "PAINT",
                    large: false,
                    hazardous: false,
                },
            ],
        )?;

        // Everything eligible.
        insert_order(
            conn,
            "ORD-2024-004",
            cust1,
            "159.97",
            5,
            &[
                ItemSpec {
                    product_id: "PROD008",
                    name: "LED Light Bulbs",
                    description: "4-Pack A19 LED Light Bulbs",
                    sku: "LED-A19-4PK",
                    quantity: 1,
                    unit_price: "19.99",
                    category: "LIGHTING",
                    large: false,
                    hazardous: false,
                },
                ItemSpec {
                    product_id: "PROD009",
                    name: "Door Handle",
                    description: "Brushed Nickel Door Handle",
                    sku: "DH-BRUSHED-NICKEL",
                    quantity: 1,
                    unit_price: "39.99",
                    category: "HARDWARE",
                    large: false,
                    hazardous: false,
                },
                ItemSpec {
                    product_id: "PROD010",
                    name: "Electrical Outlet",
                    description: "GFCI Electrical Outlet",
                    sku: "EO-GFCI-WHITE",
                    quantity: 2,
                    unit_price: "49.99",
                    category: "ELECTRICAL",
                    large: false,
                    hazardous: false,
                },
            ],
        )?;

        Ok(())
    })?;

    log::info!("Demo data seeded");
    Ok(())
}
