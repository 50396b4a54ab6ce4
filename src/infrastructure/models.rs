use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::{
    customers, order_items, orders, return_items, return_requests, returns_outbox,
};

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerRow {
    pub id: i64,
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = customers)]
pub struct NewCustomerRow {
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: i64,
    pub order_number: String,
    pub customer_id: i64,
    pub status: String,
    pub total_amount: BigDecimal,
    pub order_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub order_number: String,
    pub customer_id: i64,
    pub status: String,
    pub total_amount: BigDecimal,
    pub order_date: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable, Associations,
)]
#[diesel(table_name = order_items)]
#[diesel(belongs_to(OrderRow, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItemRow {
    pub id: i64,
    pub order_id: i64,
    pub product_id: String,
    pub product_name: String,
    pub product_description: Option<String>,
    pub sku: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub total_price: BigDecimal,
    pub category: Option<String>,
    pub is_large_item: bool,
    pub is_hazardous: bool,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = order_items)]
pub struct NewOrderItemRow {
    pub order_id: i64,
    pub product_id: String,
    pub product_name: String,
    pub product_description: Option<String>,
    pub sku: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub total_price: BigDecimal,
    pub category: Option<String>,
    pub is_large_item: bool,
    pub is_hazardous: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = return_requests)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReturnRequestRow {
    pub id: i64,
    pub rma_number: String,
    pub order_id: i64,
    pub customer_id: i64,
    pub reason: String,
    pub method: String,
    pub status: String,
    pub notes: Option<String>,
    pub tracking_number: Option<String>,
    pub qr_code_data: Option<String>,
    pub qr_code_image: Option<String>,
    pub shipping_label_url: Option<String>,
    pub requested_date: DateTime<Utc>,
    pub processed_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = return_requests)]
pub struct NewReturnRequestRow {
    pub rma_number: String,
    pub order_id: i64,
    pub customer_id: i64,
    pub reason: String,
    pub method: String,
    pub status: String,
    pub notes: Option<String>,
    pub tracking_number: Option<String>,
    pub qr_code_data: Option<String>,
    pub qr_code_image: Option<String>,
    pub shipping_label_url: Option<String>,
    pub requested_date: DateTime<Utc>,
    pub processed_date: Option<DateTime<Utc>>,
}

#[derive(
    Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable, Associations,
)]
#[diesel(table_name = return_items)]
#[diesel(belongs_to(ReturnRequestRow, foreign_key = return_request_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReturnItemRow {
    pub id: i64,
    pub return_request_id: i64,
    pub order_item_id: i64,
    pub quantity_to_return: i32,
    pub condition: Option<String>,
    pub notes: Option<String>,
    pub status: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = return_items)]
pub struct NewReturnItemRow {
    pub return_request_id: i64,
    pub order_item_id: i64,
    pub quantity_to_return: i32,
    pub condition: Option<String>,
    pub notes: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = returns_outbox)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OutboxEventRow {
    pub id: i64,
    pub aggregate_type: String,
    pub aggregate_id: String,
    pub event_type: String,
    pub payload: Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = returns_outbox)]
pub struct NewOutboxEventRow {
    pub aggregate_type: String,
    pub aggregate_id: String,
    pub event_type: String,
    pub payload: Value,
}
