use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::storage::StorageError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    /// Current password.
    pub password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// `{"success": true, "detail": "..."}` acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub detail: String,
}

/// Bearer credentials issued by `POST /api/auth/login/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
    /// Present only when the backend rotates refresh tokens.
    #[serde(default)]
    pub refresh: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    MissingRefreshToken,
    Refreshed(String),
    Rejected(u16),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Subdomain of the garage (tenant) the user belongs to.
    #[serde(default)]
    pub garage: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// DRF list envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }
}

impl<T> Paginated<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

pub const MAX_PAGE_LIMIT: u32 = 100;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ListQuery {
    pub fn page(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit.clamp(1, MAX_PAGE_LIMIT)),
            offset: Some(offset),
            search: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EmployeeRole {
    Tech,
    Advisor,
    Admin,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EmployeeQuery {
    #[serde(rename = "q", skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<EmployeeRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub vehicle_count: i64,
    #[serde(default)]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerVehicle {
    pub id: i64,
    pub registration_number: String,
    pub make: String,
    pub model: String,
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDetail {
    #[serde(flatten)]
    pub customer: Customer,
    #[serde(default)]
    pub vehicles: Vec<CustomerVehicle>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: EmployeeRole,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GarageType {
    AutoRepair,
    BodyShop,
    MultiService,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Garage {
    pub id: i64,
    pub name: String,
    pub subdomain: String,
    pub registration_number: String,
    pub tax_pan_number: String,
    pub garage_type: GarageType,
    pub street_address: String,
    pub city: String,
    pub postal_code: String,
    pub phone_number: String,
    pub email_address: String,
    #[serde(default)]
    pub working_hours: Option<BTreeMap<String, String>>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarageCreate {
    pub name: String,
    pub subdomain: String,
    pub registration_number: String,
    pub tax_pan_number: String,
    pub garage_type: GarageType,
    pub street_address: String,
    pub city: String,
    pub postal_code: String,
    pub phone_number: String,
    pub email_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<BTreeMap<String, String>>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub labor_rate: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub labor_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleOwner {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub registration_number: String,
    pub make: String,
    pub model: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub odometer_reading: i64,
    pub fuel_type: FuelType,
    pub owner: VehicleOwner,
    #[serde(default)]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleCreate {
    pub registration_number: String,
    pub make: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub odometer_reading: i64,
    pub fuel_type: FuelType,
    pub owner_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    InProgress,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::InProgress => "In Progress",
            Self::Confirmed => "Confirmed",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentCustomer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentVehicle {
    pub id: i64,
    pub registration_number: String,
    pub make: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentMechanic {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub customer: AppointmentCustomer,
    pub vehicle: AppointmentVehicle,
    #[serde(default)]
    pub mechanic: Option<AppointmentMechanic>,
    pub service: Service,
    pub appointment_date: DateTime<Utc>,
    /// Display label as rendered by the backend ("In Progress").
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentCreate {
    pub customer_id: i64,
    pub vehicle_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mechanic_id: Option<i64>,
    pub service_id: i64,
    pub appointment_date: DateTime<Utc>,
    pub status: AppointmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub phone_number: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone_number: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub id: i64,
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub image: Option<String>,
    pub purchase_price: f64,
    pub selling_price: f64,
    #[serde(default)]
    pub quantity: i64,
    pub category: Category,
    pub supplier: Supplier,
    pub in_stock: bool,
    pub in_low_stock: bool,
    pub is_out_of_stock: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartCreate {
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub brand: String,
    pub purchase_price: f64,
    pub selling_price: f64,
    pub quantity: i64,
    pub category_id: i64,
    pub supplier_id: i64,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl From<StorageError> for ApiError {
    fn from(error: StorageError) -> Self {
        Self {
            error: error.to_string(),
            code: "STORAGE_ERROR".to_string(),
            status: None,
            details: None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        Self::request_failed(format!("Request failed: {}", error))
    }
}

const NON_FIELD_ERRORS: &str = "non_field_errors";

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            status: None,
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            status: None,
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            status: None,
            details: None,
        }
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNAUTHORIZED".to_string(),
            status: Some(StatusCode::UNAUTHORIZED.as_u16()),
            details: None,
        }
    }

    /// Builds an error from a non-success DRF response.
    ///
    /// The message prefers `non_field_errors` (joined), then `detail`, then
    /// the wrapper's `message`. Field errors stay in `details`.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let fallback = format!("Request failed with status {}", status.as_u16());
        let code = status_code_name(status).to_string();
        let value: Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(_) => {
                return Self {
                    error: fallback,
                    code,
                    status: Some(status.as_u16()),
                    details: None,
                }
            }
        };

        let payload = value
            .get("errors")
            .filter(|errors| errors.is_object())
            .unwrap_or(&value);

        let message = payload
            .get(NON_FIELD_ERRORS)
            .and_then(join_messages)
            .or_else(|| payload.get("detail").and_then(join_messages))
            .or_else(|| value.get("message").and_then(join_messages))
            .unwrap_or(fallback);

        Self {
            error: message,
            code,
            status: Some(status.as_u16()),
            details: payload.is_object().then(|| payload.clone()),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(StatusCode::UNAUTHORIZED.as_u16())
    }

    /// Server-side validation messages keyed by form field.
    pub fn field_errors(&self) -> BTreeMap<String, Vec<String>> {
        let Some(Value::Object(map)) = &self.details else {
            return BTreeMap::new();
        };
        map.iter()
            .filter(|(field, _)| field.as_str() != NON_FIELD_ERRORS && field.as_str() != "detail")
            .filter_map(|(field, value)| {
                let messages = messages_of(value);
                (!messages.is_empty()).then(|| (field.clone(), messages))
            })
            .collect()
    }
}

fn status_code_name(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "BAD_REQUEST",
        StatusCode::UNAUTHORIZED => "UNAUTHORIZED",
        StatusCode::FORBIDDEN => "FORBIDDEN",
        StatusCode::NOT_FOUND => "NOT_FOUND",
        StatusCode::CONFLICT => "CONFLICT",
        s if s.is_server_error() => "SERVER_ERROR",
        _ => "HTTP_ERROR",
    }
}

fn messages_of(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// One sentence per DRF message, separated by a single space.
fn join_messages(value: &Value) -> Option<String> {
    let messages: Vec<String> = messages_of(value)
        .iter()
        .map(|message| message.trim())
        .filter(|message| !message.is_empty())
        .map(str::to_string)
        .collect();
    (!messages.is_empty()).then(|| messages.join(" "))
}
