//! Canonical DTOs for every backend entity
//!
//! One shape per entity, shared by every consuming view, instead of
//! per-page field coalescing over loosely typed JSON.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::export::CsvRecord;
use crate::list::Searchable;

/// A school branch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_name: Option<String>,
    pub active: bool,
}

/// A coach employed at a branch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coach {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub branch_id: String,
    pub specialty: String,
    pub active: bool,
}

/// A course taught at a branch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub description: String,
    pub branch_id: String,
    pub coach_id: String,
    /// Human-readable schedule, e.g. "Mon/Wed 18:00"
    pub schedule: String,
    pub monthly_fee: f64,
    pub capacity: u32,
}

/// An enrolled student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub branch_id: String,
    pub belt_rank: String,
    pub enrolled_at: NaiveDate,
    pub active: bool,
}

/// A tuition payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub student_id: String,
    pub amount: f64,
    pub method: String,
    pub status: String,
    pub paid_at: DateTime<Utc>,
}

/// One attendance mark for a student in a course session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub student_id: String,
    pub course_id: String,
    pub date: NaiveDate,
    pub present: bool,
}

/// Aggregate figures for the reports dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_branches: u32,
    pub total_coaches: u32,
    pub total_students: u32,
    pub active_students: u32,
    pub monthly_revenue: f64,
    pub outstanding_payments: f64,
}

/// Revenue for one calendar month, e.g. `month = "2026-08"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub month: String,
    pub revenue: f64,
}

impl Searchable for Branch {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.address, &self.city, &self.email]
    }
}

impl Searchable for Coach {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.full_name, &self.email, &self.phone, &self.specialty]
    }
}

impl Searchable for Course {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.description, &self.schedule]
    }
}

impl Searchable for Student {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.full_name, &self.email, &self.phone, &self.belt_rank]
    }
}

impl Searchable for Payment {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.student_id, &self.method, &self.status]
    }
}

impl CsvRecord for Branch {
    fn csv_headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Address", "City", "Phone", "Email", "Manager", "Active"]
    }

    fn csv_record(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.address.clone(),
            self.city.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.manager_name.clone().unwrap_or_default(),
            self.active.to_string(),
        ]
    }
}

impl CsvRecord for Coach {
    fn csv_headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Email", "Phone", "Branch", "Specialty", "Active"]
    }

    fn csv_record(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.full_name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.branch_id.clone(),
            self.specialty.clone(),
            self.active.to_string(),
        ]
    }
}

impl CsvRecord for Student {
    fn csv_headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Email", "Phone", "Branch", "Belt", "Enrolled", "Active"]
    }

    fn csv_record(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.full_name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.branch_id.clone(),
            self.belt_rank.clone(),
            self.enrolled_at.to_string(),
            self.active.to_string(),
        ]
    }
}

impl CsvRecord for Payment {
    fn csv_headers() -> Vec<&'static str> {
        vec!["ID", "Student", "Amount", "Method", "Status", "Paid At"]
    }

    fn csv_record(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.student_id.clone(),
            format!("{:.2}", self.amount),
            self.method.clone(),
            self.status.clone(),
            self.paid_at.to_rfc3339(),
        ]
    }
}
