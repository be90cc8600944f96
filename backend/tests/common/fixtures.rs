//! Request payloads for resource tests

#![allow(dead_code)]

use serde_json::{json, Value};

/// A complete create request body
pub fn create_body(title: &str, category: &str) -> Value {
    json!({
        "title": title,
        "description": "Solved examples for every unit",
        "category": category,
        "subject": "Mathematics",
        "semester": "Semester 1",
        "fileUrl": "/files/calculus.pdf",
        "fileSize": "1.2 MB"
    })
}

/// Create request body with the given field removed
pub fn create_body_without(field: &str) -> Value {
    let mut body = create_body("Calculus Notes", "notes");
    if let Some(map) = body.as_object_mut() {
        map.remove(field);
    }
    body
}
