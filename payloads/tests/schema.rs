//! The backend is MongoDB-backed JSON; these fixtures pin the wire shapes
//! the typed schemas must accept.

use payloads::{Role, responses};
use rust_decimal::Decimal;

#[test]
fn books_response_decodes() {
    let body = r#"{
        "success": true,
        "books": [
            {
                "_id": "66a0f1c2d4e5f60718293a4b",
                "title": "The Rust Programming Language",
                "author": "Klabnik & Nichols",
                "description": "The book.",
                "price": 39.99,
                "quantity": 4,
                "availability": true
            }
        ]
    }"#;
    let parsed: responses::Books = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.books.len(), 1);
    let book = &parsed.books[0];
    assert_eq!(book.id.0, "66a0f1c2d4e5f60718293a4b");
    assert_eq!(book.price, Decimal::new(3999, 2));
    assert!(book.availability);
}

#[test]
fn borrowed_books_keep_null_return_dates() {
    let body = r#"{
        "borrowedBooks": [
            {
                "_id": "66a0f1c2d4e5f60718293a4c",
                "book": "66a0f1c2d4e5f60718293a4b",
                "bookTitle": "The Rust Programming Language",
                "userName": "Ada",
                "email": "ada@example.com",
                "dueDate": "2026-08-20T00:00:00Z",
                "returnDate": null
            },
            {
                "_id": "66a0f1c2d4e5f60718293a4d",
                "book": "66a0f1c2d4e5f60718293a4b",
                "bookTitle": "The Rust Programming Language",
                "userName": "Grace",
                "email": "grace@example.com",
                "dueDate": "2026-07-01T00:00:00Z",
                "returnDate": "2026-06-28T12:30:00Z"
            }
        ]
    }"#;
    let parsed: responses::BorrowedBooks = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.borrowed_books.len(), 2);
    assert!(!parsed.borrowed_books[0].is_returned());
    assert!(parsed.borrowed_books[1].is_returned());
}

#[test]
fn users_response_decodes_roles_and_optional_avatar() {
    let body = r#"{
        "users": [
            {
                "_id": "66a0f1c2d4e5f60718293a4e",
                "name": "Ada",
                "email": "ada@example.com",
                "role": "User"
            },
            {
                "_id": "66a0f1c2d4e5f60718293a4f",
                "name": "Root",
                "email": "root@example.com",
                "role": "Admin",
                "avatar": { "url": "https://cdn.example.com/root.png" }
            }
        ]
    }"#;
    let parsed: responses::Users = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.users[0].role, Role::User);
    assert!(parsed.users[0].avatar.is_none());
    assert!(parsed.users[1].is_admin());
    assert!(parsed.users[1].avatar.is_some());
}

#[test]
fn authenticated_response_carries_message_and_user() {
    let body = r#"{
        "success": true,
        "message": "Logged in successfully.",
        "user": {
            "_id": "66a0f1c2d4e5f60718293a4e",
            "name": "Ada",
            "email": "ada@example.com",
            "role": "User"
        }
    }"#;
    let parsed: responses::Authenticated = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.message, "Logged in successfully.");
    assert_eq!(parsed.user.email, "ada@example.com");
}

#[test]
fn error_bodies_parse_to_message() {
    let body = r#"{ "success": false, "message": "Invalid credentials" }"#;
    let parsed: responses::ErrorMessage = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.message, "Invalid credentials");
}

#[test]
fn error_message_requires_message_field() {
    let body = r#"{ "success": false }"#;
    assert!(serde_json::from_str::<responses::ErrorMessage>(body).is_err());
}
