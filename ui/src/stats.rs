//! Derived dashboard counts.

use payloads::{Book, BorrowRecord, Role, User};

/// Summary numbers shown on the admin dashboard. Derived, never stored:
/// recomputed from the authoritative lists at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LibraryStats {
    pub total_users: usize,
    pub total_admins: usize,
    pub total_books: usize,
    pub total_borrowed: usize,
    pub total_returned: usize,
}

impl LibraryStats {
    /// Pure recount over the current lists. A missing return date marks
    /// a borrowal as still out.
    pub fn derive(
        users: &[User],
        books: &[Book],
        records: &[BorrowRecord],
    ) -> Self {
        let total_admins =
            users.iter().filter(|user| user.role == Role::Admin).count();
        let total_borrowed = records
            .iter()
            .filter(|record| record.return_date.is_none())
            .count();

        Self {
            total_users: users.len() - total_admins,
            total_admins,
            total_books: books.len(),
            total_borrowed,
            total_returned: records.len() - total_borrowed,
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use payloads::{BookId, BorrowId, UserId};
    use rust_decimal::Decimal;

    use super::*;

    fn user(id: &str, role: Role) -> User {
        User {
            id: UserId(id.into()),
            name: id.into(),
            email: format!("{id}@example.com"),
            role,
            avatar: None,
        }
    }

    fn book(id: &str) -> Book {
        Book {
            id: BookId(id.into()),
            title: id.into(),
            author: "someone".into(),
            description: String::new(),
            price: Decimal::new(999, 2),
            quantity: 1,
            availability: true,
        }
    }

    fn borrowal(id: &str, returned: bool) -> BorrowRecord {
        BorrowRecord {
            id: BorrowId(id.into()),
            book: BookId("b".into()),
            book_title: "b".into(),
            user_name: "ada".into(),
            email: "ada@example.com".into(),
            due_date: Timestamp::UNIX_EPOCH,
            return_date: returned.then_some(Timestamp::UNIX_EPOCH),
        }
    }

    #[test]
    fn empty_lists_count_to_zero() {
        assert_eq!(LibraryStats::derive(&[], &[], &[]), LibraryStats::default());
    }

    #[test]
    fn counts_split_by_role_and_return_date() {
        let users = vec![
            user("a", Role::User),
            user("b", Role::User),
            user("c", Role::User),
            user("d", Role::Admin),
            user("e", Role::Admin),
        ];
        let books: Vec<Book> =
            ["1", "2", "3", "4", "5"].iter().map(|id| book(id)).collect();
        let records = vec![
            borrowal("r1", false),
            borrowal("r2", false),
            borrowal("r3", true),
        ];

        let stats = LibraryStats::derive(&users, &books, &records);
        assert_eq!(stats.total_users, 3);
        assert_eq!(stats.total_admins, 2);
        assert_eq!(stats.total_books, 5);
        assert_eq!(stats.total_borrowed, 2);
        assert_eq!(stats.total_returned, 1);
    }

    #[test]
    fn derivation_is_idempotent_and_leaves_inputs_alone() {
        let users = vec![user("a", Role::User)];
        let records = vec![borrowal("r1", false)];

        let first = LibraryStats::derive(&users, &[], &records);
        let second = LibraryStats::derive(&users, &[], &records);
        assert_eq!(first, second);
        assert_eq!(users.len(), 1);
        assert_eq!(records.len(), 1);
    }
}
