//! Append-only support ticket table backed by sqlite.

use std::path::Path;

use parking_lot::Mutex;
use rusqlite::{params, Connection};

use crate::error::Result;
use crate::models::Ticket;

/// Stored when the user supplied no detail. Ticket creation never fails
/// merely because the description was blank.
pub const DEFAULT_DESCRIPTION: &str = "Problema no especificado por el usuario.";

/// Initial status of every ticket. Transitions are handled elsewhere by
/// the support team's own tooling.
pub const STATUS_OPEN: &str = "Abierto";

/// Ticket store over a single sqlite connection. Identifier assignment is
/// sqlite's own atomic AUTOINCREMENT; the mutex serializes writes from
/// concurrent requests.
pub struct TicketStore {
    conn: Mutex<Connection>,
}

impl TicketStore {
    /// Open (or create) the ticket database at `path` and ensure the
    /// table exists.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS tickets (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                description TEXT NOT NULL,
                status TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Append a ticket and return it with its assigned id. The insert is
    /// committed before this returns; a crash afterwards cannot lose it.
    pub fn create_ticket(&self, description: &str) -> Result<Ticket> {
        let description = normalize_description(description);

        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO tickets (description, status) VALUES (?1, ?2)",
            params![description, STATUS_OPEN],
        )?;
        let id = conn.last_insert_rowid();

        Ok(Ticket {
            id,
            description,
            status: STATUS_OPEN.to_string(),
        })
    }

    /// Fetch a ticket by id.
    pub fn get_ticket(&self, id: i64) -> Result<Option<Ticket>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare("SELECT id, description, status FROM tickets WHERE id = ?1")?;
        let mut rows = stmt.query(params![id])?;

        match rows.next()? {
            Some(row) => Ok(Some(Ticket {
                id: row.get(0)?,
                description: row.get(1)?,
                status: row.get(2)?,
            })),
            None => Ok(None),
        }
    }

    pub fn ticket_count(&self) -> Result<i64> {
        let conn = self.conn.lock();
        let count = conn.query_row("SELECT COUNT(*) FROM tickets", [], |row| row.get(0))?;
        Ok(count)
    }
}

/// Normalization policy: trim, and substitute the fixed placeholder when
/// nothing remains.
fn normalize_description(description: &str) -> String {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        DEFAULT_DESCRIPTION.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_store() -> (tempfile::TempDir, TicketStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = TicketStore::open(&dir.path().join("tickets.db")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_create_ticket_assigns_open_status() {
        let (_dir, store) = open_store();
        let ticket = store.create_ticket("la impresora está rota").unwrap();
        assert_eq!(ticket.description, "la impresora está rota");
        assert_eq!(ticket.status, STATUS_OPEN);
    }

    #[test]
    fn test_empty_description_gets_placeholder() {
        let (_dir, store) = open_store();
        let ticket = store.create_ticket("").unwrap();
        assert_eq!(ticket.description, DEFAULT_DESCRIPTION);

        let stored = store.get_ticket(ticket.id).unwrap().unwrap();
        assert_eq!(stored.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_whitespace_description_gets_placeholder() {
        let (_dir, store) = open_store();
        let ticket = store.create_ticket("   ").unwrap();
        assert_eq!(ticket.description, DEFAULT_DESCRIPTION);
        assert_ne!(ticket.description, "");
    }

    #[test]
    fn test_description_is_trimmed() {
        let (_dir, store) = open_store();
        let ticket = store.create_ticket("  no funciona el correo  ").unwrap();
        assert_eq!(ticket.description, "no funciona el correo");
    }

    #[test]
    fn test_ids_strictly_increase() {
        let (_dir, store) = open_store();
        let mut last = 0;
        for i in 0..5 {
            let ticket = store.create_ticket(&format!("problema {i}")).unwrap();
            assert!(ticket.id > last);
            last = ticket.id;
        }
        assert_eq!(store.ticket_count().unwrap(), 5);
    }

    #[test]
    fn test_tickets_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.db");

        let id = {
            let store = TicketStore::open(&path).unwrap();
            store.create_ticket("se cayó la red").unwrap().id
        };

        let reopened = TicketStore::open(&path).unwrap();
        let ticket = reopened.get_ticket(id).unwrap().unwrap();
        assert_eq!(ticket.description, "se cayó la red");
    }
}
