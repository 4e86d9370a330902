//! Internal Diesel row structs.
//!
//! These types stay inside the persistence layer; adapters convert them into
//! domain values before returning.

use diesel::prelude::*;
use diesel::sql_types::{Bool, Nullable};
use uuid::Uuid;

use super::schema::profiles;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProfileRow {
    pub id: Uuid,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

/// Result of `SELECT <procedure>(...) AS deleted`.
#[derive(Debug, QueryableByName)]
pub(crate) struct ProcedureResultRow {
    #[diesel(sql_type = Nullable<Bool>)]
    pub deleted: Option<bool>,
}

/// Result of `SELECT EXISTS(...) AS present`.
#[derive(Debug, QueryableByName)]
pub(crate) struct ExistsRow {
    #[diesel(sql_type = Bool)]
    pub present: bool,
}
