//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered administrators keyed by email.
    ///
    /// `invitation_code` carries a unique constraint; PostgreSQL allows any
    /// number of NULLs under it.
    administrators (email) {
        email -> Varchar,
        /// Stored verbatim; hashing is out of scope for this service.
        password -> Text,
        invitation_code -> Nullable<Varchar>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
