//! Diesel schema for issue persistence.

diesel::table! {
    /// Issue records, newest first by `created_at`.
    issues (id) {
        /// Store-assigned issue identifier.
        id -> Uuid,
        /// Issue title.
        title -> Text,
        /// Issue description.
        description -> Text,
        /// Priority label.
        #[max_length = 20]
        priority -> Varchar,
        /// Status label.
        #[max_length = 20]
        status -> Varchar,
        /// Optional assignee email or name.
        assigned_to -> Nullable<Text>,
        /// Creator email.
        created_by -> Text,
        /// Server-assigned creation timestamp.
        created_at -> Timestamptz,
        /// Insertion sequence, breaks `created_at` ties.
        seq -> Int8,
    }
}
