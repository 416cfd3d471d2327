//! Diesel schema for task persistence.

diesel::table! {
    /// Stored task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        title -> Text,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Optional calendar due date.
        due_date -> Nullable<Date>,
        /// Completion flag.
        completed -> Bool,
        /// Creation timestamp used for default ordering.
        created_at -> Timestamptz,
    }
}
