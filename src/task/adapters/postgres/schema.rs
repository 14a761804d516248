//! Diesel schema for task persistence.

diesel::table! {
    /// Scheduled task records.
    scheduler (id) {
        /// Storage-assigned task identifier.
        id -> Int8,
        /// Due date in canonical `YYYYMMDD` form.
        #[max_length = 8]
        due_date -> Varchar,
        /// Task title.
        title -> Text,
        /// Free-text comment.
        comment -> Text,
        /// Recurrence rule text; empty for one-off tasks.
        repeat_rule -> Text,
    }
}
