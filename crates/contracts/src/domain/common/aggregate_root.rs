use super::EntityMetadata;

/// Aggregate root contract
///
/// Instance accessors plus static naming metadata used for table names and UI labels.
pub trait AggregateRoot {
    type Id;

    fn id(&self) -> Self::Id;

    fn code(&self) -> &str;

    fn description(&self) -> &str;

    fn metadata(&self) -> &EntityMetadata;

    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Aggregate index, e.g. "a003"
    fn aggregate_index() -> &'static str;

    /// Collection name, e.g. "room"
    fn collection_name() -> &'static str;

    /// Singular UI name, e.g. "Room"
    fn element_name() -> &'static str;

    /// Plural UI name, e.g. "Rooms"
    fn list_name() -> &'static str;

    /// Full name, e.g. "a003_room". Also the table name.
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Write hook: bump version and timestamp
    fn before_write(&mut self) {
        let metadata = self.metadata_mut();
        metadata.touch();
        metadata.increment_version();
    }
}
