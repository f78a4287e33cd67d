use super::EntityId;

/// Value of the "no selection" option in foreign-key pickers.
pub const NONE_OPTION: &str = "none";

/// Trait implemented by every record the console can list and delete.
pub trait Entity {
    /// Backend id of the record
    fn id(&self) -> &EntityId;

    /// Display name used in tables, pickers and confirmation dialogs
    fn name(&self) -> &str;

    /// Number of dependent records that must be dissociated before this one
    /// can be deleted. Records without a dependents counter report zero.
    fn dependent_count(&self) -> u32 {
        0
    }

    /// Singular display name of the record type
    fn element_name() -> &'static str;

    /// Plural display name, used as the list title
    fn list_name() -> &'static str;
}
