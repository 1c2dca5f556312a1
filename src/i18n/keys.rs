//! Message key catalog.
//!
//! Every key a dictionary may define is listed here, and every dictionary must
//! define exactly this set. The registry enforces that at construction, so a
//! typo in a dictionary or a key added to only one locale fails loudly instead
//! of rendering a blank string at runtime.

/// Plugin title shown in the host's plugin panel header.
pub const PLUGIN_TITLE: &str = "plugin.title";

/// One-line plugin description shown under the title.
pub const PLUGIN_DESCRIPTION: &str = "plugin.description";

/// Label for the table picker.
pub const TABLE_LABEL: &str = "table.label";

/// Placeholder for the table picker before a selection is made.
pub const TABLE_PLACEHOLDER: &str = "table.placeholder";

/// Label for the view picker.
pub const VIEW_LABEL: &str = "view.label";

/// Placeholder for the view picker before a selection is made.
pub const VIEW_PLACEHOLDER: &str = "view.placeholder";

/// Label for the field picker.
pub const FIELD_LABEL: &str = "field.label";

/// Placeholder for the field picker before a selection is made.
pub const FIELD_PLACEHOLDER: &str = "field.placeholder";

/// Primary action button.
pub const ACTION_RUN: &str = "action.run";

/// Cancel button.
pub const ACTION_CANCEL: &str = "action.cancel";

/// Retry button shown after a failed run.
pub const ACTION_RETRY: &str = "action.retry";

/// Progress text while records load.
pub const STATUS_LOADING: &str = "status.loading";

/// Empty state when the selected view has no records.
pub const STATUS_EMPTY: &str = "status.empty";

/// Completion text. Templates use a `{count}` placeholder.
pub const STATUS_DONE: &str = "status.done";

/// Failure text. Templates use a `{reason}` placeholder.
pub const STATUS_FAILED: &str = "status.failed";

/// Footer line naming the active UI language. Templates use `{language}`.
pub const FOOTER_LANGUAGE: &str = "footer.language";

/// The complete key set, in dictionary order.
///
/// Dictionaries are validated against this list: every key must be present
/// and no other keys may appear.
pub const ALL: [&str; 16] = [
    PLUGIN_TITLE,
    PLUGIN_DESCRIPTION,
    TABLE_LABEL,
    TABLE_PLACEHOLDER,
    VIEW_LABEL,
    VIEW_PLACEHOLDER,
    FIELD_LABEL,
    FIELD_PLACEHOLDER,
    ACTION_RUN,
    ACTION_CANCEL,
    ACTION_RETRY,
    STATUS_LOADING,
    STATUS_EMPTY,
    STATUS_DONE,
    STATUS_FAILED,
    FOOTER_LANGUAGE,
];
