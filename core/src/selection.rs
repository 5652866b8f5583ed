//! Stateless operations over the sorted view: the group toggle and
//! cursor movement. Both run strictly between rendered frames; nothing
//! here touches the terminal.

use har2hosts_common::model::DomainRecord;

/// Flips `selected` on every IP entry of the record under the cursor.
///
/// Granularity is the whole domain; there is no per-entry toggle. Each
/// flag is negated individually, so a half-selected multi-IP record
/// inverts rather than snapping to one state.
pub fn toggle_at(records: &mut [DomainRecord], cursor: usize) {
    if let Some(record) = records.get_mut(cursor) {
        for entry in &mut record.ip_entries {
            entry.selected = !entry.selected;
        }
    }
}

/// Moves the cursor by `delta`, saturating at both ends of the view.
///
/// An empty view pins the cursor at 0.
pub fn move_cursor(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    cursor.saturating_add_signed(delta).min(len - 1)
}
