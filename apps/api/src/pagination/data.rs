//! Section data access — pulls a section's items out of the employee data bag.

use serde_json::Value;

use crate::pagination::classifier::is_splittable;
use crate::pagination::types::SectionType;

/// Returns the non-null items stored under the section type's key.
///
/// Splittable sections only accept an array; any other shape is malformed and
/// the section has no content. For every other type a single object or scalar
/// is treated as a one-item list. `None` means "omit this section": the key is
/// missing, null, an empty array, an empty object, or an array holding only nulls.
pub fn get_section_data(employee_data: &Value, section_type: &SectionType) -> Option<Vec<Value>> {
    let raw = employee_data.get(section_type.as_str())?;

    let items: Vec<Value> = match raw {
        Value::Null => return None,
        Value::Array(values) => values.iter().filter(|v| !v.is_null()).cloned().collect(),
        _ if is_splittable(section_type) => return None,
        Value::Object(map) if map.is_empty() => return None,
        other => vec![other.clone()],
    };

    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
