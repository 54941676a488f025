//! Inspect command implementation.

use super::{read_payload, Encoding};
use serde::Serialize;
use std::borrow::Cow;
use std::path::Path;
use syncgraph_codec::{SyncData, SyncValueRef};

/// One entry of an inspected payload.
#[derive(Debug, Serialize)]
pub struct EntryInfo {
    /// Property the entry was read from.
    pub prop: String,
    /// Kind of value carried.
    pub kind: ValueKind,
    /// Whether the entry is flagged as an array.
    pub is_array: bool,
    /// Nesting depth, 0 for top-level entries.
    pub depth: usize,
    /// Primitive value, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    /// Nested entries. For arrays, one group per element.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Vec<EntryInfo>>,
}

/// Kind of value an entry carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// No value.
    Absent,
    /// A plain JSON value.
    Primitive,
    /// One nested structure.
    Object,
    /// A sequence of nested structures.
    Elements,
}

/// Payload inspection result.
#[derive(Debug, Serialize)]
pub struct InspectResult {
    /// Payload path.
    pub path: String,
    /// Total number of entries at every depth.
    pub total_entries: usize,
    /// Deepest nesting level reached.
    pub max_depth: usize,
    /// Top-level entries.
    pub entries: Vec<EntryInfo>,
}

/// Runs the inspect command.
pub fn run(path: &Path, input: Encoding, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_payload(path, input)?;
    let result = inspect(path, &data);

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => {
            print_text_output(&result);
        }
    }

    Ok(())
}

/// Builds the entry tree of `data`.
pub fn inspect(path: &Path, data: &SyncData) -> InspectResult {
    let entries = describe(data, 0);
    let mut total_entries = 0;
    let mut max_depth = 0;
    walk(&entries, &mut |entry| {
        total_entries += 1;
        max_depth = max_depth.max(entry.depth);
    });

    InspectResult {
        path: path.display().to_string(),
        total_entries,
        max_depth,
        entries,
    }
}

fn describe(data: &SyncData, depth: usize) -> Vec<EntryInfo> {
    data.iter()
        .map(|entry| {
            let value = entry.value.as_value_ref();
            let mut info = EntryInfo {
                prop: entry.prop.clone(),
                kind: ValueKind::Primitive,
                is_array: entry.is_array,
                depth,
                value: None,
                children: Vec::new(),
            };

            if value.is_nullish() {
                info.kind = ValueKind::Absent;
            } else if entry.is_array {
                match nested_elements(value) {
                    Some(groups) => {
                        info.kind = ValueKind::Elements;
                        info.children = groups
                            .iter()
                            .map(|group| describe(group, depth + 1))
                            .collect();
                    }
                    None => info.value = value.to_json().ok(),
                }
            } else {
                match nested_object(value) {
                    Some(nested) => {
                        info.kind = ValueKind::Object;
                        info.children = vec![describe(&nested, depth + 1)];
                    }
                    None => info.value = value.to_json().ok(),
                }
            }
            info
        })
        .collect()
}

/// Recognizes a nested structure, including JSON-shaped ones. An empty JSON
/// array stays a primitive.
fn nested_object(value: SyncValueRef<'_>) -> Option<Cow<'_, SyncData>> {
    match value {
        SyncValueRef::Primitive(serde_json::Value::Array(items)) if items.is_empty() => None,
        _ => value.to_sync_data().ok().flatten(),
    }
}

fn nested_elements(value: SyncValueRef<'_>) -> Option<Vec<Cow<'_, SyncData>>> {
    value
        .elements()
        .ok()
        .flatten()?
        .into_iter()
        .map(|item| item.to_sync_data().ok().flatten())
        .collect()
}

fn walk(entries: &[EntryInfo], visit: &mut impl FnMut(&EntryInfo)) {
    for entry in entries {
        visit(entry);
        for group in &entry.children {
            walk(group, visit);
        }
    }
}

fn print_text_output(result: &InspectResult) {
    println!("=== syncgraph payload ===");
    println!("Path: {}", result.path);
    println!("Entries: {}", result.total_entries);
    println!("Max depth: {}", result.max_depth);
    println!();
    print_entries(&result.entries);
}

fn print_entries(entries: &[EntryInfo]) {
    for entry in entries {
        let indent = "  ".repeat(entry.depth);
        let array = if entry.is_array { " [array]" } else { "" };
        match &entry.value {
            Some(value) => println!(
                "{indent}{}: {:?}{array} = {value}",
                entry.prop, entry.kind
            ),
            None => println!("{indent}{}: {:?}{array}", entry.prop, entry.kind),
        }
        for (index, group) in entry.children.iter().enumerate() {
            if entry.kind == ValueKind::Elements {
                println!("{indent}  #{index}");
            }
            print_entries(group);
        }
    }
}
