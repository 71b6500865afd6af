use tally::serde_json::{Map, Value};
use yew::prelude::*;

/// Rows and columns extracted from an arbitrary JSON payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn push_column(columns: &mut Vec<String>, key: &str) {
    if !columns.iter().any(|c| c == key) {
        columns.push(key.to_string());
    }
}

impl Table {
    /// Lays out a payload as a table.
    ///
    /// An array of objects becomes one row per object, with columns in order of
    /// first appearance. An object wrapping such an array under `data` is
    /// unwrapped first. Anything else becomes a single `value` column.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(items) => Self::from_items(items),
            Value::Object(map) => match map.get("data") {
                Some(Value::Array(items)) => Self::from_items(items),
                _ => Self::from_object(map),
            },
            other => Self {
                columns: vec!["value".to_string()],
                rows: vec![vec![cell(other)]],
            },
        }
    }

    fn from_object(map: &Map<String, Value>) -> Self {
        Self {
            columns: map.keys().cloned().collect(),
            rows: vec![map.values().map(cell).collect()],
        }
    }

    fn from_items(items: &[Value]) -> Self {
        let mut columns = Vec::new();
        for item in items {
            match item {
                Value::Object(map) => map.keys().for_each(|key| push_column(&mut columns, key)),
                _ => push_column(&mut columns, "value"),
            }
        }

        let rows = items
            .iter()
            .map(|item| {
                columns
                    .iter()
                    .map(|column| match item {
                        Value::Object(map) => map.get(column).map(cell).unwrap_or_default(),
                        other if column == "value" => cell(other),
                        _ => String::new(),
                    })
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Properties, PartialEq)]
pub struct DataTableProps {
    pub data: Value,
}

#[function_component(DataTable)]
pub fn data_table(props: &DataTableProps) -> Html {
    let table = Table::from_value(&props.data);

    if table.is_empty() {
        return html! {
            <div class="text-center py-12">
                <p class="text-gray-500">{ "No rows" }</p>
            </div>
        };
    }

    html! {
        <div class="overflow-x-auto border border-gray-200 rounded-lg">
            <table class="min-w-full divide-y divide-gray-200 text-sm">
                <thead class="bg-gray-50">
                    <tr>
                        { for table.columns.iter().map(|column| html! {
                            <th class="px-4 py-2 text-left font-medium text-gray-700">{ column }</th>
                        }) }
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-100 bg-white">
                    { for table.rows.iter().map(|row| html! {
                        <tr>
                            { for row.iter().map(|value| html! {
                                <td class="px-4 py-2 text-gray-900 whitespace-nowrap">{ value }</td>
                            }) }
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
