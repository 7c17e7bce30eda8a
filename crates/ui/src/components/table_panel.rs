use dioxus::prelude::*;
use sensei_core::table::{DynamicTable, SortConfig, SortDirection, TableColumn};
use tracing::warn;

use crate::context::AppContext;
use crate::vm::format_time;

/// Sortable, editable table for the tables topic. Each kind of mutation
/// reports the matching action id through `on_action`.
#[component]
pub fn TablePanel(on_action: EventHandler<String>) -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.progress().clock();
    let mut table = use_signal(DynamicTable::with_sample_rows);
    let mut query = use_signal(String::new);

    let sort = table.read().sort_config();
    let rows: Vec<_> = table.read().filter(&query.read()).into_iter().cloned().collect();
    let activity = table.read().activity().entries().to_vec();

    rsx! {
        section { class: "card table-panel",
            input {
                id: "table-filter",
                r#type: "search",
                placeholder: "Filter rows",
                value: "{query}",
                oninput: move |evt: FormEvent| query.set(evt.value()),
            }
            table {
                thead {
                    tr {
                        for column in TableColumn::ALL {
                            th { key: "{column.key()}",
                                button {
                                    id: "sort-{column.key()}",
                                    onclick: move |_| {
                                        table.write().sort_by(column, clock.now());
                                        on_action.call("sort".to_string());
                                    },
                                    "{column.label()}{sort_marker(sort, column)}"
                                }
                            }
                        }
                        th { "Actions" }
                    }
                }
                tbody {
                    for row in &rows {
                        tr { key: "{row.id}",
                            td { "{row.id}" }
                            td { "{row.name}" }
                            td {
                                input {
                                    r#type: "email",
                                    value: "{row.email}",
                                    onchange: {
                                        let id = row.id.clone();
                                        move |evt: FormEvent| {
                                            let result = table.write().edit(
                                                &id,
                                                TableColumn::Email,
                                                &evt.value(),
                                                clock.now(),
                                            );
                                            match result {
                                                Ok(()) => on_action.call("edit".to_string()),
                                                Err(err) => warn!(error = %err, "table edit rejected"),
                                            }
                                        }
                                    },
                                }
                            }
                            td {
                                button {
                                    onclick: {
                                        let id = row.id.clone();
                                        let next = row.status.toggled();
                                        move |_| {
                                            if table.write().set_status(&id, next, clock.now()).is_ok() {
                                                on_action.call("status".to_string());
                                            }
                                        }
                                    },
                                    "{row.status}"
                                }
                            }
                            td { "{row.role}" }
                            td {
                                button {
                                    class: "danger",
                                    onclick: {
                                        let id = row.id.clone();
                                        move |_| {
                                            if table.write().delete(&id, clock.now()).is_ok() {
                                                on_action.call("delete".to_string());
                                            }
                                        }
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
            if table.read().rows().is_empty() {
                p { class: "muted", "No rows left." }
            } else if rows.is_empty() {
                p { class: "muted", "No rows match the filter." }
            }
            h3 { "Recent activity" }
            ul { class: "activity",
                for entry in activity {
                    li { key: "{entry.id()}",
                        span { "{entry.description()}" }
                        span { class: "muted", " {format_time(entry.timestamp())}" }
                    }
                }
            }
        }
    }
}

fn sort_marker(sort: SortConfig, column: TableColumn) -> &'static str {
    match (sort.column == Some(column), sort.direction) {
        (false, _) => "",
        (true, SortDirection::Asc) => " ▲",
        (true, SortDirection::Desc) => " ▼",
    }
}
