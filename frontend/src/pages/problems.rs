use crate::api::codeforces::fetch_rated_problems;
use crate::components::dropdown::{Dropdown, DropdownOption};
use crate::components::search_bar::SearchBar;
use log::error;
use shared::query::presets::{self, unique_tags};
use shared::{apply_query, difficulty_bucket, Difficulty, Problem, Query, SortDirection};
use yew::prelude::*;

fn problem_url(problem: &Problem) -> String {
    format!(
        "https://codeforces.com/problemset/problem/{}/{}",
        problem.contest_id, problem.index
    )
}

/// Dropdown labels get unwieldy for long tags
fn truncate_tag(tag: &str) -> String {
    if tag.chars().count() > 15 {
        let short: String = tag.chars().take(15).collect();
        format!("{}...", short)
    } else {
        tag.to_string()
    }
}

#[function_component(Problems)]
pub fn problems() -> Html {
    let records = use_state(Vec::<Problem>::new);
    let loading = use_state(|| true);
    let load_error = use_state(|| None::<String>);

    // Query state; the problems list opens easiest-first
    let search = use_state(String::new);
    let direction = use_state(|| SortDirection::Ascending);
    let difficulty_filter = use_state(|| "all".to_string());
    let tag_filter = use_state(|| "all".to_string());

    let show_difficulty_menu = use_state(|| false);
    let show_tag_menu = use_state(|| false);

    let engine = use_mut_ref(presets::problems);

    // Load problems on mount
    {
        let records = records.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_rated_problems().await {
                    Ok(problems) => {
                        records.set(problems);
                        load_error.set(None);
                    }
                    Err(e) => {
                        error!("Error fetching problems: {}", e);
                        load_error.set(Some(e));
                    }
                }
                loading.set(false);
            });
        });
    }

    let on_search_commit = {
        let search = search.clone();
        Callback::from(move |committed: String| search.set(committed))
    };

    let toggle_direction = {
        let direction = direction.clone();
        Callback::from(move |_| direction.set(direction.toggle()))
    };

    let toggle_difficulty_menu = {
        let show_difficulty_menu = show_difficulty_menu.clone();
        let show_tag_menu = show_tag_menu.clone();
        Callback::from(move |_| {
            show_difficulty_menu.set(!*show_difficulty_menu);
            show_tag_menu.set(false);
        })
    };

    let toggle_tag_menu = {
        let show_tag_menu = show_tag_menu.clone();
        let show_difficulty_menu = show_difficulty_menu.clone();
        Callback::from(move |_| {
            show_tag_menu.set(!*show_tag_menu);
            show_difficulty_menu.set(false);
        })
    };

    let on_difficulty_select = {
        let difficulty_filter = difficulty_filter.clone();
        let show_difficulty_menu = show_difficulty_menu.clone();
        Callback::from(move |value: String| {
            difficulty_filter.set(value);
            show_difficulty_menu.set(false);
        })
    };

    let on_tag_select = {
        let tag_filter = tag_filter.clone();
        let show_tag_menu = show_tag_menu.clone();
        Callback::from(move |value: String| {
            tag_filter.set(value);
            show_tag_menu.set(false);
        })
    };

    let clear_tag_filter = {
        let tag_filter = tag_filter.clone();
        Callback::from(move |_| tag_filter.set("all".to_string()))
    };

    let query = Query::new("rating")
        .with_search((*search).clone())
        .with_filter("difficulty", (*difficulty_filter).clone())
        .with_filter("tag", (*tag_filter).clone())
        .with_direction(*direction);
    let view = match apply_query(&records, &query, &engine.borrow()) {
        Ok(view) => view,
        Err(e) => {
            error!("Problem query failed: {}", e);
            Vec::new()
        }
    };

    let mut difficulty_options = vec![DropdownOption::new("all", "Любая сложность")];
    difficulty_options.extend(
        Difficulty::ALL
            .iter()
            .map(|d| DropdownOption::new(d.slug(), d.label())),
    );
    let mut tag_options = vec![DropdownOption::new("all", "Все теги")];
    tag_options.extend(
        unique_tags(&records)
            .into_iter()
            .map(|tag| DropdownOption::new(tag.clone(), truncate_tag(&tag))),
    );

    html! {
        <div class="min-h-screen p-6">
            <div class="mx-auto max-w-5xl space-y-8">
                <h1 class="text-4xl font-bold text-center tracking-tight">{ "Задачи" }</h1>

                <SearchBar
                    placeholder="Поиск"
                    debounce_ms={engine.borrow().debounce_ms}
                    on_commit={on_search_commit}
                />

                <div class="flex flex-wrap items-center justify-center gap-8">
                    <button class="text-filter" onclick={toggle_direction}>
                        {
                            if *direction == SortDirection::Ascending {
                                "Сначала легкие"
                            } else {
                                "Сначала сложные"
                            }
                        }
                    </button>
                    <Dropdown
                        label="Сложность"
                        options={difficulty_options}
                        selected={(*difficulty_filter).clone()}
                        open={*show_difficulty_menu}
                        on_toggle={toggle_difficulty_menu}
                        on_select={on_difficulty_select}
                    />
                    <div class="flex items-center gap-2">
                        <Dropdown
                            label="Тег"
                            options={tag_options}
                            selected={(*tag_filter).clone()}
                            open={*show_tag_menu}
                            on_toggle={toggle_tag_menu}
                            on_select={on_tag_select}
                        />
                        if *tag_filter != "all" {
                            <button
                                class="clear-filter text-xs px-2 py-1 rounded"
                                title="Очистить фильтр"
                                onclick={clear_tag_filter}
                            >
                                { "×" }
                            </button>
                        }
                    </div>
                </div>

                if *loading {
                    <p class="text-center text-muted">{ "Загрузка задач..." }</p>
                } else if let Some(e) = (*load_error).clone() {
                    <p class="text-center text-red-500">{ format!("Не удалось загрузить задачи: {}", e) }</p>
                } else {
                    <div class="flex flex-col gap-3">
                        { for view.iter().map(|problem| {
                            let bucket = difficulty_bucket(problem.rating);
                            html! {
                                <a
                                    key={problem.code()}
                                    class="problem-row flex items-center justify-between rounded-lg border p-4"
                                    href={problem_url(problem)}
                                    target="_blank"
                                    rel="noopener"
                                >
                                    <div class="flex items-center gap-4 min-w-0">
                                        <span class="text-sm text-muted shrink-0">{ problem.code() }</span>
                                        <h3 class="font-medium truncate">{ &problem.name }</h3>
                                    </div>
                                    <div class="flex items-center gap-4 shrink-0">
                                        <span class="text-sm" style={format!("color: {}", bucket.color())}>
                                            {
                                                match problem.rating {
                                                    Some(r) => format!("{} · {}", r, bucket.label()),
                                                    None => bucket.label().to_string(),
                                                }
                                            }
                                        </span>
                                        <div class="flex gap-1">
                                            { for problem.tags.iter().map(|tag| html! {
                                                <span class="badge text-xs">{ tag }</span>
                                            }) }
                                        </div>
                                    </div>
                                </a>
                            }
                        }) }
                    </div>
                }
            </div>
        </div>
    }
}
