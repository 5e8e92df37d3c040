use crate::api::codeforces::fetch_finished_contests;
use crate::components::dropdown::{Dropdown, DropdownOption};
use crate::components::search_bar::SearchBar;
use crate::format::format_start_date;
use log::error;
use shared::query::presets;
use shared::{apply_query, division, Contest, Division, Query, SortDirection};
use yew::prelude::*;

#[function_component(Contests)]
pub fn contests() -> Html {
    let records = use_state(Vec::<Contest>::new);
    let loading = use_state(|| true);
    let load_error = use_state(|| None::<String>);

    // Query state: committed search text, active sort, division filter
    let search = use_state(String::new);
    let sort_by = use_state(|| "date".to_string());
    let direction = use_state(|| SortDirection::Descending);
    let division_filter = use_state(|| "all".to_string());

    // Dropdown open state, one menu at a time
    let show_sort_menu = use_state(|| false);
    let show_division_menu = use_state(|| false);

    let engine = use_mut_ref(presets::contests);

    // Load contests on mount
    {
        let records = records.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_finished_contests().await {
                    Ok(contests) => {
                        records.set(contests);
                        load_error.set(None);
                    }
                    Err(e) => {
                        error!("Error fetching contests: {}", e);
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

    let toggle_sort_menu = {
        let show_sort_menu = show_sort_menu.clone();
        let show_division_menu = show_division_menu.clone();
        Callback::from(move |_| {
            show_sort_menu.set(!*show_sort_menu);
            show_division_menu.set(false);
        })
    };

    let toggle_division_menu = {
        let show_division_menu = show_division_menu.clone();
        let show_sort_menu = show_sort_menu.clone();
        Callback::from(move |_| {
            show_division_menu.set(!*show_division_menu);
            show_sort_menu.set(false);
        })
    };

    let on_sort_select = {
        let sort_by = sort_by.clone();
        let show_sort_menu = show_sort_menu.clone();
        Callback::from(move |value: String| {
            sort_by.set(value);
            show_sort_menu.set(false);
        })
    };

    let on_division_select = {
        let division_filter = division_filter.clone();
        let show_division_menu = show_division_menu.clone();
        Callback::from(move |value: String| {
            division_filter.set(value);
            show_division_menu.set(false);
        })
    };

    let clear_division_filter = {
        let division_filter = division_filter.clone();
        Callback::from(move |_| division_filter.set("all".to_string()))
    };

    let toggle_direction = {
        let direction = direction.clone();
        Callback::from(move |_| direction.set(direction.toggle()))
    };

    let query = Query::new((*sort_by).clone())
        .with_search((*search).clone())
        .with_filter("division", (*division_filter).clone())
        .with_direction(*direction);
    let view = match apply_query(&records, &query, &engine.borrow()) {
        Ok(view) => view,
        Err(e) => {
            error!("Contest query failed: {}", e);
            Vec::new()
        }
    };

    let sort_options = vec![
        DropdownOption::new("date", "По дате"),
        DropdownOption::new("division", "По дивизиону"),
    ];
    let mut division_options = vec![DropdownOption::new("all", "Все дивизионы")];
    division_options.extend(
        Division::ALL
            .iter()
            .map(|d| DropdownOption::new(d.label(), d.label())),
    );

    html! {
        <div class="min-h-screen p-6">
            <div class="mx-auto max-w-5xl space-y-8">
                <h1 class="text-4xl font-bold text-center tracking-tight">{ "Контесты" }</h1>

                <SearchBar
                    placeholder="Поиск"
                    debounce_ms={engine.borrow().debounce_ms}
                    on_commit={on_search_commit}
                />

                <div class="flex flex-wrap items-center justify-center gap-8">
                    <Dropdown
                        label="Сортировка"
                        options={sort_options}
                        selected={(*sort_by).clone()}
                        open={*show_sort_menu}
                        on_toggle={toggle_sort_menu}
                        on_select={on_sort_select}
                    />
                    <button class="text-filter" onclick={toggle_direction}>
                        {
                            if *direction == SortDirection::Descending {
                                "По убыванию"
                            } else {
                                "По возрастанию"
                            }
                        }
                    </button>
                    <div class="flex items-center gap-2">
                        <Dropdown
                            label="Дивизион"
                            options={division_options}
                            selected={(*division_filter).clone()}
                            open={*show_division_menu}
                            on_toggle={toggle_division_menu}
                            on_select={on_division_select}
                        />
                        if *division_filter != "all" {
                            <button
                                class="clear-filter text-xs px-2 py-1 rounded"
                                title="Очистить фильтр"
                                onclick={clear_division_filter}
                            >
                                { "×" }
                            </button>
                        }
                    </div>
                </div>

                if *loading {
                    <p class="text-center text-muted">{ "Загрузка контестов..." }</p>
                } else if let Some(e) = (*load_error).clone() {
                    <p class="text-center text-red-500">{ format!("Не удалось загрузить контесты: {}", e) }</p>
                } else {
                    <div class="flex flex-col gap-3">
                        { for view.iter().map(|contest| html! {
                            <div key={contest.id} class="contest-row flex items-center justify-between rounded-lg border p-4">
                                <h3 class="font-medium truncate">{ &contest.name }</h3>
                                <div class="flex items-center gap-4 shrink-0">
                                    <span class="badge">{ division(&contest.name).label() }</span>
                                    <span class="text-sm text-muted">
                                        { format_start_date(contest.start_time_seconds) }
                                    </span>
                                </div>
                            </div>
                        }) }
                    </div>
                }
            </div>
        </div>
    }
}
