use crate::api::codeforces::fetch_active_users;
use crate::components::dropdown::{Dropdown, DropdownOption};
use crate::components::search_bar::SearchBar;
use crate::format::{contribution_color, format_contribution};
use log::{error, warn};
use shared::query::presets::{self, unique_ranks};
use shared::{apply_query, rank_tier, Query, SortDirection, UserProfile};
use yew::prelude::*;

fn demo_user(
    handle: &str,
    rating: u32,
    rank: &str,
    contribution: i32,
    max_rating: u32,
    country: &str,
    organization: &str,
) -> UserProfile {
    UserProfile {
        handle: handle.to_string(),
        rating: Some(rating),
        rank: Some(rank.to_string()),
        contribution: Some(contribution),
        max_rating: Some(max_rating),
        max_rank: Some(rank.to_string()),
        country: Some(country.to_string()),
        organization: Some(organization.to_string()),
    }
}

/// Shown while the rating list loads and kept if the API is unreachable
fn demo_users() -> Vec<UserProfile> {
    vec![
        demo_user("tourist", 3858, "legendary grandmaster", 0, 4009, "Belarus", "ITMO University"),
        demo_user("Benq", 3738, "legendary grandmaster", 0, 3833, "United States", "MIT"),
        demo_user("jiangly", 3705, "legendary grandmaster", 0, 4039, "China", "Jiangly Fan Club"),
        demo_user("Um_nik", 3189, "grandmaster", 45, 3289, "Russia", "University of Warsaw"),
        demo_user("Errichto", 3156, "grandmaster", 189, 3256, "Poland", "Google"),
        demo_user("SecondThread", 3123, "grandmaster", 78, 3199, "United States", "MIT"),
    ]
}

#[function_component(Profiles)]
pub fn profiles() -> Html {
    let records = use_state(demo_users);
    let loading = use_state(|| false);
    let api_failed = use_state(|| false);

    let search = use_state(String::new);
    let sort_by = use_state(|| "rating".to_string());
    let direction = use_state(|| SortDirection::Descending);
    let rank_filter = use_state(|| "all".to_string());

    let show_sort_menu = use_state(|| false);
    let show_rank_menu = use_state(|| false);

    let engine = use_mut_ref(presets::profiles);

    // Load the rated user list on mount; keep demo data on failure
    {
        let records = records.clone();
        let loading = loading.clone();
        let api_failed = api_failed.clone();
        use_effect_with((), move |_| {
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_active_users().await {
                    Ok(users) => {
                        records.set(users);
                        api_failed.set(false);
                    }
                    Err(e) => {
                        warn!("Falling back to demo users: {}", e);
                        api_failed.set(true);
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
        let show_rank_menu = show_rank_menu.clone();
        Callback::from(move |_| {
            show_sort_menu.set(!*show_sort_menu);
            show_rank_menu.set(false);
        })
    };

    let toggle_rank_menu = {
        let show_rank_menu = show_rank_menu.clone();
        let show_sort_menu = show_sort_menu.clone();
        Callback::from(move |_| {
            show_rank_menu.set(!*show_rank_menu);
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

    let on_rank_select = {
        let rank_filter = rank_filter.clone();
        let show_rank_menu = show_rank_menu.clone();
        Callback::from(move |value: String| {
            rank_filter.set(value);
            show_rank_menu.set(false);
        })
    };

    let clear_rank_filter = {
        let rank_filter = rank_filter.clone();
        Callback::from(move |_| rank_filter.set("all".to_string()))
    };

    let toggle_direction = {
        let direction = direction.clone();
        Callback::from(move |_| direction.set(direction.toggle()))
    };

    let query = Query::new((*sort_by).clone())
        .with_search((*search).clone())
        .with_filter("rank", (*rank_filter).clone())
        .with_direction(*direction);
    let view = match apply_query(&records, &query, &engine.borrow()) {
        Ok(view) => view,
        Err(e) => {
            error!("Profile query failed: {}", e);
            Vec::new()
        }
    };

    let sort_options = vec![
        DropdownOption::new("rating", "По рейтингу"),
        DropdownOption::new("alphabetical", "По алфавиту"),
        DropdownOption::new("contribution", "По вкладу"),
    ];
    let mut rank_options = vec![DropdownOption::new("all", "Все звания")];
    rank_options.extend(unique_ranks(&records).into_iter().map(|rank| {
        let label = rank_tier(Some(&rank)).label().to_string();
        DropdownOption::new(rank, label)
    }));

    html! {
        <div class="min-h-screen p-6">
            <div class="mx-auto max-w-5xl space-y-8">
                <h1 class="text-4xl font-bold text-center tracking-tight">{ "Профили" }</h1>

                if *api_failed {
                    <p class="text-center text-sm text-muted">
                        { "API недоступен, показаны демонстрационные данные" }
                    </p>
                }

                <SearchBar
                    placeholder="Поиск по нику, организации или стране"
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
                            label="Звание"
                            options={rank_options}
                            selected={(*rank_filter).clone()}
                            open={*show_rank_menu}
                            on_toggle={toggle_rank_menu}
                            on_select={on_rank_select}
                        />
                        if *rank_filter != "all" {
                            <button
                                class="clear-filter text-xs px-2 py-1 rounded"
                                title="Очистить фильтр"
                                onclick={clear_rank_filter}
                            >
                                { "×" }
                            </button>
                        }
                    </div>
                </div>

                if *loading {
                    <p class="text-center text-muted">{ "Загрузка профилей..." }</p>
                }

                <div class="flex flex-col gap-3">
                    { for view.iter().map(|user| {
                        let tier = rank_tier(user.rank.as_deref());
                        html! {
                            <div key={user.handle.clone()} class="profile-row flex items-center justify-between rounded-lg border p-4">
                                <div class="flex items-center gap-4 min-w-0">
                                    <span class="font-medium" style={format!("color: {}", tier.color())}>
                                        { &user.handle }
                                    </span>
                                    <span class="text-sm text-muted">{ tier.label() }</span>
                                </div>
                                <div class="flex items-center gap-6 shrink-0 text-sm">
                                    <span>
                                        { user.rating.map(|r| r.to_string()).unwrap_or_else(|| "—".to_string()) }
                                    </span>
                                    <span style={format!("color: {}", contribution_color(user.contribution))}>
                                        { format_contribution(user.contribution) }
                                    </span>
                                    <span class="text-muted">
                                        { user.country.clone().unwrap_or_default() }
                                    </span>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}
