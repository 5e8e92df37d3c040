use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="min-h-screen p-6">
            <div class="mx-auto max-w-4xl space-y-10 text-center">
                <h1 class="text-5xl font-bold tracking-tight">{ "CP Insight" }</h1>
                <p class="text-lg text-muted">
                    { "Контесты, задачи и профили Codeforces с поиском, фильтрами и сортировкой" }
                </p>
                <div class="grid grid-cols-1 sm:grid-cols-3 gap-6">
                    <Link<Route> to={Route::Contests} classes={classes!("home-card", "rounded-xl", "border", "p-8")}>
                        <h2 class="text-2xl font-semibold mb-2">{ "Контесты" }</h2>
                        <p class="text-sm text-muted">{ "Прошедшие раунды по дивизионам" }</p>
                    </Link<Route>>
                    <Link<Route> to={Route::Problems} classes={classes!("home-card", "rounded-xl", "border", "p-8")}>
                        <h2 class="text-2xl font-semibold mb-2">{ "Задачи" }</h2>
                        <p class="text-sm text-muted">{ "Архив задач по сложности и тегам" }</p>
                    </Link<Route>>
                    <Link<Route> to={Route::Profiles} classes={classes!("home-card", "rounded-xl", "border", "p-8")}>
                        <h2 class="text-2xl font-semibold mb-2">{ "Профили" }</h2>
                        <p class="text-sm text-muted">{ "Рейтинг активных участников" }</p>
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
