use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen p-6 flex items-center justify-center">
            <div class="text-center space-y-4">
                <h1 class="text-6xl font-bold">{ "404" }</h1>
                <p class="text-muted">{ "Такой страницы нет" }</p>
                <Link<Route> to={Route::Home} classes={classes!("text-indigo-500", "hover:underline")}>
                    { "На главную" }
                </Link<Route>>
            </div>
        </div>
    }
}
