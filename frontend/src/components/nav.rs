use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Nav)]
pub fn nav() -> Html {
    let current_route = use_route::<Route>().unwrap_or(Route::Home);

    let link_class = |route: &Route| {
        if current_route == *route {
            classes!("nav-link", "active")
        } else {
            classes!("nav-link")
        }
    };

    html! {
        <nav class={classes!(
            "sticky", "top-0", "z-50", "bg-gradient-to-r", "from-slate-900", "to-indigo-700",
            "text-white", "shadow-lg", "backdrop-blur-sm"
        )}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8")}>
                <div class={classes!("flex", "justify-between", "h-16", "items-center")}>
                    <Link<Route> to={Route::Home} classes={classes!("text-xl", "font-bold", "tracking-tight")}>
                        { "CP Insight" }
                    </Link<Route>>
                    <div class={classes!("flex", "gap-6", "items-center")}>
                        <Link<Route> to={Route::Contests} classes={link_class(&Route::Contests)}>
                            { "Контесты" }
                        </Link<Route>>
                        <Link<Route> to={Route::Problems} classes={link_class(&Route::Problems)}>
                            { "Задачи" }
                        </Link<Route>>
                        <Link<Route> to={Route::Profiles} classes={link_class(&Route::Profiles)}>
                            { "Профили" }
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}
