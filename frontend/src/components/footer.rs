use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-gradient-to-r from-slate-900 to-indigo-700 text-white mt-auto">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-6">
                <div class="flex flex-col sm:flex-row items-center justify-between gap-2">
                    <span class="text-xl font-bold tracking-tight">{ "CP Insight" }</span>
                    <p class="text-indigo-100 text-sm">
                        { "Аналитика контестов, задач и профилей Codeforces" }
                    </p>
                    <a
                        class="text-indigo-200 text-sm hover:text-white"
                        href="https://codeforces.com"
                        target="_blank"
                        rel="noopener"
                    >
                        { "Данные: codeforces.com" }
                    </a>
                </div>
            </div>
        </footer>
    }
}
