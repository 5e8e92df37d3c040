use crate::timers::BrowserScheduler;
use shared::Debouncer;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub placeholder: String,
    /// Delay before the typed text is committed to the query
    #[prop_or(150)]
    pub debounce_ms: u32,
    /// Fires with the committed search text after the debounce window
    pub on_commit: Callback<String>,
}

/// Free-text search input. The raw value updates on every keystroke; the
/// `on_commit` callback only fires once typing pauses for the debounce
/// window, so the page recomputes its list at most once per pause.
#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let draft = use_state(String::new);
    let scheduler = use_mut_ref(BrowserScheduler::default);
    let debouncer = {
        let delay = props.debounce_ms;
        use_mut_ref(move || Debouncer::<BrowserScheduler>::new(delay))
    };

    let on_input = {
        let draft = draft.clone();
        let on_commit = props.on_commit.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            draft.set(value.clone());

            let on_commit = on_commit.clone();
            debouncer.borrow_mut().input(
                &mut *scheduler.borrow_mut(),
                value,
                move |committed| on_commit.emit(committed),
            );
        })
    };

    html! {
        <div class="search-bar relative">
            <input
                type="text"
                class="search-input pl-14 h-14 text-lg rounded-xl w-full"
                placeholder={props.placeholder.clone()}
                value={(*draft).clone()}
                oninput={on_input}
            />
        </div>
    }
}
