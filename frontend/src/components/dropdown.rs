use yew::prelude::*;

/// One selectable entry: the filter value and its display label
#[derive(Clone, PartialEq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

impl DropdownOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DropdownProps {
    /// Text on the trigger button when nothing specific is selected
    pub label: String,
    pub options: Vec<DropdownOption>,
    /// Currently selected value ("all" means no filtering)
    pub selected: String,
    pub open: bool,
    pub on_toggle: Callback<MouseEvent>,
    pub on_select: Callback<String>,
}

/// Text-button dropdown used for the filter and sort menus. The page owns
/// the open flag so only one menu is open at a time.
#[function_component(Dropdown)]
pub fn dropdown(props: &DropdownProps) -> Html {
    let button_text = props
        .options
        .iter()
        .find(|o| o.value == props.selected && o.value != "all")
        .map(|o| o.label.clone())
        .unwrap_or_else(|| props.label.clone());

    html! {
        <div class="relative inline-block">
            <button
                class={classes!("text-filter", props.open.then_some("active"))}
                onclick={props.on_toggle.clone()}
            >
                { button_text }
                <span class={classes!("chevron-icon", props.open.then_some("open"))}>{ "▾" }</span>
            </button>
            if props.open {
                <div class="dropdown-menu">
                    { for props.options.iter().map(|option| {
                        let on_select = props.on_select.clone();
                        let value = option.value.clone();
                        let is_active = option.value == props.selected;
                        let onclick = Callback::from(move |_| on_select.emit(value.clone()));
                        html! {
                            <button
                                class={classes!("menu-item", "rounded", is_active.then_some("active"))}
                                {onclick}
                            >
                                { &option.label }
                            </button>
                        }
                    }) }
                </div>
            }
        </div>
    }
}
