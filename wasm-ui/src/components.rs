//! UI components for the playground.

use wdte_playground::{EXAMPLES, Notification, NotificationId};
use yew::prelude::*;

use crate::markdown;

/// Markdown description of the loaded example.
#[derive(Properties, PartialEq)]
pub struct DescriptionPanelProps {
    pub text: String,
}

#[function_component(DescriptionPanel)]
pub fn description_panel(props: &DescriptionPanelProps) -> Html {
    let rendered = use_memo(props.text.clone(), |text| {
        Html::from_html_unchecked(AttrValue::from(markdown::to_html(text)))
    });
    html! {
        <div class="panel description-panel">
            <div class="description">{ (*rendered).clone() }</div>
        </div>
    }
}

/// Run / Examples / Share / Copy bar above the editor.
#[derive(Properties, PartialEq)]
pub struct MenuBarProps {
    pub on_run: Callback<()>,
    /// Receives the id of the picked example.
    pub on_example: Callback<String>,
    pub on_share: Callback<()>,
    pub on_copy_output: Callback<()>,
}

#[function_component(MenuBar)]
pub fn menu_bar(props: &MenuBarProps) -> Html {
    let on_run_click = {
        let on_run = props.on_run.clone();
        Callback::from(move |_| on_run.emit(()))
    };

    let on_example_change = {
        let on_example = props.on_example.clone();
        Callback::from(move |e: Event| {
            let target: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let id = target.value();
            if !id.is_empty() {
                on_example.emit(id);
            }
            // Back to the placeholder so the same example can be picked again.
            target.set_value("");
        })
    };

    let on_share_click = {
        let on_share = props.on_share.clone();
        Callback::from(move |_| on_share.emit(()))
    };

    let on_copy_click = {
        let on_copy_output = props.on_copy_output.clone();
        Callback::from(move |_| on_copy_output.emit(()))
    };

    html! {
        <nav class="menu">
            <button class="run-button" onclick={on_run_click}>{ "Run" }</button>
            <select class="example-select" onchange={on_example_change}>
                <option value="" selected={true}>{ "Examples" }</option>
                { for EXAMPLES.iter().map(|example| html! {
                    <option value={example.id}>{ example.name }</option>
                })}
            </select>
            <span class="menu-spacer" />
            <button class="copy-button" onclick={on_copy_click}>{ "Copy Output" }</button>
            <button class="share-button" onclick={on_share_click}>{ "Share" }</button>
        </nav>
    }
}

/// Source editor.
#[derive(Properties, PartialEq)]
pub struct EditorPanelProps {
    pub value: String,
    pub on_change: Callback<String>,
}

#[function_component(EditorPanel)]
pub fn editor_panel(props: &EditorPanelProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let target: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(target.value());
        })
    };

    html! {
        <textarea
            class="editor"
            value={props.value.clone()}
            oninput={on_input}
            spellcheck="false"
            placeholder="Enter WDTE code..."
        />
    }
}

/// Interpreter output.
#[derive(Properties, PartialEq)]
pub struct OutputPanelProps {
    pub value: String,
    pub on_clear: Callback<()>,
}

#[function_component(OutputPanel)]
pub fn output_panel(props: &OutputPanelProps) -> Html {
    let on_clear_click = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_| on_clear.emit(()))
    };

    html! {
        <div class="panel output-panel">
            <div class="panel-header">
                <h2>{ "Output" }</h2>
                if !props.value.is_empty() {
                    <button class="clear-button" onclick={on_clear_click}>{ "Clear" }</button>
                }
            </div>
            <pre class="output">{ &props.value }</pre>
        </div>
    }
}

/// Stack of live notifications, oldest on top.
#[derive(Properties, PartialEq)]
pub struct NotificationStackProps {
    pub items: Vec<Notification>,
    pub on_dismiss: Callback<NotificationId>,
    pub on_dismiss_all: Callback<()>,
}

#[function_component(NotificationStack)]
pub fn notification_stack(props: &NotificationStackProps) -> Html {
    let on_dismiss_all_click = {
        let on_dismiss_all = props.on_dismiss_all.clone();
        Callback::from(move |_| on_dismiss_all.emit(()))
    };

    html! {
        <div class="notifications">
            if props.items.len() > 1 {
                <button class="dismiss-all" onclick={on_dismiss_all_click}>
                    { "Dismiss all" }
                </button>
            }
            { for props.items.iter().map(|n| {
                let id = n.id;
                let on_dismiss = props.on_dismiss.clone();
                html! {
                    <div key={id.to_string()} class={classes!("notification", n.kind.class())}>
                        <p>{ &n.message }</p>
                        <button
                            class="dismiss"
                            onclick={Callback::from(move |_| on_dismiss.emit(id))}
                        >
                            { "\u{00D7}" }
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
