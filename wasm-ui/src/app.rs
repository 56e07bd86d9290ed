//! Main application component.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use wdte_playground::{Config, Interpreter, Notification, NotificationId, Playground, catalog};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::{DescriptionPanel, EditorPanel, MenuBar, NotificationStack, OutputPanel};
use crate::host::{DomClipboard, JsInterpreter, WindowLocation};

type BrowserPlayground = Playground<DomClipboard, WindowLocation>;
type Shared = Rc<RefCell<BrowserPlayground>>;

/// Hand pending notification removals to the browser's timer queue.
fn schedule_expiries(playground: &Shared, update: &UseForceUpdateHandle) {
    let expiries = playground.borrow_mut().take_expiries();
    for expiry in expiries {
        let playground = playground.clone();
        let update = update.clone();
        Timeout::new(expiry.after_ms, move || {
            playground.borrow_mut().dismiss(expiry.id);
            update.force_update();
        })
        .forget();
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let playground: Shared =
        use_mut_ref(|| Playground::open(DomClipboard, WindowLocation, &Config::default()));
    let update = use_force_update();

    // A corrupt share link leaves a notification at startup.
    {
        let playground = playground.clone();
        let update = update.clone();
        use_effect_with((), move |_| {
            schedule_expiries(&playground, &update);
            || ()
        });
    }

    let on_input_change = {
        let playground = playground.clone();
        let update = update.clone();
        Callback::from(move |text: String| {
            playground.borrow_mut().set_input(text);
            update.force_update();
        })
    };

    let on_run = {
        let playground = playground.clone();
        let update = update.clone();
        Callback::from(move |_: ()| {
            let ticket = playground.borrow_mut().begin_run();
            let playground = playground.clone();
            let update = update.clone();
            // The state is not borrowed while the interpreter works, so the
            // editor stays live.
            spawn_local(async move {
                let result = JsInterpreter.run(ticket.source()).await;
                playground.borrow_mut().finish_run(ticket, result);
                update.force_update();
            });
        })
    };

    let on_example = {
        let playground = playground.clone();
        let update = update.clone();
        Callback::from(move |id: String| match catalog::find(&id) {
            Some(example) => {
                playground.borrow_mut().load_example(example);
                update.force_update();
            }
            None => log::warn!("unknown example id {:?}", id),
        })
    };

    let on_share = {
        let playground = playground.clone();
        let update = update.clone();
        Callback::from(move |_: ()| {
            playground.borrow_mut().share();
            schedule_expiries(&playground, &update);
            update.force_update();
        })
    };

    let on_copy_output = {
        let playground = playground.clone();
        let update = update.clone();
        Callback::from(move |_: ()| {
            playground.borrow_mut().copy_output();
            schedule_expiries(&playground, &update);
            update.force_update();
        })
    };

    let on_clear = {
        let playground = playground.clone();
        let update = update.clone();
        Callback::from(move |_: ()| {
            playground.borrow_mut().clear_output();
            update.force_update();
        })
    };

    let on_dismiss = {
        let playground = playground.clone();
        let update = update.clone();
        Callback::from(move |id: NotificationId| {
            playground.borrow_mut().dismiss(id);
            update.force_update();
        })
    };

    let on_dismiss_all = {
        let playground = playground.clone();
        let update = update.clone();
        Callback::from(move |_: ()| {
            playground.borrow_mut().dismiss_all();
            update.force_update();
        })
    };

    let (input, output, description, notifications) = {
        let p = playground.borrow();
        (
            p.input().to_string(),
            p.output().to_string(),
            p.description().to_string(),
            p.notifications().iter().cloned().collect::<Vec<Notification>>(),
        )
    };

    html! {
        <div class="app">
            <main class="main">
                <div class="column">
                    <NotificationStack
                        items={notifications}
                        on_dismiss={on_dismiss}
                        on_dismiss_all={on_dismiss_all}
                    />
                    <DescriptionPanel text={description} />
                </div>

                <div class="column">
                    <MenuBar
                        on_run={on_run}
                        on_example={on_example}
                        on_share={on_share}
                        on_copy_output={on_copy_output}
                    />
                    <EditorPanel value={input} on_change={on_input_change} />
                    <OutputPanel value={output} on_clear={on_clear} />
                </div>
            </main>

            <footer class="footer">
                <span class="footer-left">
                    <a href="https://github.com/DeedleFake/wdte" target="_blank">{ "WDTE" }</a>
                    { " | MIT License" }
                </span>
                <span class="footer-build">
                    { format!("Build: {}@{} {}", env!("BUILD_HOST"), env!("BUILD_COMMIT"), env!("BUILD_TIMESTAMP")) }
                </span>
            </footer>
        </div>
    }
}
