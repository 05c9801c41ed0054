use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::form::{Field, FormAction, FormModel, Mode};
use crate::session::LocalStorageSession;
use crate::submit::{WebBrowser, submit};

#[derive(Properties, PartialEq)]
pub struct AuthFormProps {
    #[prop_or_default]
    pub initial_mode: Mode,
}

#[function_component]
pub fn AuthForm(props: &AuthFormProps) -> Html {
    let initial_mode = props.initial_mode;
    let model = use_reducer(move || FormModel::with_mode(initial_mode));

    // Runs after the render that accepted a submission, so it sends the
    // committed form rather than a copy taken when the button was drawn.
    {
        let dispatcher = model.dispatcher();
        let mode = model.mode;
        let form = model.form.clone();

        use_effect_with(model.submissions, move |submissions| {
            if *submissions > 0 {
                yew::platform::spawn_local(async move {
                    let api_client = crate::get_api_client();
                    let outcome = submit(
                        &api_client,
                        &LocalStorageSession,
                        &WebBrowser,
                        mode,
                        &form,
                    )
                    .await;
                    dispatcher.dispatch(FormAction::Finished(outcome));
                });
            }
        });
    }

    let on_input = {
        let dispatcher = model.dispatcher();

        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::Change {
                name: input.name(),
                value: input.value(),
            });
        })
    };

    let toggle_mode = {
        let dispatcher = model.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(FormAction::ToggleMode)
        })
    };

    let on_continue = {
        let dispatcher = model.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(FormAction::Submit)
        })
    };

    let form = &model.form;
    let is_sending = model.status.is_sending();
    let input = |field: Field, label: &'static str, input_type: &'static str| {
        html! {
            <div>
                <label for={field.name()} class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                    {label}
                </label>
                <input
                    id={field.name()}
                    name={field.name()}
                    type={input_type}
                    value={form.get(field).to_string()}
                    oninput={on_input.clone()}
                    required={true}
                    class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
                           rounded-md shadow-sm bg-white dark:bg-neutral-700
                           text-neutral-900 dark:text-neutral-100
                           focus:outline-none focus:ring-2 focus:ring-neutral-500 focus:border-neutral-500"
                />
            </div>
        }
    };

    let (prompt, link_text) = match model.mode {
        Mode::Login => ("Create an account? ", "Click here"),
        Mode::SignUp => ("Already have an account? ", "Login here"),
    };

    html! {
        <section class="max-w-md w-full bg-white dark:bg-neutral-800 p-8 rounded-lg shadow-md">
            <h2 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-6 text-center">
                {model.mode.to_string()}
            </h2>

            <div class="space-y-6">
                if model.mode.shows_username() {
                    {input(Field::Username, "Name", "text")}
                }
                {input(Field::Email, "Email", "text")}
                {input(Field::Password, "Password", "password")}

                <button
                    type="button"
                    onclick={on_continue}
                    disabled={is_sending}
                    class="w-full flex justify-center py-2 px-4 border border-transparent
                           rounded-md shadow-sm text-sm font-medium text-white
                           bg-neutral-900 hover:bg-neutral-800
                           dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                           disabled:opacity-50 disabled:cursor-not-allowed
                           transition-colors duration-200"
                >
                    if is_sending {
                        {"Please wait..."}
                    } else {
                        {"Continue"}
                    }
                </button>
            </div>

            <p class="mt-6 text-sm text-center text-neutral-600 dark:text-neutral-400">
                {prompt}
                <span onclick={toggle_mode} class="font-medium underline cursor-pointer">
                    {link_text}
                </span>
            </p>

            <div class="mt-4 text-xs text-neutral-500 dark:text-neutral-400">
                <label>
                    <input type="checkbox" class="mr-2" />
                    {"By continuing, I agree to the "}
                    <span class="underline">{"terms of use"}</span>
                    {" & "}
                    <span class="underline">{"privacy policy"}</span>
                    {"."}
                </label>
            </div>
        </section>
    }
}
