use shared::{submit_question, AskClient, SourceCard, TicketCounter};
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod config;
mod results;
mod rpc;

use crate::config::Config;
use crate::results::Results;
use crate::rpc::GlooTransport;

#[derive(Properties, PartialEq)]
struct SourceCardProps {
    card: SourceCard,
}

#[function_component]
fn SourceCardView(props: &SourceCardProps) -> Html {
    // Excerpts are text nodes; backend content is never parsed as markup.
    html! {
        <div class="source-doc">
            <p><strong>{ props.card.heading() }</strong></p>
            <p>{ &props.card.excerpt }</p>
        </div>
    }
}

#[function_component]
fn App() -> Html {
    let input_ref = use_node_ref();
    let results = use_reducer(Results::default);

    let client = use_memo(
        |_| AskClient::new(GlooTransport).with_route(Config::from_build_env().ask_url),
        (),
    );
    let tickets = use_memo(|_| TicketCounter::default(), ());

    let onsubmit = {
        let input_ref = input_ref.clone();
        let results = results.clone();

        move |event: SubmitEvent| {
            event.prevent_default();

            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let question = input.value();

            let ticket = tickets.next();
            let client = client.clone();
            let results = results.clone();

            wasm_bindgen_futures::spawn_local(async move {
                submit_question(&*client, &question, ticket, |action| {
                    results.dispatch(action)
                })
                .await;
            });
        }
    };

    let state = &results.0;
    let display = if state.visible {
        "display: block"
    } else {
        "display: none"
    };

    html! {
        <main>
            <h1>{ "Socratic Dialogue Agent" }</h1>
            <form id="question-form" {onsubmit}>
                <input id="question-input" ref={input_ref} type="text" placeholder="Ask a question about the texts" />
                <button type="submit">{ "Ask" }</button>
            </form>
            <div id="results-container" style={display}>
                <h2>{ "Answer" }</h2>
                <p id="answer">{ &state.answer }</p>
                <div id="sources">
                    { for state.sources.iter().cloned().map(|card| html! { <SourceCardView {card} /> }) }
                </div>
            </div>
        </main>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    yew::Renderer::<App>::new().render();
}
