use crate::config::SiteConfig;
use crate::contact::{send_contact, ContactMessage, FormStatus};
use crate::telemetry::{log_event, LogLevel};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

fn textarea_value(node: &NodeRef) -> String {
    node.cast::<HtmlTextAreaElement>()
        .map(|textarea| textarea.value())
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form = use_node_ref();
    let name = use_node_ref();
    let email = use_node_ref();
    let message = use_node_ref();
    let status = use_state(FormStatus::default);

    let onsubmit = {
        let config = props.config.clone();
        let form = form.clone();
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let status = status.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let contact = ContactMessage {
                from_name: input_value(&name),
                from_email: input_value(&email),
                message: textarea_value(&message),
            };
            status.set(FormStatus::Sending);
            log_event(
                config.log_level,
                LogLevel::Info,
                "contact_submit_started",
                serde_json::json!({ "message_chars": contact.message.chars().count() }),
            );

            let config = config.clone();
            let form = form.clone();
            let status = status.clone();
            spawn_local(async move {
                let outcome = send_contact(&config.email_relay, &contact).await;
                match outcome {
                    Ok(()) => log_event(
                        config.log_level,
                        LogLevel::Info,
                        "contact_submit_succeeded",
                        serde_json::json!({}),
                    ),
                    Err(reason) => log_event(
                        config.log_level,
                        LogLevel::Error,
                        "contact_submit_failed",
                        serde_json::json!({ "reason": reason }),
                    ),
                }

                let next = FormStatus::from_outcome(&outcome);
                if next.clears_form() {
                    if let Some(form) = form.cast::<HtmlFormElement>() {
                        form.reset();
                    }
                }
                status.set(next);
            });
        })
    };

    html! {
        <form id="contactForm" class="contact-form" ref={form} {onsubmit}>
            <label for="name">{"Nombre"}</label>
            <input id="name" name="name" type="text" required=true ref={name} />
            <label for="email">{"Email"}</label>
            <input id="email" name="email" type="email" required=true ref={email} />
            <label for="message">{"Mensaje"}</label>
            <textarea id="message" name="message" rows="5" required=true ref={message} />
            <button type="submit" class="btn">{"Enviar"}</button>
            <p id="formStatus" class="form-status" aria-live="polite">{status.message()}</p>
        </form>
    }
}
