use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::utils::dom::bind_element;
use crate::utils::throttle::ClickGuard;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Please enter your email address.")]
    Empty,
    #[error("Please enter a valid email address.")]
    Invalid,
}

/// Shape check for `local@domain.tld`: ASCII only, no whitespace, one `@`,
/// and a dot in the domain with something on both sides of the last one.
pub fn validate_email(raw: &str) -> Result<String, EmailError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(EmailError::Empty);
    }
    if !email.is_ascii() || email.chars().any(|c| c.is_ascii_whitespace()) {
        return Err(EmailError::Invalid);
    }
    let (local, domain) = email.split_once('@').ok_or(EmailError::Invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(EmailError::Invalid);
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(email.to_string()),
        _ => Err(EmailError::Invalid),
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Notice {
    None,
    Error(EmailError),
    Subscribed(String),
}

/// Result of one submit, decided before the DOM is touched.
#[derive(Clone, Debug, PartialEq)]
enum Submission {
    /// Show the message, keep what was typed and return focus to the field.
    Rejected(EmailError),
    /// Show the confirmation and empty the field.
    Accepted(String),
}

impl Submission {
    /// Validates `raw`. A confirmation still waiting to hide is dropped first
    /// so its timeout cannot clear the notice this submission shows.
    fn begin<T>(raw: &str, pending_hide: &RefCell<Option<T>>) -> Self {
        pending_hide.borrow_mut().take();
        match validate_email(raw) {
            Ok(email) => Submission::Accepted(email),
            Err(err) => Submission::Rejected(err),
        }
    }

    fn notice(&self) -> Notice {
        match self {
            Submission::Rejected(err) => Notice::Error(err.clone()),
            Submission::Accepted(email) => Notice::Subscribed(email.clone()),
        }
    }

    fn clears_field(&self) -> bool {
        matches!(self, Submission::Accepted(_))
    }
}

#[derive(Properties, PartialEq)]
pub struct EmailFormProps {
    /// Distinguishes the hero form from the footer one.
    pub id: AttrValue,
}

#[function_component]
pub fn EmailForm(props: &EmailFormProps) -> Html {
    let input_ref = use_node_ref();
    let notice = use_state(|| Notice::None);
    let guard = use_memo(|_| ClickGuard::new(), ());
    let hide_timer = use_mut_ref(|| None::<Timeout>);

    let onsubmit = {
        let input_ref = input_ref.clone();
        let notice = notice.clone();
        let guard = guard.clone();
        let hide_timer = hide_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !guard.accept() {
                return;
            }
            let Some(input) = bind_element::<HtmlInputElement>(&input_ref, "email input")
                .report("Email form")
            else {
                return;
            };
            let submission = Submission::begin(&input.value(), &*hide_timer);
            notice.set(submission.notice());
            if submission.clears_field() {
                input.set_value("");
            }
            match submission {
                Submission::Rejected(_) => {
                    if let Err(e) = input.focus() {
                        log::warn!("Could not refocus email input: {:?}", e);
                    }
                }
                Submission::Accepted(email) => {
                    log::info!("Accepted subscription for {}", email);
                    let notice = notice.clone();
                    *hide_timer.borrow_mut() = Some(Timeout::new(config::SUBSCRIBE_NOTICE_MS, move || {
                        notice.set(Notice::None);
                    }));
                }
            }
        })
    };

    let input_id = format!("{}-email", props.id);
    html! {
        <form class="email-form" id={props.id.clone()} {onsubmit}>
            <h3>{"Ready to watch? Enter your email to create or restart your membership."}</h3>
            <div class="email-form-row">
                <label for={input_id.clone()} class="visually-hidden">{"Email address"}</label>
                <input
                    ref={input_ref}
                    id={input_id}
                    type="text"
                    inputmode="email"
                    placeholder="Email address"
                    autocomplete="email"
                />
                <button type="submit" class="cta-button">{"Get Started ›"}</button>
            </div>
            {
                match &*notice {
                    Notice::None => html! {},
                    Notice::Error(err) => html! {
                        <p class="form-message error" role="alert">{err.to_string()}</p>
                    },
                    Notice::Subscribed(email) => html! {
                        <p class="form-message success" role="status">
                            {format!("Thanks! We'll send updates to {}.", email)}
                        </p>
                    },
                }
            }
        </form>
    }
}
