use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::utils::dom::is_activation_key;

/// Which FAQ entry is expanded, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    /// Clicking the open item closes it; clicking any other item makes it the
    /// only open one.
    pub fn activate(self, index: usize) -> Self {
        let open = match self.open {
            Some(current) if current == index => None,
            _ => Some(index),
        };
        Self { open }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static [&'static str],
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "What is Reelview?",
        answer: &[
            "Reelview is a streaming service with award-winning series, films, documentaries and more on thousands of devices.",
            "Watch as much as you want, whenever you want, without a single ad.",
        ],
    },
    FaqEntry {
        question: "How much does Reelview cost?",
        answer: &[
            "Plans start at ₹149 a month. No extra costs, no contracts.",
        ],
    },
    FaqEntry {
        question: "Where can I watch?",
        answer: &[
            "Watch anywhere, anytime. Sign in with your account on the web or on any internet-connected device with the Reelview app, including smart TVs, phones, tablets and game consoles.",
            "You can also download your favourite shows and watch them on the go.",
        ],
    },
    FaqEntry {
        question: "How do I cancel?",
        answer: &[
            "Reelview is flexible. Cancel online in two clicks; there are no cancellation fees.",
        ],
    },
    FaqEntry {
        question: "What can I watch on Reelview?",
        answer: &[
            "An extensive library of feature films, documentaries, TV shows, anime and originals. Watch as much as you want, anytime you want.",
        ],
    },
    FaqEntry {
        question: "Is Reelview good for kids?",
        answer: &[
            "The Kids profile comes with family-friendly titles and parental controls, so parents decide what children can see.",
        ],
    },
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: &'static str,
    open: bool,
    on_activate: Callback<usize>,
    children: Children,
}

#[function_component]
fn FaqItem(props: &FaqItemProps) -> Html {
    let onclick = {
        let on_activate = props.on_activate.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_activate.emit(index);
        })
    };
    let onkeydown = {
        let on_activate = props.on_activate.clone();
        let index = props.index;
        Callback::from(move |e: KeyboardEvent| {
            if is_activation_key(&e.key()) {
                e.prevent_default();
                on_activate.emit(index);
            }
        })
    };
    let answer_id = format!("faq-answer-{}", props.index);

    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))}>
            <button
                class="faq-question"
                aria-expanded={props.open.to_string()}
                aria-controls={answer_id.clone()}
                {onclick}
                {onkeydown}
            >
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div
                id={answer_id}
                class={classes!("faq-answer", props.open.then_some("open"))}
                aria-hidden={(!props.open).to_string()}
            >
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component]
pub fn Faq() -> Html {
    let state = use_state(AccordionState::default);

    let on_activate = {
        let state = state.clone();
        Callback::from(move |index: usize| state.set(state.activate(index)))
    };

    html! {
        <section class="faq-section" id="faq">
            <h2>{"Frequently Asked Questions"}</h2>
            <div class="faq-list">
                { for FAQ_ENTRIES.iter().enumerate().map(|(index, entry)| html! {
                    <FaqItem
                        key={index}
                        {index}
                        question={entry.question}
                        open={state.is_open(index)}
                        on_activate={on_activate.clone()}
                    >
                        { for entry.answer.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                    </FaqItem>
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_count(state: AccordionState) -> usize {
        (0..FAQ_ENTRIES.len()).filter(|i| state.is_open(*i)).count()
    }

    #[test]
    fn activating_a_closed_item_opens_only_that_one() {
        let state = AccordionState::default().activate(2);
        assert!(state.is_open(2));
        assert_eq!(open_count(state), 1);

        let state = state.activate(4);
        assert!(state.is_open(4));
        assert!(!state.is_open(2));
        assert_eq!(open_count(state), 1);
    }

    #[test]
    fn activating_the_open_item_closes_everything() {
        let state = AccordionState::default().activate(1).activate(1);
        assert_eq!(open_count(state), 0);
    }

    #[test]
    fn any_sequence_leaves_at_most_one_open() {
        let sequence = [0, 3, 3, 5, 1, 1, 1, 2, 0, 4, 4, 5];
        let mut state = AccordionState::default();
        for index in sequence {
            let was_open = state.is_open(index);
            state = state.activate(index);
            assert!(open_count(state) <= 1);
            assert_eq!(state.is_open(index), !was_open);
        }
    }
}
