#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use crate::page::PageError;
use crate::scroll;
use crate::{
    ADVANCE_DELAY_MS, AnswerReport, ChatState, GameSession, OptionMark, REPLY_DELAY_MS,
    SUGGESTED_QUESTIONS, Sender, demo_stills,
};
use leptos::leptos_dom::helpers::{TimeoutHandle, set_timeout_with_handle};
use leptos::{html, *};
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};

const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("frames", "Iconic Frames"),
    ("analysis", "Shot Analysis"),
    ("about", "About"),
];

fn set_body_theme(theme: &str) {
    if let Some(document) = leptos::window().document() {
        if let Some(body) = document.body() {
            let _ = body.set_attribute("data-theme", theme);
        }
    }
}

fn require_element(id: &'static str) -> Result<Element, PageError> {
    leptos::window()
        .document()
        .and_then(|document| document.get_element_by_id(id))
        .ok_or(PageError::MissingElement(id))
}

fn smooth_scroll_to(target: &'static str) {
    match require_element(target) {
        Ok(section) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
        Err(error) => log::warn!("{error}"),
    }
}

#[component]
fn NavBar(scrolled: Signal<bool>) -> impl IntoView {
    view! {
        <nav
            id="navbar"
            class=move || {
                if scrolled.get() {
                    "navbar scrolled".to_string()
                } else {
                    "navbar".to_string()
                }
            }
        >
            <div class="nav-brand">"CineFrame"</div>
            <ul class="nav-links">
                {NAV_LINKS
                    .iter()
                    .map(|(target, label)| {
                        let target = *target;

                        view! {
                            <li>
                                <a
                                    href=format!("#{target}")
                                    on:click=move |event| {
                                        event.prevent_default();
                                        smooth_scroll_to(target);
                                    }
                                >
                                    {*label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[component]
fn AnalysisGame(session: GameSession) -> impl IntoView {
    let (session, set_session) = create_signal(session);
    let (report, set_report) = create_signal::<Option<AnswerReport>>(None);
    let pending_advance = store_value(None::<TimeoutHandle>);

    let choose_option = Callback::new(move |label: String| {
        // A new submission supersedes an advance still in flight.
        if let Some(handle) = pending_advance.get_value() {
            handle.clear();
            pending_advance.set_value(None);
        }

        let mut outcome = None;
        set_session.update(|state| outcome = Some(state.submit_answer(&label)));

        match outcome {
            Some(Ok(answer)) => set_report.set(Some(answer)),
            Some(Err(error)) => {
                log::warn!("rejected submission: {error}");
                return;
            }
            None => return,
        }

        match set_timeout_with_handle(
            move || {
                set_session.update(|state| {
                    state.advance();
                });
                set_report.set(None);
                pending_advance.set_value(None);
            },
            Duration::from_millis(ADVANCE_DELAY_MS),
        ) {
            Ok(handle) => pending_advance.set_value(Some(handle)),
            Err(_) => log::warn!("could not schedule the next still"),
        }
    });

    view! {
        <div class="game-header">
            <h2>"Test Your Eye"</h2>
            <div class="game-stats">
                <div class="stat-chip">
                    "Score: "
                    <strong id="score">{move || session.with(|state| state.score())}</strong>
                </div>
                <div class="stat-chip">
                    "Level: "
                    <strong id="level">{move || session.with(|state| state.level())}</strong>
                </div>
            </div>
        </div>
        <div class="game-board">
            <img
                id="game-image"
                class="game-image"
                src=move || session.with(|state| state.current().image.clone())
                alt="Mystery film still"
            />
            <div class="options-grid">
                {move || {
                    let marks = report.get();

                    session.with(|state| {
                        state
                            .current()
                            .options
                            .iter()
                            .enumerate()
                            .map(|(index, option)| {
                                let mark = marks
                                    .as_ref()
                                    .map(|answer| answer.marks[index])
                                    .unwrap_or(OptionMark::Neutral);
                                let class = match mark {
                                    OptionMark::Neutral => "option-btn".to_string(),
                                    OptionMark::Correct => "option-btn option-correct".to_string(),
                                    OptionMark::Incorrect => "option-btn option-wrong".to_string(),
                                };
                                let label = option.clone();
                                let choose_option = choose_option.clone();

                                view! {
                                    <button
                                        class=class
                                        data-film=option.clone()
                                        on:click=move |_| choose_option.call(label.clone())
                                    >
                                        {option.clone()}
                                    </button>
                                }
                            })
                            .collect_view()
                    })
                }}
            </div>
            <div class="tools-grid">
                {move || {
                    session.with(|state| {
                        state
                            .current()
                            .analysis
                            .slots()
                            .into_iter()
                            .map(|(label, value)| {
                                let value = value.to_string();

                                view! {
                                    <div class="tool-item">
                                        <h4>{label}</h4>
                                        <p>{value}</p>
                                    </div>
                                }
                            })
                            .collect_view()
                    })
                }}
            </div>
        </div>
    }
}

#[component]
fn ChatWidget(chat: ReadSignal<ChatState>, set_chat: WriteSignal<ChatState>) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();
    let messages_ref = create_node_ref::<html::Div>();
    let pending_reply = store_value(None::<TimeoutHandle>);

    // Keep the newest entry in view whenever the transcript grows.
    create_effect(move |_| {
        let entries = chat.with(|state| state.transcript().len());
        if entries > 0 {
            if let Some(container) = messages_ref.get() {
                container.set_scroll_top(container.scroll_height());
            }
        }
    });

    let schedule_reply = Callback::new(move |reply: &'static str| {
        // A newer submission supersedes a reply still in flight.
        if let Some(handle) = pending_reply.get_value() {
            handle.clear();
        }

        match set_timeout_with_handle(
            move || {
                set_chat.update(|state| state.push_bot_reply(reply));
                pending_reply.set_value(None);
            },
            Duration::from_millis(REPLY_DELAY_MS),
        ) {
            Ok(handle) => pending_reply.set_value(Some(handle)),
            Err(_) => log::warn!("could not schedule the chat reply"),
        }
    });

    let send_current = Callback::new(move |_: ()| {
        let Some(input) = input_ref.get_untracked() else {
            return;
        };

        let text = input.value();
        if text.trim().is_empty() {
            return;
        }

        let mut reply = None;
        set_chat.update(|state| reply = state.submit_user_message(&text));

        if let Some(reply) = reply {
            input.set_value("");
            schedule_reply.call(reply);
        }
    });

    let choose_suggestion = {
        let send_current = send_current.clone();

        Callback::new(move |question: &'static str| {
            if let Some(input) = input_ref.get_untracked() {
                input.set_value(question);
            }
            send_current.call(());
        })
    };

    let submit_on_enter = {
        let send_current = send_current.clone();

        move |event: ev::KeyboardEvent| {
            if event.key() == "Enter" {
                send_current.call(());
            }
        }
    };

    view! {
        <button
            id="chatbot-toggle"
            class=move || {
                if chat.with(|state| state.has_appeared()) {
                    "chatbot-toggle visible".to_string()
                } else {
                    "chatbot-toggle".to_string()
                }
            }
            aria-label="Open the frame guide chat"
            on:click=move |_| {
                set_chat.update(|state| {
                    state.toggle();
                })
            }
        >
            "🎬"
        </button>

        <div
            id="cinematic-chatbot"
            class=move || {
                if chat.with(|state| state.is_visible()) {
                    "chatbot active".to_string()
                } else {
                    "chatbot".to_string()
                }
            }
        >
            <div class="chatbot-header">
                <div class="chatbot-title">"Frame Guide"</div>
                <button
                    class="chatbot-close"
                    on:click=move |_| set_chat.update(|state| state.close())
                >
                    "×"
                </button>
            </div>
            <div class="chatbot-messages" node_ref=messages_ref>
                {move || {
                    chat.with(|state| {
                        state
                            .transcript()
                            .iter()
                            .map(|entry| {
                                let (row_class, avatar) = match entry.sender {
                                    Sender::Bot => ("message bot-message", "🎬"),
                                    Sender::User => ("message user-message", "You"),
                                };
                                let text = entry.text.clone();

                                view! {
                                    <div class=row_class>
                                        <div class="message-avatar">{avatar}</div>
                                        <div class="message-content">
                                            <p>{text}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    })
                }}
            </div>
            <div class="chatbot-suggestions">
                {SUGGESTED_QUESTIONS
                    .iter()
                    .map(|question| {
                        let question = *question;
                        let choose_suggestion = choose_suggestion.clone();

                        view! {
                            <button
                                class="suggestion-btn"
                                data-question=question
                                on:click=move |_| choose_suggestion.call(question)
                            >
                                {question}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="chatbot-input-row">
                <input
                    node_ref=input_ref
                    class="chatbot-input"
                    placeholder="Ask about a technique..."
                    on:keydown=submit_on_enter
                />
                <button class="chatbot-send" on:click=move |_| send_current.call(())>
                    "Send"
                </button>
            </div>
        </div>
    }
}

#[component]
fn App() -> impl IntoView {
    let (theme, _set_theme) = create_signal(String::from("dark"));
    let (scroll_y, set_scroll_y) = create_signal(0.0f64);
    let (chat, set_chat) = create_signal(ChatState::new());

    let hero_content_ref = create_node_ref::<html::Div>();
    let frames_content_ref = create_node_ref::<html::Div>();
    let analysis_content_ref = create_node_ref::<html::Div>();
    let about_ref = create_node_ref::<html::Section>();

    let (hero_faded, set_hero_faded) = create_signal(false);
    let (frames_faded, set_frames_faded) = create_signal(false);
    let (analysis_faded, set_analysis_faded) = create_signal(false);

    create_effect(move |_| set_body_theme(&theme.get()));

    window_event_listener(ev::scroll, move |_| {
        let window = leptos::window();
        let offset = window.page_y_offset().unwrap_or(0.0);
        set_scroll_y.set(offset);

        let viewport_height = window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);

        let reveal = |content_ref: NodeRef<html::Div>,
                      faded: ReadSignal<bool>,
                      set_faded: WriteSignal<bool>| {
            if faded.get_untracked() {
                return;
            }
            if let Some(content) = content_ref.get_untracked() {
                let rect = content.get_bounding_client_rect();
                if scroll::fade_in_ready(rect.top(), rect.height(), viewport_height) {
                    set_faded.set(true);
                }
            }
        };

        reveal(hero_content_ref, hero_faded, set_hero_faded);
        reveal(frames_content_ref, frames_faded, set_frames_faded);
        reveal(analysis_content_ref, analysis_faded, set_analysis_faded);

        if !chat.with_untracked(|state| state.has_appeared()) {
            if let Some(section) = about_ref.get_untracked() {
                let top = section.get_bounding_client_rect().top();
                if scroll::section_revealed(top, viewport_height) {
                    set_chat.update(|state| {
                        state.evaluate_scroll_trigger(top, viewport_height);
                    });
                }
            }
        }
    });

    let game_view = match GameSession::new(demo_stills()) {
        Ok(session) => view! { <AnalysisGame session=session /> }.into_view(),
        Err(error) => {
            log::error!("still deck rejected: {error}");

            view! {
                <div class="error-card">
                    <p class="eyebrow">"Game unavailable"</p>
                    <p class="error-body">{error.to_string()}</p>
                </div>
            }
            .into_view()
        }
    };

    view! {
        <NavBar scrolled=Signal::derive(move || scroll::navbar_scrolled(scroll_y.get())) />

        <section id="home" class="parallax-section">
            <div
                class="parallax-bg"
                style=move || {
                    format!("transform: translateY({:.2}px);", scroll::parallax_offset(scroll_y.get()))
                }
            ></div>
            <div
                class="parallax-content"
                class=("fade-in", move || hero_faded.get())
                node_ref=hero_content_ref
            >
                <h1>"CineFrame"</h1>
                <p class="lede">
                    "Every frame tells a story. Learn to read the ones that changed cinema."
                </p>
            </div>
        </section>

        <section id="frames" class="frames-section">
            <div
                class="frames-content"
                class=("fade-in", move || frames_faded.get())
                node_ref=frames_content_ref
            >
                <h2>"Iconic Frames"</h2>
                <p>
                    "From the diner at dawn to the corridor that never ends, a handful of shots define how we remember a film. Scroll on and see how many you can place."
                </p>
            </div>
        </section>

        <section id="analysis" class="analysis-section">
            <div
                class="analysis-content"
                class=("fade-in", move || analysis_faded.get())
                node_ref=analysis_content_ref
            >
                {game_view}
            </div>
        </section>

        <section id="about" class="about-section" node_ref=about_ref>
            <h2>"About This Page"</h2>
            <p>
                "CineFrame pairs still-frame trivia with quick shot analysis so the techniques stick. No sign-up, no tracking, just frames."
            </p>
        </section>

        <ChatWidget chat=chat set_chat=set_chat />
    }
}

/// Mounts the full page. Called from the binary's wasm entry point.
pub fn mount_page() {
    mount_to_body(|| view! { <App /> });
}
