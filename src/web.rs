use crate::{
    Action, CONFIG_GLOBAL, CategoryFilter, DatasetError, ElementCell, ElementTable, ExplorerConfig,
    FootnoteMarker, ModalId, PLACEHOLDER_CLASS, QuizSettings, Session, SlotContent,
    builtin_table, filter::ALL_CATEGORIES, logging,
};
use gloo_net::http::Request;
use js_sys::Reflect;
use leptos::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

type SessionSignal = RwSignal<Option<Session>>;

/// JSON text of a page global, or `None` when it is unset.
///
/// Only properties of `globalThis` are visible here: the page has to use `var` or
/// assign to `window.<name>`, since `const`/`let` bindings are not global properties.
fn global_json(name: &str) -> Option<String> {
    let value = Reflect::get(&js_sys::global(), &JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }

    js_sys::JSON::stringify(&value).ok().map(String::from)
}

/// Reads the dataset from a page global, the way the legacy page shipped it.
fn dataset_from_global(name: &str) -> Option<Result<ElementTable, DatasetError>> {
    global_json(name).map(|json| ElementTable::from_json_str(&json))
}

async fn fetch_dataset(url: &str) -> Result<ElementTable, DatasetError> {
    let fetch_error = |message: String| DatasetError::Fetch {
        url: url.to_string(),
        message,
    };

    let response = Request::get(url)
        .send()
        .await
        .map_err(|error| fetch_error(error.to_string()))?;

    if !response.ok() {
        return Err(fetch_error(format!("HTTP {}", response.status())));
    }

    let body = response
        .text()
        .await
        .map_err(|error| fetch_error(error.to_string()))?;

    ElementTable::from_json_str(&body)
}

async fn load_dataset(config: &ExplorerConfig) -> Result<ElementTable, DatasetError> {
    if let Some(result) = dataset_from_global(&config.dataset_global) {
        log::info!("using dataset from page global `{}`", config.dataset_global);
        return result;
    }

    log::info!(
        "page global `{}` not set, fetching {}",
        config.dataset_global,
        config.dataset_url
    );
    fetch_dataset(&config.dataset_url).await
}

fn alert(message: &str) {
    let _ = leptos::window().alert_with_message(message);
}

fn category_label(token: &str) -> String {
    token.replace('-', " ")
}

#[component]
fn SearchBar(dispatch: Callback<Action>) -> impl IntoView {
    view! {
        <input
            id="elementSearch"
            type="search"
            class="search-input"
            placeholder="Search by name, symbol or number"
            on:input=move |ev| dispatch.call(Action::Search(event_target_value(&ev)))
        />
    }
}

#[component]
fn CategoryBar(session: SessionSignal, dispatch: Callback<Action>) -> impl IntoView {
    let categories = create_memo(move |_| {
        session.with(|current| {
            current
                .as_ref()
                .map(|state| state.categories().into_iter().collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });

    let is_active = move |token: &str| {
        session.with(|current| {
            current
                .as_ref()
                .map(|state| state.filter().category().token() == token)
                .unwrap_or(false)
        })
    };

    view! {
        <nav class="category-bar">
            {move || {
                std::iter::once(ALL_CATEGORIES.to_string())
                    .chain(categories.get())
                    .map(|token| {
                        let filter = CategoryFilter::from_token(&token);
                        let label = category_label(&token);

                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if is_active(&token) {
                                        "category-btn active"
                                    } else {
                                        "category-btn"
                                    }
                                }
                                on:click=move |_| dispatch.call(Action::FilterCategory(filter.clone()))
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

#[component]
fn ElementCellView(
    cell: ElementCell,
    session: SessionSignal,
    dispatch: Callback<Action>,
) -> impl IntoView {
    let class_name = cell.class_name();
    let symbol_class = cell.symbol_class();
    let action = cell.action.clone();
    let category = cell.category.clone();
    let number = cell.number;
    let symbol = cell.symbol.clone();
    let name = cell.name.clone();

    let classes = move || {
        let hidden = session.with(|current| {
            current
                .as_ref()
                .map(|state| !state.is_visible(&cell))
                .unwrap_or(false)
        });

        if hidden {
            format!("{} hidden-element", class_name)
        } else {
            class_name.clone()
        }
    };

    view! {
        <div
            class=classes
            data-category=category
            on:click=move |_| dispatch.call(action.clone())
        >
            <span class="text-[9px] w-full text-left opacity-80 font-mono">{number}</span>
            <span class=symbol_class>{symbol}</span>
            <span class="text-[8px] uppercase font-bold truncate w-full">{name}</span>
        </div>
    }
}

#[component]
fn PlaceholderView(marker: Option<FootnoteMarker>) -> impl IntoView {
    view! { <div class=PLACEHOLDER_CLASS>{marker.map(FootnoteMarker::symbol)}</div> }
}

#[component]
fn PeriodicGrid(session: SessionSignal, dispatch: Callback<Action>) -> impl IntoView {
    let slots = create_memo(move |_| {
        session.with(|current| {
            current
                .as_ref()
                .map(|state| state.grid().to_vec())
                .unwrap_or_default()
        })
    });

    view! {
        <div id="periodic-table" class="periodic-grid">
            {move || {
                slots
                    .get()
                    .into_iter()
                    .map(|slot| match slot.content {
                        SlotContent::Element(cell) => {
                            view! { <ElementCellView cell=cell session=session dispatch=dispatch /> }
                                .into_view()
                        }
                        SlotContent::Placeholder(marker) => {
                            view! { <PlaceholderView marker=marker /> }.into_view()
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

fn modal_class(session: SessionSignal, id: ModalId) -> String {
    let visibility = session.with(|current| {
        current
            .as_ref()
            .map(|state| state.modals().visibility(id))
            .unwrap_or_default()
    });

    format!("modal-backdrop {}", visibility.class())
}

#[component]
fn DetailModal(session: SessionSignal, dispatch: Callback<Action>) -> impl IntoView {
    let detail = move || session.with(|current| current.as_ref().and_then(|state| state.detail().cloned()));

    view! {
        <div
            id={ModalId::ElementDetail.dom_id()}
            class=move || modal_class(session, ModalId::ElementDetail)
        >
            <div id={ModalId::ElementDetail.content_id()} class="modal-panel">
                {move || {
                    detail()
                        .map(|detail| {
                            let attribution = detail.attribution();
                            view! {
                                <div class="modal-header">
                                    <div>
                                        <h2 class="text-4xl font-black text-white">{detail.name}</h2>
                                        <p class="text-blue-400 font-bold uppercase tracking-widest text-sm">
                                            {detail.category}
                                        </p>
                                    </div>
                                    <button
                                        type="button"
                                        class="modal-close"
                                        on:click=move |_| dispatch.call(Action::CloseModal(ModalId::ElementDetail))
                                    >
                                        "×"
                                    </button>
                                </div>
                                <div class="detail-grid">
                                    <div class="detail-tile">
                                        <p class="detail-label">"Atomic Mass"</p>
                                        <p class="text-lg font-mono text-white">{detail.mass}</p>
                                    </div>
                                    <div class="detail-tile">
                                        <p class="detail-label">"State at STP"</p>
                                        <p class="text-lg text-white">{detail.state}</p>
                                    </div>
                                    <div class="detail-tile detail-wide">
                                        <p class="detail-label">"Electron Configuration"</p>
                                        <p class="text-md font-mono text-blue-300">{detail.electron}</p>
                                    </div>
                                </div>
                                <p class="detail-attribution">{attribution}</p>
                            }
                        })
                }}
            </div>
        </div>
    }
}

#[component]
fn QuizModal(session: SessionSignal, dispatch: Callback<Action>) -> impl IntoView {
    let question = move || session.with(|current| current.as_ref().and_then(|state| state.question().cloned()));

    view! {
        <div id={ModalId::Quiz.dom_id()} class=move || modal_class(session, ModalId::Quiz)>
            <div id={ModalId::Quiz.content_id()} class="modal-panel">
                <div class="modal-header">
                    <p class="eyebrow">"Quiz"</p>
                    <button
                        type="button"
                        class="modal-close"
                        on:click=move |_| dispatch.call(Action::CloseModal(ModalId::Quiz))
                    >
                        "×"
                    </button>
                </div>
                {move || {
                    question()
                        .map(|question| {
                            view! {
                                <h3 class="quiz-prompt">
                                    "Which element has the symbol "
                                    <span class="quiz-symbol">{question.symbol.clone()}</span>
                                    "?"
                                </h3>
                                <div class="quiz-options">
                                    {question
                                        .options
                                        .into_iter()
                                        .map(|option| {
                                            let label = option.clone();
                                            view! {
                                                <button
                                                    type="button"
                                                    class="quiz-option"
                                                    on:click=move |_| dispatch.call(Action::Answer(label.clone()))
                                                >
                                                    {option}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}

#[component]
fn App(config: ExplorerConfig) -> impl IntoView {
    let session: SessionSignal = create_rw_signal(None);
    let (error, set_error) = create_signal::<Option<String>>(None);
    let settings = QuizSettings {
        option_count: config.option_count,
        max_draws: config.max_distractor_draws,
    };

    spawn_local(async move {
        let table = match load_dataset(&config).await {
            Ok(table) => table,
            Err(load_error) => {
                log::warn!("{load_error}; falling back to the bundled dataset");
                set_error.set(Some(load_error.to_string()));

                match builtin_table() {
                    Ok(table) => table,
                    Err(builtin_error) => {
                        log::error!("bundled dataset unusable: {builtin_error}");
                        set_error.set(Some(builtin_error.to_string()));
                        return;
                    }
                }
            }
        };

        log::info!("rendering periodic table with {} elements", table.len());
        session.set(Some(Session::new(table, settings)));
    });

    let dispatch = Callback::new(move |action: Action| {
        let mut notice = None;
        let mut failure = None;

        session.update(|current| {
            if let Some(state) = current.as_mut() {
                if let Err(dispatch_error) = state.dispatch(action) {
                    failure = Some(dispatch_error.to_string());
                }
                notice = state.take_notice();
            }
        });

        if let Some(message) = failure {
            log::error!("{message}");
            set_error.set(Some(message));
        }
        if let Some(notice) = notice {
            alert(&notice.message);
        }
    });

    view! {
        <main class="page">
            <header class="page-header">
                <div>
                    <p class="eyebrow">"Periodic Table Explorer"</p>
                    <h1 class="headline">"The Elements"</h1>
                </div>
                <div class="header-actions">
                    <SearchBar dispatch=dispatch />
                    <button
                        class="primary"
                        type="button"
                        on:click=move |_| dispatch.call(Action::StartQuiz)
                    >
                        "Quiz me"
                    </button>
                </div>
            </header>

            <CategoryBar session=session dispatch=dispatch />

            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <section class="error-card">
                                <p class="eyebrow">"Dataset problem"</p>
                                <p class="error-body">{message}</p>
                            </section>
                        }
                    })
            }}

            <PeriodicGrid session=session dispatch=dispatch />
            <DetailModal session=session dispatch=dispatch />
            <QuizModal session=session dispatch=dispatch />
        </main>
    }
}

/// Mounts the explorer into the page body.
pub fn start() {
    console_error_panic_hook::set_once();

    let overrides = global_json(CONFIG_GLOBAL);
    let (config, rejected) = match ExplorerConfig::from_overrides(overrides.as_deref()) {
        Ok(config) => (config, None),
        Err(error) => (ExplorerConfig::default(), Some(error)),
    };
    logging::init(config.level_filter());

    if let Some(error) = rejected {
        log::warn!("ignoring `{CONFIG_GLOBAL}`: {error}; using defaults");
    }

    mount_to_body(move || view! { <App config=config /> });
}
