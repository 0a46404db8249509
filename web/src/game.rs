use crate::provider::HttpWordProvider;
use crate::settings::{self, DifficultyPicker};
use crate::utils::*;
use clap::Args;
use gloo::timers::callback::Timeout;
use kelime_core as game;
use web_sys::{AbortController, HtmlInputElement};
use yew::prelude::*;

pub(crate) const fn letter_class_name(class: game::LetterClass) -> &'static str {
    use game::LetterClass::*;
    match class {
        Correct => "correct",
        Present => "present",
        Absent => "absent",
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    SelectDifficulty(game::Difficulty),
    NewWord,
    Input(String),
    Submit,
    SlowNetwork(game::LoadTicket),
    WordLoaded(
        game::LoadTicket,
        Result<game::Word, game::ProviderError>,
    ),
}

#[derive(Properties, Clone, PartialEq)]
struct GuessRowProps {
    result: game::GuessResult,
}

#[function_component(GuessRow)]
fn guess_row(props: &GuessRowProps) -> Html {
    let title = props.result.to_emoji();
    html! {
        <div class="guess" {title}>
            {
                for props.result.letters().iter().map(|scored| html! {
                    <div class={classes!("letter", letter_class_name(scored.class))}>
                        {scored.display_text()}
                    </div>
                })
            }
        </div>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Base URL of the word service
    #[arg(long)]
    #[prop_or_default]
    api: Option<String>,

    /// Start with this word length instead of the saved difficulty
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(4..=7))]
    #[prop_or_default]
    length: Option<u8>,
}

impl GameProps {
    pub(crate) fn length(&self) -> Option<u8> {
        self.length
    }
}

/// Cancels a request that is still in flight.
pub(crate) trait CancelRequest {
    fn cancel(self);
}

impl CancelRequest for AbortController {
    fn cancel(self) {
        self.abort();
    }
}

/// Timer and request handles of the word load in flight.
///
/// The timer handle is released exactly once per load: when it fires, when
/// the load settles, or when a newer load replaces it. Settling drops the
/// request unaborted; replacement and teardown abort it.
#[derive(Debug)]
pub(crate) struct LoadSlot<T, R> {
    ticket: Option<game::LoadTicket>,
    timer: Option<T>,
    request: Option<R>,
}

impl<T, R> Default for LoadSlot<T, R> {
    fn default() -> Self {
        Self {
            ticket: None,
            timer: None,
            request: None,
        }
    }
}

impl<T, R: CancelRequest> LoadSlot<T, R> {
    pub(crate) fn begin(&mut self, ticket: game::LoadTicket, timer: T, request: Option<R>) {
        self.cancel();
        self.ticket = Some(ticket);
        self.timer = Some(timer);
        self.request = request;
    }

    pub(crate) fn cancel(&mut self) {
        self.ticket = None;
        // dropping the handle clears the timeout
        self.timer = None;
        if let Some(request) = self.request.take() {
            request.cancel();
        }
    }

    pub(crate) fn notice_fired(&mut self, ticket: game::LoadTicket) {
        if self.ticket == Some(ticket) {
            self.timer = None;
        }
    }

    /// Releases the handles of `ticket`'s load. Stale tickets are ignored.
    pub(crate) fn settle(&mut self, ticket: game::LoadTicket) -> bool {
        if self.ticket != Some(ticket) {
            return false;
        }
        self.ticket = None;
        self.timer = None;
        self.request = None;
        true
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    controller: game::Controller,
    api_base: String,
    guess: String,
    input_ref: NodeRef,
    focus_input: bool,
    load: LoadSlot<Timeout, AbortController>,
}

impl GameView {
    fn initial_difficulty(props: &GameProps) -> game::Difficulty {
        props
            .length()
            .and_then(game::Difficulty::from_word_length)
            .unwrap_or_else(|| settings::Settings::local_or_default().difficulty)
    }

    /// Kicks off the fetch and the slow network timer for `ticket`.
    fn begin_load(&mut self, ctx: &Context<Self>, ticket: game::LoadTicket) {
        self.guess.clear();

        let length = self.controller.session().word_length();
        let abort = AbortController::new()
            .map_err(|err| log::warn!("word load cannot be aborted: {:?}", err))
            .ok();
        let provider = HttpWordProvider::new(self.api_base.clone())
            .with_signal(abort.as_ref().map(AbortController::signal));

        let link = ctx.link().clone();
        let timer = Timeout::new(game::SLOW_NETWORK_NOTICE_MS, move || {
            link.send_message(Msg::SlowNetwork(ticket))
        });
        self.load.begin(ticket, timer, abort);

        ctx.link().send_future(async move {
            let result = game::fetch_target(&provider, length).await;
            Msg::WordLoaded(ticket, result)
        });
    }

    fn focus(&self) {
        if let Some(input) = self.input_ref.cast::<HtmlInputElement>() {
            if let Err(err) = input.focus() {
                log::trace!("could not focus guess input: {:?}", err);
            }
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let difficulty = Self::initial_difficulty(props);
        let mut view = Self {
            controller: game::Controller::new(difficulty),
            api_base: props
                .api
                .clone()
                .unwrap_or_else(|| game::DEFAULT_API_BASE.to_string()),
            guess: String::new(),
            input_ref: NodeRef::default(),
            focus_input: false,
            load: LoadSlot::default(),
        };

        let ticket = view.controller.reset_session();
        view.begin_load(ctx, ticket);
        view
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            SelectDifficulty(difficulty) => {
                log::debug!("difficulty selected: {:?}", difficulty);
                let ticket = self.controller.select_difficulty(difficulty);
                settings::Settings { difficulty }.local_save();
                self.begin_load(ctx, ticket);
                true
            }
            NewWord => {
                let ticket = self.controller.reset_session();
                self.begin_load(ctx, ticket);
                true
            }
            Input(value) => {
                self.guess = value;
                false
            }
            Submit => {
                let before = self.controller.session().history().len();
                let updated = self.controller.submit_guess(&self.guess);
                if self.controller.session().history().len() != before {
                    self.guess.clear();
                    self.focus_input = true;
                }
                updated
            }
            SlowNetwork(ticket) => {
                self.load.notice_fired(ticket);
                self.controller.slow_network(ticket)
            }
            WordLoaded(ticket, result) => {
                self.load.settle(ticket);
                let updated = self.controller.finish_load(ticket, result);
                if updated {
                    self.focus_input = !self.controller.is_locked();
                }
                updated
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if std::mem::take(&mut self.focus_input) {
            self.focus();
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.load.cancel();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let session = self.controller.session();
        let locked = self.controller.is_locked();
        let headline = self.controller.headline().unwrap_or_default();
        let maxlength = session.word_length().to_string();
        let remaining = format!("Kalan hak: {}", session.guesses_remaining());
        let (message_class, message_text) = self
            .controller
            .message()
            .map_or(("", String::new()), |message| {
                (message.severity.class_name(), message.text.clone())
            });

        let cb_select = ctx.link().callback(SelectDifficulty);
        let cb_new_word = ctx.link().callback(|_: MouseEvent| NewWord);
        let cb_submit = ctx.link().callback(|_: MouseEvent| Submit);
        let cb_input = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Input(input.value())
        });
        let cb_keypress = ctx.link().batch_callback(|e: KeyboardEvent| {
            (e.key() == "Enter").then_some(Submit)
        });

        html! {
            <div class="kelime">
                <DifficultyPicker selected={self.controller.difficulty()} onselect={cb_select}/>
                <p class="word-length">{headline}</p>
                <div class={classes!("board", self.controller.is_loading().then_some("loading"))}>
                    {
                        for session.history().iter().map(|result| html! {
                            <GuessRow result={result.clone()}/>
                        })
                    }
                </div>
                <nav class="controls">
                    <input
                        ref={self.input_ref.clone()}
                        type="text"
                        autocomplete="off"
                        placeholder="Tahmininiz"
                        value={self.guess.clone()}
                        {maxlength}
                        disabled={locked}
                        oninput={cb_input}
                        onkeypress={cb_keypress}
                    />
                    <button onclick={cb_submit} disabled={locked}>{"Tahmin Et"}</button>
                    <button onclick={cb_new_word}>{"Yeni İsim"}</button>
                </nav>
                <p class={classes!("message", message_class)}>{message_text}</p>
                <small>{remaining}</small>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug)]
    struct CountedTimer(Rc<Cell<u32>>);

    impl Drop for CountedTimer {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[derive(Debug)]
    struct CountedRequest(Rc<Cell<u32>>);

    impl CancelRequest for CountedRequest {
        fn cancel(self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[derive(Default)]
    struct Counters {
        timer_drops: Rc<Cell<u32>>,
        cancels: Rc<Cell<u32>>,
    }

    impl Counters {
        fn handles(&self) -> (CountedTimer, Option<CountedRequest>) {
            (
                CountedTimer(self.timer_drops.clone()),
                Some(CountedRequest(self.cancels.clone())),
            )
        }
    }

    type Slot = LoadSlot<CountedTimer, CountedRequest>;

    #[test]
    fn settled_load_releases_timer_once_and_keeps_request() {
        let mut controller = game::Controller::default();
        let ticket = controller.reset_session();
        let counters = Counters::default();
        let mut slot = Slot::default();
        let (timer, request) = counters.handles();
        slot.begin(ticket, timer, request);

        assert!(slot.settle(ticket));
        assert!(!slot.settle(ticket));
        slot.notice_fired(ticket);

        assert_eq!(counters.timer_drops.get(), 1);
        assert_eq!(counters.cancels.get(), 0);
    }

    #[test]
    fn fired_notice_releases_timer_before_settle() {
        let mut controller = game::Controller::default();
        let ticket = controller.reset_session();
        let counters = Counters::default();
        let mut slot = Slot::default();
        let (timer, request) = counters.handles();
        slot.begin(ticket, timer, request);

        slot.notice_fired(ticket);
        assert_eq!(counters.timer_drops.get(), 1);

        assert!(slot.settle(ticket));
        assert_eq!(counters.timer_drops.get(), 1);
        assert_eq!(counters.cancels.get(), 0);
    }

    #[test]
    fn newer_load_cancels_previous_and_ignores_its_events() {
        let mut controller = game::Controller::default();
        let first = controller.start_session(4);
        let second = controller.start_session(6);
        let (old, new) = (Counters::default(), Counters::default());
        let mut slot = Slot::default();

        let (timer, request) = old.handles();
        slot.begin(first, timer, request);
        let (timer, request) = new.handles();
        slot.begin(second, timer, request);

        assert_eq!(old.timer_drops.get(), 1);
        assert_eq!(old.cancels.get(), 1);

        slot.notice_fired(first);
        assert!(!slot.settle(first));
        assert_eq!(new.timer_drops.get(), 0);

        assert!(slot.settle(second));
        assert_eq!(new.timer_drops.get(), 1);
        assert_eq!(new.cancels.get(), 0);
        assert_eq!(old.timer_drops.get(), 1);
        assert_eq!(old.cancels.get(), 1);
    }

    #[test]
    fn teardown_cancels_load_in_flight() {
        let mut controller = game::Controller::default();
        let ticket = controller.reset_session();
        let counters = Counters::default();
        let mut slot = Slot::default();
        let (timer, request) = counters.handles();
        slot.begin(ticket, timer, request);

        slot.cancel();
        slot.cancel();

        assert_eq!(counters.timer_drops.get(), 1);
        assert_eq!(counters.cancels.get(), 1);
        assert!(!slot.settle(ticket));
    }

    #[test]
    fn letter_classes_map_to_tile_styles() {
        use game::LetterClass::*;

        assert_eq!(letter_class_name(Correct), "correct");
        assert_eq!(letter_class_name(Present), "present");
        assert_eq!(letter_class_name(Absent), "absent");
    }

    #[test]
    fn length_override_picks_matching_difficulty() {
        let props = GameProps {
            api: None,
            length: Some(7),
        };

        assert_eq!(
            GameView::initial_difficulty(&props),
            game::Difficulty::Expert
        );
    }

    #[test]
    fn props_parse_from_hash_arguments() {
        use clap::Parser;

        #[derive(Parser)]
        struct Hash {
            #[command(flatten)]
            game: GameProps,
        }

        let hash = Hash::try_parse_from(["", "--api=http://localhost:3000", "-l", "4"]).unwrap();
        assert_eq!(hash.game.api.as_deref(), Some("http://localhost:3000"));
        assert_eq!(hash.game.length, Some(4));

        assert!(Hash::try_parse_from(["", "--length=9"]).is_err());
    }
}
