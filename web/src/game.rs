use crate::scheduler::GlooScheduler;
use crate::utils::*;
use memorama_core as game;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// Board sizes offered by the selector.
const SIZES: [game::Coord; 4] = [2, 4, 6, 8];

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum CardMsg {
    Select(game::CardIndex),
    AssetFailed(game::Symbol),
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Card(CardMsg),
    Timer(game::TimerTask),
    Restart,
    Resize(game::Coord),
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    index: game::CardIndex,
    card: game::CardView,
    callback: Callback<CardMsg>,
}

#[function_component(CardTile)]
fn card_component(props: &CardProps) -> Html {
    use game::CardView::*;

    let CardProps {
        index,
        card,
        callback,
    } = props.clone();

    let class = classes!(
        "card",
        match card {
            Hidden => classes!(),
            Revealed(_) => classes!("flipped"),
            Matched(_) => classes!("flipped", "matched"),
        }
    );

    let onclick = {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| {
            log::trace!("card {} clicked", index);
            callback.emit(CardMsg::Select(index));
        })
    };

    let onkeydown = {
        let callback = callback.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                callback.emit(CardMsg::Select(index));
            }
        })
    };

    let face = match card.symbol() {
        Some(symbol) => {
            let onerror = {
                let callback = callback.clone();
                let symbol = symbol.clone();
                Callback::from(move |_: Event| callback.emit(CardMsg::AssetFailed(symbol.clone())))
            };
            let src = symbol.to_string();
            let alt = format!("card {}", u32::from(index) + 1);
            html! { <img {src} {alt} {onerror}/> }
        }
        None => html! { "?" },
    };

    html! {
        <div {class} tabindex="0" {onclick} {onkeydown}>{face}</div>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub size: game::Coord,
    pub seed: Option<u64>,
}

pub(crate) struct GameView {
    game: game::MemoryGame<GlooScheduler>,
    won: Option<(u32, u32)>,
    failed_assets: Vec<game::Symbol>,
}

impl GameView {
    fn handle_events(&mut self) {
        for event in self.game.drain_events() {
            match event {
                game::GameEvent::Won { moves, seconds } => {
                    log::info!("won in {} moves and {} seconds", moves, seconds);
                    self.won = Some((moves, seconds));
                }
                game::GameEvent::PairResolved {
                    first,
                    second,
                    outcome,
                } => log::debug!("pair {} / {}: {:?}", first, second, outcome),
                game::GameEvent::Tick { .. } => {}
            }
        }
    }

    fn reinitialize(&mut self, size: game::Coord) -> bool {
        match self.game.initialize(size) {
            Ok(()) => {
                self.won = None;
                true
            }
            Err(err) => {
                log::error!("could not deal a {}x{} board: {}", size, size, err);
                false
            }
        }
    }

    fn view_size_selector(&self, ctx: &Context<Self>) -> Html {
        let current = self.game.size();
        let onchange = ctx.link().callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::Resize(select.value().parse().unwrap_or(game::GameConfig::DEFAULT_SIZE))
        });

        html! {
            <select {onchange}>
                {
                    for SIZES.iter().map(|&size| html! {
                        <option value={size.to_string()} selected={size == current}>
                            {format!("{}x{}", size, size)}
                        </option>
                    })
                }
            </select>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let scheduler = GlooScheduler::new(ctx.link().callback(Msg::Timer));
        let game = game::MemoryGame::new(
            game::SymbolCatalog::default(),
            game::GameConfig::new(props.size),
            game::RandomShuffler::new(seed),
            scheduler,
        )
        .expect("default catalog always deals a clamped board");

        Self {
            game,
            won: None,
            failed_assets: Vec::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let updated = match msg {
            Card(CardMsg::Select(index)) => self.game.select_card(index).has_update(),
            Card(CardMsg::AssetFailed(symbol)) => {
                log::warn!("failed to load {}", symbol);
                record_failed_asset(&mut self.failed_assets, symbol)
            }
            Timer(task) => {
                self.game.on_timer(task);
                true
            }
            Restart => self.reinitialize(self.game.size()),
            Resize(size) => self.reinitialize(size),
        };

        self.handle_events();
        log::trace!("{} timers active", self.game.scheduler().active_timers());
        updated
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let size = self.game.size();
        let move_count = format!("Moves: {}", self.game.moves());
        let elapsed_time = format!("Time: {}", format_clock(self.game.seconds()));
        let cb_card = ctx.link().callback(Msg::Card);
        let cb_restart = ctx.link().callback(|_: MouseEvent| Msg::Restart);

        html! {
            <div class="memorama">
                <nav>
                    {self.view_size_selector(ctx)}
                    <button onclick={cb_restart.clone()}>{"Restart"}</button>
                    <aside>{move_count}</aside>
                    <aside>{elapsed_time}</aside>
                </nav>
                if let Some(notice) = failed_assets_notice(&self.failed_assets) {
                    <p class="notice">{notice}</p>
                }
                <div class="board" data-size={size.to_string()}>
                    {
                        for self.game.cards().enumerate().map(|(index, card)| {
                            // enumerate stays below total_cards, which is a CardIndex
                            let index = index as game::CardIndex;
                            let callback = cb_card.clone();
                            html! { <CardTile {index} {card} {callback}/> }
                        })
                    }
                </div>
                if let Some((moves, seconds)) = self.won {
                    <div class="win-overlay">
                        <p>{format!("Completed in {} moves and {}.", moves, format_duration(seconds))}</p>
                        <button onclick={cb_restart}>{"Play again"}</button>
                    </div>
                }
            </div>
        }
    }
}
