mod host;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use swipedeck_ui::prelude::*;
use swipedeck_ui::{DeckGesture, Point, PointerEvent};

use host::Host;

const DEFAULT_SCREEN: ScreenMetrics = ScreenMetrics::new(400.0, 800.0);
const DRAG_STEPS: usize = 8;

#[derive(Debug, Clone)]
struct Profile {
    id: u32,
    name: &'static str,
}

impl DeckItem for Profile {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

fn profiles() -> Vec<Profile> {
    ["Ada", "Grace", "Linus", "Barbara", "Ken"]
        .into_iter()
        .zip(1..)
        .map(|(name, id)| Profile { id, name })
        .collect()
}

/// One scripted interaction with the deck.
#[derive(Debug, Clone, Copy)]
enum Step {
    Drag(f32, f32),
    Force(SwipeDirection),
    Reload,
}

const SCRIPT: &[Step] = &[
    Step::Drag(160.0, 30.0),
    Step::Drag(-60.0, 10.0),
    Step::Drag(-220.0, -15.0),
    Step::Force(SwipeDirection::Right),
    Step::Drag(90.0, 0.0),
    Step::Force(SwipeDirection::Left),
    Step::Drag(300.0, 0.0),
    Step::Reload,
    Step::Drag(-180.0, 0.0),
];

fn screen_metrics() -> Result<ScreenMetrics> {
    let read = |key: &str, default: f32| -> Result<f32> {
        match std::env::var(key) {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("{key} must be a number, got {raw:?}")),
            Err(_) => Ok(default),
        }
    };
    Ok(ScreenMetrics::new(
        read("DECK_SCREEN_WIDTH", DEFAULT_SCREEN.width)?,
        read("DECK_SCREEN_HEIGHT", DEFAULT_SCREEN.height)?,
    ))
}

/// Feeds a pointer drag of `delta` from the middle of the screen.
fn drag<T, C>(
    host: &mut Host,
    deck: &Deck<T, C>,
    delta: Point,
) -> Result<Option<DeckGesture>, DeckError>
where
    T: DeckItem + 'static,
    C: DeckContent<T> + 'static,
{
    let metrics = deck.metrics();
    let from = Point::new(metrics.width / 2.0, metrics.height / 2.0);
    deck.handle_pointer_event(&PointerEvent::down(1, from).at(host.uptime_millis()))?;
    for step in 1..=DRAG_STEPS {
        let position = from + delta * (step as f32 / DRAG_STEPS as f32);
        deck.handle_pointer_event(&PointerEvent::moved(1, position).at(host.uptime_millis()))?;
        host.frame();
    }
    deck.handle_pointer_event(&PointerEvent::up(1, from + delta).at(host.uptime_millis()))
}

fn print_frame<T, C>(deck: &Deck<T, C>)
where
    T: DeckItem + 'static,
    C: DeckContent<T, View = String> + 'static,
{
    let frame = deck.render();
    if let Some(transition) = frame.layout_transition {
        log::debug!("layout transition requested: {transition:?}");
    }
    if let Some(empty) = frame.empty_view() {
        println!("  {empty}");
        return;
    }
    for card in frame.cards() {
        println!(
            "  {:<14} at y {:>5.1}  offset ({:>6.1}, {:>5.1})  rotation {:>6.1}°",
            card.content,
            card.origin.y,
            card.layer.translation_x,
            card.layer.translation_y,
            card.layer.rotation_z,
        );
    }
}

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let metrics = screen_metrics()?;
    println!("=== SwipeDeck Demo ===");
    println!(
        "Screen {}x{}, swipes commit past {}px",
        metrics.width,
        metrics.height,
        metrics.width * DeckConfig::default().swipe_threshold_fraction
    );
    println!();

    let liked = Rc::new(RefCell::new(Vec::new()));
    let passed = Rc::new(RefCell::new(Vec::new()));
    let content = DeckCallbacks::new(
        |profile: &Profile| format!("#{} {}", profile.id, profile.name),
        || "No more profiles".to_string(),
    )
    .on_swipe_right({
        let liked = Rc::clone(&liked);
        move |profile: &Profile| {
            log::info!("liked {}", profile.name);
            liked.borrow_mut().push(profile.name);
        }
    })
    .on_swipe_left({
        let passed = Rc::clone(&passed);
        move |profile: &Profile| {
            log::info!("passed on {}", profile.name);
            passed.borrow_mut().push(profile.name);
        }
    });

    let mut host = Host::new();
    let deck = Deck::with_defaults(profiles(), content, metrics, host.runtime().handle())
        .context("failed to create the deck")?;
    print_frame(&deck);

    for step in SCRIPT {
        println!();
        println!("> {step:?}");
        let outcome = match *step {
            Step::Drag(dx, dy) => drag(&mut host, &deck, Point::new(dx, dy)).map(|gesture| {
                if let Some(DeckGesture::Released(decision)) = gesture {
                    println!("  released: {decision:?}");
                }
            }),
            Step::Force(direction) => deck.force_swipe(direction),
            Step::Reload => {
                deck.set_data(profiles());
                Ok(())
            }
        };
        if let Err(err) = outcome {
            println!("  rejected: {err}");
        }
        let frames = host.settle();
        log::debug!("settled after {frames} frames");
        print_frame(&deck);
    }

    println!();
    println!("Liked:     {:?}", liked.borrow());
    println!("Passed on: {:?}", passed.borrow());
    println!("Frames rendered: {}", host.frames());
    Ok(())
}
