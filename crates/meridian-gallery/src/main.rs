//! Headless gallery: builds a sample screen, plays a scripted pointer
//! session against it and logs what each frame recorded.
//!
//! ```text
//! meridian-gallery [light|dark] [shape-style] [shape-family]
//! ```

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use meridian_engine::logging::{LoggingConfig, init_logging};
use meridian_engine::scene::{DrawCmd, DrawList};
use meridian_engine::time::FrameClock;
use meridian_ui::prelude::*;

const VIEWPORT: Vec2 = Vec2::new(640.0, 400.0);
const MAX_SETTLE_FRAMES: usize = 240;

struct Options {
    theme: Theme,
    style: ShapeStyle,
    family: ShapeFamily,
}

fn parse_args() -> Result<Options> {
    let mut args = std::env::args().skip(1);
    let theme = match args.next().as_deref() {
        None | Some("light") => Theme::light(),
        Some("dark") => Theme::dark(),
        Some(other) => anyhow::bail!("unknown theme {other:?} (expected light or dark)"),
    };
    let style = match args.next() {
        Some(s) => s.parse::<ShapeStyle>().context("parsing shape style")?,
        None => ShapeStyle::Medium,
    };
    let family = match args.next() {
        Some(s) => s.parse::<ShapeFamily>().context("parsing shape family")?,
        None => ShapeFamily::Rounded,
    };
    Ok(Options { theme, style, family })
}

fn build(opts: &Options, clicks: &Rc<Cell<u32>>) -> Element {
    let shape = ShapeConfig::new(opts.style).family(opts.family);
    let counter = clicks.clone();

    let actions = SpacedPanel::horizontal()
        .spacing(8.0)
        .child(Button::filled(SizedBox::new(64.0, 20.0)).shape(shape).on_click(move || {
            counter.set(counter.get() + 1);
            log::info!("filled button clicked");
        }))
        .child(Button::tonal(SizedBox::new(64.0, 20.0)).shape(shape))
        .child(SizedBox::new(0.0, 1.0).stretch(Stretch::HORIZONTAL))
        .child(Button::outlined(SizedBox::new(64.0, 20.0)).shape(shape))
        .child(Button::text(SizedBox::new(48.0, 20.0)));

    let chips = WrapPanel::new()
        .spacing(8.0, 8.0)
        .alignment(HorizontalAlignment::Left)
        .children((0..7).map(|i| {
            Card::outlined(SizedBox::new(40.0 + 12.0 * i as f32, 16.0))
                .padding(Edges::symmetric(6.0, 12.0))
                .shape(ShapeConfig::new(ShapeStyle::Small).family(opts.family))
        }));

    let segmented = SpacedPanel::horizontal()
        .join_borders(1.0)
        .children((0..3).map(|_| Surface::new(SizedBox::new(72.0, 32.0)).border(Border::new(1.0, Color::from_rgb_hex(0x79747e)))));

    let content = SpacedPanel::vertical()
        .spacing(16.0)
        .padding(Edges::all(24.0))
        .child(actions.stretch(Stretch::HORIZONTAL))
        .child(Card::elevated(chips).shape(shape).stretch(Stretch::HORIZONTAL))
        .child(segmented)
        .child(Switch::new().on_change(|on| log::info!("switch -> {on}")));

    SpacedPanel::horizontal()
        .child(
            NavigationRail::new((0..4).map(|_| SizedBox::new(24.0, 24.0)), 0)
                .on_select(|i| log::info!("rail destination {i}"))
                .stretch(Stretch::VERTICAL),
        )
        .child(content.stretch(Stretch::BOTH))
        .into()
}

fn summarize(frame: u64, list: &DrawList) {
    let (mut fills, mut strokes, mut circles, mut clipped) = (0, 0, 0, 0);
    for item in list.items() {
        match item.cmd {
            DrawCmd::FillPath(_) => fills += 1,
            DrawCmd::StrokePath(_) => strokes += 1,
            DrawCmd::Circle(_) => circles += 1,
        }
        if item.clip.is_some() {
            clipped += 1;
        }
    }
    log::info!("frame {frame}: {fills} fills, {strokes} strokes, {circles} circles ({clipped} clipped)");
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    let opts = parse_args()?;

    let clicks = Rc::new(Cell::new(0));
    let mut root = build(&opts, &clicks);
    let mut scene = UiScene::new(opts.theme);
    let mut clock = FrameClock::fixed(Duration::from_millis(16));

    // First frame lays everything out so the script can aim at real rects.
    let first = clock.tick();
    summarize(first.frame_index, scene.frame(&mut root, VIEWPORT, &UiInput::default(), first.dt));

    let target = Vec2::new(80.0 + 24.0 + 40.0, 24.0 + 20.0);
    let script = [
        UiInput { pointer_pos: Some(target), pointer_down: false },
        UiInput { pointer_pos: Some(target), pointer_down: true },
        UiInput { pointer_pos: Some(target), pointer_down: true },
        UiInput { pointer_pos: Some(target), pointer_down: false },
        UiInput { pointer_pos: Some(Vec2::new(40.0, 92.0)), pointer_down: true },
        UiInput { pointer_pos: Some(Vec2::new(40.0, 92.0)), pointer_down: false },
        UiInput::default(),
    ];
    for input in &script {
        let t = clock.tick();
        summarize(t.frame_index, scene.frame(&mut root, VIEWPORT, input, t.dt));
    }

    let mut settle = 0;
    while scene.needs_redraw() {
        settle += 1;
        if settle > MAX_SETTLE_FRAMES {
            anyhow::bail!("animations still running after {MAX_SETTLE_FRAMES} frames");
        }
        let t = clock.tick();
        scene.frame(&mut root, VIEWPORT, &UiInput::default(), t.dt);
    }
    summarize(clock.tick().frame_index, scene.draw_list());

    let (hits, misses) = scene.path_cache_stats();
    log::info!("settled after {settle} frames; {} clicks; path cache {hits} hits / {misses} misses", clicks.get());
    Ok(())
}
