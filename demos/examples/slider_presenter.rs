// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presenter with a text view.
//!
//! Renders a slider as one line of ASCII: the scale, the progress bar, and both handles.
//! Every redraw comes from a model event routed through the presenter.
//!
//! Run:
//! - `cargo run -p understory_slider_demos --example slider_presenter`

use std::cell::Cell;
use std::rc::Rc;

use understory_slider::{
    HandleType, Options, Presenter, ScaleOptions, SegmentKind, SliderEvent, SliderView, State,
};

const WIDTH: usize = 41;

#[derive(Default)]
struct TextView {
    clicks: Cell<bool>,
}

impl TextView {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "t is clamped to [0, 1] so the column fits the track."
    )]
    fn column(state: &State, value: f64) -> usize {
        let t = (value - state.min) / (state.max - state.min);
        (t.clamp(0.0, 1.0) * (WIDTH - 1) as f64).round() as usize
    }
}

impl SliderView for TextView {
    fn update_slider(&self, state: &State) {
        let mut track = vec!['-'; WIDTH];
        if state.progress_bar {
            let (lo, hi) = if state.range {
                (state.from, state.to)
            } else {
                (state.min, state.from)
            };
            for cell in &mut track[Self::column(state, lo)..=Self::column(state, hi)] {
                *cell = '=';
            }
        }
        track[Self::column(state, state.from)] = 'O';
        if state.range {
            track[Self::column(state, state.to)] = 'O';
        }
        let line: String = track.into_iter().collect();
        let clicks = if self.clicks.get() { "" } else { " (clicks off)" };
        println!("  [{line}] {} .. {}{clicks}", state.from, state.to);
    }

    fn update_scale(&self, state: &State) {
        let Some(scale) = &state.scale else {
            println!("  scale off");
            return;
        };
        let mut ticks = vec![' '; WIDTH];
        for segment in scale.visible_segments() {
            ticks[Self::column(state, segment.value)] = match segment.kind {
                SegmentKind::Number => '|',
                SegmentKind::Line => '\'',
            };
        }
        let ticks: String = ticks.into_iter().collect();
        println!("   {ticks}  ({} numbers)", scale.number_count());
    }

    fn set_click_enabled(&self, enabled: bool) {
        self.clicks.set(enabled);
    }

    fn swap_handles(&self) {
        println!("  handles swapped");
    }
}

fn main() {
    let view = Rc::new(TextView::default());
    view.clicks.set(true);
    let presenter = Presenter::new(
        view,
        &Options::new()
            .max(40.0)
            .step(5.0)
            .range(true)
            .from(10.0)
            .to(25.0),
    );

    println!("== enable scale ==");
    presenter.update_options(&Options::new().scale(Some(ScaleOptions::new().density(5.0))));

    println!("== drag from -> 33 ==");
    let held = presenter.drag_handle(33.0, HandleType::From);
    println!("  now dragging `{held}`");

    println!("== click at 10% ==");
    presenter.click_track(10.0);

    println!("== disable clicks, hide progress bar ==");
    presenter.notify(SliderEvent::SliderClickDisable);
    presenter.update_options(&Options::new().progress_bar(false));
}
