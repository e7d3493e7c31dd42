// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Model basics.
//!
//! This minimal example builds a range slider, subscribes a logger to every event,
//! and prints what each update dispatches and how the handles settle.
//!
//! Run:
//! - `cargo run -p understory_slider_demos --example slider_basics`

use std::rc::Rc;

use understory_dispatch::EventManager;
use understory_slider::{HandleType, Model, Options, SliderEvent};

fn main() {
    let events = Rc::new(EventManager::new());
    for ev in SliderEvent::ALL {
        events.register_event(ev);
        events.add_event_listener(&ev, move || println!("    -> {ev}"));
    }

    let model = Model::with_options(
        events,
        &Options::new()
            .min(0.0)
            .max(100.0)
            .step(10.0)
            .from(20.0)
            .to(80.0)
            .range(true),
    );
    print_handles("init", &model);

    println!("== updateOptions {{ min: 50 }} ==");
    model.update_options(&Options::new().min(50.0));
    print_handles("after min", &model);

    println!("== updateHandle(94, to) ==");
    model.update_handle(94.0, HandleType::To);
    print_handles("snapped", &model);

    // Dragging `from` past `to` swaps them.
    println!("== updateHandle(95, from) ==");
    let placed = model.update_handle(95.0, HandleType::From);
    print_handles("swapped", &model);
    println!("  dragged handle is now `{placed}`");
}

fn print_handles(label: &str, model: &Model) {
    model.with_state(|s| {
        println!(
            "  {label}: from={} to={} in [{}, {}] step={}",
            s.from, s.to, s.min, s.max, s.step
        );
    });
}
